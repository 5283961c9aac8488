//! Per-context ownership of the binding table and GPU resource caches.
//!
//! A [`Context`] is built once the windowing layer has a live rendering
//! context and can hand over its proc-address source. Everything resolved or
//! created through it is scoped to that context: dropping the `Context`
//! tears down the cached GPU resources, and a recreated rendering context
//! needs a fresh `Context` with a fresh loader.

use crate::error::{GlError, TextureError};
use crate::gl::{self, GlFunctions, ProcLoader};
use crate::resources::texture::{Texture, TextureCache};

pub struct Context {
    gl: GlFunctions,
    textures: TextureCache,
}

impl Context {
    /// Resolves the full binding table against the current rendering context
    /// and logs which driver answered.
    pub fn new(loader: ProcLoader) -> Self {
        let mut gl = GlFunctions::new(loader);
        gl.initialize_all_functions();

        for (label, name) in [
            ("vendor", gl::GL_VENDOR),
            ("renderer", gl::GL_RENDERER),
            ("version", gl::GL_VERSION),
        ] {
            if let Ok(Some(value)) = gl.get_string(name) {
                log::info!(target: "opengl", "GL {label}: {value}");
            }
        }

        Self {
            gl,
            textures: TextureCache::new(),
        }
    }

    pub fn gl(&self) -> &GlFunctions {
        &self.gl
    }

    /// Mutable access to the binding table, e.g. to re-resolve a single
    /// function after a driver update notification.
    pub fn gl_mut(&mut self) -> &mut GlFunctions {
        &mut self.gl
    }

    /// See [`TextureCache::create_texture`].
    pub fn create_texture(&mut self, name: &str, path: &str) -> Result<&Texture, TextureError> {
        self.textures.create_texture(&self.gl, name, path)
    }

    /// Looks up a cached texture by its logical name.
    pub fn texture(&self, name: &str) -> Option<&Texture> {
        self.textures.get(name)
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn set_viewport(&self, width: u32, height: u32) -> Result<(), GlError> {
        self.gl.viewport(0, 0, width as gl::GLsizei, height as gl::GLsizei)
    }

    /// Clears color and depth for a new frame.
    pub fn begin_frame(&self, r: f32, g: f32, b: f32, a: f32) -> Result<(), GlError> {
        self.gl.clear_color(r, g, b, a)?;
        self.gl.clear(gl::GL_COLOR_BUFFER_BIT | gl::GL_DEPTH_BUFFER_BIT)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.textures.destroy_all(&self.gl);
    }
}

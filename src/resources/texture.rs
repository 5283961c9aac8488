//! Texture loading and the owning GPU texture cache.
//!
//! [`TextureCache`] turns a `(name, path)` pair into a GPU-resident texture
//! exactly once per logical identity. Validation failures are fatal by
//! policy (see [`crate::error`]); duplicate names and duplicate paths are not
//! errors and resolve to the already-cached entry.

use std::collections::HashMap;
use std::path::Path;

use crate::error::TextureError;
use crate::gl::{self, GlFunctions};

/// File extensions accepted for texture sources, matched literally.
const VALID_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A GPU-resident 2D texture decoded from an image file.
///
/// Owned exclusively by [`TextureCache`]; everything else works with
/// `&Texture` views that stay valid while the cache (and the rendering
/// context behind it) is alive.
#[derive(Debug)]
pub struct Texture {
    id: gl::GLuint,
    path: String,
}

impl Texture {
    /// The GPU texture object handle. Nonzero for every cached texture.
    pub fn id(&self) -> gl::GLuint {
        self.id
    }

    /// The source path this texture was decoded from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Owning store of GPU textures keyed by logical name, with path-based
/// de-duplication.
#[derive(Debug, Default)]
pub struct TextureCache {
    created: HashMap<String, Texture>,
    // Names in insertion order, for iteration such as bulk teardown.
    runtime: Vec<String>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    /// Looks up a texture by its logical name.
    pub fn get(&self, name: &str) -> Option<&Texture> {
        self.created.get(name)
    }

    /// Iterates cached textures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Texture> {
        self.runtime.iter().filter_map(|name| self.created.get(name))
    }

    /// Loads the image at `path`, uploads it to the GPU and caches it under
    /// `name`.
    ///
    /// Validation runs strictly in order: non-empty name, non-empty path,
    /// existing file, extension present, extension supported. Any failure is
    /// returned as the matching [`TextureError`] before anything touches the
    /// GPU. A `name` already in the cache, or a `path` already loaded under
    /// any name, short-circuits to the existing entry.
    ///
    /// The image is decoded with a vertical flip and uploaded as RGBA8 with
    /// repeat wrapping and linear filtering on both axes.
    pub fn create_texture<'a>(
        &'a mut self,
        gl: &GlFunctions,
        name: &str,
        path: &str,
    ) -> Result<&'a Texture, TextureError> {
        validate(name, path)?;

        if self.created.contains_key(name) {
            log::error!(target: "texture", "Texture '{name}' already exists!");
            return Ok(&self.created[name]);
        }
        if let Some(existing) = self.name_for_path(path) {
            log::error!(
                target: "texture",
                "Texture '{name}' with path '{}' has already been loaded!",
                file_name_of(path)
            );
            return Ok(&self.created[&existing]);
        }

        log::info!(target: "texture", "Loading texture '{name}'.");

        let image = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_string(),
            source,
        })?;
        let pixels = image.flipv().to_rgba8();
        let (width, height) = pixels.dimensions();

        let id = gl.gen_texture()?;
        gl.bind_texture(gl::GL_TEXTURE_2D, id)?;
        gl.tex_parameter_i(gl::GL_TEXTURE_2D, gl::GL_TEXTURE_WRAP_S, gl::GL_REPEAT as gl::GLint)?;
        gl.tex_parameter_i(gl::GL_TEXTURE_2D, gl::GL_TEXTURE_WRAP_T, gl::GL_REPEAT as gl::GLint)?;
        gl.tex_parameter_i(gl::GL_TEXTURE_2D, gl::GL_TEXTURE_MIN_FILTER, gl::GL_LINEAR as gl::GLint)?;
        gl.tex_parameter_i(gl::GL_TEXTURE_2D, gl::GL_TEXTURE_MAG_FILTER, gl::GL_LINEAR as gl::GLint)?;
        gl.tex_image_2d(
            gl::GL_TEXTURE_2D,
            0,
            gl::GL_RGBA as gl::GLint,
            width as gl::GLsizei,
            height as gl::GLsizei,
            gl::GL_RGBA,
            gl::GL_UNSIGNED_BYTE,
            &pixels,
        )?;

        log::info!(target: "texture", "Loaded texture '{path}'!");

        self.created.insert(
            name.to_string(),
            Texture {
                id,
                path: path.to_string(),
            },
        );
        self.runtime.push(name.to_string());

        Ok(&self.created[name])
    }

    /// Deletes every cached GPU texture, in insertion order, and empties the
    /// cache. All outstanding views are invalidated; the mutable borrow makes
    /// that structural.
    pub fn destroy_all(&mut self, gl: &GlFunctions) {
        for name in self.runtime.drain(..) {
            if let Some(texture) = self.created.remove(&name) {
                if let Err(err) = gl.delete_texture(texture.id) {
                    log::warn!(target: "texture", "Could not delete texture '{name}': {err}");
                }
            }
        }
    }

    fn name_for_path(&self, path: &str) -> Option<String> {
        self.created
            .iter()
            .find(|(_, texture)| texture.path == path)
            .map(|(name, _)| name.clone())
    }
}

fn validate(name: &str, path: &str) -> Result<(), TextureError> {
    if name.is_empty() {
        return Err(TextureError::EmptyName);
    }
    if path.is_empty() {
        return Err(TextureError::EmptyPath);
    }
    if !Path::new(path).exists() {
        return Err(TextureError::MissingFile {
            name: name.to_string(),
            file_name: file_name_of(path),
        });
    }
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        None => Err(TextureError::MissingExtension {
            name: name.to_string(),
        }),
        Some(ext) if !VALID_EXTENSIONS.contains(&ext) => Err(TextureError::UnsupportedExtension {
            name: name.to_string(),
            extension: format!(".{ext}"),
        }),
        Some(_) => Ok(()),
    }
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

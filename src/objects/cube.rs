//! Textured unit cube.

use std::mem;

use crate::error::{GlError, RenderError};
use crate::gl::{self, GlFunctions};
use crate::objects::{GameObject, GameObjectType, ObjectData};
use crate::resources::texture::Texture;

/// Interleaved cube vertex: position, texture coordinates, normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CubeVertex {
    position: [f32; 3],
    tex_coords: [f32; 2],
    normal: [f32; 3],
}

const fn v(position: [f32; 3], tex_coords: [f32; 2], normal: [f32; 3]) -> CubeVertex {
    CubeVertex {
        position,
        tex_coords,
        normal,
    }
}

/// Unit cube centered on the origin, two triangles per face.
const VERTICES: [CubeVertex; 36] = [
    // back
    v([-0.5, -0.5, -0.5], [0.0, 0.0], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0], [0.0, 0.0, -1.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0], [0.0, 0.0, -1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0], [0.0, 0.0, -1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0], [0.0, 0.0, -1.0]),
    // front
    v([-0.5, -0.5, 0.5], [0.0, 0.0], [0.0, 0.0, 1.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0], [0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [1.0, 1.0], [0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [1.0, 1.0], [0.0, 0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0], [0.0, 0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0], [0.0, 0.0, 1.0]),
    // left
    v([-0.5, 0.5, 0.5], [1.0, 0.0], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [1.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [1.0, 0.0], [-1.0, 0.0, 0.0]),
    // right
    v([0.5, 0.5, 0.5], [1.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, 1.0], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0], [1.0, 0.0, 0.0]),
    // bottom
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, -0.5], [1.0, 1.0], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
    // top
    v([-0.5, 0.5, -0.5], [0.0, 1.0], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 1.0], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// A unit cube with an optional diffuse texture.
///
/// Owns its vertex state on the GPU; the texture stays owned by the cache and
/// is referenced by handle only.
pub struct Cube {
    data: ObjectData,
    vao: gl::GLuint,
    vbo: gl::GLuint,
    texture: Option<gl::GLuint>,
}

impl Cube {
    /// Uploads the cube's vertex state. Requires resolved buffer and
    /// vertex-array bindings.
    pub fn new(gl: &GlFunctions, name: impl Into<String>) -> Result<Self, GlError> {
        let vao = gl.gen_vertex_array()?;
        let vbo = gl.gen_buffer()?;
        gl.bind_vertex_array(vao)?;
        gl.bind_buffer(gl::GL_ARRAY_BUFFER, vbo)?;
        gl.buffer_data(gl::GL_ARRAY_BUFFER, bytemuck::cast_slice(&VERTICES), gl::GL_STATIC_DRAW)?;

        let stride = mem::size_of::<CubeVertex>() as gl::GLsizei;
        gl.enable_vertex_attrib_array(0)?;
        gl.vertex_attrib_pointer(0, 3, gl::GL_FLOAT, false, stride, mem::offset_of!(CubeVertex, position))?;
        gl.enable_vertex_attrib_array(1)?;
        gl.vertex_attrib_pointer(1, 2, gl::GL_FLOAT, false, stride, mem::offset_of!(CubeVertex, tex_coords))?;
        gl.enable_vertex_attrib_array(2)?;
        gl.vertex_attrib_pointer(2, 3, gl::GL_FLOAT, false, stride, mem::offset_of!(CubeVertex, normal))?;
        gl.bind_vertex_array(0)?;

        Ok(Self {
            data: ObjectData::new(name, GameObjectType::Cube),
            vao,
            vbo,
            texture: None,
        })
    }

    /// Associates the diffuse texture drawn on every face. The cube keeps the
    /// GPU handle only; ownership stays with the texture cache.
    pub fn set_texture(&mut self, texture: Option<&Texture>) {
        self.texture = texture.map(Texture::id);
    }

    pub fn texture(&self) -> Option<gl::GLuint> {
        self.texture
    }

    /// Releases the cube's GPU vertex state. Call before dropping the cube
    /// while the context is still alive.
    pub fn destroy(&mut self, gl: &GlFunctions) {
        if let Err(err) = gl.delete_buffer(self.vbo) {
            log::warn!(target: "objects", "Could not delete cube '{}' buffer: {err}", self.data.name);
        }
        if let Err(err) = gl.delete_vertex_array(self.vao) {
            log::warn!(target: "objects", "Could not delete cube '{}' vertex array: {err}", self.data.name);
        }
        self.vbo = 0;
        self.vao = 0;
    }
}

impl GameObject for Cube {
    fn data(&self) -> &ObjectData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ObjectData {
        &mut self.data
    }

    fn render(&self, gl: &GlFunctions) -> Result<(), RenderError> {
        let shader = self.data.require_shader()?;
        shader.activate(gl)?;
        shader.set_mat4(gl, "model", &self.data.model_matrix())?;

        if let Some(texture) = self.texture {
            gl.active_texture(gl::GL_TEXTURE0)?;
            gl.bind_texture(gl::GL_TEXTURE_2D, texture)?;
            shader.set_int(gl, "diffuse", 0)?;
        }

        gl.bind_vertex_array(self.vao)?;
        gl.draw_arrays(gl::GL_TRIANGLES, 0, VERTICES.len() as gl::GLsizei)?;
        gl.bind_vertex_array(0)?;
        Ok(())
    }
}

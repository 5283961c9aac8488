//! Handles to linked shader programs and uniform upload helpers.
//!
//! Shader compilation and linking happen in the embedding application's
//! material layer; this core only needs to activate a program and feed it
//! uniforms through the resolved bindings.

use cgmath::{Matrix4, Vector3};

use crate::error::GlError;
use crate::gl::{GLuint, GlFunctions};

/// A handle to a linked shader program.
///
/// Scene objects share one via `Rc<Shader>`; the program object itself stays
/// owned by whatever compiled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shader {
    name: String,
    program: GLuint,
}

impl Shader {
    pub fn from_program(name: impl Into<String>, program: GLuint) -> Self {
        Self {
            name: name.into(),
            program,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> GLuint {
        self.program
    }

    /// Makes this program the active one for subsequent draw calls.
    pub fn activate(&self, gl: &GlFunctions) -> Result<(), GlError> {
        gl.use_program(self.program)
    }

    pub fn set_int(&self, gl: &GlFunctions, name: &str, value: i32) -> Result<(), GlError> {
        let location = gl.get_uniform_location(self.program, name)?;
        gl.uniform_1i(location, value)
    }

    pub fn set_float(&self, gl: &GlFunctions, name: &str, value: f32) -> Result<(), GlError> {
        let location = gl.get_uniform_location(self.program, name)?;
        gl.uniform_1f(location, value)
    }

    pub fn set_vec3(&self, gl: &GlFunctions, name: &str, value: Vector3<f32>) -> Result<(), GlError> {
        let location = gl.get_uniform_location(self.program, name)?;
        gl.uniform_3f(location, value.x, value.y, value.z)
    }

    pub fn set_mat4(&self, gl: &GlFunctions, name: &str, value: &Matrix4<f32>) -> Result<(), GlError> {
        let location = gl.get_uniform_location(self.program, name)?;
        let values: &[f32; 16] = value.as_ref();
        gl.uniform_matrix_4fv(location, values)
    }
}

//! Runtime resolution of OpenGL entry points.
//!
//! OpenGL functions beyond the 1.1 surface cannot be statically linked
//! against a specific driver/platform combination, so they are resolved by
//! name at runtime once a rendering context exists. The windowing layer
//! supplies the proc-address source (e.g. glutin's `get_proc_address`) and
//! [`GlFunctions`] resolves the fixed set of entry points this core uses into
//! an owned table.
//!
//! The table is scoped to the lifetime of the context it was resolved
//! against: after the context is destroyed, drop the table and build a fresh
//! one for the next context. A binding is either fully resolved or entirely
//! absent; dispatching through an absent binding returns
//! [`GlError::MissingFunction`] instead of calling through a null pointer.

mod types;

pub use types::*;

use std::ffi::{CStr, CString, c_char, c_void};

use crate::error::GlError;

/// Proc-address source supplied by the windowing layer. Returns a null
/// pointer for names it cannot resolve.
pub type ProcLoader = Box<dyn Fn(&str) -> *const c_void>;

/// The runtime-resolved OpenGL binding table.
///
/// Construct one per rendering context with [`GlFunctions::new`] and resolve
/// the fixed function set with [`initialize_all_functions`]. All dispatch
/// goes through the safe wrapper methods, which fail with
/// [`GlError::MissingFunction`] when resolution did not succeed.
///
/// [`initialize_all_functions`]: GlFunctions::initialize_all_functions
pub struct GlFunctions {
    loader: ProcLoader,
    fns: Bindings,
}

macro_rules! gl_bindings {
    ($( $field:ident : $name:literal => fn($($arg:ident : $ty:ty),* $(,)?) $(-> $ret:ty)? ; )+) => {
        #[derive(Default)]
        struct Bindings {
            $( $field: Option<unsafe extern "system" fn($($ty),*) $(-> $ret)?>, )+
        }

        impl GlFunctions {
            /// Symbolic names of the complete fixed set of entry points this
            /// core resolves.
            pub const FUNCTION_NAMES: &'static [&'static str] = &[$($name),+];

            /// Resolves a single entry point by its symbolic name.
            ///
            /// Leaves the binding absent when the source cannot resolve the
            /// name; re-resolving overwrites the previous address. Names
            /// outside the fixed set are logged and ignored.
            pub fn initialize_function(&mut self, name: &str) {
                let addr = self.get_proc_address(name);
                match name {
                    $( $name => {
                        self.fns.$field = unsafe {
                            std::mem::transmute::<
                                *const c_void,
                                Option<unsafe extern "system" fn($($ty),*) $(-> $ret)?>,
                            >(addr)
                        };
                    } )+
                    _ => log::warn!(target: "opengl", "Unknown OpenGL function '{name}' requested"),
                }
            }

            /// Returns whether resolution succeeded for `name`. Stable until
            /// the next `initialize_*` call.
            pub fn is_function_available(&self, name: &str) -> bool {
                match name {
                    $( $name => self.fns.$field.is_some(), )+
                    _ => false,
                }
            }
        }
    };
}

gl_bindings! {
    // Textures
    gen_textures: "glGenTextures" => fn(n: GLsizei, textures: *mut GLuint);
    bind_texture: "glBindTexture" => fn(target: GLenum, texture: GLuint);
    tex_parameteri: "glTexParameteri" => fn(target: GLenum, pname: GLenum, param: GLint);
    tex_image_2d: "glTexImage2D" => fn(
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        data: *const c_void,
    );
    delete_textures: "glDeleteTextures" => fn(n: GLsizei, textures: *const GLuint);
    active_texture: "glActiveTexture" => fn(texture: GLenum);

    // Geometry
    gen_buffers: "glGenBuffers" => fn(n: GLsizei, buffers: *mut GLuint);
    bind_buffer: "glBindBuffer" => fn(target: GLenum, buffer: GLuint);
    buffer_data: "glBufferData" => fn(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    delete_buffers: "glDeleteBuffers" => fn(n: GLsizei, buffers: *const GLuint);
    gen_vertex_arrays: "glGenVertexArrays" => fn(n: GLsizei, arrays: *mut GLuint);
    bind_vertex_array: "glBindVertexArray" => fn(array: GLuint);
    delete_vertex_arrays: "glDeleteVertexArrays" => fn(n: GLsizei, arrays: *const GLuint);
    enable_vertex_attrib_array: "glEnableVertexAttribArray" => fn(index: GLuint);
    vertex_attrib_pointer: "glVertexAttribPointer" => fn(
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const c_void,
    );
    draw_arrays: "glDrawArrays" => fn(mode: GLenum, first: GLint, count: GLsizei);

    // Shaders and uniforms
    use_program: "glUseProgram" => fn(program: GLuint);
    get_uniform_location: "glGetUniformLocation" => fn(program: GLuint, name: *const c_char) -> GLint;
    uniform_1i: "glUniform1i" => fn(location: GLint, v0: GLint);
    uniform_1f: "glUniform1f" => fn(location: GLint, v0: GLfloat);
    uniform_3f: "glUniform3f" => fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    uniform_matrix_4fv: "glUniformMatrix4fv" => fn(
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );

    // Frame and render state
    clear: "glClear" => fn(mask: GLbitfield);
    clear_color: "glClearColor" => fn(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    viewport: "glViewport" => fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    get_error: "glGetError" => fn() -> GLenum;
    get_string: "glGetString" => fn(name: GLenum) -> *const GLubyte;
}

impl GlFunctions {
    /// Creates an empty table wired to `loader`. No resolution happens until
    /// one of the `initialize_*` functions runs, which requires the context
    /// behind `loader` to be current.
    pub fn new(loader: ProcLoader) -> Self {
        Self {
            loader,
            fns: Bindings::default(),
        }
    }

    /// Resolves the complete fixed set of entry points.
    ///
    /// Requires an active rendering context. Individual resolution failures
    /// are silent here; check [`is_function_available`] before first use of
    /// anything the minimum supported version does not guarantee.
    ///
    /// [`is_function_available`]: GlFunctions::is_function_available
    pub fn initialize_all_functions(&mut self) {
        for name in Self::FUNCTION_NAMES {
            self.initialize_function(name);
        }
    }

    /// The primitive platform resolution call. Returns a null pointer for
    /// names the source cannot resolve. Requires a current context.
    pub fn get_proc_address(&self, name: &str) -> *const c_void {
        (self.loader)(name)
    }

    fn resolved<F>(binding: Option<F>, name: &'static str) -> Result<F, GlError> {
        binding.ok_or(GlError::MissingFunction(name))
    }

    // Textures

    /// Allocates one texture object name.
    pub fn gen_texture(&self) -> Result<GLuint, GlError> {
        let f = Self::resolved(self.fns.gen_textures, "glGenTextures")?;
        let mut texture: GLuint = 0;
        unsafe { f(1, &mut texture) };
        Ok(texture)
    }

    pub fn bind_texture(&self, target: GLenum, texture: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.bind_texture, "glBindTexture")?;
        unsafe { f(target, texture) };
        Ok(())
    }

    pub fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.tex_parameteri, "glTexParameteri")?;
        unsafe { f(target, pname, param) };
        Ok(())
    }

    /// Uploads a full mip level for the bound texture. `border` is always 0.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &[u8],
    ) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.tex_image_2d, "glTexImage2D")?;
        unsafe {
            f(
                target,
                level,
                internal_format,
                width,
                height,
                0,
                format,
                ty,
                pixels.as_ptr().cast(),
            )
        };
        Ok(())
    }

    pub fn delete_texture(&self, texture: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.delete_textures, "glDeleteTextures")?;
        unsafe { f(1, &texture) };
        Ok(())
    }

    pub fn active_texture(&self, unit: GLenum) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.active_texture, "glActiveTexture")?;
        unsafe { f(unit) };
        Ok(())
    }

    // Geometry

    /// Allocates one buffer object name.
    pub fn gen_buffer(&self) -> Result<GLuint, GlError> {
        let f = Self::resolved(self.fns.gen_buffers, "glGenBuffers")?;
        let mut buffer: GLuint = 0;
        unsafe { f(1, &mut buffer) };
        Ok(buffer)
    }

    pub fn bind_buffer(&self, target: GLenum, buffer: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.bind_buffer, "glBindBuffer")?;
        unsafe { f(target, buffer) };
        Ok(())
    }

    pub fn buffer_data(&self, target: GLenum, data: &[u8], usage: GLenum) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.buffer_data, "glBufferData")?;
        unsafe { f(target, data.len() as GLsizeiptr, data.as_ptr().cast(), usage) };
        Ok(())
    }

    pub fn delete_buffer(&self, buffer: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.delete_buffers, "glDeleteBuffers")?;
        unsafe { f(1, &buffer) };
        Ok(())
    }

    /// Allocates one vertex array object name.
    pub fn gen_vertex_array(&self) -> Result<GLuint, GlError> {
        let f = Self::resolved(self.fns.gen_vertex_arrays, "glGenVertexArrays")?;
        let mut array: GLuint = 0;
        unsafe { f(1, &mut array) };
        Ok(array)
    }

    pub fn bind_vertex_array(&self, array: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.bind_vertex_array, "glBindVertexArray")?;
        unsafe { f(array) };
        Ok(())
    }

    pub fn delete_vertex_array(&self, array: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.delete_vertex_arrays, "glDeleteVertexArrays")?;
        unsafe { f(1, &array) };
        Ok(())
    }

    pub fn enable_vertex_attrib_array(&self, index: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.enable_vertex_attrib_array, "glEnableVertexAttribArray")?;
        unsafe { f(index) };
        Ok(())
    }

    /// Describes one attribute of the bound array buffer. `offset` is the
    /// byte offset of the attribute within a vertex.
    pub fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.vertex_attrib_pointer, "glVertexAttribPointer")?;
        let normalized = if normalized { GL_TRUE } else { GL_FALSE };
        unsafe { f(index, size, ty, normalized, stride, offset as *const c_void) };
        Ok(())
    }

    pub fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.draw_arrays, "glDrawArrays")?;
        unsafe { f(mode, first, count) };
        Ok(())
    }

    // Shaders and uniforms

    pub fn use_program(&self, program: GLuint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.use_program, "glUseProgram")?;
        unsafe { f(program) };
        Ok(())
    }

    /// Looks up a uniform location. -1 means the program has no uniform with
    /// that name, mirroring the underlying call.
    pub fn get_uniform_location(&self, program: GLuint, name: &str) -> Result<GLint, GlError> {
        let f = Self::resolved(self.fns.get_uniform_location, "glGetUniformLocation")?;
        let name = CString::new(name).map_err(|_| GlError::InvalidUniformName(name.into()))?;
        Ok(unsafe { f(program, name.as_ptr()) })
    }

    pub fn uniform_1i(&self, location: GLint, v0: GLint) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.uniform_1i, "glUniform1i")?;
        unsafe { f(location, v0) };
        Ok(())
    }

    pub fn uniform_1f(&self, location: GLint, v0: GLfloat) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.uniform_1f, "glUniform1f")?;
        unsafe { f(location, v0) };
        Ok(())
    }

    pub fn uniform_3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.uniform_3f, "glUniform3f")?;
        unsafe { f(location, v0, v1, v2) };
        Ok(())
    }

    /// Uploads a single column-major 4x4 matrix.
    pub fn uniform_matrix_4fv(&self, location: GLint, value: &[GLfloat; 16]) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.uniform_matrix_4fv, "glUniformMatrix4fv")?;
        unsafe { f(location, 1, GL_FALSE, value.as_ptr()) };
        Ok(())
    }

    // Frame and render state

    pub fn clear(&self, mask: GLbitfield) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.clear, "glClear")?;
        unsafe { f(mask) };
        Ok(())
    }

    pub fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.clear_color, "glClearColor")?;
        unsafe { f(red, green, blue, alpha) };
        Ok(())
    }

    pub fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> Result<(), GlError> {
        let f = Self::resolved(self.fns.viewport, "glViewport")?;
        unsafe { f(x, y, width, height) };
        Ok(())
    }

    pub fn get_error(&self) -> Result<GLenum, GlError> {
        let f = Self::resolved(self.fns.get_error, "glGetError")?;
        Ok(unsafe { f() })
    }

    /// Reads a driver string such as [`GL_VENDOR`] or [`GL_VERSION`]. `None`
    /// when the driver answers with a null pointer.
    pub fn get_string(&self, name: GLenum) -> Result<Option<String>, GlError> {
        let f = Self::resolved(self.fns.get_string, "glGetString")?;
        let ptr = unsafe { f(name) };
        if ptr.is_null() {
            return Ok(None);
        }
        let value = unsafe { CStr::from_ptr(ptr.cast()) };
        Ok(Some(value.to_string_lossy().into_owned()))
    }
}

//! A stub OpenGL dispatch table for driving the binding loader without a
//! live driver.
//!
//! Object names and call counters are thread-local, so parallel test threads
//! stay independent as long as each builds its own table from [`loader`].

#![allow(dead_code)]

use std::cell::Cell;
use std::ffi::{c_char, c_void};

use ember_ngin::gl::{
    GLbitfield, GLboolean, GLenum, GLfloat, GLint, GLsizei, GLsizeiptr, GLubyte, GLuint,
};

thread_local! {
    static NEXT_OBJECT: Cell<GLuint> = const { Cell::new(1) };
    static TEXTURES_GENERATED: Cell<usize> = const { Cell::new(0) };
    static TEXTURES_DELETED: Cell<usize> = const { Cell::new(0) };
    static BUFFERS_GENERATED: Cell<usize> = const { Cell::new(0) };
    static DRAW_CALLS: Cell<usize> = const { Cell::new(0) };
    static ACTIVE_PROGRAM: Cell<GLuint> = const { Cell::new(0) };
}

pub fn textures_generated() -> usize {
    TEXTURES_GENERATED.get()
}

pub fn textures_deleted() -> usize {
    TEXTURES_DELETED.get()
}

pub fn buffers_generated() -> usize {
    BUFFERS_GENERATED.get()
}

pub fn draw_calls() -> usize {
    DRAW_CALLS.get()
}

pub fn active_program() -> GLuint {
    ACTIVE_PROGRAM.get()
}

/// Resets the call counters. Object names stay monotonic so every generated
/// handle is nonzero and unique within the thread.
pub fn reset() {
    TEXTURES_GENERATED.set(0);
    TEXTURES_DELETED.set(0);
    BUFFERS_GENERATED.set(0);
    DRAW_CALLS.set(0);
    ACTIVE_PROGRAM.set(0);
}

fn next_object() -> GLuint {
    let id = NEXT_OBJECT.get();
    NEXT_OBJECT.set(id + 1);
    id
}

unsafe fn fill_objects(n: GLsizei, out: *mut GLuint) {
    for i in 0..n as usize {
        unsafe { *out.add(i) = next_object() };
    }
}

unsafe extern "system" fn gen_textures(n: GLsizei, textures: *mut GLuint) {
    TEXTURES_GENERATED.set(TEXTURES_GENERATED.get() + n as usize);
    unsafe { fill_objects(n, textures) };
}

unsafe extern "system" fn gen_buffers(n: GLsizei, buffers: *mut GLuint) {
    BUFFERS_GENERATED.set(BUFFERS_GENERATED.get() + n as usize);
    unsafe { fill_objects(n, buffers) };
}

unsafe extern "system" fn gen_vertex_arrays(n: GLsizei, arrays: *mut GLuint) {
    unsafe { fill_objects(n, arrays) };
}

unsafe extern "system" fn bind_texture(_target: GLenum, _texture: GLuint) {}

unsafe extern "system" fn tex_parameteri(_target: GLenum, _pname: GLenum, _param: GLint) {}

unsafe extern "system" fn tex_image_2d(
    _target: GLenum,
    _level: GLint,
    _internal_format: GLint,
    _width: GLsizei,
    _height: GLsizei,
    _border: GLint,
    _format: GLenum,
    _ty: GLenum,
    _data: *const c_void,
) {
}

unsafe extern "system" fn delete_textures(n: GLsizei, _textures: *const GLuint) {
    TEXTURES_DELETED.set(TEXTURES_DELETED.get() + n as usize);
}

unsafe extern "system" fn active_texture(_texture: GLenum) {}

unsafe extern "system" fn bind_buffer(_target: GLenum, _buffer: GLuint) {}

unsafe extern "system" fn buffer_data(
    _target: GLenum,
    _size: GLsizeiptr,
    _data: *const c_void,
    _usage: GLenum,
) {
}

unsafe extern "system" fn delete_buffers(_n: GLsizei, _buffers: *const GLuint) {}

unsafe extern "system" fn bind_vertex_array(_array: GLuint) {}

unsafe extern "system" fn delete_vertex_arrays(_n: GLsizei, _arrays: *const GLuint) {}

unsafe extern "system" fn enable_vertex_attrib_array(_index: GLuint) {}

unsafe extern "system" fn vertex_attrib_pointer(
    _index: GLuint,
    _size: GLint,
    _ty: GLenum,
    _normalized: GLboolean,
    _stride: GLsizei,
    _pointer: *const c_void,
) {
}

unsafe extern "system" fn draw_arrays(_mode: GLenum, _first: GLint, _count: GLsizei) {
    DRAW_CALLS.set(DRAW_CALLS.get() + 1);
}

unsafe extern "system" fn use_program(program: GLuint) {
    ACTIVE_PROGRAM.set(program);
}

unsafe extern "system" fn get_uniform_location(_program: GLuint, _name: *const c_char) -> GLint {
    0
}

unsafe extern "system" fn uniform_1i(_location: GLint, _v0: GLint) {}

unsafe extern "system" fn uniform_1f(_location: GLint, _v0: GLfloat) {}

unsafe extern "system" fn uniform_3f(_location: GLint, _v0: GLfloat, _v1: GLfloat, _v2: GLfloat) {}

unsafe extern "system" fn uniform_matrix_4fv(
    _location: GLint,
    _count: GLsizei,
    _transpose: GLboolean,
    _value: *const GLfloat,
) {
}

unsafe extern "system" fn clear(_mask: GLbitfield) {}

unsafe extern "system" fn clear_color(_r: GLfloat, _g: GLfloat, _b: GLfloat, _a: GLfloat) {}

unsafe extern "system" fn viewport(_x: GLint, _y: GLint, _width: GLsizei, _height: GLsizei) {}

unsafe extern "system" fn get_error() -> GLenum {
    0
}

unsafe extern "system" fn get_string(_name: GLenum) -> *const GLubyte {
    c"ember-stub".as_ptr().cast()
}

pub fn proc_address(name: &str) -> *const c_void {
    match name {
        "glGenTextures" => gen_textures as *const c_void,
        "glBindTexture" => bind_texture as *const c_void,
        "glTexParameteri" => tex_parameteri as *const c_void,
        "glTexImage2D" => tex_image_2d as *const c_void,
        "glDeleteTextures" => delete_textures as *const c_void,
        "glActiveTexture" => active_texture as *const c_void,
        "glGenBuffers" => gen_buffers as *const c_void,
        "glBindBuffer" => bind_buffer as *const c_void,
        "glBufferData" => buffer_data as *const c_void,
        "glDeleteBuffers" => delete_buffers as *const c_void,
        "glGenVertexArrays" => gen_vertex_arrays as *const c_void,
        "glBindVertexArray" => bind_vertex_array as *const c_void,
        "glDeleteVertexArrays" => delete_vertex_arrays as *const c_void,
        "glEnableVertexAttribArray" => enable_vertex_attrib_array as *const c_void,
        "glVertexAttribPointer" => vertex_attrib_pointer as *const c_void,
        "glDrawArrays" => draw_arrays as *const c_void,
        "glUseProgram" => use_program as *const c_void,
        "glGetUniformLocation" => get_uniform_location as *const c_void,
        "glUniform1i" => uniform_1i as *const c_void,
        "glUniform1f" => uniform_1f as *const c_void,
        "glUniform3f" => uniform_3f as *const c_void,
        "glUniformMatrix4fv" => uniform_matrix_4fv as *const c_void,
        "glClear" => clear as *const c_void,
        "glClearColor" => clear_color as *const c_void,
        "glViewport" => viewport as *const c_void,
        "glGetError" => get_error as *const c_void,
        "glGetString" => get_string as *const c_void,
        _ => std::ptr::null(),
    }
}

/// A proc-address source resolving the full stub table.
pub fn loader() -> Box<dyn Fn(&str) -> *const c_void> {
    Box::new(proc_address)
}

/// A source that cannot resolve the given names, for driving the
/// missing-function paths.
pub fn loader_without(missing: &'static [&'static str]) -> Box<dyn Fn(&str) -> *const c_void> {
    Box::new(move |name| {
        if missing.contains(&name) {
            std::ptr::null()
        } else {
            proc_address(name)
        }
    })
}

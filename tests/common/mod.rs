pub mod gl_stub;

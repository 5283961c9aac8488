//! ember-ngin
//!
//! A small OpenGL-based rendering core for interactive 3D applications. This
//! crate exposes the foundation a scene sits on: runtime resolution of the
//! graphics API, a validating texture cache and a uniform contract for
//! renderable scene objects. Window and context creation, input handling and
//! shader compilation stay in the embedding application; the core only needs
//! a proc-address source from whatever windowing layer is in use.
//!
//! High-level modules
//! - `gl`: runtime-resolved OpenGL binding table and the GL constants in use
//! - `context`: per-context owner of the binding table and resource caches
//! - `resources`: texture loading/caching and shader program handles
//! - `objects`: renderable scene objects (cube, point light, directional light)
//! - `error`: typed error enums and the fatal-stop boundary
//! - `logging`: logger initialization for embedding binaries
//!

pub mod context;
pub mod error;
pub mod gl;
pub mod logging;
pub mod objects;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

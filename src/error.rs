//! Error types and the fatal-stop boundary.
//!
//! Nothing in this core is recoverable-by-return except the duplicate-texture
//! cases, which are not errors at all. Everything else either bubbles up as a
//! typed error or, at the application boundary, goes through [`force_close`].

use thiserror::Error;

/// Errors raised when dispatching through the runtime-resolved OpenGL table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlError {
    /// The entry point was never resolved for the current context. Either the
    /// context predates the table or the driver does not export the function.
    #[error("OpenGL function '{0}' is not resolved for the current context")]
    MissingFunction(&'static str),

    #[error("invalid uniform name '{0}'")]
    InvalidUniformName(String),
}

/// Validation and upload failures for texture creation.
///
/// Every variant here is fatal by policy: a correctly packaged build never
/// produces one, so callers hand them to [`force_close`] rather than recover.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("cannot load a texture with no name")]
    EmptyName,

    #[error("cannot load a texture with no path")]
    EmptyPath,

    #[error("texture '{name}' path '{file_name}' does not exist")]
    MissingFile { name: String, file_name: String },

    #[error("texture '{name}' has no extension, you must use png, jpg or jpeg")]
    MissingExtension { name: String },

    #[error(
        "texture '{name}' has an invalid extension '{extension}', only png, jpg and jpeg are allowed"
    )]
    UnsupportedExtension { name: String, extension: String },

    #[error("failed to load texture '{path}'")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Gl(#[from] GlError),
}

/// Failures surfaced by [`crate::objects::GameObject::render`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("game object '{0}' has no shader assigned")]
    MissingShader(String),

    #[error(transparent)]
    Gl(#[from] GlError),
}

/// Logs the failure and terminates the process.
///
/// This is the single abort boundary: library code reports fatal conditions
/// as ordinary `Result`s and the embedding application decides where to stop.
pub fn force_close(title: &str, reason: &str) -> ! {
    log::error!("{title}: {reason}");
    std::process::exit(1)
}

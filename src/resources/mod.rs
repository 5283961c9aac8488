/**
 * This module contains all logic for GPU-side assets: textures loaded and
 * cached from external files, and handles to linked shader programs.
 */
pub mod shader;
pub mod texture;

pub use shader::Shader;
pub use texture::{Texture, TextureCache};

//! Renderable scene objects.
//!
//! Everything drawn in a scene implements [`GameObject`]: a uniform
//! render/update contract over a closed set of object kinds. Shared state
//! lives in [`ObjectData`]; concrete variants embed it and supply their own
//! [`GameObject::render`].

pub mod cube;
pub mod light;

pub use cube::Cube;
pub use light::{DirLight, PointLight};

use std::rc::Rc;

use cgmath::{Deg, Matrix4, Vector3};

use crate::error::RenderError;
use crate::gl::GlFunctions;
use crate::resources::shader::Shader;

/// The closed set of object kinds a scene can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameObjectType {
    Cube,
    PointLight,
    DirLight,
}

/// Shared state for every game object variant: identity, transform, update
/// gate and the assigned shader.
#[derive(Debug, Clone)]
pub struct ObjectData {
    pub(crate) can_update: bool,
    pub(crate) object_type: GameObjectType,
    pub(crate) name: String,
    pub(crate) position: Vector3<f32>,
    pub(crate) rotation: Vector3<f32>,
    pub(crate) scale: Vector3<f32>,
    pub(crate) shader: Option<Rc<Shader>>,
}

impl ObjectData {
    pub fn new(name: impl Into<String>, object_type: GameObjectType) -> Self {
        Self {
            can_update: false,
            object_type,
            name: name.into(),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            shader: None,
        }
    }

    /// World matrix composed from position, rotation (XYZ euler angles in
    /// degrees) and scale.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub(crate) fn require_shader(&self) -> Result<&Shader, RenderError> {
        self.shader
            .as_deref()
            .ok_or_else(|| RenderError::MissingShader(self.name.clone()))
    }
}

/// Uniform dispatch surface for anything drawn in the scene.
///
/// Concrete variants are distinguished by [`GameObjectType`]; the accessors
/// are provided on top of the embedded [`ObjectData`]. The `can_update` flag
/// gates per-frame logic and is orthogonal to [`render`] being called.
///
/// [`render`]: GameObject::render
pub trait GameObject {
    fn data(&self) -> &ObjectData;

    fn data_mut(&mut self) -> &mut ObjectData;

    /// Issues this object's draw calls through the resolved bindings.
    ///
    /// Failure is surfaced to the caller rather than swallowed; a missing
    /// shader yields [`RenderError::MissingShader`].
    fn render(&self, gl: &GlFunctions) -> Result<(), RenderError>;

    fn can_update(&self) -> bool {
        self.data().can_update
    }

    fn set_update(&mut self, can_update: bool) {
        self.data_mut().can_update = can_update;
    }

    fn object_type(&self) -> GameObjectType {
        self.data().object_type
    }

    fn set_object_type(&mut self, object_type: GameObjectType) {
        self.data_mut().object_type = object_type;
    }

    fn name(&self) -> &str {
        &self.data().name
    }

    fn set_name(&mut self, name: &str) {
        self.data_mut().name = name.to_string();
    }

    fn position(&self) -> Vector3<f32> {
        self.data().position
    }

    fn set_position(&mut self, position: Vector3<f32>) {
        self.data_mut().position = position;
    }

    fn rotation(&self) -> Vector3<f32> {
        self.data().rotation
    }

    fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.data_mut().rotation = rotation;
    }

    fn scale(&self) -> Vector3<f32> {
        self.data().scale
    }

    fn set_scale(&mut self, scale: Vector3<f32>) {
        self.data_mut().scale = scale;
    }

    fn shader(&self) -> Option<&Rc<Shader>> {
        self.data().shader.as_ref()
    }

    fn set_shader(&mut self, shader: Option<Rc<Shader>>) {
        self.data_mut().shader = shader;
    }
}

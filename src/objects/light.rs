//! Light sources: point and directional.
//!
//! Lights carry no geometry of their own; rendering one uploads its uniforms
//! into the assigned shader so subsequent geometry passes see it.

use cgmath::{Deg, Matrix3, Vector3};

use crate::error::RenderError;
use crate::gl::GlFunctions;
use crate::objects::{GameObject, GameObjectType, ObjectData};

/// A positional light with distance falloff handled in the shader.
pub struct PointLight {
    data: ObjectData,
    color: Vector3<f32>,
    intensity: f32,
}

impl PointLight {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: ObjectData::new(name, GameObjectType::PointLight),
            color: Vector3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
        }
    }

    pub fn color(&self) -> Vector3<f32> {
        self.color
    }

    pub fn set_color(&mut self, color: Vector3<f32>) {
        self.color = color;
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }
}

impl GameObject for PointLight {
    fn data(&self) -> &ObjectData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ObjectData {
        &mut self.data
    }

    fn render(&self, gl: &GlFunctions) -> Result<(), RenderError> {
        let shader = self.data.require_shader()?;
        shader.activate(gl)?;
        shader.set_vec3(gl, "pointLight.position", self.data.position)?;
        shader.set_vec3(gl, "pointLight.color", self.color)?;
        shader.set_float(gl, "pointLight.intensity", self.intensity)?;
        Ok(())
    }
}

/// A directional light; its direction follows the object's rotation.
pub struct DirLight {
    data: ObjectData,
    color: Vector3<f32>,
    intensity: f32,
}

impl DirLight {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: ObjectData::new(name, GameObjectType::DirLight),
            color: Vector3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
        }
    }

    pub fn color(&self) -> Vector3<f32> {
        self.color
    }

    pub fn set_color(&mut self, color: Vector3<f32>) {
        self.color = color;
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Unit direction the light shines in: straight down, rotated by the
    /// object's XYZ euler angles.
    pub fn direction(&self) -> Vector3<f32> {
        let rotation = self.data.rotation;
        Matrix3::from_angle_z(Deg(rotation.z))
            * Matrix3::from_angle_y(Deg(rotation.y))
            * Matrix3::from_angle_x(Deg(rotation.x))
            * Vector3::new(0.0, -1.0, 0.0)
    }
}

impl GameObject for DirLight {
    fn data(&self) -> &ObjectData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ObjectData {
        &mut self.data
    }

    fn render(&self, gl: &GlFunctions) -> Result<(), RenderError> {
        let shader = self.data.require_shader()?;
        shader.activate(gl)?;
        shader.set_vec3(gl, "dirLight.direction", self.direction())?;
        shader.set_vec3(gl, "dirLight.color", self.color)?;
        shader.set_float(gl, "dirLight.intensity", self.intensity)?;
        Ok(())
    }
}

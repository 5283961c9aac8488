use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use cgmath::{InnerSpace, Vector3};
use ember_ngin::error::RenderError;
use ember_ngin::gl::GlFunctions;
use ember_ngin::objects::{Cube, DirLight, GameObject, GameObjectType, PointLight};
use ember_ngin::resources::shader::Shader;
use ember_ngin::resources::texture::TextureCache;

mod common;

use crate::common::gl_stub;

fn stub_gl() -> GlFunctions {
    let mut gl = GlFunctions::new(gl_stub::loader());
    gl.initialize_all_functions();
    gl
}

#[test]
fn cube_renders_through_its_shader() {
    let gl = stub_gl();
    let mut cube = Cube::new(&gl, "crate").unwrap();
    cube.set_shader(Some(Rc::new(Shader::from_program("basic", 7))));

    gl_stub::reset();
    cube.render(&gl).unwrap();

    assert_eq!(gl_stub::draw_calls(), 1);
    assert_eq!(gl_stub::active_program(), 7);
}

#[test]
fn cube_binds_its_texture_while_rendering() {
    let gl = stub_gl();
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cube_texture");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("crate.png");
    image::RgbaImage::from_pixel(2, 2, image::Rgba([128, 64, 32, 255]))
        .save(&path)
        .unwrap();
    let path = path.to_string_lossy().into_owned();

    let mut cache = TextureCache::new();
    let mut cube = Cube::new(&gl, "crate").unwrap();
    cube.set_shader(Some(Rc::new(Shader::from_program("basic", 7))));

    let texture = cache.create_texture(&gl, "crate", &path).unwrap();
    cube.set_texture(Some(texture));
    assert_eq!(cube.texture(), Some(texture.id()));

    cube.render(&gl).unwrap();

    cube.set_texture(None);
    assert!(cube.texture().is_none());

    cube.destroy(&gl);
}

#[test]
fn point_light_renders_through_its_shader() {
    let gl = stub_gl();
    let mut light = PointLight::new("lamp");
    light.set_position(Vector3::new(0.0, 4.0, 0.0));
    light.set_color(Vector3::new(1.0, 0.8, 0.6));
    light.set_shader(Some(Rc::new(Shader::from_program("lighting", 11))));

    gl_stub::reset();
    light.render(&gl).unwrap();

    assert_eq!(gl_stub::active_program(), 11);
}

#[test]
fn dir_light_renders_through_its_shader() {
    let gl = stub_gl();
    let mut light = DirLight::new("sun");
    light.set_intensity(0.5);
    light.set_shader(Some(Rc::new(Shader::from_program("lighting", 11))));

    gl_stub::reset();
    light.render(&gl).unwrap();

    assert_eq!(gl_stub::active_program(), 11);
}

#[test]
fn rendering_without_a_shader_is_an_error() {
    let gl = stub_gl();

    let cube = Cube::new(&gl, "bare").unwrap();
    assert!(matches!(
        cube.render(&gl),
        Err(RenderError::MissingShader(name)) if name == "bare"
    ));

    let light = PointLight::new("lamp");
    assert!(matches!(
        light.render(&gl),
        Err(RenderError::MissingShader(_))
    ));
}

#[test]
fn accessors_mutate_shared_state() {
    let gl = stub_gl();
    let mut cube = Cube::new(&gl, "crate").unwrap();

    assert_eq!(cube.object_type(), GameObjectType::Cube);
    assert_eq!(cube.name(), "crate");

    assert!(!cube.can_update());
    cube.set_update(true);
    assert!(cube.can_update());

    cube.set_name("barrel");
    assert_eq!(cube.name(), "barrel");

    cube.set_position(Vector3::new(1.0, 2.0, 3.0));
    cube.set_rotation(Vector3::new(0.0, 90.0, 0.0));
    cube.set_scale(Vector3::new(2.0, 2.0, 2.0));
    assert_eq!(cube.position(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(cube.rotation(), Vector3::new(0.0, 90.0, 0.0));
    assert_eq!(cube.scale(), Vector3::new(2.0, 2.0, 2.0));

    assert!(cube.shader().is_none());
    let shader = Rc::new(Shader::from_program("basic", 7));
    cube.set_shader(Some(shader.clone()));
    assert_eq!(cube.shader().unwrap().program(), 7);
    cube.set_shader(None);
    assert!(cube.shader().is_none());
}

#[test]
fn objects_dispatch_through_the_trait() {
    let gl = stub_gl();
    let shader = Rc::new(Shader::from_program("scene", 3));

    let mut objects: Vec<Box<dyn GameObject>> = vec![
        Box::new(Cube::new(&gl, "cube").unwrap()),
        Box::new(PointLight::new("lamp")),
        Box::new(DirLight::new("sun")),
    ];
    for object in objects.iter_mut() {
        object.set_shader(Some(shader.clone()));
    }

    let types: Vec<_> = objects.iter().map(|object| object.object_type()).collect();
    assert_eq!(
        types,
        vec![
            GameObjectType::Cube,
            GameObjectType::PointLight,
            GameObjectType::DirLight
        ]
    );

    for object in &objects {
        object.render(&gl).unwrap();
    }
}

#[test]
fn dir_light_direction_follows_rotation() {
    let mut light = DirLight::new("sun");

    let down = light.direction();
    assert!((down - Vector3::new(0.0, -1.0, 0.0)).magnitude() < 1e-5);

    // a quarter turn about X tilts the beam from -Y onto -Z
    light.set_rotation(Vector3::new(90.0, 0.0, 0.0));
    let tilted = light.direction();
    assert!((tilted - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-5);
}

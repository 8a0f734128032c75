//! Hand-authored demo scenes wired into a name registry.
//!
//! Scene construction is configuration data: it only decides which
//! primitives, materials and lights exist, never how they render.

use crate::{
    camera::Camera,
    material::{BlinnPhong, Dielectric, DiffuseLight, Lambertian, Metal},
    primitives::{Cuboid, FlipNormals, MovingSphere, Rect, Sphere},
    scene::{Light, Scene},
    textures::CheckerTexture,
    DefaultRng,
};
use glam::{vec3, Vec3};
use itertools::iproduct;
use lazy_static::lazy_static;
use rand::prelude::*;
use std::collections::HashMap;

type Builder = fn(f32) -> (Scene, Camera);

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, Builder> = {
        let mut scenes: HashMap<&'static str, Builder> = HashMap::new();
        scenes.insert("cornell", cornell as Builder);
        scenes.insert("cornell_blur", cornell_blur);
        scenes.insert("cornell_shadow", cornell_shadow);
        scenes.insert("simple_light", simple_light);
        scenes.insert("sphere_field", sphere_field);

        scenes
    };
}

/// Builds the named scene at the given aspect ratio.
pub fn build(name: &str, aspect: f32) -> Option<(Scene, Camera)> {
    REGISTRY.get(name).map(|builder| builder(aspect))
}

/// Registered scene names, sorted for display.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();

    names
}

fn cornell_camera(aspect: f32) -> Camera {
    let eye = vec3(278.0, 278.0, -800.0);
    let target = vec3(278.0, 278.0, 0.0);

    Camera::new(
        eye,
        target,
        vec3(0.0, 1.0, 0.0),
        40.0,
        aspect,
        0.0,
        (eye - target).length() * 2.0,
        0.0,
        1.0,
    )
}

// Side walls, ceiling and floor of the cornell shell; each variant supplies
// its own back wall and light
fn cornell_walls(scene: &mut Scene) {
    let red = scene.add_material(Lambertian::new(vec3(0.65, 0.05, 0.05)));
    let green = scene.add_material(Lambertian::new(vec3(0.12, 0.45, 0.15)));
    let white = scene.add_material(Lambertian::new(vec3(0.73, 0.73, 0.73)));

    scene.add(FlipNormals::new(Rect::yz(0.0, 555.0, 0.0, 555.0, 555.0, red)));
    scene.add(Rect::yz(0.0, 555.0, 0.0, 555.0, 0.0, green));
    scene.add(FlipNormals::new(Rect::xz(0.0, 555.0, 0.0, 555.0, 555.0, white)));
    scene.add(Rect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white));
}

/// Cornell box with a glass sphere and a brushed-metal sphere resting on
/// two matte boxes
fn cornell(aspect: f32) -> (Scene, Camera) {
    let mut scene = Scene::new(Vec3::zero());
    cornell_walls(&mut scene);

    let white = scene.add_material(Lambertian::new(vec3(0.73, 0.73, 0.73)));
    scene.add(FlipNormals::new(Rect::xy(0.0, 555.0, 0.0, 555.0, 555.0, white)));

    let lamp = scene.add_material(DiffuseLight::new(vec3(15.0, 15.0, 15.0)));
    scene.add(FlipNormals::new(Rect::xz(213.0, 343.0, 227.0, 332.0, 554.0, lamp)));

    scene.add(Cuboid::new(
        vec3(130.0, 0.0, 65.0),
        vec3(295.0, 165.0, 230.0),
        white,
    ));
    scene.add(Cuboid::new(
        vec3(265.0, 0.0, 295.0),
        vec3(430.0, 330.0, 460.0),
        white,
    ));

    let glass = scene.add_material(Dielectric::new(1.5));
    scene.add(Sphere::new(vec3(212.0, 240.0, 147.0), 75.0, glass));

    let steel = scene.add_material(Metal::new(vec3(0.8, 0.85, 0.88), 0.05));
    scene.add(Sphere::new(vec3(347.0, 405.0, 377.0), 75.0, steel));

    (scene, cornell_camera(aspect))
}

/// Cornell variant with a checkered back wall and a motion-blurred sphere
fn cornell_blur(aspect: f32) -> (Scene, Camera) {
    let mut scene = Scene::new(Vec3::zero());
    cornell_walls(&mut scene);

    let checker = scene.add_material(Lambertian::new(CheckerTexture::new(
        vec3(0.73, 0.73, 0.73),
        vec3(0.2, 0.3, 0.1),
        0.02,
    )));
    scene.add(FlipNormals::new(Rect::xy(0.0, 555.0, 0.0, 555.0, 555.0, checker)));

    let lamp = scene.add_material(DiffuseLight::new(vec3(15.0, 15.0, 15.0)));
    scene.add(FlipNormals::new(Rect::xz(213.0, 343.0, 227.0, 332.0, 554.0, lamp)));

    let white = scene.add_material(Lambertian::new(vec3(0.73, 0.73, 0.73)));
    scene.add(Cuboid::new(
        vec3(265.0, 0.0, 295.0),
        vec3(430.0, 330.0, 460.0),
        white,
    ));

    // Swept across the shutter interval of the cornell camera
    scene.add(MovingSphere::new(
        vec3(170.0, 90.0, 150.0),
        vec3(270.0, 90.0, 150.0),
        0.0,
        1.0,
        90.0,
        white,
    ));

    (scene, cornell_camera(aspect))
}

/// Cornell shaded with the direct-lighting material; shadows are absent by
/// construction since no visibility ray is cast
fn cornell_shadow(aspect: f32) -> (Scene, Camera) {
    let mut scene = Scene::new(vec3(0.05, 0.05, 0.05));

    let red = scene.add_material(BlinnPhong::new(vec3(0.65, 0.05, 0.05), Vec3::one(), 64.0));
    let green = scene.add_material(BlinnPhong::new(vec3(0.12, 0.45, 0.15), Vec3::one(), 64.0));
    let white = scene.add_material(BlinnPhong::new(vec3(0.73, 0.73, 0.73), Vec3::one(), 64.0));

    scene.add(FlipNormals::new(Rect::yz(0.0, 555.0, 0.0, 555.0, 555.0, red)));
    scene.add(Rect::yz(0.0, 555.0, 0.0, 555.0, 0.0, green));
    scene.add(FlipNormals::new(Rect::xz(0.0, 555.0, 0.0, 555.0, 555.0, white)));
    scene.add(Rect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white));
    scene.add(FlipNormals::new(Rect::xy(0.0, 555.0, 0.0, 555.0, 555.0, white)));

    let shiny = scene.add_material(BlinnPhong::new(vec3(0.65, 0.05, 0.05), Vec3::one(), 128.0));
    scene.add(Cuboid::new(
        vec3(130.0, 0.0, 65.0),
        vec3(295.0, 165.0, 230.0),
        white,
    ));
    scene.add(Sphere::new(vec3(370.0, 90.0, 350.0), 90.0, shiny));

    scene.add_light(Light::new(
        vec3(278.0, 450.0, 278.0),
        vec3(0.0, -1.0, 0.0),
        vec3(130.0, 0.0, 105.0),
        vec3(90_000.0, 90_000.0, 90_000.0),
    ));

    (scene, cornell_camera(aspect))
}

/// Matte sphere on a checkered floor under a small area light
fn simple_light(aspect: f32) -> (Scene, Camera) {
    let mut scene = Scene::new(vec3(0.02, 0.02, 0.04));

    let checker = scene.add_material(Lambertian::new(CheckerTexture::new(
        vec3(0.8, 0.8, 0.8),
        vec3(0.25, 0.3, 0.35),
        10.0,
    )));
    scene.add(Sphere::new(vec3(0.0, -1000.0, 0.0), 1000.0, checker));

    let matte = scene.add_material(Lambertian::new(vec3(0.6, 0.2, 0.9)));
    scene.add(Sphere::new(vec3(0.0, 2.0, 0.0), 2.0, matte));

    let lamp = scene.add_material(DiffuseLight::new(vec3(4.0, 4.0, 4.0)));
    scene.add(Rect::xy(3.0, 5.0, 1.0, 3.0, -2.0, lamp));

    let eye = vec3(26.0, 3.0, 6.0);
    let target = vec3(0.0, 2.0, 0.0);
    let camera = Camera::new(
        eye,
        target,
        vec3(0.0, 1.0, 0.0),
        20.0,
        aspect,
        0.0,
        (eye - target).length(),
        0.0,
        0.0,
    );

    (scene, camera)
}

/// Field of small random spheres around three feature spheres, lit from
/// above; generated deterministically so reruns agree
fn sphere_field(aspect: f32) -> (Scene, Camera) {
    let mut rng = DefaultRng::seed_from_u64(39);
    let mut scene = Scene::new(vec3(0.05, 0.07, 0.1));

    let ground = scene.add_material(Lambertian::new(vec3(0.5, 0.5, 0.5)));
    scene.add(Sphere::new(vec3(0.0, -1000.0, 0.0), 1000.0, ground));

    for (a, b) in iproduct!(-6..6, -6..6) {
        let center = vec3(
            a as f32 + 0.9 * rng.gen::<f32>(),
            0.2,
            b as f32 + 0.9 * rng.gen::<f32>(),
        );

        if (center - vec3(4.0, 0.2, 0.0)).length() <= 0.9 {
            continue;
        }

        let choice = rng.gen::<f32>();
        let material = if choice < 0.5 {
            let albedo = vec3(
                rng.gen::<f32>() * rng.gen::<f32>(),
                rng.gen::<f32>() * rng.gen::<f32>(),
                rng.gen::<f32>() * rng.gen::<f32>(),
            );
            scene.add_material(Lambertian::new(albedo))
        } else if choice < 0.75 {
            let albedo = vec3(
                0.5 * (1.0 + rng.gen::<f32>()),
                0.5 * (1.0 + rng.gen::<f32>()),
                0.5 * (1.0 + rng.gen::<f32>()),
            );
            scene.add_material(Metal::new(albedo, 0.5 * rng.gen::<f32>()))
        } else {
            scene.add_material(Dielectric::new(1.5))
        };

        scene.add(Sphere::new(center, 0.2, material));
    }

    let matte = scene.add_material(Lambertian::new(vec3(0.6, 0.2, 0.9)));
    scene.add(Sphere::new(vec3(-4.0, 1.0, 0.0), 1.0, matte));

    let glass = scene.add_material(Dielectric::new(1.5));
    scene.add(Sphere::new(vec3(0.0, 1.0, 0.0), 1.0, glass));

    let steel = scene.add_material(Metal::new(vec3(0.7, 0.6, 0.5), 0.0));
    scene.add(Sphere::new(vec3(4.0, 1.0, 0.0), 1.0, steel));

    let lamp = scene.add_material(DiffuseLight::new(vec3(6.0, 6.0, 6.0)));
    scene.add(FlipNormals::new(Rect::xz(-3.0, 3.0, -3.0, 3.0, 6.0, lamp)));

    let eye = vec3(13.0, 2.0, 3.0);
    let target = vec3(0.0, 1.0, 0.0);
    let camera = Camera::new(
        eye,
        target,
        vec3(0.0, 1.0, 0.0),
        20.0,
        aspect,
        0.1,
        (eye - target).length(),
        0.0,
        1.0,
    );

    (scene, camera)
}

use crate::{
    material::MaterialId,
    primitives::Intersect,
    ray::{Hit, Ray},
};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

// Solves the half-b quadratic from substituting the ray into the implicit
// sphere equation; b absorbs the usual factor of two, so the discriminant
// is b^2 - a*c.
fn hit_sphere(
    center: Vec3,
    radius: f32,
    material: MaterialId,
    ray: Ray,
    t_min: f32,
    t_max: f32,
) -> Option<Hit> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - a * c;

    if discriminant > 0.0 {
        let sqrt_d = f32::sqrt(discriminant);

        // Smaller root first, both strictly inside (t_min, t_max)
        for &t in &[(-b - sqrt_d) / a, (-b + sqrt_d) / a] {
            if t_min < t && t < t_max {
                let point = ray.point_at_parameter(t);

                return Some(Hit {
                    t,
                    point,
                    normal: (point - center) / radius,
                    material,
                });
            }
        }
    }

    None
}

impl Intersect for Sphere {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        hit_sphere(self.center, self.radius, self.material, ray, t_min, t_max)
    }
}

/// Sphere whose center moves linearly between two keyframes over its time
/// interval, sampled at the ray's capture time.
#[derive(Clone, Debug)]
pub struct MovingSphere {
    center0: Vec3,
    center1: Vec3,
    time0: f32,
    time1: f32,
    radius: f32,
    material: MaterialId,
}

impl MovingSphere {
    pub fn new(
        center0: Vec3,
        center1: Vec3,
        time0: f32,
        time1: f32,
        radius: f32,
        material: MaterialId,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius,
            material,
        }
    }

    fn center(&self, time: f32) -> Vec3 {
        let s = (time - self.time0) / (self.time1 - self.time0);
        let s = f32::min(f32::max(s, 0.0), 1.0);

        self.center0 + s * (self.center1 - self.center0)
    }
}

impl Intersect for MovingSphere {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        hit_sphere(
            self.center(ray.time),
            self.radius,
            self.material,
            ray,
            t_min,
            t_max,
        )
    }
}

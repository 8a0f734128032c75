use crate::{material::sample_unit_disk, ray::Ray, DefaultRng};
use glam::{vec3, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// Thin-lens camera with a shutter interval for motion blur.
///
/// The authoring parameters are kept alongside the derived viewport basis
/// so the mutating operations can rebuild it in place. After `orbit` or
/// `pan` the caller must reset its accumulation buffer.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    vfov: f32,
    aspect: f32,
    aperture: f32,
    focus_dist: f32,
    time0: f32,
    time1: f32,

    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        vfov: f32,
        aspect: f32,
        aperture: f32,
        focus_dist: f32,
        time0: f32,
        time1: f32,
    ) -> Self {
        let mut camera = Self {
            eye,
            target,
            up,
            vfov,
            aspect,
            aperture,
            focus_dist,
            time0,
            time1,
            origin: Vec3::zero(),
            lower_left_corner: Vec3::zero(),
            horizontal: Vec3::zero(),
            vertical: Vec3::zero(),
            u: Vec3::zero(),
            v: Vec3::zero(),
            lens_radius: 0.0,
        };
        camera.rebuild();

        camera
    }

    // Recomputes the orthonormal basis and viewport from the authoring
    // parameters
    fn rebuild(&mut self) {
        let theta = self.vfov * PI / 180.0;
        let half_height = f32::tan(theta / 2.0);
        let half_width = self.aspect * half_height;
        let w = (self.eye - self.target).normalize();
        let u = self.up.cross(w).normalize();
        let v = w.cross(u);

        self.origin = self.eye;
        self.lower_left_corner = self.eye
            - half_width * self.focus_dist * u
            - half_height * self.focus_dist * v
            - self.focus_dist * w;
        self.horizontal = 2.0 * half_width * self.focus_dist * u;
        self.vertical = 2.0 * half_height * self.focus_dist * v;
        self.u = u;
        self.v = v;
        self.lens_radius = self.aperture / 2.0;
    }

    /// World-space ray through normalized screen coordinates (s, t), with a
    /// lens-disk origin offset and a shutter-time sample. The direction is
    /// not normalized.
    pub fn ray(&self, s: f32, t: f32, rng: &mut DefaultRng) -> Ray {
        let rd = sample_unit_disk(rng);
        let offset = self.u * (self.lens_radius * rd[0]) + self.v * (self.lens_radius * rd[1]);
        let time = if self.time1 > self.time0 {
            rng.gen_range(self.time0, self.time1)
        } else {
            self.time0
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
            time,
        )
    }

    /// Rotates the eye around the target. Pitch stops short of the poles so
    /// the basis stays well defined.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let offset = self.eye - self.target;
        let radius = offset.length();
        let yaw = f32::atan2(offset.z, offset.x) + delta_yaw;
        let pitch = f32::asin(offset.y / radius) + delta_pitch;
        let limit = 0.495 * PI;
        let pitch = f32::min(f32::max(pitch, -limit), limit);

        self.eye = self.target
            + radius * vec3(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin());
        self.rebuild();
    }

    /// Slides eye and target together along the viewport basis.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let delta = self.u * dx + self.v * dy;
        self.eye += delta;
        self.target += delta;
        self.rebuild();
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn shutter(&self) -> (f32, f32) {
        (self.time0, self.time1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> DefaultRng {
        DefaultRng::seed_from_u64(5)
    }

    fn camera() -> Camera {
        Camera::new(
            vec3(0.0, 0.0, 2.0),
            Vec3::zero(),
            vec3(0.0, 1.0, 0.0),
            90.0,
            2.0,
            0.0,
            2.0,
            0.2,
            0.6,
        )
    }

    #[test]
    fn center_ray_points_at_the_target() {
        let camera = camera();
        let ray = camera.ray(0.5, 0.5, &mut rng());

        assert!((ray.origin - vec3(0.0, 0.0, 2.0)).length() < 1e-5);
        let direction = ray.direction.normalize();
        assert!((direction - vec3(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn shutter_times_stay_inside_the_interval() {
        let camera = camera();
        let mut rng = rng();

        for _ in 0..64 {
            let ray = camera.ray(0.3, 0.7, &mut rng);
            assert!(ray.time >= 0.2 && ray.time < 0.6);
        }
    }

    #[test]
    fn degenerate_shutter_is_allowed() {
        let camera = Camera::new(
            vec3(0.0, 0.0, 2.0),
            Vec3::zero(),
            vec3(0.0, 1.0, 0.0),
            90.0,
            1.0,
            0.0,
            2.0,
            0.0,
            0.0,
        );

        assert_eq!(camera.shutter(), (0.0, 0.0));
        assert_eq!(camera.ray(0.5, 0.5, &mut rng()).time, 0.0);
    }

    #[test]
    fn orbit_preserves_the_target_distance() {
        let mut camera = camera();
        let before = (camera.eye() - camera.target()).length();

        camera.orbit(0.8, 0.3);

        let after = (camera.eye() - camera.target()).length();
        assert!((before - after).abs() < 1e-4);

        // The rebuilt view still points at the target
        let ray = camera.ray(0.5, 0.5, &mut rng());
        let direction = ray.direction.normalize();
        let expected = (camera.target() - camera.eye()).normalize();
        assert!((direction - expected).length() < 1e-4);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut camera = camera();
        let offset_before = camera.target() - camera.eye();

        camera.pan(1.5, -0.5);

        let offset_after = camera.target() - camera.eye();
        assert!((offset_before - offset_after).length() < 1e-5);
    }
}

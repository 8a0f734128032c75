use crate::{
    material::MaterialId,
    primitives::{Axis, Intersect},
    ray::{Hit, Ray},
};

/// Axis-aligned rectangle lying in the plane `fixed_axis == k`.
///
/// The in-plane bounds (a0..a1, b0..b1) follow the axis order of the two
/// remaining coordinates. The normal points along +fixed_axis; wrap the
/// rect in FlipNormals to face it the other way.
#[derive(Clone, Debug)]
pub struct Rect {
    fixed_axis: Axis,
    a0: f32,
    a1: f32,
    b0: f32,
    b1: f32,
    k: f32,
    material: MaterialId,
}

impl Rect {
    /// Rectangle in the z = k plane spanning x and y
    pub fn xy(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: MaterialId) -> Self {
        Self {
            fixed_axis: Axis::Z,
            a0: x0,
            a1: x1,
            b0: y0,
            b1: y1,
            k,
            material,
        }
    }

    /// Rectangle in the y = k plane spanning x and z
    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: MaterialId) -> Self {
        Self {
            fixed_axis: Axis::Y,
            a0: x0,
            a1: x1,
            b0: z0,
            b1: z1,
            k,
            material,
        }
    }

    /// Rectangle in the x = k plane spanning y and z
    pub fn yz(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: MaterialId) -> Self {
        Self {
            fixed_axis: Axis::X,
            a0: y0,
            a1: y1,
            b0: z0,
            b1: z1,
            k,
            material,
        }
    }

    fn plane_axes(&self) -> (Axis, Axis) {
        match self.fixed_axis {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl Intersect for Rect {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let along = self.fixed_axis.of(ray.direction);
        // A ray parallel to the plane never crosses it
        if along.abs() < 1e-8 {
            return None;
        }

        let t = (self.k - self.fixed_axis.of(ray.origin)) / along;
        if t <= t_min || t >= t_max {
            return None;
        }

        let point = ray.point_at_parameter(t);
        let (axis_a, axis_b) = self.plane_axes();
        let a = axis_a.of(point);
        let b = axis_b.of(point);
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return None;
        }

        Some(Hit {
            t,
            point,
            normal: self.fixed_axis.unit(),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec3, Vec3};

    const MATERIAL: MaterialId = MaterialId(0);

    #[test]
    fn xz_rect_is_hit_from_above() {
        let rect = Rect::xz(-1.0, 1.0, -1.0, 1.0, 0.0, MATERIAL);
        let ray = Ray::new(vec3(0.5, 2.0, -0.5), vec3(0.0, -1.0, 0.0), 0.0);
        let hit = rect.intersection(ray, 0.001, f32::MAX).unwrap();

        assert!((hit.t - 2.0).abs() < 1e-5);
        assert_eq!(hit.normal, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn parallel_rays_never_cross_the_plane() {
        let rect = Rect::xy(-1.0, 1.0, -1.0, 1.0, 0.0, MATERIAL);
        let ray = Ray::new(vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0), 0.0);

        assert!(rect.intersection(ray, 0.001, f32::MAX).is_none());
    }

    #[test]
    fn out_of_bounds_plane_crossings_miss() {
        let rect = Rect::xy(-1.0, 1.0, -1.0, 1.0, 0.0, MATERIAL);
        let ray = Ray::new(vec3(3.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0), 0.0);

        assert!(rect.intersection(ray, 0.001, f32::MAX).is_none());
    }

    #[test]
    fn yz_rect_normal_points_along_x() {
        let rect = Rect::yz(0.0, 2.0, 0.0, 2.0, 5.0, MATERIAL);
        let ray = Ray::new(vec3(0.0, 1.0, 1.0), vec3(1.0, 0.0, 0.0), 0.0);
        let hit = rect.intersection(ray, 0.001, f32::MAX).unwrap();

        assert!((hit.t - 5.0).abs() < 1e-5);
        assert_eq!(hit.normal, vec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn crossings_outside_the_t_window_miss() {
        let rect = Rect::xy(-1.0, 1.0, -1.0, 1.0, 0.0, MATERIAL);
        let ray = Ray::new(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0), 0.0);

        assert!(rect.intersection(ray, 0.001, 0.5).is_none());
        assert!(rect.intersection(Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0), 0.0), 0.001, 1.0)
            .is_none());
    }
}

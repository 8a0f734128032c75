use crate::{
    material::MaterialId,
    primitives::{FlipNormals, Intersect, PrimitiveList, Rect},
    ray::{Hit, Ray},
};
use glam::Vec3;

/// Axis-aligned box assembled from six rects. The faces at the minimum
/// extents are flipped so every normal faces outward.
#[derive(Debug)]
pub struct Cuboid {
    sides: PrimitiveList,
}

impl Cuboid {
    pub fn new(p_min: Vec3, p_max: Vec3, material: MaterialId) -> Self {
        let mut sides = PrimitiveList::new();

        sides.push(Rect::xy(
            p_min.x,
            p_max.x,
            p_min.y,
            p_max.y,
            p_max.z,
            material,
        ));
        sides.push(FlipNormals::new(Rect::xy(
            p_min.x,
            p_max.x,
            p_min.y,
            p_max.y,
            p_min.z,
            material,
        )));
        sides.push(Rect::xz(
            p_min.x,
            p_max.x,
            p_min.z,
            p_max.z,
            p_max.y,
            material,
        ));
        sides.push(FlipNormals::new(Rect::xz(
            p_min.x,
            p_max.x,
            p_min.z,
            p_max.z,
            p_min.y,
            material,
        )));
        sides.push(Rect::yz(
            p_min.y,
            p_max.y,
            p_min.z,
            p_max.z,
            p_max.x,
            material,
        ));
        sides.push(FlipNormals::new(Rect::yz(
            p_min.y,
            p_max.y,
            p_min.z,
            p_max.z,
            p_min.x,
            material,
        )));

        Self { sides }
    }
}

impl Intersect for Cuboid {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        self.sides.intersection(ray, t_min, t_max)
    }
}

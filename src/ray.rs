use crate::material::MaterialId;
use glam::Vec3;

/// The ray data type
#[derive(Clone, Copy, Debug, Default)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Capture time, drawn from the camera's shutter interval. Scattered
    /// rays inherit it so moving geometry stays coherent along a path.
    pub time: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    pub fn point_at_parameter(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Contains data to be used in the generation of a new ray as a result of an intersection.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    /// Unit length, oriented by the owning primitive's convention
    pub normal: Vec3,
    pub material: MaterialId,
}

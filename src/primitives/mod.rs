//! This module is full of primitives that all impl Intersect

mod cuboid;
mod flip;
mod rect;
mod sphere;

pub use cuboid::*;
pub use flip::*;
pub use rect::*;
pub use sphere::*;

use crate::ray::{Hit, Ray};
use glam::{vec3, Vec3};

/// Computes whether a ray intersects a primitive
pub trait Intersect: Send + Sync {
    /// Computes the closest intersection strictly inside (t_min, t_max)
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit>;
}

/// One of the three world axes; parameterizes the axis-aligned shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component of v along this axis
    pub fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => vec3(1.0, 0.0, 0.0),
            Axis::Y => vec3(0.0, 1.0, 0.0),
            Axis::Z => vec3(0.0, 0.0, 1.0),
        }
    }
}

/// Closed set of shapes the renderer understands. Composites hold their
/// children by value; only the decorator boxes for recursion.
#[derive(Debug)]
pub enum Primitive {
    Sphere(Sphere),
    MovingSphere(MovingSphere),
    Rect(Rect),
    Cuboid(Cuboid),
    FlipNormals(FlipNormals),
    List(PrimitiveList),
}

impl Intersect for Primitive {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        match self {
            Primitive::Sphere(primitive) => primitive.intersection(ray, t_min, t_max),
            Primitive::MovingSphere(primitive) => primitive.intersection(ray, t_min, t_max),
            Primitive::Rect(primitive) => primitive.intersection(ray, t_min, t_max),
            Primitive::Cuboid(primitive) => primitive.intersection(ray, t_min, t_max),
            Primitive::FlipNormals(primitive) => primitive.intersection(ray, t_min, t_max),
            Primitive::List(primitive) => primitive.intersection(ray, t_min, t_max),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(primitive: Sphere) -> Self {
        Primitive::Sphere(primitive)
    }
}

impl From<MovingSphere> for Primitive {
    fn from(primitive: MovingSphere) -> Self {
        Primitive::MovingSphere(primitive)
    }
}

impl From<Rect> for Primitive {
    fn from(primitive: Rect) -> Self {
        Primitive::Rect(primitive)
    }
}

impl From<Cuboid> for Primitive {
    fn from(primitive: Cuboid) -> Self {
        Primitive::Cuboid(primitive)
    }
}

impl From<FlipNormals> for Primitive {
    fn from(primitive: FlipNormals) -> Self {
        Primitive::FlipNormals(primitive)
    }
}

impl From<PrimitiveList> for Primitive {
    fn from(primitive: PrimitiveList) -> Self {
        Primitive::List(primitive)
    }
}

/// Linear aggregate reporting the closest child hit.
#[derive(Debug, Default)]
pub struct PrimitiveList {
    objects: Vec<Primitive>,
}

impl PrimitiveList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.objects.push(primitive.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Intersect for PrimitiveList {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let mut closest = t_max;
        let mut hit = None;

        // Each child is queried with the tightest upper bound seen so far,
        // so insertion order cannot change the winner
        for primitive in &self.objects {
            if let Some(h) = primitive.intersection(ray, t_min, closest) {
                closest = h.t;
                hit = Some(h);
            }
        }

        hit
    }
}

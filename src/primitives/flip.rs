use crate::{
    primitives::{Intersect, Primitive},
    ray::{Hit, Ray},
};

/// Decorator negating the wrapped primitive's surface normal; everything
/// else passes through. Used to face walls and lights into enclosed scenes.
#[derive(Debug)]
pub struct FlipNormals {
    inner: Box<Primitive>,
}

impl FlipNormals {
    pub fn new(inner: impl Into<Primitive>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }
}

impl Intersect for FlipNormals {
    fn intersection(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        self.inner.intersection(ray, t_min, t_max).map(|mut hit| {
            hit.normal = -hit.normal;
            hit
        })
    }
}

use crate::{
    material::{MaterialId, Materials},
    primitives::{Intersect, Primitive, PrimitiveList},
    ray::{Hit, Ray},
};
use glam::Vec3;

/// Hint describing an explicit light for the direct-lighting material:
/// position, facing normal, surface dimensions and radiant power. Only
/// position and power feed the shading; the rest ride along for callers.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Vec3,
    pub normal: Vec3,
    pub dimensions: Vec3,
    pub power: Vec3,
}

impl Light {
    pub fn new(position: Vec3, normal: Vec3, dimensions: Vec3, power: Vec3) -> Self {
        Self {
            position,
            normal,
            dimensions,
            power,
        }
    }
}

/// Read-only render context: the primitive aggregate, the material arena it
/// points into, registered light hints and the ambient background.
///
/// Built once by scene construction and never mutated while workers render.
pub struct Scene {
    root: PrimitiveList,
    materials: Vec<Materials>,
    lights: Vec<Light>,
    background: Vec3,
}

impl Scene {
    pub fn new(background: Vec3) -> Self {
        Self {
            root: PrimitiveList::new(),
            materials: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Moves a material into the arena and returns its handle.
    pub fn add_material(&mut self, material: impl Into<Materials>) -> MaterialId {
        self.materials.push(material.into());
        MaterialId((self.materials.len() - 1) as u32)
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.root.push(primitive);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn material(&self, id: MaterialId) -> &Materials {
        &self.materials[id.index()]
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> Vec3 {
        self.background
    }

    /// Closest intersection against the whole aggregate.
    pub fn hit(&self, ray: Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        self.root.intersection(ray, t_min, t_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{Dielectric, Lambertian},
        primitives::Sphere,
    };
    use glam::vec3;

    #[test]
    fn material_arena_hands_out_stable_ids() {
        let mut scene = Scene::new(Vec3::zero());
        let a = scene.add_material(Lambertian::new(vec3(1.0, 0.0, 0.0)));
        let b = scene.add_material(Dielectric::new(1.5));

        assert_ne!(a, b);
        match scene.material(a) {
            Materials::Lambertian(_) => {}
            _ => panic!("wrong arena slot for a"),
        }
        match scene.material(b) {
            Materials::Dielectric(_) => {}
            _ => panic!("wrong arena slot for b"),
        }
    }

    #[test]
    fn scene_hit_queries_the_aggregate() {
        let mut scene = Scene::new(vec3(0.5, 0.5, 0.5));
        let matte = scene.add_material(Lambertian::new(vec3(0.5, 0.5, 0.5)));
        scene.add(Sphere::new(vec3(0.0, 0.0, -8.0), 1.0, matte));
        scene.add(Sphere::new(vec3(0.0, 0.0, -4.0), 1.0, matte));

        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0), 0.0);
        let hit = scene.hit(ray, 0.001, f32::MAX).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-5);

        assert!(scene.lights().is_empty());
        assert_eq!(scene.background(), vec3(0.5, 0.5, 0.5));
    }
}

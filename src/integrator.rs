use crate::{material::Material, ray::Ray, scene::Scene, DefaultRng};
use glam::Vec3;

/// Computes the radiance carried back along a ray.
///
/// Emission always contributes. Scattered branches recurse with their
/// attenuation until the depth limit is reached or the surface absorbs the
/// path; indirect light beyond the limit is dropped. Misses return the
/// scene's ambient background. `rays` counts every trace call for
/// throughput reporting.
pub fn trace(
    ray: Ray,
    scene: &Scene,
    depth: u32,
    max_depth: u32,
    rays: &mut u64,
    rng: &mut DefaultRng,
) -> Vec3 {
    *rays += 1;

    // The lower bound skips re-intersecting the scatter origin
    if let Some(hit) = scene.hit(ray, 0.001, f32::MAX) {
        let material = scene.material(hit.material);
        let emitted = material.emitted(ray, hit, scene.lights());

        if depth >= max_depth {
            return emitted;
        }

        let branches = material.scatter(ray, hit, rng);
        if branches.is_empty() {
            return emitted;
        }

        let mut color = emitted;
        for branch in branches {
            color += branch.attenuation * trace(branch.ray, scene, depth + 1, max_depth, rays, rng);
        }
        color
    } else {
        scene.background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{DiffuseLight, Lambertian, Metal},
        primitives::{FlipNormals, Rect, Sphere},
    };
    use glam::vec3;
    use rand::SeedableRng;

    fn rng() -> DefaultRng {
        DefaultRng::seed_from_u64(11)
    }

    #[test]
    fn miss_returns_the_ambient_background_exactly() {
        let scene = Scene::new(vec3(0.1, 0.2, 0.3));
        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0), 0.0);
        let mut rays = 0;

        assert_eq!(
            trace(ray, &scene, 0, 8, &mut rays, &mut rng()),
            vec3(0.1, 0.2, 0.3)
        );
        assert_eq!(rays, 1);
    }

    #[test]
    fn zero_depth_budget_returns_black_on_diffuse() {
        let mut scene = Scene::new(vec3(0.5, 0.5, 0.5));
        let matte = scene.add_material(Lambertian::new(vec3(0.8, 0.8, 0.8)));
        scene.add(Sphere::new(vec3(0.0, 0.0, -3.0), 1.0, matte));

        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0), 0.0);
        let mut rays = 0;

        assert_eq!(
            trace(ray, &scene, 0, 0, &mut rays, &mut rng()),
            Vec3::zero()
        );
    }

    #[test]
    fn emissive_surfaces_return_their_radiance() {
        let mut scene = Scene::new(Vec3::zero());
        let lamp = scene.add_material(DiffuseLight::new(vec3(7.0, 7.0, 7.0)));
        scene.add(Rect::xy(-1.0, 1.0, -1.0, 1.0, -2.0, lamp));

        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0), 0.0);
        let mut rays = 0;

        assert_eq!(
            trace(ray, &scene, 0, 8, &mut rays, &mut rng()),
            vec3(7.0, 7.0, 7.0)
        );
    }

    #[test]
    fn diffuse_bounce_gathers_light_through_the_attenuation() {
        // Matte floor under a lamp that covers the whole upward hemisphere:
        // one bounce lands on the lamp no matter where it scatters
        let mut scene = Scene::new(Vec3::zero());
        let matte = scene.add_material(Lambertian::new(vec3(0.5, 0.5, 0.5)));
        scene.add(Rect::xz(-1e4, 1e4, -1e4, 1e4, 0.0, matte));
        let lamp = scene.add_material(DiffuseLight::new(vec3(5.0, 5.0, 5.0)));
        scene.add(FlipNormals::new(Rect::xz(-1e7, 1e7, -1e7, 1e7, 10.0, lamp)));

        let ray = Ray::new(vec3(0.0, 1.0, 0.0), vec3(0.0, -1.0, 0.0), 0.0);
        let mut rays = 0;
        let color = trace(ray, &scene, 0, 8, &mut rays, &mut rng());

        // Primary ray plus the single diffuse bounce
        assert!((color - vec3(2.5, 2.5, 2.5)).length() < 1e-4);
        assert_eq!(rays, 2);
    }

    #[test]
    fn bounces_stay_within_the_depth_budget() {
        // A mirror tunnel bounces the ray forever; only the depth cutoff
        // terminates it
        let mut scene = Scene::new(Vec3::zero());
        let mirror = scene.add_material(Metal::new(Vec3::one(), 0.0));
        scene.add(Rect::xy(-10.0, 10.0, -10.0, 10.0, -5.0, mirror));
        scene.add(FlipNormals::new(Rect::xy(-10.0, 10.0, -10.0, 10.0, 5.0, mirror)));

        let max_depth = 6;
        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0), 0.0);
        let mut rays = 0;
        trace(ray, &scene, 0, max_depth, &mut rays, &mut rng());

        // Primary ray plus at most one scattered ray per depth level
        assert_eq!(rays, u64::from(max_depth) + 1);
    }
}

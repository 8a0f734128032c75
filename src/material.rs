use crate::{
    ray::{Hit, Ray},
    scene::Light,
    textures::Texture,
    DefaultRng,
};
use glam::Vec3;
use rand::prelude::*;
use rand_distr::{Distribution, UnitDisc, UnitSphere};
use smallvec::{smallvec, SmallVec};

// Samples a random point on the unit sphere from the worker rng
pub fn sample_unit_sphere(rng: &mut DefaultRng) -> Vec3 {
    Vec3::from(UnitSphere.sample(rng))
}

// Samples a random point on the unit disk, for lens offsets
pub fn sample_unit_disk(rng: &mut DefaultRng) -> [f32; 2] {
    UnitDisc.sample(rng)
}

// Reflect vector v around normal n
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

// Refract vector v around normal n and return only if successful
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);

    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * f32::sqrt(discriminant))
    } else {
        None
    }
}

// An approximation for reflectivity
pub fn schlick(cosine: f32, refraction_index: f32) -> f32 {
    let r_0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r_0 = r_0 * r_0;

    r_0 + (1.0 - r_0) * f32::powf(1.0 - cosine, 5.0)
}

/// Handle into the scene's material arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialId(pub(crate) u32);

impl MaterialId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One outgoing ray with its per-channel energy loss.
#[derive(Clone, Copy, Debug)]
pub struct ScatterBranch {
    pub attenuation: Vec3,
    pub ray: Ray,
}

/// Scatter outcome; empty means the surface absorbed the path. The second
/// slot only ever carries the dielectric reflect+refract split.
pub type Scatter = SmallVec<[ScatterBranch; 2]>;

/// Surface behavior: how incoming light scatters and what is emitted.
pub trait Material {
    fn scatter(&self, ray: Ray, hit: Hit, rng: &mut DefaultRng) -> Scatter;

    fn emitted(&self, _ray: Ray, _hit: Hit, _lights: &[Light]) -> Vec3 {
        Vec3::zero()
    }
}

/// Closed set of surface behaviors the renderer understands.
#[derive(Clone, Debug)]
pub enum Materials {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
    BlinnPhong(BlinnPhong),
}

impl Material for Materials {
    fn scatter(&self, ray: Ray, hit: Hit, rng: &mut DefaultRng) -> Scatter {
        match self {
            Materials::Lambertian(material) => material.scatter(ray, hit, rng),
            Materials::Metal(material) => material.scatter(ray, hit, rng),
            Materials::Dielectric(material) => material.scatter(ray, hit, rng),
            Materials::DiffuseLight(material) => material.scatter(ray, hit, rng),
            Materials::BlinnPhong(material) => material.scatter(ray, hit, rng),
        }
    }

    fn emitted(&self, ray: Ray, hit: Hit, lights: &[Light]) -> Vec3 {
        match self {
            Materials::Lambertian(material) => material.emitted(ray, hit, lights),
            Materials::Metal(material) => material.emitted(ray, hit, lights),
            Materials::Dielectric(material) => material.emitted(ray, hit, lights),
            Materials::DiffuseLight(material) => material.emitted(ray, hit, lights),
            Materials::BlinnPhong(material) => material.emitted(ray, hit, lights),
        }
    }
}

impl From<Lambertian> for Materials {
    fn from(material: Lambertian) -> Self {
        Materials::Lambertian(material)
    }
}

impl From<Metal> for Materials {
    fn from(material: Metal) -> Self {
        Materials::Metal(material)
    }
}

impl From<Dielectric> for Materials {
    fn from(material: Dielectric) -> Self {
        Materials::Dielectric(material)
    }
}

impl From<DiffuseLight> for Materials {
    fn from(material: DiffuseLight) -> Self {
        Materials::DiffuseLight(material)
    }
}

impl From<BlinnPhong> for Materials {
    fn from(material: BlinnPhong) -> Self {
        Materials::BlinnPhong(material)
    }
}

#[derive(Clone, Debug)]
pub struct Lambertian {
    pub albedo: Texture,
}

impl Lambertian {
    pub fn new(albedo: impl Into<Texture>) -> Self {
        Self {
            albedo: albedo.into(),
        }
    }
}

impl Material for Lambertian {
    fn scatter(&self, ray: Ray, hit: Hit, rng: &mut DefaultRng) -> Scatter {
        let target = hit.point + hit.normal + sample_unit_sphere(rng);

        smallvec![ScatterBranch {
            attenuation: self.albedo.value(hit.point),
            ray: Ray::new(hit.point, target - hit.point, ray.time),
        }]
    }
}

#[derive(Clone, Debug)]
pub struct Metal {
    pub albedo: Vec3,
    pub fuzz: f32,
}

impl Metal {
    pub fn new(albedo: Vec3, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: f32::min(f32::max(fuzz, 0.0), 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray: Ray, hit: Hit, rng: &mut DefaultRng) -> Scatter {
        let reflected = reflect(ray.direction.normalize(), hit.normal);
        let scattered = Ray::new(
            hit.point,
            reflected + self.fuzz * sample_unit_sphere(rng),
            ray.time,
        );

        // A perturbed reflection pointing into the surface is absorbed
        if scattered.direction.dot(hit.normal) > 0.0 {
            smallvec![ScatterBranch {
                attenuation: self.albedo,
                ray: scattered,
            }]
        } else {
            Scatter::new()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Dielectric {
    refraction_index: f32,
}

impl Dielectric {
    pub fn new(refraction_index: f32) -> Self {
        Self { refraction_index }
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray: Ray, hit: Hit, rng: &mut DefaultRng) -> Scatter {
        let outward_normal;
        let ni_over_nt;
        let cosine;

        if ray.direction.dot(hit.normal) > 0.0 {
            outward_normal = -hit.normal;
            ni_over_nt = self.refraction_index;
            cosine =
                self.refraction_index * ray.direction.dot(hit.normal) / ray.direction.length();
        } else {
            outward_normal = hit.normal;
            ni_over_nt = 1.0 / self.refraction_index;
            cosine = -ray.direction.dot(hit.normal) / ray.direction.length();
        }

        let reflected = Ray::new(hit.point, reflect(ray.direction, hit.normal), ray.time);

        let refracted = match refract(ray.direction, outward_normal, ni_over_nt) {
            Some(direction) => Ray::new(hit.point, direction, ray.time),
            // Total internal reflection
            None => {
                return smallvec![ScatterBranch {
                    attenuation: Vec3::one(),
                    ray: reflected,
                }]
            }
        };

        // Probability decides if the primary branch reflects or refracts
        let reflect_prob = schlick(f32::min(cosine, 1.0), self.refraction_index);

        if rng.gen_bool(f64::from(reflect_prob)) {
            smallvec![ScatterBranch {
                attenuation: Vec3::one(),
                ray: reflected,
            }]
        } else {
            // Whitted-style split: the refracted path also carries the
            // reflected share, weighted by the reflectance
            smallvec![
                ScatterBranch {
                    attenuation: Vec3::one(),
                    ray: refracted,
                },
                ScatterBranch {
                    attenuation: reflect_prob * Vec3::one(),
                    ray: reflected,
                },
            ]
        }
    }
}

/// Emits constant or textured radiance and terminates the path.
#[derive(Clone, Debug)]
pub struct DiffuseLight {
    pub emit: Texture,
}

impl DiffuseLight {
    pub fn new(emit: impl Into<Texture>) -> Self {
        Self { emit: emit.into() }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray: Ray, _hit: Hit, _rng: &mut DefaultRng) -> Scatter {
        Scatter::new()
    }

    fn emitted(&self, _ray: Ray, hit: Hit, _lights: &[Light]) -> Vec3 {
        self.emit.value(hit.point)
    }
}

/// Direct-lighting surface for the explicit light-sampling mode: shades
/// diffuse + specular toward every registered light hint, with no
/// visibility test.
#[derive(Clone, Debug)]
pub struct BlinnPhong {
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl BlinnPhong {
    pub fn new(diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }
}

impl Material for BlinnPhong {
    fn scatter(&self, _ray: Ray, _hit: Hit, _rng: &mut DefaultRng) -> Scatter {
        Scatter::new()
    }

    fn emitted(&self, ray: Ray, hit: Hit, lights: &[Light]) -> Vec3 {
        let view = -ray.direction.normalize();
        let mut color = Vec3::zero();

        for light in lights {
            let to_light = light.position - hit.point;
            let distance_squared = to_light.dot(to_light);
            if distance_squared <= 0.0 {
                continue;
            }

            let l = to_light / f32::sqrt(distance_squared);
            let n_dot_l = f32::max(hit.normal.dot(l), 0.0);
            let half = (l + view).normalize();
            let n_dot_h = f32::max(hit.normal.dot(half), 0.0);
            let irradiance = light.power / distance_squared;

            color += (self.diffuse * n_dot_l
                + self.specular * f32::powf(n_dot_h, self.shininess))
                * irradiance;
        }

        color
    }
}

use crate::{camera::Camera, integrator::trace, scene::Scene, DefaultRng};
use glam::Vec3;
use rand::prelude::*;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// Knobs the presentation layer keeps fixed for a whole frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Recursion budget for the integrator
    pub max_depth: u32,
    /// Base seed the per-row worker generators derive from
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            seed: 0,
        }
    }
}

/// Per-pixel running mean of radiance samples across frames.
pub struct AccumBuffer {
    width: u32,
    height: u32,
    samples: u32,
    pixels: Vec<Vec3>,
}

impl AccumBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: 0,
            pixels: vec![Vec3::zero(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frames accumulated since the last reset
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Accumulated mean radiance at (x, y); rows are stored top-down
    pub fn pixel(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Zeroes every pixel and the sample count. Required after any camera
    /// mutation, before the next frame starts.
    pub fn reset(&mut self) {
        for pixel in &mut self.pixels {
            *pixel = Vec3::zero();
        }
        self.samples = 0;
    }

    /// Tonemapped 8-bit RGB presentation bytes, row-major top-down.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.push(quantize(tonemap(pixel.x)));
            bytes.push(quantize(tonemap(pixel.y)));
            bytes.push(quantize(tonemap(pixel.z)));
        }

        bytes
    }
}

// Filmic transfer (Hable); folds the exposure shoulder and gamma into one
// curve, mapping radiance into [0, 1)
fn tonemap(x: f32) -> f32 {
    let x = f32::max(x - 0.004, 0.0);
    (x * (6.2 * x + 0.5)) / (x * (6.2 * x + 1.7) + 0.06)
}

fn quantize(x: f32) -> u8 {
    f32::min(f32::max(255.9 * x, 0.0), 255.0) as u8
}

/// Blends exactly one new radiance sample into every pixel of the buffer.
///
/// The pixel grid is partitioned by row across the rayon pool; every row
/// worker owns a generator seeded from (seed, frame, row), so a frame is
/// reproducible and no state is shared between workers. The camera and
/// scene must not change until the call returns. Returns the number of rays
/// traced, for throughput logging.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    buffer: &mut AccumBuffer,
    frame: u64,
    options: &RenderOptions,
) -> u64 {
    let width = buffer.width;
    let height = buffer.height;
    let blend = 1.0 / (buffer.samples as f32 + 1.0);
    let ray_count = AtomicU64::new(0);

    buffer
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, pixels)| {
            let worker_seed = options
                .seed
                .wrapping_add(frame * u64::from(height) + row as u64);
            let mut rng = DefaultRng::seed_from_u64(worker_seed);
            let mut rays = 0;

            for (column, pixel) in pixels.iter_mut().enumerate() {
                // Jitter inside the pixel; row 0 is the top of the image
                let s = (column as f32 + rng.gen::<f32>()) / width as f32;
                let t = ((height - 1 - row as u32) as f32 + rng.gen::<f32>()) / height as f32;

                let ray = camera.ray(s, t, &mut rng);
                let sample = trace(ray, scene, 0, options.max_depth, &mut rays, &mut rng);

                *pixel = *pixel * (1.0 - blend) + sample * blend;
            }

            ray_count.fetch_add(rays, Ordering::Relaxed);
        });

    buffer.samples += 1;

    ray_count.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{DiffuseLight, Lambertian},
        primitives::{Rect, Sphere},
    };
    use glam::vec3;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::zero(),
            vec3(0.0, 0.0, -1.0),
            vec3(0.0, 1.0, 0.0),
            60.0,
            8.0 / 6.0,
            0.0,
            3.0,
            0.0,
            1.0,
        )
    }

    fn small_scene() -> (Scene, Camera) {
        let mut scene = Scene::new(vec3(0.1, 0.1, 0.12));
        let matte = scene.add_material(Lambertian::new(vec3(0.6, 0.3, 0.2)));
        scene.add(Sphere::new(vec3(0.0, 0.0, -3.0), 1.0, matte));
        let lamp = scene.add_material(DiffuseLight::new(vec3(4.0, 4.0, 4.0)));
        scene.add(Rect::xy(-2.0, 2.0, -2.0, 2.0, -6.0, lamp));

        (scene, test_camera())
    }

    #[test]
    fn constant_scene_converges_to_the_background() {
        let scene = Scene::new(vec3(0.25, 0.5, 0.75));
        let camera = test_camera();
        let mut buffer = AccumBuffer::new(8, 6);
        let options = RenderOptions {
            max_depth: 4,
            seed: 9,
        };

        for frame in 0..3 {
            render_frame(&scene, &camera, &mut buffer, frame, &options);
        }

        // The running mean of identical samples is the sample
        assert_eq!(buffer.samples(), 3);
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                assert!((buffer.pixel(x, y) - vec3(0.25, 0.5, 0.75)).length() < 1e-5);
            }
        }
    }

    #[test]
    fn reset_then_render_matches_a_fresh_buffer() {
        let (scene, camera) = small_scene();
        let options = RenderOptions {
            max_depth: 4,
            seed: 3,
        };

        let mut fresh = AccumBuffer::new(8, 6);
        render_frame(&scene, &camera, &mut fresh, 0, &options);

        let mut recycled = AccumBuffer::new(8, 6);
        for frame in 0..2 {
            render_frame(&scene, &camera, &mut recycled, frame, &options);
        }
        recycled.reset();
        assert_eq!(recycled.samples(), 0);
        render_frame(&scene, &camera, &mut recycled, 0, &options);

        for y in 0..fresh.height() {
            for x in 0..fresh.width() {
                assert!((fresh.pixel(x, y) - recycled.pixel(x, y)).length() < 1e-6);
            }
        }
    }

    #[test]
    fn accumulation_is_a_running_mean_of_frame_samples() {
        let (scene, camera) = small_scene();
        let options = RenderOptions {
            max_depth: 4,
            seed: 17,
        };

        // Frame samples rendered in isolation...
        let mut first = AccumBuffer::new(8, 6);
        render_frame(&scene, &camera, &mut first, 0, &options);
        let mut second = AccumBuffer::new(8, 6);
        render_frame(&scene, &camera, &mut second, 1, &options);

        // ...must average to the two-frame accumulation
        let mut both = AccumBuffer::new(8, 6);
        render_frame(&scene, &camera, &mut both, 0, &options);
        render_frame(&scene, &camera, &mut both, 1, &options);

        for y in 0..both.height() {
            for x in 0..both.width() {
                let mean = (first.pixel(x, y) + second.pixel(x, y)) / 2.0;
                assert!((both.pixel(x, y) - mean).length() < 1e-5);
            }
        }
    }

    #[test]
    fn every_pixel_gets_exactly_one_primary_ray() {
        let scene = Scene::new(Vec3::zero());
        let camera = test_camera();
        let mut buffer = AccumBuffer::new(8, 6);

        let rays = render_frame(&scene, &camera, &mut buffer, 0, &RenderOptions::default());

        // Nothing to bounce off: one ray per pixel
        assert_eq!(rays, 48);
    }

    #[test]
    fn rgb8_output_is_tonemapped_and_clamped() {
        let mut buffer = AccumBuffer::new(2, 1);
        buffer.pixels[0] = Vec3::zero();
        buffer.pixels[1] = vec3(1000.0, 1000.0, 1000.0);

        let bytes = buffer.to_rgb8();
        assert_eq!(bytes.len(), 6);
        // Black stays black, very bright input lands near white
        assert_eq!(&bytes[0..3], &[0, 0, 0]);
        assert!(bytes[3] > 240);
    }

    #[test]
    fn tonemap_is_monotonic() {
        assert!(tonemap(0.0) <= tonemap(0.1));
        assert!(tonemap(0.1) < tonemap(0.5));
        assert!(tonemap(0.5) < tonemap(2.0));
        assert!(tonemap(2.0) < 1.0);
    }
}

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use glint::{
    cli::Args,
    config, logger,
    renderer::{render_frame, AccumBuffer, RenderOptions},
    scenes,
};
use log::{debug, info, LevelFilter};
use std::{path::Path, time::Instant};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if args.list_scenes {
        for name in scenes::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut settings = config::load(Path::new(&args.config))?;
    if let Some(scene) = args.scene {
        settings.scene = scene;
    }
    if let Some(frames) = args.frames {
        settings.frames = frames;
    }
    if let Some(output) = args.output {
        settings.output = output;
    }

    let (scene, camera) = scenes::build(&settings.scene, settings.aspect())
        .ok_or_else(|| anyhow!("Unknown scene: {} (try --list-scenes)", settings.scene))?;

    let mut buffer = AccumBuffer::new(settings.width, settings.height);
    let options = RenderOptions {
        max_depth: settings.max_ray_depth,
        seed: settings.seed,
    };

    info!(
        "Rendering {} at {}x{}, {} frames, {} workers",
        settings.scene,
        settings.width,
        settings.height,
        settings.frames,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let mut total_rays = 0u64;

    for frame in 0..settings.frames {
        let rays = render_frame(&scene, &camera, &mut buffer, u64::from(frame), &options);
        total_rays += rays;
        debug!("Frame {}/{}: {} rays", frame + 1, settings.frames, rays);
    }

    let elapsed = start.elapsed();
    let mrays = total_rays as f64 / 1_000_000.0;
    info!(
        "Accumulated {} samples/pixel in {:.2?} ({:.2}M rays, {:.2}M rays/s)",
        buffer.samples(),
        elapsed,
        mrays,
        mrays / elapsed.as_secs_f64()
    );

    image::save_buffer(
        &settings.output,
        &buffer.to_rgb8(),
        settings.width,
        settings.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write image: {}", settings.output))?;

    info!("Wrote {}", settings.output);

    Ok(())
}

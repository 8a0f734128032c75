use clap::Parser;

/// Command line arguments for the headless progressive renderer
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A progressive Monte Carlo path tracer")]
pub struct Args {
    /// Path to a TOML settings file
    #[arg(short, long, default_value = "render.toml")]
    pub config: String,

    /// Scene name from the built-in registry (overrides the config file)
    #[arg(short, long)]
    pub scene: Option<String>,

    /// Frames to accumulate (overrides the config file)
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Output PNG path (overrides the config file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// List the available scenes and exit
    #[arg(long)]
    pub list_scenes: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

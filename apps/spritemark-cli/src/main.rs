use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spritemark_common::BenchConfig;
use spritemark_render::{FrameReporter, NullRenderer, Renderer, TextRenderer, run_frames};
use spritemark_sim::SpriteField;

#[derive(Parser)]
#[command(name = "spritemark-cli", about = "Headless spritemark tooling")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print workspace crate versions
    Info,
    /// Run the benchmark loop headless (integration only, no GPU) and emit
    /// one frame-time line per frame
    Run {
        /// Number of sprites to spawn
        #[arg(short, long, default_value = "1000")]
        sprites: usize,
        /// Frames to run
        #[arg(short, long, default_value = "1000")]
        frames: u32,
        /// Seed for the deterministic initializer
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Per-axis speed range scale
        #[arg(long, default_value = "5.0")]
        speed_scale: f32,
    },
    /// Step the simulation and dump the resulting field state
    Dump {
        /// Number of sprites to spawn
        #[arg(short, long, default_value = "5")]
        sprites: usize,
        /// Integration steps to run before dumping
        #[arg(short = 'k', long, default_value = "0")]
        steps: u32,
        /// Seed for the deterministic initializer
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Emit the sprite array as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("spritemark-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "defaults: {}x{} window, {} frames, seed {}",
                BenchConfig::default().width,
                BenchConfig::default().height,
                BenchConfig::default().frames,
                BenchConfig::default().seed
            );
        }
        Commands::Run {
            sprites,
            frames,
            seed,
            speed_scale,
        } => {
            let config = BenchConfig {
                sprites,
                frames,
                seed,
                speed_scale,
                ..BenchConfig::default()
            };
            let mut field = SpriteField::spawn(&config);
            let mut reporter = FrameReporter::new(std::io::stdout());
            let summary = run_frames(
                &mut field,
                &mut NullRenderer::new(),
                config.frames,
                &mut reporter,
            )?;
            tracing::info!(
                frames = summary.frames,
                mean_ms = summary.mean_ms(),
                "headless run complete"
            );
        }
        Commands::Dump {
            sprites,
            steps,
            seed,
            json,
        } => {
            let config = BenchConfig {
                sprites,
                seed,
                ..BenchConfig::default()
            };
            let mut field = SpriteField::spawn(&config);
            for _ in 0..steps {
                field.step();
            }
            if json {
                println!("{}", serde_json::to_string_pretty(field.sprites())?);
            } else {
                print!("{}", TextRenderer::new().render(&field));
            }
            println!("state hash: {:#018x}", field.state_hash());
        }
    }

    Ok(())
}

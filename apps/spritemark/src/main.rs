use anyhow::{Context, Result};
use clap::Parser;
use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use spritemark_common::BenchConfig;
use spritemark_render::FrameReporter;
use spritemark_render_wgpu::{DrawMode, GpuContext, SpriteRenderer, load_texture};
use spritemark_sim::SpriteField;

#[derive(Parser)]
#[command(name = "spritemark", about = "Sprite rendering throughput benchmark")]
struct Cli {
    /// Number of sprites to spawn
    sprites: usize,

    /// Frames to run before exiting
    #[arg(long)]
    frames: Option<u32>,

    /// Seed for the deterministic sprite initializer
    #[arg(long)]
    seed: Option<u64>,

    /// Per-axis speed range scale
    #[arg(long)]
    speed_scale: Option<f32>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Draw submission strategy
    #[arg(long, value_enum, default_value = "per-sprite")]
    draw_mode: DrawModeArg,

    /// Sprite texture (PNG); a built-in pattern is used when absent or unreadable
    #[arg(long)]
    texture: Option<PathBuf>,

    /// JSON config file providing defaults; explicit flags win
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
enum DrawModeArg {
    #[default]
    PerSprite,
    Instanced,
}

impl From<DrawModeArg> for DrawMode {
    fn from(arg: DrawModeArg) -> Self {
        match arg {
            DrawModeArg::PerSprite => DrawMode::PerSprite,
            DrawModeArg::Instanced => DrawMode::Instanced,
        }
    }
}

/// Merge the config file (or defaults) with explicit CLI overrides.
fn build_config(cli: &Cli) -> Result<BenchConfig> {
    let mut config = match &cli.config {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("loading config file {}", path.display()))?,
        None => BenchConfig::default(),
    };
    config.sprites = cli.sprites;
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(speed_scale) = cli.speed_scale {
        config.speed_scale = speed_scale;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    Ok(config)
}

/// Windowed benchmark application.
///
/// GPU state is created in `resumed` and owned here; any initialization
/// failure is stashed and surfaced after the event loop exits.
struct BenchApp {
    config: BenchConfig,
    mode: DrawMode,
    texture_path: Option<PathBuf>,
    field: SpriteField,
    reporter: FrameReporter<Stdout>,
    frames_run: u32,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<SpriteRenderer>,
    init_error: Option<anyhow::Error>,
}

impl BenchApp {
    fn new(config: BenchConfig, mode: DrawMode, texture_path: Option<PathBuf>) -> Self {
        let field = SpriteField::spawn(&config);
        Self {
            config,
            mode,
            texture_path,
            field,
            reporter: FrameReporter::new(std::io::stdout()),
            frames_run: 0,
            window: None,
            gpu: None,
            renderer: None,
            init_error: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("spritemark")
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("creating benchmark window")?,
        );

        let gpu = GpuContext::new(window.clone()).context("initializing GPU context")?;
        let pixels = load_texture(self.texture_path.as_deref());
        let renderer = SpriteRenderer::new(
            &gpu.device,
            &gpu.queue,
            gpu.surface_format(),
            &self.config,
            &pixels,
            self.mode,
        );

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Run one benchmark frame: integrate, render, present, report.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.frames_run >= self.config.frames {
            event_loop.exit();
            return;
        }
        let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) else {
            return;
        };

        let start = Instant::now();
        self.field.step();

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(&gpu.device, &gpu.queue, &view, &self.field);
        output.present();

        let elapsed = start.elapsed();
        self.frames_run += 1;
        if let Err(e) = self.reporter.record(elapsed) {
            tracing::error!("failed to write frame time: {e}");
        }

        if self.frames_run >= self.config.frames {
            tracing::info!(frames = self.frames_run, "frame budget exhausted");
            event_loop.exit();
        } else if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for BenchApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_gpu(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::warn!(
                    frames = self.frames_run,
                    "window closed before frame budget was exhausted"
                );
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    tracing::info!(
        sprites = config.sprites,
        frames = config.frames,
        seed = config.seed,
        draw_mode = ?cli.draw_mode,
        "spritemark starting"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = BenchApp::new(config, cli.draw_mode.into(), cli.texture.clone());
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.init_error.take() {
        return Err(err);
    }

    tracing::info!(frames = app.frames_run, "benchmark complete");
    Ok(())
}

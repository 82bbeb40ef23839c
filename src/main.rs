use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use raylib::prelude::*;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use photoalbum::album::layout::fit_photo;
use photoalbum::constants::*;
use photoalbum::input;
use photoalbum::texture_loader::collect_image_paths;
use photoalbum::{AlbumEngine, AlbumSettings, Engine};

#[derive(Debug, Parser)]
#[command(
    name = "photoalbum",
    version,
    about = "Photo album whose pages turn around a ring binding",
    after_help = input::usage()
)]
struct Args {
    /// Images, or directories of images, in page order
    #[arg(value_name = "PATHS", required = true)]
    paths: Vec<PathBuf>,

    /// Delay in seconds between pages when advancing automatically
    #[arg(short = 'd', long = "delay", value_name = "SECONDS", default_value_t = DEFAULT_TIME_PER_SLIDE)]
    delay: f64,

    /// Start with automatic advance enabled
    #[arg(short = 'a', long = "auto")]
    auto: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(
        format!("photoalbum={}", level)
            .parse()
            .context("building log filter")?,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

/// Scale the fixed-size framebuffer into the window, keeping its aspect ratio.
fn present(rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &RenderTexture2D) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);

    let sw = d.get_screen_width() as f32;
    let sh = d.get_screen_height() as f32;
    let (w, h) = fit_photo(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, sw, sh);

    // Render textures are stored upside down
    d.draw_texture_pro(
        framebuffer,
        Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, -(RENDER_HEIGHT as f32)),
        Rectangle::new((sw - w) * 0.5, (sh - h) * 0.5, w, h),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    if args.delay.is_nan() || args.delay <= 0.0 {
        bail!("--delay must be a positive number of seconds, got {}", args.delay);
    }

    let image_paths = collect_image_paths(&args.paths).context("collecting album pages")?;
    info!(pages = image_paths.len(), delay = args.delay, auto = args.auto, "starting photo album");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Photo Album")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = AlbumEngine::new(AlbumSettings {
        time_per_slide: args.delay,
        auto_advance: args.auto,
    });
    engine.initialize(&mut rl, &thread, image_paths)?;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = rl.get_time();
        if !engine.render_frame(now, &mut rl, &thread, &mut framebuffer) {
            break;
        }
        present(&mut rl, &thread, &framebuffer);
    }

    info!("photo album closed");
    Ok(())
}

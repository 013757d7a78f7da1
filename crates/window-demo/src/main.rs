// File: crates/window-demo/src/main.rs
// Summary: Windowed timeline that maps winit input to app events and blits the
// Skia RGBA frame through softbuffer.

use std::io;
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueHint};
use timeline_core::{load_csv, theme, AppState, Category, Event as AppEvent, Point, Redraw, TimelineConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive disaster-cost timeline", long_about = None)]
struct Cli {
    #[arg(default_value = "data/disaster_costs.csv", value_hint = ValueHint::FilePath)]
    csv: PathBuf,

    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let records = load_csv(&cli.csv).with_context(|| format!("failed to load CSV '{}'", cli.csv.display()))?;
    let config = TimelineConfig::default().with_theme(theme::find(&cli.theme));
    let (width, height) = (config.container_width, config.container_height);
    let mut app = AppState::new(config, records);
    info!("click a legend entry or press 1-5 to toggle a category");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Billion-dollar disasters")
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut cursor: Option<Point> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let redraw = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    Redraw::Idle
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let p = Point::new(position.x as f32, position.y as f32);
                    cursor = Some(p);
                    app.handle(AppEvent::PointerMove(p))
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    app.handle(AppEvent::PointerLeave)
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    match cursor {
                        Some(p) => app.handle(AppEvent::Click(p)),
                        None => Redraw::Idle,
                    }
                }
                WindowEvent::ReceivedCharacter(c) => match c.to_digit(10) {
                    Some(d @ 1..=5) => app.handle(AppEvent::ToggleCategory(Category::ALL[d as usize - 1])),
                    _ => Redraw::Idle,
                },
                _ => Redraw::Idle,
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&app, &mut surface) {
                    error!("draw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
                Redraw::Idle
            }
            _ => Redraw::Idle,
        };
        if redraw == Redraw::Needed {
            window.request_redraw();
        }
    });
}

fn draw(app: &AppState, surface: &mut softbuffer::Surface) -> Result<()> {
    let frame = app.frame();
    let (rgba, w, h, stride) = timeline_render_skia::render_to_rgba8(&frame)?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (y, row) in rgba.chunks_exact(stride).enumerate() {
        for (x, px) in row.chunks_exact(4).enumerate() {
            // softbuffer pixels are 0RGB
            buffer[y * w as usize + x] = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

//! MAZECAST Project
//! `File` main.rs
//! `Description` Desktop simulator entry point
//! `Author` TioT2
//! `Last changed` 19.10.2026

mod sim;

use std::io::Write;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use mazecast::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use mazecast::device::{Buttons, CellBuffer};
use mazecast::{Camera, Config, Fixed, Game, Vec2fx, SAMPLE_MAZE, SIN_COS_TABLE};

use sim::font::Font;
use sim::input::{Input, KeyCode};
use sim::surface::Surface;
use sim::terminal::{HeldButtons, TerminalDisplay};
use sim::timer::Timer;
use sim::SimulatorError;

/// Key that saves cell grid screenshot
const SCREENSHOT_KEY: KeyCode = KeyCode::F12;

/// Terminal mode frame period
const TERMINAL_FRAME_TIME: Duration = Duration::from_millis(33);

/// Command line options
#[derive(Debug, PartialEq, Eq)]
struct Options {
    /// Draw to stdout instead of a window
    terminal: bool,
    /// Switches held in terminal mode
    held: Buttons,
    /// Terminal mode frame count, unbounded if None
    frames: Option<u64>,
} // struct Options

impl Options {
    /// Command line parsing function
    /// * `args` - arguments without the program name
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut options = Self { terminal: false, held: Buttons::empty(), frames: None };
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--terminal" => options.terminal = true,
                "--turn" => options.held |= Buttons::TURN,
                "--move" => options.held |= Buttons::MOVE,
                "--frames" => {
                    let count = args.next().context("--frames needs a count")?;
                    options.frames = Some(count.parse().with_context(|| format!("invalid frame count {count:?}"))?);
                }
                _ => anyhow::bail!("unknown argument {arg:?}, expected --terminal [--turn] [--move] [--frames N]"),
            }
        }

        Ok(options)
    } // fn parse
} // impl Options

/// Start pose game creation function
fn new_game() -> Game<'static, 16, 16> {
    let camera = Camera::new(Vec2fx::splat(Fixed::from_f64(1.5)), Fixed::ZERO);
    Game::new(&SAMPLE_MAZE, &SIN_COS_TABLE, camera, Config::DEFAULT)
} // fn new_game

/// Terminal main loop, frames go to stdout as ANSI text
/// * `options` - held switches and frame count
fn run_terminal(options: &Options) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut display = TerminalDisplay::new(std::io::BufWriter::new(stdout.lock()));
    let mut input = HeldButtons(options.held);
    let mut game = new_game();

    info!(held = ?options.held, frames = ?options.frames, "terminal simulator started");

    let mut frame_index = 0u64;
    while options.frames.map_or(true, |frames| frame_index < frames) {
        let stats = game.frame(&mut input, &mut display);
        if stats.misses > 0 {
            warn!(misses = stats.misses, "rays exceeded step bound");
        }
        display.flush().context("failed to write the frame to stdout")?;

        frame_index += 1;
        std::thread::sleep(TERMINAL_FRAME_TIME);
    }

    display.into_inner().flush()?;
    Ok(())
} // fn run_terminal

/// Screenshot file name getting function
fn screenshot_path() -> PathBuf {
    let seconds = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default();

    PathBuf::from(format!("mazecast-{seconds}.png"))
} // fn screenshot_path

/// Window size to surface size conversion function
/// * Returns None for degenerate (minimized) window
fn to_surface_size(size: winit::dpi::PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    NonZeroU32::new(size.width).zip(NonZeroU32::new(size.height))
} // fn to_surface_size

/// Main program function
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse(std::env::args().skip(1))?;
    if options.terminal {
        return run_terminal(&options);
    }

    let font = Font::builtin().context("failed to build the cell font")?;
    let letter = font.get_letter_size();

    let event_loop = winit::event_loop::EventLoop::new().map_err(SimulatorError::window)?;
    let screen_size = winit::dpi::PhysicalSize::<u32>::new(
        (SCREEN_WIDTH * letter.width) as u32,
        (SCREEN_HEIGHT * letter.height) as u32,
    );
    let window = winit::window::WindowBuilder::new()
        .with_title("MAZECAST")
        .with_resizable(true)
        .with_inner_size(screen_size)
        .build(&event_loop)
        .map_err(SimulatorError::window)
        .context("failed to open the simulator window")?;

    let window_context = softbuffer::Context::new(&window).map_err(SimulatorError::surface)?;
    let mut surface = softbuffer::Surface::new(&window_context, &window).map_err(SimulatorError::surface)?;

    let mut surface_size = window.inner_size();
    if let Some((width, height)) = to_surface_size(surface_size) {
        surface.resize(width, height).map_err(SimulatorError::surface)?;
    }

    let mut game = new_game();
    let mut cells = CellBuffer::<SCREEN_WIDTH, SCREEN_HEIGHT>::new();
    let mut input = Input::new();
    let mut timer = Timer::new();

    info!(
        screen_width = SCREEN_WIDTH,
        screen_height = SCREEN_HEIGHT,
        maze_width = SAMPLE_MAZE.width(),
        maze_height = SAMPLE_MAZE.height(),
        "simulator started",
    );

    event_loop.run(|event, target| {
        let winit::event::Event::WindowEvent { window_id, event } = event else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            winit::event::WindowEvent::CloseRequested => {
                target.exit();
            }
            winit::event::WindowEvent::KeyboardInput { event, .. } => if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                input.on_key_state_change(code, event.state == winit::event::ElementState::Pressed);
            }
            winit::event::WindowEvent::Resized(size) => {
                surface_size = size;
                if let Some((width, height)) = to_surface_size(size) {
                    if let Err(err) = surface.resize(width, height) {
                        error!(%err, "surface resize failed");
                    }
                }
            }
            winit::event::WindowEvent::RedrawRequested => 'redraw: {
                if timer.response() {
                    debug!(fps = timer.get_fps(), frame_time = timer.get_delta_time(), "frame rate");
                    window.set_title(&format!("MAZECAST ({:.0} FPS)", timer.get_fps()));
                }

                let stats = game.frame(&mut input, &mut cells);
                if stats.misses > 0 {
                    warn!(misses = stats.misses, "rays exceeded step bound");
                }

                if input.get_state().is_key_clicked(SCREENSHOT_KEY) {
                    let path = screenshot_path();
                    match sim::screenshot::save_png(&path, &cells, &font) {
                        Ok(()) => info!(path = %path.display(), "screenshot saved"),
                        Err(err) => error!(%err, "screenshot failed"),
                    }
                }
                input.clear_changed();
                window.request_redraw();

                let (width, height) = (surface_size.width as usize, surface_size.height as usize);
                let mut buffer = match surface.buffer_mut() {
                    Ok(buffer) => buffer,
                    Err(err) => {
                        error!(%err, "surface buffer is unavailable");
                        break 'redraw;
                    }
                };

                if let Some(mut frame_surface) = Surface::new(&mut buffer[..], width, height, width) {
                    let scale = font.fit_scale::<SCREEN_WIDTH, SCREEN_HEIGHT>(frame_surface.get_extent());
                    font.put_grid(&mut frame_surface, &cells, scale);
                }

                if let Err(err) = buffer.present() {
                    error!(%err, "frame presentation failed");
                    target.exit();
                }
            }
            _ => {}
        }
    }).map_err(SimulatorError::window)?;

    Ok(())
} // fn main


// file main.rs

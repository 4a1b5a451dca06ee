//! Terminal deck runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the
//! `term` crate. All scene mutation happens on this one thread: input events
//! and due ticks are handed to the driver one at a time.

use std::fs::OpenOptions;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use neon_deck::engine::{Clock, Driver, MonotonicClock};
use neon_deck::input::{map_key, map_mouse};
use neon_deck::term::{DeckView, FrameBuffer, TerminalRenderer, Viewport};
use neon_deck::types::{GRID_HEIGHT, GRID_WIDTH};
use neon_deck::{build_default_deck, parse_args, DeckConfig};

/// Poll timeout while no scene has a tick pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    init_logging(&config)?;
    log::info!(
        "neon-deck: seed={} start={}",
        config.seed,
        config.start_slide
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install `env_logger` writing to the configured file. The alternate
/// screen owns the terminal, so without a file logging stays off.
fn init_logging(config: &DeckConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &DeckConfig) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut driver = Driver::new(build_default_deck(config), GRID_WIDTH, GRID_HEIGHT);
    driver.start(clock.now_ms());

    let view = DeckView;
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut force_redraw = true;

    loop {
        // Render.
        if force_redraw || driver.needs_redraw() {
            driver.frame();
            view.render_into(driver.deck(), driver.grid(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            force_redraw = false;
        }

        // Input with timeout until the next tick.
        let timeout = driver.timeout(clock.now_ms()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let input = match event::read()? {
                // Terminal auto-repeat still counts as a press for navigation and jumping.
                Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
                Event::Mouse(mouse) => map_mouse(mouse, view.origin(driver.grid(), viewport)),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    force_redraw = true;
                    None
                }
                _ => None,
            };

            if let Some(input) = input {
                if driver.handle_input(input, clock.now_ms()).is_break() {
                    return Ok(());
                }
            }
        }

        // Ticks.
        driver.pump(clock.now_ms());
    }
}

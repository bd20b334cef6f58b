use clap::Parser;
use color_eyre::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    layout::Rect,
    DefaultTerminal,
};
use std::time::{Duration, Instant};

mod bridge;
mod catalog;
mod config;
mod error;
mod models;
mod players;
mod screens;
mod utils;

use error::TuiResult;
use models::App;

// How long one event wait lasts; also the playback clock resolution
const TICK_MS: u64 = 200;

/// Browse and play a video catalog with d-pad style navigation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Run inside a host surface: d-pad input and playback data arrive on
    /// stdin, player commands leave on stderr
    #[arg(long)]
    embedded: bool,

    /// Category to open at startup (requires --item)
    #[arg(long)]
    category: Option<usize>,

    /// Video within the category to open at startup
    #[arg(long)]
    item: Option<usize>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Don't initialize global tracing to avoid breaking TUI
    // tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut app = App::new(args.embedded);
    if let (Some(category), Some(item)) = (args.category, args.item) {
        app.open_video(category, item);
    }

    let terminal = ratatui::init();
    let app_result = app.run(terminal);
    ratatui::restore();
    app_result
}

impl App {
    fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut last_tick = Instant::now();
        while self.state == models::AppState::Running {
            let size = terminal.size()?;
            self.sync_layout(Rect::new(0, 0, size.width, size.height));
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;

            // Check for timeouts before handling new events
            self.check_timeouts();

            self.handle_events()?;

            let elapsed = last_tick.elapsed().as_millis() as u64;
            if elapsed >= TICK_MS {
                self.tick(elapsed);
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn handle_events(&mut self) -> TuiResult<()> {
        if self.embedded {
            // The host owns the terminal; input arrives over the bridge
            let polled = match &self.bridge {
                Some(bridge) => bridge.poll(Duration::from_millis(TICK_MS)),
                None => {
                    std::thread::sleep(Duration::from_millis(TICK_MS));
                    Ok(None)
                }
            };
            match polled {
                Ok(Some(message)) => self.handle_host_message(&message),
                Ok(None) => {}
                // The host closed the pipe; nothing more will arrive
                Err(_) => self.quit(),
            }
        } else if event::poll(Duration::from_millis(TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_dynamic_key(key.code, key.modifiers);
                }
            }
        }
        Ok(())
    }
}

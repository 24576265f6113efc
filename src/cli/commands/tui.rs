use anyhow::{Context, Result};
use clap::Args;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::{Duration, Instant};

use conversify::config::Config;
use conversify::tui::{MultiAppRuntime, Page};

const FRAME_TIME: Duration = Duration::from_millis(16);

#[derive(Args)]
pub struct TuiCommands {
    /// Project to open
    #[arg(long, default_value_t = 1)]
    pub project: u32,
    /// Start page: projects, design, dashboard, responses or sharing
    #[arg(long, default_value = "projects")]
    pub page: Page,
}

pub async fn tui_command(args: TuiCommands) -> Result<()> {
    let config = Config::load()?;
    let route = args.page.route(args.project);
    info!("Launching TUI at {}", route);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = MultiAppRuntime::new(route, config);
    let result = run_tui(&mut terminal, &mut runtime).await;

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(terminal: &mut Terminal<B>, runtime: &mut MultiAppRuntime) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        // Drain input first for minimal latency
        while event::poll(Duration::from_millis(0))? {
            let keep_running = match event::read()? {
                Event::Key(key) => runtime.handle_key(key)?,
                Event::Mouse(mouse) => runtime.handle_mouse(mouse)?,
                _ => true,
            };
            if !keep_running {
                info!("Quitting TUI");
                return Ok(());
            }
        }

        if !runtime.poll_async()? {
            return Ok(());
        }

        terminal.draw(|frame| runtime.render(frame))?;

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
    }
}

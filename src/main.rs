#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::{debug, error, info};
use pitris::app::{App, AppResult};
use pitris::config::{Config, loader};
use pitris::input::command_for_key;
use pitris::ui;
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "pitris.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Pitris");

    let config = match loader::load_config_from_file() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration, using defaults: {e}");
            Config::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Bare Shift presses are only reported with the enhanced keyboard protocol
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }
    debug!("Keyboard enhancement enabled: {enhanced_keys}");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    // Restore terminal
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }
    info!("Exiting");

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> AppResult<()> {
    let frame_interval = app.config.display.frame_interval();
    let mut last_frame = Instant::now();

    // Drop anything typed before the game started
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }

    loop {
        let now = Instant::now();
        if now.duration_since(last_frame) >= frame_interval {
            app.frame(now);
            terminal.draw(|f| ui::render(f, &app))?;
            last_frame = now;
        }

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = command_for_key(&key) {
                    debug!("Key {:?} -> {command:?}", key.code);
                    app.apply(command);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

//! TUI application state and event loop

use super::rendering;
use crate::game::{Input, Phase, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Shortest wait between frames while something animates
const FRAME: Duration = Duration::from_millis(16);

/// Longest wait for input when nothing on screen is changing
const IDLE: Duration = Duration::from_secs(1);

/// What a key press means in the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Game(Input),
    Ignore,
}

/// Map a key press to an action
///
/// On the splash only Enter and Space (start) plus the global Ctrl bindings
/// do anything.
#[must_use]
pub fn key_action(key: KeyEvent, phase: Phase) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match (key.code, phase) {
        (KeyCode::Char('c'), _) if ctrl => KeyAction::Quit,
        (KeyCode::Char('r'), _) if ctrl => KeyAction::Game(Input::Reset),
        (KeyCode::Enter | KeyCode::Char(' '), Phase::Splash) => {
            KeyAction::Game(Input::StartPlaying)
        }
        (_, Phase::Splash) => KeyAction::Ignore,
        (KeyCode::Char(' '), _) => KeyAction::Game(Input::Shuffle),
        (KeyCode::Char(c), _) if c.is_ascii_alphabetic() && !ctrl => {
            KeyAction::Game(Input::Letter(c))
        }
        (KeyCode::Backspace, _) => KeyAction::Game(Input::Delete),
        (KeyCode::Esc, _) => KeyAction::Game(Input::ClearGuess),
        (KeyCode::Enter, _) => KeyAction::Game(Input::Submit),
        (KeyCode::Tab, _) => KeyAction::Game(Input::ToggleWordList),
        (KeyCode::Left, _) => KeyAction::Game(Input::ScrollLeft),
        (KeyCode::Right, _) => KeyAction::Game(Input::ScrollRight),
        _ => KeyAction::Ignore,
    }
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub simplified: bool,
    pub should_quit: bool,
    started: Instant,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, simplified: bool) -> Self {
        Self {
            session,
            simplified,
            should_quit: false,
            started: Instant::now(),
        }
    }

    /// Seconds since the app started
    #[must_use]
    pub fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// How long to wait for input before the frame at `now` needs redrawing
    #[must_use]
    pub fn poll_timeout(&self, now: f64) -> Duration {
        poll_timeout(self.session.next_frame(now), now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: f64) {
        match key_action(key, self.session.state().phase()) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Game(input) => self.session.handle(input, now),
            KeyAction::Ignore => {}
        }
    }

    /// Pass new terminal dimensions on to the word list layout
    pub fn resize(&mut self, width: u16, height: u16, now: f64) {
        let (strip_width, main_height) = rendering::word_list_area(Rect::new(0, 0, width, height));
        log::debug!("Resized to {width}x{height}");
        self.session.handle(
            Input::Resize {
                strip_width,
                main_height,
            },
            now,
        );
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with error: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn poll_timeout(next_frame: Option<f64>, now: f64) -> Duration {
    next_frame.map_or(IDLE, |due| {
        Duration::from_secs_f64((due - now).max(0.0)).clamp(FRAME, IDLE)
    })
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height, app.now());

    loop {
        let now = app.now();
        app.session.tick(now);
        let view = app.session.view(now);
        terminal.draw(|f| rendering::ui(f, &view, app.simplified))?;

        if event::poll(app.poll_timeout(now))? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, app.now());
                }
                Event::Resize(width, height) => app.resize(width, height, app.now()),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

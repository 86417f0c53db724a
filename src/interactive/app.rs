//! TUI application state and logic

use crate::commands::Statistics;
use crate::core::{CODE_LENGTH, Code, Game, GameError};
use crate::output::formatters::{attempts_left_message, outcome_message};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub fixed_secret: Option<Code>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app; every game uses `fixed_secret` when given
    #[must_use]
    pub fn new(fixed_secret: Option<Code>) -> Self {
        Self {
            game: Game::with_optional_secret(fixed_secret),
            fixed_secret,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! Crack the {CODE_LENGTH}-digit code."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type digits and press Enter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guess,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let guess = self.input_buffer.clone();

        match self.game.submit_guess(&guess) {
            Ok(_) => {
                self.input_buffer.clear();
                if let Some(outcome) = outcome_message(&self.game) {
                    self.stats.record(&self.game);
                    self.input_mode = InputMode::GameOver;

                    let style = if self.game.is_won() {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&outcome, style);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else {
                    let notice = attempts_left_message(&self.game);
                    self.add_message(&notice, MessageStyle::Info);
                }
            }
            Err(GameError::InvalidGuessFormat(_)) => {
                self.add_message(
                    &format!("Enter exactly {CODE_LENGTH} digits."),
                    MessageStyle::Error,
                );
            }
            Err(err @ GameError::GameAlreadyOver(_)) => {
                self.input_mode = InputMode::GameOver;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::with_optional_secret(self.fixed_secret);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < CODE_LENGTH {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            debug!("Leaving TUI after {} games", app.stats.total_games);
            break;
        }
    }

    Ok(())
}

//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{GuessFeedback, LetterState};
use crate::game::{GameSession, Statistics, submit_checked};
use crate::wordlists::WordSource;
use anyhow::{Result, bail};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub words: WordSource,
    pub config: GameConfig,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
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
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: WordSource, config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let Some(secret) = words.random_word_with(&mut rng) else {
            bail!("word list is empty, cannot pick a secret");
        };
        let session = GameSession::with_config(secret, &config);

        let mut app = Self {
            words,
            config,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!("Guess the {}-letter word!", config.word_length),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Replace the session with a fresh one; the old game is not recorded
    pub fn new_game(&mut self) {
        if let Some(secret) = self.words.random_word_with(&mut self.rng) {
            self.session = GameSession::with_config(secret, &self.config);
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! Guess the {}-letter word.",
                self.config.word_length
            ),
            MessageStyle::Info,
        );
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.config.word_length {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match submit_checked(&mut self.session, &self.words, &input) {
            Ok(_) => {
                self.input_buffer.clear();
                self.announce_progress();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn announce_progress(&mut self) {
        let Some(secret) = self.session.revealed_secret().map(str::to_string) else {
            let text = format!("Guesses left: {}", self.session.remaining_guesses());
            self.add_message(&text, MessageStyle::Info);
            return;
        };

        self.stats.record(&self.session);
        if self.session.is_win() {
            self.add_message(
                &format!("You win! The word was: {secret}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Out of guesses! The word was: {secret}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_game_over() => match key.code {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Enter => {
                    self.add_message("Game over. Press 'n' to play again.", MessageStyle::Error);
                }
                _ => {}
            },
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
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

    /// Best known state of each letter `A`-`Z` for the on-screen keyboard
    #[must_use]
    pub fn letter_hints(&self) -> [Option<LetterState>; 26] {
        letter_hints(self.session.history())
    }
}

/// Fold guesses into the best state seen per letter (`Correct` > `Present` > `Absent`)
#[must_use]
pub fn letter_hints(history: &[GuessFeedback]) -> [Option<LetterState>; 26] {
    let rank = |state: LetterState| match state {
        LetterState::Correct => 2,
        LetterState::Present => 1,
        LetterState::Absent => 0,
    };

    let mut hints = [None; 26];
    for (letter, state) in history.iter().flat_map(GuessFeedback::letters) {
        if !letter.is_ascii_uppercase() {
            continue;
        }
        let slot = &mut hints[(letter as u8 - b'A') as usize];
        if slot.is_none_or(|known| rank(state) > rank(known)) {
            *slot = Some(state);
        }
    }
    hints
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
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app_with(words: &[&str], max_guesses: usize) -> App {
        let config = GameConfig {
            word_length: 5,
            max_guesses,
        };
        App::new(WordSource::new(words), config, StdRng::seed_from_u64(3)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn last_message(app: &App) -> &str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let result = App::new(
            WordSource::default(),
            GameConfig::default(),
            StdRng::seed_from_u64(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn typing_is_capped_and_uppercased() {
        let mut app = app_with(&["CRANE"], 6);
        for c in "cranes1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "CRANE");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn winning_records_statistics() {
        let mut app = app_with(&["CRANE", "SLATE"], 6);
        let secret = app.session.secret().to_string();
        type_word(&mut app, &secret.to_lowercase());

        assert!(app.session.is_win());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.games_won, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == format!("You win! The word was: {secret}"))
        );
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let mut app = app_with(&["CRANE"], 6);
        type_word(&mut app, "zzzzz");
        assert_eq!(last_message(&app), "Word not in list.");
        assert_eq!(app.input_buffer, "ZZZZZ");
        assert_eq!(app.session.guesses_used(), 0);

        app.input_buffer.clear();
        type_word(&mut app, "cra");
        assert_eq!(last_message(&app), "Please enter a 5-letter word.");
    }

    #[test]
    fn losing_reveals_secret_and_new_game_resets() {
        let mut app = app_with(&["CRANE", "SLATE"], 1);
        let secret = app.session.secret().to_string();
        let other = if secret == "CRANE" { "slate" } else { "crane" };
        type_word(&mut app, other);

        assert!(app.session.is_game_over());
        assert!(!app.session.is_win());
        assert_eq!(app.stats.total_games, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == format!("Out of guesses! The word was: {secret}"))
        );

        // Letters are ignored once the game is over; 'n' starts a new one
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.session.is_game_over());
        assert_eq!(app.session.guesses_used(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(&["CRANE"], 6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(&["CRANE"], 6);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        // 'q' is a letter while the game is running
        let mut app = app_with(&["CRANE"], 6);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "Q");
    }

    #[test]
    fn ctrl_n_abandons_game() {
        let mut app = app_with(&["CRANE", "SLATE"], 6);
        let other = if app.session.secret() == "CRANE" { "slate" } else { "crane" };
        type_word(&mut app, other);
        assert_eq!(app.session.guesses_used(), 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.session.guesses_used(), 0);
        assert_eq!(app.stats.total_games, 0);
    }

    #[test]
    fn hints_keep_best_state() {
        let mut session = GameSession::new("SPEED", 6, 5);
        session.submit_guess("ERASE").unwrap();
        session.submit_guess("SPELL").unwrap();
        let hints = letter_hints(session.history());

        assert_eq!(hints[(b'E' - b'A') as usize], Some(LetterState::Correct));
        assert_eq!(hints[(b'S' - b'A') as usize], Some(LetterState::Correct));
        assert_eq!(hints[(b'R' - b'A') as usize], Some(LetterState::Absent));
        assert_eq!(hints[(b'Z' - b'A') as usize], None);
    }
}

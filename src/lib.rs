//! # quizgen
//!
//! Generate fill-in-the-blank multiple choice quizzes from documents and
//! take them in the terminal.
//!
//! The generator tags every word of the input, collects a noun vocabulary,
//! blanks the first eligible noun of each sentence, and pads the correct
//! answer with up to three distractors sampled from the same vocabulary.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizgen::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Extract text from a document and generate up to 5 questions
//!     let quiz = Quiz::from_document("lecture-notes.pdf", 5)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod extract;
mod generate;
mod grading;
mod models;
mod nlp;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{load_questions_from_json, save_questions_to_json, LoadError};
pub use extract::{extract_text, extract_text_from_pdf, ExtractError};
pub use generate::{generate, generate_with, BLANK};
pub use grading::{grade, GradeReport, QuestionResult, Submission};
pub use models::{AppState, Mcq};
pub use nlp::{normalize_whitespace, Lexicon, NlpEngine, NlpError, PosTag};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Linguistic resources could not be initialized.
    Nlp(NlpError),
    /// Text could not be extracted from the document.
    Extract(ExtractError),
    /// Error loading a saved quiz from file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Nlp(e) => write!(f, "{}", e),
            QuizError::Extract(e) => write!(f, "{}", e),
            QuizError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Nlp(e) => Some(e),
            QuizError::Extract(e) => Some(e),
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<NlpError> for QuizError {
    fn from(err: NlpError) -> Self {
        QuizError::Nlp(err)
    }
}

impl From<ExtractError> for QuizError {
    fn from(err: ExtractError) -> Self {
        QuizError::Extract(err)
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz from an already generated batch.
    pub fn new(mcqs: Vec<Mcq>) -> Self {
        Self {
            app: App::with_questions(mcqs),
        }
    }

    /// Generate a quiz from raw text.
    ///
    /// The result may hold fewer than `num_questions` questions, or none at
    /// all if the text yields no eligible nouns; check [`Quiz::is_empty`]
    /// before running.
    pub fn from_text(text: &str, num_questions: usize) -> Result<Self, QuizError> {
        let mcqs = generate::generate(text, num_questions)?;
        Ok(Self::new(mcqs))
    }

    /// Extract text from a document (`.pdf`, `.txt`, `.md`) and generate a
    /// quiz from it.
    pub fn from_document<P: AsRef<Path>>(path: P, num_questions: usize) -> Result<Self, QuizError> {
        let text = extract::extract_text(path.as_ref())?;
        Self::from_text(&text, num_questions)
    }

    /// Load a previously exported quiz from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let mcqs = data::load_questions_from_json(path)?;
        Ok(Self::new(mcqs))
    }

    /// The generated questions.
    pub fn mcqs(&self) -> &[Mcq] {
        self.app.questions()
    }

    /// True when generation produced no questions.
    pub fn is_empty(&self) -> bool {
        self.app.questions().is_empty()
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

//! Application state and event loop

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, DefaultTerminal, Frame};

use crate::services::{parse_character_ids, Aggregator, Config};
use crate::sources::{KillSource, ZkillClient};
use crate::types::IskSummary;

use super::theme::Theme;
use super::widgets::{
    calculator::{CalculatorView, ResultPanel},
    error_popup::ErrorPopup,
    spinner::Spinner,
};

/// Dialog text for Enter on a blank input box
const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one character ID.";

/// Dialog text when the worker thread ends without a result
const CALCULATION_FAILED_MESSAGE: &str = "Calculation failed";

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Waiting for input
    Idle,
    /// Aggregation running on the worker thread
    Calculating { spinner_frame: usize },
    /// Last calculation finished
    Done { summary: IskSummary },
}

/// Main application
pub struct App {
    state: AppState,
    input: String,
    /// Input validation error shown as a dialog
    error: Option<String>,
    /// IDs accepted by the last Enter, waiting to be handed to a worker
    pending_request: Option<Vec<u64>>,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: AppState::Idle,
            input: String::new(),
            error: None,
            pending_request: None,
            should_quit: false,
            theme,
        }
    }

    /// Prefill the input box (e.g. with configured character IDs)
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Any key dismisses the error dialog
        if self.error.is_some() {
            self.error = None;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            _ if self.is_calculating() => {}
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => self.input.push(c),
            _ => {}
        }
    }

    /// Validate the input and queue a calculation, or open the error dialog.
    /// Nothing is fetched for rejected input.
    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return;
        }

        match parse_character_ids(&self.input) {
            Ok(ids) => {
                self.state = AppState::Calculating { spinner_frame: 0 };
                self.pending_request = Some(ids);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Take the queued request, if any
    pub fn take_request(&mut self) -> Option<Vec<u64>> {
        self.pending_request.take()
    }

    /// Apply a finished calculation
    pub fn apply_summary(&mut self, summary: IskSummary) {
        self.state = AppState::Done { summary };
    }

    /// Check the worker channel (non-blocking). Returns true once the
    /// calculation is over, successfully or not.
    pub fn poll_calculation(&mut self, rx: &Receiver<IskSummary>) -> bool {
        match rx.try_recv() {
            Ok(summary) => {
                self.apply_summary(summary);
                true
            }
            Err(mpsc::TryRecvError::Empty) => false,
            Err(mpsc::TryRecvError::Disconnected) => {
                // Worker died without a result
                self.state = AppState::Idle;
                self.error = Some(CALCULATION_FAILED_MESSAGE.to_string());
                true
            }
        }
    }

    pub fn is_calculating(&self) -> bool {
        matches!(self.state, AppState::Calculating { .. })
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if let AppState::Calculating { spinner_frame } = &mut self.state {
            *spinner_frame = Spinner::next_frame(*spinner_frame);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let result = match &self.state {
            AppState::Idle => ResultPanel::Hint,
            AppState::Calculating { spinner_frame } => ResultPanel::Calculating {
                spinner_frame: *spinner_frame,
            },
            AppState::Done { summary } => ResultPanel::Done(summary),
        };
        CalculatorView::new(&self.input, result, self.theme).render(area, buf);

        // Render error dialog on top of everything
        if let Some(message) = &self.error {
            let popup_area = ErrorPopup::centered_area(area);
            ErrorPopup::new(message, self.theme).render(popup_area, buf);
        }
    }
}

/// Run the TUI application
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = ZkillClient::from_config(&config)?;

    // Detect before raw mode; the query needs a cooked terminal
    let theme = Theme::detect();
    let initial_input = config
        .character_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let mut app = App::new(theme).with_input(initial_input);

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app, Arc::new(client));
    ratatui::restore();
    result
}

/// Run one aggregation on a worker thread; the receiver yields its summary
fn spawn_calculation(source: Arc<dyn KillSource>, ids: Vec<u64>) -> Receiver<IskSummary> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let summary = Aggregator::summarize(source.as_ref(), &ids);
        let _ = tx.send(summary);
    });
    rx
}

fn run_app(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    source: Arc<dyn KillSource>,
) -> anyhow::Result<()> {
    let mut calculation: Option<Receiver<IskSummary>> = None;

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if let Some(ids) = app.take_request() {
            calculation = Some(spawn_calculation(Arc::clone(&source), ids));
        }

        // Check for calculation completion (non-blocking)
        if let Some(rx) = &calculation {
            if app.poll_calculation(rx) {
                calculation = None;
            }
        }

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}

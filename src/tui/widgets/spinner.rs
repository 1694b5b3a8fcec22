//! "Calculating..." spinner widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Spinner animation frames
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const MESSAGE: &str = "Calculating...";

/// Spinner shown while killmails are fetched
pub struct Spinner {
    frame: usize,
    theme: Theme,
}

impl Spinner {
    pub fn new(frame: usize, theme: Theme) -> Self {
        Self { frame, theme }
    }

    /// Get the current spinner character
    pub fn current_char(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Advance to next frame, returning the new frame index
    pub fn next_frame(frame: usize) -> usize {
        (frame + 1) % SPINNER_FRAMES.len()
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let text = format!("{} {}", self.current_char(), MESSAGE);
        let width = text.chars().count() as u16;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        buf.set_stringn(
            x,
            area.y,
            &text,
            area.width as usize,
            Style::default().fg(self.theme.accent()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frames() {
        assert_eq!(SPINNER_FRAMES.len(), 10);
    }

    #[test]
    fn test_spinner_current_char() {
        let spinner = Spinner::new(0, Theme::Dark);
        assert_eq!(spinner.current_char(), '⠋');

        let spinner = Spinner::new(5, Theme::Dark);
        assert_eq!(spinner.current_char(), '⠴');
    }

    #[test]
    fn test_spinner_wraps() {
        let spinner = Spinner::new(10, Theme::Dark);
        assert_eq!(spinner.current_char(), '⠋'); // 10 % 10 = 0
    }

    #[test]
    fn test_next_frame() {
        assert_eq!(Spinner::next_frame(0), 1);
        assert_eq!(Spinner::next_frame(9), 0);
    }

    #[test]
    fn test_spinner_renders_message() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Spinner::new(0, Theme::Dark).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Calculating..."));
    }
}

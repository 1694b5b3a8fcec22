//! Error dialog for rejected input

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// Width and height of the error popup
const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 8;

/// Error popup overlay
pub struct ErrorPopup<'a> {
    message: &'a str,
    theme: Theme,
}

impl<'a> ErrorPopup<'a> {
    pub fn new(message: &'a str, theme: Theme) -> Self {
        Self { message, theme }
    }

    /// Calculate centered popup area
    pub fn centered_area(area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(POPUP_WIDTH)) / 2;
        let y = area.y + (area.height.saturating_sub(POPUP_HEIGHT)) / 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(area.width),
            height: POPUP_HEIGHT.min(area.height),
        }
    }
}

impl Widget for ErrorPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (for overlay effect)
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Error ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.error()));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // [0] Padding
            Constraint::Min(2),    // [1] Message
            Constraint::Length(1), // [2] Usage hint
            Constraint::Length(1), // [3] Key hint
        ])
        .split(inner);

        Paragraph::new(Line::from(Span::styled(
            self.message,
            Style::default().fg(self.theme.error()),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            "Use comma-separated numeric IDs",
            Style::default().fg(self.theme.text()),
        )))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let hint_line = Line::from(vec![
            Span::styled(
                "Any key",
                Style::default()
                    .fg(self.theme.muted())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Dismiss", Style::default().fg(self.theme.muted())),
        ]);
        Paragraph::new(hint_line)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_popup_centered_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup_area = ErrorPopup::centered_area(area);

        assert_eq!(popup_area.width, POPUP_WIDTH);
        assert_eq!(popup_area.height, POPUP_HEIGHT);
        assert_eq!(popup_area.x, (100 - POPUP_WIDTH) / 2);
        assert_eq!(popup_area.y, (50 - POPUP_HEIGHT) / 2);
    }

    #[test]
    fn test_error_popup_small_terminal() {
        let area = Rect::new(0, 0, 20, 4);
        let popup_area = ErrorPopup::centered_area(area);

        assert_eq!(popup_area.width, 20);
        assert_eq!(popup_area.height, 4);
    }

    #[test]
    fn test_error_popup_renders_message() {
        let area = Rect::new(0, 0, 80, 20);
        let popup_area = ErrorPopup::centered_area(area);
        let mut buf = Buffer::empty(area);
        ErrorPopup::new("invalid character ID: \"abc\"", Theme::Dark).render(popup_area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Error"));
        assert!(content.contains("abc"));
    }
}

//! Main calculator view: ID input box and result area

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::spinner::Spinner;
use crate::services::{format_number, report_line};
use crate::tui::theme::Theme;
use crate::types::IskSummary;

/// App branding
const APP_NAME: &str = "zkill-isk";
const TAGLINE: &str = "ISK destroyed on zKillboard, unique kills only";

/// Shown in the input box while it is empty
const PLACEHOLDER: &str = "Character IDs, e.g. 93382481, 2113893486";

/// Maximum content width (keeps layout clean on wide terminals)
const MAX_CONTENT_WIDTH: u16 = 80;

/// What the result area shows
#[derive(Debug, Clone, Copy)]
pub enum ResultPanel<'a> {
    Hint,
    Calculating { spinner_frame: usize },
    Done(&'a IskSummary),
}

/// Calculator view widget
pub struct CalculatorView<'a> {
    input: &'a str,
    result: ResultPanel<'a>,
    theme: Theme,
}

impl<'a> CalculatorView<'a> {
    pub fn new(input: &'a str, result: ResultPanel<'a>, theme: Theme) -> Self {
        Self {
            input,
            result,
            theme,
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Character IDs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.input.is_empty() {
            Line::from(vec![
                Span::styled("▏", Style::default().fg(self.theme.accent())),
                Span::styled(PLACEHOLDER, Style::default().fg(self.theme.muted())),
            ])
        } else {
            // Keep the tail visible when the input outgrows the box
            let width = inner.width.saturating_sub(1) as usize;
            let skip = self.input.chars().count().saturating_sub(width);
            let visible: String = self.input.chars().skip(skip).collect();
            Line::from(vec![
                Span::styled(visible, Style::default().fg(self.theme.text())),
                Span::styled("▏", Style::default().fg(self.theme.accent())),
            ])
        };
        Paragraph::new(line).render(inner, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        match self.result {
            ResultPanel::Hint => {
                let hint = Line::from(vec![
                    Span::styled(
                        "Enter",
                        Style::default()
                            .fg(self.theme.muted())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" Calculate  ", Style::default().fg(self.theme.muted())),
                    Span::styled(
                        "Esc",
                        Style::default()
                            .fg(self.theme.muted())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" Quit", Style::default().fg(self.theme.muted())),
                ]);
                Paragraph::new(hint)
                    .alignment(Alignment::Center)
                    .render(area, buf);
            }
            ResultPanel::Calculating { spinner_frame } => {
                Spinner::new(spinner_frame, self.theme).render(area, buf);
            }
            ResultPanel::Done(summary) => {
                let chunks = Layout::vertical([
                    Constraint::Length(1), // [0] Report line
                    Constraint::Length(1), // [1] Padding
                    Constraint::Length(1), // [2] Counts
                ])
                .split(area);

                Paragraph::new(Line::from(Span::styled(
                    report_line(summary.total_isk),
                    Style::default()
                        .fg(self.theme.isk())
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center)
                .render(chunks[0], buf);

                let counts = format!(
                    "{} characters · {} unique kills · {} duplicates ignored · {} without id",
                    summary.character_ids.len(),
                    format_number(summary.unique_kills as u64),
                    format_number(summary.duplicate_kills as u64),
                    format_number(summary.skipped_kills as u64),
                );
                Paragraph::new(Line::from(Span::styled(
                    counts,
                    Style::default().fg(self.theme.muted()),
                )))
                .alignment(Alignment::Center)
                .render(chunks[2], buf);
            }
        }
    }
}

impl Widget for CalculatorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(MAX_CONTENT_WIDTH);
        let content = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // [0] Top space
            Constraint::Length(1), // [1] App name
            Constraint::Length(1), // [2] Tagline
            Constraint::Length(1), // [3] Padding
            Constraint::Length(3), // [4] Input box
            Constraint::Length(1), // [5] Padding
            Constraint::Length(3), // [6] Result area
            Constraint::Fill(1),   // [7] Bottom space
        ])
        .split(content);

        Paragraph::new(Line::from(Span::styled(
            APP_NAME,
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(self.theme.muted()),
        )))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        self.render_input(chunks[4], buf);
        self.render_result(chunks[6], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(view: CalculatorView) -> String {
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_empty_input_shows_placeholder() {
        let content = render_to_string(CalculatorView::new("", ResultPanel::Hint, Theme::Dark));
        assert!(content.contains("93382481"));
        assert!(content.contains("Calculate"));
    }

    #[test]
    fn test_input_is_rendered() {
        let content = render_to_string(CalculatorView::new(
            "111, 222",
            ResultPanel::Hint,
            Theme::Dark,
        ));
        assert!(content.contains("111, 222"));
        assert!(!content.contains("e.g."));
    }

    #[test]
    fn test_calculating_shows_spinner() {
        let content = render_to_string(CalculatorView::new(
            "1",
            ResultPanel::Calculating { spinner_frame: 0 },
            Theme::Dark,
        ));
        assert!(content.contains("Calculating..."));
    }

    #[test]
    fn test_done_shows_report_line() {
        let summary = IskSummary {
            character_ids: vec![1, 2],
            total_isk: 1_234_567.0,
            unique_kills: 3,
            duplicate_kills: 1,
            skipped_kills: 0,
        };
        let content = render_to_string(CalculatorView::new(
            "1, 2",
            ResultPanel::Done(&summary),
            Theme::Dark,
        ));
        assert!(content.contains("1,234,567.00 ISK"));
        assert!(content.contains("3 unique kills"));
    }

    #[test]
    fn test_renders_in_tiny_area_without_panic() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        CalculatorView::new("12345678901234567890", ResultPanel::Hint, Theme::Light)
            .render(area, &mut buf);
    }
}

//! Add-card form widget.
//!
//! Renders the open draft form for one cell: title and description
//! inputs, the priority selector, an inline error line, and the soft
//! title warning.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use ratatui::style::Color;

use crate::drafts::{Draft, DraftField};
use crate::theme::{Severity, priority_token, severity_token};

/// Renders the add-card form to the buffer.
pub fn render_draft_form(draft: &Draft, area: Rect, buf: &mut Buffer) {
    if area.height < 7 || area.width < 20 {
        return;
    }

    Clear.render(area, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " New story ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let priority = priority_token(draft.priority);
    let mut lines = vec![
        field_line("Title", &draft.title, draft.focus == DraftField::Title),
        field_line(
            "Description",
            &draft.description,
            draft.focus == DraftField::Description,
        ),
        Line::from(vec![
            focus_marker(draft.focus == DraftField::Priority),
            Span::raw("Priority: "),
            Span::styled(
                format!("{} {}", priority.indicator, priority.label),
                Style::default().fg(priority.color),
            ),
        ]),
        Line::default(),
    ];

    if let Some(error) = &draft.error {
        let token = severity_token(Severity::Error);
        lines.push(Line::from(Span::styled(
            format!("{} {error}", token.indicator),
            Style::default().fg(token.color),
        )));
    } else if let Some(warning) = draft.soft_warning() {
        let token = severity_token(Severity::Warning);
        lines.push(Line::from(Span::styled(
            format!("{} {warning}", token.indicator),
            Style::default().fg(token.color),
        )));
    }

    lines.push(Line::from(Span::styled(
        "Enter: save  Tab: next field  Esc: close",
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).render(inner, buf);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let mut spans = vec![focus_marker(focused), Span::raw(format!("{label}: "))];
    spans.push(Span::raw(value));
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

fn focus_marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("\u{25B8} ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(draft: &Draft) -> String {
        let area = Rect::new(0, 0, 44, 10);
        let mut buf = Buffer::empty(area);
        render_draft_form(draft, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn form_shows_fields_and_hints() {
        let draft = Draft {
            title: "Search".to_string(),
            description: "Full-text".to_string(),
            ..Draft::default()
        };
        let output = render(&draft);
        assert!(output.contains("Title: Search"));
        assert!(output.contains("Description: Full-text"));
        assert!(output.contains("Priority: "));
        assert!(output.contains("Enter: save"));
    }

    #[test]
    fn form_shows_submission_error() {
        let draft = Draft {
            error: Some("Title must not be empty".to_string()),
            ..Draft::default()
        };
        let output = render(&draft);
        assert!(output.contains("Title must not be empty"));
    }

    #[test]
    fn form_shows_soft_warning_for_short_title() {
        let draft = Draft {
            title: "ab".to_string(),
            ..Draft::default()
        };
        let output = render(&draft);
        assert!(output.contains("title is very short"));
    }

    #[test]
    fn error_takes_precedence_over_warning() {
        let draft = Draft {
            title: "ab".to_string(),
            error: Some("backend rejected".to_string()),
            ..Draft::default()
        };
        let output = render(&draft);
        assert!(output.contains("backend rejected"));
        assert!(!output.contains("very short"));
    }

    #[test]
    fn focused_field_is_marked() {
        let draft = Draft::default();
        let output = render(&draft);
        assert!(output.contains("\u{25B8} Title"));
    }
}

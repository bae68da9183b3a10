//! Hover preview widget.
//!
//! Renders an expanded read-only view of one story card: full title and
//! description, acceptance criteria (capped), and the status/priority
//! tokens. Shown after the hover delay expires, anchored near the card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use storymap_protocol::Story;

use crate::theme::{priority_token, status_token};

/// Maximum acceptance criteria lines shown before the "+N more" suffix.
const MAX_CRITERIA: usize = 8;

/// Renders the expanded story preview to the buffer.
///
/// The caller chooses the anchor area; the preview clears whatever is
/// underneath it.
pub fn render_preview(story: &Story, area: Rect, buf: &mut Buffer) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    Clear.render(area, buf);

    let status = status_token(story.status);
    let priority = priority_token(story.priority);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(status.color))
        .title(Span::styled(
            " Preview ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![
        Line::from(Span::styled(
            story.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} {}", status.indicator, status.label),
                Style::default().fg(status.color),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", priority.indicator, priority.label),
                Style::default().fg(priority.color),
            ),
        ]),
        Line::default(),
    ];

    if let Some(description) = &story.description {
        lines.push(Line::from(description.clone()));
        lines.push(Line::default());
    }

    if !story.acceptance_criteria.is_empty() {
        lines.push(Line::from(Span::styled(
            "Acceptance criteria",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for criterion in story.acceptance_criteria.iter().take(MAX_CRITERIA) {
            lines.push(Line::from(format!("- {criterion}")));
        }
        let hidden = story.acceptance_criteria.len().saturating_sub(MAX_CRITERIA);
        if hidden > 0 {
            lines.push(Line::from(Span::styled(
                format!("+{hidden} more"),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn story_with_criteria(count: usize) -> Story {
        let mut story = Story::new(1, "Checkout flow", Some(1));
        story.description = Some("Pay by card or invoice".to_string());
        story.acceptance_criteria = (1..=count).map(|i| format!("criterion {i}")).collect();
        story
    }

    fn render(story: &Story) -> String {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        render_preview(story, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn preview_shows_title_and_description() {
        let output = render(&story_with_criteria(2));
        assert!(output.contains("Checkout flow"));
        assert!(output.contains("Pay by card or invoice"));
    }

    #[test]
    fn preview_caps_criteria_at_eight() {
        let output = render(&story_with_criteria(11));
        assert!(output.contains("criterion 8"));
        assert!(!output.contains("criterion 9"));
        assert!(output.contains("+3 more"));
    }

    #[test]
    fn preview_without_overflow_has_no_suffix() {
        let output = render(&story_with_criteria(8));
        assert!(output.contains("criterion 8"));
        assert!(!output.contains("more"));
    }

    #[test]
    fn preview_skips_missing_description() {
        let mut story = story_with_criteria(1);
        story.description = None;
        let output = render(&story);
        assert!(output.contains("Checkout flow"));
        assert!(output.contains("criterion 1"));
    }
}

//! Story card widget.
//!
//! Renders one story card: bordered box, title, and a footer line with
//! the status and priority indicators. Card chrome reacts to selection,
//! drag eligibility, and an in-flight status change.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use storymap_protocol::Story;

use crate::interaction::CardFlags;
use crate::theme::{priority_token, status_token};

/// Renders a single story card to the buffer.
///
/// # Arguments
///
/// * `story` - The story to display
/// * `selected` - Whether the cursor is on this card
/// * `flags` - The card's interaction flags
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
pub fn render_story_card(
    story: &Story,
    selected: bool,
    flags: CardFlags,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 3 || area.width < 4 {
        return;
    }

    let status = status_token(story.status);
    let priority = priority_token(story.priority);

    let border_style = if selected {
        Style::default()
            .fg(status.color)
            .add_modifier(Modifier::BOLD)
    } else if flags.drag_disabled {
        // Dimmed: the card cannot participate in a drag right now.
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(status.color)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    let title_style = if flags.drag_disabled {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let title = Paragraph::new(Line::from(Span::styled(
        truncate(&story.title, inner.width as usize),
        title_style,
    )));
    title.render(
        Rect {
            height: 1.min(inner.height),
            ..inner
        },
        buf,
    );

    if inner.height < 2 {
        return;
    }

    // Footer: status + priority, with a spinner stand-in while a status
    // mutation is in flight.
    let mut spans = vec![
        Span::styled(
            format!("{} {}", status.indicator, status.label),
            Style::default().fg(status.color),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", priority.indicator, priority.label),
            Style::default().fg(priority.color),
        ),
    ];
    if flags.handle_disabled {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("…", Style::default().add_modifier(Modifier::DIM)));
    }

    let footer = Paragraph::new(Line::from(spans));
    footer.render(
        Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        },
        buf,
    );
}

/// Truncates a string to `width` characters, appending an ellipsis when
/// content was cut.
fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let mut result: String = text.chars().take(width.saturating_sub(1)).collect();
    result.push('\u{2026}');
    result
}

//! Grid cell widget.
//!
//! Renders the story cards of one `(task, release)` cell as a vertical
//! list. Small lists render every card eagerly; at the virtualization
//! threshold the list switches to a window over the cards, keeping the
//! selected card visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use storymap_protocol::{CellRef, Story};

use super::story_card::render_story_card;
use crate::interaction::{CardKey, InteractionStore};
use crate::virtualize::{RenderMode, VirtualizePolicy};

/// Renders one cell's story list to the buffer.
///
/// # Arguments
///
/// * `stories` - The cell's stories, already filtered for visibility
/// * `cell` - The cell being rendered (used for card addressing)
/// * `selected` - Index of the selected card within `stories`, if any
/// * `interactions` - Per-card interaction flags
/// * `policy` - The virtualization policy
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
pub fn render_cell(
    stories: &[&Story],
    cell: CellRef,
    selected: Option<usize>,
    interactions: &InteractionStore,
    policy: &VirtualizePolicy,
    area: Rect,
    buf: &mut Buffer,
) {
    if stories.is_empty() || area.height == 0 {
        return;
    }

    let (start, end, windowed) = match policy.mode_for(stories.len()) {
        RenderMode::Eager => (0, stories.len(), false),
        RenderMode::Windowed { rows, .. } => {
            let offset = policy.window_offset(selected.unwrap_or(0), stories.len(), rows);
            (offset, (offset + rows).min(stories.len()), true)
        }
    };

    let mut y = area.y;
    for (index, story) in stories.iter().enumerate().take(end).skip(start) {
        if y + policy.card_height > area.y + area.height {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: policy.card_height,
        };
        let key = CardKey::new(story.id, cell);
        render_story_card(
            story,
            selected == Some(index),
            interactions.flags(key),
            card_area,
            buf,
        );
        y += policy.row_height();
    }

    // Window position marker so the hidden remainder is discoverable.
    if windowed && y < area.y + area.height {
        let marker = Paragraph::new(Line::from(Span::styled(
            format!("{}\u{2013}{} of {}", start + 1, end, stories.len()),
            Style::default().add_modifier(Modifier::DIM),
        )));
        marker.render(
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn stories(count: usize) -> Vec<Story> {
        (0..count)
            .map(|i| Story::new(i as u64 + 1, format!("Story {}", i + 1), Some(1)))
            .collect()
    }

    fn render(stories: &[Story], selected: Option<usize>, height: u16) -> String {
        let refs: Vec<&Story> = stories.iter().collect();
        let area = Rect::new(0, 0, 28, height);
        let mut buf = Buffer::empty(area);
        render_cell(
            &refs,
            CellRef::new(11, 1),
            selected,
            &InteractionStore::default(),
            &VirtualizePolicy::default(),
            area,
            &mut buf,
        );
        buffer_to_string(&buf)
    }

    #[test]
    fn small_cell_renders_every_card() {
        let list = stories(3);
        let output = render(&list, None, 60);
        assert!(output.contains("Story 1"));
        assert!(output.contains("Story 2"));
        assert!(output.contains("Story 3"));
        assert!(!output.contains(" of "));
    }

    #[test]
    fn windowed_cell_shows_position_marker() {
        let list = stories(12);
        let output = render(&list, Some(0), 60);
        assert!(output.contains("1\u{2013}6 of 12"));
    }

    #[test]
    fn windowed_cell_limits_visible_cards() {
        let list = stories(12);
        let output = render(&list, Some(0), 60);
        assert!(output.contains("Story 6"));
        assert!(!output.contains("Story 7"));
    }

    #[test]
    fn window_follows_selection() {
        let list = stories(20);
        let output = render(&list, Some(19), 60);
        assert!(output.contains("Story 20"));
        assert!(!output.contains("Story 1\n"));
        assert!(output.contains("15\u{2013}20 of 20"));
    }

    #[test]
    fn empty_cell_renders_nothing() {
        let output = render(&[], None, 20);
        assert_eq!(output.trim(), "");
    }
}

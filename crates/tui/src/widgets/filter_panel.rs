//! Filter panel widget.
//!
//! Renders the active status and release filters as two checkbox lists
//! with a cursor for keyboard toggling. An empty filter set means "show
//! all", which the panel states explicitly so the empty checkboxes do
//! not read as "show nothing".

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use storymap_protocol::{FilterState, Release, StoryStatus};

use crate::theme::status_token;

/// A row the filter panel cursor can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEntry {
    /// One of the status checkboxes.
    Status(StoryStatus),
    /// One of the release checkboxes.
    Release(storymap_protocol::ReleaseId),
}

/// Returns the togglable entries in panel order.
#[must_use]
pub fn filter_entries(releases: &[Release]) -> Vec<FilterEntry> {
    StoryStatus::all()
        .into_iter()
        .map(FilterEntry::Status)
        .chain(releases.iter().map(|r| FilterEntry::Release(r.id)))
        .collect()
}

/// Renders the filter panel to the buffer.
///
/// `cursor` indexes into [`filter_entries`] for the same release slice.
pub fn render_filter_panel(
    filter: &FilterState,
    releases: &[Release],
    cursor: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 6 || area.width < 20 {
        return;
    }

    Clear.render(area, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Filters ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut index = 0;
    let mut lines = vec![Line::from(Span::styled(
        "Status",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ))];
    for status in StoryStatus::all() {
        let token = status_token(status);
        lines.push(Line::from(vec![
            cursor_marker(index == cursor),
            checkbox(filter.statuses.contains(&status)),
            Span::styled(
                format!("{} {}", token.indicator, token.label),
                Style::default().fg(token.color),
            ),
        ]));
        index += 1;
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Release",
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));
    for release in releases {
        lines.push(Line::from(vec![
            cursor_marker(index == cursor),
            checkbox(filter.releases.contains(&release.id)),
            Span::raw(release.title.clone()),
        ]));
        index += 1;
    }

    lines.push(Line::default());
    if filter.is_empty() {
        lines.push(Line::from(Span::styled(
            "No filters active (showing all)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter: toggle  c: clear all  Esc: close",
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).render(inner, buf);
}

fn cursor_marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("\u{25B8} ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

fn checkbox(checked: bool) -> Span<'static> {
    if checked {
        Span::styled("[x] ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("[ ] ")
    }
}

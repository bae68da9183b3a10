//! Board grid widget.
//!
//! Renders one release row of the story map at a time: a release
//! gutter on the left listing every visible release with its progress,
//! an activity/task header band across the top, and one cell per task
//! column for the release under the cursor. Columns that do not fit
//! the terminal are windowed around the selected column.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use storymap_protocol::activity_span;

use crate::layout::{HEADER_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, RELEASE_GUTTER_WIDTH};
use crate::state::AppState;
use crate::virtualize::VirtualizePolicy;
use crate::widgets::cell::render_cell;

/// Renders the board to the buffer.
///
/// Terminals below the minimum size get a short notice instead of a
/// clipped grid.
pub fn render_board(
    state: &AppState,
    policy: &VirtualizePolicy,
    column_width: u16,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT_WITH_HEADER {
        render_too_small(area, buf);
        return;
    }

    let tasks = state.visible_tasks();
    let releases = state.visible_releases();
    if tasks.is_empty() || releases.is_empty() {
        render_empty_board(state, area, buf);
        return;
    }

    let header = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT);
    let body = Rect::new(
        area.x,
        area.y + HEADER_HEIGHT,
        area.width,
        area.height - HEADER_HEIGHT,
    );
    let gutter = Rect::new(body.x, body.y, RELEASE_GUTTER_WIDTH.min(body.width), body.height);
    let grid = Rect::new(
        body.x + gutter.width,
        body.y,
        body.width - gutter.width,
        body.height,
    );

    // Window the task columns around the selection when they overflow.
    let columns_fit = usize::from((grid.width / column_width).max(1));
    let visible_columns = columns_fit.min(tasks.len());
    let offset = policy.window_offset(state.selected_task, tasks.len(), visible_columns);

    render_header(state, column_width, offset, visible_columns, header, buf);
    render_gutter(state, gutter, buf);
    render_cells(state, policy, column_width, offset, visible_columns, grid, buf);
}

fn render_too_small(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "Terminal too small",
        Style::default().fg(Color::Red),
    )))
    .render(area, buf);
}

fn render_empty_board(state: &AppState, area: Rect, buf: &mut Buffer) {
    let message = if state.project.releases.is_empty() || state.project.tasks().next().is_none() {
        "This project has no board yet."
    } else {
        "All rows are filtered out. Press c to reset filters."
    };
    Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    )))
    .render(area, buf);
}

/// Renders the activity band and the task title row.
fn render_header(
    state: &AppState,
    column_width: u16,
    offset: usize,
    visible_columns: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let tasks = state.visible_tasks();
    let window = &tasks[offset..offset + visible_columns];

    let header = Block::default().borders(Borders::BOTTOM);
    let inner = header.inner(area);
    header.render(area, buf);

    let mut x =
        inner.x + RELEASE_GUTTER_WIDTH.min(inner.width);

    // Activity line: the activity title once, over the span of its
    // tasks that fall inside the window.
    let mut column = 0usize;
    while column < window.len() {
        let task = window[column];
        let Some(activity) = state
            .project
            .activities
            .iter()
            .find(|a| a.tasks.iter().any(|t| t.id == task.id))
        else {
            column += 1;
            continue;
        };
        let run = window[column..]
            .iter()
            .take_while(|t| activity.tasks.iter().any(|a| a.id == t.id))
            .count();

        #[allow(clippy::cast_possible_truncation)]
        let span_width = activity_span(
            activity.id,
            (run as u16).saturating_sub(1),
            column_width,
            &state.column_widths,
        )
        .min(area.right().saturating_sub(x));
        if span_width == 0 {
            break;
        }
        let rect = Rect::new(x, inner.y, span_width, 1);
        Paragraph::new(Line::from(Span::styled(
            activity.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .render(rect, buf);

        x += span_width;
        column += run;
    }

    // Task line: one title per column, selected one highlighted.
    if inner.height < 2 {
        return;
    }
    let mut x = inner.x + RELEASE_GUTTER_WIDTH.min(inner.width);
    for (index, task) in window.iter().enumerate() {
        let width = column_width.min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let selected = offset + index == state.selected_task;
        let style = if selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let rect = Rect::new(x, inner.y + 1, width, 1);
        Paragraph::new(Line::from(Span::styled(task.title.clone(), style))).render(rect, buf);
        x += column_width;
    }
}

/// Renders the release gutter: every visible release with completion
/// progress, the current row marked with a cursor.
fn render_gutter(state: &AppState, area: Rect, buf: &mut Buffer) {
    let releases = state.visible_releases();
    let mut lines: Vec<Line> = Vec::new();

    for (index, release) in releases.iter().enumerate() {
        let selected = index == state.selected_release;
        let marker = if selected { "\u{25b8} " } else { "  " };
        let style = if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(release.title.clone(), style),
        ]));

        // Progress is omitted entirely for releases with no stories.
        if let Some(progress) = state.project.release_progress(release.id) {
            lines.push(Line::from(Span::styled(
                format!("  {}/{} {}%", progress.done, progress.total, progress.percent),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::default());
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::RIGHT))
        .render(area, buf);
}

/// Renders the cells of the current release row.
fn render_cells(
    state: &AppState,
    policy: &VirtualizePolicy,
    column_width: u16,
    offset: usize,
    visible_columns: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let tasks = state.visible_tasks();
    let Some(release) = state.visible_releases().get(state.selected_release).copied() else {
        return;
    };

    let mut x = area.x;
    for (index, task) in tasks[offset..offset + visible_columns].iter().enumerate() {
        let width = column_width.min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let cell = storymap_protocol::CellRef::new(task.id, release.id);
        let stories: Vec<_> = state
            .project
            .cell_stories(cell)
            .into_iter()
            .filter(|s| state.filter.story_visible(s))
            .collect();
        let selected = (offset + index == state.selected_task)
            .then_some(state.selected_story)
            .flatten();

        let rect = Rect::new(x, area.y, width.saturating_sub(1), area.height);
        render_cell(
            &stories,
            cell,
            selected,
            &state.interactions,
            policy,
            rect,
            buf,
        );
        x += column_width;
    }
}

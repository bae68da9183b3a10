//! Help overlay widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Key bindings shown in the overlay, in display order.
const BINDINGS: &[(&str, &str)] = &[
    ("\u{2190} \u{2192}", "Move between task columns"),
    ("\u{2191} \u{2193}", "Move between cards in a cell"),
    ("[ ]", "Previous / next release row"),
    ("Enter", "Select card / confirm"),
    ("Backspace", "Put a grabbed card back"),
    ("s", "Cycle the selected card's status"),
    ("g", "Grab the selected card"),
    ("a", "Add a story to the current cell"),
    ("d", "Delete the selected story"),
    ("f", "Toggle the filter panel"),
    ("c", "Reset all filters"),
    ("w", "Toggle the wireframe panel"),
    ("G", "Generate a wireframe"),
    ("r", "Refresh from the backend"),
    ("?", "Toggle this help"),
    ("Esc", "Close panel / cancel"),
    ("Ctrl+C", "Quit"),
];

/// Width of the key column, including trailing padding.
const KEY_WIDTH: usize = 12;

/// Renders the help overlay centered in the given area.
pub fn render_help(area: Rect, buf: &mut Buffer) {
    #[allow(clippy::cast_possible_truncation)]
    let height = (BINDINGS.len() as u16 + 2).min(area.height);
    let width = 52u16.min(area.width);
    if height < 4 || width < 24 {
        return;
    }

    let overlay = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    Clear.render(overlay, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Help ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);
    block.render(overlay, buf);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<width$}", width = KEY_WIDTH - 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*description),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}

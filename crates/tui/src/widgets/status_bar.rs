//! Status bar widget.
//!
//! A single line at the bottom of the screen showing context-sensitive
//! key hints, the newest toast, and a wireframe generation indicator
//! while a job is pending.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::{AppState, Focus};
use crate::theme::severity_token;

/// Key hints per focus area.
const fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Board => "a: add  s: status  g: grab  f: filters  w: wireframe  ?: help",
        Focus::DraftForm => "Enter: save  Tab: next field  Esc: close",
        Focus::FilterPanel => "Enter: toggle  c: clear  Esc: close",
        Focus::Wireframe => "G: generate  Esc: close",
    }
}

/// Renders the status bar to the buffer.
pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let mut spans: Vec<Span> = Vec::new();

    // The newest toast takes the hint slot until it is dismissed.
    if let Some(toast) = state.toasts.last() {
        let token = severity_token(toast.severity);
        spans.push(Span::styled(
            format!("{} ", token.indicator),
            Style::default().fg(token.color),
        ));
        spans.push(Span::styled(
            toast.message.clone(),
            Style::default().fg(token.color),
        ));
    } else {
        spans.push(Span::styled(
            hints(state.focus),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if state.wireframe_pending() {
        let indicator = "Generating wireframe\u{2026}";
        let indicator_len = indicator.chars().count();
        // The indicator always renders whole; hints give way when the
        // bar is too narrow for both.
        truncate_spans(
            &mut spans,
            usize::from(area.width).saturating_sub(indicator_len + 2),
        );
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = usize::from(area.width)
            .saturating_sub(used)
            .saturating_sub(indicator_len);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(
            indicator,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Trims the span list to at most `budget` display columns.
fn truncate_spans(spans: &mut Vec<Span>, mut budget: usize) {
    let mut kept = 0;
    for span in spans.iter_mut() {
        let len = span.content.chars().count();
        if len <= budget {
            budget -= len;
            kept += 1;
            continue;
        }
        span.content = span.content.chars().take(budget).collect::<String>().into();
        kept += 1;
        break;
    }
    spans.truncate(kept);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Severity;
    use storymap_protocol::{JobId, dummy_project};

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(state, area, &mut buf);
        crate::test_utils::buffer_to_string(&buf)
    }

    #[test]
    fn board_focus_shows_board_hints() {
        let state = AppState::new(dummy_project());
        let output = render(&state);
        assert!(output.contains("a: add"));
        assert!(output.contains("?: help"));
    }

    #[test]
    fn draft_focus_shows_form_hints() {
        let mut state = AppState::new(dummy_project());
        state.focus = Focus::DraftForm;
        assert!(render(&state).contains("Tab: next field"));
    }

    #[test]
    fn toast_replaces_hints() {
        let mut state = AppState::new(dummy_project());
        state.push_toast(Severity::Error, "session expired, please log in again");

        let output = render(&state);
        assert!(output.contains("session expired"));
        assert!(!output.contains("a: add"));
    }

    #[test]
    fn newest_toast_wins() {
        let mut state = AppState::new(dummy_project());
        state.push_toast(Severity::Info, "first");
        state.push_toast(Severity::Warning, "second");
        assert!(render(&state).contains("second"));
    }

    #[test]
    fn pending_wireframe_shows_indicator() {
        let mut state = AppState::new(dummy_project());
        state.wireframe.begin(JobId::nil());
        assert!(render(&state).contains("Generating wireframe\u{2026}"));
    }

    #[test]
    fn indicator_trims_hints_when_space_is_tight() {
        let mut state = AppState::new(dummy_project());
        state.wireframe.begin(JobId::nil());

        // Board hints plus the indicator overflow an 80-column bar; the
        // hint tail yields, the indicator does not.
        let output = render(&state);
        assert!(output.contains("a: add"));
        assert!(!output.contains("?: help"));
        assert!(output.contains("Generating wireframe\u{2026}"));
    }
}

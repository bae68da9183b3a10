//! Wireframe panel widget.
//!
//! Renders the project wireframe: a status header for the generation
//! job, and the generated markdown converted to styled lines. Markdown
//! conversion covers headers, emphasis, inline code, fenced code blocks,
//! and lists; the generated wireframes do not use richer constructs.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use storymap_protocol::{Project, WireframeJob, WireframeStatus};

/// Converts markdown text to styled ratatui lines.
///
/// # Examples
///
/// ```
/// use storymap_tui::widgets::wireframe::render_markdown;
///
/// let lines = render_markdown("# Screens\n\nA **bold** claim.");
/// assert!(!lines.is_empty());
/// ```
#[must_use]
pub fn render_markdown(markdown: &str) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(markdown, Options::empty());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = Vec::new();
    let mut in_code_block = false;
    let mut list_depth: usize = 0;

    let flush = |current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        if !current.is_empty() {
            lines.push(Line::from(std::mem::take(current)));
        }
    };

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut current, &mut lines);
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                let color = if level == HeadingLevel::H1 {
                    Color::Cyan
                } else {
                    Color::White
                };
                style_stack.push(Style::default().fg(color).add_modifier(Modifier::BOLD));
            }
            Event::End(TagEnd::Heading(_)) => {
                style_stack.pop();
                flush(&mut current, &mut lines);
            }
            Event::Start(Tag::Strong) => {
                style_stack.push(Style::default().add_modifier(Modifier::BOLD));
            }
            Event::End(TagEnd::Strong) => {
                style_stack.pop();
            }
            Event::Start(Tag::Emphasis) => {
                style_stack.push(Style::default().add_modifier(Modifier::ITALIC));
            }
            Event::End(TagEnd::Emphasis) => {
                style_stack.pop();
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut current, &mut lines);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Start(Tag::List(_)) => {
                flush(&mut current, &mut lines);
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                flush(&mut current, &mut lines);
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                current.push(Span::raw(format!("{indent}\u{2022} ")));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut current, &mut lines);
            }
            Event::Start(Tag::Paragraph) => {
                flush(&mut current, &mut lines);
            }
            Event::End(TagEnd::Paragraph) => {
                flush(&mut current, &mut lines);
                if list_depth == 0 {
                    lines.push(Line::default());
                }
            }
            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("  {code_line}"),
                            Style::default().fg(Color::Gray),
                        )));
                    }
                } else {
                    let style = style_stack.last().copied().unwrap_or_default();
                    current.push(Span::styled(text.to_string(), style));
                }
            }
            Event::Code(code) => {
                current.push(Span::styled(
                    code.to_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak => {
                current.push(Span::raw(" "));
            }
            Event::HardBreak => {
                flush(&mut current, &mut lines);
            }
            Event::Rule => {
                flush(&mut current, &mut lines);
                lines.push(Line::from(Span::styled(
                    "\u{2500}".repeat(32),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {}
        }
    }
    flush(&mut current, &mut lines);

    // Drop a trailing blank paragraph separator.
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

/// Renders the wireframe panel to the buffer.
///
/// Shows the job status header and, when present, the generated
/// markdown. The persisted error is shown for failed jobs, and a hint
/// for idle projects that have never generated one.
pub fn render_wireframe_panel(
    project: &Project,
    job: &WireframeJob,
    scroll: u16,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    Clear.render(area, buf);

    let status_color = match job.status {
        WireframeStatus::Idle => Color::DarkGray,
        WireframeStatus::Pending => Color::Yellow,
        WireframeStatus::Success => Color::Green,
        WireframeStatus::Error => Color::Red,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(status_color))
        .title(Span::styled(
            " Wireframe ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![Line::from(vec![
        Span::raw("Status: "),
        Span::styled(job.status.display_name(), Style::default().fg(status_color)),
    ])];
    if let Some(generated_at) = project.wireframe_generated_at {
        lines.push(Line::from(Span::styled(
            format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());

    match (&job.error_message, &project.wireframe_markdown) {
        (Some(error), _) if job.status == WireframeStatus::Error => {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        (_, Some(markdown)) => {
            lines.extend(render_markdown(markdown));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "No wireframe yet. Press Shift+G to generate one.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn markdown_headers_become_lines() {
        let lines = render_markdown("# Screens\n\n## Home");
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.contains(&"Screens".to_string()));
        assert!(text.contains(&"Home".to_string()));
    }

    #[test]
    fn markdown_lists_get_bullets() {
        let lines = render_markdown("- first\n- second");
        let all: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(all.contains("\u{2022} first"));
        assert!(all.contains("\u{2022} second"));
    }

    #[test]
    fn markdown_code_block_is_indented() {
        let lines = render_markdown("```\nlet x = 1;\n```");
        let all: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(all.contains("  let x = 1;"));
    }

    #[test]
    fn empty_markdown_renders_empty() {
        assert!(render_markdown("").is_empty());
    }

    fn project_with_markdown() -> Project {
        let mut project = Project::new(1, "Bookshop");
        project.wireframe_markdown = Some("# Home screen\n\n- search box".to_string());
        project.wireframe_status = Some(WireframeStatus::Success);
        project
    }

    #[test]
    fn panel_shows_markdown_for_successful_job() {
        let project = project_with_markdown();
        let mut job = WireframeJob::default();
        job.reset_to(project.wireframe_status, None);

        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        render_wireframe_panel(&project, &job, 0, area, &mut buf);

        let output = buffer_to_string(&buf);
        assert!(output.contains("Status: Ready"));
        assert!(output.contains("Home screen"));
        assert!(output.contains("search box"));
    }

    #[test]
    fn panel_shows_error_for_failed_job() {
        let project = Project::new(1, "Bookshop");
        let mut job = WireframeJob::default();
        job.apply(WireframeStatus::Error, Some("model quota exceeded".into()));

        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        render_wireframe_panel(&project, &job, 0, area, &mut buf);

        let output = buffer_to_string(&buf);
        assert!(output.contains("Status: Failed"));
        assert!(output.contains("model quota exceeded"));
    }

    #[test]
    fn panel_hints_when_idle_without_markdown() {
        let project = Project::new(1, "Bookshop");
        let job = WireframeJob::default();

        let area = Rect::new(0, 0, 56, 10);
        let mut buf = Buffer::empty(area);
        render_wireframe_panel(&project, &job, 0, area, &mut buf);

        assert!(buffer_to_string(&buf).contains("Press Shift+G"));
    }
}

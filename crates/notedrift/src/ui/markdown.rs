//! Line-based markdown styling for the note preview pane.
//!
//! This intentionally covers only block-level structure (headings, fenced
//! code, blockquotes, bullets, rules); inline emphasis is rendered verbatim.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Converts markdown text into styled, word-wrapped terminal lines.
pub fn render_markdown(text: &str, width: usize) -> Vec<Line<'static>> {
    let mut rendered_lines = Vec::new();
    let mut in_code_block = false;

    for raw_line in text.split('\n') {
        if raw_line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;

            continue;
        }

        if in_code_block {
            rendered_lines.extend(styled_wrapped(raw_line, code_style(), width));

            continue;
        }

        rendered_lines.extend(render_markdown_line(raw_line, width));
    }

    if rendered_lines.is_empty() {
        rendered_lines.push(Line::from(""));
    }

    rendered_lines
}

fn render_markdown_line(raw_line: &str, width: usize) -> Vec<Line<'static>> {
    if raw_line.is_empty() {
        return vec![Line::from("")];
    }

    if let Some((level, content)) = parse_heading(raw_line) {
        return styled_wrapped(content, heading_style(level), width);
    }

    if is_horizontal_rule(raw_line) {
        return vec![Line::from(Span::styled(
            "─".repeat(width.max(1)),
            Style::default().fg(Color::DarkGray),
        ))];
    }

    if let Some(content) = raw_line.strip_prefix("> ") {
        return prefixed_wrapped("│ ", content, blockquote_style(), width);
    }

    if let Some(content) = raw_line
        .strip_prefix("- ")
        .or_else(|| raw_line.strip_prefix("* "))
    {
        return prefixed_wrapped("• ", content, Style::default(), width);
    }

    styled_wrapped(raw_line, Style::default(), width)
}

/// Extracts `(level, content)` from an ATX heading line.
fn parse_heading(raw_line: &str) -> Option<(usize, &str)> {
    let hashes = raw_line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    raw_line[hashes..]
        .strip_prefix(' ')
        .map(|content| (hashes, content))
}

fn is_horizontal_rule(raw_line: &str) -> bool {
    let trimmed = raw_line.trim();
    trimmed.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|&marker| trimmed.chars().all(|c| c == marker))
}

/// Word-wraps `text` and applies one style to every produced line.
fn styled_wrapped(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_words(text, width.max(1))
        .into_iter()
        .map(|wrapped| Line::from(Span::styled(wrapped, style)))
        .collect()
}

/// Word-wraps `text` with a styled prefix on the first line and matching
/// indentation on continuations.
fn prefixed_wrapped(prefix: &str, text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    let content_width = width.saturating_sub(prefix.chars().count()).max(1);

    wrap_words(text, content_width)
        .into_iter()
        .enumerate()
        .map(|(index, wrapped)| {
            let lead = if index == 0 {
                prefix.to_string()
            } else {
                " ".repeat(prefix.chars().count())
            };

            Line::from(vec![
                Span::styled(lead, Style::default().fg(Color::DarkGray)),
                Span::styled(wrapped, style),
            ])
        })
        .collect()
}

/// Greedy word wrapping; words longer than `width` get their own line.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    wrapped
}

fn heading_style(level: usize) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::LightBlue,
        _ => Color::Blue,
    };

    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn blockquote_style() -> Style {
    Style::default().fg(Color::Gray)
}

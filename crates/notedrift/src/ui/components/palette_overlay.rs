use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::state::palette::{self, PaletteFocus};

const OVERLAY_WIDTH_PERCENT: u16 = 70;
const MIN_OVERLAY_WIDTH: u16 = 40;

/// Command palette overlay: an input line above the filtered command list.
pub struct PaletteOverlay<'a> {
    input: &'a str,
    selected_index: usize,
    focus: PaletteFocus,
}

impl<'a> PaletteOverlay<'a> {
    /// Creates the overlay for the current palette state.
    pub fn new(input: &'a str, selected_index: usize, focus: PaletteFocus) -> Self {
        Self {
            input,
            selected_index,
            focus,
        }
    }
}

impl Component for PaletteOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let commands = palette::filter_commands(self.input);
        let popup_area = top_centered_rect(area, commands.len());

        f.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(self.input.to_string()),
            Span::styled("|", Style::default().fg(Color::DarkGray)),
        ])];

        if commands.is_empty() {
            lines.push(Line::from(Span::styled(
                "  no matching command",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (index, command) in commands.iter().enumerate() {
            let is_selected = self.focus == PaletteFocus::Dropdown && index == self.selected_index;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(Span::styled(
                format!("  {}", command.name()),
                style,
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Command Palette ",
                    Style::default().fg(Color::Cyan),
                )),
        );

        f.render_widget(paragraph, popup_area);
    }
}

/// Computes an upper-centered rectangle sized to the command list.
fn top_centered_rect(area: Rect, command_count: usize) -> Rect {
    let popup_width = (area.width * OVERLAY_WIDTH_PERCENT / 100).max(MIN_OVERLAY_WIDTH);
    let width = popup_width.min(area.width);

    let content_height = u16::try_from(command_count.max(1)).unwrap_or(u16::MAX);
    let height = (content_height + 3).min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height / 6;

    Rect {
        x,
        y,
        width,
        height,
    }
}

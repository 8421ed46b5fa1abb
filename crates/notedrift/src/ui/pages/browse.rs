use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::ActiveNote;
use crate::ui::Component;
use crate::ui::markdown;

const BORDER_SIZE: u16 = 2;

/// Note preview page; shows an onboarding hint while no note is open.
pub struct BrowsePage<'a> {
    active_note: Option<&'a ActiveNote>,
    scroll_offset: u16,
}

impl<'a> BrowsePage<'a> {
    /// Creates the page for the given active note and scroll position.
    pub fn new(active_note: Option<&'a ActiveNote>, scroll_offset: u16) -> Self {
        Self {
            active_note,
            scroll_offset,
        }
    }
}

impl Component for BrowsePage<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let Some(note) = self.active_note else {
            render_onboarding(f, area);

            return;
        };

        let inner_width = usize::from(area.width.saturating_sub(BORDER_SIZE));
        let lines = markdown::render_markdown(&note.content, inner_width);
        let title = format!(" {} ", note.path);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(Color::Cyan))),
            )
            .scroll((self.scroll_offset, 0));

        f.render_widget(paragraph, area);
    }
}

/// Shown until the first note is opened.
fn render_onboarding(f: &mut Frame, area: Rect) {
    let hint_style = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  No note open yet.", hint_style)),
        Line::from(""),
        Line::from(Span::styled(
            "  Press r to hop to a random note, / for the command palette, ? for help.",
            hint_style,
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

const SUBFOLDER_INDICATOR: char = '\u{25cf}'; // ●

/// Bottom bar showing the vault directory and the subfolder policy.
pub struct FooterBar {
    vault_dir: String,
    expand_to_subfolders: bool,
}

impl FooterBar {
    /// Creates the footer for the given vault path and policy flag.
    pub fn new(vault_dir: String, expand_to_subfolders: bool) -> Self {
        Self {
            vault_dir,
            expand_to_subfolders,
        }
    }

    /// Returns the right-aligned policy indicator text.
    fn policy_text(&self) -> String {
        let state = if self.expand_to_subfolders {
            "on"
        } else {
            "off"
        };

        format!("{SUBFOLDER_INDICATOR} subfolders {state} ")
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let display_path = if let Some(home) = dirs::home_dir() {
            if let Ok(path) = std::path::Path::new(&self.vault_dir).strip_prefix(home) {
                format!("~/{}", path.display())
            } else {
                self.vault_dir.clone()
            }
        } else {
            self.vault_dir.clone()
        };

        let left_text = format!(" Vault: {display_path}");
        let mut spans = vec![Span::styled(
            left_text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )];

        let policy_text = self.policy_text();
        let total_width = usize::from(area.width);
        let left_width = left_text.chars().count();
        let policy_width = policy_text.chars().count();

        if left_width + policy_width + 1 < total_width {
            let padding = " ".repeat(total_width - left_width - policy_width);
            let policy_color = if self.expand_to_subfolders {
                Color::Green
            } else {
                Color::Gray
            };

            spans.push(Span::raw(padding));
            spans.push(Span::styled(
                policy_text,
                Style::default().fg(policy_color),
            ));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Settings;
use crate::ui::Component;

/// Settings page with the single include-subfolders toggle.
pub struct SettingsPage {
    settings: Settings,
}

impl SettingsPage {
    /// Creates the page for the current settings values.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns the toggle row as `(label, value)` text.
    fn toggle_row(&self) -> (&'static str, &'static str) {
        let value = if self.settings.expand_to_subfolders {
            "[x]"
        } else {
            "[ ]"
        };

        ("Include subfolders", value)
    }
}

impl Component for SettingsPage {
    fn render(&self, f: &mut Frame, area: Rect) {
        let (label, value) = self.toggle_row();
        let description_style = Style::default().fg(Color::DarkGray);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "      Include notes in subfolders. If the chosen note is in a",
                description_style,
            )),
            Line::from(Span::styled(
                "      subfolder, the next random note is restricted to that folder.",
                description_style,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Enter toggles, q returns to the notes view.",
                description_style,
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", Style::default().fg(Color::Cyan))),
        );

        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_toggle_row_reflects_disabled_state() {
        // Arrange
        let page = SettingsPage::new(Settings::default());

        // Act
        let (label, value) = page.toggle_row();

        // Assert
        assert_eq!(label, "Include subfolders");
        assert_eq!(value, "[ ]");
    }

    #[test]
    fn test_toggle_row_reflects_enabled_state() {
        // Arrange
        let page = SettingsPage::new(Settings {
            expand_to_subfolders: true,
        });

        // Act
        let (_, value) = page.toggle_row();

        // Assert
        assert_eq!(value, "[x]");
    }

    #[test]
    fn test_settings_page_renders_toggle_label() {
        // Arrange
        let page = SettingsPage::new(Settings::default());
        let backend = TestBackend::new(70, 10);
        let mut terminal = Terminal::new(backend).expect("test terminal is created");

        // Act
        terminal
            .draw(|f| page.render(f, f.area()))
            .expect("frame renders");

        // Assert
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Include subfolders"), "{rendered}");
    }
}

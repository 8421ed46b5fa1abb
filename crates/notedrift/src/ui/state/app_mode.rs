use super::palette::PaletteFocus;

/// Current UI mode; drives key handling and frame routing.
pub enum AppMode {
    /// Note preview (or the onboarding hint when nothing is open).
    Browse { scroll_offset: u16 },
    /// The settings page with the include-subfolders toggle.
    Settings,
    /// The command palette overlay on top of the browse page.
    CommandPalette {
        input: String,
        selected_index: usize,
        focus: PaletteFocus,
    },
    /// The keybinding overlay on top of the originating page.
    Help {
        context: HelpContext,
        scroll_offset: u16,
    },
}

/// Captures which page opened the help overlay so it can be restored on
/// close.
pub enum HelpContext {
    Browse { scroll_offset: u16 },
    Settings,
}

impl HelpContext {
    /// Returns the keybinding pairs `(key, description)` for the
    /// originating page.
    pub fn keybindings(&self) -> &[(&str, &str)] {
        match self {
            HelpContext::Browse { .. } => &[
                ("r", "Random note in current folder"),
                ("R", "Random note, include subfolders"),
                ("j / k", "Scroll preview"),
                ("/", "Command palette"),
                ("s", "Settings"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            HelpContext::Settings => &[
                ("Enter", "Toggle setting"),
                ("q / Esc", "Back to notes"),
                ("?", "Help"),
            ],
        }
    }

    /// Reconstructs the `AppMode` that was active before help was opened.
    pub fn restore_mode(self) -> AppMode {
        match self {
            HelpContext::Browse { scroll_offset } => AppMode::Browse { scroll_offset },
            HelpContext::Settings => AppMode::Settings,
        }
    }

    /// Display title for the help overlay header.
    pub fn title(&self) -> &'static str {
        "Keybindings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_mode_returns_browse_with_saved_scroll() {
        // Arrange
        let context = HelpContext::Browse { scroll_offset: 9 };

        // Act
        let mode = context.restore_mode();

        // Assert
        assert!(matches!(mode, AppMode::Browse { scroll_offset: 9 }));
    }

    #[test]
    fn test_restore_mode_returns_settings() {
        // Arrange
        let context = HelpContext::Settings;

        // Act
        let mode = context.restore_mode();

        // Assert
        assert!(matches!(mode, AppMode::Settings));
    }

    #[test]
    fn test_browse_keybindings_include_both_random_commands() {
        // Arrange
        let context = HelpContext::Browse { scroll_offset: 0 };

        // Act
        let keys: Vec<&str> = context.keybindings().iter().map(|(key, _)| *key).collect();

        // Assert
        assert!(keys.contains(&"r"));
        assert!(keys.contains(&"R"));
    }
}

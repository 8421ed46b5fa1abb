use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;
use crate::ui::state::palette::{PaletteFocus, filter_commands};

/// Handles key input while the command palette overlay is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.mode = AppMode::Browse { scroll_offset: 0 };

        return EventResult::Continue;
    }

    let mut chosen_command = None;

    if let AppMode::CommandPalette {
        input,
        selected_index,
        focus,
    } = &mut app.mode
    {
        match key.code {
            KeyCode::Char(character) => {
                input.push(character);
                update_focus(input, selected_index, focus);
            }
            KeyCode::Backspace => {
                input.pop();
                update_focus(input, selected_index, focus);
            }
            KeyCode::Up => {
                if *focus == PaletteFocus::Dropdown {
                    *selected_index = selected_index.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if *focus == PaletteFocus::Dropdown {
                    move_selection_down(input, selected_index);
                }
            }
            KeyCode::Enter => {
                if *focus == PaletteFocus::Dropdown {
                    chosen_command = filter_commands(input).get(*selected_index).copied();
                }
            }
            KeyCode::Esc => {
                if *focus == PaletteFocus::Dropdown {
                    *focus = PaletteFocus::Input;
                } else {
                    app.mode = AppMode::Browse { scroll_offset: 0 };
                }
            }
            _ => {}
        }
    }

    if let Some(command) = chosen_command {
        app.mode = AppMode::Browse { scroll_offset: 0 };
        app.run_command(command);
    }

    EventResult::Continue
}

/// Clamps the selection to the filtered list and drops focus back to the
/// input when no command matches.
fn update_focus(input: &str, selected_index: &mut usize, focus: &mut PaletteFocus) {
    let matches = filter_commands(input);

    if matches.is_empty() {
        *focus = PaletteFocus::Input;
        *selected_index = 0;
    } else {
        *focus = PaletteFocus::Dropdown;
        *selected_index = (*selected_index).min(matches.len() - 1);
    }
}

fn move_selection_down(input: &str, selected_index: &mut usize) {
    let matches = filter_commands(input);

    if *selected_index + 1 < matches.len() {
        *selected_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::app::Settings;
    use crate::app::settings::MockSettingsStore;
    use crate::infra::vault_scan;

    fn new_test_app() -> (App, TempDir) {
        let vault_dir = TempDir::new().expect("temp vault dir is created");
        fs::write(vault_dir.path().join("a.md"), "# a\n").expect("a.md is written");
        fs::write(vault_dir.path().join("b.md"), "# b\n").expect("b.md is written");

        let vault_root = vault_scan::scan_vault(vault_dir.path()).expect("vault scan succeeds");
        let mut store = MockSettingsStore::new();
        store.expect_save().returning(|_| Ok(()));

        let mut app = App::new(
            vault_dir.path().to_path_buf(),
            vault_root,
            Settings::default(),
            Box::new(store),
        );
        app.mode = AppMode::CommandPalette {
            input: String::new(),
            selected_index: 0,
            focus: PaletteFocus::Dropdown,
        };

        (app, vault_dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_handle_typed_characters_build_the_query() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('s')));
        handle(&mut app, key(KeyCode::Char('u')));
        handle(&mut app, key(KeyCode::Char('b')));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::CommandPalette {
                ref input,
                focus: PaletteFocus::Dropdown,
                ..
            } if input == "sub"
        ));
    }

    #[test]
    fn test_handle_query_without_match_focuses_input() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('z')));
        handle(&mut app, key(KeyCode::Char('z')));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::CommandPalette {
                selected_index: 0,
                focus: PaletteFocus::Input,
                ..
            }
        ));
    }

    #[test]
    fn test_handle_backspace_restores_dropdown_focus() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();
        handle(&mut app, key(KeyCode::Char('z')));

        // Act
        handle(&mut app, key(KeyCode::Backspace));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::CommandPalette {
                focus: PaletteFocus::Dropdown,
                ..
            }
        ));
    }

    #[test]
    fn test_handle_down_stops_at_last_command() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Down));
        handle(&mut app, key(KeyCode::Down));
        handle(&mut app, key(KeyCode::Down));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::CommandPalette {
                selected_index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_handle_enter_runs_selected_command() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();
        app.open_note("a.md");
        app.mode = AppMode::CommandPalette {
            input: String::new(),
            selected_index: 0,
            focus: PaletteFocus::Dropdown,
        };

        // Act
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse { scroll_offset: 0 }));
        assert_eq!(
            app.active_note().map(|note| note.path.as_str()),
            Some("b.md")
        );
    }

    #[test]
    fn test_handle_escape_steps_from_dropdown_to_input_to_browse() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();

        // Act & Assert
        handle(&mut app, key(KeyCode::Esc));
        assert!(matches!(
            app.mode,
            AppMode::CommandPalette {
                focus: PaletteFocus::Input,
                ..
            }
        ));
        handle(&mut app, key(KeyCode::Esc));
        assert!(matches!(app.mode, AppMode::Browse { scroll_offset: 0 }));
    }

    #[test]
    fn test_handle_ctrl_c_closes_the_palette() {
        // Arrange
        let (mut app, _vault_dir) = new_test_app();

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );

        // Assert
        assert!(matches!(app.mode, AppMode::Browse { scroll_offset: 0 }));
    }
}

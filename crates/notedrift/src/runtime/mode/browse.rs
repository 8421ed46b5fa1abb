use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, NoteCommand};
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};
use crate::ui::state::palette::PaletteFocus;

/// Handles key input while the app is showing the note preview.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('r') => {
            let note_command = app.primary_command();
            app.run_command(note_command);
        }
        KeyCode::Char('R') => {
            app.run_command(NoteCommand::RandomNoteWithinFolderIncludeSubfolders);
        }
        KeyCode::Char('/') => {
            app.mode = AppMode::CommandPalette {
                input: String::new(),
                selected_index: 0,
                focus: PaletteFocus::Dropdown,
            };
        }
        KeyCode::Char('s') => {
            app.mode = AppMode::Settings;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let AppMode::Browse { scroll_offset } = &mut app.mode {
                *scroll_offset = scroll_offset.saturating_add(1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let AppMode::Browse { scroll_offset } = &mut app.mode {
                *scroll_offset = scroll_offset.saturating_sub(1);
            }
        }
        KeyCode::Char('?') => {
            if let AppMode::Browse { scroll_offset } = &app.mode {
                app.mode = AppMode::Help {
                    context: HelpContext::Browse {
                        scroll_offset: *scroll_offset,
                    },
                    scroll_offset: 0,
                };
            }
        }
        _ => {}
    }

    EventResult::Continue
}

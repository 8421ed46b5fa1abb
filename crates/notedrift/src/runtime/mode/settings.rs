use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input while the settings page is shown.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_expand_to_subfolders();
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.mode = AppMode::Browse { scroll_offset: 0 };
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: HelpContext::Settings,
                scroll_offset: 0,
            };
        }
        _ => {}
    }

    EventResult::Continue
}

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the help overlay is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q' | '?') | KeyCode::Esc => {
            let mode = std::mem::replace(&mut app.mode, AppMode::Browse { scroll_offset: 0 });

            if let AppMode::Help { context, .. } = mode {
                app.mode = context.restore_mode();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let AppMode::Help { scroll_offset, .. } = &mut app.mode {
                *scroll_offset = scroll_offset.saturating_add(1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let AppMode::Help { scroll_offset, .. } = &mut app.mode {
                *scroll_offset = scroll_offset.saturating_sub(1);
            }
        }
        _ => {}
    }

    EventResult::Continue
}

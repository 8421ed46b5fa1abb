use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::Browse { .. } => mode::browse::handle(app, key),
        AppMode::Settings => mode::settings::handle(app, key),
        AppMode::CommandPalette { .. } => mode::palette::handle(app, key),
        AppMode::Help { .. } => mode::help::handle(app, key),
    }
}

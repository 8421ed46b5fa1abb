use crate::app::command::NoteCommand;

/// Which part of the command palette currently receives key input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaletteFocus {
    Input,
    Dropdown,
}

/// Returns palette commands whose label contains `query`, case-insensitively.
pub fn filter_commands(query: &str) -> Vec<NoteCommand> {
    let query_lower = query.to_lowercase();

    NoteCommand::ALL
        .iter()
        .filter(|command| command.name().to_lowercase().contains(&query_lower))
        .copied()
        .collect()
}

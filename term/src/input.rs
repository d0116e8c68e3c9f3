use sapper_core::Command;

/// Maps an input line to a command, using its first character.
///
/// `q` maps to [`Command::Quit`], which the game loop confirms before leaving.
pub fn parse_command(line: &str) -> Option<Command> {
    let key = line.trim_end_matches(['\r', '\n']).chars().next()?;
    let command = match key.to_ascii_lowercase() {
        'w' => Command::MoveUp,
        's' => Command::MoveDown,
        'a' => Command::MoveLeft,
        'd' => Command::MoveRight,
        'e' => Command::ToggleFlag,
        ' ' => Command::RevealAtCursor,
        'q' => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Answer to a yes/no prompt, `None` when it is neither.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().chars().next()?.to_ascii_lowercase() {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

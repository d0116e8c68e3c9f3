use crate::*;

/// One player action, as fed to [`GameEngine::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleFlag,
    RevealAtCursor,
    Quit,
    Restart,
}

/// What the front end should do after a command ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Detonated,
    Won,
    Quit,
}

impl CommandOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Detonated | Self::Won)
    }
}

impl GameEngine {
    /// Runs a single command to completion.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        use Command::*;

        log::trace!("command {:?} in {:?}", command, self.state());
        match command {
            MoveUp => self.step(Direction::Up),
            MoveDown => self.step(Direction::Down),
            MoveLeft => self.step(Direction::Left),
            MoveRight => self.step(Direction::Right),
            ToggleFlag => {
                self.toggle_flag();
                CommandOutcome::Continue
            }
            RevealAtCursor => self.reveal_at_cursor(),
            Restart => {
                self.start_new_game();
                CommandOutcome::Continue
            }
            Quit => CommandOutcome::Quit,
        }
    }

    fn step(&mut self, direction: Direction) -> CommandOutcome {
        self.move_cursor(direction);
        CommandOutcome::Continue
    }

    fn reveal_at_cursor(&mut self) -> CommandOutcome {
        if !self.state().is_in_play() {
            return CommandOutcome::Continue;
        }

        match self.check_cursor_tile() {
            TileCheck::Blocked => CommandOutcome::Continue,
            TileCheck::Detonated => {
                log::debug!("Detonated mine at {:?}", self.cursor());
                self.end_game();
                CommandOutcome::Detonated
            }
            TileCheck::Safe => {
                self.reveal(self.cursor());
                if self.is_won() {
                    self.end_game();
                    CommandOutcome::Won
                } else {
                    CommandOutcome::Continue
                }
            }
        }
    }
}

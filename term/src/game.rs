use std::io::{self, BufRead};

use sapper_core::{Command, CommandOutcome, EngineState, GameEngine};

use crate::input::{parse_command, parse_yes_no};
use crate::render::{self, Renderer};

/// Turn loop: read a line, apply its command, redraw.
pub struct Session<I, R> {
    engine: GameEngine,
    input: I,
    renderer: R,
}

impl<I: BufRead, R: Renderer> Session<I, R> {
    pub fn new(engine: GameEngine, input: I, renderer: R) -> Self {
        Self {
            engine,
            input,
            renderer,
        }
    }

    /// Plays games until the player quits or the input runs dry.
    pub fn run(&mut self) -> io::Result<()> {
        self.engine.start_new_game();
        loop {
            self.draw()?;
            let Some(line) = self.read_line()? else {
                log::debug!("Input closed, leaving");
                return Ok(());
            };
            let Some(command) = parse_command(&line) else {
                log::trace!("Ignoring input {:?}", line);
                continue;
            };

            match self.engine.apply(command) {
                CommandOutcome::Quit => {
                    if self.confirm_quit()? {
                        return Ok(());
                    }
                }
                outcome if outcome.ends_game() => {
                    if !self.game_over()? {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let snapshot = self.engine.snapshot();
        self.renderer.clear()?;
        self.renderer.header()?;
        self.renderer.board(&snapshot)?;
        self.renderer.stats(&snapshot)?;
        self.renderer.flush()
    }

    /// Shows the final board and asks for another round.
    fn game_over(&mut self) -> io::Result<bool> {
        let won = self.engine.state() == EngineState::Won;
        let snapshot = self.engine.reveal_all_mines_for_game_over(won);
        let difficulty = self.engine.config().difficulty();

        self.renderer.clear()?;
        self.renderer.header()?;
        self.renderer.final_board(&snapshot)?;
        self.renderer.stats(&snapshot)?;
        self.renderer.message(render::end_message(difficulty, won))?;

        loop {
            self.renderer.message(render::PLAY_AGAIN)?;
            self.renderer.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match parse_yes_no(&line) {
                Some(true) => {
                    self.engine.apply(Command::Restart);
                    return Ok(true);
                }
                Some(false) => return Ok(false),
                None => {}
            }
        }
    }

    fn confirm_quit(&mut self) -> io::Result<bool> {
        self.renderer.message(render::CONFIRM_QUIT)?;
        self.renderer.flush()?;
        Ok(match self.read_line()? {
            Some(line) => parse_yes_no(&line) == Some(true),
            None => true,
        })
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

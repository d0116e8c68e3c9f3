use std::io;

use sapper_core::{Difficulty, Level, Snapshot, Symbol};

pub use plain::PlainRenderer;
pub use styled::StyledRenderer;

mod plain;
mod styled;

pub const PLAY_AGAIN: &str = "Play again? (y/n)";
pub const CONFIRM_QUIT: &str = "Do you really want to exit? (y/n)";

/// Drawing surface for the game loop.
///
/// Output may stay buffered until [`Renderer::flush`].
pub trait Renderer {
    fn clear(&mut self) -> io::Result<()>;
    /// Title banner.
    fn header(&mut self) -> io::Result<()>;
    /// Board while playing, cursor included.
    fn board(&mut self, snapshot: &Snapshot) -> io::Result<()>;
    /// Board after the game ended, from a game over snapshot.
    fn final_board(&mut self, snapshot: &Snapshot) -> io::Result<()>;
    fn stats(&mut self, snapshot: &Snapshot) -> io::Result<()>;
    fn rules(&mut self, rules: &[&str]) -> io::Result<()>;
    fn message(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn header(&mut self) -> io::Result<()> {
        (**self).header()
    }

    fn board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        (**self).board(snapshot)
    }

    fn final_board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        (**self).final_board(snapshot)
    }

    fn stats(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        (**self).stats(snapshot)
    }

    fn rules(&mut self, rules: &[&str]) -> io::Result<()> {
        (**self).rules(rules)
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        (**self).message(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

pub const CURSOR: char = '+';

/// Character shown for a symbol, shared by every renderer.
pub const fn glyph(symbol: Symbol) -> char {
    match symbol {
        Symbol::Wall => '#',
        Symbol::Hidden => ' ',
        Symbol::Flag | Symbol::Misflag => 'F',
        Symbol::Blank => '.',
        Symbol::Number(n) => (b'0' + n) as char,
        Symbol::Mine => 'x',
        Symbol::GoodFlag => 'o',
    }
}

pub fn stats_line(snapshot: &Snapshot) -> String {
    format!(
        "Marked {} of {} bombs. Solved {}%.",
        snapshot.flagged_count,
        snapshot.mine_count,
        snapshot.completion_floor()
    )
}

/// Closing line for a finished game, worded per difficulty.
pub const fn end_message(difficulty: Difficulty, won: bool) -> &'static str {
    use Difficulty::*;
    use Level::*;

    match (difficulty, won) {
        (Custom, true) => "You won! Congratulations!",
        (Custom, false) => "Baaam! Better luck next time!",
        (Preset(Novice), true) => "You won! Well done!",
        (Preset(Novice), false) => "Baaam! Try again, you can do it!",
        (Preset(Adept), true) => "You won! Impressive!",
        (Preset(Adept), false) => "Baaam! Stay focused!",
        (Preset(Master | MasterFullscreen), true) => "You won! A master indeed!",
        (Preset(Master | MasterFullscreen), false) => "Baaam! Perseverance is key!",
    }
}

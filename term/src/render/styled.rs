use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, ContentStyle, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use sapper_core::{Coord, Snapshot, Symbol, TITLE};

use super::{CURSOR, Renderer, glyph};

/// Coloured output through crossterm escape sequences.
pub struct StyledRenderer<W: Write> {
    out: W,
}

fn highlight() -> ContentStyle {
    ContentStyle::new().yellow().bold()
}

fn important() -> ContentStyle {
    ContentStyle::new().red()
}

fn tile_style(symbol: Symbol, won: Option<bool>) -> ContentStyle {
    let style = ContentStyle::new();
    match symbol {
        Symbol::Wall | Symbol::Misflag => style,
        Symbol::Hidden => style.black(),
        Symbol::Blank => style.cyan().on_cyan(),
        Symbol::Number(_) => style.green(),
        Symbol::Flag => style.magenta().bold(),
        Symbol::GoodFlag => highlight(),
        Symbol::Mine if won == Some(true) => highlight(),
        Symbol::Mine => important(),
    }
}

fn cursor_style(under: Symbol) -> ContentStyle {
    let style = ContentStyle::new().red().attribute(Attribute::Bold);
    if under == Symbol::Blank {
        style.on(Color::Cyan)
    } else {
        style
    }
}

impl<W: Write> StyledRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid(&mut self, snapshot: &Snapshot, with_cursor: bool) -> io::Result<()> {
        for (row, symbols) in snapshot.symbols.outer_iter().enumerate() {
            for (col, &symbol) in symbols.iter().enumerate() {
                let coords = (row as Coord, col as Coord);
                let styled = if with_cursor && snapshot.is_cursor(coords) {
                    cursor_style(symbol).apply(CURSOR)
                } else {
                    tile_style(symbol, snapshot.won).apply(glyph(symbol))
                };
                queue!(self.out, PrintStyledContent(styled))?;
            }
            queue!(self.out, Print('\n'))?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for StyledRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn header(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            PrintStyledContent(highlight().apply(TITLE)),
            Print("\n\n")
        )
    }

    fn board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.grid(snapshot, true)
    }

    fn final_board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.grid(snapshot, false)
    }

    fn stats(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let marked = if snapshot.mines_left() < 0 {
            important()
        } else {
            highlight()
        };
        queue!(
            self.out,
            Print("Marked "),
            PrintStyledContent(marked.apply(snapshot.flagged_count)),
            Print(" of "),
            PrintStyledContent(highlight().apply(snapshot.mine_count)),
            Print(" bombs. Solved "),
            PrintStyledContent(highlight().apply(snapshot.completion_floor())),
            Print("%.\n")
        )
    }

    fn rules(&mut self, rules: &[&str]) -> io::Result<()> {
        for line in rules {
            queue!(self.out, Print(line), Print('\n'))?;
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text), Print('\n'))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

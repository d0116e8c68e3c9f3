use std::io::{self, Write};

use sapper_core::{Coord, Snapshot, TITLE};

use super::{CURSOR, Renderer, glyph, stats_line};

const CLEAR_LINES: usize = 23;

/// Uncoloured output, fit for pipes and dumb terminals.
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid(&mut self, snapshot: &Snapshot, with_cursor: bool) -> io::Result<()> {
        for (row, symbols) in snapshot.symbols.outer_iter().enumerate() {
            let line: String = symbols
                .iter()
                .enumerate()
                .map(|(col, &symbol)| {
                    let coords = (row as Coord, col as Coord);
                    if with_cursor && snapshot.is_cursor(coords) {
                        CURSOR
                    } else {
                        glyph(symbol)
                    }
                })
                .collect();
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        write!(self.out, "{}", "\n".repeat(CLEAR_LINES))
    }

    fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out)
    }

    fn board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.grid(snapshot, true)
    }

    fn final_board(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.grid(snapshot, false)
    }

    fn stats(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        writeln!(self.out, "{}", stats_line(snapshot))
    }

    fn rules(&mut self, rules: &[&str]) -> io::Result<()> {
        for line in rules {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

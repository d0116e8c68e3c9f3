use serde::{Deserialize, Serialize};

/// Ground truth of a tile, independent of what the player has seen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    /// Sentinel ring around the playable area.
    Wall,
    Blank,
    Number(u8),
    Mine,
}

impl Content {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Blank
    }
}

/// Player-visible state of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discovery {
    Hidden,
    Revealed,
    Flagged,
}

impl Default for Discovery {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub content: Content,
    pub discovery: Discovery,
}

impl Tile {
    pub const WALL: Tile = Tile {
        content: Content::Wall,
        discovery: Discovery::Revealed,
    };

    pub const fn is_hidden(self) -> bool {
        matches!(self.discovery, Discovery::Hidden)
    }

    /// What the player sees while the game is running.
    pub const fn symbol(self) -> Symbol {
        match (self.content, self.discovery) {
            (Content::Wall, _) => Symbol::Wall,
            (_, Discovery::Hidden) => Symbol::Hidden,
            (_, Discovery::Flagged) => Symbol::Flag,
            (Content::Blank, Discovery::Revealed) => Symbol::Blank,
            (Content::Number(n), Discovery::Revealed) => Symbol::Number(n),
            (Content::Mine, Discovery::Revealed) => Symbol::Mine,
        }
    }

    /// What the player sees once the game has ended.
    pub const fn final_symbol(self) -> Symbol {
        match (self.content, self.discovery) {
            (Content::Mine, Discovery::Flagged) => Symbol::GoodFlag,
            (Content::Mine, _) => Symbol::Mine,
            (Content::Wall, _) => Symbol::Wall,
            (_, Discovery::Flagged) => Symbol::Misflag,
            _ => self.symbol(),
        }
    }
}

/// Render-ready marker for a single tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Wall,
    Hidden,
    Flag,
    Blank,
    Number(u8),
    Mine,
    // these are only used to show result after the game finishes:
    GoodFlag,
    Misflag,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(content: Content, discovery: Discovery) -> Tile {
        Tile { content, discovery }
    }

    #[test]
    fn hidden_tiles_never_leak_content() {
        assert_eq!(tile(Content::Mine, Discovery::Hidden).symbol(), Symbol::Hidden);
        assert_eq!(tile(Content::Number(3), Discovery::Hidden).symbol(), Symbol::Hidden);
        assert_eq!(tile(Content::Mine, Discovery::Flagged).symbol(), Symbol::Flag);
    }

    #[test]
    fn final_symbol_distinguishes_flags() {
        assert_eq!(tile(Content::Mine, Discovery::Flagged).final_symbol(), Symbol::GoodFlag);
        assert_eq!(tile(Content::Mine, Discovery::Hidden).final_symbol(), Symbol::Mine);
        assert_eq!(tile(Content::Blank, Discovery::Flagged).final_symbol(), Symbol::Misflag);
        assert_eq!(tile(Content::Number(2), Discovery::Hidden).final_symbol(), Symbol::Hidden);
        assert_eq!(Tile::WALL.final_symbol(), Symbol::Wall);
    }
}

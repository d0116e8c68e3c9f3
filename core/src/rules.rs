pub const TITLE: &str = "M I N E S W E E P E R";

/// How to play, one entry per printed line.
pub const RULES: &[&str] = &[
    "   The game board is represented by tiles that you can check.",
    "   There are 3 types of tiles: bombs, numbers and empty spaces.",
    "   The goal of the game is to uncover all the tiles that do not",
    " contain bombs. A number tile is a safe tile and it tells you how",
    " many bombs there are in total under its 8 neighbours. Therefore",
    " numbers will range from 1 to 8. A tile that has no bombs near it",
    " is an empty tile and is safe to reveal. You can mark suspicious",
    " tiles with flags.",
    "   Controls: w/a/s/d - move the cursor ('+') around,",
    "             space   - reveal tile,",
    "             e       - drop/take flag ('F'),",
    "             q       - quit.",
];

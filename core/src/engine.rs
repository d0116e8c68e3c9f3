use std::collections::VecDeque;

use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::apply_delta;
use crate::*;

/// Valid transitions:
/// - Uninitialized -> Mined -> Ready
/// - Ready -> Playing
/// - Ready | Playing -> Won | Lost
/// - any -> Uninitialized (reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Grid cleared, no mines yet
    Uninitialized,
    /// Mines placed, numbers not computed yet
    Mined,
    /// Board complete, waiting for the first move
    Ready,
    Playing,
    Won,
    Lost,
}

impl EngineState {
    /// Whether gameplay commands are accepted.
    pub const fn is_in_play(self) -> bool {
        matches!(self, Self::Ready | Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Uninitialized
    }
}

/// Result of probing the tile under the cursor before revealing it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileCheck {
    /// Flagged, reveal is refused
    Blocked,
    Safe,
    Detonated,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Number of tiles that went from hidden to revealed
    Revealed(CellCount),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn newly_revealed(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Revealed(count) => count,
        }
    }
}

/// Owns one board and everything a player can do to it.
///
/// The grid is `(height + 2) x (width + 2)`: the outer ring holds walls, so
/// the playable interior is `[1, height] x [1, width]` and neighbour walks never
/// leave the array.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: BoardConfig,
    grid: Array2<Tile>,
    cursor: Coord2,
    discovered_count: CellCount,
    flagged_count: CellCount,
    state: EngineState,
    rng: SmallRng,
}

impl GameEngine {
    /// New engine seeded from OS randomness.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// New engine with a fixed seed, every game it deals is reproducible.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        let (height, width) = config.size();
        let dim = (usize::from(height) + 2, usize::from(width) + 2);
        log::debug!("engine for {}x{} board, seed {}", height, width, seed);

        let mut engine = Self {
            config,
            grid: Array2::from_elem(dim, Tile::WALL),
            cursor: (1, 1),
            discovered_count: 0,
            flagged_count: 0,
            state: Default::default(),
            rng: SmallRng::seed_from_u64(seed),
        };
        engine.reset();
        engine
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn discovered_count(&self) -> CellCount {
        self.discovered_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn safe_tile_total(&self) -> CellCount {
        self.config.safe_tiles()
    }

    /// Share of safe tiles uncovered so far, in percent.
    pub fn completion_percent(&self) -> f64 {
        match self.safe_tile_total() {
            0 => 100.0,
            safe => f64::from(self.discovered_count) / f64::from(safe) * 100.0,
        }
    }

    /// Tile at `coords`, walls included.
    ///
    /// Panics when `coords` is outside the `(height + 2) x (width + 2)` grid.
    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.grid[coords.to_nd_index()]
    }

    pub fn is_interior(&self, (row, col): Coord2) -> bool {
        let (height, width) = self.config.size();
        (1..=height).contains(&row) && (1..=width).contains(&col)
    }

    /// Clears the board for a fresh game, keeping the config and the RNG stream.
    pub fn reset(&mut self) {
        let (height, width) = self.config.size();
        for ((row, col), tile) in self.grid.indexed_iter_mut() {
            let interior = (1..=usize::from(height)).contains(&row)
                && (1..=usize::from(width)).contains(&col);
            *tile = if interior { Tile::default() } else { Tile::WALL };
        }

        self.cursor = (1, 1);
        self.discovered_count = 0;
        self.flagged_count = 0;
        self.state = EngineState::Uninitialized;
    }

    /// Scatters the configured number of mines by rejection sampling.
    ///
    /// The cursor position is not excluded, the first reveal can detonate.
    pub fn place_mines(&mut self) {
        if self.state != EngineState::Uninitialized {
            log::warn!("Mines already placed, ignoring request in {:?}", self.state);
            return;
        }

        let (height, width) = self.config.size();
        let total_tiles = self.config.total_tiles();
        let mut mines_left = self.config.mine_count();
        if mines_left > total_tiles {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                mines_left,
                total_tiles
            );
            mines_left = total_tiles;
        }

        while mines_left > 0 {
            let coords: Coord2 = (
                self.rng.random_range(1..=height),
                self.rng.random_range(1..=width),
            );
            let tile = &mut self.grid[coords.to_nd_index()];
            if !tile.content.is_mine() {
                tile.content = Content::Mine;
                mines_left -= 1;
            }
        }

        self.state = EngineState::Mined;
    }

    /// Places mines at exactly the given interior coordinates.
    ///
    /// The layout must hold as many mines as the config asks for. Nothing is
    /// changed when it is rejected.
    pub fn place_mines_at(&mut self, mines: &[Coord2]) -> Result<()> {
        if self.state != EngineState::Uninitialized {
            log::warn!("Mines already placed, refusing layout in {:?}", self.state);
            return Err(GameError::MinesAlreadyPlaced);
        }

        let expected = usize::from(self.config.mine_count());
        if mines.len() != expected {
            return Err(GameError::MineCountMismatch {
                expected,
                actual: mines.len(),
            });
        }
        for (i, &coords) in mines.iter().enumerate() {
            if !self.is_interior(coords) {
                return Err(GameError::InvalidCoords);
            }
            if mines[..i].contains(&coords) {
                return Err(GameError::DuplicateMine);
            }
        }

        for &coords in mines {
            self.grid[coords.to_nd_index()].content = Content::Mine;
        }
        self.state = EngineState::Mined;
        Ok(())
    }

    /// Turns the blanks around every mine into adjacency numbers.
    pub fn compute_numbers(&mut self) {
        if self.state != EngineState::Mined {
            log::warn!("Cannot number the board in {:?}", self.state);
            return;
        }

        let mines: Vec<Coord2> = self.mine_coords().collect();
        for mine in mines {
            for pos in self.grid.iter_neighbors(mine) {
                let content = &mut self.grid[pos.to_nd_index()].content;
                *content = match *content {
                    Content::Blank => Content::Number(1),
                    Content::Number(count) if count < 8 => Content::Number(count + 1),
                    other => other,
                };
            }
        }

        self.state = EngineState::Ready;
    }

    /// Reset, mine and number the board in one go.
    pub fn start_new_game(&mut self) {
        self.reset();
        self.place_mines();
        self.compute_numbers();
        log::debug!(
            "New game: {}x{}, {} mines",
            self.config.height(),
            self.config.width(),
            self.config.mine_count()
        );
    }

    /// Moves the cursor one tile, staying inside the interior.
    ///
    /// Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        if !self.state.is_in_play() {
            return false;
        }

        let (height, width) = self.config.size();
        let bounds = (height.saturating_add(1), width.saturating_add(1));
        match apply_delta(self.cursor, direction.delta(), bounds) {
            Some(next) if self.is_interior(next) => {
                self.cursor = next;
                true
            }
            _ => false,
        }
    }

    /// Flags or unflags the tile under the cursor.
    pub fn toggle_flag(&mut self) -> FlagOutcome {
        if !self.state.is_in_play() {
            return FlagOutcome::NoChange;
        }

        let tile = &mut self.grid[self.cursor.to_nd_index()];
        let outcome = match tile.discovery {
            Discovery::Hidden => {
                tile.discovery = Discovery::Flagged;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            Discovery::Flagged => {
                tile.discovery = Discovery::Hidden;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
            Discovery::Revealed => FlagOutcome::NoChange,
        };

        if outcome.has_update() {
            self.mark_started();
        }
        outcome
    }

    /// Tells what revealing the cursor tile would do, without doing it.
    pub fn check_cursor_tile(&self) -> TileCheck {
        let tile = self.tile_at(self.cursor);
        match (tile.discovery, tile.content) {
            (Discovery::Flagged, _) => TileCheck::Blocked,
            (_, Content::Mine) => TileCheck::Detonated,
            _ => TileCheck::Safe,
        }
    }

    /// Reveals the tile at `coords` and floods through connected blanks.
    ///
    /// Numbers are revealed but not expanded. Flagged tiles are never revealed
    /// and stay flagged. A hidden mine is refused, callers gate reveals with
    /// [`GameEngine::check_cursor_tile`].
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.state.is_in_play() {
            return RevealOutcome::NoChange;
        }

        let Some(&tile) = self.grid.get(coords.to_nd_index()) else {
            return RevealOutcome::NoChange;
        };
        match (tile.content, tile.discovery) {
            (Content::Wall, _) | (_, Discovery::Revealed | Discovery::Flagged) => {
                return RevealOutcome::NoChange;
            }
            (Content::Mine, Discovery::Hidden) => {
                log::warn!("Refusing to reveal mine at {:?}", coords);
                return RevealOutcome::NoChange;
            }
            _ => {}
        }

        let mut newly_revealed: CellCount = 0;
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            let tile = &mut self.grid[visit_coords.to_nd_index()];

            // revealed doubles as visited, flags and walls stop the fill
            if !tile.is_hidden() || tile.content.is_mine() {
                continue;
            }

            tile.discovery = Discovery::Revealed;
            newly_revealed += 1;
            let content = tile.content;
            log::trace!("Flood revealed {:?}: {:?}", visit_coords, content);

            if content == Content::Blank {
                to_visit.extend(
                    self.grid
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.grid[pos.to_nd_index()].is_hidden()),
                );
            }
        }

        self.discovered_count += newly_revealed;
        self.mark_started();
        log::debug!(
            "Reveal at {:?} opened {} tiles ({}/{})",
            coords,
            newly_revealed,
            self.discovered_count,
            self.safe_tile_total()
        );
        RevealOutcome::Revealed(newly_revealed)
    }

    pub fn is_won(&self) -> bool {
        self.discovered_count == self.safe_tile_total()
    }

    /// Freezes the board as won or lost, depending on [`GameEngine::is_won`].
    pub fn end_game(&mut self) {
        if self.state.is_finished() {
            return;
        }

        self.state = if self.is_won() {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("Game over: {:?}", self.state);
    }

    pub fn snapshot(&self) -> Snapshot {
        let won = match self.state {
            EngineState::Won => Some(true),
            EngineState::Lost => Some(false),
            _ => None,
        };
        self.build_snapshot(Tile::symbol, self.is_over(), won)
    }

    /// Terminal view: every mine shown, correct flags marked as such.
    pub fn reveal_all_mines_for_game_over(&self, won: bool) -> Snapshot {
        self.build_snapshot(Tile::final_symbol, true, Some(won))
    }

    fn build_snapshot(
        &self,
        symbol: fn(Tile) -> Symbol,
        is_over: bool,
        won: Option<bool>,
    ) -> Snapshot {
        Snapshot {
            symbols: self.grid.map(|&tile| symbol(tile)),
            size: self.config.size(),
            cursor: self.cursor,
            mine_count: self.config.mine_count(),
            flagged_count: self.flagged_count,
            discovered_count: self.discovered_count,
            safe_tile_total: self.safe_tile_total(),
            completion: self.completion_percent(),
            is_over,
            won,
        }
    }

    fn mark_started(&mut self) {
        if self.state == EngineState::Ready {
            self.state = EngineState::Playing;
        }
    }

    fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .indexed_iter()
            .filter(|(_, tile)| tile.content.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: Coord2, mines: &[Coord2]) -> GameEngine {
        let config = BoardConfig::new_unchecked(size.0, size.1, mines.len() as CellCount);
        let mut engine = GameEngine::with_seed(config, 0);
        engine.place_mines_at(mines).unwrap();
        engine.compute_numbers();
        engine
    }

    fn content(engine: &GameEngine, coords: Coord2) -> Content {
        engine.tile_at(coords).content
    }

    #[test]
    fn reset_builds_wall_ring() {
        let engine = GameEngine::with_seed(BoardConfig::from_preset(Level::Novice), 7);

        assert_eq!(engine.state(), EngineState::Uninitialized);
        assert_eq!(engine.cursor(), (1, 1));
        assert_eq!(engine.tile_at((0, 0)), Tile::WALL);
        assert_eq!(engine.tile_at((10, 5)), Tile::WALL);
        assert_eq!(engine.tile_at((4, 10)), Tile::WALL);
        assert_eq!(engine.tile_at((9, 9)), Tile::default());
    }

    #[test]
    fn seeded_games_place_exact_mine_count() {
        let config = BoardConfig::from_preset(Level::Master);
        let mut engine = GameEngine::with_seed(config, 42);
        engine.start_new_game();

        assert_eq!(engine.state(), EngineState::Ready);
        assert_eq!(engine.mine_coords().count(), 98);
        assert!(engine.mine_coords().all(|coords| engine.is_interior(coords)));
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardConfig::from_preset(Level::Adept);
        let mut a = GameEngine::with_seed(config, 1234);
        let mut b = GameEngine::with_seed(config, 1234);
        a.start_new_game();
        b.start_new_game();

        assert_eq!(a.mine_coords().collect::<Vec<_>>(), b.mine_coords().collect::<Vec<_>>());
    }

    #[test]
    fn place_mines_twice_is_ignored() {
        let mut engine = GameEngine::with_seed(BoardConfig::from_preset(Level::Novice), 3);
        engine.place_mines();
        engine.place_mines();

        assert_eq!(engine.state(), EngineState::Mined);
        assert_eq!(engine.mine_coords().count(), 10);
    }

    #[test]
    fn place_mines_at_validates_layout() {
        let config = BoardConfig::new_unchecked(3, 3, 2);
        let mut engine = GameEngine::with_seed(config, 0);

        assert_eq!(
            engine.place_mines_at(&[(1, 1)]),
            Err(GameError::MineCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(engine.place_mines_at(&[(1, 1), (0, 1)]), Err(GameError::InvalidCoords));
        assert_eq!(engine.place_mines_at(&[(2, 2), (2, 2)]), Err(GameError::DuplicateMine));
        assert_eq!(engine.mine_coords().count(), 0);
        assert_eq!(engine.state(), EngineState::Uninitialized);

        assert_eq!(engine.place_mines_at(&[(1, 1), (3, 3)]), Ok(()));
        assert_eq!(engine.state(), EngineState::Mined);

        engine.compute_numbers();
        assert_eq!(
            engine.place_mines_at(&[(1, 2), (3, 2)]),
            Err(GameError::MinesAlreadyPlaced)
        );
        assert!(!engine.tile_at((3, 2)).content.is_mine());
        assert!(engine.tile_at((3, 3)).content.is_mine());
        assert_eq!(engine.state(), EngineState::Ready);
    }

    #[test]
    fn center_mine_numbers_all_neighbors() {
        let engine = engine((3, 3), &[(2, 2)]);

        for row in 1..=3 {
            for col in 1..=3 {
                let expected = if (row, col) == (2, 2) {
                    Content::Mine
                } else {
                    Content::Number(1)
                };
                assert_eq!(content(&engine, (row, col)), expected);
            }
        }
    }

    #[test]
    fn numbers_accumulate_and_walls_stay() {
        let engine = engine((3, 4), &[(1, 1), (1, 3), (3, 2)]);

        assert_eq!(content(&engine, (1, 2)), Content::Number(2));
        assert_eq!(content(&engine, (2, 2)), Content::Number(3));
        assert_eq!(content(&engine, (2, 4)), Content::Number(1));
        assert_eq!(content(&engine, (3, 4)), Content::Blank);
        assert_eq!(content(&engine, (0, 0)), Content::Wall);
    }

    #[test]
    fn surrounded_tile_counts_eight() {
        let mines = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        let engine = engine((3, 3), &mines);

        assert_eq!(content(&engine, (2, 2)), Content::Number(8));
    }

    #[test]
    fn corner_mine_reveal_stops_at_numbers() {
        let mut engine = engine((3, 3), &[(1, 1)]);

        let outcome = engine.reveal((3, 3));

        assert_eq!(outcome, RevealOutcome::Revealed(8));
        assert_eq!(engine.discovered_count(), 8);
        assert!(engine.is_won());
        assert!(engine.tile_at((1, 1)).is_hidden());
        assert_eq!(engine.tile_at((3, 3)).symbol(), Symbol::Blank);
        assert_eq!(engine.tile_at((2, 2)).symbol(), Symbol::Number(1));
    }

    #[test]
    fn number_reveal_does_not_expand() {
        let mut engine = engine((4, 4), &[(1, 1)]);

        assert_eq!(engine.reveal((2, 2)), RevealOutcome::Revealed(1));
        assert!(engine.tile_at((3, 3)).is_hidden());
        assert_eq!(engine.state(), EngineState::Playing);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut engine = engine((5, 5), &[(1, 5)]);

        let first = engine.reveal((5, 1));
        let snapshot = engine.snapshot();
        let second = engine.reveal((5, 1));

        assert!(first.has_update());
        assert_eq!(second, RevealOutcome::NoChange);
        assert_eq!(engine.snapshot(), snapshot);
        assert_eq!(engine.discovered_count(), first.newly_revealed());
    }

    #[test]
    fn empty_board_reveals_everything() {
        let mut engine = GameEngine::with_seed(BoardConfig::new_unchecked(5, 5, 0), 9);
        engine.start_new_game();
        for _ in 0..2 {
            engine.move_cursor(Direction::Down);
            engine.move_cursor(Direction::Right);
        }

        let outcome = engine.reveal(engine.cursor());

        assert_eq!(outcome, RevealOutcome::Revealed(25));
        assert_eq!(engine.discovered_count(), 25);
        assert!(engine.is_won());
    }

    #[test]
    fn flood_fill_skips_flags() {
        let mut engine = engine((3, 5), &[(3, 5)]);
        engine.move_cursor(Direction::Right);
        engine.move_cursor(Direction::Right);
        engine.move_cursor(Direction::Down);
        assert_eq!(engine.toggle_flag(), FlagOutcome::Flagged);

        let outcome = engine.reveal((1, 1));

        assert_eq!(outcome, RevealOutcome::Revealed(13));
        assert_eq!(engine.tile_at((2, 3)).discovery, Discovery::Flagged);
        assert_eq!(engine.flagged_count(), 1);
        assert!(!engine.is_won());

        engine.toggle_flag();
        assert_eq!(engine.reveal((2, 3)), RevealOutcome::Revealed(1));
        assert!(engine.is_won());
    }

    #[test]
    fn flagged_target_is_not_revealed() {
        let mut engine = engine((3, 3), &[(3, 3)]);
        engine.toggle_flag();

        assert_eq!(engine.check_cursor_tile(), TileCheck::Blocked);
        assert_eq!(engine.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(engine.discovered_count(), 0);
    }

    #[test]
    fn mine_reveal_is_refused() {
        let mut engine = engine((3, 3), &[(1, 1)]);

        assert_eq!(engine.check_cursor_tile(), TileCheck::Detonated);
        assert_eq!(engine.reveal((1, 1)), RevealOutcome::NoChange);
        assert_eq!(engine.reveal((0, 2)), RevealOutcome::NoChange);
        assert_eq!(engine.reveal((40, 40)), RevealOutcome::NoChange);
        assert_eq!(engine.discovered_count(), 0);
    }

    #[test]
    fn toggle_flag_twice_round_trips() {
        let mut engine = engine((3, 3), &[(2, 2)]);

        assert_eq!(engine.toggle_flag(), FlagOutcome::Flagged);
        assert_eq!(engine.flagged_count(), 1);
        assert_eq!(engine.toggle_flag(), FlagOutcome::Unflagged);
        assert_eq!(engine.flagged_count(), 0);
        assert!(engine.tile_at((1, 1)).is_hidden());
    }

    #[test]
    fn flags_can_exceed_mine_count() {
        let mut engine = engine((3, 3), &[(3, 3)]);
        for direction in [Direction::Right, Direction::Right, Direction::Down] {
            engine.toggle_flag();
            engine.move_cursor(direction);
        }
        engine.toggle_flag();

        assert_eq!(engine.flagged_count(), 4);
        assert_eq!(engine.snapshot().flagged_count, 4);
    }

    #[test]
    fn revealed_tile_cannot_be_flagged() {
        let mut engine = engine((3, 3), &[(3, 3)]);
        engine.reveal((1, 1));

        assert_eq!(engine.toggle_flag(), FlagOutcome::NoChange);
        assert_eq!(engine.flagged_count(), 0);
    }

    #[test]
    fn cursor_clamps_at_interior_edges() {
        let mut engine = engine((3, 3), &[(2, 2)]);

        assert!(!engine.move_cursor(Direction::Up));
        assert!(!engine.move_cursor(Direction::Left));
        assert_eq!(engine.cursor(), (1, 1));

        for _ in 0..5 {
            engine.move_cursor(Direction::Down);
            engine.move_cursor(Direction::Right);
        }
        assert_eq!(engine.cursor(), (3, 3));
    }

    #[test]
    fn end_game_freezes_board() {
        let mut engine = engine((3, 3), &[(1, 1)]);
        engine.end_game();

        assert_eq!(engine.state(), EngineState::Lost);
        assert!(engine.is_over());
        assert!(!engine.move_cursor(Direction::Down));
        assert_eq!(engine.toggle_flag(), FlagOutcome::NoChange);
        assert_eq!(engine.reveal((3, 3)), RevealOutcome::NoChange);

        engine.reset();
        assert!(!engine.is_over());
        assert_eq!(engine.state(), EngineState::Uninitialized);
    }

    #[test]
    fn end_game_after_clearing_is_a_win() {
        let mut engine = engine((2, 2), &[(1, 1)]);
        for coords in [(1, 2), (2, 1), (2, 2)] {
            engine.reveal(coords);
        }
        engine.end_game();

        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.snapshot().won, Some(true));
        assert_eq!(engine.completion_percent(), 100.0);
    }

    #[test]
    fn commands_ignored_before_board_is_ready() {
        let mut engine = GameEngine::with_seed(BoardConfig::from_preset(Level::Novice), 5);

        assert!(!engine.move_cursor(Direction::Right));
        assert_eq!(engine.toggle_flag(), FlagOutcome::NoChange);
        assert_eq!(engine.reveal((1, 1)), RevealOutcome::NoChange);

        engine.place_mines();
        engine.compute_numbers();
        engine.compute_numbers();
        assert_eq!(engine.state(), EngineState::Ready);
    }
}

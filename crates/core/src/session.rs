//! Session module - owns the arena, the falling piece and the score
//!
//! The session is driven from outside: a host calls [`Session::tick`] (or
//! [`Session::advance_to`]) as time passes and forwards player commands. All
//! state changes happen synchronously inside those calls.
//!
//! Lifecycle of a piece:
//!
//! - **Falling**: spawned at the top center, moved by commands and gravity.
//! - **Locking**: a drop that would collide merges the piece, sweeps full rows
//!   and spawns the next piece.
//! - **Game over**: if the fresh piece already collides, the arena is wiped and
//!   the score reset. Play continues with that piece; there is no terminal state.

use log::{debug, info, trace};

use crate::collision::{collides, merge};
use crate::config::{ConfigError, SessionConfig};
use crate::grid::Grid;
use crate::pieces::{create_piece, PieceMatrix};
use crate::rng::ShapePicker;
use crate::scoring::{sweep, SweepResult};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, GameAction, RotateDirection, ShapeId, EMPTY};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeId,
    pub matrix: PieceMatrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// New piece at the top, horizontally centered on a grid `grid_width` wide
    pub fn spawn(shape: ShapeId, grid_width: usize) -> Self {
        let matrix = create_piece(shape);
        let x = (grid_width / 2) as i32 - (matrix.width() / 2) as i32;
        Self {
            shape,
            matrix,
            x,
            y: 0,
        }
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        collides(grid, &self.matrix, self.x, self.y)
    }
}

/// What a single drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Piece moved down one row
    Fell,
    /// Piece landed, was merged, and the next piece spawned
    Locked(SweepResult),
    /// Piece landed and the next piece had no room: arena wiped, score reset
    GameOver,
}

/// Record of the most recent landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    active: Piece,
    picker: ShapePicker,
    score: u32,
    /// Rows cleared this game
    lines: u32,
    /// Pieces spawned this game, including the active one
    pieces: u32,
    /// Arena wipes since construction
    games_over: u32,
    drop_counter_ms: u32,
    /// Last timestamp seen by `advance_to`
    last_time: u64,
    last_event: Option<LockEvent>,
}

impl Session {
    /// Default 12x20 game with the given seed
    pub fn new(seed: u32) -> Self {
        Self::build(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    /// Game with explicit configuration
    pub fn with_config(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        let mut picker = ShapePicker::new(&config.shapes, config.seed);
        let grid = Grid::new(config.width, config.height);
        let active = Piece::spawn(picker.pick(), grid.width());

        Self {
            config,
            grid,
            active,
            picker,
            score: 0,
            lines: 0,
            pieces: 1,
            games_over: 0,
            drop_counter_ms: 0,
            last_time: 0,
            last_event: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces
    }

    pub fn games_over(&self) -> u32 {
        self.games_over
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.config.drop_interval_ms
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the drop clock by `elapsed_ms`
    ///
    /// At most one gravity drop happens per call, however large the step.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms >= self.config.drop_interval_ms {
            return Some(self.soft_drop());
        }
        None
    }

    /// Advance the drop clock to an absolute timestamp (same units as `tick`)
    ///
    /// The elapsed time is measured from the previous call, or from 0 on the
    /// first one. Timestamps going backwards count as no time passing.
    pub fn advance_to(&mut self, now: u64) -> Option<DropOutcome> {
        let elapsed = now.saturating_sub(self.last_time);
        self.last_time = now;
        self.tick(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    /// Move the piece down one row, locking it if it cannot fall
    pub fn soft_drop(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0;

        self.active.y += 1;
        if !self.active.collides(&self.grid) {
            return DropOutcome::Fell;
        }
        self.active.y -= 1;

        self.lock_piece()
    }

    /// Merge the active piece, sweep, and bring in the next piece
    fn lock_piece(&mut self) -> DropOutcome {
        let Piece { matrix, x, y, .. } = self.active;
        merge(&mut self.grid, &matrix, x, y);

        let swept = sweep(&mut self.grid);
        self.score = self.score.saturating_add(swept.score);
        self.lines += swept.lines;
        debug!(
            "locked {:?} at ({}, {}): {} lines, +{} points",
            self.active.shape, x, y, swept.lines, swept.score
        );

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared: swept.lines,
            score_delta: swept.score,
            game_over: !spawned,
        });

        if spawned {
            DropOutcome::Locked(swept)
        } else {
            DropOutcome::GameOver
        }
    }

    /// Replace the active piece with a random one at the top center
    ///
    /// If it collides immediately the arena is wiped and the score reset.
    /// Returns false in that case.
    pub fn spawn_piece(&mut self) -> bool {
        let shape = self.picker.pick();
        self.active = Piece::spawn(shape, self.grid.width());
        self.pieces += 1;

        if self.active.collides(&self.grid) {
            self.wipe();
            return false;
        }
        true
    }

    fn wipe(&mut self) {
        info!(
            "game over: score {}, {} lines, {} pieces",
            self.score, self.lines, self.pieces
        );
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        // The piece that did not fit is the first of the next game
        self.pieces = 1;
        self.games_over += 1;
    }

    /// Shift the piece horizontally by `dx`; rejected if it would collide
    pub fn move_piece(&mut self, dx: i32) -> bool {
        self.active.x += dx;
        if self.active.collides(&self.grid) {
            self.active.x -= dx;
            return false;
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(1)
    }

    /// Rotate the piece 90°
    ///
    /// No kicks: if the rotated piece collides it is turned back once and the
    /// rotation is rejected.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        self.active.matrix.rotate(direction);
        if !self.active.collides(&self.grid) {
            return true;
        }

        self.active.matrix.rotate(direction.opposite());
        trace!(
            "rotation {:?} of {:?} at ({}, {}) rejected",
            direction,
            self.active.shape,
            self.active.x,
            self.active.y
        );
        false
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.rotate(RotateDirection::Clockwise)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.rotate(RotateDirection::CounterClockwise)
    }

    /// Apply a host command. Returns whether the piece moved or turned; a soft
    /// drop always counts as applied.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
        }
    }

    /// Write the arena with the active piece drawn on top into `out`
    /// (row-major, `width * height` cells)
    pub fn composited_into(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(self.grid.cells());

        let width = self.grid.width() as i32;
        for (dx, dy, value) in self.active.matrix.occupied() {
            let (x, y) = (self.active.x + dx, self.active.y + dy);
            if self.grid.in_bounds(x, y) {
                out[(y * width + x) as usize] = value;
            }
        }
    }

    pub fn composited(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.grid.cells().len());
        self.composited_into(&mut out);
        out
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            grid: self.grid.to_rows(),
            active: ActiveSnapshot::from(&self.active),
            score: self.score,
            lines: self.lines,
            pieces: self.pieces,
            games_over: self.games_over,
            drop_counter_ms: self.drop_counter_ms,
        }
    }

    /// Count of occupied arena cells
    pub fn settled_cells(&self) -> usize {
        self.grid.cells().iter().filter(|&&c| c != EMPTY).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(shapes: &[ShapeId], width: usize, height: usize) -> Session {
        Session::with_config(SessionConfig {
            width,
            height,
            shapes: shapes.to_vec(),
            ..SessionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_spawn_is_centered() {
        // floor(12 / 2) - floor(3 / 2)
        let session = session_with(&[ShapeId::T], 12, 20);
        assert_eq!(session.active().x, 5);
        assert_eq!(session.active().y, 0);

        let session = session_with(&[ShapeId::I], 12, 20);
        assert_eq!(session.active().x, 4);

        let session = session_with(&[ShapeId::T], 7, 20);
        assert_eq!(session.active().x, 2);
    }

    #[test]
    fn test_move_against_left_wall() {
        // T's occupied columns are 0..=2, so x = 0 touches the wall
        let mut session = session_with(&[ShapeId::T], 12, 20);
        while session.move_left() {}
        assert_eq!(session.active().x, 0);

        assert!(!session.move_piece(-1));
        assert_eq!(session.active().x, 0);
        assert_eq!(session.active().y, 0);
    }

    #[test]
    fn test_move_against_right_wall() {
        let mut session = session_with(&[ShapeId::T], 12, 20);
        let mut moves = 0;
        while session.move_right() {
            moves += 1;
        }
        assert_eq!(moves, 4);
        assert_eq!(session.active().x, 9);
    }

    #[test]
    fn test_move_blocked_by_settled_cell() {
        let mut session = session_with(&[ShapeId::T], 12, 20);
        // T at (5, 0) fills (5..=7, 1) and (6, 2)
        session.grid.set(8, 1, 3);

        assert!(!session.move_right());
        assert_eq!(session.active().x, 5);
        assert!(session.move_left());
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut session = session_with(&[ShapeId::T], 12, 20);

        assert_eq!(session.tick(400), None);
        assert_eq!(session.tick(599), None);
        assert_eq!(session.drop_counter_ms(), 999);
        assert_eq!(session.active().y, 0);

        assert_eq!(session.tick(1), Some(DropOutcome::Fell));
        assert_eq!(session.active().y, 1);
        assert_eq!(session.drop_counter_ms(), 0);
    }

    #[test]
    fn test_tick_drops_once_per_call() {
        let mut session = session_with(&[ShapeId::T], 12, 20);
        assert_eq!(session.tick(5000), Some(DropOutcome::Fell));
        assert_eq!(session.active().y, 1);
        assert_eq!(session.drop_counter_ms(), 0);
    }

    #[test]
    fn test_manual_drop_resets_counter() {
        let mut session = session_with(&[ShapeId::T], 12, 20);
        session.tick(700);
        assert_eq!(session.soft_drop(), DropOutcome::Fell);
        assert_eq!(session.drop_counter_ms(), 0);
        assert_eq!(session.tick(700), None);
    }

    #[test]
    fn test_advance_to_uses_timestamp_deltas() {
        let mut session = session_with(&[ShapeId::T], 12, 20);

        assert_eq!(session.advance_to(500), None);
        assert_eq!(session.advance_to(999), None);
        assert_eq!(session.advance_to(1000), Some(DropOutcome::Fell));
        assert_eq!(session.advance_to(1500), None);
        assert_eq!(session.drop_counter_ms(), 500);

        // Going backwards adds nothing
        assert_eq!(session.advance_to(10), None);
        assert_eq!(session.drop_counter_ms(), 500);
    }

    #[test]
    fn test_piece_lands_on_floor_and_respawns() {
        let mut session = session_with(&[ShapeId::O], 12, 20);
        let value = ShapeId::O.cell_value();

        // O occupies rows 0..=1 and columns 0..=1 of its matrix, spawns at
        // x = 5 and rests at y = 18
        for _ in 0..18 {
            assert_eq!(session.soft_drop(), DropOutcome::Fell);
        }
        assert_eq!(session.active().y, 18);

        let outcome = session.soft_drop();
        assert_eq!(outcome, DropOutcome::Locked(SweepResult::default()));
        assert_eq!(session.grid().get(5, 18), Some(value));
        assert_eq!(session.grid().get(6, 19), Some(value));
        assert_eq!(session.settled_cells(), 4);

        assert_eq!(session.active().y, 0);
        assert_eq!(session.pieces_spawned(), 2);
        assert_eq!(
            session.take_last_event(),
            Some(LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                game_over: false,
            })
        );
        assert_eq!(session.take_last_event(), None);
    }

    #[test]
    fn test_landing_clears_line_and_scores() {
        let mut session = session_with(&[ShapeId::O], 4, 6);
        // Bottom two rows filled except the two columns the O will drop into
        for y in 4..6 {
            session.grid.set(2, y, 1);
            session.grid.set(3, y, 1);
        }
        // O spawns at x = 1; shift it to x = 0 to cover columns 0..=1
        assert!(session.move_left());

        let mut outcome = session.soft_drop();
        while outcome == DropOutcome::Fell {
            outcome = session.soft_drop();
        }

        assert_eq!(outcome, DropOutcome::Locked(SweepResult { lines: 2, score: 30 }));
        assert_eq!(session.score(), 30);
        assert_eq!(session.lines(), 2);
        assert!(session.grid().is_empty());
    }

    #[test]
    fn test_spawn_into_full_arena_wipes() {
        let mut session = session_with(&[ShapeId::T], 12, 20);
        session.score = 120;
        session.lines = 4;
        assert_eq!(session.tick(700), None);
        for y in 0..3 {
            for x in 0..12 {
                session.grid.set(x, y, 2);
            }
        }

        assert!(!session.spawn_piece());

        assert!(session.grid().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.games_over(), 1);
        assert_eq!(session.drop_counter_ms(), 0);
        // Play continues with the new piece
        assert!(!session.active().collides(session.grid()));
        assert_eq!(session.soft_drop(), DropOutcome::Fell);
    }

    #[test]
    fn test_landing_that_blocks_spawn_is_game_over() {
        let mut session = session_with(&[ShapeId::O], 4, 4);
        session.score = 50;
        // O spawns at (1, 0) covering columns 1..=2, rows 0..=1. A stack in
        // those columns from row 2 down stops it right there.
        for y in 2..4 {
            session.grid.set(1, y, 1);
            session.grid.set(2, y, 1);
        }
        let outcome = session.soft_drop();

        assert_eq!(outcome, DropOutcome::GameOver);
        assert!(session.grid().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(
            session.take_last_event(),
            Some(LockEvent {
                lines_cleared: 0,
                score_delta: 0,
                game_over: true,
            })
        );
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut session = session_with(&[ShapeId::T], 12, 20);
        session.soft_drop();
        let before = session.active().matrix;

        assert!(session.rotate_cw());
        assert_ne!(session.active().matrix, before);
        assert!(session.rotate_ccw());
        assert_eq!(session.active().matrix, before);
    }

    #[test]
    fn test_rotate_rejected_against_wall() {
        // Standing I spawns at x = 4; lying flat it would cover (4..=7, 0)
        let mut session = session_with(&[ShapeId::I], 12, 20);
        session.grid.set(session.active().x + 2, 0, 1);
        let before = session.active().matrix;

        assert!(!session.rotate_cw());
        assert_eq!(session.active().matrix, before);
        assert_eq!(session.active().x, 4);
        assert_eq!(session.active().y, 0);
    }

    #[test]
    fn test_rotate_rejected_at_floor() {
        let mut session = session_with(&[ShapeId::I], 12, 20);
        // Turn flat, drop to the floor, then standing up would poke below it
        assert!(session.rotate_cw());
        while session.active().y < 19 {
            assert_eq!(session.soft_drop(), DropOutcome::Fell);
        }
        let before = session.active().matrix;

        assert!(!session.rotate_ccw());
        assert_eq!(session.active().matrix, before);
    }

    #[test]
    fn test_apply_action() {
        let mut session = session_with(&[ShapeId::T], 12, 20);

        assert!(session.apply_action(GameAction::MoveRight));
        assert_eq!(session.active().x, 6);
        assert!(session.apply_action(GameAction::MoveLeft));
        assert_eq!(session.active().x, 5);
        assert!(session.apply_action(GameAction::SoftDrop));
        assert_eq!(session.active().y, 1);
        assert!(session.apply_action(GameAction::RotateCw));
        assert!(session.apply_action(GameAction::RotateCcw));
    }

    #[test]
    fn test_composited_includes_active_piece() {
        let session = session_with(&[ShapeId::T], 12, 20);
        let cells = session.composited();
        let v = ShapeId::T.cell_value();

        assert_eq!(cells.len(), 240);
        assert_eq!(&cells[12..24], &[0, 0, 0, 0, 0, v, v, v, 0, 0, 0, 0]);
        assert_eq!(cells[2 * 12 + 6], v);
        assert_eq!(cells.iter().filter(|&&c| c != 0).count(), 4);
        // The arena itself is untouched
        assert!(session.grid().is_empty());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Session::new(42);
        let mut b = Session::new(42);
        for _ in 0..200 {
            assert_eq!(a.soft_drop(), b.soft_drop());
            assert_eq!(a.active(), b.active());
        }
        assert_eq!(a.grid(), b.grid());
    }
}

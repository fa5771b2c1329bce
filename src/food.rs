use std::time::Duration;

use rand::Rng;

use crate::config::{GridSize, HUD_RESERVED_COLS, HUD_RESERVED_ROWS, SPAWN_ATTEMPT_LIMIT};
use crate::snake::{Position, Snake};

/// Regular food entity. Exactly one is present during a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a free cell, or `None` when the board is full.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        blocked: &[Position],
    ) -> Option<Self> {
        spawn_position(rng, bounds, snake, blocked).map(Self::at)
    }
}

/// Lifecycle of the timed golden bonus fruit.
///
/// The fruit alternates between an idle phase (nothing on the board) and an
/// active phase at a fixed position. Both transitions are driven by the round
/// clock passed into the game tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BonusState {
    Idle { since: Duration },
    Active { position: Position, since: Duration },
}

impl BonusState {
    /// Returns the board position while active.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Active { position, .. } => Some(*position),
            Self::Idle { .. } => None,
        }
    }

    /// Returns true while the fruit is on the board.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Remaining active time at `now`, for HUD display.
    #[must_use]
    pub fn time_left(&self, now: Duration, duration: Duration) -> Option<Duration> {
        match self {
            Self::Active { since, .. } => {
                Some(duration.saturating_sub(now.saturating_sub(*since)))
            }
            Self::Idle { .. } => None,
        }
    }
}

/// Picks a free cell for a spawn, or `None` when no legal cell exists.
///
/// Cells occupied by the snake, listed in `blocked`, or inside the top-left
/// HUD reserve are never returned. Uniform rejection sampling runs up to
/// [`SPAWN_ATTEMPT_LIMIT`] attempts, then falls back to a deterministic scan
/// of free cells so placement terminates even on a nearly full board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    blocked: &[Position],
) -> Option<Position> {
    let free = |position: Position| {
        !in_hud_reserve(position) && !snake.occupies(position) && !blocked.contains(&position)
    };

    for _ in 0..SPAWN_ATTEMPT_LIMIT {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if free(candidate) {
            return Some(candidate);
        }
    }

    let mut candidates = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if free(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Returns true for cells inside the HUD-reserved top-left rectangle.
#[must_use]
pub fn in_hud_reserve(position: Position) -> bool {
    position.x < HUD_RESERVED_COLS && position.y < HUD_RESERVED_ROWS
}

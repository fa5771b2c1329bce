use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{steer_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighboring position one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Mutable snake state: body segments, heading, and pending growth.
///
/// The snake starts stationary (`direction` is `None`) and begins moving on
/// the first accepted steer, matching the arcade each-round behavior.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Option<Direction>,
    pending_steer: Option<Direction>,
    pending_growth: u32,
}

impl Snake {
    /// Creates the standard two-segment starting snake: head at `head`,
    /// tail one cell to its left, stationary.
    #[must_use]
    pub fn starting_at(head: Position) -> Self {
        let tail = Position {
            x: head.x - 1,
            y: head.y,
        };
        Self::from_segments(vec![head, tail], None)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Option<Direction>) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_steer: None,
            pending_growth: 0,
        }
    }

    /// Queues `amount` segments of growth, realized on subsequent ticks.
    pub fn grow(&mut self, amount: u32) {
        self.pending_growth += amount;
    }

    /// Buffers a steer for the next tick. Last valid input wins.
    ///
    /// Steers along the current movement axis are silently ignored, which
    /// also rules out direct reversals into the neck segment.
    pub fn steer(&mut self, direction: Direction) {
        if steer_is_valid(self.direction, direction) {
            self.pending_steer = Some(direction);
        }
    }

    /// Applies the buffered steer and returns the next head position, or
    /// `None` while the snake is stationary.
    pub fn prepare_move(&mut self) -> Option<Position> {
        if let Some(steer) = self.pending_steer.take() {
            self.direction = Some(steer);
        }
        self.direction.map(|direction| self.head().step(direction))
    }

    /// Moves the head to `next`, trimming the tail unless growth is pending.
    pub fn advance_to(&mut self, next: Position) {
        self.body.push_front(next);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction, `None` while stationary.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns pending growth not yet realized by tail retention.
    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

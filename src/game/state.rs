use std::collections::VecDeque;

use super::action::Direction;
use super::config::GameConfig;

/// A pixel position on the board; always the top-left corner of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Whether the current game is still being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// The snake: head, heading and the trail of cells it has occupied
///
/// The trail is stored oldest-first. The head is moved by [`advance`] before
/// it is appended to the trail, so between those two calls the trail still
/// describes the previous tick.
///
/// [`advance`]: SnakeState::advance
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    head: Position,
    direction: Direction,
    /// Heading of the last `advance`; reversal is judged against this one
    moved: Direction,
    trail: VecDeque<Position>,
    target_length: usize,
    config: GameConfig,
}

impl SnakeState {
    pub fn new(config: &GameConfig, spawn: Position, direction: Direction) -> Self {
        let mut snake = Self {
            head: spawn,
            direction,
            moved: direction,
            trail: VecDeque::new(),
            target_length: 1,
            config: config.clone(),
        };
        snake.reset(spawn, direction);
        snake
    }

    /// Back to a single-cell snake with an empty trail
    pub fn reset(&mut self, spawn: Position, direction: Direction) {
        self.head = spawn;
        self.direction = direction;
        self.moved = direction;
        self.trail.clear();
        self.target_length = 1;
    }

    /// Change heading; a request opposite to the heading of the last move is ignored
    ///
    /// Several requests between two moves are each checked against that last
    /// move, so a burst such as Up then Left while moving Right cannot turn
    /// the snake back onto its own neck.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.moved.is_opposite(requested) {
            tracing::trace!(?requested, moved = ?self.moved, "ignored reversal");
            return;
        }
        self.direction = requested;
    }

    /// Move the head one block along the current heading
    pub fn advance(&mut self) {
        let block = self.config.block as i32;
        let (dx, dy) = self.direction.delta();
        self.head = self.head.moved_by(dx * block, dy * block);
        self.moved = self.direction;
    }

    /// Head outside the interior, or on a trail cell other than the newest
    pub fn check_collision(&self) -> bool {
        if !self.config.is_in_bounds(self.head) {
            return true;
        }

        let older = self.trail.len().saturating_sub(1);
        self.trail.iter().take(older).any(|&segment| segment == self.head)
    }

    /// Record the head in the trail, dropping the oldest cell once over length
    pub fn append_segment_and_trim(&mut self) {
        self.trail.push_back(self.head);
        if self.trail.len() > self.target_length {
            self.trail.pop_front();
        }
    }

    /// Lengthen by one; shows up in the trail on the next append
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Occupied cells, oldest first
    pub fn trail(&self) -> &VecDeque<Position> {
        &self.trail
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn score(&self) -> u32 {
        (self.target_length - 1) as u32
    }
}

/// Read-only view of one tick, handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Body cells, oldest first
    pub body: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    /// Number of resets since the engine was created
    pub round: u32,
}

impl Snapshot {
    /// Newest body cell, if the snake has moved since the last reset
    pub fn head(&self) -> Option<Position> {
        self.body.last().copied()
    }
}

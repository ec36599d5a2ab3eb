/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// A snake heading `self` may not turn straight back into `other`
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Grid-cell offset of one move; rows are counted downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A discrete input event, consumed once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Request a new heading
    Move(Direction),
    /// Start a fresh game
    Restart,
    /// End the loop after the current tick
    Quit,
}

impl From<Direction> for Intent {
    fn from(direction: Direction) -> Self {
        Intent::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_only_the_reverse_heading_is_blocked() {
        for heading in ALL {
            let blocked: Vec<Direction> = ALL
                .into_iter()
                .filter(|&turn| heading.is_opposite(turn))
                .collect();
            assert_eq!(blocked, vec![heading.opposite()]);
            assert_eq!(heading.opposite().opposite(), heading);
        }
    }

    #[test]
    fn test_reverse_moves_cancel_out() {
        for heading in ALL {
            let (dx, dy) = heading.delta();
            let (back_x, back_y) = heading.opposite().delta();
            assert_eq!((dx + back_x, dy + back_y), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_intent_from_direction() {
        assert_eq!(Intent::from(Direction::Left), Intent::Move(Direction::Left));
    }
}

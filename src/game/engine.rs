use super::{
    action::{Direction, Intent},
    config::{ConfigError, GameConfig},
    food::FoodSpawner,
    state::{GameStatus, Position, SnakeState, Snapshot},
};

/// What the loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Owns the snake, the food and the game status, and runs the tick protocol
pub struct GameEngine {
    config: GameConfig,
    snake: SnakeState,
    food: Position,
    status: GameStatus,
    spawner: FoodSpawner,
    round: u32,
}

impl GameEngine {
    /// Create a new game engine; fails fast on an invalid board geometry
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let spawner = FoodSpawner::new(config.seed);
        Self::with_spawner(config, spawner)
    }

    /// Same as [`GameEngine::new`] with a fixed food seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(GameConfig {
            seed: Some(seed),
            ..config
        })
    }

    /// Place food from the given spawner instead of one built from the config seed
    pub fn with_spawner(
        config: GameConfig,
        mut spawner: FoodSpawner,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let food = spawner.spawn(&config);
        let snake = SnakeState::new(&config, config.spawn_position(), Direction::Right);

        tracing::info!(
            width = config.board_width,
            height = config.board_height,
            border = config.border,
            block = config.block,
            seed = ?config.seed,
            "game engine ready"
        );

        Ok(Self {
            config,
            snake,
            food,
            status: GameStatus::Running,
            spawner,
            round: 0,
        })
    }

    /// Fresh snake at the board centre, fresh food, status back to running
    pub fn reset(&mut self) {
        self.snake.reset(self.config.spawn_position(), Direction::Right);
        self.food = self.spawner.spawn(&self.config);
        self.status = GameStatus::Running;
        self.round += 1;
        tracing::info!(round = self.round, "game reset");
    }

    /// Run one tick over the intents collected since the previous one
    ///
    /// A restart is applied before any movement, so moves from the same batch
    /// steer the fresh snake. While the game is over nothing else changes.
    pub fn tick(&mut self, intents: &[Intent]) -> TickOutcome {
        if intents.contains(&Intent::Restart) {
            self.reset();
        }

        if self.status == GameStatus::Running {
            for intent in intents {
                if let Intent::Move(direction) = intent {
                    self.snake.set_direction(*direction);
                }
            }
            self.step();
        }

        if intents.contains(&Intent::Quit) {
            tracing::info!(score = self.snake.score(), "quit requested");
            TickOutcome::Quit
        } else {
            TickOutcome::Continue
        }
    }

    fn step(&mut self) {
        self.snake.advance();

        if self.snake.check_collision() {
            self.status = GameStatus::Over;
            tracing::info!(
                score = self.snake.score(),
                x = self.snake.head().x,
                y = self.snake.head().y,
                "game over"
            );
            return;
        }

        self.snake.append_segment_and_trim();

        if self.snake.head() == self.food {
            self.food = self.spawner.spawn(&self.config);
            self.snake.grow();
            tracing::debug!(
                score = self.snake.score(),
                next_x = self.food.x,
                next_y = self.food.y,
                "food eaten"
            );
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.trail().iter().copied().collect(),
            food: self.food,
            score: self.snake.score(),
            status: self.status,
            round: self.round,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Position) {
        self.food = food;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_reset() {
        let mut engine = engine();
        engine.tick(&[]);
        engine.tick(&[Intent::Move(Direction::Up)]);
        engine.reset();

        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.snake().target_length(), 1);
        assert!(engine.snake().trail().is_empty());
        assert_eq!(engine.snake().head(), Position::new(300, 200));
        assert_eq!(engine.snapshot().score, 0);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let result = GameEngine::new(GameConfig::new(60, 400));
        assert!(matches!(result, Err(ConfigError::BoardTooSmall { .. })));

        let result = GameEngine::new(GameConfig::new(3_000_000_000, 400));
        assert!(matches!(result, Err(ConfigError::TooLarge { .. })));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));

        let outcome = engine.tick(&[]);

        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(engine.snake().head(), Position::new(310, 200));
        assert_eq!(engine.snapshot().body, vec![Position::new(310, 200)]);
    }

    #[test]
    fn test_last_direction_wins() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));

        engine.tick(&[
            Intent::Move(Direction::Up),
            Intent::Move(Direction::Left),
            Intent::Move(Direction::Down),
        ]);

        assert_eq!(engine.snake().direction(), Direction::Down);
        assert_eq!(engine.snake().head(), Position::new(300, 210));
    }

    #[test]
    fn test_reversal_intent_ignored_twice() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));

        engine.tick(&[Intent::Move(Direction::Left)]);
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.snake().head(), Position::new(310, 200));

        engine.tick(&[Intent::Move(Direction::Left)]);
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.snake().head(), Position::new(320, 200));
    }

    #[test]
    fn test_food_consumption() {
        // Scripted draws put the first food at (30, 50) and the next at (90, 90)
        let spawner = FoodSpawner::from_rng(StepRng::new(0, 1 << 28));
        let mut engine = GameEngine::with_spawner(GameConfig::default(), spawner).unwrap();
        assert_eq!(engine.food(), Position::new(30, 50));

        engine.place_food(Position::new(310, 200));
        engine.tick(&[]);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.food, Position::new(90, 90));
        assert_ne!(snapshot.food, Position::new(310, 200));
        assert_eq!(snapshot.body.len(), 1);

        engine.tick(&[]);
        assert_eq!(engine.snapshot().body.len(), 2);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut first = GameEngine::with_seed(GameConfig::default(), 99).unwrap();
        let mut second = GameEngine::with_seed(GameConfig::default(), 99).unwrap();
        assert_eq!(first.food(), second.food());

        first.reset();
        second.reset();
        assert_eq!(first.food(), second.food());
    }

    #[test]
    fn test_burst_cannot_reverse_into_body() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));
        engine.snake.grow();
        engine.tick(&[]);
        engine.tick(&[]);
        assert_eq!(
            engine.snapshot().body,
            vec![Position::new(310, 200), Position::new(320, 200)]
        );

        engine.tick(&[Intent::Move(Direction::Up), Intent::Move(Direction::Left)]);

        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.snake().direction(), Direction::Up);
        assert_eq!(engine.snake().head(), Position::new(320, 190));
    }

    #[test]
    fn test_wall_collision_freezes_game() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));

        // 300 -> 560 is 26 ticks, the 27th leaves the interior
        for _ in 0..26 {
            engine.tick(&[]);
            assert_eq!(engine.status(), GameStatus::Running);
        }
        let body_before = engine.snapshot().body;

        engine.tick(&[]);
        assert_eq!(engine.status(), GameStatus::Over);
        assert_eq!(engine.snapshot().body, body_before);

        engine.tick(&[Intent::Move(Direction::Up)]);
        assert_eq!(engine.status(), GameStatus::Over);
        assert_eq!(engine.snapshot().body, body_before);
        assert_eq!(engine.snake().direction(), Direction::Right);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));
        for _ in 0..4 {
            engine.snake.grow();
        }

        engine.tick(&[]);
        engine.tick(&[]);
        engine.tick(&[Intent::Move(Direction::Down)]);
        engine.tick(&[Intent::Move(Direction::Left)]);
        assert_eq!(engine.status(), GameStatus::Running);

        engine.tick(&[Intent::Move(Direction::Up)]);
        assert_eq!(engine.status(), GameStatus::Over);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));
        engine.status = GameStatus::Over;

        let outcome = engine.tick(&[Intent::Restart, Intent::Move(Direction::Up)]);

        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.snake().head(), Position::new(300, 190));
        assert_eq!(engine.snapshot().round, 1);
    }

    #[test]
    fn test_quit_completes_tick() {
        let mut engine = engine();
        engine.place_food(Position::new(30, 30));

        let outcome = engine.tick(&[Intent::Move(Direction::Down), Intent::Quit]);

        assert_eq!(outcome, TickOutcome::Quit);
        assert_eq!(engine.snake().head(), Position::new(300, 210));
    }

    #[test]
    fn test_quit_while_over() {
        let mut engine = engine();
        engine.status = GameStatus::Over;
        assert_eq!(engine.tick(&[Intent::Quit]), TickOutcome::Quit);
        assert_eq!(engine.status(), GameStatus::Over);
    }
}

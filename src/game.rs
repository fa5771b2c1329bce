use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::SoundEvent;
use crate::config::{
    GridSize, BONUS_DURATION, BONUS_GROWTH, BONUS_POINTS, BONUS_SPAWN_INTERVAL, FOOD_GROWTH,
    FOOD_POINTS,
};
use crate::food::{spawn_position, BonusState, Food};
use crate::input::GameInput;
use crate::mode::{CrashPolicy, GameMode, WallPolicy};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// What ended a life or a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    TimeUp,
}

/// Complete mutable state for one round, advanced by [`GameState::tick`].
///
/// All mode differences flow through the [`ModeRules`](crate::mode::ModeRules)
/// table; there is a single tick path for all five modes.
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    pub snake: Snake,
    pub food: Food,
    pub bonus: BonusState,
    pub score: u32,
    pub lives: u32,
    pub speed: f32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    /// Round clock instant at which the Timed countdown expires.
    pub deadline: Option<Duration>,
    bounds: GridSize,
    spawn: Position,
    clock: Duration,
    rng: StdRng,
    sounds: Vec<SoundEvent>,
}

impl GameState {
    /// Creates a fresh round with an entropy-seeded RNG.
    #[must_use]
    pub fn new(mode: GameMode, bounds: GridSize) -> Self {
        Self::new_with_seed(mode, bounds, rand::random())
    }

    /// Creates a deterministic round for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(mode: GameMode, bounds: GridSize, seed: u64) -> Self {
        let rules = mode.rules();
        let mut rng = StdRng::seed_from_u64(seed);
        let spawn = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::starting_at(spawn);
        let food = Food::spawn(&mut rng, bounds, &snake, &[])
            .expect("a fresh board must have a free cell for food");

        Self {
            mode,
            snake,
            food,
            bonus: BonusState::Idle {
                since: Duration::ZERO,
            },
            score: 0,
            lives: rules.lives,
            speed: rules.base_speed,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            deadline: rules.time_limit,
            bounds,
            spawn,
            clock: Duration::ZERO,
            rng,
            sounds: Vec::new(),
        }
    }

    /// Advances the simulation by one tick at round clock `now`.
    pub fn tick(&mut self, now: Duration) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;
        self.clock = now;

        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.finish_round(DeathReason::TimeUp);
                return;
            }
        }

        self.advance_snake(now);
        if self.status == GameStatus::Playing {
            self.update_bonus(now);
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.steer(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            GameInput::Confirm | GameInput::Cancel | GameInput::CycleTheme | GameInput::Quit => {}
        }
    }

    /// Returns the playfield dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Remaining countdown time, when the mode is timed.
    #[must_use]
    pub fn time_left(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_sub(self.clock))
    }

    /// Remaining golden-fruit display time, when one is on the board.
    #[must_use]
    pub fn bonus_time_left(&self) -> Option<Duration> {
        self.bonus.time_left(self.clock, BONUS_DURATION)
    }

    /// Simulation interval derived from the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.speed)
    }

    /// True before the first accepted steer of a round or respawn.
    #[must_use]
    pub fn awaiting_first_move(&self) -> bool {
        self.status == GameStatus::Playing && self.snake.direction().is_none()
    }

    /// Drains sound cues raised since the last call.
    pub fn drain_sounds(&mut self) -> impl Iterator<Item = SoundEvent> + '_ {
        self.sounds.drain(..)
    }

    fn advance_snake(&mut self, now: Duration) {
        let Some(next) = self.snake.prepare_move() else {
            return;
        };

        let next = match self.mode.rules().wall {
            WallPolicy::Wrap => next.wrapped(self.bounds),
            WallPolicy::Kill => {
                if !next.is_within_bounds(self.bounds) {
                    self.crash(DeathReason::WallCollision);
                    return;
                }
                next
            }
        };

        // Growth is queued before the move so an eaten item keeps the tail
        // on this very tick: length grows the moment the head lands on food.
        let ate_food = next == self.food.position;
        let ate_bonus = self.bonus.position() == Some(next);
        if ate_food {
            self.snake.grow(FOOD_GROWTH);
        }
        if ate_bonus {
            self.snake.grow(BONUS_GROWTH);
        }

        self.snake.advance_to(next);

        if self.snake.head_overlaps_body() {
            self.crash(DeathReason::SelfCollision);
            return;
        }

        if ate_food {
            self.consume_food();
        }
        if ate_bonus {
            self.consume_bonus(now);
        }
    }

    fn consume_food(&mut self) {
        let rules = self.mode.rules();

        self.score += FOOD_POINTS;
        self.speed = (self.speed + rules.speed_per_food).min(rules.max_speed);
        if let Some(deadline) = &mut self.deadline {
            *deadline += rules.time_per_food;
        }
        self.sounds.push(SoundEvent::Eat);

        let blocked: Vec<Position> = self.bonus.position().into_iter().collect();
        match Food::spawn(&mut self.rng, self.bounds, &self.snake, &blocked) {
            Some(food) => self.food = food,
            // No legal cell left for food: the board is beaten.
            None => self.status = GameStatus::Victory,
        }
    }

    fn consume_bonus(&mut self, now: Duration) {
        self.score += BONUS_POINTS;
        self.bonus = BonusState::Idle { since: now };
        self.sounds.push(SoundEvent::GoldenEat);
    }

    fn update_bonus(&mut self, now: Duration) {
        match self.bonus {
            BonusState::Idle { since }
                if now.saturating_sub(since) >= BONUS_SPAWN_INTERVAL =>
            {
                let blocked = [self.food.position];
                if let Some(position) =
                    spawn_position(&mut self.rng, self.bounds, &self.snake, &blocked)
                {
                    self.bonus = BonusState::Active {
                        position,
                        since: now,
                    };
                }
            }
            BonusState::Active { since, .. } if now.saturating_sub(since) >= BONUS_DURATION => {
                self.bonus = BonusState::Idle { since: now };
            }
            _ => {}
        }
    }

    fn crash(&mut self, reason: DeathReason) {
        match self.mode.rules().crash {
            // Zen: the snake quietly starts over, the round continues.
            CrashPolicy::SoftReset => self.reset_snake(),
            CrashPolicy::Fatal => {
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    self.finish_round(reason);
                } else {
                    self.sounds.push(SoundEvent::Crash);
                    self.speed = self.mode.rules().base_speed;
                    self.reset_snake();
                }
            }
        }
    }

    fn finish_round(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.sounds.push(SoundEvent::Crash);
    }

    fn reset_snake(&mut self) {
        self.snake = Snake::starting_at(self.spawn);

        // The reset body may cover the current food; move it out of the way.
        if self.snake.occupies(self.food.position) {
            let blocked: Vec<Position> = self.bonus.position().into_iter().collect();
            if let Some(food) = Food::spawn(&mut self.rng, self.bounds, &self.snake, &blocked) {
                self.food = food;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::audio::SoundEvent;
    use crate::config::{
        GridSize, BONUS_DURATION, BONUS_SPAWN_INTERVAL, DEFAULT_GRID, FOOD_POINTS,
    };
    use crate::food::{BonusState, Food};
    use crate::input::{Direction, GameInput};
    use crate::mode::GameMode;
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus};

    fn steer(state: &mut GameState, direction: Direction) {
        state.apply_input(GameInput::Direction(direction));
    }

    fn tick_at(state: &mut GameState, secs: u64) {
        state.tick(Duration::from_secs(secs));
    }

    #[test]
    fn classic_food_directly_ahead_grows_snake_on_the_same_tick() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 1);
        state.snake = Snake::starting_at(Position { x: 5, y: 5 });
        state.food = Food::at(Position { x: 6, y: 5 });

        steer(&mut state, Direction::Right);
        tick_at(&mut state, 0);

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, FOOD_POINTS);
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn snake_stays_put_until_the_first_steer() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 2);
        assert!(state.awaiting_first_move());

        let head = state.snake.head();
        tick_at(&mut state, 0);
        tick_at(&mut state, 1);

        assert_eq!(state.snake.head(), head);
        assert!(state.awaiting_first_move());
    }

    #[test]
    fn lethal_wall_ends_the_round_on_first_out_of_bounds_tick() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 3);
        state.snake = Snake::from_segments(
            vec![Position { x: 39, y: 5 }, Position { x: 38, y: 5 }],
            Some(Direction::Right),
        );
        state.food = Food::at(Position { x: 0, y: 19 });

        tick_at(&mut state, 0);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        // Body unchanged: the head never left the grid.
        assert_eq!(state.snake.head(), Position { x: 39, y: 5 });
    }

    #[test]
    fn wrap_walls_keep_coordinates_inside_the_grid() {
        let mut state = GameState::new_with_seed(GameMode::Zen, DEFAULT_GRID, 4);
        state.snake = Snake::from_segments(
            vec![Position { x: 0, y: 5 }, Position { x: 1, y: 5 }],
            Some(Direction::Left),
        );
        state.food = Food::at(Position { x: 20, y: 19 });

        for tick in 0..200 {
            state.tick(Duration::from_millis(tick * 200));
            let head = state.snake.head();
            assert!(head.is_within_bounds(state.bounds()), "head {head:?} escaped");
        }
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn self_collision_ends_a_classic_round() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 5);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 5 },
                Position { x: 1, y: 5 },
                Position { x: 1, y: 6 },
                Position { x: 2, y: 6 },
                Position { x: 3, y: 6 },
                Position { x: 3, y: 5 },
            ],
            Some(Direction::Left),
        );
        state.food = Food::at(Position { x: 20, y: 10 });

        tick_at(&mut state, 0);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn survival_crash_costs_a_life_and_respawns() {
        let mut state = GameState::new_with_seed(GameMode::Survival, DEFAULT_GRID, 6);
        assert_eq!(state.lives, 3);

        state.score = 40;
        state.speed = 7.0;
        state.snake = Snake::from_segments(
            vec![Position { x: 0, y: 5 }, Position { x: 1, y: 5 }],
            Some(Direction::Left),
        );
        state.food = Food::at(Position { x: 30, y: 15 });

        tick_at(&mut state, 0);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.lives, 2);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 20, y: 10 });
        assert!(state.awaiting_first_move());
        // Score survives the respawn, speed resets to base.
        assert_eq!(state.score, 40);
        assert_eq!(state.speed, GameMode::Survival.rules().base_speed);
    }

    #[test]
    fn survival_last_life_wall_crash_ends_the_round() {
        let mut state = GameState::new_with_seed(GameMode::Survival, DEFAULT_GRID, 7);
        state.lives = 1;
        state.snake = Snake::from_segments(
            vec![Position { x: 0, y: 5 }, Position { x: 1, y: 5 }],
            Some(Direction::Left),
        );
        state.food = Food::at(Position { x: 30, y: 15 });

        tick_at(&mut state, 0);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.lives, 0);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    }

    #[test]
    fn zen_self_collision_soft_resets_without_ending_the_round() {
        let mut state = GameState::new_with_seed(GameMode::Zen, DEFAULT_GRID, 8);
        state.score = 120;
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 5 },
                Position { x: 1, y: 5 },
                Position { x: 1, y: 6 },
                Position { x: 2, y: 6 },
                Position { x: 3, y: 6 },
            ],
            Some(Direction::Down),
        );
        state.food = Food::at(Position { x: 30, y: 15 });

        tick_at(&mut state, 0);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 20, y: 10 });
        assert_eq!(state.score, 120);
        assert_eq!(state.death_reason, None);
    }

    #[test]
    fn timed_round_ends_when_the_countdown_reaches_zero() {
        let mut state = GameState::new_with_seed(GameMode::Timed, DEFAULT_GRID, 9);
        state.deadline = Some(Duration::from_secs(1));

        state.tick(Duration::from_millis(800));
        assert_eq!(state.status, GameStatus::Playing);

        state.tick(Duration::from_secs(1));
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::TimeUp));
    }

    #[test]
    fn timed_food_extends_the_countdown() {
        let mut state = GameState::new_with_seed(GameMode::Timed, DEFAULT_GRID, 10);
        state.snake = Snake::starting_at(Position { x: 5, y: 5 });
        state.food = Food::at(Position { x: 6, y: 5 });
        let deadline_before = state.deadline.expect("timed mode has a deadline");

        steer(&mut state, Direction::Right);
        tick_at(&mut state, 0);

        assert_eq!(
            state.deadline,
            Some(deadline_before + GameMode::Timed.rules().time_per_food)
        );
    }

    #[test]
    fn speed_rises_per_food_and_caps_at_the_mode_maximum() {
        let rules = GameMode::Classic.rules();
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 11);
        state.speed = rules.max_speed - 0.1;
        state.snake = Snake::starting_at(Position { x: 5, y: 5 });
        state.food = Food::at(Position { x: 6, y: 5 });

        steer(&mut state, Direction::Right);
        tick_at(&mut state, 0);

        assert_eq!(state.speed, rules.max_speed);
        assert!(state.tick_interval() >= Duration::from_millis(83));
    }

    #[test]
    fn golden_fruit_appears_after_the_interval_and_expires() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 12);
        assert!(!state.bonus.is_active());

        state.tick(BONUS_SPAWN_INTERVAL - Duration::from_secs(1));
        assert!(!state.bonus.is_active());

        state.tick(BONUS_SPAWN_INTERVAL);
        assert!(state.bonus.is_active());
        let position = state.bonus.position().expect("bonus is active");
        assert!(!state.snake.occupies(position));
        assert_ne!(position, state.food.position);

        state.tick(BONUS_SPAWN_INTERVAL + BONUS_DURATION);
        assert!(!state.bonus.is_active());

        // The interval clock restarts from the despawn.
        state.tick(BONUS_SPAWN_INTERVAL + BONUS_DURATION + Duration::from_secs(1));
        assert!(!state.bonus.is_active());
    }

    #[test]
    fn eating_the_golden_fruit_awards_bonus_points_and_growth() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 13);
        state.snake = Snake::starting_at(Position { x: 5, y: 5 });
        state.food = Food::at(Position { x: 30, y: 15 });
        state.bonus = BonusState::Active {
            position: Position { x: 6, y: 5 },
            since: Duration::ZERO,
        };

        steer(&mut state, Direction::Right);
        tick_at(&mut state, 1);

        assert_eq!(state.score, 30);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.pending_growth(), 1);
        assert!(!state.bonus.is_active());

        let sounds: Vec<SoundEvent> = state.drain_sounds().collect();
        assert_eq!(sounds, vec![SoundEvent::GoldenEat]);
    }

    #[test]
    fn eating_the_last_free_cell_wins_the_round() {
        let bounds = GridSize {
            width: 3,
            height: 4,
        };
        let mut state = GameState::new_with_seed(GameMode::Zen, bounds, 14);

        // Body covers every cell except the food cell below the head.
        let target = Position { x: 0, y: 3 };
        let head = Position { x: 0, y: 2 };
        let mut segments = vec![head];
        for y in 0..4 {
            for x in 0..3 {
                let position = Position { x, y };
                if position != target && position != head {
                    segments.push(position);
                }
            }
        }
        state.snake = Snake::from_segments(segments, Some(Direction::Down));
        state.food = Food::at(target);

        tick_at(&mut state, 0);

        assert_eq!(state.status, GameStatus::Victory);
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 15);
        steer(&mut state, Direction::Right);
        tick_at(&mut state, 0);
        let head = state.snake.head();

        state.apply_input(GameInput::Pause);
        assert_eq!(state.status, GameStatus::Paused);
        tick_at(&mut state, 1);
        assert_eq!(state.snake.head(), head);

        state.apply_input(GameInput::Pause);
        assert_eq!(state.status, GameStatus::Playing);
        tick_at(&mut state, 1);
        assert_ne!(state.snake.head(), head);
    }

    #[test]
    fn eat_sound_is_raised_once_per_food() {
        let mut state = GameState::new_with_seed(GameMode::Classic, DEFAULT_GRID, 16);
        state.snake = Snake::starting_at(Position { x: 5, y: 5 });
        state.food = Food::at(Position { x: 6, y: 5 });

        steer(&mut state, Direction::Right);
        tick_at(&mut state, 0);

        let sounds: Vec<SoundEvent> = state.drain_sounds().collect();
        assert_eq!(sounds, vec![SoundEvent::Eat]);
        assert_eq!(state.drain_sounds().count(), 0);
    }
}

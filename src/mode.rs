use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

/// Selectable play modes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, ValueEnum)]
pub enum GameMode {
    Classic,
    Timed,
    Hardcore,
    Survival,
    Zen,
}

/// What happens when the snake's head reaches the grid boundary.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WallPolicy {
    /// Leaving the grid ends the round (or costs a life).
    Kill,
    /// Head coordinates wrap modulo the grid dimensions.
    Wrap,
}

/// What a crash (wall or self collision) does to the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CrashPolicy {
    /// Costs a life; the round ends when none remain.
    Fatal,
    /// The snake silently resets to its starting state; the round continues.
    SoftReset,
}

/// Immutable rule table parameterizing the shared tick loop.
#[derive(Debug, Clone, Copy)]
pub struct ModeRules {
    pub wall: WallPolicy,
    pub crash: CrashPolicy,
    pub lives: u32,
    /// Countdown for the round, when the mode is timed.
    pub time_limit: Option<Duration>,
    /// Countdown extension granted per regular food.
    pub time_per_food: Duration,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_per_food: f32,
}

const CLASSIC_RULES: ModeRules = ModeRules {
    wall: WallPolicy::Kill,
    crash: CrashPolicy::Fatal,
    lives: 1,
    time_limit: None,
    time_per_food: Duration::ZERO,
    base_speed: 5.0,
    max_speed: 10.0,
    speed_per_food: 0.3,
};

const TIMED_RULES: ModeRules = ModeRules {
    wall: WallPolicy::Wrap,
    crash: CrashPolicy::Fatal,
    lives: 1,
    time_limit: Some(Duration::from_secs(60)),
    time_per_food: Duration::from_secs(2),
    base_speed: 5.0,
    max_speed: 10.0,
    speed_per_food: 0.3,
};

const HARDCORE_RULES: ModeRules = ModeRules {
    wall: WallPolicy::Kill,
    crash: CrashPolicy::Fatal,
    lives: 1,
    time_limit: None,
    time_per_food: Duration::ZERO,
    base_speed: 8.0,
    max_speed: 12.0,
    speed_per_food: 0.3,
};

const SURVIVAL_RULES: ModeRules = ModeRules {
    wall: WallPolicy::Kill,
    crash: CrashPolicy::Fatal,
    lives: 3,
    time_limit: None,
    time_per_food: Duration::ZERO,
    base_speed: 5.0,
    max_speed: 10.0,
    speed_per_food: 0.3,
};

const ZEN_RULES: ModeRules = ModeRules {
    wall: WallPolicy::Wrap,
    crash: CrashPolicy::SoftReset,
    lives: 1,
    time_limit: None,
    time_per_food: Duration::ZERO,
    base_speed: 5.0,
    max_speed: 10.0,
    speed_per_food: 0.3,
};

impl GameMode {
    /// All modes in menu order.
    pub const ALL: [GameMode; 5] = [
        GameMode::Classic,
        GameMode::Timed,
        GameMode::Hardcore,
        GameMode::Survival,
        GameMode::Zen,
    ];

    /// Returns the rule table for this mode.
    #[must_use]
    pub fn rules(self) -> &'static ModeRules {
        match self {
            Self::Classic => &CLASSIC_RULES,
            Self::Timed => &TIMED_RULES,
            Self::Hardcore => &HARDCORE_RULES,
            Self::Survival => &SURVIVAL_RULES,
            Self::Zen => &ZEN_RULES,
        }
    }

    /// Display name, also the key in the persisted score file.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Timed => "Timed",
            Self::Hardcore => "Hardcore",
            Self::Survival => "Survival",
            Self::Zen => "Zen",
        }
    }

    /// Returns true when the mode records a persisted high score.
    ///
    /// Zen has no fail state, so a score there is not comparable.
    #[must_use]
    pub fn tracks_high_score(self) -> bool {
        !matches!(self, Self::Zen)
    }

    /// One-line description shown in the mode-select menu.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Classic => "Lethal walls, one life",
            Self::Timed => "60 seconds, walls wrap, food buys time",
            Self::Hardcore => "Lethal walls at high speed",
            Self::Survival => "Three lives, respawn on crash",
            Self::Zen => "No failure, walls wrap",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

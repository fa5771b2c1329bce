use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_arcade::audio::{AudioPort, BellAudio, NullAudio};
use snake_arcade::config::{DEFAULT_GRID, FRAME_INTERVAL, THEMES};
use snake_arcade::game::{GameState, GameStatus};
use snake_arcade::input::{Direction, GameInput, InputHandler};
use snake_arcade::mode::GameMode;
use snake_arcade::renderer;
use snake_arcade::score::{load_scores, save_scores, HighScoreTable};
use snake_arcade::terminal_runtime::TerminalSession;
use snake_arcade::ui::hud::HudInfo;
use snake_arcade::ui::menu::render_mode_menu;

#[derive(Debug, Parser)]
#[command(version, about = "Terminal Snake arcade with five play modes")]
struct Cli {
    /// Start directly in this mode instead of the select menu.
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Seed the RNG for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable terminal-bell sound cues.
    #[arg(long = "no-sound")]
    no_sound: bool,
}

/// One round in progress: game state plus its pacing clocks.
struct Round {
    state: GameState,
    /// Round clock fed into the simulation; advances one tick interval per
    /// tick, so pausing does not consume countdown or bonus time.
    clock: Duration,
    /// Stored best at round start, the reference for "new high score".
    reference_best: u32,
    last_tick: Instant,
}

impl Round {
    fn start(mode: GameMode, seed: Option<u64>, scores: &HighScoreTable) -> Self {
        let state = match seed {
            Some(seed) => GameState::new_with_seed(mode, DEFAULT_GRID, seed),
            None => GameState::new(mode, DEFAULT_GRID),
        };
        Self {
            reference_best: scores.best(mode),
            state,
            clock: Duration::ZERO,
            last_tick: Instant::now(),
        }
    }
}

enum Screen {
    Menu { selected: usize },
    Game(Box<Round>),
}

struct App {
    screen: Screen,
    scores: HighScoreTable,
    warning: Option<String>,
    theme_index: usize,
    seed: Option<u64>,
    audio: Box<dyn AudioPort>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Load scores before entering raw mode so a warning stays readable.
    let (scores, warning) = match load_scores() {
        Ok(scores) => (scores, None),
        Err(error) => {
            eprintln!("warning: could not read high scores: {error}");
            (
                HighScoreTable::default(),
                Some("high scores unavailable".to_owned()),
            )
        }
    };

    let audio: Box<dyn AudioPort> = if cli.no_sound {
        Box::new(NullAudio)
    } else {
        Box::new(BellAudio)
    };

    let mut app = App {
        screen: match cli.mode {
            Some(mode) => Screen::Game(Box::new(Round::start(mode, cli.seed, &scores))),
            None => Screen::Menu { selected: 0 },
        },
        scores,
        warning,
        theme_index: 0,
        seed: cli.seed,
        audio,
    };

    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut app)
}

fn run(session: &mut TerminalSession, app: &mut App) -> io::Result<()> {
    let mut input = InputHandler::new();

    loop {
        draw(session, app)?;

        if let Some(event) = input.poll_input()? {
            if matches!(event, GameInput::Quit) {
                return Ok(());
            }
            handle_input(app, event);
        }

        if let Screen::Game(round) = &mut app.screen {
            if round.state.status == GameStatus::Playing
                && round.last_tick.elapsed() >= round.state.tick_interval()
            {
                round.clock += round.state.tick_interval();
                round.state.tick(round.clock);
                round.last_tick = Instant::now();

                for sound in round.state.drain_sounds() {
                    app.audio.play(sound);
                }

                record_live_high_score(&mut app.scores, &round.state, &mut app.warning);
            }
        }

        thread::sleep(FRAME_INTERVAL);
    }
}

/// Persists an improved score as soon as it happens, not just at round end.
fn record_live_high_score(
    scores: &mut HighScoreTable,
    state: &GameState,
    warning: &mut Option<String>,
) {
    if !scores.record(state.mode, state.score) {
        return;
    }
    if let Err(error) = save_scores(scores) {
        *warning = Some(format!("could not save high score: {error}"));
    }
}

fn handle_input(app: &mut App, event: GameInput) {
    if matches!(event, GameInput::CycleTheme) {
        app.theme_index = (app.theme_index + 1) % THEMES.len();
        return;
    }

    match &mut app.screen {
        Screen::Menu { selected } => match event {
            GameInput::Direction(Direction::Up) => {
                *selected = selected.checked_sub(1).unwrap_or(GameMode::ALL.len() - 1);
            }
            GameInput::Direction(Direction::Down) => {
                *selected = (*selected + 1) % GameMode::ALL.len();
            }
            GameInput::Confirm => {
                let mode = GameMode::ALL[*selected];
                app.screen = Screen::Game(Box::new(Round::start(mode, app.seed, &app.scores)));
            }
            _ => {}
        },
        Screen::Game(round) => match event {
            GameInput::Confirm
                if matches!(
                    round.state.status,
                    GameStatus::GameOver | GameStatus::Victory
                ) =>
            {
                **round = Round::start(round.state.mode, app.seed, &app.scores);
            }
            GameInput::Cancel => {
                let selected = GameMode::ALL
                    .iter()
                    .position(|mode| *mode == round.state.mode)
                    .unwrap_or(0);
                app.screen = Screen::Menu { selected };
            }
            other => round.state.apply_input(other),
        },
    }
}

fn draw(session: &mut TerminalSession, app: &App) -> io::Result<()> {
    let theme = &THEMES[app.theme_index];

    session.terminal_mut().draw(|frame| match &app.screen {
        Screen::Menu { selected } => {
            render_mode_menu(frame, frame.area(), *selected, &app.scores, theme);
        }
        Screen::Game(round) => {
            let info = HudInfo {
                high_score: app.scores.best(round.state.mode).max(round.reference_best),
                reference_best: round.reference_best,
                theme,
                warning: app.warning.as_deref(),
            };
            renderer::render(frame, &round.state, &info);
        }
    })?;

    Ok(())
}

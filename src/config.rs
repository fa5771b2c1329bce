use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default playfield as a [`GridSize`].
pub const DEFAULT_GRID: GridSize = GridSize {
    width: DEFAULT_GRID_WIDTH,
    height: DEFAULT_GRID_HEIGHT,
};

/// Points awarded for regular food.
pub const FOOD_POINTS: u32 = 10;

/// Points awarded for the golden bonus fruit.
pub const BONUS_POINTS: u32 = 30;

/// Growth queued by regular food, in segments.
pub const FOOD_GROWTH: u32 = 1;

/// Growth queued by the golden bonus fruit, in segments.
pub const BONUS_GROWTH: u32 = 2;

/// Idle time before a new golden fruit appears.
pub const BONUS_SPAWN_INTERVAL: Duration = Duration::from_secs(30);

/// How long a golden fruit stays on the board before despawning.
pub const BONUS_DURATION: Duration = Duration::from_secs(5);

/// Random spawn attempts before falling back to a scan of free cells.
pub const SPAWN_ATTEMPT_LIMIT: u32 = 128;

/// Width in cells of the top-left HUD reserve where nothing spawns.
pub const HUD_RESERVED_COLS: i32 = 14;

/// Height in cells of the top-left HUD reserve.
pub const HUD_RESERVED_ROWS: i32 = 2;

/// Frame pacing for the render/input loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub bonus: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_status: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    bonus: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_status: Color::Gray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    bonus: Color::Magenta,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    hud_status: Color::Gray,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    bonus: Color::Cyan,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    hud_status: Color::Gray,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyphs for board entities.
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_BONUS: &str = "★";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

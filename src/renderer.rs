use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_BONUS, GLYPH_FOOD, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
    GLYPH_SNAKE_TAIL,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders one full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let theme = info.theme;
    let play_area = board_area(frame.area(), state.bounds());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);
    render_hud(frame, inner, state, info);

    if state.awaiting_first_move() {
        render_start_hint(frame, inner, theme);
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver | GameStatus::Victory => render_game_over_menu(
            frame,
            play_area,
            state.score,
            info.reference_best,
            state.death_reason,
            state.status == GameStatus::Victory,
            theme,
        ),
        GameStatus::Playing => {}
    }
}

/// Centers the bordered board inside the terminal area, clamped to fit.
fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let want_width = bounds.width.saturating_add(2);
    let want_height = bounds.height.saturating_add(2);

    let width = want_width.min(area.width);
    let height = want_height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food.position) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }

    if let Some(position) = state.bonus.position() {
        if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), position) {
            buffer.set_string(
                x,
                y,
                GLYPH_BONUS,
                Style::new().fg(theme.bonus).add_modifier(Modifier::BOLD),
            );
        }
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn render_start_hint(frame: &mut Frame<'_>, inner: Rect, theme: &Theme) {
    let hint = "Press an arrow key to start";
    let width = hint.len() as u16;
    if inner.width < width || inner.height < 4 {
        return;
    }

    let x = inner.x + (inner.width - width) / 2;
    let y = inner.y + inner.height / 2 + 2;
    frame
        .buffer_mut()
        .set_string(x, y, hint, Style::new().fg(theme.menu_footer));
}

fn head_glyph(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Up) => GLYPH_SNAKE_HEAD_UP,
        Some(Direction::Down) => GLYPH_SNAKE_HEAD_DOWN,
        Some(Direction::Left) => GLYPH_SNAKE_HEAD_LEFT,
        // A stationary snake faces right, where it will first move.
        Some(Direction::Right) | None => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

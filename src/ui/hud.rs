use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Theme;
use crate::game::GameState;
use crate::mode::GameMode;

/// Supplemental values displayed alongside the live game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    /// Stored best at round start; the game-over screen compares against
    /// this to call out a new high score.
    pub reference_best: u32,
    pub theme: &'a Theme,
    /// Non-fatal problem to surface (e.g. score file unwritable).
    pub warning: Option<&'a str>,
}

/// Draws the two-line HUD into the reserved top-left corner of the play area.
///
/// Food and bonus spawns avoid this rectangle, so the text never covers an
/// item the player needs to reach.
pub fn render_hud(frame: &mut Frame<'_>, inner: Rect, state: &GameState, info: &HudInfo<'_>) {
    let score_line = if state.mode.tracks_high_score() {
        format!("Score {:>5}  Hi {:>5}", state.score, info.high_score)
    } else {
        format!("Score {:>5}", state.score)
    };
    let status_line = status_line(state);

    let score_style = Style::new()
        .fg(info.theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let status_style = Style::new().fg(info.theme.hud_status);

    draw_line(frame, inner, 0, &score_line, score_style);
    draw_line(frame, inner, 1, &status_line, status_style);

    if let Some(warning) = info.warning {
        let warning_style = Style::new().fg(info.theme.menu_footer);
        let row = inner.height.saturating_sub(1);
        draw_line(frame, inner, row, warning, warning_style);
    }
}

fn status_line(state: &GameState) -> String {
    let mut line = state.mode.name().to_owned();

    match state.mode {
        GameMode::Survival => {
            line.push_str(&format!("  Lives {}", state.lives));
        }
        GameMode::Timed => {
            if let Some(left) = state.time_left() {
                line.push_str(&format!("  Time {}s", left.as_secs()));
            }
        }
        GameMode::Classic | GameMode::Hardcore | GameMode::Zen => {}
    }

    if let Some(left) = state.bonus_time_left() {
        line.push_str(&format!("  ★ {}s", left.as_secs()));
    }

    line
}

fn draw_line(frame: &mut Frame<'_>, inner: Rect, row: u16, text: &str, style: Style) {
    if row >= inner.height {
        return;
    }

    let fitted = fit_to_width(text, usize::from(inner.width));
    frame
        .buffer_mut()
        .set_string(inner.x, inner.y + row, fitted, style);
}

/// Truncates `text` to at most `width` terminal columns.
fn fit_to_width(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut end = 0;
    let mut used = 0;
    for (offset, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        end = offset + ch.len_utf8();
    }
    &text[..end]
}

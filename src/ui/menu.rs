use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;
use crate::mode::GameMode;
use crate::score::HighScoreTable;

/// Draws the mode-select screen as a centered popup.
pub fn render_mode_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: usize,
    scores: &HighScoreTable,
    theme: &Theme,
) {
    let popup = centered_popup(area, 72, 70);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(GameMode::ALL.len() as u16 + 2),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE ARCADE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body = Vec::with_capacity(GameMode::ALL.len());
    for (index, mode) in GameMode::ALL.iter().enumerate() {
        let marker = if index == selected { "▶ " } else { "  " };
        let best = if mode.tracks_high_score() {
            format!("best {:>5}", scores.best(*mode))
        } else {
            "untracked".to_owned()
        };
        let label = format!("{marker}{:<10} {best:>12}  {}", mode.name(), mode.tagline());

        let style = if index == selected {
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        body.push(Line::from(Span::styled(label, style)));
    }

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" select mode ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(
            "[↑/↓] Choose   [Enter] Play   [T] Theme   [Q] Quit",
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Esc] Mode menu   [Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_title))
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the round-end screen (game over or victory) as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    previous_best: u32,
    death_reason: Option<DeathReason>,
    victory: bool,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let title = if victory { "YOU WIN!" } else { "GAME OVER" };
    let is_new_best = score > previous_best;
    let lines = vec![
        Line::from(title),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Best:  {}", previous_best.max(score))),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit the wall",
            Some(DeathReason::SelfCollision) => "Cause: bit yourself",
            Some(DeathReason::TimeUp) => "Cause: time ran out",
            None => "",
        }),
        Line::from(if is_new_best { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("[Enter] Play Again"),
        Line::from("[Esc] Mode menu   [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_title))
            .block(Block::bordered().title(if victory { " victory " } else { " game over " })),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the player status bar.
//!
//! This module renders the current preview, its progress, and the alert or
//! key help line underneath.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_ALERT, ICON_PAUSE, ICON_PLAY, ICON_STOP},
    util,
};

const RESULTS_HELP: &str = "/ search  j/k move  enter play/pause  s stop  q quit";
const INPUT_HELP: &str = "enter search  esc back to results";

/// Renders the status bar including track info, progress and alerts.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[0]);

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let current = app
        .session
        .selected_row()
        .and_then(|idx| app.session.rows().get(idx));

    let mut track_line = vec![Span::styled(format!("{icon} "), bold).fg(Color::White)];
    match current {
        Some(row) => {
            track_line.push(Span::styled(row.track_name.as_str(), bold).fg(app.theme.accent_colour));
            if !row.artist_name.is_empty() {
                track_line.push(Span::raw(" by "));
                track_line.push(
                    Span::styled(row.artist_name.as_str(), bold).fg(app.theme.accent_colour),
                );
            }
        }
        None => track_line.push(Span::raw("Nothing playing")),
    }
    f.render_widget(Paragraph::new(Line::from(track_line)), info_chunks[0]);

    if current.is_some() {
        let duration = app.player_duration.unwrap_or(0);
        let time = app.player_time.unwrap_or(0);

        let time_line = Line::from(vec![
            Span::styled(util::format::format_time(time), bold).fg(app.theme.accent_colour),
            Span::styled(" / ", bold).fg(Color::White),
            Span::styled(util::format::format_time(duration), bold).fg(app.theme.accent_colour),
        ]);
        f.render_widget(
            Paragraph::new(time_line).alignment(Alignment::Right),
            info_chunks[1],
        );
    }

    let position = if current.is_some() {
        app.player_position.unwrap_or(0.0).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[1]);

    let message_line = match &app.alert {
        Some(alert) => Line::from(vec![
            Span::styled(format!("{ICON_ALERT} {}: ", alert.title), bold).fg(app.theme.alert_fg),
            Span::raw(alert.message.as_str()).fg(app.theme.alert_fg),
            Span::raw("  (esc to dismiss)").fg(app.theme.border_colour),
        ]),
        None if app.search_input.is_active => Line::from(INPUT_HELP).fg(app.theme.border_colour),
        None => Line::from(RESULTS_HELP).fg(app.theme.border_colour),
    };
    f.render_widget(Paragraph::new(message_line), chunks[2]);
}

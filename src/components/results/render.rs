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

//! UI rendering logic for the result cards.
//!
//! Cards are stacked top to bottom starting at the scroll offset, each one as
//! tall as its measured size. The last visible card is cut off at the bottom
//! of the viewport.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
};

use crate::{
    components::ResultsView,
    model::RowPresentation,
    session::measure::{CardSize, text_width, wrapped_line_count},
    theme::Theme,
};

const SEPARATOR: &str = " \u{00B7} ";

impl ResultsView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        rows: &[RowPresentation],
        sizes: &[CardSize],
        theme: &Theme,
    ) {
        if rows.is_empty() {
            let hint = Paragraph::new("Type a term and press Enter to search, / to search again")
                .style(Style::default().fg(theme.card_subtitle_fg))
                .centered();
            f.render_widget(hint, area);
            return;
        }

        self.scroll_to_highlighted(sizes, area.height);

        let mut y = area.y;
        for (idx, (row, size)) in rows.iter().zip(sizes).enumerate().skip(self.offset) {
            if y >= area.bottom() {
                break;
            }

            let height = size.height.min(area.bottom() - y);
            let card_area = Rect::new(area.x, y, area.width.saturating_sub(1), height);
            draw_card(f, card_area, row, self.highlighted == Some(idx), theme);
            y = y.saturating_add(size.height);
        }

        let mut scrollbar_state = ScrollbarState::new(rows.len()).position(self.offset());
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.border_colour)),
            area,
            &mut scrollbar_state,
        );
    }
}

fn draw_card(f: &mut Frame, area: Rect, row: &RowPresentation, highlighted: bool, theme: &Theme) {
    let border_colour = if highlighted {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = text_width(area.width);
    let name_lines = wrapped_line_count(&row.track_name, width);
    let description_lines = wrapped_line_count(&row.long_description, width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(name_lines),
            Constraint::Length(1),
            Constraint::Length(description_lines),
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Paragraph::new(row.track_name.as_str())
        .style(
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(title, chunks[0]);

    let subtitle = [row.artist_name.as_str(), row.collection_name.as_str(), row.duration.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    f.render_widget(
        Paragraph::new(subtitle).style(Style::default().fg(theme.card_subtitle_fg)),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(row.long_description.as_str())
            .style(Style::default().fg(theme.card_description_fg))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );

    let mut status = vec![Span::styled(
        row.play_indicator.label(),
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )];
    if highlighted {
        if let Some(artwork_url) = &row.artwork_url {
            if row.play_indicator.is_active() {
                status.push(Span::raw("  "));
            }
            status.push(Span::styled(
                artwork_url.as_str(),
                Style::default().fg(theme.card_subtitle_fg),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(status)), chunks[3]);
}

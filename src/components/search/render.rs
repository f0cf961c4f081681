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

//! Render the search input, the current text, the cursor and so on.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchInput, render::icons::SPINNER, theme::Theme};

impl SearchInput {
    pub(crate) fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        loading: Option<usize>,
        theme: &Theme,
    ) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .title(" Search ");

        if let Some(frame) = loading {
            let spinner = SPINNER[frame % SPINNER.len()];
            block = block.title(Line::from(format!(" {spinner} Searching ")).right_aligned());
        }

        let inner = block.inner(area);
        let width = usize::from(inner.width.max(1));
        let scroll = self.input.visual_scroll(width);

        f.render_widget(
            Paragraph::new(self.value())
                .style(Style::default().fg(theme.input_fg))
                .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
                .block(block),
            area,
        );

        if self.is_active {
            let cursor = self.input.visual_cursor().saturating_sub(scroll);
            let cursor_x = inner.x + u16::try_from(cursor).unwrap_or(inner.width);
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}

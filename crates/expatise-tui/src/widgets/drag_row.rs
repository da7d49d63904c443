//! Horizontally draggable row of cards
//!
//! [`DragRowState`] is the [`ScrollSurface`] the momentum scroller drives.
//! [`DragRow`] draws the cards shifted by the current offset, including the
//! blank gap that shows while the row is stretched past an edge.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthChar;

use crate::scroll::ScrollSurface;

/// Lines a card occupies: top border, title, subtitle, bottom border
pub const CARD_HEIGHT: u16 = 4;

/// One block of content in the row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCard {
    pub title: String,
    pub subtitle: String,
}

impl RowCard {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Geometry and scroll offset of the row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragRowState {
    offset: f64,
    area: Rect,
    content_width: f64,
}

impl DragRowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the row was drawn and how wide its content is
    pub fn set_layout(&mut self, area: Rect, card_count: usize, card_width: u16, gap: u16) {
        self.area = area;
        self.content_width = content_width(card_count, card_width, gap);
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// The row has been laid out at least once
    pub fn is_attached(&self) -> bool {
        self.area.width > 0 && self.area.height > 0
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Offset rounded to whole columns for drawing
    pub fn column_offset(&self) -> i64 {
        self.offset.round() as i64
    }
}

impl ScrollSurface for DragRowState {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn scroll_width(&self) -> f64 {
        self.content_width
    }

    fn client_width(&self) -> f64 {
        self.area.width as f64
    }

    fn left_offset(&self) -> f64 {
        self.area.x as f64
    }
}

fn content_width(card_count: usize, card_width: u16, gap: u16) -> f64 {
    if card_count == 0 {
        return 0.0;
    }
    let n = card_count as f64;
    n * card_width as f64 + (n - 1.0) * gap as f64
}

/// Stateful widget drawing the cards
pub struct DragRow<'a> {
    cards: &'a [RowCard],
    card_width: u16,
    gap: u16,
    style: Style,
    title_style: Style,
    border_style: Style,
}

impl<'a> DragRow<'a> {
    pub fn new(cards: &'a [RowCard]) -> Self {
        Self {
            cards,
            card_width: 24,
            gap: 2,
            style: Style::default(),
            title_style: Style::default(),
            border_style: Style::default(),
        }
    }

    pub fn card_width(mut self, width: u16) -> Self {
        self.card_width = width.max(4);
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Base style for the whole row
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Card text lines, each exactly `card_width` columns wide
    fn card_lines(&self, card: &RowCard) -> [(String, Style); 4] {
        let inner = self.card_width.saturating_sub(2) as usize;
        let horizontal = "─".repeat(inner);
        [
            (format!("╭{}╮", horizontal), self.border_style),
            (format!("│{}│", fit(&card.title, inner)), self.title_style),
            (format!("│{}│", fit(&card.subtitle, inner)), self.style),
            (format!("╰{}╯", horizontal), self.border_style),
        ]
    }
}

impl StatefulWidget for DragRow<'_> {
    type State = DragRowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DragRowState) {
        state.set_layout(area, self.cards.len(), self.card_width, self.gap);
        buf.set_style(area, self.style);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let stride = self.card_width as i64 + self.gap as i64;
        let offset = state.column_offset();
        let viewport = area.width as i64;

        for (index, card) in self.cards.iter().enumerate() {
            let left = index as i64 * stride - offset;
            let right = left + self.card_width as i64;
            if right <= 0 || left >= viewport {
                continue;
            }

            let skip = (-left).max(0) as usize;
            let take = (right.min(viewport) - left.max(0)) as usize;
            let x = area.x + left.max(0) as u16;

            for (line_index, (text, style)) in self.card_lines(card).iter().enumerate() {
                let y = area.y + line_index as u16;
                if y >= area.bottom() {
                    break;
                }
                let visible = slice_columns(text, skip, take);
                buf.set_stringn(x, y, &visible, take, *style);
            }
        }
    }
}

/// Pad or truncate `text` to exactly `width` columns, with a leading space
fn fit(text: &str, width: usize) -> String {
    let mut out = String::from(" ");
    let mut used = 1;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    while used < width {
        out.push(' ');
        used += 1;
    }
    out
}

/// Columns `[skip, skip + take)` of `text`; wide chars cut by an edge become spaces
fn slice_columns(text: &str, skip: usize, take: usize) -> String {
    let mut out = String::new();
    let mut column = 0;
    let end = skip + take;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        let next = column + w;
        if next <= skip {
            column = next;
            continue;
        }
        if column >= end {
            break;
        }
        if column < skip || next > end {
            let visible = next.min(end) - column.max(skip);
            out.extend(std::iter::repeat(' ').take(visible));
        } else {
            out.push(ch);
        }
        column = next;
    }
    out
}

//! Word-wrapped text drawn straight into a ratatui buffer
//!
//! The host's [`TextRenderer`]: resolves the template through the string
//! table, wraps it to the requested pixel width and writes it without any
//! background, so whatever is beneath shows around the glyphs.

use ratatui::{buffer::Buffer, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::coords::{CellScale, ScreenCoords};
use crate::strings;
use crate::tooltip::{StringId, TextAlignment, TextRenderer, TooltipPayload};

pub struct BufferText<'a> {
    buf: &'a mut Buffer,
    scale: CellScale,
    style: Style,
}

impl<'a> BufferText<'a> {
    pub fn new(buf: &'a mut Buffer, scale: CellScale, style: Style) -> Self {
        Self { buf, scale, style }
    }

    fn put_line(&mut self, x: u16, y: u16, line: &str) {
        let area = self.buf.area;
        if y < area.top() || y >= area.bottom() || x >= area.right() {
            return;
        }
        let x = x.max(area.left());
        let max_width = usize::from(area.right() - x);
        self.buf.set_stringn(x, y, line, max_width, self.style);
    }
}

impl TextRenderer for BufferText<'_> {
    fn draw_text_wrapped(
        &mut self,
        anchor: ScreenCoords,
        width: i32,
        template: StringId,
        payload: &TooltipPayload,
        alignment: TextAlignment,
    ) {
        let text = strings::format_payload(template, payload);
        let (columns, _) = self.scale.span_to_cells(width, 0);
        let lines = wrap_text(&text, usize::from(columns.max(1)));

        let (anchor_col, anchor_row) = self.scale.px_to_cell(anchor);
        let top = anchor_row.saturating_sub((lines.len() / 2) as u16);

        for (i, line) in lines.iter().enumerate() {
            let line_width = line.width().min(usize::from(u16::MAX)) as u16;
            let x = match alignment {
                TextAlignment::Left => anchor_col,
                TextAlignment::Centre => anchor_col.saturating_sub(line_width / 2),
                TextAlignment::Right => anchor_col.saturating_sub(line_width),
            };
            self.put_line(x, top.saturating_add(i as u16), line);
        }
    }
}

/// Greedy word wrap on display width. Words wider than a line are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    if text.width() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        for piece in split_to_width(word, max_width) {
            if current_line.is_empty() {
                current_line = piece;
            } else if current_line.width() + 1 + piece.width() <= max_width {
                current_line.push(' ');
                current_line.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = piece;
            }
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

fn split_to_width(word: &str, max_width: usize) -> Vec<String> {
    if word.width() <= max_width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        let mut buf = [0u8; 4];
        let ch_width = ch.encode_utf8(&mut buf).width();
        if !piece.is_empty() && piece.width() + ch_width > max_width {
            pieces.push(std::mem::take(&mut piece));
        }
        piece.push(ch);
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
#[path = "wrapped_text_tests.rs"]
mod wrapped_text_tests;

// Copyright (c) 2026 rezky_nightky

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::cell::Cell;
use crate::frame::Frame;
use crate::sky::View;

/// Lays the styled text block out at the top-left corner of `frame`.
///
/// The block is as wide as its widest line plus horizontal padding on both
/// sides and is filled with the style background. Anything past the frame
/// edge is clipped.
pub fn layout(view: &View, frame: &mut Frame) {
    frame.clear();

    let style = view.style;
    let pad = style.padding;
    let lines: Vec<&str> = view.text.lines().collect();
    let content_w = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let block_w = content_w.saturating_add(2 * pad.horizontal as usize);
    let block_h = lines.len().saturating_add(2 * pad.vertical as usize);

    let fill = Cell {
        ch: ' ',
        fg: style.fg,
        bg: style.bg,
        width: 1,
    };
    for y in 0..block_h.min(frame.height as usize) {
        for x in 0..block_w.min(frame.width as usize) {
            frame.set(x as u16, y as u16, fill);
        }
    }

    for (row, line) in lines.iter().enumerate() {
        let y = row + pad.vertical as usize;
        if y >= frame.height as usize {
            break;
        }
        let mut x = pad.horizontal as usize;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if x + w > frame.width as usize {
                break;
            }
            frame.set(
                x as u16,
                y as u16,
                Cell {
                    ch,
                    fg: style.fg,
                    bg: style.bg,
                    width: w as u8,
                },
            );
            if w == 2 {
                frame.set(x as u16 + 1, y as u16, Cell::continuation(style.fg, style.bg));
            }
            x += w;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::style::Color;

    use super::*;
    use crate::palette::{Padding, Style};

    fn view(text: &str) -> View {
        View {
            text: text.to_string(),
            style: Style {
                fg: Some(Color::White),
                bg: Some(Color::Blue),
                padding: Padding {
                    vertical: 1,
                    horizontal: 2,
                },
            },
        }
    }

    #[test]
    fn block_is_padded_and_filled() {
        let mut f = Frame::new(10, 5, None);
        layout(&view("ab\nc\n"), &mut f);

        assert_eq!(f.row_text(0), "          ");
        assert_eq!(f.row_text(1), "  ab      ");
        assert_eq!(f.row_text(2), "  c       ");
        // block is 2 + 2 + 2 wide and 2 + 1 + 1 tall
        assert_eq!(f.get(5, 3).unwrap().bg, Some(Color::Blue));
        assert_eq!(f.get(6, 1).unwrap().bg, None);
        assert_eq!(f.get(0, 4).unwrap().bg, None);
    }

    #[test]
    fn wide_glyph_takes_two_cells() {
        let mut f = Frame::new(8, 3, None);
        layout(&view("🌸x"), &mut f);
        assert_eq!(f.get(2, 1).unwrap().ch, '🌸');
        assert_eq!(f.get(2, 1).unwrap().width, 2);
        assert!(f.get(3, 1).unwrap().is_continuation());
        assert_eq!(f.get(4, 1).unwrap().ch, 'x');
    }

    #[test]
    fn wide_glyph_at_edge_is_clipped() {
        let mut f = Frame::new(3, 3, None);
        layout(&view("🌊"), &mut f);
        assert!(f.row(1).iter().all(|c| c.ch == ' ' && !c.is_continuation()));
    }
}

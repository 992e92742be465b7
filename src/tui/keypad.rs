//! Screen layout for the display and the button grid, plus hit-testing.

use crate::kernel::{Button, KEYPAD, KEYPAD_COLUMNS};
use ratatui::layout::Rect;

/// Rows taken by the bordered display box.
pub const DISPLAY_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellArea {
    pub button: Button,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    pub area: Rect,
    pub display: Rect,
    pub cells: Vec<CellArea>,
}

impl KeypadLayout {
    pub fn compute(area: Rect) -> Self {
        let display_height = DISPLAY_HEIGHT.min(area.height);
        let display = Rect::new(area.x, area.y, area.width, display_height);

        let grid = Rect::new(
            area.x,
            area.y + display_height,
            area.width,
            area.height - display_height,
        );
        let rows = KEYPAD.len() as u16;
        let row_height = grid.height / rows;
        let col_width = grid.width / KEYPAD_COLUMNS;

        let mut cells = Vec::new();
        if row_height == 0 || col_width == 0 {
            return Self {
                area,
                display,
                cells,
            };
        }

        for (r, row) in KEYPAD.iter().enumerate() {
            let y = grid.y + r as u16 * row_height;
            let mut col = 0u16;
            for cell in row.iter() {
                let x = grid.x + col * col_width;
                cells.push(CellArea {
                    button: cell.button,
                    area: Rect::new(x, y, col_width * cell.span, row_height),
                });
                col += cell.span;
            }
        }

        Self {
            area,
            display,
            cells,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Button> {
        self.cells
            .iter()
            .find(|cell| rect_contains(cell.area, column, row))
            .map(|cell| cell.button)
    }

    pub fn cell_for(&self, button: Button) -> Option<Rect> {
        self.cells
            .iter()
            .find(|cell| cell.button == button)
            .map(|cell| cell.area)
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && u32::from(column) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

/// Keeps the trailing `width` characters so the newest digits stay visible.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/keypad.rs"]
mod tests;

use super::theme::CalcTheme;
use crate::kernel::CalculatorEngine;
use crate::tui::keypad::{visible_tail, KeypadLayout};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

pub fn render(
    frame: &mut Frame,
    layout: &KeypadLayout,
    engine: &CalculatorEngine,
    theme: &CalcTheme,
) {
    render_display(frame, layout.display, engine, theme);

    for cell in &layout.cells {
        let area = button_face(cell.area);
        let style = Style::default()
            .bg(theme.button_bg(cell.button.kind()))
            .fg(theme.label_fg)
            .add_modifier(Modifier::BOLD);

        let pad = area.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::default()).collect();
        lines.push(Line::from(cell.button.label()));

        frame.render_widget(
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .style(style),
            area,
        );
    }
}

fn render_display(frame: &mut Frame, area: Rect, engine: &CalculatorEngine, theme: &CalcTheme) {
    let mut block = Block::bordered();
    if let Some(op) = engine.pending_operator() {
        block = block.title(format!(" {} ", op.name()));
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let text = visible_tail(engine.display(), inner_width);

    frame.render_widget(
        Paragraph::new(text.to_string())
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .fg(theme.display_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block),
        area,
    );
}

/// Leaves a one-cell gutter on the right so neighbouring buttons stay apart.
fn button_face(area: Rect) -> Rect {
    if area.width > 2 {
        Rect::new(area.x, area.y, area.width - 1, area.height)
    } else {
        area
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;

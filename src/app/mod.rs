//! Application layer: wires terminal events to the calculator engine.

pub mod render;
pub mod theme;

use crate::kernel::{Button, CalculatorEngine};
use crate::services::Settings;
use crate::tui::{KeyAction, Keymap, KeypadLayout};
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

pub use theme::CalcTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// A button was pressed; the display may have changed.
    Pressed(Button),
    /// Layout-only change, redraw needed.
    Redraw,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, EventResult::Pressed(_) | EventResult::Redraw)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

pub struct App {
    engine: CalculatorEngine,
    keymap: Keymap,
    theme: CalcTheme,
    layout: KeypadLayout,
}

impl App {
    pub fn new(keymap: Keymap, theme: CalcTheme) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            keymap,
            theme,
            layout: KeypadLayout::compute(Rect::default()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Keymap::with_rules(&settings.keybindings),
            CalcTheme::from_settings(&settings.theme),
        )
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn theme(&self) -> &CalcTheme {
        &self.theme
    }

    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    pub fn resize(&mut self, area: Rect) {
        if self.layout.area != area {
            self.layout = KeypadLayout::compute(area);
        }
    }

    pub fn press(&mut self, button: Button) -> EventResult {
        self.engine.handle(button);
        EventResult::Pressed(button)
    }

    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => match self.keymap.resolve(key) {
                Some(KeyAction::Press(button)) => self.press(button),
                Some(KeyAction::Quit) => EventResult::Quit,
                None => EventResult::Ignored,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    match self.layout.hit_test(mouse.column, mouse.row) {
                        Some(button) => self.press(button),
                        None => EventResult::Ignored,
                    }
                }
                _ => EventResult::Ignored,
            },
            Event::Resize(..) => EventResult::Redraw,
            _ => EventResult::Ignored,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.resize(area);
        render::render(frame, &self.layout, &self.engine, &self.theme);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/app.rs"]
mod tests;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::io;
use std::time::Instant;

use super::app_state::App;
use crate::input::mouse_input::apply_mouse_event;

impl App {
    /// Wait for input until the next frame is due, then run the frame
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self.next_frame.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= self.next_frame {
            self.tick();
            self.next_frame = now + self.frame_interval;
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('e') => self.toggle_error_dialog(),
            KeyCode::Char('t') => self.toggle_bottom_toolbar(),
            KeyCode::Char('x') => self.close_all_windows(),
            _ => {}
        }
    }

    /// Pointer and modifier state only; the next frame reacts to it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        apply_mouse_event(&mut self.input, mouse, self.scale);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::app_state::{App, TOOLBAR_ROWS};
use crate::coords::ScreenSize;
use crate::map::map_render::render_map;
use crate::strings::{self, STR_ERROR_BODY, STR_ERROR_TITLE, STR_TOOLBAR_IDLE};
use crate::theme::{self, ThemeFlags};
use crate::tooltip::{STR_MAP_TOOLTIP_STRINGID, draw_tooltip};
use crate::widgets::popup;
use crate::widgets::wrapped_text::BufferText;
use crate::window::{Window, WindowClass, WindowFlags};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let area = frame.area();
        self.screen = ScreenSize::new(
            i32::from(area.width) * i32::from(self.scale.cell_width),
            i32::from(area.height) * i32::from(self.scale.cell_height),
        );

        let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
        let (status_area, body) = (layout[0], layout[1]);

        self.render_status_line(frame, status_area);

        let map_area = if self.theme.contains(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR) {
            let toolbar_area = popup::bottom_strip(body, TOOLBAR_ROWS);
            self.render_toolbar(frame, toolbar_area);
            self.layout_regions.bottom_toolbar = Some(toolbar_area);
            Rect {
                height: body.height - toolbar_area.height,
                ..body
            }
        } else {
            body
        };

        let map_rect = render_map(frame.buffer_mut(), map_area, &self.map);
        self.layout_regions.map = Some(map_rect);

        // Back to front, so sticky windows land on top
        let windows: Vec<Window> = self.windows.windows().cloned().collect();
        for window in &windows {
            match window.class {
                WindowClass::Error => self.render_error_dialog(frame, window),
                WindowClass::MapTooltip => self.render_tooltip(frame, window),
                // Laid out with the map above
                WindowClass::BottomToolbar => {}
            }
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status_warning {
            Some(warning) => Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(theme::status::WARNING),
            )),
            None => {
                let mut spans = Vec::new();
                for (key, action) in [("e", "error"), ("t", "toolbar"), ("x", "close all"), ("q", "quit")] {
                    spans.push(Span::styled(
                        format!(" {}", key),
                        Style::default().fg(theme::status::KEY),
                    ));
                    spans.push(Span::styled(
                        format!(" {} ", action),
                        Style::default().fg(theme::status::TEXT),
                    ));
                }
                Line::from(spans)
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_toolbar(&self, frame: &mut Frame, area: Rect) {
        let payload = self.tooltip.store.tooltip();
        let (text, color) = if payload.is_none() {
            (strings::format_string(STR_TOOLBAR_IDLE, &[]), theme::toolbar::HINT)
        } else {
            (
                strings::format_payload(STR_MAP_TOOLTIP_STRINGID, payload),
                theme::toolbar::TEXT,
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::toolbar::BORDER))
            .style(Style::default().bg(theme::toolbar::BACKGROUND));

        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(block),
            area,
        );
    }

    fn render_error_dialog(&mut self, frame: &mut Frame, window: &Window) {
        let area = self
            .scale
            .px_rect_to_cells(window.position, window.size, frame.area());
        if area.is_empty() {
            return;
        }

        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                format!(" {} ", strings::format_string(STR_ERROR_TITLE, &[])),
                theme::error_dialog::TITLE,
            ))
            .border_style(Style::default().fg(theme::error_dialog::BORDER))
            .style(Style::default().bg(theme::error_dialog::BACKGROUND));

        frame.render_widget(
            Paragraph::new(strings::format_string(STR_ERROR_BODY, &[]))
                .style(Style::default().fg(theme::error_dialog::TEXT))
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
        self.layout_regions.error_dialog = Some(area);
    }

    fn render_tooltip(&mut self, frame: &mut Frame, window: &Window) {
        let area = self
            .scale
            .px_rect_to_cells(window.position, window.size, frame.area());
        if area.is_empty() {
            return;
        }

        if !window.flags.contains(WindowFlags::TRANSPARENT) {
            popup::clear_area(frame, area);
        }
        if !window.flags.contains(WindowFlags::NO_BACKGROUND) {
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::tooltip::BORDER)),
                area,
            );
        }

        let mut text = BufferText::new(frame.buffer_mut(), self.scale, theme::tooltip::TEXT);
        if draw_tooltip(&self.tooltip.store, window, &mut text) {
            self.layout_regions.tooltip = Some(area);
        }
    }
}

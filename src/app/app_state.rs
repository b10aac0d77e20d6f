use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::coords::{CellScale, ScreenCoords, ScreenSize};
use crate::input::InputState;
use crate::layout::{LayoutRegions, Region, region_at};
use crate::map::{TileMap, map_hover};
use crate::theme::ThemeFlags;
use crate::tooltip::{TooltipContext, VisibilityChange};
use crate::widgets::popup;
use crate::window::{WindowClass, WindowFlags, WindowManager, WindowRegistry};

pub const MAP_WIDTH: u16 = 40;
pub const MAP_HEIGHT: u16 = 16;

/// Error dialog size in cells
pub const ERROR_DIALOG_COLUMNS: u16 = 36;
pub const ERROR_DIALOG_ROWS: u16 = 5;

/// Bottom toolbar height in cells
pub const TOOLBAR_ROWS: u16 = 3;

pub struct App {
    pub theme: ThemeFlags,
    pub scale: CellScale,
    pub input: InputState,
    pub tooltip: TooltipContext,
    pub windows: WindowManager,
    pub map: TileMap,
    pub layout_regions: LayoutRegions,
    /// Last drawn frame size in pixels
    pub screen: ScreenSize,
    pub status_warning: Option<String>,
    pub should_quit: bool,
    pub needs_render: bool,
    pub frame_interval: Duration,
    pub(super) next_frame: Instant,
    last_change: VisibilityChange,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let frame_interval = Duration::from_millis(config.demo.frame_ms.max(1));

        let mut app = Self {
            theme: ThemeFlags::empty(),
            scale: config.cell_scale(),
            input: InputState::new(),
            tooltip: TooltipContext::new(),
            windows: WindowManager::new(),
            map: TileMap::generate(MAP_WIDTH, MAP_HEIGHT),
            layout_regions: LayoutRegions::new(),
            screen: ScreenSize::new(0, 0),
            status_warning: None,
            should_quit: false,
            needs_render: true,
            frame_interval,
            next_frame: Instant::now(),
            last_change: VisibilityChange::Hidden,
        };

        if config.theme_flags().contains(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR) {
            app.toggle_bottom_toolbar();
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render || self.windows.any_needs_redraw()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
        self.windows.mark_all_drawn();
    }

    pub fn show_warning(&mut self, warning: &str) {
        self.status_warning = Some(warning.to_string());
        self.mark_dirty();
    }

    pub fn last_change(&self) -> VisibilityChange {
        self.last_change
    }

    /// One frame of the host: the map writes this frame's tooltip, then the
    /// tooltip controller decides whether the overlay is shown.
    pub fn tick(&mut self) -> VisibilityChange {
        let (column, row) = self.scale.px_to_cell(self.input.cursor);
        let map_area = match region_at(&self.layout_regions, column, row) {
            Some(Region::Map) => self.layout_regions.map,
            _ => None,
        };
        map_hover::update_map_tooltip(&mut self.tooltip.store, &self.map, map_area, column, row);

        let change = self
            .tooltip
            .update_visibility(self.theme, &self.input, &mut self.windows);

        if change.is_visible() != self.last_change.is_visible() {
            #[cfg(debug_assertions)]
            log::debug!("Tooltip {:?} -> {:?}", self.last_change, change);

            self.mark_dirty();
        }
        self.last_change = change;
        change
    }

    /// Open the error dialog, or close it when already open
    pub fn toggle_error_dialog(&mut self) {
        if self.windows.find_by_class(WindowClass::Error).is_some() {
            self.windows.close_by_class(WindowClass::Error);
        } else {
            let (columns, rows) = self
                .scale
                .px_to_cell(ScreenCoords::new(self.screen.width, self.screen.height));
            let cells = popup::centered_popup(
                Rect::new(0, 0, columns, rows),
                ERROR_DIALOG_COLUMNS,
                ERROR_DIALOG_ROWS,
            );
            let position = self.scale.cell_to_px(cells.x, cells.y);
            let size = ScreenSize::new(
                i32::from(cells.width) * i32::from(self.scale.cell_width),
                i32::from(cells.height) * i32::from(self.scale.cell_height),
            );
            self.windows
                .focus_or_create(WindowClass::Error, position, size, WindowFlags::empty());
        }
        self.mark_dirty();
    }

    /// Switch between the pointer overlay and the bottom toolbar
    pub fn toggle_bottom_toolbar(&mut self) {
        self.theme.toggle(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR);

        if self.theme.contains(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR) {
            let height = i32::from(TOOLBAR_ROWS) * i32::from(self.scale.cell_height);
            let position = ScreenCoords::new(0, (self.screen.height - height).max(0));
            self.windows.focus_or_create(
                WindowClass::BottomToolbar,
                position,
                ScreenSize::new(self.screen.width, height),
                WindowFlags::empty(),
            );
            // The controller stops touching the overlay in toolbar mode
            self.windows.close_by_class(WindowClass::MapTooltip);
        } else {
            self.windows.close_by_class(WindowClass::BottomToolbar);
        }

        #[cfg(debug_assertions)]
        log::debug!("Theme flags now {:?}", self.theme);

        self.mark_dirty();
    }

    /// Close every window, as the host does on a scene change
    pub fn close_all_windows(&mut self) {
        self.windows.close_all();
        self.theme.remove(ThemeFlags::USE_FULL_BOTTOM_TOOLBAR);
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

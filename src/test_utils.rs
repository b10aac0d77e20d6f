#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;

    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::Config;
    use crate::coords::{ScreenCoords, ScreenSize};
    use crate::tooltip::{FormatArg, PointerSample, StringId, TooltipPayload};
    use crate::window::{Window, WindowClass, WindowFlags, WindowManager, WindowRegistry};

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// Map area of an 80x24 terminal with the status line on row 0
    pub const TEST_MAP_AREA: Rect = Rect {
        x: 0,
        y: 1,
        width: 80,
        height: 16,
    };

    /// App with the pointer resting on cell (`column`, `row`) of a laid out
    /// map, hold counter at zero
    pub fn hovering_app(column: u16, row: u16) -> App {
        let mut app = test_app();
        app.layout_regions.map = Some(TEST_MAP_AREA);
        app.input.cursor = app.scale.cell_center_px(column, row);
        app.tooltip.pointer = PointerSample::with_hold(app.input.cursor, 0);
        app
    }

    /// A payload a map producer might write while hovering a tile
    pub fn tile_payload() -> TooltipPayload {
        TooltipPayload::new(StringId(1000))
            .with_arg(FormatArg::StringId(StringId(1100)))
            .with_arg(FormatArg::Int(4))
    }

    /// Window manager that records every registry call it receives
    #[derive(Debug, Default)]
    pub struct RecordingRegistry {
        pub inner: WindowManager,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingRegistry {
        pub fn new() -> Self {
            Self::default()
        }

        /// Recorded calls, one per line
        pub fn call_log(&self) -> String {
            self.calls.borrow().join("\n")
        }

        pub fn calls_for(&self, class: WindowClass) -> Vec<String> {
            let name = format!(" {:?}", class);
            self.calls
                .borrow()
                .iter()
                .filter(|c| c.ends_with(&name))
                .cloned()
                .collect()
        }

        pub fn clear_log(&mut self) {
            self.calls.borrow_mut().clear();
        }

        fn record(&self, call: &str, class: WindowClass) {
            self.calls.borrow_mut().push(format!("{} {:?}", call, class));
        }
    }

    impl WindowRegistry for RecordingRegistry {
        fn find_by_class(&self, class: WindowClass) -> Option<&Window> {
            self.record("find", class);
            self.inner.find_by_class(class)
        }

        fn focus_or_create(
            &mut self,
            class: WindowClass,
            position: ScreenCoords,
            size: ScreenSize,
            flags: WindowFlags,
        ) -> &mut Window {
            self.record("focus_or_create", class);
            self.inner.focus_or_create(class, position, size, flags)
        }

        fn invalidate_by_class(&mut self, class: WindowClass) {
            self.record("invalidate", class);
            self.inner.invalidate_by_class(class);
        }

        fn close_by_class(&mut self, class: WindowClass) {
            self.record("close", class);
            self.inner.close_by_class(class);
        }
    }
}

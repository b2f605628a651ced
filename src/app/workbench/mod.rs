//! Workbench: owns the store, routes input to kernel actions and renders the
//! views from the resulting state.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action as KernelAction, AppState, Effect, FocusTarget, SidebarState, Store};
use crate::models::FileTree;
use crate::tui::view::{EventResult, View};
use crate::views::{EditorPaneLayout, ExplorerView};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

mod input;
mod mouse;
mod render;
mod util;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const EDITOR_MIN_WIDTH: u16 = 10;
const SCROLL_STEP: isize = 3;

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    explorer: ExplorerView,
    quit_requested: bool,
    last_render_area: Option<Rect>,
    last_sidebar_area: Option<Rect>,
    last_editor_area: Option<Rect>,
    last_editor_layout: Option<EditorPaneLayout>,
    last_context_menu_area: Option<Rect>,
}

impl Workbench {
    pub fn new(settings: &Settings) -> Self {
        let sidebar = SidebarState::from_settings(&settings.sidebar);
        let state = AppState::new(FileTree::seeded(), sidebar);

        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&settings.keybindings);

        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);

        Self::with_parts(Store::new(state), keybindings, theme)
    }

    pub fn with_parts(store: Store, keybindings: KeybindingService, theme: UiTheme) -> Self {
        Self {
            store,
            keybindings,
            theme,
            explorer: ExplorerView::new(),
            quit_requested: false,
            last_render_area: None,
            last_sidebar_area: None,
            last_editor_area: None,
            last_editor_layout: None,
            last_context_menu_area: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn theme_mut(&mut self) -> &mut UiTheme {
        &mut self.theme
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn sidebar_visible(&self) -> bool {
        self.store.state().ui.sidebar.visible
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Expires timed notices. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.dispatch_kernel(KernelAction::Tick { now })
    }

    /// Ends pointer sessions before the terminal is restored.
    pub fn teardown(&mut self) {
        let _ = self.dispatch_kernel(KernelAction::Teardown);
    }

    pub(crate) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            match effect {
                Effect::Quit => {
                    tracing::info!("quit requested");
                    self.quit_requested = true;
                }
            }
        }
        result.state_changed
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        let result = input::handle_input(self, event);
        if self.quit_requested {
            return EventResult::Quit;
        }
        result
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;

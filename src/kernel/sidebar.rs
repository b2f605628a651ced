//! Sidebar visibility and width, including the mouse-driven resize session.

use super::services::ports::settings::SidebarSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    /// Screen column of the sidebar's left edge when the drag began.
    pub left: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub visible: bool,
    width: u16,
    min_width: u16,
    max_width: u16,
    resize: Option<ResizeSession>,
}

impl SidebarState {
    pub const NUDGE: u16 = 2;

    pub fn new(width: u16, min_width: u16, max_width: u16) -> Self {
        let min_width = min_width.max(1);
        let max_width = max_width.max(min_width);
        Self {
            visible: true,
            width: width.clamp(min_width, max_width),
            min_width,
            max_width,
            resize: None,
        }
    }

    pub fn from_settings(settings: &SidebarSettings) -> Self {
        Self::new(settings.width, settings.min_width, settings.max_width)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn bounds(&self) -> (u16, u16) {
        (self.min_width, self.max_width)
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn set_width(&mut self, width: u16) -> bool {
        let width = width.clamp(self.min_width, self.max_width);
        if width == self.width {
            return false;
        }
        self.width = width;
        true
    }

    pub fn nudge(&mut self, delta: i32) -> bool {
        let width = (i32::from(self.width) + delta).clamp(0, i32::from(u16::MAX));
        self.set_width(width as u16)
    }

    pub fn begin_resize(&mut self, left: u16) -> bool {
        if !self.visible || self.resize.is_some() {
            return false;
        }
        self.resize = Some(ResizeSession { left });
        tracing::debug!(left, width = self.width, "sidebar resize started");
        true
    }

    /// Moves outside a session are ignored.
    pub fn resize_to(&mut self, column: u16) -> bool {
        let Some(session) = self.resize else {
            return false;
        };
        let width = column.saturating_sub(session.left).saturating_add(1);
        self.set_width(width)
    }

    pub fn end_resize(&mut self) -> bool {
        if self.resize.take().is_none() {
            return false;
        }
        tracing::debug!(width = self.width, "sidebar resize finished");
        true
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        if !self.visible {
            self.resize = None;
        }
        true
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::from_settings(&SidebarSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/sidebar.rs"]
mod tests;

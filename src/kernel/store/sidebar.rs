use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_sidebar_action(&mut self, action: Action) -> super::DispatchResult {
        let sidebar = &mut self.state.ui.sidebar;
        let state_changed = match action {
            Action::SidebarResizeStart { left } => sidebar.begin_resize(left),
            Action::SidebarResizeMove { column } => sidebar.resize_to(column),
            Action::SidebarResizeEnd => sidebar.end_resize(),
            _ => false,
        };
        super::DispatchResult::changed(state_changed)
    }
}

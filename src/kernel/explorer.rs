//! View-local state for the explorer outline: expand set, cursor and scroll.

use compact_str::CompactString;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{Node, NodeId, ParentRef, Snapshot};

/// Identity of an outline row. The root is a row but not a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowId {
    Root,
    Node(NodeId),
}

impl RowId {
    pub fn node(self) -> Option<NodeId> {
        match self {
            RowId::Root => None,
            RowId::Node(id) => Some(id),
        }
    }
}

impl From<ParentRef> for RowId {
    fn from(parent: ParentRef) -> Self {
        match parent {
            ParentRef::Root => RowId::Root,
            ParentRef::Folder(id) => RowId::Node(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: RowId,
    pub depth: u16,
    pub name: CompactString,
    pub is_folder: bool,
    pub is_expanded: bool,
}

/// Outcome of activating a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    None,
    Toggled,
    OpenFile(NodeId),
}

pub struct ExplorerState {
    expanded: FxHashSet<RowId>,
    selected: Option<RowId>,
    pub view_height: usize,
    pub scroll_offset: usize,
    pub rows: Vec<TreeRow>,
    index_by_id: FxHashMap<RowId, usize>,
}

impl std::fmt::Debug for ExplorerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerState")
            .field("scroll_offset", &self.scroll_offset)
            .field("rows_len", &self.rows.len())
            .field("selected", &self.selected)
            .field("expanded", &self.expanded.len())
            .finish()
    }
}

impl ExplorerState {
    pub fn new(snapshot: &Snapshot) -> Self {
        let mut state = Self {
            expanded: FxHashSet::default(),
            selected: Some(RowId::Root),
            view_height: 10,
            scroll_offset: 0,
            rows: Vec::new(),
            index_by_id: FxHashMap::default(),
        };
        state.refresh(snapshot);
        state
    }

    pub fn selected(&self) -> Option<RowId> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        let id = self.selected?;
        let index = self.index_by_id.get(&id).copied()?;
        self.rows.get(index)
    }

    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn is_expanded(&self, id: RowId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        match self.selected.and_then(|id| self.index_of(id)) {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }

        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let Some(current_index) = self.selected.and_then(|id| self.index_of(id)) else {
            let new_index = if delta < 0 { self.rows.len() - 1 } else { 0 };
            self.selected = Some(self.rows[new_index].id);
            self.keep_row_visible(new_index);
            return true;
        };

        let new_index = if delta < 0 {
            current_index.saturating_sub(delta.unsigned_abs())
        } else {
            (current_index + delta as usize).min(self.rows.len() - 1)
        };

        if new_index == current_index {
            return false;
        }

        self.selected = Some(self.rows[new_index].id);
        self.keep_row_visible(new_index);
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }

        self.scroll_offset != prev
    }

    pub fn select_row(&mut self, row: usize) -> bool {
        let Some(id) = self.rows.get(row).map(|r| r.id) else {
            return false;
        };
        self.select(id)
    }

    pub fn select(&mut self, id: RowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let prev = self.selected;
        self.selected = Some(id);
        self.keep_row_visible(index);
        prev != Some(id)
    }

    pub fn activate_selected(&mut self, snapshot: &Snapshot) -> (bool, Activation) {
        let Some(id) = self.selected else {
            return (false, Activation::None);
        };
        self.activate(id, snapshot)
    }

    /// Single click selects the row and activates it.
    pub fn click_row(&mut self, row: usize, snapshot: &Snapshot) -> (bool, Activation) {
        let Some(id) = self.rows.get(row).map(|r| r.id) else {
            return (false, Activation::None);
        };
        let selection_changed = self.select(id);
        let (changed, activation) = self.activate(id, snapshot);
        (selection_changed || changed, activation)
    }

    pub fn collapse_selected(&mut self, snapshot: &Snapshot) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        if self.expanded.remove(&id) {
            self.refresh(snapshot);
            return true;
        }
        false
    }

    pub fn expand(&mut self, id: RowId, snapshot: &Snapshot) -> bool {
        if !self.expanded.insert(id) {
            return false;
        }
        self.refresh(snapshot);
        true
    }

    /// Expands every ancestor of `id` so its row is shown.
    pub fn reveal(&mut self, id: NodeId, snapshot: &Snapshot) -> bool {
        let mut changed = false;
        let mut current = snapshot.parent_of(id);
        while let Some(parent) = current {
            changed |= self.expanded.insert(RowId::from(parent));
            current = match parent {
                ParentRef::Root => None,
                ParentRef::Folder(folder) => snapshot.parent_of(folder),
            };
        }
        if changed {
            self.refresh(snapshot);
        }
        changed
    }

    /// Folder that receives a new node: the selected folder or root, else the
    /// selected file's parent.
    pub fn selected_create_parent(&self, snapshot: &Snapshot) -> ParentRef {
        match self.selected {
            None | Some(RowId::Root) => ParentRef::Root,
            Some(RowId::Node(id)) => match snapshot.find(id) {
                Some(node) if node.is_folder() => ParentRef::Folder(id),
                Some(_) => snapshot.parent_of(id).unwrap_or(ParentRef::Root),
                None => ParentRef::Root,
            },
        }
    }

    /// Rebuilds rows from `snapshot`, pruning expand and selection state for
    /// ids that no longer exist. A removed selection falls back to `fallback`.
    pub fn sync(&mut self, snapshot: &Snapshot, fallback: Option<ParentRef>) {
        self.expanded.retain(|id| match id {
            RowId::Root => true,
            RowId::Node(id) => snapshot.contains(*id),
        });

        if let Some(RowId::Node(id)) = self.selected {
            if !snapshot.contains(id) {
                self.selected = Some(fallback.map(RowId::from).unwrap_or(RowId::Root));
            }
        }

        self.refresh(snapshot);

        if let Some(index) = self.selected.and_then(|id| self.index_of(id)) {
            self.keep_row_visible(index);
        }
    }

    fn activate(&mut self, id: RowId, snapshot: &Snapshot) -> (bool, Activation) {
        let is_folder = match id {
            RowId::Root => true,
            RowId::Node(node) => match snapshot.find(node) {
                Some(n) => n.is_folder(),
                None => return (false, Activation::None),
            },
        };

        if !is_folder {
            return match id.node() {
                Some(node) => (false, Activation::OpenFile(node)),
                None => (false, Activation::None),
            };
        }

        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.refresh(snapshot);
        (true, Activation::Toggled)
    }

    fn refresh(&mut self, snapshot: &Snapshot) {
        self.rows = self.flatten(snapshot);

        self.index_by_id.clear();
        self.index_by_id.reserve(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            self.index_by_id.insert(row.id, i);
        }

        if self.selected.is_some_and(|id| !self.index_by_id.contains_key(&id)) {
            self.selected = self.nearest_visible_ancestor(snapshot);
        }

        self.clamp_scroll();
    }

    fn flatten(&self, snapshot: &Snapshot) -> Vec<TreeRow> {
        let root_expanded = self.is_expanded(RowId::Root);
        let mut rows = vec![TreeRow {
            id: RowId::Root,
            depth: 0,
            name: CompactString::from(snapshot.root_name()),
            is_folder: true,
            is_expanded: root_expanded,
        }];
        if !root_expanded {
            return rows;
        }

        let mut stack: Vec<(&Node, u16)> = snapshot
            .children()
            .iter()
            .rev()
            .map(|n| (n.as_ref(), 1))
            .collect();

        while let Some((node, depth)) = stack.pop() {
            let id = RowId::Node(node.id());
            let is_expanded = node.is_folder() && self.is_expanded(id);
            rows.push(TreeRow {
                id,
                depth,
                name: CompactString::from(node.name()),
                is_folder: node.is_folder(),
                is_expanded,
            });
            if is_expanded {
                stack.extend(node.children().iter().rev().map(|c| (c.as_ref(), depth + 1)));
            }
        }

        rows
    }

    /// Selection hidden by a collapse moves up to the closest shown ancestor.
    fn nearest_visible_ancestor(&self, snapshot: &Snapshot) -> Option<RowId> {
        let mut current = self.selected?;
        loop {
            if self.index_by_id.contains_key(&current) {
                return Some(current);
            }
            current = match current {
                RowId::Root => return Some(RowId::Root),
                RowId::Node(id) => snapshot
                    .parent_of(id)
                    .map(RowId::from)
                    .unwrap_or(RowId::Root),
            };
        }
    }

    fn clamp_scroll(&mut self) {
        let view_height = self.view_height.max(1);
        let max_scroll = self.rows.len().saturating_sub(view_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explorer.rs"]
mod tests;

//! In-memory file tree with persistent snapshots.
//!
//! Every mutation rebuilds only the path from the root to the touched node and
//! shares the untouched subtrees through `Arc`, so a `Snapshot` handed out
//! earlier never observes later edits.

use compact_str::CompactString;
use std::fmt;
use std::sync::Arc;

pub const ROOT_NAME: &str = "Project Files";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        }
    }
}

/// Container a node lives in. The root has no `NodeId` of its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParentRef {
    Root,
    Folder(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    DuplicateName { name: CompactString, kind: NodeKind },
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::DuplicateName { name, kind } => write!(
                f,
                "A {} with the name \"{}\" already exists at this level.",
                kind.label(),
                name
            ),
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: CompactString,
    kind: NodeKind,
    children: Vec<Arc<Node>>,
}

impl Node {
    fn new(id: NodeId, name: CompactString, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            kind,
            children: Vec::new(),
        }
    }

    fn with_children(&self, children: Vec<Arc<Node>>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            children,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn children(&self) -> &[Arc<Node>] {
        &self.children
    }
}

#[derive(Debug)]
struct RootFolder {
    name: CompactString,
    children: Vec<Arc<Node>>,
}

/// Immutable view of the tree at one point in time. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: Arc<RootFolder>,
    version: u64,
}

impl Snapshot {
    fn new(name: CompactString, children: Vec<Arc<Node>>) -> Self {
        Self {
            root: Arc::new(RootFolder { name, children }),
            version: 0,
        }
    }

    fn successor(&self, children: Vec<Arc<Node>>) -> Self {
        Self {
            root: Arc::new(RootFolder {
                name: self.root.name.clone(),
                children,
            }),
            version: self.version + 1,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// Top-level children of the root folder.
    pub fn children(&self) -> &[Arc<Node>] {
        &self.root.children
    }

    pub fn same_as(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    pub fn find(&self, id: NodeId) -> Option<&Arc<Node>> {
        find_in(&self.root.children, id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    pub fn lookup_children(&self, parent: ParentRef) -> Option<&[Arc<Node>]> {
        match parent {
            ParentRef::Root => Some(&self.root.children),
            ParentRef::Folder(id) => self
                .find(id)
                .filter(|node| node.is_folder())
                .map(|node| node.children()),
        }
    }

    pub fn parent_of(&self, id: NodeId) -> Option<ParentRef> {
        parent_in(&self.root.children, ParentRef::Root, id)
    }

    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Arc<Node>]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.root.children)
    }

    pub fn has_sibling_named(&self, parent: ParentRef, name: &str) -> bool {
        self.lookup_children(parent)
            .is_some_and(|siblings| siblings.iter().any(|s| names_collide(&s.name, name)))
    }
}

fn find_in(nodes: &[Arc<Node>], id: NodeId) -> Option<&Arc<Node>> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn parent_in(nodes: &[Arc<Node>], parent: ParentRef, id: NodeId) -> Option<ParentRef> {
    for node in nodes {
        if node.id == id {
            return Some(parent);
        }
        if let Some(found) = parent_in(&node.children, ParentRef::Folder(node.id), id) {
            return Some(found);
        }
    }
    None
}

pub fn names_collide(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

enum Edit {
    Replace(Node),
    Remove,
}

/// Pre-order search for `target`; on a hit, copies the path back up to `nodes`.
/// `edit` returning `None` counts as a miss.
fn rebuild(
    nodes: &[Arc<Node>],
    target: NodeId,
    edit: &mut dyn FnMut(&Node) -> Option<Edit>,
) -> Option<Vec<Arc<Node>>> {
    for (i, node) in nodes.iter().enumerate() {
        if node.id == target {
            let edit = edit(node)?;
            let mut out = nodes.to_vec();
            match edit {
                Edit::Replace(next) => out[i] = Arc::new(next),
                Edit::Remove => {
                    out.remove(i);
                }
            }
            return Some(out);
        }

        if let Some(children) = rebuild(&node.children, target, edit) {
            let mut out = nodes.to_vec();
            out[i] = Arc::new(node.with_children(children));
            return Some(out);
        }
    }
    None
}

#[derive(Debug, Clone)]
pub struct Created {
    pub snapshot: Snapshot,
    /// `None` when the parent did not resolve to a folder and nothing was inserted.
    pub id: Option<NodeId>,
}

pub struct FileTree {
    current: Snapshot,
    next_id: u64,
}

impl FileTree {
    pub fn new(root_name: impl Into<CompactString>) -> Self {
        Self {
            current: Snapshot::new(root_name.into(), Vec::new()),
            next_id: 1,
        }
    }

    /// The fixed tree every session starts from.
    pub fn seeded() -> Self {
        fn file(id: u64, name: &str) -> Arc<Node> {
            Arc::new(Node::new(NodeId(id), name.into(), NodeKind::File))
        }
        fn folder(id: u64, name: &str, children: Vec<Arc<Node>>) -> Arc<Node> {
            Arc::new(Node::new(NodeId(id), name.into(), NodeKind::Folder).with_children(children))
        }

        let children = vec![
            folder(
                1,
                "public",
                vec![file(2, "index.html"), file(3, "styles.css")],
            ),
            folder(
                4,
                "src",
                vec![
                    file(5, "App.js"),
                    file(6, "index.js"),
                    folder(7, "components", Vec::new()),
                ],
            ),
        ];

        Self {
            current: Snapshot::new(ROOT_NAME.into(), children),
            next_id: 8,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn lookup_children(&self, parent: ParentRef) -> Option<&[Arc<Node>]> {
        self.current.lookup_children(parent)
    }

    pub fn rename(&mut self, id: NodeId, new_name: impl Into<CompactString>) -> Snapshot {
        let new_name = new_name.into();
        let mut edit = |node: &Node| {
            let mut next = node.with_children(node.children.clone());
            next.name = new_name.clone();
            Some(Edit::Replace(next))
        };

        match rebuild(self.current.children(), id, &mut edit) {
            Some(children) => {
                self.current = self.current.successor(children);
                tracing::info!(node = %id, name = %new_name, "renamed node");
            }
            None => tracing::debug!(node = %id, "rename target not found"),
        }
        self.current.clone()
    }

    pub fn remove(&mut self, id: NodeId) -> Snapshot {
        let mut edit = |_: &Node| Some(Edit::Remove);

        match rebuild(self.current.children(), id, &mut edit) {
            Some(children) => {
                self.current = self.current.successor(children);
                tracing::info!(node = %id, "removed node");
            }
            None => tracing::debug!(node = %id, "remove target not found"),
        }
        self.current.clone()
    }

    pub fn create(
        &mut self,
        parent: ParentRef,
        name: impl Into<CompactString>,
        kind: NodeKind,
    ) -> Result<Created, FileTreeError> {
        let name = name.into();
        if self.current.has_sibling_named(parent, &name) {
            tracing::warn!(?parent, name = %name, "duplicate name rejected");
            return Err(FileTreeError::DuplicateName { name, kind });
        }

        let id = NodeId(self.next_id);
        let node = Arc::new(Node::new(id, name, kind));

        let children = match parent {
            ParentRef::Root => {
                let mut out = self.current.children().to_vec();
                out.push(node);
                Some(out)
            }
            ParentRef::Folder(parent_id) => {
                let mut edit = |target: &Node| {
                    if !target.is_folder() {
                        return None;
                    }
                    let mut children = target.children.clone();
                    children.push(node.clone());
                    Some(Edit::Replace(target.with_children(children)))
                };
                rebuild(self.current.children(), parent_id, &mut edit)
            }
        };

        let Some(children) = children else {
            tracing::debug!(?parent, "create parent is not a folder");
            return Ok(Created {
                snapshot: self.current.clone(),
                id: None,
            });
        };

        self.next_id += 1;
        self.current = self.current.successor(children);
        tracing::info!(?parent, node = %id, kind = kind.label(), "created node");
        Ok(Created {
            snapshot: self.current.clone(),
            id: Some(id),
        })
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;

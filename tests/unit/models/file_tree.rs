use super::*;

fn names(nodes: &[Arc<Node>]) -> Vec<&str> {
    nodes.iter().map(|n| n.name()).collect()
}

fn all_ids(snapshot: &Snapshot) -> Vec<NodeId> {
    fn walk(nodes: &[Arc<Node>], out: &mut Vec<NodeId>) {
        for node in nodes {
            out.push(node.id());
            walk(node.children(), out);
        }
    }
    let mut out = Vec::new();
    walk(snapshot.children(), &mut out);
    out
}

const PUBLIC: NodeId = NodeId::from_raw(1);
const SRC: NodeId = NodeId::from_raw(4);

#[test]
fn test_seeded_tree() {
    let tree = FileTree::seeded();
    let snap = tree.snapshot();

    assert_eq!(snap.root_name(), "Project Files");
    assert_eq!(names(snap.children()), vec!["public", "src"]);
    assert_eq!(snap.node_count(), 7);
    assert_eq!(
        names(tree.lookup_children(ParentRef::Folder(SRC)).unwrap()),
        vec!["App.js", "index.js", "components"]
    );
    assert!(snap.find(NodeId::from_raw(7)).unwrap().is_folder());
    assert!(snap.find(NodeId::from_raw(7)).unwrap().children().is_empty());
}

#[test]
fn test_lookup_children() {
    let tree = FileTree::seeded();

    assert_eq!(tree.lookup_children(ParentRef::Root).unwrap().len(), 2);
    assert_eq!(
        names(tree.lookup_children(ParentRef::Folder(PUBLIC)).unwrap()),
        vec!["index.html", "styles.css"]
    );
    // files and unknown ids are not folders
    assert!(tree
        .lookup_children(ParentRef::Folder(NodeId::from_raw(2)))
        .is_none());
    assert!(tree
        .lookup_children(ParentRef::Folder(NodeId::from_raw(99)))
        .is_none());
}

#[test]
fn test_create_appends_and_rejects_duplicate() {
    let mut tree = FileTree::seeded();

    let created = tree
        .create(ParentRef::Folder(PUBLIC), "favicon.ico", NodeKind::File)
        .unwrap();
    let id = created.id.unwrap();
    assert_eq!(
        names(created.snapshot.lookup_children(ParentRef::Folder(PUBLIC)).unwrap()),
        vec!["index.html", "styles.css", "favicon.ico"]
    );
    assert_eq!(created.snapshot.parent_of(id), Some(ParentRef::Folder(PUBLIC)));

    let before = tree.snapshot().clone();
    let err = tree
        .create(ParentRef::Folder(PUBLIC), "Index.html", NodeKind::File)
        .unwrap_err();
    assert_eq!(
        err,
        FileTreeError::DuplicateName {
            name: "Index.html".into(),
            kind: NodeKind::File,
        }
    );
    assert_eq!(
        err.to_string(),
        "A file with the name \"Index.html\" already exists at this level."
    );
    assert!(tree.snapshot().same_as(&before));
    assert_eq!(tree.snapshot().node_count(), 8);
}

#[test]
fn test_duplicate_folder_message() {
    let mut tree = FileTree::seeded();
    let err = tree
        .create(ParentRef::Root, "SRC", NodeKind::Folder)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "A folder with the name \"SRC\" already exists at this level."
    );
}

#[test]
fn test_same_name_allowed_under_different_parents() {
    let mut tree = FileTree::seeded();
    let created = tree
        .create(ParentRef::Folder(SRC), "index.html", NodeKind::File)
        .unwrap();
    assert!(created.id.is_some());
}

#[test]
fn test_create_under_root() {
    let mut tree = FileTree::seeded();
    let created = tree
        .create(ParentRef::Root, "README.md", NodeKind::File)
        .unwrap();
    assert_eq!(
        names(created.snapshot.children()),
        vec!["public", "src", "README.md"]
    );
    assert_eq!(
        created.snapshot.parent_of(created.id.unwrap()),
        Some(ParentRef::Root)
    );
}

#[test]
fn test_create_under_missing_or_file_parent_is_noop() {
    let mut tree = FileTree::seeded();
    let before = tree.snapshot().clone();

    let created = tree
        .create(ParentRef::Folder(NodeId::from_raw(42)), "x", NodeKind::File)
        .unwrap();
    assert!(created.id.is_none());
    assert!(created.snapshot.same_as(&before));

    let created = tree
        .create(ParentRef::Folder(NodeId::from_raw(2)), "x", NodeKind::File)
        .unwrap();
    assert!(created.id.is_none());
    assert_eq!(created.snapshot.version(), before.version());
}

#[test]
fn test_created_folder_accepts_children() {
    let mut tree = FileTree::seeded();
    let folder = tree
        .create(ParentRef::Folder(NodeId::from_raw(7)), "ui", NodeKind::Folder)
        .unwrap()
        .id
        .unwrap();
    let file = tree
        .create(ParentRef::Folder(folder), "Button.js", NodeKind::File)
        .unwrap()
        .id
        .unwrap();

    assert_eq!(tree.snapshot().parent_of(file), Some(ParentRef::Folder(folder)));
    assert_eq!(
        tree.snapshot().parent_of(folder),
        Some(ParentRef::Folder(NodeId::from_raw(7)))
    );
}

#[test]
fn test_rename_changes_only_name() {
    let mut tree = FileTree::seeded();
    let snap = tree.rename(SRC, "source");

    let node = snap.find(SRC).unwrap();
    assert_eq!(node.name(), "source");
    assert!(node.is_folder());
    assert_eq!(names(node.children()), vec!["App.js", "index.js", "components"]);
    assert_eq!(names(snap.children()), vec!["public", "source"]);
}

#[test]
fn test_rename_missing_is_noop() {
    let mut tree = FileTree::seeded();
    let before = tree.snapshot().clone();
    let after = tree.rename(NodeId::from_raw(100), "nope");
    assert!(after.same_as(&before));
    assert_eq!(after.version(), before.version());
}

#[test]
fn test_rename_does_not_check_duplicates() {
    let mut tree = FileTree::seeded();
    let snap = tree.rename(NodeId::from_raw(3), "INDEX.HTML");
    assert_eq!(
        names(snap.lookup_children(ParentRef::Folder(PUBLIC)).unwrap()),
        vec!["index.html", "INDEX.HTML"]
    );
}

#[test]
fn test_remove_folder_cascades() {
    let mut tree = FileTree::seeded();
    let snap = tree.remove(SRC);

    assert_eq!(names(snap.children()), vec!["public"]);
    for raw in 4..=7 {
        assert!(!snap.contains(NodeId::from_raw(raw)));
    }
    assert_eq!(snap.node_count(), 3);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut tree = FileTree::seeded();
    let before = tree.snapshot().clone();
    assert!(tree.remove(NodeId::from_raw(77)).same_as(&before));
}

#[test]
fn test_old_snapshots_stay_stable() {
    let mut tree = FileTree::seeded();
    let first = tree.snapshot().clone();

    tree.create(ParentRef::Folder(PUBLIC), "robots.txt", NodeKind::File)
        .unwrap();
    tree.rename(NodeId::from_raw(2), "home.html");
    tree.remove(SRC);

    assert_eq!(first.node_count(), 7);
    assert_eq!(first.find(NodeId::from_raw(2)).unwrap().name(), "index.html");
    assert!(first.contains(SRC));
    assert_eq!(tree.snapshot().version(), first.version() + 3);
}

#[test]
fn test_untouched_subtrees_are_shared() {
    let mut tree = FileTree::seeded();
    let before = tree.snapshot().clone();
    let after = tree.rename(NodeId::from_raw(2), "home.html");

    let src_before = before.find(SRC).unwrap();
    let src_after = after.find(SRC).unwrap();
    assert!(Arc::ptr_eq(src_before, src_after));

    let public_before = before.find(PUBLIC).unwrap();
    let public_after = after.find(PUBLIC).unwrap();
    assert!(!Arc::ptr_eq(public_before, public_after));
}

#[test]
fn test_ids_are_never_reused() {
    let mut tree = FileTree::seeded();
    let a = tree
        .create(ParentRef::Root, "a", NodeKind::File)
        .unwrap()
        .id
        .unwrap();
    tree.remove(a);
    let b = tree
        .create(ParentRef::Root, "a", NodeKind::File)
        .unwrap()
        .id
        .unwrap();

    assert_ne!(a, b);
    assert!(b > a);
    let ids = all_ids(tree.snapshot());
    let mut dedup = ids.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(ids.len(), dedup.len());
}

#[test]
fn test_names_collide_is_case_insensitive() {
    assert!(names_collide("App.js", "app.JS"));
    assert!(names_collide("Ärger", "ärger"));
    assert!(!names_collide("App.js", "App.jsx"));
}

#[test]
fn test_empty_tree() {
    let mut tree = FileTree::new("scratch");
    assert_eq!(tree.snapshot().root_name(), "scratch");
    assert_eq!(tree.snapshot().node_count(), 0);
    let id = tree
        .create(ParentRef::Root, "notes", NodeKind::Folder)
        .unwrap()
        .id
        .unwrap();
    assert_eq!(id, NodeId::from_raw(1));
}

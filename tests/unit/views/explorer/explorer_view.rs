use super::*;
use compact_str::CompactString;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn row(id: RowId, depth: u16, name: &str, is_folder: bool, is_expanded: bool) -> TreeRow {
    TreeRow {
        id,
        depth,
        name: CompactString::from(name),
        is_folder,
        is_expanded,
    }
}

fn draw_lines(view: &mut ExplorerView, ctx: &ExplorerPaintCtx<'_>, w: u16, h: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), ctx))
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|cells| cells.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

#[test]
fn display_name_truncates_after_25_chars() {
    assert_eq!(display_name("short.js"), "short.js");
    let exact = "a".repeat(25);
    assert_eq!(display_name(&exact), exact);
    let long = "abcdefghijklmnopqrstuvwxyz0123.js";
    assert_eq!(display_name(long), "abcdefghijklmnopqrstuvwxy...");
    assert_eq!(display_name(&"é".repeat(30)), format!("{}...", "é".repeat(25)));
}

#[test]
fn renders_icons_indent_and_open_marker() {
    let file = NodeId::from_raw(3);
    let rows = vec![
        row(RowId::Root, 0, "Project Files", true, true),
        row(RowId::Node(NodeId::from_raw(1)), 1, "src", true, false),
        row(RowId::Node(file), 1, "index.js", false, false),
    ];
    let theme = UiTheme::default();
    let ctx = ExplorerPaintCtx {
        rows: &rows,
        selected: Some(RowId::Root),
        open_node: Some(file),
        scroll_offset: 0,
        focused: true,
        theme: &theme,
    };

    let mut view = ExplorerView::new();
    let lines = draw_lines(&mut view, &ctx, 30, 4);

    assert!(lines[0].starts_with("▼ Project Files"));
    assert!(lines[1].starts_with("  ▶ src"));
    assert!(lines[2].starts_with("    index.js ● Open"));
    assert!(lines[3].trim().is_empty());
}

#[test]
fn hit_test_accounts_for_scroll_and_row_count() {
    let rows: Vec<TreeRow> = (0..10)
        .map(|i| row(RowId::Node(NodeId::from_raw(i)), 1, "f", false, false))
        .collect();
    let theme = UiTheme::default();
    let ctx = ExplorerPaintCtx {
        rows: &rows,
        selected: None,
        open_node: None,
        scroll_offset: 4,
        focused: false,
        theme: &theme,
    };

    let mut view = ExplorerView::new();
    assert_eq!(view.hit_test_row(0, 0, 0, rows.len()), None);

    let _ = draw_lines(&mut view, &ctx, 20, 5);
    assert_eq!(view.view_height(), Some(5));
    assert_eq!(view.hit_test_row(0, 0, 4, rows.len()), Some(4));
    assert_eq!(view.hit_test_row(3, 4, 4, rows.len()), Some(8));
    assert_eq!(view.hit_test_row(3, 4, 6, rows.len()), None);
    assert_eq!(view.hit_test_row(20, 0, 4, rows.len()), None);
}

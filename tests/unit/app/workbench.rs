use super::*;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::services::ports::KeybindingRule;
use crate::kernel::NoticeLevel;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn workbench() -> Workbench {
    Workbench::new(&Settings::default())
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> InputEvent {
    InputEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn press(workbench: &mut Workbench, events: &[InputEvent]) {
    for event in events {
        let _ = workbench.handle_input(event);
    }
}

fn type_chars(workbench: &mut Workbench, text: &str) {
    for ch in text.chars() {
        let _ = workbench.handle_input(&key(KeyCode::Char(ch)));
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn draw(workbench: &mut Workbench, terminal: &mut Terminal<TestBackend>) -> Vec<String> {
    terminal
        .draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|cells| cells.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

fn row_names(workbench: &Workbench) -> Vec<String> {
    workbench
        .state()
        .explorer
        .rows
        .iter()
        .map(|r| r.name.to_string())
        .collect()
}

#[test]
fn starts_with_collapsed_root_and_explorer_focus() {
    let workbench = workbench();
    assert_eq!(workbench.focus(), FocusTarget::Explorer);
    assert!(workbench.sidebar_visible());
    assert_eq!(row_names(&workbench), vec!["Project Files"]);
    assert!(workbench.state().editor.open.is_none());
}

#[test]
fn ctrl_b_toggles_sidebar() {
    let mut workbench = workbench();
    let result = workbench.handle_input(&ctrl('b'));
    assert!(result.is_consumed());
    assert!(!workbench.sidebar_visible());

    let _ = workbench.handle_input(&ctrl('b'));
    assert!(workbench.sidebar_visible());
}

#[test]
fn ctrl_q_quits() {
    let mut workbench = workbench();
    assert!(workbench.handle_input(&ctrl('q')).is_quit());
    assert!(workbench.quit_requested());
}

#[test]
fn keyboard_create_file_flow() {
    let mut workbench = workbench();
    press(&mut workbench, &[key(KeyCode::Enter), key(KeyCode::Char('n'))]);

    let dialog = &workbench.state().ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.title, "New File");

    // Empty names are rejected and the prompt stays open.
    press(&mut workbench, &[key(KeyCode::Enter)]);
    assert_eq!(
        workbench.state().ui.input_dialog.error.as_deref(),
        Some("You need to enter a file name!")
    );

    type_chars(&mut workbench, "notes.md");
    press(&mut workbench, &[key(KeyCode::Enter)]);

    assert!(!workbench.state().ui.input_dialog.visible);
    assert_eq!(
        row_names(&workbench),
        vec!["Project Files", "public", "src", "notes.md"]
    );
    let notice = workbench.state().ui.notice.current.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.text, "File \"notes.md\" has been created.");

    // The next key only dismisses the notice.
    press(&mut workbench, &[key(KeyCode::Char('n'))]);
    assert!(workbench.state().ui.notice.current.is_none());
    assert!(!workbench.state().ui.input_dialog.visible);
}

#[test]
fn open_edit_and_save_via_keyboard() {
    let mut workbench = workbench();
    press(
        &mut workbench,
        &[
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
        ],
    );

    let open = workbench.state().editor.open.as_ref().unwrap();
    assert_eq!(open.name, "App.js");
    assert!(!open.modified);
    assert_eq!(workbench.focus(), FocusTarget::Explorer);

    press(&mut workbench, &[key(KeyCode::Tab)]);
    assert_eq!(workbench.focus(), FocusTarget::Editor);

    type_chars(&mut workbench, "Nj");
    let open = workbench.state().editor.open.as_ref().unwrap();
    assert!(open.modified);
    assert!(open.buffer.text().starts_with("Nj// Content of App.js"));

    press(&mut workbench, &[ctrl('s')]);
    assert!(!workbench.state().editor.is_modified());
    let notice = workbench.state().ui.notice.current.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.text, "Save functionality is not developed yet.");

    press(&mut workbench, &[key(KeyCode::Esc), key(KeyCode::Esc)]);
    assert!(workbench.state().ui.notice.current.is_none());
    assert_eq!(workbench.focus(), FocusTarget::Explorer);
}

#[test]
fn close_modified_file_asks_for_confirmation() {
    let mut workbench = workbench();
    press(
        &mut workbench,
        &[
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Tab),
            key(KeyCode::Char('z')),
            ctrl('w'),
        ],
    );
    assert_eq!(
        workbench.state().editor.open.as_ref().map(|f| f.name.as_str()),
        Some("index.html")
    );
    let confirm = &workbench.state().ui.confirm_dialog;
    assert!(confirm.visible);
    assert_eq!(
        confirm.message,
        "You have unsaved changes. Are you sure you want to close this file?"
    );

    press(&mut workbench, &[key(KeyCode::Char('n'))]);
    assert!(workbench.state().editor.open.is_some());

    press(&mut workbench, &[ctrl('w'), key(KeyCode::Char('y'))]);
    assert!(workbench.state().editor.open.is_none());
    assert_eq!(workbench.focus(), FocusTarget::Explorer);
}

#[test]
fn delete_via_keyboard_confirm() {
    let mut workbench = workbench();
    press(
        &mut workbench,
        &[key(KeyCode::Enter), key(KeyCode::Down), key(KeyCode::Char('d'))],
    );
    assert_eq!(
        workbench.state().ui.confirm_dialog.message,
        "Do you want to delete \"public\"?"
    );

    press(&mut workbench, &[key(KeyCode::Enter)]);
    assert_eq!(row_names(&workbench), vec!["Project Files", "src"]);
    assert_eq!(
        workbench
            .state()
            .ui
            .notice
            .current
            .as_ref()
            .map(|n| n.text.as_str()),
        Some("\"public\" has been deleted.")
    );
}

#[test]
fn mouse_clicks_expand_and_open() {
    let mut workbench = workbench();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let _ = draw(&mut workbench, &mut terminal);

    // Header at row 0, sidebar border at row 1, first outline row at row 2.
    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
    assert_eq!(row_names(&workbench), vec!["Project Files", "public", "src"]);

    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 6));
    assert_eq!(
        workbench.state().editor.open.as_ref().map(|f| f.name.as_str()),
        Some("index.js")
    );

    let lines = draw(&mut workbench, &mut terminal);
    assert!(lines[6].contains("index.js ● Open"));
    assert!(lines[1].contains("index.js"));

    // Clicking into the text focuses the editor and moves the cursor.
    let layout = workbench.last_editor_layout.unwrap();
    let content = layout.content_area;
    let _ = workbench.handle_input(&mouse(
        MouseEventKind::Down(MouseButton::Left),
        content.x + 3,
        content.y + 1,
    ));
    assert_eq!(workbench.focus(), FocusTarget::Editor);
    let open = workbench.state().editor.open.as_ref().unwrap();
    assert_eq!(open.buffer.cursor(), (1, 3));
}

#[test]
fn sidebar_resize_with_mouse() {
    let mut workbench = workbench();
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let _ = draw(&mut workbench, &mut terminal);
    assert_eq!(workbench.state().ui.sidebar.width(), 32);

    // Moves without a session are ignored.
    let _ = workbench.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 50, 10));
    assert_eq!(workbench.state().ui.sidebar.width(), 32);

    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 31, 10));
    assert!(workbench.state().ui.sidebar.is_resizing());

    let _ = workbench.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 45, 10));
    assert_eq!(workbench.state().ui.sidebar.width(), 46);

    let _ = workbench.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 10));
    assert_eq!(workbench.state().ui.sidebar.width(), 24);

    let _ = workbench.handle_input(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 10));
    assert!(!workbench.state().ui.sidebar.is_resizing());

    let lines = draw(&mut workbench, &mut terminal);
    assert!(lines[1].starts_with("┌ Explorer"));
    assert_eq!(lines[1].chars().nth(23), Some('┐'));
}

#[test]
fn focus_loss_ends_resize_session() {
    let mut workbench = workbench();
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let _ = draw(&mut workbench, &mut terminal);

    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 31, 3));
    assert!(workbench.state().ui.sidebar.is_resizing());

    assert!(workbench.handle_input(&InputEvent::FocusLost).is_consumed());
    assert!(!workbench.state().ui.sidebar.is_resizing());

    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 31, 3));
    workbench.teardown();
    assert!(!workbench.state().ui.sidebar.is_resizing());
}

#[test]
fn alt_arrows_nudge_sidebar_width() {
    let mut workbench = workbench();
    let alt = |code| InputEvent::Key(KeyEvent::new(code, KeyModifiers::ALT));
    press(&mut workbench, &[alt(KeyCode::Right), alt(KeyCode::Right)]);
    assert_eq!(workbench.state().ui.sidebar.width(), 36);
    press(&mut workbench, &[alt(KeyCode::Left)]);
    assert_eq!(workbench.state().ui.sidebar.width(), 34);
}

#[test]
fn right_click_menu_runs_new_folder() {
    let mut workbench = workbench();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let _ = draw(&mut workbench, &mut terminal);

    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Right), 3, 2));
    let menu = &workbench.state().ui.explorer_context_menu;
    assert!(menu.visible);
    assert_eq!(menu.anchor, Some((3, 2)));
    assert_eq!(menu.items.len(), 2);

    let lines = draw(&mut workbench, &mut terminal);
    assert!(lines[3].contains("▸ New File"));
    assert!(lines[4].contains("  New Folder"));

    // Menu inner area starts one cell inside the anchor.
    let _ = workbench.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 6, 4));
    assert!(!workbench.state().ui.explorer_context_menu.visible);
    let dialog = &workbench.state().ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.title, "New Folder");

    type_chars(&mut workbench, "lib");
    press(&mut workbench, &[key(KeyCode::Enter)]);
    assert!(workbench
        .state()
        .tree
        .snapshot()
        .has_sibling_named(crate::models::ParentRef::Root, "lib"));
}

#[test]
fn context_menu_keyboard_navigation() {
    let mut workbench = workbench();
    press(
        &mut workbench,
        &[key(KeyCode::Enter), key(KeyCode::Down), key(KeyCode::Char('m'))],
    );
    let menu = &workbench.state().ui.explorer_context_menu;
    assert!(menu.visible);
    assert_eq!(menu.items.len(), 4);

    press(&mut workbench, &[key(KeyCode::Up)]);
    assert_eq!(workbench.state().ui.explorer_context_menu.selected, 3);

    press(&mut workbench, &[key(KeyCode::Esc)]);
    assert!(!workbench.state().ui.explorer_context_menu.visible);

    press(
        &mut workbench,
        &[
            key(KeyCode::Char('m')),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Enter),
        ],
    );
    let dialog = &workbench.state().ui.input_dialog;
    assert_eq!(dialog.title, "Rename");
    assert_eq!(dialog.value, "public");
}

#[test]
fn paste_goes_to_focused_editor_or_dialog() {
    let mut workbench = workbench();
    let paste = |text: &str| InputEvent::Paste(text.to_string());

    assert!(workbench.handle_input(&paste("ignored")).is_ignored());

    press(&mut workbench, &[key(KeyCode::Char('n'))]);
    press(&mut workbench, &[paste("a\nb.txt")]);
    assert_eq!(workbench.state().ui.input_dialog.value, "ab.txt");
    press(&mut workbench, &[key(KeyCode::Esc)]);

    press(
        &mut workbench,
        &[
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            key(KeyCode::Tab),
        ],
    );
    press(&mut workbench, &[paste("one\r\ntwo")]);
    let open = workbench.state().editor.open.as_ref().unwrap();
    assert!(open.modified);
    assert!(open.buffer.text().starts_with("one\ntwo// Content"));
}

#[test]
fn settings_keybinding_overrides_apply() {
    let settings = Settings {
        keybindings: vec![
            KeybindingRule {
                key: "ctrl+q".to_string(),
                command: String::new(),
                context: None,
            },
            KeybindingRule {
                key: "ctrl+x".to_string(),
                command: "quit".to_string(),
                context: None,
            },
        ],
        ..Settings::default()
    };
    let mut workbench = Workbench::new(&settings);

    assert!(!workbench.handle_input(&ctrl('q')).is_quit());
    assert!(workbench.handle_input(&ctrl('x')).is_quit());
}

#[test]
fn success_notice_expires_while_pointer_moves() {
    let mut workbench = workbench();
    press(&mut workbench, &[key(KeyCode::Char('n'))]);
    type_chars(&mut workbench, "x.md");
    press(&mut workbench, &[key(KeyCode::Enter)]);
    assert_eq!(
        workbench.state().ui.notice.current.as_ref().map(|n| n.level),
        Some(NoticeLevel::Success)
    );

    let start = std::time::Instant::now();
    for step in 0..4u64 {
        let result = workbench.handle_input(&mouse(MouseEventKind::Moved, 10, 5));
        assert!(!result.is_quit());
        assert!(!workbench.tick(start + std::time::Duration::from_millis(step * 500)));
        assert!(workbench.state().ui.notice.current.is_some());
    }

    press(&mut workbench, &[mouse(MouseEventKind::Moved, 11, 5)]);
    assert!(workbench.tick(start + std::time::Duration::from_millis(2000)));
    assert!(workbench.state().ui.notice.current.is_none());
}

#[test]
fn notice_and_dialog_render() {
    let mut workbench = workbench();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    press(&mut workbench, &[key(KeyCode::Char('n'))]);
    type_chars(&mut workbench, "a/b");
    press(&mut workbench, &[key(KeyCode::Enter)]);
    let text = draw(&mut workbench, &mut terminal).join("\n");
    assert!(text.contains("New File"));
    assert!(text.contains("> a/b"));
    assert!(text.contains("File name cannot contain / or \\"));
    assert!(workbench.cursor_position().is_some());

    press(&mut workbench, &[key(KeyCode::Esc), key(KeyCode::Char('n'))]);
    type_chars(&mut workbench, "src");
    press(&mut workbench, &[key(KeyCode::Enter)]);
    let notice = workbench.state().ui.notice.current.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);

    let text = draw(&mut workbench, &mut terminal).join("\n");
    assert!(text.contains("Error!"));
    assert!(text.contains("Press any key to dismiss"));
}

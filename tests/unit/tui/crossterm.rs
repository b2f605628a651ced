use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn key_release_is_dropped() {
    let event = ct::KeyEvent::new_with_kind(
        ct::KeyCode::Char('a'),
        ct::KeyModifiers::NONE,
        ct::KeyEventKind::Release,
    );
    assert_eq!(into_input_event(ct::Event::Key(event)), None);
}

#[test]
fn modifiers_are_combined() {
    let event = ct::KeyEvent::new(
        ct::KeyCode::Left,
        ct::KeyModifiers::ALT | ct::KeyModifiers::SHIFT,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Left);
    assert!(converted.modifiers.contains(KeyModifiers::ALT));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
    assert!(!converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn mouse_drag_and_paste_convert() {
    let mouse = ct::MouseEvent {
        kind: ct::MouseEventKind::Drag(ct::MouseButton::Left),
        column: 31,
        row: 4,
        modifiers: ct::KeyModifiers::NONE,
    };
    assert_eq!(
        into_input_event(ct::Event::Mouse(mouse)),
        Some(InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 31,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }))
    );

    assert_eq!(
        into_input_event(ct::Event::Paste("abc".to_string())),
        Some(InputEvent::Paste("abc".to_string()))
    );
    assert_eq!(
        into_input_event(ct::Event::FocusLost),
        Some(InputEvent::FocusLost)
    );
}

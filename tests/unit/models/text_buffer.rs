use super::*;

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor(), (0, 0));

    buffer.set_cursor(1, 2);
    assert_eq!(buffer.cursor(), (1, 2));

    buffer.set_cursor(9, 9);
    assert_eq!(buffer.cursor(), (1, 5));
}

#[test]
fn test_pos_to_char() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_char((0, 0)), 0);
    assert_eq!(buffer.pos_to_char((1, 0)), 6);
    assert_eq!(buffer.pos_to_char((1, 3)), 9);
}

#[test]
fn test_insert_and_newline() {
    let mut buffer = TextBuffer::new();
    buffer.insert_char('a');
    buffer.insert_char('\n');
    buffer.insert_char('b');

    assert_eq!(buffer.text(), "a\nb");
    assert_eq!(buffer.cursor(), (1, 1));
}

#[test]
fn test_insert_str_moves_cursor() {
    let mut buffer = TextBuffer::from_text("xy");
    buffer.set_cursor(0, 1);
    buffer.insert_str("12\n345");

    assert_eq!(buffer.text(), "x12\n345y");
    assert_eq!(buffer.cursor(), (1, 3));
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.set_cursor(0, 0);
    assert!(!buffer.delete_backward());
}

#[test]
fn test_delete_forward() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);

    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "abcd");

    buffer.set_cursor(0, 4);
    assert!(!buffer.delete_forward());
}

#[test]
fn test_cursor_moves_clamp_to_line() {
    let mut buffer = TextBuffer::from_text("long line\nx");
    buffer.set_cursor(0, 8);

    assert!(buffer.move_down());
    assert_eq!(buffer.cursor(), (1, 1));
    assert!(!buffer.move_down());
    assert!(buffer.move_up());
    assert_eq!(buffer.cursor(), (0, 1));
    assert!(buffer.move_line_end());
    assert_eq!(buffer.cursor(), (0, 9));
    assert!(buffer.move_right());
    assert_eq!(buffer.cursor(), (1, 0));
    assert!(buffer.move_left());
    assert_eq!(buffer.cursor(), (0, 9));
}

#[test]
fn test_graphemes_and_display_col() {
    let mut buffer = TextBuffer::from_text("e\u{301}中x");
    buffer.set_cursor(0, 2);

    assert_eq!(buffer.line_grapheme_len(0), 3);
    assert_eq!(buffer.cursor_display_col(), 3);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "e\u{301}x");
}

#[test]
fn test_combining_mark_keeps_cursor_on_line() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);

    buffer.insert_char('e');
    buffer.insert_char('\u{301}');
    assert_eq!(buffer.cursor(), (0, 3));

    buffer.insert_char('x');
    assert_eq!(buffer.text(), "abe\u{301}x\ncd");
    assert_eq!(buffer.cursor(), (0, 4));

    buffer.insert_str("\u{301}y");
    assert_eq!(buffer.text(), "abe\u{301}x\u{301}y\ncd");
    assert_eq!(buffer.cursor(), (0, 5));
}

#[test]
fn test_set_cursor_display_counts_wide_graphemes() {
    let mut buffer = TextBuffer::from_text("ab中文cd\nx");

    buffer.set_cursor_display(0, 6);
    assert_eq!(buffer.cursor(), (0, 4));

    // Inside the second column of a wide char lands before it.
    buffer.set_cursor_display(0, 3);
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.set_cursor_display(0, 99);
    assert_eq!(buffer.cursor(), (0, 6));

    buffer.set_cursor_display(5, 1);
    assert_eq!(buffer.cursor(), (1, 1));
}

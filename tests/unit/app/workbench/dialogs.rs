use super::*;

#[test]
fn input_window_keeps_cursor_visible() {
    assert_eq!(input_window_start("abc", 3, 10), 0);
    assert_eq!(input_window_start("abcdefghij", 10, 5), 6);
    assert_eq!(input_window_start("abcdefghij", 2, 5), 0);
    assert_eq!(input_window_start("", 0, 5), 0);
}

#[test]
fn input_window_counts_wide_chars() {
    // Each ideograph is two columns; a budget of 4 fits two of them.
    let value = "文件名字";
    assert_eq!(input_window_start(value, value.len(), 5), "文件".len());
}

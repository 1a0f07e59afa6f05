//! Rendering tests for PlaceholderView
//!
//! Uses ratatui TestBackend to check what each style puts on screen.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, layout::Alignment};

use placeholder_view::model::{Icon, Image};
use placeholder_view::ui::symbols;
use placeholder_view::{PlaceholderStyle, PlaceholderView};

use crate::{buffer_rows, row_of};

fn sample_view() -> PlaceholderView {
    let mut view = PlaceholderView::new();
    view.set_image(Some(Image::from_art("[__]")));
    view.set_title(Some("Nothing here".to_string()));
    view.set_content(Some("Pull to refresh".to_string()));
    view.set_primary_button_title(Some("Retry".to_string()));
    view.set_primary_button_image(Some(Icon::from("↻")));
    view.set_secondary_button_title(Some("Dismiss".to_string()));
    view.set_image_height_ratio(0.1);
    view
}

fn terminal_with(view: &mut PlaceholderView, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    terminal
}

fn draw(view: &mut PlaceholderView, width: u16, height: u16) -> Vec<String> {
    buffer_rows(terminal_with(view, width, height).backend().buffer())
}

#[test]
fn test_neutral_shows_everything() {
    let mut view = sample_view();
    let terminal = terminal_with(&mut view, 24, 14);

    assert_snapshot!(terminal.backend(), @r#"
    "                        "
    "                        "
    "          [__]          "
    "                        "
    "      Nothing here      "
    "                        "
    "     Pull to refresh    "
    "                        "
    "        ↻ Retry         "
    "                        "
    "        Dismiss         "
    "                        "
    "                        "
    "                        "
    "#);

    let rows = buffer_rows(terminal.backend().buffer());
    for needle in ["[__]", "Nothing here", "Pull to refresh", "↻ Retry", "Dismiss"] {
        assert!(row_of(&rows, needle).is_some(), "missing {needle}");
    }
    assert!(row_of(&rows, symbols::spinner::FRAMES[0]).is_none());
}

#[test]
fn test_loading_shows_spinner_only() {
    let mut view = sample_view();
    view.set_style(Some(PlaceholderStyle::Loading));
    let terminal = terminal_with(&mut view, 24, 14);

    assert_snapshot!(terminal.backend(), @r#"
    "                        "
    "                        "
    "                        "
    "                        "
    "                        "
    "           ⠋            "
    "                        "
    "     Pull to refresh    "
    "                        "
    "                        "
    "                        "
    "                        "
    "                        "
    "                        "
    "#);

    let rows = buffer_rows(terminal.backend().buffer());
    assert_eq!(row_of(&rows, symbols::spinner::FRAMES[0]), Some(5));
    assert_eq!(row_of(&rows, "Pull to refresh"), Some(7));
    for needle in ["[__]", "Nothing here", "Retry", "Dismiss"] {
        assert!(row_of(&rows, needle).is_none(), "unexpected {needle}");
    }
}

#[test]
fn test_spinner_advances_between_frames() {
    let mut view = sample_view();
    view.set_loading(true);
    view.tick();
    let rows = draw(&mut view, 40, 20);

    assert!(row_of(&rows, symbols::spinner::FRAMES[1]).is_some());
    assert!(row_of(&rows, symbols::spinner::FRAMES[0]).is_none());
}

#[test]
fn test_error_replaces_body_and_hides_secondary() {
    let mut view = sample_view();
    view.set_error("Network unreachable");
    let terminal = terminal_with(&mut view, 24, 14);

    assert_snapshot!(terminal.backend(), @r#"
    "                        "
    "                        "
    "                        "
    "          [__]          "
    "                        "
    "      Nothing here      "
    "                        "
    "   Network unreachable  "
    "                        "
    "        ↻ Retry         "
    "                        "
    "                        "
    "                        "
    "                        "
    "#);

    let rows = buffer_rows(terminal.backend().buffer());
    assert_eq!(row_of(&rows, "Network unreachable"), Some(7));
    assert!(row_of(&rows, "Pull to refresh").is_none());
    assert!(row_of(&rows, "Retry").is_some());
    assert!(row_of(&rows, "Dismiss").is_none());
}

#[test]
fn test_empty_hides_image_and_buttons() {
    let mut view = sample_view();
    view.set_style(Some(PlaceholderStyle::Empty));
    let terminal = terminal_with(&mut view, 24, 14);

    assert_snapshot!(terminal.backend(), @r#"
    "                        "
    "                        "
    "                        "
    "                        "
    "                        "
    "      Nothing here      "
    "                        "
    "     Pull to refresh    "
    "                        "
    "                        "
    "                        "
    "                        "
    "                        "
    "                        "
    "#);

    let rows = buffer_rows(terminal.backend().buffer());
    assert_eq!(row_of(&rows, "Nothing here"), Some(5));
    assert_eq!(&rows[5][6..18], "Nothing here");
    for needle in ["[__]", "Retry", "Dismiss"] {
        assert!(row_of(&rows, needle).is_none(), "unexpected {needle}");
    }
}

#[test]
fn test_title_and_body_are_centered() {
    let mut view = PlaceholderView::new();
    view.set_title(Some("Nothing here".to_string()));
    view.set_content(Some("Pull to refresh".to_string()));
    let rows = draw(&mut view, 40, 12);

    // Stack of 3 rows plus 2 rows of padding, centered in 12 rows
    let title_row = row_of(&rows, "Nothing here").unwrap();
    assert_eq!(title_row, 4);
    assert_eq!(row_of(&rows, "Pull to refresh"), Some(6));

    // Stack is 36 columns wide starting at column 2: (36 - 12) / 2 = 12
    assert_eq!(&rows[title_row][14..26], "Nothing here");
}

#[test]
fn test_left_aligned_title() {
    let mut view = PlaceholderView::new();
    view.set_title(Some("Nothing here".to_string()));
    view.set_title_alignment(Alignment::Left);
    let rows = draw(&mut view, 40, 12);

    let title_row = row_of(&rows, "Nothing here").unwrap();
    assert!(rows[title_row].starts_with("  Nothing here"));
}

#[test]
fn test_long_body_wraps_without_line_limit() {
    let mut view = PlaceholderView::new();
    view.set_content(Some("one two three four five six".to_string()));
    view.set_centered(false);
    let rows = draw(&mut view, 14, 12);

    // 10 columns of stack width: "one two", "three four", "five six"
    assert_eq!(row_of(&rows, "one two"), Some(1));
    assert_eq!(row_of(&rows, "three four"), Some(2));
    assert_eq!(row_of(&rows, "five six"), Some(3));
}

#[test]
fn test_resize_recomputes_centering() {
    let mut view = PlaceholderView::new();
    view.set_title(Some("Hi".to_string()));

    let rows = draw(&mut view, 20, 9);
    assert_eq!(row_of(&rows, "Hi"), Some(4));
    assert_eq!(view.scroll().inset().top, 3);

    let rows = draw(&mut view, 20, 21);
    assert_eq!(row_of(&rows, "Hi"), Some(10));
    assert_eq!(view.scroll().inset().top, 9);
}

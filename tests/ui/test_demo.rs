//! Rendering tests for the demo application
//!
//! Drives the App with key events and checks the terminal output.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use placeholder_view::app::App;
use placeholder_view::keys;

use crate::{buffer_rows, row_of};

fn terminal_with(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

fn draw(app: &mut App) -> Vec<String> {
    buffer_rows(terminal_with(app).backend().buffer())
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_demo_initial_screen() {
    let mut app = App::default();
    let rows = draw(&mut app);

    assert!(row_of(&rows, "Your inbox is empty").is_some());
    let status = rows.last().unwrap();
    assert!(status.starts_with(" none "));
    assert!(status.contains("[l] loading"));
}

#[test]
fn test_demo_scrolls_to_buttons() {
    let mut app = App::default();
    let rows = draw(&mut app);
    // The art pushes the buttons below the fold
    assert!(row_of(&rows, "Dismiss").is_none());
    assert!(app.placeholder.scroll().can_scroll());

    press(&mut app, keys::GO_BOTTOM);
    let terminal = terminal_with(&mut app);
    assert_snapshot!(terminal.backend(), @r#"
    "                        |           |                       "
    "                        |   (-_-)   |                       "
    "                        |           |                       "
    "                        |___     ___|                       "
    "                              \___/                         "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                     Your inbox is empty                    "
    "                                                            "
    "     New messages will show up here. Check back later or    "
    "                        refresh now.                        "
    "                                                            "
    "                          ↻ Retry                           "
    "                                                            "
    "                        [ Dismiss ]                         "
    "                                                            "
    " none  spacing 1 centered  [l] loading [e] error [m] empty ["
    "#);

    let rows = buffer_rows(terminal.backend().buffer());
    assert_eq!(row_of(&rows, "Retry"), Some(15));
    assert_eq!(row_of(&rows, "[ Dismiss ]"), Some(17));
}

#[test]
fn test_demo_error_screen() {
    let mut app = App::default();
    press(&mut app, keys::STYLE_ERROR);
    let rows = draw(&mut app);

    assert!(row_of(&rows, "Network unreachable").is_some());
    assert!(rows.last().unwrap().starts_with(" error "));
}

#[test]
fn test_demo_loading_screen() {
    let mut app = App::default();
    press(&mut app, keys::STYLE_LOADING);
    let terminal = terminal_with(&mut app);

    // Spinner and body are short enough to be centered
    assert_snapshot!(terminal.backend(), @r#"
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                             ⠋                              "
    "                                                            "
    "     New messages will show up here. Check back later or    "
    "                        refresh now.                        "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    " loading  spacing 1 centered  [l] loading [e] error [m] empt"
    "#);

    let rows = buffer_rows(terminal.backend().buffer());
    assert!(row_of(&rows, "Your inbox is empty").is_none());
    assert_eq!(app.placeholder.scroll().inset().top, 6);
    assert!(rows.last().unwrap().starts_with(" loading "));
}

use super::*;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::deck::default_items;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::style::Color;

// 80x20 terminal: card label rows are 4, 8 and 12; cards span columns 10..70.
const WIDTH: u16 = 80;
const HEIGHT: u16 = 20;

fn new_app() -> DeckApp {
    let deck = DeckState::new(default_items()).unwrap();
    DeckApp::new(deck, DeckTheme::default(), 2, None)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
    })
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

fn draw(app: &mut DeckApp, backend: &mut TestBackend) {
    let area = backend.area();
    app.render(backend, area);
}

fn labels(app: &DeckApp) -> Vec<&str> {
    app.deck().items().iter().map(|i| i.label.as_str()).collect()
}

/// Press, move in two steps, release; redraws after every event like the main loop.
fn drag_and_drop(
    app: &mut DeckApp,
    backend: &mut TestBackend,
    from: (u16, u16),
    to: (u16, u16),
) -> EventResult {
    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), from.0, from.1));
    draw(app, backend);
    app.handle_input(&mouse(MouseEventKind::Drag(left), from.0, from.1 + 1));
    draw(app, backend);
    app.handle_input(&mouse(MouseEventKind::Drag(left), to.0, to.1));
    draw(app, backend);
    let result = app.handle_input(&mouse(MouseEventKind::Up(left), to.0, to.1));
    draw(app, backend);
    result
}

#[test]
fn renders_title_and_cards_in_deck_order() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let buf = backend.buffer();
    assert_eq!(buf.find_row(TITLE), Some(1));
    assert_eq!(buf.find_row("C#"), Some(4));
    assert_eq!(buf.find_row("TypeScript"), Some(8));
    assert_eq!(buf.find_row("Rust"), Some(12));
    assert_eq!(buf.cell(10, 3).unwrap().symbol, "╭");
    assert!(buf.row_text(HEIGHT - 1).starts_with("Drag a card to reorder"));
}

#[test]
fn dragging_csharp_over_rust_moves_it_to_the_end() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let result = drag_and_drop(&mut app, &mut backend, (40, 4), (40, 12));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(labels(&app), vec!["TypeScript", "Rust", "C#"]);
    assert!(!app.is_dragging());

    let buf = backend.buffer();
    assert_eq!(buf.find_row("TypeScript"), Some(4));
    assert_eq!(buf.find_row("Rust"), Some(8));
    assert_eq!(buf.find_row("C#"), Some(12));
}

#[test]
fn back_to_back_drops_without_a_frame_use_the_new_slots() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let left = MouseButton::Left;
    for _ in 0..2 {
        app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
        app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
        app.handle_input(&mouse(MouseEventKind::Up(left), 40, 12));
    }

    assert_eq!(labels(&app), vec!["Rust", "C#", "TypeScript"]);
}

#[test]
fn right_click_during_a_drag_does_not_drop() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let (left, right) = (MouseButton::Left, MouseButton::Right);
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
    app.handle_input(&mouse(MouseEventKind::Down(right), 40, 12));
    app.handle_input(&mouse(MouseEventKind::Up(right), 40, 12));

    assert!(app.is_dragging());
    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);

    app.handle_input(&mouse(MouseEventKind::Up(left), 40, 12));
    assert!(!app.is_dragging());
    assert_eq!(labels(&app), vec!["TypeScript", "Rust", "C#"]);
}

#[test]
fn dragging_upward_moves_the_card_before_the_target() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    drag_and_drop(&mut app, &mut backend, (40, 12), (40, 4));

    assert_eq!(labels(&app), vec!["Rust", "C#", "TypeScript"]);
}

#[test]
fn dropping_a_card_on_its_own_slot_keeps_the_order() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 42, 4));
    assert!(app.is_dragging());
    let result = app.handle_input(&mouse(MouseEventKind::Up(left), 42, 4));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);
}

#[test]
fn short_moves_stay_below_the_drag_threshold() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 5));
    assert!(!app.is_dragging());
    app.handle_input(&mouse(MouseEventKind::Up(left), 40, 5));

    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);
}

#[test]
fn preview_slides_cards_without_touching_the_deck() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
    draw(&mut app, &mut backend);

    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);

    let buf = backend.buffer();
    assert_eq!(buf.find_row("TypeScript"), Some(4));
    assert_eq!(buf.find_row("Rust"), Some(8));
    assert_eq!(buf.find_row("C#"), Some(12));
    assert_eq!(buf.cell(10, 11).unwrap().symbol, "┏");
    assert_eq!(
        buf.cell(70, 13).unwrap().style.bg,
        Some(app.theme().shadow)
    );
    assert!(buf.row_text(HEIGHT - 1).starts_with("Moving C#"));
}

#[test]
fn escape_cancels_the_drag_and_skips_the_reorder() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
    assert!(app.is_dragging());

    let result = app.handle_input(&key(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(result, EventResult::Consumed);
    assert!(!app.is_dragging());

    app.handle_input(&mouse(MouseEventKind::Up(left), 40, 12));
    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);
}

#[test]
fn resize_and_focus_loss_cancel_the_drag() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
    assert_eq!(
        app.handle_input(&InputEvent::Resize(100, 30)),
        EventResult::Consumed
    );
    assert!(!app.is_dragging());

    draw(&mut app, &mut backend);
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
    app.handle_input(&InputEvent::FocusLost);
    assert!(!app.is_dragging());

    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);
}

#[test]
fn hovered_card_gets_the_accent_border() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    let result = app.handle_input(&mouse(MouseEventKind::Moved, 40, 8));
    assert_eq!(result, EventResult::Consumed);
    draw(&mut app, &mut backend);

    let buf = backend.buffer();
    assert_eq!(buf.cell(10, 7).unwrap().style.fg, Some(app.theme().hover_border));
    assert_eq!(buf.cell(10, 3).unwrap().style.fg, Some(app.theme().border));
}

#[test]
fn labels_are_bold_gradients() {
    let mut app = new_app();
    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);

    // "C#" centered in the 58-wide inner row starting at column 11.
    let cell = backend.buffer().cell(39, 4).unwrap();
    assert_eq!(cell.symbol, "C");
    assert!(matches!(cell.style.fg, Some(Color::Rgb(..))));
    assert!(cell.style.bold);
}

#[test]
fn quit_keys() {
    let mut app = new_app();

    assert_eq!(
        app.handle_input(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
        EventResult::Quit
    );
    assert_eq!(
        app.handle_input(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        EventResult::Quit
    );
    assert_eq!(
        app.handle_input(&key(KeyCode::Char('x'), KeyModifiers::NONE)),
        EventResult::Ignored
    );
}

#[test]
fn input_before_the_first_frame_is_harmless() {
    let mut app = new_app();

    let left = MouseButton::Left;
    app.handle_input(&mouse(MouseEventKind::Down(left), 40, 4));
    app.handle_input(&mouse(MouseEventKind::Drag(left), 40, 12));
    app.handle_input(&mouse(MouseEventKind::Up(left), 40, 12));

    assert!(!app.is_dragging());
    assert_eq!(labels(&app), vec!["C#", "TypeScript", "Rust"]);
}

#[test]
fn tick_shows_the_latest_log_line() {
    let (tx, rx) = std::sync::mpsc::channel();
    let deck = DeckState::new(default_items()).unwrap();
    let mut app = DeckApp::new(deck, DeckTheme::default(), 2, Some(rx));

    assert!(!app.tick());
    tx.send("first".to_string()).unwrap();
    tx.send("second".to_string()).unwrap();
    assert!(app.tick());
    assert_eq!(app.last_log(), Some("second"));

    let mut backend = TestBackend::new(WIDTH, HEIGHT);
    draw(&mut app, &mut backend);
    assert!(backend.buffer().row_text(HEIGHT - 1).ends_with("| second"));

    drop(tx);
    assert!(!app.tick());
    assert_eq!(app.last_log(), Some("second"));
}

#[test]
fn card_ids_are_stable_per_item() {
    let a = DeckApp::card_id(&ItemId::from("1"));
    assert_eq!(a, DeckApp::card_id(&ItemId::from("1")));
    assert_ne!(a, DeckApp::card_id(&ItemId::from("2")));
}

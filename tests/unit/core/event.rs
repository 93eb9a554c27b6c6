use super::*;

#[test]
fn modifier_constants_set_a_single_flag() {
    assert!(KeyModifiers::NONE.is_empty());
    assert!(KeyModifiers::CONTROL.ctrl);
    assert!(!KeyModifiers::CONTROL.shift && !KeyModifiers::CONTROL.alt);
    assert!(!KeyModifiers { alt: true, ..KeyModifiers::NONE }.is_empty());
    assert_eq!(KeyModifiers::default(), KeyModifiers::NONE);
}

#[test]
fn release_is_not_a_press() {
    let mut event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert!(event.is_press());
    event.released = true;
    assert!(!event.is_press());
}

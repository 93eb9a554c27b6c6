use super::*;

#[test]
fn builders_set_only_their_field() {
    let s = Style::default().fg(Color::Indexed(1)).bold();
    assert_eq!(s.fg, Some(Color::Indexed(1)));
    assert_eq!(s.bg, None);
    assert!(s.bold);
    assert!(!Style::default().bg(Color::Indexed(8)).bold);
}

#[test]
fn lerp_interpolates_rgb_endpoints() {
    let a = Color::Rgb(0, 0, 0);
    let b = Color::Rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Color::Rgb(100, 50, 25));
    assert_eq!(a.lerp(b, 7.0), b);
}

#[test]
fn lerp_snaps_palette_colors() {
    let a = Color::Indexed(1);
    let b = Color::Rgb(10, 10, 10);
    assert_eq!(a.lerp(b, 0.2), a);
    assert_eq!(a.lerp(b, 0.8), b);
}

#[test]
fn lighten_moves_toward_white() {
    assert_eq!(Color::Rgb(0, 0, 0).lighten(0.5), Color::Rgb(128, 128, 128));
    assert_eq!(Color::Rgb(255, 0, 0).lighten(1.0), Color::Rgb(255, 255, 255));
    assert_eq!(Color::Rgb(40, 80, 120).lighten(0.0), Color::Rgb(40, 80, 120));
    assert_eq!(Color::Indexed(3).lighten(0.5), Color::Indexed(3));
}

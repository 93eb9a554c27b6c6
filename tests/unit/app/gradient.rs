use super::*;

const BLACK: Color = Color::Rgb(0, 0, 0);
const RED: Color = Color::Rgb(200, 0, 0);

#[test]
fn ninety_degrees_runs_left_to_right() {
    let rect = Rect::new(0, 0, 10, 1);
    let g = LinearGradient::new(BLACK, RED, 90.0);

    assert_eq!(g.color_at(rect, 0, 0), Color::Rgb(10, 0, 0));
    assert_eq!(g.color_at(rect, 9, 0), Color::Rgb(190, 0, 0));
}

#[test]
fn opposite_angle_reverses_the_ramp() {
    let rect = Rect::new(4, 2, 10, 1);
    let g = LinearGradient::new(BLACK, RED, 270.0);

    assert_eq!(g.color_at(rect, 4, 2), Color::Rgb(190, 0, 0));
    assert_eq!(g.color_at(rect, 13, 2), Color::Rgb(10, 0, 0));
}

#[test]
fn vertical_gradient_is_flat_on_a_single_row() {
    let rect = Rect::new(0, 0, 6, 1);
    let g = LinearGradient::new(BLACK, RED, 0.0);

    for x in 0..6 {
        assert_eq!(g.offset_at(rect, x, 0), 0.5);
    }
}

#[test]
fn diagonal_offsets_grow_toward_the_top_right() {
    let rect = Rect::new(0, 0, 20, 3);
    let g = LinearGradient::new(BLACK, RED, 45.0);

    let bottom_left = g.offset_at(rect, 0, 2);
    let middle = g.offset_at(rect, 10, 1);
    let top_right = g.offset_at(rect, 19, 0);
    assert!(bottom_left < middle);
    assert!(middle < top_right);
}

#[test]
fn spans_merge_cells_with_equal_colors() {
    let rect = Rect::new(0, 0, 4, 1);
    let flat = LinearGradient::new(RED, RED, 90.0);
    let spans = flat.spans(rect, Pos::new(0, 0), "Rust", Style::default(), |c| c);
    assert_eq!(spans, vec![("Rust".to_string(), Style::default().fg(RED))]);

    let ramp = LinearGradient::new(BLACK, RED, 90.0);
    let spans = ramp.spans(rect, Pos::new(0, 0), "C#", Style::default(), |c| c);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].0, "C");
    assert_eq!(spans[1].0, "#");
}

#[test]
fn fit_is_applied_to_every_sample() {
    let rect = Rect::new(0, 0, 3, 1);
    let g = LinearGradient::new(BLACK, RED, 90.0);
    let spans = g.spans(rect, Pos::new(0, 0), "abc", Style::default(), |_| {
        Color::Indexed(1)
    });
    assert_eq!(spans, vec![("abc".to_string(), Style::default().fg(Color::Indexed(1)))]);
}

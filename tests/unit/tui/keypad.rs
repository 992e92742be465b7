use super::*;

fn layout() -> KeypadLayout {
    KeypadLayout::compute(Rect::new(0, 0, 40, 23))
}

#[test]
fn display_sits_above_grid() {
    let layout = layout();
    assert_eq!(layout.display, Rect::new(0, 0, 40, DISPLAY_HEIGHT));
    assert_eq!(layout.cells.len(), 19);
    assert!(layout.cells.iter().all(|cell| cell.area.y >= DISPLAY_HEIGHT));
}

#[test]
fn zero_spans_two_columns() {
    let layout = layout();
    assert_eq!(layout.cell_for(Button::Digit(0)), Some(Rect::new(0, 19, 20, 4)));
    assert_eq!(layout.cell_for(Button::Decimal), Some(Rect::new(20, 19, 10, 4)));
    assert_eq!(layout.cell_for(Button::Equal), Some(Rect::new(30, 19, 10, 4)));
}

#[test]
fn hit_test_maps_cells_back_to_buttons() {
    let layout = layout();
    assert_eq!(layout.hit_test(35, 4), Some(Button::DIVIDE));
    assert_eq!(layout.hit_test(0, 3), Some(Button::Clear));
    assert_eq!(layout.hit_test(12, 8), Some(Button::Digit(8)));
    assert_eq!(layout.hit_test(5, 21), Some(Button::Digit(0)));
    assert_eq!(layout.hit_test(15, 22), Some(Button::Digit(0)));
    assert_eq!(layout.hit_test(25, 20), Some(Button::Decimal));
}

#[test]
fn hit_test_outside_grid_is_none() {
    let layout = layout();
    assert_eq!(layout.hit_test(10, 1), None);
    assert_eq!(layout.hit_test(10, 23), None);
    assert_eq!(layout.hit_test(40, 10), None);
}

#[test]
fn tiny_area_has_no_cells() {
    let layout = KeypadLayout::compute(Rect::new(0, 0, 3, 5));
    assert!(layout.cells.is_empty());
    assert_eq!(layout.hit_test(0, 4), None);
}

#[test]
fn visible_tail_keeps_newest_digits() {
    assert_eq!(visible_tail("12345", 10), "12345");
    assert_eq!(visible_tail("1234567890", 4), "7890");
    assert_eq!(visible_tail("-1.5", 0), "");
}

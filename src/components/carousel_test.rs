use super::*;

#[test]
fn auto_slide_requires_overflowing_row() {
    assert!(!should_auto_slide(0, AUTO_SLIDE_THRESHOLD, false));
    assert!(!should_auto_slide(4, AUTO_SLIDE_THRESHOLD, false));
    assert!(should_auto_slide(5, AUTO_SLIDE_THRESHOLD, false));
}

#[test]
fn auto_slide_pauses_on_hover() {
    assert!(!should_auto_slide(8, AUTO_SLIDE_THRESHOLD, true));
    assert!(should_auto_slide(8, AUTO_SLIDE_THRESHOLD, false));
}

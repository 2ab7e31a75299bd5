use super::*;

#[test]
fn filled_ingredients_drops_blank_rows() {
    let rows = vec![
        " cibule ".to_owned(),
        String::new(),
        "   ".to_owned(),
        "brambory".to_owned(),
    ];
    assert_eq!(filled_ingredients(&rows), vec!["cibule".to_owned(), "brambory".to_owned()]);
}

#[test]
fn filled_ingredients_empty_for_all_blank_input() {
    assert!(filled_ingredients(&[String::new(), "  ".to_owned()]).is_empty());
    assert!(filled_ingredients(&[]).is_empty());
}

use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  marie@example.cz  ", "heslo"),
        Ok(("marie@example.cz".to_owned(), "heslo".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "heslo"), Err("Vyplňte email i heslo."));
    assert_eq!(validate_login_input("   ", "heslo"), Err("Vyplňte email i heslo."));
    assert_eq!(validate_login_input("a@b.cz", ""), Err("Vyplňte email i heslo."));
}

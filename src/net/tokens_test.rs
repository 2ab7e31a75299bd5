use super::*;

#[test]
fn token_kinds_map_to_fixed_storage_keys() {
    assert_eq!(TokenKind::Access.storage_key(), "access_token");
    assert_eq!(TokenKind::Refresh.storage_key(), "refresh_token");
}

#[test]
fn memory_store_round_trips_both_tokens() {
    let store = MemoryTokens::new();
    assert_eq!(store.get(TokenKind::Access), None);
    assert_eq!(store.get(TokenKind::Refresh), None);

    store.set(TokenKind::Access, "acc-1");
    store.set(TokenKind::Refresh, "ref-1");
    assert_eq!(store.get(TokenKind::Access).as_deref(), Some("acc-1"));
    assert_eq!(store.get(TokenKind::Refresh).as_deref(), Some("ref-1"));

    // Replacement, as happens on every refresh.
    store.set(TokenKind::Access, "acc-2");
    assert_eq!(store.get(TokenKind::Access).as_deref(), Some("acc-2"));
}

#[test]
fn clear_removes_both_tokens() {
    let store = MemoryTokens::with_pair("acc", "ref");
    store.clear();
    assert_eq!(store.get(TokenKind::Access), None);
    assert_eq!(store.get(TokenKind::Refresh), None);
}

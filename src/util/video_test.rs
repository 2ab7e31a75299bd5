use super::*;

// =============================================================
// parse_video_id
// =============================================================

#[test]
fn parses_watch_url() {
    assert_eq!(
        parse_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_short_url() {
    assert_eq!(
        parse_video_id("https://youtu.be/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_embed_url() {
    assert_eq!(
        parse_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_legacy_v_path() {
    assert_eq!(
        parse_video_id("https://www.youtube.com/v/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn parses_channel_u_path() {
    assert_eq!(
        parse_video_id("https://www.youtube.com/u/x/dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn candidate_stops_at_query_separators() {
    assert_eq!(
        parse_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        parse_video_id("https://youtu.be/dQw4w9WgXcQ#at=10"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn rightmost_marker_wins() {
    // A later `&v=` overrides the id in `watch?v=`.
    assert_eq!(
        parse_video_id("https://www.youtube.com/watch?v=aaaaaaaaaaa&v=dQw4w9WgXcQ"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn rejects_wrong_length_candidate() {
    assert_eq!(parse_video_id("https://youtu.be/short"), None);
    assert_eq!(parse_video_id("https://www.youtube.com/watch?v=waytoolongvideoid"), None);
}

#[test]
fn rejects_non_video_url() {
    assert_eq!(parse_video_id("https://example.com/not-a-video"), None);
    assert_eq!(parse_video_id(""), None);
}

// =============================================================
// embed_url / thumbnail_url
// =============================================================

#[test]
fn embed_url_builds_player_address() {
    assert_eq!(
        embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(embed_url("https://example.com/not-a-video"), None);
}

#[test]
fn thumbnail_url_builds_image_address() {
    assert_eq!(
        thumbnail_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_owned())
    );
    assert_eq!(thumbnail_url("https://example.com/not-a-video"), None);
}

#[test]
fn id_round_trips_through_embed_url() {
    for url in [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube.com/v/dQw4w9WgXcQ",
    ] {
        let id = parse_video_id(url).expect("id should parse");
        let embed = embed_url(url).expect("embed should build");
        assert_eq!(parse_video_id(&embed), Some(id));
    }
}

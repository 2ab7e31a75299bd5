//! YouTube URL helpers: video-id extraction plus embed/thumbnail URLs.
//!
//! Recognized shapes: `watch?v=`, `&v=`, `youtu.be/`, `embed/`, `v/` and
//! `u/<one char>/`. A candidate id runs until `#`, `&` or `?` and is
//! accepted only when it is exactly 11 characters. The length check is a
//! validity heuristic for the id format, not a full grammar.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

/// Video ids are always 11 characters.
const VIDEO_ID_LEN: usize = 11;

const MARKERS: &[&str] = &["watch?v=", "&v=", "youtu.be/", "embed/", "v/"];

/// Extract the 11-character video id from a YouTube URL.
///
/// When several markers occur in one URL the rightmost wins, so a
/// trailing `&v=` overrides an earlier `watch?v=`. Returns `None` for
/// non-video URLs and wrong-length candidates.
pub fn parse_video_id(url: &str) -> Option<String> {
    let candidate_start = rightmost_marker_end(url)?;
    let candidate: String = url[candidate_start..]
        .chars()
        .take_while(|c| !matches!(c, '#' | '&' | '?'))
        .collect();
    if candidate.len() == VIDEO_ID_LEN {
        Some(candidate)
    } else {
        None
    }
}

/// Embed-player URL for the video in `url`, if an id parses.
pub fn embed_url(url: &str) -> Option<String> {
    parse_video_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Static thumbnail URL for the video in `url`, if an id parses.
pub fn thumbnail_url(url: &str) -> Option<String> {
    parse_video_id(url).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

/// Byte offset just past the rightmost marker occurrence, if any.
fn rightmost_marker_end(url: &str) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for marker in MARKERS {
        if let Some(start) = url.rfind(marker) {
            let hit = (start, start + marker.len());
            if best.is_none_or(|(s, _)| start > s) {
                best = Some(hit);
            }
        }
    }

    // `u/<one word char>/` has no fixed text, so scan it separately.
    if let Some((start, end)) = rightmost_channel_segment(url) {
        if best.is_none_or(|(s, _)| start > s) {
            best = Some((start, end));
        }
    }

    best.map(|(_, end)| end)
}

/// Find the rightmost `u/<word char>/` segment.
fn rightmost_channel_segment(url: &str) -> Option<(usize, usize)> {
    let bytes = url.as_bytes();
    let mut upper = url.len();
    while let Some(start) = url[..upper].rfind("u/") {
        if start + 3 < bytes.len()
            && (bytes[start + 2].is_ascii_alphanumeric() || bytes[start + 2] == b'_')
            && bytes[start + 3] == b'/'
        {
            return Some((start, start + 4));
        }
        if start == 0 {
            break;
        }
        upper = start;
    }
    None
}

use super::*;
use crate::state::{Direction, Easing};

fn fade_in_300() -> AnimationPreviewState {
    AnimationPreviewState {
        duration_ms: Some(300.0),
        ..AnimationPreviewState::for_animation("fade-in")
    }
}

#[test]
fn joins_page_onto_network_directory() {
    let url = build_share_url("page.html", "https://example.com/app/", &fade_in_300()).unwrap();
    assert_eq!(url, "https://example.com/app/page.html?anim=fade-in&dur=300");
}

#[test]
fn network_base_drops_file_query_and_fragment() {
    let base = share_base("https://example.com:8443/app/index.html?x=1#top").unwrap();
    assert_eq!(base.as_str(), "https://example.com:8443/app/");

    let url = build_share_url(
        "playground.html",
        "http://localhost:8080/site/index.html?anim=old",
        &fade_in_300(),
    )
    .unwrap();
    assert_eq!(
        url,
        "http://localhost:8080/site/playground.html?anim=fade-in&dur=300"
    );
}

#[test]
fn file_location_uses_stripped_location_string() {
    let base = share_base("file:///home/me/animlib/site/index.html?q=1#modal").unwrap();
    assert_eq!(base.as_str(), "file:///home/me/animlib/site/");

    let state = AnimationPreviewState {
        easing: Some(Easing::EaseOut),
        direction: Some(Direction::Alternate),
        ..AnimationPreviewState::for_animation("bounce")
    };
    let url = build_share_url(
        "playground.html",
        "file:///home/me/animlib/site/index.html",
        &state,
    )
    .unwrap();
    assert_eq!(
        url,
        "file:///home/me/animlib/site/playground.html?anim=bounce&ease=ease-out&dir=alternate"
    );
}

#[cfg(unix)]
#[test]
fn bare_absolute_path_is_treated_as_file_location() {
    let base = share_base("/srv/animlib/index.html").unwrap();
    assert_eq!(base.as_str(), "file:///srv/animlib/");
}

#[test]
fn empty_state_produces_no_query() {
    let url = build_share_url(
        "page.html",
        "https://example.com/app/index.html?old=1",
        &AnimationPreviewState::default(),
    )
    .unwrap();
    assert_eq!(url, "https://example.com/app/page.html");
}

#[test]
fn relative_path_base_can_climb_directories() {
    let url = build_share_url("../play/", "https://example.com/a/b/", &fade_in_300()).unwrap();
    assert_eq!(url, "https://example.com/a/play/?anim=fade-in&dur=300");
}

#[test]
fn unusable_locations_are_errors() {
    assert!(build_share_url("page.html", "relative/index.html", &fade_in_300()).is_err());
    assert!(build_share_url("page.html", "about:blank", &fade_in_300()).is_err());
}

use collabpath::colors::ColorScheme;
use collabpath::display::{
    format_artist_info, format_path_flow, format_path_step, format_suggestion,
};
use collabpath_core::{ArtistInfo, ArtistSummary, NodeId};

fn plain() -> ColorScheme {
    ColorScheme::new(false)
}

#[test]
fn test_path_flow_joins_quoted_names() {
    let names = vec!["Drake".to_string(), "Rihanna".to_string()];

    assert_eq!(format_path_flow(&names, &plain()), r#""Drake" → "Rihanna""#);
}

#[test]
fn test_path_step_with_url() {
    let line = format_path_step(
        0,
        "Drake",
        "https://open.spotify.com/artist/3TVXtAsR1Inumwj472S9r4",
        false,
        &plain(),
    );

    assert_eq!(
        line,
        r#"1. "Drake" - https://open.spotify.com/artist/3TVXtAsR1Inumwj472S9r4"#
    );
}

#[test]
fn test_path_step_hides_url() {
    let line = format_path_step(9, "Drake", "https://open.spotify.com/artist/x", true, &plain());

    assert_eq!(line, r#"10. "Drake""#);
}

#[test]
fn test_path_step_does_not_repeat_identifier_names() {
    let url = "https://open.spotify.com/artist/x";

    assert_eq!(format_path_step(1, url, url, false, &plain()), format!("2. \"{url}\""));
}

#[test]
fn test_suggestion_line() {
    let artist = ArtistSummary {
        id: "x".to_string(),
        node: NodeId::from_catalog_id("x"),
        name: "Drake".to_string(),
        popularity: 95,
        genres: vec!["rap".to_string(), "hip hop".to_string()],
        followers: 1234567,
    };

    assert_eq!(
        format_suggestion(0, &artist, &plain()),
        "1.  Drake rap, hip hop - 1,234,567 followers"
    );
}

fn drake() -> ArtistSummary {
    ArtistSummary {
        id: "x".to_string(),
        node: NodeId::from_catalog_id("x"),
        name: "Drake".to_string(),
        popularity: 95,
        genres: Vec::new(),
        followers: 1234567,
    }
}

#[test]
fn test_artist_info_line_for_cached_artist() {
    let info = ArtistInfo {
        artist: drake(),
        in_database: true,
        connections_in_db: 1500,
    };

    assert_eq!(
        format_artist_info(&info, &plain()),
        r#""Drake" - popularity 95, 1,234,567 followers, 1,500 cached collaborators"#
    );
}

#[test]
fn test_artist_info_line_for_uncached_artist() {
    let info = ArtistInfo {
        artist: drake(),
        in_database: false,
        connections_in_db: 0,
    };

    assert!(format_artist_info(&info, &plain()).ends_with("not cached yet"));
}

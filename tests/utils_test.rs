use chrono::NaiveDate;
use harmonify::error::ValidationError;
use harmonify::types::{SearchFilters, Song, SortKey, SortOrder};
use harmonify::utils::*;

// Helper function to create a test song
fn create_test_song(id: &str, title: &str, artist: &str, secs: u64, released: Option<&str>) -> Song {
    let mut song = Song::new(id, title, artist);
    song.duration_ms = Some(secs * 1000);
    song.release_date = released.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
    song
}

fn ids(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn test_sanitize_query_scenario() {
    assert_eq!(sanitize_query("Shape of You (Remix) - Radio Edit"), "Shape of You");
}

#[test]
fn test_sanitize_query_removes_parentheses() {
    assert_eq!(sanitize_query("Song (Remastered 2011)"), "Song");
    assert_eq!(sanitize_query("Song (Live) (Deluxe)"), "Song");
    assert_eq!(sanitize_query("Song (feat. A (B)) Extra"), "Song Extra");
    assert_eq!(sanitize_query("Song (Live"), "Song");
    assert_eq!(sanitize_query("Song (Live\nVersion"), "Song");
    assert_eq!(sanitize_query("Song) Name"), "Song Name");

    let inputs = [
        "A  (x)  B",
        "(Intro) Song",
        "Song\t(Demo)\t\tTake",
        "Nested ((deep) annotation) end",
        "Multi (line\nannotation\n",
    ];
    for input in inputs {
        let output = sanitize_query(input);
        assert!(!output.contains('(') && !output.contains(')'), "{}", output);
        assert!(!output.contains("  "), "{:?}", output);
        assert!(!output.contains('\t'), "{:?}", output);
    }
}

#[test]
fn test_sanitize_query_keeps_text_before_first_hyphen() {
    assert_eq!(sanitize_query("Artist - Song"), "Artist");
    assert_eq!(sanitize_query("Jay-Z - Song"), "Jay");
    assert_eq!(sanitize_query("  leading -"), "leading");
    assert_eq!(sanitize_query("- starts with hyphen"), "");
}

#[test]
fn test_sanitize_query_edge_cases() {
    assert_eq!(sanitize_query(""), "");
    assert_eq!(sanitize_query("   "), "");
    assert_eq!(sanitize_query("(only annotation)"), "");
    assert_eq!(sanitize_query("Plain Title"), "Plain Title");
}

#[test]
fn test_parse_release_date() {
    assert_eq!(
        parse_release_date("2017-01-06"),
        NaiveDate::from_ymd_opt(2017, 1, 6)
    );
    assert_eq!(parse_release_date("2017"), None);
    assert_eq!(parse_release_date("2017-01"), None);
    assert_eq!(parse_release_date(""), None);
    assert_eq!(parse_release_date("not a date"), None);
}

#[test]
fn test_duration_filter_scenario() {
    let songs = vec![
        create_test_song("a", "A", "X", 150, None),
        create_test_song("b", "B", "X", 200, None),
        create_test_song("c", "C", "X", 260, None),
    ];
    let filters = SearchFilters {
        min_duration: 180,
        max_duration: 240,
        ..Default::default()
    };

    let filtered = apply_filters(songs, &filters);
    assert_eq!(ids(&filtered), vec!["b"]);
}

#[test]
fn test_duration_filter_bounds_are_inclusive_and_zero_is_unbounded() {
    let songs = vec![
        create_test_song("a", "A", "X", 180, None),
        create_test_song("b", "B", "X", 240, None),
        create_test_song("c", "C", "X", 600, None),
    ];

    let only_min = SearchFilters {
        min_duration: 180,
        ..Default::default()
    };
    assert_eq!(ids(&apply_filters(songs.clone(), &only_min)), vec!["a", "b", "c"]);

    let only_max = SearchFilters {
        max_duration: 240,
        ..Default::default()
    };
    assert_eq!(ids(&apply_filters(songs, &only_max)), vec!["a", "b"]);
}

#[test]
fn test_unknown_attributes_pass_filters() {
    let mut unknown = Song::new("u", "Unknown", "X");
    unknown.duration_ms = None;
    unknown.release_date = None;

    let filters = SearchFilters {
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
        min_duration: 100,
        max_duration: 200,
        ..Default::default()
    };

    let filtered = apply_filters(vec![unknown], &filters);
    assert_eq!(ids(&filtered), vec!["u"]);
}

#[test]
fn test_date_filter_is_inclusive() {
    let songs = vec![
        create_test_song("before", "A", "X", 200, Some("2019-12-31")),
        create_test_song("start", "B", "X", 200, Some("2020-01-01")),
        create_test_song("end", "C", "X", 200, Some("2020-12-31")),
        create_test_song("after", "D", "X", 200, Some("2021-01-01")),
    ];
    let filters = SearchFilters {
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
        ..Default::default()
    };

    assert_eq!(ids(&apply_filters(songs, &filters)), vec!["start", "end"]);
}

#[test]
fn test_empty_date_range_yields_no_songs() {
    let songs = vec![create_test_song("a", "A", "X", 200, Some("2020-06-01"))];
    let filters = SearchFilters {
        start_date: NaiveDate::from_ymd_opt(2021, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        ..Default::default()
    };

    assert!(apply_filters(songs, &filters).is_empty());
}

#[test]
fn test_sort_by_title_and_artist() {
    let mut songs = vec![
        create_test_song("1", "Bravo", "Zed", 200, None),
        create_test_song("2", "Alpha", "Yan", 200, None),
        create_test_song("3", "Charlie", "Xia", 200, None),
    ];

    sort_songs(&mut songs, SortKey::Title, SortOrder::Asc);
    assert_eq!(ids(&songs), vec!["2", "1", "3"]);

    sort_songs(&mut songs, SortKey::Artist, SortOrder::Asc);
    assert_eq!(ids(&songs), vec!["3", "2", "1"]);

    sort_songs(&mut songs, SortKey::Title, SortOrder::Desc);
    assert_eq!(ids(&songs), vec!["3", "1", "2"]);
}

#[test]
fn test_sort_by_date_puts_unknown_first() {
    let mut songs = vec![
        create_test_song("new", "A", "X", 200, Some("2022-05-01")),
        create_test_song("unknown", "B", "X", 200, None),
        create_test_song("old", "C", "X", 200, Some("1999-05-01")),
    ];

    sort_songs(&mut songs, SortKey::Date, SortOrder::Asc);
    assert_eq!(ids(&songs), vec!["unknown", "old", "new"]);

    sort_songs(&mut songs, SortKey::Date, SortOrder::Desc);
    assert_eq!(ids(&songs), vec!["new", "old", "unknown"]);
}

#[test]
fn test_sort_is_stable_and_idempotent() {
    let songs = vec![
        create_test_song("1", "Same", "B", 200, None),
        create_test_song("2", "Other", "A", 200, None),
        create_test_song("3", "Same", "C", 200, None),
        create_test_song("4", "Same", "A", 200, None),
    ];

    for order in [SortOrder::Asc, SortOrder::Desc] {
        let mut once = songs.clone();
        sort_songs(&mut once, SortKey::Title, order);

        // equal titles keep their original relative order
        let same: Vec<&str> = once
            .iter()
            .filter(|s| s.title == "Same")
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(same, vec!["1", "3", "4"]);

        let mut twice = once.clone();
        sort_songs(&mut twice, SortKey::Title, order);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_no_sort_key_keeps_provider_order() {
    let songs = vec![
        create_test_song("z", "Zulu", "X", 200, None),
        create_test_song("a", "Alpha", "X", 200, None),
    ];
    let filtered = apply_filters(songs, &SearchFilters::default());
    assert_eq!(ids(&filtered), vec!["z", "a"]);
}

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(10), 1);
    assert_eq!(total_pages(11), 2);
    assert_eq!(total_pages(23), 3);

    for total in 1..=200usize {
        assert_eq!(total_pages(total), (total + 9) / 10);
    }
}

#[test]
fn test_paginate_scenario() {
    let items: Vec<usize> = (0..23).collect();

    let (page, total) = paginate(&items, 3);
    assert_eq!(total, 23);
    assert_eq!(page, &[20, 21, 22]);
}

#[test]
fn test_paginate_pages_reconstruct_list() {
    for len in [0usize, 1, 9, 10, 11, 23, 50] {
        let items: Vec<usize> = (0..len).collect();
        let mut rebuilt = Vec::new();

        for page in 1..=total_pages(len) {
            let (slice, total) = paginate(&items, page);
            assert_eq!(total, len);
            assert!(slice.len() <= PAGE_SIZE);
            rebuilt.extend_from_slice(slice);
        }

        assert_eq!(rebuilt, items);
    }
}

#[test]
fn test_paginate_out_of_range_and_zero() {
    let items: Vec<usize> = (0..5).collect();

    let (page, total) = paginate(&items, 2);
    assert!(page.is_empty());
    assert_eq!(total, 5);

    let (page, _) = paginate(&items, 0);
    assert_eq!(page, &[0, 1, 2, 3, 4]);

    let (page, _) = paginate(&items, usize::MAX);
    assert!(page.is_empty());
}

#[test]
fn test_truncate_lyrics() {
    let short = "la la la";
    assert_eq!(truncate_lyrics(short), short);

    let exact = "a".repeat(MAX_LYRICS_CHARS);
    assert_eq!(truncate_lyrics(&exact), exact);

    let long = "é".repeat(MAX_LYRICS_CHARS + 10);
    let truncated = truncate_lyrics(&long);
    assert!(truncated.ends_with(LYRICS_TRUNCATION_MARKER));
    assert_eq!(
        truncated.chars().count(),
        MAX_LYRICS_CHARS + LYRICS_TRUNCATION_MARKER.chars().count()
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(233_713), "3:53");
    assert_eq!(format_duration(600_000), "10:00");
}

#[test]
fn test_parse_page() {
    assert_eq!(parse_page(None), Ok(1));
    assert_eq!(parse_page(Some("")), Ok(1));
    assert_eq!(parse_page(Some(" 4 ")), Ok(4));
    assert_eq!(
        parse_page(Some("0")),
        Err(ValidationError::InvalidParameter {
            name: "page",
            value: "0".to_string()
        })
    );
    assert!(parse_page(Some("two")).is_err());
    assert!(parse_page(Some("-1")).is_err());
}

#[test]
fn test_parse_filter_params() {
    assert_eq!(parse_date_param("startDate", None), Ok(None));
    assert_eq!(parse_date_param("startDate", Some("")), Ok(None));
    assert_eq!(
        parse_date_param("startDate", Some("2020-02-29")),
        Ok(NaiveDate::from_ymd_opt(2020, 2, 29))
    );
    assert!(parse_date_param("startDate", Some("2021-02-29")).is_err());
    assert!(parse_date_param("endDate", Some("02/03/2020")).is_err());

    assert_eq!(parse_duration_param("minDuration", None), Ok(0));
    assert_eq!(parse_duration_param("minDuration", Some("180")), Ok(180));
    assert!(parse_duration_param("maxDuration", Some("3:00")).is_err());
}

#[test]
fn test_same_id_ignores_case() {
    assert!(same_id("abc", "ABC"));
    assert!(same_id("4uLU6hMCjMI75M1A2tKUQC", "4ulu6hmcjmi75m1a2tkuqc"));
    assert!(!same_id("abc", "abd"));
}

#[test]
fn test_spotify_urls() {
    assert_eq!(
        spotify_track_url("4uLU6hMCjMI75M1A2tKUQC"),
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"
    );
    assert_eq!(
        spotify_search_url("Yellow", "Coldplay"),
        "https://open.spotify.com/search/Yellow%20Coldplay"
    );
}

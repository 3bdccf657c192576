use harmonify::error::ProviderError;
use harmonify::http::endpoint_url;

#[test]
fn test_endpoint_url_escapes_each_segment() {
    let url = endpoint_url("spotify", "http://127.0.0.1:9000/v1", &["tracks", "a/b?c#d"]).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:9000/v1/tracks/a%2Fb%3Fc%23d");
    assert_eq!(url.query(), None);

    let url = endpoint_url("lyrics.ovh", "http://127.0.0.1:9000/v1/", &["AC/DC", "Back In Black"]).unwrap();
    assert_eq!(url.path(), "/v1/AC%2FDC/Back%20In%20Black");
}

#[test]
fn test_endpoint_url_rejects_relative_segments() {
    for id in ["..", ".", ""] {
        assert!(matches!(
            endpoint_url("spotify", "http://127.0.0.1:9000/v1", &["tracks", id]),
            Err(ProviderError::InvalidRequest {
                provider: "spotify",
                ..
            })
        ));
    }
}

#[test]
fn test_endpoint_url_rejects_bad_base() {
    assert!(endpoint_url("genius", "not a url", &["songs", "1"]).is_err());
}

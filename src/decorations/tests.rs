use super::*;

const CONFETTI: &str = r#"{
    "v": "5.5.7",
    "fr": 30,
    "ip": 0,
    "op": 90,
    "w": 500,
    "h": 400,
    "nm": "confetti",
    "ddd": 0,
    "assets": [],
    "layers": []
}"#;

#[test]
fn parses_lottie_header() {
    let animation = Animation::parse(CONFETTI).unwrap();
    assert_eq!(animation.name, "confetti");
    assert_eq!(animation.frame_rate, 30.0);
    assert_eq!(animation.width, 500.0);
    assert_eq!(animation.height, 400.0);
    assert_eq!(animation.duration(), Duration::from_secs(3));
}

#[test]
fn name_is_optional() {
    let animation = Animation::parse(r#"{"fr": 60, "ip": 0, "op": 30, "w": 1, "h": 1}"#).unwrap();
    assert_eq!(animation.name, "");
    assert_eq!(animation.duration(), Duration::from_millis(500));
}

#[test]
fn rejects_malformed_body() {
    assert!(matches!(
        Animation::parse("<html>Not found</html>"),
        Err(FetchError::Malformed(_))
    ));
    assert!(matches!(
        Animation::parse(r#"{"nm": "missing frames"}"#),
        Err(FetchError::Malformed(_))
    ));
}

#[test]
fn degenerate_frame_rate_has_no_duration() {
    let animation = Animation::parse(r#"{"fr": 0, "ip": 0, "op": 30, "w": 1, "h": 1}"#).unwrap();
    assert_eq!(animation.duration(), Duration::default());
}

#[test]
fn out_of_range_duration_is_ignored() {
    let huge = Animation::parse(r#"{"fr": 1, "ip": 0, "op": 1e20, "w": 1, "h": 1}"#).unwrap();
    assert_eq!(huge.duration(), Duration::default());

    let slow = Animation::parse(r#"{"fr": 1e-300, "ip": 0, "op": 30, "w": 1, "h": 1}"#).unwrap();
    assert_eq!(slow.duration(), Duration::default());
}

#[test]
fn unreachable_host_yields_no_animation() {
    let client = Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    assert_eq!(load_animation(&client, "http://127.0.0.1:9/missing.json"), None);
}

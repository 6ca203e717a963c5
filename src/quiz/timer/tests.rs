use super::*;

#[test]
fn expires_after_duration() {
    let mut countdown = Countdown::new(Duration::from_secs(10));
    assert!(!countdown.is_expired());
    assert!(!countdown.tick(Duration::from_secs(5)));
    assert!(!countdown.is_expired());
    assert!(countdown.tick(Duration::from_secs(5)));
    assert!(countdown.is_expired());
}

#[test]
fn fires_only_once() {
    let mut countdown = Countdown::new(Duration::from_secs(1));
    assert!(countdown.tick(Duration::from_secs(2)));
    for _ in 0..10 {
        assert!(!countdown.tick(Duration::from_secs(1)));
    }
}

#[test]
fn cancelled_countdown_never_fires() {
    let mut countdown = Countdown::new(Duration::from_secs(1));
    countdown.cancel();
    assert!(!countdown.tick(Duration::from_secs(5)));
    assert!(!countdown.is_expired());
    assert_eq!(countdown.remaining(), Duration::from_secs(1));
}

#[test]
fn reports_remaining_time() {
    let mut countdown = Countdown::new(Duration::from_secs(20));
    assert_eq!(countdown.remaining_seconds(), 20);
    assert_eq!(countdown.fraction(), 1.0);

    countdown.tick(Duration::from_millis(500));
    assert_eq!(countdown.remaining_seconds(), 20);

    countdown.tick(Duration::from_millis(500));
    assert_eq!(countdown.remaining_seconds(), 19);

    countdown.tick(Duration::from_secs(9));
    assert_eq!(countdown.remaining(), Duration::from_secs(10));
    assert!((countdown.fraction() - 0.5).abs() < 1e-6);

    countdown.tick(Duration::from_secs(30));
    assert_eq!(countdown.remaining(), Duration::default());
    assert_eq!(countdown.remaining_seconds(), 0);
    assert_eq!(countdown.fraction(), 0.0);
}

#[test]
fn zero_limit_expires_on_first_tick() {
    let mut countdown = Countdown::new(Duration::default());
    assert_eq!(countdown.fraction(), 0.0);
    assert!(countdown.tick(Duration::default()));
}

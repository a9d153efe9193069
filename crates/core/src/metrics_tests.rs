use super::*;
use chrono::Duration;

#[test]
fn test_turnaround_below_one_day_is_hours() {
    assert_eq!(
        Turnaround::from_average_millis(5.5 * MILLIS_PER_HOUR),
        Turnaround::Hours(5)
    );
    assert_eq!(
        Turnaround::from_average_millis(23.99 * MILLIS_PER_HOUR),
        Turnaround::Hours(23)
    );
}

#[test]
fn test_turnaround_of_at_least_one_day_is_days() {
    assert_eq!(
        Turnaround::from_average_millis(24.0 * MILLIS_PER_HOUR),
        Turnaround::Days(1)
    );
    assert_eq!(
        Turnaround::from_average_millis(71.0 * MILLIS_PER_HOUR),
        Turnaround::Days(2)
    );
}

#[test]
fn test_turnaround_average_of_nothing_is_not_available() {
    assert_eq!(
        Turnaround::average(Vec::<Duration>::new()),
        Turnaround::NotAvailable
    );
}

#[test]
fn test_turnaround_average() {
    let durations = vec![Duration::hours(10), Duration::hours(40)];

    // (10 + 40) / 2 = 25 hours
    assert_eq!(Turnaround::average(durations), Turnaround::Days(1));
}

#[test]
fn test_turnaround_display() {
    assert_eq!(Turnaround::NotAvailable.to_string(), "N/A");
    assert_eq!(Turnaround::Hours(7).to_string(), "7h");
    assert_eq!(Turnaround::Days(12).to_string(), "12d");
}

#[test]
fn test_turnaround_parse() {
    assert_eq!("N/A".parse::<Turnaround>().unwrap(), Turnaround::NotAvailable);
    assert_eq!("3h".parse::<Turnaround>().unwrap(), Turnaround::Hours(3));
    assert_eq!("4d".parse::<Turnaround>().unwrap(), Turnaround::Days(4));
    assert!("4w".parse::<Turnaround>().is_err());
    assert!("xh".parse::<Turnaround>().is_err());
}

#[test]
fn test_turnaround_serializes_as_string() {
    let json = serde_json::to_string(&vec![Turnaround::Hours(2), Turnaround::NotAvailable])
        .expect("Failed to serialize");
    assert_eq!(json, r#"["2h","N/A"]"#);

    let parsed: Vec<Turnaround> = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(parsed, vec![Turnaround::Hours(2), Turnaround::NotAvailable]);
}

#[test]
fn test_round_to_two_decimals() {
    assert_eq!(round_to_two_decimals(66.666666), 66.67);
    assert_eq!(round_to_two_decimals(33.333333), 33.33);
    assert_eq!(round_to_two_decimals(50.0), 50.0);
}

#[test]
fn test_rate() {
    assert_eq!(rate(0, 0), 0.0);
    assert_eq!(rate(1, 3), 33.33);
    assert_eq!(rate(2, 3), 66.67);
    assert_eq!(rate(4, 4), 100.0);
}

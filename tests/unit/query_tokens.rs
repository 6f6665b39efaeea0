//! Unit tests for interval/period token construction

use market_data_exporter::query::{
    IntervalSpec, IntervalUnit, PeriodSpec, PeriodUnit, QueryError,
};

#[test]
fn test_interval_tokens_decode_back_to_inputs() {
    let units = [
        (IntervalUnit::Minutes, "m"),
        (IntervalUnit::Hours, "h"),
        (IntervalUnit::Days, "d"),
    ];

    for (unit, code) in units {
        for amount in [1i64, 5, 15, 60, 90, 1440] {
            let token = IntervalSpec::new(Some(amount), unit).unwrap().token();

            assert!(token.ends_with(code), "token {token} should end with {code}");
            let digits = &token[..token.len() - code.len()];
            assert!(
                !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
                "token {token} should be digits followed by {code}"
            );
            assert_eq!(digits.parse::<i64>().unwrap(), amount);
        }
    }
}

#[test]
fn test_period_tokens_decode_back_to_inputs() {
    let units = [
        (PeriodUnit::Days, "d"),
        (PeriodUnit::Months, "mo"),
        (PeriodUnit::Years, "y"),
    ];

    for (unit, code) in units {
        for amount in [1i64, 3, 7, 10] {
            let token = PeriodSpec::new(Some(amount), unit).unwrap().token();

            assert!(token.ends_with(code), "token {token} should end with {code}");
            let digits = &token[..token.len() - code.len()];
            assert!(
                !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
                "token {token} should be digits followed by {code}"
            );
            assert_eq!(digits.parse::<i64>().unwrap(), amount);
        }
    }
}

#[test]
fn test_sentinel_periods_equal_unit_literal() {
    for amount in [None, Some(1), Some(99), Some(-5)] {
        assert_eq!(PeriodSpec::new(amount, PeriodUnit::Ytd).unwrap().token(), "ytd");
        assert_eq!(PeriodSpec::new(amount, PeriodUnit::Max).unwrap().token(), "max");
    }
}

#[test]
fn test_non_positive_amounts_are_rejected_everywhere() {
    for amount in [Some(0i64), Some(-1), None] {
        assert!(matches!(
            IntervalSpec::new(amount, IntervalUnit::Minutes),
            Err(QueryError::InvalidAmount(_))
        ));
        assert!(matches!(
            IntervalSpec::new(amount, IntervalUnit::Hours),
            Err(QueryError::InvalidAmount(_))
        ));
        assert!(matches!(
            IntervalSpec::new(amount, IntervalUnit::Days),
            Err(QueryError::InvalidAmount(_))
        ));
        assert!(matches!(
            PeriodSpec::new(amount, PeriodUnit::Days),
            Err(QueryError::InvalidAmount(_))
        ));
        assert!(matches!(
            PeriodSpec::new(amount, PeriodUnit::Months),
            Err(QueryError::InvalidAmount(_))
        ));
        assert!(matches!(
            PeriodSpec::new(amount, PeriodUnit::Years),
            Err(QueryError::InvalidAmount(_))
        ));
    }
}

#[test]
fn test_spec_display_matches_token() {
    let interval = IntervalSpec::new(Some(15), IntervalUnit::Minutes).unwrap();
    assert_eq!(interval.to_string(), interval.token());

    let period = PeriodSpec::new(Some(3), PeriodUnit::Months).unwrap();
    assert_eq!(period.to_string(), "3mo");
}

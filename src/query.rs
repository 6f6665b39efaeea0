//! Interval and period parameter normalization
//!
//! Maps user-facing (amount, unit) pairs into the compact token strings the
//! data provider expects: `5m` for five-minute sampling, `7d` for a
//! seven-day lookback, or the sentinel lookbacks `ytd` and `max`.
//!
//! Specs are pure immutable values: built fresh per submission, validated on
//! construction, and discarded after the request is issued. Validation
//! failures are reported to the caller before anything reaches the network.

use std::fmt;
use std::str::FromStr;

/// Query parameter errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Amount missing, zero, or negative
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Unit not recognized for this parameter
    #[error("invalid unit: {0}")]
    InvalidUnit(String),
}

/// Result type for query parameter construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Sampling granularity units accepted by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    /// Minute bars
    Minutes,
    /// Hour bars
    Hours,
    /// Day bars
    Days,
}

impl IntervalUnit {
    /// Provider code appended to the amount.
    fn code(self) -> &'static str {
        match self {
            IntervalUnit::Minutes => "m",
            IntervalUnit::Hours => "h",
            IntervalUnit::Days => "d",
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntervalUnit::Minutes => "minutes",
            IntervalUnit::Hours => "hours",
            IntervalUnit::Days => "days",
        };
        write!(f, "{s}")
    }
}

impl FromStr for IntervalUnit {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minutes" => Ok(IntervalUnit::Minutes),
            "hours" => Ok(IntervalUnit::Hours),
            "days" => Ok(IntervalUnit::Days),
            _ => Err(QueryError::InvalidUnit(s.to_string())),
        }
    }
}

/// Lookback span units accepted by the provider.
///
/// `Ytd` and `Max` are sentinels: the provider interprets them directly and
/// no amount is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    /// Day lookback
    Days,
    /// Month lookback
    Months,
    /// Year lookback
    Years,
    /// Year-to-date sentinel
    Ytd,
    /// Full available history sentinel
    Max,
}

impl PeriodUnit {
    /// Provider code appended to the amount, or the sentinel literal.
    fn code(self) -> &'static str {
        match self {
            PeriodUnit::Days => "d",
            PeriodUnit::Months => "mo",
            PeriodUnit::Years => "y",
            PeriodUnit::Ytd => "ytd",
            PeriodUnit::Max => "max",
        }
    }

    /// Whether this unit stands alone without an amount.
    pub fn is_sentinel(self) -> bool {
        matches!(self, PeriodUnit::Ytd | PeriodUnit::Max)
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodUnit::Days => "days",
            PeriodUnit::Months => "months",
            PeriodUnit::Years => "years",
            PeriodUnit::Ytd => "ytd",
            PeriodUnit::Max => "max",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PeriodUnit {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "days" => Ok(PeriodUnit::Days),
            "months" => Ok(PeriodUnit::Months),
            "years" => Ok(PeriodUnit::Years),
            "ytd" => Ok(PeriodUnit::Ytd),
            "max" => Ok(PeriodUnit::Max),
            _ => Err(QueryError::InvalidUnit(s.to_string())),
        }
    }
}

/// Sampling granularity for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSpec {
    amount: i64,
    unit: IntervalUnit,
}

impl IntervalSpec {
    /// Validate and build an interval spec.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidAmount`] if the amount is missing, zero,
    /// or negative.
    pub fn new(amount: Option<i64>, unit: IntervalUnit) -> QueryResult<Self> {
        let amount = validate_amount(amount)?;
        Ok(Self { amount, unit })
    }

    /// Provider token, e.g. `5m`, `1h`, `2d`.
    pub fn token(&self) -> String {
        format!("{}{}", self.amount, self.unit.code())
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Lookback span for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpec {
    amount: Option<i64>,
    unit: PeriodUnit,
}

impl PeriodSpec {
    /// Validate and build a period spec.
    ///
    /// For the sentinel units `ytd` and `max` the amount is ignored entirely;
    /// passing `None` is fine. For everything else the amount must be a
    /// positive integer.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidAmount`] if a non-sentinel unit has a
    /// missing, zero, or negative amount.
    pub fn new(amount: Option<i64>, unit: PeriodUnit) -> QueryResult<Self> {
        if unit.is_sentinel() {
            return Ok(Self { amount: None, unit });
        }
        let amount = validate_amount(amount)?;
        Ok(Self {
            amount: Some(amount),
            unit,
        })
    }

    /// Provider token, e.g. `7d`, `3mo`, `1y`, `ytd`, `max`.
    pub fn token(&self) -> String {
        match self.amount {
            Some(amount) => format!("{}{}", amount, self.unit.code()),
            None => self.unit.code().to_string(),
        }
    }
}

impl fmt::Display for PeriodSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

fn validate_amount(amount: Option<i64>) -> QueryResult<i64> {
    match amount {
        None => Err(QueryError::InvalidAmount("amount is required".to_string())),
        Some(n) if n <= 0 => Err(QueryError::InvalidAmount(n.to_string())),
        Some(n) => Ok(n),
    }
}

//! Membership period arithmetic: expiry dates, renewal start dates, status.

use chrono::Months;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Date;

/// A membership expiring within this many days counts as "expiring soon".
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// Lifecycle state of a membership relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl MembershipStatus {
    /// Classify a membership with the given expiry date as of `today`.
    ///
    /// The expiry date itself is the last active day.
    pub fn as_of(expiry: Date, today: Date) -> Self {
        let days_left = (expiry - today).num_days();
        if days_left < 0 {
            Self::Expired
        } else if days_left <= EXPIRING_SOON_DAYS {
            Self::ExpiringSoon
        } else {
            Self::Active
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::ExpiringSoon => "expiring_soon",
            Self::Expired => "expired",
        }
    }
}

/// Add `months` calendar months to `start`, clamping to the end of the month.
///
/// A zero-month period (unknown plan) expires on the start date.
pub fn expiry_date(start: Date, months: u32) -> Result<Date, CoreError> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| CoreError::Validation(format!("{months} months from {start} is out of range")))
}

/// The day a renewal period begins.
///
/// Renewing before expiry extends from the current expiry date so no paid
/// days are lost; renewing a lapsed membership starts from `today`.
pub fn renewal_start(current_expiry: Option<Date>, today: Date) -> Date {
    match current_expiry {
        Some(expiry) if expiry > today => expiry,
        _ => today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn expiry_adds_calendar_months() {
        assert_eq!(expiry_date(d(2024, 1, 15), 1).unwrap(), d(2024, 2, 15));
        assert_eq!(expiry_date(d(2024, 1, 15), 14).unwrap(), d(2025, 3, 15));
    }

    #[test]
    fn expiry_clamps_to_month_end() {
        assert_eq!(expiry_date(d(2024, 1, 31), 1).unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn zero_months_expires_on_start() {
        assert_eq!(expiry_date(d(2024, 6, 1), 0).unwrap(), d(2024, 6, 1));
    }

    #[test]
    fn expiry_out_of_range_is_validation_error() {
        assert_matches!(
            expiry_date(Date::MAX, 1),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn early_renewal_extends_from_expiry() {
        let today = d(2024, 3, 1);
        assert_eq!(renewal_start(Some(d(2024, 3, 10)), today), d(2024, 3, 10));
    }

    #[test]
    fn lapsed_renewal_starts_today() {
        let today = d(2024, 3, 1);
        assert_eq!(renewal_start(Some(d(2024, 2, 1)), today), today);
        assert_eq!(renewal_start(Some(today), today), today);
        assert_eq!(renewal_start(None, today), today);
    }

    #[test]
    fn status_boundaries() {
        let today = d(2024, 3, 1);
        assert_eq!(MembershipStatus::as_of(d(2024, 2, 29), today), MembershipStatus::Expired);
        assert_eq!(MembershipStatus::as_of(today, today), MembershipStatus::ExpiringSoon);
        assert_eq!(MembershipStatus::as_of(d(2024, 3, 8), today), MembershipStatus::ExpiringSoon);
        assert_eq!(MembershipStatus::as_of(d(2024, 3, 9), today), MembershipStatus::Active);
        assert_eq!(MembershipStatus::Active.as_str(), "active");
    }
}

//! Aggregates for the dashboard.

use chrono::{Datelike, Duration, Months};
use gym_core::membership::EXPIRING_SOON_DAYS;
use gym_core::types::Date;
use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

/// Lead statuses that no longer count as open.
const CLOSED_LEAD_STATUSES: &[&str] = &["converted", "lost"];

/// Read-only dashboard queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute every dashboard counter as of `today`.
    ///
    /// Month figures cover the calendar month containing `today`.
    /// Attendance is bucketed by the UTC date of the check-in.
    pub async fn stats(pool: &PgPool, today: Date) -> Result<DashboardStats, sqlx::Error> {
        let month_start = today.with_day(1).unwrap_or(today);
        let next_month = month_start
            .checked_add_months(Months::new(1))
            .unwrap_or(Date::MAX);
        let soon = today + Duration::days(EXPIRING_SOON_DAYS);
        let closed: Vec<String> = CLOSED_LEAD_STATUSES.iter().map(|s| s.to_string()).collect();

        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM members) AS total_members,
                (SELECT COUNT(*) FROM members
                  WHERE expiry_date IS NULL OR expiry_date >= $1) AS active_members,
                (SELECT COUNT(*) FROM members
                  WHERE expiry_date BETWEEN $1 AND $2) AS expiring_soon,
                (SELECT COUNT(*) FROM leads
                  WHERE status <> ALL($3)) AS open_leads,
                (SELECT COALESCE(SUM(amount), 0) FROM transactions
                  WHERE paid_on >= $4 AND paid_on < $5) AS revenue_this_month,
                (SELECT COALESCE(SUM(amount), 0) FROM expenses
                  WHERE expense_date >= $4 AND expense_date < $5) AS expenses_this_month,
                (SELECT COUNT(*) FROM attendance
                  WHERE (check_in AT TIME ZONE 'UTC')::date = $1) AS attendance_today",
        )
        .bind(today)
        .bind(soon)
        .bind(&closed)
        .bind(month_start)
        .bind(next_month)
        .fetch_one(pool)
        .await
    }
}

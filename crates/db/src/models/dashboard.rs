//! Dashboard counters.

use serde::Serialize;
use sqlx::FromRow;

/// Headline figures shown on the back-office landing page.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_members: i64,
    /// Members whose expiry date is today or later, or unset.
    pub active_members: i64,
    /// Members expiring between today and the "expiring soon" horizon.
    pub expiring_soon: i64,
    /// Leads not yet converted or lost.
    pub open_leads: i64,
    pub revenue_this_month: f64,
    pub expenses_this_month: f64,
    pub attendance_today: i64,
}

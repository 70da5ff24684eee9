//! Integration tests for the dashboard aggregates.

use chrono::{NaiveDate, TimeZone, Utc};
use gym_db::collection::CollectionRepo;
use gym_db::models::attendance::{Attendance, SaveAttendance};
use gym_db::models::expense::{Expense, SaveExpense};
use gym_db::models::lead::{Lead, SaveLead};
use gym_db::models::member::{Member, SaveMember};
use gym_db::models::transaction::{SaveTransaction, Transaction};
use gym_db::repositories::DashboardRepo;
use sqlx::PgPool;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn member_expiring(name: &str, expiry: NaiveDate) -> SaveMember {
    SaveMember {
        first_name: name.to_string(),
        last_name: None,
        email: None,
        phone: "9000000002".to_string(),
        gender: None,
        date_of_birth: None,
        address: None,
        plan: "Monthly".to_string(),
        discount: 0.0,
        tax_percent: 0.0,
        joining_date: date(2023, 1, 1),
        expiry_date: Some(expiry),
        trainer_id: None,
        status: None,
    }
}

fn lead(name: &str, status: &str) -> SaveLead {
    SaveLead {
        name: name.to_string(),
        email: None,
        phone: None,
        source: Some("walk-in".to_string()),
        interested_plan: None,
        follow_up_date: None,
        status: Some(status.to_string()),
        notes: None,
    }
}

fn payment(amount: f64, paid_on: NaiveDate) -> SaveTransaction {
    SaveTransaction {
        member_id: None,
        member_name: "Walk-in".to_string(),
        plan: "Monthly".to_string(),
        amount,
        discount: 0.0,
        tax_percent: 0.0,
        payment_method: None,
        paid_on,
    }
}

fn expense(amount: f64, on: NaiveDate) -> SaveExpense {
    SaveExpense {
        title: "Electricity".to_string(),
        category: Some("utilities".to_string()),
        amount,
        expense_date: on,
        notes: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_database_is_all_zero(pool: PgPool) {
    let stats = DashboardRepo::stats(&pool, date(2024, 3, 15)).await.unwrap();
    assert_eq!(stats.total_members, 0);
    assert_eq!(stats.revenue_this_month, 0.0);
    assert_eq!(stats.attendance_today, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_counts_and_month_totals(pool: PgPool) {
    let today = date(2024, 3, 15);

    for (name, expiry) in [
        ("Lapsed", date(2024, 3, 1)),
        ("Soon", date(2024, 3, 20)),
        ("Today", today),
        ("Later", date(2024, 6, 1)),
    ] {
        CollectionRepo::<Member>::create(&pool, &member_expiring(name, expiry))
            .await
            .unwrap();
    }

    for (name, status) in [("A", "new"), ("B", "contacted"), ("C", "converted"), ("D", "lost")] {
        CollectionRepo::<Lead>::create(&pool, &lead(name, status)).await.unwrap();
    }

    for (amount, on) in [
        (3500.0, date(2024, 3, 1)),
        (1200.5, date(2024, 3, 31)),
        (9999.0, date(2024, 2, 29)),
        (9999.0, date(2024, 4, 1)),
    ] {
        CollectionRepo::<Transaction>::create(&pool, &payment(amount, on))
            .await
            .unwrap();
    }

    CollectionRepo::<Expense>::create(&pool, &expense(800.0, date(2024, 3, 10)))
        .await
        .unwrap();
    CollectionRepo::<Expense>::create(&pool, &expense(500.0, date(2024, 2, 10)))
        .await
        .unwrap();

    for check_in in [
        Utc.with_ymd_and_hms(2024, 3, 15, 6, 30, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 15, 19, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 14, 19, 0, 0).unwrap(),
    ] {
        CollectionRepo::<Attendance>::create(
            &pool,
            &SaveAttendance {
                member_id: None,
                member_name: "Visitor".to_string(),
                check_in,
                check_out: None,
            },
        )
        .await
        .unwrap();
    }

    let stats = DashboardRepo::stats(&pool, today).await.unwrap();
    assert_eq!(stats.total_members, 4);
    assert_eq!(stats.active_members, 3);
    assert_eq!(stats.expiring_soon, 2);
    assert_eq!(stats.open_leads, 2);
    assert_eq!(stats.revenue_this_month, 4700.5);
    assert_eq!(stats.expenses_this_month, 800.0);
    assert_eq!(stats.attendance_today, 2);
}

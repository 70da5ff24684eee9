//! Integration tests for the generic collection repository.
//!
//! Exercises `CollectionRepo<C>` against a real database for a few
//! representative collections: create, read, full replace, delete, and
//! listing order.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use gym_db::collection::CollectionRepo;
use gym_db::models::event::{Event, SaveEvent};
use gym_db::models::member::{Member, SaveMember};
use gym_db::models::post::{Post, SavePost};
use gym_db::models::staff::{SaveStaff, Staff};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_post(title: &str) -> SavePost {
    SavePost {
        title: title.to_string(),
        body: "Pool closed for maintenance".to_string(),
        author: Some("Front desk".to_string()),
    }
}

fn new_event(title: &str, on: NaiveDate) -> SaveEvent {
    SaveEvent {
        title: title.to_string(),
        description: None,
        event_date: on,
        location: Some("Studio A".to_string()),
    }
}

fn new_member(first_name: &str, plan: &str) -> SaveMember {
    SaveMember {
        first_name: first_name.to_string(),
        last_name: None,
        email: None,
        phone: "9000000000".to_string(),
        gender: None,
        date_of_birth: None,
        address: None,
        plan: plan.to_string(),
        discount: 500.0,
        tax_percent: 18.0,
        joining_date: date(2024, 1, 15),
        expiry_date: None,
        trainer_id: None,
        status: None,
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find(pool: PgPool) {
    let post = CollectionRepo::<Post>::create(&pool, &new_post("Notice"))
        .await
        .unwrap();
    assert!(post.id > 0);
    assert_eq!(post.title, "Notice");

    let found = CollectionRepo::<Post>::find_by_id(&pool, post.id)
        .await
        .unwrap()
        .expect("post should exist");
    assert_eq!(found.body, "Pool closed for maintenance");
    assert_eq!(found.author.as_deref(), Some("Front desk"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_overwrites_every_column(pool: PgPool) {
    let post = CollectionRepo::<Post>::create(&pool, &new_post("Draft"))
        .await
        .unwrap();

    let replacement = SavePost {
        title: "Final".to_string(),
        body: String::new(),
        author: None,
    };
    let updated = CollectionRepo::<Post>::replace(&pool, post.id, &replacement)
        .await
        .unwrap()
        .expect("post should exist");

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.body, "");
    assert_eq!(updated.author, None);
    assert!(updated.updated_at >= post.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_missing_returns_none(pool: PgPool) {
    let result = CollectionRepo::<Post>::replace(&pool, 999_999, &new_post("Ghost"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let post = CollectionRepo::<Post>::create(&pool, &new_post("Temporary"))
        .await
        .unwrap();

    assert!(CollectionRepo::<Post>::delete(&pool, post.id).await.unwrap());
    assert!(!CollectionRepo::<Post>::delete(&pool, post.id).await.unwrap());
    assert!(CollectionRepo::<Post>::find_by_id(&pool, post.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_follows_collection_order(pool: PgPool) {
    for (title, on) in [
        ("Spring open day", date(2024, 3, 1)),
        ("Summer bootcamp", date(2024, 6, 1)),
        ("New year run", date(2024, 1, 1)),
    ] {
        CollectionRepo::<Event>::create(&pool, &new_event(title, on))
            .await
            .unwrap();
    }

    let titles: Vec<String> = CollectionRepo::<Event>::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Summer bootcamp", "Spring open day", "New year run"]
    );
    assert_eq!(CollectionRepo::<Event>::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Members: derived billing columns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_billing_columns_are_derived(pool: PgPool) {
    let member = CollectionRepo::<Member>::create(&pool, &new_member("Asha", "Quaterly"))
        .await
        .unwrap();

    assert_eq!(member.months_paid, 3);
    assert_eq!(member.billing_amount, 7500.0);
    assert_eq!(member.pack_amount, 7500.0);
    assert_eq!(member.total_amount, 8260.0);
    assert_eq!(member.expiry_date, Some(date(2024, 4, 15)));
    assert_eq!(member.status, "active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_replace_recomputes_billing(pool: PgPool) {
    let member = CollectionRepo::<Member>::create(&pool, &new_member("Bilal", "Monthly"))
        .await
        .unwrap();
    assert_eq!(member.months_paid, 1);

    let mut changed = new_member("Bilal", "Annual");
    changed.discount = 1.0;
    changed.tax_percent = 0.0;
    let updated = CollectionRepo::<Member>::replace(&pool, member.id, &changed)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.months_paid, 12);
    // A discount of exactly 1 is below the threshold and not applied.
    assert_eq!(updated.discount, 0.0);
    assert_eq!(updated.total_amount, 18000.0);
    assert_eq!(updated.expiry_date, Some(date(2025, 1, 15)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_unknown_plan_has_zero_billing(pool: PgPool) {
    let member = CollectionRepo::<Member>::create(&pool, &new_member("Chitra", "Weekly"))
        .await
        .unwrap();

    assert_eq!(member.months_paid, 0);
    assert_eq!(member.billing_amount, 0.0);
    assert_eq!(member.expiry_date, Some(date(2024, 1, 15)));
}

// ---------------------------------------------------------------------------
// Foreign keys
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_trainer_unassigns_members(pool: PgPool) {
    let trainer = CollectionRepo::<Staff>::create(
        &pool,
        &SaveStaff {
            name: "Coach Dev".to_string(),
            email: None,
            phone: None,
            designation: Some("Trainer".to_string()),
            salary: 30000.0,
            joining_date: None,
            address: None,
        },
    )
    .await
    .unwrap();

    let mut input = new_member("Esha", "Monthly");
    input.trainer_id = Some(trainer.id);
    let member = CollectionRepo::<Member>::create(&pool, &input).await.unwrap();
    assert_eq!(member.trainer_id, Some(trainer.id));

    CollectionRepo::<Staff>::delete(&pool, trainer.id).await.unwrap();

    let member = CollectionRepo::<Member>::find_by_id(&pool, member.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(member.trainer_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_trainer_is_foreign_key_violation(pool: PgPool) {
    let mut input = new_member("Farah", "Monthly");
    input.trainer_id = Some(424_242);

    let err = CollectionRepo::<Member>::create(&pool, &input)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23503")
    );
}

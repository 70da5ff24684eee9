//! Member enrollment and renewal.
//!
//! Both operations write the member row and its billing transaction in one
//! database transaction, so a payment is never recorded without the
//! membership it paid for.

use gym_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::collection::{insert_sql, Collection};
use crate::models::member::{
    Member, Registration, RenewalReceipt, RenewalTerms, SaveMember, MEMBER_STATUS_ACTIVE,
};
use crate::models::renewal::{Renewal, SaveRenewal};
use crate::models::transaction::{SaveTransaction, Transaction};

/// Provides the multi-table member operations.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member and the transaction for their first payment.
    ///
    /// The transaction amount is the member's persisted total, so the two
    /// rows always agree.
    pub async fn register(
        pool: &PgPool,
        input: &SaveMember,
        payment_method: &str,
        paid_on: Date,
    ) -> Result<Registration, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let member_sql = insert_sql::<Member>();
        let member = Member::bind_input(input, sqlx::query_as::<_, Member>(&member_sql))
            .fetch_one(&mut *tx)
            .await?;

        let payment = SaveTransaction {
            member_id: Some(member.id),
            member_name: member.full_name(),
            plan: member.plan.clone(),
            amount: member.total_amount,
            discount: member.discount,
            tax_percent: member.tax_percent,
            payment_method: Some(payment_method.to_string()),
            paid_on,
        };
        let transaction_sql = insert_sql::<Transaction>();
        let transaction =
            Transaction::bind_input(&payment, sqlx::query_as::<_, Transaction>(&transaction_sql))
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(Registration {
            member,
            transaction,
        })
    }

    /// Apply a renewal to an existing member.
    ///
    /// Updates the member's plan, billing figures and expiry, then records
    /// the renewal and its transaction. Returns `None` if no member with the
    /// given `id` exists, in which case nothing is written.
    pub async fn renew(
        pool: &PgPool,
        member_id: DbId,
        terms: &RenewalTerms,
    ) -> Result<Option<RenewalReceipt>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let quote = &terms.quote;

        let update_sql = format!(
            "UPDATE members SET
                plan = $2,
                months_paid = $3,
                billing_amount = $4,
                pack_amount = $5,
                discount = $6,
                tax_percent = $7,
                total_amount = $8,
                expiry_date = $9,
                status = $10
             WHERE id = $1
             RETURNING {}",
            Member::COLUMNS
        );
        let member = sqlx::query_as::<_, Member>(&update_sql)
            .bind(member_id)
            .bind(&terms.plan)
            .bind(quote.months_paid as i32)
            .bind(quote.base_amount)
            .bind(quote.pack_amount)
            .bind(quote.discount)
            .bind(quote.tax_percent)
            .bind(quote.total_rounded())
            .bind(terms.expiry_date)
            .bind(MEMBER_STATUS_ACTIVE)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(member) = member else {
            return Ok(None);
        };

        let record = SaveRenewal {
            member_id: Some(member.id),
            plan: terms.plan.clone(),
            months_paid: quote.months_paid as i32,
            amount: quote.total_rounded(),
            discount: quote.discount,
            tax_percent: quote.tax_percent,
            renewed_on: terms.renewed_on,
            expiry_date: Some(terms.expiry_date),
        };
        let renewal_sql = insert_sql::<Renewal>();
        let renewal = Renewal::bind_input(&record, sqlx::query_as::<_, Renewal>(&renewal_sql))
            .fetch_one(&mut *tx)
            .await?;

        let payment = SaveTransaction {
            member_id: Some(member.id),
            member_name: member.full_name(),
            plan: terms.plan.clone(),
            amount: quote.total_rounded(),
            discount: quote.discount,
            tax_percent: quote.tax_percent,
            payment_method: Some(terms.payment_method.clone()),
            paid_on: terms.renewed_on,
        };
        let transaction_sql = insert_sql::<Transaction>();
        let transaction =
            Transaction::bind_input(&payment, sqlx::query_as::<_, Transaction>(&transaction_sql))
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(Some(RenewalReceipt {
            member,
            renewal,
            transaction,
        }))
    }
}

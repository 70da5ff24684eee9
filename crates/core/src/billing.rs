//! Membership plan table and billing quote calculation.
//!
//! A quote is derived from three form inputs: the selected plan, a discount
//! and a tax percentage. The two numeric inputs arrive as free-form strings
//! and never cause an error; anything unparseable contributes zero.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Plan table
// ---------------------------------------------------------------------------

/// A named membership tier with a fixed duration and price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plan {
    /// Stored identifier, reproduced verbatim in member and billing records.
    pub id: &'static str,
    /// Number of months the plan pays for.
    pub months: u32,
    /// Price of the plan.
    pub amount: f64,
}

/// Every plan the front desk can sell, in display order.
///
/// Existing billing records reference these ids and amounts, so entries must
/// never be edited in place. Add a new row instead.
pub const PLANS: &[Plan] = &[
    Plan { id: "Monthly", months: 1, amount: 3500.0 },
    Plan { id: "2 Months", months: 2, amount: 6000.0 },
    Plan { id: "Quaterly", months: 3, amount: 7500.0 },
    Plan { id: "4 Months", months: 4, amount: 10000.0 },
    Plan { id: "Half-yearly", months: 6, amount: 12000.0 },
    Plan { id: "6 + 1 Month", months: 7, amount: 12000.0 },
    Plan { id: "Annual", months: 12, amount: 18000.0 },
    Plan { id: "12 + 2 Months", months: 14, amount: 18000.0 },
];

/// Look up a plan by its exact identifier.
pub fn plan_terms(plan_id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == plan_id)
}

/// The full plan table.
pub fn known_plans() -> &'static [Plan] {
    PLANS
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// A discount is applied only when strictly greater than this value.
pub const DISCOUNT_THRESHOLD: f64 = 1.0;

/// Tax is applied only when the percentage is strictly greater than this value.
pub const TAX_THRESHOLD: f64 = 1.0;

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// The derived billing figures for one plan/discount/tax combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingQuote {
    pub months_paid: u32,
    pub base_amount: f64,
    pub pack_amount: f64,
    /// Discount actually applied (zero when below the threshold).
    pub discount: f64,
    /// Tax percentage actually applied (zero when below the threshold).
    pub tax_percent: f64,
    pub total_amount: f64,
}

impl BillingQuote {
    /// A quote with every figure at zero.
    pub fn zero() -> Self {
        Self {
            months_paid: 0,
            base_amount: 0.0,
            pack_amount: 0.0,
            discount: 0.0,
            tax_percent: 0.0,
            total_amount: 0.0,
        }
    }

    /// The total rendered with exactly two decimal places.
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total_amount)
    }

    /// The total rounded to cents, as persisted in member and transaction rows.
    pub fn total_rounded(&self) -> f64 {
        round_to_cents(self.total_amount)
    }

    /// Tax charged on the discounted base.
    pub fn tax_amount(&self) -> f64 {
        (self.base_amount - self.discount) * self.tax_percent / 100.0
    }
}

/// Compute a quote from raw form inputs.
///
/// Unparseable numbers contribute zero; see [`quote_for`] for the arithmetic.
pub fn compute_quote(plan_id: &str, discount: &str, tax_percent: &str) -> BillingQuote {
    quote_for(plan_id, parse_amount(discount), parse_amount(tax_percent))
}

/// Compute a quote from already-parsed numbers.
///
/// The total is always derived from scratch:
/// `total = base - discount`, then `total += total * tax / 100`.
/// Tax is therefore charged on the post-discount amount. A discount or tax
/// percentage at or below its threshold is treated as zero.
pub fn quote_for(plan_id: &str, discount: f64, tax_percent: f64) -> BillingQuote {
    let (months_paid, base_amount) = plan_terms(plan_id)
        .map(|plan| (plan.months, plan.amount))
        .unwrap_or((0, 0.0));
    let discount = applied(discount, DISCOUNT_THRESHOLD);
    let tax_percent = applied(tax_percent, TAX_THRESHOLD);

    let mut total_amount = base_amount - discount;
    total_amount += total_amount * tax_percent / 100.0;

    BillingQuote {
        months_paid,
        base_amount,
        pack_amount: base_amount,
        discount,
        tax_percent,
        total_amount,
    }
}

/// Parse a free-form numeric input. Blank, malformed or non-finite input is zero.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn applied(value: f64, threshold: f64) -> f64 {
    if value.is_finite() && value > threshold {
        value
    } else {
        0.0
    }
}

/// Round a monetary amount to two decimal places.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Billing section of the registration and renewal forms.
///
/// Holds the raw inputs as typed and the quote derived from them. Every
/// setter recomputes the quote synchronously from all three inputs.
#[derive(Debug, Clone)]
pub struct BillingForm {
    plan_id: String,
    discount: String,
    tax_percent: String,
    quote: BillingQuote,
}

impl Default for BillingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingForm {
    pub fn new() -> Self {
        Self {
            plan_id: String::new(),
            discount: String::new(),
            tax_percent: String::new(),
            quote: BillingQuote::zero(),
        }
    }

    pub fn set_plan(&mut self, plan_id: impl Into<String>) {
        self.plan_id = plan_id.into();
        self.recompute();
    }

    pub fn set_discount(&mut self, discount: impl Into<String>) {
        self.discount = discount.into();
        self.recompute();
    }

    pub fn set_tax_percent(&mut self, tax_percent: impl Into<String>) {
        self.tax_percent = tax_percent.into();
        self.recompute();
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn quote(&self) -> &BillingQuote {
        &self.quote
    }

    fn recompute(&mut self) {
        self.quote = compute_quote(&self.plan_id, &self.discount, &self.tax_percent);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

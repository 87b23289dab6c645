//! Points Calculator
//!
//! Scores a validated receipt. Every rule contributes an independent
//! sub-score; the receipt total is their sum:
//!
//! 1. One point per alphanumeric character in the retailer name
//! 2. 50 points if the total is a round dollar amount
//! 3. 25 points if the total is a multiple of 0.25
//! 4. 5 points for every two items
//! 5. 6 points if the purchase day is odd
//! 6. 10 points if the purchase hour is 14 or 15
//! 7. For each item whose trimmed description length is a multiple of 3,
//!    `ceil(price * 0.2)` points

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::ops::Range;

use crate::types::{LineItem, Receipt};

/// Bonus for a total with no cents
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// Bonus for a total that is a multiple of 0.25
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points per pair of line items
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Bonus for an odd purchase day
pub const ODD_DAY_POINTS: u64 = 6;
/// Bonus for a purchase inside [`AFTERNOON_HOURS`]
pub const AFTERNOON_POINTS: u64 = 10;
/// Purchase hours (half-open) that earn [`AFTERNOON_POINTS`]; minutes are ignored
pub const AFTERNOON_HOURS: Range<u32> = 14..16;

const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// Per-rule points for one receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
    pub item_descriptions: u64,
}

impl PointsBreakdown {
    /// Evaluate every rule against a receipt
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: round_dollar_points(receipt.total),
            quarter_multiple_total: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len()),
            odd_purchase_day: odd_day_points(receipt.purchase_day()),
            afternoon_purchase: afternoon_points(receipt.purchase_hour()),
            item_descriptions: receipt.items.iter().map(item_description_points).fold(0, u64::saturating_add),
        }
    }

    /// Sum of all rules
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.odd_purchase_day,
            self.afternoon_purchase,
            self.item_descriptions,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Compute the points for a validated receipt
pub fn compute_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

fn round_dollar_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> u64 {
    let cents = (total * Decimal::ONE_HUNDRED).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    if (cents % Decimal::from(25)).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(hour: u32) -> u64 {
    if AFTERNOON_HOURS.contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// Zero-length descriptions qualify: 0 is a multiple of 3.
fn item_description_points(item: &LineItem) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    (item.price * Decimal::new(2, 1))
        .ceil()
        .to_u64()
        .unwrap_or(u64::MAX)
}

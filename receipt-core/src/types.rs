//! Receipt Types
//!
//! Wire payloads as submitted by clients, the normalized receipt produced by
//! validation, and the stored score record.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============ Wire Payloads ============

/// Receipt payload as submitted by a client
///
/// Every field is optional at this stage so that a missing field surfaces as
/// a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    /// Purchase date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// Purchase time, `HH:MM` (24h)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItemPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<RawAmount>,
}

/// Line item as submitted by a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<RawAmount>,
}

/// Currency amount as it appears on the wire
///
/// Clients send amounts as strings (`"35.35"`); bare JSON numbers are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl RawAmount {
    /// Parse into an exact decimal, `None` if not a finite decimal number
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawAmount::Text(text) => parse_decimal(text.trim()),
            RawAmount::Number(number) => parse_decimal(&number.to_string()),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(text: &str) -> Self {
        RawAmount::Text(text.to_string())
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

// ============ Normalized Receipt ============

/// A receipt that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchased_at: NaiveDateTime,
    pub total: Decimal,
    pub items: Vec<LineItem>,
}

impl Receipt {
    /// Day of month of the purchase (1-31)
    pub fn purchase_day(&self) -> u32 {
        self.purchased_at.day()
    }

    /// Hour of the purchase (0-23)
    pub fn purchase_hour(&self) -> u32 {
        self.purchased_at.hour()
    }

    /// Minute of the purchase (0-59)
    pub fn purchase_minute(&self) -> u32 {
        self.purchased_at.minute()
    }
}

/// A validated line item
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub short_description: String,
    pub price: Decimal,
}

// ============ Score Records ============

/// Opaque receipt identifier
///
/// Callers must not infer structure from the string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ReceiptId> for String {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}

/// Points awarded to a processed receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_deserializes_camel_case() {
        let payload: ReceiptPayload = serde_json::from_value(json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }],
            "total": "1.25"
        }))
        .unwrap();

        assert_eq!(payload.retailer.as_deref(), Some("Target"));
        assert_eq!(payload.purchase_date.as_deref(), Some("2022-01-01"));
        assert_eq!(payload.purchase_time.as_deref(), Some("13:01"));
        let items = payload.items.unwrap();
        assert_eq!(items[0].short_description.as_deref(), Some("Pepsi - 12-oz"));
        assert_eq!(payload.total, Some(RawAmount::from("1.25")));
    }

    #[test]
    fn test_payload_missing_fields_are_none() {
        let payload: ReceiptPayload = serde_json::from_value(json!({ "retailer": "Target" })).unwrap();
        assert!(payload.items.is_none());
        assert!(payload.total.is_none());
    }

    #[test]
    fn test_raw_amount_text_and_number() {
        assert_eq!(RawAmount::from("35.35").to_decimal(), Some(Decimal::new(3535, 2)));
        assert_eq!(RawAmount::from(" 9.00 ").to_decimal(), Some(Decimal::new(900, 2)));
        assert_eq!(RawAmount::from("1e2").to_decimal(), Some(Decimal::new(100, 0)));

        let number: RawAmount = serde_json::from_value(json!(12.5)).unwrap();
        assert_eq!(number.to_decimal(), Some(Decimal::new(125, 1)));

        let integer: RawAmount = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(integer.to_decimal(), Some(Decimal::new(7, 0)));
    }

    #[test]
    fn test_raw_amount_rejects_non_numbers() {
        assert_eq!(RawAmount::from("abc").to_decimal(), None);
        assert_eq!(RawAmount::from("").to_decimal(), None);
        assert_eq!(RawAmount::from("NaN").to_decimal(), None);
        assert_eq!(RawAmount::from("inf").to_decimal(), None);
    }

    #[test]
    fn test_receipt_id_is_opaque_and_unique() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), a.as_str());
        assert_eq!(serde_json::to_value(&a).unwrap(), json!(a.as_str()));
    }
}

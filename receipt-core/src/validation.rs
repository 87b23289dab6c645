//! Receipt Validation
//!
//! Turns an untrusted [`ReceiptPayload`] into a [`Receipt`] the points
//! calculator can score without any failure path.
//!
//! # Rules
//!
//! 1. `retailer`, `purchaseDate`, `purchaseTime`, `items` and `total` are all required
//! 2. `items` holds at least one entry, each with `shortDescription` and `price`
//! 3. `total` is a decimal number and every `price` is a non-negative one
//! 4. `purchaseDate` is `year-month-day` and `purchaseTime` is `hour:minute`,
//!    both integer components, together forming a real calendar date and time
//!
//! Every violation maps to [`ReceiptError::InvalidInput`]; the reason string
//! is diagnostic only.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{ReceiptError, ReceiptResult};
use crate::types::{LineItem, LineItemPayload, RawAmount, Receipt, ReceiptPayload};

/// Fields every receipt payload must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["retailer", "purchaseDate", "purchaseTime", "items", "total"];

/// Decode a JSON body into a payload
pub fn parse_payload(body: &[u8]) -> ReceiptResult<ReceiptPayload> {
    serde_json::from_slice(body)
        .map_err(|e| ReceiptError::invalid(format!("malformed receipt JSON: {}", e)))
}

/// Decode and validate a JSON body in one step
pub fn validate_json(body: &[u8]) -> ReceiptResult<Receipt> {
    validate(parse_payload(body)?)
}

/// Validate a payload into a normalized receipt
pub fn validate(payload: ReceiptPayload) -> ReceiptResult<Receipt> {
    let ReceiptPayload {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    } = payload;

    let retailer = required(retailer, "retailer")?;
    let purchase_date = required(purchase_date, "purchaseDate")?;
    let purchase_time = required(purchase_time, "purchaseTime")?;
    let items = required(items, "items")?;
    let total = required(total, "total")?;

    if items.is_empty() {
        return Err(ReceiptError::invalid("items must contain at least one entry"));
    }

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ReceiptResult<Vec<_>>>()?;

    let total = parse_amount(&total, "total")?;
    let purchased_at = parse_purchase_datetime(&purchase_date, &purchase_time)?;

    Ok(Receipt {
        retailer,
        purchased_at,
        total,
        items,
    })
}

fn required<T>(value: Option<T>, field: &str) -> ReceiptResult<T> {
    value.ok_or_else(|| ReceiptError::invalid(format!("missing required field '{}'", field)))
}

fn validate_item(index: usize, item: LineItemPayload) -> ReceiptResult<LineItem> {
    let (short_description, price) = match (item.short_description, item.price) {
        (Some(description), Some(price)) => (description, price),
        _ => {
            return Err(ReceiptError::invalid(format!(
                "item {} requires both shortDescription and price",
                index
            )))
        }
    };

    let field = format!("items[{}].price", index);
    let price = parse_amount(&price, &field)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ReceiptError::invalid(format!("{} must not be negative", field)));
    }

    Ok(LineItem {
        short_description,
        price,
    })
}

fn parse_amount(raw: &RawAmount, field: &str) -> ReceiptResult<Decimal> {
    raw.to_decimal()
        .ok_or_else(|| ReceiptError::invalid(format!("{} is not a decimal number", field)))
}

/// Build the purchase timestamp from `purchaseDate` and `purchaseTime`
pub fn parse_purchase_datetime(date: &str, time: &str) -> ReceiptResult<NaiveDateTime> {
    let date_parts = split_integers(date, '-', 3, "purchaseDate")?;
    let time_parts = split_integers(time, ':', 2, "purchaseTime")?;

    let date = calendar_date(date_parts[0], date_parts[1], date_parts[2])
        .ok_or_else(|| ReceiptError::invalid(format!("purchaseDate '{}' is not a calendar date", date)))?;
    let time = clock_time(time_parts[0], time_parts[1])
        .ok_or_else(|| ReceiptError::invalid(format!("purchaseTime '{}' is not a time of day", time)))?;

    Ok(date.and_time(time))
}

fn split_integers(value: &str, separator: char, expected: usize, field: &str) -> ReceiptResult<Vec<i64>> {
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != expected {
        return Err(ReceiptError::invalid(format!(
            "{} must have {} '{}'-separated components, got '{}'",
            field, expected, separator, value
        )));
    }

    parts
        .iter()
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| ReceiptError::invalid(format!("{} component '{}' is not an integer", field, part)))
        })
        .collect()
}

fn calendar_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok().filter(|y| (1..=9999).contains(y))?;
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn clock_time(hour: i64, minute: i64) -> Option<NaiveTime> {
    let hour = u32::try_from(hour).ok()?;
    let minute = u32::try_from(minute).ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn valid_body() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Pepsi - 12-oz", "price": "1.25" },
                { "shortDescription": "Dasani", "price": "1.00" }
            ],
            "total": "2.25"
        })
    }

    fn validate_value(body: &Value) -> ReceiptResult<Receipt> {
        validate_json(&serde_json::to_vec(body).unwrap())
    }

    #[test]
    fn test_valid_receipt() {
        let receipt = validate_value(&valid_body()).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.total, Decimal::new(225, 2));
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[1].short_description, "Dasani");
        assert_eq!(receipt.items[1].price, Decimal::new(100, 2));
        assert_eq!(receipt.purchase_day(), 1);
        assert_eq!(receipt.purchase_hour(), 13);
        assert_eq!(receipt.purchase_minute(), 1);
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in REQUIRED_FIELDS {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let err = validate_value(&body).unwrap_err();
            assert!(err.is_invalid_input(), "missing {} should be invalid", field);
        }
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let mut body = valid_body();
        body["retailer"] = Value::Null;
        assert!(validate_value(&body).is_err());
    }

    #[test]
    fn test_non_object_payload_is_invalid() {
        assert!(validate_json(b"[1, 2, 3]").is_err());
        assert!(validate_json(b"\"receipt\"").is_err());
        assert!(validate_json(b"{not json").is_err());
        assert!(validate_json(b"").is_err());
    }

    #[test]
    fn test_wrong_field_types_are_invalid() {
        let mut body = valid_body();
        body["items"] = json!("Dasani");
        assert!(validate_value(&body).is_err());

        let mut body = valid_body();
        body["retailer"] = json!(42);
        assert!(validate_value(&body).is_err());
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut body = valid_body();
        body["items"] = json!([]);
        let err = validate_value(&body).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_item_missing_description_or_price() {
        let mut body = valid_body();
        body["items"] = json!([{ "price": "1.00" }]);
        assert!(validate_value(&body).is_err());

        let mut body = valid_body();
        body["items"] = json!([{ "shortDescription": "Dasani" }]);
        assert!(validate_value(&body).is_err());
    }

    #[test]
    fn test_non_numeric_total_rejected() {
        let mut body = valid_body();
        body["total"] = json!("twelve");
        assert!(validate_value(&body).is_err());
    }

    #[test]
    fn test_numeric_total_accepted() {
        let mut body = valid_body();
        body["total"] = json!(9);
        let receipt = validate_value(&body).unwrap();
        assert_eq!(receipt.total, Decimal::new(9, 0));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut body = valid_body();
        body["items"][0]["price"] = json!("free");
        assert!(validate_value(&body).is_err());
    }

    #[test]
    fn test_negative_total_accepted() {
        let mut body = valid_body();
        body["total"] = json!("-1.00");
        let receipt = validate_value(&body).unwrap();
        assert_eq!(receipt.total, Decimal::new(-100, 2));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut body = valid_body();
        body["items"][0]["price"] = json!("-5.00");
        let err = validate_value(&body).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));

        body["items"][0]["price"] = json!("-0.00");
        assert!(validate_value(&body).is_ok());
    }

    #[test]
    fn test_amount_beyond_decimal_range_rejected() {
        let mut body = valid_body();
        body["total"] = json!("100000000000000000000000000000");
        let err = validate_value(&body).unwrap_err();
        assert!(err.to_string().contains("total is not a decimal number"));
    }

    #[test]
    fn test_impossible_date_rejected() {
        let mut body = valid_body();
        body["purchaseDate"] = json!("2023-02-30");
        assert!(validate_value(&body).is_err());
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_purchase_datetime("2024-02-29", "10:00").is_ok());
        assert!(parse_purchase_datetime("2023-02-29", "10:00").is_err());
    }

    #[test]
    fn test_malformed_dates_rejected() {
        for date in ["2022/01/01", "2022-01", "2022-01-01-01", "2022-13-01", "2022-00-10", "0000-01-01", "2022-aa-01"] {
            assert!(parse_purchase_datetime(date, "12:00").is_err(), "{} should be rejected", date);
        }
    }

    #[test]
    fn test_malformed_times_rejected() {
        for time in ["24:00", "12:60", "12", "12:00:00", "-1:00", "noon"] {
            assert!(parse_purchase_datetime("2022-01-01", time).is_err(), "{} should be rejected", time);
        }
    }

    #[test]
    fn test_unpadded_components_accepted() {
        let at = parse_purchase_datetime("2022-1-5", "9:7").unwrap();
        assert_eq!(at.to_string(), "2022-01-05 09:07:00");
    }
}

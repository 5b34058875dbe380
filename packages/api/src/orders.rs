//! Order listing and placement.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;
use crate::packages::PackageKind;

/// An order as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub package_name: String,
    #[serde(default)]
    pub kind: PackageKind,
    #[serde(default)]
    pub links_delivered: u32,
    pub links_total: u32,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub status: String,
    /// ISO-8601 timestamp, displayed verbatim.
    #[serde(default)]
    pub created_at: String,
}

/// Payload for placing an order from the packages page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateOrder {
    pub package_name: String,
    pub kind: PackageKind,
    pub links_total: u32,
    pub amount: f64,
    pub currency: String,
}

impl Client {
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("/orders").await
    }

    pub async fn create_order(&self, order: &CreateOrder) -> Result<Order, ApiError> {
        self.post_json("/orders", order).await
    }
}

/// Derive the total link count from a package's free-text volume field.
///
/// The backend owns the authoritative number; this parse exists only to
/// prefill the order. A leading integer wins ("5 links/month" -> 5); anything
/// without leading digits ("Unlimited") falls back to 1.
pub fn links_total_from_plan(links_per_month: &str) -> u32 {
    let digits: String = links_per_month
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer_is_parsed() {
        assert_eq!(links_total_from_plan("5 links/month"), 5);
        assert_eq!(links_total_from_plan("12 premium links"), 12);
        assert_eq!(links_total_from_plan("  8 links"), 8);
    }

    #[test]
    fn test_no_leading_digits_defaults_to_one() {
        assert_eq!(links_total_from_plan("Unlimited"), 1);
        assert_eq!(links_total_from_plan(""), 1);
        assert_eq!(links_total_from_plan("links: 5"), 1);
    }

    #[test]
    fn test_order_shape() {
        let body = r#"{
            "id": "ord-9",
            "package_name": "Growth",
            "kind": "link-building",
            "links_delivered": 4,
            "links_total": 12,
            "amount": 999.0,
            "currency": "USD",
            "status": "active",
            "created_at": "2025-11-02T09:00:00Z"
        }"#;
        let parsed: Order = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.links_delivered, 4);
        assert_eq!(parsed.links_total, 12);
        assert_eq!(parsed.currency, "USD");
    }
}

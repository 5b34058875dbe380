//! Pricing plans for the public pricing page.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;

/// A plan card on the pricing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    /// Monthly price in USD; `None` renders as "contact us".
    pub price: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl Client {
    pub async fn list_plans(&self) -> Result<Vec<PricingPlan>, ApiError> {
        self.get_json("/pricing").await
    }
}

/// Plans shown when the backend fetch fails or returns nothing; the pricing
/// page must never render an empty plan list.
pub fn fallback_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Starter".to_string(),
            price: Some(499.0),
            features: vec![
                "5 links per month".to_string(),
                "DR 30+ referring domains".to_string(),
                "Monthly report".to_string(),
            ],
            popular: false,
        },
        PricingPlan {
            name: "Growth".to_string(),
            price: Some(999.0),
            features: vec![
                "12 links per month".to_string(),
                "DR 50+ referring domains".to_string(),
                "Dedicated account manager".to_string(),
            ],
            popular: true,
        },
        PricingPlan {
            name: "Enterprise".to_string(),
            price: None,
            features: vec![
                "Custom link volume".to_string(),
                "DR 70+ referring domains".to_string(),
                "Weekly strategy calls".to_string(),
            ],
            popular: false,
        },
    ]
}

/// The fetched plans, or the fallback when the fetch failed or came back
/// empty.
pub fn plans_or_fallback(result: Result<Vec<PricingPlan>, ApiError>) -> Vec<PricingPlan> {
    match result {
        Ok(plans) if !plans.is_empty() => plans,
        Ok(_) => fallback_plans(),
        Err(err) => {
            tracing::warn!("pricing fetch failed, using fallback plans: {err}");
            fallback_plans()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_yields_fallback_not_empty() {
        let shown = plans_or_fallback(Err(ApiError::Network("offline".to_string())));
        assert_eq!(shown, fallback_plans());
        assert!(!shown.is_empty());
    }

    #[test]
    fn test_non_ok_status_yields_fallback() {
        assert_eq!(
            plans_or_fallback(Err(ApiError::Status(503))),
            fallback_plans()
        );
    }

    #[test]
    fn test_empty_body_yields_fallback() {
        assert_eq!(plans_or_fallback(Ok(Vec::new())), fallback_plans());
    }

    #[test]
    fn test_successful_fetch_wins() {
        let fetched = vec![PricingPlan {
            name: "Promo".to_string(),
            price: Some(199.0),
            features: Vec::new(),
            popular: false,
        }];
        assert_eq!(plans_or_fallback(Ok(fetched.clone())), fetched);
    }
}

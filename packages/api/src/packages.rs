//! Public package catalog (link building and guest posting).

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;

/// Which service a package belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    #[default]
    LinkBuilding,
    GuestPosting,
}

impl PackageKind {
    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::LinkBuilding => "Link Building",
            PackageKind::GuestPosting => "Guest Posting",
        }
    }
}

/// A purchasable service package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub kind: PackageKind,
    /// Monthly price in USD; `None` renders as "contact us".
    pub price: Option<f64>,
    /// Free-text volume description, e.g. "5 links/month" or "Unlimited".
    #[serde(default)]
    pub links_per_month: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl Client {
    pub async fn list_packages(&self) -> Result<Vec<Package>, ApiError> {
        self.get_json("/packages").await
    }
}

/// Catalog shown when the backend fetch fails, so the packages page never
/// renders empty.
pub fn fallback_packages() -> Vec<Package> {
    vec![
        Package {
            name: "Starter".to_string(),
            kind: PackageKind::LinkBuilding,
            price: Some(499.0),
            links_per_month: "5 links/month".to_string(),
            features: vec![
                "DR 30+ referring domains".to_string(),
                "Manual outreach only".to_string(),
                "Monthly report".to_string(),
            ],
            popular: false,
        },
        Package {
            name: "Growth".to_string(),
            kind: PackageKind::LinkBuilding,
            price: Some(999.0),
            links_per_month: "12 links/month".to_string(),
            features: vec![
                "DR 50+ referring domains".to_string(),
                "Competitor gap analysis".to_string(),
                "Dedicated account manager".to_string(),
                "Monthly report".to_string(),
            ],
            popular: true,
        },
        Package {
            name: "Authority".to_string(),
            kind: PackageKind::LinkBuilding,
            price: None,
            links_per_month: "Unlimited".to_string(),
            features: vec![
                "DR 70+ referring domains".to_string(),
                "Custom anchor strategy".to_string(),
                "Weekly strategy calls".to_string(),
            ],
            popular: false,
        },
        Package {
            name: "Guest Post Basic".to_string(),
            kind: PackageKind::GuestPosting,
            price: Some(299.0),
            links_per_month: "2 links/month".to_string(),
            features: vec![
                "1000+ word articles".to_string(),
                "Niche-relevant blogs".to_string(),
            ],
            popular: false,
        },
        Package {
            name: "Guest Post Pro".to_string(),
            kind: PackageKind::GuestPosting,
            price: Some(799.0),
            links_per_month: "6 links/month".to_string(),
            features: vec![
                "1500+ word articles".to_string(),
                "DR 40+ publications".to_string(),
                "Content approval workflow".to_string(),
            ],
            popular: true,
        },
    ]
}

/// The fetched catalog, or the fallback when the fetch failed.
pub fn packages_or_fallback(result: Result<Vec<Package>, ApiError>) -> Vec<Package> {
    match result {
        Ok(packages) if !packages.is_empty() => packages,
        Ok(_) => fallback_packages(),
        Err(err) => {
            tracing::warn!("package fetch failed, using fallback catalog: {err}");
            fallback_packages()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_yields_fallback() {
        let shown = packages_or_fallback(Err(ApiError::Status(502)));
        assert_eq!(shown, fallback_packages());
        assert!(!shown.is_empty());
    }

    #[test]
    fn test_empty_response_yields_fallback() {
        let shown = packages_or_fallback(Ok(Vec::new()));
        assert_eq!(shown, fallback_packages());
    }

    #[test]
    fn test_successful_fetch_wins() {
        let fetched = vec![Package {
            name: "Custom".to_string(),
            kind: PackageKind::GuestPosting,
            price: Some(100.0),
            links_per_month: "3 links/month".to_string(),
            features: Vec::new(),
            popular: false,
        }];
        assert_eq!(packages_or_fallback(Ok(fetched.clone())), fetched);
    }

    #[test]
    fn test_kind_wire_format() {
        let parsed: Package = serde_json::from_str(
            r#"{"name":"X","kind":"guest-posting","price":null,"links_per_month":"Unlimited"}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, PackageKind::GuestPosting);
        assert!(parsed.price.is_none());
    }
}

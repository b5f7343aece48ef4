// src/providers/food.rs — Food delivery lookup
//
// One upstream attempt when an API key is configured, mock menu otherwise.
// Upstream failures fall back to the mock menu; nothing is retried.

use async_trait::async_trait;
use std::time::Duration;

use super::FoodSource;
use crate::core::types::FoodCandidate;
use crate::infra::config::{ProfileConfig, ProvidersConfig};
use crate::infra::errors::DaybreakError;

const SEARCH_URL: &str = "https://api.zomato.com/api/v2.1/search";

pub struct DeliveryLookup {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl DeliveryLookup {
    pub fn new(cfg: &ProvidersConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: cfg.food_api_key.clone(),
        }
    }

    async fn fetch(
        &self,
        key: &str,
        profile: &ProfileConfig,
    ) -> Result<Vec<FoodCandidate>, DaybreakError> {
        let body: serde_json::Value = self
            .client
            .get(SEARCH_URL)
            .header("api_key", key)
            .query(&[
                ("lat", profile.home_latitude.to_string()),
                ("lon", profile.home_longitude.to_string()),
                ("radius", "2000".into()),
                ("sort", "rating".into()),
                ("order", "desc".into()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let restaurants = body["restaurants"].as_array().cloned().unwrap_or_default();
        let options: Vec<FoodCandidate> = restaurants
            .iter()
            .take(5)
            .map(|entry| {
                let rest = &entry["restaurant"];
                FoodCandidate {
                    restaurant: rest["name"].as_str().unwrap_or("Unknown").to_string(),
                    item: "Recommended Item".into(),
                    price: rest["average_cost_for_two"].as_f64().unwrap_or(200.0) / 2.0,
                    eta_minutes: rest["delivery_time"].as_f64().unwrap_or(30.0),
                    eta_variance: 2.0,
                    rating: rest["user_rating"]["aggregate_rating"]
                        .as_str()
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(4.0),
                    service: "Zomato".into(),
                }
            })
            .collect();

        Ok(options)
    }
}

#[async_trait]
impl FoodSource for DeliveryLookup {
    async fn candidates(
        &self,
        profile: &ProfileConfig,
    ) -> Result<Vec<FoodCandidate>, DaybreakError> {
        if let Some(ref key) = self.api_key {
            match self.fetch(key, profile).await {
                Ok(options) if !options.is_empty() => {
                    return Ok(within_budget(options, profile.food_budget))
                }
                Ok(_) => tracing::debug!("Upstream returned no restaurants, using mock menu"),
                Err(e) => tracing::warn!("Food lookup failed: {}, using mock menu", e),
            }
        }
        Ok(within_budget(mock_menu(), profile.food_budget))
    }
}

/// Keep options within budget; when nothing qualifies, return the full list
/// rather than an empty one (an empty list is a failure signal upstream).
fn within_budget(options: Vec<FoodCandidate>, budget: f64) -> Vec<FoodCandidate> {
    let filtered: Vec<FoodCandidate> = options
        .iter()
        .filter(|o| o.price <= budget)
        .cloned()
        .collect();
    if filtered.is_empty() {
        options
    } else {
        filtered
    }
}

/// Realistic Chennai breakfast table, fastest first.
pub fn mock_menu() -> Vec<FoodCandidate> {
    vec![
        FoodCandidate {
            restaurant: "Sangeetha Veg Restaurant".into(),
            item: "Idli + Sambar + Chutney".into(),
            price: 110.0,
            eta_minutes: 12.0,
            eta_variance: 2.0,
            rating: 4.6,
            service: "Swiggy".into(),
        },
        FoodCandidate {
            restaurant: "Saravana Bhavan".into(),
            item: "Puri + Masala + Dosa".into(),
            price: 120.0,
            eta_minutes: 13.0,
            eta_variance: 2.0,
            rating: 4.5,
            service: "Zomato".into(),
        },
        FoodCandidate {
            restaurant: "MTR (Madras Tiffin Restaurant)".into(),
            item: "Set Dosa + Sambar".into(),
            price: 130.0,
            eta_minutes: 15.0,
            eta_variance: 3.0,
            rating: 4.8,
            service: "Zomato".into(),
        },
        FoodCandidate {
            restaurant: "Kaldan Continental".into(),
            item: "Chole Bhature + Lassi".into(),
            price: 150.0,
            eta_minutes: 16.0,
            eta_variance: 3.0,
            rating: 4.4,
            service: "Swiggy".into(),
        },
        FoodCandidate {
            restaurant: "Aachi Biryani".into(),
            item: "Chicken Biryani + Raita".into(),
            price: 180.0,
            eta_minutes: 18.0,
            eta_variance: 4.0,
            rating: 4.5,
            service: "Swiggy".into(),
        },
        FoodCandidate {
            restaurant: "Dindigul Thalapakatti".into(),
            item: "Mutton Biryani Special".into(),
            price: 200.0,
            eta_minutes: 20.0,
            eta_variance: 2.0,
            rating: 4.7,
            service: "Zomato".into(),
        },
    ]
}

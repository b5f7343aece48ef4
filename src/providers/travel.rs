// src/providers/travel.rs — Ride-hailing lookup
//
// Same shape as the food lookup: one upstream attempt with a configured key,
// mock ride table otherwise or on any failure.

use async_trait::async_trait;
use std::time::Duration;

use super::TravelSource;
use crate::core::types::TravelCandidate;
use crate::infra::config::{ProfileConfig, ProvidersConfig};
use crate::infra::errors::DaybreakError;

const ESTIMATES_URL: &str = "https://devapi.olacabs.com/v1/products";

pub struct RideLookup {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl RideLookup {
    pub fn new(cfg: &ProvidersConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: cfg.ride_api_key.clone(),
        }
    }

    async fn fetch(
        &self,
        key: &str,
        profile: &ProfileConfig,
    ) -> Result<Vec<TravelCandidate>, DaybreakError> {
        let body: serde_json::Value = self
            .client
            .get(ESTIMATES_URL)
            .header("X-APP-TOKEN", key)
            .query(&[
                ("pickup_lat", profile.home_latitude.to_string()),
                ("pickup_lng", profile.home_longitude.to_string()),
                ("drop_lat", profile.class_latitude.to_string()),
                ("drop_lng", profile.class_longitude.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rides = body["categories"].as_array().cloned().unwrap_or_default();
        let options: Vec<TravelCandidate> = rides
            .iter()
            .take(5)
            .map(|cat| TravelCandidate {
                service: "Ola".into(),
                mode: cat["display_name"].as_str().unwrap_or("Ride").to_string(),
                cost: cat["fare_breakup"]["total_fare"].as_f64().unwrap_or(100.0),
                eta_minutes: cat["eta"].as_f64().unwrap_or(10.0),
                eta_variance: 3.0,
                rating: 4.5,
            })
            .collect();

        Ok(options)
    }
}

#[async_trait]
impl TravelSource for RideLookup {
    async fn candidates(
        &self,
        profile: &ProfileConfig,
    ) -> Result<Vec<TravelCandidate>, DaybreakError> {
        if let Some(ref key) = self.api_key {
            match self.fetch(key, profile).await {
                Ok(options) if !options.is_empty() => return Ok(options),
                Ok(_) => tracing::debug!("Upstream returned no rides, using mock table"),
                Err(e) => tracing::warn!("Ride lookup failed: {}, using mock table", e),
            }
        }
        Ok(mock_rides())
    }
}

/// Mock ride table, fastest first.
pub fn mock_rides() -> Vec<TravelCandidate> {
    vec![
        TravelCandidate {
            service: "Ola".into(),
            mode: "Ride".into(),
            cost: 95.0,
            eta_minutes: 8.0,
            eta_variance: 2.0,
            rating: 4.6,
        },
        TravelCandidate {
            service: "Uber".into(),
            mode: "UberGo".into(),
            cost: 120.0,
            eta_minutes: 10.0,
            eta_variance: 3.0,
            rating: 4.7,
        },
        TravelCandidate {
            service: "Ola".into(),
            mode: "Auto".into(),
            cost: 60.0,
            eta_minutes: 12.0,
            eta_variance: 4.0,
            rating: 4.4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_rides_fastest_first() {
        let rides = mock_rides();
        assert_eq!(rides[0].mode, "Ride");
        for pair in rides.windows(2) {
            assert!(pair[0].eta_minutes <= pair[1].eta_minutes);
        }
    }

    #[tokio::test]
    async fn test_no_api_key_serves_mock_table() {
        let lookup = RideLookup::new(&ProvidersConfig::default());
        let options = lookup
            .candidates(&ProfileConfig::default())
            .await
            .unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].service, "Ola");
    }
}

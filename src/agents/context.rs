// src/agents/context.rs — Context gathering
//
// Computes the facts a planning cycle starts from: local time in the user's
// timezone, minutes until class starts, and the home-to-class distance.

use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::core::types::PlannerContext;
use crate::infra::config::ProfileConfig;
use crate::infra::errors::DaybreakError;

#[derive(Debug)]
pub struct ContextAgent {
    tz: Tz,
    /// Fixed clock for tests; wall clock when None.
    now_override: Option<DateTime<Utc>>,
}

impl ContextAgent {
    pub fn new(timezone: &str) -> Result<Self, DaybreakError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| DaybreakError::UnknownTimezone(timezone.to_string()))?;
        Ok(Self {
            tz,
            now_override: None,
        })
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now_override = Some(now);
        self
    }

    fn now(&self) -> DateTime<Tz> {
        self.now_override
            .unwrap_or_else(Utc::now)
            .with_timezone(&self.tz)
    }

    /// Gather fresh context. `class_time` overrides the profile's start time.
    pub fn gather(
        &self,
        profile: &ProfileConfig,
        class_time: Option<&str>,
    ) -> Result<PlannerContext, DaybreakError> {
        let raw = class_time.unwrap_or(&profile.class_start_time);
        let class_start =
            NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| DaybreakError::InvalidClassTime {
                value: raw.to_string(),
            })?;

        let now = self.now();
        let today = now.date_naive();
        let mut class_at = today.and_time(class_start);

        // Class time already passed today: plan for tomorrow's class.
        if class_at <= now.naive_local() {
            class_at += Duration::days(1);
        }

        let minutes_until_class = (class_at - now.naive_local()).num_seconds() as f64 / 60.0;

        let distance_km = haversine_km(
            profile.home_latitude,
            profile.home_longitude,
            profile.class_latitude,
            profile.class_longitude,
        );

        Ok(PlannerContext {
            current_time: now.format("%H:%M").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            minutes_until_class: (minutes_until_class * 10.0).round() / 10.0,
            distance_km: (distance_km * 10.0).round() / 10.0,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn local_hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Great-circle distance between two coordinates, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile() -> ProfileConfig {
        ProfileConfig::default()
    }

    /// 08:00 IST on a fixed date (02:30 UTC).
    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 2, 30, 0).unwrap()
    }

    #[test]
    fn test_minutes_until_class_same_day() {
        let agent = ContextAgent::new("Asia/Kolkata").unwrap().at(morning());
        let ctx = agent.gather(&profile(), None).unwrap();
        assert_eq!(ctx.current_time, "08:00");
        assert_eq!(ctx.date, "2026-08-25");
        // 08:00 → 09:00 class
        assert!((ctx.minutes_until_class - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_class_time_override() {
        let agent = ContextAgent::new("Asia/Kolkata").unwrap().at(morning());
        let ctx = agent.gather(&profile(), Some("08:30")).unwrap();
        assert!((ctx.minutes_until_class - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_past_class_rolls_to_next_day() {
        // 10:00 IST, class at 09:00 → 23 hours away
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 4, 30, 0).unwrap();
        let agent = ContextAgent::new("Asia/Kolkata").unwrap().at(now);
        let ctx = agent.gather(&profile(), None).unwrap();
        assert!((ctx.minutes_until_class - 23.0 * 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_class_time_rejected() {
        let agent = ContextAgent::new("Asia/Kolkata").unwrap().at(morning());
        let err = agent.gather(&profile(), Some("9am")).unwrap_err();
        assert!(matches!(err, DaybreakError::InvalidClassTime { .. }));
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let err = ContextAgent::new("Mars/Olympus").unwrap_err();
        assert!(matches!(err, DaybreakError::UnknownTimezone(_)));
    }

    #[test]
    fn test_haversine_known_distance() {
        // One degree of longitude at the equator is ~111.19 km
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let d = haversine_km(13.0827, 80.2707, 13.0827, 80.2707);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_distance_from_default_profile() {
        let agent = ContextAgent::new("Asia/Kolkata").unwrap().at(morning());
        let ctx = agent.gather(&profile(), None).unwrap();
        // Home to class across Chennai: a bit over 20 km
        assert!(ctx.distance_km > 15.0 && ctx.distance_km < 25.0);
    }
}

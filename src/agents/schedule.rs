// src/agents/schedule.rs — Daily schedule generation

use chrono::{Timelike, Utc};
use chrono_tz::Tz;

pub struct ScheduleAgent {
    tz: Tz,
}

impl ScheduleAgent {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn generate(&self) -> Vec<String> {
        let hour = Utc::now().with_timezone(&self.tz).hour();
        schedule_for_hour(hour)
    }
}

/// Base student schedule, with the evening section depending on the hour.
pub fn schedule_for_hour(hour: u32) -> Vec<String> {
    let mut schedule = vec![
        "9:00 AM - 1:00 PM: Core Lecture (Data Structures)".to_string(),
        "1:00 PM - 2:00 PM: Lunch Break".to_string(),
        "2:00 PM - 4:00 PM: Lab Session (Programming Lab)".to_string(),
        "4:00 PM - 5:00 PM: Library / Study Time".to_string(),
        "5:00 PM - 6:00 PM: Club Activity / Sports".to_string(),
    ];

    if hour < 18 {
        schedule.push("6:00 PM - 7:30 PM: Dinner".to_string());
        schedule.push("7:30 PM: Free Time / Project Work".to_string());
    } else {
        schedule.push("Evening: Dinner & Personal Time".to_string());
    }

    schedule
}

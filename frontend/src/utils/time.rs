use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

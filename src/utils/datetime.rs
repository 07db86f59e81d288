use chrono::{NaiveDate, Utc};

/// Date as shown to users, e.g. `01.07.2024`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// The date the bot considers "today" when opening calendars.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

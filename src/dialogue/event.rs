use super::render::CITIES;

pub const BEGIN_SEARCH: &str = "search_begin";
pub const CITY_PREFIX: &str = "city_";
pub const CALENDAR_PREFIX: &str = "cal_";
pub const PASSENGERS_PREFIX: &str = "passengers_";

pub const MIN_PASSENGERS: u8 = 1;
pub const MAX_PASSENGERS: u8 = 8;

/// An inbound button press, decoded once from the raw callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    BeginSearch,
    City(String),
    /// Raw token owned by the calendar widget, prefix included.
    Calendar(String),
    Passengers(u8),
    Unrecognized(String),
}

impl SelectionEvent {
    pub fn decode(payload: &str) -> Self {
        if payload == BEGIN_SEARCH {
            return SelectionEvent::BeginSearch;
        }

        if let Some(name) = payload.strip_prefix(CITY_PREFIX) {
            return match CITIES.iter().find(|city| **city == name) {
                Some(city) => SelectionEvent::City((*city).to_string()),
                None => SelectionEvent::Unrecognized(payload.to_string()),
            };
        }

        if payload.starts_with(CALENDAR_PREFIX) {
            return SelectionEvent::Calendar(payload.to_string());
        }

        if let Some(count) = payload.strip_prefix(PASSENGERS_PREFIX) {
            return match count.parse::<u8>() {
                Ok(n) if (MIN_PASSENGERS..=MAX_PASSENGERS).contains(&n) => {
                    SelectionEvent::Passengers(n)
                }
                _ => SelectionEvent::Unrecognized(payload.to_string()),
            };
        }

        SelectionEvent::Unrecognized(payload.to_string())
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SelectionEvent::BeginSearch => "begin_search",
            SelectionEvent::City(_) => "city",
            SelectionEvent::Calendar(_) => "calendar",
            SelectionEvent::Passengers(_) => "passengers",
            SelectionEvent::Unrecognized(_) => "unrecognized",
        }
    }
}

pub fn city_payload(city: &str) -> String {
    format!("{CITY_PREFIX}{city}")
}

pub fn passengers_payload(count: u8) -> String {
    format!("{PASSENGERS_PREFIX}{count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_begin_search() {
        assert_eq!(SelectionEvent::decode("search_begin"), SelectionEvent::BeginSearch);
    }

    #[test]
    fn test_decode_known_city() {
        assert_eq!(
            SelectionEvent::decode("city_Москва"),
            SelectionEvent::City("Москва".to_string())
        );
        assert_eq!(
            SelectionEvent::decode(&city_payload("Санкт-Петербург")),
            SelectionEvent::City("Санкт-Петербург".to_string())
        );
    }

    #[test]
    fn test_decode_unknown_city() {
        assert_eq!(
            SelectionEvent::decode("city_Atlantis"),
            SelectionEvent::Unrecognized("city_Atlantis".to_string())
        );
        assert_eq!(
            SelectionEvent::decode("city_"),
            SelectionEvent::Unrecognized("city_".to_string())
        );
    }

    #[test]
    fn test_decode_calendar_keeps_raw_token() {
        assert_eq!(
            SelectionEvent::decode("cal_day_2024-07-01"),
            SelectionEvent::Calendar("cal_day_2024-07-01".to_string())
        );
    }

    #[test]
    fn test_decode_passengers_range() {
        assert_eq!(SelectionEvent::decode("passengers_1"), SelectionEvent::Passengers(1));
        assert_eq!(SelectionEvent::decode(&passengers_payload(8)), SelectionEvent::Passengers(8));
        assert!(matches!(SelectionEvent::decode("passengers_0"), SelectionEvent::Unrecognized(_)));
        assert!(matches!(SelectionEvent::decode("passengers_9"), SelectionEvent::Unrecognized(_)));
        assert!(matches!(SelectionEvent::decode("passengers_-1"), SelectionEvent::Unrecognized(_)));
        assert!(matches!(SelectionEvent::decode("passengers_two"), SelectionEvent::Unrecognized(_)));
    }

    #[test]
    fn test_decode_garbage() {
        assert_eq!(SelectionEvent::decode(""), SelectionEvent::Unrecognized(String::new()));
        assert_eq!(
            SelectionEvent::decode("session:option:yes"),
            SelectionEvent::Unrecognized("session:option:yes".to_string())
        );
    }
}

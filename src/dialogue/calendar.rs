//! Date selection widget.
//!
//! The dialogue only needs two things from a calendar: a keyboard for a given
//! month and a way to turn one of its button tokens back into either a chosen
//! date or a request to show another month. [`DatePicker`] captures exactly
//! that; [`InlineCalendar`] is the month-grid implementation used by the bot.

use chrono::{Datelike, Months, NaiveDate};

use super::event::CALENDAR_PREFIX;
use super::render::{Button, Keyboard};

const DAY_TOKEN: &str = "cal_day_";
const NAV_TOKEN: &str = "cal_nav_";
const NOOP_TOKEN: &str = "cal_noop";

/// Language used for month and weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ru" | "ru_ru" | "ru-ru" => Some(Locale::Ru),
            "en" | "en_us" | "en-us" | "en_gb" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        const RU: [&str; 12] = [
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
            "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
        ];
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ];
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::Ru => RU[idx],
            Locale::En => EN[idx],
        }
    }

    /// Monday-first weekday abbreviations.
    pub fn weekdays(&self) -> [&'static str; 7] {
        match self {
            Locale::Ru => ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
            Locale::En => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

/// What a calendar token means once interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarSignal {
    Selected(NaiveDate),
    /// No date chosen yet; show the month starting at this date.
    Navigate(NaiveDate),
    /// Header, weekday and padding cells.
    Ignored,
}

impl CalendarSignal {
    pub fn selected(&self) -> Option<NaiveDate> {
        match self {
            CalendarSignal::Selected(date) => Some(*date),
            _ => None,
        }
    }
}

/// Calendar capability used by the dialogue for both date steps.
pub trait DatePicker: Send + Sync {
    fn render(&self, locale: Locale, month: NaiveDate) -> Keyboard;
    fn interpret(&self, token: &str) -> CalendarSignal;
}

/// Month grid with previous/next paging, Monday-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCalendar;

impl InlineCalendar {
    pub fn new() -> Self {
        Self
    }

    fn noop(label: impl Into<String>) -> Button {
        Button::new(label, NOOP_TOKEN)
    }

    fn nav(label: &str, target: Option<NaiveDate>) -> Button {
        match target {
            Some(month) => Button::new(label, format!("{NAV_TOKEN}{}", month.format("%Y-%m"))),
            None => Self::noop(" "),
        }
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl DatePicker for InlineCalendar {
    fn render(&self, locale: Locale, month: NaiveDate) -> Keyboard {
        let first = first_of_month(month);
        let mut rows = Vec::new();

        rows.push(vec![
            Self::nav("«", first.checked_sub_months(Months::new(1))),
            Self::noop(format!("{} {}", locale.month_name(first.month()), first.year())),
            Self::nav("»", first.checked_add_months(Months::new(1))),
        ]);

        rows.push(locale.weekdays().iter().map(|day| Self::noop(*day)).collect());

        let offset = first.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<Button> = (0..offset).map(|_| Self::noop(" ")).collect();
        for date in first.iter_days().take_while(|d| d.month() == first.month()) {
            cells.push(Button::new(
                date.day().to_string(),
                format!("{DAY_TOKEN}{}", date.format("%Y-%m-%d")),
            ));
        }
        while cells.len() % 7 != 0 {
            cells.push(Self::noop(" "));
        }

        rows.extend(cells.chunks(7).map(|week| week.to_vec()));
        Keyboard::new(rows)
    }

    fn interpret(&self, token: &str) -> CalendarSignal {
        if !token.starts_with(CALENDAR_PREFIX) {
            return CalendarSignal::Ignored;
        }

        if let Some(day) = token.strip_prefix(DAY_TOKEN) {
            return NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(CalendarSignal::Selected)
                .unwrap_or(CalendarSignal::Ignored);
        }

        if let Some(month) = token.strip_prefix(NAV_TOKEN) {
            return NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
                .map(CalendarSignal::Navigate)
                .unwrap_or(CalendarSignal::Ignored);
        }

        CalendarSignal::Ignored
    }
}

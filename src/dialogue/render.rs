use chrono::NaiveDate;

use super::calendar::{first_of_month, DatePicker, Locale};
use super::error::DialogueError;
use super::event::{city_payload, passengers_payload, BEGIN_SEARCH, MAX_PASSENGERS, MIN_PASSENGERS};
use super::state::{Field, SearchData, SearchState, Session};
use crate::utils::datetime::format_date;

/// Cities offered for both departure and destination.
pub const CITIES: [&str; 9] = [
    "Москва",
    "Санкт-Петербург",
    "Сочи",
    "Казань",
    "Новосибирск",
    "Екатеринбург",
    "Калининград",
    "Владивосток",
    "Краснодар",
];

const CITY_COLUMNS: usize = 3;
const PASSENGER_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

impl Button {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Text plus the options shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Prompt {
    pub fn new(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }

    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Keyboard::default())
    }
}

/// Inputs to rendering that do not live in the session.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub calendar: &'a dyn DatePicker,
    pub locale: Locale,
    pub today: NaiveDate,
}

impl<'a> RenderContext<'a> {
    pub fn new(calendar: &'a dyn DatePicker, locale: Locale, today: NaiveDate) -> Self {
        Self {
            calendar,
            locale,
            today,
        }
    }
}

/// Renders the prompt for `session`. Pure: the same session and context always
/// produce the same prompt.
pub fn render_prompt(session: &Session, ctx: &RenderContext<'_>) -> Result<Prompt, DialogueError> {
    let month = default_calendar_month(session, ctx.today);
    render_prompt_at(session, ctx, month)
}

/// Like [`render_prompt`] but with the calendar opened on `month`. Only the
/// date states look at `month`.
pub fn render_prompt_at(
    session: &Session,
    ctx: &RenderContext<'_>,
    month: NaiveDate,
) -> Result<Prompt, DialogueError> {
    let data = &session.data;
    let prompt = match session.state {
        SearchState::Idle => entry_prompt(),
        SearchState::AwaitingDeparture => {
            Prompt::new("🛫 Выберите город отправления:", city_keyboard())
        }
        SearchState::AwaitingDestination => Prompt::new(
            format!(
                "Город отправления: {}\n\n🛬 Выберите город назначения:",
                require(&data.departure_city, Field::DepartureCity)?
            ),
            city_keyboard(),
        ),
        SearchState::AwaitingDepartureDate => Prompt::new(
            format!(
                "Маршрут: {} → {}\n\n📅 Выберите дату вылета:",
                require(&data.departure_city, Field::DepartureCity)?,
                require(&data.destination_city, Field::DestinationCity)?
            ),
            ctx.calendar.render(ctx.locale, month),
        ),
        SearchState::AwaitingReturnDate => Prompt::new(
            format!(
                "Дата вылета: {}\n\n📅 Выберите дату возвращения:",
                format_date(&require(&data.departure_date, Field::DepartureDate)?)
            ),
            ctx.calendar.render(ctx.locale, month),
        ),
        SearchState::AwaitingPassengers => {
            Prompt::new("👥 Выберите количество пассажиров:", passenger_keyboard())
        }
        SearchState::Completed => Prompt::text_only(render_summary(data)?),
    };
    Ok(prompt)
}

pub fn entry_prompt() -> Prompt {
    Prompt::new(
        "✈️ Привет! Я помогу подобрать авиабилеты.\n\nНажмите «Начать поиск», чтобы выбрать параметры перелёта.",
        Keyboard::new(vec![vec![Button::new("🔍 Начать поиск", BEGIN_SEARCH)]]),
    )
}

/// Summary of a finished search. Every field has to be present.
pub fn render_summary(data: &SearchData) -> Result<String, DialogueError> {
    let departure_city = require(&data.departure_city, Field::DepartureCity)?;
    let destination_city = require(&data.destination_city, Field::DestinationCity)?;
    let departure_date = require(&data.departure_date, Field::DepartureDate)?;
    let return_date = require(&data.return_date, Field::ReturnDate)?;
    let passengers = require(&data.passenger_count, Field::PassengerCount)?;

    Ok(format!(
        "✅ Параметры поиска:\n\n\
         Откуда: {departure_city}\n\
         Куда: {destination_city}\n\
         Дата вылета: {}\n\
         Дата возвращения: {}\n\
         Пассажиров: {passengers}\n\n\
         Чтобы начать новый поиск, отправьте /start",
        format_date(&departure_date),
        format_date(&return_date),
    ))
}

fn require<T: Clone>(value: &Option<T>, field: Field) -> Result<T, DialogueError> {
    value.clone().ok_or(DialogueError::MissingField(field))
}

fn default_calendar_month(session: &Session, today: NaiveDate) -> NaiveDate {
    match session.state {
        SearchState::AwaitingReturnDate => {
            first_of_month(session.data.departure_date.unwrap_or(today))
        }
        _ => first_of_month(today),
    }
}

fn city_keyboard() -> Keyboard {
    Keyboard::new(
        CITIES
            .chunks(CITY_COLUMNS)
            .map(|row| {
                row.iter()
                    .map(|city| Button::new(*city, city_payload(city)))
                    .collect()
            })
            .collect(),
    )
}

fn passenger_keyboard() -> Keyboard {
    let counts: Vec<u8> = (MIN_PASSENGERS..=MAX_PASSENGERS).collect();
    Keyboard::new(
        counts
            .chunks(PASSENGER_COLUMNS)
            .map(|row| {
                row.iter()
                    .map(|n| Button::new(n.to_string(), passengers_payload(*n)))
                    .collect()
            })
            .collect(),
    )
}

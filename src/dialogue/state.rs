use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a user currently is in the search dialogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchState {
    #[default]
    Idle,
    AwaitingDeparture,
    AwaitingDestination,
    AwaitingDepartureDate,
    AwaitingReturnDate,
    AwaitingPassengers,
    /// Terminal pseudo-state. A completed session is cleared right away, so
    /// the next interaction starts from `Idle` again.
    Completed,
}

impl SearchState {
    /// Fields that must already be collected once the dialogue is in this state.
    pub fn collected_fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            SearchState::Idle | SearchState::AwaitingDeparture => &[],
            SearchState::AwaitingDestination => &[DepartureCity],
            SearchState::AwaitingDepartureDate => &[DepartureCity, DestinationCity],
            SearchState::AwaitingReturnDate => &[DepartureCity, DestinationCity, DepartureDate],
            SearchState::AwaitingPassengers => {
                &[DepartureCity, DestinationCity, DepartureDate, ReturnDate]
            }
            SearchState::Completed => Field::ALL,
        }
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single search parameter collected by the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    DepartureCity,
    DestinationCity,
    DepartureDate,
    ReturnDate,
    PassengerCount,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::DepartureCity,
        Field::DestinationCity,
        Field::DepartureDate,
        Field::ReturnDate,
        Field::PassengerCount,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::DepartureCity => "departure_city",
            Field::DestinationCity => "destination_city",
            Field::DepartureDate => "departure_date",
            Field::ReturnDate => "return_date",
            Field::PassengerCount => "passenger_count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values gathered so far. A field is `Some` only after its step completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchData {
    pub departure_city: Option<String>,
    pub destination_city: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passenger_count: Option<u8>,
}

impl SearchData {
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::DepartureCity => self.departure_city.is_some(),
            Field::DestinationCity => self.destination_city.is_some(),
            Field::DepartureDate => self.departure_date.is_some(),
            Field::ReturnDate => self.return_date.is_some(),
            Field::PassengerCount => self.passenger_count.is_some(),
        }
    }

    /// Keys present in the mapping, in collection order.
    pub fn collected(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| self.contains(*field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.collected().is_empty()
    }
}

/// Per-user conversation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub state: SearchState,
    pub data: SearchData,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn moved_to(&self, state: SearchState) -> Self {
        Self {
            state,
            data: self.data.clone(),
        }
    }
}

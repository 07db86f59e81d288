use chrono::NaiveDate;

use super::calendar::{CalendarSignal, DatePicker};
use super::event::SelectionEvent;
use super::state::{SearchState, Session};

/// Outcome of feeding one event to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Store the new session and show its prompt.
    Advance(Session),
    /// Date step without a selection yet: redraw the calendar on `month`.
    Redraw { month: NaiveDate },
    /// Last field collected. The session is `Completed` and must be cleared
    /// after the summary is shown.
    Complete(Session),
    /// Event does not fit the current state.
    Ignore,
}

/// Applies `event` to `session` following the search table. Never mutates the
/// input; callers persist whatever the transition carries.
pub fn advance(session: &Session, event: &SelectionEvent, calendar: &dyn DatePicker) -> Transition {
    match (session.state, event) {
        (SearchState::Idle, SelectionEvent::BeginSearch) => {
            Transition::Advance(session.moved_to(SearchState::AwaitingDeparture))
        }
        (SearchState::AwaitingDeparture, SelectionEvent::City(city)) => {
            let mut next = session.moved_to(SearchState::AwaitingDestination);
            next.data.departure_city = Some(city.clone());
            Transition::Advance(next)
        }
        (SearchState::AwaitingDestination, SelectionEvent::City(city)) => {
            let mut next = session.moved_to(SearchState::AwaitingDepartureDate);
            next.data.destination_city = Some(city.clone());
            Transition::Advance(next)
        }
        (SearchState::AwaitingDepartureDate, SelectionEvent::Calendar(token)) => {
            match calendar.interpret(token) {
                CalendarSignal::Selected(date) => {
                    let mut next = session.moved_to(SearchState::AwaitingReturnDate);
                    next.data.departure_date = Some(date);
                    Transition::Advance(next)
                }
                CalendarSignal::Navigate(month) => Transition::Redraw { month },
                CalendarSignal::Ignored => Transition::Ignore,
            }
        }
        (SearchState::AwaitingReturnDate, SelectionEvent::Calendar(token)) => {
            match calendar.interpret(token) {
                CalendarSignal::Selected(date) => {
                    let mut next = session.moved_to(SearchState::AwaitingPassengers);
                    next.data.return_date = Some(date);
                    Transition::Advance(next)
                }
                CalendarSignal::Navigate(month) => Transition::Redraw { month },
                CalendarSignal::Ignored => Transition::Ignore,
            }
        }
        (SearchState::AwaitingPassengers, SelectionEvent::Passengers(count)) => {
            let mut next = session.moved_to(SearchState::Completed);
            next.data.passenger_count = Some(*count);
            Transition::Complete(next)
        }
        _ => Transition::Ignore,
    }
}

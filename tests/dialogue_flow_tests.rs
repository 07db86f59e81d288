use chrono::NaiveDate;
use flight_search_bot::dialogue::{
    render_prompt, Action, InlineCalendar, Locale, Prompt, RenderContext, SearchRouter,
    SearchState, Session,
};
use teloxide::types::UserId;

const USER: UserId = UserId(100500);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn prompt_of(actions: &[Action]) -> Option<&Prompt> {
    actions.iter().find_map(|action| match action {
        Action::ShowPrompt(prompt) => Some(prompt),
        Action::Acknowledge => None,
    })
}

fn acknowledgements(actions: &[Action]) -> usize {
    actions.iter().filter(|a| **a == Action::Acknowledge).count()
}

async fn state_of(router: &SearchRouter) -> Option<SearchState> {
    router.store().read(USER).await.unwrap().map(|s| s.state)
}

#[tokio::test]
async fn test_full_search_produces_summary_and_clears_session() {
    let router = SearchRouter::in_memory(Locale::Ru);

    let entry = router.start(USER, today()).await.unwrap();
    assert!(entry.keyboard.buttons().any(|b| b.payload == "search_begin"));
    assert_eq!(state_of(&router).await, Some(SearchState::Idle));

    let steps = [
        ("search_begin", Some(SearchState::AwaitingDeparture)),
        ("city_Москва", Some(SearchState::AwaitingDestination)),
        ("city_Сочи", Some(SearchState::AwaitingDepartureDate)),
        ("cal_day_2024-07-01", Some(SearchState::AwaitingReturnDate)),
        ("cal_day_2024-07-10", Some(SearchState::AwaitingPassengers)),
    ];
    for (payload, expected) in steps {
        let actions = router.handle_selection(USER, payload, today()).await;
        assert_eq!(acknowledgements(&actions), 1, "payload {payload}");
        assert!(prompt_of(&actions).is_some(), "payload {payload}");
        assert_eq!(state_of(&router).await, expected, "payload {payload}");
    }

    let actions = router.handle_selection(USER, "passengers_3", today()).await;
    assert_eq!(acknowledgements(&actions), 1);
    let summary = prompt_of(&actions).expect("summary prompt");
    for expected in ["Москва", "Сочи", "01.07.2024", "10.07.2024", "3"] {
        assert!(summary.text.contains(expected), "summary missing {expected}");
    }
    assert!(summary.keyboard.is_empty());

    // terminal state resets to Idle: nothing stored
    assert_eq!(router.store().read(USER).await.unwrap(), None);
    assert_eq!(router.stats().searches_started, 1);
    assert_eq!(router.stats().searches_completed, 1);
}

#[tokio::test]
async fn test_passenger_count_while_awaiting_departure_is_ignored() {
    let router = SearchRouter::in_memory(Locale::Ru);
    router.start(USER, today()).await.unwrap();
    router.handle_selection(USER, "search_begin", today()).await;
    let before = router.store().read(USER).await.unwrap();

    let actions = router.handle_selection(USER, "passengers_3", today()).await;

    assert_eq!(actions, vec![Action::Acknowledge]);
    assert_eq!(router.store().read(USER).await.unwrap(), before);
    assert_eq!(router.stats().events_ignored, 1);
}

#[tokio::test]
async fn test_out_of_pattern_events_never_mutate_session() {
    let router = SearchRouter::in_memory(Locale::Ru);
    router.start(USER, today()).await.unwrap();
    for payload in ["search_begin", "city_Казань"] {
        router.handle_selection(USER, payload, today()).await;
    }
    let before = router.store().read(USER).await.unwrap();
    assert_eq!(before.as_ref().map(|s| s.state), Some(SearchState::AwaitingDestination));

    for payload in [
        "search_begin",
        "passengers_2",
        "cal_day_2024-07-01",
        "city_Париж",
        "passengers_42",
        "",
        "garbage",
    ] {
        let actions = router.handle_selection(USER, payload, today()).await;
        assert_eq!(actions, vec![Action::Acknowledge], "payload {payload:?}");
        assert_eq!(router.store().read(USER).await.unwrap(), before, "payload {payload:?}");
    }
}

#[tokio::test]
async fn test_calendar_navigation_keeps_state() {
    let router = SearchRouter::in_memory(Locale::Ru);
    for payload in ["search_begin", "city_Москва", "city_Сочи"] {
        router.handle_selection(USER, payload, today()).await;
    }
    let before = router.store().read(USER).await.unwrap();

    let actions = router.handle_selection(USER, "cal_nav_2024-08", today()).await;

    assert_eq!(acknowledgements(&actions), 1);
    let prompt = prompt_of(&actions).expect("calendar prompt");
    assert_eq!(prompt.keyboard.rows[0][1].label, "Август 2024");
    assert_eq!(router.store().read(USER).await.unwrap(), before);
}

#[tokio::test]
async fn test_start_mid_flow_resets_session() {
    let router = SearchRouter::in_memory(Locale::Ru);
    for payload in ["search_begin", "city_Москва"] {
        router.handle_selection(USER, payload, today()).await;
    }

    router.start(USER, today()).await.unwrap();

    assert_eq!(router.store().read(USER).await.unwrap(), Some(Session::new()));
}

#[tokio::test]
async fn test_users_do_not_share_sessions() {
    let router = SearchRouter::in_memory(Locale::Ru);
    let other = UserId(7);

    router.handle_selection(USER, "search_begin", today()).await;
    router.handle_selection(USER, "city_Москва", today()).await;
    router.handle_selection(other, "search_begin", today()).await;

    assert_eq!(state_of(&router).await, Some(SearchState::AwaitingDestination));
    assert_eq!(
        router.store().read(other).await.unwrap().map(|s| s.state),
        Some(SearchState::AwaitingDeparture)
    );
}

#[tokio::test]
async fn test_prompt_rendering_is_idempotent() {
    let router = SearchRouter::in_memory(Locale::Ru);
    for payload in ["search_begin", "city_Москва", "city_Сочи", "cal_day_2024-07-01"] {
        router.handle_selection(USER, payload, today()).await;
    }
    let session = router.store().read(USER).await.unwrap().expect("session");

    let calendar = InlineCalendar::new();
    let ctx = RenderContext::new(&calendar, Locale::Ru, today());
    let first = render_prompt(&session, &ctx).unwrap();
    let second = render_prompt(&session, &ctx).unwrap();

    assert_eq!(first, second);
    assert!(first.text.contains("01.07.2024"));
}

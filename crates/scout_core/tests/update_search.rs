use std::sync::Once;

use scout_core::{
    update, AppState, BackendFailure, Effect, FallbackPolicy, Item, Level, LevelFilter, Msg,
    NoticeLevel, SearchFilter, Source, SourceFilter,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn github_item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        title: format!("repo {id}"),
        description: "A repository".to_string(),
        source: Source::Github,
        level: Level::Intermediate,
        novelty_score: 8.1,
        url: format!("https://github.com/example/{id}"),
        tags: Some(vec!["ml".to_string()]),
        stars: Some(1200),
        language: Some("Python".to_string()),
    }
}

fn submit_query(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    update(state, Msg::SearchSubmitted)
}

#[test]
fn whitespace_query_is_rejected_before_dispatch() {
    init_logging();
    let (mut state, effects) = submit_query(AppState::new(), "   ");

    assert!(effects.is_empty());
    assert!(!state.view().searching);
    let notice = state.take_notification().expect("notification");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "Please enter a search query");
}

#[test]
fn submit_emits_search_with_trimmed_query_and_filters() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SourceFilterChanged(SourceFilter::Paper));
    let (state, _) = update(state, Msg::LevelFilterChanged(LevelFilter::Advanced));
    let (mut state, effects) = submit_query(state, "  transformers ");

    assert_eq!(
        effects,
        vec![Effect::Search {
            request_id: 1,
            query: "transformers".to_string(),
            filter: SearchFilter {
                source: SourceFilter::Paper,
                level: LevelFilter::Advanced,
            },
        }]
    );
    assert!(state.view().searching);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn completed_search_is_normalized_with_submitted_filter() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "vision");
    // Editing after submit must not change how the answer is normalized.
    let (state, _) = update(state, Msg::SourceFilterChanged(SourceFilter::Github));
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(vec![github_item("a")]),
        },
    );

    let view = state.view();
    assert!(!view.searching);
    let sources: Vec<_> = view.results.iter().map(|row| row.item.source.clone()).collect();
    assert_eq!(sources, [Source::Github, Source::Paper, Source::Dataset]);
    assert!(view.results[1].item.is_sample());
    assert!(view.results.iter().all(|row| !row.favorited));
}

#[test]
fn github_only_empty_result_reports_nothing_found() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SourceFilterChanged(SourceFilter::Github));
    let (state, _) = submit_query(state, "obscure");
    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(Vec::new()),
        },
    );

    assert!(state.view().results.is_empty());
    let notice = state.take_notification().expect("notification");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.text, "No projects or papers found.");
}

#[test]
fn failed_search_yields_no_results_and_no_samples() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "first");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(vec![github_item("a")]),
        },
    );
    let (state, _) = submit_query(state, "second");
    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 2,
            result: Err(BackendFailure::Unavailable {
                message: "connection refused".to_string(),
            }),
        },
    );

    assert!(state.view().results.is_empty());
    assert_eq!(
        state.take_notification().map(|notice| notice.text),
        Some("Failed to search".to_string())
    );
}

#[test]
fn stale_search_answers_are_ignored() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "old");
    let (state, effects) = submit_query(state, "new");
    assert!(matches!(effects[..], [Effect::Search { request_id: 2, .. }]));

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(vec![github_item("stale")]),
        },
    );
    assert!(state.view().searching);
    assert!(state.view().results.is_empty());

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 2,
            result: Ok(vec![github_item("fresh")]),
        },
    );
    let view = state.view();
    assert!(!view.searching);
    assert_eq!(view.results[0].item.id, "fresh");
}

#[test]
fn disabled_fallback_shows_only_backend_results() {
    init_logging();
    let state = AppState::with_fallback(FallbackPolicy::Disabled);
    assert!(!state.view().fallback_enabled);
    let (state, _) = submit_query(state, "anything");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(vec![github_item("a")]),
        },
    );

    let ids: Vec<_> = state
        .view()
        .results
        .iter()
        .map(|row| row.item.id.clone())
        .collect();
    assert_eq!(ids, ["a"]);
}

#[test]
fn timed_out_search_fails_and_late_answer_is_dropped() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "rust");
    assert!(state.view().searching);

    let (mut state, effects) = update(state, Msg::ResponseTimedOut);
    assert!(effects.is_empty());
    assert!(!state.view().searching);
    let notice = state.take_notification().expect("notification");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "Failed to search");

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(vec![github_item("late")]),
        },
    );
    assert!(state.view().results.is_empty());
}

#[test]
fn timeout_with_nothing_in_flight_changes_nothing() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::ResponseTimedOut);
    assert_eq!(state.take_notification(), None);
}

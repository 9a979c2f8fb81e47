use scout_core::{
    update, AppState, BackendFailure, Effect, Item, Level, Msg, ProfileSummary, Source,
};

fn dataset(id: &str) -> Item {
    Item {
        id: id.to_string(),
        title: format!("dataset {id}"),
        description: String::new(),
        source: Source::Dataset,
        level: Level::Easy,
        novelty_score: 5.5,
        url: "https://example.com/dataset1".to_string(),
        tags: Some(vec!["csv".to_string()]),
        stars: None,
        language: None,
    }
}

fn with_email(email: &str) -> AppState {
    update(AppState::new(), Msg::EmailLoaded(Some(email.to_string()))).0
}

#[test]
fn recommendations_require_an_email() {
    let (mut state, effects) = update(AppState::new(), Msg::RecommendationsRequested);
    assert!(effects.is_empty());
    assert_eq!(
        state.take_notification().map(|notice| notice.text),
        Some("Please create your profile first".to_string())
    );
}

#[test]
fn blank_stored_email_counts_as_missing() {
    let state = with_email("   ");
    assert_eq!(state.email(), None);
}

#[test]
fn request_loads_profile_and_recommendations() {
    let (state, effects) = update(with_email("ada@example.com"), Msg::RecommendationsRequested);
    assert_eq!(
        effects,
        vec![
            Effect::LoadProfile {
                email: "ada@example.com".to_string()
            },
            Effect::LoadRecommendations {
                request_id: 1,
                email: "ada@example.com".to_string()
            },
        ]
    );
    assert!(state.view().recommendations_loading);
}

#[test]
fn recommendations_are_not_normalized() {
    let (state, _) = update(with_email("ada@example.com"), Msg::RecommendationsRequested);
    let (state, _) = update(
        state,
        Msg::RecommendationsLoaded {
            request_id: 1,
            result: Ok(vec![dataset("d1")]),
        },
    );

    let view = state.view();
    assert!(!view.recommendations_loading);
    assert_eq!(view.recommendations.len(), 1);
    assert!(!view.recommendations[0].item.is_sample());
}

#[test]
fn unknown_profile_is_reported() {
    let (state, _) = update(with_email("nobody@example.com"), Msg::RecommendationsRequested);
    let (mut state, _) = update(
        state,
        Msg::ProfileLoaded {
            email: "nobody@example.com".to_string(),
            result: Err(BackendFailure::NotFound),
        },
    );
    assert_eq!(
        state.take_notification().map(|notice| notice.text),
        Some("Profile not found. Please create your profile first.".to_string())
    );

    let (mut state, _) = update(
        state,
        Msg::RecommendationsLoaded {
            request_id: 1,
            result: Err(BackendFailure::Unavailable {
                message: "500".to_string(),
            }),
        },
    );
    assert!(state.view().recommendations.is_empty());
    assert_eq!(
        state.take_notification().map(|notice| notice.text),
        Some("Failed to load recommendations".to_string())
    );
}

#[test]
fn profile_summary_is_kept_for_the_header() {
    let profile = ProfileSummary {
        name: "Ada".to_string(),
        skills: vec!["python".to_string()],
        interests: vec!["nlp".to_string()],
    };
    let (state, _) = update(with_email("ada@example.com"), Msg::RecommendationsRequested);
    let (state, _) = update(
        state,
        Msg::ProfileLoaded {
            email: "ada@example.com".to_string(),
            result: Ok(profile.clone()),
        },
    );
    assert_eq!(state.view().profile, Some(profile));
}

#[test]
fn profile_answer_for_a_replaced_email_is_ignored() {
    let (state, _) = update(with_email("old@example.com"), Msg::RecommendationsRequested);
    let (mut state, _) = update(state, Msg::EmailChanged("new@example.com".to_string()));
    state.take_notification();

    let (mut state, effects) = update(
        state,
        Msg::ProfileLoaded {
            email: "old@example.com".to_string(),
            result: Ok(ProfileSummary {
                name: "Old User".to_string(),
                ..ProfileSummary::default()
            }),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().profile, None);

    let (mut state, _) = update(
        state,
        Msg::ProfileLoaded {
            email: "old@example.com".to_string(),
            result: Err(BackendFailure::NotFound),
        },
    );
    assert_eq!(state.take_notification(), None);
    assert_eq!(state.email(), Some("new@example.com"));
}

#[test]
fn unrequested_profile_answer_is_ignored() {
    let (mut state, _) = update(
        with_email("ada@example.com"),
        Msg::ProfileLoaded {
            email: "ada@example.com".to_string(),
            result: Err(BackendFailure::NotFound),
        },
    );
    assert_eq!(state.take_notification(), None);
    assert_eq!(state.view().profile, None);
}

#[test]
fn timed_out_recommendations_fail_and_late_answer_is_dropped() {
    let (state, _) = update(with_email("ada@example.com"), Msg::RecommendationsRequested);
    let (mut state, _) = update(state, Msg::ResponseTimedOut);
    assert!(!state.view().recommendations_loading);
    assert_eq!(
        state.take_notification().map(|notice| notice.text),
        Some("Failed to load recommendations".to_string())
    );

    let (state, _) = update(
        state,
        Msg::RecommendationsLoaded {
            request_id: 1,
            result: Ok(vec![dataset("late")]),
        },
    );
    assert!(state.view().recommendations.is_empty());
}

#[test]
fn changing_email_persists_it_and_resets_recommendations() {
    let (state, _) = update(with_email("ada@example.com"), Msg::RecommendationsRequested);
    let (state, _) = update(
        state,
        Msg::RecommendationsLoaded {
            request_id: 1,
            result: Ok(vec![dataset("d1")]),
        },
    );

    let (state, effects) = update(state, Msg::EmailChanged(" grace@example.com ".to_string()));
    assert_eq!(
        effects,
        vec![Effect::SaveEmail {
            email: "grace@example.com".to_string()
        }]
    );
    assert_eq!(state.email(), Some("grace@example.com"));
    assert!(state.view().recommendations.is_empty());
}

#[test]
fn empty_recommendations_show_hint() {
    let (state, _) = update(with_email("ada@example.com"), Msg::RecommendationsRequested);
    let (mut state, _) = update(
        state,
        Msg::RecommendationsLoaded {
            request_id: 1,
            result: Ok(Vec::new()),
        },
    );
    assert_eq!(
        state.take_notification().map(|notice| notice.text),
        Some("No recommendations found. Try updating your profile.".to_string())
    );
}

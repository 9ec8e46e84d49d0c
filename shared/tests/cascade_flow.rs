use bh_shared::capabilities::ApiOrigin;
use bh_shared::{
    App, CascadeConfig, Effect, Event, FeedConfig, LocationLevel, Model, Placeholders,
    SelectionState,
};
use crux_core::testing::AppTester;

const FORM: &str = "signup-form";

fn mount(app: &AppTester<App, Effect>, model: &mut Model, prior: SelectionState) {
    app.update(
        Event::CascadeMounted {
            form_id: FORM.into(),
            config: CascadeConfig {
                prior,
                ..CascadeConfig::default()
            },
        },
        model,
    );
}

fn select(level: LocationLevel, value: &str) -> Event {
    Event::LocationSelected {
        form_id: FORM.into(),
        level,
        value: Some(value.into()),
    }
}

#[test]
fn mount_populates_regions_only() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    mount(&app, &mut model, SelectionState::default());

    let view = app.view(&model);
    let cascade = &view.cascades[0];
    assert_eq!(cascade.form_id, FORM);
    assert_eq!(cascade.widgets.len(), 4);
    assert_eq!(cascade.widgets[0].placeholder, "Select Region");
    assert_eq!(cascade.widgets[0].options, vec!["Caraga (Region XIII)"]);
    assert!(cascade.widgets[1..].iter().all(|w| w.options.is_empty()));
    assert_eq!(cascade.widgets[2].placeholder, "Select City/Municipality");
    assert_eq!(cascade.selection, SelectionState::default());
}

#[test]
fn prior_selection_is_replayed() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let prior = SelectionState::new(
        "Caraga (Region XIII)",
        "Agusan del Norte",
        "Butuan City",
        "Masao",
    );
    mount(&app, &mut model, prior.clone());

    let view = app.view(&model);
    let cascade = &view.cascades[0];
    assert_eq!(cascade.selection, prior);
    assert!(cascade.widgets[1].options.contains(&"Agusan del Sur".to_string()));
    assert!(cascade.widgets[2].options.contains(&"Cabadbaran City".to_string()));
    assert!(cascade.widgets[3].options.contains(&"Masao".to_string()));
    assert_eq!(cascade.widgets[3].selected.as_deref(), Some("Masao"));
}

#[test]
fn replay_matches_clicking_through() {
    let app = AppTester::<App, Effect>::default();

    let mut replayed = Model::default();
    mount(
        &app,
        &mut replayed,
        SelectionState::new("Caraga (Region XIII)", "Surigao del Sur", "Bislig City", ""),
    );

    let mut clicked = Model::default();
    mount(&app, &mut clicked, SelectionState::default());
    app.update(select(LocationLevel::Region, "Caraga (Region XIII)"), &mut clicked);
    app.update(select(LocationLevel::Province, "Surigao del Sur"), &mut clicked);
    app.update(select(LocationLevel::City, "Bislig City"), &mut clicked);

    assert_eq!(app.view(&replayed).cascades, app.view(&clicked).cascades);
}

#[test]
fn changing_a_level_clears_everything_below() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    mount(
        &app,
        &mut model,
        SelectionState::new(
            "Caraga (Region XIII)",
            "Agusan del Norte",
            "Butuan City",
            "Masao",
        ),
    );

    let update = app.update(select(LocationLevel::Province, "Dinagat Islands"), &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    let view = app.view(&model);
    let cascade = &view.cascades[0];
    assert_eq!(cascade.selection.province.as_deref(), Some("Dinagat Islands"));
    assert!(cascade.selection.city.is_none());
    assert!(cascade.selection.barangay.is_none());
    assert!(cascade.widgets[2].options.contains(&"San Jose".to_string()));
    assert!(cascade.widgets[3].options.is_empty());
}

#[test]
fn stale_prior_stops_at_first_invalid_level() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    mount(
        &app,
        &mut model,
        SelectionState::new("Caraga (Region XIII)", "Agusan del Norte", "Atlantis", "Masao"),
    );

    let view = app.view(&model);
    let cascade = &view.cascades[0];
    assert_eq!(cascade.selection.province.as_deref(), Some("Agusan del Norte"));
    assert!(cascade.selection.city.is_none());
    assert!(cascade.selection.barangay.is_none());
    assert!(!cascade.widgets[2].options.is_empty());
    assert!(cascade.widgets[3].options.is_empty());
}

#[test]
fn selection_for_unknown_form_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    mount(&app, &mut model, SelectionState::default());

    app.update(
        Event::LocationSelected {
            form_id: "profile-form".into(),
            level: LocationLevel::Region,
            value: Some("Caraga (Region XIII)".into()),
        },
        &mut model,
    );

    assert_eq!(app.view(&model).cascades[0].selection, SelectionState::default());
}

#[test]
fn independent_forms_keep_their_own_state() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    mount(&app, &mut model, SelectionState::default());
    app.update(
        Event::CascadeMounted {
            form_id: "post-form".into(),
            config: CascadeConfig::default(),
        },
        &mut model,
    );

    app.update(select(LocationLevel::Region, "Caraga (Region XIII)"), &mut model);

    let view = app.view(&model);
    assert_eq!(view.cascades.len(), 2);
    assert!(view.cascades[0].selection.region.is_some());
    assert!(view.cascades[1].selection.region.is_none());

    app.update(
        Event::CascadeUnmounted {
            form_id: "post-form".into(),
        },
        &mut model,
    );
    assert_eq!(app.view(&model).cascades.len(), 1);
}

#[test]
fn feed_placeholders_apply_to_plain_mounts() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let mut config = FeedConfig::new(ApiOrigin::new("https://bh.example.com").unwrap());
    config.placeholders = Placeholders {
        region: "Rehiyon".into(),
        ..Placeholders::default()
    };
    app.update(
        Event::PageLoaded {
            config,
            csrf_field: None,
            cookie: None,
        },
        &mut model,
    );
    mount(&app, &mut model, SelectionState::default());

    assert_eq!(app.view(&model).cascades[0].widgets[0].placeholder, "Rehiyon");
}

#[test]
fn mount_event_from_shell_json() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let event: Event = serde_json::from_str(
        r#"{"CascadeMounted": {"form_id": "signup-form", "config": {"prior": {"region": "Caraga (Region XIII)", "province": "Surigao del Norte"}}}}"#,
    )
    .unwrap();
    app.update(event, &mut model);

    let view = app.view(&model);
    let cascade = &view.cascades[0];
    assert_eq!(cascade.selection.province.as_deref(), Some("Surigao del Norte"));
    assert!(cascade.widgets[2].options.contains(&"Surigao City".to_string()));
}

use fontlab::app::filter::filter_catalog;
use fontlab::domain::catalog::{find_by_id, CATALOG};
use fontlab::domain::{Category, CategoryFilter, ThemePreference};
use fontlab::worker::{WorkerMessage, WorkerResponse};
use fontlab::{handle_event, Action, AppState, EditField, Event};
use std::time::Duration;

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).expect("handler is infallible")
}

fn type_into(state: &mut AppState, field: EditField, text: &str) {
    send(state, Event::FocusField(field));
    for c in text.chars() {
        send(state, Event::Char(c));
    }
    send(state, Event::FinishEditing);
}

fn mounted_ids(state: &AppState) -> Vec<&'static str> {
    state.gallery.cards().iter().map(|c| c.descriptor_id).collect()
}

fn open(state: &mut AppState, id: &str) {
    send(state, Event::OpenDetailFor { id: id.to_string() });
    assert!(state.overlay.is_open());
}

#[test]
fn counter_always_matches_the_filtered_catalog() {
    let mut state = AppState::default();

    for tab in CategoryFilter::tabs() {
        send(&mut state, Event::SelectCategory(tab));
        assert_eq!(state.gallery.result_count(), filter_catalog(CATALOG, tab, "").len());
        assert_eq!(state.gallery.result_count(), state.gallery.cards().len());
    }

    send(&mut state, Event::SelectCategory(CategoryFilter::All));
    type_into(&mut state, EditField::Search, "레트로");
    assert_eq!(mounted_ids(&state), vec!["neon-glow", "retro-sunset", "arcade"]);
    assert_eq!(state.gallery.result_count(), 3);
}

#[test]
fn search_is_lowercased_before_matching() {
    let mut state = AppState::default();
    type_into(&mut state, EditField::Search, "3D");

    // Lowercased to "3d": matches the name "3D 엠보스" but no "3D" label.
    assert_eq!(state.session.search_input, "3D");
    assert_eq!(mounted_ids(&state), vec!["emboss"]);
}

#[test]
fn empty_result_shows_zero_and_empty_state() {
    let mut state = AppState::default();
    type_into(&mut state, EditField::Search, "zzz");

    assert_eq!(state.gallery.result_count(), 0);
    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.empty_state.is_some());
    assert!(vm.cards.is_empty());
}

#[test]
fn sample_text_updates_previews_in_place() {
    let mut state = AppState::default();
    send(&mut state, Event::SelectCategory(CategoryFilter::Only(Category::Futuristic)));
    let before = mounted_ids(&state);

    type_into(&mut state, EditField::SampleText, "Hi");

    assert_eq!(mounted_ids(&state), before);
    for card in state.gallery.cards() {
        assert_eq!(card.preview.text, "Hi");
        if let Some(echo) = &card.preview.echo {
            assert_eq!(echo, "Hi");
        }
    }
    let glitch = state
        .gallery
        .cards()
        .iter()
        .find(|c| c.descriptor_id == "glitch")
        .expect("glitch is futuristic");
    assert_eq!(glitch.preview.echo.as_deref(), Some("Hi"));
}

#[test]
fn clearing_sample_text_restores_placeholder() {
    let mut state = AppState::default();
    type_into(&mut state, EditField::SampleText, "ab");

    send(&mut state, Event::FocusField(EditField::SampleText));
    send(&mut state, Event::Backspace);
    send(&mut state, Event::Backspace);

    assert!(state
        .gallery
        .cards()
        .iter()
        .all(|c| c.preview.text == state.session.placeholder));
}

#[test]
fn size_changes_keep_the_card_list() {
    let mut state = AppState::default();
    let before = mounted_ids(&state);

    let (render, _) = send(&mut state, Event::IncreaseSize);

    assert!(render);
    assert_eq!(mounted_ids(&state), before);
    assert_eq!(state.gallery.size_readout(), "44px");
    assert!(state.gallery.cards().iter().all(|c| c.preview.size_px == 44));
}

#[test]
fn size_stops_at_the_bounds() {
    let mut state = AppState::default();
    for _ in 0..100 {
        send(&mut state, Event::DecreaseSize);
    }
    assert_eq!(state.session.sample_size, 16);

    let (render, _) = send(&mut state, Event::DecreaseSize);
    assert!(!render);
}

#[test]
fn overlay_shows_the_raw_style_code() {
    let mut state = AppState::default();
    open(&mut state, "arcade");

    let arcade = find_by_id("arcade").expect("arcade");
    assert_eq!(state.overlay.code(), Some(arcade.raw_style_code));

    let vm = state.compute_viewmodel(60, 120);
    let overlay = vm.overlay.expect("overlay view");
    assert_eq!(overlay.title, "아케이드 픽셀 - CSS 코드");
    assert_eq!(overlay.code_lines.join("\n"), arcade.raw_style_code);
}

#[test]
fn every_close_path_closes_the_overlay() {
    let closers = [
        Event::CloseDetail,
        Event::Escape,
        Event::ClickAt { line: 0, column: 0 },
    ];

    for closer in closers {
        let mut state = AppState::default();
        open(&mut state, "neon-glow");

        let (render, _) = send(&mut state, closer.clone());
        assert!(render, "{closer:?}");
        assert!(!state.overlay.is_open(), "{closer:?}");
    }
}

#[test]
fn click_inside_overlay_keeps_it_open() {
    let mut state = AppState::default();
    state.viewport = (40, 100);
    open(&mut state, "neon-glow");

    let (render, _) = send(&mut state, Event::ClickAt { line: 19, column: 49 });
    assert!(!render);
    assert!(state.overlay.is_open());
}

#[test]
fn gallery_is_frozen_behind_the_overlay() {
    let mut state = AppState::default();
    open(&mut state, "neon-glow");
    let selected = state.selected_index;

    for event in [Event::MoveDown, Event::NextCategory, Event::IncreaseSize, Event::ToggleTheme] {
        let (render, actions) = send(&mut state, event);
        assert!(!render);
        assert!(actions.is_empty());
    }
    assert_eq!(state.selected_index, selected);
    assert_eq!(state.session.active_category, CategoryFilter::All);
}

#[test]
fn copy_success_shows_toast_for_configured_duration() {
    let mut state = AppState::default();
    open(&mut state, "neon-glow");
    let code = state.overlay.code().expect("code").to_string();

    let (_, actions) = send(&mut state, Event::CopyStyleCode);
    assert_eq!(actions, vec![Action::CopyToClipboard { text: code }]);

    let (render, actions) = send(&mut state, Event::ClipboardSettled { succeeded: true });
    assert!(render);
    assert_eq!(
        actions,
        vec![Action::ScheduleToastDismiss {
            after: Duration::from_secs(2)
        }]
    );
    assert!(state.toast.is_visible());
    assert!(state.take_terminal_output().is_empty());
    assert!(state.overlay.is_open());
}

#[test]
fn overlapping_toasts_hide_after_the_last_timer() {
    let mut state = AppState::default();
    open(&mut state, "neon-glow");

    for _ in 0..2 {
        send(&mut state, Event::CopyStyleCode);
        send(&mut state, Event::ClipboardSettled { succeeded: true });
    }

    send(&mut state, Event::ToastExpired);
    assert!(state.toast.is_visible());
    let (render, _) = send(&mut state, Event::ToastExpired);
    assert!(render);
    assert!(!state.toast.is_visible());
}

#[test]
fn back_to_back_copies_each_get_a_confirmation() {
    let mut state = AppState::default();
    open(&mut state, "fire");

    send(&mut state, Event::CopyStyleCode);
    send(&mut state, Event::CopyStyleCode);

    for _ in 0..2 {
        let (render, actions) = send(&mut state, Event::ClipboardSettled { succeeded: false });
        assert!(render);
        assert!(matches!(actions[..], [Action::ScheduleToastDismiss { .. }]));
    }
    assert_eq!(state.take_terminal_output().len(), 2);

    send(&mut state, Event::ToastExpired);
    assert!(state.toast.is_visible());
    send(&mut state, Event::ToastExpired);
    assert!(!state.toast.is_visible());
}

#[test]
fn clipboard_failure_queues_osc52_and_still_confirms() {
    let mut state = AppState::default();
    open(&mut state, "fire");

    send(&mut state, Event::CopyStyleCode);
    send(&mut state, Event::ClipboardSettled { succeeded: false });

    let output = state.take_terminal_output();
    assert_eq!(output.len(), 1);
    assert!(output[0].starts_with("\x1b]52;c;"));
    assert!(state.toast.is_visible());
}

#[test]
fn theme_toggle_persists_through_the_worker() {
    let mut state = AppState::default();
    assert_eq!(state.session.theme, ThemePreference::Light);

    let (render, actions) = send(&mut state, Event::ToggleTheme);

    assert!(render);
    assert_eq!(state.session.theme, ThemePreference::Dark);
    assert!(matches!(
        actions.as_slice(),
        [Action::PostToWorker(WorkerMessage::SaveTheme {
            theme: ThemePreference::Dark,
            ..
        })]
    ));
}

#[test]
fn stored_preference_arrives_after_permissions() {
    let mut state = AppState::default();

    let (_, actions) = send(&mut state, Event::PermissionsGranted);
    assert!(matches!(
        actions.as_slice(),
        [Action::PostToWorker(WorkerMessage::LoadPreferences { .. })]
    ));

    send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
            theme: Some(ThemePreference::Dark),
        }),
    );
    assert_eq!(state.session.theme, ThemePreference::Dark);
}

#[test]
fn quitting_hides_the_pane() {
    let mut state = AppState::default();
    let (_, actions) = send(&mut state, Event::CloseFocus);
    assert_eq!(actions, vec![Action::CloseFocus]);
}

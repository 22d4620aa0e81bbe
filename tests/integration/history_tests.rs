use super::given_a_us_dollar_screen;
use sumador_mvu::{ScreenState, Slot};

#[test]
fn given_a_history_should_render_the_panel_with_heading_and_clear_button() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "1").when_compute_pressed();

    test.renders.with_last(|props| {
        let panel = props.history.as_ref().unwrap();
        assert_eq!(panel.heading, "Historial:");
        assert_eq!(panel.clear.label, "Limpiar Historial");
        assert_eq!(panel.entries, vec!["1.0 + 0.0 = $1.00".to_string()]);
    });
}

#[test]
fn given_two_computes_when_cleared_should_hide_the_panel_and_keep_the_result() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "10")
        .when_typed(Slot::Second, "5")
        .when_compute_pressed()
        .when_compute_pressed()
        .when_clear_pressed();

    assert!(test.last_history().is_none());
    assert_eq!(test.last_result().as_deref(), Some("Resultado: $15.00"));
    assert_eq!(test.driver.model().state(), ScreenState::HasResult);
    assert_eq!(test.driver.model().input(Slot::First), "10");
    assert_eq!(test.driver.model().input(Slot::Second), "5");
}

#[test]
fn given_history_entries_should_keep_them_oldest_first() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "1")
        .when_compute_pressed()
        .when_typed(Slot::First, "2")
        .when_compute_pressed()
        .when_typed(Slot::First, "3")
        .when_compute_pressed();

    assert_eq!(
        test.last_history(),
        Some(vec![
            "1.0 + 0.0 = $1.00".to_string(),
            "2.0 + 0.0 = $2.00".to_string(),
            "3.0 + 0.0 = $3.00".to_string(),
        ])
    );
}

#[test]
fn given_an_empty_history_when_cleared_should_render_the_same_state() {
    let mut test = given_a_us_dollar_screen();
    let emitter = test.driver.emitter();

    emitter.clear_history();
    emitter.clear_history();
    test.driver.process_events();

    assert_eq!(test.renders.count(), 3);
    assert!(test.last_history().is_none());
    assert!(test.last_result().is_none());
    assert_eq!(test.driver.model().state(), ScreenState::Idle);
}

#[test]
fn given_a_cleared_history_when_computed_again_should_start_a_new_log() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "4")
        .when_compute_pressed()
        .when_clear_pressed()
        .when_typed(Slot::Second, "1")
        .when_compute_pressed();

    assert_eq!(test.last_history(), Some(vec!["4.0 + 1.0 = $5.00".to_string()]));
}

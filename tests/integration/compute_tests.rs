use super::{given_a_formatter, given_a_us_dollar_screen, MockFormatter};
use mockall::predicate::eq;
use sumador_mvu::Slot;

#[test]
fn given_two_numbers_when_computed_should_show_the_formatted_sum() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "10")
        .when_typed(Slot::Second, "5")
        .when_compute_pressed();

    assert_eq!(test.driver.model().result(), "$15.00");
    assert_eq!(test.last_result().as_deref(), Some("Resultado: $15.00"));
    assert_eq!(
        test.last_history(),
        Some(vec!["10.0 + 5.0 = $15.00".to_string()])
    );
}

#[test]
fn given_an_unparseable_operand_when_computed_should_read_it_as_zero() {
    let mut formatter = MockFormatter::new();
    formatter
        .expect_format()
        .with(eq(5.0))
        .times(1)
        .returning(|_| "5.00".to_string());
    let mut test = given_a_formatter(formatter);

    test.when_typed(Slot::First, "abc")
        .when_typed(Slot::Second, "5")
        .when_compute_pressed();

    assert_eq!(test.driver.model().result(), "5.00");
    assert_eq!(test.last_history(), Some(vec!["0.0 + 5.0 = 5.00".to_string()]));
}

#[test]
fn given_empty_fields_when_computed_should_format_zero() {
    let mut formatter = MockFormatter::new();
    formatter
        .expect_format()
        .with(eq(0.0))
        .times(1)
        .returning(|_| "zero".to_string());
    let mut test = given_a_formatter(formatter);

    test.when_compute_pressed();

    assert_eq!(test.last_result().as_deref(), Some("Resultado: zero"));
    assert_eq!(test.last_history(), Some(vec!["0.0 + 0.0 = zero".to_string()]));
}

#[test]
fn given_no_compute_should_never_call_the_formatter() {
    let mut formatter = MockFormatter::new();
    formatter.expect_format().never();
    let mut test = given_a_formatter(formatter);

    test.when_typed(Slot::First, "1").when_typed(Slot::Second, "2");

    assert!(test.last_result().is_none());
}

#[test]
fn given_identical_inputs_when_computed_twice_should_log_twice_with_a_stable_result() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "2.5")
        .when_typed(Slot::Second, "2.5")
        .when_compute_pressed();
    let first_result = test.last_result();
    test.when_compute_pressed();

    assert_eq!(test.last_result(), first_result);
    assert_eq!(
        test.last_history(),
        Some(vec![
            "2.5 + 2.5 = $5.00".to_string(),
            "2.5 + 2.5 = $5.00".to_string(),
        ])
    );
}

#[test]
fn given_n_computes_should_hold_n_history_entries() {
    let mut test = given_a_us_dollar_screen();

    for n in 1..=5 {
        test.when_typed(Slot::First, &n.to_string()).when_compute_pressed();
        assert_eq!(test.driver.model().history().len(), n);
    }
}

#[test]
fn given_padded_operands_when_computed_should_sum_the_numbers() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, " 5")
        .when_typed(Slot::Second, "5 ")
        .when_compute_pressed();

    assert_eq!(test.last_result().as_deref(), Some("Resultado: $10.00"));
    assert_eq!(test.last_history(), Some(vec!["5.0 + 5.0 = $10.00".to_string()]));
}

#[test]
fn given_lowercase_infinity_or_nan_when_computed_should_read_them_as_zero() {
    let mut test = given_a_us_dollar_screen();

    test.when_typed(Slot::First, "inf")
        .when_typed(Slot::Second, "1")
        .when_compute_pressed()
        .when_typed(Slot::First, "nan")
        .when_compute_pressed();

    assert_eq!(test.last_result().as_deref(), Some("Resultado: $1.00"));
    assert_eq!(
        test.last_history(),
        Some(vec![
            "0.0 + 1.0 = $1.00".to_string(),
            "0.0 + 1.0 = $1.00".to_string(),
        ])
    );
}

//! Integration tests for the interactive conversion loop
//!
//! Drives the controller with scripted input and checks what the user sees.

mod common;

use common::{sample_rates, Event, ScriptedPresenter};
use xchange::controller::{report_session_error, Controller, LoopState, SessionEnd};
use xchange::error::XchangeError;
use xchange::rates::RateTable;

fn run_session(inputs: &[&str], rates: &RateTable) -> (xchange::error::Result<SessionEnd>, ScriptedPresenter, usize) {
    let mut controller = Controller::new(ScriptedPresenter::new(inputs));
    let outcome = controller.run(rates);
    let iterations = controller.iterations();
    (outcome, controller.into_presenter(), iterations)
}

#[test]
fn test_usd_to_eur_scenario() {
    let rates = RateTable::from_pairs([("USD", 1.0), ("EUR", 0.85)]).unwrap();
    let (outcome, presenter, iterations) = run_session(&["USD", "EUR", "100", "exit"], &rates);

    assert_eq!(outcome.unwrap(), SessionEnd::UserExit);
    assert_eq!(iterations, 1);
    assert_eq!(presenter.successes(), vec!["100 USD is equal to 85.00 EUR"]);
}

#[test]
fn test_usd_to_jpy_scenario() {
    let rates = RateTable::from_pairs([("USD", 1.0), ("JPY", 110.0)]).unwrap();
    let (outcome, presenter, _) = run_session(&["usd", "jpy", "10", "EXIT"], &rates);

    assert!(outcome.is_ok());
    assert_eq!(presenter.successes(), vec!["10 USD is equal to 1100.00 JPY"]);
}

#[test]
fn test_exit_at_source_prompt() {
    let (outcome, presenter, iterations) = run_session(&["exit"], &sample_rates());

    assert_eq!(outcome.unwrap(), SessionEnd::UserExit);
    assert_eq!(iterations, 0);
    assert!(presenter.successes().is_empty());
    assert_eq!(presenter.prompts().len(), 1);
    assert_eq!(presenter.events.last(), Some(&Event::Farewell));
}

#[test]
fn test_exit_at_target_prompt_any_case() {
    let (outcome, presenter, iterations) = run_session(&["USD", "ExIt"], &sample_rates());

    assert_eq!(outcome.unwrap(), SessionEnd::UserExit);
    assert_eq!(iterations, 0);
    assert_eq!(presenter.prompts().len(), 2);
    assert_eq!(presenter.events.last(), Some(&Event::Farewell));
}

#[test]
fn test_invalid_amount_restarts_from_source() {
    let inputs = ["USD", "EUR", "abc", "GBP", "USD", "79", "exit"];
    let (outcome, presenter, iterations) = run_session(&inputs, &sample_rates());

    assert!(outcome.is_ok());
    assert_eq!(iterations, 1);
    assert_eq!(presenter.errors(), vec!["Invalid amount. Please enter a number."]);
    assert_eq!(presenter.successes(), vec!["79 GBP is equal to 100.00 USD"]);

    // After the bad amount the next prompt is for the source currency again
    let prompts = presenter.prompts();
    assert!(prompts[3].starts_with("Enter source currency"));
}

#[test]
fn test_invalid_amount_waits_for_ack() {
    let (_, presenter, _) = run_session(&["USD", "EUR", "12,5", "exit"], &sample_rates());

    let error_at = presenter
        .events
        .iter()
        .position(|e| matches!(e, Event::Error(_)))
        .unwrap();
    assert_eq!(presenter.events[error_at + 1], Event::Ack);
    assert_eq!(presenter.events[error_at + 2], Event::Clear);
}

#[test]
fn test_unsupported_currency_ends_session() {
    let (outcome, presenter, _) = run_session(&["XYZ", "USD", "10", "exit"], &sample_rates());

    let err = outcome.unwrap_err();
    assert!(matches!(err, XchangeError::UnsupportedCurrency(ref code) if code == "XYZ"));
    assert_eq!(err.exit_code(), 1);
    // The remaining "exit" is never read
    assert_eq!(presenter.remaining_inputs(), 1);
    assert!(presenter.successes().is_empty());
}

#[test]
fn test_missing_rate_ends_session() {
    let (outcome, _, _) = run_session(&["BTC", "USD", "1"], &sample_rates());

    let err = outcome.unwrap_err();
    assert!(matches!(err, XchangeError::RateUnavailable(ref code) if code == "BTC"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_zero_rate_ends_session() {
    let (outcome, _, _) = run_session(&["CHF", "USD", "1"], &sample_rates());

    let err = outcome.unwrap_err();
    assert!(matches!(err, XchangeError::ZeroRate(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_end_of_input_is_cancellation() {
    let (outcome, presenter, _) = run_session(&["USD"], &sample_rates());

    let err = outcome.unwrap_err();
    assert!(matches!(err, XchangeError::UserCancelled));
    assert_eq!(err.exit_code(), 0);
    assert!(!presenter.events.contains(&Event::Farewell));
}

#[test]
fn test_multiple_conversions() {
    let inputs = ["USD", "EUR", "100", "EUR", "JPY", "8.5", "exit"];
    let (outcome, presenter, iterations) = run_session(&inputs, &sample_rates());

    assert!(outcome.is_ok());
    assert_eq!(iterations, 2);
    assert_eq!(
        presenter.successes(),
        vec![
            "100 USD is equal to 85.00 EUR",
            "8.5 EUR is equal to 1100.00 JPY",
        ]
    );
}

#[test]
fn test_banner_each_iteration() {
    let (_, presenter, _) = run_session(&["USD", "EUR", "1", "exit"], &sample_rates());

    let headers = presenter
        .events
        .iter()
        .filter(|e| matches!(e, Event::Header(title) if title == "CURRENCY CONVERTER"))
        .count();
    assert_eq!(headers, 2);
    assert!(presenter
        .events
        .contains(&Event::Hint("(Type 'exit' to quit)".to_string())));
}

#[test]
fn test_step_transitions() {
    let rates = sample_rates();
    let mut controller = Controller::new(ScriptedPresenter::new(&["usd", "eur", "2"]));

    let state = controller.step(LoopState::AwaitingFromCurrency, &rates).unwrap();
    assert_eq!(state, LoopState::AwaitingToCurrency { from: "usd".to_string() });

    let state = controller.step(state, &rates).unwrap();
    assert_eq!(
        state,
        LoopState::AwaitingAmount {
            from: "usd".to_string(),
            to: "eur".to_string()
        }
    );

    let state = controller.step(state, &rates).unwrap();
    assert!(matches!(state, LoopState::Converting { amount, .. } if amount == 2.0));

    let state = controller.step(state, &rates).unwrap();
    match &state {
        LoopState::ShowResult(conversion) => {
            assert_eq!(conversion.from, "USD");
            assert_eq!(conversion.to, "EUR");
            assert!((conversion.result - 1.7).abs() < 1e-9);
        }
        other => panic!("unexpected state: {:?}", other),
    }

    let state = controller.step(state, &rates).unwrap();
    assert_eq!(state, LoopState::AwaitingFromCurrency);
    assert_eq!(controller.iterations(), 1);
}

#[test]
fn test_report_cancellation_says_goodbye() {
    let mut out = ScriptedPresenter::new(&[]);
    let code = report_session_error(&mut out, &XchangeError::UserCancelled).unwrap();

    assert_eq!(code, 0);
    assert_eq!(
        out.events,
        vec![
            Event::Info("Operation cancelled by user".to_string()),
            Event::Farewell,
        ]
    );
}

#[test]
fn test_report_fatal_errors_exit_one() {
    let errors = [
        XchangeError::FetchFailure("Error fetching data from API: refused".to_string()),
        XchangeError::UnsupportedCurrency("XYZ".to_string()),
        XchangeError::RateUnavailable("BTC".to_string()),
        XchangeError::ZeroRate("CHF".to_string()),
    ];

    for err in &errors {
        let mut out = ScriptedPresenter::new(&[]);
        let code = report_session_error(&mut out, err).unwrap();

        assert_eq!(code, 1);
        assert_eq!(out.errors(), vec![err.to_string().as_str()]);
        assert!(!out.events.contains(&Event::Farewell));
    }
}

#[test]
fn test_report_io_error_is_unexpected() {
    let err = XchangeError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
    let mut out = ScriptedPresenter::new(&[]);
    let code = report_session_error(&mut out, &err).unwrap();

    assert_eq!(code, 1);
    assert_eq!(out.errors(), vec!["Unexpected error: IO error: closed"]);
}

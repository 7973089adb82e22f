//! Interactive conversion loop
//!
//! ```text
//! AwaitingFromCurrency -> AwaitingToCurrency -> AwaitingAmount -> Converting -> ShowResult
//!        ^                        |                     |                          |
//!        |                      "exit"            bad amount                       |
//!        +------------------------|---------------------+--------------------------+
//!                                 v
//!                                Exit   (also reachable from AwaitingFromCurrency)
//! ```
//!
//! The rate table is passed in and only read. Errors are routed through
//! [`XchangeError::policy`]: retryable ones restart the iteration, all others
//! end the session and are returned to the caller.

use crate::converter::Conversion;
use crate::error::{ErrorPolicy, Result, XchangeError};
use crate::presenter::Presenter;
use crate::rates::RateTable;
use log::{debug, info, warn};

pub const EXIT_TOKEN: &str = "exit";
pub const TITLE: &str = "CURRENCY CONVERTER";
pub const SUBTITLE: &str = "Real-time exchange rates powered by fxratesapi.com";
const EXIT_HINT: &str = "(Type 'exit' to quit)";
const FROM_PROMPT: &str = "Enter source currency (e.g., USD): ";
const TO_PROMPT: &str = "Enter target currency (e.g., EUR): ";
const AMOUNT_PROMPT: &str = "Enter amount to convert: ";
const INVALID_AMOUNT_MESSAGE: &str = "Invalid amount. Please enter a number.";
pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user";

/// Where the loop is
#[derive(Debug, Clone, PartialEq)]
pub enum LoopState {
    AwaitingFromCurrency,
    AwaitingToCurrency { from: String },
    AwaitingAmount { from: String, to: String },
    Converting { amount: f64, from: String, to: String },
    ShowResult(Conversion),
    Exit,
}

/// How a session ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit token
    UserExit,
}

/// Returns true if `input` is the exit token, in any case
pub fn is_exit_token(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_TOKEN)
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| XchangeError::InvalidAmount(input.trim().to_string()))
}

/// Drives the conversion loop through a presenter
pub struct Controller<P: Presenter> {
    presenter: P,
    iterations: usize,
}

impl<P: Presenter> Controller<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            iterations: 0,
        }
    }

    /// Number of conversions shown so far
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Run until the user exits or a fatal error occurs
    pub fn run(&mut self, rates: &RateTable) -> Result<SessionEnd> {
        let mut state = LoopState::AwaitingFromCurrency;

        loop {
            if state == LoopState::Exit {
                info!("Session ended by user after {} conversions", self.iterations);
                self.presenter.show_farewell()?;
                return Ok(SessionEnd::UserExit);
            }

            state = match self.step(state, rates) {
                Ok(next) => next,
                Err(err) => match err.policy() {
                    ErrorPolicy::Retry => {
                        warn!("{}", err);
                        self.presenter.show_error(&recoverable_message(&err))?;
                        self.presenter.wait_for_ack()?;
                        LoopState::AwaitingFromCurrency
                    }
                    ErrorPolicy::Farewell | ErrorPolicy::Terminate => return Err(err),
                },
            };
        }
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self, state: LoopState, rates: &RateTable) -> Result<LoopState> {
        match state {
            LoopState::AwaitingFromCurrency => {
                self.show_banner(rates)?;
                let input = self.read(FROM_PROMPT)?;
                if is_exit_token(&input) {
                    return Ok(LoopState::Exit);
                }
                Ok(LoopState::AwaitingToCurrency { from: input })
            }
            LoopState::AwaitingToCurrency { from } => {
                let input = self.read(TO_PROMPT)?;
                if is_exit_token(&input) {
                    return Ok(LoopState::Exit);
                }
                Ok(LoopState::AwaitingAmount { from, to: input })
            }
            LoopState::AwaitingAmount { from, to } => {
                let input = self.read(AMOUNT_PROMPT)?;
                let amount = parse_amount(&input)?;
                Ok(LoopState::Converting { amount, from, to })
            }
            LoopState::Converting { amount, from, to } => {
                debug!("Converting {} {} to {}", amount, from, to);
                let conversion = Conversion::execute(amount, &from, &to, rates)?;
                Ok(LoopState::ShowResult(conversion))
            }
            LoopState::ShowResult(conversion) => {
                self.presenter.show_conversion(&conversion)?;
                self.iterations += 1;
                self.presenter.wait_for_ack()?;
                Ok(LoopState::AwaitingFromCurrency)
            }
            LoopState::Exit => Ok(LoopState::Exit),
        }
    }

    fn show_banner(&mut self, rates: &RateTable) -> Result<()> {
        self.presenter.clear()?;
        self.presenter.show_header(TITLE, &subtitle(rates))?;
        self.presenter.show_hint(EXIT_HINT)
    }

    fn read(&mut self, label: &str) -> Result<String> {
        self.presenter
            .prompt(label)?
            .ok_or(XchangeError::UserCancelled)
    }
}

/// Show a session-ending error and return the process exit status
pub fn report_session_error<P: Presenter>(out: &mut P, err: &XchangeError) -> Result<i32> {
    debug!("Session ended: {:?}", err);
    match err.policy() {
        ErrorPolicy::Farewell => {
            out.show_info(CANCELLED_MESSAGE)?;
            out.show_farewell()?;
        }
        ErrorPolicy::Retry | ErrorPolicy::Terminate => {
            out.show_error(&session_error_message(err))?;
        }
    }
    Ok(err.exit_code())
}

fn session_error_message(err: &XchangeError) -> String {
    match err {
        XchangeError::IoError(_) => format!("Unexpected error: {}", err),
        other => other.to_string(),
    }
}

fn subtitle(rates: &RateTable) -> String {
    match (rates.date(), rates.base()) {
        (Some(date), Some(base)) => format!("{}\nRates as of {} (base {})", SUBTITLE, date, base),
        (Some(date), None) => format!("{}\nRates as of {}", SUBTITLE, date),
        _ => SUBTITLE.to_string(),
    }
}

fn recoverable_message(err: &XchangeError) -> String {
    match err {
        XchangeError::InvalidAmount(_) => INVALID_AMOUNT_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

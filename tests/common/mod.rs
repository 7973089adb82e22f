//! Shared test helpers
#![allow(dead_code)]

use std::collections::VecDeque;
use xchange::error::Result;
use xchange::presenter::Presenter;
use xchange::rates::RateTable;

/// Everything a presenter was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Clear,
    Header(String),
    Hint(String),
    Info(String),
    Error(String),
    Success(String),
    Prompt(String),
    Ack,
    Farewell,
}

/// Presenter fed from a fixed script of input lines
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    inputs: VecDeque<String>,
    pub events: Vec<Event>,
}

impl ScriptedPresenter {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            events: Vec::new(),
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Success(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Prompt(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Presenter for ScriptedPresenter {
    fn clear(&mut self) -> Result<()> {
        self.events.push(Event::Clear);
        Ok(())
    }

    fn show_header(&mut self, title: &str, _subtitle: &str) -> Result<()> {
        self.events.push(Event::Header(title.to_string()));
        Ok(())
    }

    fn show_hint(&mut self, text: &str) -> Result<()> {
        self.events.push(Event::Hint(text.to_string()));
        Ok(())
    }

    fn show_info(&mut self, text: &str) -> Result<()> {
        self.events.push(Event::Info(text.to_string()));
        Ok(())
    }

    fn show_error(&mut self, text: &str) -> Result<()> {
        self.events.push(Event::Error(text.to_string()));
        Ok(())
    }

    fn show_success(&mut self, text: &str) -> Result<()> {
        self.events.push(Event::Success(text.to_string()));
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.events.push(Event::Prompt(label.to_string()));
        Ok(self.inputs.pop_front())
    }

    fn wait_for_ack(&mut self) -> Result<()> {
        self.events.push(Event::Ack);
        Ok(())
    }

    fn show_farewell(&mut self) -> Result<()> {
        self.events.push(Event::Farewell);
        Ok(())
    }
}

pub fn sample_rates() -> RateTable {
    RateTable::from_pairs([
        ("USD", 1.0),
        ("EUR", 0.85),
        ("JPY", 110.0),
        ("GBP", 0.79),
        ("CHF", 0.0),
    ])
    .unwrap()
}

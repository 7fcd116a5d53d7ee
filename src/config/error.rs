//! Configuration errors.

use thiserror::Error;

/// Problems found while validating a machine configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Transition ({from}, {event}) registered {count} times; the last registration wins")]
    DuplicateTransition {
        from: String,
        event: String,
        count: usize,
    },

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("Invalid configuration: {}", format_problems(.0))]
    Invalid(Vec<ConfigError>),
}

fn format_problems(problems: &[ConfigError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

use thiserror::Error;

/// Rejections raised while turning raw user input into ledger calls.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Invalid amount `{0}`")]
    InvalidValue(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveValue(f64),
    #[error("Unknown entry type `{0}` (use income or expense)")]
    UnknownEntryType(String),
    #[error("Malformed item id `{0}` (use <type>-<id>, e.g. expense-0)")]
    MalformedItemId(String),
}

/// Failures while loading or editing display preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown setting `{0}`")]
    UnknownKey(String),
    #[error("Invalid value `{value}` for `{key}` (use true or false)")]
    InvalidValue { key: String, value: String },
}

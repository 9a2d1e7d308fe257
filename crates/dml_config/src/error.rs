//! Schema Errors - Everything that can go wrong while declaring or parsing options

use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("unknown option '{flag}'")]
    UnknownOption { flag: String },

    #[error("invalid value '{value}' for '{flag}': {reason}")]
    TypeCoercion {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("option '{flag}' expects a value but none was supplied")]
    MissingValue { flag: String },

    #[error("option '--{flag}' is declared by both '{first}' and '{second}'")]
    DuplicateOption {
        flag: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("option group '{0}' was never registered")]
    MissingGroup(&'static str),

    #[error("failed to read the working directory: {0}")]
    WorkingDir(#[from] std::io::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Help/version output and anything else clap reports on its own terms.
    #[error(transparent)]
    Cli(clap::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

impl From<clap::Error> for SchemaError {
    fn from(err: clap::Error) -> Self {
        let flag = context_string(&err, ContextKind::InvalidArg)
            .map(flag_of)
            .unwrap_or_default();
        let value = context_string(&err, ContextKind::InvalidValue);

        match err.kind() {
            ErrorKind::UnknownArgument => SchemaError::UnknownOption { flag },
            ErrorKind::TooFewValues => SchemaError::MissingValue { flag },
            // clap reports an absent value as InvalidValue without a value context
            ErrorKind::InvalidValue if value.map_or(true, str::is_empty) => {
                SchemaError::MissingValue { flag }
            }
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
                let reason = std::error::Error::source(&err)
                    .map(|source| source.to_string())
                    .unwrap_or_else(|| "value is not accepted".to_string());
                SchemaError::TypeCoercion {
                    flag,
                    value: value.unwrap_or_default().to_string(),
                    reason,
                }
            }
            _ => SchemaError::Cli(err),
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<&str> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// clap renders the offending argument as `--lr <LR>`; keep the flag part.
fn flag_of(rendered: &str) -> String {
    rendered
        .split_whitespace()
        .next()
        .unwrap_or(rendered)
        .to_string()
}

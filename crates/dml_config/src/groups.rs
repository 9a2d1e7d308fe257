//! Option Groups - The thematic blocks the schema is assembled from
//!
//! - general: dataset, optimization, model and evaluation options
//! - logging: online experiment-tracking options
//! - nir: non-isotropy regularization for proxy-based objectives
//! - criteria: hyperparameters of the base objectives
//! - mining: batch-mining hyperparameters
//! - sampling: batch construction
//!
//! Every numeric option sets `allow_negative_numbers`, the unsigned ones
//! included. A token like `-4` after `--bs` is therefore handed to the
//! value parser and fails as a type error, rather than being read as an
//! unknown short flag. Text and path values may not start with `-`.

use std::path::PathBuf;

pub mod criteria;
pub mod general;
pub mod logging;
pub mod mining;
pub mod nir;
pub mod sampling;

pub use criteria::CriteriaArgs;
pub use general::GeneralArgs;
pub use logging::LoggingArgs;
pub use mining::MiningArgs;
pub use nir::NirArgs;
pub use sampling::SamplingArgs;

/// A named block of option declarations that can be registered on a schema.
pub trait OptionGroup: clap::Args {
    const NAME: &'static str;
}

/// Groups a `ConfigurationRecord` is made of. A schema is only complete
/// once each of them has been registered.
pub const RECORD_GROUPS: [&str; 6] = [
    GeneralArgs::NAME,
    LoggingArgs::NAME,
    NirArgs::NAME,
    CriteriaArgs::NAME,
    MiningArgs::NAME,
    SamplingArgs::NAME,
];

const LEADING_HYPHEN: &str = "values must not start with '-'";

/// Value parser for text options.
pub(crate) fn plain_text(value: &str) -> Result<String, String> {
    if value.starts_with('-') {
        return Err(LEADING_HYPHEN.to_string());
    }
    Ok(value.to_string())
}

/// Applied after clap's `PathBufValueParser`, which already rejects empty paths.
pub(crate) fn plain_path(path: PathBuf) -> Result<PathBuf, String> {
    if path.as_os_str().as_encoded_bytes().starts_with(b"-") {
        return Err(LEADING_HYPHEN.to_string());
    }
    Ok(path)
}

/// Serde representation of `f64` options: finite values are JSON numbers,
/// `inf`, `-inf` and `NaN` are strings.
pub(crate) mod float {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid float '{text}'"))),
        }
    }
}

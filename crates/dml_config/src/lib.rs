//! DML Config
//!
//! Command-line configuration surface of a deep metric learning training
//! pipeline. Option groups are registered on a schema, which parses CLI
//! tokens into a typed, immutable `ConfigurationRecord` for training code
//! to consume.

pub mod defaults;
pub mod error;
pub mod groups;
pub mod record;
pub mod schema;

pub use defaults::{DefaultResolver, WorkingDir};
pub use error::{Result, SchemaError};
pub use groups::{
    CriteriaArgs, GeneralArgs, LoggingArgs, MiningArgs, NirArgs, OptionGroup, SamplingArgs,
};
pub use record::ConfigurationRecord;
pub use schema::{ConfigSchema, OptionInfo, SchemaBuilder};

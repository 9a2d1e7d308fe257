//! Batch Construction Options

use clap::{builder::RangedU64ValueParser, Args};
use serde::{Deserialize, Serialize};

use super::{plain_text, OptionGroup};

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(rename_all = "snake_case")]
pub struct SamplingArgs {
    /// Batch-creation method. class_random draws --samples_per_class samples
    /// for every class present in a mini-batch.
    #[arg(long, default_value = "class_random", value_parser = plain_text)]
    pub data_sampler: String,

    /// Only relevant for self-supervised extensions.
    #[arg(long)]
    pub data_ssl_set: bool,

    /// Samples drawn per class before moving to the next class.
    #[arg(
        long,
        default_value_t = 2,
        allow_negative_numbers = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub samples_per_class: usize,
}

impl OptionGroup for SamplingArgs {
    const NAME: &'static str = "sampling";
}

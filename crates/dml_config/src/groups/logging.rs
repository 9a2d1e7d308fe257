//! Experiment Logging Options

use clap::Args;
use serde::{Deserialize, Serialize};

use super::{plain_text, OptionGroup};

/// Settings forwarded to the online experiment tracker.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(rename_all = "snake_case")]
pub struct LoggingArgs {
    /// Log key data to the online tracker.
    #[arg(long)]
    pub log_online: bool,

    /// Tracker account key.
    #[arg(long, default_value = "<your_wandb_key>", value_parser = plain_text)]
    pub wandb_key: String,

    /// Tracker project name.
    #[arg(long, default_value = "DiVA_Sample_Runs", value_parser = plain_text)]
    pub project: String,

    /// Tracker group name; runs with different seeds share a group.
    #[arg(long, default_value = "Sample_Run", value_parser = plain_text)]
    pub group: String,
}

impl OptionGroup for LoggingArgs {
    const NAME: &'static str = "logging";
}

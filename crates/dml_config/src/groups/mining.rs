//! Batch Mining Options

use clap::Args;
use serde::{Deserialize, Serialize};

use super::OptionGroup;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(rename_all = "snake_case")]
pub struct MiningArgs {
    /// Distance below which pairs are ignored by distance-weighted mining.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub miner_distance_lower_cutoff: f64,

    /// Distance above which pairs are ignored by distance-weighted mining.
    #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub miner_distance_upper_cutoff: f64,

    /// Lower cutoff of the spectrum-regularized miner.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub miner_rho_distance_lower_cutoff: f64,

    /// Upper cutoff of the spectrum-regularized miner.
    #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub miner_rho_distance_upper_cutoff: f64,

    /// Probability of flipping a label assignment.
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub miner_rho_distance_cp: f64,

    /// Margin of semihard mining.
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub miner_semihard_margin: f64,
}

impl OptionGroup for MiningArgs {
    const NAME: &'static str = "mining";
}

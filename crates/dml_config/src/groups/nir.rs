//! Non-Isotropy Regularization Options
//!
//! Hyperparameters of the normalizing-flow regularizer attached to
//! proxy-based objectives.

use clap::Args;
use serde::{Deserialize, Serialize};

use super::{plain_text, OptionGroup};

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(rename_all = "snake_case")]
pub struct NirArgs {
    /// Alignment weight between the proxy loss and the flow loss.
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_w_align: f64,

    /// Learning-rate multiplier for the proxies.
    #[arg(long, default_value_t = 4000.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_proxy_lrmulti: f64,

    /// Learning-rate multiplier for the flow head.
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_lrmulti: f64,

    /// Weight of the log-Jacobian-determinant term.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_logmatch: f64,

    /// Weighting of positive relations.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_pos_alpha: f64,

    /// Weighting of negative relations.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_neg_alpha: f64,

    /// Masking threshold.
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_margin: f64,

    /// Scaling threshold of the multi-similarity style formulation.
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_delta: f64,

    /// Fraction of sample-proxy pairs used per step.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_pair_perc: f64,

    /// Input noise added before the flow.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_noise: f64,

    // Flow architecture
    /// Conditioning mode of the flow.
    #[arg(long, default_value = "dense", value_parser = plain_text)]
    pub loss_nir_nf_cond_mode: String,

    /// Depth of the nonlinear mapper inside each flow block.
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    pub loss_nir_nf_fc_depth: usize,

    /// Width of the nonlinear mapper layers.
    #[arg(long, default_value_t = 128, allow_negative_numbers = true)]
    pub loss_nir_nf_fc_width: usize,

    /// Number of flow blocks.
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub loss_nir_nf_cblocks: usize,

    /// Dropout of the nonlinear mapper.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_nf_fc_dropout: f64,

    /// Clamping value of the coupling layers.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_nir_nf_clamp_alpha: f64,

    /// Initialization of the linear subnets.
    #[arg(long, default_value = "none", value_parser = plain_text)]
    pub loss_nir_nf_fc_init: String,
}

impl OptionGroup for NirArgs {
    const NAME: &'static str = "nir";
}

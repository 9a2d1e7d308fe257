//! Base Criteria Options - contrastive, triplet, proxy and anti-collapse objectives

use clap::Args;
use serde::{Deserialize, Serialize};

use super::{plain_text, OptionGroup};

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(rename_all = "snake_case")]
pub struct CriteriaArgs {
    // Contrastive
    /// Positive margin for contrastive pairs.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_contrastive_pos_margin: f64,

    /// Negative margin for contrastive pairs.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_contrastive_neg_margin: f64,

    // Triplet
    /// Margin of the triplet loss.
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_triplet_margin: f64,

    // Proxy
    /// Proxy method: anchor (ProxyAnchor) or nca (ProxyNCA).
    #[arg(long, default_value = "nca", value_parser = plain_text)]
    pub loss_oproxy_mode: String,

    /// Learning-rate multiplier for the proxies.
    #[arg(long, default_value_t = 2000.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_oproxy_lrmulti: f64,

    /// Inverse temperature for positive sample-proxy similarities.
    #[arg(long, default_value_t = 64.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_oproxy_pos_alpha: f64,

    /// Inverse temperature for negative sample-proxy similarities.
    #[arg(long, default_value_t = 64.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_oproxy_neg_alpha: f64,

    /// Threshold for positive sample-proxy similarities.
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_oproxy_pos_delta: f64,

    /// Threshold for negative sample-proxy similarities.
    #[arg(long, default_value_t = -0.1, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_oproxy_neg_delta: f64,

    // Anti-collapse
    /// Weight of the anti-collapse term.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub antico_w: f64,

    /// First gamma of the anti-collapse term.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub antico_gam1: f64,

    /// Second gamma of the anti-collapse term.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub antico_gam2: f64,

    /// Epsilon of the anti-collapse term.
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub antico_eps: f64,

    /// Which representatives the anti-collapse term acts on.
    #[arg(long, default_value = "batch_proxy", value_parser = plain_text)]
    pub antico_type: String,

    /// Alignment weight between the proxy loss and the anti-collapse loss.
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub loss_ac_w_align: f64,
}

impl OptionGroup for CriteriaArgs {
    const NAME: &'static str = "criteria";
}

//! General Training Options - run identity, optimization, model and evaluation

use clap::builder::{PathBufValueParser, RangedU64ValueParser, TypedValueParser};
use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{plain_path, plain_text, OptionGroup};

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(rename_all = "snake_case")]
pub struct GeneralArgs {
    // Run identity
    /// Dataset to train on.
    #[arg(long, default_value = "cub200", value_parser = plain_text)]
    pub dataset: String,

    /// Split the training set into train/validation following --tv_split_perc.
    #[arg(long)]
    pub use_tv_split: bool,

    /// Split train/validation per sample within each class instead of between classes.
    #[arg(long)]
    pub tv_split_by_samples: bool,

    /// Fraction of the training set moved to the validation split.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub tv_split_perc: f64,

    /// Marks the training run as completed.
    #[arg(long)]
    pub completed: bool,

    /// Skip computing and logging training metrics.
    #[arg(long)]
    pub no_train_metrics: bool,

    /// Skip computing and logging test metrics.
    #[arg(long)]
    pub no_test_metrics: bool,

    // Evaluation
    /// Metrics to evaluate performance by.
    #[arg(
        long,
        num_args = 1..,
        action = ArgAction::Set,
        value_parser = plain_text,
        default_values = ["e_recall@1", "e_recall@2", "e_recall@4", "e_recall@8", "nmi", "f1", "mAP_1000"]
    )]
    pub evaluation_metrics: Vec<String>,

    /// Embedding keys produced by the network that are evaluated. Weighted
    /// combinations are written as Combined_embed1_embed2-w1-w2.
    #[arg(
        long,
        num_args = 1..,
        action = ArgAction::Set,
        value_parser = plain_text,
        default_values = ["embeds"]
    )]
    pub evaltypes: Vec<String>,

    /// Improvement in these metrics triggers checkpointing.
    #[arg(
        long,
        num_args = 1..,
        action = ArgAction::Set,
        value_parser = plain_text,
        default_values = ["e_recall@1"]
    )]
    pub storage_metrics: Vec<String>,

    /// Store a checkpoint whenever a storage metric improves.
    #[arg(long)]
    pub store_improvements: bool,

    /// GPU device indices to train on.
    #[arg(long, num_args = 1.., action = ArgAction::Set, default_values_t = vec![0usize])]
    pub gpu: Vec<usize>,

    /// Suffix for the save folder name; group_plus_seed derives it from --group and --seed.
    #[arg(long, default_value = "group_plus_seed", value_parser = plain_text)]
    pub savename: String,

    /// Path to the training data.
    #[arg(long, required = false, value_parser = PathBufValueParser::new().try_map(plain_path))]
    pub source_path: PathBuf,

    /// Where checkpoints and results are written.
    #[arg(long, required = false, value_parser = PathBufValueParser::new().try_map(plain_path))]
    pub save_path: PathBuf,

    // Optimization
    /// Learning rate for network parameters.
    #[arg(long, default_value_t = 0.00001, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub lr: f64,

    /// Learning rate for the embedding head. -1 reuses --lr.
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub fc_lr: f64,

    /// Number of training epochs.
    #[arg(long, default_value_t = 150, allow_negative_numbers = true)]
    pub n_epochs: usize,

    /// Number of data-loading workers.
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    pub kernels: usize,

    /// Mini-batch size.
    #[arg(
        long,
        default_value_t = 112,
        allow_negative_numbers = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub bs: usize,

    /// Random seed for reproducibility.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seed: u64,

    /// Learning-rate schedule: step or exp.
    #[arg(long, default_value = "step", value_parser = plain_text)]
    pub scheduler: String,

    /// Learning-rate reduction factor applied at each --tau milestone.
    #[arg(long, default_value_t = 0.3, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub gamma: f64,

    /// Weight decay for the optimizer.
    #[arg(long, default_value_t = 0.0004, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub decay: f64,

    /// Epochs at which the learning rate is reduced.
    #[arg(
        long,
        num_args = 1..,
        action = ArgAction::Set,
        default_values_t = vec![10000usize],
        allow_negative_numbers = true
    )]
    pub tau: Vec<usize>,

    /// Data augmentation pipeline.
    #[arg(long, default_value = "base", value_parser = plain_text)]
    pub augmentation: String,

    /// Number of warmup epochs.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub warmup: usize,

    /// Compute evaluation metrics on the CPU instead of the GPU.
    #[arg(long)]
    pub evaluate_on_cpu: bool,

    /// Split parameter used by meta-learning extensions.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    #[serde(with = "super::float")]
    pub internal_split: f64,

    /// Optimizer to use.
    #[arg(long, default_value = "adam", value_parser = plain_text)]
    pub optim: String,

    // Objective
    /// Training objective.
    #[arg(long, default_value = "margin", value_parser = plain_text)]
    pub loss: String,

    /// Batch-mining method.
    #[arg(long, default_value = "distance", value_parser = plain_text)]
    pub batch_mining: String,

    // Model
    /// Embedding dimensionality of the network.
    #[arg(
        long,
        default_value_t = 128,
        allow_negative_numbers = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub embed_dim: usize,

    /// Backbone architecture. "frozen" freezes pretrained batchnorm layers,
    /// "normalize" normalizes the output embedding.
    #[arg(long, default_value = "resnet50_frozen_normalize", value_parser = plain_text)]
    pub arch: String,

    /// Do not initialize the backbone with ImageNet weights.
    #[arg(long)]
    pub not_pretrained: bool,

    /// Feed float16 inputs.
    #[arg(long)]
    pub use_float16: bool,
}

impl OptionGroup for GeneralArgs {
    const NAME: &'static str = "general";
}

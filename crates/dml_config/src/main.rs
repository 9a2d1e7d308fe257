use anyhow::{Context, Result};
use dml_config::{ConfigSchema, ConfigurationRecord, SchemaError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DERIVED_SAVENAME: &str = "group_plus_seed";

fn main() -> Result<()> {
    let _log_guard = init_logging();
    install_panic_hook();

    let schema = ConfigSchema::from_env().context("Failed to build configuration schema")?;

    let record = match schema.parse(std::env::args_os().skip(1)) {
        Ok(record) => record,
        // --help / --version
        Err(SchemaError::Cli(err)) => err.exit(),
        Err(err) => {
            tracing::error!("❌ {}", err);
            return Err(err).context("Invalid training configuration");
        }
    };

    report(&record);

    let json = record
        .to_json_pretty()
        .context("Failed to serialize configuration")?;
    println!("{}", json);

    Ok(())
}

/// Console output goes to stderr and a plain copy to `logs/dml_config.log`,
/// rotated daily. The returned guard flushes the file writer on drop.
fn init_logging() -> WorkerGuard {
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily("logs", "dml_config.log"));

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .init();

    guard
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown panic");
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();

        tracing::error!(target: "panic", "🔥 Panic at {}: {}", location, message);
        eprintln!("🔥 Panic at {}: {}", location, message);
    }));
}

/// Logs the run as training code will see it, resolving the sentinels the
/// record stores verbatim.
fn report(record: &ConfigurationRecord) {
    let general = &record.general;

    let head_lr = if general.fc_lr == -1.0 {
        general.lr
    } else {
        general.fc_lr
    };

    let run_name = if general.savename == DERIVED_SAVENAME {
        format!("{}_s{}", record.logging.group, general.seed)
    } else {
        general.savename.clone()
    };

    tracing::info!("✅ Configuration valid: {}", run_name);
    tracing::info!(
        "Data: dataset={}, source={}, save={}",
        general.dataset,
        general.source_path.display(),
        general.save_path.join(&run_name).display()
    );
    tracing::info!(
        "Model: arch={}, embed_dim={}, pretrained={}, float16={}",
        general.arch,
        general.embed_dim,
        !general.not_pretrained,
        general.use_float16
    );
    tracing::info!(
        "Objective: loss={}, batch_mining={}, sampler={} ({} per class)",
        general.loss,
        general.batch_mining,
        record.sampling.data_sampler,
        record.sampling.samples_per_class
    );
    tracing::info!(
        "Optimization: optim={}, lr={}, head_lr={}, bs={}, epochs={}, scheduler={} (gamma={}, tau={:?})",
        general.optim,
        general.lr,
        head_lr,
        general.bs,
        general.n_epochs,
        general.scheduler,
        general.gamma,
        general.tau
    );
    if record.logging.log_online {
        tracing::info!(
            "Online logging: project={}, group={}",
            record.logging.project,
            record.logging.group
        );
    }
    tracing::debug!("Full configuration:\n{}", record);
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use xassets::{AssetGenerator, Config, Profile};

/// Resizes the source images of every app build into density buckets.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a yaml config with `source`, `target` and `profile` keys.
    /// Flags take precedence over the config.
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Directory containing one folder per build
    #[clap(long, short)]
    source: Option<PathBuf>,
    /// Directory the generated assets are written to
    #[clap(long, short)]
    target: Option<PathBuf>,
    /// Asset set to generate. Can be one of `default` or `legacy`.
    #[clap(long, short)]
    profile: Option<Profile>,
}

impl Args {
    fn config(self) -> Result<Config> {
        let mut config = match self.config {
            Some(path) => Config::read(path)?,
            None => Config::default(),
        };
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(profile) = self.profile {
            config.profile = profile;
        }
        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    use tracing_subscriber::EnvFilter;
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XASSETS_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let config = Args::parse().config()?;
    tracing::debug!(
        "source {} target {} profile {}",
        config.source.display(),
        config.target.display(),
        config.profile
    );
    let status = AssetGenerator::from_config(&config).run()?;
    Ok(ExitCode::from(status))
}

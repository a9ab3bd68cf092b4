use anyhow::Context;
use clap::Parser;
use greeter_env::{Environment, SETTINGS_FILE};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GREETER_LOG";

/// Write the canister ids and limits of one environment to a Rust source file.
#[derive(Parser, Debug)]
#[clap(name = "greeter-env", version)]
struct Cli {
    /// The environment to generate for: local, development, staging or production.
    /// Defaults to `$ENV`, then local. Unknown names fall back to local.
    #[clap(long)]
    env: Option<String>,

    /// The project root holding `canister_ids.json` and `.dfx/`.
    #[clap(long, default_value = ".")]
    root: PathBuf,

    /// Where to write the generated file.
    #[clap(long, default_value = SETTINGS_FILE)]
    out: PathBuf,
}

impl Cli {
    /// `--env` wins over `$ENV`.
    fn environment(&self) -> Environment {
        match self.env.as_deref() {
            Some(name) => Environment::from_name(name),
            None => Environment::from_env(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let env = cli.environment();

    greeter_env::generate(&cli.root, env, &cli.out)
        .with_context(|| format!("Failed to generate the {env} settings"))?;

    Ok(())
}

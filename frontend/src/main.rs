use std::io;
use backend::Store;
use frontend::{Opts, VotingForm};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    let opts = Opts::from_args();
    let store = Store::open(opts.store_config())?;
    info!("Using record file {}", store.data_file().display());

    let form = VotingForm::new(store);
    let command = opts.command.unwrap_or_default();
    frontend::run(&form, command, io::stdin().lock(), io::stdout().lock())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

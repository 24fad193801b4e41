use anyhow::Context;
use telco_colors::config::Config;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// lookup results and the manual.
fn init_logging(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "cli")]
    {
        use clap::Parser;
        use telco_colors::cli;

        let cli = cli::Cli::parse();
        let config = Config::load(Some(cli.overrides()));
        init_logging(config.log_level)?;

        let stdout = std::io::stdout();
        cli::run(cli, &config, &mut stdout.lock())?;
    }

    #[cfg(not(feature = "cli"))]
    {
        // Without the CLI: self-test, then the manual for wiring personnel
        let config = Config::load(None);
        init_logging(config.log_level)?;

        telco_colors::selftest::run().context("self-test failed")?;
        telco_colors::manual::print_reference_manual()?;
    }

    Ok(())
}

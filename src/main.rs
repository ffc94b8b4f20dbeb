use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use termfolio::config::Config;
use termfolio::logging::init_tracing;
use termfolio::ui::runtime;

/// Single-page portfolio for the terminal.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version)]
struct Args {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Make the simulated submission transport report failure.
    #[arg(long)]
    fail_submissions: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    runtime::run(config, args.fail_submissions).context("terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn fail_submissions_flag_parses() {
        use clap::Parser;
        let args = Args::parse_from(["termfolio", "--fail-submissions"]);
        assert!(args.fail_submissions);
        assert!(args.config.is_none());
    }
}

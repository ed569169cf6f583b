use anyhow::Result;
use mapfix::Config;
use mapfix::config::Mode;
use mapfix::{pipeline, report};

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    report::print_banner();
    let outcome = pipeline::run(&config)?;
    match config.mode {
        Mode::Apply => report::print_summary(),
        Mode::Check => report::print_check_summary(&outcome),
    }
    Ok(())
}

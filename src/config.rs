use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};

const DEFAULT_FRONTEND_FILE: &str = "frontend/src/views/import/ExcelImport.vue";
const DEFAULT_MAPPINGS_FILE: &str = "docs/FIXED_FIELD_MAPPINGS.ts";

#[derive(Debug, Parser)]
#[command(
    name = "mapfix",
    version,
    about = "Patch the frontend Excel-import FIELD_MAPPINGS array from the corrected source-of-truth file."
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Frontend source file containing the FIELD_MAPPINGS declaration.
    #[arg(long, env = "MAPFIX_FRONTEND_FILE", default_value = DEFAULT_FRONTEND_FILE)]
    pub frontend_file: PathBuf,

    /// Source-of-truth file containing the FIXED_FIELD_MAPPINGS declaration.
    #[arg(long, env = "MAPFIX_MAPPINGS_FILE", default_value = DEFAULT_MAPPINGS_FILE)]
    pub mappings_file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify the inputs and report what would change, without backing up or writing.
    Check,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub frontend_file: PathBuf,
    pub mappings_file: PathBuf,
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Apply,
    Check,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        Config::from_parts(cli.common, cli.command)
    }

    fn from_parts(common: CommonArgs, command: Option<Command>) -> Result<Self> {
        if common.frontend_file == common.mappings_file {
            return Err(anyhow!(
                "frontend file and mappings file must be distinct paths"
            ));
        }

        let mode = match command {
            Some(Command::Check) => Mode::Check,
            None => Mode::Apply,
        };

        Ok(Self {
            frontend_file: common.frontend_file,
            mappings_file: common.mappings_file,
            mode,
        })
    }
}

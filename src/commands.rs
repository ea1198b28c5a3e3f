use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use holiday_export::{Config, HolidayKind, Result, RunMode, YearRange};

#[derive(Debug, Parser)]
#[command(name = "holiday-export")]
#[command(about = "Export holiday dates and country enumerations from a calendar API.")]
pub struct CommandLine {
    /// TOML configuration file, flags override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the holiday API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export public and school holiday dates
    #[command(alias = "d")]
    Dates(DatesArgs),
    /// Render the country enumeration source file
    #[command(alias = "e")]
    Enum(EnumArgs),
}

#[derive(Debug, Args)]
pub struct DatesArgs {
    /// First year to export
    #[arg(long, default_value_t = 2000)]
    pub min_year: i32,

    /// Last year to export (inclusive)
    #[arg(long, default_value_t = 2080)]
    pub max_year: i32,

    /// Only export these country codes
    #[arg(long, num_args = 1..)]
    pub regions: Option<Vec<String>>,

    /// Only export this holiday kind (repeatable)
    #[arg(long = "kind")]
    pub kinds: Vec<HolidayKind>,

    /// Destination of the public holidays
    #[arg(long)]
    pub public_output: Option<PathBuf>,

    /// Destination of the school holidays
    #[arg(long)]
    pub school_output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EnumArgs {
    /// Template to render instead of the built-in one
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Destination of the rendered file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the run configuration and mode from the file and flags
    pub fn into_run(self) -> Result<(Config, RunMode)> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(base_url) = self.base_url {
            config.api.base_url = base_url;
        }

        let mode = match self.command {
            Commands::Dates(args) => {
                let range = YearRange::new(args.min_year, args.max_year)?;

                if args.regions.is_some() {
                    config.regions = args.regions;
                }
                if !args.kinds.is_empty() {
                    config.kinds = args.kinds;
                }
                if let Some(path) = args.public_output {
                    config.output.public_path = path;
                }
                if let Some(path) = args.school_output {
                    config.output.school_path = path;
                }

                RunMode::Dates(range)
            }
            Commands::Enum(args) => {
                if args.template.is_some() {
                    config.output.template_path = args.template;
                }
                if let Some(path) = args.output {
                    config.output.enum_path = path;
                }

                RunMode::Enum
            }
        };

        config.validate_for(&mode)?;
        Ok((config, mode))
    }
}

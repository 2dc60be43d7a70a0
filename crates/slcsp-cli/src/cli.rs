//! CLI argument definitions for the SLCSP calculator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use slcsp_model::MetalLevel;

#[derive(Parser)]
#[command(
    name = "slcsp",
    version,
    about = "Second-lowest-cost Silver plan (SLCSP) rate per ZIP code",
    long_about = "Annotate a list of ZIP codes with the second-lowest-cost Silver plan rate.\n\n\
                  A ZIP gets a rate only when it maps to exactly one rate area and that\n\
                  area offers at least two plans of the chosen metal tier. Otherwise the\n\
                  rate field is left empty. The annotated table is written to stdout."
)]
pub struct Cli {
    /// Target ZIP list (needs a `zipcode` column).
    #[arg(value_name = "SLCSP_CSV")]
    pub targets: Option<PathBuf>,

    /// Plans table (`state`, `rate_area`, `metal_level`, `rate`).
    #[arg(value_name = "PLANS_CSV")]
    pub plans: Option<PathBuf>,

    /// ZIP-to-rate-area table (`zipcode`, `state`, `rate_area`).
    #[arg(value_name = "ZIPS_CSV")]
    pub zips: Option<PathBuf>,

    /// Metal tier whose second-lowest rate is reported.
    #[arg(long = "metal", value_enum, default_value = "silver")]
    pub metal: MetalArg,

    /// Write the annotated table to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a summary of resolved and unresolved ZIPs to stderr.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI metal tier choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetalArg {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Catastrophic,
}

impl From<MetalArg> for MetalLevel {
    fn from(arg: MetalArg) -> Self {
        match arg {
            MetalArg::Bronze => MetalLevel::Bronze,
            MetalArg::Silver => MetalLevel::Silver,
            MetalArg::Gold => MetalLevel::Gold,
            MetalArg::Platinum => MetalLevel::Platinum,
            MetalArg::Catastrophic => MetalLevel::Catastrophic,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_paths_are_optional() {
        let cli = Cli::try_parse_from(["slcsp"]).expect("parse");
        assert!(cli.targets.is_none());
        assert!(cli.plans.is_none());
        assert!(cli.zips.is_none());
        assert_eq!(cli.metal, MetalArg::Silver);
        assert!(!cli.summary);
    }

    #[test]
    fn parses_all_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "slcsp", "a.csv", "b.csv", "c.csv", "--metal", "gold", "--summary", "-o", "out.csv",
        ])
        .expect("parse");
        assert_eq!(cli.targets, Some(PathBuf::from("a.csv")));
        assert_eq!(cli.plans, Some(PathBuf::from("b.csv")));
        assert_eq!(cli.zips, Some(PathBuf::from("c.csv")));
        assert_eq!(MetalLevel::from(cli.metal), MetalLevel::Gold);
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert!(cli.summary);
    }

    #[test]
    fn rejects_fourth_positional() {
        assert!(Cli::try_parse_from(["slcsp", "a", "b", "c", "d"]).is_err());
    }
}

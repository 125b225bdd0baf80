//! Main CLI parser.
//!
//! Report flags mirror `WatermarkOptions` one-to-one. `-h` selects the host
//! name, so help is only available as `--help`.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};
use watermark_core::WatermarkOptions;

use crate::config::OutputFormat;

/// Command-line interface definition for the watermark report tool.
#[derive(Debug, Parser)]
#[command(name = "watermark")]
#[command(about = "Print date/time stamps and environment information for reproducibility reports")]
#[command(version = watermark_build_info::LONG_VERSION)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Author name
    #[arg(short = 'a', long, value_name = "NAME")]
    pub author: Option<String>,

    /// Current date as YYYY-mm-dd
    #[arg(short = 'd', long = "date")]
    pub current_date: bool,

    /// Current date with abbreviated day and month names
    #[arg(short = 'n', long)]
    pub datename: bool,

    /// Current time as HH:MM:SS
    #[arg(short = 't', long = "time")]
    pub current_time: bool,

    /// Combined date and time in ISO-8601 with UTC offset
    #[arg(short = 'i', long)]
    pub iso8601: bool,

    /// Append the local time zone to the time
    #[arg(short = 'z', long)]
    pub timezone: bool,

    /// Print a "Last updated" line
    #[arg(short = 'u', long)]
    pub updated: bool,

    /// Timestamp in a custom strftime format
    #[arg(short = 'c', long = "custom-time", value_name = "FORMAT")]
    pub custom_time: Option<String>,

    /// Python implementation and version (and IPython, if installed)
    #[arg(short = 'v', long)]
    pub python: bool,

    /// Versions of the given comma-separated packages
    #[arg(short = 'p', long, value_name = "PACKAGES")]
    pub packages: Option<String>,

    /// Host name
    #[arg(short = 'h', long)]
    pub hostname: bool,

    /// System and machine info
    #[arg(short = 'm', long)]
    pub machine: bool,

    /// Current git commit hash
    #[arg(short = 'g', long)]
    pub githash: bool,

    /// Git remote origin URL
    #[arg(short = 'r', long)]
    pub gitrepo: bool,

    /// Current git branch
    #[arg(short = 'b', long)]
    pub gitbranch: bool,

    /// Version of watermark itself
    #[arg(short = 'w', long)]
    pub watermark: bool,

    /// Versions of these loaded modules (comma-separated, e.g. numpy.linalg,pandas)
    #[arg(long, value_name = "MODULES", value_delimiter = ',')]
    pub iversions: Vec<String>,

    #[command(flatten)]
    pub runtime: RuntimeArgs,
}

/// Options that configure probes and output rather than report content.
#[derive(Debug, Args)]
pub struct RuntimeArgs {
    /// Python interpreter to query (name on PATH or path)
    #[arg(long = "python-bin", env = "WATERMARK_PYTHON", value_name = "PATH")]
    pub python_bin: Option<PathBuf>,

    /// Git executable to run (name on PATH or path)
    #[arg(long = "git-bin", env = "WATERMARK_GIT", value_name = "PATH")]
    pub git_bin: Option<PathBuf>,

    /// Directory to read git metadata from (defaults to the current directory)
    #[arg(long = "repo-dir", value_name = "DIR")]
    pub repo_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose/debug logging on stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Report options selected by the flags.
    pub fn report_options(&self) -> WatermarkOptions {
        WatermarkOptions {
            author: self.author.clone(),
            current_date: self.current_date,
            datename: self.datename,
            current_time: self.current_time,
            iso8601: self.iso8601,
            timezone: self.timezone,
            updated: self.updated,
            custom_time: self.custom_time.clone(),
            python: self.python,
            packages: self.packages.clone(),
            hostname: self.hostname,
            machine: self.machine,
            githash: self.githash,
            gitrepo: self.gitrepo,
            gitbranch: self.gitbranch,
            watermark: self.watermark,
            iversions: self
                .iversions
                .iter()
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

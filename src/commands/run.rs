//! Command dispatch logic for catalog-eda

use super::{
    DashboardArgs, ExportArgs, InitArgs, ProfileArgs, ValidateArgs, export_views, init_config, profile_catalog, run_dashboard,
    validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "catalog-eda", version, author, long_about = None)]
#[command(about = "Explore a streaming catalog through descriptive aggregate views")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: EdaSubcommand,
}

#[derive(Subcommand, Debug)]
enum EdaSubcommand {
    /// Write every aggregate view to disk, one CSV file per view
    Export(Box<ExportArgs>),
    /// Explore the catalog interactively with filter controls
    Dashboard(Box<DashboardArgs>),
    /// Report missing values before and after normalization
    Profile(ProfileArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        EdaSubcommand::Export(export_args) => export_views(host, export_args),
        EdaSubcommand::Dashboard(dashboard_args) => run_dashboard(host, dashboard_args),
        EdaSubcommand::Profile(profile_args) => profile_catalog(host, profile_args),
        EdaSubcommand::Init(init_args) => init_config(host, init_args),
        EdaSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::parse_from(["catalog-eda", "export", "--input", "titles.csv"]);
        let EdaSubcommand::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output_dir, "eda-output");
        assert!(args.excel.is_none());
        assert!(!args.console);
    }
}

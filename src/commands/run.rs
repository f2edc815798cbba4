//! Command-line entry point for sonar-report

use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::api::Client;
use crate::report::ReportBuilder;
use crate::writers::{ReportFormat, write_report};
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "sonar-report", author, version, long_about = None)]
#[command(about = "Export SonarQube quality metrics for a set of projects")]
#[command(styles = CLAP_STYLES)]
struct Args {
    /// Output report file name
    #[arg(value_name = "REPORT_FILENAME")]
    report_filename: Utf8PathBuf,

    /// Only report on projects carrying this tag
    #[arg(value_name = "PROJECT_TAG")]
    project_tag: Option<String>,

    /// Format of the report file
    #[arg(long, short = 't', value_name = "TYPE", default_value = "csv")]
    report_type: ReportFormat,

    /// Base URL of the SonarQube web API, e.g. `https://sonar.example.com/api/`
    #[arg(long, value_name = "URL", env = "SONARQUBE_API_BASE")]
    api_base: String,

    /// SonarQube user token
    #[arg(long, value_name = "TOKEN", env = "SONARQUBE_API_USERTOKEN", hide_env_values = true)]
    user_token: String,

    /// Path to a configuration file overriding the metric catalog and request limits
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    log_level: LogLevel,
}

/// Parse command-line arguments, build the report, and write it to disk
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the configuration is invalid, any API request fails, or the
/// report file cannot be written. No file is written on failure.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = Args::parse_from(args);
    init_logging(args.log_level);

    let config = Config::load(args.config.as_deref())?;
    let client = Client::new(&args.api_base, args.user_token.as_str(), config.page_size)?;
    let builder = ReportBuilder::new(client, config.metrics, config.batch_size)?;

    let table = builder.get_project_report(args.project_tag.as_deref()).await?;

    if table.is_empty() {
        let scope = args
            .project_tag
            .as_deref()
            .map_or_else(String::new, |tag| format!(" tagged '{tag}'"));
        let _ = writeln!(host.error(), "No projects{scope} were found, the report only contains column headers");
    }

    write_report(&table, args.report_type, &args.report_filename)?;

    let _ = writeln!(host.output(), "Report generated at: {}", args.report_filename);
    Ok(())
}

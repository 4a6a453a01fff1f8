// src/main.rs
use clap::{CommandFactory, Parser};
use crtsh::cert_parser::CertificateParser;
use crtsh::cli::{Cli, Mode};
use crtsh::client::CrtshClient;
use crtsh::config::Config;
use crtsh::output::Printer;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // No operation supplied: show usage and exit cleanly
    let Some(mode) = cli.mode() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Load config file if one was given, otherwise use defaults
    let config = match cli.config {
        Some(ref path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };

    // Initialize logging; CLI flags override the config level
    let log_level = cli.log_level().unwrap_or(&config.logging.level);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = CrtshClient::new(&config)?;
    let mut printer = Printer::stdout();

    // One operation, one network round trip
    match mode {
        Mode::TextQuery(query) => {
            let entries = client.query_by_text(&query).await?;
            printer.render_entries(&entries, cli.only_domains, client.base_url())?;
        }
        Mode::CommonNameQuery(cn) => {
            let entries = client.query_by_common_name(&cn).await?;
            printer.render_entries(&entries, cli.only_domains, client.base_url())?;
        }
        Mode::CertificateLookup(cert_id) => {
            printer.render_certificate_id(cert_id)?;
            let pem = client.fetch_certificate_pem(cert_id).await?;
            let names = CertificateParser::enumerate_dns_names(&pem)?;
            printer.render_dns_names(&names)?;
        }
    }

    Ok(())
}

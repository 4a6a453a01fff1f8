// src/cli.rs
use clap::Parser;

/// crtsh: query the crt.sh Certificate Transparency search service
///
/// Search the CT log index by free text or common name, or download a
/// certificate by ID and enumerate its SAN DNS names.
#[derive(Parser, Debug, Clone)]
#[command(name = "crtsh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Operations (exactly one per invocation) =====
    /// Free-text query string
    #[arg(short = 'q', long = "query")]
    pub query: Option<String>,

    /// Certificate ID to download and parse (a min_cert_id from a prior query)
    #[arg(short = 'i', long = "cert-id")]
    pub cert_id: Option<i64>,

    /// Common-name query string
    #[arg(long = "cn")]
    pub common_name: Option<String>,

    // ===== Output =====
    /// Print only the name values of matching entries
    #[arg(short = 'o', long = "only-domains")]
    pub only_domains: bool,

    // ===== Configuration =====
    /// Path to TOML config file (defaults apply when omitted)
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    // ===== Logging =====
    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        let mode_count = [
            self.query.is_some(),
            self.cert_id.is_some(),
            self.common_name.is_some(),
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        if mode_count > 1 {
            anyhow::bail!(
                "Cannot combine operations. \
                Supply exactly one of: --query, --cert-id, or --cn"
            );
        }

        // Verbose and quiet are mutually exclusive
        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        Ok(())
    }

    /// Resolve the requested operation, or `None` when no operation was
    /// supplied (the caller shows usage and exits cleanly).
    ///
    /// `--cert-id 0` is a real lookup: Option distinguishes "not provided"
    /// from an ID of zero, so the two are never conflated.
    pub fn mode(&self) -> Option<Mode> {
        if let Some(ref query) = self.query {
            Some(Mode::TextQuery(query.clone()))
        } else if let Some(cert_id) = self.cert_id {
            Some(Mode::CertificateLookup(cert_id))
        } else {
            self.common_name
                .as_ref()
                .map(|cn| Mode::CommonNameQuery(cn.clone()))
        }
    }

    /// Determine log level based on verbose/quiet flags; `None` defers to
    /// the config file.
    pub fn log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}

/// The three mutually exclusive operations, resolved once from parsed
/// arguments and dispatched to exactly one client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Free-text search against the log index
    TextQuery(String),
    /// Common-name search against the log index
    CommonNameQuery(String),
    /// Download a certificate by ID and enumerate its DNS names
    CertificateLookup(i64),
}

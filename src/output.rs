// src/output.rs
//! Terminal rendering for query results and enumerated DNS names

use colored::Colorize;
use std::io::{self, Write};
use url::Url;

use crate::client::certificate_download_url;
use crate::types::CtLogEntry;

/// Renders query results as full records or a domain-only list.
///
/// Generic over the writer so tests can render into a buffer.
pub struct Printer<W: Write> {
    writer: W,
    use_colors: bool,
}

impl Printer<io::Stdout> {
    /// Printer writing to stdout, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        let use_colors = is_terminal::is_terminal(std::io::stdout());
        Self::new(io::stdout(), use_colors)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Render a query result.
    ///
    /// With `domains_only`, one `name_value` line per entry; otherwise a
    /// labeled block per entry with a 1-based index and the download link
    /// derived from `base_url` and `min_cert_id`.
    pub fn render_entries(
        &mut self,
        entries: &[CtLogEntry],
        domains_only: bool,
        base_url: &Url,
    ) -> io::Result<()> {
        if domains_only {
            for entry in entries {
                writeln!(self.writer, "{}", entry.name_value)?;
            }
        } else {
            for (index, entry) in entries.iter().enumerate() {
                self.render_full_entry(index + 1, entry, base_url)?;
            }
        }

        self.writer.flush()
    }

    fn render_full_entry(
        &mut self,
        index: usize,
        entry: &CtLogEntry,
        base_url: &Url,
    ) -> io::Result<()> {
        let download = certificate_download_url(base_url, entry.min_cert_id);

        writeln!(self.writer, "{{")?;
        self.field("Index", &index.to_string())?;
        self.field("Issuer CA ID", &entry.issuer_ca_id.to_string())?;
        self.field("Issuer Name", &entry.issuer_name)?;
        self.field("Name", &entry.name_value)?;
        self.field("Min Cert ID", &entry.min_cert_id.to_string())?;
        self.field("Min Entry Timestamp", &entry.min_entry_timestamp)?;
        self.field("Not Before", &entry.not_before)?;
        self.field("Not After", &entry.not_after)?;
        self.field("Download PEM", download.as_str())?;
        writeln!(self.writer, "}}")
    }

    fn field(&mut self, label: &str, value: &str) -> io::Result<()> {
        if self.use_colors {
            writeln!(
                self.writer,
                "  {} {}",
                format!("{}:", label).dimmed(),
                value
            )
        } else {
            writeln!(self.writer, "  {}: {}", label, value)
        }
    }

    /// The certificate ID line emitted before a download starts.
    pub fn render_certificate_id(&mut self, cert_id: i64) -> io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Certificate ID:".dimmed(), cert_id)?;
        } else {
            writeln!(self.writer, "Certificate ID: {}", cert_id)?;
        }
        self.writer.flush()
    }

    /// Header line followed by one line per DNS name. An empty list still
    /// gets the header, nothing more.
    pub fn render_dns_names(&mut self, names: &[String]) -> io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", "Enumerated DNS names:".bold())?;
        } else {
            writeln!(self.writer, "Enumerated DNS names:")?;
        }

        for name in names {
            writeln!(self.writer, "{}", name)?;
        }

        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> CtLogEntry {
        CtLogEntry {
            issuer_ca_id: 16418,
            issuer_name: "CN=R3".to_string(),
            name_value: "example.com".to_string(),
            min_cert_id: 987119772,
            min_entry_timestamp: "2023-01-15T08:30:00.000".to_string(),
            not_before: "2023-01-15T07:30:00".to_string(),
            not_after: "2023-04-15T07:30:00".to_string(),
        }
    }

    fn render_to_string(entries: &[CtLogEntry], domains_only: bool) -> String {
        let base = Url::parse("https://crt.sh/").unwrap();
        let mut buf = Vec::new();
        Printer::new(&mut buf, false)
            .render_entries(entries, domains_only, &base)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_domains_only_one_line_per_entry() {
        let mut second = sample_entry();
        second.name_value = "www.example.com".to_string();

        let out = render_to_string(&[sample_entry(), second], true);
        assert_eq!(out, "example.com\nwww.example.com\n");
    }

    #[test]
    fn test_full_record_fields_and_download_link() {
        let out = render_to_string(&[sample_entry()], false);

        assert!(out.starts_with("{\n"));
        assert!(out.contains("  Index: 1\n"));
        assert!(out.contains("  Issuer CA ID: 16418\n"));
        assert!(out.contains("  Issuer Name: CN=R3\n"));
        assert!(out.contains("  Name: example.com\n"));
        assert!(out.contains("  Min Cert ID: 987119772\n"));
        assert!(out.contains("  Min Entry Timestamp: 2023-01-15T08:30:00.000\n"));
        assert!(out.contains("  Not Before: 2023-01-15T07:30:00\n"));
        assert!(out.contains("  Not After: 2023-04-15T07:30:00\n"));
        assert!(out.contains("  Download PEM: https://crt.sh/?d=987119772\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_full_record_index_is_one_based() {
        let out = render_to_string(&[sample_entry(), sample_entry()], false);
        assert!(out.contains("  Index: 1\n"));
        assert!(out.contains("  Index: 2\n"));
    }

    #[test]
    fn test_empty_result_renders_nothing() {
        assert_eq!(render_to_string(&[], false), "");
        assert_eq!(render_to_string(&[], true), "");
    }

    #[test]
    fn test_dns_names_header_and_lines() {
        let mut buf = Vec::new();
        let names = vec!["example.com".to_string(), "www.example.com".to_string()];
        Printer::new(&mut buf, false).render_dns_names(&names).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Enumerated DNS names:\nexample.com\nwww.example.com\n"
        );
    }

    #[test]
    fn test_dns_names_empty_is_header_only() {
        let mut buf = Vec::new();
        Printer::new(&mut buf, false).render_dns_names(&[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Enumerated DNS names:\n");
    }

    #[test]
    fn test_certificate_id_line() {
        let mut buf = Vec::new();
        Printer::new(&mut buf, false).render_certificate_id(42).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Certificate ID: 42\n");
    }
}

// src/cert_parser.rs
use x509_parser::extensions::ParsedExtension;
use x509_parser::prelude::*;

use crate::error::CrtshError;

/// Certificate parser for extracting SAN DNS names from PEM documents
pub struct CertificateParser;

impl CertificateParser {
    /// Decode the first PEM block in `pem_bytes`, parse it as a DER X.509
    /// certificate, and return its Subject Alternative Name DNS entries in
    /// extension order.
    ///
    /// A document with no PEM block fails with `PemDecode`; a block whose
    /// payload is not valid DER fails with `CertificateParse`. A certificate
    /// without SAN DNS entries yields an empty list, not an error. No trust
    /// validation of any kind is performed.
    pub fn enumerate_dns_names(pem_bytes: &[u8]) -> Result<Vec<String>, CrtshError> {
        let (_, pem) = parse_x509_pem(pem_bytes).map_err(|e| CrtshError::PemDecode {
            reason: e.to_string(),
        })?;

        let cert = pem.parse_x509().map_err(|e| CrtshError::CertificateParse {
            reason: e.to_string(),
        })?;

        Ok(Self::extract_dns_names(&cert))
    }

    /// Collect DNS names from the SAN extension (OID 2.5.29.17), preserving
    /// the order declared in the certificate. Non-DNS general names (IPs,
    /// URIs, email) are skipped.
    fn extract_dns_names(cert: &X509Certificate) -> Vec<String> {
        let mut names = Vec::new();

        for ext in cert.extensions() {
            if let ParsedExtension::SubjectAlternativeName(san) = ext.parsed_extension() {
                for general_name in &san.general_names {
                    if let GeneralName::DNSName(dns_name) = general_name {
                        names.push(dns_name.to_string());
                    }
                }
            }
        }

        names
    }
}

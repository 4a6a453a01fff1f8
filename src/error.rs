// src/error.rs
//! Error types for crt.sh queries and certificate parsing.

use std::fmt;

/// Error type for crt.sh client and certificate parsing failures.
#[derive(Debug)]
pub enum CrtshError {
    /// Network-level failure (DNS, connect, timeout, body read)
    Transport {
        /// The URL the request was issued against
        url: String,
        /// The underlying reqwest error
        source: reqwest::Error,
    },

    /// crt.sh answered with a non-200 HTTP status
    Status {
        /// The URL the request was issued against
        url: String,
        /// The status the service returned
        status: reqwest::StatusCode,
    },

    /// Response body did not decode as the expected JSON array of log entries
    Decode {
        /// The underlying serde_json error
        source: serde_json::Error,
    },

    /// No PEM block found in a downloaded certificate document
    PemDecode {
        /// What went wrong locating/decoding the PEM envelope
        reason: String,
    },

    /// PEM payload is not a valid DER-encoded X.509 certificate
    CertificateParse {
        /// What went wrong parsing the DER
        reason: String,
    },
}

impl CrtshError {
    /// True for failures of the HTTP exchange itself (network or status),
    /// as opposed to failures interpreting a successfully fetched body.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }
}

impl fmt::Display for CrtshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { url, source } => {
                write!(f, "can not access crt.sh at {}: {}", url, source)
            }
            Self::Status { url, status } => {
                write!(f, "crt.sh returned HTTP {} for {}", status, url)
            }
            Self::Decode { source } => {
                write!(f, "unexpected crt.sh JSON response: {}", source)
            }
            Self::PemDecode { reason } => {
                write!(f, "no PEM block found in certificate document: {}", reason)
            }
            Self::CertificateParse { reason } => {
                write!(f, "failed to parse X.509 certificate: {}", reason)
            }
        }
    }
}

impl std::error::Error for CrtshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Decode { source } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CrtshError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}

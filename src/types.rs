// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a crt.sh JSON search result.
///
/// Field names match the keys crt.sh emits. The server occasionally omits
/// fields (notably `min_cert_id`), so every field falls back to its default
/// rather than failing the whole array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtLogEntry {
    #[serde(default)]
    pub issuer_ca_id: i64,

    #[serde(default)]
    pub issuer_name: String,

    /// Subject/SAN name string as indexed by the log; may contain several
    /// newline-separated names.
    #[serde(default)]
    pub name_value: String,

    /// Smallest certificate ID in this name grouping; the handle used to
    /// download the certificate (`?d=<id>`).
    #[serde(default)]
    pub min_cert_id: i64,

    #[serde(default)]
    pub min_entry_timestamp: String,

    #[serde(default)]
    pub not_before: String,

    #[serde(default)]
    pub not_after: String,
}

impl fmt::Display for CtLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (issuer: {})", self.name_value, self.issuer_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "issuer_ca_id": 16418,
            "issuer_name": "C=US, O=Let's Encrypt, CN=R3",
            "name_value": "example.com\nwww.example.com",
            "min_cert_id": 987119772,
            "min_entry_timestamp": "2023-01-15T08:30:00.000",
            "not_before": "2023-01-15T07:30:00",
            "not_after": "2023-04-15T07:30:00"
        }"#;

        let entry: CtLogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.issuer_ca_id, 16418);
        assert_eq!(entry.issuer_name, "C=US, O=Let's Encrypt, CN=R3");
        assert_eq!(entry.name_value, "example.com\nwww.example.com");
        assert_eq!(entry.min_cert_id, 987119772);
        assert_eq!(entry.min_entry_timestamp, "2023-01-15T08:30:00.000");
        assert_eq!(entry.not_before, "2023-01-15T07:30:00");
        assert_eq!(entry.not_after, "2023-04-15T07:30:00");
    }

    #[test]
    fn test_deserialize_entry_with_missing_fields() {
        let json = r#"{
            "issuer_name": "CN=Test CA",
            "name_value": "test.com"
        }"#;

        let entry: CtLogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.issuer_ca_id, 0);
        assert_eq!(entry.min_cert_id, 0);
        assert_eq!(entry.name_value, "test.com");
        assert_eq!(entry.min_entry_timestamp, "");
    }

    #[test]
    fn test_deserialize_array() {
        let json = r#"[
            {"issuer_ca_id": 1, "name_value": "a.com", "min_cert_id": 10},
            {"issuer_ca_id": 2, "name_value": "b.com", "min_cert_id": 20}
        ]"#;

        let entries: Vec<CtLogEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name_value, "a.com");
        assert_eq!(entries[1].min_cert_id, 20);
    }

    #[test]
    fn test_deserialize_non_array_fails() {
        let json = r#"{"issuer_ca_id": 1}"#;
        let result: Result<Vec<CtLogEntry>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let entry = CtLogEntry {
            issuer_ca_id: 1,
            issuer_name: "CN=R3".to_string(),
            name_value: "example.com".to_string(),
            min_cert_id: 42,
            min_entry_timestamp: String::new(),
            not_before: String::new(),
            not_after: String::new(),
        };
        assert_eq!(entry.to_string(), "example.com (issuer: CN=R3)");
    }
}

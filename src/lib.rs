// src/lib.rs
// Library interface for crtsh
pub mod cert_parser;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod types;

//! Faculty Lists Library
//!
//! Scrapes faculty directories (JSON and HTML) into uniform records and
//! writes one spreadsheet sheet per site.

pub mod config;
pub mod fetch;
pub mod normalize;
pub mod runner;
pub mod scrapers;
pub mod storage;
pub mod types;
pub mod workbook;

pub use types::*;

//! Report generation pipeline: filter, summarize, render.
//!
//! # Responsibility
//! - Define the report configuration surface consumed by the pipeline.
//! - Keep filtering and rendering pure so they stay independently testable;
//!   the only nondeterminism (generation time) enters through `ReportStamp`.
//!
//! # Invariants
//! - Filtering preserves store order and never mutates input.
//! - Rendering is a pure function of `(memos, config, stamp)`.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod csv;
pub mod filter;
pub mod html;
pub mod summary;

/// Category filter selection.
///
/// `Recent` and `Urgent` are accepted configuration with no filtering
/// effect: they need priority/backend data that a session store does not
/// carry, so they pass every memo through unchanged. The variants stay on
/// the configuration surface so callers do not have to special-case them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoFilter {
    #[default]
    All,
    Recent,
    Urgent,
}

impl MemoFilter {
    /// Parses the UI's string form (`all`/`recent`/`urgent`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "recent" => Some(Self::Recent),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Csv,
}

impl ReportFormat {
    /// Parses the UI's string form (`html`/`csv`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "html" => Some(Self::Html),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Csv => "text/csv",
        }
    }
}

/// Report request as produced by the UI.
///
/// `date_from`/`date_to` are inclusive ISO `YYYY-MM-DD` bounds; an empty
/// string means the bound is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default, rename = "dateFrom")]
    pub date_from: String,
    #[serde(default, rename = "dateTo")]
    pub date_to: String,
    #[serde(default, rename = "filterBy")]
    pub filter_by: MemoFilter,
    #[serde(default)]
    pub format: ReportFormat,
}

/// Generation-time context for one report run.
///
/// Built once per generation and passed down so renderers stay pure;
/// everything else in a rendered document is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStamp {
    /// Calendar date of generation, used for the download file name.
    pub date: NaiveDate,
    /// Locale-style display form (`M/D/YYYY`) embedded in HTML output.
    pub display: String,
}

impl ReportStamp {
    /// Stamp for the current local date.
    pub fn now() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Stamp for a fixed date; the deterministic entry point.
    pub fn for_date(date: NaiveDate) -> Self {
        let display = format!(
            "{}/{}/{}",
            date.format("%-m"),
            date.format("%-d"),
            date.format("%Y")
        );
        Self { date, display }
    }

    /// ISO form of the generation date (`YYYY-MM-DD`).
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

//! Source locators and remote workbook fetching.
//!
//! A Google Sheets share link such as
//! `https://docs.google.com/spreadsheets/d/<id>/edit#gid=<gid>` is rewritten
//! to the sheet's XLSX export endpoint and downloaded with a blocking client.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{DataError, Result};
use crate::sources::{read_xlsx, CsvOptions, CsvSource, DataSource, ExcelSource};
use crate::table::Workbook;

/// Default request timeout for remote documents
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const GOOGLE_SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    /// A Google Sheets document, optionally pointing at one tab
    GoogleSheet { id: String, gid: Option<String> },
    /// Any other HTTP(S) URL, expected to serve an XLSX file
    Url(String),
    /// A local `.xlsx`, `.csv` or `.tsv` file
    File(PathBuf),
}

impl SourceLocator {
    /// Interpret one user-supplied locator
    pub fn parse(input: &str) -> Result<Self> {
        static SHEET_RE: OnceLock<Regex> = OnceLock::new();
        static GID_RE: OnceLock<Regex> = OnceLock::new();

        let input = input.trim();
        if input.is_empty() {
            return Err(DataError::InvalidLocator("empty locator".to_string()));
        }

        let sheet_re = SHEET_RE.get_or_init(|| {
            Regex::new(r"^https?://docs\.google\.com/spreadsheets/d/([A-Za-z0-9_-]+)").unwrap()
        });

        if let Some(caps) = sheet_re.captures(input) {
            let gid_re = GID_RE.get_or_init(|| Regex::new(r"[#?&]gid=(\d+)").unwrap());
            let rest = &input[caps.get(0).map_or(0, |m| m.end())..];
            return Ok(SourceLocator::GoogleSheet {
                id: caps[1].to_string(),
                gid: gid_re.captures(rest).map(|c| c[1].to_string()),
            });
        }

        if input.starts_with("https://docs.google.com/spreadsheets/") {
            return Err(DataError::InvalidLocator(format!(
                "no document id in '{}'",
                input
            )));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Ok(SourceLocator::Url(input.to_string()));
        }

        Ok(SourceLocator::File(PathBuf::from(input)))
    }

    /// Split a comma-separated list of locators, ignoring blank entries
    ///
    /// Entries are left unparsed so that a malformed one only affects itself.
    pub fn split_list(input: &str) -> Vec<&str> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The direct download URL, for remote locators
    pub fn export_url(&self) -> Option<String> {
        match self {
            SourceLocator::GoogleSheet { id, gid } => Some(match gid {
                Some(gid) => format!("{}/{}/export?gid={}&format=xlsx", GOOGLE_SHEETS_BASE, id, gid),
                None => format!("{}/{}/export?format=xlsx", GOOGLE_SHEETS_BASE, id),
            }),
            SourceLocator::Url(url) => Some(url.clone()),
            SourceLocator::File(_) => None,
        }
    }

    /// Build the matching data source
    pub fn open(&self, timeout: Duration) -> Result<Box<dyn DataSource>> {
        match self {
            SourceLocator::File(path) => open_file(path),
            _ => {
                let url = self
                    .export_url()
                    .ok_or_else(|| DataError::InvalidLocator(self.to_string()))?;
                Ok(Box::new(RemoteSource::new(url, timeout)?))
            }
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocator::GoogleSheet { id, gid: Some(gid) } => {
                write!(f, "google sheet {} (gid {})", id, gid)
            }
            SourceLocator::GoogleSheet { id, gid: None } => write!(f, "google sheet {}", id),
            SourceLocator::Url(url) => f.write_str(url),
            SourceLocator::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn open_file(path: &Path) -> Result<Box<dyn DataSource>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(Box::new(CsvSource::new(path)?)),
        Some("tsv") => Ok(Box::new(CsvSource::with_options(path, CsvOptions::tsv())?)),
        _ => Ok(Box::new(ExcelSource::new(path)?)),
    }
}

/// A workbook downloaded over HTTP and parsed as XLSX
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    client: Client,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Download the raw document bytes
    pub fn fetch(&self) -> Result<Vec<u8>> {
        info!(url = %self.url, "fetching workbook");
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = response.bytes()?.to_vec();
        debug!(url = %self.url, bytes = bytes.len(), "download complete");
        Ok(bytes)
    }
}

impl DataSource for RemoteSource {
    fn read_workbook(&self) -> Result<Workbook> {
        let bytes = self.fetch()?;
        read_xlsx(Cursor::new(bytes))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

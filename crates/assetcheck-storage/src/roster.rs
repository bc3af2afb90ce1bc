//! Roster sources for the initial seed.

use std::path::{Path, PathBuf};

use assetcheck_core::{demo_roster, Asset};
use serde::Deserialize;

use crate::{Error, Result};

/// Where the initial asset roster comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RosterSource {
    /// Built-in demo roster (`PC-001..PC-004`)
    #[default]
    Demo,
    /// CSV file with a `name,department,asset_no,sticker_no` header
    Csv(PathBuf),
}

impl RosterSource {
    /// Demo roster unless a CSV path is given.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => RosterSource::Csv(p.to_path_buf()),
            None => RosterSource::Demo,
        }
    }

    /// Loads the roster.
    pub fn load(&self) -> Result<Vec<Asset>> {
        match self {
            RosterSource::Demo => Ok(demo_roster()),
            RosterSource::Csv(path) => load_csv(path),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RosterRecord {
    name: String,
    department: String,
    asset_no: String,
    sticker_no: String,
}

fn load_csv(path: &Path) -> Result<Vec<Asset>> {
    let file = std::fs::File::open(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut roster = Vec::new();
    for record in reader.deserialize::<RosterRecord>() {
        let r = record?;
        if r.asset_no.is_empty() {
            continue;
        }
        roster.push(Asset::new(r.asset_no, r.name, r.department, r.sticker_no));
    }
    Ok(roster)
}

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ConvertError;

pub const ADLIST_FILE: &str = "adlist.json";
pub const WHITELIST_EXACT_FILE: &str = "whitelist.exact.json";
pub const BLACKLIST_EXACT_FILE: &str = "blacklist.exact.json";
pub const WHITELIST_REGEX_FILE: &str = "whitelist.regex.json";
pub const BLACKLIST_REGEX_FILE: &str = "blacklist.regex.json";

/// a record from adlist.json as exported by the teleporter; the export
/// carries more fields than these, the rest are ignored
#[derive(Debug, Deserialize)]
struct RawAdlistRecord {
    address: String,
    comment: String,
    enabled: bool,
}

/// a record from one of the four domain list files; `enabled` is an
/// integer flag in the teleporter export, not a boolean
#[derive(Debug, Deserialize)]
struct RawDomainRecord {
    domain: String,
    comment: String,
    enabled: i64,
}

/// an enabled adlist subscription, projected to the two reported fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdlistEntry {
    pub address: String,
    pub comment: String,
}

/// an enabled whitelist/blacklist domain rule, exact or regex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    pub domain: String,
    pub comment: String,
}

/// Reads a JSON array of records from a well-known file inside the
/// extracted archive
///
/// * `dir`: the directory the archive was extracted into
/// * `file_name`: name of the list file to read
fn load_records<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>, ConvertError> {
    let path = dir.join(file_name);
    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConvertError::MissingFile(path));
        }
        Err(e) => return Err(ConvertError::Io(e)),
    };
    serde_json::from_str(&contents).map_err(|e| ConvertError::MalformedData {
        file: file_name.to_string(),
        source: e,
    })
}

/// Reads the adlist file, drops disabled subscriptions and projects the
/// rest to address and comment. Order mirrors the file.
pub fn read_adlist(dir: &Path) -> Result<Vec<AdlistEntry>, ConvertError> {
    let records: Vec<RawAdlistRecord> = load_records(dir, ADLIST_FILE)?;
    let entries: Vec<AdlistEntry> = records
        .into_iter()
        .filter(|r| r.enabled)
        .map(|r| AdlistEntry {
            address: r.address,
            comment: r.comment,
        })
        .collect();
    debug!("{}: {} enabled entries", ADLIST_FILE, entries.len());
    Ok(entries)
}

fn read_domain_list(dir: &Path, file_name: &str) -> Result<Vec<DomainEntry>, ConvertError> {
    let records: Vec<RawDomainRecord> = load_records(dir, file_name)?;
    let entries: Vec<DomainEntry> = records
        .into_iter()
        .filter(|r| r.enabled == 1)
        .map(|r| DomainEntry {
            domain: r.domain,
            comment: r.comment,
        })
        .collect();
    debug!("{}: {} enabled entries", file_name, entries.len());
    Ok(entries)
}

pub fn read_whitelist_exact(dir: &Path) -> Result<Vec<DomainEntry>, ConvertError> {
    read_domain_list(dir, WHITELIST_EXACT_FILE)
}

pub fn read_blacklist_exact(dir: &Path) -> Result<Vec<DomainEntry>, ConvertError> {
    read_domain_list(dir, BLACKLIST_EXACT_FILE)
}

pub fn read_whitelist_regex(dir: &Path) -> Result<Vec<DomainEntry>, ConvertError> {
    read_domain_list(dir, WHITELIST_REGEX_FILE)
}

pub fn read_blacklist_regex(dir: &Path) -> Result<Vec<DomainEntry>, ConvertError> {
    read_domain_list(dir, BLACKLIST_REGEX_FILE)
}

use std::io::Write;

use crate::lists::AdlistEntry;
use crate::liveness::normalize_address;

pub const ADLIST_HEADER: &str =
    "Add each of the following blocklists to the DNS blocklists page:";
pub const RULES_HEADER: &str = "Copy and paste this into the Custom filtering rules field:";

/// Writes the migration report: the surviving adlist subscriptions followed
/// by the custom filtering rules block.
///
/// * `out`: the output sink, stdout in production
/// * `adlist`: adlist entries that passed the liveness filter, in order
/// * `rules`: the pre-built filtering rules block
pub fn write_report<W: Write>(
    out: &mut W,
    adlist: &[AdlistEntry],
    rules: &str,
) -> std::io::Result<()> {
    writeln!(out, "{}", ADLIST_HEADER)?;
    writeln!(out)?;
    for entry in adlist {
        writeln!(out, "Name: {}", entry.comment)?;
        writeln!(out, "URL: {}", normalize_address(&entry.address))?;
        writeln!(out)?;
    }
    writeln!(out, "{}", RULES_HEADER)?;
    writeln!(out)?;
    write!(out, "{}", rules)?;
    Ok(())
}

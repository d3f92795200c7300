use crate::lists::DomainEntry;

/// Serializes the four domain lists into the custom filtering rules block.
/// Exact entries use anchored literal syntax (`|domain^`), regex entries
/// use `/pattern/`, whitelist entries carry the `@@` exception marker.
/// Comments and domains are written verbatim, without escaping.
pub fn build_filtering_rules(
    whitelist_exact: &[DomainEntry],
    blacklist_exact: &[DomainEntry],
    whitelist_regex: &[DomainEntry],
    blacklist_regex: &[DomainEntry],
) -> String {
    let mut block = String::new();

    block.push_str("! Whitelist\n");
    for entry in whitelist_exact {
        block.push_str(&format!("# {}\n@@|{}^\n", entry.comment, entry.domain));
    }
    for entry in whitelist_regex {
        block.push_str(&format!("# {}\n@@/{}/\n", entry.comment, entry.domain));
    }

    block.push_str("\n\n");
    block.push_str("! Blacklist\n");
    for entry in blacklist_exact {
        block.push_str(&format!("# {}\n|{}^\n", entry.comment, entry.domain));
    }
    for entry in blacklist_regex {
        block.push_str(&format!("# {}\n/{}/\n", entry.comment, entry.domain));
    }

    block
}

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{redirect, Client, StatusCode};
use url::Url;

use crate::lists::AdlistEntry;

/// Undoes the `\/` escaping artifacts some teleporter exports carry in
/// their URL fields.
pub fn normalize_address(address: &str) -> String {
    address.replace("\\/", "/")
}

/// Probe is the capability the liveness filter uses to decide whether an
/// adlist URL is still being served. Implementations must not fail: an
/// unreachable URL is a `false`, never an error.
#[async_trait]
pub trait Probe {
    async fn is_live(&self, url: &str) -> bool;
}

/// HttpProbe checks a URL with a single HEAD request
#[derive(Debug)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Builds the probe client. Redirects are not followed since anything
    /// other than a direct 200 counts as not working.
    ///
    /// * `timeout`: per-request timeout
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn is_live(&self, url: &str) -> bool {
        let url = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                debug!("invalid adlist url {}: {}", url, e);
                return false;
            }
        };
        match self.client.head(url.clone()).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("probe failed for {}: {}", url, e);
                false
            }
        }
    }
}

/// Probes each adlist entry in order and keeps only those whose normalized
/// address answers with HTTP 200. Survivors keep their input order.
///
/// * `entries`: enabled adlist entries in source-file order
/// * `probe`: the liveness capability, injectable for testing
pub async fn filter_working<P: Probe>(entries: Vec<AdlistEntry>, probe: &P) -> Vec<AdlistEntry> {
    let mut working = Vec::with_capacity(entries.len());
    for entry in entries {
        let url = normalize_address(&entry.address);
        if probe.is_live(&url).await {
            working.push(entry);
        } else {
            debug!("dropping unreachable adlist: {}", url);
        }
    }
    working
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::*;

    /// StubProbe reports a fixed set of URLs as live
    pub(crate) struct StubProbe {
        live: HashSet<String>,
    }

    impl StubProbe {
        pub(crate) fn new(live: &[&str]) -> Self {
            Self {
                live: live.iter().map(|u| u.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl Probe for StubProbe {
        async fn is_live(&self, url: &str) -> bool {
            self.live.contains(url)
        }
    }

    fn entry(address: &str, comment: &str) -> AdlistEntry {
        AdlistEntry {
            address: address.to_string(),
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_normalize_address() {
        let got = normalize_address("https:\\/\\/example.com\\/list.txt");
        assert_eq!(got, "https://example.com/list.txt");
    }

    #[test]
    fn test_normalize_address_plain_url_unchanged() {
        let got = normalize_address("https://example.com/list.txt");
        assert_eq!(got, "https://example.com/list.txt");
    }

    #[tokio::test]
    async fn test_filter_working_keeps_live_in_order() {
        let probe = StubProbe::new(&[
            "https://one.example/list.txt",
            "https://three.example/list.txt",
        ]);
        let entries = vec![
            entry("https://one.example/list.txt", "one"),
            entry("https://two.example/list.txt", "two"),
            entry("https://three.example/list.txt", "three"),
        ];

        let got = filter_working(entries, &probe).await;
        let comments: Vec<&str> = got.iter().map(|e| e.comment.as_str()).collect();
        assert_eq!(comments, vec!["one", "three"]);
    }

    #[tokio::test]
    async fn test_filter_working_probes_normalized_address() {
        // the probe sees the unescaped form even though the entry keeps
        // the raw one
        let probe = StubProbe::new(&["https://one.example/list.txt"]);
        let entries = vec![entry("https:\\/\\/one.example\\/list.txt", "one")];

        let got = filter_working(entries, &probe).await;
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].address, "https:\\/\\/one.example\\/list.txt");
    }

    #[tokio::test]
    async fn test_filter_working_all_dead() {
        let probe = StubProbe::new(&[]);
        let entries = vec![entry("https://one.example/list.txt", "one")];

        let got = filter_working(entries, &probe).await;
        assert!(got.is_empty());
    }
}

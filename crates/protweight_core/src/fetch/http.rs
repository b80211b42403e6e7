use super::{is_valid_identifier, FetchError, FetchResult, SequenceSource};
use log::{info, warn};
use reqwest::blocking::Client;
use std::time::Instant;

/// Placeholder substituted with the identifier in URL templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// RCSB entry endpoint serving FASTA text per PDB identifier.
pub const DEFAULT_URL_TEMPLATE: &str = "https://www.rcsb.org/fasta/entry/{id}";

/// Blocking HTTP fetcher issuing one GET per identifier.
pub struct HttpFastaSource {
    client: Client,
    url_template: String,
}

impl HttpFastaSource {
    /// Builds a fetcher for `url_template`, which must contain `{id}`.
    pub fn new(url_template: impl Into<String>) -> FetchResult<Self> {
        let url_template = url_template.into();
        if !url_template.contains(ID_PLACEHOLDER) {
            return Err(FetchError::InvalidTemplate(url_template));
        }
        Ok(Self {
            client: Client::new(),
            url_template,
        })
    }

    /// Returns the request URL for `identifier`.
    pub fn url_for(&self, identifier: &str) -> FetchResult<String> {
        if !is_valid_identifier(identifier) {
            return Err(FetchError::InvalidIdentifier(identifier.to_string()));
        }
        Ok(self.url_template.replace(ID_PLACEHOLDER, identifier))
    }
}

impl Default for HttpFastaSource {
    fn default() -> Self {
        Self {
            client: Client::new(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }
}

impl SequenceSource for HttpFastaSource {
    fn fetch(&self, identifier: &str) -> FetchResult<Option<String>> {
        let url = self.url_for(identifier)?;
        let started_at = Instant::now();

        let transport = |source: reqwest::Error| FetchError::Transport {
            identifier: identifier.to_string(),
            source,
        };
        let response = self.client.get(&url).send().map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=fetch module=fetch status=skipped id={} http_status={} duration_ms={}",
                identifier,
                status.as_u16(),
                started_at.elapsed().as_millis()
            );
            return Ok(None);
        }

        let body = response.text().map_err(transport)?;
        info!(
            "event=fetch module=fetch status=ok id={} bytes={} duration_ms={}",
            identifier,
            body.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Some(body))
    }
}

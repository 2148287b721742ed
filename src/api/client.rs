use super::models::{ChapterSummary, EditionText, Envelope, VerseAudio};
use crate::cache::ResponseCache;
use crate::config::AppConfig;
use crate::player::StreamReader;
use anyhow::{Context, Result, anyhow, bail};
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Blocking client for the content API.
///
/// Callers must run it off the UI thread. Catalogue and chapter requests are
/// network-first; when the network fails, the last good body cached for the
/// same URL is served instead.
#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    base: Url,
    cache: ResponseCache,
}

impl ContentClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let cache = ResponseCache::new(&config.cache_path(), config.offline_cache);
        Self::with_parts(&config.api_base_url, cache)
    }

    pub fn with_parts(base_url: &str, cache: ResponseCache) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("Invalid API base {base_url}"))?;
        if base.cannot_be_a_base() {
            bail!("API base {base_url} cannot carry a path");
        }
        // No request deadline: a hung call stays pending until the transport gives up.
        let http = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, base, cache })
    }

    pub fn fetch_chapters(&self) -> Result<Vec<ChapterSummary>> {
        let chapters: Vec<ChapterSummary> = self.get_json(&["surah"])?;
        info!(count = chapters.len(), "Fetched chapter catalogue");
        Ok(chapters)
    }

    /// One chapter in several editions, returned in the order requested.
    pub fn fetch_chapter_editions(
        &self,
        chapter: u16,
        editions: &[String],
    ) -> Result<Vec<EditionText>> {
        if editions.is_empty() {
            bail!("No editions requested for chapter {chapter}");
        }
        let number = chapter.to_string();
        let joined = editions.join(",");
        let texts: Vec<EditionText> = self.get_json(&["surah", &number, "editions", &joined])?;
        info!(chapter, editions = %joined, returned = texts.len(), "Fetched chapter editions");
        Ok(texts)
    }

    pub fn fetch_verse_audio(&self, global_index: u32, edition: &str) -> Result<VerseAudio> {
        let index = global_index.to_string();
        self.get_json(&["ayah", &index, edition])
    }

    /// Download a complete recitation clip.
    pub fn fetch_audio_clip(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .with_context(|| format!("Failed to request audio {url}"))?
            .error_for_status()
            .with_context(|| format!("Audio request rejected {url}"))?;
        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read audio body {url}"))?;
        debug!(url, bytes = bytes.len(), "Downloaded recitation clip");
        Ok(bytes.to_vec())
    }

    /// Open a live stream. The response body is read lazily by the decoder.
    pub fn open_stream(&self, url: &str) -> Result<StreamReader> {
        let parsed = Url::parse(url.trim()).with_context(|| format!("Invalid stream URL {url}"))?;
        let response = self
            .http
            .get(parsed.clone())
            .send()
            .with_context(|| format!("Failed to open stream {parsed}"))?
            .error_for_status()
            .with_context(|| format!("Stream rejected {parsed}"))?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        info!(url = %parsed, content_type = ?content_type, "Opened live stream");
        Ok(StreamReader::new(Box::new(response), content_type))
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        match self.fetch_validated(&url) {
            Ok((value, body)) => {
                self.cache.store(url.as_str(), &body);
                Ok(value)
            }
            Err(err) => {
                if let Some(body) = self.cache.load(url.as_str()) {
                    if let Ok(value) = decode_envelope::<T>(&body) {
                        warn!(url = %url, "Network failed, serving cached response: {err:#}");
                        return Ok(value);
                    }
                }
                Err(err)
            }
        }
    }

    fn fetch_validated<T: DeserializeOwned>(&self, url: &Url) -> Result<(T, Vec<u8>)> {
        debug!(url = %url, "Requesting content");
        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .with_context(|| format!("Request failed {url}"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {status} for {url}");
        }
        let body = response
            .bytes()
            .with_context(|| format!("Failed to read body {url}"))?
            .to_vec();
        let value = decode_envelope(&body)?;
        Ok((value, body))
    }
}

/// Unwrap a `{status, data}` envelope, rejecting anything but `"OK"`.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<T> =
        serde_json::from_slice(body).context("Malformed API response")?;
    if envelope.status != "OK" {
        match envelope.code {
            Some(code) => bail!("API returned status {} ({code})", envelope.status),
            None => bail!("API returned status {}", envelope.status),
        }
    }
    envelope
        .data
        .ok_or_else(|| anyhow!("API response carried no data"))
}

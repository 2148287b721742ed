use crate::api::ContentClient;
use anyhow::{Result, anyhow};
use std::io::{self, Read, Seek, SeekFrom};
use std::sync::{Arc, Mutex};

/// Bytes kept from the start of a live stream so format probing can rewind.
const STREAM_HEAD_CAPACITY: usize = 256 * 1024;

/// Decoded-ready audio handed from a loader task to the output.
#[derive(Clone)]
pub enum AudioSource {
    /// A complete recitation clip held in memory.
    Clip(Arc<[u8]>),
    /// A live stream; taken exactly once by the output.
    Stream(Arc<Mutex<Option<StreamReader>>>),
}

impl AudioSource {
    pub fn clip(bytes: Vec<u8>) -> Self {
        AudioSource::Clip(bytes.into())
    }

    pub fn stream(reader: StreamReader) -> Self {
        AudioSource::Stream(Arc::new(Mutex::new(Some(reader))))
    }
}

impl std::fmt::Debug for AudioSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioSource::Clip(bytes) => write!(f, "Clip({} bytes)", bytes.len()),
            AudioSource::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// What the controller asked to be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioTarget {
    Verse { global_index: u32, edition: String },
    Stream { url: String },
}

/// Resolve and fetch a target. Blocking; run it off the UI thread.
pub fn load_source(client: &ContentClient, target: &AudioTarget) -> Result<AudioSource> {
    match target {
        AudioTarget::Verse {
            global_index,
            edition,
        } => {
            let audio = client.fetch_verse_audio(*global_index, edition)?;
            let url = audio
                .clip_url()
                .ok_or_else(|| anyhow!("No audio for verse {global_index} in {edition}"))?;
            Ok(AudioSource::clip(client.fetch_audio_clip(url)?))
        }
        AudioTarget::Stream { url } => Ok(AudioSource::stream(client.open_stream(url)?)),
    }
}

/// Forward-only network body that can rewind within its first bytes.
///
/// Decoders probe a few formats before settling, seeking back to the start
/// after each attempt. Everything read up to the head capacity is kept, so
/// those seeks are served from memory. Seeking past what has been read, or
/// back once the head has been outgrown, is unsupported.
pub struct StreamReader {
    inner: Mutex<Box<dyn Read + Send>>,
    content_type: Option<String>,
    head: Vec<u8>,
    head_capacity: usize,
    pos: u64,
    fetched: u64,
}

impl StreamReader {
    pub fn new(inner: Box<dyn Read + Send>, content_type: Option<String>) -> Self {
        Self::with_head_capacity(inner, content_type, STREAM_HEAD_CAPACITY)
    }

    pub fn with_head_capacity(
        inner: Box<dyn Read + Send>,
        content_type: Option<String>,
        head_capacity: usize,
    ) -> Self {
        Self {
            inner: Mutex::new(inner),
            content_type,
            head: Vec::new(),
            head_capacity,
            pos: 0,
            fetched: 0,
        }
    }

    /// True when the server announced an Ogg container.
    pub fn is_ogg(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("ogg"))
            .unwrap_or(false)
    }

    fn replayable(&self) -> bool {
        self.fetched == self.head.len() as u64
    }
}

impl Read for StreamReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos < self.fetched {
            let start = self.pos as usize;
            let pending = &self.head[start..];
            let n = pending.len().min(buf.len());
            buf[..n].copy_from_slice(&pending[..n]);
            self.pos += n as u64;
            return Ok(n);
        }

        let inner = self
            .inner
            .get_mut()
            .map_err(|_| io::Error::other("stream reader poisoned"))?;
        let n = inner.read(buf)?;
        if self.replayable() && self.head.len() < self.head_capacity {
            let room = self.head_capacity - self.head.len();
            self.head.extend_from_slice(&buf[..n.min(room)]);
        }
        self.pos += n as u64;
        self.fetched += n as u64;
        Ok(n)
    }
}

impl Seek for StreamReader {
    fn seek(&mut self, target: SeekFrom) -> io::Result<u64> {
        let target = match target {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(delta) => i128::from(self.pos) + i128::from(delta),
            SeekFrom::End(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "live stream has no end",
                ));
            }
        };
        if target < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before start of stream",
            ));
        }
        let target = target as u64;
        if target == self.pos {
            return Ok(self.pos);
        }
        if self.replayable() && target <= self.fetched {
            self.pos = target;
            return Ok(self.pos);
        }
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "seek outside buffered stream head",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(bytes: Vec<u8>, capacity: usize) -> StreamReader {
        StreamReader::with_head_capacity(Box::new(Cursor::new(bytes)), None, capacity)
    }

    #[test]
    fn rewinds_within_head_and_continues_forward() {
        let data: Vec<u8> = (0u8..100).collect();
        let mut r = reader(data.clone(), 64);
        let mut first = [0u8; 10];
        r.read_exact(&mut first).expect("read");
        assert_eq!(r.seek(SeekFrom::Start(0)).expect("rewind"), 0);

        let mut all = Vec::new();
        r.read_to_end(&mut all).expect("read all");
        assert_eq!(all, data);
    }

    #[test]
    fn stream_position_query_is_supported() {
        let mut r = reader(vec![1, 2, 3, 4], 16);
        let mut two = [0u8; 2];
        r.read_exact(&mut two).expect("read");
        assert_eq!(r.stream_position().expect("position"), 2);
        assert_eq!(r.seek(SeekFrom::Current(-2)).expect("back"), 0);
    }

    #[test]
    fn refuses_end_and_unread_targets() {
        let mut r = reader(vec![0; 32], 16);
        assert!(r.seek(SeekFrom::End(0)).is_err());
        assert!(r.seek(SeekFrom::Start(5)).is_err());
    }

    #[test]
    fn cannot_rewind_after_head_is_outgrown() {
        let mut r = reader(vec![7; 40], 8);
        let mut buf = [0u8; 20];
        r.read_exact(&mut buf).expect("read");
        assert!(r.seek(SeekFrom::Start(0)).is_err());
        assert_eq!(r.seek(SeekFrom::Current(0)).expect("no-op"), 20);
    }

    #[test]
    fn detects_ogg_content_type() {
        let r = StreamReader::new(Box::new(Cursor::new(Vec::new())), Some("application/OGG".into()));
        assert!(r.is_ogg());
        assert!(!reader(Vec::new(), 4).is_ogg());
    }
}

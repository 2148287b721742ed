use super::source::AudioSource;
use anyhow::{Context, Result, anyhow};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use tracing::debug;

/// Device seam used by the playback controller.
pub trait AudioOutput {
    /// Replace whatever is playing with `source` and start it.
    fn start(&mut self, source: AudioSource) -> Result<()>;
    fn pause(&mut self);
    /// Continue the current source; fails when nothing is loaded.
    fn resume(&mut self) -> Result<()>;
    fn stop(&mut self);
    /// True once a started source has played to its end.
    fn is_finished(&self) -> bool;
}

struct RodioPlayback {
    _stream: OutputStream,
    sink: Sink,
}

/// Speaker output backed by rodio; the device is opened per source.
#[derive(Default)]
pub struct RodioOutput {
    playback: Option<RodioPlayback>,
}

impl RodioOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioOutput for RodioOutput {
    fn start(&mut self, source: AudioSource) -> Result<()> {
        self.stop();
        let (stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        match source {
            AudioSource::Clip(bytes) => {
                let decoder = Decoder::new(Cursor::new(bytes)).context("Decoding recitation")?;
                sink.append(decoder);
            }
            AudioSource::Stream(slot) => {
                let reader = slot
                    .lock()
                    .map_err(|_| anyhow!("Stream slot poisoned"))?
                    .take()
                    .ok_or_else(|| anyhow!("Stream already consumed"))?;
                if reader.is_ogg() {
                    sink.append(Decoder::new_vorbis(reader).context("Decoding Ogg stream")?);
                } else {
                    sink.append(Decoder::new_mp3(reader).context("Decoding MP3 stream")?);
                }
            }
        }
        sink.play();
        debug!("Started audio output");
        self.playback = Some(RodioPlayback {
            _stream: stream,
            sink,
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(playback) = &self.playback {
            debug!("Pausing playback");
            playback.sink.pause();
        }
    }

    fn resume(&mut self) -> Result<()> {
        match &self.playback {
            Some(playback) if !playback.sink.empty() => {
                debug!("Resuming playback");
                playback.sink.play();
                Ok(())
            }
            _ => Err(anyhow!("Nothing loaded to resume")),
        }
    }

    fn stop(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.sink.stop();
        }
    }

    fn is_finished(&self) -> bool {
        self.playback
            .as_ref()
            .map(|playback| playback.sink.empty())
            .unwrap_or(false)
    }
}

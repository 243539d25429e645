//! Sound output: a looping background track and a one-shot alert.
//!
//! Sounds are synthesized into sample buffers at startup. The rodio backend is
//! behind the `audio` feature; without it, or when no output device opens,
//! the game runs with [`SilentAudio`].

use std::f32::consts::TAU;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    DeviceUnavailable(String),
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
}

/// The two audio channels the game drives.
pub trait AudioOutput {
    /// Start or resume the background loop.
    fn play_music(&mut self) -> Result<(), AudioError>;
    fn pause_music(&mut self);
    /// Play the alert from the beginning, cutting off any alert still playing.
    fn play_alert(&mut self) -> Result<(), AudioError>;
}

/// Backend used when sound is muted or unavailable.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioOutput for SilentAudio {
    fn play_music(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause_music(&mut self) {}

    fn play_alert(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Pick the best available backend. Failures fall back to silence.
pub fn open_audio(muted: bool, volume: f32) -> Box<dyn AudioOutput> {
    if muted {
        log::info!("audio muted");
        return Box::new(SilentAudio);
    }

    #[cfg(feature = "audio")]
    {
        match rodio_backend::RodioAudio::new(volume) {
            Ok(audio) => return Box::new(audio),
            Err(e) => log::warn!("audio disabled: {}", e),
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        let _ = volume;
        log::info!("built without the audio feature; running silent");
    }

    Box::new(SilentAudio)
}

// ── Synthesis ────────────────────────────────────────────────────────

/// A screeching bird call: a falling chirp with vibrato, about a third of a second.
pub fn alert_samples(sample_rate: u32) -> Vec<f32> {
    const DURATION: f32 = 0.35;
    let total = (sample_rate as f32 * DURATION) as usize;
    let mut phase = 0.0f32;
    let mut samples = Vec::with_capacity(total);

    for i in 0..total {
        let t = i as f32 / sample_rate as f32;
        let progress = t / DURATION;
        let vibrato = (TAU * 28.0 * t).sin() * 120.0;
        let freq = 2200.0 - 1300.0 * progress + vibrato;
        phase += TAU * freq / sample_rate as f32;

        let attack = (t / 0.02).min(1.0);
        let release = (1.0 - progress).powf(1.5);
        let tone = phase.sin() * 0.7 + (phase * 2.0).sin() * 0.2;
        samples.push(tone * attack * release * 0.6);
    }
    samples
}

/// A short plucked bass line, seamless when repeated.
pub fn music_samples(sample_rate: u32) -> Vec<f32> {
    // A minor walk, eighth notes at 120 bpm
    const NOTES: [f32; 8] = [110.0, 130.81, 164.81, 130.81, 98.0, 123.47, 146.83, 123.47];
    const NOTE_SECONDS: f32 = 0.25;

    let per_note = (sample_rate as f32 * NOTE_SECONDS) as usize;
    let mut samples = Vec::with_capacity(per_note * NOTES.len());

    for freq in NOTES {
        for i in 0..per_note {
            let t = i as f32 / sample_rate as f32;
            let envelope = (-t * 9.0).exp() * (1.0 - i as f32 / per_note as f32);
            let tone = (TAU * freq * t).sin() * 0.6 + (TAU * freq * 2.0 * t).sin() * 0.25;
            samples.push(tone * envelope * 0.5);
        }
    }
    samples
}

#[cfg(feature = "audio")]
mod rodio_backend {
    use super::{alert_samples, music_samples, AudioError, AudioOutput};
    use crate::constants::SAMPLE_RATE;
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, Sink, Source};

    pub struct RodioAudio {
        _stream: OutputStream,
        music: Sink,
        alert: Sink,
        alert_clip: Vec<f32>,
    }

    impl RodioAudio {
        pub fn new(volume: f32) -> Result<Self, AudioError> {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| AudioError::DeviceUnavailable(e.to_string()))?;

            let music =
                Sink::try_new(&handle).map_err(|e| AudioError::PlaybackRejected(e.to_string()))?;
            music.pause();
            music.set_volume(volume);
            music.append(
                SamplesBuffer::new(1, SAMPLE_RATE, music_samples(SAMPLE_RATE)).repeat_infinite(),
            );

            let alert =
                Sink::try_new(&handle).map_err(|e| AudioError::PlaybackRejected(e.to_string()))?;

            log::info!("audio output opened");
            Ok(Self {
                _stream: stream,
                music,
                alert,
                alert_clip: alert_samples(SAMPLE_RATE),
            })
        }
    }

    impl AudioOutput for RodioAudio {
        fn play_music(&mut self) -> Result<(), AudioError> {
            self.music.play();
            Ok(())
        }

        fn pause_music(&mut self) {
            self.music.pause();
        }

        fn play_alert(&mut self) -> Result<(), AudioError> {
            // clear() also pauses the sink
            self.alert.clear();
            self.alert
                .append(SamplesBuffer::new(1, SAMPLE_RATE, self.alert_clip.clone()));
            self.alert.play();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_RATE;

    #[test]
    fn test_silent_backend_never_fails() {
        let mut audio = SilentAudio;
        assert!(audio.play_music().is_ok());
        audio.pause_music();
        assert!(audio.play_alert().is_ok());
    }

    #[test]
    fn test_alert_samples_in_range() {
        let samples = alert_samples(SAMPLE_RATE);
        assert_eq!(samples.len(), (SAMPLE_RATE as f32 * 0.35) as usize);
        assert!(samples.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
        assert!(samples.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn test_music_loop_length() {
        let samples = music_samples(SAMPLE_RATE);
        // 8 notes of a quarter second each
        assert_eq!(samples.len(), (SAMPLE_RATE as f32 * 0.25) as usize * 8);
        assert!(samples.iter().all(|s| s.abs() <= 1.0));
        // Each note decays to silence so the loop point does not click
        assert!(samples.last().copied().unwrap_or(1.0).abs() < 0.01);
    }

    #[test]
    fn test_muted_open_is_silent() {
        let mut audio = open_audio(true, 0.5);
        assert!(audio.play_alert().is_ok());
    }
}

//! Background music.
//!
//! One track of a fixed list is picked at random and played once at a fixed
//! volume. Playback is independent of the visuals: if it cannot start, the
//! caller logs the [`AudioError`] and the starfield runs silent.
//!
//! Playback needs the `audio` cargo feature (rodio). Without it,
//! [`BackgroundAudio::start`] reports [`AudioError::Disabled`].

use crate::config::AudioConfig;
use crate::error::AudioError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Pick one track uniformly at random.
pub fn pick_track<'a, R: Rng>(tracks: &'a [PathBuf], rng: &mut R) -> Option<&'a Path> {
    tracks.choose(rng).map(PathBuf::as_path)
}

/// A playing background track. Dropping it stops playback.
pub struct BackgroundAudio {
    #[cfg(feature = "audio")]
    _stream: rodio::OutputStream,
    #[cfg(feature = "audio")]
    _sink: rodio::Sink,
    track: PathBuf,
}

impl BackgroundAudio {
    /// Pick a track and start playing it.
    pub fn start<R: Rng>(config: &AudioConfig, rng: &mut R) -> Result<Self, AudioError> {
        if !config.enabled {
            return Err(AudioError::Disabled);
        }
        let track = pick_track(&config.tracks, rng).ok_or(AudioError::NoTracks)?;
        Self::play(track.to_path_buf(), config.volume)
    }

    #[cfg(feature = "audio")]
    fn play(track: PathBuf, volume: f32) -> Result<Self, AudioError> {
        use std::fs::File;
        use std::io::BufReader;

        let file = File::open(&track).map_err(|source| AudioError::Open {
            path: track.clone(),
            source,
        })?;
        let source = rodio::Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: track.clone(),
            source,
        })?;

        let stream = rodio::OutputStreamBuilder::open_default_stream()?;
        let sink = rodio::Sink::connect_new(stream.mixer());
        sink.set_volume(volume);
        sink.append(source);

        Ok(Self {
            _stream: stream,
            _sink: sink,
            track,
        })
    }

    #[cfg(not(feature = "audio"))]
    fn play(_track: PathBuf, _volume: f32) -> Result<Self, AudioError> {
        Err(AudioError::Disabled)
    }

    /// The track being played.
    pub fn track(&self) -> &Path {
        &self.track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_track_covers_all() {
        let tracks = AudioConfig::default().tracks;
        let mut rng = SmallRng::seed_from_u64(4);
        let mut counts = [0u32; 3];

        for _ in 0..3000 {
            let picked = pick_track(&tracks, &mut rng).unwrap();
            let index = tracks.iter().position(|t| t == picked).unwrap();
            counts[index] += 1;
        }
        for count in counts {
            assert!(count > 800 && count < 1200, "unbalanced pick: {counts:?}");
        }
    }

    #[test]
    fn test_pick_track_unseeded_varies() {
        let tracks = AudioConfig::default().tracks;
        let mut rng = rand::thread_rng();
        let first = pick_track(&tracks, &mut rng).unwrap();

        let differs = (0..200).any(|_| pick_track(&tracks, &mut rng).unwrap() != first);
        assert!(differs);
    }

    #[test]
    fn test_pick_track_empty() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(pick_track(&[], &mut rng).is_none());
    }

    #[test]
    fn test_start_disabled() {
        let config = AudioConfig {
            enabled: false,
            ..AudioConfig::default()
        };
        let result = BackgroundAudio::start(&config, &mut SmallRng::seed_from_u64(0));
        assert!(matches!(result, Err(AudioError::Disabled)));
    }

    #[test]
    fn test_start_without_tracks() {
        let config = AudioConfig {
            tracks: Vec::new(),
            ..AudioConfig::default()
        };
        let result = BackgroundAudio::start(&config, &mut SmallRng::seed_from_u64(0));
        assert!(matches!(result, Err(AudioError::NoTracks)));
    }

    #[test]
    fn test_start_missing_file_fails_softly() {
        let config = AudioConfig {
            tracks: vec![PathBuf::from("does/not/exist.mp3")],
            ..AudioConfig::default()
        };
        assert!(BackgroundAudio::start(&config, &mut SmallRng::seed_from_u64(0)).is_err());
    }
}

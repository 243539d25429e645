//! Maps [`GameEvent`]s to audio cues and log lines.
//!
//! The game logic stays pure; this is the only place its events meet the
//! outside world. Audio failures are logged and otherwise ignored.

use crate::audio::AudioOutput;
use crate::game::GameEvent;

pub struct EventBridge {
    audio: Box<dyn AudioOutput>,
    best_score: u32,
}

impl EventBridge {
    pub fn new(audio: Box<dyn AudioOutput>) -> Self {
        Self {
            audio,
            best_score: 0,
        }
    }

    /// Highest score reached this session.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Started => {
                    log::info!("round started");
                    self.start_music();
                }
                GameEvent::Restarted => {
                    log::info!("round restarted");
                    self.start_music();
                }
                GameEvent::Resumed => {
                    log::debug!("resumed");
                    self.start_music();
                }
                GameEvent::Paused => {
                    log::debug!("paused");
                    self.audio.pause_music();
                }
                GameEvent::NearMiss { wire } => {
                    log::debug!("near miss on wire {}", wire);
                    if let Err(e) = self.audio.play_alert() {
                        log::warn!("alert sound failed: {}", e);
                    }
                }
                GameEvent::BugMoved { wire } => log::trace!("bug moved to wire {}", wire),
                GameEvent::BirdSpawned { wire } => log::trace!("bird spawned on wire {}", wire),
                GameEvent::Scored { score } => log::debug!("score {}", score),
                GameEvent::SpeedUp { speed } => log::info!("birds now fall at {:.2}", speed),
                GameEvent::GameOver { score } => {
                    self.audio.pause_music();
                    if *score > self.best_score {
                        self.best_score = *score;
                    }
                    log::info!("game over with score {} (best {})", score, self.best_score);
                }
            }
        }
    }

    fn start_music(&mut self) {
        if let Err(e) = self.audio.play_music() {
            log::warn!("background music failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        music_plays: u32,
        music_pauses: u32,
        alerts: u32,
    }

    /// Records calls; optionally rejects every playback.
    struct RecordingAudio {
        calls: Rc<RefCell<Calls>>,
        fail: bool,
    }

    impl AudioOutput for RecordingAudio {
        fn play_music(&mut self) -> Result<(), AudioError> {
            self.calls.borrow_mut().music_plays += 1;
            if self.fail {
                return Err(AudioError::PlaybackRejected("denied".into()));
            }
            Ok(())
        }

        fn pause_music(&mut self) {
            self.calls.borrow_mut().music_pauses += 1;
        }

        fn play_alert(&mut self) -> Result<(), AudioError> {
            self.calls.borrow_mut().alerts += 1;
            if self.fail {
                return Err(AudioError::PlaybackRejected("denied".into()));
            }
            Ok(())
        }
    }

    fn bridge(fail: bool) -> (EventBridge, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let audio = RecordingAudio {
            calls: Rc::clone(&calls),
            fail,
        };
        (EventBridge::new(Box::new(audio)), calls)
    }

    #[test]
    fn test_music_follows_pause_state() {
        let (mut bridge, calls) = bridge(false);
        bridge.apply(&[GameEvent::Started, GameEvent::Paused, GameEvent::Resumed]);
        assert_eq!(calls.borrow().music_plays, 2);
        assert_eq!(calls.borrow().music_pauses, 1);
    }

    #[test]
    fn test_near_miss_plays_alert_each_time() {
        let (mut bridge, calls) = bridge(false);
        bridge.apply(&[
            GameEvent::NearMiss { wire: 1 },
            GameEvent::NearMiss { wire: 2 },
        ]);
        assert_eq!(calls.borrow().alerts, 2);
    }

    #[test]
    fn test_game_over_stops_music_and_tracks_best() {
        let (mut bridge, calls) = bridge(false);
        bridge.apply(&[GameEvent::GameOver { score: 12 }]);
        bridge.apply(&[GameEvent::Restarted, GameEvent::GameOver { score: 4 }]);
        assert_eq!(bridge.best_score(), 12);
        assert_eq!(calls.borrow().music_pauses, 2);
    }

    #[test]
    fn test_audio_errors_are_not_fatal() {
        let (mut bridge, calls) = bridge(true);
        bridge.apply(&[
            GameEvent::Started,
            GameEvent::NearMiss { wire: 0 },
            GameEvent::GameOver { score: 3 },
        ]);
        assert_eq!(calls.borrow().music_plays, 1);
        assert_eq!(calls.borrow().alerts, 1);
        assert_eq!(bridge.best_score(), 3);
    }
}

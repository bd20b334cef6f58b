use super::{PlayState, PlayerEvent, VideoPlayer, SKIP_SECONDS};
use crate::catalog::Video;

// Buffered media advances at this multiple of real time.
const BUFFER_RATE: u64 = 4;

/// Simulated playback for standalone runs, standing in for a platform video
/// element. The run loop's tick advances the play head; the buffer fills
/// ahead of it at a fixed multiple of real time.
pub struct LocalPlayer {
    state: PlayState,
    loaded: bool,
    duration: u32,
    position_ms: u64,
    buffered_ms: u64,
    events: Vec<PlayerEvent>,
}

impl LocalPlayer {
    pub fn new() -> Self {
        Self {
            state: PlayState::Stopped,
            loaded: false,
            duration: 0,
            position_ms: 0,
            buffered_ms: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn position(&self) -> u32 {
        (self.position_ms / 1000) as u32
    }

    pub fn buffered(&self) -> u32 {
        (self.buffered_ms / 1000) as u32
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.events.push(event);
    }

    fn set_state(&mut self, state: PlayState) {
        if self.state != state {
            self.state = state;
            self.emit(PlayerEvent::StateChange(state));
        }
    }

    fn seek_to(&mut self, position: u32) {
        let clamped = position.min(self.duration);
        self.position_ms = u64::from(clamped) * 1000;
        self.emit(PlayerEvent::TimeUpdate(clamped));
    }
}

impl Default for LocalPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPlayer for LocalPlayer {
    fn load(&mut self, video: &Video, autoplay: bool) {
        self.duration = video.duration_secs;
        self.position_ms = 0;
        self.buffered_ms = 0;
        self.loaded = true;
        self.set_state(PlayState::Stopped);
        self.emit(PlayerEvent::DurationChange(video.duration_secs));
        self.emit(PlayerEvent::Loaded(video.duration_secs));
        if autoplay {
            self.set_state(PlayState::Playing);
        }
    }

    fn play_pause(&mut self) {
        // Nothing can play until media is loaded
        if !self.loaded {
            return;
        }
        match self.state {
            PlayState::Playing => self.set_state(PlayState::Paused),
            PlayState::Paused => self.set_state(PlayState::Playing),
            PlayState::Stopped => {
                if self.duration > 0 && self.position() >= self.duration {
                    // Replaying after the end starts over
                    self.seek_to(0);
                }
                self.set_state(PlayState::Playing);
            }
        }
    }

    fn rewind(&mut self) {
        if !self.loaded {
            return;
        }
        let target = self.position().saturating_sub(SKIP_SECONDS);
        self.seek_to(target);
    }

    fn fast_forward(&mut self) {
        if !self.loaded {
            return;
        }
        self.seek_to(self.position() + SKIP_SECONDS);
    }

    fn tick(&mut self, elapsed_ms: u64) {
        if !self.loaded {
            return;
        }
        let duration_ms = u64::from(self.duration) * 1000;
        if self.buffered_ms < duration_ms {
            let before = self.buffered();
            self.buffered_ms = (self.buffered_ms + elapsed_ms * BUFFER_RATE).min(duration_ms);
            let after = self.buffered();
            if after != before {
                self.emit(PlayerEvent::ProgressUpdate(after));
            }
        }
        if self.state == PlayState::Playing {
            let before = self.position();
            self.position_ms = (self.position_ms + elapsed_ms).min(duration_ms);
            if self.position() != before {
                self.emit(PlayerEvent::TimeUpdate(self.position()));
            }
            if self.position_ms >= duration_ms {
                // The media ran out, which the element reports as a stop
                self.set_state(PlayState::Stopped);
            }
        }
    }

    fn poll_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }
}

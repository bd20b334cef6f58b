pub mod local;
pub mod remote;

use std::fmt;

use crate::bridge::protocol::HostMessage;
use crate::catalog::Video;

pub use local::LocalPlayer;
pub use remote::RemotePlayer;

/// Seconds a single rewind or fast-forward jumps.
pub const SKIP_SECONDS: u32 = 10;

/// Playback state shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayState::Playing => write!(f, "Playing"),
            PlayState::Paused => write!(f, "Paused"),
            PlayState::Stopped => write!(f, "Stopped"),
        }
    }
}

/// What a backend reports back to the controls display. Times are whole
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    StateChange(PlayState),
    TimeUpdate(u32),
    DurationChange(u32),
    Loaded(u32),
    /// Seconds of media buffered from the start.
    ProgressUpdate(u32),
    /// Whole-media buffer percentage, from hosts that report percentages.
    BufferedPercent(u8),
}

/// A playback backend. Everything but loading and event draining defaults
/// to doing nothing, so a backend only overrides the controls it has.
pub trait VideoPlayer {
    fn load(&mut self, video: &Video, autoplay: bool);

    fn play_pause(&mut self) {}

    fn rewind(&mut self) {}

    fn fast_forward(&mut self) {}

    /// Advances backends that keep their own clock.
    fn tick(&mut self, _elapsed_ms: u64) {}

    /// Feeds host data to backends driven from outside.
    fn handle_host_message(&mut self, _message: &HostMessage) {}

    /// Drains the events accumulated since the last call.
    fn poll_events(&mut self) -> Vec<PlayerEvent>;
}

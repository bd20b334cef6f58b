use super::{PlayState, PlayerEvent, VideoPlayer, SKIP_SECONDS};
use crate::bridge::protocol::{HostCommand, HostMessage, HostPlayState};
use crate::bridge::CommandWriter;
use crate::catalog::Video;

/// Playback through the native host. Control calls leave as bridge
/// commands; position, duration, buffering and state come back as host
/// messages, so this backend never advances anything on its own.
pub struct RemotePlayer {
    writer: CommandWriter,
    state: PlayState,
    duration: u32,
    position: u32,
    events: Vec<PlayerEvent>,
}

impl RemotePlayer {
    pub fn new(writer: CommandWriter) -> Self {
        Self {
            writer,
            state: PlayState::Stopped,
            duration: 0,
            position: 0,
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
        self.position
    }
}

impl VideoPlayer for RemotePlayer {
    fn load(&mut self, video: &Video, autoplay: bool) {
        // The host announces the real duration once it has the media
        self.duration = 0;
        self.position = 0;
        self.state = PlayState::Stopped;
        self.writer.send(&HostCommand::LoadVideo {
            url: video.url.clone(),
            autoplay,
        });
    }

    fn play_pause(&mut self) {
        self.writer.send(&HostCommand::PlayPause);
    }

    fn rewind(&mut self) {
        self.writer.send(&HostCommand::Rewind {
            seconds: SKIP_SECONDS,
        });
    }

    fn fast_forward(&mut self) {
        self.writer.send(&HostCommand::FastForward {
            seconds: SKIP_SECONDS,
        });
    }

    fn handle_host_message(&mut self, message: &HostMessage) {
        match message {
            HostMessage::Duration(secs) => {
                self.duration = *secs;
                self.events.push(PlayerEvent::DurationChange(*secs));
            }
            HostMessage::CurrentPosition(secs) => {
                self.position = *secs;
                self.events.push(PlayerEvent::TimeUpdate(*secs));
            }
            HostMessage::BufferingPercent(percent) => {
                self.events.push(PlayerEvent::BufferedPercent(*percent));
            }
            HostMessage::PlayState(reported) => {
                let state = match reported {
                    HostPlayState::Playing => PlayState::Playing,
                    HostPlayState::Paused => PlayState::Paused,
                };
                if self.state != state {
                    self.state = state;
                    self.events.push(PlayerEvent::StateChange(state));
                }
            }
            // Key events are routed to the screens before players see them
            HostMessage::KeyEvent(_) => {}
        }
    }

    fn poll_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }
}

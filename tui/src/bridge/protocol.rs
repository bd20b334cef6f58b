// Wire protocol between the UI and a native playback host.
//
// Messages travel as URI-shaped lines: scheme prefix, action name, then
// semicolon-separated data with a trailing semicolon after each datum.
// Neither side validates the other's framing beyond this; anything that
// does not parse is dropped silently.

pub const URI_PREFIX: &str = "nativewebsample://";

const ACTION_KEY_EVENT: &str = "KEY_EVENT";
const DATA_DURATION: &str = "DATA_DURATION";
const DATA_CURRENT_POSITION: &str = "DATA_CURRENT_POSITION";
const DATA_BUFFERING_PERCENT: &str = "DATA_BUFFERING_PERCENT";
const DATA_PLAY_STATE: &str = "DATA_PLAY_STATE";

const ACTION_LOAD_VIDEO: &str = "ACTION_LOAD_VIDEO";
const ACTION_PLAY_PAUSE_VIDEO: &str = "ACTION_PLAY_PAUSE_VIDEO";
const ACTION_REWIND_VIDEO: &str = "ACTION_REWIND_VIDEO";
const ACTION_FASTFORWARD_VIDEO: &str = "ACTION_FASTFORWARD_VIDEO";

// Android d-pad keycodes as the host reports them
const KEYCODE_DPAD_UP: u32 = 19;
const KEYCODE_DPAD_DOWN: u32 = 20;
const KEYCODE_DPAD_LEFT: u32 = 21;
const KEYCODE_DPAD_RIGHT: u32 = 22;
const KEYCODE_DPAD_CENTER: u32 = 23;

/// A d-pad key forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKey {
    Up,
    Down,
    Left,
    Right,
    Center,
}

/// Playback state as the host reports it. The host only ever distinguishes
/// playing from not playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlayState {
    Playing,
    Paused,
}

/// A parsed message from the host. Durations and positions arrive in whole
/// seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMessage {
    KeyEvent(RemoteKey),
    Duration(u32),
    CurrentPosition(u32),
    BufferingPercent(u8),
    PlayState(HostPlayState),
}

/// Parses one line from the host. Returns `None` for anything that is not a
/// well-formed message: wrong scheme, unknown action, unregistered keycode
/// or a datum that does not parse as its expected type.
pub fn parse_host_message(line: &str) -> Option<HostMessage> {
    let content = line.trim().strip_prefix(URI_PREFIX)?;
    let mut parts = content.split(';');
    let action = parts.next()?;
    match action {
        ACTION_KEY_EVENT => {
            let code: u32 = parts.next()?.parse().ok()?;
            let key = match code {
                KEYCODE_DPAD_UP => RemoteKey::Up,
                KEYCODE_DPAD_DOWN => RemoteKey::Down,
                KEYCODE_DPAD_LEFT => RemoteKey::Left,
                KEYCODE_DPAD_RIGHT => RemoteKey::Right,
                KEYCODE_DPAD_CENTER => RemoteKey::Center,
                _ => return None,
            };
            Some(HostMessage::KeyEvent(key))
        }
        DATA_DURATION => Some(HostMessage::Duration(parts.next()?.parse().ok()?)),
        DATA_CURRENT_POSITION => Some(HostMessage::CurrentPosition(parts.next()?.parse().ok()?)),
        DATA_BUFFERING_PERCENT => Some(HostMessage::BufferingPercent(parts.next()?.parse().ok()?)),
        DATA_PLAY_STATE => {
            let state = if parts.next()?.eq_ignore_ascii_case("playing") {
                HostPlayState::Playing
            } else {
                HostPlayState::Paused
            };
            Some(HostMessage::PlayState(state))
        }
        _ => None,
    }
}

/// A command for the native playback host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    LoadVideo { url: String, autoplay: bool },
    PlayPause,
    Rewind { seconds: u32 },
    FastForward { seconds: u32 },
}

impl HostCommand {
    /// Renders the command in the host's URI form. The autoplay flag is
    /// appended as a `true` datum or left out entirely.
    pub fn to_uri(&self) -> String {
        match self {
            HostCommand::LoadVideo { url, autoplay } => {
                if *autoplay {
                    format!("{}{};{};true;", URI_PREFIX, ACTION_LOAD_VIDEO, url)
                } else {
                    format!("{}{};{}", URI_PREFIX, ACTION_LOAD_VIDEO, url)
                }
            }
            HostCommand::PlayPause => format!("{}{};", URI_PREFIX, ACTION_PLAY_PAUSE_VIDEO),
            HostCommand::Rewind { seconds } => {
                format!("{}{};{};", URI_PREFIX, ACTION_REWIND_VIDEO, seconds)
            }
            HostCommand::FastForward { seconds } => {
                format!("{}{};{};", URI_PREFIX, ACTION_FASTFORWARD_VIDEO, seconds)
            }
        }
    }
}

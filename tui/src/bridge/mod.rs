// Transport for embedded mode. The native host owns the input device and
// the video surface; this side reads host messages line by line from stdin
// and writes commands as lines on stderr, leaving stdout to the terminal.

pub mod protocol;

use std::io::Write;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::error::{TuiError, TuiResult};
use protocol::{parse_host_message, HostCommand, HostMessage};

/// Receiving half of the bridge: a reader thread parses stdin lines into
/// host messages and hands them over on a channel.
pub struct HostBridge {
    receiver: Receiver<HostMessage>,
}

impl HostBridge {
    /// Spawns the stdin reader thread.
    pub fn connect() -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || read_host_lines(sender));
        Self { receiver }
    }

    /// Waits up to `timeout` for the next host message. `Ok(None)` means the
    /// timeout elapsed quietly; an error means the host closed its end.
    pub fn poll(&self, timeout: Duration) -> TuiResult<Option<HostMessage>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(message) => Ok(Some(message)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(TuiError::bridge("host closed the connection"))
            }
        }
    }
}

fn read_host_lines(sender: Sender<HostMessage>) {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        match parse_host_message(&line) {
            Some(message) => {
                if sender.send(message).is_err() {
                    break;
                }
            }
            None => log::debug!("ignoring unrecognized host line: {}", line.trim()),
        }
    }
    // Dropping the sender disconnects the channel, which quits the app.
}

/// Sending half of the bridge. One URI per line, flushed immediately so the
/// host never waits on buffering.
pub struct CommandWriter {
    out: Box<dyn Write + Send>,
}

impl CommandWriter {
    pub fn to_stderr() -> Self {
        Self {
            out: Box::new(std::io::stderr()),
        }
    }

    /// Builds a writer over any sink; tests pass a shared buffer here.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    /// Fire-and-forget, like the host interface it mirrors: a failed write
    /// is logged and playback carries on.
    pub fn send(&mut self, command: &HostCommand) {
        let uri = command.to_uri();
        log::debug!("host command: {}", uri);
        let result = writeln!(self.out, "{}", uri).and_then(|_| self.out.flush());
        if let Err(err) = result {
            log::error!("failed to write host command: {}", err);
        }
    }
}

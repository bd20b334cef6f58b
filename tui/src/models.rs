use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    prelude::Stylize,
    text::Line,
    widgets::{Tabs, Widget},
};
use strum::IntoEnumIterator;

use crate::bridge::protocol::{HostMessage, RemoteKey};
use crate::bridge::{CommandWriter, HostBridge};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::players::{LocalPlayer, RemotePlayer, VideoPlayer};
use crate::screens::browse::models::{BrowseState, BrowseTarget};
use crate::screens::player::models::{ControlAction, PlayerScreenState};
use crate::screens::{Screen, ScreenCommand, ScreenFocus};

// Timeout for key sequences (like Vim's timeoutlen)
const KEY_SEQUENCE_TIMEOUT_MS: u64 = 1000; // 1 second

#[derive(Default)]
pub struct App {
    pub state: AppState,
    pub screen: Screen,
    pub config: Config,
    pub catalog: Catalog,
    pub input_state: InputState,
    pub embedded: bool,
    pub debug_mode: bool,
    pub debug_info: Vec<String>,
    pub bridge: Option<HostBridge>,

    // Screen states
    pub browse_state: BrowseState,
    pub player_state: Option<PlayerScreenState>,
}

#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Normal,
    KeySequence(String, std::time::Instant), // Stores the current key sequence and when it started
}

impl App {
    pub fn new(embedded: bool) -> Self {
        let config = Config::load_or_default();
        let catalog = Catalog::load_or_default();
        let bridge = embedded.then(HostBridge::connect);

        Self {
            config,
            catalog,
            embedded,
            bridge,
            ..Default::default()
        }
    }

    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    pub fn toggle_debug(&mut self) {
        self.debug_mode = !self.debug_mode;
        if self.debug_mode {
            self.add_debug("Debug mode enabled");
        } else {
            self.debug_info.clear();
        }
    }

    pub fn add_debug(&mut self, message: &str) {
        if self.debug_mode {
            self.debug_info.push(format!(
                "[{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                message
            ));
            // Keep only last 10 debug messages
            if self.debug_info.len() > 10 {
                self.debug_info.remove(0);
            }
        }
    }

    /// Leaves the player for the library, or quits when already there. The
    /// library keeps its focus and scroll position across a player visit.
    pub fn go_back(&mut self) {
        match self.screen {
            Screen::Player => {
                self.player_state = None;
                self.screen = Screen::Browse;
                self.add_debug("Returned to the library");
            }
            Screen::Browse => self.quit(),
        }
    }

    /// Opens the player on one catalog entry. Silently stays on the library
    /// when the position does not exist.
    pub fn open_video(&mut self, category: usize, item: usize) {
        if self.catalog.video(category, item).is_none() {
            self.add_debug(&format!("No video at {}/{}", category, item));
            return;
        }
        let player: Box<dyn VideoPlayer> = if self.embedded {
            Box::new(RemotePlayer::new(CommandWriter::to_stderr()))
        } else {
            Box::new(LocalPlayer::new())
        };
        let mut player_state = PlayerScreenState::new(category, item, player);
        player_state.load_current(&self.catalog);
        self.player_state = Some(player_state);
        self.screen = Screen::Player;
        self.add_debug(&format!("Opened video {}/{}", category, item));
    }

    fn open_external(&mut self) {
        let url = match self.screen {
            Screen::Player => self
                .player_state
                .as_ref()
                .and_then(|player| self.catalog.video(player.category, player.item))
                .map(|video| video.url.clone()),
            Screen::Browse => match self.browse_state.navigator.focused() {
                Some(BrowseTarget::Tile(index)) => self
                    .catalog
                    .video(self.browse_state.selected_category, *index)
                    .map(|video| video.url.clone()),
                _ => None,
            },
        };
        let Some(url) = url else {
            self.add_debug("Nothing to open externally");
            return;
        };
        if let Err(e) = open::that(&url) {
            log::error!("failed to open {}: {}", url, e);
            self.add_debug(&format!("Failed to open: {}", e));
        } else {
            self.add_debug(&format!("Opened {}", url));
        }
    }

    fn control(&mut self, action: ControlAction) {
        if self.screen != Screen::Player {
            return;
        }
        if let Some(player) = &mut self.player_state {
            player.handle_control(action, &self.catalog);
        }
    }

    // Screen-specific focus management
    pub fn handle_screen_navigation(&mut self, key: KeyCode) -> bool {
        match self.screen {
            Screen::Browse => self.browse_state.handle_navigation(key),
            Screen::Player => self
                .player_state
                .as_mut()
                .map(|player| player.handle_navigation(key))
                .unwrap_or(false),
        }
    }

    pub fn get_current_focused_element(&self) -> String {
        match self.screen {
            Screen::Browse => self.browse_state.focused_element(),
            Screen::Player => self
                .player_state
                .as_ref()
                .map(|player| player.focused_element())
                .unwrap_or_else(|| "nothing".to_string()),
        }
    }

    fn activate_focused(&mut self) {
        let command = match self.screen {
            Screen::Browse => self.browse_state.activate(),
            Screen::Player => self
                .player_state
                .as_mut()
                .and_then(|player| player.activate()),
        };
        if let Some(command) = command {
            self.execute_screen_command(command);
        }
    }

    fn execute_screen_command(&mut self, command: ScreenCommand) {
        match command {
            ScreenCommand::ShowCategory(index) => {
                self.browse_state.change_category(index, &self.catalog);
                self.add_debug(&format!("Showing category {}", index));
            }
            ScreenCommand::OpenVideo { category, item } => self.open_video(category, item),
            ScreenCommand::Control(action) => self.control(action),
        }
    }

    /// Recomputes screen geometry for the current terminal size, so the
    /// focus registries match what is about to be drawn.
    pub fn sync_layout(&mut self, area: Rect) {
        let inner_area = if self.debug_mode {
            let vertical = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(12), // Debug panel
            ]);
            let [_, inner_area, _, _] = vertical.areas(area);
            inner_area
        } else {
            let vertical = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ]);
            let [_, inner_area, _] = vertical.areas(area);
            inner_area
        };
        let content = self.screen.block().inner(inner_area);
        match self.screen {
            Screen::Browse => self.browse_state.ensure_layout(content, &self.catalog),
            Screen::Player => {
                if let Some(player) = &mut self.player_state {
                    player.ensure_layout(content);
                }
            }
        }
    }

    /// Advances time-driven playback.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if let Some(player) = &mut self.player_state {
            player.tick(elapsed_ms);
        }
    }

    /// Feeds one message from the host surface into the app. D-pad presses
    /// go through the same key pipeline as terminal input, playback data
    /// goes to the player.
    pub fn handle_host_message(&mut self, message: &HostMessage) {
        match message {
            HostMessage::KeyEvent(key) => {
                let code = match key {
                    RemoteKey::Up => KeyCode::Up,
                    RemoteKey::Down => KeyCode::Down,
                    RemoteKey::Left => KeyCode::Left,
                    RemoteKey::Right => KeyCode::Right,
                    RemoteKey::Center => KeyCode::Enter,
                };
                self.handle_dynamic_key(code, KeyModifiers::empty());
            }
            _ => {
                if let Some(player) = &mut self.player_state {
                    player.handle_host_message(message);
                }
            }
        }
    }

    fn current_screen_name(&self) -> &'static str {
        match self.screen {
            Screen::Browse => "browse",
            Screen::Player => "player",
        }
    }

    pub fn handle_dynamic_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Convert key to string for config lookup
        let key_str = match key {
            KeyCode::Char(c) => {
                // Check for Ctrl combinations
                if c.is_ascii_control() {
                    let ctrl_char = (c as u8 + 96) as char; // Convert control char to letter
                    format!("<Ctrl>{}", ctrl_char)
                } else {
                    c.to_string()
                }
            }
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Enter => "<Enter>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Backspace => "<Backspace>".to_string(),
            KeyCode::Tab => {
                // Check for Shift+Tab
                if modifiers.contains(KeyModifiers::SHIFT) {
                    "<S-Tab>".to_string()
                } else {
                    "<Tab>".to_string()
                }
            }
            KeyCode::BackTab => "<S-Tab>".to_string(),
            _ => return,
        };

        let current_screen = self.current_screen_name();
        self.add_debug(&format!("Key: {} -> screen: {}", key_str, current_screen));

        // Spatial focus layer: arrows move the focus, Enter commits it.
        // These are fixed so the d-pad works the same everywhere.
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if self.handle_screen_navigation(key) {
                    let focused = self.get_current_focused_element();
                    self.add_debug(&format!("Focus moved to {}", focused));
                }
                return;
            }
            KeyCode::Enter => {
                self.activate_focused();
                return;
            }
            // Tab never moves focus; the spatial navigator owns focus order
            KeyCode::Tab | KeyCode::BackTab => return,
            _ => {}
        }

        // Handle leader key sequences first
        if key_str == self.config.leader {
            self.input_state =
                InputState::KeySequence("<leader>".to_string(), std::time::Instant::now());
            self.add_debug(&format!("Leader key ('{}') pressed", key_str));
            return;
        }

        // Handle multi-key sequences (like <leader>d)
        if let InputState::KeySequence(ref seq, start_time) = self.input_state {
            // Check if the sequence has timed out
            if start_time.elapsed().as_millis() > KEY_SEQUENCE_TIMEOUT_MS as u128 {
                // Timeout reached, execute the single key if it exists
                if let Some(action) = self.config.get_action_for_key(seq) {
                    if self.config.is_key_valid_for_screen(seq, current_screen) {
                        self.execute_action(&action);
                    }
                }
                self.input_state = InputState::Normal;
                return;
            }

            if seq == "<leader>" {
                let leader_key = format!("<leader>{}", key_str);
                if let Some(action) = self.config.get_action_for_key(&leader_key) {
                    if self.config.is_key_valid_for_screen(&leader_key, current_screen) {
                        self.execute_action(&action);
                    }
                }
                self.input_state = InputState::Normal;
                return;
            } else {
                // Try to complete the sequence with the current key
                let complete_key = format!("{}{}", seq, key_str);
                if let Some(action) = self.config.get_action_for_key(&complete_key) {
                    if self.config.is_key_valid_for_screen(&complete_key, current_screen) {
                        self.execute_action(&action);
                    }
                }
                self.input_state = InputState::Normal;
                return;
            }
        }

        // Check if this key could start a multi-key sequence
        // Look for any keybinding that starts with this key
        // Skip special keys that are complete by themselves (like <Up>, <Esc>)
        // but allow multi-key special keys (like <Ctrl>c)
        let potential_sequences: Vec<String> = self
            .config
            .actions
            .values()
            .flat_map(|action| &action.keys)
            .filter(|k| {
                k.starts_with(&key_str)
                    && k.len() > 1
                    && !(k.starts_with('<') && k.ends_with('>') && !k[1..k.len() - 1].contains('<'))
            })
            .cloned()
            .collect();

        if !potential_sequences.is_empty() {
            self.input_state = InputState::KeySequence(key_str.clone(), std::time::Instant::now());
            self.add_debug(&format!(
                "Started '{}' sequence, potential: {:?}",
                key_str, potential_sequences
            ));
            return;
        }

        // Check if key is valid for current screen and process it
        if let Some(action) = self.config.get_action_for_key(&key_str) {
            if self.config.is_key_valid_for_screen(&key_str, current_screen) {
                self.execute_action(&action);
            } else {
                self.add_debug(&format!(
                    "Key '{}' not valid for screen '{}'",
                    key_str, current_screen
                ));
            }
        } else {
            self.add_debug(&format!("No keybinding found for key '{}'", key_str));
        }
    }

    fn execute_action(&mut self, action: &str) {
        match action {
            "Quit" => self.quit(),
            "Back" => self.go_back(),
            "Toggle Debug" => self.toggle_debug(),
            "Open Externally" => self.open_external(),
            "Play/Pause" => self.control(ControlAction::Play),
            "Rewind" => self.control(ControlAction::Rewind),
            "Fast Forward" => self.control(ControlAction::FastForward),
            "Previous Video" => self.control(ControlAction::Previous),
            "Next Video" => self.control(ControlAction::Next),
            "Navigate Left" => {
                self.handle_screen_navigation(KeyCode::Left);
            }
            "Navigate Down" => {
                self.handle_screen_navigation(KeyCode::Down);
            }
            "Navigate Up" => {
                self.handle_screen_navigation(KeyCode::Up);
            }
            "Navigate Right" => {
                self.handle_screen_navigation(KeyCode::Right);
            }
            _ => {
                self.add_debug(&format!("Unknown action: {}", action));
            }
        }
    }

    /// Check if any pending key sequences have timed out and execute them
    pub fn check_timeouts(&mut self) {
        if let InputState::KeySequence(ref seq, start_time) = self.input_state {
            if start_time.elapsed().as_millis() > KEY_SEQUENCE_TIMEOUT_MS as u128 {
                // Timeout reached, execute the single key if it exists
                if let Some(action) = self.config.get_action_for_key(seq) {
                    if self
                        .config
                        .is_key_valid_for_screen(seq, self.current_screen_name())
                    {
                        self.execute_action(&action);
                    }
                }
                self.input_state = InputState::Normal;
            }
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.debug_mode {
            // Debug mode: show debug panel
            let vertical = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(12), // Debug panel
            ]);
            let [header_area, inner_area, footer_area, debug_area] = vertical.areas(area);

            let horizontal = Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]);
            let [tabs_area, title_area] = horizontal.areas(header_area);

            render_title(title_area, buf);
            self.render_screen_tabs(tabs_area, buf);
            self.screen.render_screen(self, inner_area, buf);
            self.render_footer(footer_area, buf);
            self.render_debug_panel(debug_area, buf);
        } else {
            // Normal mode
            let vertical = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ]);
            let [header_area, inner_area, footer_area] = vertical.areas(area);

            let horizontal = Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]);
            let [tabs_area, title_area] = horizontal.areas(header_area);

            render_title(title_area, buf);
            self.render_screen_tabs(tabs_area, buf);
            self.screen.render_screen(self, inner_area, buf);
            self.render_footer(footer_area, buf);
        }
    }
}

impl App {
    pub fn render_screen_tabs(&self, area: Rect, buf: &mut Buffer) {
        let titles = Screen::iter().map(Screen::title);
        let highlight_style = (ratatui::style::Color::default(), self.screen.palette().c700);
        let selected_index = self.screen as usize;
        Tabs::new(titles)
            .highlight_style(highlight_style)
            .select(selected_index)
            .padding("", "")
            .divider(" ")
            .render(area, buf);
    }

    pub fn render_debug_panel(&self, area: Rect, buf: &mut Buffer) {
        use ratatui::style::{Color, Style};
        use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

        let log_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(3), // Leave space for header
        };

        let header_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(3),
            width: area.width,
            height: 3,
        };

        // Render header with log count
        let header_text = format!("TUI Debug ({} messages)", self.debug_info.len());
        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL).title("Debug Panel"))
            .style(Style::default().fg(Color::Cyan));
        header.render(header_area, buf);

        let mut all_items = Vec::new();
        for info in &self.debug_info {
            all_items.push(
                ListItem::new(format!("[TUI] {}", info)).style(Style::default().fg(Color::Magenta)),
            );
        }

        let list = List::new(all_items).block(Block::default().borders(Borders::ALL).title("Logs"));

        ratatui::widgets::Widget::render(list, log_area, buf);
    }
}

pub fn render_title(area: Rect, buf: &mut Buffer) {
    let title = if crate::utils::paths::is_dev_mode() {
        "Zapper (dev)"
    } else {
        "Zapper"
    };
    title.bold().render(area, buf);
}

impl App {
    pub fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let footer_text = match self.screen {
            Screen::Browse => {
                "arrows or h/j/k/l to move focus | Enter to select | o to open externally | q to quit"
            }
            Screen::Player => {
                "arrows to pick a control | Enter to press | p play/pause | [ ] to seek | Esc to go back"
            }
        };
        Line::raw(footer_text).centered().render(area, buf);
    }
}

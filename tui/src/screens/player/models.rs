use ratatui::crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use zapper_nav::{Direction, FocusNavigator};

use crate::bridge::protocol::HostMessage;
use crate::catalog::Catalog;
use crate::players::{PlayState, PlayerEvent, VideoPlayer};
use crate::screens::focus::ScreenFocus;
use crate::screens::to_bounds;
use crate::screens::types::ScreenCommand;

pub const BUTTON_WIDTH: u16 = 12;
pub const BUTTON_GAP: u16 = 2;
pub const CONTROLS_HEIGHT: u16 = 3;

/// Transport buttons, declared in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
pub enum ControlAction {
    #[strum(to_string = "Prev")]
    Previous,
    #[strum(to_string = "Rewind")]
    Rewind,
    #[strum(to_string = "Play")]
    Play,
    #[strum(to_string = "FF")]
    FastForward,
    #[strum(to_string = "Next")]
    Next,
}

/// The player screen: one playback backend plus the mirrored values the
/// widgets draw from. Events from the backend are drained into the mirrors
/// every tick so rendering never has to ask the backend anything.
pub struct PlayerScreenState {
    pub navigator: FocusNavigator<ControlAction>,
    pub category: usize,
    pub item: usize,
    pub play_state: PlayState,
    pub duration: u32,
    pub elapsed: u32,
    pub loaded_percent: u8,
    player: Box<dyn VideoPlayer>,
    video_area: Rect,
    progress_area: Rect,
    buffer_area: Rect,
    controls_area: Rect,
    layout_area: Option<Rect>,
    initialized: bool,
}

impl PlayerScreenState {
    pub fn new(category: usize, item: usize, player: Box<dyn VideoPlayer>) -> Self {
        Self {
            navigator: FocusNavigator::new(),
            category,
            item,
            play_state: PlayState::Stopped,
            duration: 0,
            elapsed: 0,
            loaded_percent: 0,
            player,
            video_area: Rect::default(),
            progress_area: Rect::default(),
            buffer_area: Rect::default(),
            controls_area: Rect::default(),
            layout_area: None,
            initialized: false,
        }
    }

    /// Recomputes geometry and rebuilds the button registry when the
    /// available area changes. Focus is restored afterwards.
    pub fn ensure_layout(&mut self, area: Rect) {
        if self.layout_area == Some(area) {
            return;
        }
        let controls_y = area.bottom().saturating_sub(CONTROLS_HEIGHT).max(area.y);
        self.controls_area = Rect::new(area.x, controls_y, area.width, CONTROLS_HEIGHT);
        let buffer_y = controls_y.saturating_sub(1).max(area.y);
        self.buffer_area = Rect::new(area.x, buffer_y, area.width, 1);
        let progress_y = buffer_y.saturating_sub(1).max(area.y);
        self.progress_area = Rect::new(area.x, progress_y, area.width, 1);
        self.video_area = Rect::new(
            area.x,
            area.y,
            area.width,
            progress_y.saturating_sub(area.y),
        );
        self.layout_area = Some(area);

        let focused = self.navigator.focused().copied();
        self.navigator.clear();
        for (index, action) in ControlAction::iter().enumerate() {
            self.navigator
                .register(to_bounds(self.button_rect(index)), action);
        }
        match focused {
            Some(target) => {
                self.navigator.focus_target(&target);
            }
            None if !self.initialized => {
                self.navigator.focus_item(0);
                self.initialized = true;
            }
            None => {}
        }
    }

    /// Loads the video at the current category/item position, resetting the
    /// mirrored values first. Playback starts immediately.
    pub fn load_current(&mut self, catalog: &Catalog) {
        let Some(video) = catalog.video(self.category, self.item) else {
            log::debug!("no video at {}/{}", self.category, self.item);
            return;
        };
        self.reset();
        self.player.load(video, true);
        self.pump_events();
    }

    /// Moves to the adjacent video in the current category, wrapping at
    /// either end, and loads it.
    pub fn step_video(&mut self, forward: bool, catalog: &Catalog) {
        let count = catalog.videos(self.category).len();
        if count == 0 {
            return;
        }
        self.item = if forward {
            (self.item + 1) % count
        } else if self.item == 0 {
            count - 1
        } else {
            self.item - 1
        };
        self.load_current(catalog);
    }

    pub fn handle_control(&mut self, action: ControlAction, catalog: &Catalog) {
        match action {
            ControlAction::Previous => self.step_video(false, catalog),
            ControlAction::Rewind => self.player.rewind(),
            ControlAction::Play => self.player.play_pause(),
            ControlAction::FastForward => self.player.fast_forward(),
            ControlAction::Next => self.step_video(true, catalog),
        }
        self.pump_events();
    }

    /// Advances time-driven backends and drains whatever they produced.
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.player.tick(elapsed_ms);
        self.pump_events();
    }

    pub fn handle_host_message(&mut self, message: &HostMessage) {
        self.player.handle_host_message(message);
        self.pump_events();
    }

    /// Drains backend events into the mirrored display values.
    pub fn pump_events(&mut self) {
        for event in self.player.poll_events() {
            match event {
                PlayerEvent::StateChange(state) => self.play_state = state,
                PlayerEvent::TimeUpdate(seconds) => self.elapsed = seconds,
                PlayerEvent::DurationChange(seconds) | PlayerEvent::Loaded(seconds) => {
                    self.duration = seconds;
                }
                PlayerEvent::ProgressUpdate(seconds) => {
                    self.loaded_percent = percent_of(seconds, self.duration);
                }
                PlayerEvent::BufferedPercent(percent) => {
                    self.loaded_percent = percent.min(100);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.play_state = PlayState::Stopped;
        self.duration = 0;
        self.elapsed = 0;
        self.loaded_percent = 0;
    }

    pub fn progress_percent(&self) -> u8 {
        percent_of(self.elapsed, self.duration)
    }

    pub fn button_rect(&self, index: usize) -> Rect {
        let total = ControlAction::iter().count() as u16 * (BUTTON_WIDTH + BUTTON_GAP) - BUTTON_GAP;
        let start_x = self.controls_area.x + self.controls_area.width.saturating_sub(total) / 2;
        Rect::new(
            start_x + index as u16 * (BUTTON_WIDTH + BUTTON_GAP),
            self.controls_area.y,
            BUTTON_WIDTH.min(self.controls_area.width),
            CONTROLS_HEIGHT,
        )
    }

    pub fn video_area(&self) -> Rect {
        self.video_area
    }

    pub fn progress_area(&self) -> Rect {
        self.progress_area
    }

    pub fn buffer_area(&self) -> Rect {
        self.buffer_area
    }

    pub fn controls_area(&self) -> Rect {
        self.controls_area
    }
}

/// Whole-number percentage of `value` over `total`, rounded to nearest.
/// A zero total reads as nothing completed.
fn percent_of(value: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (value as u64 * 100 + total as u64 / 2) / total as u64;
    scaled.min(100) as u8
}

impl ScreenFocus for PlayerScreenState {
    fn focused_element(&self) -> String {
        match self.navigator.focused() {
            Some(action) => format!("{} button", action),
            None => "nothing".to_string(),
        }
    }

    fn handle_navigation(&mut self, key: KeyCode) -> bool {
        let direction = match key {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            _ => return false,
        };
        self.navigator.move_focus(direction).is_some()
    }

    fn activate(&mut self) -> Option<ScreenCommand> {
        self.navigator
            .focused()
            .copied()
            .map(ScreenCommand::Control)
    }

    fn has_focusable_elements(&self) -> bool {
        !self.navigator.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Video};
    use crate::players::LocalPlayer;

    fn clip(n: usize, duration_secs: u32) -> Video {
        Video {
            title: format!("Clip {}", n),
            description: "Test clip".to_string(),
            url: format!("http://example.com/{}.mp4", n),
            duration_secs,
        }
    }

    fn catalog_with_three() -> Catalog {
        Catalog {
            categories: vec![Category {
                name: "Test".to_string(),
                videos: vec![clip(0, 30), clip(1, 60), clip(2, 90)],
            }],
        }
    }

    fn state() -> PlayerScreenState {
        let mut state = PlayerScreenState::new(0, 0, Box::new(LocalPlayer::new()));
        state.ensure_layout(Rect::new(0, 1, 80, 20));
        state
    }

    #[test]
    fn test_buttons_register_in_declared_order() {
        let state = state();
        assert_eq!(state.navigator.len(), 5);
        assert_eq!(state.navigator.index_of(&ControlAction::Previous), Some(0));
        assert_eq!(state.navigator.index_of(&ControlAction::Next), Some(4));
    }

    #[test]
    fn test_initial_focus_is_first_button() {
        let state = state();
        assert_eq!(state.navigator.focused(), Some(&ControlAction::Previous));
    }

    #[test]
    fn test_right_walks_the_button_row() {
        let mut state = state();
        let expected = [
            ControlAction::Rewind,
            ControlAction::Play,
            ControlAction::FastForward,
            ControlAction::Next,
        ];
        for action in expected {
            assert!(state.handle_navigation(KeyCode::Right));
            assert_eq!(state.navigator.focused(), Some(&action));
        }
        // Nothing to the right of the last button
        assert!(!state.handle_navigation(KeyCode::Right));
        assert_eq!(state.navigator.focused(), Some(&ControlAction::Next));
    }

    #[test]
    fn test_activate_reports_the_focused_button() {
        let mut state = state();
        state.handle_navigation(KeyCode::Right);
        state.handle_navigation(KeyCode::Right);
        assert_eq!(
            state.activate(),
            Some(ScreenCommand::Control(ControlAction::Play))
        );
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let catalog = catalog_with_three();
        let mut state = state();
        state.handle_control(ControlAction::Next, &catalog);
        assert_eq!(state.item, 1);
        state.handle_control(ControlAction::Next, &catalog);
        state.handle_control(ControlAction::Next, &catalog);
        assert_eq!(state.item, 0);
        state.handle_control(ControlAction::Previous, &catalog);
        assert_eq!(state.item, 2);
    }

    #[test]
    fn test_load_current_mirrors_duration_and_plays() {
        let catalog = catalog_with_three();
        let mut state = state();
        state.load_current(&catalog);
        assert_eq!(state.duration, 30);
        assert_eq!(state.play_state, PlayState::Playing);
        assert_eq!(state.elapsed, 0);
    }

    #[test]
    fn test_step_resets_mirrors_before_the_new_video() {
        let catalog = catalog_with_three();
        let mut state = state();
        state.load_current(&catalog);
        state.tick(2000);
        assert_eq!(state.elapsed, 2);
        state.step_video(true, &catalog);
        assert_eq!(state.duration, 60);
        assert_eq!(state.elapsed, 0);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let mut state = state();
        state.duration = 3;
        state.elapsed = 1;
        assert_eq!(state.progress_percent(), 33);
        state.elapsed = 2;
        assert_eq!(state.progress_percent(), 67);
    }

    #[test]
    fn test_zero_duration_reads_as_zero_percent() {
        let mut state = state();
        state.elapsed = 10;
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_tick_advances_elapsed_while_playing() {
        let catalog = catalog_with_three();
        let mut state = state();
        state.load_current(&catalog);
        state.tick(500);
        state.tick(500);
        assert_eq!(state.elapsed, 1);
        assert_eq!(state.play_state, PlayState::Playing);
    }

    #[test]
    fn test_buffered_percent_caps_at_one_hundred() {
        let mut state = state();
        state.loaded_percent = 0;
        // Local backend buffers at a fixed multiple of real time
        let catalog = catalog_with_three();
        state.load_current(&catalog);
        state.tick(60_000);
        assert_eq!(state.loaded_percent, 100);
    }

    #[test]
    fn test_layout_splits_video_over_controls() {
        let state = state();
        let area = Rect::new(0, 1, 80, 20);
        assert_eq!(state.controls_area().height, CONTROLS_HEIGHT);
        assert_eq!(state.controls_area().bottom(), area.bottom());
        assert_eq!(state.buffer_area().height, 1);
        assert_eq!(state.progress_area().height, 1);
        assert_eq!(
            state.video_area().height,
            area.height - CONTROLS_HEIGHT - 2
        );
    }
}

use ratatui::{
    layout::Rect,
    prelude::Stylize,
    style::palette::tailwind,
    symbols,
    widgets::{Block, Padding},
};
use strum::{Display, EnumIter, FromRepr};

use crate::screens::player::models::ControlAction;

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, FromRepr)]
pub enum Screen {
    #[default]
    #[strum(to_string = "Browse")]
    Browse,
    #[strum(to_string = "Player")]
    Player,
}

impl Screen {
    /// A block surrounding the screen's content
    pub fn block(self) -> Block<'static> {
        Block::bordered()
            .border_set(symbols::border::PROPORTIONAL_TALL)
            .padding(Padding::horizontal(1))
            .border_style(self.palette().c700)
    }

    pub const fn palette(self) -> tailwind::Palette {
        match self {
            Self::Browse => tailwind::BLUE,
            Self::Player => tailwind::GREEN,
        }
    }

    /// Return the screen's name as a styled `Line`
    pub fn title(self) -> ratatui::text::Line<'static> {
        format!("  {self}  ")
            .fg(tailwind::SLATE.c200)
            .bg(self.palette().c900)
            .into()
    }
}

impl Screen {
    pub fn render_screen(
        self,
        app: &crate::models::App,
        area: Rect,
        buf: &mut ratatui::buffer::Buffer,
    ) {
        match self {
            Self::Browse => crate::screens::browse::ui::render_browse_screen(app, area, buf),
            Self::Player => crate::screens::player::ui::render_player_screen(app, area, buf),
        }
    }
}

/// What a screen wants done after its focused element is activated.
/// Activation hands back a value; screens never call up into the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    /// A menu row was committed: show that category's videos in the grid
    ShowCategory(usize),
    /// A grid tile was committed: open the player on that video
    OpenVideo { category: usize, item: usize },
    /// A transport button was committed
    Control(ControlAction),
}

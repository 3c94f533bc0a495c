//! Settings rows.
//!
//! Each row is an immutable value built right before drawing. The host
//! pairs it with an [`Environment`] through [`Styled`] and hands that to
//! ratatui like any other widget.

pub mod action;
pub mod info;
pub mod label;
pub mod links;

pub use action::ActionRow;
pub use info::InfoRow;
pub use label::LabelRow;
pub use links::{social_share_row, store_review_row};

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::a11y::Semantics;
use crate::style::{tracked, Environment, IconStyle, Interaction};

/// Letter spacing of row titles and captions, in points
pub const TITLE_TRACKING: f32 = 1.0;

/// Display strings shared by the icon rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowConfig {
    pub icon: String,
    pub title: String,
    pub accessibility_label: Option<String>,
}

impl RowConfig {
    pub fn new(icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            accessibility_label: None,
        }
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }
}

/// The contract every row fulfils
pub trait SettingsRow {
    /// Lines the row needs at the environment's scale
    fn height(&self, env: &Environment) -> u16;

    fn render(&self, area: Rect, buf: &mut Buffer, env: &Environment, interaction: Interaction);

    fn semantics(&self, env: &Environment) -> Semantics;

    fn is_interactive(&self) -> bool {
        false
    }

    fn handle_key(&self, _key: KeyEvent) -> bool {
        false
    }

    /// `area` is where the row was last drawn
    fn handle_mouse(&self, _mouse: MouseEvent, _area: Rect) -> bool {
        false
    }

    /// Run the row's action; returns whether anything was invoked
    fn activate(&self) -> bool {
        false
    }
}

/// A row bound to the environment it draws in
pub struct Styled<'a, R: ?Sized> {
    row: &'a R,
    env: &'a Environment,
    interaction: Interaction,
}

impl<'a, R: SettingsRow + ?Sized> Styled<'a, R> {
    pub fn new(row: &'a R, env: &'a Environment) -> Self {
        Self {
            row,
            env,
            interaction: Interaction::default(),
        }
    }

    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }
}

impl<R: SettingsRow + ?Sized> Widget for Styled<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.row.render(area, buf, self.env, self.interaction);
    }
}

/// Draw `[icon, title, gap, trailing]` on the first line of `content`
fn render_icon_line(
    config: &RowConfig,
    trailing: Span<'_>,
    content: Rect,
    buf: &mut Buffer,
    env: &Environment,
    dimmed: bool,
) {
    if content.width == 0 || content.height == 0 {
        return;
    }

    let glyph = env.icons.resolve(&config.icon);
    let icon_width = IconStyle::default().render(&glyph, content, buf, env);

    let trailing_width = u16::try_from(trailing.content.width())
        .unwrap_or(u16::MAX)
        .min(content.width.saturating_sub(icon_width));
    let trailing_x = content.right() - trailing_width;
    buf.set_span(trailing_x, content.y, &trailing, trailing_width);

    let title_x = content.x + icon_width;
    // Keep one column between the title and the trailing element
    let title_room = trailing_x.saturating_sub(title_x).saturating_sub(1);
    let title = tracked(&config.title, env.scale.tracking(TITLE_TRACKING));
    buf.set_stringn(
        title_x,
        content.y,
        title,
        usize::from(title_room),
        Style::default().fg(env.theme.text),
    );

    if dimmed {
        buf.set_style(
            Rect::new(content.x, content.y, content.width, 1),
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}

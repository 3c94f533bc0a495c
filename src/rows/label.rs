use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::{SettingsRow, TITLE_TRACKING};
use crate::a11y::{ElementKind, Grouping, Role, Semantics};
use crate::style::{tracked, Environment, Interaction};

/// Space above the caption, in points
pub const CAPTION_TOP_PADDING: f32 = 16.0;

/// Centred caption such as "MADE WITH ❤️", announced with its own phrasing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub title: String,
    pub accessibility_label: String,
}

impl LabelRow {
    pub fn new(title: impl Into<String>, accessibility_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            accessibility_label: accessibility_label.into(),
        }
    }

    pub fn display_text(&self) -> String {
        self.title.to_uppercase()
    }
}

impl SettingsRow for LabelRow {
    fn height(&self, env: &Environment) -> u16 {
        env.scale.rows(CAPTION_TOP_PADDING).saturating_add(1)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, env: &Environment, _interaction: Interaction) {
        let top = env.scale.rows(CAPTION_TOP_PADDING);
        if area.height <= top {
            return;
        }
        let line = Rect::new(area.x, area.y + top, area.width, 1);

        let text = tracked(&self.display_text(), env.scale.tracking(TITLE_TRACKING));
        Paragraph::new(text)
            .style(Style::default().fg(env.theme.text_dim))
            .alignment(Alignment::Center)
            .render(line, buf);
    }

    fn semantics(&self, _env: &Environment) -> Semantics {
        Semantics::new(Role::StaticText, Grouping::Separate)
            .element(ElementKind::Caption, self.display_text(), false)
            .label(Some(self.accessibility_label.clone()))
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Span,
};
use std::fmt;

use super::{render_icon_line, RowConfig, SettingsRow};
use crate::a11y::{ElementKind, Grouping, Role, Semantics};
use crate::style::{Environment, IconStyle, Interaction, RowBackground};

/// Identifier of the trailing disclosure glyph
pub const CHEVRON_ICON: &str = "chevron.right";

/// Tappable row: `[icon, title, gap, chevron]`
pub struct ActionRow {
    pub config: RowConfig,
    on_activate: Box<dyn Fn()>,
}

impl fmt::Debug for ActionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRow")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ActionRow {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        on_activate: impl Fn() + 'static,
    ) -> Self {
        Self::from_config(RowConfig::new(icon, title), on_activate)
    }

    pub fn from_config(config: RowConfig, on_activate: impl Fn() + 'static) -> Self {
        Self {
            config,
            on_activate: Box::new(on_activate),
        }
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.config = self.config.accessibility_label(label);
        self
    }
}

impl SettingsRow for ActionRow {
    fn height(&self, env: &Environment) -> u16 {
        RowBackground::default().height(1, &env.scale)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, env: &Environment, interaction: Interaction) {
        let content = RowBackground::default().render(area, buf, env);

        let chevron_color = if interaction.focused {
            env.theme.accent
        } else {
            env.theme.text_dim
        };
        let chevron = Span::styled(
            env.icons.resolve(CHEVRON_ICON),
            Style::default().fg(chevron_color),
        );

        render_icon_line(&self.config, chevron, content, buf, env, interaction.pressed);
    }

    fn semantics(&self, env: &Environment) -> Semantics {
        Semantics::new(Role::Button, Grouping::Combine)
            .element(
                ElementKind::Icon,
                env.icons.resolve(&self.config.icon),
                IconStyle::ACCESSIBILITY_HIDDEN,
            )
            .element(ElementKind::Title, self.config.title.clone(), false)
            .element(ElementKind::Chevron, env.icons.resolve(CHEVRON_ICON), true)
            .label(self.config.accessibility_label.clone())
    }

    fn is_interactive(&self) -> bool {
        true
    }

    /// Activate on Enter or Space
    fn handle_key(&self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => false,
        }
    }

    /// Activate on a left click released inside `area`
    fn handle_mouse(&self, mouse: MouseEvent, area: Rect) -> bool {
        if mouse.kind != MouseEventKind::Up(MouseButton::Left) {
            return false;
        }
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }
        self.activate()
    }

    fn activate(&self) -> bool {
        tracing::debug!("Activated row: {}", self.config.title);
        (self.on_activate)();
        true
    }
}

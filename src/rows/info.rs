use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};

use super::{render_icon_line, RowConfig, SettingsRow};
use crate::a11y::{ElementKind, Grouping, Role, Semantics};
use crate::style::{Environment, IconStyle, Interaction, RowBackground};

pub const DEFAULT_INFO_ICON: &str = "info.circle";
pub const DEFAULT_INFO_TITLE: &str = "App version";

/// Read-only row: `[icon, title, gap, bold value]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub config: RowConfig,
    pub value: String,
}

impl InfoRow {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            config: RowConfig::new(icon, title),
            value: value.into(),
        }
    }

    /// App version row with the default icon and title
    pub fn version(value: impl Into<String>) -> Self {
        Self::new(DEFAULT_INFO_ICON, DEFAULT_INFO_TITLE, value)
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.config.icon = icon.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.config = self.config.accessibility_label(label);
        self
    }
}

impl SettingsRow for InfoRow {
    fn height(&self, env: &Environment) -> u16 {
        RowBackground::default().height(1, &env.scale)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, env: &Environment, _interaction: Interaction) {
        let content = RowBackground::default().render(area, buf, env);
        let value = Span::styled(
            self.value.as_str(),
            Style::default()
                .fg(env.theme.text)
                .add_modifier(Modifier::BOLD),
        );
        render_icon_line(&self.config, value, content, buf, env, false);
    }

    fn semantics(&self, env: &Environment) -> Semantics {
        Semantics::new(Role::StaticText, Grouping::Combine)
            .element(
                ElementKind::Icon,
                env.icons.resolve(&self.config.icon),
                IconStyle::ACCESSIBILITY_HIDDEN,
            )
            .element(ElementKind::Title, self.config.title.clone(), false)
            .element(ElementKind::Value, self.value.clone(), false)
            .label(self.config.accessibility_label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::test_support::line_text;
    use crate::rows::Styled;
    use ratatui::widgets::Widget;

    fn render(row: &InfoRow, env: &Environment) -> Buffer {
        let area = Rect::new(0, 0, 40, row.height(env));
        let mut buf = Buffer::empty(area);
        Styled::new(row, env).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_version_defaults() {
        let row = InfoRow::version("1.4.2");
        assert_eq!(row.config.icon, DEFAULT_INFO_ICON);
        assert_eq!(row.config.title, DEFAULT_INFO_TITLE);
        assert_eq!(row.value, "1.4.2");

        let row = row.icon("star").title("Build");
        assert_eq!(row.config.icon, "star");
        assert_eq!(row.config.title, "Build");
    }

    #[test]
    fn test_value_is_bold_and_right_aligned() {
        let env = Environment::default();
        let buf = render(&InfoRow::new("star", "Build", "42"), &env);

        assert_eq!(
            line_text(&buf, 1),
            format!("{}★{}Build{}42", " ".repeat(4), " ".repeat(3), " ".repeat(21))
        );
        assert!(buf[(34, 1)].modifier.contains(Modifier::BOLD));
        assert!(buf[(35, 1)].modifier.contains(Modifier::BOLD));
        assert!(!buf[(8, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_value_shown_verbatim() {
        let env = Environment::default();
        let buf = render(&InfoRow::version("v2.0-beta (7)"), &env);
        assert!(line_text(&buf, 1).ends_with("v2.0-beta (7)"));
    }

    #[test]
    fn test_single_accessibility_stop() {
        let env = Environment::default();
        let row = InfoRow::version("1.4.2");

        let stops = row.semantics(&env).stops();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].role, Role::StaticText);
        assert_eq!(stops[0].label, "App version, 1.4.2");
        assert!(!row.is_interactive());
        assert!(!row.activate());
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;

use settings_rows::a11y::Stop;
use settings_rows::rows::{
    social_share_row, store_review_row, ActionRow, InfoRow, LabelRow, SettingsRow,
};
use settings_rows::{Environment, Interaction, SymbolCatalog, SystemOpener, UrlOpener};

use crate::config::AppConfig;

/// Message shown in the status line, written by row callbacks
pub type StatusLine = Rc<RefCell<Option<String>>>;

/// Forwards to the system opener and reports what was opened
struct StatusOpener {
    inner: SystemOpener,
    status: StatusLine,
}

impl UrlOpener for StatusOpener {
    fn can_open(&self, url: &Url) -> bool {
        self.inner.can_open(url)
    }

    fn open(&self, url: &Url) {
        *self.status.borrow_mut() = Some(format!("Opening {}", url));
        self.inner.open(url);
    }
}

pub struct App {
    pub config: AppConfig,
    pub env: Environment,
    pub rows: Vec<Box<dyn SettingsRow>>,

    // Index into `rows` of the focused interactive row
    pub focus: Option<usize>,
    // Row under a mouse button that has not been released yet
    pub pressed: Option<usize>,
    // Where each row was drawn last frame, for mouse hit-testing
    pub row_areas: Vec<Rect>,

    pub status: StatusLine,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let icons = Rc::new(SymbolCatalog::new(config.icon_set));
        let env = Environment::new(config.theme(), icons);
        let status: StatusLine = Rc::new(RefCell::new(None));
        let opener: Rc<dyn UrlOpener> = Rc::new(StatusOpener {
            inner: SystemOpener,
            status: Rc::clone(&status),
        });

        let rows = build_rows(&config, opener, &status);
        let focus = rows.iter().position(|r| r.is_interactive());

        Self {
            config,
            env,
            rows,
            focus,
            pressed: None,
            row_areas: Vec::new(),
            status,
            should_quit: false,
        }
    }

    pub fn interaction(&self, index: usize) -> Interaction {
        Interaction {
            focused: self.focus == Some(index),
            pressed: self.pressed == Some(index),
        }
    }

    /// Accessibility traversal of the whole screen
    pub fn accessibility_stops(&self) -> Vec<Stop> {
        self.rows
            .iter()
            .flat_map(|row| row.semantics(&self.env).stops())
            .collect()
    }

    pub fn status_message(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => self.move_focus(1),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => self.move_focus(-1),
            _ => {
                if let Some(row) = self.focus.and_then(|i| self.rows.get(i)) {
                    row.handle_key(key);
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = self
            .row_areas
            .iter()
            .position(|area| area.contains(Position::new(mouse.column, mouse.row)));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = hit.filter(|&i| self.rows[i].is_interactive());
                if self.pressed.is_some() {
                    self.focus = self.pressed;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Only a release over the row that was pressed counts
                if let Some(i) = self.pressed.take().filter(|&i| Some(i) == hit) {
                    self.rows[i].handle_mouse(mouse, self.row_areas[i]);
                }
            }
            _ => {}
        }
    }

    fn move_focus(&mut self, step: isize) {
        let interactive: Vec<usize> = (0..self.rows.len())
            .filter(|&i| self.rows[i].is_interactive())
            .collect();
        if interactive.is_empty() {
            return;
        }

        let current = self
            .focus
            .and_then(|f| interactive.iter().position(|&i| i == f))
            .unwrap_or(0);
        let len = interactive.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.focus = Some(interactive[next]);
    }
}

fn build_rows(
    config: &AppConfig,
    opener: Rc<dyn UrlOpener>,
    status: &StatusLine,
) -> Vec<Box<dyn SettingsRow>> {
    let config_status = Rc::clone(status);
    let config_hint = config_location_hint();

    vec![
        Box::new(ActionRow::new("gearshape", "Preferences", move || {
            *config_status.borrow_mut() = Some(format!("Edit {}", config_hint));
        })),
        Box::new(social_share_row(
            "bubble.left",
            "Follow us",
            config.social.app_url.clone(),
            config.social.web_url.clone(),
            Rc::clone(&opener),
        )),
        Box::new(store_review_row(
            "star",
            "Write a review",
            config.store_url.clone(),
            opener,
        )),
        Box::new(InfoRow::version(config.version.clone())),
        Box::new(LabelRow::new(
            config.made_with.title.clone(),
            config.made_with.accessibility_label.clone(),
        )),
    ]
}

fn config_location_hint() -> String {
    dirs::config_dir()
        .map(|dir| dir.join("settings-rows/config.toml").display().to_string())
        .unwrap_or_else(|| "config.toml".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(AppConfig {
            appearance: crate::config::AppearanceSetting::Dark,
            ..AppConfig::default()
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_skips_static_rows() {
        let mut app = app();
        assert_eq!(app.focus, Some(0));

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.focus, Some(2));

        // Version and caption rows are not focusable, so focus wraps
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.focus, Some(0));

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.focus, Some(2));
    }

    #[test]
    fn test_enter_activates_focused_row() {
        let mut app = app();
        assert!(app.status_message().is_none());

        app.handle_key(key(KeyCode::Enter));
        assert!(app.status_message().unwrap().starts_with("Edit "));
    }

    #[test]
    fn test_click_requires_press_and_release_on_same_row() {
        let mut app = app();
        app.row_areas = vec![
            Rect::new(0, 0, 40, 4),
            Rect::new(0, 4, 40, 4),
            Rect::new(0, 8, 40, 4),
            Rect::new(0, 12, 40, 4),
            Rect::new(0, 16, 40, 2),
        ];
        let mouse = |kind, line| MouseEvent {
            kind,
            column: 10,
            row: line,
            modifiers: KeyModifiers::NONE,
        };

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1));
        assert_eq!(app.pressed, Some(0));
        assert!(app.interaction(0).pressed);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 13));
        assert_eq!(app.pressed, None);
        assert!(app.status_message().is_none());

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2));
        assert!(app.status_message().is_some());

        // Static rows never take the press
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 13));
        assert_eq!(app.pressed, None);
    }

    #[test]
    fn test_accessibility_stops() {
        let app = app();
        let labels: Vec<String> = app
            .accessibility_stops()
            .into_iter()
            .map(|s| s.label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Preferences".to_string(),
                "Follow us".to_string(),
                "Write a review".to_string(),
                format!("App version, {}", env!("CARGO_PKG_VERSION")),
                "Made with love in a terminal".to_string(),
            ]
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}

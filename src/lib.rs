//! Reusable settings-screen rows for ratatui.
//!
//! ```
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
//! use settings_rows::{rows::{InfoRow, SettingsRow, Styled}, Environment};
//!
//! let env = Environment::default();
//! let row = InfoRow::version("1.0.0");
//! let area = Rect::new(0, 0, 40, row.height(&env));
//! let mut buf = Buffer::empty(area);
//! Styled::new(&row, &env).render(area, &mut buf);
//! ```

pub mod a11y;
pub mod icons;
pub mod platform;
pub mod rows;
pub mod style;
pub mod theme;

pub use icons::{IconProvider, IconSet, SymbolCatalog};
pub use platform::{SystemOpener, UrlOpener};
pub use style::{CellScale, Environment, IconStyle, Interaction, RowBackground};
pub use theme::{Appearance, Theme};

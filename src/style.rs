//! Styling shared by every row: unit conversion, the icon slot and the
//! rounded row surface.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use std::rc::Rc;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::icons::{IconProvider, SymbolCatalog};
use crate::theme::Theme;

/// Horizontal padding applied both outside and inside the row surface
pub const HORIZONTAL_PADDING: f32 = 16.0;

/// Converts layout units (points) into terminal cells.
///
/// Paddings and widths round up so a positive amount never disappears;
/// letter spacing rounds down since a partial column cannot be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub column_points: f32,
    pub row_points: f32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            column_points: 8.0,
            row_points: 16.0,
        }
    }
}

impl CellScale {
    pub fn columns(&self, points: f32) -> u16 {
        cells_ceil(points, self.column_points)
    }

    pub fn rows(&self, points: f32) -> u16 {
        cells_ceil(points, self.row_points)
    }

    /// Columns inserted between characters for the given letter spacing
    pub fn tracking(&self, points: f32) -> u16 {
        if points <= 0.0 || self.column_points <= 0.0 {
            return 0;
        }
        (points / self.column_points).floor().min(f32::from(u16::MAX)) as u16
    }
}

fn cells_ceil(points: f32, unit: f32) -> u16 {
    if points <= 0.0 || unit <= 0.0 {
        return 0;
    }
    (points / unit).ceil().min(f32::from(u16::MAX)) as u16
}

/// Spread `text` apart by `gap` columns between grapheme clusters
pub fn tracked(text: &str, gap: u16) -> String {
    if gap == 0 {
        return text.to_string();
    }
    let spacer = " ".repeat(usize::from(gap));
    text.graphemes(true).collect::<Vec<_>>().join(&spacer)
}

/// Transient input state supplied by the host for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    pub focused: bool,
    pub pressed: bool,
}

/// Everything a row needs from its surroundings to draw itself
#[derive(Clone)]
pub struct Environment {
    pub theme: Theme,
    pub scale: CellScale,
    pub icons: Rc<dyn IconProvider>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Theme::default(), Rc::new(SymbolCatalog::default()))
    }
}

impl Environment {
    pub fn new(theme: Theme, icons: Rc<dyn IconProvider>) -> Self {
        Self {
            theme,
            scale: CellScale::default(),
            icons,
        }
    }

    pub fn with_scale(mut self, scale: CellScale) -> Self {
        self.scale = scale;
        self
    }
}

/// Decorative icon slot at the leading edge of a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub min_width: f32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self { min_width: 25.0 }
    }
}

impl IconStyle {
    /// Icons repeat what the title already says
    pub const ACCESSIBILITY_HIDDEN: bool = true;

    pub fn slot_width(&self, glyph: &str, scale: &CellScale) -> u16 {
        let glyph_width = u16::try_from(glyph.width()).unwrap_or(u16::MAX);
        scale.columns(self.min_width).max(glyph_width)
    }

    pub fn style(&self, env: &Environment) -> Style {
        Style::default()
            .fg(env.theme.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Draw `glyph` leading-aligned on the first line of `area`; returns the
    /// columns the slot occupies.
    pub fn render(&self, glyph: &str, area: Rect, buf: &mut Buffer, env: &Environment) -> u16 {
        if area.width == 0 || area.height == 0 {
            return 0;
        }
        let width = self.slot_width(glyph, &env.scale).min(area.width);
        buf.set_stringn(area.x, area.y, glyph, usize::from(width), self.style(env));
        width
    }
}

/// Rounded surface with the adaptive secondary background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBackground {
    pub corner_radius: f32,
    pub inner_padding: f32,
    pub bottom_margin: f32,
}

impl Default for RowBackground {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            inner_padding: 8.0,
            bottom_margin: 6.0,
        }
    }
}

impl RowBackground {
    /// Total rows needed for `content_height` lines of content
    pub fn height(&self, content_height: u16, scale: &CellScale) -> u16 {
        let inner = scale.rows(self.inner_padding);
        content_height
            .saturating_add(inner.saturating_mul(2))
            .saturating_add(scale.rows(self.bottom_margin))
    }

    /// Paint the surface into `area` and return the content rectangle
    pub fn render(&self, area: Rect, buf: &mut Buffer, env: &Environment) -> Rect {
        let scale = &env.scale;
        let horizontal = scale.columns(HORIZONTAL_PADDING);
        let inner = scale.rows(self.inner_padding);
        let margin = scale.rows(self.bottom_margin);

        let surface = Rect {
            x: area.x.saturating_add(horizontal),
            y: area.y,
            width: area.width.saturating_sub(horizontal.saturating_mul(2)),
            height: area.height.saturating_sub(margin),
        };
        if surface.width == 0 || surface.height == 0 {
            return Rect::new(surface.x, surface.y, 0, 0);
        }

        let fill = env.theme.secondary_background;
        buf.set_style(surface, Style::default().bg(fill));

        if self.corner_radius > 0.0 && surface.width >= 2 && surface.height >= 2 {
            let left = surface.x;
            let right = surface.right() - 1;
            let top = surface.y;
            let bottom = surface.bottom() - 1;
            for (x, y, symbol) in [
                (left, top, "▗"),
                (right, top, "▖"),
                (left, bottom, "▝"),
                (right, bottom, "▘"),
            ] {
                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_fg(fill)
                    .set_bg(env.theme.background);
            }
        }

        Rect {
            x: surface.x.saturating_add(horizontal),
            y: surface.y.saturating_add(inner),
            width: surface.width.saturating_sub(horizontal.saturating_mul(2)),
            height: surface.height.saturating_sub(inner.saturating_mul(2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Appearance;

    fn render_background(env: &Environment, background: RowBackground) -> Buffer {
        let area = Rect::new(0, 0, 30, background.height(1, &env.scale));
        let mut buf = Buffer::empty(area);
        background.render(area, &mut buf, env);
        buf
    }

    #[test]
    fn test_scale_rounding() {
        let scale = CellScale::default();
        assert_eq!(scale.columns(25.0), 4);
        assert_eq!(scale.columns(16.0), 2);
        assert_eq!(scale.rows(8.0), 1);
        assert_eq!(scale.rows(6.0), 1);
        assert_eq!(scale.rows(0.0), 0);
        assert_eq!(scale.tracking(1.0), 0);
        assert_eq!(scale.tracking(16.0), 2);
    }

    #[test]
    fn test_tracked_text() {
        assert_eq!(tracked("ABC", 0), "ABC");
        assert_eq!(tracked("ABC", 1), "A B C");
        // The heart and its variation selector stay together
        assert_eq!(tracked("A❤️", 1), "A ❤️");
    }

    #[test]
    fn test_default_background_height() {
        let scale = CellScale::default();
        // padding above + content + padding below + margin
        assert_eq!(RowBackground::default().height(1, &scale), 4);
    }

    #[test]
    fn test_background_content_area() {
        let env = Environment::default();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        let content = RowBackground::default().render(area, &mut buf, &env);

        assert_eq!(content, Rect::new(4, 1, 22, 1));
        // Surface is filled, margin row is not
        assert_eq!(buf[(10, 0)].bg, env.theme.secondary_background);
        assert_eq!(buf[(10, 2)].bg, env.theme.secondary_background);
        assert_ne!(buf[(10, 3)].bg, env.theme.secondary_background);
        // Outer padding is left alone
        assert_ne!(buf[(1, 1)].bg, env.theme.secondary_background);
    }

    #[test]
    fn test_rounded_corners() {
        let env = Environment::default();
        let buf = render_background(&env, RowBackground::default());

        assert_eq!(buf[(2, 0)].symbol(), "▗");
        assert_eq!(buf[(27, 0)].symbol(), "▖");
        assert_eq!(buf[(2, 2)].symbol(), "▝");
        assert_eq!(buf[(27, 2)].symbol(), "▘");
    }

    #[test]
    fn test_square_corners_without_radius() {
        let env = Environment::default();
        let background = RowBackground {
            corner_radius: 0.0,
            ..RowBackground::default()
        };
        let buf = render_background(&env, background);

        assert_eq!(buf[(2, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].bg, env.theme.secondary_background);
    }

    #[test]
    fn test_background_render_is_deterministic() {
        let env = Environment::default();
        let background = RowBackground::default();
        assert_eq!(
            render_background(&env, background),
            render_background(&env, background)
        );
    }

    #[test]
    fn test_background_follows_appearance() {
        let light = Environment::new(
            Theme::for_appearance(Appearance::Light),
            Rc::new(SymbolCatalog::default()),
        );
        let dark = Environment::default();

        let light_buf = render_background(&light, RowBackground::default());
        let dark_buf = render_background(&dark, RowBackground::default());

        assert_eq!(light_buf[(10, 1)].bg, Theme::light().secondary_background);
        assert_eq!(dark_buf[(10, 1)].bg, Theme::dark().secondary_background);
    }

    #[test]
    fn test_background_too_narrow() {
        let env = Environment::default();
        let area = Rect::new(0, 0, 3, 4);
        let mut buf = Buffer::empty(area);

        let content = RowBackground::default().render(area, &mut buf, &env);
        assert_eq!(content.width, 0);
        assert_eq!(content.height, 0);
    }

    #[test]
    fn test_icon_slot() {
        let env = Environment::default();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        let width = IconStyle::default().render("★", area, &mut buf, &env);

        assert_eq!(width, 4);
        assert_eq!(buf[(0, 0)].symbol(), "★");
        assert_eq!(buf[(0, 0)].fg, env.theme.accent);
        assert!(buf[(0, 0)].modifier.contains(Modifier::BOLD));
        assert!(IconStyle::ACCESSIBILITY_HIDDEN);
    }
}

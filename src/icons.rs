//! Symbolic icon lookup.
//!
//! Rows only know icon identifiers (`info.circle`, `star`, ...). The host
//! decides which glyph an identifier turns into by supplying an
//! [`IconProvider`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A renderable glyph, usually a single symbol
pub type Glyph = Cow<'static, str>;

/// Glyph drawn for identifiers a provider does not know
pub const FALLBACK_GLYPH: &str = "•";

/// Resolves icon identifiers into glyphs
pub trait IconProvider {
    fn resolve(&self, identifier: &str) -> Glyph;
}

/// Which glyph family [`SymbolCatalog`] draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSet {
    #[default]
    Unicode,
    NerdFont,
}

/// Built-in catalog of the symbols a settings screen typically needs
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolCatalog {
    set: IconSet,
}

// identifier, unicode, nerd font
const SYMBOLS: &[(&str, &str, &str)] = &[
    ("chevron.right", "›", "\u{f054}"),
    ("info.circle", "ⓘ", "\u{f05a}"),
    ("star", "★", "\u{f005}"),
    ("star.bubble", "★", "\u{f4ad}"),
    ("bubble.left", "✎", "\u{f27a}"),
    ("heart", "♥", "\u{f004}"),
    ("gearshape", "⚙", "\u{f013}"),
    ("bell", "♪", "\u{f0f3}"),
    ("envelope", "✉", "\u{f0e0}"),
    ("link", "⚭", "\u{f0c1}"),
    ("lock", "⚿", "\u{f023}"),
    ("globe", "◍", "\u{f0ac}"),
    ("square.and.arrow.up", "⇪", "\u{f045}"),
    ("questionmark.circle", "?", "\u{f059}"),
    ("trash", "✗", "\u{f1f8}"),
];

impl SymbolCatalog {
    pub fn new(set: IconSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> IconSet {
        self.set
    }
}

impl IconProvider for SymbolCatalog {
    fn resolve(&self, identifier: &str) -> Glyph {
        let found = SYMBOLS
            .iter()
            .find(|(id, _, _)| *id == identifier)
            .map(|(_, unicode, nerd)| match self.set {
                IconSet::Unicode => *unicode,
                IconSet::NerdFont => *nerd,
            });

        match found {
            Some(glyph) => Cow::Borrowed(glyph),
            None => {
                tracing::debug!("Unknown icon identifier: {}", identifier);
                Cow::Borrowed(FALLBACK_GLYPH)
            }
        }
    }
}

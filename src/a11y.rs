//! Accessibility description of a row.
//!
//! A row lists the elements it draws. Each element can be hidden from
//! assistive technology, and the row decides whether its visible elements
//! are announced one by one or merged into a single stop.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Button,
    StaticText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Icon,
    Title,
    Value,
    Chevron,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// Every visible element is its own stop
    #[default]
    Separate,
    /// Visible elements are announced together as one stop
    Combine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub hidden: bool,
}

/// One place a screen reader lands on while traversing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub role: Role,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semantics {
    pub role: Role,
    pub grouping: Grouping,
    pub elements: Vec<Element>,
    /// Replaces the announced text of the row
    pub label: Option<String>,
}

impl Semantics {
    pub fn new(role: Role, grouping: Grouping) -> Self {
        Self {
            role,
            grouping,
            elements: Vec::new(),
            label: None,
        }
    }

    pub fn element(mut self, kind: ElementKind, text: impl Into<String>, hidden: bool) -> Self {
        self.elements.push(Element {
            kind,
            text: text.into(),
            hidden,
        });
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn has(&self, kind: ElementKind) -> bool {
        self.elements.iter().any(|e| e.kind == kind)
    }

    /// Screen-reader traversal of this row
    pub fn stops(&self) -> Vec<Stop> {
        let visible: Vec<&Element> = self.elements.iter().filter(|e| !e.hidden).collect();
        if visible.is_empty() && self.label.is_none() {
            return Vec::new();
        }

        if let Some(label) = &self.label {
            return vec![Stop {
                role: self.role,
                label: label.clone(),
            }];
        }

        match self.grouping {
            Grouping::Combine => vec![Stop {
                role: self.role,
                label: visible
                    .iter()
                    .map(|e| e.text.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }],
            Grouping::Separate => visible
                .iter()
                .map(|e| Stop {
                    role: self.role,
                    label: e.text.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_elements_are_skipped() {
        let semantics = Semantics::new(Role::StaticText, Grouping::Separate)
            .element(ElementKind::Icon, "★", true)
            .element(ElementKind::Title, "Rate", false)
            .element(ElementKind::Value, "5", false);

        let labels: Vec<String> = semantics.stops().into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Rate", "5"]);
    }

    #[test]
    fn test_combine_merges_into_one_stop() {
        let semantics = Semantics::new(Role::StaticText, Grouping::Combine)
            .element(ElementKind::Icon, "ⓘ", true)
            .element(ElementKind::Title, "App version", false)
            .element(ElementKind::Value, "1.2.0", false);

        let stops = semantics.stops();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].label, "App version, 1.2.0");
    }

    #[test]
    fn test_label_overrides_text() {
        let semantics = Semantics::new(Role::StaticText, Grouping::Separate)
            .element(ElementKind::Caption, "MADE WITH ❤️", false)
            .label(Some("Made with love".to_string()));

        assert_eq!(
            semantics.stops(),
            vec![Stop {
                role: Role::StaticText,
                label: "Made with love".to_string()
            }]
        );
    }

    #[test]
    fn test_fully_hidden_row_has_no_stops() {
        let semantics = Semantics::new(Role::StaticText, Grouping::Combine)
            .element(ElementKind::Icon, "★", true);
        assert!(semantics.stops().is_empty());
    }
}

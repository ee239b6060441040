// src/fixtures/mod.rs
//! Compiled-in sample data behind every panel. Nothing here is mutated at runtime.
pub mod architecture;
pub mod backup;
pub mod load_test;
pub mod queries;
pub mod replication;

/// Headline metric shown in the card row at the top of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub highlight: Option<&'static str>,  // coloured prefix of the caption, e.g. "-88%"
}

impl StatCard {
    pub const fn new(title: &'static str, value: &'static str, caption: &'static str) -> Self {
        Self {
            title,
            value,
            caption,
            highlight: None,
        }
    }

    pub const fn highlighted(
        title: &'static str,
        value: &'static str,
        highlight: &'static str,
        caption: &'static str,
    ) -> Self {
        Self {
            title,
            value,
            caption,
            highlight: Some(highlight),
        }
    }
}

/// Label/value pair rendered as a two-column row.
pub type Detail = (&'static str, &'static str);

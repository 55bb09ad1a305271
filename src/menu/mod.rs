//! Menu model handed to the menu-bar host, and its serializations.

pub mod bitbar;
pub mod builder;

use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// What the host runs when the item is clicked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub program: PathBuf,
    pub params: Vec<String>,
    /// Open a terminal window instead of running in the background.
    pub terminal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u8>,
    /// Re-render the plugin after the click.
    #[serde(skip_serializing_if = "is_false")]
    pub refresh: bool,
    /// Only shown in the menu bar, not in the dropdown.
    #[serde(skip_serializing_if = "is_false")]
    pub title_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<Entry>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Courier 10, so that column-aligned rows line up.
    pub fn monospace(mut self) -> Self {
        self.font = Some("Courier".into());
        self.size = Some(10);
        self
    }

    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    pub fn title_only(mut self) -> Self {
        self.title_only = true;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn submenu(mut self, entries: Vec<Entry>) -> Self {
        self.submenu = entries;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Item(MenuItem),
    Separator,
}

impl From<MenuItem> for Entry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

/// Output format of render mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// BitBar / xbar / SwiftBar plugin lines
    #[default]
    Text,
    /// The same entries as a JSON array
    Json,
}

pub fn serialize(entries: &[Entry], format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(bitbar::render(entries)),
        Format::Json => serde_json::to_string_pretty(entries),
    }
}

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a deck item. Assigned once, never reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(CompactString);

impl ItemId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Linear text gradient. `from`/`to` are color names or `#RRGGBB`, resolved by the app theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: CompactString,
    pub to: CompactString,
    pub deg: f32,
}

impl Gradient {
    pub fn new(from: &str, to: &str, deg: f32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            deg,
        }
    }
}

/// Presentation payload carried by an item. The deck never looks at it.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CardStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: CompactString,
    #[serde(default)]
    pub style: CardStyle,
}

impl Item {
    pub fn new(id: impl Into<CompactString>, label: impl Into<CompactString>) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
            style: CardStyle::default(),
        }
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.style.gradient = Some(gradient);
        self
    }
}

/// The deck shown at startup.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("1", "C#").with_gradient(Gradient::new("purple", "pink", 45.0)),
        Item::new("2", "TypeScript").with_gradient(Gradient::new("indigo", "cyan", 45.0)),
        Item::new("3", "Rust").with_gradient(Gradient::new("orange", "salmon", 45.0)),
    ]
}

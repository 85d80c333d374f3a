//! Contact model

use serde::{Deserialize, Serialize};

/// A fixed identity a message can be sent to or from
///
/// Contacts are established once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    /// Opaque glyph/asset reference, rendered by the UI
    pub icon: String,
    /// Display color (`#RRGGBB`) used for theming sent messages
    pub color: String,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A user-defined named URL in the quick-navigation list.
///
/// Links have no stable id; a link is identified by its position in the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortcutLink {
    pub name: String,
    pub url: String,
}

impl ShortcutLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Which mode the add/edit form was opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFormTarget {
    /// Append a new link.
    Create,
    /// Replace the link at the given position.
    Edit(usize),
}

//! Placement of generated functions inside the module tree.

use crate::core::placeholder::to_identifier;

/// Where a key's function lives, relative to the project module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    pub modules: Vec<String>,
    pub function: String,
}

/// Maps a catalog key name to its module path and function name.
pub trait Placement: Send + Sync {
    fn place(&self, key_name: &str) -> Placed;
}

/// Splits key names on a separator: `menu.top.title` becomes function
/// `title` in module `menu::top`. Without a separator every key is placed
/// directly in the project module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorPlacement {
    separator: Option<String>,
}

impl SeparatorPlacement {
    pub fn new(separator: Option<String>) -> Self {
        Self {
            separator: separator.filter(|s| !s.is_empty()),
        }
    }

    pub fn flat() -> Self {
        Self { separator: None }
    }
}

impl Default for SeparatorPlacement {
    fn default() -> Self {
        Self::new(Some(".".to_string()))
    }
}

impl Placement for SeparatorPlacement {
    fn place(&self, key_name: &str) -> Placed {
        let mut segments: Vec<String> = match &self.separator {
            Some(separator) => key_name
                .split(separator.as_str())
                .filter(|segment| !segment.trim().is_empty())
                .map(to_identifier)
                .collect(),
            None => Vec::new(),
        };
        let function = segments.pop().unwrap_or_else(|| to_identifier(key_name));
        Placed {
            modules: segments,
            function,
        }
    }
}

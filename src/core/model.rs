//! Intermediate model consumed by the renderer.
//!
//! Built once from the catalog and never mutated afterwards. All collections
//! keep insertion order; the renderer relies on it for deterministic output.

use std::fmt;

use crate::core::{Locale, PluralCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Module names from the root down to this module, inclusive.
    pub path: Vec<String>,
    pub name: String,
    pub functions: Vec<GeneratedFunction>,
    pub children: Vec<GeneratedModule>,
}

impl GeneratedModule {
    pub fn new(path: Vec<String>) -> Self {
        let name = path.last().cloned().unwrap_or_default();
        Self {
            path,
            name,
            functions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Find or create the descendant at `segments`, relative to this module.
    pub fn descendant_mut(&mut self, segments: &[String]) -> &mut GeneratedModule {
        let Some((first, rest)) = segments.split_first() else {
            return self;
        };
        let index = match self.children.iter().position(|child| &child.name == first) {
            Some(index) => index,
            None => {
                let mut path = self.path.clone();
                path.push(first.clone());
                self.children.push(GeneratedModule::new(path));
                self.children.len() - 1
            }
        };
        self.children[index].descendant_mut(rest)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
            + self
                .children
                .iter()
                .map(GeneratedModule::function_count)
                .sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFunction {
    pub name: String,
    /// Catalog key this function was generated from.
    pub key_name: String,
    pub char_limit: u32,
    pub arguments: Vec<Argument>,
    pub locale_branches: Vec<LocaleBranch>,
}

impl GeneratedFunction {
    pub fn branch(&self, locale: Locale) -> Option<&LocaleBranch> {
        self.locale_branches
            .iter()
            .find(|branch| branch.locale() == locale)
    }

    /// Supported locales with no explicit branch, in declaration order.
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.branch(*locale).is_none())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Integer,
    Text,
    Float,
}

impl ArgumentKind {
    /// Map a placeholder kind tag (`i`, `s`, `f`).
    pub fn from_tag(tag: &str) -> Option<ArgumentKind> {
        match tag {
            "i" => Some(ArgumentKind::Integer),
            "s" => Some(ArgumentKind::Text),
            "f" => Some(ArgumentKind::Float),
            _ => None,
        }
    }

    pub fn rust_type(self) -> &'static str {
        match self {
            ArgumentKind::Integer => "i64",
            ArgumentKind::Text => "&str",
            ArgumentKind::Float => "f64",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentKind::Integer => write!(f, "integer"),
            ArgumentKind::Text => write!(f, "text"),
            ArgumentKind::Float => write!(f, "float"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub kind: ArgumentKind,
}

/// Translated text with placeholder tokens still in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleBranch {
    Singular {
        locale: Locale,
        text: Text,
    },
    Plural {
        locale: Locale,
        quantity: String,
        categories: Vec<CategoryBranch>,
    },
}

impl LocaleBranch {
    pub fn locale(&self) -> Locale {
        match self {
            LocaleBranch::Singular { locale, .. } | LocaleBranch::Plural { locale, .. } => *locale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBranch {
    pub category: PluralCategory,
    pub text: Text,
}

/// Categories with no explicit branch, in declaration order.
pub fn missing_categories(categories: &[CategoryBranch]) -> Vec<PluralCategory> {
    PluralCategory::ALL
        .into_iter()
        .filter(|category| !categories.iter().any(|branch| branch.category == *category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_descendant_mut_creates_in_order() {
        let mut root = GeneratedModule::new(vec!["klondike".to_string()]);
        root.descendant_mut(&["menu".to_string(), "top".to_string()]);
        root.descendant_mut(&["dialog".to_string()]);
        root.descendant_mut(&["menu".to_string()]);

        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["menu", "dialog"]);
        assert_eq!(
            root.children[0].children[0].path,
            vec!["klondike", "menu", "top"]
        );
    }

    #[test]
    fn test_missing_categories() {
        let categories = vec![
            CategoryBranch {
                category: PluralCategory::Other,
                text: Text("x".to_string()),
            },
            CategoryBranch {
                category: PluralCategory::Zero,
                text: Text("y".to_string()),
            },
        ];
        assert_eq!(
            missing_categories(&categories),
            vec![
                PluralCategory::One,
                PluralCategory::Two,
                PluralCategory::Few,
                PluralCategory::Many
            ]
        );
    }

    #[test]
    fn test_missing_locales() {
        let function = GeneratedFunction {
            name: "title".to_string(),
            key_name: "title".to_string(),
            char_limit: 0,
            arguments: Vec::new(),
            locale_branches: vec![LocaleBranch::Singular {
                locale: Locale::SvSe,
                text: Text("Titel".to_string()),
            }],
        };
        assert_eq!(function.missing_locales(), vec![Locale::EnGb, Locale::RuRu]);
    }
}

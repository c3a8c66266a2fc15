//! Issue types produced while building the intermediate model.
//!
//! Errors are fatal for the key they name: no function is emitted for it.
//! Warnings never prevent generation. Each issue carries the key name so
//! reporters can tell the user exactly which catalog entry needs attention.

use std::fmt;

use crate::core::{ArgumentKind, Locale, PluralCategory};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ArgumentKindConflict,
    MissingQuantityDesignation,
    IncompleteBaselineCoverage,
    MalformedValue,
    UnknownPluralCategory,
    DuplicateFunction,
    ReservedArgumentName,
    UnsupportedLanguage,
    DuplicateLocale,
    BaselineMissingCategory,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ArgumentKindConflict => write!(f, "argument-kind-conflict"),
            Rule::MissingQuantityDesignation => write!(f, "missing-quantity-designation"),
            Rule::IncompleteBaselineCoverage => write!(f, "incomplete-baseline-coverage"),
            Rule::MalformedValue => write!(f, "malformed-value"),
            Rule::UnknownPluralCategory => write!(f, "unknown-plural-category"),
            Rule::DuplicateFunction => write!(f, "duplicate-function"),
            Rule::ReservedArgumentName => write!(f, "reserved-argument-name"),
            Rule::UnsupportedLanguage => write!(f, "unsupported-language"),
            Rule::DuplicateLocale => write!(f, "duplicate-locale"),
            Rule::BaselineMissingCategory => write!(f, "baseline-missing-category"),
        }
    }
}

// ============================================================
// Build errors
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// The same placeholder name is used with two different kinds.
    ArgumentKindConflict {
        argument: String,
        first: ArgumentKind,
        second: ArgumentKind,
    },
    /// A plural key has several integer arguments and none is designated.
    MissingQuantityDesignation { candidates: Vec<String> },
    /// The baseline locale cannot terminate a fallback chain.
    IncompleteBaselineCoverage { reason: CoverageGap },
    /// A translation value has the wrong shape: a plural value that is not a
    /// category mapping, or a singular value that is not text.
    MalformedValue { language: String, detail: String },
    UnknownPluralCategory { language: String, category: String },
    /// Two keys resolve to the same function in the same module.
    DuplicateFunction { function: String, module: String },
    ReservedArgumentName { argument: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageGap {
    /// No baseline translation although other locales fall back to it.
    MissingTranslation,
    /// The baseline plural mapping has no `other` form.
    MissingOtherForm,
}

impl BuildErrorKind {
    pub fn rule(&self) -> Rule {
        match self {
            BuildErrorKind::ArgumentKindConflict { .. } => Rule::ArgumentKindConflict,
            BuildErrorKind::MissingQuantityDesignation { .. } => Rule::MissingQuantityDesignation,
            BuildErrorKind::IncompleteBaselineCoverage { .. } => Rule::IncompleteBaselineCoverage,
            BuildErrorKind::MalformedValue { .. } => Rule::MalformedValue,
            BuildErrorKind::UnknownPluralCategory { .. } => Rule::UnknownPluralCategory,
            BuildErrorKind::DuplicateFunction { .. } => Rule::DuplicateFunction,
            BuildErrorKind::ReservedArgumentName { .. } => Rule::ReservedArgumentName,
        }
    }
}

impl fmt::Display for BuildErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildErrorKind::ArgumentKindConflict {
                argument,
                first,
                second,
            } => write!(
                f,
                "placeholder '{}' is used as both {} and {}",
                argument, first, second
            ),
            BuildErrorKind::MissingQuantityDesignation { candidates } => write!(
                f,
                "plural key has several integer placeholders ({}); set plural_argument to pick one",
                candidates.join(", ")
            ),
            BuildErrorKind::IncompleteBaselineCoverage { reason } => match reason {
                CoverageGap::MissingTranslation => write!(
                    f,
                    "no {} translation to fall back to",
                    Locale::BASELINE
                ),
                CoverageGap::MissingOtherForm => write!(
                    f,
                    "{} plural translation has no '{}' form",
                    Locale::BASELINE,
                    PluralCategory::Other
                ),
            },
            BuildErrorKind::MalformedValue { language, detail } => {
                write!(f, "{} translation is malformed: {}", language, detail)
            }
            BuildErrorKind::UnknownPluralCategory { language, category } => write!(
                f,
                "{} translation uses unknown plural category '{}'",
                language, category
            ),
            BuildErrorKind::DuplicateFunction { function, module } => write!(
                f,
                "function '{}' is already defined in module '{}'",
                function, module
            ),
            BuildErrorKind::ReservedArgumentName { argument } => write!(
                f,
                "placeholder name '{}' is reserved for the locale parameter",
                argument
            ),
        }
    }
}

/// A fatal problem with one catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub key: String,
    pub kind: BuildErrorKind,
}

impl BuildError {
    pub fn new(key: impl Into<String>, kind: BuildErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule(&self) -> Rule {
        self.kind.rule()
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key '{}': {}", self.key, self.kind)
    }
}

impl std::error::Error for BuildError {}

// ============================================================
// Build warnings
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarningKind {
    /// Translation language outside the supported set; skipped.
    UnsupportedLanguage { language: String },
    /// A second translation resolving to a locale already present; skipped.
    DuplicateLocale { language: String, locale: Locale },
    /// Baseline lacks categories its own rule can produce; those resolve to
    /// the baseline's `other` form.
    BaselineMissingCategory { categories: Vec<PluralCategory> },
}

impl BuildWarningKind {
    pub fn rule(&self) -> Rule {
        match self {
            BuildWarningKind::UnsupportedLanguage { .. } => Rule::UnsupportedLanguage,
            BuildWarningKind::DuplicateLocale { .. } => Rule::DuplicateLocale,
            BuildWarningKind::BaselineMissingCategory { .. } => Rule::BaselineMissingCategory,
        }
    }
}

impl fmt::Display for BuildWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarningKind::UnsupportedLanguage { language } => {
                write!(f, "language '{}' is not supported; translation skipped", language)
            }
            BuildWarningKind::DuplicateLocale { language, locale } => write!(
                f,
                "language '{}' resolves to {} which already has a translation; skipped",
                language, locale
            ),
            BuildWarningKind::BaselineMissingCategory { categories } => {
                let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "{} has no '{}' form; '{}' is used instead",
                    Locale::BASELINE,
                    names.join("', '"),
                    PluralCategory::Other
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildWarning {
    pub key: String,
    pub kind: BuildWarningKind,
}

impl BuildWarning {
    pub fn new(key: impl Into<String>, kind: BuildWarningKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule(&self) -> Rule {
        self.kind.rule()
    }
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key '{}': {}", self.key, self.kind)
    }
}

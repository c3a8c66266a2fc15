//! Plural category resolution.
//!
//! Maps an integer quantity to one of the CLDR plural categories for a
//! supported [`Locale`]. The rules live in a declarative table (see
//! [`rules`]) that is both evaluated here and printed into generated code,
//! so the generator and its output always classify quantities identically.
//!
//! ## Operands
//!
//! - `n`: absolute value of the quantity
//! - `i`: number of decimal digits of `n` (not its integer value)
//! - `v`, `w`: visible fraction digits, always `0` for integers
//!
//! Because `i` is a digit count, the English/Swedish `one` rule (`i = 0`)
//! never matches and the Russian rules depend only on how many digits the
//! quantity has. This mirrors the catalog tooling these accessors replace.

pub mod rules;

use std::fmt;

use crate::core::Locale;

pub use rules::{Condition, Expr, Operand, PluralRule};

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Variant name in generated code.
    pub fn variant(self) -> &'static str {
        match self {
            PluralCategory::Zero => "Zero",
            PluralCategory::One => "One",
            PluralCategory::Two => "Two",
            PluralCategory::Few => "Few",
            PluralCategory::Many => "Many",
            PluralCategory::Other => "Other",
        }
    }

    pub fn from_name(name: &str) -> Option<PluralCategory> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operands derived from a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralOperands {
    pub n: u64,
    pub i: u64,
    pub v: u64,
    pub w: u64,
}

impl PluralOperands {
    pub fn from_quantity(quantity: i64) -> Self {
        let n = quantity.unsigned_abs();
        let i = n.to_string().len() as u64;
        Self { n, i, v: 0, w: 0 }
    }

    pub fn get(&self, operand: Operand) -> u64 {
        match operand {
            Operand::N => self.n,
            Operand::I => self.i,
            Operand::V => self.v,
            Operand::W => self.w,
        }
    }
}

impl Locale {
    /// The rule table entry for this locale.
    pub fn plural_rule(self) -> &'static PluralRule {
        match self {
            Locale::EnGb | Locale::SvSe => &rules::ONE_IF_NO_DIGITS,
            Locale::RuRu => &rules::SLAVIC,
        }
    }
}

/// Classify `quantity` for `locale`. Total: unmatched quantities are `other`.
pub fn category_for(locale: Locale, quantity: i64) -> PluralCategory {
    locale
        .plural_rule()
        .categorize(&PluralOperands::from_quantity(quantity))
}

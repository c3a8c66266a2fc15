//! Declarative plural rule table.
//!
//! A [`PluralRule`] is an ordered list of `(category, condition)` pairs; the
//! first matching condition wins and `other` is the implicit fallthrough.
//! Conditions can be evaluated against [`PluralOperands`] or printed as a
//! Rust boolean expression over local bindings named after the operands.

use super::{PluralCategory, PluralOperands};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    N,
    I,
    V,
    W,
}

impl Operand {
    pub const ALL: [Operand; 4] = [Operand::N, Operand::I, Operand::V, Operand::W];

    /// Binding name in generated code.
    pub fn ident(self) -> &'static str {
        match self {
            Operand::N => "n",
            Operand::I => "i",
            Operand::V => "v",
            Operand::W => "w",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    Operand(Operand),
    Mod(Operand, u64),
}

impl Expr {
    fn eval(&self, operands: &PluralOperands) -> u64 {
        match *self {
            Expr::Operand(operand) => operands.get(operand),
            Expr::Mod(operand, modulus) => operands.get(operand) % modulus,
        }
    }

    fn to_rust(self) -> String {
        match self {
            Expr::Operand(operand) => operand.ident().to_string(),
            Expr::Mod(operand, modulus) => format!("{} % {}", operand.ident(), modulus),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Eq(Expr, u64),
    Ne(Expr, u64),
    /// Inclusive range.
    In(Expr, u64, u64),
    NotIn(Expr, u64, u64),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

impl Condition {
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        match *self {
            Condition::Eq(expr, value) => expr.eval(operands) == value,
            Condition::Ne(expr, value) => expr.eval(operands) != value,
            Condition::In(expr, low, high) => (low..=high).contains(&expr.eval(operands)),
            Condition::NotIn(expr, low, high) => !(low..=high).contains(&expr.eval(operands)),
            Condition::All(conditions) => conditions.iter().all(|c| c.matches(operands)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.matches(operands)),
        }
    }

    /// Render as a Rust boolean expression.
    pub fn to_rust(&self) -> String {
        match *self {
            Condition::Eq(expr, value) => format!("{} == {}", expr.to_rust(), value),
            Condition::Ne(expr, value) => format!("{} != {}", expr.to_rust(), value),
            Condition::In(expr, low, high) => {
                format!("({}..={}).contains(&({}))", low, high, expr.to_rust())
            }
            Condition::NotIn(expr, low, high) => {
                format!("!({}..={}).contains(&({}))", low, high, expr.to_rust())
            }
            Condition::All(conditions) => join_nested(conditions, " && "),
            Condition::Any(conditions) => join_nested(conditions, " || "),
        }
    }
}

fn join_nested(conditions: &[Condition], separator: &str) -> String {
    conditions
        .iter()
        .map(|condition| match condition {
            Condition::All(_) | Condition::Any(_) => format!("({})", condition.to_rust()),
            _ => condition.to_rust(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Ordered category conditions for one language family.
#[derive(Debug, PartialEq, Eq)]
pub struct PluralRule {
    pub name: &'static str,
    pub cases: &'static [(PluralCategory, Condition)],
}

impl PluralRule {
    pub fn categorize(&self, operands: &PluralOperands) -> PluralCategory {
        self.cases
            .iter()
            .find(|(_, condition)| condition.matches(operands))
            .map(|(category, _)| *category)
            .unwrap_or(PluralCategory::Other)
    }

    /// Categories this rule can syntactically produce, `other` included.
    pub fn categories(&self) -> Vec<PluralCategory> {
        let mut categories: Vec<PluralCategory> =
            self.cases.iter().map(|(category, _)| *category).collect();
        if !categories.contains(&PluralCategory::Other) {
            categories.push(PluralCategory::Other);
        }
        categories
    }
}

/// English and Swedish: `one` when `i = 0 and v = 0`.
pub static ONE_IF_NO_DIGITS: PluralRule = PluralRule {
    name: "one_if_no_digits",
    cases: &[(
        PluralCategory::One,
        Condition::All(&[
            Condition::Eq(Expr::Operand(Operand::I), 0),
            Condition::Eq(Expr::Operand(Operand::V), 0),
        ]),
    )],
};

/// Russian-style rules, all guarded by `v = 0`.
pub static SLAVIC: PluralRule = PluralRule {
    name: "slavic",
    cases: &[
        (
            PluralCategory::One,
            Condition::All(&[
                Condition::Eq(Expr::Operand(Operand::V), 0),
                Condition::Eq(Expr::Mod(Operand::I, 10), 1),
                Condition::Ne(Expr::Mod(Operand::I, 100), 11),
            ]),
        ),
        (
            PluralCategory::Few,
            Condition::All(&[
                Condition::Eq(Expr::Operand(Operand::V), 0),
                Condition::In(Expr::Mod(Operand::I, 10), 2, 4),
                Condition::NotIn(Expr::Mod(Operand::I, 100), 12, 14),
            ]),
        ),
        (
            PluralCategory::Many,
            Condition::All(&[
                Condition::Eq(Expr::Operand(Operand::V), 0),
                Condition::Any(&[
                    Condition::Eq(Expr::Mod(Operand::I, 10), 0),
                    Condition::In(Expr::Mod(Operand::I, 10), 5, 9),
                    Condition::In(Expr::Mod(Operand::I, 100), 11, 14),
                ]),
            ]),
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_simple_conjunction() {
        let (_, condition) = ONE_IF_NO_DIGITS.cases[0];
        assert_eq!(condition.to_rust(), "i == 0 && v == 0");
    }

    #[test]
    fn test_render_nested_disjunction() {
        let (category, condition) = SLAVIC.cases[2];
        assert_eq!(category, PluralCategory::Many);
        assert_eq!(
            condition.to_rust(),
            "v == 0 && (i % 10 == 0 || (5..=9).contains(&(i % 10)) || (11..=14).contains(&(i % 100)))"
        );
    }

    #[test]
    fn test_render_negated_range() {
        let (_, condition) = SLAVIC.cases[1];
        assert_eq!(
            condition.to_rust(),
            "v == 0 && (2..=4).contains(&(i % 10)) && !(12..=14).contains(&(i % 100))"
        );
    }

    #[test]
    fn test_categories_include_other() {
        assert_eq!(
            ONE_IF_NO_DIGITS.categories(),
            vec![PluralCategory::One, PluralCategory::Other]
        );
        assert_eq!(
            SLAVIC.categories(),
            vec![
                PluralCategory::One,
                PluralCategory::Few,
                PluralCategory::Many,
                PluralCategory::Other
            ]
        );
    }

    #[test]
    fn test_fallthrough_is_other() {
        let operands = PluralOperands {
            n: 3,
            i: 1,
            v: 1,
            w: 0,
        };
        assert_eq!(SLAVIC.categorize(&operands), PluralCategory::Other);
    }
}

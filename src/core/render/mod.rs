//! Renders the intermediate model as Rust source.
//!
//! The output is a pure function of the model: modules, functions, locale
//! branches and categories are emitted in the order they were recorded.
//! Locales and categories without an explicit branch are grouped into one
//! catch-all arm per `match`. Outside the baseline that arm calls the same
//! function again with the baseline locale; inside the baseline it returns
//! the baseline's `other` text, so a fallback never takes more than one hop.

mod writer;

pub use writer::CodeWriter;

use crate::core::{
    Argument, CategoryBranch, GeneratedFunction, GeneratedModule, Locale, LocaleBranch,
    PluralCategory, Text,
    model::missing_categories,
    placeholder::{self, Segment},
    plural::Operand,
};

pub const DEFAULT_INDENT_WIDTH: usize = 4;

const HEADER: &str = "// @generated by locgen. Do not edit by hand.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    indent_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl Renderer {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Render a complete source file: header, prelude and every module.
    pub fn render(&self, modules: &[GeneratedModule]) -> String {
        let mut w = CodeWriter::new(self.indent_width);
        w.line(HEADER);
        w.blank();
        write_prelude(&mut w);
        for module in modules {
            w.blank();
            write_module(&mut w, module);
        }
        w.finish()
    }

    /// The shared `Locale`/`PluralCategory` definitions on their own.
    pub fn render_prelude(&self) -> String {
        let mut w = CodeWriter::new(self.indent_width);
        write_prelude(&mut w);
        w.finish()
    }

    pub fn render_function(&self, function: &GeneratedFunction) -> String {
        let mut w = CodeWriter::new(self.indent_width);
        write_function(&mut w, function);
        w.finish()
    }
}

fn write_prelude(w: &mut CodeWriter) {
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.block("pub enum Locale {", "}", |w| {
        for locale in Locale::ALL {
            w.line(format!("{},", locale.variant()));
        }
    });
    w.blank();
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.block("pub enum PluralCategory {", "}", |w| {
        for category in PluralCategory::ALL {
            w.line(format!("{},", category.variant()));
        }
    });
    w.blank();
    w.block("impl Locale {", "}", |w| {
        w.line(format!(
            "/// Resolve an ISO code by its language subtag; unknown codes map to `{}`.",
            locale_path(Locale::BASELINE)
        ));
        w.block("pub fn from_iso(code: &str) -> Locale {", "}", |w| {
            w.line("let language = code.split(['-', '_']).next().unwrap_or(code);");
            w.block("match language.to_ascii_lowercase().as_str() {", "}", |w| {
                for locale in Locale::ALL {
                    w.line(format!(
                        "\"{}\" => {},",
                        locale.language(),
                        locale_path(locale)
                    ));
                }
                w.line(format!("_ => {},", locale_path(Locale::BASELINE)));
            });
        });
        w.blank();
        write_plural_category_fn(w);
    });
}

/// Print the plural rule table as a method on the generated `Locale`.
fn write_plural_category_fn(w: &mut CodeWriter) {
    w.line("#[allow(unused_variables)]");
    w.block(
        "pub fn plural_category(self, quantity: i64) -> PluralCategory {",
        "}",
        |w| {
            for operand in Operand::ALL {
                let value = match operand {
                    Operand::N => "quantity.unsigned_abs()",
                    Operand::I => "n.to_string().len() as u64",
                    Operand::V | Operand::W => "0",
                };
                w.line(format!("let {}: u64 = {};", operand.ident(), value));
            }

            // Locales sharing a rule share an arm, in declaration order.
            let mut groups: Vec<(&'static str, Vec<Locale>)> = Vec::new();
            for locale in Locale::ALL {
                let rule = locale.plural_rule();
                match groups.iter_mut().find(|(name, _)| *name == rule.name) {
                    Some((_, locales)) => locales.push(locale),
                    None => groups.push((rule.name, vec![locale])),
                }
            }

            w.block("match self {", "}", |w| {
                for (_, locales) in &groups {
                    let pattern = locales
                        .iter()
                        .map(|l| locale_path(*l))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    let rule = locales[0].plural_rule();
                    w.block(format!("{} => {{", pattern), "}", |w| {
                        for (category, condition) in rule.cases {
                            w.block(format!("if {} {{", condition.to_rust()), "}", |w| {
                                w.line(format!("return {};", category_path(*category)));
                            });
                        }
                        w.line(category_path(PluralCategory::Other));
                    });
                }
            });
        },
    );
}

fn write_module(w: &mut CodeWriter, module: &GeneratedModule) {
    w.block(format!("pub mod {} {{", module.name), "}", |w| {
        if module.functions.is_empty() {
            w.line("#[allow(unused_imports)]");
        }
        w.line("use super::*;");
        for function in &module.functions {
            w.blank();
            write_function(w, function);
        }
        for child in &module.children {
            w.blank();
            write_module(w, child);
        }
    });
}

fn write_function(w: &mut CodeWriter, function: &GeneratedFunction) {
    let key = function.key_name.replace(['\n', '\r'], " ");
    if function.char_limit > 0 {
        w.line(format!(
            "/// `{}` (at most {} characters)",
            key, function.char_limit
        ));
    } else {
        w.line(format!("/// `{}`", key));
    }

    let parameters = function
        .arguments
        .iter()
        .map(|a| format!("{}: {}", a.name, a.kind.rust_type()))
        .chain(std::iter::once("locale: Locale".to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    let fallback = fallback_call(&function.name, &function.arguments);

    w.block(
        format!("pub fn {}({}) -> String {{", function.name, parameters),
        "}",
        |w| {
            w.block("match locale {", "}", |w| {
                for branch in &function.locale_branches {
                    write_locale_branch(w, branch, &fallback);
                }
                let missing = function.missing_locales();
                if !missing.is_empty() {
                    w.line(format!("{} => {},", locale_pattern(&missing), fallback));
                }
            });
        },
    );
}

fn write_locale_branch(w: &mut CodeWriter, branch: &LocaleBranch, fallback: &str) {
    match branch {
        LocaleBranch::Singular { locale, text } => {
            w.line(format!("{} => {},", locale_path(*locale), text_expr(text)));
        }
        LocaleBranch::Plural {
            locale,
            quantity,
            categories,
        } => {
            w.block(
                format!(
                    "{} => match locale.plural_category({}) {{",
                    locale_path(*locale),
                    quantity
                ),
                "},",
                |w| {
                    for branch in categories {
                        w.line(format!(
                            "{} => {},",
                            category_path(branch.category),
                            text_expr(&branch.text)
                        ));
                    }
                    let missing = missing_categories(categories);
                    if !missing.is_empty() {
                        let target = if locale.is_baseline() {
                            baseline_other(categories)
                                .map(text_expr)
                                .unwrap_or_else(|| fallback.to_string())
                        } else {
                            fallback.to_string()
                        };
                        w.line(format!("{} => {},", category_pattern(&missing), target));
                    }
                },
            );
        }
    }
}

fn baseline_other(categories: &[CategoryBranch]) -> Option<&Text> {
    categories
        .iter()
        .find(|branch| branch.category == PluralCategory::Other)
        .map(|branch| &branch.text)
}

/// Call to the same function with the baseline locale and the original
/// arguments. `self::` keeps the call unambiguous when an argument shares
/// the function's name.
fn fallback_call(name: &str, arguments: &[Argument]) -> String {
    let arguments = arguments
        .iter()
        .map(|a| a.name.clone())
        .chain(std::iter::once(locale_path(Locale::BASELINE)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("self::{}({})", name, arguments)
}

/// Expression producing `text` with placeholders interpolated.
pub fn text_expr(text: &Text) -> String {
    let mut format = String::new();
    let mut arguments = Vec::new();
    for segment in placeholder::segments(text.as_str()) {
        match segment {
            Segment::Literal(literal) => escape_into(&mut format, literal, true),
            Segment::Placeholder(placeholder) => {
                format.push_str("{}");
                arguments.push(placeholder.name);
            }
        }
    }

    if arguments.is_empty() {
        let mut literal = String::new();
        escape_into(&mut literal, text.as_str(), false);
        format!("String::from(\"{}\")", literal)
    } else {
        format!("format!(\"{}\", {})", format, arguments.join(", "))
    }
}

fn escape_into(out: &mut String, text: &str, format_string: bool) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '{' if format_string => out.push_str("{{"),
            '}' if format_string => out.push_str("}}"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
}

fn locale_path(locale: Locale) -> String {
    format!("Locale::{}", locale.variant())
}

fn category_path(category: PluralCategory) -> String {
    format!("PluralCategory::{}", category.variant())
}

fn locale_pattern(locales: &[Locale]) -> String {
    locales
        .iter()
        .map(|l| locale_path(*l))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn category_pattern(categories: &[PluralCategory]) -> String {
    categories
        .iter()
        .map(|c| category_path(*c))
        .collect::<Vec<_>>()
        .join(" | ")
}

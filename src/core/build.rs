//! Intermediate model builder.
//!
//! Turns one project and its (already filtered) keys into a tree of
//! [`GeneratedModule`]s. Keys are built independently: a key that fails
//! contributes a [`BuildError`] and no function, while the remaining keys
//! are still placed in the tree. Whether a run with errors may be written
//! out is decided by the caller (see `pipeline`).

use serde_json::{Map, Value};

use crate::core::{
    Argument, ArgumentKind, CategoryBranch, GeneratedFunction, GeneratedModule, Locale,
    LocaleBranch, PluralCategory, Project, Text, TranslationKey,
    model::missing_categories,
    placeholder,
    placement::{Placement, SeparatorPlacement},
};
use crate::issues::{BuildError, BuildErrorKind, BuildWarning, BuildWarningKind, CoverageGap};

/// Name of the quantity argument added to plural keys without integer
/// placeholders.
pub const DEFAULT_QUANTITY_ARGUMENT: &str = "count";

/// Name of the locale parameter every generated function takes.
pub const LOCALE_PARAMETER: &str = "locale";

/// Result of building one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub modules: Vec<GeneratedModule>,
    pub errors: Vec<BuildError>,
    pub warnings: Vec<BuildWarning>,
}

impl BuildOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn function_count(&self) -> usize {
        self.modules.iter().map(GeneratedModule::function_count).sum()
    }
}

pub struct Builder<'a> {
    placement: &'a dyn Placement,
}

impl<'a> Builder<'a> {
    pub fn new(placement: &'a dyn Placement) -> Self {
        Self { placement }
    }

    pub fn build(&self, project: &Project, keys: &[TranslationKey]) -> BuildOutput {
        let mut root = GeneratedModule::new(vec![project_module_name(project)]);
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for key in keys {
            let mut key_warnings = Vec::new();
            let function = match build_function(key, &mut key_warnings) {
                Ok(function) => function,
                Err(kind) => {
                    tracing::debug!(key = %key.name, rule = %kind.rule(), "key rejected");
                    errors.push(BuildError::new(&key.name, kind));
                    continue;
                }
            };

            let placed = self.placement.place(&key.name);
            let module = root.descendant_mut(&placed.modules);
            if module.functions.iter().any(|f| f.name == placed.function) {
                errors.push(BuildError::new(
                    &key.name,
                    BuildErrorKind::DuplicateFunction {
                        function: placed.function,
                        module: module.path.join("::"),
                    },
                ));
                continue;
            }

            tracing::trace!(
                key = %key.name,
                function = %placed.function,
                module = %module.path.join("::"),
                "placed function"
            );
            module.functions.push(GeneratedFunction {
                name: placed.function,
                ..function
            });
            warnings.extend(key_warnings);
        }

        BuildOutput {
            modules: vec![root],
            errors,
            warnings,
        }
    }
}

/// Build with the default placement (keys split on `.`).
pub fn build(project: &Project, keys: &[TranslationKey]) -> BuildOutput {
    Builder::new(&SeparatorPlacement::default()).build(project, keys)
}

pub fn project_module_name(project: &Project) -> String {
    placeholder::to_identifier(&project.name)
}

/// A decoded translation before placeholders are resolved.
enum Content {
    Singular(String),
    Plural(Vec<(PluralCategory, String)>),
}

impl Content {
    fn texts(&self) -> Vec<&str> {
        match self {
            Content::Singular(text) => vec![text.as_str()],
            Content::Plural(forms) => forms.iter().map(|(_, text)| text.as_str()).collect(),
        }
    }
}

fn build_function(
    key: &TranslationKey,
    warnings: &mut Vec<BuildWarning>,
) -> Result<GeneratedFunction, BuildErrorKind> {
    let contents = decode_translations(key, warnings)?;
    let mut arguments = collect_arguments(&contents)?;

    // Empty for singular keys; plural content is only decoded for plural keys.
    let quantity = if key.is_plural {
        resolve_quantity(key, &mut arguments)?
    } else {
        String::new()
    };

    let locale_branches = contents
        .into_iter()
        .map(|(locale, content)| match content {
            Content::Singular(text) => LocaleBranch::Singular {
                locale,
                text: Text(text),
            },
            Content::Plural(forms) => LocaleBranch::Plural {
                locale,
                quantity: quantity.clone(),
                categories: forms
                    .into_iter()
                    .map(|(category, text)| CategoryBranch {
                        category,
                        text: Text(text),
                    })
                    .collect(),
            },
        })
        .collect();

    let function = GeneratedFunction {
        name: placeholder::to_identifier(&key.name),
        key_name: key.name.clone(),
        char_limit: key.char_limit,
        arguments,
        locale_branches,
    };
    check_baseline_coverage(&function, &key.name, warnings)?;
    Ok(function)
}

/// Decode every translation of `key` into at most one content per locale.
///
/// Unsupported languages and repeated locales are skipped with a warning.
/// Empty texts count as absent.
fn decode_translations(
    key: &TranslationKey,
    warnings: &mut Vec<BuildWarning>,
) -> Result<Vec<(Locale, Content)>, BuildErrorKind> {
    let mut contents: Vec<(Locale, Content)> = Vec::new();

    for translation in &key.translations {
        let language = &translation.language_code;
        let Some(locale) = Locale::recognize(language) else {
            warnings.push(BuildWarning::new(
                &key.name,
                BuildWarningKind::UnsupportedLanguage {
                    language: language.clone(),
                },
            ));
            continue;
        };

        let content = if key.is_plural {
            decode_plural(language, &translation.value)?.map(Content::Plural)
        } else {
            decode_singular(language, &translation.value)?.map(Content::Singular)
        };
        let Some(content) = content else {
            continue;
        };

        if contents.iter().any(|(existing, _)| *existing == locale) {
            warnings.push(BuildWarning::new(
                &key.name,
                BuildWarningKind::DuplicateLocale {
                    language: language.clone(),
                    locale,
                },
            ));
            continue;
        }
        contents.push((locale, content));
    }

    Ok(contents)
}

fn decode_singular(language: &str, value: &Value) -> Result<Option<String>, BuildErrorKind> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) if text.is_empty() => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        other => Err(BuildErrorKind::MalformedValue {
            language: language.to_string(),
            detail: format!("expected text, found {}", json_type(other)),
        }),
    }
}

fn decode_plural(
    language: &str,
    value: &Value,
) -> Result<Option<Vec<(PluralCategory, String)>>, BuildErrorKind> {
    let malformed = |detail: String| BuildErrorKind::MalformedValue {
        language: language.to_string(),
        detail,
    };

    let parsed;
    let map: &Map<String, Value> = match value {
        Value::Null => return Ok(None),
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::Object(map) => map,
        Value::String(text) => {
            parsed = serde_json::from_str::<Map<String, Value>>(text)
                .map_err(|e| malformed(format!("expected a category mapping ({})", e)))?;
            &parsed
        }
        other => {
            return Err(malformed(format!(
                "expected a category mapping, found {}",
                json_type(other)
            )));
        }
    };

    let mut forms = Vec::with_capacity(map.len());
    for (name, text) in map {
        let Some(category) = PluralCategory::from_name(name) else {
            return Err(BuildErrorKind::UnknownPluralCategory {
                language: language.to_string(),
                category: name.clone(),
            });
        };
        match text {
            Value::Null => {}
            Value::String(text) if text.is_empty() => {}
            Value::String(text) => forms.push((category, text.clone())),
            other => {
                return Err(malformed(format!(
                    "'{}' form should be text, found {}",
                    name,
                    json_type(other)
                )));
            }
        }
    }

    Ok((!forms.is_empty()).then_some(forms))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Union of placeholder names across all texts, in first-seen order.
fn collect_arguments(contents: &[(Locale, Content)]) -> Result<Vec<Argument>, BuildErrorKind> {
    let mut arguments: Vec<Argument> = Vec::new();
    for (_, content) in contents {
        for text in content.texts() {
            for found in placeholder::scan(text) {
                if found.name == LOCALE_PARAMETER {
                    return Err(BuildErrorKind::ReservedArgumentName {
                        argument: found.raw_name,
                    });
                }
                match arguments.iter().find(|a| a.name == found.name) {
                    Some(existing) if existing.kind != found.kind => {
                        return Err(BuildErrorKind::ArgumentKindConflict {
                            argument: found.name,
                            first: existing.kind,
                            second: found.kind,
                        });
                    }
                    Some(_) => {}
                    None => arguments.push(Argument {
                        name: found.name,
                        kind: found.kind,
                    }),
                }
            }
        }
    }
    Ok(arguments)
}

/// Pick the integer argument that drives plural selection.
///
/// An explicit `plural_argument` wins and is added when no placeholder uses
/// it. Otherwise the only integer argument is used, or `count` is added when
/// there is none. Several undesignated integer arguments are ambiguous.
fn resolve_quantity(
    key: &TranslationKey,
    arguments: &mut Vec<Argument>,
) -> Result<String, BuildErrorKind> {
    if let Some(designated) = &key.plural_argument {
        let name = placeholder::to_identifier(designated);
        if name == LOCALE_PARAMETER {
            return Err(BuildErrorKind::ReservedArgumentName {
                argument: designated.clone(),
            });
        }
        match arguments.iter().find(|a| a.name == name) {
            Some(existing) if existing.kind != ArgumentKind::Integer => {
                return Err(BuildErrorKind::ArgumentKindConflict {
                    argument: name,
                    first: existing.kind,
                    second: ArgumentKind::Integer,
                });
            }
            Some(_) => {}
            None => arguments.push(Argument {
                name: name.clone(),
                kind: ArgumentKind::Integer,
            }),
        }
        return Ok(name);
    }

    let integers: Vec<String> = arguments
        .iter()
        .filter(|a| a.kind == ArgumentKind::Integer)
        .map(|a| a.name.clone())
        .collect();
    match integers.as_slice() {
        [] => {
            if let Some(existing) = arguments.iter().find(|a| a.name == DEFAULT_QUANTITY_ARGUMENT) {
                return Err(BuildErrorKind::ArgumentKindConflict {
                    argument: existing.name.clone(),
                    first: existing.kind,
                    second: ArgumentKind::Integer,
                });
            }
            arguments.push(Argument {
                name: DEFAULT_QUANTITY_ARGUMENT.to_string(),
                kind: ArgumentKind::Integer,
            });
            Ok(DEFAULT_QUANTITY_ARGUMENT.to_string())
        }
        [only] => Ok(only.clone()),
        several => Err(BuildErrorKind::MissingQuantityDesignation {
            candidates: several.to_vec(),
        }),
    }
}

/// Make sure every fallback chain ends at an explicit baseline text.
fn check_baseline_coverage(
    function: &GeneratedFunction,
    key_name: &str,
    warnings: &mut Vec<BuildWarning>,
) -> Result<(), BuildErrorKind> {
    let Some(baseline) = function.branch(Locale::BASELINE) else {
        return Err(BuildErrorKind::IncompleteBaselineCoverage {
            reason: CoverageGap::MissingTranslation,
        });
    };

    if let LocaleBranch::Plural { categories, .. } = baseline {
        let missing = missing_categories(categories);
        if missing.is_empty() {
            return Ok(());
        }
        if missing.contains(&PluralCategory::Other) {
            return Err(BuildErrorKind::IncompleteBaselineCoverage {
                reason: CoverageGap::MissingOtherForm,
            });
        }
        let reachable: Vec<PluralCategory> = Locale::BASELINE
            .plural_rule()
            .categories()
            .into_iter()
            .filter(|category| missing.contains(category))
            .collect();
        if !reachable.is_empty() {
            warnings.push(BuildWarning::new(
                key_name,
                BuildWarningKind::BaselineMissingCategory {
                    categories: reachable,
                },
            ));
        }
    }
    Ok(())
}

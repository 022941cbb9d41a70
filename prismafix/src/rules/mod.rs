//! Rewrite rules and the two rule groups the codemod runs.
//!
//! A [`Rule`] is an immutable (pattern, replacement) pair. Rules are grouped
//! into [`RuleGroup`]s that apply them in declaration order, each rule seeing
//! the output of the previous one. Groups are pure: they take text and
//! return text, file I/O lives in `commands`.

use crate::constants::{
    DEFAULT_ENUM_REPLACEMENTS, DEFAULT_ENUM_SYMBOLS, DEFAULT_FALLBACK_TYPE, DEFAULT_MODULE,
};
use crate::fix::{ByteRangeRewriter, Edit, RewriteError};
use regex::Regex;

pub mod annotations;
pub mod enums;

pub use annotations::annotation_rules;
pub use enums::enum_rules;

/// Errors raised while building rules from configuration.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A generated pattern failed to compile.
    #[error("invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        /// Name of the rule being built.
        rule: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// A user-supplied enum or value name is not a plain identifier.
    #[error("invalid {kind} name '{name}': expected an identifier")]
    InvalidIdentifier {
        /// What was being named ("enum" or "enum value").
        kind: &'static str,
        /// The offending name.
        name: String,
    },
}

/// The two independent rule groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FixCategory {
    /// Enum import removal and enum token substitution.
    Enums,
    /// Callback parameter annotation.
    Types,
}

impl FixCategory {
    /// Console tag printed in front of per-file notices.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Enums => "[ENUMS]",
            Self::Types => "[TYPES]",
        }
    }
}

#[derive(Debug, Clone)]
enum Pattern {
    Literal(String),
    Regex(Regex),
}

/// A single rewrite rule.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Pattern,
    /// Literal text, or a capture template (`${1}`) for regex rules.
    replacement: String,
}

impl Rule {
    /// Exact substring replacement.
    #[must_use]
    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        Self {
            name: from.clone(),
            pattern: Pattern::Literal(from),
            replacement: to.into(),
        }
    }

    /// Regex substitution with a capture template.
    pub fn regex(
        name: impl Into<String>,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let re = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            rule: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            pattern: Pattern::Regex(re),
            replacement: template.into(),
        })
    }

    /// Human-readable rule name used in verbose logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edits this rule makes to `source`.
    ///
    /// Literal rules match every non-overlapping occurrence left to right;
    /// regex rules match every non-overlapping leftmost-first match.
    #[must_use]
    pub fn edits(&self, source: &str) -> Vec<Edit> {
        match &self.pattern {
            Pattern::Literal(from) => {
                if from.is_empty() {
                    return Vec::new();
                }
                source
                    .match_indices(from.as_str())
                    .map(|(start, m)| {
                        Edit::with_description(
                            start,
                            start + m.len(),
                            self.replacement.as_str(),
                            self.name.as_str(),
                        )
                    })
                    .filter(|edit| !edit.is_noop(source))
                    .collect()
            }
            Pattern::Regex(re) => re
                .captures_iter(source)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let mut expanded = String::new();
                    caps.expand(&self.replacement, &mut expanded);
                    Some(Edit::with_description(
                        whole.start(),
                        whole.end(),
                        expanded,
                        self.name.as_str(),
                    ))
                })
                .filter(|edit| !edit.is_noop(source))
                .collect(),
        }
    }
}

/// How many edits one rule made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// Rule name.
    pub rule: String,
    /// Number of edits applied.
    pub edits: usize,
}

/// Result of running a rule group over a buffer that changed.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// Rewritten content.
    pub content: String,
    /// Rules that fired, in application order.
    pub hits: Vec<RuleHit>,
}

impl Rewrite {
    /// Total edits across all rules.
    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.hits.iter().map(|h| h.edits).sum()
    }
}

/// An ordered list of rules belonging to one category.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    category: FixCategory,
    rules: Vec<Rule>,
}

impl RuleGroup {
    /// Create a group; rules run in the given order.
    #[must_use]
    pub fn new(category: FixCategory, rules: Vec<Rule>) -> Self {
        Self { category, rules }
    }

    /// Category of this group.
    #[must_use]
    pub fn category(&self) -> FixCategory {
        self.category
    }

    /// Rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply every rule in order. Returns `None` when the result is
    /// byte-for-byte identical to `source`.
    pub fn apply(&self, source: &str) -> Result<Option<Rewrite>, RewriteError> {
        let mut buffer = source.to_owned();
        let mut hits = Vec::new();

        for rule in &self.rules {
            let mut rewriter = ByteRangeRewriter::new(buffer.as_str());
            rewriter.add_edits(rule.edits(&buffer));
            if !rewriter.has_edits() {
                continue;
            }
            let count = rewriter.edit_count();
            buffer = rewriter.apply()?;
            hits.push(RuleHit {
                rule: rule.name().to_owned(),
                edits: count,
            });
        }

        if buffer == source {
            return Ok(None);
        }
        Ok(Some(Rewrite {
            content: buffer,
            hits,
        }))
    }
}

/// Lookup tables the rule groups are generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    /// Module specifier whose imports are stripped.
    pub module: String,
    /// Enum names whose imports are removed, in order.
    pub enum_symbols: Vec<String>,
    /// `(token, literal)` pairs, in application order.
    pub replacements: Vec<(String, String)>,
    /// Type name used for annotations and the request-error fallback.
    pub fallback_type: String,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_owned(),
            enum_symbols: DEFAULT_ENUM_SYMBOLS.iter().map(|&s| s.to_owned()).collect(),
            replacements: DEFAULT_ENUM_REPLACEMENTS
                .iter()
                .map(|&(from, to)| (from.to_owned(), to.to_owned()))
                .collect(),
            fallback_type: DEFAULT_FALLBACK_TYPE.to_owned(),
        }
    }
}

impl RuleTables {
    /// Register an additional enum: its import is stripped and each
    /// `Enum.VALUE` becomes `"VALUE"`. Appended after the built-in entries.
    pub fn add_enum(&mut self, name: &str, values: &[String]) -> Result<(), RuleError> {
        if !is_identifier(name) {
            return Err(RuleError::InvalidIdentifier {
                kind: "enum",
                name: name.to_owned(),
            });
        }
        if let Some(bad) = values.iter().find(|v| !is_identifier(v)) {
            return Err(RuleError::InvalidIdentifier {
                kind: "enum value",
                name: bad.clone(),
            });
        }

        if !self.enum_symbols.iter().any(|s| s == name) {
            self.enum_symbols.push(name.to_owned());
        }
        for value in values {
            let token = format!("{name}.{value}");
            if !self.replacements.iter().any(|(from, _)| *from == token) {
                self.replacements.push((token, format!("\"{value}\"")));
            }
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Escape `$` so text can be used verbatim inside a regex template.
pub(crate) fn escape_template(text: &str) -> String {
    text.replace('$', "$$")
}

/// Both rule groups, built once per run.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Symbol-substitution group.
    pub enums: RuleGroup,
    /// Annotation-insertion group.
    pub annotations: RuleGroup,
}

impl RuleSet {
    /// Build both groups from lookup tables.
    pub fn new(tables: &RuleTables) -> Result<Self, RuleError> {
        Ok(Self {
            enums: enum_rules(tables)?,
            annotations: annotation_rules(&tables.fallback_type)?,
        })
    }

    /// The group for a category.
    #[must_use]
    pub fn group(&self, category: FixCategory) -> &RuleGroup {
        match category {
            FixCategory::Enums => &self.enums,
            FixCategory::Types => &self.annotations,
        }
    }
}

//! Annotation-insertion rules.
//!
//! Adds an explicit type to bare callback parameters:
//! `.map((item) => ...)` becomes `.map((item: any) => ...)`.
//! Matching is lexical, so a shape inside a string or comment is rewritten
//! too. Annotated parameters never match again.

use super::{escape_template, FixCategory, Rule, RuleError, RuleGroup};
use crate::constants::SINGLE_PARAM_CALLBACKS;

/// Build the annotation group. `fallback_type` is the inserted type name.
pub fn annotation_rules(fallback_type: &str) -> Result<RuleGroup, RuleError> {
    let ty = escape_template(fallback_type);
    let mut rules = Vec::with_capacity(SINGLE_PARAM_CALLBACKS.len() + 2);

    rules.push(Rule::regex(
        "$transaction(async (x))",
        r"\$transaction\s*\(\s*async\s*\(\s*(\w+)\s*\)",
        format!("$$transaction(async (${{1}}: {ty})"),
    )?);

    for &(method, is_async) in SINGLE_PARAM_CALLBACKS {
        let (pattern_prefix, template_prefix, label) = if is_async {
            (r"async\s*", "async ", "async ")
        } else {
            ("", "", "")
        };
        rules.push(Rule::regex(
            format!(".{method}({label}(x))"),
            &format!(r"\.{method}\s*\(\s*{pattern_prefix}\(\s*(\w+)\s*\)"),
            format!(".{method}({template_prefix}(${{1}}: {ty})"),
        )?);
    }

    rules.push(Rule::regex(
        ".sort((a, b))",
        r"\.sort\s*\(\s*\(\s*(\w+),\s*(\w+)\s*\)",
        format!(".sort((${{1}}: {ty}, ${{2}}: {ty})"),
    )?);

    Ok(RuleGroup::new(FixCategory::Types, rules))
}

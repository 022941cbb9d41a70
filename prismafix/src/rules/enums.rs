//! Symbol-substitution rules.
//!
//! Order within the group: import removal for each known enum, the
//! `Prisma` namespace import, every `Enum.VALUE` token, then the
//! known-request-error fallback.
//!
//! An import statement is removed as a whole when any of its braced names
//! contains a known enum name, even if it also lists names that are still
//! needed. The namespace rule likewise removes any braced import whose first
//! name starts with `Prisma`, including `PrismaClient`.

use super::{FixCategory, Rule, RuleError, RuleGroup, RuleTables};
use crate::constants::{KNOWN_REQUEST_ERROR, PRISMA_NAMESPACE};

/// Pattern for a braced import naming `symbol` anywhere in the list.
fn import_pattern(symbol: &str, module: &str) -> String {
    format!(
        r#"import\s*\{{\s*[^}}]*{}[^}}]*\}}\s*from\s*"{}";(?:\r?\n)?"#,
        regex::escape(symbol),
        regex::escape(module)
    )
}

/// Pattern for a braced import whose first name starts with `symbol`.
fn leading_import_pattern(symbol: &str, module: &str) -> String {
    format!(
        r#"import\s*\{{\s*{}[^}}]*\}}\s*from\s*"{}";(?:\r?\n)?"#,
        regex::escape(symbol),
        regex::escape(module)
    )
}

/// Build the symbol-substitution group from lookup tables.
pub fn enum_rules(tables: &RuleTables) -> Result<RuleGroup, RuleError> {
    let mut rules = Vec::with_capacity(tables.enum_symbols.len() + tables.replacements.len() + 2);

    for symbol in &tables.enum_symbols {
        rules.push(Rule::regex(
            format!("import {{ {symbol} }}"),
            &import_pattern(symbol, &tables.module),
            "",
        )?);
    }
    rules.push(Rule::regex(
        format!("import {{ {PRISMA_NAMESPACE}.. }}"),
        &leading_import_pattern(PRISMA_NAMESPACE, &tables.module),
        "",
    )?);

    for (from, to) in &tables.replacements {
        rules.push(Rule::literal(from.as_str(), to.as_str()));
    }

    rules.push(Rule::literal(
        KNOWN_REQUEST_ERROR,
        tables.fallback_type.as_str(),
    ));

    Ok(RuleGroup::new(FixCategory::Enums, rules))
}

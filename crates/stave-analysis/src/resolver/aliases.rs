//! Alias-table substitution.
//!
//! An alias table is an ordered list of rewrite rules loaded once per
//! session from the nearest project configuration. Patterns are either
//! literal (`@domain` -> `src/domain`) or carry a single wildcard
//! (`@pages/*` -> `src/pages/*`); the first matching rule wins and the
//! wildcard capture substitutes into the first target template.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use regex::Regex;

use super::ResolveError;

#[derive(Debug, Clone)]
struct AliasRule {
    pattern: String,
    targets: Vec<String>,
}

/// Ordered alias rewrite rules plus the project base directory the targets
/// are resolved against.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    base_dir: PathBuf,
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Empty table rooted at the project base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule (builder style). Rule order is match order.
    pub fn rule(
        mut self,
        pattern: impl Into<String>,
        targets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.add_rule(pattern, targets);
        self
    }

    /// Append a rule in place.
    pub fn add_rule(
        &mut self,
        pattern: impl Into<String>,
        targets: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.rules.push(AliasRule {
            pattern: pattern.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        });
    }

    /// Project base directory targets are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Apply the first matching rule, returning the base-dir-anchored path
    /// the specifier rewrites to. `Ok(None)` when no rule matches.
    ///
    /// A broken rule only errors for specifiers it matches, so one bad entry
    /// cannot take down every other alias in the table.
    pub(crate) fn substitute(&self, specifier: &str) -> Result<Option<PathBuf>, ResolveError> {
        for rule in &self.rules {
            if rule.pattern.contains('*') {
                let matcher = wildcard_regex(&rule.pattern)?;
                if let Some(captures) = matcher.captures(specifier) {
                    let target = self.first_target(rule)?;
                    let captured = captures.get(1).map_or("", |m| m.as_str());
                    let expanded = target.replacen('*', captured, 1);
                    return Ok(Some(self.base_dir.join(expanded).clean()));
                }
            } else if specifier == rule.pattern {
                let target = self.first_target(rule)?;
                return Ok(Some(self.base_dir.join(target).clean()));
            }
        }
        Ok(None)
    }

    fn first_target<'r>(&self, rule: &'r AliasRule) -> Result<&'r str, ResolveError> {
        rule.targets
            .first()
            .map(String::as_str)
            .ok_or_else(|| ResolveError::InvalidAlias {
                pattern: rule.pattern.clone(),
                reason: "alias rule has no targets".to_string(),
            })
    }
}

/// Compile `@pages/*` into `^@pages/(.*)$`, escaping the literal halves so
/// metacharacters in alias prefixes cannot corrupt the match.
fn wildcard_regex(pattern: &str) -> Result<Regex, ResolveError> {
    let Some((head, tail)) = pattern.split_once('*') else {
        return Err(ResolveError::InvalidAlias {
            pattern: pattern.to_string(),
            reason: "expected a wildcard".to_string(),
        });
    };
    if tail.contains('*') {
        return Err(ResolveError::InvalidAlias {
            pattern: pattern.to_string(),
            reason: "at most one wildcard is supported".to_string(),
        });
    }

    let source = format!("^{}(.*){}$", regex::escape(head), regex::escape(tail));
    Regex::new(&source).map_err(|err| ResolveError::InvalidAlias {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}

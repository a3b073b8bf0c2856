// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of stored rule configuration.
//!
//! The rule store keeps each rule as a loosely-typed record: an id, an
//! optional kind, an enabled flag, a map of numeric parameters and an
//! optional weight. This module turns those records into the typed rule
//! model and rejects records that contradict the catalogue.

use roster_domain::{DomainError, Rule, RuleConfig, RuleKind, RuleSet, rule_catalogue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// A rule as persisted by the rule editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfigRecord {
    /// Stable rule identifier.
    pub id: String,
    /// `hard` or `soft`. Checked against the catalogue when present.
    #[serde(default)]
    pub kind: Option<String>,
    /// Whether the rule is evaluated.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Named numeric parameters.
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
    /// Weight of a soft rule.
    #[serde(default)]
    pub weight: Option<f64>,
}

const fn enabled_by_default() -> bool {
    true
}

/// Rule record parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleConfigError {
    /// The kind is neither `hard` nor `soft`.
    #[error("Rule '{id}' has unknown kind '{kind}'")]
    UnknownKind { id: String, kind: String },

    /// The stored kind contradicts the catalogue.
    #[error("Rule '{id}' is a {expected} rule but was stored as {stored}")]
    KindMismatch {
        id: String,
        expected: RuleKind,
        stored: RuleKind,
    },

    /// The rule id is blank.
    #[error("Rule id must not be empty")]
    EmptyId,

    /// A parameter could not be used.
    #[error(transparent)]
    Parameter(#[from] DomainError),
}

fn parse_kind(id: &str, kind: &str) -> Result<RuleKind, RuleConfigError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "hard" => Ok(RuleKind::Hard),
        "soft" => Ok(RuleKind::Soft),
        _ => Err(RuleConfigError::UnknownKind {
            id: id.to_string(),
            kind: kind.to_string(),
        }),
    }
}

/// Parses one stored record.
///
/// Unknown ids parse successfully as `Rule::Unrecognized` and are later
/// ignored by the engine. Their stored kind is still checked for syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The id is blank
/// - The kind is not `hard` or `soft`, or contradicts the catalogue
/// - A parameter or weight is out of range
pub fn parse_rule_config(record: &RuleConfigRecord) -> Result<RuleConfig, RuleConfigError> {
    let id: &str = record.id.trim();
    if id.is_empty() {
        return Err(RuleConfigError::EmptyId);
    }

    let stored: Option<RuleKind> = record
        .kind
        .as_deref()
        .map(|kind| parse_kind(id, kind))
        .transpose()?;

    let rule: Rule = Rule::from_parts(id, &record.params, record.weight)?;

    let mismatch: Option<(RuleKind, RuleKind)> = stored
        .zip(rule.kind())
        .filter(|(stored, expected)| stored != expected);
    if let Some((stored, expected)) = mismatch {
        return Err(RuleConfigError::KindMismatch {
            id: id.to_string(),
            expected,
            stored,
        });
    }

    warn_unused_params(id, record);

    Ok(RuleConfig::new(rule, record.enabled))
}

/// Logs parameters a recognized rule does not read.
fn warn_unused_params(id: &str, record: &RuleConfigRecord) {
    let Some(definition) = rule_catalogue().iter().find(|definition| definition.id == id) else {
        return;
    };
    for name in record.params.keys() {
        if definition.param != Some(name.as_str()) {
            warn!(rule_id = id, param = %name, "Ignoring unknown rule parameter");
        }
    }
}

/// Parses a full rule configuration, preserving record order.
///
/// # Errors
///
/// Returns the first record error encountered.
pub fn parse_rule_set(records: &[RuleConfigRecord]) -> Result<RuleSet, RuleConfigError> {
    records
        .iter()
        .map(parse_rule_config)
        .collect::<Result<Vec<RuleConfig>, RuleConfigError>>()
        .map(RuleSet::new)
}

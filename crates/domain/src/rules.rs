// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule configuration model.
//!
//! Rules are configuration, not computation. Each recognized rule id maps
//! to one `Rule` variant carrying its typed parameters. Ids this version
//! does not know become `Rule::Unrecognized` and are ignored by the
//! engine, so a newer rule store never breaks an older engine.
//!
//! ## Recognized rules
//!
//! | id | kind | parameter | default |
//! |---|---|---|---|
//! | `max_consecutive_nights` | hard | `max_nights` | 3 |
//! | `max_night_shifts_per_week` | hard | `max_shifts` | 4 |
//! | `min_rest_hours_between_shifts` | hard | `min_hours` | 11 |
//! | `max_consecutive_work_days` | hard | `max_days` | 6 |
//! | `no_blackout_assignments` | hard | none | - |
//! | `pinned_shifts_required` | hard | none | - |
//! | `employee_shift_preferences` | soft | `weight` | 1.0 |
//! | `balance_total_hours` | soft | `weight` | 1.0 |
//! | `avoid_split_weekends` | soft | `weight` | 1.0 |

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default `max_nights` for `max_consecutive_nights`.
pub const DEFAULT_MAX_CONSECUTIVE_NIGHTS: u32 = 3;
/// Default `max_shifts` for `max_night_shifts_per_week`.
pub const DEFAULT_MAX_NIGHT_SHIFTS_PER_WEEK: u32 = 4;
/// Default `min_hours` for `min_rest_hours_between_shifts`.
pub const DEFAULT_MIN_REST_HOURS: u32 = 11;
/// Default `max_days` for `max_consecutive_work_days`.
pub const DEFAULT_MAX_CONSECUTIVE_WORK_DAYS: u32 = 6;
/// Default weight of every soft rule.
pub const DEFAULT_SOFT_WEIGHT: f64 = 1.0;

const MAX_CONSECUTIVE_NIGHTS: &str = "max_consecutive_nights";
const MAX_NIGHT_SHIFTS_PER_WEEK: &str = "max_night_shifts_per_week";
const MIN_REST_HOURS_BETWEEN_SHIFTS: &str = "min_rest_hours_between_shifts";
const MAX_CONSECUTIVE_WORK_DAYS: &str = "max_consecutive_work_days";
const NO_BLACKOUT_ASSIGNMENTS: &str = "no_blackout_assignments";
const PINNED_SHIFTS_REQUIRED: &str = "pinned_shifts_required";
const EMPLOYEE_SHIFT_PREFERENCES: &str = "employee_shift_preferences";
const BALANCE_TOTAL_HOURS: &str = "balance_total_hours";
const AVOID_SPLIT_WEEKENDS: &str = "avoid_split_weekends";

const WEIGHT_PARAM: &str = "weight";

/// Whether a rule constrains eligibility or only ranks candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Must never be violated. Failing it makes a candidate ineligible.
    Hard,
    /// Weighted preference used to rank eligible candidates.
    Soft,
}

impl RuleKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduling rule with its typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Caps a run of consecutive night shifts.
    MaxConsecutiveNights {
        /// Longest permitted run of nights.
        max_nights: u32,
    },
    /// Caps night shifts within one ISO week.
    MaxNightShiftsPerWeek {
        /// Most nights permitted per week.
        max_shifts: u32,
    },
    /// Requires a minimum gap between two shifts of the same employee.
    MinRestHoursBetweenShifts {
        /// Minimum rest in hours.
        min_hours: u32,
    },
    /// Caps a run of consecutive worked days.
    MaxConsecutiveWorkDays {
        /// Longest permitted run of worked days.
        max_days: u32,
    },
    /// Blocks assignment on dates covered by leave or blackout intervals.
    ///
    /// The engine enforces leave whether or not this rule is configured;
    /// the id names the check in rejection reports.
    NoBlackoutAssignments,
    /// Places pinned shifts before the general scan.
    PinnedShiftsRequired,
    /// Rewards candidates who prefer the slot's shift.
    EmployeeShiftPreferences {
        /// Relative influence on scoring.
        weight: f64,
    },
    /// Rewards candidates with fewer hours so far.
    BalanceTotalHours {
        /// Relative influence on scoring.
        weight: f64,
    },
    /// Penalizes working exactly one day of a weekend.
    AvoidSplitWeekends {
        /// Relative influence on scoring.
        weight: f64,
    },
    /// A rule id this version does not know. Never evaluated.
    Unrecognized {
        /// The unknown id, kept for reporting.
        id: String,
    },
}

impl Rule {
    /// Builds a rule from its stored id, parameter map and weight.
    ///
    /// Missing parameters fall back to the catalogue defaults. Unknown ids
    /// produce `Rule::Unrecognized`.
    ///
    /// # Arguments
    ///
    /// * `id` - The stored rule identifier
    /// * `params` - Named numeric parameters
    /// * `weight` - Weight for soft rules (ignored for hard rules)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A count parameter is negative, fractional, non-finite or too large
    /// - A weight is negative or non-finite
    pub fn from_parts(
        id: &str,
        params: &BTreeMap<String, f64>,
        weight: Option<f64>,
    ) -> Result<Self, DomainError> {
        let rule: Self = match id {
            MAX_CONSECUTIVE_NIGHTS => Self::MaxConsecutiveNights {
                max_nights: count_param(id, params, "max_nights", DEFAULT_MAX_CONSECUTIVE_NIGHTS)?,
            },
            MAX_NIGHT_SHIFTS_PER_WEEK => Self::MaxNightShiftsPerWeek {
                max_shifts: count_param(
                    id,
                    params,
                    "max_shifts",
                    DEFAULT_MAX_NIGHT_SHIFTS_PER_WEEK,
                )?,
            },
            MIN_REST_HOURS_BETWEEN_SHIFTS => Self::MinRestHoursBetweenShifts {
                min_hours: count_param(id, params, "min_hours", DEFAULT_MIN_REST_HOURS)?,
            },
            MAX_CONSECUTIVE_WORK_DAYS => Self::MaxConsecutiveWorkDays {
                max_days: count_param(id, params, "max_days", DEFAULT_MAX_CONSECUTIVE_WORK_DAYS)?,
            },
            NO_BLACKOUT_ASSIGNMENTS => Self::NoBlackoutAssignments,
            PINNED_SHIFTS_REQUIRED => Self::PinnedShiftsRequired,
            EMPLOYEE_SHIFT_PREFERENCES => Self::EmployeeShiftPreferences {
                weight: soft_weight(id, params, weight)?,
            },
            BALANCE_TOTAL_HOURS => Self::BalanceTotalHours {
                weight: soft_weight(id, params, weight)?,
            },
            AVOID_SPLIT_WEEKENDS => Self::AvoidSplitWeekends {
                weight: soft_weight(id, params, weight)?,
            },
            _ => Self::Unrecognized { id: id.to_string() },
        };
        Ok(rule)
    }

    /// Returns the recognized rule with default parameters, if `id` is known.
    #[must_use]
    pub fn default_for(id: &str) -> Option<Self> {
        let rule: Self = match id {
            MAX_CONSECUTIVE_NIGHTS => Self::MaxConsecutiveNights {
                max_nights: DEFAULT_MAX_CONSECUTIVE_NIGHTS,
            },
            MAX_NIGHT_SHIFTS_PER_WEEK => Self::MaxNightShiftsPerWeek {
                max_shifts: DEFAULT_MAX_NIGHT_SHIFTS_PER_WEEK,
            },
            MIN_REST_HOURS_BETWEEN_SHIFTS => Self::MinRestHoursBetweenShifts {
                min_hours: DEFAULT_MIN_REST_HOURS,
            },
            MAX_CONSECUTIVE_WORK_DAYS => Self::MaxConsecutiveWorkDays {
                max_days: DEFAULT_MAX_CONSECUTIVE_WORK_DAYS,
            },
            NO_BLACKOUT_ASSIGNMENTS => Self::NoBlackoutAssignments,
            PINNED_SHIFTS_REQUIRED => Self::PinnedShiftsRequired,
            EMPLOYEE_SHIFT_PREFERENCES => Self::EmployeeShiftPreferences {
                weight: DEFAULT_SOFT_WEIGHT,
            },
            BALANCE_TOTAL_HOURS => Self::BalanceTotalHours {
                weight: DEFAULT_SOFT_WEIGHT,
            },
            AVOID_SPLIT_WEEKENDS => Self::AvoidSplitWeekends {
                weight: DEFAULT_SOFT_WEIGHT,
            },
            _ => return None,
        };
        Some(rule)
    }

    /// Returns the stable rule identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::MaxConsecutiveNights { .. } => MAX_CONSECUTIVE_NIGHTS,
            Self::MaxNightShiftsPerWeek { .. } => MAX_NIGHT_SHIFTS_PER_WEEK,
            Self::MinRestHoursBetweenShifts { .. } => MIN_REST_HOURS_BETWEEN_SHIFTS,
            Self::MaxConsecutiveWorkDays { .. } => MAX_CONSECUTIVE_WORK_DAYS,
            Self::NoBlackoutAssignments => NO_BLACKOUT_ASSIGNMENTS,
            Self::PinnedShiftsRequired => PINNED_SHIFTS_REQUIRED,
            Self::EmployeeShiftPreferences { .. } => EMPLOYEE_SHIFT_PREFERENCES,
            Self::BalanceTotalHours { .. } => BALANCE_TOTAL_HOURS,
            Self::AvoidSplitWeekends { .. } => AVOID_SPLIT_WEEKENDS,
            Self::Unrecognized { id } => id,
        }
    }

    /// Returns the rule kind, or `None` for unrecognized rules.
    #[must_use]
    pub const fn kind(&self) -> Option<RuleKind> {
        match self {
            Self::MaxConsecutiveNights { .. }
            | Self::MaxNightShiftsPerWeek { .. }
            | Self::MinRestHoursBetweenShifts { .. }
            | Self::MaxConsecutiveWorkDays { .. }
            | Self::NoBlackoutAssignments
            | Self::PinnedShiftsRequired => Some(RuleKind::Hard),
            Self::EmployeeShiftPreferences { .. }
            | Self::BalanceTotalHours { .. }
            | Self::AvoidSplitWeekends { .. } => Some(RuleKind::Soft),
            Self::Unrecognized { .. } => None,
        }
    }

    /// Returns the weight of a soft rule.
    #[must_use]
    pub const fn weight(&self) -> Option<f64> {
        match self {
            Self::EmployeeShiftPreferences { weight }
            | Self::BalanceTotalHours { weight }
            | Self::AvoidSplitWeekends { weight } => Some(*weight),
            _ => None,
        }
    }

    /// Returns whether this version knows the rule.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }
}

/// Reads a non-negative integral parameter, falling back to `default`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_param(
    rule_id: &str,
    params: &BTreeMap<String, f64>,
    name: &str,
    default: u32,
) -> Result<u32, DomainError> {
    let Some(value) = params.get(name).copied() else {
        return Ok(default);
    };

    let invalid = |reason: &str| DomainError::InvalidRuleParameter {
        rule_id: rule_id.to_string(),
        param: name.to_string(),
        reason: reason.to_string(),
    };

    if !value.is_finite() || value < 0.0 {
        return Err(invalid("must be a non-negative number"));
    }
    if value.fract() != 0.0 {
        return Err(invalid("must be a whole number"));
    }
    if value > f64::from(u32::MAX) {
        return Err(invalid("is too large"));
    }

    // Safe cast: checked finite, whole and within u32 range above
    Ok(value as u32)
}

/// Reads a soft rule weight from the explicit weight or the `weight` param.
fn soft_weight(
    rule_id: &str,
    params: &BTreeMap<String, f64>,
    weight: Option<f64>,
) -> Result<f64, DomainError> {
    let value: f64 = weight
        .or_else(|| params.get(WEIGHT_PARAM).copied())
        .unwrap_or(DEFAULT_SOFT_WEIGHT);

    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidRuleParameter {
            rule_id: rule_id.to_string(),
            param: WEIGHT_PARAM.to_string(),
            reason: String::from("must be a non-negative number"),
        });
    }
    Ok(value)
}

/// One rule as stored by the rule configuration store.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    /// The rule and its parameters.
    pub rule: Rule,
    /// Disabled rules are never evaluated.
    pub enabled: bool,
}

impl RuleConfig {
    /// Creates a new `RuleConfig`.
    #[must_use]
    pub const fn new(rule: Rule, enabled: bool) -> Self {
        Self { rule, enabled }
    }

    /// Creates an enabled `RuleConfig`.
    #[must_use]
    pub const fn enabled(rule: Rule) -> Self {
        Self::new(rule, true)
    }

    /// Creates a disabled `RuleConfig`.
    #[must_use]
    pub const fn disabled(rule: Rule) -> Self {
        Self::new(rule, false)
    }

    /// Returns whether the engine evaluates this entry.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.enabled && self.rule.is_recognized()
    }
}

/// The rule configuration for one roster run.
///
/// Every active entry is evaluated. Two entries with the same id are not
/// merged, so two limits effectively enforce the stricter one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    configs: Vec<RuleConfig>,
}

impl RuleSet {
    /// Creates a rule set from stored configuration entries.
    #[must_use]
    pub const fn new(configs: Vec<RuleConfig>) -> Self {
        Self { configs }
    }

    /// Every recognized rule, enabled with its default parameters.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            rule_catalogue()
                .iter()
                .filter_map(|definition| Rule::default_for(definition.id))
                .map(RuleConfig::enabled)
                .collect(),
        )
    }

    /// Adds an entry.
    #[must_use]
    pub fn with(mut self, config: RuleConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Disables every entry with the given id.
    #[must_use]
    pub fn without(mut self, id: &str) -> Self {
        for config in self.configs.iter_mut().filter(|c| c.rule.id() == id) {
            config.enabled = false;
        }
        self
    }

    /// Returns all entries, enabled or not.
    #[must_use]
    pub fn configs(&self) -> &[RuleConfig] {
        &self.configs
    }

    /// Returns the rules the engine evaluates.
    pub fn active(&self) -> impl Iterator<Item = &Rule> {
        self.configs
            .iter()
            .filter(|config| config.is_active())
            .map(|config| &config.rule)
    }

    /// Returns the active rules of one kind.
    pub fn active_of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &Rule> {
        self.active().filter(move |rule| rule.kind() == Some(kind))
    }

    /// Returns whether an active entry has the given id.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active().any(|rule| rule.id() == id)
    }

    /// Returns the ids of enabled entries this version does not recognize.
    #[must_use]
    pub fn ignored_ids(&self) -> Vec<&str> {
        self.configs
            .iter()
            .filter(|config| config.enabled && !config.rule.is_recognized())
            .map(|config| config.rule.id())
            .collect()
    }
}

/// Catalogue entry describing a recognized rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleDefinition {
    /// Stable rule identifier.
    pub id: &'static str,
    /// Hard or soft.
    pub kind: RuleKind,
    /// The single tunable parameter, if any.
    pub param: Option<&'static str>,
    /// The parameter's default value.
    pub default_value: Option<f64>,
    /// What the rule does.
    pub description: &'static str,
}

#[allow(clippy::cast_lossless)]
const CATALOGUE: [RuleDefinition; 9] = [
    RuleDefinition {
        id: MAX_CONSECUTIVE_NIGHTS,
        kind: RuleKind::Hard,
        param: Some("max_nights"),
        default_value: Some(DEFAULT_MAX_CONSECUTIVE_NIGHTS as f64),
        description: "Blocks assignment beyond a run of consecutive night shifts",
    },
    RuleDefinition {
        id: MAX_NIGHT_SHIFTS_PER_WEEK,
        kind: RuleKind::Hard,
        param: Some("max_shifts"),
        default_value: Some(DEFAULT_MAX_NIGHT_SHIFTS_PER_WEEK as f64),
        description: "Blocks assignment beyond a number of night shifts in one week",
    },
    RuleDefinition {
        id: MIN_REST_HOURS_BETWEEN_SHIFTS,
        kind: RuleKind::Hard,
        param: Some("min_hours"),
        default_value: Some(DEFAULT_MIN_REST_HOURS as f64),
        description: "Blocks assignment when rest between two shifts is too short",
    },
    RuleDefinition {
        id: MAX_CONSECUTIVE_WORK_DAYS,
        kind: RuleKind::Hard,
        param: Some("max_days"),
        default_value: Some(DEFAULT_MAX_CONSECUTIVE_WORK_DAYS as f64),
        description: "Blocks assignment beyond a run of consecutive worked days",
    },
    RuleDefinition {
        id: NO_BLACKOUT_ASSIGNMENTS,
        kind: RuleKind::Hard,
        param: None,
        default_value: None,
        description: "Blocks assignment on dates covered by leave or blackout",
    },
    RuleDefinition {
        id: PINNED_SHIFTS_REQUIRED,
        kind: RuleKind::Hard,
        param: None,
        default_value: None,
        description: "Places pinned shifts before the general scan",
    },
    RuleDefinition {
        id: EMPLOYEE_SHIFT_PREFERENCES,
        kind: RuleKind::Soft,
        param: Some(WEIGHT_PARAM),
        default_value: Some(DEFAULT_SOFT_WEIGHT),
        description: "Favors candidates who prefer the slot's shift",
    },
    RuleDefinition {
        id: BALANCE_TOTAL_HOURS,
        kind: RuleKind::Soft,
        param: Some(WEIGHT_PARAM),
        default_value: Some(DEFAULT_SOFT_WEIGHT),
        description: "Favors candidates with fewer assigned hours",
    },
    RuleDefinition {
        id: AVOID_SPLIT_WEEKENDS,
        kind: RuleKind::Soft,
        param: Some(WEIGHT_PARAM),
        default_value: Some(DEFAULT_SOFT_WEIGHT),
        description: "Penalizes working exactly one day of a weekend",
    },
];

/// Returns every recognized rule with its kind, parameter and default.
#[must_use]
pub const fn rule_catalogue() -> &'static [RuleDefinition] {
    &CATALOGUE
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;
mod rule_config;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    assign_roster, build_roster, generate_coverage_slots, rotation, rule_catalogue_response,
};
pub use request_response::{
    AssignRosterRequest, AssignRosterResponse, BuildRosterRequest, CoverageRuleInput,
    EmployeeInput, GenerateSlotsRequest, GenerateSlotsResponse, LeaveInput, PinConflictInfo,
    PinnedShiftInput, RejectionInfo, RotationRequest, RotationResponse, RuleCatalogueResponse,
    RuleDefinitionInfo, SlotInfo, SummaryInfo, UnfilledSlotInfo, WorkloadInfo,
};
pub use rule_config::{RuleConfigError, RuleConfigRecord, parse_rule_config, parse_rule_set};

//! Per-element result aggregation
//!
//! Rule outcomes are grouped into [`ScanResult`] buckets keyed by
//! (property id, description), and buckets roll up into an element's
//! [`ScanResults`] with precedence semantics: the aggregated status is the
//! highest-precedence status of any contained result.

use crate::guidelines::Guideline;
use crate::rule::{EvaluationCode, RuleId};
use crate::types::PropertyId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting-level status derived from an [`EvaluationCode`].
///
/// Ordering is precedence: aggregation takes the maximum, so a single `Fail`
/// dominates any number of passes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// No rule produced a result for this bucket yet.
    #[default]
    NoResult,
    Pass,
    /// The rule could not run to completion on this element.
    ScanNotSupported,
    /// Needs human review.
    Uncertain,
    Fail,
}

impl ScanStatus {
    /// Fixed, total mapping from evaluation codes.
    ///
    /// The match is deliberately exhaustive with no default arm: adding an
    /// `EvaluationCode` variant without deciding its reporting status is a
    /// compile error, not a silent `Pass`.
    pub fn from_evaluation(code: EvaluationCode) -> ScanStatus {
        match code {
            EvaluationCode::Pass => ScanStatus::Pass,
            EvaluationCode::Error => ScanStatus::Fail,
            EvaluationCode::Warning => ScanStatus::Uncertain,
            EvaluationCode::NeedsReview => ScanStatus::Uncertain,
            EvaluationCode::RuleExecutionError => ScanStatus::ScanNotSupported,
            // NotApplicable results are filtered out before aggregation; the
            // mapping stays total for direct callers.
            EvaluationCode::NotApplicable => ScanStatus::Pass,
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::NoResult => write!(f, "no result"),
            ScanStatus::Pass => write!(f, "pass"),
            ScanStatus::ScanNotSupported => write!(f, "scan not supported"),
            ScanStatus::Uncertain => write!(f, "uncertain"),
            ScanStatus::Fail => write!(f, "fail"),
        }
    }
}

/// The result of one rule for one element, with everything a report renderer
/// needs: id, status, messages, and help metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: RuleId,
    pub status: ScanStatus,
    /// Short description of the rule.
    pub description: String,
    /// Source standard (e.g. "WCAG 4.1.2").
    pub source: String,
    /// Guideline URL for the cited standard.
    pub help_url: String,
    /// Link to a known framework issue, when one exists.
    pub framework_issue_link: Option<String>,
    /// Messages accumulated while the rule ran (fix guidance, error details).
    pub messages: Vec<String>,
}

impl RuleResult {
    pub fn new(rule: RuleId, description: &str, standard: Guideline) -> Self {
        let info = standard.info();
        Self {
            rule,
            status: ScanStatus::NoResult,
            description: description.to_string(),
            source: info.short_description.to_string(),
            help_url: info.url.to_string(),
            framework_issue_link: None,
            messages: Vec::new(),
        }
    }

    /// Raise the status; a lower-precedence status never overwrites a higher
    /// one. The message is appended either way.
    pub fn set_status(&mut self, status: ScanStatus, message: &str) {
        if self.status < status {
            self.status = status;
        }
        self.add_message(message);
    }

    pub fn add_message(&mut self, message: &str) {
        if !message.is_empty() {
            self.messages.push(message.to_string());
        }
    }
}

/// All results for one (property id, description) bucket on one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// The rule description the bucket groups under.
    pub description: String,
    /// The UIA property the bucket concerns, when the rule declares one.
    pub property_id: Option<PropertyId>,
    pub items: Vec<RuleResult>,
}

impl ScanResult {
    pub fn new(description: &str, property_id: Option<PropertyId>) -> Self {
        Self {
            description: description.to_string(),
            property_id,
            items: Vec::new(),
        }
    }

    pub fn with_rule_result(mut self, result: RuleResult) -> Self {
        self.items.push(result);
        self
    }

    /// Grouping key for aggregation.
    pub fn key(&self) -> (Option<PropertyId>, &str) {
        (self.property_id, &self.description)
    }

    /// Aggregated status across the bucket's rule results.
    pub fn status(&self) -> ScanStatus {
        self.items
            .iter()
            .map(|r| r.status)
            .max()
            .unwrap_or(ScanStatus::NoResult)
    }
}

/// Container for all [`ScanResult`]s attached to one element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResults {
    items: Vec<ScanResult>,
}

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a scan result. Results sharing a (property id, description) key
    /// accumulate into the existing bucket rather than overwrite it.
    pub fn add(&mut self, result: ScanResult) {
        if let Some(existing) = self.items.iter_mut().find(|r| r.key() == result.key()) {
            existing.items.extend(result.items);
        } else {
            self.items.push(result);
        }
    }

    pub fn items(&self) -> &[ScanResult] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Aggregated status across every bucket.
    pub fn status(&self) -> ScanStatus {
        self.items
            .iter()
            .map(|r| r.status())
            .max()
            .unwrap_or(ScanStatus::NoResult)
    }

    /// Count of rule results with the given status.
    pub fn count_of(&self, status: ScanStatus) -> usize {
        self.items
            .iter()
            .flat_map(|r| r.items.iter())
            .filter(|r| r.status == status)
            .count()
    }
}

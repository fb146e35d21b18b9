//! Rule definition: identity, metadata, and the evaluation contract

use crate::condition::Condition;
use crate::element::Element;
use crate::guidelines::Guideline;
use crate::types::PropertyId;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable rule identifiers. Each rule must have a unique id; the registry
/// fails construction on duplicates. Remove the id when a rule is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    BoundingRectangleNotNull,
    BoundingRectangleNotAllZeros,
    NameNotNull,
    NameNotEmpty,
    NameExcludesControlType,
    LocalizedControlTypeIsReasonable,
    HelpTextExcludesPrivateUnicodeCharacters,
    IsControlElementTrueRequired,
    IsContentElementPropertyExists,
    IsKeyboardFocusableShouldBeTrue,
    ButtonShouldHavePatterns,
    ButtonInvokeAndTogglePatterns,
    ProgressBarRangeValue,
    ChromiumComponentsShouldUseWebScanner,
    EdgeBrowserHasBeenDeprecated,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Raw outcome of evaluating a single rule against one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationCode {
    Pass,
    /// A definite violation.
    Error,
    /// Likely violation; worth flagging but possibly a false positive.
    Warning,
    /// The rule cannot decide automatically; a human should review.
    NeedsReview,
    /// The rule itself failed while evaluating.
    RuleExecutionError,
    /// The rule's condition did not match; excluded from aggregation.
    NotApplicable,
}

impl fmt::Display for EvaluationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Static metadata for a rule. Created once at registry load, immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Unique identifier, stable across rule versions.
    pub id: RuleId,

    /// Short description shown in result lists after a scan.
    pub description: String,

    /// Remediation guidance for a reported violation.
    pub how_to_fix: String,

    /// The accessibility standard this rule is derived from.
    pub standard: Guideline,

    /// The UIA property the rule concerns, when it tests one specific
    /// property; links violations to relevant documentation.
    pub property_id: Option<PropertyId>,

    /// Code returned when the simple pass/fail test path fails.
    pub error_code: EvaluationCode,

    /// Rules that, when failed, remove the element from the main scan pass.
    pub exclusionary: bool,

    /// Link to a known framework issue that can cause this rule to fail.
    pub framework_issue_link: Option<String>,

    /// Rendered description of the rule's applicability condition. Populated
    /// from the condition at construction; not meant to be set by hand.
    pub condition: String,
}

impl RuleInfo {
    pub fn new(id: RuleId, description: &str, how_to_fix: &str, standard: Guideline) -> Self {
        Self {
            id,
            description: description.to_string(),
            how_to_fix: how_to_fix.to_string(),
            standard,
            property_id: None,
            error_code: EvaluationCode::Error,
            exclusionary: false,
            framework_issue_link: None,
            condition: String::new(),
        }
    }

    pub fn with_property_id(mut self, property_id: PropertyId) -> Self {
        self.property_id = Some(property_id);
        self
    }

    pub fn with_error_code(mut self, error_code: EvaluationCode) -> Self {
        self.error_code = error_code;
        self
    }

    pub fn exclusionary(mut self) -> Self {
        self.exclusionary = true;
        self
    }

    pub fn with_framework_issue_link(mut self, link: &str) -> Self {
        self.framework_issue_link = Some(link.to_string());
        self
    }

    /// Record the rendered condition string. Called by rule constructors after
    /// the condition is built.
    pub fn with_condition(mut self, condition: &Condition) -> Self {
        self.condition = condition.to_string();
        self
    }
}

/// A named unit of (applicability condition, evaluation logic, metadata).
///
/// The runner only calls [`Rule::evaluate`] after [`Rule::condition`] matched
/// the element; evaluating a non-matching element is a contract violation.
/// Evaluation must not mutate the element. An `Err` from evaluation is caught
/// by the runner and converted to [`EvaluationCode::RuleExecutionError`].
pub trait Rule: Send + Sync {
    fn info(&self) -> &RuleInfo;

    fn condition(&self) -> &Condition;

    /// Simple test path for rules with no partial outcomes: `true` maps to
    /// `Pass`, `false` to the configured [`RuleInfo::error_code`].
    fn passes_test(&self, element: &dyn Element) -> Result<bool>;

    /// Full evaluation. Rules with graded outcomes override this; everything
    /// else delegates to [`Rule::passes_test`].
    fn evaluate(&self, element: &dyn Element) -> Result<EvaluationCode> {
        Ok(if self.passes_test(element)? {
            EvaluationCode::Pass
        } else {
            self.info().error_code
        })
    }
}

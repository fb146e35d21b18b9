//! Rule execution over a single element
//!
//! The runner owns the per-element protocol: evaluate exclusion rules first,
//! and only when none fail, run the main pass. A rule returning `Err` is
//! contained here as [`EvaluationCode::RuleExecutionError`]; one broken rule
//! never aborts a scan.

use crate::element::Element;
use crate::registry::RuleRegistry;
use crate::results::{RuleResult, ScanResult, ScanResults, ScanStatus};
use crate::rule::{EvaluationCode, Rule, RuleId, RuleInfo};
use crate::scanner::CancelToken;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("scan cancelled")]
    Cancelled,
    #[error("unknown rule id: {0}")]
    UnknownRuleId(RuleId),
}

/// Outcome of one rule against one element, before aggregation.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub info: RuleInfo,
    pub evaluation_code: EvaluationCode,
    /// Detail attached while the rule ran; evaluation error text, mostly.
    pub message: Option<String>,
}

impl RunResult {
    /// Convert to an aggregation bucket, attaching the guideline citation and
    /// fix guidance a report renderer needs.
    pub fn into_scan_result(self) -> ScanResult {
        let mut rule_result = RuleResult::new(self.info.id, &self.info.description, self.info.standard);
        rule_result.framework_issue_link = self.info.framework_issue_link.clone();

        let status = ScanStatus::from_evaluation(self.evaluation_code);
        if status == ScanStatus::Pass {
            rule_result.set_status(status, "");
        } else {
            rule_result.set_status(status, &self.info.how_to_fix);
        }
        if let Some(message) = &self.message {
            rule_result.add_message(message);
        }

        ScanResult::new(&self.info.description, self.info.property_id).with_rule_result(rule_result)
    }
}

/// Evaluates registry rules against elements.
pub struct RuleRunner<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> RuleRunner<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Evaluate one rule, containing evaluation errors.
    fn run_rule(&self, rule: &dyn Rule, element: &dyn Element) -> RunResult {
        if !rule.condition().matches(element) {
            return RunResult {
                info: rule.info().clone(),
                evaluation_code: EvaluationCode::NotApplicable,
                message: None,
            };
        }

        match rule.evaluate(element) {
            Ok(code) => RunResult {
                info: rule.info().clone(),
                evaluation_code: code,
                message: None,
            },
            Err(err) => {
                log::warn!(
                    "rule {} failed on element {}: {:#}",
                    rule.info().id,
                    element.unique_id(),
                    err
                );
                RunResult {
                    info: rule.info().clone(),
                    evaluation_code: EvaluationCode::RuleExecutionError,
                    message: Some(format!("{:#}", err)),
                }
            }
        }
    }

    /// Evaluate every registered rule, exclusion rules included, returning
    /// raw results with no aggregation or filtering.
    pub fn run_all(
        &self,
        element: &dyn Element,
        cancel: &CancelToken,
    ) -> Result<Vec<RunResult>, RunnerError> {
        let mut results = Vec::with_capacity(self.registry.len());
        for rule in self.registry.all() {
            if cancel.is_cancelled() {
                return Err(RunnerError::Cancelled);
            }
            results.push(self.run_rule(rule.as_ref(), element));
        }
        Ok(results)
    }

    /// Evaluate one rule by id.
    pub fn run_rule_by_id(
        &self,
        id: RuleId,
        element: &dyn Element,
    ) -> Result<RunResult, RunnerError> {
        let rule = self.registry.get(id).ok_or(RunnerError::UnknownRuleId(id))?;
        Ok(self.run_rule(rule, element))
    }

    /// Main scan pass: evaluate non-exclusion rules and record everything
    /// except NotApplicable outcomes.
    pub fn run(
        &self,
        element: &dyn Element,
        results: &mut ScanResults,
        cancel: &CancelToken,
    ) -> Result<(), RunnerError> {
        for rule in self.registry.included_rules() {
            if cancel.is_cancelled() {
                return Err(RunnerError::Cancelled);
            }
            let result = self.run_rule(rule, element);
            if result.evaluation_code != EvaluationCode::NotApplicable {
                results.add(result.into_scan_result());
            }
        }
        Ok(())
    }

    /// Exclusion pass: evaluate exclusion rules and record their outcomes.
    /// Returns `true` when any exclusion rule fails, meaning the element's
    /// subtree must be withheld from the main pass.
    pub fn exclude_from_run(
        &self,
        element: &dyn Element,
        results: &mut ScanResults,
        cancel: &CancelToken,
    ) -> Result<bool, RunnerError> {
        let mut excluded = false;
        for rule in self.registry.exclusion_rules() {
            if cancel.is_cancelled() {
                return Err(RunnerError::Cancelled);
            }
            let result = self.run_rule(rule, element);
            if result.evaluation_code == EvaluationCode::NotApplicable {
                continue;
            }
            if result.evaluation_code == EvaluationCode::Error {
                excluded = true;
            }
            results.add(result.into_scan_result());
        }
        if excluded {
            log::debug!("element {} excluded from main pass", element.unique_id());
        }
        Ok(excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::element::UiElement;
    use crate::guidelines::Guideline;
    use crate::types::{control_type, framework, Rect};
    use anyhow::{anyhow, Result};
    use pretty_assertions::assert_eq;

    struct ErroringRule {
        info: RuleInfo,
        condition: Condition,
    }

    impl ErroringRule {
        fn new() -> Self {
            let condition = Condition::True;
            let info = RuleInfo::new(
                RuleId::ProgressBarRangeValue,
                "always errors",
                "unreachable",
                Guideline::ObjectInformation,
            )
            .with_condition(&condition);
            Self { info, condition }
        }
    }

    impl Rule for ErroringRule {
        fn info(&self) -> &RuleInfo {
            &self.info
        }

        fn condition(&self) -> &Condition {
            &self.condition
        }

        fn passes_test(&self, _element: &dyn Element) -> Result<bool> {
            Err(anyhow!("provider went away"))
        }
    }

    fn full_registry() -> RuleRegistry {
        RuleRegistry::new().unwrap()
    }

    #[test]
    fn test_erroring_rule_is_contained() {
        let registry =
            RuleRegistry::with_rules(vec![Box::new(ErroringRule::new())]).unwrap();
        let runner = RuleRunner::new(&registry);
        let element = UiElement::new(1, control_type::BUTTON).build();

        let mut results = ScanResults::new();
        runner
            .run(element.as_ref(), &mut results, &CancelToken::new())
            .unwrap();

        assert_eq!(results.status(), ScanStatus::ScanNotSupported);
        let messages = &results.items()[0].items[0].messages;
        assert!(messages.iter().any(|m| m.contains("provider went away")));
    }

    #[test]
    fn test_non_matching_rules_leave_no_trace() {
        let registry = full_registry();
        let runner = RuleRunner::new(&registry);
        // A plain pane on screen: the name rules' conditions do not match.
        let pane = UiElement::new(1, control_type::PANE)
            .with_bounding_rectangle(Rect::new(0, 0, 100, 100))
            .with_content_element(true)
            .build();

        let mut results = ScanResults::new();
        runner
            .run(pane.as_ref(), &mut results, &CancelToken::new())
            .unwrap();

        let recorded: Vec<_> = results
            .items()
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|r| r.rule)
            .collect();
        assert!(!recorded.contains(&RuleId::NameNotNull));
        assert!(recorded.contains(&RuleId::BoundingRectangleNotNull));
    }

    #[test]
    fn test_run_all_reports_not_applicable() {
        let registry = full_registry();
        let runner = RuleRunner::new(&registry);
        let pane = UiElement::new(1, control_type::PANE).build();

        let all = runner
            .run_all(pane.as_ref(), &CancelToken::new())
            .unwrap();
        assert_eq!(all.len(), registry.len());
        assert!(all
            .iter()
            .any(|r| r.evaluation_code == EvaluationCode::NotApplicable));
    }

    #[test]
    fn test_run_rule_by_id() {
        let registry = full_registry();
        let runner = RuleRunner::new(&registry);
        let unnamed = UiElement::new(1, control_type::BUTTON).build();

        let result = runner
            .run_rule_by_id(RuleId::NameNotNull, unnamed.as_ref())
            .unwrap();
        assert_eq!(result.evaluation_code, EvaluationCode::Error);
    }

    #[test]
    fn test_chrome_document_exclusion_records_one_entry() {
        let registry = full_registry();
        let runner = RuleRunner::new(&registry);
        let chrome_doc = UiElement::new(1, control_type::DOCUMENT)
            .with_framework(framework::CHROME)
            .build();

        let mut results = ScanResults::new();
        let excluded = runner
            .exclude_from_run(chrome_doc.as_ref(), &mut results, &CancelToken::new())
            .unwrap();

        assert!(excluded);
        assert_eq!(results.len(), 1);
        assert_eq!(results.status(), ScanStatus::Fail);
    }

    #[test]
    fn test_native_element_is_not_excluded() {
        let registry = full_registry();
        let runner = RuleRunner::new(&registry);
        let button = UiElement::new(1, control_type::BUTTON)
            .with_framework(framework::WIN32)
            .build();

        let mut results = ScanResults::new();
        let excluded = runner
            .exclude_from_run(button.as_ref(), &mut results, &CancelToken::new())
            .unwrap();

        assert!(!excluded);
        assert!(results.is_empty());
    }

    #[test]
    fn test_cancellation_stops_between_rules() {
        let registry = full_registry();
        let runner = RuleRunner::new(&registry);
        let element = UiElement::new(1, control_type::BUTTON).build();

        let cancel = CancelToken::new();
        cancel.cancel();
        let err = runner
            .run(element.as_ref(), &mut ScanResults::new(), &cancel)
            .unwrap_err();
        assert!(matches!(err, RunnerError::Cancelled));
    }

    #[test]
    fn test_unknown_rule_id() {
        let registry = RuleRegistry::with_rules(vec![]).unwrap();
        let runner = RuleRunner::new(&registry);
        let element = UiElement::new(1, control_type::BUTTON).build();

        let err = runner
            .run_rule_by_id(RuleId::NameNotNull, element.as_ref())
            .unwrap_err();
        assert!(matches!(err, RunnerError::UnknownRuleId(RuleId::NameNotNull)));
    }
}

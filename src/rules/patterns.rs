//! Pattern support rules

use crate::condition::Condition;
use crate::element::Element;
use crate::guidelines::Guideline;
use crate::property_conditions::{control_type_is, has_pattern};
use crate::rule::{Rule, RuleId, RuleInfo};
use crate::types::{control_type, pattern};
use anyhow::{Context, Result};

/// Buttons must support at least one action pattern so assistive
/// technologies can activate them.
pub struct ButtonShouldHavePatterns {
    info: RuleInfo,
    condition: Condition,
}

impl ButtonShouldHavePatterns {
    pub fn new() -> Self {
        let condition = control_type_is(control_type::BUTTON);
        let info = RuleInfo::new(
            RuleId::ButtonShouldHavePatterns,
            "A button must support the Invoke, Toggle, or ExpandCollapse pattern",
            "Implement at least one of the Invoke, Toggle, or ExpandCollapse \
             patterns on the button.",
            Guideline::AvailableActions,
        )
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for ButtonShouldHavePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ButtonShouldHavePatterns {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.has_pattern(pattern::INVOKE)
            || element.has_pattern(pattern::TOGGLE)
            || element.has_pattern(pattern::EXPAND_COLLAPSE))
    }
}

/// Invoke and Toggle on the same button leave the action ambiguous; the rule
/// fails every element its condition selects.
pub struct ButtonInvokeAndTogglePatterns {
    info: RuleInfo,
    condition: Condition,
}

impl ButtonInvokeAndTogglePatterns {
    pub fn new() -> Self {
        let condition = control_type_is(control_type::BUTTON)
            & has_pattern(pattern::INVOKE)
            & has_pattern(pattern::TOGGLE);
        let info = RuleInfo::new(
            RuleId::ButtonInvokeAndTogglePatterns,
            "A button must not support both the Invoke and Toggle patterns",
            "Keep whichever pattern matches the button's behavior and remove \
             the other.",
            Guideline::AvailableActions,
        )
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for ButtonInvokeAndTogglePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ButtonInvokeAndTogglePatterns {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, _element: &dyn Element) -> Result<bool> {
        Ok(false)
    }
}

/// Progress bars exposing the RangeValue pattern must report the standard
/// 0-100 read-only range.
pub struct ProgressBarRangeValue {
    info: RuleInfo,
    condition: Condition,
}

impl ProgressBarRangeValue {
    pub fn new() -> Self {
        let condition =
            control_type_is(control_type::PROGRESS_BAR) & has_pattern(pattern::RANGE_VALUE);
        let info = RuleInfo::new(
            RuleId::ProgressBarRangeValue,
            "A progress bar's RangeValue pattern must report Minimum 0, Maximum 100, and IsReadOnly true",
            "Report Minimum = 0, Maximum = 100, and IsReadOnly = true on the \
             RangeValue pattern.",
            Guideline::ObjectInformation,
        )
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for ProgressBarRangeValue {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ProgressBarRangeValue {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        let range = element
            .pattern(pattern::RANGE_VALUE)
            .context("condition guarantees the RangeValue pattern")?;

        let minimum = range.value("Minimum").and_then(|v| v.as_double());
        let maximum = range.value("Maximum").and_then(|v| v.as_double());
        let read_only = range.value("IsReadOnly").and_then(|v| v.as_bool());

        Ok(minimum == Some(0.0) && maximum == Some(100.0) && read_only == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Pattern, UiElement};
    use crate::rule::EvaluationCode;
    use crate::types::PropertyValue;
    use pretty_assertions::assert_eq;

    fn range_value_pattern(min: f64, max: f64, read_only: bool) -> Pattern {
        Pattern::new(pattern::RANGE_VALUE)
            .with_property("Minimum", PropertyValue::Double(min))
            .with_property("Maximum", PropertyValue::Double(max))
            .with_property("IsReadOnly", PropertyValue::Bool(read_only))
    }

    #[test]
    fn test_button_needs_an_action_pattern() {
        let rule = ButtonShouldHavePatterns::new();

        let inert = UiElement::new(1, control_type::BUTTON).build();
        assert!(rule.condition().matches(inert.as_ref()));
        assert_eq!(rule.evaluate(inert.as_ref()).unwrap(), EvaluationCode::Error);

        let invokable = UiElement::new(2, control_type::BUTTON)
            .with_pattern(Pattern::new(pattern::INVOKE))
            .build();
        assert_eq!(rule.evaluate(invokable.as_ref()).unwrap(), EvaluationCode::Pass);

        let non_button = UiElement::new(3, control_type::PANE).build();
        assert!(!rule.condition().matches(non_button.as_ref()));
    }

    #[test]
    fn test_invoke_and_toggle_conflict() {
        let rule = ButtonInvokeAndTogglePatterns::new();

        let conflicted = UiElement::new(1, control_type::BUTTON)
            .with_pattern(Pattern::new(pattern::INVOKE))
            .with_pattern(Pattern::new(pattern::TOGGLE))
            .build();
        assert!(rule.condition().matches(conflicted.as_ref()));
        assert_eq!(
            rule.evaluate(conflicted.as_ref()).unwrap(),
            EvaluationCode::Error
        );

        // Only one pattern: the rule does not apply.
        let invoke_only = UiElement::new(2, control_type::BUTTON)
            .with_pattern(Pattern::new(pattern::INVOKE))
            .build();
        assert!(!rule.condition().matches(invoke_only.as_ref()));
    }

    #[test]
    fn test_progress_bar_standard_range_passes() {
        let rule = ProgressBarRangeValue::new();
        let e = UiElement::new(1, control_type::PROGRESS_BAR)
            .with_pattern(range_value_pattern(0.0, 100.0, true))
            .build();
        assert!(rule.condition().matches(e.as_ref()));
        assert_eq!(rule.evaluate(e.as_ref()).unwrap(), EvaluationCode::Pass);
    }

    #[test]
    fn test_progress_bar_bad_range_fails() {
        let rule = ProgressBarRangeValue::new();

        let wrong_max = UiElement::new(1, control_type::PROGRESS_BAR)
            .with_pattern(range_value_pattern(0.0, 255.0, true))
            .build();
        assert_eq!(rule.evaluate(wrong_max.as_ref()).unwrap(), EvaluationCode::Error);

        let writable = UiElement::new(2, control_type::PROGRESS_BAR)
            .with_pattern(range_value_pattern(0.0, 100.0, false))
            .build();
        assert_eq!(rule.evaluate(writable.as_ref()).unwrap(), EvaluationCode::Error);
    }

    #[test]
    fn test_progress_bar_missing_pattern_properties_fails() {
        let rule = ProgressBarRangeValue::new();
        let e = UiElement::new(1, control_type::PROGRESS_BAR)
            .with_pattern(Pattern::new(pattern::RANGE_VALUE))
            .build();
        assert_eq!(rule.evaluate(e.as_ref()).unwrap(), EvaluationCode::Error);
    }
}

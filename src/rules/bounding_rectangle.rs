//! Bounding rectangle rules

use crate::condition::Condition;
use crate::element::Element;
use crate::guidelines::Guideline;
use crate::property_conditions::{bounding_rectangle_not_null, control_type_is, is_on_screen};
use crate::rule::{Rule, RuleId, RuleInfo};
use crate::types::{control_type, property};
use anyhow::{Context, Result};

/// On-screen elements must report a bounding rectangle, or assistive
/// technologies cannot direct the user to them.
pub struct BoundingRectangleNotNull {
    info: RuleInfo,
    condition: Condition,
}

impl BoundingRectangleNotNull {
    pub fn new() -> Self {
        // Top-level windows legitimately report no rectangle while minimized.
        let condition = is_on_screen() & !control_type_is(control_type::WINDOW);
        let info = RuleInfo::new(
            RuleId::BoundingRectangleNotNull,
            "The BoundingRectangle property must not be null",
            "The element is on screen but has no bounding rectangle. \
             Ensure the provider reports the element's screen location.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::BOUNDING_RECTANGLE)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for BoundingRectangleNotNull {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for BoundingRectangleNotNull {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.bounding_rectangle().is_some())
    }
}

/// A bounding rectangle of all zeros means the provider reported a location
/// but the location is meaningless.
pub struct BoundingRectangleNotAllZeros {
    info: RuleInfo,
    condition: Condition,
}

impl BoundingRectangleNotAllZeros {
    pub fn new() -> Self {
        let condition = bounding_rectangle_not_null() & is_on_screen();
        let info = RuleInfo::new(
            RuleId::BoundingRectangleNotAllZeros,
            "The BoundingRectangle property must not have all zero values",
            "The element's bounding rectangle is [0,0,0,0]. \
             Report the element's actual screen coordinates.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::BOUNDING_RECTANGLE)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for BoundingRectangleNotAllZeros {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for BoundingRectangleNotAllZeros {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        let rect = element
            .bounding_rectangle()
            .context("condition guarantees a bounding rectangle")?;
        Ok(!rect.is_all_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::UiElement;
    use crate::rule::EvaluationCode;
    use crate::types::{control_type, Rect};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_null_condition_skips_off_screen_elements() {
        let rule = BoundingRectangleNotNull::new();
        let off_screen = UiElement::new(1, control_type::BUTTON)
            .with_off_screen(true)
            .build();
        assert!(!rule.condition().matches(off_screen.as_ref()));
    }

    #[test]
    fn test_not_null_condition_skips_windows() {
        let rule = BoundingRectangleNotNull::new();
        let window = UiElement::new(1, control_type::WINDOW).build();
        assert!(!rule.condition().matches(window.as_ref()));
    }

    #[test]
    fn test_not_null_fails_without_rectangle() {
        let rule = BoundingRectangleNotNull::new();
        let e = UiElement::new(1, control_type::BUTTON).build();
        assert!(rule.condition().matches(e.as_ref()));
        assert_eq!(rule.evaluate(e.as_ref()).unwrap(), EvaluationCode::Error);
    }

    #[test]
    fn test_not_null_passes_with_rectangle() {
        let rule = BoundingRectangleNotNull::new();
        let e = UiElement::new(1, control_type::BUTTON)
            .with_bounding_rectangle(Rect::new(10, 10, 50, 30))
            .build();
        assert_eq!(rule.evaluate(e.as_ref()).unwrap(), EvaluationCode::Pass);
    }

    #[test]
    fn test_all_zeros_fails() {
        let rule = BoundingRectangleNotAllZeros::new();
        let e = UiElement::new(1, control_type::BUTTON)
            .with_bounding_rectangle(Rect::default())
            .build();
        assert!(rule.condition().matches(e.as_ref()));
        assert_eq!(rule.evaluate(e.as_ref()).unwrap(), EvaluationCode::Error);
    }

    #[test]
    fn test_nonzero_rectangle_passes() {
        let rule = BoundingRectangleNotAllZeros::new();
        let e = UiElement::new(1, control_type::BUTTON)
            .with_bounding_rectangle(Rect::new(1, 2, 3, 4))
            .build();
        assert_eq!(rule.evaluate(e.as_ref()).unwrap(), EvaluationCode::Pass);
    }
}

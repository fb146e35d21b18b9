//! Exclusion rules
//!
//! These run in a separate pass before the main scan. A failing exclusion
//! rule removes the element's subtree from the main pass entirely; only the
//! exclusion result is recorded for it.

use crate::condition::Condition;
use crate::element::Element;
use crate::guidelines::Guideline;
use crate::property_conditions::{control_type_is, framework_is};
use crate::rule::{Rule, RuleId, RuleInfo};
use crate::types::{control_type, framework};
use anyhow::Result;

/// Chromium web content exposes a synthetic UIA tree; these checks produce
/// noise there and a web-focused scanner should be used instead.
pub struct ChromiumComponentsShouldUseWebScanner {
    info: RuleInfo,
    condition: Condition,
}

impl ChromiumComponentsShouldUseWebScanner {
    pub fn new() -> Self {
        let condition =
            framework_is(framework::CHROME) & control_type_is(control_type::DOCUMENT);
        let info = RuleInfo::new(
            RuleId::ChromiumComponentsShouldUseWebScanner,
            "Chromium web content should be tested with a web accessibility scanner",
            "Scan this content with a browser-based accessibility tool instead.",
            Guideline::NameRoleValue,
        )
        .exclusionary()
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for ChromiumComponentsShouldUseWebScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ChromiumComponentsShouldUseWebScanner {
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

/// Legacy Edge is out of support; results from its UIA tree are not
/// actionable.
pub struct EdgeBrowserHasBeenDeprecated {
    info: RuleInfo,
    condition: Condition,
}

impl EdgeBrowserHasBeenDeprecated {
    pub fn new() -> Self {
        let condition = framework_is(framework::EDGE);
        let info = RuleInfo::new(
            RuleId::EdgeBrowserHasBeenDeprecated,
            "The legacy Edge browser is no longer supported",
            "Test this content in a supported browser.",
            Guideline::NameRoleValue,
        )
        .exclusionary()
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for EdgeBrowserHasBeenDeprecated {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EdgeBrowserHasBeenDeprecated {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::UiElement;
    use crate::rule::EvaluationCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chromium_document_is_excluded() {
        let rule = ChromiumComponentsShouldUseWebScanner::new();
        assert!(rule.info().exclusionary);

        let chrome_doc = UiElement::new(1, control_type::DOCUMENT)
            .with_framework(framework::CHROME)
            .build();
        assert!(rule.condition().matches(chrome_doc.as_ref()));
        assert_eq!(
            rule.evaluate(chrome_doc.as_ref()).unwrap(),
            EvaluationCode::Error
        );

        // A Chrome button is not a document; the exclusion does not trigger.
        let chrome_button = UiElement::new(2, control_type::BUTTON)
            .with_framework(framework::CHROME)
            .build();
        assert!(!rule.condition().matches(chrome_button.as_ref()));

        let win32_doc = UiElement::new(3, control_type::DOCUMENT)
            .with_framework(framework::WIN32)
            .build();
        assert!(!rule.condition().matches(win32_doc.as_ref()));
    }

    #[test]
    fn test_legacy_edge_is_excluded() {
        let rule = EdgeBrowserHasBeenDeprecated::new();
        assert!(rule.info().exclusionary);

        let edge = UiElement::new(1, control_type::PANE)
            .with_framework(framework::EDGE)
            .build();
        assert!(rule.condition().matches(edge.as_ref()));
        assert_eq!(rule.evaluate(edge.as_ref()).unwrap(), EvaluationCode::Error);

        let chrome = UiElement::new(2, control_type::PANE)
            .with_framework(framework::CHROME)
            .build();
        assert!(!rule.condition().matches(chrome.as_ref()));
    }
}

//! Control view, content view, and keyboard focus rules

use crate::condition::Condition;
use crate::element::Element;
use crate::guidelines::Guideline;
use crate::property_conditions::{control_type_in, is_enabled, is_on_screen};
use crate::rule::{EvaluationCode, Rule, RuleId, RuleInfo};
use crate::types::{control_type, property, ControlTypeId};
use anyhow::Result;

/// Control types that must appear in the control view.
const CONTROL_VIEW_REQUIRED: &[ControlTypeId] = &[
    control_type::BUTTON,
    control_type::CHECK_BOX,
    control_type::COMBO_BOX,
    control_type::EDIT,
    control_type::HYPERLINK,
    control_type::LIST,
    control_type::LIST_ITEM,
    control_type::MENU_ITEM,
    control_type::PROGRESS_BAR,
    control_type::RADIO_BUTTON,
    control_type::SLIDER,
    control_type::SPINNER,
    control_type::TAB,
    control_type::TAB_ITEM,
    control_type::TREE,
    control_type::TREE_ITEM,
];

/// Control types a keyboard user must be able to reach.
const FOCUS_EXPECTED: &[ControlTypeId] = &[
    control_type::BUTTON,
    control_type::CHECK_BOX,
    control_type::COMBO_BOX,
    control_type::EDIT,
    control_type::HYPERLINK,
    control_type::LIST_ITEM,
    control_type::MENU_ITEM,
    control_type::RADIO_BUTTON,
    control_type::SLIDER,
    control_type::SPINNER,
    control_type::TAB_ITEM,
    control_type::TREE_ITEM,
];

/// Interactive control types must report IsControlElement = true.
pub struct IsControlElementTrueRequired {
    info: RuleInfo,
    condition: Condition,
}

impl IsControlElementTrueRequired {
    pub fn new() -> Self {
        let condition = control_type_in(CONTROL_VIEW_REQUIRED);
        let info = RuleInfo::new(
            RuleId::IsControlElementTrueRequired,
            "The IsControlElement property must be true",
            "Interactive elements must appear in the control view; set \
             IsControlElement to true.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::IS_CONTROL_ELEMENT)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for IsControlElementTrueRequired {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IsControlElementTrueRequired {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.is_control_element() == Some(true))
    }
}

/// Providers should always supply the IsContentElement property; its absence
/// makes content filtering unreliable.
pub struct IsContentElementPropertyExists {
    info: RuleInfo,
    condition: Condition,
}

impl IsContentElementPropertyExists {
    pub fn new() -> Self {
        let condition = Condition::True;
        let info = RuleInfo::new(
            RuleId::IsContentElementPropertyExists,
            "The IsContentElement property should exist",
            "The provider did not supply IsContentElement; verify the element \
             is exposed correctly.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::IS_CONTENT_ELEMENT)
        .with_error_code(EvaluationCode::NeedsReview)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for IsContentElementPropertyExists {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IsContentElementPropertyExists {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.is_content_element().is_some())
    }
}

/// Enabled, on-screen interactive elements must be keyboard focusable.
pub struct IsKeyboardFocusableShouldBeTrue {
    info: RuleInfo,
    condition: Condition,
}

impl IsKeyboardFocusableShouldBeTrue {
    pub fn new() -> Self {
        let condition = control_type_in(FOCUS_EXPECTED) & is_enabled() & is_on_screen();
        let info = RuleInfo::new(
            RuleId::IsKeyboardFocusableShouldBeTrue,
            "The IsKeyboardFocusable property should be true",
            "Keyboard users cannot reach this element. Make it focusable or \
             remove it from the interaction path.",
            Guideline::Keyboard,
        )
        .with_property_id(property::IS_KEYBOARD_FOCUSABLE)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for IsKeyboardFocusableShouldBeTrue {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for IsKeyboardFocusableShouldBeTrue {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.is_keyboard_focusable())
    }
}

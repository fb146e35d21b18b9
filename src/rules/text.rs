//! Name, localized control type, and help text rules

use crate::condition::Condition;
use crate::element::Element;
use crate::guidelines::Guideline;
use crate::property_conditions::{
    control_type_in, help_text, includes_private_unicode_characters, is_custom_control,
    is_on_screen, localized_control_type, name,
};
use crate::rule::{EvaluationCode, Rule, RuleId, RuleInfo};
use crate::types::{control_type, property, ControlTypeId};
use anyhow::{anyhow, Context, Result};
use regex::RegexBuilder;

/// Control types whose elements are unusable without an accessible name.
const NAME_REQUIRED: &[ControlTypeId] = &[
    control_type::BUTTON,
    control_type::CHECK_BOX,
    control_type::COMBO_BOX,
    control_type::EDIT,
    control_type::HYPERLINK,
    control_type::LIST_ITEM,
    control_type::MENU_ITEM,
    control_type::RADIO_BUTTON,
    control_type::TAB_ITEM,
    control_type::TREE_ITEM,
];

/// Control types whose name legitimately repeats the control type
/// (a text element named "text" is unremarkable).
const ALLOW_SAME_NAME_AND_CONTROL_TYPE: &[ControlTypeId] = &[
    control_type::APP_BAR,
    control_type::HEADER,
    control_type::SEMANTIC_ZOOM,
    control_type::STATUS_BAR,
    control_type::TEXT,
    control_type::TITLE_BAR,
];

pub struct NameNotNull {
    info: RuleInfo,
    condition: Condition,
}

impl NameNotNull {
    pub fn new() -> Self {
        let condition = control_type_in(NAME_REQUIRED) & is_on_screen();
        let info = RuleInfo::new(
            RuleId::NameNotNull,
            "The Name property must not be null",
            "Provide an accessible name so assistive technologies can announce the element.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::NAME)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for NameNotNull {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NameNotNull {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.name().is_some())
    }
}

pub struct NameNotEmpty {
    info: RuleInfo,
    condition: Condition,
}

impl NameNotEmpty {
    pub fn new() -> Self {
        let condition = control_type_in(NAME_REQUIRED) & name().not_null();
        let info = RuleInfo::new(
            RuleId::NameNotEmpty,
            "The Name property must not be an empty string",
            "An empty name hides the element from assistive technologies. \
             Provide a meaningful accessible name.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::NAME)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for NameNotEmpty {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NameNotEmpty {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        Ok(element.name().is_some_and(|n| !n.is_empty()))
    }
}

/// The name must not repeat the control type ("Save button" is announced
/// "Save button button" by screen readers).
pub struct NameExcludesControlType {
    info: RuleInfo,
    condition: Condition,
}

impl NameExcludesControlType {
    pub fn new() -> Self {
        let condition =
            !control_type_in(ALLOW_SAME_NAME_AND_CONTROL_TYPE) & name().not_null_or_whitespace();
        let info = RuleInfo::new(
            RuleId::NameExcludesControlType,
            "The Name property must not include the element's control type",
            "Remove the control type from the name; assistive technologies \
             already announce the type.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::NAME)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for NameExcludesControlType {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NameExcludesControlType {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        let name = element.name().context("condition guarantees a name")?;
        let type_name = control_type::name_of(element.control_type_id())
            .ok_or_else(|| anyhow!("no control type name for id {}", element.control_type_id()))?;

        let pattern = format!(r"\b{}\b", regex::escape(type_name));
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .context("control type names are valid regex words")?;
        Ok(!re.is_match(name))
    }
}

/// The LocalizedControlType string should match what assistive technologies
/// announce for the element's control type.
pub struct LocalizedControlTypeIsReasonable {
    info: RuleInfo,
    condition: Condition,
}

impl LocalizedControlTypeIsReasonable {
    pub fn new() -> Self {
        let condition = !is_custom_control() & localized_control_type().not_null_or_whitespace();
        let info = RuleInfo::new(
            RuleId::LocalizedControlTypeIsReasonable,
            "The LocalizedControlType property should be reasonable",
            "Use a localized control type string that matches the element's \
             control type.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::LOCALIZED_CONTROL_TYPE)
        .with_error_code(EvaluationCode::Warning)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for LocalizedControlTypeIsReasonable {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LocalizedControlTypeIsReasonable {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        let lct = element
            .localized_control_type()
            .context("condition guarantees a localized control type")?;
        let expected = control_type::expected_localized_types(element.control_type_id())
            .ok_or_else(|| {
                anyhow!(
                    "no expected localized control type strings for id {}",
                    element.control_type_id()
                )
            })?;
        Ok(expected.iter().any(|s| s.eq_ignore_ascii_case(lct)))
    }
}

/// Private use area characters render as glyphs screen readers cannot speak.
pub struct HelpTextExcludesPrivateUnicodeCharacters {
    info: RuleInfo,
    condition: Condition,
}

impl HelpTextExcludesPrivateUnicodeCharacters {
    pub fn new() -> Self {
        let condition = help_text().not_null_or_whitespace();
        let info = RuleInfo::new(
            RuleId::HelpTextExcludesPrivateUnicodeCharacters,
            "The HelpText property must not contain private Unicode characters",
            "Replace private use area characters in the help text with \
             speakable text.",
            Guideline::ObjectInformation,
        )
        .with_property_id(property::HELP_TEXT)
        .with_condition(&condition);
        Self { info, condition }
    }
}

impl Default for HelpTextExcludesPrivateUnicodeCharacters {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for HelpTextExcludesPrivateUnicodeCharacters {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn passes_test(&self, element: &dyn Element) -> Result<bool> {
        let help = element
            .help_text()
            .context("condition guarantees help text")?;
        Ok(!includes_private_unicode_characters(help))
    }
}

//! Reusable leaf conditions over element properties
//!
//! The rule library composes its applicability gates from these building
//! blocks rather than writing raw closures everywhere.

use crate::condition::Condition;
use crate::element::Element;
use crate::types::{control_type, ControlTypeId, PatternId};
use std::sync::Arc;

type StringGetter = Arc<dyn Fn(&dyn Element) -> Option<String> + Send + Sync>;

/// Condition factory for a string property such as Name or HelpText.
#[derive(Clone)]
pub struct StringProperty {
    description: &'static str,
    getter: StringGetter,
}

impl StringProperty {
    pub fn new<F>(description: &'static str, getter: F) -> Self
    where
        F: Fn(&dyn Element) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            description,
            getter: Arc::new(getter),
        }
    }

    pub fn not_null(&self) -> Condition {
        let getter = Arc::clone(&self.getter);
        Condition::new(
            &format!("{} is not null", self.description),
            move |e| getter(e).is_some(),
        )
    }

    pub fn not_empty(&self) -> Condition {
        let getter = Arc::clone(&self.getter);
        Condition::new(
            &format!("{} is not empty", self.description),
            move |e| getter(e).is_some_and(|s| !s.is_empty()),
        )
    }

    pub fn not_whitespace(&self) -> Condition {
        let getter = Arc::clone(&self.getter);
        Condition::new(
            &format!("{} is not whitespace", self.description),
            move |e| getter(e).is_some_and(|s| !s.trim().is_empty()),
        )
    }

    pub fn not_null_or_empty(&self) -> Condition {
        self.not_null() & self.not_empty()
    }

    pub fn not_null_or_whitespace(&self) -> Condition {
        self.not_null_or_empty() & self.not_whitespace()
    }
}

pub fn name() -> StringProperty {
    StringProperty::new("Name", |e| e.name().map(String::from))
}

pub fn localized_control_type() -> StringProperty {
    StringProperty::new("LocalizedControlType", |e| {
        e.localized_control_type().map(String::from)
    })
}

pub fn help_text() -> StringProperty {
    StringProperty::new("HelpText", |e| e.help_text().map(String::from))
}

/// Element has the given control type.
pub fn control_type_is(id: ControlTypeId) -> Condition {
    let label = control_type::name_of(id).unwrap_or("unknown control type");
    Condition::new(
        &format!("ControlType is {}", label),
        move |e| e.control_type_id() == id,
    )
}

/// Element's control type is one of the given set.
pub fn control_type_in(ids: &'static [ControlTypeId]) -> Condition {
    Condition::new("ControlType is in set", move |e| {
        ids.contains(&e.control_type_id())
    })
}

pub fn is_custom_control() -> Condition {
    control_type_is(control_type::CUSTOM)
}

/// Framework id equals the given value (case-sensitive, per UIA providers).
pub fn framework_is(framework: &'static str) -> Condition {
    Condition::new(
        &format!("Framework is {}", framework),
        move |e| e.framework() == Some(framework),
    )
}

pub fn has_pattern(id: PatternId) -> Condition {
    Condition::new(
        &format!("supports pattern {}", id),
        move |e| e.has_pattern(id),
    )
}

pub fn bounding_rectangle_not_null() -> Condition {
    Condition::new("BoundingRectangle is not null", |e| {
        e.bounding_rectangle().is_some()
    })
}

pub fn is_off_screen() -> Condition {
    Condition::new("IsOffscreen is true", |e| e.is_off_screen())
}

pub fn is_on_screen() -> Condition {
    !is_off_screen()
}

pub fn is_enabled() -> Condition {
    Condition::new("IsEnabled is true", |e| e.is_enabled())
}

pub fn is_keyboard_focusable() -> Condition {
    Condition::new("IsKeyboardFocusable is true", |e| e.is_keyboard_focusable())
}

/// The IsContentElement property was supplied by the provider.
pub fn content_element_property_exists() -> Condition {
    Condition::new("IsContentElement exists", |e| {
        e.is_content_element().is_some()
    })
}

/// True when a string contains characters from the Unicode private use area,
/// which screen readers cannot announce meaningfully.
pub fn includes_private_unicode_characters(s: &str) -> bool {
    s.chars().any(|c| ('\u{E000}'..='\u{F8FF}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::UiElement;
    use crate::types::{framework, pattern};
    use std::sync::Arc;

    fn named_button(name_value: &str) -> Arc<UiElement> {
        UiElement::new(1, control_type::BUTTON)
            .with_name(name_value)
            .build()
    }

    #[test]
    fn test_string_property_conditions() {
        let with_name = named_button("OK");
        let blank = named_button("   ");
        let unnamed = UiElement::new(2, control_type::BUTTON).build();

        assert!(name().not_null().matches(with_name.as_ref()));
        assert!(name().not_null_or_whitespace().matches(with_name.as_ref()));

        assert!(name().not_null().matches(blank.as_ref()));
        assert!(!name().not_whitespace().matches(blank.as_ref()));

        // Absent property means "does not match", not an error.
        assert!(!name().not_null().matches(unnamed.as_ref()));
        assert!(!name().not_null_or_empty().matches(unnamed.as_ref()));
    }

    #[test]
    fn test_control_type_conditions() {
        let e = named_button("OK");
        assert!(control_type_is(control_type::BUTTON).matches(e.as_ref()));
        assert!(!control_type_is(control_type::PANE).matches(e.as_ref()));
        assert!(control_type_in(&[control_type::PANE, control_type::BUTTON]).matches(e.as_ref()));
        assert!(!is_custom_control().matches(e.as_ref()));
    }

    #[test]
    fn test_framework_condition() {
        let chrome = UiElement::new(1, control_type::DOCUMENT)
            .with_framework(framework::CHROME)
            .build();
        assert!(framework_is(framework::CHROME).matches(chrome.as_ref()));
        assert!(!framework_is(framework::WPF).matches(chrome.as_ref()));

        let no_framework = UiElement::new(2, control_type::DOCUMENT).build();
        assert!(!framework_is(framework::CHROME).matches(no_framework.as_ref()));
    }

    #[test]
    fn test_pattern_condition() {
        let e = UiElement::new(1, control_type::BUTTON)
            .with_pattern(crate::element::Pattern::new(pattern::INVOKE))
            .build();
        assert!(has_pattern(pattern::INVOKE).matches(e.as_ref()));
        assert!(!has_pattern(pattern::TOGGLE).matches(e.as_ref()));
    }

    #[test]
    fn test_private_unicode_detection() {
        assert!(includes_private_unicode_characters("icon \u{E001}"));
        assert!(!includes_private_unicode_characters("plain text"));
    }
}

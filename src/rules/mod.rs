//! The rule library
//!
//! Rules register through the explicit list in [`all`]; the registry validates
//! id uniqueness over that list at construction. No discovery magic: adding a
//! rule means adding its constructor here.

pub mod bounding_rectangle;
pub mod element_properties;
pub mod exclusions;
pub mod patterns;
pub mod text;

pub use bounding_rectangle::{BoundingRectangleNotAllZeros, BoundingRectangleNotNull};
pub use element_properties::{
    IsContentElementPropertyExists, IsControlElementTrueRequired, IsKeyboardFocusableShouldBeTrue,
};
pub use exclusions::{ChromiumComponentsShouldUseWebScanner, EdgeBrowserHasBeenDeprecated};
pub use patterns::{ButtonInvokeAndTogglePatterns, ButtonShouldHavePatterns, ProgressBarRangeValue};
pub use text::{
    HelpTextExcludesPrivateUnicodeCharacters, LocalizedControlTypeIsReasonable,
    NameExcludesControlType, NameNotEmpty, NameNotNull,
};

use crate::rule::Rule;

/// Every shipped rule, exclusion rules included.
pub fn all() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BoundingRectangleNotNull::new()),
        Box::new(BoundingRectangleNotAllZeros::new()),
        Box::new(NameNotNull::new()),
        Box::new(NameNotEmpty::new()),
        Box::new(NameExcludesControlType::new()),
        Box::new(LocalizedControlTypeIsReasonable::new()),
        Box::new(HelpTextExcludesPrivateUnicodeCharacters::new()),
        Box::new(IsControlElementTrueRequired::new()),
        Box::new(IsContentElementPropertyExists::new()),
        Box::new(IsKeyboardFocusableShouldBeTrue::new()),
        Box::new(ButtonShouldHavePatterns::new()),
        Box::new(ButtonInvokeAndTogglePatterns::new()),
        Box::new(ProgressBarRangeValue::new()),
        Box::new(ChromiumComponentsShouldUseWebScanner::new()),
        Box::new(EdgeBrowserHasBeenDeprecated::new()),
    ]
}

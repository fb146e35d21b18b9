//! Element abstraction over the captured UI Automation tree
//!
//! Rules never see a concrete tree type; they read elements through the
//! [`Element`] capability trait. The tree-capture subsystem owns element
//! lifetimes, this crate only reads them.

use crate::types::{ControlTypeId, PatternId, PropertyId, PropertyValue, Rect};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

/// A pattern supported by an element, with its pattern-specific properties
/// (e.g. the RangeValue pattern carries Minimum/Maximum/IsReadOnly).
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    pub id: PatternId,
    properties: HashMap<String, PropertyValue>,
}

impl Pattern {
    pub fn new(id: PatternId) -> Self {
        Self {
            id,
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }

    /// Get a pattern property value by name.
    pub fn value(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Capability interface every scanned element must satisfy.
///
/// All reads are non-mutating. Property absence is an `Option::None`, never an
/// error, so condition evaluation stays total.
pub trait Element: Send + Sync {
    /// Runtime-unique id of this element within the captured tree.
    fn unique_id(&self) -> i32;

    fn control_type_id(&self) -> ControlTypeId;

    /// Framework id reported by the provider (e.g. "WPF", "Chrome").
    fn framework(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    fn localized_control_type(&self) -> Option<&str>;

    fn help_text(&self) -> Option<&str>;

    fn bounding_rectangle(&self) -> Option<Rect>;

    fn is_off_screen(&self) -> bool;

    fn is_enabled(&self) -> bool;

    fn is_keyboard_focusable(&self) -> bool;

    /// IsControlElement, when the provider supplied the property.
    fn is_control_element(&self) -> Option<bool>;

    /// IsContentElement, when the provider supplied the property.
    fn is_content_element(&self) -> Option<bool>;

    /// Generic property lookup for properties without a typed accessor,
    /// including user-defined custom properties.
    fn property(&self, id: PropertyId) -> Option<PropertyValue>;

    /// Pattern lookup; `None` when the element does not support the pattern.
    fn pattern(&self, id: PatternId) -> Option<Pattern>;

    fn has_pattern(&self, id: PatternId) -> bool {
        self.pattern(id).is_some()
    }

    fn parent(&self) -> Option<Arc<dyn Element>>;

    fn children(&self) -> Vec<Arc<dyn Element>>;
}

/// Concrete element for callers that materialize a captured tree, and for
/// tests. Parent links are weak so trees drop cleanly.
#[derive(Default)]
pub struct UiElement {
    unique_id: i32,
    control_type_id: ControlTypeId,
    framework: Option<String>,
    name: Option<String>,
    localized_control_type: Option<String>,
    help_text: Option<String>,
    bounding_rectangle: Option<Rect>,
    is_off_screen: bool,
    is_enabled: bool,
    is_keyboard_focusable: bool,
    is_control_element: Option<bool>,
    is_content_element: Option<bool>,
    properties: HashMap<PropertyId, PropertyValue>,
    patterns: HashMap<PatternId, Pattern>,
    parent: RwLock<Weak<UiElement>>,
    children: RwLock<Vec<Arc<UiElement>>>,
}

impl UiElement {
    pub fn new(unique_id: i32, control_type_id: ControlTypeId) -> Self {
        Self {
            unique_id,
            control_type_id,
            is_enabled: true,
            ..Default::default()
        }
    }

    pub fn with_framework(mut self, framework: &str) -> Self {
        self.framework = Some(framework.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_localized_control_type(mut self, lct: &str) -> Self {
        self.localized_control_type = Some(lct.to_string());
        self
    }

    pub fn with_help_text(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    pub fn with_bounding_rectangle(mut self, rect: Rect) -> Self {
        self.bounding_rectangle = Some(rect);
        self
    }

    pub fn with_off_screen(mut self, off_screen: bool) -> Self {
        self.is_off_screen = off_screen;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    pub fn with_keyboard_focusable(mut self, focusable: bool) -> Self {
        self.is_keyboard_focusable = focusable;
        self
    }

    pub fn with_control_element(mut self, value: bool) -> Self {
        self.is_control_element = Some(value);
        self
    }

    pub fn with_content_element(mut self, value: bool) -> Self {
        self.is_content_element = Some(value);
        self
    }

    pub fn with_property(mut self, id: PropertyId, value: PropertyValue) -> Self {
        self.properties.insert(id, value);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.insert(pattern.id, pattern);
        self
    }

    /// Finish building and wrap in an `Arc` so the element can be linked into
    /// a tree and shared across scan threads.
    pub fn build(self) -> Arc<UiElement> {
        Arc::new(self)
    }

    /// Attach `child` under `parent`, wiring both directions of the link.
    pub fn append_child(parent: &Arc<UiElement>, child: Arc<UiElement>) {
        *child.parent.write().expect("parent lock poisoned") = Arc::downgrade(parent);
        parent
            .children
            .write()
            .expect("children lock poisoned")
            .push(child);
    }
}

impl Element for UiElement {
    fn unique_id(&self) -> i32 {
        self.unique_id
    }

    fn control_type_id(&self) -> ControlTypeId {
        self.control_type_id
    }

    fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn localized_control_type(&self) -> Option<&str> {
        self.localized_control_type.as_deref()
    }

    fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    fn bounding_rectangle(&self) -> Option<Rect> {
        self.bounding_rectangle
    }

    fn is_off_screen(&self) -> bool {
        self.is_off_screen
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn is_keyboard_focusable(&self) -> bool {
        self.is_keyboard_focusable
    }

    fn is_control_element(&self) -> Option<bool> {
        self.is_control_element
    }

    fn is_content_element(&self) -> Option<bool> {
        self.is_content_element
    }

    fn property(&self, id: PropertyId) -> Option<PropertyValue> {
        self.properties.get(&id).cloned()
    }

    fn pattern(&self, id: PatternId) -> Option<Pattern> {
        self.patterns.get(&id).cloned()
    }

    fn parent(&self) -> Option<Arc<dyn Element>> {
        self.parent
            .read()
            .expect("parent lock poisoned")
            .upgrade()
            .map(|p| p as Arc<dyn Element>)
    }

    fn children(&self) -> Vec<Arc<dyn Element>> {
        self.children
            .read()
            .expect("children lock poisoned")
            .iter()
            .map(|c| Arc::clone(c) as Arc<dyn Element>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{control_type, pattern};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_builder() {
        let e = UiElement::new(1, control_type::BUTTON)
            .with_name("OK")
            .with_framework("WPF")
            .with_bounding_rectangle(Rect::new(0, 0, 20, 10))
            .build();

        assert_eq!(e.unique_id(), 1);
        assert_eq!(e.control_type_id(), control_type::BUTTON);
        assert_eq!(e.name(), Some("OK"));
        assert_eq!(e.framework(), Some("WPF"));
        assert_eq!(e.bounding_rectangle(), Some(Rect::new(0, 0, 20, 10)));
        assert!(e.is_enabled());
        assert!(!e.is_off_screen());
    }

    #[test]
    fn test_missing_properties_are_none() {
        let e = UiElement::new(2, control_type::PANE).build();
        assert_eq!(e.name(), None);
        assert_eq!(e.help_text(), None);
        assert_eq!(e.is_control_element(), None);
        assert_eq!(e.property(99999), None);
        assert!(!e.has_pattern(pattern::INVOKE));
    }

    #[test]
    fn test_pattern_lookup() {
        let e = UiElement::new(3, control_type::PROGRESS_BAR)
            .with_pattern(
                Pattern::new(pattern::RANGE_VALUE)
                    .with_property("Minimum", PropertyValue::Double(0.0))
                    .with_property("Maximum", PropertyValue::Double(100.0)),
            )
            .build();

        assert!(e.has_pattern(pattern::RANGE_VALUE));
        let p = e.pattern(pattern::RANGE_VALUE).unwrap();
        assert_eq!(p.value("Minimum"), Some(&PropertyValue::Double(0.0)));
        assert_eq!(p.value("IsReadOnly"), None);
    }

    #[test]
    fn test_tree_navigation() {
        let root = UiElement::new(1, control_type::WINDOW).build();
        let child = UiElement::new(2, control_type::BUTTON).build();
        UiElement::append_child(&root, Arc::clone(&child));

        let children = root.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].unique_id(), 2);
        assert_eq!(child.parent().unwrap().unique_id(), 1);

        // Dropping the root breaks the weak parent link.
        drop(root);
        drop(children);
        assert!(child.parent().is_none());
    }
}

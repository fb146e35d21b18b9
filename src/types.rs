//! UI Automation identifier constants and value types
//!
//! Control type, property, and pattern ids use the numeric values defined by
//! the UI Automation framework so captured trees can be fed in unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI Automation property id (e.g. `UIA_NamePropertyId`).
pub type PropertyId = i32;

/// UI Automation pattern id (e.g. `UIA_InvokePatternId`).
pub type PatternId = i32;

/// UI Automation control type id (e.g. `UIA_ButtonControlTypeId`).
pub type ControlTypeId = i32;

/// Control type ids.
pub mod control_type {
    use super::ControlTypeId;

    pub const BUTTON: ControlTypeId = 50000;
    pub const CALENDAR: ControlTypeId = 50001;
    pub const CHECK_BOX: ControlTypeId = 50002;
    pub const COMBO_BOX: ControlTypeId = 50003;
    pub const EDIT: ControlTypeId = 50004;
    pub const HYPERLINK: ControlTypeId = 50005;
    pub const IMAGE: ControlTypeId = 50006;
    pub const LIST_ITEM: ControlTypeId = 50007;
    pub const LIST: ControlTypeId = 50008;
    pub const MENU: ControlTypeId = 50009;
    pub const MENU_BAR: ControlTypeId = 50010;
    pub const MENU_ITEM: ControlTypeId = 50011;
    pub const PROGRESS_BAR: ControlTypeId = 50012;
    pub const RADIO_BUTTON: ControlTypeId = 50013;
    pub const SCROLL_BAR: ControlTypeId = 50014;
    pub const SLIDER: ControlTypeId = 50015;
    pub const SPINNER: ControlTypeId = 50016;
    pub const STATUS_BAR: ControlTypeId = 50017;
    pub const TAB: ControlTypeId = 50018;
    pub const TAB_ITEM: ControlTypeId = 50019;
    pub const TEXT: ControlTypeId = 50020;
    pub const TOOL_BAR: ControlTypeId = 50021;
    pub const TOOL_TIP: ControlTypeId = 50022;
    pub const TREE: ControlTypeId = 50023;
    pub const TREE_ITEM: ControlTypeId = 50024;
    pub const CUSTOM: ControlTypeId = 50025;
    pub const GROUP: ControlTypeId = 50026;
    pub const THUMB: ControlTypeId = 50027;
    pub const DATA_GRID: ControlTypeId = 50028;
    pub const DATA_ITEM: ControlTypeId = 50029;
    pub const DOCUMENT: ControlTypeId = 50030;
    pub const SPLIT_BUTTON: ControlTypeId = 50031;
    pub const WINDOW: ControlTypeId = 50032;
    pub const PANE: ControlTypeId = 50033;
    pub const HEADER: ControlTypeId = 50034;
    pub const HEADER_ITEM: ControlTypeId = 50035;
    pub const TABLE: ControlTypeId = 50036;
    pub const TITLE_BAR: ControlTypeId = 50037;
    pub const SEPARATOR: ControlTypeId = 50038;
    pub const SEMANTIC_ZOOM: ControlTypeId = 50039;
    pub const APP_BAR: ControlTypeId = 50040;

    /// Short English name of a control type, used when checking whether an
    /// element's name echoes its own control type.
    pub fn name_of(id: ControlTypeId) -> Option<&'static str> {
        let name = match id {
            BUTTON => "button",
            CALENDAR => "calendar",
            CHECK_BOX => "check box",
            COMBO_BOX => "combo box",
            EDIT => "edit",
            HYPERLINK => "link",
            IMAGE => "image",
            LIST_ITEM => "list item",
            LIST => "list",
            MENU => "menu",
            MENU_BAR => "menu bar",
            MENU_ITEM => "menu item",
            PROGRESS_BAR => "progress bar",
            RADIO_BUTTON => "radio button",
            SCROLL_BAR => "scroll bar",
            SLIDER => "slider",
            SPINNER => "spinner",
            STATUS_BAR => "status bar",
            TAB => "tab",
            TAB_ITEM => "tab item",
            TEXT => "text",
            TOOL_BAR => "tool bar",
            TOOL_TIP => "tool tip",
            TREE => "tree",
            TREE_ITEM => "tree item",
            CUSTOM => "custom",
            GROUP => "group",
            THUMB => "thumb",
            DATA_GRID => "data grid",
            DATA_ITEM => "data item",
            DOCUMENT => "document",
            SPLIT_BUTTON => "split button",
            WINDOW => "window",
            PANE => "pane",
            HEADER => "header",
            HEADER_ITEM => "header item",
            TABLE => "table",
            TITLE_BAR => "title bar",
            SEPARATOR => "separator",
            SEMANTIC_ZOOM => "semantic zoom",
            APP_BAR => "app bar",
            _ => return None,
        };
        Some(name)
    }

    /// LocalizedControlType values considered reasonable for a control type.
    /// Comma-separated alternatives mirror how assistive technologies announce
    /// the type on localized en-US systems.
    pub fn expected_localized_types(id: ControlTypeId) -> Option<&'static [&'static str]> {
        let names: &'static [&'static str] = match id {
            APP_BAR => &["app bar"],
            BUTTON => &["button"],
            CALENDAR => &["calendar"],
            CHECK_BOX => &["check box", "checkbox"],
            COMBO_BOX => &["combo box", "combobox"],
            EDIT => &["edit", "text box"],
            HYPERLINK => &["hyperlink", "link"],
            IMAGE => &["image", "graphic"],
            LIST_ITEM => &["list item"],
            LIST => &["list", "list box", "list view"],
            MENU => &["menu"],
            MENU_BAR => &["menu bar"],
            MENU_ITEM => &["menu item"],
            PROGRESS_BAR => &["progress bar"],
            RADIO_BUTTON => &["radio button"],
            SCROLL_BAR => &["scroll bar"],
            SLIDER => &["slider"],
            SPINNER => &["spinner"],
            STATUS_BAR => &["status bar"],
            TAB => &["tab"],
            TAB_ITEM => &["tab item"],
            TEXT => &["text"],
            TOOL_BAR => &["tool bar", "toolbar"],
            TOOL_TIP => &["tool tip", "tooltip"],
            TREE => &["tree", "tree view"],
            TREE_ITEM => &["tree item"],
            GROUP => &["group"],
            THUMB => &["thumb"],
            DATA_GRID => &["data grid", "datagrid"],
            DATA_ITEM => &["data item", "item"],
            DOCUMENT => &["document"],
            SPLIT_BUTTON => &["split button"],
            WINDOW => &["window"],
            PANE => &["pane"],
            HEADER => &["header"],
            HEADER_ITEM => &["header item"],
            TABLE => &["table"],
            TITLE_BAR => &["title bar"],
            SEPARATOR => &["separator"],
            SEMANTIC_ZOOM => &["semantic zoom"],
            _ => return None,
        };
        Some(names)
    }
}

/// Property ids.
pub mod property {
    use super::PropertyId;

    pub const BOUNDING_RECTANGLE: PropertyId = 30001;
    pub const CONTROL_TYPE: PropertyId = 30003;
    pub const LOCALIZED_CONTROL_TYPE: PropertyId = 30004;
    pub const NAME: PropertyId = 30005;
    pub const IS_KEYBOARD_FOCUSABLE: PropertyId = 30009;
    pub const IS_ENABLED: PropertyId = 30010;
    pub const HELP_TEXT: PropertyId = 30013;
    pub const IS_CONTROL_ELEMENT: PropertyId = 30016;
    pub const IS_CONTENT_ELEMENT: PropertyId = 30017;
    pub const FRAMEWORK_ID: PropertyId = 30024;
    pub const IS_OFFSCREEN: PropertyId = 30022;
}

/// Pattern ids.
pub mod pattern {
    use super::PatternId;

    pub const INVOKE: PatternId = 10000;
    pub const SELECTION: PatternId = 10001;
    pub const VALUE: PatternId = 10002;
    pub const RANGE_VALUE: PatternId = 10003;
    pub const SCROLL: PatternId = 10004;
    pub const EXPAND_COLLAPSE: PatternId = 10005;
    pub const GRID: PatternId = 10006;
    pub const GRID_ITEM: PatternId = 10007;
    pub const WINDOW: PatternId = 10009;
    pub const SELECTION_ITEM: PatternId = 10010;
    pub const TABLE: PatternId = 10012;
    pub const TABLE_ITEM: PatternId = 10013;
    pub const TEXT: PatternId = 10014;
    pub const TOGGLE: PatternId = 10015;
    pub const TRANSFORM: PatternId = 10016;
}

/// Framework identifiers as reported by UI Automation providers.
pub mod framework {
    pub const WIN32: &str = "Win32";
    pub const WIN_FORM: &str = "WinForm";
    pub const WPF: &str = "WPF";
    pub const XAML: &str = "XAML";
    pub const EDGE: &str = "MicrosoftEdge";
    pub const CHROME: &str = "Chrome";
    pub const INTERNET_EXPLORER: &str = "InternetExplorer";
    pub const DIRECT_UI: &str = "DirectUI";
}

/// Screen point in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when every coordinate is zero, the value UIA providers report
    /// for elements with no on-screen presence.
    pub fn is_all_zeros(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Declared data type of a user-defined UI Automation property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyDataType {
    String,
    Int,
    Bool,
    Double,
    Point,
    Element,
}

impl fmt::Display for PropertyDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyDataType::String => write!(f, "string"),
            PropertyDataType::Int => write!(f, "int"),
            PropertyDataType::Bool => write!(f, "bool"),
            PropertyDataType::Double => write!(f, "double"),
            PropertyDataType::Point => write!(f, "point"),
            PropertyDataType::Element => write!(f, "element"),
        }
    }
}

impl std::str::FromStr for PropertyDataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(PropertyDataType::String),
            "int" => Ok(PropertyDataType::Int),
            "bool" => Ok(PropertyDataType::Bool),
            "double" => Ok(PropertyDataType::Double),
            "point" => Ok(PropertyDataType::Point),
            "element" => Ok(PropertyDataType::Element),
            _ => Err(format!("Unknown property data type: {}", s)),
        }
    }
}

/// A typed property value attached to an element or pattern.
///
/// This is a closed union: configuration validation rejects any declared type
/// outside this set, so rendering never meets an unknown variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyValue {
    String(String),
    Int(i32),
    Bool(bool),
    Double(f64),
    Point(Point),
    /// Runtime id of another element in the same tree.
    ElementRef(i32),
}

impl PropertyValue {
    /// The declared data type this value satisfies.
    pub fn data_type(&self) -> PropertyDataType {
        match self {
            PropertyValue::String(_) => PropertyDataType::String,
            PropertyValue::Int(_) => PropertyDataType::Int,
            PropertyValue::Bool(_) => PropertyDataType::Bool,
            PropertyValue::Double(_) => PropertyDataType::Double,
            PropertyValue::Point(_) => PropertyDataType::Point,
            PropertyValue::ElementRef(_) => PropertyDataType::Element,
        }
    }

    /// Render the value for display in reports, one arm per variant.
    pub fn render(&self) -> String {
        match self {
            PropertyValue::String(s) => s.clone(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Double(d) => d.to_string(),
            PropertyValue::Point(p) => format!("[x={},y={}]", p.x, p.y),
            PropertyValue::ElementRef(id) => format!("[element {}]", id),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            PropertyValue::Double(d) => Some(*d),
            PropertyValue::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }
}

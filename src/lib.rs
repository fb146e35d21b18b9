//! uia-rules - Accessibility Rule Engine for UI Automation Trees
//!
//! Evaluates a library of accessibility rules against captured UI Automation
//! element trees and aggregates the outcomes into reportable scan results.
//!
//! # Architecture
//!
//! ```text
//! Scanner -> RuleRunner -> RuleRegistry -> Rule -> Element
//!                 |
//!                 v
//!            ScanResults
//! ```
//!
//! Each rule pairs an applicability [`Condition`] with an evaluation test.
//! The runner evaluates exclusion rules first; elements they fail are
//! withheld from the main pass. Outcomes map to reporting statuses with
//! fixed precedence, so a single failure dominates any number of passes.
//!
//! # Evaluating a single element
//!
//! ```
//! use std::sync::Arc;
//! use uia_rules::{CancelToken, RuleRegistry, RuleRunner, ScanResults};
//! use uia_rules::element::UiElement;
//! use uia_rules::types::control_type;
//!
//! let registry = RuleRegistry::new()?;
//! let runner = RuleRunner::new(&registry);
//! let element = UiElement::new(1, control_type::BUTTON).with_name("Save").build();
//!
//! let mut results = ScanResults::new();
//! runner.run(element.as_ref(), &mut results, &CancelToken::new())?;
//! println!("{}", results.status());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod condition;
pub mod config;
pub mod element;
pub mod guidelines;
pub mod property_conditions;
pub mod registry;
pub mod results;
pub mod rule;
pub mod rules;
pub mod runner;
pub mod scanner;
pub mod types;

// Re-export main types
pub use condition::Condition;
pub use config::{ConfigError, CustomProperty, CustomPropertyConfig};
pub use element::{Element, Pattern, UiElement};
pub use guidelines::{Guideline, GuidelineInfo};
pub use registry::{RegistryError, RuleRegistry};
pub use results::{RuleResult, ScanResult, ScanResults, ScanStatus};
pub use rule::{EvaluationCode, Rule, RuleId, RuleInfo};
pub use runner::{RunResult, RunnerError, RuleRunner};
pub use scanner::{CancelToken, ElementResult, ScanOptions, ScanReport, Scanner};
pub use types::{ControlTypeId, PatternId, PropertyDataType, PropertyId, PropertyValue, Rect};

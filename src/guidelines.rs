//! Accessibility standard references
//!
//! Maps the standard a rule cites to a guideline URL and short description
//! for reporting. The table is closed: every rule's `standard` field is a
//! [`Guideline`] variant, so a lookup can never miss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An accessibility standard a rule is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guideline {
    AvailableActions,
    InfoAndRelationships,
    Keyboard,
    NameRoleValue,
    ObjectInformation,
}

/// Reporting metadata for a guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidelineInfo {
    pub url: &'static str,
    pub short_description: &'static str,
}

impl Guideline {
    pub fn info(&self) -> GuidelineInfo {
        match self {
            Guideline::AvailableActions => GuidelineInfo {
                url: "https://www.access-board.gov/guidelines-and-standards/communications-and-it/about-the-ict-refresh/final-rule/single-file-version#502-interoperability-assistive-technology",
                short_description: "Section 508 502.3.10",
            },
            Guideline::InfoAndRelationships => GuidelineInfo {
                url: "https://www.w3.org/TR/UNDERSTANDING-WCAG20/content-structure-separation-programmatic.html",
                short_description: "WCAG 1.3.1",
            },
            Guideline::Keyboard => GuidelineInfo {
                url: "https://www.w3.org/TR/UNDERSTANDING-WCAG20/keyboard-operation-keyboard-operable.html",
                short_description: "WCAG 2.1.1",
            },
            Guideline::NameRoleValue => GuidelineInfo {
                url: "https://www.w3.org/TR/UNDERSTANDING-WCAG20/ensure-compat-rsv.html",
                short_description: "WCAG 4.1.2",
            },
            Guideline::ObjectInformation => GuidelineInfo {
                url: "https://www.access-board.gov/guidelines-and-standards/communications-and-it/about-the-ict-refresh/final-rule/single-file-version#502-interoperability-assistive-technology",
                short_description: "Section 508 502.3.1",
            },
        }
    }
}

impl fmt::Display for Guideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().short_description)
    }
}

//! Disclosure scoring: grading, category aggregation, advice, and the
//! standard checklist template.

pub mod advice;
pub mod aggregate;
pub mod domain;
pub mod template;
mod views;

pub use advice::{advise, Advice};
pub use aggregate::{aggregate, Assessment, CategoryResult, TrendDirection};
pub use domain::{grade, Category, DisclosureItem, Grade, ItemCode, Standard};
pub use template::{DisclosureInput, DisclosureTemplate, MergedChecklist};
pub use views::{AssessmentView, CategoryCardView, ItemAssessmentView};

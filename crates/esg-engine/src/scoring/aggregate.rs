use super::domain::{grade, Category, DisclosureItem, Grade};
use crate::reporting::Scorecard;
use serde::Serialize;
use tracing::debug;

/// Score spread (in percentage points) before a result counts as moving
/// away from its benchmark.
const TREND_TOLERANCE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Steady,
    Declining,
}

impl TrendDirection {
    pub fn between(score: f64, benchmark: Option<f64>) -> Self {
        match benchmark {
            Some(benchmark) if score - benchmark > TREND_TOLERANCE => Self::Improving,
            Some(benchmark) if score - benchmark < -TREND_TOLERANCE => Self::Declining,
            _ => Self::Steady,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Above benchmark",
            Self::Steady => "On benchmark",
            Self::Declining => "Below benchmark",
        }
    }
}

/// Score, grade, and benchmark for one category or for the whole checklist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryResult {
    pub score: f64,
    pub grade: Grade,
    /// `None` when there were no items to average.
    pub benchmark: Option<f64>,
    pub trend: TrendDirection,
    pub item_count: usize,
}

impl CategoryResult {
    fn new(score: f64, benchmark: Option<f64>, item_count: usize) -> Self {
        Self {
            score,
            grade: grade(score),
            benchmark,
            trend: TrendDirection::between(score, benchmark),
            item_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub environmental: CategoryResult,
    pub social: CategoryResult,
    pub governance: CategoryResult,
    pub overall: CategoryResult,
}

impl Assessment {
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::E => &self.environmental,
            Category::S => &self.social,
            Category::G => &self.governance,
        }
    }

    /// Clamped scores ready to be stored on a report record.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::new(
            self.overall.score,
            self.environmental.score,
            self.social.score,
            self.governance.score,
        )
    }
}

/// Rolls disclosure items up into per-category and overall results.
///
/// Category and overall scores are `100 * Σ company / Σ max`, so the overall
/// figure is weighted by each item's max value rather than averaging the three
/// category scores.
pub fn aggregate(items: &[DisclosureItem]) -> Assessment {
    let [environmental, social, governance] =
        Category::ordered().map(|category| category_result(items, category));

    let benchmarks: Vec<f64> = [environmental, social, governance]
        .iter()
        .filter_map(|result| result.benchmark)
        .collect();
    let overall_benchmark = mean(&benchmarks);
    let overall = CategoryResult::new(
        weighted_score(items.iter()),
        overall_benchmark,
        items.len(),
    );

    debug!(
        items = items.len(),
        overall_score = overall.score,
        "aggregated disclosure items"
    );

    Assessment {
        environmental,
        social,
        governance,
        overall,
    }
}

fn category_result(items: &[DisclosureItem], category: Category) -> CategoryResult {
    let in_category: Vec<&DisclosureItem> = items
        .iter()
        .filter(|item| item.category == category)
        .collect();

    let standards: Vec<f64> = in_category.iter().map(|item| item.standard_value).collect();
    CategoryResult::new(
        weighted_score(in_category.iter().copied()),
        mean(&standards),
        in_category.len(),
    )
}

fn weighted_score<'a>(items: impl Iterator<Item = &'a DisclosureItem>) -> f64 {
    let (achieved, attainable) = items.fold((0.0, 0.0), |(achieved, attainable), item| {
        (achieved + item.company_value(), attainable + item.max_value())
    });

    if achieved.is_finite() && attainable.is_finite() && attainable > 0.0 {
        achieved / attainable * 100.0
    } else {
        0.0
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

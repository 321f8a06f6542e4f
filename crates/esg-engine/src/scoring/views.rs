use super::advice::{advise, Advice};
use super::aggregate::{aggregate, Assessment, CategoryResult, TrendDirection};
use super::domain::{Category, DisclosureItem, Grade, Standard};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ItemAssessmentView {
    pub id: String,
    pub item_number: String,
    pub item_name: String,
    pub item_name_ko: String,
    pub category: Category,
    pub company_value: f64,
    pub standard_value: f64,
    pub max_value: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub gap: f64,
    pub advice: Advice,
}

impl ItemAssessmentView {
    fn build(item: &DisclosureItem, standard: Standard) -> Self {
        Self {
            id: item.id.clone(),
            item_number: item.item_number.clone(),
            item_name: item.item_name.clone(),
            item_name_ko: item.item_name_ko.clone(),
            category: item.category,
            company_value: item.company_value(),
            standard_value: item.standard_value,
            max_value: item.max_value(),
            percentage: item.percentage(),
            grade: item.grade(),
            gap: item.gap(),
            advice: advise(item, standard),
        }
    }
}

/// Rating card for one category, or for the whole checklist when `category`
/// is `None`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub label: &'static str,
    pub label_ko: &'static str,
    pub score: f64,
    pub grade: Grade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<f64>,
    pub trend: TrendDirection,
    pub trend_label: &'static str,
}

impl CategoryCardView {
    fn build(category: Option<Category>, result: &CategoryResult) -> Self {
        let (label, label_ko) = match category {
            Some(category) => (category.label(), category.label_ko()),
            None => ("ESG Total", "ESG 총점"),
        };
        Self {
            category,
            label,
            label_ko,
            score: result.score,
            grade: result.grade,
            benchmark: result.benchmark,
            trend: result.trend,
            trend_label: result.trend.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub standard: Standard,
    pub cards: Vec<CategoryCardView>,
    pub items: Vec<ItemAssessmentView>,
}

impl AssessmentView {
    /// Scores the checklist and lays it out the way the dashboard shows it:
    /// E, S, G cards followed by the total, items grouped by category.
    pub fn build(items: &[DisclosureItem], standard: Standard) -> Self {
        let assessment = aggregate(items);
        Self::from_assessment(&assessment, items, standard)
    }

    pub fn from_assessment(
        assessment: &Assessment,
        items: &[DisclosureItem],
        standard: Standard,
    ) -> Self {
        let mut cards: Vec<CategoryCardView> = Category::ordered()
            .into_iter()
            .map(|category| CategoryCardView::build(Some(category), assessment.category(category)))
            .collect();
        cards.push(CategoryCardView::build(None, &assessment.overall));

        let items = Category::ordered()
            .into_iter()
            .flat_map(|category| {
                items
                    .iter()
                    .filter(move |item| item.category == category)
                    .map(move |item| ItemAssessmentView::build(item, standard))
            })
            .collect();

        Self {
            standard,
            cards,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::template::{DisclosureInput, DisclosureTemplate};

    #[test]
    fn view_groups_items_by_category_and_ends_with_total_card() {
        let template = DisclosureTemplate::standard(Standard::KEsg);
        let mut items = template
            .merge(&[DisclosureInput {
                item_number: "G-01".to_string(),
                company_value: 95.0,
            }])
            .items;
        items.reverse();

        let view = AssessmentView::build(&items, Standard::KEsg);

        assert_eq!(view.cards.len(), 4);
        assert!(view.cards[3].category.is_none());
        assert_eq!(view.items.first().map(|item| item.category), Some(Category::E));
        assert_eq!(view.items.last().map(|item| item.category), Some(Category::G));

        let board = view
            .items
            .iter()
            .find(|item| item.item_number == "G-01")
            .expect("board item present");
        assert_eq!(board.grade, Grade::APlus);
        assert!(board.advice.is_commendation());
    }
}

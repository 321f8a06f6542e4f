use esg_engine::scoring::{
    advise, aggregate, AssessmentView, Category, DisclosureInput, DisclosureItem,
    DisclosureTemplate, Grade, Standard, TrendDirection,
};

fn input(item_number: &str, company_value: f64) -> DisclosureInput {
    DisclosureInput {
        item_number: item_number.to_string(),
        company_value,
    }
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn environmental_inputs_roll_up_against_k_esg_benchmarks() {
    let checklist = DisclosureTemplate::standard(Standard::KEsg).merge(&[
        input("E-01", 80.0),
        input("E-02", 70.0),
        input("e-03", 60.0),
        input("E-04", 50.0),
    ]);
    assert!(checklist.ignored.is_empty());

    let assessment = aggregate(&checklist.items);

    approx(assessment.environmental.score, 65.0);
    assert_eq!(assessment.environmental.grade, Grade::C);
    approx(assessment.environmental.benchmark.unwrap_or_default(), 63.75);
    assert_eq!(assessment.environmental.trend, TrendDirection::Steady);

    assert_eq!(assessment.social.score, 0.0);
    assert_eq!(assessment.social.grade, Grade::F);
    assert_eq!(assessment.social.trend, TrendDirection::Declining);

    approx(assessment.overall.score, 260.0 / 1200.0 * 100.0);
    approx(
        assessment.overall.benchmark.unwrap_or_default(),
        (63.75 + 65.0 + 68.75) / 3.0,
    );
    assert_eq!(assessment.overall.item_count, 12);
}

#[test]
fn out_of_range_inputs_are_clamped_before_scoring() {
    let checklist = DisclosureTemplate::standard(Standard::Esrs).merge(&[
        input("G-01", 140.0),
        input("G-02", -20.0),
        input("Z-09", 50.0),
    ]);

    assert_eq!(checklist.ignored, vec!["Z-09".to_string()]);
    let governance: Vec<&DisclosureItem> = checklist
        .items
        .iter()
        .filter(|item| item.category == Category::G)
        .collect();
    assert_eq!(governance[0].company_value(), 100.0);
    assert_eq!(governance[1].company_value(), 0.0);

    let assessment = aggregate(&checklist.items);
    approx(assessment.governance.score, 25.0);
}

#[test]
fn advice_prefers_curated_text_and_falls_back_to_gap() {
    let items = DisclosureTemplate::standard(Standard::KEsg)
        .merge(&[input("E-01", 50.0), input("S-02", 90.0)])
        .items;

    let emissions = advise(&items[0], Standard::KEsg);
    assert!(emissions.en.starts_with("Implement energy-efficient technologies"));

    let diversity = items
        .iter()
        .find(|item| item.item_number == "S-02")
        .expect("S-02 present");
    assert!(advise(diversity, Standard::KEsg).is_commendation());

    let mislabelled =
        DisclosureItem::new("x", "S-01", Category::E, 70.0, 100.0).with_company_value(40.0);
    let fallback = advise(&mislabelled, Standard::Esrs);
    assert_eq!(
        fallback.en,
        "Improve by 30 points to meet ESRS standards. Focus on gap analysis and action planning."
    );
}

#[test]
fn empty_checklist_scores_zero_without_benchmarks() {
    let assessment = aggregate(&[]);

    for category in Category::ordered() {
        let result = assessment.category(category);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.benchmark, None);
        assert_eq!(result.trend, TrendDirection::Steady);
    }
    assert_eq!(assessment.overall.benchmark, None);
}

#[test]
fn assessment_view_lists_every_item_with_advice() {
    let checklist = DisclosureTemplate::standard(Standard::Esrs).merge(&[input("S-04", 61.0)]);

    let view = AssessmentView::build(&checklist.items, Standard::Esrs);

    assert_eq!(view.cards.len(), 4);
    assert_eq!(view.cards[3].label, "ESG Total");
    let item = view
        .items
        .iter()
        .find(|item| item.item_number == "S-04")
        .expect("S-04 present");
    assert_eq!(item.grade, Grade::DPlus);
    assert!(item.advice.is_commendation());
    assert_eq!(view.items.iter().filter(|item| item.advice.is_commendation()).count(), 1);
}

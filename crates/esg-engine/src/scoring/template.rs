use super::domain::{Category, DisclosureItem, Standard};
use serde::{Deserialize, Serialize};

/// Every checklist item is scored out of this many points.
pub const ITEM_MAX_VALUE: f64 = 100.0;

struct TemplateEntry {
    item_number: &'static str,
    category: Category,
    name: &'static str,
    name_ko: &'static str,
    k_esg_benchmark: f64,
    esrs_benchmark: f64,
}

const ENTRIES: [TemplateEntry; 12] = [
    TemplateEntry {
        item_number: "E-01",
        category: Category::E,
        name: "GHG Emissions Management",
        name_ko: "온실가스 배출 관리",
        k_esg_benchmark: 70.0,
        esrs_benchmark: 75.0,
    },
    TemplateEntry {
        item_number: "E-02",
        category: Category::E,
        name: "Energy Efficiency",
        name_ko: "에너지 효율",
        k_esg_benchmark: 65.0,
        esrs_benchmark: 70.0,
    },
    TemplateEntry {
        item_number: "E-03",
        category: Category::E,
        name: "Water Resource Management",
        name_ko: "수자원 관리",
        k_esg_benchmark: 60.0,
        esrs_benchmark: 65.0,
    },
    TemplateEntry {
        item_number: "E-04",
        category: Category::E,
        name: "Waste Management & Recycling",
        name_ko: "폐기물 관리 및 재활용",
        k_esg_benchmark: 60.0,
        esrs_benchmark: 68.0,
    },
    TemplateEntry {
        item_number: "S-01",
        category: Category::S,
        name: "Occupational Health & Safety",
        name_ko: "산업 안전 보건",
        k_esg_benchmark: 75.0,
        esrs_benchmark: 75.0,
    },
    TemplateEntry {
        item_number: "S-02",
        category: Category::S,
        name: "Diversity & Inclusion",
        name_ko: "다양성 및 포용성",
        k_esg_benchmark: 60.0,
        esrs_benchmark: 70.0,
    },
    TemplateEntry {
        item_number: "S-03",
        category: Category::S,
        name: "Labor Practices & Human Rights",
        name_ko: "노동 관행 및 인권",
        k_esg_benchmark: 70.0,
        esrs_benchmark: 72.0,
    },
    TemplateEntry {
        item_number: "S-04",
        category: Category::S,
        name: "Community Engagement",
        name_ko: "지역사회 참여",
        k_esg_benchmark: 55.0,
        esrs_benchmark: 60.0,
    },
    TemplateEntry {
        item_number: "G-01",
        category: Category::G,
        name: "Board Independence",
        name_ko: "이사회 독립성",
        k_esg_benchmark: 70.0,
        esrs_benchmark: 72.0,
    },
    TemplateEntry {
        item_number: "G-02",
        category: Category::G,
        name: "Ethics & Compliance",
        name_ko: "윤리 및 준법경영",
        k_esg_benchmark: 75.0,
        esrs_benchmark: 75.0,
    },
    TemplateEntry {
        item_number: "G-03",
        category: Category::G,
        name: "Risk Management",
        name_ko: "리스크 관리",
        k_esg_benchmark: 65.0,
        esrs_benchmark: 70.0,
    },
    TemplateEntry {
        item_number: "G-04",
        category: Category::G,
        name: "Transparency & Disclosure",
        name_ko: "투명성 및 정보공개",
        k_esg_benchmark: 65.0,
        esrs_benchmark: 74.0,
    },
];

/// User-entered value for one checklist line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureInput {
    pub item_number: String,
    pub company_value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergedChecklist {
    pub items: Vec<DisclosureItem>,
    /// Inputs whose item number is not part of the template.
    pub ignored: Vec<String>,
}

/// The standard checklist for one disclosure standard.
#[derive(Debug, Clone)]
pub struct DisclosureTemplate {
    standard: Standard,
}

impl DisclosureTemplate {
    pub fn standard(standard: Standard) -> Self {
        Self { standard }
    }

    /// Template items with every company value at zero.
    pub fn items(&self) -> Vec<DisclosureItem> {
        ENTRIES
            .iter()
            .map(|entry| {
                let benchmark = match self.standard {
                    Standard::KEsg => entry.k_esg_benchmark,
                    Standard::Esrs => entry.esrs_benchmark,
                };
                DisclosureItem::new(
                    entry.item_number.to_ascii_lowercase(),
                    entry.item_number,
                    entry.category,
                    benchmark,
                    ITEM_MAX_VALUE,
                )
                .with_names(entry.name, entry.name_ko)
            })
            .collect()
    }

    /// Applies user inputs to the template. Later inputs for the same item
    /// win; every value is clamped into the item's range.
    pub fn merge(&self, inputs: &[DisclosureInput]) -> MergedChecklist {
        let mut items = self.items();
        let mut ignored = Vec::new();

        for input in inputs {
            let number = input.item_number.trim();
            match items
                .iter_mut()
                .find(|item| item.item_number.eq_ignore_ascii_case(number))
            {
                Some(item) => item.set_company_value(input.company_value),
                None => ignored.push(input.item_number.clone()),
            }
        }

        MergedChecklist { items, ignored }
    }
}

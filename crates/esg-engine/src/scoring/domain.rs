use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    E,
    S,
    G,
}

impl Category {
    pub const fn ordered() -> [Self; 3] {
        [Self::E, Self::S, Self::G]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::E => "Environmental",
            Self::S => "Social",
            Self::G => "Governance",
        }
    }

    pub const fn label_ko(self) -> &'static str {
        match self {
            Self::E => "환경",
            Self::S => "사회",
            Self::G => "지배구조",
        }
    }
}

/// Disclosure standard a report is scored or viewed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Standard {
    #[default]
    #[serde(rename = "K-ESG", alias = "k-esg", alias = "KESG")]
    KEsg,
    #[serde(rename = "ESRS", alias = "esrs")]
    Esrs,
}

impl Standard {
    pub const fn name(self) -> &'static str {
        match self {
            Self::KEsg => "K-ESG",
            Self::Esrs => "ESRS",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "K-ESG" | "KESG" | "K_ESG" => Some(Self::KEsg),
            "ESRS" => Some(Self::Esrs),
            _ => None,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Inclusive lower bounds, highest first.
const GRADE_THRESHOLDS: [(f64, Grade); 8] = [
    (90.0, Grade::APlus),
    (85.0, Grade::A),
    (80.0, Grade::BPlus),
    (75.0, Grade::B),
    (70.0, Grade::CPlus),
    (65.0, Grade::C),
    (60.0, Grade::DPlus),
    (55.0, Grade::D),
];

/// Maps a percentage score to its letter grade. Anything below 55 (including
/// negative values and NaN) is an `F`.
pub fn grade(percentage: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// Closed set of checklist codes that carry curated advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCode {
    E01,
    E02,
    E03,
    E04,
    S01,
    S02,
    S03,
    S04,
    G01,
    G02,
    G03,
    G04,
}

impl ItemCode {
    pub fn parse(item_number: &str) -> Option<Self> {
        let code = match item_number.trim().to_ascii_uppercase().as_str() {
            "E-01" => Self::E01,
            "E-02" => Self::E02,
            "E-03" => Self::E03,
            "E-04" => Self::E04,
            "S-01" => Self::S01,
            "S-02" => Self::S02,
            "S-03" => Self::S03,
            "S-04" => Self::S04,
            "G-01" => Self::G01,
            "G-02" => Self::G02,
            "G-03" => Self::G03,
            "G-04" => Self::G04,
            _ => return None,
        };
        Some(code)
    }

    pub const fn category(self) -> Category {
        match self {
            Self::E01 | Self::E02 | Self::E03 | Self::E04 => Category::E,
            Self::S01 | Self::S02 | Self::S03 | Self::S04 => Category::S,
            Self::G01 | Self::G02 | Self::G03 | Self::G04 => Category::G,
        }
    }
}

/// One regulatory line item with the company's reported value and the
/// benchmark it is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDisclosureItem")]
pub struct DisclosureItem {
    pub id: String,
    pub item_number: String,
    pub item_name: String,
    pub item_name_ko: String,
    pub category: Category,
    company_value: f64,
    pub standard_value: f64,
    max_value: f64,
}

#[derive(Deserialize)]
struct RawDisclosureItem {
    id: String,
    item_number: String,
    #[serde(default)]
    item_name: String,
    #[serde(default)]
    item_name_ko: String,
    category: Category,
    company_value: f64,
    standard_value: f64,
    max_value: f64,
}

impl From<RawDisclosureItem> for DisclosureItem {
    fn from(raw: RawDisclosureItem) -> Self {
        let mut item = DisclosureItem::new(
            raw.id,
            raw.item_number,
            raw.category,
            raw.standard_value,
            raw.max_value,
        )
        .with_names(raw.item_name, raw.item_name_ko);
        item.set_company_value(raw.company_value);
        item
    }
}

impl DisclosureItem {
    pub fn new(
        id: impl Into<String>,
        item_number: impl Into<String>,
        category: Category,
        standard_value: f64,
        max_value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            item_number: item_number.into(),
            item_name: String::new(),
            item_name_ko: String::new(),
            category,
            company_value: 0.0,
            standard_value,
            max_value: if max_value.is_finite() {
                max_value.max(0.0)
            } else {
                0.0
            },
        }
    }

    pub fn with_names(mut self, name: impl Into<String>, name_ko: impl Into<String>) -> Self {
        self.item_name = name.into();
        self.item_name_ko = name_ko.into();
        self
    }

    pub fn with_company_value(mut self, value: f64) -> Self {
        self.set_company_value(value);
        self
    }

    /// Stores `value` clamped into `[0, max_value]`.
    pub fn set_company_value(&mut self, value: f64) {
        self.company_value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max_value)
        };
    }

    pub fn company_value(&self) -> f64 {
        self.company_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn code(&self) -> Option<ItemCode> {
        ItemCode::parse(&self.item_number)
    }

    pub fn percentage(&self) -> f64 {
        if self.max_value > 0.0 {
            self.company_value / self.max_value * 100.0
        } else {
            0.0
        }
    }

    pub fn grade(&self) -> Grade {
        grade(self.percentage())
    }

    /// Distance to the benchmark; zero or negative once the benchmark is met.
    pub fn gap(&self) -> f64 {
        self.standard_value - self.company_value
    }
}

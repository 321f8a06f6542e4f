use super::period::Period;
use super::record::CompanyEsgRecord;
use crate::scoring::{aggregate, Category, DisclosureItem, DisclosureTemplate, Standard};

/// Shown in place of a company name the user has not filled in yet.
pub const COMPANY_NAME_PLACEHOLDER: &str = "회사명을 입력하세요";

/// Months of history produced for demos; enough to span two report pages.
pub const SAMPLE_MONTHS: u32 = 20;

pub fn display_company_name(company_name: &str) -> &str {
    let trimmed = company_name.trim();
    if trimmed.is_empty() {
        COMPANY_NAME_PLACEHOLDER
    } else {
        trimmed
    }
}

/// Builds `months` monthly records ending at `latest`, newest first.
///
/// Each period gets a deterministic checklist per standard, and the
/// scorecards come from running that checklist through [`aggregate`].
pub fn generate_company_history(
    company_name: &str,
    latest: Period,
    months: u32,
) -> Vec<CompanyEsgRecord> {
    let company_name = display_company_name(company_name);

    (0..months)
        .map(|offset| {
            let period = latest.minus_months(offset);
            let k_esg = aggregate(&sample_checklist(Standard::KEsg, offset)).scorecard();
            let esrs = aggregate(&sample_checklist(Standard::Esrs, offset)).scorecard();

            CompanyEsgRecord::new(format!("company-{offset}"), company_name, period, k_esg)
                .with_scorecard(Standard::Esrs, esrs)
        })
        .collect()
}

/// Template items filled with values that drift month over month. Item values
/// inside a category spread symmetrically around the category level.
pub fn sample_checklist(standard: Standard, offset: u32) -> Vec<DisclosureItem> {
    let base = 70.0 + (offset % 10) as f64 * 2.5;

    let level = |category: Category| -> f64 {
        match standard {
            Standard::KEsg => match category {
                Category::E => base + (offset % 5) as f64 - 2.0,
                Category::S => base + (offset % 7) as f64 - 3.0,
                Category::G => base + (offset % 6) as f64 - 2.5,
            },
            Standard::Esrs => {
                let esrs_base = base + (offset % 8) as f64 - 3.0;
                match category {
                    Category::E => esrs_base + (offset % 4) as f64 - 1.5,
                    Category::S => esrs_base + (offset % 6) as f64 - 2.0,
                    Category::G => esrs_base + (offset % 5) as f64 - 2.0,
                }
            }
        }
    };

    DisclosureTemplate::standard(standard)
        .items()
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let spread = ((index % 4) as f64 - 1.5) * 2.0;
            let value = level(item.category) + spread;
            item.with_company_value(value)
        })
        .collect()
}

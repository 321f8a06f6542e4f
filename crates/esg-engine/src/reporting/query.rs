use super::period::Period;
use super::record::{CompanyEsgRecord, ReportRowView};
use crate::scoring::Standard;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rows per page on the report table.
pub const DEFAULT_PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "oldest" => Some(Self::Asc),
            "desc" | "descending" | "newest" | "latest" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Date window, sort order, and page for one report lookup.
///
/// Either bound missing disables date filtering entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn first_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            sort_order: SortOrder::default(),
            page: first_page(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReportQuery {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn sorted(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    fn window(&self) -> Option<(Period, Period)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((Period::containing(start), Period::containing(end))),
            _ => None,
        }
    }

    fn includes(&self, period: Period) -> bool {
        match self.window() {
            Some((first, last)) => {
                let day = period.first_day();
                day >= first.first_day() && day <= last.last_day()
            }
            None => true,
        }
    }
}

/// One page of filtered, sorted records. Rows keep every standard's scores so
/// the page can be shown under either standard without querying again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPage {
    pub rows: Vec<CompanyEsgRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl ReportPage {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn views(&self, standard: Standard) -> Vec<ReportRowView> {
        self.rows.iter().map(|row| row.view(standard)).collect()
    }
}

/// Filters `records` to the query window, orders them by period, and slices
/// out the requested page. A page past the end is empty, not an error.
pub fn run_query(records: &[CompanyEsgRecord], query: &ReportQuery) -> ReportPage {
    let page = query.page.max(1);
    let page_size = query.page_size.max(1);

    let mut filtered: Vec<&CompanyEsgRecord> = records
        .iter()
        .filter(|record| query.includes(record.period))
        .collect();

    match query.sort_order {
        SortOrder::Asc => filtered.sort_by(|a, b| a.period.cmp(&b.period)),
        SortOrder::Desc => filtered.sort_by(|a, b| b.period.cmp(&a.period)),
    }

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size);
    let rows = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        total_count,
        total_pages,
        page,
        returned = rows.len(),
        "report query evaluated"
    );

    ReportPage {
        rows,
        total_count,
        total_pages,
        page,
        page_size,
    }
}

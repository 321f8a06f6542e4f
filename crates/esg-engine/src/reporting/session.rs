use super::period::Period;
use super::query::{run_query, ReportPage, ReportQuery, SortOrder, DEFAULT_PAGE_SIZE};
use super::record::CompanyEsgRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How far back the report window reaches before the user changes it.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 24;

/// Filter controls being edited but not yet searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDraft {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub sort_order: SortOrder,
}

/// Caller-owned filter state for the report table.
///
/// Edits go to the draft; only [`ReportQuerySession::search`] copies them into
/// the applied query, so the visible page never changes while the user is
/// still picking dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuerySession {
    draft: QueryDraft,
    applied: ReportQuery,
}

impl ReportQuerySession {
    /// Covers the last 24 months up to `today`, newest first.
    pub fn new(today: NaiveDate, page_size: usize) -> Self {
        let start = Period::containing(today)
            .minus_months(DEFAULT_LOOKBACK_MONTHS)
            .first_day();
        let draft = QueryDraft {
            start: Some(start),
            end: Some(today),
            sort_order: SortOrder::Desc,
        };
        let applied = ReportQuery {
            start: draft.start,
            end: draft.end,
            sort_order: draft.sort_order,
            page: 1,
            page_size: page_size.max(1),
        };
        Self { draft, applied }
    }

    pub fn with_default_page_size(today: NaiveDate) -> Self {
        Self::new(today, DEFAULT_PAGE_SIZE)
    }

    pub fn draft(&self) -> &QueryDraft {
        &self.draft
    }

    pub fn applied(&self) -> &ReportQuery {
        &self.applied
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.draft.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.draft.end = end;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.draft.sort_order = sort_order;
    }

    /// Commits the draft and returns to the first page.
    pub fn search(&mut self) -> &ReportQuery {
        self.applied.start = self.draft.start;
        self.applied.end = self.draft.end;
        self.applied.sort_order = self.draft.sort_order;
        self.applied.page = 1;
        &self.applied
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.applied.page = page.max(1);
    }

    pub fn current_page(&self, records: &[CompanyEsgRecord]) -> ReportPage {
        run_query(records, &self.applied)
    }
}

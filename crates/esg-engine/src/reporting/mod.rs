//! Time-series reporting: dual-standard period records, the report store,
//! and the filter/sort/paginate query engine.

pub mod import;
pub mod period;
pub mod query;
pub mod record;
pub mod sample;
pub mod session;
pub mod store;

pub use import::ImportError;
pub use period::{Period, PeriodParseError};
pub use query::{run_query, ReportPage, ReportQuery, SortOrder, DEFAULT_PAGE_SIZE};
pub use record::{
    CompanyEsgRecord, ReportRowView, ScoreCell, ScoreEntry, Scorecard, ScorecardView,
    StandardScorecard,
};
pub use sample::{
    display_company_name, generate_company_history, sample_checklist, COMPANY_NAME_PLACEHOLDER,
    SAMPLE_MONTHS,
};
pub use session::{QueryDraft, ReportQuerySession, DEFAULT_LOOKBACK_MONTHS};
pub use store::ReportStore;

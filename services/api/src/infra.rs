use chrono::NaiveDate;
use esg_engine::config::{AuthConfig, ReportingConfig};
use esg_engine::reporting::{
    generate_company_history, CompanyEsgRecord, Period, ReportPage, ReportQuerySession,
    SortOrder, SAMPLE_MONTHS,
};
use esg_engine::scoring::{DisclosureInput, Standard};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) reporting: ReportingConfig,
    pub(crate) auth: AuthConfig,
}

/// One side of the report window. `Open` lifts the default bound, which
/// turns date filtering off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowBound {
    Open,
    Month(Period),
}

/// User-facing filter choices layered over the default report window. A
/// `None` bound keeps the default.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReportWindow {
    pub(crate) start: Option<WindowBound>,
    pub(crate) end: Option<WindowBound>,
    pub(crate) sort_order: Option<SortOrder>,
    pub(crate) page: Option<usize>,
}

/// Runs the same draft/search/page sequence the report screen does, starting
/// from the default window anchored at `today`.
pub(crate) fn report_page(
    records: &[CompanyEsgRecord],
    today: NaiveDate,
    page_size: usize,
    window: ReportWindow,
) -> ReportPage {
    let mut session = ReportQuerySession::new(today, page_size);
    match window.start {
        Some(WindowBound::Open) => session.set_start(None),
        Some(WindowBound::Month(start)) => session.set_start(Some(start.first_day())),
        None => {}
    }
    match window.end {
        Some(WindowBound::Open) => session.set_end(None),
        Some(WindowBound::Month(end)) => session.set_end(Some(end.last_day())),
        None => {}
    }
    if let Some(sort_order) = window.sort_order {
        session.set_sort_order(sort_order);
    }
    session.search();
    if let Some(page) = window.page {
        session.go_to_page(page);
    }
    session.current_page(records)
}

pub(crate) fn sample_records(company_name: &str, today: NaiveDate) -> Vec<CompanyEsgRecord> {
    generate_company_history(company_name, Period::containing(today), SAMPLE_MONTHS)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_period(raw: &str) -> Result<Period, String> {
    raw.parse::<Period>().map_err(|err| err.to_string())
}

/// `YYYY-MM`, or `all` for an open bound.
pub(crate) fn parse_bound(raw: &str) -> Result<WindowBound, String> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(WindowBound::Open);
    }
    parse_period(raw).map(WindowBound::Month)
}

pub(crate) fn parse_standard(raw: &str) -> Result<Standard, String> {
    Standard::parse(raw).ok_or_else(|| format!("unknown standard '{raw}', expected K-ESG or ESRS"))
}

pub(crate) fn parse_sort_order(raw: &str) -> Result<SortOrder, String> {
    SortOrder::parse(raw).ok_or_else(|| format!("unknown sort order '{raw}', expected asc or desc"))
}

/// Parses `ITEM=VALUE`, e.g. `E-01=72.5`.
pub(crate) fn parse_disclosure_input(raw: &str) -> Result<DisclosureInput, String> {
    let (item_number, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM=VALUE, got '{raw}'"))?;
    let company_value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for {}: {err}", item_number.trim()))?;

    Ok(DisclosureInput {
        item_number: item_number.trim().to_string(),
        company_value,
    })
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

/// A present `null` opens the bound; an absent field leaves the default.
pub(crate) fn deserialize_bound<'de, D>(
    deserializer: D,
) -> Result<Option<WindowBound>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(Some(WindowBound::Open)),
        Some(raw) => parse_bound(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

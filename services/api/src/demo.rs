use crate::infra::{
    parse_bound, parse_date, parse_disclosure_input, parse_sort_order, parse_standard,
    report_page, sample_records, ReportWindow, WindowBound,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use esg_engine::config::AppConfig;
use esg_engine::error::AppError;
use esg_engine::reporting::{
    display_company_name, sample_checklist, ReportPage, ReportStore, SortOrder,
};
use esg_engine::scoring::{AssessmentView, DisclosureInput, DisclosureTemplate, Standard};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Company shown on generated sample rows
    #[arg(long, default_value = "")]
    pub(crate) company: String,
    /// First month of the window (YYYY-MM, or `all`). Defaults to 24 months back.
    #[arg(long, value_parser = parse_bound)]
    pub(crate) start: Option<WindowBound>,
    /// Last month of the window (YYYY-MM, or `all`). Defaults to today.
    #[arg(long, value_parser = parse_bound)]
    pub(crate) end: Option<WindowBound>,
    /// Sort by period: asc or desc
    #[arg(long, value_parser = parse_sort_order)]
    pub(crate) sort: Option<SortOrder>,
    /// Page to print, starting at 1
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Rows per page (defaults to ESG_REPORT_PAGE_SIZE)
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
    /// Disclosure standard to view scores under
    #[arg(long, value_parser = parse_standard)]
    pub(crate) standard: Option<Standard>,
    /// Override the reporting date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// CSV export of company records; sample history is used when omitted
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Disclosure standard supplying the benchmarks
    #[arg(long, value_parser = parse_standard)]
    pub(crate) standard: Option<Standard>,
    /// Company values as ITEM=VALUE, e.g. E-01=72.5
    #[arg(value_parser = parse_disclosure_input)]
    pub(crate) inputs: Vec<DisclosureInput>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Company shown on the sample report
    #[arg(long, default_value = "")]
    pub(crate) company: String,
    /// Disclosure standard for both the assessment and the report
    #[arg(long, value_parser = parse_standard)]
    pub(crate) standard: Option<Standard>,
    /// Override the reporting date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let ReportArgs {
        company,
        start,
        end,
        sort,
        page,
        page_size,
        standard,
        today,
        csv,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let standard = standard.unwrap_or(config.reporting.default_standard);
    let page_size = page_size.unwrap_or(config.reporting.page_size);

    let records = match csv {
        Some(path) => ReportStore::from_path(path)?.into_records(),
        None => sample_records(&company, today),
    };

    let window = ReportWindow {
        start,
        end,
        sort_order: sort,
        page,
    };
    let report = report_page(&records, today, page_size, window);
    render_report(&report, standard);

    Ok(())
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let standard = args.standard.unwrap_or(config.reporting.default_standard);

    let checklist = DisclosureTemplate::standard(standard).merge(&args.inputs);
    for item_number in &checklist.ignored {
        println!("Skipping unknown item {item_number}");
    }

    render_assessment(&AssessmentView::build(&checklist.items, standard));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let DemoArgs {
        company,
        standard,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let standard = standard.unwrap_or(config.reporting.default_standard);

    println!("ESG scoring demo for {}", display_company_name(&company));

    let checklist = sample_checklist(standard, 0);
    render_assessment(&AssessmentView::build(&checklist, standard));

    let records = sample_records(&company, today);
    let report = report_page(
        &records,
        today,
        config.reporting.page_size,
        ReportWindow::default(),
    );
    println!();
    render_report(&report, standard);

    Ok(())
}

fn render_assessment(view: &AssessmentView) {
    println!("\n{} assessment", view.standard);
    for card in &view.cards {
        let benchmark = card
            .benchmark
            .map(|value| format!("{value:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- {:<14} {:>5.1} {:<2} benchmark {:>5} {}",
            card.label, card.score, card.grade, benchmark, card.trend_label
        );
    }

    println!("\nItems");
    for item in &view.items {
        println!(
            "- {} {:<40} {:>5.1}/{:<5.1} {:<2} gap {:>5.1}",
            item.item_number,
            item.item_name,
            item.company_value,
            item.standard_value,
            item.grade,
            item.gap
        );
        println!("    {}", item.advice.en);
    }
}

fn render_report(report: &ReportPage, standard: Standard) {
    println!(
        "{} report: page {} of {} ({} records)",
        standard,
        report.page,
        report.total_pages.max(1),
        report.total_count
    );

    if report.is_empty() {
        println!("- No records in the selected window");
        return;
    }

    println!(
        "  {:<8} {:<20} {:>11} {:>11} {:>11} {:>11}",
        "Period", "Company", "Overall", "E", "S", "G"
    );
    for row in report.views(standard) {
        println!(
            "  {:<8} {:<20} {:>8.1} {:<2} {:>8.1} {:<2} {:>8.1} {:<2} {:>8.1} {:<2}",
            row.period.to_string(),
            row.company_name,
            row.overall.score,
            row.overall.grade,
            row.environmental.score,
            row.environmental.grade,
            row.social.score,
            row.social.grade,
            row.governance.score,
            row.governance.grade
        );
    }
}

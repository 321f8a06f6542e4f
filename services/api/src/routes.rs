use crate::infra::{
    deserialize_bound, deserialize_optional_date, report_page, sample_records, AppState,
    ReportWindow, WindowBound,
};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use esg_engine::error::{AppError, InputError};
use esg_engine::reporting::{ReportRowView, ReportStore, SortOrder};
use esg_engine::scoring::{
    AssessmentView, DisclosureInput, DisclosureItem, DisclosureTemplate, Standard,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct TemplateParams {
    #[serde(default)]
    pub(crate) standard: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplateResponse {
    pub(crate) standard: Standard,
    pub(crate) items: Vec<DisclosureItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(default)]
    pub(crate) standard: Option<Standard>,
    #[serde(default)]
    pub(crate) inputs: Vec<DisclosureInput>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    #[serde(flatten)]
    pub(crate) view: AssessmentView,
    pub(crate) ignored: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportRequest {
    #[serde(default)]
    pub(crate) company_name: Option<String>,
    #[serde(default)]
    pub(crate) standard: Option<Standard>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub(crate) start: Option<WindowBound>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub(crate) end: Option<WindowBound>,
    #[serde(default)]
    pub(crate) sort_order: Option<SortOrder>,
    #[serde(default)]
    pub(crate) page: Option<usize>,
    #[serde(default)]
    pub(crate) page_size: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) records_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportResponse {
    pub(crate) standard: Standard,
    pub(crate) data_source: ReportDataSource,
    pub(crate) page: usize,
    pub(crate) page_size: usize,
    pub(crate) total_count: usize,
    pub(crate) total_pages: usize,
    pub(crate) rows: Vec<ReportRowView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReportDataSource {
    Csv,
    Sample,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/esg/template", get(template_endpoint))
        .route("/api/v1/esg/assessment", post(assessment_endpoint))
        .route("/api/v1/esg/report", post(report_endpoint))
        .route("/api/v1/auth/login-url", get(login_url_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn template_endpoint(
    Extension(state): Extension<AppState>,
    Query(params): Query<TemplateParams>,
) -> Result<Json<TemplateResponse>, AppError> {
    let standard = match params.standard {
        Some(raw) => Standard::parse(&raw).ok_or(InputError::UnknownStandard { value: raw })?,
        None => state.reporting.default_standard,
    };

    Ok(Json(TemplateResponse {
        standard,
        items: DisclosureTemplate::standard(standard).items(),
    }))
}

pub(crate) async fn assessment_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Json<AssessmentResponse> {
    let standard = payload
        .standard
        .unwrap_or(state.reporting.default_standard);
    let checklist = DisclosureTemplate::standard(standard).merge(&payload.inputs);
    if !checklist.ignored.is_empty() {
        debug!(ignored = ?checklist.ignored, "skipped unknown disclosure items");
    }

    Json(AssessmentResponse {
        view: AssessmentView::build(&checklist.items, standard),
        ignored: checklist.ignored,
    })
}

pub(crate) async fn report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let ReportRequest {
        company_name,
        standard,
        start,
        end,
        sort_order,
        page,
        page_size,
        today,
        records_csv,
    } = payload;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let standard = standard.unwrap_or(state.reporting.default_standard);
    let page_size = page_size.unwrap_or(state.reporting.page_size);

    let (records, data_source) = match records_csv {
        Some(csv) => {
            let store = ReportStore::from_reader(Cursor::new(csv.into_bytes()))?;
            (store.into_records(), ReportDataSource::Csv)
        }
        None => (
            sample_records(company_name.as_deref().unwrap_or_default(), today),
            ReportDataSource::Sample,
        ),
    };

    let window = ReportWindow {
        start,
        end,
        sort_order,
        page,
    };
    let report = report_page(&records, today, page_size, window);

    Ok(Json(ReportResponse {
        standard,
        data_source,
        page: report.page,
        page_size: report.page_size,
        total_count: report.total_count,
        total_pages: report.total_pages,
        rows: report.views(standard),
    }))
}

pub(crate) async fn login_url_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<serde_json::Value> {
    Json(json!({ "login_url": state.auth.login_url() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use esg_engine::config::{AuthConfig, ReportingConfig};
    use esg_engine::scoring::Grade;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            reporting: ReportingConfig {
                page_size: 15,
                default_standard: Standard::KEsg,
            },
            auth: AuthConfig {
                api_base_url: "http://localhost:8080".to_string(),
            },
        }
    }

    fn app(ready: bool) -> Router {
        router().layer(Extension(state(ready)))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).expect("valid date")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn template_route_rejects_unknown_standard() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/esg/template?standard=GRI")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap_or_default().contains("GRI"));
    }

    #[tokio::test]
    async fn template_route_uses_requested_benchmarks() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/esg/template?standard=esrs")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["standard"], "ESRS");
        assert_eq!(body["items"].as_array().map(Vec::len), Some(12));
        assert_eq!(body["items"][0]["standard_value"], 75.0);
    }

    #[tokio::test]
    async fn assessment_endpoint_scores_merged_checklist() {
        let request = AssessmentRequest {
            standard: None,
            inputs: vec![
                DisclosureInput {
                    item_number: "E-01".to_string(),
                    company_value: 95.0,
                },
                DisclosureInput {
                    item_number: "X-99".to_string(),
                    company_value: 10.0,
                },
            ],
        };

        let Json(body) = assessment_endpoint(Extension(state(true)), Json(request)).await;

        assert_eq!(body.view.standard, Standard::KEsg);
        assert_eq!(body.view.cards.len(), 4);
        assert_eq!(body.view.items.len(), 12);
        assert_eq!(body.view.items[0].grade, Grade::APlus);
        assert!(body.view.items[0].advice.is_commendation());
        assert_eq!(body.ignored, vec!["X-99".to_string()]);
    }

    #[tokio::test]
    async fn report_endpoint_pages_sample_history() {
        let request = ReportRequest {
            company_name: Some("Acme".to_string()),
            page: Some(2),
            today: Some(today()),
            ..ReportRequest::default()
        };

        let Json(body) = report_endpoint(Extension(state(true)), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, ReportDataSource::Sample);
        assert_eq!(body.total_count, 20);
        assert_eq!(body.total_pages, 2);
        assert_eq!(body.page, 2);
        assert_eq!(body.rows.len(), 5);
        assert_eq!(body.rows[0].company_name, "Acme");
    }

    #[tokio::test]
    async fn report_route_reads_csv_records() {
        let csv = "id,company_name,period,overall_score,e_score,s_score,g_score,esrs_overall_score,esrs_e_score,esrs_s_score,esrs_g_score\n\
a,Acme,2025-01,81,80,82,81,72,70,74,72\n\
b,Acme,2025-02,77,76,78,77,,,,\n";
        let request = post_json(
            "/api/v1/esg/report",
            json!({
                "standard": "ESRS",
                "today": "2025-03-10",
                "records_csv": csv,
            }),
        );

        let response = app(true).oneshot(request).await.expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data_source"], "csv");
        assert_eq!(body["total_count"], 2);
        assert_eq!(body["rows"][0]["period"], "2025-02");
        assert_eq!(body["rows"][0]["overall"]["score"], 77.0);
        assert_eq!(body["rows"][1]["overall"]["score"], 72.0);
    }

    #[tokio::test]
    async fn report_route_null_bounds_disable_date_filter() {
        let csv = "id,company_name,period,overall_score,e_score,s_score,g_score\n\
old,Acme,2019-04,61,60,62,61\n\
new,Acme,2025-02,77,76,78,77\n";

        let response = app(true)
            .oneshot(post_json(
                "/api/v1/esg/report",
                json!({ "today": "2025-03-10", "records_csv": csv }),
            ))
            .await
            .expect("router responds");
        assert_eq!(json_body(response).await["total_count"], 1);

        let response = app(true)
            .oneshot(post_json(
                "/api/v1/esg/report",
                json!({
                    "today": "2025-03-10",
                    "records_csv": csv,
                    "start": null,
                    "end": "all",
                }),
            ))
            .await
            .expect("router responds");
        let payload = json_body(response).await;
        assert_eq!(payload["total_count"], 2);
        assert_eq!(payload["rows"][1]["id"], "old");
    }

    #[tokio::test]
    async fn report_route_rejects_malformed_csv() {
        let request = post_json(
            "/api/v1/esg/report",
            json!({
                "records_csv": "id,company_name,period,overall_score,e_score,s_score,g_score\na,Acme,2025/01,81,80,82,81\n",
            }),
        );

        let response = app(true).oneshot(request).await.expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn login_url_points_at_kakao_login() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/auth/login-url")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let body = json_body(response).await;
        assert_eq!(body["login_url"], "http://localhost:8080/api/oauth/kakao/login");
    }
}

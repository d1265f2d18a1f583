use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use super::domain::{Category, RiskLevel, Submission};
use super::report::Clock;
use super::repository::{ReportId, ReportRepository, RepositoryError};
use super::resources::{emergency_resources, resources_for};
use super::service::{TriageService, TriageServiceError};

/// `{success, data}` wrapper shared by every endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_id: Option<ReportId>,
    data: T,
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    success: bool,
    error: &'a str,
}

fn success<T: Serialize>(data: T) -> Response {
    let body = Envelope {
        success: true,
        report_id: None,
        data,
    };
    (StatusCode::OK, Json(body)).into_response()
}

fn failure(status: StatusCode, message: &str) -> Response {
    let body = Failure {
        success: false,
        error: message,
    };
    (status, Json(body)).into_response()
}

/// Router builder exposing the question catalog and triage endpoints.
pub fn triage_router<R, C>(service: Arc<TriageService<R, C>>) -> Router
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/api/assessment/questions", get(questions_handler::<R, C>))
        .route(
            "/api/assessment/questions/category/:category",
            get(category_questions_handler::<R, C>),
        )
        .route("/api/assessment/categories", get(categories_handler::<R, C>))
        .route(
            "/api/assessment/question/:question_id",
            get(question_handler::<R, C>),
        )
        .route("/api/triage/submit", post(submit_handler::<R, C>))
        .route("/api/triage/report/:report_id", get(report_handler::<R, C>))
        .route(
            "/api/triage/resources/emergency",
            get(emergency_resources_handler),
        )
        .route(
            "/api/triage/resources/:risk_level",
            get(level_resources_handler),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R, C>(
    State(service): State<Arc<TriageService<R, C>>>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    success(service.catalog().list_questions())
}

pub(crate) async fn category_questions_handler<R, C>(
    State(service): State<Arc<TriageService<R, C>>>,
    Path(category): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    // Unknown categories simply match no questions.
    let questions = Category::parse(&category)
        .map(|category| service.catalog().list_by_category(category))
        .unwrap_or_default();
    success(questions)
}

pub(crate) async fn categories_handler<R, C>(
    State(service): State<Arc<TriageService<R, C>>>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    success(service.catalog().list_categories())
}

pub(crate) async fn question_handler<R, C>(
    State(service): State<Arc<TriageService<R, C>>>,
    Path(question_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    let question = question_id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| service.catalog().get_question(id).ok());

    match question {
        Some(question) => success(question),
        None => failure(StatusCode::NOT_FOUND, "Question not found"),
    }
}

pub(crate) async fn submit_handler<R, C>(
    State(service): State<Arc<TriageService<R, C>>>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let message = format!(
                "Invalid input: patientData and answers array are required ({})",
                rejection.body_text()
            );
            return failure(StatusCode::BAD_REQUEST, &message);
        }
    };

    match service.submit(submission) {
        Ok(stored) => {
            let body = Envelope {
                success: true,
                report_id: Some(stored.report_id),
                data: stored.report,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(TriageServiceError::Validation(error)) => {
            failure(StatusCode::BAD_REQUEST, &error.to_string())
        }
        Err(other) => {
            error!(error = %other, "failed to process assessment");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process assessment",
            )
        }
    }
}

pub(crate) async fn report_handler<R, C>(
    State(service): State<Arc<TriageService<R, C>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    match service.report(&ReportId(report_id)) {
        Ok(stored) => success(stored.report),
        Err(TriageServiceError::Repository(RepositoryError::NotFound)) => {
            failure(StatusCode::NOT_FOUND, "Report not found")
        }
        Err(other) => {
            error!(error = %other, "failed to load report");
            failure(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
        }
    }
}

pub(crate) async fn emergency_resources_handler() -> Response {
    success(emergency_resources())
}

pub(crate) async fn level_resources_handler(Path(risk_level): Path<String>) -> Response {
    let level = RiskLevel::parse(&risk_level).unwrap_or(RiskLevel::Low);
    success(resources_for(level))
}

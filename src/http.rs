use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Json, Router,
    extract::{Query, Request},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    config::{DEFAULT_LIMIT, DEFAULT_START, HTTP_BIND_ADDR, HTTP_PORT},
    errors,
    ingest::{IngestionGate, state::LoadState},
    os::handle_shutdown,
    page::page,
    validate::parse_integer_param,
};

pub fn build_router(gate: Arc<IngestionGate>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/customers", get(list_customers))
        .route("/api/customers/load", get(load_customers))
        .route("/api/customers/status", get(get_load_status))
        .layer(Extension(gate))
        .layer(middleware::from_fn(cors_middleware))
}

pub async fn run_server(gate: Arc<IngestionGate>) -> std::io::Result<()> {
    let app = build_router(gate);

    let addr = format!("{}:{}", *HTTP_BIND_ADDR, *HTTP_PORT);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(handle_shutdown())
        .await
}

async fn root() -> &'static str {
    "OK"
}

#[derive(serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

fn message(status: StatusCode, message: &str) -> Response {
    let body = MessageResponse {
        message: message.to_string(),
    };

    (status, Json(body)).into_response()
}

async fn load_customers(Extension(gate): Extension<Arc<IngestionGate>>) -> Response {
    match gate.ensure_loaded().await {
        Ok(_) => message(StatusCode::OK, "Customer data loaded successfully"),
        Err(error) => {
            let body = ErrorResponse {
                message: "Failed to load customer data".to_string(),
                error: error.detail(),
            };

            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

fn parse_page_params(params: &HashMap<String, String>) -> errors::Result<(i64, i64)> {
    let start = params.get("start").map(String::as_str).unwrap_or(DEFAULT_START);
    let limit = params.get("limit").map(String::as_str).unwrap_or(DEFAULT_LIMIT);

    Ok((parse_integer_param(start)?, parse_integer_param(limit)?))
}

async fn list_customers(
    Extension(gate): Extension<Arc<IngestionGate>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let result = parse_page_params(&params).and_then(|(start, limit)| {
        let dataset = gate.snapshot();
        page(&dataset, start, limit).map(|page| Json(page).into_response())
    });

    // Parameter parsing and paging only fail on validation.
    result.unwrap_or_else(|error| {
        log::debug!("Rejected page request: {}", error);
        message(StatusCode::BAD_REQUEST, "Invalid start or limit parameters")
    })
}

#[derive(serde::Serialize)]
pub struct LoadStatusResponse {
    pub state: LoadState,
    pub total: usize,
}

async fn get_load_status(Extension(gate): Extension<Arc<IngestionGate>>) -> Response {
    let response = LoadStatusResponse {
        state: gate.load_state().await,
        total: gate.snapshot().len(),
    };

    Json(response).into_response()
}

// Any origin may call the API. Preflight requests are answered here and never reach a handler.
async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();

        allow_any_origin(headers);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,HEAD,OPTIONS"),
        );
        if let Some(requested) = req.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            headers.insert(
                header::VARY,
                HeaderValue::from_static("Access-Control-Request-Headers"),
            );
        }

        return resp;
    }

    let mut resp = next.run(req).await;
    allow_any_origin(resp.headers_mut());
    resp
}

fn allow_any_origin(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
}

use axum::http::header;
use axum::{
    extract::{ConnectInfo, DefaultBodyLimit, Form, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::types::SegmentSummary;
use crate::matching::classify::{classify, unclassified};
use crate::matching::engine::{find_rlfs, RlfsSearch};
use crate::render::{render_html, DEFAULT_LINE_WIDTH};
use crate::utils::validation::{validate_sequence_text, ValidationError, MAX_SEQUENCE_TEXT_SIZE};

/// Request body limit; urlencoding can triple the size of pasted text
pub const MAX_BODY_SIZE: usize = 4 * MAX_SEQUENCE_TEXT_SIZE;

/// Matches rendered on the results page; each block repeats the whole sequence
pub const MAX_RENDERED_MATCHES: usize = 20;

const PAGE_TEMPLATE: &str = include_str!("templates/index.html");
const RESULTS_PLACEHOLDER: &str = "{{results}}";

/// Shared application state
pub struct AppState {
    /// Log every request's remote address and user agent
    pub monitor: bool,
}

/// Error response body for the JSON API
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Form submitted from the main page
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub sequence: String,
}

/// JSON API request body
#[derive(Debug, Deserialize)]
pub struct FindRequest {
    pub sequence: String,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Application routes and request monitoring, without the network-facing
/// protection layers added by [`create_router`].
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(search_form_handler))
        .route("/api/find", post(find_api_handler))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            monitor_requests,
        ))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(monitor: bool) -> Router {
    let state = Arc::new(AppState { monitor });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    routes(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(100))
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
    )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router(args.monitor);

    let addr = format!("{}:{}", args.address, args.port);
    let listener = TcpListener::bind(&addr).await?;

    let url = format!("http://{addr}");
    println!("RLFS Finder v{}", env!("CARGO_PKG_VERSION"));
    println!("Open {url} in a web browser to access the web interface");
    tracing::info!(%addr, monitor = args.monitor, "server listening");

    if args.open {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Unable to open link in browser: {e}");
        }
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Log remote address and user agent when monitoring is enabled
async fn monitor_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if state.monitor {
        let remote = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map_or_else(|| "unknown".to_string(), |info| info.0.to_string());
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info!(
            remote_addr = %remote,
            user_agent,
            method = %request.method(),
            path = %request.uri().path(),
            "request"
        );
    }
    next.run(request).await
}

/// Main page handler
async fn index_handler() -> Html<String> {
    Html(render_page(""))
}

/// Form submission: the page again, followed by the results
async fn search_form_handler(Form(form): Form<SearchForm>) -> Response {
    match validate_sequence_text(&form.sequence, MAX_SEQUENCE_TEXT_SIZE) {
        // Nothing submitted, show the bare form
        Err(ValidationError::EmptyInput) => Html(render_page("")).into_response(),
        Err(e) => (
            StatusCode::PAYLOAD_TOO_LARGE,
            Html(render_page(&error_html(&e.to_string()))),
        )
            .into_response(),
        Ok(()) => match search_blocking(form.sequence).await {
            Ok(search) => Html(render_page(&results_html(&search))).into_response(),
            Err(response) => *response,
        },
    }
}

/// API endpoint returning structures as JSON
async fn find_api_handler(Json(request): Json<FindRequest>) -> Response {
    let start_time = std::time::Instant::now();

    if let Err(e) = validate_sequence_text(&request.sequence, MAX_SEQUENCE_TEXT_SIZE) {
        let (status, error_type) = match e {
            ValidationError::EmptyInput => (StatusCode::BAD_REQUEST, "missing_input"),
            ValidationError::InputTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, "sequence_too_large")
            }
        };
        return (
            status,
            Json(create_safe_error_response(error_type, &e.to_string(), None)),
        )
            .into_response();
    }

    let search = match search_blocking(request.sequence).await {
        Ok(search) => search,
        Err(response) => return *response,
    };

    let segments: Vec<SegmentSummary> = search.segments.iter().map(SegmentSummary::from).collect();

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    Json(serde_json::json!({
        "found": search.found(),
        "sequence_length": search.sequence.len(),
        "segments": segments,
        "processing_time_ms": processing_time,
    }))
    .into_response()
}

/// Run the search on the blocking pool so long scans don't stall the executor
async fn search_blocking(raw: String) -> Result<RlfsSearch, Box<Response>> {
    tokio::task::spawn_blocking(move || find_rlfs(&raw))
        .await
        .map_err(|e| {
            Box::new(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(create_safe_error_response(
                        "search_failed",
                        "Search failed. Please try again.",
                        Some(&e.to_string()),
                    )),
                )
                    .into_response(),
            )
        })
}

fn render_page(results: &str) -> String {
    PAGE_TEMPLATE.replace(RESULTS_PLACEHOLDER, results)
}

fn error_html(message: &str) -> String {
    format!("<p class=\"error\">{message}</p>")
}

fn results_html(search: &RlfsSearch) -> String {
    if !search.found() {
        return format!(
            "<h4>Pattern not found in sequence:</h4><pre>{}</pre>\n",
            render_html(&unclassified(&search.sequence), DEFAULT_LINE_WIDTH)
        );
    }

    let mut html = String::new();
    for (i, segment) in search.segments.iter().take(MAX_RENDERED_MATCHES).enumerate() {
        html.push_str(&format!(
            "<h4>Match {}</h4><pre>{}</pre><hr/>\n",
            i + 1,
            render_html(&classify(segment), DEFAULT_LINE_WIDTH)
        ));
    }
    let hidden = search.segments.len().saturating_sub(MAX_RENDERED_MATCHES);
    if hidden > 0 {
        html.push_str(&format!(
            "<p>{hidden} more matches not shown. Use the JSON API or the command line for the full list.</p>\n"
        ));
    }
    html
}

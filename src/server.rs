use crate::config::Config;
use crate::outcome::{OutcomeError, SortOutcome};
use crate::output;
use crate::views;
use axum::{
    extract::{Form, Json, Query, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("Server failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Outcome(#[from] OutcomeError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Outcome(OutcomeError::TooManyNumbers { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ServerError::Bind { .. } | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Form fields accepted by `/`, both as query string and as form body.
#[derive(Debug, Default, Deserialize)]
pub struct SortForm {
    pub numbers: Option<String>,
}

/// Body of `POST /api/sort`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SortRequest {
    #[serde(default)]
    pub numbers: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

pub struct SortServer {
    config: Arc<Config>,
}

impl SortServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            config: self.config.clone(),
        };

        Router::new()
            .route("/", get(index).post(submit))
            .route("/privacy", get(privacy))
            .route("/api/sort", post(api_sort))
            .fallback(not_found)
            .with_state(state)
    }

    async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = self.config.bind_address();
        match TcpListener::bind(&addr).await {
            Ok(listener) => Ok(listener),
            Err(source) => Err(ServerError::Bind { addr, source }),
        }
    }

    /// Binds the listener and serves in a background task. Returns the
    /// address actually bound.
    pub async fn start(&self) -> Result<SocketAddr, ServerError> {
        let listener = self.bind().await?;
        let local_addr = listener.local_addr()?;
        let app = self.router();
        let service = self.config.service_name.clone();

        output::status(&service, &format!("Listening on http://{}", local_addr));

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                output::error(&service, &format!("Server stopped: {}", e));
            }
        });

        Ok(local_addr)
    }

    /// Binds the listener and serves until the process is stopped.
    pub async fn run(&self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        let local_addr = listener.local_addr()?;

        output::success(
            &self.config.service_name,
            &format!("Ready on http://{}", local_addr),
        );

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn index(State(state): State<AppState>, Query(form): Query<SortForm>) -> Response {
    render_index(&state, "GET", form.numbers.as_deref())
}

async fn submit(State(state): State<AppState>, Form(form): Form<SortForm>) -> Response {
    render_index(&state, "POST", form.numbers.as_deref())
}

fn render_index(state: &AppState, method: &str, numbers: Option<&str>) -> Response {
    let service = &state.config.service_name;

    match SortOutcome::with_limit(numbers, state.config.max_numbers) {
        Ok(outcome) => {
            output::request(service, method, "/", StatusCode::OK.as_u16(), outcome.count());
            Html(views::index_page(service, &outcome)).into_response()
        }
        Err(e) => {
            let e = ServerError::from(e);
            let status = e.status();
            output::request(service, method, "/", status.as_u16(), 0);
            let page = views::error_page(service, status.as_u16(), &e.to_string());
            (status, Html(page)).into_response()
        }
    }
}

async fn privacy(State(state): State<AppState>) -> Html<String> {
    let service = &state.config.service_name;
    output::request(service, "GET", "/privacy", StatusCode::OK.as_u16(), 0);
    Html(views::privacy_page(service))
}

async fn api_sort(State(state): State<AppState>, Json(request): Json<SortRequest>) -> Response {
    let service = &state.config.service_name;

    match SortOutcome::with_limit(request.numbers.as_deref(), state.config.max_numbers) {
        Ok(outcome) => {
            output::request(
                service,
                "POST",
                "/api/sort",
                StatusCode::OK.as_u16(),
                outcome.count(),
            );
            Json(outcome).into_response()
        }
        Err(e) => {
            let e = ServerError::from(e);
            let status = e.status();
            output::request(service, "POST", "/api/sort", status.as_u16(), 0);
            let body = ErrorBody {
                error: e.to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

async fn not_found(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let service = &state.config.service_name;
    let status = StatusCode::NOT_FOUND;
    output::request(service, method.as_str(), uri.path(), status.as_u16(), 0);
    let page = views::error_page(
        service,
        status.as_u16(),
        &format!("No page at {}", uri.path()),
    );
    (status, Html(page)).into_response()
}

//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::auth::IdentityError;
use crate::discovery::{DiscoveryQuery, FacetOptions};

use super::dto::*;
use super::session::AdminSession;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/trips", get(list_trips))
        .route("/api/trips/facets", get(trip_facets))
        .route("/api/trips/:id", get(get_trip))
        .route("/api/admin/catalog", get(catalog_status))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Turn the query string into a pipeline query against the current catalog.
fn discovery_query(
    state: &AppState,
    pairs: Vec<(String, String)>,
) -> Result<DiscoveryQuery, AppError> {
    let baseline = state.catalog.default_filters().price_range;
    Ok(TripsQuery::from_pairs(pairs).to_discovery(baseline)?)
}

fn unavailable_message(state: &AppState) -> Option<String> {
    (!state.catalog.is_available()).then(|| CATALOG_UNAVAILABLE.to_string())
}

/// Discovery page: filter panel and results for the query string.
async fn index_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let query = discovery_query(&state, pairs)?;
    let trips = state.catalog.discover(&query);

    let page = IndexTemplate::new(
        &query,
        &state.catalog.facet_options(),
        state.catalog.default_filters().price_range,
        TripListTemplate::new(&trips, unavailable_message(&state)),
    );

    Ok(Html(page.render()?))
}

/// Search, filter and sort the catalog.
async fn list_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query = discovery_query(&state, pairs)?;
    let trips = state.catalog.discover(&query);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = TripListTemplate::new(&trips, unavailable_message(&state));
        Ok(Html(template.render()?).into_response())
    } else {
        Ok(Json(TripsResponse::new(&trips, state.catalog.is_available())).into_response())
    }
}

/// Values present in the catalog, for building a filter panel.
async fn trip_facets(State(state): State<AppState>) -> Json<FacetOptions> {
    Json(state.catalog.facet_options())
}

/// A single trip by id.
async fn get_trip(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<TripResult>, AppError> {
    state
        .catalog
        .get(&id)
        .map(|trip| Json(TripResult::from(trip)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Trip not found: {id}"),
        })
}

/// Catalog fetch status; admins only.
async fn catalog_status(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> Json<CatalogStatusResponse> {
    Json(CatalogStatusResponse::new(&state.catalog, session.identity.email))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    Forbidden { message: String },
    NotFound { message: String },
    /// A collaborator this route needs is missing or down
    Unavailable { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<IdentityError> for AppError {
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::Unauthenticated | IdentityError::MalformedToken => {
                AppError::Unauthorized {
                    message: e.to_string(),
                }
            }
            _ => AppError::Unavailable {
                message: format!("identity service: {e}"),
            },
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::auth::{IdentityClient, IdentityConfig};
    use crate::catalog::CatalogStore;
    use crate::domain::{Difficulty, GroupSize, Price, Rating, Season, Trip, TripDuration};

    fn catalog() -> CatalogStore {
        let mut spiti = Trip::new(
            "1",
            "Spiti Valley Trek",
            "Himalayas",
            Price::new(21150),
            Difficulty::Hard,
        );
        spiti.duration = TripDuration::from_days(9);
        spiti.rating = Rating::new(4.8).unwrap();
        spiti.group_size = GroupSize::new(12);
        spiti.seasons = vec![Season::Summer];

        let mut goa = Trip::new("2", "Goa Beach Party", "Goa", Price::new(8000), Difficulty::Easy);
        goa.duration = TripDuration::from_days(4);
        goa.rating = Rating::new(4.2).unwrap();
        goa.group_size = GroupSize::new(20);
        goa.seasons = vec![Season::Winter];

        CatalogStore::from_trips(vec![spiti, goa])
    }

    fn app() -> Router {
        create_router(AppState::new(catalog(), None), "static")
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get_text(app, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    fn names(json: &Value) -> Vec<&str> {
        json["trips"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = get_text(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn lists_whole_catalog_by_default() {
        let (status, json) = get_json(app(), "/api/trips").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 2);
        assert_eq!(json["catalog_available"], true);
        assert_eq!(names(&json), ["Spiti Valley Trek", "Goa Beach Party"]);
        assert_eq!(json["trips"][0]["duration"], "8-14 days");
        assert_eq!(json["trips"][0]["group_size_bucket"], "Medium");
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let (_, json) = get_json(app(), "/api/trips?q=GOA").await;
        assert_eq!(names(&json), ["Goa Beach Party"]);
    }

    #[tokio::test]
    async fn sorts_by_price() {
        let (_, json) = get_json(app(), "/api/trips?sort=priceLowToHigh").await;
        assert_eq!(names(&json), ["Goa Beach Party", "Spiti Valley Trek"]);

        let (_, json) = get_json(app(), "/api/trips?sort=bogus").await;
        assert_eq!(names(&json), ["Spiti Valley Trek", "Goa Beach Party"]);
    }

    #[tokio::test]
    async fn filters_combine() {
        let (_, json) = get_json(app(), "/api/trips?max_price=10000").await;
        assert_eq!(names(&json), ["Goa Beach Party"]);

        let uri = "/api/trips?difficulty=Easy,Hard&group_size=Medium";
        let (_, json) = get_json(app(), uri).await;
        assert_eq!(names(&json), ["Spiti Valley Trek"]);

        let (_, json) = get_json(app(), "/api/trips?duration=1-4%20days&season=Winter").await;
        assert_eq!(names(&json), ["Goa Beach Party"]);

        let (_, json) = get_json(app(), "/api/trips?rating=4.5").await;
        assert_eq!(names(&json), ["Spiti Valley Trek"]);
    }

    #[tokio::test]
    async fn unmatched_destination_is_empty_not_error() {
        let (status, json) = get_json(app(), "/api/trips?destination=Kerala").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 0);
    }

    #[tokio::test]
    async fn destination_with_comma_is_one_choice() {
        let trips = vec![
            Trip::new("1", "Spiti Valley Trek", "Himalayas", Price::new(21150), Difficulty::Hard),
            Trip::new(
                "2",
                "Rishikesh Rafting",
                "Rishikesh, Himalayas",
                Price::new(6500),
                Difficulty::Moderate,
            ),
            Trip::new("3", "Old Town Walk", "Rishikesh", Price::new(900), Difficulty::Easy),
        ];
        let app = create_router(AppState::new(CatalogStore::from_trips(trips), None), "static");

        let uri = "/api/trips?destination=Rishikesh%2C%20Himalayas";
        let (status, json) = get_json(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&json), ["Rishikesh Rafting"]);

        let (_, json) = get_json(
            app.clone(),
            "/api/trips?destination=Rishikesh%2C%20Himalayas&destination=Rishikesh",
        )
        .await;
        assert_eq!(names(&json), ["Rishikesh Rafting", "Old Town Walk"]);

        let (_, body) = get_text(app, "/?destination=Rishikesh%2C%20Himalayas").await;
        assert!(body.contains("value=\"Rishikesh, Himalayas\" checked"));
    }

    #[tokio::test]
    async fn unknown_label_is_bad_request() {
        let (status, json) = get_json(app(), "/api/trips?difficulty=Brutal").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("Brutal"));
    }

    #[tokio::test]
    async fn html_fragment_on_accept() {
        let request = Request::get("/api/trips?destination=Kerala")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No expeditions found"));
    }

    #[tokio::test]
    async fn index_page_renders_results() {
        let (status, body) = get_text(app(), "/?q=spiti&difficulty=Hard").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Spiti Valley Trek"));
        assert!(!body.contains("Goa Beach Party"));
    }

    #[tokio::test]
    async fn unavailable_catalog() {
        let app = create_router(
            AppState::new(CatalogStore::unavailable("connection refused"), None),
            "static",
        );
        let (status, json) = get_json(app, "/api/trips").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 0);
        assert_eq!(json["catalog_available"], false);
        assert_eq!(json["error"], CATALOG_UNAVAILABLE);
    }

    #[tokio::test]
    async fn facets_and_single_trip() {
        let (_, json) = get_json(app(), "/api/trips/facets").await;
        assert_eq!(json["destinations"], serde_json::json!(["Goa", "Himalayas"]));
        assert_eq!(json["min_price"], 8000);
        assert_eq!(json["max_price"], 21150);

        let (status, json) = get_json(app(), "/api/trips/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Goa Beach Party");

        let (status, _) = get_json(app(), "/api/trips/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn admin_route_without_identity_service() {
        let (status, _) = get_json(app(), "/api/admin/catalog").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    /// Identity service stand-in: "admin-token" is an admin, "guest-token"
    /// a customer, anything else is rejected.
    async fn spawn_identity_service() -> String {
        async fn me(headers: HeaderMap) -> Response {
            let auth = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            match auth {
                "Bearer admin-token" => {
                    Json(serde_json::json!({"email": "ops@example.com", "role": "admin"}))
                        .into_response()
                }
                "Bearer guest-token" => {
                    Json(serde_json::json!({"email": "guest@example.com", "role": "customer"}))
                        .into_response()
                }
                _ => StatusCode::UNAUTHORIZED.into_response(),
            }
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().route("/me", get(me)))
                .await
                .unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn admin_route_checks_role() {
        let config = IdentityConfig::new(spawn_identity_service().await);
        let identity = IdentityClient::new(config).unwrap();
        let app = create_router(AppState::new(catalog(), Some(identity)), "static");

        let admin = |token: &str| {
            Request::get("/api/admin/catalog")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap()
        };

        let (status, body) = send(app.clone(), admin("admin-token")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["available"], true);
        assert_eq!(json["trips"], 2);
        assert_eq!(json["requested_by"], "ops@example.com");

        let (status, _) = send(app.clone(), admin("guest-token")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(app.clone(), admin("stale-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = get_text(app, "/api/admin/catalog").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbled_identity_reply_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let me = Router::new().route("/me", get(|| async { "not json" }));
            axum::serve(listener, me).await.unwrap();
        });

        let identity = IdentityClient::new(IdentityConfig::new(format!("http://{addr}"))).unwrap();
        let app = create_router(AppState::new(catalog(), Some(identity)), "static");

        let request = Request::get("/api/admin/catalog")
            .header(header::AUTHORIZATION, "Bearer admin-token")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("identity service"));
    }
}

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use folio::{
    config::Config,
    navigation::{HOME_ROUTE, WORK_ROUTE_PATTERN},
    openlibrary::{Endpoints, Fetch, OpenLibrary},
    render::{detail::DetailBody, list::ListBody, ListPage, WorkPage},
    view::{DetailView, ListView},
};
use tracing::info;

pub struct AppState {
    config: Config,
    api:    OpenLibrary<reqwest::Client>,
}

/// Serve both views as JSON on their route paths. Every request mounts a fresh
/// view, so nothing is shared between requests.
pub async fn start(config: Config, client: reqwest::Client) -> Result<()> {
    let addr: SocketAddr = config.server_address.parse()?;
    let api = OpenLibrary::new(client, Endpoints::from_config(&config));
    let state = Arc::new(AppState { config, api });

    let app = Router::new()
        .route(HOME_ROUTE, get(home))
        .route(WORK_ROUTE_PATTERN, get(work))
        .with_state(state);

    info!("Listening on {addr}.");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

async fn home(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ListPage>) {
    let query = params.get("q").map(String::as_str);
    let (status, page) = list_page(&state.api, &state.config, query).await;
    (status, Json(page))
}

async fn work(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<WorkPage>) {
    info!("Received {id}.");
    let (status, page) = work_page(&state.api, &state.config, &id).await;
    (status, Json(page))
}

/// The list page for `/`, searching instead of loading the default listing
/// when a non-blank query is given.
async fn list_page<C: Fetch + Clone>(
    api: &OpenLibrary<C>,
    config: &Config,
    query: Option<&str>,
) -> (StatusCode, ListPage) {
    let mut view = ListView::new(api.clone(), config.race_policy);
    match query {
        Some(query) if !query.trim().is_empty() => {
            info!("Searching for {query}.");
            view.search(query).await;
        }
        _ => view.mount().await,
    }
    let mut page = ListPage::new(view.state(), view.query(), config);
    if config.probe_covers {
        for image in page.images_mut() {
            api.probe_cover(image).await;
        }
    }
    let status = match page.body {
        ListBody::Error(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    (status, page)
}

async fn work_page<C: Fetch + Clone>(
    api: &OpenLibrary<C>,
    config: &Config,
    id: &str,
) -> (StatusCode, WorkPage) {
    let mut view = DetailView::new(api.clone(), config.race_policy);
    view.mount(id).await;
    let mut page = WorkPage::new(view.state(), config);
    if config.probe_covers {
        if let Some(image) = page.image_mut() {
            api.probe_cover(image).await;
        }
    }
    let status = match page.body {
        DetailBody::Error(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    (status, page)
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod html;

use axum::extract::DefaultBodyLimit;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Router, middleware};
use dept_core::input::url_to_addr;
use dept_core::resources::ResourceKind;
use dept_core::types::ServerState;
use dept_core::with_resource;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Multipart framing on top of the file itself.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

fn cors_layer(state: &ServerState) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(&state.cli.serve_url) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            warn!(error = %e, url = %state.cli.serve_url, "invalid serve url, cross origin requests disabled");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
}

fn api_routes(state: &ServerState) -> Router<Arc<ServerState>> {
    let mut router = Router::new();

    for kind in ResourceKind::ALL {
        router = router.merge(with_resource!(kind, R => endpoints::crud::routes::<R>()));
    }

    let upload_limit = state.cli.max_upload_bytes + UPLOAD_OVERHEAD_BYTES;

    router
        .route(
            "/api/messages",
            get(endpoints::messages::get)
                .post(endpoints::messages::post)
                .put(endpoints::messages::put)
                .delete(endpoints::messages::delete),
        )
        .route("/api/contact", post(endpoints::contact::post_contact))
        .route(
            "/api/upload",
            post(endpoints::upload::post_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/auth/logout", post(endpoints::auth::post_logout))
        .route("/api/auth/session", get(endpoints::auth::get_session))
        .route("/api/health", get(endpoints::get_health))
}

fn admin_routes() -> Router<Arc<ServerState>> {
    Router::new()
        .route("/admin", get(admin::get_dashboard))
        .route(
            "/admin/login",
            get(admin::login::get_login).post(admin::login::post_login),
        )
        .route("/admin/logout", post(admin::login::post_logout))
        .route("/admin/messages", get(admin::messages::get_messages))
        .route("/admin/{entity}", get(admin::list::get_list))
        .route(
            "/admin/{entity}/add",
            get(admin::form::get_add).post(admin::form::post_add),
        )
        .route(
            "/admin/{entity}/edit/{id}",
            get(admin::form::get_edit).post(admin::form::post_edit),
        )
        .route("/admin/{entity}/delete/{id}", post(admin::list::post_delete))
}

/// The full application: JSON API, admin pages and uploaded files, all
/// behind the session guard.
pub fn app(state: Arc<ServerState>) -> Router {
    let local = state.cli.local_store();

    Router::new()
        .merge(api_routes(&state))
        .merge(admin_routes())
        .nest_service(local.url_prefix(), ServeDir::new(local.root()))
        .fallback(endpoints::handle_404)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            guard::session_guard,
        ))
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let addr = url_to_addr(&state.cli.ip, state.cli.port).map_err(std::io::Error::other)?;
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await
}

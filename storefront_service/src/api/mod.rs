use crate::api::context::AppState;
use anyhow::Context;
use axum::{Router, middleware::from_fn_with_state};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod carts;
pub mod collections;
pub mod context;
pub mod customers;
mod error;
mod health;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod swagger;

pub async fn setup_and_serve(state: AppState) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    let port = state.config.port;
    let env = state.config.environment;
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(cors)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "storefront service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

fn api_router(app_state: AppState) -> Router {
    // catalog reads are anonymous, catalog writes check the staff flag
    // in-handler, so those routers get the best-effort attach_user layer;
    // orders and customer profiles always need an authenticated caller.
    let attach_user = from_fn_with_state(
        app_state.jwt_validation_args.clone(),
        storefront_auth::middleware::attach_user,
    );
    let decode_jwt = from_fn_with_state(
        app_state.jwt_validation_args.clone(),
        storefront_auth::middleware::decode_jwt,
    );

    Router::new()
        .nest(
            "/collections",
            collections::router().layer(attach_user.clone()),
        )
        .nest("/products", products::router().layer(attach_user))
        .nest("/carts", carts::router())
        .nest("/orders", orders::router().layer(decode_jwt.clone()))
        .nest("/customers", customers::router().layer(decode_jwt))
        .with_state(app_state)
}

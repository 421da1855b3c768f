use crate::{
    modules,
    types::{Config, Context, ToContext},
};
use axum::{
    extract::{DefaultBodyLimit, OriginalUri, Request},
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use std::{any::Any, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors, trace};

fn path_not_found(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Path not found: {}", path) })),
    )
        .into_response()
}

async fn fallback(OriginalUri(uri): OriginalUri) -> Response {
    path_not_found(uri.path())
}

async fn method_not_allowed(req: Request, next: Next) -> Response {
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let res = next.run(req).await;

    if res.status() == StatusCode::METHOD_NOT_ALLOWED {
        return path_not_found(&path);
    }

    res
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!("Request handler panicked: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something went wrong!" })),
    )
        .into_response()
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);

        Self::from_context(ctx)
    }

    pub fn from_context(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .merge(modules::get_router())
            .fallback(fallback)
            .with_state(ctx.clone())
            .layer(middleware::from_fn(method_not_allowed))
            .layer(DefaultBodyLimit::max(1024 * 1024))
            .layer(trace::TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::DELETE,
                    ])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub fn into_router(self) -> Router {
        self.router
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!("App is running on {}", self.ctx.app.url);

        axum::serve(listener, self.router).await
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use folio::app::{shell, App};
    use folio::config::Config;
    use folio::error::AppError;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower::ServiceBuilder;
    use tower_http::compression::CompressionLayer;
    use tracing_subscriber::EnvFilter;

    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log.filter)?)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        revision = env!("VCS_REF_HEAD_REVISION"),
        branch = env!("VCS_REF_HEAD_NAME"),
        "starting folio"
    );

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(leptos_options);

    if let Some(socket_path) = config.socket {
        tracing::info!("listening on unix socket {}", &socket_path);
        let listener = tokio::net::UnixListener::bind(&socket_path).map_err(AppError::Bind)?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(AppError::Bind)?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}

// BookShelf web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - A reqwest client for the remote book API
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use bookshelf::web_app::api::{http, ApiConfig, BookApiClient};
    use bookshelf::web_app::app::{shell, App as WebApp};
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the default level
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_config = ApiConfig::from_env();
    let client = BookApiClient::new(&api_config).context("failed to build book API client")?;
    tracing::info!("Using book API at {}", client.base_url());

    // Initialize global client for server functions
    http::init_client(client.clone());

    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();

        App::new()
            .app_data(web::Data::new(client.clone()))
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
    std::process::exit(1);
}

pub mod routes;

use crate::config::RelayConfig;
use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};

pub const SERVICE_NAME: &str = "rimagen-relay";

/// Shared per-worker state: the upstream HTTP client and the relay
/// configuration. Nothing request-scoped lives here.
pub struct RelayState {
    pub http: reqwest::Client,
    pub config: RelayConfig,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// Browser callers get `Access-Control-Allow-Origin: *`, GET and POST,
/// and the two headers the client sends.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub struct RelayServer {
    config: RelayConfig,
}

impl RelayServer {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> std::io::Result<()> {
        let port = self.config.port;
        let state = web::Data::new(RelayState::new(self.config));

        HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(cors())
                .configure(routes::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

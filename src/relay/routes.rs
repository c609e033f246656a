use super::{RelayState, SERVICE_NAME};
use crate::logger;
use crate::models::{ErrorEnvelope, HealthStatus};
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/images/generations", web::post().to(generate))
        .route("/health", web::get().to(health))
        .route("/", web::get().to(index));
}

/// Forward one generation request to the upstream provider. The body is
/// passed through untouched; the only header forwarded is the caller's
/// credential.
async fn generate(
    state: web::Data<RelayState>,
    request: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    let credential = match request.headers().get(header::AUTHORIZATION) {
        Some(value) => value.clone(),
        None => {
            log::warn!("⚠️  Rejected request without Authorization header");
            return HttpResponse::Unauthorized().json(ErrorEnvelope::new(
                "missing API key",
                "provide an Authorization header with the request",
            ));
        }
    };

    log_incoming(&body);

    let url = format!("{}/images/generations", state.config.upstream_base_url);
    let timer = logger::timer("upstream request");
    let upstream = state
        .http
        .post(&url)
        .header(header::AUTHORIZATION, credential)
        .json(&*body)
        .send()
        .await;
    timer.stop();

    let response = match upstream {
        Ok(response) => response,
        Err(e) => {
            log::error!("❌ Upstream call failed: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorEnvelope::new("relay error", e.to_string()));
        }
    };

    let status = response.status();
    log::info!("📡 Upstream responded with HTTP {}", status.as_u16());

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::error!("❌ Failed to read upstream response: {}", e);
            return HttpResponse::InternalServerError().json(ErrorEnvelope::new(
                "relay error",
                format!("failed to read upstream response: {}", e),
            ));
        }
    };

    let mirrored = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    if !status.is_success() {
        log::error!("❌ Upstream error body: {}", text);
        return HttpResponse::build(mirrored)
            .json(ErrorEnvelope::new("upstream API call failed", text).with_status(status.as_u16()));
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(payload) => {
            log::info!("✅ Image generation succeeded");
            HttpResponse::build(mirrored).json(payload)
        }
        Err(e) => {
            log::error!("❌ Upstream returned invalid JSON: {}", e);
            HttpResponse::InternalServerError().json(ErrorEnvelope::new(
                "relay error",
                format!("upstream returned invalid JSON: {}", e),
            ))
        }
    }
}

fn log_incoming(body: &Value) {
    let model = body.get("model").and_then(Value::as_str).unwrap_or("?");
    let prompt: String = body
        .get("prompt")
        .and_then(Value::as_str)
        .unwrap_or("")
        .chars()
        .take(50)
        .collect();
    let width = body.get("width").and_then(Value::as_u64).unwrap_or(0);
    let height = body.get("height").and_then(Value::as_u64).unwrap_or(0);

    log::info!(
        "🎨 Generation request: model={} size={}x{} prompt=\"{}\"",
        model,
        width,
        height,
        prompt
    );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::ok(SERVICE_NAME))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate": "POST /api/images/generations",
            "health": "GET /health"
        },
        "usage": {
            "model": "Qwen/Qwen-Image",
            "prompt": "an orange cat sitting on a windowsill",
            "width": 1024,
            "height": 1024,
            "steps": 20,
            "guidance_scale": 7.5
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelayConfig;
    use actix_web::{test, App};
    use httpmock::prelude::*;

    fn test_state(upstream: &str) -> web::Data<RelayState> {
        web::Data::new(RelayState::new(RelayConfig::new().with_upstream(upstream)))
    }

    fn scenario_body() -> Value {
        json!({
            "model": "Qwen/Qwen-Image",
            "prompt": "a red fox",
            "width": 512,
            "height": 512,
            "steps": 10,
            "guidance_scale": 5.0
        })
    }

    #[actix_web::test]
    async fn test_missing_credential_never_reaches_upstream() {
        let server = MockServer::start();
        let upstream = server.mock(|when, then| {
            when.method(POST).path("/images/generations");
            then.status(200).json_body(json!({"images": []}));
        });

        let app = test::init_service(
            App::new()
                .app_data(test_state(&server.base_url()))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/images/generations")
            .set_json(scenario_body())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorEnvelope = test::read_body_json(response).await;
        assert_eq!(body.error, "missing API key");
        upstream.assert_hits(0);
    }

    #[actix_web::test]
    async fn test_success_passthrough_keeps_status_and_body() {
        let server = MockServer::start();
        let upstream = server.mock(|when, then| {
            when.method(POST)
                .path("/images/generations")
                .header("authorization", "Bearer X")
                .json_body(scenario_body());
            then.status(200)
                .json_body(json!({"images": [{"url": "https://x/y.png"}]}));
        });

        let app = test::init_service(
            App::new()
                .app_data(test_state(&server.base_url()))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/images/generations")
            .insert_header((header::AUTHORIZATION, "Bearer X"))
            .set_json(scenario_body())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({"images": [{"url": "https://x/y.png"}]}));
        upstream.assert();
    }

    #[actix_web::test]
    async fn test_upstream_error_is_mirrored_with_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/images/generations");
            then.status(429).json_body(json!({"message": "rate limited"}));
        });

        let app = test::init_service(
            App::new()
                .app_data(test_state(&server.base_url()))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/images/generations")
            .insert_header((header::AUTHORIZATION, "Bearer X"))
            .set_json(scenario_body())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "upstream API call failed");
        assert_eq!(body["status"], 429);

        // The message field carries the raw upstream body text.
        let raw: Value = serde_json::from_str(body["message"].as_str().unwrap()).unwrap();
        assert_eq!(raw, json!({"message": "rate limited"}));
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_is_a_relay_error() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1"))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/images/generations")
            .insert_header((header::AUTHORIZATION, "Bearer X"))
            .set_json(scenario_body())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorEnvelope = test::read_body_json(response).await;
        assert_eq!(body.error, "relay error");
    }

    #[actix_web::test]
    async fn test_invalid_upstream_json_is_a_relay_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/images/generations");
            then.status(200).body("not json");
        });

        let app = test::init_service(
            App::new()
                .app_data(test_state(&server.base_url()))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/images/generations")
            .insert_header((header::AUTHORIZATION, "Bearer X"))
            .set_json(scenario_body())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorEnvelope = test::read_body_json(response).await;
        assert_eq!(body.error, "relay error");
    }

    #[actix_web::test]
    async fn test_health_reports_ok() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1"))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: HealthStatus = test::read_body_json(response).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, SERVICE_NAME);
    }

    #[actix_web::test]
    async fn test_index_describes_the_service() {
        let app = test::init_service(
            App::new()
                .app_data(test_state("http://127.0.0.1:1"))
                .configure(configure),
        )
        .await;

        let request = test::TestRequest::get().uri("/").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["name"], SERVICE_NAME);
        assert_eq!(body["endpoints"]["generate"], "POST /api/images/generations");
        assert_eq!(body["usage"]["model"], "Qwen/Qwen-Image");
    }
}

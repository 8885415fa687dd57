//! # ヘルスチェックハンドラ
//!
//! Todo Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（DB の接続状態を確認）
//!
//! レスポンス型は [`todo_shared::HealthResponse`] / [`todo_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use todo_infra::DatabaseHealth;
use todo_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub database: Arc<dyn DatabaseHealth>,
}

/// Readiness Check エンドポイント
///
/// DB への疎通を確認する。OK → 200、失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let mut checks = HashMap::new();
    checks.insert(
        "database".to_string(),
        check_database(state.database.as_ref()).await,
    );

    let response = ReadinessResponse::from_checks(checks);
    let http_status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (http_status, Json(response))
}

/// DB への疎通を確認する（タイムアウト: 5 秒）
async fn check_database(database: &dyn DatabaseHealth) -> CheckStatus {
    match tokio::time::timeout(Duration::from_secs(5), database.ping()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: database check timed out");
            CheckStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use pretty_assertions::assert_eq;
    use todo_infra::mock::MockDatabaseHealth;
    use tower::ServiceExt;

    use super::*;

    fn create_test_app(database: MockDatabaseHealth) -> Router {
        let state = Arc::new(ReadinessState {
            database: Arc::new(database),
        });
        Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .with_state(state)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(sut: Router, uri: &str) -> (StatusCode, T) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = sut.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check_はhealthyとバージョンを返す() {
        let sut = create_test_app(MockDatabaseHealth::healthy());

        let (status, body): (_, HealthResponse) = get_json(sut, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_check_db疎通ok時は200とreadyを返す() {
        let sut = create_test_app(MockDatabaseHealth::healthy());

        let (status, body): (_, ReadinessResponse) = get_json(sut, "/health/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, ReadinessStatus::Ready);
        assert_eq!(body.checks.get("database"), Some(&CheckStatus::Ok));
    }

    #[tokio::test]
    async fn test_readiness_check_db疎通失敗時は503とnot_readyを返す() {
        let sut = create_test_app(MockDatabaseHealth::unhealthy());

        let (status, body): (_, ReadinessResponse) = get_json(sut, "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, ReadinessStatus::NotReady);
        assert_eq!(body.checks.get("database"), Some(&CheckStatus::Error));
    }
}

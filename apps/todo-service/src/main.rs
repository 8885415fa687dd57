//! # Todo Service サーバー
//!
//! Todo の一覧・作成・更新を提供する HTTP サービス。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | `GET` | `/todos` | Todo 一覧（挿入順） |
//! | `GET` | `/todos/hello` | 疎通確認用の固定文字列 |
//! | `POST` | `/todos` | Todo 作成 |
//! | `PUT` | `/todos/{id}` | Todo 更新 |
//! | `GET` | `/health` | Liveness Check |
//! | `GET` | `/health/ready` | Readiness Check |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレスまたはホスト名（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todo=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p todo-service
//! ```

use std::sync::Arc;

use todo_infra::{
    PgDatabaseHealth,
    db,
    repository::PostgresTodoRepository,
};
use todo_service::{
    app_builder::build_app,
    config::TodoConfig,
    handler::{ReadinessState, TodoState},
    usecase::TodoUseCaseImpl,
};
use todo_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("todo-service");
    observability::init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    // 設定読み込み
    let config = TodoConfig::from_env()?;

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool).await?;
    tracing::info!("マイグレーションを適用しました");

    // 依存コンポーネントを初期化
    let todo_repository = Arc::new(PostgresTodoRepository::new(pool.clone()));
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });
    let readiness_state = Arc::new(ReadinessState {
        database: Arc::new(PgDatabaseHealth::new(pool)),
    });

    let app = build_app(todo_state, readiness_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "Todo Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}

//! cafe-ordering-server
//!
//! axum を使用したカフェ注文 HTTP サーバー。
//!
//! # エンドポイント
//!
//! - `POST /orders` - 注文を作成し、価格計算済みの注文を返す
//! - `GET /orders/{order_number}` - 注文を参照する
//! - `POST /orders/{order_number}/status` - 注文ステータスを更新する
//! - `POST /orders/{order_number}/payment` - 支払いを承認する
//!
//! # 使用方法
//!
//! ```bash
//! # サーバー起動
//! cargo run --bin cafe-ordering-server
//!
//! # リクエスト送信
//! curl -X POST http://localhost:8080/orders \
//!   -H "Content-Type: application/json" \
//!   -d '{"payment_method": "cash", "lines": [...]}'
//! ```

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_ordering::api::{Dependencies, router};

#[tokio::main]
async fn main() {
    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_ordering=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // デモ用依存でルーター構築
    let app = router(Dependencies::demo());

    // サーバー起動
    let address = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Starting server on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

//! Liveness ping

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingPong {
    pub ping_pong: String,
}

pub async fn ping() -> Json<PingPong> {
    Json(PingPong {
        ping_pong: "Pong".to_string(),
    })
}

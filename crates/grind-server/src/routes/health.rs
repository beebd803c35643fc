use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::jobs;
use crate::state::AppState;

/// GET / and GET /health — read-only progress snapshot.
///
/// Doubles as the keep-alive endpoint for free-tier hosts that spin idle
/// services down.
pub async fn health(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let today = jobs::local_today(&app.config);
        let record = app.store.snapshot()?;
        let week = grind_core::week::week_for(today, record.start_date);
        let snap = grind_core::scheduler::snapshot(&app.store, &app.roadmap, week)?;

        Ok::<_, grind_core::GrindError>(serde_json::json!({
            "status": "ok",
            "week": snap.week,
            "progress": format!("{}/{}", snap.done_count, snap.total),
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

//! Routes for the Guild Hall bounded context.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use layoutquest_guild::application::command_handlers;
use layoutquest_guild::application::query_handlers::{
    self, ProgressView, QuestBoardEntry,
};
use layoutquest_guild::domain::aggregates::CompletionOutcome;
use layoutquest_guild::domain::commands;
use layoutquest_guild::domain::events::QuestEvent;
use layoutquest_guild::domain::progress::UserProgress;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /quests/{quest_id}/submit.
#[derive(Debug, Deserialize)]
pub struct SubmitQuestRequest {
    /// Link to the player's work.
    pub link: String,
}

/// Response body returned after accepting a quest.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub progress: UserProgress,
    /// IDs of the domain events produced.
    pub event_ids: Vec<Uuid>,
}

/// Response body returned after a submission.
#[derive(Debug, Serialize)]
pub struct SubmitQuestResponse {
    /// Guild-master flavor text.
    pub feedback: String,
    pub outcome: CompletionOutcome,
    pub progress: UserProgress,
    pub event_ids: Vec<Uuid>,
}

/// Response body returned after an expiry sweep.
#[derive(Debug, Serialize)]
pub struct CheckExpiredResponse {
    /// Quests that failed during the sweep.
    pub expired: Vec<String>,
    pub progress: UserProgress,
    pub event_ids: Vec<Uuid>,
}

fn event_ids(events: &[QuestEvent]) -> Vec<Uuid> {
    events.iter().map(|e| e.metadata.event_id).collect()
}

/// GET /quests
#[instrument(skip(state))]
async fn list_quests(State(state): State<AppState>) -> Json<Vec<QuestBoardEntry>> {
    Json(
        query_handlers::get_quest_board(&state.catalog, state.clock.as_ref(), &state.progress_store)
            .await,
    )
}

/// GET /progress
#[instrument(skip(state))]
async fn get_progress(State(state): State<AppState>) -> Json<ProgressView> {
    Json(query_handlers::get_progress(&state.progress_store).await)
}

/// POST /quests/{quest_id}/accept
#[instrument(skip(state))]
async fn accept_quest(
    State(state): State<AppState>,
    Path(quest_id): Path<String>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::AcceptQuest {
        correlation_id: Uuid::new_v4(),
        quest_id,
    };

    info!(correlation_id = %command.correlation_id, "handling accept_quest command");

    let result = command_handlers::handle_accept_quest(
        &command,
        &state.catalog,
        state.clock.as_ref(),
        &state.progress_store,
    )
    .await?;

    Ok(Json(CommandResponse {
        event_ids: event_ids(&result.events),
        progress: result.progress,
    }))
}

/// POST /quests/{quest_id}/submit
#[instrument(skip(state, body))]
async fn submit_quest(
    State(state): State<AppState>,
    Path(quest_id): Path<String>,
    body: Result<Json<SubmitQuestRequest>, JsonRejection>,
) -> Result<Json<SubmitQuestResponse>, ApiError> {
    let Json(request) = body?;
    let command = commands::SubmitQuest {
        correlation_id: Uuid::new_v4(),
        quest_id,
        link: request.link,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_quest command");

    let result = command_handlers::handle_submit_quest(
        &command,
        &state.catalog,
        state.clock.as_ref(),
        &state.progress_store,
        state.generator.as_ref(),
        &state.submissions,
    )
    .await?;

    Ok(Json(SubmitQuestResponse {
        event_ids: event_ids(&result.events),
        feedback: result.feedback,
        outcome: result.outcome,
        progress: result.progress,
    }))
}

/// POST /check-expired
#[instrument(skip(state))]
async fn check_expired(State(state): State<AppState>) -> Json<CheckExpiredResponse> {
    let command = commands::CheckExpiredQuests {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling check_expired_quests command");

    let result = command_handlers::handle_check_expired_quests(
        &command,
        state.clock.as_ref(),
        &state.progress_store,
    )
    .await;

    Json(CheckExpiredResponse {
        event_ids: event_ids(&result.events),
        expired: result.expired,
        progress: result.progress,
    })
}

/// Returns the router for the guild context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quests", get(list_quests))
        .route("/progress", get(get_progress))
        .route("/quests/{quest_id}/accept", post(accept_quest))
        .route("/quests/{quest_id}/submit", post(submit_quest))
        .route("/check-expired", post(check_expired))
}

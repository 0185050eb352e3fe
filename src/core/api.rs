//! HTTP + WebSocket API for the journaling backend
//!
//! Endpoints:
//! - POST   /entries            - Classify and store a journal entry
//! - GET    /entries            - Entry history, newest first
//! - GET    /stats              - Journaling streak
//! - GET    /insights           - Temporal topic-emotion insights
//! - GET    /suggestion         - Wellness-coach suggestion
//! - POST   /goals              - Create goal from a suggestion
//! - GET    /goals              - List goals, newest first
//! - POST   /goals/{id}/complete - Mark goal completed
//! - DELETE /goals/{id}         - Delete goal
//! - WS     /ws                 - Live updates
//! - GET    /health             - Health check
//!
//! The store is API-layer state: the engine only ever receives a sorted
//! snapshot of it and stays free of I/O.

use axum::{
    extract::{Path, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{
    update_streak, InsightEngine, KeywordClassifier, LexiconAnnotator, SentimentClassifier,
    SuggestionGenerator, TemplateGenerator, Taxonomy, UserStats,
};
use crate::core::suggestion::{build_coach_prompt, KEEP_JOURNALING};
use crate::types::{EmotionPolarity, JournalEntry};
use crate::SUGGESTION_HISTORY_LEN;

/// Goal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Pending,
    Completed,
}

/// A goal adopted from a suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub suggestion_text: String,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Live update message
#[derive(Debug, Clone, Serialize)]
pub struct JournalUpdate {
    pub emotion: String,
    pub entry_count: usize,
    pub streak: u32,
}

/// App state
pub struct AppState {
    pub entries: RwLock<Vec<JournalEntry>>,
    pub goals: RwLock<Vec<Goal>>,
    pub stats: RwLock<UserStats>,
    pub engine: InsightEngine,
    pub classifier: Arc<dyn SentimentClassifier>,
    pub generator: Arc<dyn SuggestionGenerator>,
    pub update_tx: broadcast::Sender<JournalUpdate>,
}

/// New entry request
#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub text: String,
}

/// New entry response
#[derive(Debug, Serialize)]
pub struct NewEntryResponse {
    pub predicted_emotion: String,
}

/// Insights response
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

/// Suggestion response
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

/// New goal request
#[derive(Debug, Deserialize)]
pub struct NewGoalRequest {
    pub suggestion_text: String,
}

/// New goal response
#[derive(Debug, Serialize)]
pub struct NewGoalResponse {
    pub message: String,
    pub goal_id: String,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub entry_count: usize,
}

/// Create the API router with the default engine, classifier and generator
pub fn create_router() -> Router {
    let annotator = Arc::new(
        LexiconAnnotator::new().expect("annotator lexicons are validated at startup"),
    );
    let engine = InsightEngine::new(Taxonomy::builtin(), EmotionPolarity::default(), annotator)
        .expect("builtin taxonomy is non-empty");

    create_router_with(engine, Arc::new(KeywordClassifier::new()), Arc::new(TemplateGenerator::new()))
}

/// Create the API router with explicit collaborators
pub fn create_router_with(
    engine: InsightEngine,
    classifier: Arc<dyn SentimentClassifier>,
    generator: Arc<dyn SuggestionGenerator>,
) -> Router {
    let (tx, _) = broadcast::channel(100);
    let state = Arc::new(AppState {
        entries: RwLock::new(Vec::new()),
        goals: RwLock::new(Vec::new()),
        stats: RwLock::new(UserStats::default()),
        engine,
        classifier,
        generator,
        update_tx: tx,
    });

    Router::new()
        .route("/health", get(health))
        .route("/entries", post(create_entry).get(get_entries))
        .route("/stats", get(get_stats))
        .route("/insights", get(get_insights))
        .route("/suggestion", get(get_suggestion))
        .route("/goals", post(create_goal).get(get_goals))
        .route("/goals/:id/complete", post(complete_goal))
        .route("/goals/:id", delete(delete_goal))
        .route("/ws", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let entries = state.entries.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        entry_count: entries.len(),
    })
}

/// Classify and store a new entry
async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewEntryRequest>,
) -> Result<Json<NewEntryResponse>, StatusCode> {
    if req.text.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let emotion = state
        .classifier
        .classify(&req.text)
        .map_err(|_| StatusCode::BAD_GATEWAY)?;
    let now = Utc::now();

    let entry = JournalEntry::new(req.text, emotion.clone(), now);
    let entry_count = {
        let mut entries = state.entries.write().await;
        entries.push(entry);
        entries.len()
    };

    let streak = {
        let mut stats = state.stats.write().await;
        let updated = update_streak(&stats, now);
        *stats = updated;
        stats.streak
    };

    let _ = state.update_tx.send(JournalUpdate {
        emotion: emotion.to_string(),
        entry_count,
        streak,
    });

    Ok(Json(NewEntryResponse {
        predicted_emotion: emotion.to_string(),
    }))
}

/// Entry history, newest first
async fn get_entries(State(state): State<Arc<AppState>>) -> Json<Vec<JournalEntry>> {
    let entries = state.entries.read().await;
    let mut history = entries.clone();
    history.reverse();
    Json(history)
}

/// Journaling streak
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<UserStats> {
    let stats = state.stats.read().await;
    Json(stats.clone())
}

/// Temporal topic-emotion insights over the stored snapshot
async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InsightsResponse>, StatusCode> {
    let snapshot = {
        let entries = state.entries.read().await;
        let mut snapshot = entries.clone();
        // The engine expects ascending order and never sorts itself
        snapshot.sort_by_key(|entry| entry.timestamp);
        snapshot
    };

    let insights = state
        .engine
        .compute_insight_texts(&snapshot)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(InsightsResponse { insights }))
}

/// Wellness-coach suggestion from recent history
async fn get_suggestion(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuggestionResponse>, StatusCode> {
    let recent: Vec<JournalEntry> = {
        let entries = state.entries.read().await;
        entries
            .iter()
            .rev()
            .take(SUGGESTION_HISTORY_LEN)
            .cloned()
            .collect()
    };

    let suggestion = match build_coach_prompt(&recent) {
        None => KEEP_JOURNALING.to_string(),
        Some(prompt) => state
            .generator
            .generate(&prompt)
            .map_err(|_| StatusCode::BAD_GATEWAY)?,
    };

    Ok(Json(SuggestionResponse { suggestion }))
}

/// Create a goal from a suggestion
async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewGoalRequest>,
) -> Result<Json<NewGoalResponse>, StatusCode> {
    if req.suggestion_text.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let created_at = Utc::now();
    let id = generate_goal_id(&req.suggestion_text, created_at);

    let goal = Goal {
        id: id.clone(),
        suggestion_text: req.suggestion_text,
        status: GoalStatus::Pending,
        created_at,
        completed_at: None,
    };

    let mut goals = state.goals.write().await;
    goals.push(goal);

    Ok(Json(NewGoalResponse {
        message: "Goal created!".to_string(),
        goal_id: id,
    }))
}

/// List goals, newest first
async fn get_goals(State(state): State<Arc<AppState>>) -> Json<Vec<Goal>> {
    let goals = state.goals.read().await;
    let mut listing = goals.clone();
    listing.reverse();
    Json(listing)
}

/// Mark a goal completed
async fn complete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let mut goals = state.goals.write().await;
    let goal = goals
        .iter_mut()
        .find(|goal| goal.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    goal.status = GoalStatus::Completed;
    goal.completed_at = Some(Utc::now());

    Ok(Json(MessageResponse {
        message: "Goal marked as complete!".to_string(),
    }))
}

/// Delete a goal
async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let mut goals = state.goals.write().await;
    let before = goals.len();
    goals.retain(|goal| goal.id != id);

    if goals.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(MessageResponse {
        message: "Goal deleted successfully".to_string(),
    }))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let rx = state.update_tx.subscribe();
    ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    })
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<JournalUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Derive a goal id from its text and creation time
fn generate_goal_id(text: &str, created_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(created_at.timestamp_nanos_opt().unwrap_or(0).to_le_bytes());
    let digest = hasher.finalize();

    let hex: String = digest[..6].iter().map(|b| format!("{:02x}", b)).collect();
    format!("goal_{}", hex)
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Tidemark API running on {}", addr);
    println!("  POST   /entries            - Add journal entry");
    println!("  GET    /entries            - Entry history");
    println!("  GET    /stats              - Journaling streak");
    println!("  GET    /insights           - Topic-emotion insights");
    println!("  GET    /suggestion         - Coach suggestion");
    println!("  POST   /goals              - Create goal");
    println!("  GET    /goals              - List goals");
    println!("  POST   /goals/:id/complete - Complete goal");
    println!("  DELETE /goals/:id          - Delete goal");
    println!("  WS     /ws                 - Live updates");
    println!("  GET    /health             - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}

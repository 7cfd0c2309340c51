use ai_tutor_client::config::loader::ConfigLoader;
use ai_tutor_client::models::StudentQuery;
use ai_tutor_client::observability::init_tracing;
use ai_tutor_client::services::{AnalyticsService, StudentService, create_api_service};
use anyhow::Context;
use serde_json::json;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;

    let _guard = init_tracing(&config.logging);
    info!(
        app = %config.app_name,
        environment = %config.environment,
        "Starting AI Tutor client..."
    );

    let service = create_api_service(&config).context("failed to build api service")?;

    let health = service.health_check().await;
    if *health.data() {
        info!(source = health.source(), "backend is healthy");
    } else {
        warn!(error = ?health.error(), "backend unavailable, reads will use mock data");
    }

    let student_id = std::env::var("AI_TUTOR_STUDENT_ID")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1);

    let students = service.students();
    let analytics = service.analytics();

    let list = students.list(&StudentQuery::default()).await;
    let stats = students.stats(student_id).await;
    let trends = analytics.learning_trends(student_id, Some(7)).await;

    let snapshot = json!({
        "student_id": student_id,
        "mock_mode": service.is_mock_mode(),
        "students": { "source": list.source(), "data": list.data() },
        "stats": { "source": stats.source(), "data": stats.data() },
        "learning_trends": { "source": trends.source(), "data": trends.data() },
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!(metrics = %service.metrics().gather(), "done");
    Ok(())
}

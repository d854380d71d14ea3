pub mod modules;
pub use modules::dashboard;
pub use modules::entry;
pub use modules::identity;
pub use modules::topic;
pub mod health;
pub mod shared;

use crate::dashboard::application::ports::incoming::use_cases::DashboardUseCase;
use crate::dashboard::application::services::DashboardService;
use crate::entry::adapter::outgoing::{EntryQueryPostgres, EntryRepositoryPostgres};
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, EditEntryFormUseCase, NewEntryFormUseCase, UpdateEntryUseCase,
};
use crate::entry::application::services::{
    CreateEntryService, EditEntryFormService, NewEntryFormService, UpdateEntryService,
};
use crate::identity::adapter::incoming::web::extractors::auth::AuthSettings;
use crate::identity::adapter::outgoing::SessionIdentityProvider;
use crate::identity::application::ports::outgoing::IdentityProvider;
use crate::shared::render::{HtmlPageRenderer, PageRenderer};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, ListTopicsUseCase, TopicDetailUseCase,
};
use crate::topic::application::services::{
    CreateTopicService, ListTopicsService, TopicDetailService,
};

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{web, App, HttpServer};
use anyhow::Context;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_use_case: Arc<dyn DashboardUseCase + Send + Sync>,
    pub list_topics_use_case: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub topic_detail_use_case: Arc<dyn TopicDetailUseCase + Send + Sync>,
    pub create_topic_use_case: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub new_entry_form_use_case: Arc<dyn NewEntryFormUseCase + Send + Sync>,
    pub create_entry_use_case: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub edit_entry_form_use_case: Arc<dyn EditEntryFormUseCase + Send + Sync>,
    pub update_entry_use_case: Arc<dyn UpdateEntryUseCase + Send + Sync>,
    pub renderer: Arc<dyn PageRenderer + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;
    let host = env::var("HOST").context("HOST is not set in .env file")?;
    let port = env::var("PORT").context("PORT is not set in .env file")?;
    let session_secret = env::var("SESSION_KEY").context("SESSION_KEY is not set in .env file")?;
    let login_url = env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string());

    if session_secret.len() < 64 {
        anyhow::bail!("SESSION_KEY must be at least 64 characters");
    }
    let session_key = Key::from(session_secret.as_bytes());

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    // Adapters
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let entry_query = EntryQueryPostgres::new(Arc::clone(&db_arc));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(&db_arc));

    // Use cases
    let state = AppState {
        dashboard_use_case: Arc::new(DashboardService::new(
            topic_query.clone(),
            entry_query.clone(),
        )),
        list_topics_use_case: Arc::new(ListTopicsService::new(topic_query.clone())),
        topic_detail_use_case: Arc::new(TopicDetailService::new(
            topic_query.clone(),
            entry_query.clone(),
        )),
        create_topic_use_case: Arc::new(CreateTopicService::new(topic_repo)),
        new_entry_form_use_case: Arc::new(NewEntryFormService::new(topic_query.clone())),
        create_entry_use_case: Arc::new(CreateEntryService::new(
            topic_query.clone(),
            entry_repo.clone(),
        )),
        edit_entry_form_use_case: Arc::new(EditEntryFormService::new(
            entry_query.clone(),
            topic_query.clone(),
        )),
        update_entry_use_case: Arc::new(UpdateEntryService::new(
            entry_query,
            topic_query,
            entry_repo,
        )),
        renderer: Arc::new(HtmlPageRenderer::default()),
    };

    let identity_provider: Arc<dyn IdentityProvider + Send + Sync> =
        Arc::new(SessionIdentityProvider::default());
    let auth_settings = AuthSettings { login_url };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {server_url}");

    HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
            .cookie_name("session".into())
            .cookie_http_only(true)
            .build();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&identity_provider)))
            .app_data(web::Data::new(auth_settings.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .wrap(session)
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Dashboard
    cfg.service(crate::dashboard::adapter::incoming::web::routes::index_handler);
    // Topics ("/topics/new" must register before "/topics/{topic_id}")
    cfg.service(crate::topic::adapter::incoming::web::routes::topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::new_topic_form_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::topic_detail_handler);
    // Entries
    cfg.service(crate::entry::adapter::incoming::web::routes::new_entry_form_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::edit_entry_form_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::update_entry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

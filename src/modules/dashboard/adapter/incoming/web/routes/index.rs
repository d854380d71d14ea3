use actix_web::{get, web, Responder};

use crate::{
    dashboard::application::ports::incoming::use_cases::DashboardError,
    identity::adapter::incoming::web::extractors::auth::MaybeUser,
    shared::api::PageResponse,
    shared::render::{render_page, DashboardPage, EntryView, Page, TopicView},
    AppState,
};

/// The home page. Works for anonymous visitors too.
#[get("/")]
pub async fn index_handler(user: MaybeUser, data: web::Data<AppState>) -> impl Responder {
    match data.dashboard_use_case.execute(user.0).await {
        Ok(dashboard) => {
            let page = Page::Dashboard(DashboardPage {
                topics: dashboard.topics.iter().map(TopicView::from).collect(),
                entries: dashboard.entries.iter().map(EntryView::from).collect(),
                topic_count: dashboard.topic_count,
                entry_count: dashboard.entry_count,
            });
            render_page(data.renderer.as_ref(), &page)
        }
        Err(DashboardError::QueryFailed(_)) => PageResponse::internal_error(),
    }
}

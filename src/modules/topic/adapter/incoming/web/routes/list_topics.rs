use actix_web::{get, web, Responder};

use crate::{
    identity::adapter::incoming::web::extractors::auth::CurrentUser,
    shared::api::PageResponse,
    shared::render::{render_page, Page, TopicView, TopicsPage},
    topic::application::ports::incoming::use_cases::ListTopicsError,
    AppState,
};

#[get("/topics")]
pub async fn topics_handler(user: CurrentUser, data: web::Data<AppState>) -> impl Responder {
    match data.list_topics_use_case.execute(user.user_id).await {
        Ok(topics) => {
            let page = Page::Topics(TopicsPage {
                topics: topics.iter().map(TopicView::from).collect(),
            });
            render_page(data.renderer.as_ref(), &page)
        }
        Err(ListTopicsError::QueryFailed(_)) => PageResponse::internal_error(),
    }
}

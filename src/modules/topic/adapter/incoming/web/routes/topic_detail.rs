use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    identity::adapter::incoming::web::extractors::auth::CurrentUser,
    shared::api::PageResponse,
    shared::render::{render_page, EntryView, Page, TopicDetailPage, TopicView},
    topic::application::ports::incoming::use_cases::TopicDetailError,
    AppState,
};

#[get("/topics/{topic_id}")]
pub async fn topic_detail_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .topic_detail_use_case
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(detail) => {
            let page = Page::TopicDetail(TopicDetailPage {
                topic: TopicView::from(&detail.topic),
                entries: detail.entries.iter().map(EntryView::from).collect(),
                nav_topics: detail.nav_topics.iter().map(TopicView::from).collect(),
            });
            render_page(data.renderer.as_ref(), &page)
        }
        Err(TopicDetailError::TopicNotFound) => PageResponse::not_found(),
        Err(TopicDetailError::QueryFailed(_)) => PageResponse::internal_error(),
    }
}

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    identity::adapter::incoming::web::extractors::auth::CurrentUser,
    identity::application::domain::entities::UserId,
    shared::api::PageResponse,
    shared::render::{render_page, Page, TopicFormPage, TopicView},
    topic::application::ports::incoming::use_cases::{
        CreateTopicError, ListTopicsError, NewTopicCommand,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Form DTO
// ──────────────────────────────────────────────────────────
//

/// Only `text` is read from the submission; anything else in the payload
/// (an `owner` field, say) is dropped.
#[derive(Debug, Deserialize)]
struct TopicForm {
    text: String,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[get("/topics/new")]
pub async fn new_topic_form_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    render_topic_form(&data, user.user_id, String::new(), Vec::new()).await
}

#[post("/topics/new")]
pub async fn create_topic_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
    form: web::Form<TopicForm>,
) -> impl Responder {
    let owner = user.user_id;
    let form = form.into_inner();

    // Build command (validation happens here)
    let command = match NewTopicCommand::new(owner, form.text.clone()) {
        Ok(command) => command,
        Err(err) => {
            return render_topic_form(&data, owner, form.text, vec![err.to_string()]).await;
        }
    };

    // Execute use case
    match data.create_topic_use_case.execute(command).await {
        Ok(topic) => PageResponse::see_other(&format!("/topics/{}", topic.id)),
        Err(CreateTopicError::RepositoryError(_)) => PageResponse::internal_error(),
    }
}

async fn render_topic_form(
    data: &web::Data<AppState>,
    owner: UserId,
    text: String,
    errors: Vec<String>,
) -> HttpResponse {
    let nav_topics = match data.list_topics_use_case.execute(owner).await {
        Ok(topics) => topics.iter().map(TopicView::from).collect(),
        Err(ListTopicsError::QueryFailed(_)) => return PageResponse::internal_error(),
    };

    render_page(
        data.renderer.as_ref(),
        &Page::TopicForm(TopicFormPage {
            text,
            errors,
            nav_topics,
        }),
    )
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct TopicView {
    pub id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub id: Uuid,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardPage {
    pub topics: Vec<TopicView>,
    pub entries: Vec<EntryView>,
    pub topic_count: usize,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsPage {
    pub topics: Vec<TopicView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicDetailPage {
    pub topic: TopicView,
    pub entries: Vec<EntryView>,
    pub nav_topics: Vec<TopicView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicFormPage {
    /// Submitted value, echoed back when the form re-renders with errors.
    pub text: String,
    pub errors: Vec<String>,
    pub nav_topics: Vec<TopicView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryFormPage {
    pub topic: TopicView,
    /// Present when editing an existing entry, absent on the blank form.
    pub entry_id: Option<Uuid>,
    pub text: String,
    pub errors: Vec<String>,
    pub nav_topics: Vec<TopicView>,
}

/// Context handed to the rendering collaborator. Handlers build these;
/// they never format markup themselves.
#[derive(Debug, Clone, Serialize)]
pub enum Page {
    Dashboard(DashboardPage),
    Topics(TopicsPage),
    TopicDetail(TopicDetailPage),
    TopicForm(TopicFormPage),
    EntryForm(EntryFormPage),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(String),
}

pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &Page) -> Result<String, RenderError>;
}

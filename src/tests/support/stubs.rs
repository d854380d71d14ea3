use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    dashboard::application::ports::incoming::use_cases::{
        DashboardData, DashboardError, DashboardUseCase,
    },
    entry::application::ports::incoming::use_cases::{
        CreateEntryError, CreateEntryUseCase, EditEntryCommand, EditEntryFormData,
        EditEntryFormError, EditEntryFormUseCase, NewEntryCommand, NewEntryFormData,
        NewEntryFormError, NewEntryFormUseCase, UpdateEntryError, UpdateEntryUseCase,
    },
    entry::application::ports::outgoing::EntryResult,
    identity::application::domain::entities::UserId,
    shared::render::{Page, PageRenderer, RenderError},
    topic::application::ports::incoming::use_cases::{
        CreateTopicError, CreateTopicUseCase, ListTopicsError, ListTopicsUseCase,
        NewTopicCommand, TopicDetailData, TopicDetailError, TopicDetailUseCase,
    },
    topic::application::ports::outgoing::{TopicQueryResult, TopicResult},
};

// ============================================================
// Renderer stub: serializes the page context so tests can
// assert on what the handler actually built.
// ============================================================

pub struct JsonStubRenderer;

impl PageRenderer for JsonStubRenderer {
    fn render(&self, page: &Page) -> Result<String, RenderError> {
        serde_json::to_string(page).map_err(|e| RenderError::Template(e.to_string()))
    }
}

// ============================================================
// Dashboard
// ============================================================

pub struct StubDashboardUseCase {
    result: Result<DashboardData, DashboardError>,
}

impl StubDashboardUseCase {
    pub fn success(data: DashboardData) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(DashboardError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl DashboardUseCase for StubDashboardUseCase {
    async fn execute(&self, _owner: Option<UserId>) -> Result<DashboardData, DashboardError> {
        self.result.clone()
    }
}

// ============================================================
// Topics
// ============================================================

pub struct StubListTopicsUseCase {
    result: Result<Vec<TopicQueryResult>, ListTopicsError>,
}

impl StubListTopicsUseCase {
    pub fn success(topics: Vec<TopicQueryResult>) -> Self {
        Self { result: Ok(topics) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListTopicsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<TopicQueryResult>, ListTopicsError> {
        self.result.clone()
    }
}

pub struct StubTopicDetailUseCase {
    result: Result<TopicDetailData, TopicDetailError>,
}

impl StubTopicDetailUseCase {
    pub fn success(data: TopicDetailData) -> Self {
        Self { result: Ok(data) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(TopicDetailError::TopicNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(TopicDetailError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl TopicDetailUseCase for StubTopicDetailUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _topic_id: Uuid,
    ) -> Result<TopicDetailData, TopicDetailError> {
        self.result.clone()
    }
}

pub struct StubCreateTopicUseCase {
    result: Result<TopicResult, CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateTopicError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: NewTopicCommand) -> Result<TopicResult, CreateTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Entries
// ============================================================

pub struct StubNewEntryFormUseCase {
    result: Result<NewEntryFormData, NewEntryFormError>,
}

impl StubNewEntryFormUseCase {
    pub fn success(data: NewEntryFormData) -> Self {
        Self { result: Ok(data) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(NewEntryFormError::TopicNotFound),
        }
    }
}

#[async_trait]
impl NewEntryFormUseCase for StubNewEntryFormUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _topic_id: Uuid,
    ) -> Result<NewEntryFormData, NewEntryFormError> {
        self.result.clone()
    }
}

pub struct StubCreateEntryUseCase {
    result: Result<EntryResult, CreateEntryError>,
}

impl StubCreateEntryUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateEntryError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(&self, _command: NewEntryCommand) -> Result<EntryResult, CreateEntryError> {
        self.result.clone()
    }
}

pub struct StubEditEntryFormUseCase {
    result: Result<EditEntryFormData, EditEntryFormError>,
}

impl StubEditEntryFormUseCase {
    pub fn success(data: EditEntryFormData) -> Self {
        Self { result: Ok(data) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(EditEntryFormError::EntryNotFound),
        }
    }
}

#[async_trait]
impl EditEntryFormUseCase for StubEditEntryFormUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: Uuid,
    ) -> Result<EditEntryFormData, EditEntryFormError> {
        self.result.clone()
    }
}

pub struct StubUpdateEntryUseCase {
    result: Result<EntryResult, UpdateEntryError>,
}

impl StubUpdateEntryUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(UpdateEntryError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl UpdateEntryUseCase for StubUpdateEntryUseCase {
    async fn execute(&self, _command: EditEntryCommand) -> Result<EntryResult, UpdateEntryError> {
        self.result.clone()
    }
}

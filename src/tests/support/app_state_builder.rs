use actix_web::web;
use std::sync::Arc;

use crate::dashboard::application::ports::incoming::use_cases::{DashboardData, DashboardUseCase};
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, EditEntryFormUseCase, NewEntryFormUseCase, UpdateEntryUseCase,
};
use crate::shared::render::PageRenderer;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, ListTopicsUseCase, TopicDetailUseCase,
};
use crate::AppState;

/// AppState with benign stubs everywhere; tests swap in what they need.
pub struct TestAppStateBuilder {
    dashboard: Arc<dyn DashboardUseCase + Send + Sync>,
    list_topics: Arc<dyn ListTopicsUseCase + Send + Sync>,
    topic_detail: Arc<dyn TopicDetailUseCase + Send + Sync>,
    create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    new_entry_form: Arc<dyn NewEntryFormUseCase + Send + Sync>,
    create_entry: Arc<dyn CreateEntryUseCase + Send + Sync>,
    edit_entry_form: Arc<dyn EditEntryFormUseCase + Send + Sync>,
    update_entry: Arc<dyn UpdateEntryUseCase + Send + Sync>,
    renderer: Arc<dyn PageRenderer + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            dashboard: Arc::new(StubDashboardUseCase::success(DashboardData::default())),
            list_topics: Arc::new(StubListTopicsUseCase::success(vec![])),
            topic_detail: Arc::new(StubTopicDetailUseCase::not_found()),
            create_topic: Arc::new(StubCreateTopicUseCase::repo_error("not used in this test")),
            new_entry_form: Arc::new(StubNewEntryFormUseCase::not_found()),
            create_entry: Arc::new(StubCreateEntryUseCase::repo_error("not used in this test")),
            edit_entry_form: Arc::new(StubEditEntryFormUseCase::not_found()),
            update_entry: Arc::new(StubUpdateEntryUseCase::repo_error("not used in this test")),
            renderer: Arc::new(JsonStubRenderer),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_dashboard(mut self, uc: Arc<dyn DashboardUseCase + Send + Sync>) -> Self {
        self.dashboard = uc;
        self
    }

    pub fn with_list_topics(mut self, uc: Arc<dyn ListTopicsUseCase + Send + Sync>) -> Self {
        self.list_topics = uc;
        self
    }

    pub fn with_topic_detail(mut self, uc: Arc<dyn TopicDetailUseCase + Send + Sync>) -> Self {
        self.topic_detail = uc;
        self
    }

    pub fn with_create_topic(mut self, uc: Arc<dyn CreateTopicUseCase + Send + Sync>) -> Self {
        self.create_topic = uc;
        self
    }

    pub fn with_new_entry_form(mut self, uc: Arc<dyn NewEntryFormUseCase + Send + Sync>) -> Self {
        self.new_entry_form = uc;
        self
    }

    pub fn with_create_entry(mut self, uc: Arc<dyn CreateEntryUseCase + Send + Sync>) -> Self {
        self.create_entry = uc;
        self
    }

    pub fn with_edit_entry_form(
        mut self,
        uc: Arc<dyn EditEntryFormUseCase + Send + Sync>,
    ) -> Self {
        self.edit_entry_form = uc;
        self
    }

    pub fn with_update_entry(mut self, uc: Arc<dyn UpdateEntryUseCase + Send + Sync>) -> Self {
        self.update_entry = uc;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer + Send + Sync>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            dashboard_use_case: self.dashboard,
            list_topics_use_case: self.list_topics,
            topic_detail_use_case: self.topic_detail,
            create_topic_use_case: self.create_topic,
            new_entry_form_use_case: self.new_entry_form,
            create_entry_use_case: self.create_entry,
            edit_entry_form_use_case: self.edit_entry_form,
            update_entry_use_case: self.update_entry,
            renderer: self.renderer,
        })
    }
}

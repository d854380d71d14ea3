use async_trait::async_trait;

use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicResult;

//
// ──────────────────────────────────────────────────────────
// New Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewTopicCommand {
    owner: UserId,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicFormError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text must not exceed 200 characters")]
    TextTooLong,
}

impl NewTopicCommand {
    pub fn new(owner: UserId, text: String) -> Result<Self, TopicFormError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(TopicFormError::EmptyText);
        }

        if text.chars().count() > 200 {
            return Err(TopicFormError::TextTooLong);
        }

        Ok(Self {
            owner,
            text: text.to_string(),
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: NewTopicCommand) -> Result<TopicResult, CreateTopicError>;
}

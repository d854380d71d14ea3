mod create_topic_use_case;
mod list_topics_use_case;
mod topic_detail_use_case;

pub use create_topic_use_case::{
    CreateTopicError, CreateTopicUseCase, NewTopicCommand, TopicFormError,
};
pub use list_topics_use_case::{ListTopicsError, ListTopicsUseCase};
pub use topic_detail_use_case::{TopicDetailData, TopicDetailError, TopicDetailUseCase};

mod create_topic_service;
mod list_topics_service;
mod topic_detail_service;

pub use create_topic_service::CreateTopicService;
pub use list_topics_service::ListTopicsService;
pub use topic_detail_service::TopicDetailService;

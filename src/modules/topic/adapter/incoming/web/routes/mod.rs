mod list_topics;
mod new_topic;
mod topic_detail;

pub use list_topics::topics_handler;
pub use new_topic::{create_topic_handler, new_topic_form_handler};
pub use topic_detail::topic_detail_handler;

pub(crate) mod event;
pub use event::TopicEvent;

pub(crate) mod path;
pub use path::{MAX_PATH_LENGTH, TopicPath, TopicPathError};

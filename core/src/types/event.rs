use crate::types::TopicPath;

/// One delivered event: the full topic path plus the raw payload bytes.
///
/// The payload is opaque at this layer; [`crate::sanitize`] decides how to
/// render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEvent {
    path: TopicPath,
    payload: Vec<u8>,
}

impl TopicEvent {
    pub fn new(path: TopicPath, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            payload: payload.into(),
        }
    }

    /// Validates the raw path string and builds the event in one step.
    pub fn parse(path: &str, payload: impl Into<Vec<u8>>) -> crate::Result<Self> {
        Ok(Self::new(TopicPath::try_from(path)?, payload))
    }

    pub fn path(&self) -> &TopicPath {
        &self.path
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

use nutype::nutype;

pub const MAX_PATH_LENGTH: usize = 65535;

/// Full slash-delimited topic path, e.g. `sensors/kitchen/temperature`.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_PATH_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct TopicPath(String);

impl TopicPath {
    /// Path segments in root-to-leaf order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.as_str().split('/')
    }
}

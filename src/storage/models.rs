/// One stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: i64,
    pub title: String,
    /// Running time in whole minutes. No range is enforced.
    pub duration: i64,
}

/// Payload for insert and update; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub duration: i64,
}

impl NewVideo {
    pub fn new(title: impl Into<String>, duration: i64) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }
}

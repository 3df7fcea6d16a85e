pub mod models;
pub mod schema;
pub mod sqlite;

use crate::errors::Result;
use models::{NewVideo, VideoRecord};

/// The persistence seam: durable video records plus the title-uniqueness
/// rule. Titles are compared case-insensitively everywhere.
pub trait VideoStore {
    /// All records, ascending by id. An empty catalog yields an empty vec.
    fn list_all(&self) -> Result<Vec<VideoRecord>>;
    fn get_by_id(&self, id: i64) -> Result<VideoRecord>;
    fn exists_by_title(&self, title: &str) -> Result<bool>;
    fn insert(&self, video: NewVideo) -> Result<VideoRecord>;
    fn update(&self, id: i64, video: NewVideo) -> Result<VideoRecord>;
    fn delete(&self, id: i64) -> Result<()>;
}

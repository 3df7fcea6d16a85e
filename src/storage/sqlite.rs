use rusqlite::{Connection, Row, params};

use super::VideoStore;
use super::models::{NewVideo, VideoRecord};
use super::schema;
use crate::errors::{CatalogError, Result};

pub struct SqliteStore {
    conn: Connection,
}

fn row_to_video(row: &Row) -> rusqlite::Result<VideoRecord> {
    Ok(VideoRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        duration: row.get(2)?,
    })
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Result<Self> {
        conn.execute(schema::CREATE_VIDEOS_TABLE, [])?;
        conn.execute(schema::CREATE_INDEX_TITLE, [])?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::new(conn)
    }

    /// Duplicate scan used by update: ignores the record being renamed so
    /// a record may keep (or case-shift) its own title.
    fn title_taken_by_other(&self, title: &str, exclude_id: i64) -> Result<bool> {
        let taken = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM videos
                WHERE video_title = ?1 COLLATE NOCASE AND video_id <> ?2
             )",
            params![title, exclude_id],
            |row| row.get(0),
        )?;
        Ok(taken)
    }

    #[cfg(test)]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl VideoStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<VideoRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT video_id, video_title, video_duration
             FROM videos ORDER BY video_id ASC",
        )?;
        let videos = stmt
            .query_map([], row_to_video)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(videos)
    }

    fn get_by_id(&self, id: i64) -> Result<VideoRecord> {
        self.conn
            .query_row(
                "SELECT video_id, video_title, video_duration
                 FROM videos WHERE video_id = ?1",
                params![id],
                row_to_video,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => CatalogError::NotFound(id),
                other => CatalogError::Storage(other),
            })
    }

    fn exists_by_title(&self, title: &str) -> Result<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM videos WHERE video_title = ?1 COLLATE NOCASE
             )",
            params![title],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn insert(&self, video: NewVideo) -> Result<VideoRecord> {
        if self.exists_by_title(&video.title)? {
            return Err(CatalogError::DuplicateTitle(video.title));
        }
        self.conn.execute(
            "INSERT INTO videos (video_title, video_duration) VALUES (?1, ?2)",
            params![video.title, video.duration],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)
    }

    fn update(&self, id: i64, video: NewVideo) -> Result<VideoRecord> {
        // Existence first, so a bad id reports NotFound even when the new
        // title would also collide.
        self.get_by_id(id)?;
        if self.title_taken_by_other(&video.title, id)? {
            return Err(CatalogError::DuplicateTitle(video.title));
        }
        self.conn.execute(
            "UPDATE videos SET video_title = ?1, video_duration = ?2 WHERE video_id = ?3",
            params![video.title, video.duration, id],
        )?;
        self.get_by_id(id)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let changes = self
            .conn
            .execute("DELETE FROM videos WHERE video_id = ?1", params![id])?;
        if changes == 0 {
            return Err(CatalogError::NotFound(id));
        }
        Ok(())
    }
}

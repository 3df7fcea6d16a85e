pub const CREATE_VIDEOS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS videos (
        video_id INTEGER PRIMARY KEY AUTOINCREMENT,
        video_title TEXT NOT NULL,
        video_duration INTEGER NOT NULL
    )
";

pub const CREATE_INDEX_TITLE: &str =
    "CREATE INDEX IF NOT EXISTS idx_videos_title ON videos(video_title COLLATE NOCASE)";

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::map_sqlx_err;
use crate::domain::errors::StoreError;
use crate::domain::song::models::Song;
use crate::domain::song::ports::SongRepository;

pub struct PostgresSongRepository {
    pool: PgPool,
}

impl PostgresSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn song_from_row(row: &sqlx::postgres::PgRow) -> Result<Song, sqlx::Error> {
    Ok(Song {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        album: row.try_get("album")?,
        file_path: row.try_get("file_path")?,
    })
}

#[async_trait]
impl SongRepository for PostgresSongRepository {
    async fn create(&self, song: Song) -> Result<Song, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO songs (id, title, artist, album, file_path)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(&song.file_path)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(song)
    }

    async fn find_all(&self) -> Result<Vec<Song>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, artist, album, file_path
            FROM songs
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.iter()
            .map(song_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_err)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Song>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, artist, album, file_path
            FROM songs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.as_ref()
            .map(song_from_row)
            .transpose()
            .map_err(map_sqlx_err)
    }

    async fn update(&self, song: Song) -> Result<Option<Song>, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE songs
            SET title = $2, artist = $3, album = $4, file_path = $5
            WHERE id = $1
            "#,
        )
        .bind(song.id)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(&song.file_path)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(song))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM songs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.rows_affected() > 0)
    }
}

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::map_sqlx_err;
use super::song::song_from_row;
use crate::domain::errors::StoreError;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistSong;
use crate::domain::playlist::models::PlaylistWithSongs;
use crate::domain::playlist::ports::PlaylistRepository;

pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn playlist_from_row(row: &sqlx::postgres::PgRow) -> Result<Playlist, sqlx::Error> {
    Ok(Playlist {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        genre: row.try_get("genre")?,
    })
}

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO playlists (id, user_id, name, genre)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(playlist.id)
        .bind(playlist.user_id)
        .bind(&playlist.name)
        .bind(&playlist.genre)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(playlist)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<PlaylistWithSongs>, StoreError> {
        let playlist_rows = sqlx::query(
            r#"
            SELECT id, user_id, name, genre
            FROM playlists
            WHERE user_id = $1
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let mut playlists = Vec::with_capacity(playlist_rows.len());
        for row in &playlist_rows {
            let playlist = playlist_from_row(row).map_err(map_sqlx_err)?;

            let song_rows = sqlx::query(
                r#"
                SELECT s.id, s.title, s.artist, s.album, s.file_path
                FROM songs s
                JOIN playlist_songs ps ON ps.song_id = s.id
                WHERE ps.playlist_id = $1
                ORDER BY s.title
                "#,
            )
            .bind(playlist.id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

            let songs = song_rows
                .iter()
                .map(song_from_row)
                .collect::<Result<_, _>>()
                .map_err(map_sqlx_err)?;

            playlists.push(PlaylistWithSongs { playlist, songs });
        }

        Ok(playlists)
    }

    async fn add_song(&self, entry: PlaylistSong) -> Result<PlaylistSong, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO playlist_songs (id, playlist_id, song_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.id)
        .bind(entry.playlist_id)
        .bind(entry.song_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entry)
    }

    async fn remove_song(&self, playlist_id: Uuid, song_id: Uuid) -> Result<(), StoreError> {
        // Removing an absent pair is a no-op, not an error.
        sqlx::query(
            r#"
            DELETE FROM playlist_songs
            WHERE playlist_id = $1 AND song_id = $2
            "#,
        )
        .bind(playlist_id)
        .bind(song_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(())
    }

    async fn search<'a>(
        &self,
        name: Option<&'a str>,
        genre: Option<&'a str>,
    ) -> Result<Vec<Playlist>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, genre
            FROM playlists
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR genre ILIKE '%' || $2 || '%')
            ORDER BY name
            "#,
        )
        .bind(name)
        .bind(genre)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.iter()
            .map(playlist_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_err)
    }
}

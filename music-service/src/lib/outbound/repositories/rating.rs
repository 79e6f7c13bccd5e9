use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::map_sqlx_err;
use crate::domain::errors::StoreError;
use crate::domain::rating::models::RatingDetail;
use crate::domain::rating::models::SongRef;
use crate::domain::rating::models::UserRef;
use crate::domain::rating::ports::RatingRepository;
use crate::domain::song::models::SongRating;

pub struct PostgresRatingRepository {
    pool: PgPool,
}

impl PostgresRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT u.id AS user_id, u.username,
           s.id AS song_id, s.title, s.artist,
           sr.rating
    FROM song_ratings sr
    JOIN users u ON u.id = sr.user_id
    JOIN songs s ON s.id = sr.song_id
"#;

fn detail_from_row(row: &sqlx::postgres::PgRow) -> Result<RatingDetail, sqlx::Error> {
    Ok(RatingDetail {
        user: UserRef {
            id: row.try_get("user_id")?,
            username: row.try_get("username")?,
        },
        song: SongRef {
            id: row.try_get("song_id")?,
            title: row.try_get("title")?,
            artist: row.try_get("artist")?,
        },
        rating: row.try_get("rating")?,
    })
}

#[async_trait]
impl RatingRepository for PostgresRatingRepository {
    async fn upsert(&self, rating: SongRating) -> Result<SongRating, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO song_ratings (user_id, song_id, rating)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, song_id) DO UPDATE SET rating = EXCLUDED.rating
            "#,
        )
        .bind(rating.user_id)
        .bind(rating.song_id)
        .bind(rating.rating)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rating)
    }

    async fn find_all(&self) -> Result<Vec<RatingDetail>, StoreError> {
        let rows = sqlx::query(DETAIL_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        rows.iter()
            .map(detail_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_err)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<RatingDetail>, StoreError> {
        let query = format!("{DETAIL_SELECT} WHERE sr.user_id = $1");
        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        rows.iter()
            .map(detail_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_err)
    }

    async fn find_by_song(&self, song_id: Uuid) -> Result<Vec<RatingDetail>, StoreError> {
        let query = format!("{DETAIL_SELECT} WHERE sr.song_id = $1");
        let rows = sqlx::query(&query)
            .bind(song_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        rows.iter()
            .map(detail_from_row)
            .collect::<Result<_, _>>()
            .map_err(map_sqlx_err)
    }

    async fn find_by_user_and_song(
        &self,
        user_id: Uuid,
        song_id: Uuid,
    ) -> Result<Option<RatingDetail>, StoreError> {
        let query = format!("{DETAIL_SELECT} WHERE sr.user_id = $1 AND sr.song_id = $2");
        let row = sqlx::query(&query)
            .bind(user_id)
            .bind(song_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        row.as_ref()
            .map(detail_from_row)
            .transpose()
            .map_err(map_sqlx_err)
    }
}

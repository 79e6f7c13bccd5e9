use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreError;
use crate::domain::song::models::Song;

/// Persistence operations for the song catalog.
#[async_trait]
pub trait SongRepository: Send + Sync + 'static {
    async fn create(&self, song: Song) -> Result<Song, StoreError>;

    async fn find_all(&self) -> Result<Vec<Song>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Song>, StoreError>;

    /// Replace all writable fields. Returns `None` when no such song
    /// exists.
    async fn update(&self, song: Song) -> Result<Option<Song>, StoreError>;

    /// Returns `false` when no such song exists.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistSong;
use crate::domain::playlist::models::PlaylistWithSongs;
use crate::domain::playlist::ports::PlaylistRepository;
use crate::domain::song::ports::SongRepository;

/// Playlist operations: creation, listing, membership, and search.
pub struct PlaylistService<PR, SR>
where
    PR: PlaylistRepository,
    SR: SongRepository,
{
    playlists: Arc<PR>,
    songs: Arc<SR>,
}

impl<PR, SR> PlaylistService<PR, SR>
where
    PR: PlaylistRepository,
    SR: SongRepository,
{
    pub fn new(playlists: Arc<PR>, songs: Arc<SR>) -> Self {
        Self { playlists, songs }
    }

    pub async fn create_playlist(
        &self,
        user_id: Uuid,
        command: CreatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError> {
        let playlist = Playlist {
            id: Uuid::new_v4(),
            user_id,
            name: command.name,
            genre: command.genre,
        };

        self.playlists.create(playlist).await.map_err(|e| {
            tracing::error!(error = %e, "Playlist insert failed");
            PlaylistError::CreateFailed
        })
    }

    /// All playlists owned by `user_id`, with their songs.
    ///
    /// # Errors
    /// * `NoPlaylists` - the user owns none
    pub async fn get_user_playlists(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PlaylistWithSongs>, PlaylistError> {
        let playlists = self.playlists.find_by_user(user_id).await.map_err(|e| {
            tracing::error!(error = %e, "Playlist lookup failed");
            PlaylistError::FetchFailed
        })?;

        if playlists.is_empty() {
            return Err(PlaylistError::NoPlaylists);
        }

        Ok(playlists)
    }

    /// Add a song to a playlist. The song must exist; the playlist is not
    /// pre-checked, so a dangling playlist id surfaces as a store fault.
    pub async fn add_song_to_playlist(
        &self,
        playlist_id: Uuid,
        song_id: Uuid,
    ) -> Result<PlaylistSong, PlaylistError> {
        let song = self.songs.find_by_id(song_id).await.map_err(|e| {
            tracing::error!(error = %e, "Song lookup failed");
            PlaylistError::AddSongFailed
        })?;

        if song.is_none() {
            return Err(PlaylistError::SongNotFound);
        }

        let entry = PlaylistSong {
            id: Uuid::new_v4(),
            playlist_id,
            song_id,
        };

        self.playlists.add_song(entry).await.map_err(|e| {
            tracing::error!(error = %e, "Playlist membership insert failed");
            PlaylistError::AddSongFailed
        })
    }

    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: Uuid,
        song_id: Uuid,
    ) -> Result<(), PlaylistError> {
        let song = self.songs.find_by_id(song_id).await.map_err(|e| {
            tracing::error!(error = %e, "Song lookup failed");
            PlaylistError::RemoveSongFailed
        })?;

        if song.is_none() {
            return Err(PlaylistError::SongNotFound);
        }

        self.playlists
            .remove_song(playlist_id, song_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Playlist membership delete failed");
                PlaylistError::RemoveSongFailed
            })
    }

    pub async fn search_playlists(
        &self,
        name: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Vec<Playlist>, PlaylistError> {
        let playlists = self.playlists.search(name, genre).await.map_err(|e| {
            tracing::error!(error = %e, "Playlist search failed");
            PlaylistError::SearchFailed
        })?;

        if playlists.is_empty() {
            return Err(PlaylistError::NoPlaylists);
        }

        Ok(playlists)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::StoreError;
    use crate::domain::song::models::Song;

    mock! {
        pub TestPlaylistRepository {}

        #[async_trait::async_trait]
        impl PlaylistRepository for TestPlaylistRepository {
            async fn create(&self, playlist: Playlist) -> Result<Playlist, StoreError>;
            async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<PlaylistWithSongs>, StoreError>;
            async fn add_song(&self, entry: PlaylistSong) -> Result<PlaylistSong, StoreError>;
            async fn remove_song(&self, playlist_id: Uuid, song_id: Uuid) -> Result<(), StoreError>;
            async fn search<'a>(
                &self,
                name: Option<&'a str>,
                genre: Option<&'a str>,
            ) -> Result<Vec<Playlist>, StoreError>;
        }
    }

    mock! {
        pub TestSongRepository {}

        #[async_trait::async_trait]
        impl SongRepository for TestSongRepository {
            async fn create(&self, song: Song) -> Result<Song, StoreError>;
            async fn find_all(&self) -> Result<Vec<Song>, StoreError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Song>, StoreError>;
            async fn update(&self, song: Song) -> Result<Option<Song>, StoreError>;
            async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
        }
    }

    fn sample_song(id: Uuid) -> Song {
        Song {
            id,
            title: "Paranoid Android".to_string(),
            artist: "Radiohead".to_string(),
            album: Some("OK Computer".to_string()),
            file_path: "/media/ok_computer/02.flac".to_string(),
        }
    }

    #[tokio::test]
    async fn create_playlist_assigns_owner() {
        let mut playlists = MockTestPlaylistRepository::new();
        let songs = MockTestSongRepository::new();
        let user_id = Uuid::new_v4();

        playlists
            .expect_create()
            .withf(move |playlist| playlist.user_id == user_id && playlist.name == "roadtrip")
            .times(1)
            .returning(Ok);

        let service = PlaylistService::new(Arc::new(playlists), Arc::new(songs));
        let created = service
            .create_playlist(
                user_id,
                CreatePlaylistCommand {
                    name: "roadtrip".to_string(),
                    genre: "rock".to_string(),
                },
            )
            .await
            .expect("create failed");

        assert_eq!(created.user_id, user_id);
    }

    #[tokio::test]
    async fn get_user_playlists_empty_is_not_found() {
        let mut playlists = MockTestPlaylistRepository::new();
        let songs = MockTestSongRepository::new();

        playlists
            .expect_find_by_user()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = PlaylistService::new(Arc::new(playlists), Arc::new(songs));
        let result = service.get_user_playlists(Uuid::new_v4()).await;

        assert!(matches!(result, Err(PlaylistError::NoPlaylists)));
    }

    #[tokio::test]
    async fn add_song_requires_existing_song() {
        let playlists = MockTestPlaylistRepository::new();
        let mut songs = MockTestSongRepository::new();

        songs.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = PlaylistService::new(Arc::new(playlists), Arc::new(songs));
        let result = service
            .add_song_to_playlist(Uuid::new_v4(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(PlaylistError::SongNotFound)));
    }

    #[tokio::test]
    async fn add_song_links_playlist_and_song() {
        let mut playlists = MockTestPlaylistRepository::new();
        let mut songs = MockTestSongRepository::new();
        let playlist_id = Uuid::new_v4();
        let song_id = Uuid::new_v4();

        songs
            .expect_find_by_id()
            .times(1)
            .returning(move |id| Ok(Some(sample_song(id))));
        playlists
            .expect_add_song()
            .withf(move |entry| entry.playlist_id == playlist_id && entry.song_id == song_id)
            .times(1)
            .returning(Ok);

        let service = PlaylistService::new(Arc::new(playlists), Arc::new(songs));
        let entry = service
            .add_song_to_playlist(playlist_id, song_id)
            .await
            .expect("add failed");

        assert_eq!(entry.playlist_id, playlist_id);
        assert_eq!(entry.song_id, song_id);
    }

    #[tokio::test]
    async fn remove_song_store_fault_is_masked() {
        let mut playlists = MockTestPlaylistRepository::new();
        let mut songs = MockTestSongRepository::new();

        songs
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_song(id))));
        playlists
            .expect_remove_song()
            .times(1)
            .returning(|_, _| Err(StoreError::Database("connection refused".into())));

        let service = PlaylistService::new(Arc::new(playlists), Arc::new(songs));
        let result = service
            .remove_song_from_playlist(Uuid::new_v4(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(PlaylistError::RemoveSongFailed)));
    }

    #[tokio::test]
    async fn search_with_no_matches_is_not_found() {
        let mut playlists = MockTestPlaylistRepository::new();
        let songs = MockTestSongRepository::new();

        playlists.expect_search().times(1).returning(|_, _| Ok(vec![]));

        let service = PlaylistService::new(Arc::new(playlists), Arc::new(songs));
        let result = service.search_playlists(Some("jazz"), None).await;

        assert!(matches!(result, Err(PlaylistError::NoPlaylists)));
    }
}

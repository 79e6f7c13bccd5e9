use uuid::Uuid;

/// Rater reference embedded in rating read models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
}

/// Song reference embedded in rating read models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRef {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
}

/// A rating joined with who rated what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDetail {
    pub user: UserRef,
    pub song: SongRef,
    pub rating: i32,
}

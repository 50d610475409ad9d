/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or querying world data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested location id does not exist.
    #[error("location not found: {0}")]
    UnknownLocation(String),

    /// The requested NPC id does not exist.
    #[error("npc not found: {0}")]
    UnknownNpc(String),

    /// The requested item id is not in the catalog.
    #[error("item not found: {0}")]
    UnknownItem(String),

    /// A world file could not be parsed or written.
    #[error("invalid world data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The root of a metadata record must itself be a record.
    #[error("Root metadata value is not a record")]
    RootNotRecord,
}

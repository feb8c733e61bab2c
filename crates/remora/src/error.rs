#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("origin vertex {vertex} is not in the graph")]
    MissingOrigin { vertex: String },

    #[error("destination vertex {vertex} is not in the graph")]
    MissingDestination { vertex: String },
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors that can occur while reading record streams or writing listings.
///
/// Malformed records are not represented here: a token group that fails to
/// match the record pattern ends ingestion silently and is reported through
/// [`Ingest::halted_line`](super::Ingest::halted_line).
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

use thiserror::Error;
use uuid::Uuid;

use crate::model::UnknownVariant;

/// Internal issues indicating unexpected stored data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored status or operation tag is not a known variant.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    /// A stored audit diff is not a valid field change map.
    #[error("Malformed diff on audit record {id}: {source}")]
    MalformedDiff {
        /// Id of the audit record
        id: Uuid,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

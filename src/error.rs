use thiserror::Error;

/// Reasons a collection of blocks is not a partition of a ground set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("partition contains an empty block")]
    EmptyBlock,

    #[error("element {0} is not in the ground set")]
    UnknownElement(String),

    #[error("element {0} appears more than once")]
    DuplicateElement(String),

    #[error("element {0} of the ground set is not covered by any block")]
    MissingElement(String),

    #[error("partitions are over different ground sets")]
    MismatchedGroundSet,
}

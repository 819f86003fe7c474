use thiserror::Error;

/// Why a ride operation was rejected.  Every variant leaves the ride
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RideError {
    #[error("no visitor supplied")]
    AbsentVisitor,

    #[error("cannot run {ride}: no operator assigned")]
    NoOperator { ride: String },

    #[error("queue for {ride} is empty")]
    EmptyQueue { ride: String },

    #[error("ride history for {ride} is empty")]
    EmptyHistory { ride: String },
}

pub type RideResult<T> = Result<T, RideError>;

//! `park-ride` — one amusement ride: waiting queue, ride history, and
//! boarding cycles.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `RideState`, `HistoryInsert`                              |
//! | [`ordering`]  | `HistoryOrdering` (visit date ↑, age ↓)                   |
//! | [`cycle`]     | `RideState::run_cycle`, `CycleReport`                     |
//! | [`observer`]  | `RideObserver` trait, `NoopObserver`                      |
//! | [`builder`]   | `RideBuilder`                                             |
//! | [`error`]     | `RideError`, `RideResult<T>`                              |
//!
//! # Cycle model (summary)
//!
//! ```text
//! operator assigned?   no  → RideError::NoOperator
//! queue non-empty?     no  → RideError::EmptyQueue
//! boarding           = min(max_capacity, queue_len)
//! boarded            = queue.drain(..boarding)        (FIFO order)
//! history           += boarded, skipping known ticket ids
//! cycle_count       += 1
//! ```
//!
//! Rejected cycles change nothing, including `cycle_count`.

pub mod builder;
pub mod cycle;
pub mod error;
pub mod observer;
pub mod ordering;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::RideBuilder;
pub use cycle::CycleReport;
pub use error::{RideError, RideResult};
pub use observer::{NoopObserver, RideObserver};
pub use ordering::HistoryOrdering;
pub use state::{HistoryInsert, RideState};

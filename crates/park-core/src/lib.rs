//! `park-core` — foundational types for the park ride simulator.
//!
//! This crate is a dependency of every other `park-*` crate.  It has no
//! `park-*` dependencies and few external ones (`chrono`, `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`visitor`]   | `Visitor`, visit-date parsing helpers                   |
//! | [`employee`]  | `Employee` (ride operator)                              |
//! | [`config`]    | `RideConfig`, `DEFAULT_MAX_CAPACITY`                    |
//! | [`rng`]       | `CrowdRng` — seeded visitor generator                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod employee;
pub mod rng;
pub mod visitor;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_MAX_CAPACITY, RideConfig};
pub use employee::Employee;
pub use rng::CrowdRng;
pub use visitor::{VISIT_DATE_FORMAT, Visitor, format_visit_date, parse_visit_date};

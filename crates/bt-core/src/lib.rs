//! `bt-core` — foundational types for the `bench_train` chain simulator.
//!
//! This crate is a dependency of every other `bt-*` crate.  It has no `bt-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LinkId`                                              |
//! | [`geo`]         | `Point2`, planar distance and polar helpers           |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`error`]       | `BtError`, `BtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BtError, BtResult};
pub use geo::Point2;
pub use ids::LinkId;
pub use time::{MAX_TICKS, SimClock, Tick};

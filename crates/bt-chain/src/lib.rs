//! `bt-chain` — link geometry at a single time step.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                        |
//! |-------------------|-----------------------------------------------------------------|
//! | [`links`]         | `LinkLengths` — validated per-link lengths, lead-first          |
//! | [`configuration`] | `ChainConfiguration` — every link's position at one instant     |
//! | [`resolver`]      | `ChainResolver` — lead position → full configuration            |
//! | [`velocity`]      | `VelocityEstimator` — backward-difference per-link speed        |
//! | [`collision`]     | `CollisionDetector`, `LinkPair` — adjacent-pair clearance scan  |
//! | [`error`]         | `ChainError`, `ChainResult<T>`                                  |
//!
//! # Chain model
//!
//! Link `i` sits `len[i]` away from link `i-1`, in the direction pointing
//! from link `i-1` back through the coordinate origin:
//!
//! ```text
//! direction_i = atan2(y_{i-1}, x_{i-1}) + π
//! p_i         = p_{i-1} + len[i] · (cos direction_i, sin direction_i)
//! ```
//!
//! This is a radial approximation, not a tangent-following one.  Every
//! adjacent distance equals `len[i]` by construction, so the length
//! invariant is never checked after the fact.  Resolution is strictly
//! sequential along the chain; time steps are independent of each other.

pub mod collision;
pub mod configuration;
pub mod error;
pub mod links;
pub mod resolver;
pub mod velocity;

#[cfg(test)]
mod tests;

pub use collision::{CollisionDetector, LinkPair};
pub use configuration::ChainConfiguration;
pub use error::{ChainError, ChainResult};
pub use links::LinkLengths;
pub use resolver::ChainResolver;
pub use velocity::VelocityEstimator;

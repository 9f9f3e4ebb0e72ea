//! `bt-path` — the prescribed trajectory of the lead link.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`params`]     | `PathFamily`, `RadialSense`, `ArcRadii`, `PathParams`       |
//! | [`spiral`]     | `Spiral` — Archimedean spiral, growing or shrinking         |
//! | [`turnaround`] | `Turnaround` — two circular arcs joined at a hand-off time  |
//! | [`model`]      | `LeadPath` trait, `LeadSample`, `PathModel` dispatch enum   |
//! | [`error`]      | `PathError`, `PathResult<T>`                                |
//!
//! Every path is a pure function of time: the lead link's position is never
//! propagated from a previous step, so sampling `t` twice gives the same
//! answer and sampling out of order is allowed.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the parameter types.    |

pub mod error;
pub mod model;
pub mod params;
pub mod spiral;
pub mod turnaround;


pub use error::{PathError, PathResult};
pub use model::{LeadPath, LeadSample, PathModel};
pub use params::{ArcRadii, PathFamily, PathParams, RadialSense};
pub use spiral::Spiral;
pub use turnaround::{ArcSegment, Turnaround};

//! `bt-sim` — time-stepped runner and parameter search for the bench_train
//! chain simulator.
//!
//! # Step loop
//!
//! ```text
//! for tick in 0..=round(T / dt):
//!   ① Path      — sample the lead link at t = tick·dt (PathModel).
//!   ② Resolve   — place links 1..N-1 radially inward from their predecessor.
//!   ③ Velocity  — |p_i(t) − p_i(t−dt)| / dt, zero at tick 0   (optional).
//!   ④ Observe   — on_step, plus on_snapshot every snapshot interval.
//!   ⑤ Collision — first adjacent pair closer than the clearance halts
//!                 the run after this step is recorded            (optional).
//!   ⑥ Boundary  — lead radius ≤ r_turn halts the run likewise     (optional).
//! ```
//!
//! # Modules
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | `config`   | `RunConfig`, `SearchMode`, `SearchGrid`                 |
//! | `builder`  | `SimBuilder` (validation, stage enablement)             |
//! | `sim`      | `Sim::run`                                              |
//! | `result`   | `TimeSeries`, events, `SimulationResult`, `SearchResult`|
//! | `search`   | Minimize-pitch and maximize-speed grid scans            |
//! | `engine`   | `execute`: validate, search if asked, run               |
//! | `presets`  | The five standard run configurations                    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates search candidates on Rayon's thread pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bt_sim::{execute, presets};
//!
//! let out = execute(&presets::spiral_collision())?;
//! match out.result.collision {
//!     Some(ev) => println!("links {} and {} touch at t = {}", ev.front, ev.rear, ev.time),
//!     None     => println!("no collision in {} steps", out.result.series.len()),
//! }
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod presets;
pub mod result;
pub mod search;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{RunConfig, SearchGrid, SearchMode};
pub use engine::{execute, execute_with_observer};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use result::{BoundaryEvent, CollisionEvent, EngineOutput, SearchResult, SimulationResult, TimeSeries};
pub use search::{Objective, maximize_lead_speed, minimize_pitch};
pub use sim::Sim;

//! `oz-sim` — frame loop for the ozmapf path animator.
//!
//! # Frame loop
//!
//! ```text
//! for now in (0..=end_time).step_by(frame_ms):
//!   ① on_tick_start(frame, now)
//!   ② Agent::update(now) for every agent   (parallel with `parallel`)
//!   ③ on_agent_frame(now, agent, render set) in ascending AgentId order
//!   ④ on_tick_end(now, primitives drawn)
//! on_sim_end(end_time)
//! ```
//!
//! `end_time` is the latest plan end plus one tail duration, so the last
//! trail has faded out when the loop stops.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                      |
//! |------------|---------------------------------------------|
//! | `parallel` | Runs step ② on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use oz_core::AnimConfig;
//! use oz_grid::SquareGrid;
//! use oz_sim::{NoopObserver, SimBuilder};
//!
//! let grid = SquareGrid::new(Point::ZERO, 8, 8, config.tile_size)?;
//! let plans = oz_plan::load_plans_json(path)?;
//! let mut sim = SimBuilder::new(config, grid).plans(plans).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod clock;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use clock::SimClock;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;

//! Interaction core for the Aelther lore site: chronology year readout,
//! strip and carousel layout math, map viewport math, starfield
//! sampling and navbar scroll state. The live document stays behind the
//! [`controller::SceneSource`] adapter.

pub mod carousel;
pub mod chronology;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod events;
pub mod geom;
mod macros;
pub mod map;
pub mod navbar;
pub mod starfield;
pub mod strip;

//! Destination world model for imported parks.
//!
//! Every type here is a plain data resource: the importer in `legacy_import`
//! writes into a [`ParkWorld`] and the Bevy integration installs its parts as
//! resources. Nothing in this crate knows about the legacy save layout.

pub mod banners;
pub mod colour;
pub mod config;
pub mod objects;
pub mod park_state;
pub mod research;
pub mod rides;
pub mod sprites;
pub mod tile_map;
pub mod user_strings;
pub mod world;

pub use world::ParkWorld;

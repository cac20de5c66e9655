//! In-memory form of the legacy save layout, as handed over by a
//! [`LegacyReader`](crate::importer::LegacyReader).

pub mod map_element;
pub mod ride;
pub mod save;
pub mod sprite;

pub use map_element::{LegacyElementType, LegacyMapElement, LegacyWallEdge};
pub use ride::{LegacyRide, LegacyVehicleColour};
pub use save::{LegacyBanner, LegacyResearchItem, LegacySave};
pub use sprite::{LegacyLitter, LegacyMisc, LegacyPeep, LegacySprite};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::config::{COORDS_XY_STEP, COORDS_Z_STEP, MAX_SPRITES, PEEP_MAX_THOUGHTS};
use crate::tile_map::TileMap;

/// Index of a sprite in the [`SpriteStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteIndex(pub u16);

/// Position and bounding data shared by every sprite kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpritePosition {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub direction: u8,
    pub width: u8,
    pub height_negative: u8,
    pub height_positive: u8,
}

// =============================================================================
// Peeps
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PeepState {
    #[default]
    Falling,
    One,
    QueuingFront,
    OnRide,
    LeavingRide,
    Walking,
    Queuing,
    EnteringRide,
    Sitting,
    Picked,
    Patrolling,
    Mowing,
    Sweeping,
    EnteringPark,
    LeavingPark,
    Answering,
    Fixing,
    Buying,
    Watching,
    EmptyingBin,
    UsingBin,
    Watering,
    HeadingToInspection,
    Inspecting,
}

impl PeepState {
    /// States that tie the peep to a ride vehicle or station platform.
    pub fn occupies_ride(self) -> bool {
        matches!(
            self,
            PeepState::OnRide
                | PeepState::QueuingFront
                | PeepState::LeavingRide
                | PeepState::EnteringRide
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PeepType {
    #[default]
    Guest,
    Staff,
}

/// Peep animation and appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeepAppearance {
    pub sprite_type: u8,
    pub action: u8,
    pub special_sprite: u8,
    pub next_action_sprite_type: u8,
    pub action_sprite_image_offset: u8,
    pub no_action_frame_no: u8,
    pub action_sprite_type: u8,
    pub action_frame: u8,
    pub tshirt_colour: Colour,
    pub trousers_colour: Colour,
    pub umbrella_colour: Colour,
    pub hat_colour: Colour,
    pub balloon_colour: Colour,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Peep {
    pub position: SpritePosition,
    pub appearance: PeepAppearance,
    pub name_string_idx: u16,
    pub id: u32,
    pub peep_type: PeepType,
    pub state: PeepState,
    pub outside_of_park: bool,

    pub destination_x: u8,
    pub destination_y: u8,
    pub destination_tolerance: u8,

    pub energy: u8,
    pub energy_growth_rate: u8,
    pub happiness: u8,
    pub happiness_growth_rate: u8,
    pub nausea: u8,
    pub nausea_growth_rate: u8,
    pub hunger: u8,
    pub thirst: u8,
    pub toilet: u8,
    pub litter_count: u8,
    pub disgusting_count: u8,
    pub intensity: u8,
    pub nausea_tolerance: u8,

    pub current_ride: u8,
    pub current_ride_station: u8,
    pub current_train: u8,
    pub current_car: u8,
    pub current_seat: u8,
    pub time_on_ride: u8,
    pub days_in_queue: u8,
    pub previous_ride: Option<u8>,
    pub interaction_ride_index: Option<u8>,
    pub guest_heading_to_ride_id: u8,
    /// Also holds staff orders.
    pub peep_is_lost_countdown: u8,
    pub next_in_queue: Option<SpriteIndex>,

    pub cash_in_pocket: i32,
    pub cash_spent: i32,
    pub time_in_park: i32,
    /// Also holds the staff type.
    pub no_of_rides: u8,
    pub no_of_drinks: u8,
    pub no_of_food: u8,
    pub no_of_souvenirs: u8,
    pub paid_to_enter: i16,
    pub paid_on_rides: i16,
    pub paid_on_drink: i16,
    pub paid_on_food: i16,
    pub paid_on_souvenirs: i16,
    pub voucher_arguments: u8,
    pub voucher_type: u8,

    pub rides_been_on: [u8; 32],
    pub ride_types_been_on: [u8; 16],
    pub photo1_ride_ref: u8,
    pub thoughts: [PeepThought; PEEP_MAX_THOUGHTS],
    pub favourite_ride: u8,
    pub favourite_ride_rating: u8,
    pub item_standard_flags: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeepThought {
    pub kind: u8,
    pub item: u8,
    pub freshness: u8,
    pub fresh_timeout: u8,
}

impl Peep {
    /// How far, in tiles, [`Peep::autoposition`] looks for a path.
    pub const AUTOPOSITION_RADIUS: usize = 16;

    /// Moves the peep onto the path tile nearest to `origin`, standing on the
    /// path surface. Returns `false` and leaves the peep untouched when no
    /// path lies within [`Peep::AUTOPOSITION_RADIUS`].
    pub fn autoposition(&mut self, map: &TileMap, origin: (usize, usize)) -> bool {
        let Some((x, y, height)) = map.nearest_path(origin.0, origin.1, Self::AUTOPOSITION_RADIUS)
        else {
            return false;
        };
        let (wx, wy) = TileMap::tile_centre(x, y);
        self.position.x = wx as i16;
        self.position.y = wy as i16;
        self.position.z = (height as i32 * COORDS_Z_STEP) as i16;
        self.destination_x = (wx / COORDS_XY_STEP) as u8;
        self.destination_y = (wy / COORDS_XY_STEP) as u8;
        self.destination_tolerance = 5;
        true
    }

    pub fn is_guest_in_park(&self) -> bool {
        self.peep_type == PeepType::Guest && !self.outside_of_park
    }
}

// =============================================================================
// Litter and misc sprites
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Litter {
    pub position: SpritePosition,
    pub litter_type: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscKind {
    SteamParticle {
        frame: u16,
    },
    MoneyEffect {
        move_delay: u16,
        num_movements: u8,
        value: i32,
        offset_x: i16,
        wiggle: u16,
    },
    CrashedVehicleParticle,
    ExplosionCloud,
    CrashSplash,
    ExplosionFlare,
    JumpingFountainWater {
        fountain_flags: u8,
        iteration: u8,
    },
    Balloon {
        colour: Colour,
    },
    Duck {
        frame: u16,
        state: u8,
    },
    JumpingFountainSnow {
        fountain_flags: u8,
        iteration: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscSprite {
    pub position: SpritePosition,
    pub flags: u8,
    pub kind: MiscKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Peep(Box<Peep>),
    Litter(Litter),
    Misc(MiscSprite),
}

// =============================================================================
// Store
// =============================================================================

/// Sprite pool. Indices are handed out in allocation order and stay valid
/// for the lifetime of the store.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteStore {
    sprites: Vec<Sprite>,
    /// Guests standing inside the park boundary.
    pub guests_in_park: u32,
}

impl SpriteStore {
    /// Returns `None` once the pool is full.
    pub fn allocate(&mut self, sprite: Sprite) -> Option<SpriteIndex> {
        if self.sprites.len() >= MAX_SPRITES {
            return None;
        }
        self.sprites.push(sprite);
        Some(SpriteIndex((self.sprites.len() - 1) as u16))
    }

    pub fn get(&self, index: SpriteIndex) -> Option<&Sprite> {
        self.sprites.get(index.0 as usize)
    }

    pub fn get_mut(&mut self, index: SpriteIndex) -> Option<&mut Sprite> {
        self.sprites.get_mut(index.0 as usize)
    }

    pub fn peep(&self, index: SpriteIndex) -> Option<&Peep> {
        match self.get(index)? {
            Sprite::Peep(peep) => Some(peep),
            _ => None,
        }
    }

    pub fn peep_mut(&mut self, index: SpriteIndex) -> Option<&mut Peep> {
        match self.get_mut(index)? {
            Sprite::Peep(peep) => Some(peep),
            _ => None,
        }
    }

    pub fn peeps(&self) -> impl Iterator<Item = (SpriteIndex, &Peep)> + '_ {
        self.sprites.iter().enumerate().filter_map(|(i, s)| match s {
            Sprite::Peep(peep) => Some((SpriteIndex(i as u16), peep.as_ref())),
            _ => None,
        })
    }

    pub fn peeps_mut(&mut self) -> impl Iterator<Item = (SpriteIndex, &mut Peep)> + '_ {
        self.sprites
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| match s {
                Sprite::Peep(peep) => Some((SpriteIndex(i as u16), peep.as_mut())),
                _ => None,
            })
    }

    pub fn litter(&self) -> impl Iterator<Item = &Litter> + '_ {
        self.sprites.iter().filter_map(|s| match s {
            Sprite::Litter(litter) => Some(litter),
            _ => None,
        })
    }

    pub fn misc(&self) -> impl Iterator<Item = &MiscSprite> + '_ {
        self.sprites.iter().filter_map(|s| match s {
            Sprite::Misc(misc) => Some(misc),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile_map::{PathElement, TileElement, TileElementKind};

    #[test]
    fn test_occupies_ride_states() {
        for state in [
            PeepState::OnRide,
            PeepState::QueuingFront,
            PeepState::LeavingRide,
            PeepState::EnteringRide,
        ] {
            assert!(state.occupies_ride());
        }
        assert!(!PeepState::Walking.occupies_ride());
        assert!(!PeepState::Queuing.occupies_ride());
        assert!(!PeepState::Falling.occupies_ride());
    }

    #[test]
    fn test_store_indices_follow_allocation_order() {
        let mut store = SpriteStore::default();
        let a = store.allocate(Sprite::Litter(Litter::default())).unwrap();
        let b = store
            .allocate(Sprite::Peep(Box::new(Peep::default())))
            .unwrap();
        assert_eq!(a, SpriteIndex(0));
        assert_eq!(b, SpriteIndex(1));
        assert!(store.peep(a).is_none());
        assert!(store.peep(b).is_some());
        assert_eq!(store.peeps().count(), 1);
        assert_eq!(store.litter().count(), 1);
    }

    #[test]
    fn test_autoposition_moves_onto_path() {
        let mut map = TileMap::new(128);
        map.tile_mut(6, 8).push(TileElement {
            base_height: 7,
            clearance_height: 11,
            direction: 0,
            quadrants: 0,
            kind: TileElementKind::Path(PathElement::default()),
        });
        let mut peep = Peep::default();
        assert!(peep.autoposition(&map, (5, 5)));
        assert_eq!((peep.position.x, peep.position.y), (6 * 32 + 16, 8 * 32 + 16));
        assert_eq!(peep.position.z, 56);

        let empty = TileMap::new(128);
        let mut stranded = Peep::default();
        assert!(!stranded.autoposition(&empty, (5, 5)));
        assert_eq!(stranded.position, SpritePosition::default());
    }
}

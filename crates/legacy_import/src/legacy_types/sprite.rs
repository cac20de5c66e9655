use park::sprites::{PeepState, PeepThought, SpritePosition};
use serde::{Deserialize, Serialize};

/// Sprite slots in a legacy save.
pub const LEGACY_MAX_SPRITES: usize = 5000;

/// Legacy "no sprite" index.
pub const LEGACY_SPRITE_INDEX_NULL: u16 = 0xFFFF;

pub const LEGACY_PEEP_TYPE_GUEST: u8 = 0;
pub const LEGACY_PEEP_TYPE_STAFF: u8 = 1;

// Misc sprite identifiers.
pub const MISC_STEAM_PARTICLE: u8 = 0;
pub const MISC_MONEY_EFFECT: u8 = 1;
pub const MISC_CRASHED_VEHICLE_PARTICLE: u8 = 2;
pub const MISC_EXPLOSION_CLOUD: u8 = 3;
pub const MISC_CRASH_SPLASH: u8 = 4;
pub const MISC_EXPLOSION_FLARE: u8 = 5;
pub const MISC_JUMPING_FOUNTAIN_WATER: u8 = 6;
pub const MISC_BALLOON: u8 = 7;
pub const MISC_DUCK: u8 = 8;
pub const MISC_JUMPING_FOUNTAIN_SNOW: u8 = 9;

/// Legacy peep state codes, in code order.
const PEEP_STATES: [PeepState; 24] = [
    PeepState::Falling,
    PeepState::One,
    PeepState::QueuingFront,
    PeepState::OnRide,
    PeepState::LeavingRide,
    PeepState::Walking,
    PeepState::Queuing,
    PeepState::EnteringRide,
    PeepState::Sitting,
    PeepState::Picked,
    PeepState::Patrolling,
    PeepState::Mowing,
    PeepState::Sweeping,
    PeepState::EnteringPark,
    PeepState::LeavingPark,
    PeepState::Answering,
    PeepState::Fixing,
    PeepState::Buying,
    PeepState::Watching,
    PeepState::EmptyingBin,
    PeepState::UsingBin,
    PeepState::Watering,
    PeepState::HeadingToInspection,
    PeepState::Inspecting,
];

pub const LEGACY_PEEP_STATE_ON_RIDE: u8 = 3;

pub fn decode_peep_state(code: u8) -> Option<PeepState> {
    PEEP_STATES.get(code as usize).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyPeep {
    pub position: SpritePosition,
    pub sprite_type: u8,
    pub action: u8,
    pub special_sprite: u8,
    pub next_action_sprite_type: u8,
    pub action_sprite_image_offset: u8,
    pub no_action_frame_no: u8,
    pub action_sprite_type: u8,
    pub action_frame: u8,
    pub name_string_idx: u16,
    pub outside_of_park: bool,
    pub state: u8,
    pub peep_type: u8,

    pub tshirt_colour: u8,
    pub trousers_colour: u8,
    pub umbrella_colour: u8,
    pub hat_colour: u8,
    pub balloon_colour: u8,

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
    pub guest_heading_to_ride_id: u8,
    pub peep_is_lost_countdown: u8,
    pub next_in_queue: u16,

    pub id: u32,
    pub cash_in_pocket: i32,
    pub cash_spent: i32,
    pub time_in_park: i32,
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
    pub thoughts: [PeepThought; 5],
    pub favourite_ride: u8,
    pub favourite_ride_rating: u8,
    pub item_standard_flags: u32,
}

impl LegacyPeep {
    pub fn is_on_map(&self) -> bool {
        self.position.x != park::config::LOCATION_NULL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyLitter {
    pub position: SpritePosition,
    pub litter_type: u8,
}

/// Misc sprite with every subtype field decoded side by side. Which fields
/// mean anything depends on `misc_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyMisc {
    pub position: SpritePosition,
    pub misc_type: u8,
    pub flags: u8,
    pub frame: u16,
    pub move_delay: u16,
    pub num_movements: u8,
    pub value: i32,
    pub offset_x: i16,
    pub wiggle: u16,
    pub fountain_flags: u8,
    pub iteration: u8,
    pub colour: u8,
    pub duck_state: u8,
}

/// One legacy sprite slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegacySprite {
    #[default]
    Empty,
    /// Ride vehicles are never imported.
    Vehicle,
    Peep(Box<LegacyPeep>),
    Litter(LegacyLitter),
    Misc(LegacyMisc),
}

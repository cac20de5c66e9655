use bevy::prelude::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::colour::{TrackColour, VehicleColour};
use crate::config::{MAX_RIDES, MAX_STATIONS, MAX_VEHICLE_COLOURS};
use crate::sprites::SpriteIndex;
use crate::user_strings::StringId;

// =============================================================================
// Ride classification
// =============================================================================

/// Destination ride type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RideKind(pub u8);

impl RideKind {
    pub const SPIRAL_ROLLER_COASTER: RideKind = RideKind(0);
    pub const STAND_UP_ROLLER_COASTER: RideKind = RideKind(1);
    pub const SUSPENDED_SWINGING_COASTER: RideKind = RideKind(2);
    pub const INVERTED_ROLLER_COASTER: RideKind = RideKind(3);
    pub const JUNIOR_ROLLER_COASTER: RideKind = RideKind(4);
    pub const MINIATURE_RAILWAY: RideKind = RideKind(5);
    pub const MONORAIL: RideKind = RideKind(6);
    pub const MINI_SUSPENDED_COASTER: RideKind = RideKind(7);
    pub const BOAT_HIRE: RideKind = RideKind(8);
    pub const WOODEN_WILD_MOUSE: RideKind = RideKind(9);
    pub const STEEPLECHASE: RideKind = RideKind(10);
    pub const CAR_RIDE: RideKind = RideKind(11);
    pub const LAUNCHED_FREEFALL: RideKind = RideKind(12);
    pub const BOBSLEIGH_COASTER: RideKind = RideKind(13);
    pub const OBSERVATION_TOWER: RideKind = RideKind(14);
    pub const LOOPING_ROLLER_COASTER: RideKind = RideKind(15);
    pub const DINGHY_SLIDE: RideKind = RideKind(16);
    pub const MINE_TRAIN_COASTER: RideKind = RideKind(17);
    pub const CHAIRLIFT: RideKind = RideKind(18);
    pub const CORKSCREW_ROLLER_COASTER: RideKind = RideKind(19);
    pub const MAZE: RideKind = RideKind(20);
    pub const SPIRAL_SLIDE: RideKind = RideKind(21);
    pub const GO_KARTS: RideKind = RideKind(22);
    pub const LOG_FLUME: RideKind = RideKind(23);
    pub const RIVER_RAPIDS: RideKind = RideKind(24);
    pub const DODGEMS: RideKind = RideKind(25);
    pub const SWINGING_SHIP: RideKind = RideKind(26);
    pub const SWINGING_INVERTER_SHIP: RideKind = RideKind(27);
    pub const FOOD_STALL: RideKind = RideKind(28);
    pub const DRINK_STALL: RideKind = RideKind(30);
    pub const SHOP: RideKind = RideKind(32);
    pub const MERRY_GO_ROUND: RideKind = RideKind(33);
    pub const INFORMATION_KIOSK: RideKind = RideKind(35);
    pub const TOILETS: RideKind = RideKind(36);
    pub const FERRIS_WHEEL: RideKind = RideKind(37);
    pub const MOTION_SIMULATOR: RideKind = RideKind(38);
    pub const CINEMA_3D: RideKind = RideKind(39);
    pub const TOP_SPIN: RideKind = RideKind(40);
    pub const SPACE_RINGS: RideKind = RideKind(41);
    pub const REVERSE_FREEFALL_COASTER: RideKind = RideKind(42);
    pub const VERTICAL_DROP_ROLLER_COASTER: RideKind = RideKind(44);
    pub const TWIST: RideKind = RideKind(46);
    pub const HAUNTED_HOUSE: RideKind = RideKind(47);
    pub const CIRCUS: RideKind = RideKind(49);
    pub const GHOST_TRAIN: RideKind = RideKind(50);
    pub const TWISTER_ROLLER_COASTER: RideKind = RideKind(51);
    pub const WOODEN_ROLLER_COASTER: RideKind = RideKind(52);
    pub const SIDE_FRICTION_ROLLER_COASTER: RideKind = RideKind(53);
    pub const STEEL_WILD_MOUSE: RideKind = RideKind(54);
    pub const MULTI_DIMENSION_ROLLER_COASTER: RideKind = RideKind(55);
    pub const FLYING_ROLLER_COASTER: RideKind = RideKind(57);
    pub const VIRGINIA_REEL: RideKind = RideKind(59);
    pub const SPLASH_BOATS: RideKind = RideKind(60);
    pub const MINI_HELICOPTERS: RideKind = RideKind(61);
    pub const LAY_DOWN_ROLLER_COASTER: RideKind = RideKind(62);
    pub const SUSPENDED_MONORAIL: RideKind = RideKind(63);
    pub const REVERSER_ROLLER_COASTER: RideKind = RideKind(65);
    pub const HEARTLINE_TWISTER_COASTER: RideKind = RideKind(66);
    pub const MINI_GOLF: RideKind = RideKind(67);
    pub const GIGA_COASTER: RideKind = RideKind(68);
    pub const ROTO_DROP: RideKind = RideKind(69);
    pub const FLYING_SAUCERS: RideKind = RideKind(70);
    pub const CROOKED_HOUSE: RideKind = RideKind(71);
    pub const MONORAIL_CYCLES: RideKind = RideKind(72);
    pub const COMPACT_INVERTED_COASTER: RideKind = RideKind(73);
    pub const WATER_COASTER: RideKind = RideKind(74);
    pub const AIR_POWERED_VERTICAL_COASTER: RideKind = RideKind(75);
    pub const INVERTED_HAIRPIN_COASTER: RideKind = RideKind(76);
    pub const MAGIC_CARPET: RideKind = RideKind(77);
    pub const SUBMARINE_RIDE: RideKind = RideKind(78);
    pub const RIVER_RAFTS: RideKind = RideKind(79);
    pub const ENTERPRISE: RideKind = RideKind(81);
    pub const INVERTED_IMPULSE_COASTER: RideKind = RideKind(86);
    pub const MINI_ROLLER_COASTER: RideKind = RideKind(87);
    pub const MINE_RIDE: RideKind = RideKind(88);
    pub const LIM_LAUNCHED_ROLLER_COASTER: RideKind = RideKind(90);

    /// Music style the ride plays when no style has been chosen.
    pub fn default_music(self) -> MusicStyle {
        match self {
            RideKind::MERRY_GO_ROUND => MusicStyle::FairgroundOrgan,
            RideKind::DODGEMS | RideKind::GO_KARTS => MusicStyle::Rock,
            RideKind::HAUNTED_HOUSE | RideKind::GHOST_TRAIN => MusicStyle::Horror,
            RideKind::CIRCUS => MusicStyle::Circus,
            RideKind::TOP_SPIN | RideKind::TWIST | RideKind::ENTERPRISE => MusicStyle::Techno,
            RideKind::SPACE_RINGS | RideKind::FLYING_SAUCERS => MusicStyle::Space,
            RideKind::SWINGING_SHIP | RideKind::SWINGING_INVERTER_SHIP => MusicStyle::Pirates,
            _ => MusicStyle::Gentle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MusicStyle {
    #[default]
    Gentle,
    Summer,
    Water,
    Rave,
    Theme,
    Military,
    Horror,
    Toyland,
    Candy,
    Roman,
    Oriental,
    Martian,
    Jungle,
    Egyptian,
    Snow,
    Space,
    Medieval,
    Urban,
    Organ,
    Mechanical,
    Modern,
    Pirates,
    Rock,
    Wild,
    Circus,
    Techno,
    FairgroundOrgan,
    Jurassic,
}

impl MusicStyle {
    pub fn from_u8(v: u8) -> MusicStyle {
        match v {
            1 => MusicStyle::Summer,
            2 => MusicStyle::Water,
            3 => MusicStyle::Rave,
            4 => MusicStyle::Theme,
            5 => MusicStyle::Military,
            6 => MusicStyle::Horror,
            7 => MusicStyle::Toyland,
            8 => MusicStyle::Candy,
            9 => MusicStyle::Roman,
            10 => MusicStyle::Oriental,
            11 => MusicStyle::Martian,
            12 => MusicStyle::Jungle,
            13 => MusicStyle::Egyptian,
            14 => MusicStyle::Snow,
            15 => MusicStyle::Space,
            16 => MusicStyle::Medieval,
            17 => MusicStyle::Urban,
            18 => MusicStyle::Organ,
            19 => MusicStyle::Mechanical,
            20 => MusicStyle::Modern,
            21 => MusicStyle::Pirates,
            22 => MusicStyle::Rock,
            23 => MusicStyle::Wild,
            24 => MusicStyle::Circus,
            25 => MusicStyle::Techno,
            26 => MusicStyle::FairgroundOrgan,
            27 => MusicStyle::Jurassic,
            _ => MusicStyle::Gentle,
        }
    }
}

/// Operating mode code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RideMode(pub u8);

impl RideMode {
    pub const NORMAL: RideMode = RideMode(0);
    pub const CONTINUOUS_CIRCUIT: RideMode = RideMode(1);
    pub const REVERSE_INCLINE_LAUNCHED_SHUTTLE: RideMode = RideMode(2);
    /// Launch that passes back through the station.
    pub const POWERED_LAUNCH_PASSTHROUGH: RideMode = RideMode(3);
    pub const SHUTTLE: RideMode = RideMode(4);
    /// Launch that never re-enters the station before the circuit ends.
    pub const POWERED_LAUNCH: RideMode = RideMode(30);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RideStatus {
    #[default]
    Closed,
    Open,
    Testing,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct RideLifecycleFlags: u32 {
        const ON_TRACK = 1 << 0;
        const TESTED = 1 << 1;
        const TEST_IN_PROGRESS = 1 << 2;
        const NO_RAW_STATS = 1 << 3;
        const HAS_STALLED_VEHICLE = 1 << 4;
        const BROKEN_DOWN = 1 << 7;
        const DUE_INSPECTION = 1 << 8;
        const QUEUE_FULL = 1 << 9;
        const CRASHED = 1 << 10;
        const EVER_BEEN_OPENED = 1 << 12;
        const MUSIC = 1 << 13;
        const INDESTRUCTIBLE = 1 << 14;
        const INDESTRUCTIBLE_TRACK = 1 << 15;
        const ON_RIDE_PHOTO = 1 << 22;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct DepartFlags: u8 {
        const LOAD_OPTIONS = 0b0000_0111;
        const WAIT_FOR_LOAD = 1 << 3;
        const LEAVE_WHEN_ANOTHER_ARRIVES = 1 << 4;
        const SYNCHRONISE_WITH_ADJACENT_STATIONS = 1 << 5;
        const WAIT_FOR_MINIMUM_TIME = 1 << 6;
        const WAIT_FOR_MAXIMUM_TIME = 1 << 7;
    }
}

// =============================================================================
// Ride
// =============================================================================

/// How a ride's display name is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideName {
    /// Player-chosen name stored in the user string table.
    Custom(StringId),
    /// "<ride type name> <number>".
    Default { ride_kind: RideKind, number: u16 },
}

impl Default for RideName {
    fn default() -> Self {
        RideName::Default {
            ride_kind: RideKind::default(),
            number: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Station {
    /// Packed tile coordinate of the station start, `None` when unused.
    pub start: Option<(u8, u8)>,
    pub height: u8,
    pub length: u8,
    pub depart: u8,
    pub train_at_station: Option<u8>,
    pub entrance: Option<(u8, u8)>,
    pub exit: Option<(u8, u8)>,
    pub queue_time: u8,
    pub queue_length: u16,
    pub last_peep_in_queue: Option<SpriteIndex>,
    pub segment_time: i32,
    pub segment_length: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub kind: RideKind,
    /// Slot of the ride object.
    pub subtype: u8,
    pub name: RideName,
    pub status: RideStatus,
    pub mode: RideMode,
    pub lifecycle_flags: RideLifecycleFlags,
    pub depart_flags: DepartFlags,
    pub overall_view: Option<(u8, u8)>,
    pub stations: [Station; MAX_STATIONS],
    pub num_stations: u8,

    // Trains
    pub vehicles: Vec<Option<SpriteIndex>>,
    pub num_vehicles: u8,
    pub num_cars_per_train: u8,
    pub proposed_num_vehicles: u8,
    pub proposed_num_cars_per_train: u8,
    pub max_trains: u8,
    pub min_max_cars_per_train: u8,
    pub special_track_elements: u8,
    pub num_sheltered_sections: u8,
    pub sheltered_length: i32,

    // Operation
    pub min_waiting_time: u8,
    pub max_waiting_time: u8,
    pub operation_option: u8,
    pub num_circuits: u8,
    pub lift_hill_speed: u8,
    pub music: MusicStyle,
    pub music_tune: Option<u8>,

    // Appearance
    pub colour_scheme_type: u8,
    pub track_colours: [TrackColour; 4],
    pub vehicle_colours: [VehicleColour; MAX_VEHICLE_COLOURS],
    pub entrance_style: u8,

    // Maintenance
    pub build_date: i16,
    pub inspection_interval: u8,
    pub last_inspection: u8,
    pub reliability: u16,
    pub unreliability_factor: u8,
    pub breakdown_reason: u8,

    // Ratings and measurements
    pub excitement: i16,
    pub intensity: i16,
    pub nausea: i16,
    pub max_speed: i32,
    pub average_speed: i32,
    pub max_positive_vertical_g: i16,
    pub max_negative_vertical_g: i16,
    pub max_lateral_g: i16,
    pub previous_vertical_g: i16,
    pub previous_lateral_g: i16,
    pub turn_count_default: u16,
    pub turn_count_banked: u16,
    pub turn_count_sloped: u16,
    pub drops: u8,
    pub start_drop_height: u8,
    pub highest_drop_height: u8,
    pub inversions: u8,
    pub boat_hire_return_direction: u8,
    pub boat_hire_return_position: u16,
    pub measurement_index: u8,
    pub chairlift_bullwheel_rotation: u16,
    pub chairlift_bullwheel_location: [(u8, u8); 2],
    pub chairlift_bullwheel_z: [u8; 2],
    pub cur_test_track_z: u8,
    pub cur_test_track_location: (u8, u8),
    pub testing_flags: u32,
    pub current_test_segment: u8,
    pub current_test_station: Option<u8>,
    pub average_speed_test_timeout: u8,

    // Finance and customers
    pub upkeep_cost: i16,
    pub price: i16,
    pub income_per_hour: i32,
    pub total_customers: u32,
    pub profit: i32,
    pub total_profit: i32,
    pub value: i16,
    pub satisfaction: u8,
    pub satisfaction_time_out: u8,
    pub satisfaction_next: u8,
    pub popularity: u8,
    pub popularity_next: u8,
    pub popularity_time_out: u8,
    pub num_riders: u16,
}

impl Default for Ride {
    fn default() -> Self {
        Self {
            kind: RideKind::default(),
            subtype: 0,
            name: RideName::default(),
            status: RideStatus::Closed,
            mode: RideMode::NORMAL,
            lifecycle_flags: RideLifecycleFlags::empty(),
            depart_flags: DepartFlags::empty(),
            overall_view: None,
            stations: [Station::default(); MAX_STATIONS],
            num_stations: 0,
            vehicles: vec![None; MAX_VEHICLE_COLOURS],
            num_vehicles: 0,
            num_cars_per_train: 0,
            proposed_num_vehicles: 0,
            proposed_num_cars_per_train: 0,
            max_trains: 0,
            min_max_cars_per_train: 0,
            special_track_elements: 0,
            num_sheltered_sections: 0,
            sheltered_length: 0,
            min_waiting_time: 0,
            max_waiting_time: 0,
            operation_option: 0,
            num_circuits: 1,
            lift_hill_speed: 0,
            music: MusicStyle::default(),
            music_tune: None,
            colour_scheme_type: 0,
            track_colours: [TrackColour::default(); 4],
            vehicle_colours: [VehicleColour::default(); MAX_VEHICLE_COLOURS],
            entrance_style: 0,
            build_date: 0,
            inspection_interval: 0,
            last_inspection: 0,
            reliability: 0,
            unreliability_factor: 0,
            breakdown_reason: 0,
            excitement: -1,
            intensity: -1,
            nausea: -1,
            max_speed: 0,
            average_speed: 0,
            max_positive_vertical_g: 0,
            max_negative_vertical_g: 0,
            max_lateral_g: 0,
            previous_vertical_g: 0,
            previous_lateral_g: 0,
            turn_count_default: 0,
            turn_count_banked: 0,
            turn_count_sloped: 0,
            drops: 0,
            start_drop_height: 0,
            highest_drop_height: 0,
            inversions: 0,
            boat_hire_return_direction: 0,
            boat_hire_return_position: 0,
            measurement_index: 0,
            chairlift_bullwheel_rotation: 0,
            chairlift_bullwheel_location: [(0, 0); 2],
            chairlift_bullwheel_z: [0; 2],
            cur_test_track_z: 0,
            cur_test_track_location: (0, 0),
            testing_flags: 0,
            current_test_segment: 0,
            current_test_station: None,
            average_speed_test_timeout: 0,
            upkeep_cost: 0,
            price: 0,
            income_per_hour: 0,
            total_customers: 0,
            profit: 0,
            total_profit: 0,
            value: 0,
            satisfaction: 0,
            satisfaction_time_out: 0,
            satisfaction_next: 0,
            popularity: 0,
            popularity_next: 0,
            popularity_time_out: 0,
            num_riders: 0,
        }
    }
}

// =============================================================================
// Ride table
// =============================================================================

/// Fixed slot table of rides. Slot numbers are ride indices and never move.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct RideTable {
    slots: Vec<Option<Ride>>,
}

impl Default for RideTable {
    fn default() -> Self {
        Self {
            slots: vec![None; MAX_RIDES],
        }
    }
}

impl RideTable {
    pub fn get(&self, index: usize) -> Option<&Ride> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ride> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Stores `ride` at `index`, replacing what was there. Indices past the
    /// table end are ignored and return `false`.
    pub fn set(&mut self, index: usize, ride: Ride) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(ride);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Ride)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().map(|r| (i, r)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Ride)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, r)| r.as_mut().map(|r| (i, r)))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

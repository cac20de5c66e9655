use serde::{Deserialize, Serialize};

use crate::tables::rides::RIDE_TYPE_NULL;

pub const LEGACY_MAX_STATIONS: usize = 4;
pub const LEGACY_VEHICLE_COLOURS: usize = 12;

/// Packed `(x, y)` tile coordinate meaning "none".
pub const LEGACY_XY_NULL: u16 = 0xFFFF;

/// Legacy "play music" depart flag, shared with station synchronisation.
pub const LEGACY_DEPART_PLAY_MUSIC: u8 = 1 << 5;

/// Launched mode that never passes back through the station.
pub const LEGACY_MODE_POWERED_LAUNCH: u8 = 3;

// Legacy lifecycle bits that survive the import.
pub const LEGACY_LIFECYCLE_TEST_IN_PROGRESS: u32 = 1 << 2;
pub const LEGACY_LIFECYCLE_TESTED: u32 = 1 << 1;
pub const LEGACY_LIFECYCLE_CRASHED: u32 = 1 << 10;
pub const LEGACY_LIFECYCLE_EVER_BEEN_OPENED: u32 = 1 << 12;
pub const LEGACY_LIFECYCLE_MUSIC: u32 = 1 << 13;
pub const LEGACY_LIFECYCLE_INDESTRUCTIBLE: u32 = 1 << 14;
pub const LEGACY_LIFECYCLE_INDESTRUCTIBLE_TRACK: u32 = 1 << 15;
pub const LEGACY_LIFECYCLE_ON_RIDE_PHOTO: u32 = 1 << 22;

/// Splits a packed tile coordinate, low byte x.
pub fn unpack_xy(packed: u16) -> Option<(u8, u8)> {
    (packed != LEGACY_XY_NULL).then_some((packed as u8, (packed >> 8) as u8))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyVehicleColour {
    pub body: u8,
    pub trim: u8,
}

/// A legacy ride slot. Colours are legacy palette indices and heights are
/// legacy half-units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyRide {
    pub ride_type: u8,
    pub vehicle_type: u8,
    pub lifecycle_flags: u32,
    pub operating_mode: u8,
    pub colour_scheme: u8,

    // Pre-expansion colours: one triple for the whole ride.
    pub track_primary_colour: u8,
    pub track_secondary_colour: u8,
    pub track_support_colour: u8,
    // Expansion colours: one triple per scheme.
    pub track_colour_main: [u8; 4],
    pub track_colour_additional: [u8; 4],
    pub track_colour_supports: [u8; 4],
    pub vehicle_colours: [LegacyVehicleColour; LEGACY_VEHICLE_COLOURS],
    pub entrance_style: u8,

    /// String id; user strings live in `0x8000..0x9000`.
    pub name: u16,
    pub name_argument_number: u16,

    pub overall_view: u16,
    pub station_starts: [u16; LEGACY_MAX_STATIONS],
    pub station_height: [u8; LEGACY_MAX_STATIONS],
    pub station_length: [u8; LEGACY_MAX_STATIONS],
    pub station_light: [u8; LEGACY_MAX_STATIONS],
    pub entrance: [u16; LEGACY_MAX_STATIONS],
    pub exit: [u16; LEGACY_MAX_STATIONS],
    pub queue_time: [u8; LEGACY_MAX_STATIONS],
    pub num_peeps_in_queue: [u8; LEGACY_MAX_STATIONS],
    /// Legacy sprite slot of the last queued peep, 0xFFFF when none.
    pub last_peep_in_queue: [u16; LEGACY_MAX_STATIONS],
    pub num_stations: u8,

    pub num_trains: u8,
    pub num_cars_per_train: u8,
    pub special_track_elements: u8,
    pub num_sheltered_sections: u8,
    pub sheltered_length: i32,

    pub depart_flags: u8,
    pub min_waiting_time: u8,
    pub max_waiting_time: u8,
    pub operation_option: u8,
    pub music: u8,

    pub build_date: i16,
    pub inspection_interval: u8,
    pub last_inspection: u8,
    pub reliability: u16,
    pub unreliability_factor: u8,
    pub breakdown_reason: u8,

    pub excitement: i16,
    pub intensity: i16,
    pub nausea: i16,
    pub max_speed: i32,
    pub average_speed: i32,
    pub time: [i32; LEGACY_MAX_STATIONS],
    pub length: [i32; LEGACY_MAX_STATIONS],
    pub max_positive_vertical_g: i16,
    pub max_negative_vertical_g: i16,
    pub max_lateral_g: i16,
    pub previous_vertical_g: i16,
    pub previous_lateral_g: i16,
    pub turn_count_default: u16,
    pub turn_count_banked: u16,
    pub turn_count_sloped: u16,
    pub num_drops: u8,
    pub start_drop_height: u8,
    pub highest_drop_height: u8,
    pub num_inversions: u8,
    pub boat_hire_return_direction: u8,
    pub boat_hire_return_position: u16,
    pub data_logging_index: u8,
    pub chairlift_bullwheel_rotation: u16,
    pub chairlift_bullwheel_location: [u16; 2],
    pub chairlift_bullwheel_z: [u8; 2],
    pub cur_test_track_z: u8,
    pub cur_test_track_location: u16,
    pub testing_flags: u32,
    pub current_test_segment: u8,
    pub average_speed_test_timeout: u8,

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

impl LegacyRide {
    pub fn is_null(&self) -> bool {
        self.ride_type == RIDE_TYPE_NULL
    }
}

impl Default for LegacyRide {
    fn default() -> Self {
        Self {
            ride_type: RIDE_TYPE_NULL,
            vehicle_type: 0,
            lifecycle_flags: 0,
            operating_mode: 0,
            colour_scheme: 0,
            track_primary_colour: 0,
            track_secondary_colour: 0,
            track_support_colour: 0,
            track_colour_main: [0; 4],
            track_colour_additional: [0; 4],
            track_colour_supports: [0; 4],
            vehicle_colours: [LegacyVehicleColour::default(); LEGACY_VEHICLE_COLOURS],
            entrance_style: 0,
            name: 0,
            name_argument_number: 0,
            overall_view: LEGACY_XY_NULL,
            station_starts: [LEGACY_XY_NULL; LEGACY_MAX_STATIONS],
            station_height: [0; LEGACY_MAX_STATIONS],
            station_length: [0; LEGACY_MAX_STATIONS],
            station_light: [0; LEGACY_MAX_STATIONS],
            entrance: [LEGACY_XY_NULL; LEGACY_MAX_STATIONS],
            exit: [LEGACY_XY_NULL; LEGACY_MAX_STATIONS],
            queue_time: [0; LEGACY_MAX_STATIONS],
            num_peeps_in_queue: [0; LEGACY_MAX_STATIONS],
            last_peep_in_queue: [0xFFFF; LEGACY_MAX_STATIONS],
            num_stations: 0,
            num_trains: 0,
            num_cars_per_train: 0,
            special_track_elements: 0,
            num_sheltered_sections: 0,
            sheltered_length: 0,
            depart_flags: 0,
            min_waiting_time: 0,
            max_waiting_time: 0,
            operation_option: 0,
            music: 0,
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
            time: [0; LEGACY_MAX_STATIONS],
            length: [0; LEGACY_MAX_STATIONS],
            max_positive_vertical_g: 0,
            max_negative_vertical_g: 0,
            max_lateral_g: 0,
            previous_vertical_g: 0,
            previous_lateral_g: 0,
            turn_count_default: 0,
            turn_count_banked: 0,
            turn_count_sloped: 0,
            num_drops: 0,
            start_drop_height: 0,
            highest_drop_height: 0,
            num_inversions: 0,
            boat_hire_return_direction: 0,
            boat_hire_return_position: 0,
            data_logging_index: 0,
            chairlift_bullwheel_rotation: 0,
            chairlift_bullwheel_location: [0; 2],
            chairlift_bullwheel_z: [0; 2],
            cur_test_track_z: 0,
            cur_test_track_location: 0,
            testing_flags: 0,
            current_test_segment: 0,
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

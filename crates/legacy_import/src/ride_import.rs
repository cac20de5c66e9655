// ---------------------------------------------------------------------------
// Ride transcoding
// ---------------------------------------------------------------------------

use bevy::log::info;
use park::colour::{Colour, TrackColour, VehicleColour};
use park::objects::{LoadedObjects, ObjectType, RideObjectInfo};
use park::rides::{
    DepartFlags, MusicStyle, Ride, RideKind, RideLifecycleFlags, RideMode, RideName, RideStatus,
    Station,
};
use park::user_strings::UserStringTable;
use park::ParkWorld;

use crate::format_version::FormatVersion;
use crate::import_error::ImportError;
use crate::legacy_types::ride::*;
use crate::legacy_types::LegacySave;
use crate::object_mapping::ObjectMappings;
use crate::tables::colours::convert_colour;
use crate::tables::rides::{
    ride_type, LEGACY_RIDE_BALLOON_STALL, LEGACY_RIDE_DODGEMS, LEGACY_RIDE_MERRY_GO_ROUND,
};

/// Every imported ride may run this many trains.
const MAX_TRAINS: u8 = 32;

/// Lift hill speed of every legacy ride.
const LIFT_HILL_SPEED: u8 = 5;

/// Legacy lifecycle bits copied as they are.
const KEPT_LIFECYCLE_FLAGS: [(u32, RideLifecycleFlags); 7] = [
    (LEGACY_LIFECYCLE_ON_RIDE_PHOTO, RideLifecycleFlags::ON_RIDE_PHOTO),
    (LEGACY_LIFECYCLE_INDESTRUCTIBLE, RideLifecycleFlags::INDESTRUCTIBLE),
    (
        LEGACY_LIFECYCLE_INDESTRUCTIBLE_TRACK,
        RideLifecycleFlags::INDESTRUCTIBLE_TRACK,
    ),
    (
        LEGACY_LIFECYCLE_EVER_BEEN_OPENED,
        RideLifecycleFlags::EVER_BEEN_OPENED,
    ),
    (
        LEGACY_LIFECYCLE_TEST_IN_PROGRESS,
        RideLifecycleFlags::TEST_IN_PROGRESS,
    ),
    (LEGACY_LIFECYCLE_CRASHED, RideLifecycleFlags::CRASHED),
    (LEGACY_LIFECYCLE_TESTED, RideLifecycleFlags::TESTED),
];

/// Converts legacy ride slots into destination rides.
pub struct RideTranscoder<'a> {
    version: FormatVersion,
    mappings: &'a ObjectMappings,
    objects: &'a LoadedObjects,
}

impl<'a> RideTranscoder<'a> {
    pub fn new(
        version: FormatVersion,
        mappings: &'a ObjectMappings,
        objects: &'a LoadedObjects,
    ) -> Self {
        Self {
            version,
            mappings,
            objects,
        }
    }

    /// Builds the destination ride for a non-null legacy slot. The ride is
    /// closed, has no vehicles, and its queue heads are left empty until
    /// sprites are imported.
    pub fn transcode(
        &self,
        src: &LegacyRide,
        save: &LegacySave,
        strings: &mut UserStringTable,
    ) -> Result<Ride, ImportError> {
        let info = ride_type(src.ride_type).ok_or(ImportError::UnresolvedObject {
            domain: ObjectType::Ride,
            legacy_type: u16::from(src.ride_type),
        })?;
        let (subtype, object) = self.ride_object(src, info.uses_vehicles)?;
        let kind = info.kind;

        let mut ride = Ride {
            kind,
            subtype,
            name: ride_name(src, kind, save, strings),
            status: RideStatus::Closed,
            lifecycle_flags: self.lifecycle_flags(src.lifecycle_flags),
            depart_flags: DepartFlags::from_bits_retain(src.depart_flags),
            overall_view: unpack_xy(src.overall_view),
            stations: std::array::from_fn(|i| station(src, i)),
            num_stations: src.num_stations,
            ..Ride::default()
        };

        // Trains
        ride.num_vehicles = src.num_trains;
        ride.proposed_num_vehicles = src.num_trains;
        ride.num_cars_per_train = src.num_cars_per_train.saturating_add(object.zero_cars);
        ride.proposed_num_cars_per_train = ride.num_cars_per_train;
        ride.max_trains = MAX_TRAINS;
        ride.min_max_cars_per_train = (object.min_cars_in_train << 4) | object.max_cars_in_train;
        ride.special_track_elements = src.special_track_elements;
        ride.num_sheltered_sections = src.num_sheltered_sections;
        ride.sheltered_length = src.sheltered_length;

        // Operation
        ride.min_waiting_time = src.min_waiting_time;
        ride.max_waiting_time = src.max_waiting_time;
        ride.operation_option = src.operation_option;
        ride.num_circuits = 1;
        ride.lift_hill_speed = LIFT_HILL_SPEED;
        ride.mode = if src.operating_mode == LEGACY_MODE_POWERED_LAUNCH {
            RideMode::POWERED_LAUNCH
        } else {
            RideMode(src.operating_mode)
        };
        if self.version.has_music_settings() {
            ride.music = MusicStyle::from_u8(src.music);
        } else {
            ride.music = kind.default_music();
            let plays_music = src.ride_type == LEGACY_RIDE_MERRY_GO_ROUND
                || src.ride_type == LEGACY_RIDE_DODGEMS;
            if plays_music && src.depart_flags & LEGACY_DEPART_PLAY_MUSIC != 0 {
                ride.depart_flags =
                    DepartFlags::from_bits_retain(src.depart_flags & !LEGACY_DEPART_PLAY_MUSIC);
                ride.lifecycle_flags |= RideLifecycleFlags::MUSIC;
            }
        }
        ride.music_tune = None;

        self.apply_colours(src, &mut ride);
        copy_maintenance(src, &mut ride);
        copy_measurements(src, &mut ride);
        copy_finance(src, &mut ride);
        Ok(ride)
    }

    /// Slot and train layout of the ride's object.
    fn ride_object(
        &self,
        src: &LegacyRide,
        uses_vehicles: bool,
    ) -> Result<(u8, RideObjectInfo), ImportError> {
        let (map, code) = if uses_vehicles {
            (&self.mappings.vehicle_type_map, src.vehicle_type)
        } else {
            (&self.mappings.ride_type_map, src.ride_type)
        };
        let unresolved = ImportError::UnresolvedObject {
            domain: ObjectType::Ride,
            legacy_type: u16::from(code),
        };
        let Some(slot) = map.resolve(code as usize) else {
            return Err(unresolved);
        };
        let object = self.objects.ride(slot as usize).ok_or(unresolved)?;
        Ok((slot, object.ride_info.unwrap_or_default()))
    }

    fn lifecycle_flags(&self, legacy: u32) -> RideLifecycleFlags {
        let mut flags = RideLifecycleFlags::empty();
        for (bit, flag) in KEPT_LIFECYCLE_FLAGS {
            if legacy & bit != 0 {
                flags |= flag;
            }
        }
        if self.version.has_music_settings() && legacy & LEGACY_LIFECYCLE_MUSIC != 0 {
            flags |= RideLifecycleFlags::MUSIC;
        }
        flags
    }

    fn apply_colours(&self, src: &LegacyRide, ride: &mut Ride) {
        ride.colour_scheme_type = src.colour_scheme;
        if self.version.has_multiple_track_colours() {
            ride.track_colours = std::array::from_fn(|i| TrackColour {
                main: convert_colour(src.track_colour_main[i]),
                additional: convert_colour(src.track_colour_additional[i]),
                supports: convert_colour(src.track_colour_supports[i]),
            });
        } else {
            let mut scheme = TrackColour {
                main: convert_colour(src.track_primary_colour),
                additional: convert_colour(src.track_secondary_colour),
                supports: convert_colour(src.track_support_colour),
            };
            if src.ride_type == LEGACY_RIDE_BALLOON_STALL {
                scheme.main = Colour::LIGHT_BLUE;
            }
            ride.track_colours = [scheme; 4];
        }
        if self.version.has_entrance_styles() {
            ride.entrance_style = src.entrance_style;
        }

        if !self.version.has_custom_merry_go_round_colours()
            && ride.kind == RideKind::MERRY_GO_ROUND
        {
            ride.vehicle_colours[0] = VehicleColour {
                body: Colour::YELLOW,
                trim: Colour::BRIGHT_RED,
            };
        } else {
            for (dst, legacy) in ride.vehicle_colours.iter_mut().zip(&src.vehicle_colours) {
                *dst = VehicleColour {
                    body: convert_colour(legacy.body),
                    trim: convert_colour(legacy.trim),
                };
            }
        }
    }
}

/// Custom name when the legacy name is a non-empty user string, otherwise
/// the ride type's name and number.
fn ride_name(
    src: &LegacyRide,
    kind: RideKind,
    save: &LegacySave,
    strings: &mut UserStringTable,
) -> RideName {
    save.user_string(src.name)
        .and_then(|text| strings.allocate(text))
        .map(RideName::Custom)
        .unwrap_or(RideName::Default {
            ride_kind: kind,
            number: src.name_argument_number,
        })
}

fn station(src: &LegacyRide, i: usize) -> Station {
    Station {
        start: unpack_xy(src.station_starts[i]),
        height: src.station_height[i] / 2,
        length: src.station_length[i],
        depart: src.station_light[i],
        train_at_station: None,
        entrance: unpack_xy(src.entrance[i]),
        exit: unpack_xy(src.exit[i]),
        queue_time: src.queue_time[i],
        queue_length: u16::from(src.num_peeps_in_queue[i]),
        last_peep_in_queue: None,
        segment_time: src.time[i],
        segment_length: src.length[i],
    }
}

fn copy_maintenance(src: &LegacyRide, ride: &mut Ride) {
    ride.build_date = src.build_date;
    ride.inspection_interval = src.inspection_interval;
    ride.last_inspection = src.last_inspection;
    ride.reliability = src.reliability;
    ride.unreliability_factor = src.unreliability_factor;
    ride.breakdown_reason = src.breakdown_reason;
}

fn copy_measurements(src: &LegacyRide, ride: &mut Ride) {
    ride.excitement = src.excitement;
    ride.intensity = src.intensity;
    ride.nausea = src.nausea;
    ride.max_speed = src.max_speed;
    ride.average_speed = src.average_speed;
    ride.max_positive_vertical_g = src.max_positive_vertical_g;
    ride.max_negative_vertical_g = src.max_negative_vertical_g;
    ride.max_lateral_g = src.max_lateral_g;
    ride.previous_vertical_g = src.previous_vertical_g;
    ride.previous_lateral_g = src.previous_lateral_g;
    ride.turn_count_default = src.turn_count_default;
    ride.turn_count_banked = src.turn_count_banked;
    ride.turn_count_sloped = src.turn_count_sloped;
    ride.drops = src.num_drops;
    ride.start_drop_height = src.start_drop_height / 2;
    ride.highest_drop_height = src.highest_drop_height / 2;
    ride.inversions = src.num_inversions;
    ride.boat_hire_return_direction = src.boat_hire_return_direction;
    ride.boat_hire_return_position = src.boat_hire_return_position;
    ride.measurement_index = src.data_logging_index;
    ride.chairlift_bullwheel_rotation = src.chairlift_bullwheel_rotation;
    for i in 0..2 {
        ride.chairlift_bullwheel_location[i] =
            unpack_xy(src.chairlift_bullwheel_location[i]).unwrap_or((0xFF, 0xFF));
        ride.chairlift_bullwheel_z[i] = src.chairlift_bullwheel_z[i] / 2;
    }
    ride.cur_test_track_z = src.cur_test_track_z / 2;
    ride.cur_test_track_location =
        unpack_xy(src.cur_test_track_location).unwrap_or((0xFF, 0xFF));
    ride.testing_flags = src.testing_flags;
    ride.current_test_segment = src.current_test_segment;
    ride.current_test_station = None;
    ride.average_speed_test_timeout = src.average_speed_test_timeout;
}

fn copy_finance(src: &LegacyRide, ride: &mut Ride) {
    ride.upkeep_cost = src.upkeep_cost;
    ride.price = src.price;
    ride.income_per_hour = src.income_per_hour;
    ride.total_customers = src.total_customers;
    ride.profit = src.profit;
    ride.total_profit = src.total_profit;
    ride.value = src.value;
    ride.satisfaction = src.satisfaction;
    ride.satisfaction_time_out = src.satisfaction_time_out;
    ride.satisfaction_next = src.satisfaction_next;
    ride.popularity = src.popularity;
    ride.popularity_next = src.popularity_next;
    ride.popularity_time_out = src.popularity_time_out;
    ride.num_riders = src.num_riders;
}

/// Transcodes every non-null legacy ride into the same slot of
/// `world.rides`. Returns the number of rides imported.
pub fn import_rides(
    save: &LegacySave,
    version: FormatVersion,
    mappings: &ObjectMappings,
    world: &mut ParkWorld,
) -> Result<usize, ImportError> {
    let transcoder = RideTranscoder::new(version, mappings, &world.objects);
    let mut count = 0;
    for (index, src) in save.rides.iter().enumerate() {
        if src.is_null() {
            continue;
        }
        let ride = transcoder.transcode(src, save, &mut world.user_strings)?;
        if world.rides.set(index, ride) {
            count += 1;
        }
    }
    info!("Imported {count} rides");
    Ok(count)
}

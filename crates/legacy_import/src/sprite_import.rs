// ---------------------------------------------------------------------------
// Sprite transcoding: peeps, litter and misc sprites
// ---------------------------------------------------------------------------

use bevy::log::{info, warn};
use park::colour::Colour;
use park::sprites::{
    Litter, MiscKind, MiscSprite, Peep, PeepAppearance, PeepState, PeepType, Sprite, SpriteIndex,
    SpriteStore,
};
use park::tile_map::TileMap;
use park::ParkWorld;

use crate::format_version::FormatVersion;
use crate::import_error::{ImportDiagnostic, UnsupportedEntity};
use crate::legacy_types::sprite::*;
use crate::legacy_types::{LegacyLitter, LegacyMisc, LegacyPeep, LegacySave, LegacySprite};
use crate::tables::colours::convert_colour;

/// Legacy sprite slot to destination sprite index, filled while sprites are
/// allocated.
#[derive(Debug, Clone, Default)]
pub struct SpriteIndexRemap {
    slots: Vec<Option<SpriteIndex>>,
}

impl SpriteIndexRemap {
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn insert(&mut self, legacy: u16, index: SpriteIndex) {
        if let Some(slot) = self.slots.get_mut(legacy as usize) {
            *slot = Some(index);
        }
    }

    /// Destination index of a legacy reference. The null reference and
    /// sprites that were not imported give `None`.
    pub fn get(&self, legacy: u16) -> Option<SpriteIndex> {
        if legacy == LEGACY_SPRITE_INDEX_NULL {
            return None;
        }
        self.slots.get(legacy as usize).copied().flatten()
    }
}

/// What [`import_sprites`] did.
#[derive(Debug, Clone, Default)]
pub struct SpriteImport {
    pub remap: SpriteIndexRemap,
    pub peeps: usize,
    pub litter: usize,
    pub misc: usize,
    /// Peeps coerced to `Falling` that still need a place on the map.
    pub displaced_peeps: Vec<SpriteIndex>,
}

/// Converts legacy sprites into destination sprites.
pub struct SpriteTranscoder {
    version: FormatVersion,
}

impl SpriteTranscoder {
    pub fn new(version: FormatVersion) -> Self {
        Self { version }
    }

    /// Builds the destination peep. Returns the coercion applied, if any;
    /// coerced peeps are left `Falling`.
    pub fn transcode_peep(
        &self,
        src: &LegacyPeep,
        legacy_sprite: u16,
    ) -> (Peep, Option<UnsupportedEntity>) {
        let (state, coerced) = match decode_peep_state(src.state) {
            Some(state) if state.occupies_ride() => (
                PeepState::Falling,
                Some(UnsupportedEntity::PeepOnRide { legacy_sprite }),
            ),
            Some(state) => (state, None),
            None => (
                PeepState::Falling,
                Some(UnsupportedEntity::UnknownPeepState {
                    legacy_sprite,
                    state: src.state,
                }),
            ),
        };

        let balloon_colour = if self.version.balloons_always_blue() {
            Colour::LIGHT_BLUE
        } else {
            convert_colour(src.balloon_colour)
        };
        let appearance = PeepAppearance {
            sprite_type: src.sprite_type,
            action: src.action,
            special_sprite: src.special_sprite,
            next_action_sprite_type: src.next_action_sprite_type,
            action_sprite_image_offset: src.action_sprite_image_offset,
            no_action_frame_no: src.no_action_frame_no,
            action_sprite_type: src.action_sprite_type,
            action_frame: src.action_frame,
            tshirt_colour: convert_colour(src.tshirt_colour),
            trousers_colour: convert_colour(src.trousers_colour),
            umbrella_colour: convert_colour(src.umbrella_colour),
            hat_colour: convert_colour(src.hat_colour),
            balloon_colour,
        };

        let peep = Peep {
            position: src.position,
            appearance,
            name_string_idx: src.name_string_idx,
            id: src.id,
            peep_type: if src.peep_type == LEGACY_PEEP_TYPE_STAFF {
                PeepType::Staff
            } else {
                PeepType::Guest
            },
            state,
            outside_of_park: src.outside_of_park,

            destination_x: src.destination_x,
            destination_y: src.destination_y,
            destination_tolerance: src.destination_tolerance,

            energy: src.energy,
            energy_growth_rate: src.energy_growth_rate,
            happiness: src.happiness,
            happiness_growth_rate: src.happiness_growth_rate,
            nausea: src.nausea,
            nausea_growth_rate: src.nausea_growth_rate,
            hunger: src.hunger,
            thirst: src.thirst,
            toilet: src.toilet,
            litter_count: src.litter_count,
            disgusting_count: src.disgusting_count,
            intensity: src.intensity,
            nausea_tolerance: src.nausea_tolerance,

            current_ride: src.current_ride,
            current_ride_station: src.current_ride_station,
            current_train: src.current_train,
            current_car: src.current_car,
            current_seat: src.current_seat,
            time_on_ride: src.time_on_ride,
            days_in_queue: src.days_in_queue,
            previous_ride: None,
            interaction_ride_index: None,
            guest_heading_to_ride_id: src.guest_heading_to_ride_id,
            peep_is_lost_countdown: src.peep_is_lost_countdown,
            // Resolved once every peep has an index.
            next_in_queue: None,

            cash_in_pocket: src.cash_in_pocket,
            cash_spent: src.cash_spent,
            time_in_park: src.time_in_park,
            no_of_rides: src.no_of_rides,
            no_of_drinks: src.no_of_drinks,
            no_of_food: src.no_of_food,
            no_of_souvenirs: src.no_of_souvenirs,
            paid_to_enter: src.paid_to_enter,
            paid_on_rides: src.paid_on_rides,
            paid_on_drink: src.paid_on_drink,
            paid_on_food: src.paid_on_food,
            paid_on_souvenirs: src.paid_on_souvenirs,
            voucher_arguments: src.voucher_arguments,
            voucher_type: src.voucher_type,

            rides_been_on: src.rides_been_on,
            ride_types_been_on: src.ride_types_been_on,
            photo1_ride_ref: src.photo1_ride_ref,
            thoughts: src.thoughts,
            favourite_ride: src.favourite_ride,
            favourite_ride_rating: src.favourite_ride_rating,
            item_standard_flags: src.item_standard_flags,
        };
        (peep, coerced)
    }

    pub fn transcode_litter(&self, src: &LegacyLitter) -> Litter {
        Litter {
            position: src.position,
            litter_type: src.litter_type,
        }
    }

    /// `None` for misc types the destination has no sprite for.
    pub fn transcode_misc(&self, src: &LegacyMisc) -> Option<MiscSprite> {
        let kind = match src.misc_type {
            MISC_STEAM_PARTICLE => MiscKind::SteamParticle { frame: src.frame },
            MISC_MONEY_EFFECT => MiscKind::MoneyEffect {
                move_delay: src.move_delay,
                num_movements: src.num_movements,
                value: src.value,
                offset_x: src.offset_x,
                wiggle: src.wiggle,
            },
            MISC_CRASHED_VEHICLE_PARTICLE => MiscKind::CrashedVehicleParticle,
            MISC_EXPLOSION_CLOUD => MiscKind::ExplosionCloud,
            MISC_CRASH_SPLASH => MiscKind::CrashSplash,
            MISC_EXPLOSION_FLARE => MiscKind::ExplosionFlare,
            MISC_JUMPING_FOUNTAIN_WATER => MiscKind::JumpingFountainWater {
                fountain_flags: src.fountain_flags,
                iteration: src.iteration,
            },
            MISC_BALLOON => MiscKind::Balloon {
                colour: if self.version.balloons_always_blue() {
                    Colour::LIGHT_BLUE
                } else {
                    convert_colour(src.colour)
                },
            },
            MISC_DUCK => MiscKind::Duck {
                frame: src.frame,
                state: src.duck_state,
            },
            MISC_JUMPING_FOUNTAIN_SNOW => MiscKind::JumpingFountainSnow {
                fountain_flags: src.fountain_flags,
                iteration: src.iteration,
            },
            _ => return None,
        };
        Some(MiscSprite {
            position: src.position,
            flags: src.flags,
            kind,
        })
    }
}

/// Allocates peeps, then litter, then misc sprites, re-links the peep queues
/// and ride queue heads through the index remap, clears every station queue
/// length and recounts guests in the park.
pub fn import_sprites(
    save: &LegacySave,
    version: FormatVersion,
    keep_litter: bool,
    world: &mut ParkWorld,
    diagnostics: &mut Vec<ImportDiagnostic>,
) -> SpriteImport {
    let transcoder = SpriteTranscoder::new(version);
    let store = &mut world.sprites;
    let mut result = SpriteImport {
        remap: SpriteIndexRemap::with_len(save.sprites.len()),
        ..SpriteImport::default()
    };

    // -- Peeps --
    let mut queue_links = Vec::new();
    for (slot, sprite) in save.sprites.iter().enumerate() {
        let LegacySprite::Peep(src) = sprite else {
            continue;
        };
        if !src.is_on_map() && src.state != LEGACY_PEEP_STATE_ON_RIDE {
            continue;
        }
        let legacy_sprite = slot as u16;
        let (peep, coerced) = transcoder.transcode_peep(src, legacy_sprite);
        let Some(index) = store.allocate(Sprite::Peep(Box::new(peep))) else {
            warn!("Sprite pool full, dropping peep {legacy_sprite}");
            continue;
        };
        result.remap.insert(legacy_sprite, index);
        result.peeps += 1;
        queue_links.push((index, src.next_in_queue));
        if let Some(entity) = coerced {
            warn!("Coerced {entity}");
            diagnostics.push(ImportDiagnostic::UnsupportedEntity(entity));
            result.displaced_peeps.push(index);
        }
    }

    // -- Litter --
    if keep_litter {
        for (slot, sprite) in save.sprites.iter().enumerate() {
            let LegacySprite::Litter(src) = sprite else {
                continue;
            };
            let litter = transcoder.transcode_litter(src);
            if let Some(index) = store.allocate(Sprite::Litter(litter)) {
                result.remap.insert(slot as u16, index);
                result.litter += 1;
            }
        }
    }

    // -- Misc --
    for (slot, sprite) in save.sprites.iter().enumerate() {
        let LegacySprite::Misc(src) = sprite else {
            continue;
        };
        let legacy_sprite = slot as u16;
        let Some(misc) = transcoder.transcode_misc(src) else {
            let entity = UnsupportedEntity::UnknownMiscSprite {
                legacy_sprite,
                misc_type: src.misc_type,
            };
            warn!("Skipped {entity}");
            diagnostics.push(ImportDiagnostic::UnsupportedEntity(entity));
            continue;
        };
        if let Some(index) = store.allocate(Sprite::Misc(misc)) {
            result.remap.insert(legacy_sprite, index);
            result.misc += 1;
        }
    }

    // -- Queue links --
    for (index, legacy_next) in queue_links {
        let next = result
            .remap
            .get(legacy_next)
            .filter(|next| store.peep(*next).is_some());
        if let Some(peep) = store.peep_mut(index) {
            peep.next_in_queue = next;
        }
    }
    for (ride_index, src) in save.rides.iter().enumerate() {
        let Some(ride) = world.rides.get_mut(ride_index) else {
            continue;
        };
        for (station, legacy_last) in ride.stations.iter_mut().zip(src.last_peep_in_queue) {
            station.last_peep_in_queue = result
                .remap
                .get(legacy_last)
                .filter(|last| store.peep(*last).is_some());
        }
    }
    for (_, ride) in world.rides.iter_mut() {
        for station in &mut ride.stations {
            station.queue_length = 0;
        }
    }

    count_guests_in_park(&mut world.sprites);
    info!(
        "Imported {} peeps, {} litter, {} misc sprites",
        result.peeps, result.litter, result.misc
    );
    result
}

/// Recomputes `guests_in_park` from the peeps in the store.
pub fn count_guests_in_park(store: &mut SpriteStore) {
    store.guests_in_park = store.peeps().filter(|(_, p)| p.is_guest_in_park()).count() as u32;
}

/// Moves every displaced peep onto the path nearest its ride station, its
/// own tile or the first park entrance, in that order of preference. Peeps
/// with no path in reach keep falling where they are. Returns how many were
/// placed.
pub fn place_displaced_peeps(world: &mut ParkWorld, displaced: &[SpriteIndex]) -> usize {
    let mut placed = 0;
    for &index in displaced {
        let Some(peep) = world.sprites.peep(index) else {
            continue;
        };
        let origin = placement_origin(world, peep);
        let Some(peep) = world.sprites.peep_mut(index) else {
            continue;
        };
        if peep.autoposition(&world.tiles, origin) {
            placed += 1;
        }
    }
    if placed < displaced.len() {
        warn!(
            "{} displaced peeps found no path nearby",
            displaced.len() - placed
        );
    }
    placed
}

fn placement_origin(world: &ParkWorld, peep: &Peep) -> (usize, usize) {
    let station_start = world
        .rides
        .get(peep.current_ride as usize)
        .and_then(|ride| ride.stations.get(peep.current_ride_station as usize))
        .and_then(|station| station.start);
    if let Some((x, y)) = station_start {
        return (x as usize, y as usize);
    }
    let (tx, ty) = TileMap::world_to_tile(peep.position.x.into(), peep.position.y.into());
    if tx >= 0 && ty >= 0 && world.tiles.in_bounds(tx as usize, ty as usize) {
        return (tx as usize, ty as usize);
    }
    world
        .tiles
        .park_entrances
        .first()
        .map(|entrance| {
            let (ex, ey) = TileMap::world_to_tile(entrance.x, entrance.y);
            (ex.max(0) as usize, ey.max(0) as usize)
        })
        .unwrap_or((0, 0))
}

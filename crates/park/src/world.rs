use bevy::prelude::*;

use crate::banners::BannerTable;
use crate::objects::LoadedObjects;
use crate::park_state::{Climate, Finance, ParkState, ScenarioInfo};
use crate::research::ResearchQueue;
use crate::rides::RideTable;
use crate::sprites::SpriteStore;
use crate::tile_map::TileMap;
use crate::user_strings::UserStringTable;

/// Everything a park consists of. Each part is also a Bevy resource so a
/// finished world can be split into the ECS with [`ParkWorld::insert_into`].
#[derive(Debug, Clone, Default)]
pub struct ParkWorld {
    pub tiles: TileMap,
    pub rides: RideTable,
    pub sprites: SpriteStore,
    pub banners: BannerTable,
    pub research: ResearchQueue,
    pub finance: Finance,
    pub climate: Climate,
    pub scenario: ScenarioInfo,
    pub park: ParkState,
    pub user_strings: UserStringTable,
    pub objects: LoadedObjects,
}

impl ParkWorld {
    /// Fresh world with an empty map of `map_size` playable tiles.
    pub fn new(map_size: u16) -> Self {
        Self {
            tiles: TileMap::new(map_size),
            ..Self::default()
        }
    }

    /// Moves every part into `world` as a resource, replacing what was there.
    pub fn insert_into(self, world: &mut World) {
        world.insert_resource(self.tiles);
        world.insert_resource(self.rides);
        world.insert_resource(self.sprites);
        world.insert_resource(self.banners);
        world.insert_resource(self.research);
        world.insert_resource(self.finance);
        world.insert_resource(self.climate);
        world.insert_resource(self.scenario);
        world.insert_resource(self.park);
        world.insert_resource(self.user_strings);
        world.insert_resource(self.objects);
    }
}

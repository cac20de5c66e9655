/// Side length, in tiles, of the destination tile grid. Maps smaller than
/// this are padded with blank surface tiles.
pub const MAP_SIZE_TECHNICAL: usize = 256;

/// Default playable map size when a save does not specify one.
pub const DEFAULT_MAP_SIZE: u16 = 128;

/// World units per tile along x/y.
pub const COORDS_XY_STEP: i32 = 32;

/// World units per height step along z.
pub const COORDS_Z_STEP: i32 = 8;

/// Sentinel x coordinate marking a sprite or entrance as "not on the map".
pub const LOCATION_NULL: i16 = i16::MIN;

pub const MAX_RIDES: usize = 255;
pub const MAX_STATIONS: usize = 4;
pub const MAX_VEHICLE_COLOURS: usize = 32;
pub const MAX_SPRITES: usize = 10_000;
pub const MAX_BANNERS: usize = 250;
pub const MAX_USER_STRINGS: usize = 1024;
pub const USER_STRING_MAX_LENGTH: usize = 32;
pub const MAX_PARK_ENTRANCES: usize = 4;
pub const MAX_PEEP_SPAWNS: usize = 2;
pub const MAX_MAP_ANIMATIONS: usize = 2000;
pub const MAX_AWARDS: usize = 4;
pub const MAX_NEWS_ITEMS: usize = 61;
pub const PEEP_MAX_THOUGHTS: usize = 5;

// Park and finance history lengths.
pub const FINANCE_HISTORY_LENGTH: usize = 128;
pub const PARK_HISTORY_LENGTH: usize = 32;
pub const EXPENDITURE_WEEKS: usize = 14;
pub const EXPENDITURE_TYPES: usize = 16;
pub const MAX_MARKETING_CAMPAIGNS: usize = 6;

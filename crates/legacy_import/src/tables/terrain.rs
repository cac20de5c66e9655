// Destination surface styles.
pub const TERRAIN_GRASS: u8 = 0;
pub const TERRAIN_SAND: u8 = 1;
pub const TERRAIN_DIRT: u8 = 2;
pub const TERRAIN_ROCK: u8 = 3;
pub const TERRAIN_MARTIAN: u8 = 4;
pub const TERRAIN_CHECKERBOARD: u8 = 5;
pub const TERRAIN_GRASS_CLUMPS: u8 = 6;
pub const TERRAIN_ICE: u8 = 7;
pub const TERRAIN_GRID_RED: u8 = 8;
pub const TERRAIN_GRID_YELLOW: u8 = 9;
pub const TERRAIN_GRID_BLUE: u8 = 10;
pub const TERRAIN_GRID_GREEN: u8 = 11;

// Destination edge styles.
pub const TERRAIN_EDGE_ROCK: u8 = 0;
pub const TERRAIN_EDGE_WOOD_RED: u8 = 1;
pub const TERRAIN_EDGE_WOOD_BLACK: u8 = 2;
pub const TERRAIN_EDGE_ICE: u8 = 3;

// Roof styles have no destination counterpart and fall back to plain ground.
const TERRAIN: [u8; 16] = [
    TERRAIN_GRASS,
    TERRAIN_SAND,
    TERRAIN_DIRT,
    TERRAIN_ROCK,
    TERRAIN_MARTIAN,
    TERRAIN_CHECKERBOARD,
    TERRAIN_GRASS_CLUMPS,
    TERRAIN_DIRT, // brown roof
    TERRAIN_ICE,
    TERRAIN_DIRT, // log roof
    TERRAIN_DIRT, // iron roof
    TERRAIN_ROCK, // grey roof
    TERRAIN_GRID_RED,
    TERRAIN_GRID_YELLOW,
    TERRAIN_GRID_BLUE,
    TERRAIN_GRID_GREEN,
];

const TERRAIN_EDGE: [u8; 16] = [
    TERRAIN_EDGE_ROCK,
    TERRAIN_EDGE_ROCK, // brick
    TERRAIN_EDGE_ROCK, // iron
    TERRAIN_EDGE_WOOD_RED,
    TERRAIN_EDGE_ROCK, // grey
    TERRAIN_EDGE_ROCK, // yellow
    TERRAIN_EDGE_WOOD_BLACK,
    TERRAIN_EDGE_ROCK, // red
    TERRAIN_EDGE_ICE,
    TERRAIN_EDGE_ROCK, // purple
    TERRAIN_EDGE_ROCK, // green
    TERRAIN_EDGE_ROCK, // brown stone
    TERRAIN_EDGE_ROCK, // grey stone
    TERRAIN_EDGE_ROCK, // skyscraper A
    TERRAIN_EDGE_ROCK, // skyscraper B
    TERRAIN_EDGE_ROCK,
];

pub fn convert_terrain(legacy: u8) -> u8 {
    TERRAIN.get(legacy as usize).copied().unwrap_or(TERRAIN_GRASS)
}

pub fn convert_terrain_edge(legacy: u8) -> u8 {
    TERRAIN_EDGE
        .get(legacy as usize)
        .copied()
        .unwrap_or(TERRAIN_EDGE_ROCK)
}

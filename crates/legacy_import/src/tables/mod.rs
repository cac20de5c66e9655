//! Fixed lookup tables from legacy codes to destination values.

pub mod colours;
pub mod paths;
pub mod rides;
pub mod scenery;
pub mod terrain;
pub mod walls;

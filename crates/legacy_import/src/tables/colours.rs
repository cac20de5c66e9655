use bevy::log::warn;
use park::colour::Colour;

/// Legacy palette index to destination palette index.
const COLOUR_CONVERSION: [Colour; 32] = [
    Colour::BLACK,
    Colour::GREY,
    Colour::WHITE,
    Colour::LIGHT_PURPLE,
    Colour::BRIGHT_PURPLE,
    Colour::DARK_BLUE,
    Colour::LIGHT_BLUE,
    Colour::TEAL,
    Colour::SATURATED_GREEN,
    Colour::DARK_GREEN,
    Colour::MOSS_GREEN,
    Colour::BRIGHT_GREEN,
    Colour::OLIVE_GREEN,
    Colour::DARK_OLIVE_GREEN,
    Colour::YELLOW,
    Colour::DARK_YELLOW,
    Colour::LIGHT_ORANGE,
    Colour::DARK_ORANGE,
    Colour::LIGHT_BROWN,
    Colour::SATURATED_BROWN,
    Colour::DARK_BROWN,
    Colour::SALMON_PINK,
    Colour::BORDEAUX_RED,
    Colour::SATURATED_RED,
    Colour::BRIGHT_RED,
    Colour::BRIGHT_PINK,
    Colour::LIGHT_PINK,
    Colour::DARK_PINK,
    Colour::DARK_PURPLE,
    Colour::AQUAMARINE,
    Colour::BRIGHT_YELLOW,
    Colour::ICY_BLUE,
];

/// Converts a 5-bit legacy colour. Out of range values become black.
pub fn convert_colour(legacy: u8) -> Colour {
    match COLOUR_CONVERSION.get(legacy as usize) {
        Some(colour) => *colour,
        None => {
            warn!("Unsupported legacy colour {legacy}, using black");
            Colour::BLACK
        }
    }
}

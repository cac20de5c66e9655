use park::objects::ObjectIdentifier;

const fn id(name: &'static str) -> ObjectIdentifier {
    ObjectIdentifier::from_static(name)
}

/// Path code drawn under park entrances that carry no explicit path type.
pub const PATH_TARMAC_GREY: u8 = 4;

/// Largest legacy path code, `(type_nibble << 2) | colour` over six nibbles.
pub const PATH_CODE_COUNT: usize = 24;

pub const PATH_ADDITION_NONE: u8 = 0;
pub const PATH_ADDITION_LAMP_1: u8 = 1;
pub const PATH_ADDITION_LAMP_2: u8 = 2;
pub const PATH_ADDITION_BIN: u8 = 3;
pub const PATH_ADDITION_BENCH: u8 = 4;
pub const PATH_ADDITION_JUMPING_FOUNTAIN: u8 = 5;
pub const PATH_ADDITION_LAMP_3: u8 = 6;
pub const PATH_ADDITION_LAMP_4: u8 = 7;
pub const PATH_ADDITION_BROKEN_LAMP_1: u8 = 8;
pub const PATH_ADDITION_BROKEN_LAMP_2: u8 = 9;
pub const PATH_ADDITION_BROKEN_BIN: u8 = 10;
pub const PATH_ADDITION_BROKEN_LAMP_3: u8 = 11;
pub const PATH_ADDITION_BROKEN_LAMP_4: u8 = 12;
pub const PATH_ADDITION_JUMPING_SNOW: u8 = 13;

pub const PATH_ADDITION_COUNT: usize = 16;

/// Paths every imported park has available, in slot order.
pub const DEFAULT_PATHS: [ObjectIdentifier; 8] = [
    id("TARMAC"),
    id("TARMACG"),
    id("TARMACB"),
    id("PATHCRZY"),
    id("PATHSPCE"),
    id("PATHDIRT"),
    id("PATHASH"),
    id("ROAD"),
];

const PATH_OBJECTS: [ObjectIdentifier; PATH_CODE_COUNT] = [
    id("TARMAC"),   // blue queue
    id("PATHSPCE"), // red queue
    id("PATHDIRT"), // yellow queue
    id("TARMACG"),  // green queue
    id("TARMAC"),   // grey tarmac
    id("PATHSPCE"), // red tarmac
    id("TARMACB"),  // brown tarmac
    id("TARMACG"),  // green tarmac
    id("PATHDIRT"), // red dirt
    id("PATHASH"),  // black dirt
    id("TARMAC"),
    id("TARMAC"),
    id("PATHCRZY"), // crazy paving
    id("PATHCRZY"),
    id("PATHCRZY"),
    id("PATHCRZY"),
    id("ROAD"),
    id("ROAD"),
    id("ROAD"),
    id("ROAD"),
    id("PATHCRZY"), // tiles
    id("PATHCRZY"),
    id("PATHCRZY"),
    id("PATHCRZY"),
];

pub fn path_object(code: u8) -> Option<ObjectIdentifier> {
    PATH_OBJECTS.get(code as usize).copied()
}

/// Codes 0..=3 are the four coloured queue lines.
pub fn path_is_queue(code: u8) -> bool {
    code < 4
}

/// Collapses broken variants onto their intact addition. Intact codes map
/// to themselves, so applying this twice changes nothing.
pub fn normalise_path_addition(code: u8) -> u8 {
    match code {
        PATH_ADDITION_BROKEN_LAMP_1 => PATH_ADDITION_LAMP_1,
        PATH_ADDITION_BROKEN_LAMP_2 => PATH_ADDITION_LAMP_2,
        PATH_ADDITION_BROKEN_BIN => PATH_ADDITION_BIN,
        PATH_ADDITION_BROKEN_LAMP_3 => PATH_ADDITION_LAMP_3,
        PATH_ADDITION_BROKEN_LAMP_4 => PATH_ADDITION_LAMP_4,
        other => other,
    }
}

pub fn path_addition_object(code: u8) -> Option<ObjectIdentifier> {
    let name = match normalise_path_addition(code) {
        PATH_ADDITION_LAMP_1 => "LAMP1",
        PATH_ADDITION_LAMP_2 => "LAMP2",
        PATH_ADDITION_BIN => "LITTER1",
        PATH_ADDITION_BENCH => "BENCH1",
        PATH_ADDITION_JUMPING_FOUNTAIN => "JUMPFNT1",
        PATH_ADDITION_LAMP_3 => "LAMP3",
        PATH_ADDITION_LAMP_4 => "LAMP4",
        PATH_ADDITION_JUMPING_SNOW => "JUMPSNW1",
        _ => return None,
    };
    ObjectIdentifier::new(name)
}

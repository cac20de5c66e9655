use park::colour::Colour;
use park::objects::ObjectIdentifier;

const fn id(name: &'static str) -> ObjectIdentifier {
    ObjectIdentifier::from_static(name)
}

pub const WALL_CODE_COUNT: usize = 64;

const WALL_OBJECTS: [ObjectIdentifier; WALL_CODE_COUNT] = [
    id("WMF"),      // mesh fence
    id("WMFG"),     // mesh fence with gate
    id("WRW"),      // roman
    id("WEW"),      // egyptian
    id("WHG"),      // hedge
    id("WHGG"),     // hedge with gate
    id("WCW1"),     // blue playing cards
    id("WCW2"),     // red playing cards
    id("WSW"),      // white railing
    id("WSWG"),     // white railing with gate
    id("WMW"),      // martian
    id("WALLCB16"), // tall castle wall with grey gate
    id("WFW1"),     // creepy gate
    id("WFWG"),
    id("WPW1"),     // wooden post fence
    id("WPW2"),     // red wooden post fence
    id("WPF"),      // barbed wire
    id("WPFG"),     // barbed wire with gate
    id("WWTW"),     // tall wooden fence
    id("WMWW"),     // short wooden fence
    id("WSW1"),     // iron railing
    id("WSW2"),     // iron railing with gate
    id("WALLBR16"), // brick wall with gate
    id("WBW"),      // bone fence
    id("WBR1"),     // brick
    id("WBRG"),     // brick with gate
    id("WFW1"),     // white wooden fence
    id("WFW1"),     // red wooden fence
    id("WBR2"),     // stone
    id("WBR3"),     // stone with gate
    id("WPW3"),
    id("WJF"),      // jungle
    id("WCH"),      // conifer hedge
    id("WCHG"),     // conifer hedge with gate
    id("WC1"),      // small brown castle
    id("WC2"),      // wood post fence
    id("WC3"),      // roman column
    id("WC4"),      // large brown castle
    id("WC5"),
    id("WC6"),
    id("WC7"),
    id("WC8"),
    id("WC9"),      // tall grey castle wall
    id("WC10"),     // wooden fence with snow
    id("WC11"),
    id("WC12"),
    id("WC13"),
    id("WC14"),     // creepy
    id("WC15"),
    id("WC16"),
    id("WALLGL16"), // plate glass
    id("WC17"),
    id("WC18"),
    id("WALLCF16"),
    id("WALLPG16"),
    id("WALLRH16"),
    id("WALLSTFN"),
    id("WALLSTWN"),
    id("WALLWD16"),
    id("WALLMM16"),
    id("WALLJN16"),
    id("WALLPR16"),
    id("WALLNT16"),
    id("WALLU132"),
];

pub fn wall_object(code: u8) -> Option<ObjectIdentifier> {
    WALL_OBJECTS.get(code as usize).copied()
}

/// Historical colour corrections for individual wall codes, applied after
/// the palette conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOverride {
    /// Replace the primary colour.
    Primary(Colour),
    /// Draw with another wall code in a fixed primary colour.
    Retype { code: u8, primary: Colour },
    /// Move the primary colour to the secondary channel, then replace it.
    ShiftPrimary(Colour),
    /// Replace the secondary colour.
    Secondary(Colour),
}

pub const WALL_OVERRIDES: [(u8, WallOverride); 13] = [
    (12, WallOverride::Primary(Colour::DARK_BROWN)),
    (
        26,
        WallOverride::Retype {
            code: 12,
            primary: Colour::WHITE,
        },
    ),
    (
        27,
        WallOverride::Retype {
            code: 12,
            primary: Colour::SALMON_PINK,
        },
    ),
    (50, WallOverride::Primary(Colour::DARK_BROWN)),
    (13, WallOverride::ShiftPrimary(Colour::DARK_BROWN)),
    (11, WallOverride::Secondary(Colour::WHITE)),
    (22, WallOverride::Secondary(Colour::WHITE)),
    (35, WallOverride::Primary(Colour::GREY)),
    (42, WallOverride::Primary(Colour::GREY)),
    (43, WallOverride::Primary(Colour::GREY)),
    (44, WallOverride::Primary(Colour::GREY)),
    (45, WallOverride::Primary(Colour::GREY)),
    (46, WallOverride::Primary(Colour::GREY)),
];

/// Wall code and colours after corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertedWall {
    pub code: u8,
    pub colours: [Colour; 3],
}

/// Applies the override for `code`, if any. `primary` must already be in
/// the destination palette.
pub fn convert_wall(code: u8, primary: Colour) -> ConvertedWall {
    let mut wall = ConvertedWall {
        code,
        colours: [primary, Colour::BLACK, Colour::BLACK],
    };
    let Some((_, rule)) = WALL_OVERRIDES.iter().find(|(c, _)| *c == code) else {
        return wall;
    };
    match *rule {
        WallOverride::Primary(colour) => wall.colours[0] = colour,
        WallOverride::Retype { code, primary } => {
            wall.code = code;
            wall.colours[0] = primary;
        }
        WallOverride::ShiftPrimary(colour) => {
            wall.colours[1] = wall.colours[0];
            wall.colours[0] = colour;
        }
        WallOverride::Secondary(colour) => wall.colours[1] = colour,
    }
    wall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_wall_keeps_colour() {
        let wall = convert_wall(0, Colour::BRIGHT_GREEN);
        assert_eq!(wall.code, 0);
        assert_eq!(wall.colours, [Colour::BRIGHT_GREEN, Colour::BLACK, Colour::BLACK]);
    }

    #[test]
    fn test_retyped_wooden_fences() {
        let white = convert_wall(26, Colour::BRIGHT_RED);
        assert_eq!(white.code, 12);
        assert_eq!(white.colours[0], Colour::WHITE);
        let red = convert_wall(27, Colour::BRIGHT_RED);
        assert_eq!(red.code, 12);
        assert_eq!(red.colours[0], Colour::SALMON_PINK);
    }

    #[test]
    fn test_shift_primary() {
        let wall = convert_wall(13, Colour::TEAL);
        assert_eq!(wall.colours[0], Colour::DARK_BROWN);
        assert_eq!(wall.colours[1], Colour::TEAL);
    }

    #[test]
    fn test_secondary_and_grey_overrides() {
        assert_eq!(convert_wall(22, Colour::TEAL).colours[1], Colour::WHITE);
        for code in [35, 42, 43, 44, 45, 46] {
            assert_eq!(convert_wall(code, Colour::TEAL).colours[0], Colour::GREY);
        }
    }

    #[test]
    fn test_every_code_has_an_object() {
        for code in 0..WALL_CODE_COUNT as u8 {
            assert!(wall_object(code).is_some());
        }
        assert!(wall_object(WALL_CODE_COUNT as u8).is_none());
    }
}

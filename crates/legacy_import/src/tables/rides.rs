use park::objects::ObjectIdentifier;
use park::research::ResearchCategory;
use park::rides::RideKind;

const fn id(name: &'static str) -> ObjectIdentifier {
    ObjectIdentifier::from_static(name)
}

/// Marks an empty ride, research or vehicle slot.
pub const RIDE_TYPE_NULL: u8 = 255;

pub const RIDE_TYPE_COUNT: usize = 85;
pub const VEHICLE_TYPE_COUNT: usize = 89;

// Legacy ride types with special handling during import.
pub const LEGACY_RIDE_MERRY_GO_ROUND: u8 = 33;
pub const LEGACY_RIDE_BALLOON_STALL: u8 = 34;
pub const LEGACY_RIDE_DODGEMS: u8 = 25;

/// What a legacy ride type becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideTypeInfo {
    pub kind: RideKind,
    /// Object loaded when the ride has no vehicle of its own.
    pub default_object: Option<ObjectIdentifier>,
    /// Whether the ride's object comes from its vehicle type rather than
    /// from the ride type itself.
    pub uses_vehicles: bool,
    pub category: ResearchCategory,
}

const fn ride(
    kind: RideKind,
    object: &'static str,
    uses_vehicles: bool,
    category: ResearchCategory,
) -> RideTypeInfo {
    RideTypeInfo {
        kind,
        default_object: Some(id(object)),
        uses_vehicles,
        category,
    }
}

const fn unused(kind: RideKind, category: ResearchCategory) -> RideTypeInfo {
    RideTypeInfo {
        kind,
        default_object: None,
        uses_vehicles: false,
        category,
    }
}

const RIDE_TYPES: [RideTypeInfo; RIDE_TYPE_COUNT] = [
    ride(RideKind::WOODEN_ROLLER_COASTER, "PTCT1", true, ResearchCategory::Rollercoaster), // wooden roller coaster
    ride(RideKind::STAND_UP_ROLLER_COASTER, "TOGST", true, ResearchCategory::Rollercoaster), // stand-up steel roller coaster
    ride(RideKind::SUSPENDED_SWINGING_COASTER, "ARRSW1", true, ResearchCategory::Rollercoaster), // suspended roller coaster
    ride(RideKind::INVERTED_ROLLER_COASTER, "NEMT", true, ResearchCategory::Rollercoaster), // inverted roller coaster
    ride(RideKind::JUNIOR_ROLLER_COASTER, "ZLDB", true, ResearchCategory::Rollercoaster), // steel mini roller coaster
    ride(RideKind::MINIATURE_RAILWAY, "NRL", true, ResearchCategory::Transport), // miniature railway
    ride(RideKind::MONORAIL, "MONO2", true, ResearchCategory::Transport), // monorail
    ride(RideKind::MINI_SUSPENDED_COASTER, "BATFL", true, ResearchCategory::Rollercoaster), // suspended single rail roller coaster
    ride(RideKind::BOAT_HIRE, "RBOAT", true, ResearchCategory::Water), // boat hire
    ride(RideKind::WOODEN_WILD_MOUSE, "WMOUSE", true, ResearchCategory::Rollercoaster), // wooden crazy rodent roller coaster
    ride(RideKind::STEEPLECHASE, "STEEP1", true, ResearchCategory::Rollercoaster), // single rail roller coaster
    ride(RideKind::CAR_RIDE, "SPCAR", true, ResearchCategory::Gentle), // car ride
    ride(RideKind::LAUNCHED_FREEFALL, "SSC1", true, ResearchCategory::Thrill), // launched freefall
    ride(RideKind::BOBSLEIGH_COASTER, "BOB1", true, ResearchCategory::Rollercoaster), // bobsled roller coaster
    ride(RideKind::OBSERVATION_TOWER, "OBS1", true, ResearchCategory::Gentle), // observation tower
    ride(RideKind::LOOPING_ROLLER_COASTER, "SCHT1", true, ResearchCategory::Rollercoaster), // steel roller coaster
    ride(RideKind::DINGHY_SLIDE, "DING1", true, ResearchCategory::Water), // water slide
    ride(RideKind::MINE_TRAIN_COASTER, "AMT1", true, ResearchCategory::Rollercoaster), // mine train roller coaster
    ride(RideKind::CHAIRLIFT, "CLIFT1", true, ResearchCategory::Transport), // chairlift
    ride(RideKind::CORKSCREW_ROLLER_COASTER, "ARRT1", true, ResearchCategory::Rollercoaster), // steel corkscrew roller coaster
    ride(RideKind::MAZE, "HMAZE", false, ResearchCategory::Gentle), // hedge maze
    ride(RideKind::SPIRAL_SLIDE, "HSKELT", false, ResearchCategory::Gentle), // spiral slide
    ride(RideKind::GO_KARTS, "KART1", true, ResearchCategory::Thrill), // go karts
    ride(RideKind::LOG_FLUME, "LFB1", true, ResearchCategory::Water), // log flume
    ride(RideKind::RIVER_RAPIDS, "RAPBOAT", true, ResearchCategory::Water), // river rapids
    ride(RideKind::DODGEMS, "DODG1", true, ResearchCategory::Gentle), // dodgems
    ride(RideKind::SWINGING_SHIP, "SWSH1", true, ResearchCategory::Thrill), // swinging ship
    ride(RideKind::SWINGING_INVERTER_SHIP, "SWSH2", true, ResearchCategory::Thrill), // swinging inverter ship
    ride(RideKind::FOOD_STALL, "ICECR1", false, ResearchCategory::Shop), // ice cream stall
    ride(RideKind::FOOD_STALL, "CHPSH", false, ResearchCategory::Shop), // chips stall
    ride(RideKind::DRINK_STALL, "DRNKS", false, ResearchCategory::Shop), // drink stall
    ride(RideKind::FOOD_STALL, "CNDYF", false, ResearchCategory::Shop), // candyfloss stall
    ride(RideKind::FOOD_STALL, "BURGB", false, ResearchCategory::Shop), // burger bar
    ride(RideKind::MERRY_GO_ROUND, "MGR1", true, ResearchCategory::Gentle), // merry-go-round
    ride(RideKind::SHOP, "BALLN", false, ResearchCategory::Shop), // balloon stall
    ride(RideKind::INFORMATION_KIOSK, "INFOK", false, ResearchCategory::Shop), // information kiosk
    ride(RideKind::TOILETS, "TLT1", false, ResearchCategory::Shop), // toilets
    ride(RideKind::FERRIS_WHEEL, "FWH1", true, ResearchCategory::Gentle), // ferris wheel
    ride(RideKind::MOTION_SIMULATOR, "SIMPOD", true, ResearchCategory::Thrill), // motion simulator
    ride(RideKind::CINEMA_3D, "C3D", true, ResearchCategory::Thrill), // 3D cinema
    ride(RideKind::TOP_SPIN, "TOPSP1", true, ResearchCategory::Thrill), // top spin
    ride(RideKind::SPACE_RINGS, "SRINGS", true, ResearchCategory::Gentle), // space rings
    ride(RideKind::REVERSE_FREEFALL_COASTER, "REVF1", true, ResearchCategory::Rollercoaster), // reverse freefall roller coaster
    ride(RideKind::SHOP, "SOUVS", false, ResearchCategory::Shop), // souvenir stall
    ride(RideKind::VERTICAL_DROP_ROLLER_COASTER, "BMVD", true, ResearchCategory::Rollercoaster), // vertical roller coaster
    ride(RideKind::FOOD_STALL, "PIZZS", false, ResearchCategory::Shop), // pizza stall
    ride(RideKind::TWIST, "TWIST1", true, ResearchCategory::Thrill), // twist
    ride(RideKind::HAUNTED_HOUSE, "HHBUILD", true, ResearchCategory::Gentle), // haunted house
    ride(RideKind::FOOD_STALL, "POPCS", false, ResearchCategory::Shop), // popcorn stall
    ride(RideKind::CIRCUS, "CIRCUS1", true, ResearchCategory::Gentle), // circus show
    ride(RideKind::GHOST_TRAIN, "GTC", true, ResearchCategory::Gentle), // ghost train
    ride(RideKind::TWISTER_ROLLER_COASTER, "BMSD", true, ResearchCategory::Rollercoaster), // steel twister roller coaster
    ride(RideKind::WOODEN_ROLLER_COASTER, "MFT", true, ResearchCategory::Rollercoaster), // wooden twister roller coaster
    ride(RideKind::SIDE_FRICTION_ROLLER_COASTER, "SFRIC1", true, ResearchCategory::Rollercoaster), // wooden side friction roller coaster
    ride(RideKind::STEEL_WILD_MOUSE, "SMC1", true, ResearchCategory::Rollercoaster), // steel wild mouse roller coaster
    ride(RideKind::FOOD_STALL, "HOTDS", false, ResearchCategory::Shop), // hot dog stall
    ride(RideKind::FOOD_STALL, "SQDST", false, ResearchCategory::Shop), // exotic sea food stall
    ride(RideKind::SHOP, "HATST", false, ResearchCategory::Shop), // hat stall
    ride(RideKind::FOOD_STALL, "TOFFS", false, ResearchCategory::Shop), // candy apple stand
    ride(RideKind::VIRGINIA_REEL, "VREEL", true, ResearchCategory::Rollercoaster), // virginia reel
    ride(RideKind::SPLASH_BOATS, "SPBOAT", true, ResearchCategory::Water), // river ride
    ride(RideKind::MONORAIL_CYCLES, "MONBK", true, ResearchCategory::Gentle), // cycle monorail
    ride(RideKind::FLYING_ROLLER_COASTER, "VEKST", true, ResearchCategory::Rollercoaster), // flying roller coaster
    ride(RideKind::SUSPENDED_MONORAIL, "SMONO", true, ResearchCategory::Transport), // suspended monorail
    unused(RideKind::REVERSER_ROLLER_COASTER, ResearchCategory::Rollercoaster), // unused 40
    ride(RideKind::REVERSER_ROLLER_COASTER, "REVCAR", true, ResearchCategory::Rollercoaster), // wooden reverser roller coaster
    ride(RideKind::HEARTLINE_TWISTER_COASTER, "UTCAR", true, ResearchCategory::Rollercoaster), // heartline twister roller coaster
    ride(RideKind::MINI_GOLF, "GOLF1", true, ResearchCategory::Gentle), // miniature golf
    unused(RideKind::GIGA_COASTER, ResearchCategory::Rollercoaster), // unused 44
    ride(RideKind::ROTO_DROP, "GDROP1", true, ResearchCategory::Thrill), // roto-drop
    ride(RideKind::FLYING_SAUCERS, "FSAUC", true, ResearchCategory::Gentle), // flying saucers
    ride(RideKind::CROOKED_HOUSE, "CHBUILD", true, ResearchCategory::Gentle), // crooked house
    ride(RideKind::MONORAIL_CYCLES, "HELICAR", true, ResearchCategory::Gentle), // cycle railway
    ride(RideKind::COMPACT_INVERTED_COASTER, "SLCT", true, ResearchCategory::Rollercoaster), // suspended looping roller coaster
    ride(RideKind::WATER_COASTER, "CSTBOAT", true, ResearchCategory::Rollercoaster), // water coaster
    ride(RideKind::AIR_POWERED_VERTICAL_COASTER, "THCAR", true, ResearchCategory::Rollercoaster), // air powered vertical coaster
    ride(RideKind::INVERTED_HAIRPIN_COASTER, "IVMC1", true, ResearchCategory::Rollercoaster), // inverted wild mouse coaster
    ride(RideKind::BOAT_HIRE, "JSKI", true, ResearchCategory::Water), // jet skis
    ride(RideKind::SHOP, "TSHRT", false, ResearchCategory::Shop), // t-shirt stall
    ride(RideKind::RIVER_RAFTS, "RFTBOAT", true, ResearchCategory::Water), // raft ride
    ride(RideKind::FOOD_STALL, "DOUGH", false, ResearchCategory::Shop), // doughnut shop
    ride(RideKind::ENTERPRISE, "ENTERP", true, ResearchCategory::Thrill), // enterprise
    ride(RideKind::DRINK_STALL, "COFFS", false, ResearchCategory::Shop), // coffee shop
    ride(RideKind::FOOD_STALL, "CHCKS", false, ResearchCategory::Shop), // fried chicken stall
    ride(RideKind::DRINK_STALL, "LEMST", false, ResearchCategory::Shop), // lemonade stall
];

const VEHICLE_OBJECTS: [Option<ObjectIdentifier>; VEHICLE_TYPE_COUNT] = [
    Some(id("SCHT1")), Some(id("SCHT1")), Some(id("PTCT1")), Some(id("SLCT")),
    Some(id("ARRSW1")), Some(id("ZLDB")), Some(id("TOGST")), Some(id("WMSPIN")),
    Some(id("BATFL")), Some(id("SWANS")), Some(id("MONO1")), Some(id("CBOAT")),
    Some(id("RBOAT")), Some(id("NRL")), Some(id("WMOUSE")), Some(id("BBOAT")),
    Some(id("PTCT1")), Some(id("RCKC")), Some(id("STEEP1")), Some(id("SPCAR")),
    Some(id("SKYTR")), Some(id("WMMINE")), Some(id("ARRSW2")), Some(id("MONO2")),
    Some(id("TRIKE")), Some(id("SSC1")), Some(id("BOB1")), Some(id("DING1")),
    Some(id("OBS1")), Some(id("AMT1")), Some(id("CLIFT1")), Some(id("ARRT1")),
    Some(id("STEEP2")), Some(id("RCR")), Some(id("TRUCK1")), Some(id("KART1")),
    Some(id("RAPBOAT")), Some(id("LFB1")), Some(id("DODG1")), Some(id("SWSH1")),
    Some(id("SWSH2")), Some(id("MGR1")), Some(id("FWH1")), Some(id("SIMPOD")),
    Some(id("C3D")), Some(id("TOPSP1")), Some(id("SRINGS")), Some(id("REVF1")),
    Some(id("BMVD")), Some(id("CTCAR")), Some(id("TWIST1")), Some(id("HHBUILD")),
    Some(id("ZLOG")), Some(id("CIRCUS1")), Some(id("GTC")), Some(id("BMSD")),
    Some(id("MFT")), Some(id("SFRIC1")), Some(id("VCR")), Some(id("NRL2")),
    Some(id("BMSU")), Some(id("BMFL")), Some(id("SMC1")), Some(id("CLIFT2")),
    Some(id("SMONO")), Some(id("HELICAR")), Some(id("VREEL")), Some(id("REVCAR")),
    Some(id("GOLF1")), Some(id("SPBOAT")), Some(id("VEKST")), Some(id("BMRB")),
    Some(id("UTCAR")), Some(id("UTCARR")), None, Some(id("GDROP1")),
    Some(id("FSAUC")), Some(id("CHBUILD")), Some(id("MONBK")), Some(id("ARRT2")),
    Some(id("NEMT")), Some(id("CSTBOAT")), Some(id("SLCFO")), Some(id("JSKI")),
    Some(id("RFTBOAT")), Some(id("AML1")), Some(id("THCAR")), Some(id("IVMC1")),
    Some(id("ENTERP")),
];

pub fn ride_type(legacy: u8) -> Option<&'static RideTypeInfo> {
    RIDE_TYPES.get(legacy as usize)
}

pub fn ride_type_object(legacy: u8) -> Option<ObjectIdentifier> {
    ride_type(legacy).and_then(|info| info.default_object)
}

pub fn ride_type_uses_vehicles(legacy: u8) -> bool {
    ride_type(legacy).is_some_and(|info| info.uses_vehicles)
}

pub fn vehicle_object(legacy: u8) -> Option<ObjectIdentifier> {
    VEHICLE_OBJECTS.get(legacy as usize).copied().flatten()
}

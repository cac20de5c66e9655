use park::objects::{ObjectIdentifier, ObjectType};

const fn id(name: &'static str) -> ObjectIdentifier {
    ObjectIdentifier::from_static(name)
}

// =============================================================================
// Scenery types
// =============================================================================

const SMALL_SCENERY_OBJECTS: &[ObjectIdentifier] = &[
    id("TL0"), id("TL1"), id("TL2"), id("TL3"), id("TM0"), id("TM1"),
    id("TM2"), id("TM3"), id("TS0"), id("TS1"), id("TS2"), id("TS3"),
    id("TS4"), id("TS5"), id("TS6"), id("TIC"), id("TLC"), id("TMC"),
    id("TMP"), id("TITC"), id("TGHC"), id("TAC"), id("TGHC2"), id("TCJ"),
    id("TMBJ"), id("TCF"), id("TCL"), id("TRF"), id("TRF2"), id("TEL"),
    id("TAP"), id("TSP"), id("TMZP"), id("TCRP"), id("TBP"), id("TLP"),
    id("TWP"), id("TAS"), id("TMG"), id("TWW"), id("TSB"), id("TVL"),
    id("TCT"), id("TEF"), id("TAL"), id("TSQ"), id("THT"), id("TCB"),
    id("TDM"), id("TSD"), id("TGS"), id("TUS"), id("TH1"), id("TBC"),
    id("TH2"), id("TPM"), id("TSC"), id("TG1"), id("TWF"), id("TSH0"),
    id("TSH1"), id("TSH2"), id("TSH3"), id("TSH4"), id("TSH5"), id("TG2"),
    id("TG3"), id("TG4"), id("TG5"), id("TG6"), id("TG7"), id("TG8"),
    id("TG9"), id("TG10"), id("TG11"), id("TG12"), id("TG13"), id("TG14"),
    id("TT1"), id("TDF"), id("TSH"), id("THRS"), id("TSTD"), id("TRMS"),
    id("TRWS"), id("TRC"), id("TQF"), id("TES1"), id("TEN"), id("TERS"),
    id("TERB"), id("TEP"), id("TST1"), id("TST2"), id("TMS1"), id("TAS1"),
    id("TAS2"), id("TAS3"), id("TST3"), id("TST4"), id("TST5"), id("TAS4"),
    id("TCY"), id("TBW"), id("TBR1"), id("TBR2"), id("TML"), id("TMW"),
    id("TBR3"), id("TBR4"), id("TMJ"), id("TBR"), id("TMO1"), id("TMO2"),
    id("TMO3"), id("TMO4"), id("TMO5"), id("TWH1"), id("TWH2"), id("TNS"),
    id("TP1"), id("TP2"), id("TK1"), id("TK2"), id("TR1"), id("TR2"),
    id("TQ1"), id("TQ2"), id("TWN"), id("TCE"), id("TCO"), id("THL"),
    id("TCC"), id("TB1"), id("TB2"), id("TK3"), id("TK4"), id("TBN"),
    id("TBN1"), id("TDT1"), id("TDT2"), id("TDT3"), id("TMM1"), id("TMM2"),
    id("TMM3"), id("TGS1"), id("TGS2"), id("TGS3"), id("TGS4"), id("TDN4"),
    id("TDN5"), id("TJT1"), id("TJT2"), id("TJB1"), id("TTF"), id("TF1"),
    id("TF2"), id("TGE1"), id("TJT3"), id("TJT4"), id("TJP1"), id("TJB2"),
    id("TGE2"), id("TJT5"), id("TJB3"), id("TJB4"), id("TJT6"), id("TJP2"),
    id("TGE3"), id("TCK"), id("TGE4"), id("TGE5"), id("TG15"), id("TG16"),
    id("TG17"), id("TG18"), id("TG19"), id("TG20"), id("TG21"), id("TSM"),
    id("TIG"), id("TCFS"), id("TRFS"), id("TRF3"), id("TNSS"), id("TCT1"),
    id("TCT2"), id("TSF1"), id("TSF2"), id("TSF3"), id("TCN"), id("TTG"),
    id("TSNC"), id("TSNB"), id("TSCP"), id("TCD"), id("TSG"), id("TSK"),
    id("TGH1"), id("TGH2"), id("TSMP"), id("TJF"), id("TLY"), id("TGC1"),
    id("TGC2"), id("TGG"), id("TSPH"), id("TOH1"), id("TOH2"), id("TOT1"),
    id("TOT2"), id("TOS"), id("TOT3"), id("TOT4"), id("TSC2"), id("TSP1"),
    id("TOH3"), id("TSP2"), id("ROMROOF1"), id("GEOROOF1"), id("TNTROOF1"), id("JNGROOF1"),
    id("MINROOF1"), id("ROMROOF2"), id("GEOROOF2"), id("PAGROOF1"), id("SPCROOF1"), id("ROOF1"),
    id("ROOF2"), id("ROOF3"), id("ROOF4"), id("ROOF5"), id("ROOF6"), id("ROOF7"),
    id("ROOF8"), id("ROOF9"), id("ROOF10"), id("ROOF11"), id("ROOF12"), id("ROOF13"),
    id("ROOF14"), id("IGROOF"), id("CORROOF"), id("CORROOF2"),
];

const LARGE_SCENERY_OBJECTS: &[ObjectIdentifier] = &[
    id("SCOL"), id("SHS1"), id("SSPX"), id("SHS2"), id("SCLN"), id("SMH1"),
    id("SMH2"), id("SVLC"), id("SPYR"), id("SMN1"), id("SMB"), id("SSK1"),
    id("SDN1"), id("SDN2"), id("SDN3"), id("SIP"), id("STB1"), id("STB2"),
    id("STG1"), id("STG2"), id("SCT"), id("SOH1"), id("SOH2"), id("SOH3"),
    id("SGP"), id("SSR"), id("STH"), id("SAH"), id("SPS"), id("SPG"),
    id("SOB"), id("SAH2"), id("SST"), id("SSH"), id("SAH3"), id("SSIG1"),
    id("SSIG2"), id("SSIG3"), id("SSIG4"),
];

/// Geometric sculptures, whose second colour is always white.
pub const GEOMETRIC_SCULPTURES: [u8; 5] = [157, 162, 168, 170, 171];

pub fn small_scenery_object(code: u8) -> Option<ObjectIdentifier> {
    SMALL_SCENERY_OBJECTS.get(code as usize).copied()
}

pub fn large_scenery_object(code: u16) -> Option<ObjectIdentifier> {
    LARGE_SCENERY_OBJECTS.get(code as usize).copied()
}

// =============================================================================
// Scenery themes
// =============================================================================

pub const THEME_GENERAL: u8 = 0;
pub const THEME_JUMPING_FOUNTAINS: u8 = 5;
pub const THEME_GARDEN_CLOCK: u8 = 11;
/// Highest theme code.
pub const THEME_PAGODA: u8 = 17;

/// Scenery groups every imported park has available, in slot order.
pub const DEFAULT_SCENERY_GROUPS: [ObjectIdentifier; 6] = [
    id("SCGTREES"),
    id("SCGSHRUB"),
    id("SCGGARDN"),
    id("SCGFENCE"),
    id("SCGWALLS"),
    id("SCGPATHX"),
];

/// What a research theme unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeGroup {
    /// Always available; owns no scenery group object.
    Reserved,
    Group(ObjectIdentifier),
}

pub fn theme_group(theme: u8) -> Option<ThemeGroup> {
    let name = match theme {
        THEME_GENERAL | THEME_JUMPING_FOUNTAINS | THEME_GARDEN_CLOCK => {
            return Some(ThemeGroup::Reserved)
        }
        1 => "SCGMINE",
        2 => "SCGCLASS",
        3 => "SCGEGYPT",
        4 => "SCGMART",
        6 => "SCGWOND",
        7 => "SCGJURAS",
        8 => "SCGSPOOK",
        9 => "SCGJUNGL",
        10 => "SCGABSTR",
        12 => "SCGSNOW",
        13 => "SCGMEDIE",
        14 => "SCGSPACE",
        15 => "SCGHALLO",
        16 => "SCGURBAN",
        THEME_PAGODA => "SCGORIEN",
        _ => return None,
    };
    ObjectIdentifier::new(name).map(ThemeGroup::Group)
}

// =============================================================================
// Theme catalogue
// =============================================================================

/// One object contributed by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub object_type: ObjectType,
    pub identifier: ObjectIdentifier,
}

const fn entry(object_type: ObjectType, name: &'static str) -> CatalogueEntry {
    CatalogueEntry {
        object_type,
        identifier: id(name),
    }
}

const fn small(name: &'static str) -> CatalogueEntry {
    entry(ObjectType::SmallScenery, name)
}

const fn large(name: &'static str) -> CatalogueEntry {
    entry(ObjectType::LargeScenery, name)
}

const fn wall(name: &'static str) -> CatalogueEntry {
    entry(ObjectType::Wall, name)
}

const fn addition(name: &'static str) -> CatalogueEntry {
    entry(ObjectType::PathAddition, name)
}

const fn path(name: &'static str) -> CatalogueEntry {
    entry(ObjectType::Path, name)
}

const THEME_GENERAL_OBJECTS: &[CatalogueEntry] = &[
    small("TL0"), small("TL1"), small("TL2"), small("TL3"), small("TM0"),
    small("TM1"), small("TM2"), small("TM3"), small("TS0"), small("TS1"),
    small("TS2"), small("TS3"), small("TS4"), small("TS5"), small("TS6"),
    small("TIC"), small("TLC"), small("TMC"), small("TMP"), small("TITC"),
    small("TGHC"), small("TAC"), small("TGHC2"), small("TCJ"), small("TMBJ"),
    small("TCF"), small("TCL"), small("TRF"), small("TRF2"), small("TEL"),
    small("TAP"), small("TSP"), small("TMZP"), small("TCRP"), small("TBP"),
    small("TLP"), small("TWP"), small("TAS"), small("TMG"), small("TWW"),
    small("TSB"), small("TVL"), small("TCT"), small("TEF"), small("TAL"),
    small("TSQ"), small("THT"), small("TCB"), small("TDM"), small("TSD"),
    small("TGS"), small("TUS"), small("TH1"), small("TBC"), small("TH2"),
    small("TPM"), small("TSC"), small("TG1"), small("TWF"), small("TSH0"),
    small("TSH1"), small("TSH2"), small("TSH3"), small("TSH4"), small("TSH5"),
    small("TG2"), small("TG3"), small("TG4"), small("TG5"), small("TG6"),
    small("TG7"), small("TG8"), small("TG9"), small("TG10"), small("TG11"),
    small("TG12"), small("TG13"), small("TG14"), small("TT1"), small("TDF"),
    small("TSH"), small("THRS"), small("TSTD"), small("TBR"), small("TTF"),
    small("TF1"), small("TF2"), wall("WMF"), wall("WMFG"), wall("WHG"),
    wall("WHGG"), wall("WCH"), wall("WCHG"), wall("WPW1"), wall("WPW2"),
    wall("WPF"), wall("WPFG"), wall("WSW1"), wall("WSW2"), wall("WBR1"),
    wall("WBRG"), wall("WSW"), wall("WSWG"), addition("LAMP1"), addition("LAMP2"),
    addition("LAMP3"), addition("LAMP4"), addition("LITTER1"), addition("BENCH1"), path("TARMAC"),
    path("TARMACG"), path("TARMACB"), path("PATHCRZY"), path("PATHSPCE"), path("PATHDIRT"),
    path("PATHASH"), path("ROAD"),
];

const THEME_MINE: &[CatalogueEntry] = &[
    small("TMO1"), small("TMO2"), small("TMO3"), small("TMO4"), small("TMO5"),
    small("MINROOF1"), small("TBR1"), small("TBR2"), small("TBR3"), small("TBR4"),
    large("SMN1"), wall("WPW3"), wall("WWTW"), wall("WMWW"),
];

const THEME_CLASSICAL: &[CatalogueEntry] = &[
    small("TRMS"), small("TRWS"), small("TRC"), small("TQF"), small("TP1"),
    small("TP2"), small("ROMROOF1"), small("ROMROOF2"), large("SCOL"), large("SHS1"),
    large("SHS2"), large("SCLN"), wall("WRW"), wall("WC3"),
];

const THEME_EGYPTIAN: &[CatalogueEntry] = &[
    small("TES1"), small("TEN"), small("TERS"), small("TERB"), small("TEP"),
    small("TST1"), small("TST2"), small("TST3"), small("TST4"), small("TST5"),
    large("SSPX"), large("SPYR"), wall("WEW"),
];

const THEME_MARTIAN: &[CatalogueEntry] = &[
    small("TMM1"), small("TMM2"), small("TMM3"), small("TML"), small("TMW"),
    small("TMS1"), small("TMJ"), large("SMH1"), large("SMH2"), large("SVLC"),
    wall("WMW"),
];

const THEME_WONDERLAND: &[CatalogueEntry] = &[
    small("TWH1"), small("TWH2"), small("TK1"), small("TK2"), small("TK3"),
    small("TK4"), small("TR1"), small("TR2"), small("TQ1"), small("TQ2"),
    small("TB1"), small("TB2"), small("TNS"), small("TWN"), small("TCE"),
    small("TCO"), small("THL"), small("TCC"), large("SMB"), wall("WCW1"),
    wall("WCW2"),
];

const THEME_JURASSIC: &[CatalogueEntry] = &[
    small("TDT1"), small("TDT2"), small("TDT3"), small("TDN4"), small("TDN5"),
    small("TAS1"), small("TAS2"), small("TAS3"), small("TAS4"), large("SDN1"),
    large("SDN2"), large("SDN3"), wall("WBW"),
];

const THEME_SPOOKY: &[CatalogueEntry] = &[
    small("TGS1"), small("TGS2"), small("TGS3"), small("TGS4"), small("TGH1"),
    small("TGH2"), small("TSMP"), small("TCY"), small("TBW"), large("SGP"),
    wall("WC14"), wall("WC15"),
];

const THEME_JUNGLE: &[CatalogueEntry] = &[
    small("TJT1"), small("TJT2"), small("TJT3"), small("TJT4"), small("TJT5"),
    small("TJT6"), small("TJP1"), small("TJP2"), small("TJB1"), small("TJB2"),
    small("TJB3"), small("TJB4"), small("TJF"), small("JNGROOF1"), wall("WJF"),
];

const THEME_ABSTRACT: &[CatalogueEntry] = &[
    small("TGE1"), small("TGE2"), small("TGE3"), small("TGE4"), small("TGE5"),
    small("TCK"), small("GEOROOF1"), small("GEOROOF2"), large("SIP"), wall("WALLGL16"),
];

const THEME_SNOW: &[CatalogueEntry] = &[
    small("TSNC"), small("TSNB"), small("TSCP"), small("TIG"), small("TSM"),
    small("IGROOF"), large("SSK1"), wall("WC10"), wall("WC16"), addition("JUMPSNW1"),
];

const THEME_MEDIEVAL: &[CatalogueEntry] = &[
    small("TCT1"), small("TCT2"), small("TCN"), small("TTG"), small("TCD"),
    small("TSG"), small("TSK"), small("TNTROOF1"), large("SCT"), wall("WC1"),
    wall("WC2"), wall("WC4"), wall("WC5"), wall("WC6"), wall("WC7"),
    wall("WC8"), wall("WC9"),
];

const THEME_SPACE: &[CatalogueEntry] = &[
    small("TSF1"), small("TSF2"), small("TSF3"), small("TSPH"), small("SPCROOF1"),
    large("SSR"), large("SST"), large("SSH"), wall("WALLPG16"),
];

const THEME_CREEPY: &[CatalogueEntry] = &[
    small("TGC1"), small("TGC2"), small("TGG"), small("TCFS"), small("TRFS"),
    small("TRF3"), small("TNSS"), large("SAH"), large("SPS"), wall("WC11"),
    wall("WC12"), wall("WC13"),
];

const THEME_URBAN: &[CatalogueEntry] = &[
    small("TOT1"), small("TOT2"), small("TOS"), small("TOT3"), small("TOT4"),
    small("TSC2"), small("TSP1"), small("TSP2"), small("CORROOF"), small("CORROOF2"),
    small("ROOF1"), small("ROOF2"), small("ROOF3"), small("ROOF4"), small("ROOF5"),
    small("ROOF6"), large("SPG"), large("SOB"), large("SAH2"), large("SAH3"),
    large("SSIG1"), large("SSIG2"), large("SSIG3"), large("SSIG4"), wall("WALLU132"),
    wall("WALLCF16"),
];

const THEME_PAGODA_OBJECTS: &[CatalogueEntry] = &[
    small("TOH1"), small("TOH2"), small("TOH3"), small("TLY"), small("PAGROOF1"),
    small("ROOF7"), small("ROOF8"), large("SOH1"), large("SOH2"), large("SOH3"),
    large("STH"), large("STB1"), large("STB2"), large("STG1"), large("STG2"),
    wall("WALLPR16"),
];

/// Objects a theme contributes when its group is in use.
pub fn theme_objects(theme: u8) -> &'static [CatalogueEntry] {
    match theme {
        THEME_GENERAL => THEME_GENERAL_OBJECTS,
        1 => THEME_MINE,
        2 => THEME_CLASSICAL,
        3 => THEME_EGYPTIAN,
        4 => THEME_MARTIAN,
        6 => THEME_WONDERLAND,
        7 => THEME_JURASSIC,
        8 => THEME_SPOOKY,
        9 => THEME_JUNGLE,
        10 => THEME_ABSTRACT,
        12 => THEME_SNOW,
        13 => THEME_MEDIEVAL,
        14 => THEME_SPACE,
        15 => THEME_CREEPY,
        16 => THEME_URBAN,
        THEME_PAGODA => THEME_PAGODA_OBJECTS,
        _ => &[],
    }
}

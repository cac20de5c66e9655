// ---------------------------------------------------------------------------
// LegacySave: the decoded contents of a legacy saved game or scenario
// ---------------------------------------------------------------------------

use park::park_state::{Award, MapAnimation, NewsItem, PeepSpawn};
use serde::{Deserialize, Serialize};

use super::map_element::{LegacyMapElement, LEGACY_TILE_COUNT};
use super::ride::LegacyRide;
use super::sprite::LegacySprite;
use crate::format_version::FormatVersion;

pub const LEGACY_MAX_RIDES: usize = 255;
pub const LEGACY_MAX_BANNERS: usize = 100;
pub const LEGACY_USER_STRING_COUNT: usize = 1024;

/// String ids in this range index the user string table.
pub const USER_STRING_START: u16 = 0x8000;
pub const USER_STRING_END: u16 = 0x9000;

pub fn is_user_string_id(id: u16) -> bool {
    (USER_STRING_START..USER_STRING_END).contains(&id)
}

// -- Research list --

pub const RESEARCH_END_AVAILABLE: u8 = 0xFF;
pub const RESEARCH_END_RESEARCHABLE: u8 = 0xFE;
pub const RESEARCH_END: u8 = 0xFD;

pub const RESEARCH_CATEGORY_THEME: u8 = 0;
pub const RESEARCH_CATEGORY_RIDE: u8 = 1;
pub const RESEARCH_CATEGORY_VEHICLE: u8 = 2;
pub const RESEARCH_CATEGORY_SPECIAL: u8 = 3;

// Research funding priorities.
pub const RESEARCH_FUND_ROLLERCOASTERS: u8 = 1 << 0;
pub const RESEARCH_FUND_THRILL_RIDES: u8 = 1 << 1;
pub const RESEARCH_FUND_GENTLE_TRANSPORT_RIDES: u8 = 1 << 2;
pub const RESEARCH_FUND_SHOPS: u8 = 1 << 3;
pub const RESEARCH_FUND_SCENERY_THEMING: u8 = 1 << 4;

/// One entry of the legacy invention list. `item` holds a ride type, vehicle
/// type or theme depending on `category`, or one of the `RESEARCH_END*`
/// markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyResearchItem {
    pub item: u8,
    pub related_ride: u8,
    pub category: u8,
    pub flags: u8,
}

impl LegacyResearchItem {
    pub fn marker(item: u8) -> Self {
        Self {
            item,
            ..Self::default()
        }
    }

    pub fn ride(ride_type: u8) -> Self {
        Self {
            item: ride_type,
            related_ride: ride_type,
            category: RESEARCH_CATEGORY_RIDE,
            flags: 0,
        }
    }

    pub fn vehicle(vehicle_type: u8, ride_type: u8) -> Self {
        Self {
            item: vehicle_type,
            related_ride: ride_type,
            category: RESEARCH_CATEGORY_VEHICLE,
            flags: 0,
        }
    }

    pub fn theme(theme: u8) -> Self {
        Self {
            item: theme,
            related_ride: 0,
            category: RESEARCH_CATEGORY_THEME,
            flags: 0,
        }
    }

    /// True for the two markers that end the list.
    pub fn ends_list(&self) -> bool {
        self.item == RESEARCH_END_RESEARCHABLE || self.item == RESEARCH_END
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyResearchState {
    pub priority: u8,
    pub level: u8,
    pub progress: u16,
    pub next_item: u8,
    pub next_category: u8,
}

// -- Park --

// Legacy park flag bits that need translating.
pub const LEGACY_PARK_FLAG_NO_MONEY: u32 = 1 << 11;
pub const LEGACY_PARK_FLAG_ENTRY_LOCKED_AT_FREE: u32 = 1 << 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyBanner {
    pub banner_type: u8,
    pub flags: u8,
    pub string_idx: u16,
    pub colour: u8,
    pub text_colour: u8,
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyFinance {
    pub park_entrance_fee: i16,
    pub land_price: i16,
    pub construction_rights_price: i16,
    pub cash: i32,
    pub loan: i32,
    pub max_loan: i32,
    pub company_value: i32,
    pub park_value: i32,
    pub profit: i32,
    pub cash_history: Vec<i32>,
    pub park_value_history: Vec<i32>,
    pub weekly_profit_history: Vec<i32>,
    pub expenditure: Vec<i32>,
    pub total_expenditure: i32,
    pub num_admissions: u32,
    pub admission_total_income: i32,
    pub marketing_status: [u8; 6],
    pub marketing_assoc: [u8; 6],
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyParkInfo {
    pub name_string_index: u16,
    pub flags: u32,
    pub rating: u16,
    pub rating_history: Vec<u8>,
    pub guests_in_park_history: Vec<u8>,
    pub awards: Vec<Award>,
    pub messages: Vec<NewsItem>,
    pub guest_initial_cash: i16,
    pub guest_initial_hunger: u8,
    pub guest_initial_thirst: u8,
    pub handyman_colour: u8,
    pub mechanic_colour: u8,
    pub security_guard_colour: u8,
    pub ticks: u32,
    pub random_a: u32,
    pub random_b: u32,
    pub month: u16,
    pub day: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyClimate {
    pub climate: u8,
    pub climate_timer: u16,
    pub temperature: i8,
    pub weather: u8,
    pub weather_gloom: u8,
    pub rain: u8,
    pub target_temperature: i8,
    pub target_weather: u8,
    pub target_weather_gloom: u8,
    pub target_rain: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyScenario {
    pub name: String,
    pub objective_type: u8,
    pub objective_years: u8,
    pub objective_currency: i32,
    pub objective_num_guests: u16,
    pub view_x: u16,
    pub view_y: u16,
    pub view_zoom: u8,
    pub view_rotation: u8,
}

// -- Save --

/// A legacy file after container decoding. Tables keep their fixed legacy
/// sizes; slot numbers are positions in the vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacySave {
    /// Raw header version word, see [`FormatVersion::detect`].
    pub game_version: i32,
    /// Playable map size; 0 means the default.
    pub map_size: u16,
    pub map_elements: Vec<LegacyMapElement>,
    pub rides: Vec<LegacyRide>,
    pub sprites: Vec<LegacySprite>,
    pub banners: Vec<LegacyBanner>,
    pub user_strings: Vec<String>,
    pub research_items: Vec<LegacyResearchItem>,
    /// Replaces `research_items` in the second expansion.
    pub research_items_ll: Vec<LegacyResearchItem>,
    pub research: LegacyResearchState,
    pub finance: LegacyFinance,
    pub park: LegacyParkInfo,
    pub climate: LegacyClimate,
    pub scenario: LegacyScenario,
    pub peep_spawns: Vec<PeepSpawn>,
    pub map_animations: Vec<MapAnimation>,
}

impl LegacySave {
    /// A save with an empty map of blank tiles, no rides and an empty
    /// research list.
    pub fn blank(version: FormatVersion) -> Self {
        Self {
            game_version: version.raw(),
            map_size: 0,
            map_elements: vec![LegacyMapElement::blank_surface(); LEGACY_TILE_COUNT],
            rides: vec![LegacyRide::default(); LEGACY_MAX_RIDES],
            sprites: Vec::new(),
            banners: vec![LegacyBanner::default(); LEGACY_MAX_BANNERS],
            user_strings: vec![String::new(); LEGACY_USER_STRING_COUNT],
            research_items: vec![LegacyResearchItem::marker(RESEARCH_END)],
            research_items_ll: vec![LegacyResearchItem::marker(RESEARCH_END)],
            research: LegacyResearchState::default(),
            finance: LegacyFinance::default(),
            park: LegacyParkInfo::default(),
            climate: LegacyClimate::default(),
            scenario: LegacyScenario::default(),
            peep_spawns: Vec::new(),
            map_animations: Vec::new(),
        }
    }

    /// The invention list the given release reads.
    pub fn research_list(&self, version: FormatVersion) -> &[LegacyResearchItem] {
        if version.has_separate_research_list() {
            &self.research_items_ll
        } else {
            &self.research_items
        }
    }

    /// Text of a user string id, or `None` for built-in ids and empty
    /// strings.
    pub fn user_string(&self, id: u16) -> Option<&str> {
        if !is_user_string_id(id) {
            return None;
        }
        let index = usize::from(id - USER_STRING_START) % LEGACY_USER_STRING_COUNT;
        self.user_strings
            .get(index)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Stores `text` at the first free user string slot and returns its id.
    pub fn add_user_string(&mut self, text: &str) -> Option<u16> {
        let index = self.user_strings.iter().position(String::is_empty)?;
        self.user_strings[index] = text.to_owned();
        Some(USER_STRING_START + index as u16)
    }
}

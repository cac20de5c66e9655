use bevy::prelude::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::user_strings::StringId;

// =============================================================================
// Park
// =============================================================================

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ParkFlags: u32 {
        const PARK_OPEN = 1 << 0;
        const SCENARIO_COMPLETE_NAME_INPUT = 1 << 1;
        const FORBID_LANDSCAPE_CHANGES = 1 << 2;
        const FORBID_TREE_REMOVAL = 1 << 3;
        const SHOW_REAL_GUEST_NAMES = 1 << 4;
        const FORBID_HIGH_CONSTRUCTION = 1 << 5;
        const PREF_LESS_INTENSE_RIDES = 1 << 6;
        const FORBID_MARKETING_CAMPAIGN = 1 << 7;
        const ANTI_CHEAT_DEPRECATED = 1 << 8;
        const PREF_MORE_INTENSE_RIDES = 1 << 9;
        const NO_MONEY = 1 << 11;
        const DIFFICULT_GUEST_GENERATION = 1 << 12;
        const PARK_FREE_ENTRY = 1 << 13;
        const DIFFICULT_PARK_RATING = 1 << 14;
        const LOCK_REAL_NAMES_OPTION_DEPRECATED = 1 << 15;
        const NO_MONEY_SCENARIO = 1 << 17;

        // Bits not named above are carried through unchanged.
        const _ = !0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Award {
    pub time: u16,
    pub award_type: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsItem {
    pub item_type: u8,
    pub flags: u8,
    pub assoc: u32,
    pub ticks: u16,
    pub month_year: u16,
    pub day: u8,
    pub text: String,
}

/// Guest spawn point on the map edge, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeepSpawn {
    pub x: u16,
    pub y: u16,
    pub z: u8,
    pub direction: u8,
}

/// Tile element that animates independently of sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapAnimation {
    pub base_z: u8,
    pub animation_type: u8,
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaffColours {
    pub handyman: Colour,
    pub mechanic: Colour,
    pub security: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameDate {
    pub months_elapsed: u16,
    pub month_ticks: u16,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkState {
    pub name: Option<StringId>,
    pub flags: ParkFlags,
    /// Players may charge for rides and entry at once.
    pub unlock_all_prices: bool,
    pub rating: u16,
    pub rating_history: Vec<u8>,
    pub guests_in_park_history: Vec<u8>,
    pub awards: Vec<Award>,
    pub news: Vec<NewsItem>,
    pub guest_initial_cash: i16,
    pub guest_initial_hunger: u8,
    pub guest_initial_thirst: u8,
    pub staff_colours: StaffColours,
    pub ticks: u32,
    pub rng_seeds: (u32, u32),
    pub date: GameDate,
    pub peep_spawns: Vec<PeepSpawn>,
    pub map_animations: Vec<MapAnimation>,
}

// =============================================================================
// Finance
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketingCampaign {
    pub weeks_left: u8,
    pub ride_index: u8,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Finance {
    pub entrance_fee: i16,
    pub land_price: i16,
    pub construction_rights_price: i16,
    pub cash: i32,
    pub initial_cash: i32,
    pub loan: i32,
    pub max_loan: i32,
    pub company_value: i32,
    pub park_value: i32,
    pub current_profit: i32,
    pub cash_history: Vec<i32>,
    pub park_value_history: Vec<i32>,
    pub weekly_profit_history: Vec<i32>,
    /// 14 weeks of 16 expenditure types, oldest week last.
    pub expenditure: Vec<i32>,
    pub current_expenditure: i32,
    pub total_admissions: u32,
    pub income_from_admissions: i32,
    pub marketing: Vec<MarketingCampaign>,
}

// =============================================================================
// Climate
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeatherEffect {
    #[default]
    None,
    Rain,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherState {
    pub temperature: i8,
    pub weather: u8,
    pub effect: WeatherEffect,
    pub gloom: u8,
    pub rain_level: u8,
}

#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Climate {
    pub climate: u8,
    pub update_timer: u16,
    pub current: WeatherState,
    pub next: WeatherState,
}

// =============================================================================
// Scenario
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScenarioObjective {
    pub objective_type: u8,
    pub year: u8,
    pub currency: i32,
    pub num_guests: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedView {
    pub x: u16,
    pub y: u16,
    pub zoom: u8,
    pub rotation: u8,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub details: String,
    /// Number of a bundled scenario, taken from `scNN` file names.
    pub number: Option<u32>,
    pub objective: ScenarioObjective,
    pub saved_view: SavedView,
}

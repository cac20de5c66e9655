// ---------------------------------------------------------------------------
// Scalar park state: finance, flags, climate, scenario
// ---------------------------------------------------------------------------

use park::config::{
    EXPENDITURE_TYPES, EXPENDITURE_WEEKS, FINANCE_HISTORY_LENGTH, MAX_AWARDS,
    MAX_MAP_ANIMATIONS, MAX_MARKETING_CAMPAIGNS, MAX_NEWS_ITEMS, MAX_PEEP_SPAWNS,
    PARK_HISTORY_LENGTH,
};
use park::park_state::{
    Climate, Finance, GameDate, MapAnimation, MarketingCampaign, ParkFlags, ParkState,
    SavedView, ScenarioInfo, ScenarioObjective, StaffColours, WeatherEffect, WeatherState,
};
use park::user_strings::UserStringTable;
use park::ParkWorld;

use crate::legacy_types::save::*;
use crate::legacy_types::LegacySave;
use crate::tables::colours::convert_colour;

fn copy_history<T: Copy>(source: &[T], len: usize) -> Vec<T> {
    source.iter().take(len).copied().collect()
}

// =============================================================================
// Finance
// =============================================================================

pub fn import_finance(legacy: &LegacyFinance, finance: &mut Finance) {
    *finance = Finance {
        entrance_fee: legacy.park_entrance_fee,
        land_price: legacy.land_price,
        construction_rights_price: legacy.construction_rights_price,
        cash: legacy.cash,
        initial_cash: legacy.cash,
        loan: legacy.loan,
        max_loan: legacy.max_loan,
        company_value: legacy.company_value,
        park_value: legacy.park_value,
        current_profit: legacy.profit,
        cash_history: copy_history(&legacy.cash_history, FINANCE_HISTORY_LENGTH),
        park_value_history: copy_history(&legacy.park_value_history, FINANCE_HISTORY_LENGTH),
        weekly_profit_history: copy_history(
            &legacy.weekly_profit_history,
            FINANCE_HISTORY_LENGTH,
        ),
        expenditure: copy_history(&legacy.expenditure, EXPENDITURE_WEEKS * EXPENDITURE_TYPES),
        current_expenditure: legacy.total_expenditure,
        total_admissions: legacy.num_admissions,
        income_from_admissions: legacy.admission_total_income,
        marketing: legacy
            .marketing_status
            .iter()
            .zip(&legacy.marketing_assoc)
            .take(MAX_MARKETING_CAMPAIGNS)
            .map(|(&weeks_left, &ride_index)| MarketingCampaign {
                weeks_left,
                ride_index,
            })
            .collect(),
    };
}

// =============================================================================
// Park
// =============================================================================

/// Legacy flags as destination flags. The anti-cheat bit is dropped and the
/// single legacy "no money" bit sets both destination bits.
pub fn convert_park_flags(legacy: u32) -> ParkFlags {
    let mut flags = ParkFlags::from_bits_retain(legacy);
    flags.remove(ParkFlags::ANTI_CHEAT_DEPRECATED);
    if legacy & LEGACY_PARK_FLAG_NO_MONEY != 0 {
        flags.insert(ParkFlags::NO_MONEY | ParkFlags::NO_MONEY_SCENARIO);
    }
    flags
}

/// Copies rating, history, awards, news, guest defaults, staff colours, the
/// clock and the park name. `park.peep_spawns` and `park.map_animations` are
/// filled by [`import_park_layout`].
pub fn import_park_state(save: &LegacySave, park: &mut ParkState, strings: &mut UserStringTable) {
    let legacy = &save.park;

    park.flags = convert_park_flags(legacy.flags);
    park.unlock_all_prices = legacy.flags & LEGACY_PARK_FLAG_ENTRY_LOCKED_AT_FREE == 0;

    park.rating = legacy.rating;
    park.rating_history = copy_history(&legacy.rating_history, PARK_HISTORY_LENGTH);
    park.guests_in_park_history = copy_history(&legacy.guests_in_park_history, PARK_HISTORY_LENGTH);
    park.awards = copy_history(&legacy.awards, MAX_AWARDS);
    park.news = legacy.messages.iter().take(MAX_NEWS_ITEMS).cloned().collect();

    park.guest_initial_cash = legacy.guest_initial_cash;
    park.guest_initial_hunger = legacy.guest_initial_hunger;
    park.guest_initial_thirst = legacy.guest_initial_thirst;
    park.staff_colours = StaffColours {
        handyman: convert_colour(legacy.handyman_colour),
        mechanic: convert_colour(legacy.mechanic_colour),
        security: convert_colour(legacy.security_guard_colour),
    };

    park.ticks = legacy.ticks;
    park.rng_seeds = (legacy.random_a, legacy.random_b);
    park.date = GameDate {
        months_elapsed: legacy.month,
        month_ticks: legacy.day,
    };

    let name = save
        .user_string(legacy.name_string_index)
        .unwrap_or(save.scenario.name.as_str());
    park.name = strings.allocate(name);
}

/// Peep spawns and map animations. Animation heights are halved like every
/// other legacy height.
pub fn import_park_layout(save: &LegacySave, park: &mut ParkState) {
    park.peep_spawns = copy_history(&save.peep_spawns, MAX_PEEP_SPAWNS);
    park.map_animations = save
        .map_animations
        .iter()
        .take(MAX_MAP_ANIMATIONS)
        .map(|animation| MapAnimation {
            base_z: animation.base_z / 2,
            ..*animation
        })
        .collect();
}

// =============================================================================
// Climate
// =============================================================================

/// Copies current and target weather. Weather effects are not stored in
/// legacy saves and start out as none.
pub fn import_climate(legacy: &LegacyClimate, climate: &mut Climate) {
    *climate = Climate {
        climate: legacy.climate,
        update_timer: legacy.climate_timer,
        current: WeatherState {
            temperature: legacy.temperature,
            weather: legacy.weather,
            effect: WeatherEffect::None,
            gloom: legacy.weather_gloom,
            rain_level: legacy.rain,
        },
        next: WeatherState {
            temperature: legacy.target_temperature,
            weather: legacy.target_weather,
            effect: WeatherEffect::None,
            gloom: legacy.target_weather_gloom,
            rain_level: legacy.target_rain,
        },
    };
}

// =============================================================================
// Scenario
// =============================================================================

/// Longest digit run read from a scenario file name.
const SCENARIO_NUMBER_MAX_DIGITS: usize = 7;

/// Bundled scenario number from a file name such as `sc12.sc4`.
///
/// The name must start with `sc` (any case). The digits before the first
/// `.` are read; `sc0` is scenario 0, while a name whose digits read as
/// zero in any other way, or that has no leading digits, gives `None`.
pub fn scenario_number(file_name: &str) -> Option<u32> {
    let prefix = file_name.get(..2)?;
    if !prefix.eq_ignore_ascii_case("sc") {
        return None;
    }
    let stem: String = file_name[2..]
        .chars()
        .take_while(|&c| c != '.')
        .take(SCENARIO_NUMBER_MAX_DIGITS)
        .collect();
    if stem == "0" {
        return Some(0);
    }
    let digits: String = stem.chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(number) => Some(number),
    }
}

/// Name, objective and saved view. Details start empty. `source_file_name`
/// is the bare file name the save was read from, if known.
pub fn import_scenario(
    legacy: &LegacyScenario,
    source_file_name: Option<&str>,
    scenario: &mut ScenarioInfo,
) {
    *scenario = ScenarioInfo {
        name: legacy.name.clone(),
        details: String::new(),
        number: source_file_name.and_then(scenario_number),
        objective: ScenarioObjective {
            objective_type: legacy.objective_type,
            year: legacy.objective_years,
            currency: legacy.objective_currency,
            num_guests: legacy.objective_num_guests,
        },
        saved_view: SavedView {
            x: legacy.view_x,
            y: legacy.view_y,
            zoom: legacy.view_zoom,
            rotation: legacy.view_rotation,
        },
    };
}

/// Every scalar domain in one go.
pub fn import_scalars(save: &LegacySave, source_file_name: Option<&str>, world: &mut ParkWorld) {
    import_finance(&save.finance, &mut world.finance);
    import_park_state(save, &mut world.park, &mut world.user_strings);
    import_park_layout(save, &mut world.park);
    import_climate(&save.climate, &mut world.climate);
    import_scenario(&save.scenario, source_file_name, &mut world.scenario);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_version::FormatVersion;
    use park::colour::Colour;
    use park::park_state::{Award, PeepSpawn};

    #[test]
    fn test_anti_cheat_flag_cleared() {
        let flags = convert_park_flags(ParkFlags::ANTI_CHEAT_DEPRECATED.bits() | 1);
        assert!(!flags.contains(ParkFlags::ANTI_CHEAT_DEPRECATED));
        assert!(flags.contains(ParkFlags::PARK_OPEN));
    }

    #[test]
    fn test_no_money_sets_both_flags() {
        let flags = convert_park_flags(LEGACY_PARK_FLAG_NO_MONEY);
        assert!(flags.contains(ParkFlags::NO_MONEY));
        assert!(flags.contains(ParkFlags::NO_MONEY_SCENARIO));
        assert!(!convert_park_flags(0).contains(ParkFlags::NO_MONEY_SCENARIO));
    }

    #[test]
    fn test_unlock_all_prices_unless_entry_locked_free() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        let mut park = ParkState::default();
        let mut strings = UserStringTable::default();
        import_park_state(&save, &mut park, &mut strings);
        assert!(park.unlock_all_prices);

        save.park.flags = LEGACY_PARK_FLAG_ENTRY_LOCKED_AT_FREE;
        import_park_state(&save, &mut park, &mut strings);
        assert!(!park.unlock_all_prices);
    }

    #[test]
    fn test_park_name_prefers_user_string() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.scenario.name = "Forest Frontiers".to_owned();
        let id = save.add_user_string("Fun Land").unwrap();
        save.park.name_string_index = id;

        let mut park = ParkState::default();
        let mut strings = UserStringTable::default();
        import_park_state(&save, &mut park, &mut strings);
        assert_eq!(park.name.and_then(|id| strings.get(id)), Some("Fun Land"));
    }

    #[test]
    fn test_park_name_falls_back_to_scenario_name() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.scenario.name = "Forest Frontiers".to_owned();
        // Built-in string id: no user text.
        save.park.name_string_index = 2;

        let mut park = ParkState::default();
        let mut strings = UserStringTable::default();
        import_park_state(&save, &mut park, &mut strings);
        assert_eq!(
            park.name.and_then(|id| strings.get(id)),
            Some("Forest Frontiers")
        );
    }

    #[test]
    fn test_park_state_copies_history_and_staff() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.park.rating = 650;
        save.park.rating_history = vec![7; 40];
        save.park.awards = vec![
            Award {
                time: 3,
                award_type: 1,
            };
            6
        ];
        save.park.handyman_colour = 2;
        save.park.random_a = 11;
        save.park.random_b = 22;
        save.park.month = 17;
        save.park.day = 5000;

        let mut park = ParkState::default();
        let mut strings = UserStringTable::default();
        import_park_state(&save, &mut park, &mut strings);
        assert_eq!(park.rating, 650);
        assert_eq!(park.rating_history.len(), PARK_HISTORY_LENGTH);
        assert_eq!(park.awards.len(), MAX_AWARDS);
        assert_eq!(park.staff_colours.handyman, convert_colour(2));
        assert_eq!(park.rng_seeds, (11, 22));
        assert_eq!(
            park.date,
            GameDate {
                months_elapsed: 17,
                month_ticks: 5000
            }
        );
    }

    #[test]
    fn test_map_animation_heights_halved() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.map_animations = vec![MapAnimation {
            base_z: 14,
            animation_type: 3,
            x: 10,
            y: 20,
        }];
        save.peep_spawns = vec![PeepSpawn::default(); 3];
        let mut park = ParkState::default();
        import_park_layout(&save, &mut park);
        assert_eq!(park.map_animations[0].base_z, 7);
        assert_eq!(park.map_animations[0].animation_type, 3);
        assert_eq!((park.map_animations[0].x, park.map_animations[0].y), (10, 20));
        assert_eq!(park.peep_spawns.len(), MAX_PEEP_SPAWNS);
    }

    #[test]
    fn test_finance_copied() {
        let legacy = LegacyFinance {
            park_entrance_fee: 100,
            cash: 10_000,
            loan: 5_000,
            cash_history: vec![1; FINANCE_HISTORY_LENGTH],
            expenditure: vec![2; EXPENDITURE_WEEKS * EXPENDITURE_TYPES],
            total_expenditure: -300,
            marketing_status: [0, 3, 0, 0, 0, 0],
            marketing_assoc: [0, 9, 0, 0, 0, 0],
            ..Default::default()
        };
        let mut finance = Finance::default();
        import_finance(&legacy, &mut finance);
        assert_eq!(finance.entrance_fee, 100);
        assert_eq!(finance.cash, 10_000);
        assert_eq!(finance.initial_cash, 10_000);
        assert_eq!(finance.loan, 5_000);
        assert_eq!(finance.cash_history.len(), FINANCE_HISTORY_LENGTH);
        assert_eq!(finance.expenditure.len(), 224);
        assert_eq!(finance.current_expenditure, -300);
        assert_eq!(finance.marketing.len(), MAX_MARKETING_CAMPAIGNS);
        assert_eq!(
            finance.marketing[1],
            MarketingCampaign {
                weeks_left: 3,
                ride_index: 9
            }
        );
    }

    #[test]
    fn test_climate_effects_reset() {
        let legacy = LegacyClimate {
            climate: 1,
            temperature: 21,
            weather: 4,
            rain: 2,
            target_weather: 5,
            target_rain: 3,
            ..Default::default()
        };
        let mut climate = Climate::default();
        climate.current.effect = WeatherEffect::Storm;
        import_climate(&legacy, &mut climate);
        assert_eq!(climate.current.effect, WeatherEffect::None);
        assert_eq!(climate.next.effect, WeatherEffect::None);
        assert_eq!(climate.current.temperature, 21);
        assert_eq!(climate.current.rain_level, 2);
        assert_eq!(climate.next.weather, 5);
    }

    #[test]
    fn test_scenario_number_from_file_name() {
        assert_eq!(scenario_number("sc12.sc4"), Some(12));
        assert_eq!(scenario_number("SC7.SC4"), Some(7));
        assert_eq!(scenario_number("sc0.sc4"), Some(0));
        assert_eq!(scenario_number("sc00.sc4"), None);
        assert_eq!(scenario_number("scabc.sc4"), None);
        assert_eq!(scenario_number("park.sv4"), None);
        assert_eq!(scenario_number("s"), None);
    }

    #[test]
    fn test_scenario_details_start_empty() {
        let legacy = LegacyScenario {
            name: "Leafy Lake".to_owned(),
            objective_type: 1,
            objective_years: 3,
            objective_num_guests: 900,
            view_x: 64,
            view_zoom: 1,
            ..Default::default()
        };
        let mut scenario = ScenarioInfo {
            details: "stale".to_owned(),
            ..Default::default()
        };
        import_scenario(&legacy, Some("sc3.sc4"), &mut scenario);
        assert_eq!(scenario.name, "Leafy Lake");
        assert!(scenario.details.is_empty());
        assert_eq!(scenario.number, Some(3));
        assert_eq!(scenario.objective.num_guests, 900);
        assert_eq!(scenario.saved_view.x, 64);
        assert_eq!(scenario.saved_view.zoom, 1);
    }

    #[test]
    fn test_staff_colours_default_to_palette_black() {
        let save = LegacySave::blank(FormatVersion::Classic);
        let mut park = ParkState::default();
        let mut strings = UserStringTable::default();
        import_park_state(&save, &mut park, &mut strings);
        assert_eq!(park.staff_colours.mechanic, Colour::BLACK);
    }
}

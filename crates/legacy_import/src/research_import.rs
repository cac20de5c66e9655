// ---------------------------------------------------------------------------
// Research list reconstruction
// ---------------------------------------------------------------------------

use bevy::log::info;
use park::research::{ResearchCategories, ResearchCategory, ResearchItem, ResearchQueue};

use crate::format_version::FormatVersion;
use crate::legacy_types::save::*;
use crate::legacy_types::LegacySave;
use crate::object_mapping::ObjectMappings;
use crate::tables::rides::ride_type;
use crate::tables::scenery::DEFAULT_SCENERY_GROUPS;

/// Legacy funding bits and the destination categories each one funds.
const PRIORITY_TRANSLATION: [(u8, ResearchCategories); 5] = [
    (
        RESEARCH_FUND_ROLLERCOASTERS,
        ResearchCategories::ROLLERCOASTER,
    ),
    (
        RESEARCH_FUND_THRILL_RIDES,
        ResearchCategories::THRILL.union(ResearchCategories::WATER),
    ),
    (
        RESEARCH_FUND_GENTLE_TRANSPORT_RIDES,
        ResearchCategories::GENTLE.union(ResearchCategories::TRANSPORT),
    ),
    (RESEARCH_FUND_SHOPS, ResearchCategories::SHOP),
    (
        RESEARCH_FUND_SCENERY_THEMING,
        ResearchCategories::SCENERY_GROUP,
    ),
];

pub fn translate_priorities(legacy: u8) -> ResearchCategories {
    PRIORITY_TRANSLATION
        .iter()
        .filter(|(bit, _)| legacy & bit != 0)
        .fold(ResearchCategories::empty(), |acc, (_, categories)| {
            acc | *categories
        })
}

/// Replays the legacy invention list into a [`ResearchQueue`].
pub struct ResearchRebuilder<'a> {
    mappings: &'a ObjectMappings,
    queue: ResearchQueue,
    /// Ride object slots already listed.
    ride_entry_seen: [bool; 256],
    /// Legacy ride types whose ride entry has been replayed.
    ride_type_seen: [bool; 256],
}

impl<'a> ResearchRebuilder<'a> {
    pub fn new(mappings: &'a ObjectMappings) -> Self {
        Self {
            mappings,
            queue: ResearchQueue::default(),
            ride_entry_seen: [false; 256],
            ride_type_seen: [false; 256],
        }
    }

    pub fn rebuild(mut self, save: &LegacySave, version: FormatVersion) -> ResearchQueue {
        for slot in 0..DEFAULT_SCENERY_GROUPS.len() {
            self.queue
                .insert(ResearchItem::SceneryGroup { slot: slot as u8 }, true);
        }

        let list = save.research_list(version);
        let mut researched = true;
        for (index, item) in list.iter().enumerate() {
            if item.item == RESEARCH_END_AVAILABLE {
                researched = false;
                continue;
            }
            if item.ends_list() {
                break;
            }
            match item.category {
                RESEARCH_CATEGORY_THEME => self.insert_theme(item.item, researched),
                RESEARCH_CATEGORY_RIDE => self.insert_ride(list, index, item.item, researched),
                RESEARCH_CATEGORY_VEHICLE => {
                    if self.ride_type_seen[item.related_ride as usize] {
                        self.insert_vehicle(item, researched);
                    }
                }
                _ => {}
            }
        }

        let state = &save.research;
        self.queue.priorities = translate_priorities(state.priority);
        self.queue.funding_level = state.level;
        self.queue.progress = state.progress;
        self.queue.next_item = state.next_item;
        self.queue.next_category = state.next_category;
        self.queue
    }

    fn insert_theme(&mut self, theme: u8, researched: bool) {
        if let Some(slot) = self.mappings.scenery_theme_map.resolve(theme as usize) {
            self.queue
                .insert(ResearchItem::SceneryGroup { slot }, researched);
        }
    }

    /// Lists the vehicles offered for `legacy_ride` earlier in the list, or
    /// the ride type's own object when the list offers none at all.
    fn insert_ride(
        &mut self,
        list: &[LegacyResearchItem],
        index: usize,
        legacy_ride: u8,
        researched: bool,
    ) {
        self.ride_type_seen[legacy_ride as usize] = true;
        let mut vehicles = 0;
        for (other_index, other) in list.iter().enumerate() {
            if other.item == RESEARCH_END_RESEARCHABLE || other.item == RESEARCH_END_AVAILABLE {
                break;
            }
            if other.category == RESEARCH_CATEGORY_VEHICLE && other.related_ride == legacy_ride {
                if other_index < index {
                    self.insert_vehicle(other, researched);
                }
                vehicles += 1;
            }
        }
        if vehicles == 0 {
            if let Some(slot) = self.mappings.ride_type_map.resolve(legacy_ride as usize) {
                self.insert_ride_entry(slot, legacy_ride, researched);
            }
        }
    }

    fn insert_vehicle(&mut self, item: &LegacyResearchItem, researched: bool) {
        if let Some(slot) = self.mappings.vehicle_type_map.resolve(item.item as usize) {
            self.insert_ride_entry(slot, item.related_ride, researched);
        }
    }

    fn insert_ride_entry(&mut self, slot: u8, legacy_ride: u8, researched: bool) {
        if std::mem::replace(&mut self.ride_entry_seen[slot as usize], true) {
            return;
        }
        let category = ride_type(legacy_ride)
            .map(|info| info.category)
            .unwrap_or(ResearchCategory::Gentle);
        self.queue
            .insert(ResearchItem::RideEntry { slot, category }, researched);
    }
}

/// Rebuilds `research` from the save. Returns the number of entries.
pub fn import_research(
    save: &LegacySave,
    version: FormatVersion,
    mappings: &ObjectMappings,
    research: &mut ResearchQueue,
) -> usize {
    *research = ResearchRebuilder::new(mappings).rebuild(save, version);
    info!(
        "Rebuilt research list: {} invented, {} to research",
        research.researched().count(),
        research.to_research().count()
    );
    research.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_mapping::ObjectMappingResolver;
    use park::objects::ObjectType;

    const CORKSCREW: u8 = 19;
    const MAZE: u8 = 20;

    fn rebuild(items: Vec<LegacyResearchItem>) -> (ResearchQueue, ObjectMappings) {
        let mut save = LegacySave::blank(FormatVersion::AddedAttractions);
        save.research_items = items;
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        let queue = ResearchRebuilder::new(&mappings).rebuild(&save, FormatVersion::AddedAttractions);
        (queue, mappings)
    }

    #[test]
    fn test_default_groups_first_and_researched() {
        let (queue, _) = rebuild(vec![LegacyResearchItem::marker(RESEARCH_END)]);
        assert_eq!(queue.len(), 6);
        for (i, entry) in queue.entries().iter().enumerate() {
            assert!(entry.researched);
            assert_eq!(entry.item, ResearchItem::SceneryGroup { slot: i as u8 });
        }
    }

    #[test]
    fn test_end_available_splits_partitions() {
        let (queue, mappings) = rebuild(vec![
            LegacyResearchItem::ride(MAZE),
            LegacyResearchItem::marker(RESEARCH_END_AVAILABLE),
            LegacyResearchItem::theme(3),
            LegacyResearchItem::marker(RESEARCH_END),
            LegacyResearchItem::theme(4),
        ]);
        let maze_slot = mappings.ride_type_map.resolve(MAZE as usize).unwrap();
        let theme_slot = mappings.scenery_theme_map.resolve(3).unwrap();
        let researched: Vec<_> = queue.researched().copied().collect();
        assert_eq!(
            researched.last(),
            Some(&ResearchItem::RideEntry {
                slot: maze_slot,
                category: ResearchCategory::Gentle
            })
        );
        let to_research: Vec<_> = queue.to_research().copied().collect();
        assert_eq!(
            to_research,
            vec![ResearchItem::SceneryGroup { slot: theme_slot }]
        );
        // Theme 4 comes after the end marker and is never listed.
        assert_eq!(queue.len(), 8);
    }

    #[test]
    fn test_only_earlier_vehicles_are_listed_with_the_ride() {
        let (queue, mappings) = rebuild(vec![
            LegacyResearchItem::vehicle(31, CORKSCREW),
            LegacyResearchItem::ride(CORKSCREW),
            LegacyResearchItem::vehicle(33, CORKSCREW),
            LegacyResearchItem::marker(RESEARCH_END_AVAILABLE),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let early = mappings.vehicle_type_map.resolve(31).unwrap();
        let late = mappings.vehicle_type_map.resolve(33).unwrap();
        let ride_slots: Vec<u8> = queue
            .entries()
            .iter()
            .filter(|e| e.item.object_type() == ObjectType::Ride)
            .map(|e| e.item.slot())
            .collect();
        // The later vehicle is added by its own entry once the ride is seen.
        assert_eq!(ride_slots, vec![early, late]);
        assert!(queue
            .entries()
            .iter()
            .all(|e| e.item.category() != ResearchCategory::Gentle));
    }

    #[test]
    fn test_vehicle_before_its_ride_is_skipped() {
        let (queue, _) = rebuild(vec![
            LegacyResearchItem::vehicle(31, CORKSCREW),
            LegacyResearchItem::marker(RESEARCH_END_AVAILABLE),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_reserved_themes_and_special_items_are_ignored() {
        let special = LegacyResearchItem {
            item: 1,
            related_ride: 0,
            category: RESEARCH_CATEGORY_SPECIAL,
            flags: 0,
        };
        let (queue, _) = rebuild(vec![
            LegacyResearchItem::theme(5),
            special,
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        assert_eq!(queue.len(), 6);
    }

    #[test]
    fn test_ride_entries_are_not_duplicated() {
        let (queue, _) = rebuild(vec![
            LegacyResearchItem::ride(MAZE),
            LegacyResearchItem::ride(MAZE),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        assert_eq!(queue.len(), 7);
    }

    #[test]
    fn test_priority_translation() {
        let categories =
            translate_priorities(RESEARCH_FUND_THRILL_RIDES | RESEARCH_FUND_GENTLE_TRANSPORT_RIDES);
        assert_eq!(
            categories,
            ResearchCategories::THRILL
                | ResearchCategories::WATER
                | ResearchCategories::GENTLE
                | ResearchCategories::TRANSPORT
        );
        assert_eq!(translate_priorities(0), ResearchCategories::empty());
    }

    #[test]
    fn test_funding_state_copied() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.research = LegacyResearchState {
            priority: RESEARCH_FUND_SHOPS,
            level: 2,
            progress: 4000,
            next_item: 7,
            next_category: 1,
        };
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::Classic);
        let mut queue = ResearchQueue::default();
        let count = import_research(&save, FormatVersion::Classic, &mappings, &mut queue);
        assert_eq!(count, 6);
        assert_eq!(queue.priorities, ResearchCategories::SHOP);
        assert_eq!(
            (queue.funding_level, queue.progress, queue.next_item, queue.next_category),
            (2, 4000, 7, 1)
        );
    }
}

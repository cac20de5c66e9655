// ---------------------------------------------------------------------------
// Object discovery: which objects a legacy park needs, and in which slots
// ---------------------------------------------------------------------------
//
// Discovery walks the save in a fixed order (research list, map, rides,
// scenery group catalogue) so identical saves always produce identical slot
// numbers.

use bevy::log::warn;
use park::colour::Colour;
use park::objects::{ObjectIdentifier, ObjectRepository, ObjectType};

use crate::entry_list::{EntryList, EntryMap};
use crate::format_version::FormatVersion;
use crate::import_error::{ImportDiagnostic, ImportError};
use crate::legacy_types::map_element::{
    legacy_tiles, LegacyElementType, LegacyMapElement, LEGACY_ENTRANCE_PARK_ENTRANCE,
};
use crate::legacy_types::save::{
    LegacyResearchItem, LegacySave, RESEARCH_CATEGORY_RIDE, RESEARCH_CATEGORY_THEME,
    RESEARCH_CATEGORY_VEHICLE, RESEARCH_END_AVAILABLE, RESEARCH_END_RESEARCHABLE,
};
use crate::tables::paths::{
    normalise_path_addition, path_addition_object, path_object, DEFAULT_PATHS,
    PATH_ADDITION_NONE, PATH_TARMAC_GREY,
};
use crate::tables::rides::{
    ride_type_object, ride_type_uses_vehicles, vehicle_object, RIDE_TYPE_NULL,
};
use crate::tables::scenery::{
    large_scenery_object, small_scenery_object, theme_group, theme_objects, ThemeGroup,
    DEFAULT_SCENERY_GROUPS, THEME_GENERAL, THEME_PAGODA,
};
use crate::tables::walls::{convert_wall, wall_object};

/// Legacy codes per type map. Large scenery codes are 10 bits wide.
pub const TYPE_MAP_LEN: usize = 256;
pub const LARGE_SCENERY_MAP_LEN: usize = 1024;

/// Every entry list and type map produced by discovery. Read-only once
/// [`ObjectMappingResolver::resolve`] returns.
#[derive(Debug, Clone)]
pub struct ObjectMappings {
    pub ride_entries: EntryList,
    pub small_scenery_entries: EntryList,
    pub large_scenery_entries: EntryList,
    pub wall_entries: EntryList,
    pub path_entries: EntryList,
    pub path_addition_entries: EntryList,
    pub scenery_group_entries: EntryList,

    pub ride_type_map: EntryMap<TYPE_MAP_LEN>,
    pub vehicle_type_map: EntryMap<TYPE_MAP_LEN>,
    pub small_scenery_map: EntryMap<TYPE_MAP_LEN>,
    pub large_scenery_map: EntryMap<LARGE_SCENERY_MAP_LEN>,
    pub wall_map: EntryMap<TYPE_MAP_LEN>,
    pub path_map: EntryMap<TYPE_MAP_LEN>,
    pub path_addition_map: EntryMap<TYPE_MAP_LEN>,
    pub scenery_theme_map: EntryMap<TYPE_MAP_LEN>,

    /// Soft failures met during discovery.
    pub diagnostics: Vec<ImportDiagnostic>,
    /// First object refused by a full domain other than scenery groups.
    pub overflow: Option<(ObjectType, ObjectIdentifier)>,
}

impl Default for ObjectMappings {
    fn default() -> Self {
        Self {
            ride_entries: EntryList::new(ObjectType::Ride),
            small_scenery_entries: EntryList::new(ObjectType::SmallScenery),
            large_scenery_entries: EntryList::new(ObjectType::LargeScenery),
            wall_entries: EntryList::new(ObjectType::Wall),
            path_entries: EntryList::new(ObjectType::Path),
            path_addition_entries: EntryList::new(ObjectType::PathAddition),
            scenery_group_entries: EntryList::new(ObjectType::SceneryGroup),
            ride_type_map: EntryMap::default(),
            vehicle_type_map: EntryMap::default(),
            small_scenery_map: EntryMap::default(),
            large_scenery_map: EntryMap::default(),
            wall_map: EntryMap::default(),
            path_map: EntryMap::default(),
            path_addition_map: EntryMap::default(),
            scenery_theme_map: EntryMap::default(),
            diagnostics: Vec::new(),
            overflow: None,
        }
    }
}

impl ObjectMappings {
    /// Entry lists in the order their objects are loaded.
    pub fn lists(&self) -> [&EntryList; 7] {
        [
            &self.ride_entries,
            &self.small_scenery_entries,
            &self.large_scenery_entries,
            &self.wall_entries,
            &self.path_entries,
            &self.path_addition_entries,
            &self.scenery_group_entries,
        ]
    }

    pub fn list(&self, object_type: ObjectType) -> Option<&EntryList> {
        self.lists()
            .into_iter()
            .find(|list| list.object_type() == object_type)
    }

    fn list_mut(&mut self, object_type: ObjectType) -> Option<&mut EntryList> {
        match object_type {
            ObjectType::Ride => Some(&mut self.ride_entries),
            ObjectType::SmallScenery => Some(&mut self.small_scenery_entries),
            ObjectType::LargeScenery => Some(&mut self.large_scenery_entries),
            ObjectType::Wall => Some(&mut self.wall_entries),
            ObjectType::Path => Some(&mut self.path_entries),
            ObjectType::PathAddition => Some(&mut self.path_addition_entries),
            ObjectType::SceneryGroup => Some(&mut self.scenery_group_entries),
            _ => None,
        }
    }

    /// Fails when discovery needed more objects in a domain than it holds.
    /// A full scenery group list is only a diagnostic and never fails here.
    pub fn check_capacity(&self) -> Result<(), ImportError> {
        match self.overflow {
            Some((object_type, identifier)) => Err(ImportError::CapacityExceeded {
                object_type,
                identifier,
            }),
            None => Ok(()),
        }
    }

    /// Slot of `identifier` in its domain. A full scenery group list records
    /// a diagnostic; any other full domain records the overflow.
    fn add_entry(&mut self, object_type: ObjectType, identifier: ObjectIdentifier) -> Option<u8> {
        let slot = self.list_mut(object_type)?.try_add(identifier);
        if slot.is_some() {
            return slot;
        }
        if object_type == ObjectType::SceneryGroup {
            warn!(
                "More than {} {object_type} objects, skipping [{identifier}]",
                object_type.capacity()
            );
            self.diagnostics.push(ImportDiagnostic::CapacityExceeded {
                object_type,
                identifier,
            });
        } else if self.overflow.is_none() {
            self.overflow = Some((object_type, identifier));
        }
        None
    }

    fn unknown(&mut self, domain: ObjectType, legacy_type: u16) {
        let diagnostic = ImportDiagnostic::UnknownLegacyType {
            domain,
            legacy_type,
        };
        if !self.diagnostics.contains(&diagnostic) {
            warn!("No {domain} object for legacy type {legacy_type}");
            self.diagnostics.push(diagnostic);
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

pub struct ObjectMappingResolver<'a> {
    save: &'a LegacySave,
    version: FormatVersion,
    repository: Option<&'a dyn ObjectRepository>,
    mappings: ObjectMappings,
}

impl<'a> ObjectMappingResolver<'a> {
    /// Discovers every object `save` refers to, taking every catalogue
    /// object as installed. Pure: nothing is loaded.
    pub fn resolve(save: &'a LegacySave, version: FormatVersion) -> ObjectMappings {
        Self::run(save, version, None)
    }

    /// Like [`resolve`](Self::resolve), but catalogue objects missing from
    /// `repository` are left out instead of failing the load later.
    pub fn resolve_installed(
        save: &'a LegacySave,
        version: FormatVersion,
        repository: &'a dyn ObjectRepository,
    ) -> ObjectMappings {
        Self::run(save, version, Some(repository))
    }

    fn run(
        save: &'a LegacySave,
        version: FormatVersion,
        repository: Option<&'a dyn ObjectRepository>,
    ) -> ObjectMappings {
        let mut resolver = Self {
            save,
            version,
            repository,
            mappings: ObjectMappings::default(),
        };
        resolver.add_defaults();
        resolver.add_from_research_list();
        resolver.add_from_map();
        resolver.add_from_rides();
        resolver.add_from_scenery_groups();
        resolver.mappings
    }

    fn add_defaults(&mut self) {
        for identifier in DEFAULT_SCENERY_GROUPS {
            self.mappings.add_entry(ObjectType::SceneryGroup, identifier);
        }
        for identifier in DEFAULT_PATHS {
            self.mappings.add_entry(ObjectType::Path, identifier);
        }
    }

    // -- Research list --

    fn add_from_research_list(&mut self) {
        let save = self.save;
        let list = save.research_list(self.version);
        for item in list {
            if item.item == RESEARCH_END_AVAILABLE {
                continue;
            }
            if item.ends_list() {
                break;
            }
            match item.category {
                RESEARCH_CATEGORY_RIDE => self.add_ride_from_research(list, item.item),
                RESEARCH_CATEGORY_THEME => self.add_theme(item.item),
                _ => {}
            }
        }
    }

    /// Registers every vehicle the available part of the list offers for
    /// `ride_type`, or the ride type's own object when it offers none.
    fn add_ride_from_research(&mut self, list: &[LegacyResearchItem], ride_type: u8) {
        let mut vehicles = 0;
        for other in list {
            if other.item == RESEARCH_END_RESEARCHABLE || other.item == RESEARCH_END_AVAILABLE {
                break;
            }
            if other.category == RESEARCH_CATEGORY_VEHICLE && other.related_ride == ride_type {
                self.add_vehicle_type(ride_type, other.item);
                vehicles += 1;
            }
        }
        if vehicles == 0 {
            self.add_ride_type(ride_type);
        }
    }

    fn add_theme(&mut self, theme: u8) {
        if !self.mappings.scenery_theme_map.is_unassigned(theme as usize) {
            return;
        }
        match theme_group(theme) {
            Some(ThemeGroup::Reserved) => {
                self.mappings.scenery_theme_map.reserve(theme as usize);
            }
            Some(ThemeGroup::Group(identifier)) => {
                if let Some(slot) = self.mappings.add_entry(ObjectType::SceneryGroup, identifier) {
                    self.mappings.scenery_theme_map.assign(theme as usize, slot);
                }
            }
            None => self
                .mappings
                .unknown(ObjectType::SceneryGroup, u16::from(theme)),
        }
    }

    // -- Map --

    fn add_from_map(&mut self) {
        let save = self.save;
        for tile in legacy_tiles(&save.map_elements) {
            for element in tile {
                self.add_map_element(element);
            }
        }
    }

    fn add_map_element(&mut self, element: &LegacyMapElement) {
        match element.element_type() {
            Some(LegacyElementType::Path) => {
                self.add_path(element.path_code());
                let addition = element.path_addition();
                if addition != PATH_ADDITION_NONE {
                    self.add_path_addition(addition);
                }
            }
            Some(LegacyElementType::SmallScenery) => {
                self.add_small_scenery(element.small_scenery_type());
            }
            Some(LegacyElementType::LargeScenery) => {
                self.add_large_scenery(element.large_scenery_type());
            }
            Some(LegacyElementType::Fence) => {
                for edge in element.wall_edges().into_iter().flatten() {
                    self.add_wall(edge.code);
                    let converted = convert_wall(edge.code, Colour::BLACK).code;
                    if converted != edge.code {
                        self.add_wall(converted);
                    }
                }
            }
            Some(LegacyElementType::Entrance)
                if element.entrance_type() == LEGACY_ENTRANCE_PARK_ENTRANCE =>
            {
                self.add_path(entrance_path_code(element));
            }
            _ => {}
        }
    }

    fn add_path(&mut self, code: u8) {
        if !self.mappings.path_map.is_unassigned(code as usize) {
            return;
        }
        let Some(identifier) = path_object(code) else {
            self.mappings.unknown(ObjectType::Path, u16::from(code));
            return;
        };
        if let Some(slot) = self.mappings.add_entry(ObjectType::Path, identifier) {
            self.mappings.path_map.assign(code as usize, slot);
        }
    }

    /// Broken variants share the slot of their intact addition.
    fn add_path_addition(&mut self, code: u8) {
        let normalised = normalise_path_addition(code);
        if self.mappings.path_addition_map.is_unassigned(normalised as usize) {
            let Some(identifier) = path_addition_object(normalised) else {
                self.mappings
                    .unknown(ObjectType::PathAddition, u16::from(code));
                return;
            };
            if let Some(slot) = self
                .mappings
                .add_entry(ObjectType::PathAddition, identifier)
            {
                self.mappings
                    .path_addition_map
                    .assign(normalised as usize, slot);
            }
        }
        if let Some(slot) = self.mappings.path_addition_map.resolve(normalised as usize) {
            self.mappings.path_addition_map.assign(code as usize, slot);
        }
    }

    fn add_small_scenery(&mut self, code: u8) {
        if !self.mappings.small_scenery_map.is_unassigned(code as usize) {
            return;
        }
        let Some(identifier) = small_scenery_object(code) else {
            self.mappings
                .unknown(ObjectType::SmallScenery, u16::from(code));
            return;
        };
        if let Some(slot) = self.mappings.add_entry(ObjectType::SmallScenery, identifier) {
            self.mappings.small_scenery_map.assign(code as usize, slot);
        }
    }

    fn add_large_scenery(&mut self, code: u16) {
        if !self.mappings.large_scenery_map.is_unassigned(code as usize) {
            return;
        }
        let Some(identifier) = large_scenery_object(code) else {
            self.mappings.unknown(ObjectType::LargeScenery, code);
            return;
        };
        if let Some(slot) = self.mappings.add_entry(ObjectType::LargeScenery, identifier) {
            self.mappings.large_scenery_map.assign(code as usize, slot);
        }
    }

    fn add_wall(&mut self, code: u8) {
        if !self.mappings.wall_map.is_unassigned(code as usize) {
            return;
        }
        let Some(identifier) = wall_object(code) else {
            self.mappings.unknown(ObjectType::Wall, u16::from(code));
            return;
        };
        if let Some(slot) = self.mappings.add_entry(ObjectType::Wall, identifier) {
            self.mappings.wall_map.assign(code as usize, slot);
        }
    }

    // -- Rides --

    fn add_from_rides(&mut self) {
        let save = self.save;
        for ride in save.rides.iter().filter(|r| !r.is_null()) {
            if ride_type_uses_vehicles(ride.ride_type) {
                self.add_vehicle_type(ride.ride_type, ride.vehicle_type);
            } else {
                self.add_ride_type(ride.ride_type);
            }
        }
    }

    fn add_ride_type(&mut self, ride_type: u8) {
        if !self.mappings.ride_type_map.is_unassigned(ride_type as usize) {
            return;
        }
        let Some(identifier) = ride_type_object(ride_type) else {
            self.mappings.unknown(ObjectType::Ride, u16::from(ride_type));
            return;
        };
        if let Some(slot) = self.mappings.add_entry(ObjectType::Ride, identifier) {
            self.mappings.ride_type_map.assign(ride_type as usize, slot);
        }
    }

    /// The vehicle decides the object. The ride type keeps the first vehicle
    /// it was registered with.
    fn add_vehicle_type(&mut self, ride_type: u8, vehicle_type: u8) {
        if !self
            .mappings
            .vehicle_type_map
            .is_unassigned(vehicle_type as usize)
        {
            return;
        }
        let Some(identifier) = vehicle_object(vehicle_type) else {
            self.mappings
                .unknown(ObjectType::Ride, u16::from(vehicle_type));
            return;
        };
        if let Some(slot) = self.mappings.add_entry(ObjectType::Ride, identifier) {
            self.mappings
                .vehicle_type_map
                .assign(vehicle_type as usize, slot);
            if ride_type != RIDE_TYPE_NULL {
                self.mappings.ride_type_map.assign(ride_type as usize, slot);
            }
        }
    }

    // -- Scenery group catalogue --

    /// Adds the installed objects of every theme in use. Domains that fill
    /// up drop the rest without a diagnostic.
    fn add_from_scenery_groups(&mut self) {
        for theme in THEME_GENERAL..=THEME_PAGODA {
            if theme != THEME_GENERAL
                && self.mappings.scenery_theme_map.is_unassigned(theme as usize)
            {
                continue;
            }
            for entry in theme_objects(theme) {
                if !self.is_installed(entry.object_type, &entry.identifier) {
                    continue;
                }
                if let Some(list) = self.mappings.list_mut(entry.object_type) {
                    list.try_add(entry.identifier);
                }
            }
        }
    }

    fn is_installed(&self, object_type: ObjectType, identifier: &ObjectIdentifier) -> bool {
        self.repository
            .map_or(true, |repository| repository.is_installed(object_type, identifier))
    }
}

/// Path code under a park entrance; 0 means grey tarmac.
pub fn entrance_path_code(element: &LegacyMapElement) -> u8 {
    match element.entrance_path_type() {
        0 => PATH_TARMAC_GREY,
        code => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry_list::EntrySlot;
    use crate::legacy_types::save::{RESEARCH_END, RESEARCH_END_RESEARCHABLE};
    use crate::legacy_types::LegacyRide;
    use crate::tables::paths::{PATH_ADDITION_BROKEN_LAMP_1, PATH_ADDITION_LAMP_1};

    fn id(name: &'static str) -> ObjectIdentifier {
        ObjectIdentifier::from_static(name)
    }

    fn save_with_research(items: Vec<LegacyResearchItem>) -> LegacySave {
        let mut save = LegacySave::blank(FormatVersion::AddedAttractions);
        save.research_items = items;
        save
    }

    #[test]
    fn test_defaults_come_first() {
        let save = LegacySave::blank(FormatVersion::Classic);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::Classic);
        assert_eq!(mappings.scenery_group_entries.entries(), &DEFAULT_SCENERY_GROUPS);
        assert_eq!(mappings.path_entries.entries(), &DEFAULT_PATHS);
        assert!(mappings.ride_entries.is_empty());
        assert!(mappings.diagnostics.is_empty());
    }

    #[test]
    fn test_research_ride_prefers_listed_vehicles() {
        let save = save_with_research(vec![
            LegacyResearchItem::ride(0),
            LegacyResearchItem::vehicle(1, 0),
            LegacyResearchItem::vehicle(0, 0),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        let first = vehicle_object(1).unwrap();
        let second = vehicle_object(0).unwrap();
        assert_eq!(mappings.ride_entries.entries(), &[first, second]);
        // The ride type keeps the first vehicle.
        assert_eq!(mappings.ride_type_map.get(0), EntrySlot::Assigned(0));
        assert_eq!(mappings.vehicle_type_map.get(0), EntrySlot::Assigned(1));
    }

    #[test]
    fn test_research_ride_without_vehicles_uses_default_object() {
        let save = save_with_research(vec![
            LegacyResearchItem::ride(20),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        assert_eq!(
            mappings.ride_entries.entries(),
            &[ride_type_object(20).unwrap()]
        );
        assert_eq!(mappings.ride_type_map.resolve(20), Some(0));
    }

    #[test]
    fn test_vehicles_after_end_available_are_not_scanned() {
        let save = save_with_research(vec![
            LegacyResearchItem::ride(0),
            LegacyResearchItem::marker(RESEARCH_END_AVAILABLE),
            LegacyResearchItem::vehicle(1, 0),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        assert_eq!(
            mappings.ride_entries.entries(),
            &[ride_type_object(0).unwrap()]
        );
    }

    #[test]
    fn test_research_walk_stops_at_end_researchable() {
        let save = save_with_research(vec![
            LegacyResearchItem::theme(1),
            LegacyResearchItem::marker(RESEARCH_END_RESEARCHABLE),
            LegacyResearchItem::theme(2),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        assert_eq!(mappings.scenery_theme_map.resolve(1), Some(6));
        assert!(mappings.scenery_theme_map.is_unassigned(2));
    }

    #[test]
    fn test_reserved_themes_take_no_slot() {
        let save = save_with_research(vec![
            LegacyResearchItem::theme(5),
            LegacyResearchItem::theme(3),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        assert_eq!(mappings.scenery_theme_map.get(5), EntrySlot::Reserved);
        assert_eq!(mappings.scenery_theme_map.get(3), EntrySlot::Assigned(6));
        assert_eq!(mappings.scenery_group_entries.len(), 7);
    }

    #[test]
    fn test_scenery_group_capacity_is_reported() {
        // Fifteen real themes on top of the six defaults overflow by two.
        let mut items: Vec<_> = (1..=THEME_PAGODA).map(LegacyResearchItem::theme).collect();
        items.push(LegacyResearchItem::marker(RESEARCH_END));
        let save = save_with_research(items);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        assert_eq!(mappings.scenery_group_entries.len(), 19);
        assert_eq!(
            mappings.diagnostics,
            vec![
                ImportDiagnostic::CapacityExceeded {
                    object_type: ObjectType::SceneryGroup,
                    identifier: id("SCGURBAN"),
                },
                ImportDiagnostic::CapacityExceeded {
                    object_type: ObjectType::SceneryGroup,
                    identifier: id("SCGORIEN"),
                },
            ]
        );
        assert!(mappings.scenery_theme_map.is_unassigned(THEME_PAGODA as usize));
        assert_eq!(mappings.scenery_theme_map.resolve(15), Some(18));
        assert!(mappings.check_capacity().is_ok());
    }

    #[test]
    fn test_full_path_list_is_an_error() {
        let mut mappings = ObjectMappings::default();
        for i in 0..ObjectType::Path.capacity() {
            let name = ObjectIdentifier::new(&format!("PATH{i}")).unwrap();
            assert!(mappings.add_entry(ObjectType::Path, name).is_some());
        }
        assert!(mappings.check_capacity().is_ok());

        assert_eq!(mappings.add_entry(ObjectType::Path, id("PATHXTRA")), None);
        assert_eq!(mappings.add_entry(ObjectType::Path, id("PATHMORE")), None);
        // No soft diagnostic; the first refused object is kept for the error.
        assert!(mappings.diagnostics.is_empty());
        match mappings.check_capacity() {
            Err(ImportError::CapacityExceeded {
                object_type,
                identifier,
            }) => {
                assert_eq!(object_type, ObjectType::Path);
                assert_eq!(identifier, id("PATHXTRA"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_catalogue_skips_objects_not_installed() {
        let save = LegacySave::blank(FormatVersion::Classic);
        let mut catalog = park::objects::ObjectCatalog::permissive();
        catalog.deny(id("TWW"));
        let all = ObjectMappingResolver::resolve(&save, FormatVersion::Classic);
        let installed =
            ObjectMappingResolver::resolve_installed(&save, FormatVersion::Classic, &catalog);

        assert!(all.small_scenery_entries.index_of(&id("TWW")).is_some());
        assert_eq!(installed.small_scenery_entries.index_of(&id("TWW")), None);
        assert_eq!(
            installed.small_scenery_entries.len(),
            all.small_scenery_entries.len() - 1
        );
        assert!(installed.diagnostics.is_empty());
    }

    #[test]
    fn test_broken_additions_share_a_slot() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.map_elements[0] =
            LegacyMapElement::new(LegacyElementType::Path, 4, 8, [0x10, PATH_ADDITION_BROKEN_LAMP_1, 0, 0]);
        save.map_elements.insert(
            1,
            LegacyMapElement::new(LegacyElementType::Path, 4, 8, [0x10, PATH_ADDITION_LAMP_1, 0, 0])
                .last_for_tile(),
        );
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::Classic);
        assert_eq!(mappings.path_addition_entries.len(), 1);
        assert_eq!(
            mappings.path_addition_map.resolve(PATH_ADDITION_BROKEN_LAMP_1 as usize),
            mappings.path_addition_map.resolve(PATH_ADDITION_LAMP_1 as usize)
        );
    }

    #[test]
    fn test_rides_register_vehicle_objects() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.rides[4] = LegacyRide {
            ride_type: 0,
            vehicle_type: 1,
            ..LegacyRide::default()
        };
        save.rides[9] = LegacyRide {
            ride_type: 20,
            ..LegacyRide::default()
        };
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::Classic);
        assert_eq!(mappings.vehicle_type_map.resolve(1), Some(0));
        assert_eq!(mappings.ride_type_map.resolve(0), Some(0));
        assert_eq!(mappings.ride_type_map.resolve(20), Some(1));
    }

    #[test]
    fn test_general_theme_catalogue_is_always_added() {
        let save = LegacySave::blank(FormatVersion::Classic);
        let mappings = ObjectMappingResolver::resolve(&save, FormatVersion::Classic);
        let expected: std::collections::HashSet<_> = theme_objects(THEME_GENERAL)
            .iter()
            .filter(|e| e.object_type == ObjectType::SmallScenery)
            .map(|e| e.identifier)
            .collect();
        let expected = expected.len();
        assert!(expected > 0);
        assert_eq!(mappings.small_scenery_entries.len(), expected);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let save = save_with_research(vec![
            LegacyResearchItem::theme(9),
            LegacyResearchItem::ride(20),
            LegacyResearchItem::marker(RESEARCH_END),
        ]);
        let a = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        let b = ObjectMappingResolver::resolve(&save, FormatVersion::AddedAttractions);
        for (x, y) in a.lists().into_iter().zip(b.lists()) {
            assert_eq!(x, y);
        }
    }
}

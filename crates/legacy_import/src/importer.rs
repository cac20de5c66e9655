// ---------------------------------------------------------------------------
// Importer: the whole legacy park pipeline as one synchronous call
// ---------------------------------------------------------------------------

use std::path::Path;

use bevy::log::{info, warn};
use park::config::DEFAULT_MAP_SIZE;
use park::objects::ObjectRepository;
use park::ParkWorld;

use crate::format_version::FormatVersion;
use crate::import_error::{ImportError, ImportReport};
use crate::legacy_types::LegacySave;
use crate::map_import::import_map;
use crate::object_loading::load_objects;
use crate::object_mapping::ObjectMappingResolver;
use crate::research_import::import_research;
use crate::ride_import::import_rides;
use crate::scalar_import::import_scalars;
use crate::sprite_import::{import_sprites, place_displaced_peeps};

/// Reads a legacy container from disk. Decompression and checksums live
/// behind this trait; the importer only sees the decoded save.
pub trait LegacyReader {
    fn read(&self, path: &Path) -> Result<(LegacySave, FormatVersion), String>;
}

/// Knobs for [`import_park_with`]. The defaults import everything the save
/// holds.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Playable map size to use instead of the one in the save.
    pub map_size: Option<u16>,
    /// Put peeps taken off rides onto a nearby path.
    pub autoposition_displaced_peeps: bool,
    pub keep_litter: bool,
    /// File name the save came from, used for the bundled scenario number.
    pub source_file_name: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            map_size: None,
            autoposition_displaced_peeps: true,
            keep_litter: true,
            source_file_name: None,
        }
    }
}

impl ImportOptions {
    fn map_size(&self, save: &LegacySave) -> u16 {
        match self.map_size.unwrap_or(save.map_size) {
            0 => DEFAULT_MAP_SIZE,
            size => size,
        }
    }
}

/// Imports `save` into `world` with default options.
pub fn import_park(
    save: &LegacySave,
    version: FormatVersion,
    repository: &mut dyn ObjectRepository,
    world: &mut ParkWorld,
) -> Result<ImportReport, ImportError> {
    import_park_with(save, version, repository, world, &ImportOptions::default())
}

/// Replaces `world` with the park described by `save`.
///
/// On error `world` holds a partial import and must be thrown away.
pub fn import_park_with(
    save: &LegacySave,
    version: FormatVersion,
    repository: &mut dyn ObjectRepository,
    world: &mut ParkWorld,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    info!("Importing {version} park");
    let mut report = ImportReport::new(version);

    // -- Stage 1: Reset world --
    *world = ParkWorld::new(options.map_size(save));

    // -- Stage 2: Discover objects --
    let mut mappings = ObjectMappingResolver::resolve_installed(save, version, &*repository);
    mappings.check_capacity()?;
    report.diagnostics.append(&mut mappings.diagnostics);

    // -- Stage 3: Load objects --
    report.objects_loaded = load_objects(
        &mappings,
        repository,
        &mut world.objects,
        &mut report.diagnostics,
    )?;

    // -- Stage 4: Rides, sprites, map --
    report.rides_imported = import_rides(save, version, &mappings, world)?;

    let sprites = import_sprites(
        save,
        version,
        options.keep_litter,
        world,
        &mut report.diagnostics,
    );
    report.peeps_imported = sprites.peeps;
    report.litter_imported = sprites.litter;
    report.misc_sprites_imported = sprites.misc;

    let map = import_map(save, &mappings, world);
    report.tile_elements = map.elements;

    // Needs the finished map to find paths.
    if options.autoposition_displaced_peeps && !sprites.displaced_peeps.is_empty() {
        let placed = place_displaced_peeps(world, &sprites.displaced_peeps);
        info!(
            "Placed {placed} of {} peeps taken off rides",
            sprites.displaced_peeps.len()
        );
    }

    // -- Stage 5: Research --
    report.research_entries = import_research(save, version, &mappings, &mut world.research);

    // -- Stage 6: Scalars --
    import_scalars(save, options.source_file_name.as_deref(), world);

    for diagnostic in &report.diagnostics {
        warn!("{diagnostic}");
    }
    info!(
        "Imported park: {} rides, {} peeps, {} tile elements, {} diagnostics",
        report.rides_imported,
        report.peeps_imported,
        report.tile_elements,
        report.diagnostics.len()
    );
    Ok(report)
}

/// Reads `path` through `reader` and imports it into a fresh world. The
/// file name feeds the scenario number unless `options` already names one.
pub fn import_file(
    reader: &dyn LegacyReader,
    path: &Path,
    repository: &mut dyn ObjectRepository,
    options: &ImportOptions,
) -> Result<(ParkWorld, ImportReport), ImportError> {
    let (save, version) = reader.read(path).map_err(ImportError::LoadFailure)?;

    let mut options = options.clone();
    if options.source_file_name.is_none() {
        options.source_file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned);
    }

    let mut world = ParkWorld::default();
    let report = import_park_with(&save, version, repository, &mut world, &options)?;
    Ok((world, report))
}

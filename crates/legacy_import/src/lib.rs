//! Importer for legacy fixed-layout park saves and scenarios.
//!
//! [`import_park`] turns a decoded [`LegacySave`] into a [`park::ParkWorld`]:
//! it discovers and loads the objects the save refers to, transcodes rides,
//! sprites and map elements, runs the map fixup passes, rebuilds the research
//! list and copies the remaining park state. [`LegacyImportPlugin`] wraps the
//! same pipeline for a Bevy app.

pub mod entry_list;
pub mod format_version;
pub mod import_error;
pub mod import_plugin;
pub mod importer;
pub mod legacy_types;
pub mod map_import;
pub mod object_loading;
pub mod object_mapping;
pub mod research_import;
pub mod ride_import;
pub mod scalar_import;
pub mod sprite_import;
pub mod tables;

#[cfg(test)]
mod import_tests;

pub use format_version::{FileKind, FormatVersion};
pub use import_error::{ImportDiagnostic, ImportError, ImportReport, UnsupportedEntity};
pub use import_plugin::{
    ImportLegacyParkEvent, LegacyImportFinished, LegacyImportOptions, LegacyImportPlugin,
    LegacyImportState, LegacyReaderRes, ObjectRepositoryRes, PendingLegacyImport,
};
pub use importer::{import_file, import_park, import_park_with, ImportOptions, LegacyReader};
pub use legacy_types::LegacySave;

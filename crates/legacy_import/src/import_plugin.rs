// ---------------------------------------------------------------------------
// Bevy integration: import a legacy park on request
// ---------------------------------------------------------------------------

use std::path::PathBuf;

use bevy::prelude::*;
use park::objects::ObjectRepository;

use crate::import_error::{ImportError, ImportReport};
use crate::importer::{import_file, ImportOptions, LegacyReader};

/// Import in progress or not. Entering `Importing` runs the import with
/// exclusive world access and returns to `Idle`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LegacyImportState {
    #[default]
    Idle,
    Importing,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Container reader used for every import.
#[derive(Resource)]
pub struct LegacyReaderRes(pub Box<dyn LegacyReader + Send + Sync>);

/// Object repository used for every import.
#[derive(Resource)]
pub struct ObjectRepositoryRes(pub Box<dyn ObjectRepository + Send + Sync>);

#[derive(Resource, Default, Clone, Debug)]
pub struct LegacyImportOptions(pub ImportOptions);

/// Path waiting for the exclusive import system.
#[derive(Resource, Default)]
pub struct PendingLegacyImport(pub Option<PathBuf>);

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event, Debug, Clone)]
pub struct ImportLegacyParkEvent {
    pub path: PathBuf,
}

/// Sent once per import, successful or not. On success the park resources
/// have already been replaced.
#[derive(Event, Debug, Clone)]
pub struct LegacyImportFinished {
    pub path: PathBuf,
    pub outcome: Result<ImportReport, String>,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Needs `StatesPlugin` and a [`LegacyReaderRes`] and [`ObjectRepositoryRes`]
/// inserted by the app.
pub struct LegacyImportPlugin;

impl Plugin for LegacyImportPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<LegacyImportState>()
            .add_event::<ImportLegacyParkEvent>()
            .add_event::<LegacyImportFinished>()
            .init_resource::<PendingLegacyImport>()
            .init_resource::<LegacyImportOptions>();

        app.add_systems(Update, detect_import_event);
        app.add_systems(OnEnter(LegacyImportState::Importing), exclusive_import);
    }
}

/// Takes the first `ImportLegacyParkEvent` of the frame and starts the
/// import. Later events in the same frame are dropped.
fn detect_import_event(
    mut events: EventReader<ImportLegacyParkEvent>,
    mut pending: ResMut<PendingLegacyImport>,
    mut next_state: ResMut<NextState<LegacyImportState>>,
) {
    if let Some(event) = events.read().next() {
        pending.0 = Some(event.path.clone());
        events.read().for_each(drop);
        next_state.set(LegacyImportState::Importing);
    }
}

/// Runs the whole import and replaces the park resources on success.
pub(crate) fn exclusive_import(world: &mut World) {
    let path = world.resource_mut::<PendingLegacyImport>().0.take();
    if let Some(path) = path {
        let outcome = match exclusive_import_inner(world, &path) {
            Ok(report) => {
                info!(
                    "Imported legacy park from {} ({} diagnostics)",
                    path.display(),
                    report.diagnostics.len()
                );
                Ok(report)
            }
            Err(e) => {
                let msg = format!("Legacy import failed: {e}");
                error!("{msg}");
                Err(msg)
            }
        };
        world.send_event(LegacyImportFinished { path, outcome });
    }

    // Always back to Idle, even on error.
    world
        .resource_mut::<NextState<LegacyImportState>>()
        .set(LegacyImportState::Idle);
}

fn exclusive_import_inner(
    world: &mut World,
    path: &std::path::Path,
) -> Result<ImportReport, ImportError> {
    let options = world
        .get_resource::<LegacyImportOptions>()
        .map(|options| options.0.clone())
        .unwrap_or_default();
    let reader = world
        .remove_resource::<LegacyReaderRes>()
        .ok_or(ImportError::MissingResource("LegacyReaderRes"))?;
    let Some(mut repository) = world.remove_resource::<ObjectRepositoryRes>() else {
        world.insert_resource(reader);
        return Err(ImportError::MissingResource("ObjectRepositoryRes"));
    };

    let result = import_file(reader.0.as_ref(), path, repository.0.as_mut(), &options);

    world.insert_resource(reader);
    world.insert_resource(repository);

    // The old park stays in place if anything failed.
    let (park, report) = result?;
    park.insert_into(world);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_version::FormatVersion;
    use crate::legacy_types::LegacySave;
    use bevy::state::app::StatesPlugin;
    use park::objects::ObjectCatalog;
    use park::park_state::ScenarioInfo;
    use park::tile_map::TileMap;
    use std::path::Path;

    struct BlankReader;

    impl LegacyReader for BlankReader {
        fn read(&self, path: &Path) -> Result<(LegacySave, FormatVersion), String> {
            if path.extension().is_some_and(|ext| ext == "bad") {
                return Err("unreadable container".to_owned());
            }
            let mut save = LegacySave::blank(FormatVersion::LoopyLandscapes);
            save.scenario.name = "Katie's Dreamland".to_owned();
            save.map_size = 64;
            Ok((save, FormatVersion::LoopyLandscapes))
        }
    }

    fn build_app(with_repository: bool) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.add_plugins(LegacyImportPlugin);
        app.insert_resource(LegacyReaderRes(Box::new(BlankReader)));
        if with_repository {
            app.insert_resource(ObjectRepositoryRes(Box::new(ObjectCatalog::permissive())));
        }
        app.update();
        app
    }

    fn run_import(app: &mut App, path: &str) -> Vec<LegacyImportFinished> {
        app.world_mut().send_event(ImportLegacyParkEvent {
            path: PathBuf::from(path),
        });
        // Detect, enter Importing, return to Idle.
        for _ in 0..3 {
            app.update();
        }
        let events = app.world().resource::<Events<LegacyImportFinished>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).cloned().collect()
    }

    #[test]
    fn test_import_inserts_park_resources() {
        let mut app = build_app(true);
        let finished = run_import(&mut app, "sc5.sc4");

        assert_eq!(finished.len(), 1);
        assert!(finished[0].outcome.is_ok());
        let scenario = app.world().resource::<ScenarioInfo>();
        assert_eq!(scenario.name, "Katie's Dreamland");
        assert_eq!(scenario.number, Some(5));
        assert_eq!(app.world().resource::<TileMap>().size, 64);
        assert_eq!(
            *app.world().resource::<State<LegacyImportState>>().get(),
            LegacyImportState::Idle
        );
    }

    #[test]
    fn test_reader_error_is_reported() {
        let mut app = build_app(true);
        let finished = run_import(&mut app, "park.bad");

        assert_eq!(finished.len(), 1);
        let msg = finished[0].outcome.clone().unwrap_err();
        assert!(msg.contains("unreadable container"), "got: {msg}");
        assert!(app.world().get_resource::<ScenarioInfo>().is_none());
        // Collaborators are put back for the next import.
        assert!(app.world().get_resource::<LegacyReaderRes>().is_some());
    }

    #[test]
    fn test_missing_repository_is_reported() {
        let mut app = build_app(false);
        let finished = run_import(&mut app, "sc1.sc4");

        let msg = finished[0].outcome.clone().unwrap_err();
        assert!(msg.contains("ObjectRepositoryRes"), "got: {msg}");
        assert!(app.world().get_resource::<LegacyReaderRes>().is_some());
    }
}

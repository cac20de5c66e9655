// ---------------------------------------------------------------------------
// Pipeline scenarios: whole saves through import_park
// ---------------------------------------------------------------------------

mod fixtures;

mod tests_failures;
mod tests_objects;
mod tests_pipeline;
mod tests_sprites;

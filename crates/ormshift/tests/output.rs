//! Snapshot files in, generated files out.

use ormshift::{
    config::{Config, OutputConfig},
    pipeline::generator_for,
    prelude::*,
};
use ormshift_testing_fixtures::{keys, northwind, school};
use std::fs;

#[test]
fn snapshot_to_files() {
    let mut model = northwind::model();
    model.extend(school::model());
    let json = ModelSnapshot::from_model(Dialect::Snapshot, model).to_json().unwrap();

    let mut batch = Batch::new();
    for extraction in SnapshotExtractor.extract_all(&json).unwrap() {
        batch.push(extraction);
    }

    let config = Config::default();
    let sources = batch
        .prepare(&PrepareOptions::from(&config.generate))
        .unwrap()
        .generate(&generator_for(&config.generate));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let written = sources.write_to(&out, &config.output).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "Entities.cs",
            "EntityConfigurations.cs",
            "NorthwindDataContext.cs",
            "SchoolSession.cs",
            "StoredProcedureResults.cs",
        ]
    );

    assert_eq!(fs::read_to_string(out.join("Entities.cs")).unwrap(), sources.entities);
    let school = fs::read_to_string(out.join("SchoolSession.cs")).unwrap();
    assert!(school.contains("    public DbSet<Course> Courses { get; set; }\n    public DbSet<Student> Students { get; set; }"));

    let configurations = fs::read_to_string(out.join("EntityConfigurations.cs")).unwrap();
    assert_eq!(configurations.matches(".UsingEntity(\"StudentCourse\");").count(), 1);
}

#[test]
fn custom_file_names() {
    let output = OutputConfig {
        entities: "Model.cs".to_string(),
        ..OutputConfig::default()
    };

    let sources = Batch::from_iter([Extraction::new(keys::entities())])
        .prepare(&PrepareOptions::default())
        .unwrap()
        .generate(&Generator::default());

    let dir = tempfile::tempdir().unwrap();
    let written = sources.write_to(dir.path(), &output).unwrap();

    assert_eq!(written[0], dir.path().join("Model.cs"));
    assert_eq!(written.len(), 3);
}

#[test]
fn failed_extraction_leaves_batch_untouched() {
    let mut batch = Batch::new();
    let err = batch.extract(&SnapshotExtractor, "not json").unwrap_err();

    assert!(matches!(err, Error::Extract(ExtractError::Snapshot(_))));
    assert!(batch.is_empty());
    assert_eq!(batch.units(), 0);
}

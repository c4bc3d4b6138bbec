//! Full-pipeline renders compared against checked-in sources.

use ormshift::prelude::*;
use ormshift_testing_fixtures::{docs, northwind, procedures};

fn generate(model: Model) -> GeneratedSources {
    let batch: Batch = ModelSnapshot::from_model(Dialect::Snapshot, model)
        .into_extractions()
        .into_iter()
        .collect();

    batch
        .prepare(&PrepareOptions::default())
        .unwrap()
        .generate(&Generator::default())
}

fn assert_golden(actual: &str, expected: &str) {
    assert_eq!(actual, expected.trim_end(), "\n--- generated ---\n{actual}\n");
}

#[test]
fn northwind_outputs() {
    let sources = generate(northwind::model());

    assert_golden(&sources.entities, include_str!("golden/northwind/Entities.cs"));
    assert_golden(
        &sources.configurations,
        include_str!("golden/northwind/EntityConfigurations.cs"),
    );
    assert_eq!(sources.contexts.len(), 1);
    assert_eq!(sources.contexts[0].name, northwind::CONTEXT_NAME);
    assert_golden(
        &sources.contexts[0].text,
        include_str!("golden/northwind/NorthwindDataContext.cs"),
    );
    assert_golden(
        &sources.results,
        include_str!("golden/northwind/StoredProcedureResults.cs"),
    );
}

#[test]
fn qualified_types_and_markup_conversion() {
    let sources = generate(docs::model());

    assert_golden(&sources.entities, include_str!("golden/docs/Entities.cs"));
    assert_golden(
        &sources.configurations,
        include_str!("golden/docs/EntityConfigurations.cs"),
    );
    assert_golden(&sources.contexts[0].text, include_str!("golden/docs/DemoContext.cs"));
    assert_eq!(sources.results, "");
}

#[test]
fn procedure_parameter_directions() {
    let sources = generate(procedures::model());

    assert_golden(&sources.contexts[0].text, include_str!("golden/MyContext.cs"));

    let signature = sources.contexts[0]
        .text
        .lines()
        .find(|l| l.contains("public IQueryable<int> MyProc("))
        .unwrap();
    assert_eq!(signature.matches("ref ").count(), 1);
    assert_eq!(signature.matches("out ").count(), 1);
    assert_eq!(signature.matches("/* Size=").count(), 2);
}

#[test]
fn file_scoped_namespace_applies_to_every_output() {
    let sources = generate(northwind::model());
    let namespaced = Batch::from_iter(
        ModelSnapshot::from_model(Dialect::Snapshot, northwind::model()).into_extractions(),
    )
    .prepare(&PrepareOptions::default())
    .unwrap()
    .generate(&Generator::new(RenderOptions::default().with_namespace("Migrated.Data")));

    for (plain, scoped) in [
        (&sources.entities, &namespaced.entities),
        (&sources.configurations, &namespaced.configurations),
        (&sources.contexts[0].text, &namespaced.contexts[0].text),
        (&sources.results, &namespaced.results),
    ] {
        assert!(scoped.contains("namespace Migrated.Data;\n\npublic class "));
        assert_eq!(scoped.replace("namespace Migrated.Data;\n\n", ""), *plain);
    }
}

//! XML-mapped many-to-many sample joined through `StudentCourse`.

use ormshift_schema::node::{DataContext, Entity, EntityProperty, Model, Navigation, TableMapping};

pub const CONTEXT_NAME: &str = "SchoolSession";
pub const JOIN_TABLE: &str = "StudentCourse";

#[must_use]
pub fn student() -> Entity {
    Entity::new("Student", "Students")
        .with_property(EntityProperty::key("Id", "Int32").generated())
        .with_property(EntityProperty::new("FullName", "String").with_column("full_name"))
        .with_navigation(Navigation::many("Courses", "Course").with_join_table(JOIN_TABLE))
}

#[must_use]
pub fn course() -> Entity {
    Entity::new("Course", "Courses")
        .with_property(EntityProperty::key("Id", "Int32").generated())
        .with_property(EntityProperty::new("Title", "String"))
        .with_navigation(Navigation::many("Students", "Student").with_join_table(JOIN_TABLE))
}

#[must_use]
pub fn entities() -> Vec<Entity> {
    vec![student(), course()]
}

#[must_use]
pub fn context() -> DataContext {
    DataContext::new(CONTEXT_NAME)
        .with_table(TableMapping::new("Students", "Student"))
        .with_table(TableMapping::new("Courses", "Course"))
}

#[must_use]
pub fn model() -> Model {
    Model {
        entities: entities(),
        contexts: vec![context()],
        results: Vec::new(),
    }
}

//! A context whose only member is a procedure with every parameter
//! direction.

use ormshift_schema::node::{
    DataContext, Model, ParameterDirection, ParameterMapping, StoredProcedureMapping,
};

pub const CONTEXT_NAME: &str = "MyContext";

#[must_use]
pub fn my_proc() -> StoredProcedureMapping {
    StoredProcedureMapping::new("MyProc", "dbo.MyProc", "Int32")
        .with_parameter(ParameterMapping::new("inParam", "String").with_size(50))
        .with_parameter(
            ParameterMapping::new("inOutParam", "String")
                .with_direction(ParameterDirection::InputOutput)
                .with_size(100),
        )
        .with_parameter(
            ParameterMapping::new("outParam", "Int32").with_direction(ParameterDirection::Output),
        )
}

#[must_use]
pub fn context() -> DataContext {
    DataContext::new(CONTEXT_NAME).with_stored_procedure(my_proc())
}

#[must_use]
pub fn model() -> Model {
    Model {
        contexts: vec![context()],
        ..Model::default()
    }
}

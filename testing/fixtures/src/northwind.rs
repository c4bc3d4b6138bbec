//! Attribute-mapped Northwind sample: one-to-many, inheritance and a
//! context-level procedure.

use ormshift_schema::node::{
    DataContext, Entity, EntityProperty, Model, Navigation, ParameterMapping,
    StoredProcedureMapping, StoredProcedureResult, TableMapping,
};

pub const CONTEXT_NAME: &str = "NorthwindDataContext";
pub const ORDERS_ASSOCIATION: &str = "FK_Orders_Customers";

#[must_use]
pub fn customer() -> Entity {
    Entity::new("Customer", "Customers")
        .with_property(EntityProperty::key("CustomerID", "Int32"))
        .with_property(EntityProperty::new("CompanyName", "String").with_db_type("NVarChar(100)"))
        .with_property(
            EntityProperty::new("ContactName", "String?")
                .with_db_type("NVarChar(50)")
                .nullable(),
        )
        .with_property(EntityProperty::new("Age", "System.Nullable<System.Int32>").nullable())
        .with_navigation(Navigation::many("Orders", "Order").with_association(ORDERS_ASSOCIATION))
}

#[must_use]
pub fn order() -> Entity {
    Entity::new("Order", "Orders")
        .with_property(EntityProperty::key("OrderID", "Int32").generated())
        .with_property(EntityProperty::new("CustomerID", "Int32"))
        .with_property(
            EntityProperty::new("Description", "String?")
                .with_db_type("NVarChar(200)")
                .nullable(),
        )
        .with_property(EntityProperty::new("Amount", "Decimal?").nullable())
        .with_property(EntityProperty::new("Status", "String").with_db_type("NVarChar(20)"))
        .with_navigation(
            Navigation::one("Customer", "Customer")
                .with_foreign_key("CustomerID")
                .with_association(ORDERS_ASSOCIATION),
        )
}

#[must_use]
pub fn preferred_customer() -> Entity {
    Entity::new("PreferredCustomer", "Customers")
        .with_base_type("Customer")
        .with_property(EntityProperty::new("LoyaltyId", "String?").nullable())
}

#[must_use]
pub fn entities() -> Vec<Entity> {
    vec![order(), preferred_customer(), customer()]
}

#[must_use]
pub fn context() -> DataContext {
    DataContext::new(CONTEXT_NAME)
        .with_table(TableMapping::new("Orders", "Order"))
        .with_table(TableMapping::new("Customers", "Customer"))
        .with_stored_procedure(
            StoredProcedureMapping::new("GetOrderById", "dbo.GetOrderById", "Order")
                .with_parameter(ParameterMapping::new("id", "Int32")),
        )
}

#[must_use]
pub fn customer_orders_result() -> StoredProcedureResult {
    StoredProcedureResult::new("CustomerOrdersResult")
        .with_property(EntityProperty::new("OrderID", "Int32"))
        .with_property(EntityProperty::new("OrderDate", "System.Nullable<System.DateTime>"))
        .with_property(EntityProperty::new("Total", "System.Decimal"))
}

#[must_use]
pub fn model() -> Model {
    Model {
        entities: entities(),
        contexts: vec![context()],
        results: vec![customer_orders_result()],
    }
}

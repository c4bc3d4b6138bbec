use crate::node::{Entity, Navigation};
use std::collections::BTreeMap;
use tracing::debug;

///
/// NavRef
/// Position of one navigation inside the batch.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NavRef {
    entity: usize,
    navigation: usize,
}

/// Pair up the two sides of every relationship in the batch.
///
/// Navigations that share a non-blank `association_name` are paired first,
/// then navigations that share a non-blank `join_table`. A group pairs only
/// when it has exactly two members; any other size is ambiguous and stays
/// unresolved. Inverses present on input are discarded.
#[must_use]
pub fn resolve_inverses(mut entities: Vec<Entity>) -> Vec<Entity> {
    for entity in &mut entities {
        for nav in &mut entity.navigations {
            nav.inverse = None;
        }
    }

    let by_association = group_navigations(&entities, Navigation::association_key);
    pair_groups(&mut entities, by_association, "association");

    let by_join_table = group_navigations(&entities, Navigation::join_table_key);
    pair_groups(&mut entities, by_join_table, "join table");

    entities
}

// group_navigations
// multi-map from relationship identity to the navigations that carry it,
// members listed in batch order
fn group_navigations(
    entities: &[Entity],
    identity: fn(&Navigation) -> Option<&str>,
) -> BTreeMap<String, Vec<NavRef>> {
    let mut groups: BTreeMap<String, Vec<NavRef>> = BTreeMap::new();

    for (entity_idx, entity) in entities.iter().enumerate() {
        for (nav_idx, nav) in entity.navigations.iter().enumerate() {
            if let Some(key) = identity(nav) {
                groups.entry(key.to_string()).or_default().push(NavRef {
                    entity: entity_idx,
                    navigation: nav_idx,
                });
            }
        }
    }

    groups
}

fn pair_groups(entities: &mut [Entity], groups: BTreeMap<String, Vec<NavRef>>, kind: &str) {
    for (identity, members) in groups {
        let [a, b] = members.as_slice() else {
            debug!(
                %identity,
                members = members.len(),
                "{kind} group is not a pair, leaving unresolved"
            );
            continue;
        };

        let a_name = nav_at(entities, *a).name.clone();
        let b_name = nav_at(entities, *b).name.clone();
        debug!(%identity, %a_name, %b_name, "paired {kind} navigations");

        nav_at_mut(entities, *a).inverse = Some(b_name);
        nav_at_mut(entities, *b).inverse = Some(a_name);
    }
}

fn nav_at(entities: &[Entity], at: NavRef) -> &Navigation {
    &entities[at.entity].navigations[at.navigation]
}

fn nav_at_mut(entities: &mut [Entity], at: NavRef) -> &mut Navigation {
    &mut entities[at.entity].navigations[at.navigation]
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inverse_of<'a>(entities: &'a [Entity], entity: &str, nav: &str) -> Option<&'a str> {
        entities
            .iter()
            .find(|e| e.name == entity)
            .and_then(|e| e.get_navigation(nav))
            .and_then(Navigation::inverse)
    }

    #[test]
    fn pairs_one_to_many_by_association() {
        let entities = resolve_inverses(vec![
            Entity::new("Customer", "Customers").with_navigation(
                Navigation::many("Orders", "Order").with_association("FK_Orders_Customers"),
            ),
            Entity::new("Order", "Orders").with_navigation(
                Navigation::one("Customer", "Customer")
                    .with_foreign_key("CustomerID")
                    .with_association("FK_Orders_Customers"),
            ),
        ]);

        assert_eq!(inverse_of(&entities, "Customer", "Orders"), Some("Customer"));
        assert_eq!(inverse_of(&entities, "Order", "Customer"), Some("Orders"));
    }

    #[test]
    fn pairs_many_to_many_by_join_table() {
        let entities = resolve_inverses(vec![
            Entity::new("Student", "Students")
                .with_navigation(Navigation::many("Courses", "Course").with_join_table("StudentCourse")),
            Entity::new("Course", "Courses")
                .with_navigation(Navigation::many("Students", "Student").with_join_table("StudentCourse")),
        ]);

        assert_eq!(inverse_of(&entities, "Student", "Courses"), Some("Students"));
        assert_eq!(inverse_of(&entities, "Course", "Students"), Some("Courses"));
    }

    #[test]
    fn pairs_self_referencing_navigations() {
        let entities = resolve_inverses(vec![
            Entity::new("Employee", "Employees")
                .with_navigation(
                    Navigation::one("Manager", "Employee")
                        .with_foreign_key("ReportsTo")
                        .with_association("FK_Employees_Employees"),
                )
                .with_navigation(
                    Navigation::many("Reports", "Employee").with_association("FK_Employees_Employees"),
                ),
        ]);

        assert_eq!(inverse_of(&entities, "Employee", "Manager"), Some("Reports"));
        assert_eq!(inverse_of(&entities, "Employee", "Reports"), Some("Manager"));
    }

    #[test]
    fn ambiguous_and_blank_groups_stay_unresolved() {
        let entities = resolve_inverses(vec![
            Entity::new("A", "A")
                .with_navigation(Navigation::many("Bs", "B").with_association("shared"))
                .with_navigation(Navigation::one("Lonely", "B").with_association("single"))
                .with_navigation(Navigation::one("Blank1", "B").with_association("  ")),
            Entity::new("B", "B")
                .with_navigation(Navigation::one("A1", "A").with_association("shared"))
                .with_navigation(Navigation::one("A2", "A").with_association("shared"))
                .with_navigation(Navigation::one("Blank2", "A").with_association("  ")),
        ]);

        for (entity, nav) in [
            ("A", "Bs"),
            ("A", "Lonely"),
            ("A", "Blank1"),
            ("B", "A1"),
            ("B", "A2"),
            ("B", "Blank2"),
        ] {
            assert_eq!(inverse_of(&entities, entity, nav), None, "{entity}.{nav}");
        }
    }

    #[test]
    fn identities_differing_in_whitespace_do_not_pair() {
        let entities = resolve_inverses(vec![
            Entity::new("A", "A").with_navigation(Navigation::many("Bs", "B").with_association("FK")),
            Entity::new("B", "B").with_navigation(Navigation::one("A", "A").with_association(" FK ")),
        ]);

        assert_eq!(inverse_of(&entities, "A", "Bs"), None);
        assert_eq!(inverse_of(&entities, "B", "A"), None);
    }

    #[test]
    fn stale_inverses_are_cleared() {
        let mut nav = Navigation::one("Customer", "Customer");
        nav.inverse = Some("Guess".to_string());

        let entities = resolve_inverses(vec![Entity::new("Order", "Orders").with_navigation(nav)]);
        assert_eq!(inverse_of(&entities, "Order", "Customer"), None);
    }

    proptest! {
        #[test]
        fn only_pairs_are_resolved(sizes in prop::collection::vec(0usize..5, 1..6)) {
            // one entity per group; group `g` has `sizes[g]` navigations
            let entities: Vec<Entity> = sizes
                .iter()
                .enumerate()
                .map(|(g, &size)| {
                    (0..size).fold(Entity::new(format!("E{g}"), format!("T{g}")), |e, n| {
                        e.with_navigation(
                            Navigation::one(format!("N{n}"), format!("E{g}"))
                                .with_association(format!("assoc{g}")),
                        )
                    })
                })
                .collect();

            let resolved = resolve_inverses(entities);

            for (g, entity) in resolved.iter().enumerate() {
                for nav in &entity.navigations {
                    if sizes[g] == 2 {
                        let other = if nav.name == "N0" { "N1" } else { "N0" };
                        prop_assert_eq!(nav.inverse(), Some(other));
                    } else {
                        prop_assert_eq!(nav.inverse(), None);
                    }
                }
            }
        }
    }
}

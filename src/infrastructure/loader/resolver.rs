//! Reference resolution: document → [`Economy`]
//!
//! Identities are unique across the whole document. Every reference must
//! name an entity of the expected kind, and actor references must also name
//! an actor of the expected role. Numeric quantities must be finite.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::entities::{Actor, Economy, EconomyBuilder, EntityRef};
use crate::domain::value_objects::{ActorKind, CircularKind};
use crate::error::{CemlError, CemlResult};

use super::document::EconomyDocument;

/// Identity → typed reference for one entity kind
struct Index<T> {
    kind: &'static str,
    refs: HashMap<String, EntityRef<T>>,
}

impl<T> Index<T> {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            refs: HashMap::new(),
        }
    }

    fn insert(&mut self, id: &str, entity: EntityRef<T>) {
        self.refs.insert(id.to_string(), entity);
    }

    fn resolve(&self, id: &str, from: &str) -> CemlResult<EntityRef<T>> {
        self.refs
            .get(id)
            .copied()
            .ok_or_else(|| CemlError::UnresolvedReference {
                kind: self.kind,
                id: id.to_string(),
                from: from.to_string(),
            })
    }
}

/// Actors indexed by identity, remembering each actor's role
#[derive(Default)]
struct ActorIndex {
    refs: HashMap<String, (EntityRef<Actor>, ActorKind)>,
}

impl ActorIndex {
    fn insert(&mut self, id: &str, actor: EntityRef<Actor>, kind: ActorKind) {
        self.refs.insert(id.to_string(), (actor, kind));
    }

    /// Resolve an actor reference; `expected: None` accepts any role
    fn resolve(
        &self,
        id: &str,
        expected: Option<ActorKind>,
        from: &str,
    ) -> CemlResult<EntityRef<Actor>> {
        let Some(&(actor, actual)) = self.refs.get(id) else {
            return Err(CemlError::UnresolvedReference {
                kind: expected.map_or("actor", |kind| kind.noun()),
                id: id.to_string(),
                from: from.to_string(),
            });
        };
        match expected {
            Some(expected) if expected != actual => Err(CemlError::ActorKindMismatch {
                id: id.to_string(),
                from: from.to_string(),
                expected: expected.noun(),
                actual: actual.noun(),
            }),
            _ => Ok(actor),
        }
    }
}

/// Every declared identity with the kind that declared it, in document order
fn declared_ids(doc: &EconomyDocument) -> Vec<(&str, &'static str)> {
    let mut ids = Vec::new();
    ids.extend(doc.actors.iter().map(|a| (a.id.as_str(), a.kind.noun())));
    ids.extend(doc.goals.iter().map(|g| (g.id.as_str(), "goal")));
    ids.extend(doc.facilities.iter().map(|f| (f.id.as_str(), "facility")));
    ids.extend(doc.products.iter().map(|p| (p.id.as_str(), "product")));
    ids.extend(doc.components.iter().map(|c| (c.id.as_str(), "component")));
    ids.extend(doc.orders.iter().map(|o| (o.id.as_str(), "order")));
    for ret in &doc.returns {
        ids.push((ret.id.as_str(), "return"));
        for process in &ret.processes {
            ids.push((process.id.as_str(), "process"));
            ids.extend(process.shipments.iter().map(|s| (s.id.as_str(), "shipment")));
        }
    }
    ids
}

fn ensure_unique_ids(doc: &EconomyDocument) -> CemlResult<()> {
    let mut seen: HashMap<&str, &'static str> = HashMap::new();
    for (id, kind) in declared_ids(doc) {
        if let Some(first) = seen.insert(id, kind) {
            return Err(CemlError::DuplicateId {
                id: id.to_string(),
                first,
                second: kind,
            });
        }
    }
    Ok(())
}

/// `value` unchanged, or an invalid-document error naming `field` of `from`
fn finite(value: f64, field: &str, from: &str, file: &Path) -> CemlResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CemlError::InvalidDocument {
            file: file.to_path_buf(),
            message: format!("{from} has non-finite {field} ({value})"),
        })
    }
}

/// Build a resolved economy from a parsed document; `file` only labels errors
pub fn resolve(doc: EconomyDocument, file: &Path) -> CemlResult<Economy> {
    ensure_unique_ids(&doc)?;

    let mut builder = EconomyBuilder::new(doc.name);

    let mut actors = ActorIndex::default();
    for actor in &doc.actors {
        let entity = builder.add_actor(&actor.id, actor.kind);
        actors.insert(&actor.id, entity, actor.kind);
    }

    let mut goals = Index::new("goal");
    for goal in doc.goals {
        let from = format!("goal '{}'", goal.id);
        let standard = finite(goal.standard, "standard", &from, file)?;
        let entity = builder.add_goal(&goal.id, goal.description, standard, goal.comparator);
        goals.insert(&goal.id, entity);
    }

    let mut facilities = Index::new("facility");
    for facility in doc.facilities {
        let from = format!("facility '{}'", facility.id);
        let facility_goals = facility
            .goals
            .iter()
            .map(|goal| goals.resolve(goal, &from))
            .collect::<CemlResult<Vec<_>>>()?;
        let entity = builder.add_facility(&facility.id, facility.facility_type, facility_goals);
        facilities.insert(&facility.id, entity);
    }

    let mut products = Index::new("product");
    for product in doc.products {
        let from = format!("product '{}'", product.id);
        let retailer = actors.resolve(&product.retailer, Some(ActorKind::Retailer), &from)?;
        let price = finite(product.price, "price", &from, file)?;
        let entity = builder.add_product(
            &product.id,
            product.name,
            product.assembly_date,
            price,
            retailer,
        );
        products.insert(&product.id, entity);
    }

    let mut components = Index::new("component");
    for component in doc.components {
        let from = format!("component '{}'", component.id);
        let manufacturer =
            actors.resolve(&component.manufacturer, Some(ActorKind::Manufacturer), &from)?;
        let product = component
            .product
            .as_deref()
            .map(|product| products.resolve(product, &from))
            .transpose()?;
        let entity = builder.add_component(
            &component.id,
            component.name,
            component.state,
            component.recycled,
            manufacturer,
            product,
        );
        components.insert(&component.id, entity);
    }

    let mut orders = Index::new("order");
    for order in doc.orders {
        let from = format!("order '{}'", order.id);
        let consumer = actors.resolve(&order.consumer, Some(ActorKind::Consumer), &from)?;
        let product = products.resolve(&order.product, &from)?;
        let entity = builder.add_order(&order.id, consumer, product, order.date);
        orders.insert(&order.id, entity);
    }

    for ret in doc.returns {
        let from = format!("return '{}'", ret.id);
        let consumer = actors.resolve(&ret.consumer, Some(ActorKind::Consumer), &from)?;
        let order = orders.resolve(&ret.order, &from)?;
        let origin = builder.add_return(&ret.id, consumer, order, ret.reason, ret.date);

        for process in ret.processes {
            let from = format!("process '{}'", process.id);
            let facility = facilities.resolve(&process.facility, &from)?;
            let recycled = process
                .recycled_components
                .iter()
                .map(|component| components.resolve(component, &from))
                .collect::<CemlResult<Vec<_>>>()?;
            let energy = finite(process.energy_saved_kwh, "energySavedKWh", &from, file)?;
            let water = finite(process.water_saved_l, "waterSavedL", &from, file)?;
            let entity =
                builder.add_process(origin, &process.id, process.kind, facility, energy, water);

            if process.kind == CircularKind::Recycle {
                for component in recycled {
                    builder.add_recycled_component(entity, component);
                }
            } else if !recycled.is_empty() {
                tracing::warn!(
                    process = %process.id,
                    kind = %process.kind,
                    count = recycled.len(),
                    "ignoring recycled components on a non-recycle process"
                );
            }

            for shipment in process.shipments {
                let from = format!("shipment '{}'", shipment.id);
                let destination = actors.resolve(&shipment.destination, None, &from)?;
                let co2 = finite(shipment.co2_emission, "co2Emission", &from, file)?;
                builder.add_shipment(
                    entity,
                    &shipment.id,
                    shipment.delivered,
                    shipment.delivery_date,
                    co2,
                    destination,
                );
            }
        }
    }

    Ok(builder.build())
}

//! Economy - one fully resolved circular-economy model
//!
//! Entities live in per-kind arenas; links between them are [`EntityRef`]s.
//! The economy is immutable once built and can be shared freely across
//! threads, which is what lets the metrics and graph engines run side by side.

use crate::domain::value_objects::{
    ActorKind, Comparator, ComponentState, FacilityType, ModelDate, ProcessKind,
};

use super::model::{
    Actor, CircularProcess, Component, Facility, Order, Product, Return, Shipment,
    SustainabilityGoal,
};
use super::EntityRef;

/// A resolved, referentially consistent domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Economy {
    name: String,
    actors: Vec<Actor>,
    goals: Vec<SustainabilityGoal>,
    facilities: Vec<Facility>,
    products: Vec<Product>,
    components: Vec<Component>,
    orders: Vec<Order>,
    returns: Vec<Return>,
    processes: Vec<CircularProcess>,
    shipments: Vec<Shipment>,
}

impl Economy {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn goals(&self) -> &[SustainabilityGoal] {
        &self.goals
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn returns(&self) -> &[Return] {
        &self.returns
    }

    pub fn processes(&self) -> &[CircularProcess] {
        &self.processes
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn actor(&self, actor: EntityRef<Actor>) -> &Actor {
        &self.actors[actor.index()]
    }

    pub fn goal(&self, goal: EntityRef<SustainabilityGoal>) -> &SustainabilityGoal {
        &self.goals[goal.index()]
    }

    pub fn facility(&self, facility: EntityRef<Facility>) -> &Facility {
        &self.facilities[facility.index()]
    }

    pub fn product(&self, product: EntityRef<Product>) -> &Product {
        &self.products[product.index()]
    }

    pub fn component(&self, component: EntityRef<Component>) -> &Component {
        &self.components[component.index()]
    }

    pub fn order(&self, order: EntityRef<Order>) -> &Order {
        &self.orders[order.index()]
    }

    pub fn product_return(&self, ret: EntityRef<Return>) -> &Return {
        &self.returns[ret.index()]
    }

    pub fn process(&self, process: EntityRef<CircularProcess>) -> &CircularProcess {
        &self.processes[process.index()]
    }

    pub fn shipment(&self, shipment: EntityRef<Shipment>) -> &Shipment {
        &self.shipments[shipment.index()]
    }

    /// Actors of one kind, in declaration order
    pub fn actors_of_kind(&self, kind: ActorKind) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(move |actor| actor.kind == kind)
    }

    /// Shipments belonging to a process
    pub fn shipments_of<'a>(
        &'a self,
        process: &'a CircularProcess,
    ) -> impl Iterator<Item = &'a Shipment> + 'a {
        process.shipments.iter().map(move |s| self.shipment(*s))
    }

    /// CO2 emitted by the shipments of a process
    pub fn process_co2(&self, process: &CircularProcess) -> f64 {
        self.shipments_of(process).map(|s| s.co2_emission).sum()
    }

    /// Retailer selling the product of an order
    pub fn retailer_of(&self, order: &Order) -> &Actor {
        self.actor(self.product(order.product).retailer)
    }

    /// Total number of entity instances across all arenas
    pub fn entity_count(&self) -> usize {
        self.actors.len()
            + self.goals.len()
            + self.facilities.len()
            + self.products.len()
            + self.components.len()
            + self.orders.len()
            + self.returns.len()
            + self.processes.len()
            + self.shipments.len()
    }
}

/// Incremental constructor for [`Economy`].
///
/// Back-links (product → components, return → processes, process →
/// shipments) are maintained here so both directions always agree.
#[derive(Debug, Default)]
pub struct EconomyBuilder {
    economy: Economy,
}

impl EconomyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            economy: Economy {
                name: name.into(),
                ..Economy::default()
            },
        }
    }

    pub fn add_actor(&mut self, id: impl Into<String>, kind: ActorKind) -> EntityRef<Actor> {
        push(
            &mut self.economy.actors,
            Actor {
                id: id.into(),
                kind,
            },
        )
    }

    pub fn add_goal(
        &mut self,
        id: impl Into<String>,
        description: impl Into<String>,
        standard: f64,
        comparator: Comparator,
    ) -> EntityRef<SustainabilityGoal> {
        push(
            &mut self.economy.goals,
            SustainabilityGoal {
                id: id.into(),
                description: description.into(),
                standard,
                comparator,
            },
        )
    }

    pub fn add_facility(
        &mut self,
        id: impl Into<String>,
        facility_type: FacilityType,
        goals: Vec<EntityRef<SustainabilityGoal>>,
    ) -> EntityRef<Facility> {
        push(
            &mut self.economy.facilities,
            Facility {
                id: id.into(),
                facility_type,
                goals,
            },
        )
    }

    pub fn add_product(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        assembly_date: impl Into<ModelDate>,
        price: f64,
        retailer: EntityRef<Actor>,
    ) -> EntityRef<Product> {
        push(
            &mut self.economy.products,
            Product {
                id: id.into(),
                name: name.into(),
                assembly_date: assembly_date.into(),
                price,
                retailer,
                components: Vec::new(),
            },
        )
    }

    pub fn add_component(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        state: ComponentState,
        recycled: bool,
        manufacturer: EntityRef<Actor>,
        product: Option<EntityRef<Product>>,
    ) -> EntityRef<Component> {
        let component = push(
            &mut self.economy.components,
            Component {
                id: id.into(),
                name: name.into(),
                state,
                recycled,
                manufacturer,
                product,
            },
        );
        if let Some(product) = product {
            self.economy.products[product.index()]
                .components
                .push(component);
        }
        component
    }

    pub fn add_order(
        &mut self,
        id: impl Into<String>,
        consumer: EntityRef<Actor>,
        product: EntityRef<Product>,
        date: impl Into<ModelDate>,
    ) -> EntityRef<Order> {
        push(
            &mut self.economy.orders,
            Order {
                id: id.into(),
                consumer,
                product,
                date: date.into(),
            },
        )
    }

    pub fn add_return(
        &mut self,
        id: impl Into<String>,
        consumer: EntityRef<Actor>,
        order: EntityRef<Order>,
        reason: Option<String>,
        date: impl Into<ModelDate>,
    ) -> EntityRef<Return> {
        push(
            &mut self.economy.returns,
            Return {
                id: id.into(),
                consumer,
                order,
                reason,
                date: date.into(),
                processes: Vec::new(),
            },
        )
    }

    pub fn add_process(
        &mut self,
        origin: EntityRef<Return>,
        id: impl Into<String>,
        kind: ProcessKind,
        facility: EntityRef<Facility>,
        energy_saved_kwh: f64,
        water_saved_l: f64,
    ) -> EntityRef<CircularProcess> {
        let process = push(
            &mut self.economy.processes,
            CircularProcess {
                id: id.into(),
                kind,
                facility,
                energy_saved_kwh,
                water_saved_l,
                recycled_components: Vec::new(),
                shipments: Vec::new(),
                origin,
            },
        );
        self.economy.returns[origin.index()].processes.push(process);
        process
    }

    /// Record that a process recycles a component
    pub fn add_recycled_component(
        &mut self,
        process: EntityRef<CircularProcess>,
        component: EntityRef<Component>,
    ) {
        self.economy.processes[process.index()]
            .recycled_components
            .push(component);
    }

    pub fn add_shipment(
        &mut self,
        process: EntityRef<CircularProcess>,
        id: impl Into<String>,
        delivered: bool,
        delivery_date: impl Into<ModelDate>,
        co2_emission: f64,
        destination: EntityRef<Actor>,
    ) -> EntityRef<Shipment> {
        let shipment = push(
            &mut self.economy.shipments,
            Shipment {
                id: id.into(),
                delivered,
                delivery_date: delivery_date.into(),
                co2_emission,
                destination,
                process,
            },
        );
        self.economy.processes[process.index()]
            .shipments
            .push(shipment);
        shipment
    }

    pub fn build(self) -> Economy {
        self.economy
    }
}

fn push<T>(arena: &mut Vec<T>, item: T) -> EntityRef<T> {
    arena.push(item);
    EntityRef::new(arena.len() - 1)
}

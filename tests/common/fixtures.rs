//! Reusable test models.
//!
//! `SAMPLE_MODEL` and `sample_economy()` describe the same economy: five
//! actors, two goals, three facilities, three products, four components,
//! four orders, two returns, three processes and four shipments.

use ceml::domain::value_objects::{ActorKind, CircularKind, Comparator, ComponentState};
use ceml::{Economy, EconomyBuilder};

pub const SAMPLE_ENTITY_COUNT: usize = 30;

pub const SAMPLE_MODEL: &str = r#"
name: Sample Economy
actors:
  - { id: maker, kind: MANUFACTURER }
  - { id: shop-a, kind: RETAILER }
  - { id: shop-b, kind: RETAILER }
  - { id: alice, kind: CONSUMER }
  - { id: bob, kind: CONSUMER }
goals:
  - { id: g-energy, description: Save energy, standard: 10, comparator: MIN }
  - { id: g-co2, description: Cap CO2, standard: 5, comparator: MAX }
facilities:
  - { id: f-recycle, type: RECYCLE, goals: [g-energy, g-co2] }
  - { id: f-repair, type: REPAIR, goals: [g-energy] }
  - { id: f-refurb, type: REFURBISH }
products:
  - { id: p1, name: Phone, assemblyDate: "2022-06-01", price: 300, retailer: shop-a }
  - { id: p2, name: Phone, assemblyDate: "2023-01-15", price: 350, retailer: shop-b }
  - { id: p3, name: Laptop, assemblyDate: "2023-03-01", price: 1200, retailer: shop-a }
components:
  - { id: c1, name: Battery, state: ASSEMBLED, recycled: false, manufacturer: maker, product: p1 }
  - { id: c2, name: Screen, state: READY, recycled: true, manufacturer: maker, product: p1 }
  - { id: c3, name: Battery, state: IN_CIRCULAR_PROCESS, recycled: false, manufacturer: maker, product: p3 }
  - { id: c4, name: Chip, state: READY, recycled: true, manufacturer: maker }
orders:
  - { id: o1, consumer: alice, product: p1, date: "2023-01-01" }
  - { id: o2, consumer: alice, product: p3, date: "2023-04-01" }
  - { id: o3, consumer: bob, product: p2, date: "2023-02-01" }
  - { id: o4, consumer: bob, product: p1, date: "2024-01-10" }
returns:
  - id: r1
    consumer: alice
    order: o1
    reason: broken screen
    date: "2023-01-11"
    processes:
      - id: proc1
        kind: RECYCLE
        facility: f-recycle
        energySavedKWh: 12
        waterSavedL: 100
        recycledComponents: [c1]
        shipments:
          - { id: s1, delivered: true, deliveryDate: "2023-01-20", co2Emission: 2.0, destination: maker }
          - { id: s2, delivered: false, deliveryDate: "2023-01-25", co2Emission: 1.5, destination: shop-a }
      - id: proc2
        kind: REPAIR
        facility: f-repair
        energySavedKWh: 4
        waterSavedL: 10
        shipments:
          - { id: s3, delivered: true, deliveryDate: "2023-02-01", co2Emission: 0.5, destination: alice }
  - id: r2
    consumer: bob
    order: o3
    date: "2023-02-11"
    processes:
      - id: proc3
        kind: RECYCLE
        facility: f-recycle
        energySavedKWh: 3
        waterSavedL: 50
        shipments:
          - { id: s4, delivered: true, deliveryDate: "2024-03-01", co2Emission: 1.0, destination: maker }
"#;

/// The sample model built directly, without going through a document
pub fn sample_economy() -> Economy {
    let mut b = EconomyBuilder::new("Sample Economy");

    let maker = b.add_actor("maker", ActorKind::Manufacturer);
    let shop_a = b.add_actor("shop-a", ActorKind::Retailer);
    let shop_b = b.add_actor("shop-b", ActorKind::Retailer);
    let alice = b.add_actor("alice", ActorKind::Consumer);
    let bob = b.add_actor("bob", ActorKind::Consumer);

    let energy = b.add_goal("g-energy", "Save energy", 10.0, Comparator::Min);
    let co2 = b.add_goal("g-co2", "Cap CO2", 5.0, Comparator::Max);

    let recycler = b.add_facility("f-recycle", CircularKind::Recycle, vec![energy, co2]);
    let repairer = b.add_facility("f-repair", CircularKind::Repair, vec![energy]);
    b.add_facility("f-refurb", CircularKind::Refurbish, vec![]);

    let p1 = b.add_product("p1", "Phone", "2022-06-01", 300.0, shop_a);
    let p2 = b.add_product("p2", "Phone", "2023-01-15", 350.0, shop_b);
    let p3 = b.add_product("p3", "Laptop", "2023-03-01", 1200.0, shop_a);

    let c1 = b.add_component("c1", "Battery", ComponentState::Assembled, false, maker, Some(p1));
    b.add_component("c2", "Screen", ComponentState::Ready, true, maker, Some(p1));
    b.add_component("c3", "Battery", ComponentState::InCircularProcess, false, maker, Some(p3));
    b.add_component("c4", "Chip", ComponentState::Ready, true, maker, None);

    let o1 = b.add_order("o1", alice, p1, "2023-01-01");
    b.add_order("o2", alice, p3, "2023-04-01");
    let o3 = b.add_order("o3", bob, p2, "2023-02-01");
    b.add_order("o4", bob, p1, "2024-01-10");

    let r1 = b.add_return("r1", alice, o1, Some("broken screen".into()), "2023-01-11");
    let r2 = b.add_return("r2", bob, o3, None, "2023-02-11");

    let proc1 = b.add_process(r1, "proc1", CircularKind::Recycle, recycler, 12.0, 100.0);
    b.add_recycled_component(proc1, c1);
    b.add_shipment(proc1, "s1", true, "2023-01-20", 2.0, maker);
    b.add_shipment(proc1, "s2", false, "2023-01-25", 1.5, shop_a);

    let proc2 = b.add_process(r1, "proc2", CircularKind::Repair, repairer, 4.0, 10.0);
    b.add_shipment(proc2, "s3", true, "2023-02-01", 0.5, alice);

    let proc3 = b.add_process(r2, "proc3", CircularKind::Recycle, recycler, 3.0, 50.0);
    b.add_shipment(proc3, "s4", true, "2024-03-01", 1.0, maker);

    b.build()
}

/// Economy with one consumer placing `orders` orders of which the first
/// `returns` are returned
pub fn orders_and_returns(orders: usize, returns: usize) -> Economy {
    let mut b = EconomyBuilder::new("Orders");
    let shop = b.add_actor("shop", ActorKind::Retailer);
    let buyer = b.add_actor("buyer", ActorKind::Consumer);
    let product = b.add_product("p", "Widget", "2024-01-01", 10.0, shop);
    for i in 0..orders {
        let order = b.add_order(format!("o{i}"), buyer, product, "2024-02-01");
        if i < returns {
            b.add_return(format!("r{i}"), buyer, order, None, "2024-02-10");
        }
    }
    b.build()
}

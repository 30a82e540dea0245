//! Shared in-crate test model
//!
//! Three products of two types sold by two retailers, four orders, two
//! returns feeding three processes at two of three facilities, and four
//! shipments (one pending).

use crate::domain::value_objects::{ActorKind, CircularKind, Comparator, ComponentState};

use super::{Economy, EconomyBuilder};

pub(crate) fn sample_economy() -> Economy {
    let mut b = EconomyBuilder::new("Sample Economy");

    let maker = b.add_actor("maker", ActorKind::Manufacturer);
    let shop_a = b.add_actor("shop-a", ActorKind::Retailer);
    let shop_b = b.add_actor("shop-b", ActorKind::Retailer);
    let alice = b.add_actor("alice", ActorKind::Consumer);
    let bob = b.add_actor("bob", ActorKind::Consumer);

    let energy_goal = b.add_goal("g-energy", "Save energy", 10.0, Comparator::Min);
    let co2_goal = b.add_goal("g-co2", "Cap CO2", 5.0, Comparator::Max);

    let recycler = b.add_facility("f-recycle", CircularKind::Recycle, vec![energy_goal, co2_goal]);
    let repairer = b.add_facility("f-repair", CircularKind::Repair, vec![energy_goal]);
    b.add_facility("f-refurb", CircularKind::Refurbish, vec![]);

    let p1 = b.add_product("p1", "Phone", "2022-06-01", 300.0, shop_a);
    let p2 = b.add_product("p2", "Phone", "2023-01-15", 350.0, shop_b);
    let p3 = b.add_product("p3", "Laptop", "2023-03-01", 1200.0, shop_a);

    let c1 = b.add_component("c1", "Battery", ComponentState::Assembled, false, maker, Some(p1));
    b.add_component("c2", "Screen", ComponentState::Ready, true, maker, Some(p1));
    b.add_component(
        "c3",
        "Battery",
        ComponentState::InCircularProcess,
        false,
        maker,
        Some(p3),
    );
    b.add_component("c4", "Chip", ComponentState::Ready, true, maker, None);

    let o1 = b.add_order("o1", alice, p1, "2023-01-01");
    b.add_order("o2", alice, p3, "2023-04-01");
    let o3 = b.add_order("o3", bob, p2, "2023-02-01");
    b.add_order("o4", bob, p1, "2024-01-10");

    let r1 = b.add_return(
        "r1",
        alice,
        o1,
        Some("broken screen".to_string()),
        "2023-01-11",
    );
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

//! Strategy producing arbitrary, referentially consistent economies.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

use ceml::domain::value_objects::{ActorKind, CircularKind, Comparator, ComponentState};
use ceml::{Economy, EconomyBuilder};

/// Mostly valid dates, sometimes garbage
pub fn model_date() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => (2019u32..2026, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
        1 => Just("not-a-date".to_string()),
    ]
}

fn circular_kind(i: usize) -> CircularKind {
    CircularKind::ALL[i % CircularKind::ALL.len()]
}

#[derive(Debug, Clone)]
struct ProductDraft {
    retailer: Index,
    price: f64,
    assembly: String,
    name: usize,
}

#[derive(Debug, Clone)]
struct ComponentDraft {
    manufacturer: Index,
    product: Option<Index>,
    state: usize,
    recycled: bool,
}

#[derive(Debug, Clone)]
struct OrderDraft {
    consumer: Index,
    product: Index,
    date: String,
    returned: Option<(String, Option<String>)>,
}

#[derive(Debug, Clone)]
struct ShipmentDraft {
    delivered: bool,
    date: String,
    co2: f64,
    destination: Index,
}

#[derive(Debug, Clone)]
struct ProcessDraft {
    origin: Index,
    kind: usize,
    facility: Index,
    energy: f64,
    water: f64,
    recycled: Vec<Index>,
    shipments: Vec<ShipmentDraft>,
}

fn product_draft() -> impl Strategy<Value = ProductDraft> {
    (any::<Index>(), 0.0f64..2000.0, model_date(), 0usize..3).prop_map(
        |(retailer, price, assembly, name)| ProductDraft {
            retailer,
            price,
            assembly,
            name,
        },
    )
}

fn component_draft() -> impl Strategy<Value = ComponentDraft> {
    (
        any::<Index>(),
        proptest::option::of(any::<Index>()),
        0usize..3,
        any::<bool>(),
    )
        .prop_map(|(manufacturer, product, state, recycled)| ComponentDraft {
            manufacturer,
            product,
            state,
            recycled,
        })
}

fn order_draft() -> impl Strategy<Value = OrderDraft> {
    (
        any::<Index>(),
        any::<Index>(),
        model_date(),
        proptest::option::of((model_date(), proptest::option::of("[a-z ]{0,12}"))),
    )
        .prop_map(|(consumer, product, date, returned)| OrderDraft {
            consumer,
            product,
            date,
            returned,
        })
}

fn shipment_draft() -> impl Strategy<Value = ShipmentDraft> {
    (any::<bool>(), model_date(), 0.0f64..10.0, any::<Index>()).prop_map(
        |(delivered, date, co2, destination)| ShipmentDraft {
            delivered,
            date,
            co2,
            destination,
        },
    )
}

fn process_draft() -> impl Strategy<Value = ProcessDraft> {
    (
        any::<Index>(),
        0usize..3,
        any::<Index>(),
        0.0f64..50.0,
        0.0f64..200.0,
        vec(any::<Index>(), 0..3),
        vec(shipment_draft(), 0..3),
    )
        .prop_map(
            |(origin, kind, facility, energy, water, recycled, shipments)| ProcessDraft {
                origin,
                kind,
                facility,
                energy,
                water,
                recycled,
                shipments,
            },
        )
}

/// Arbitrary economy; every order is returned at most once
pub fn economy() -> impl Strategy<Value = Economy> {
    (
        (1usize..3, 1usize..4, 1usize..4),
        vec((0.0f64..50.0, any::<bool>()), 0..4),
        vec((0usize..3, vec(any::<bool>(), 4)), 0..4),
        vec(product_draft(), 0..6),
        vec(component_draft(), 0..8),
        vec(order_draft(), 0..10),
        vec(process_draft(), 0..6),
    )
        .prop_map(
            |((manufacturers, retailers, consumers), goals, facilities, products, components, orders, processes)| {
                let mut b = EconomyBuilder::new("Arbitrary");

                let manufacturers: Vec<_> = (0..manufacturers)
                    .map(|i| b.add_actor(format!("m{i}"), ActorKind::Manufacturer))
                    .collect();
                let retailers: Vec<_> = (0..retailers)
                    .map(|i| b.add_actor(format!("r{i}"), ActorKind::Retailer))
                    .collect();
                let consumers: Vec<_> = (0..consumers)
                    .map(|i| b.add_actor(format!("c{i}"), ActorKind::Consumer))
                    .collect();
                let all_actors: Vec<_> = manufacturers
                    .iter()
                    .chain(&retailers)
                    .chain(&consumers)
                    .copied()
                    .collect();

                let goals: Vec<_> = goals
                    .into_iter()
                    .enumerate()
                    .map(|(i, (standard, min))| {
                        let comparator = if min { Comparator::Min } else { Comparator::Max };
                        b.add_goal(format!("g{i}"), format!("goal {i}"), standard, comparator)
                    })
                    .collect();

                let facilities: Vec<_> = facilities
                    .into_iter()
                    .enumerate()
                    .map(|(i, (kind, mask))| {
                        let linked = goals
                            .iter()
                            .zip(mask)
                            .filter(|(_, keep)| *keep)
                            .map(|(goal, _)| *goal)
                            .collect();
                        b.add_facility(format!("f{i}"), circular_kind(kind), linked)
                    })
                    .collect();

                let names = ["Phone", "Laptop", "Tablet"];
                let products: Vec<_> = products
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| {
                        b.add_product(
                            format!("p{i}"),
                            names[p.name],
                            p.assembly.as_str(),
                            p.price,
                            *p.retailer.get(&retailers),
                        )
                    })
                    .collect();

                let components: Vec<_> = components
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| {
                        let product = match c.product {
                            Some(index) if !products.is_empty() => Some(*index.get(&products)),
                            _ => None,
                        };
                        b.add_component(
                            format!("k{i}"),
                            "Part",
                            ComponentState::ALL[c.state],
                            c.recycled,
                            *c.manufacturer.get(&manufacturers),
                            product,
                        )
                    })
                    .collect();

                let mut returns = Vec::new();
                if !products.is_empty() {
                    for (i, o) in orders.into_iter().enumerate() {
                        let consumer = *o.consumer.get(&consumers);
                        let order = b.add_order(
                            format!("o{i}"),
                            consumer,
                            *o.product.get(&products),
                            o.date.as_str(),
                        );
                        if let Some((date, reason)) = o.returned {
                            returns.push(b.add_return(
                                format!("ret{i}"),
                                consumer,
                                order,
                                reason,
                                date.as_str(),
                            ));
                        }
                    }
                }

                if !returns.is_empty() && !facilities.is_empty() {
                    let mut shipment_id = 0;
                    for (i, p) in processes.into_iter().enumerate() {
                        let process = b.add_process(
                            *p.origin.get(&returns),
                            format!("proc{i}"),
                            circular_kind(p.kind),
                            *p.facility.get(&facilities),
                            p.energy,
                            p.water,
                        );
                        if circular_kind(p.kind) == CircularKind::Recycle && !components.is_empty() {
                            for index in p.recycled {
                                b.add_recycled_component(process, *index.get(&components));
                            }
                        }
                        for s in p.shipments {
                            b.add_shipment(
                                process,
                                format!("s{shipment_id}"),
                                s.delivered,
                                s.date.as_str(),
                                s.co2,
                                *s.destination.get(&all_actors),
                            );
                            shipment_id += 1;
                        }
                    }
                }

                b.build()
            },
        )
}

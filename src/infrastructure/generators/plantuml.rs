//! PlantUML object diagram
//!
//! One object per entity and one labelled link per relationship. Aliases
//! are derived from entity kind and position, so arbitrary identities never
//! clash or break PlantUML syntax.

use std::fmt::Write;

use crate::domain::entities::Economy;
use crate::domain::ports::{Generator, GeneratorError};
use crate::domain::value_objects::OutputFormat;

fn alias(kind: &str, index: usize) -> String {
    format!("{kind}_{index}")
}

/// Collects diagram lines; writing to a `String` cannot fail
#[derive(Default)]
struct Diagram {
    objects: String,
    links: String,
}

impl Diagram {
    fn object(&mut self, alias: &str, id: &str, stereotype: &str, fields: &[(&str, String)]) {
        let label = id.replace('"', "'");
        let _ = writeln!(self.objects, "object \"{label}\" as {alias} <<{stereotype}>> {{");
        for (name, value) in fields {
            let _ = writeln!(self.objects, "  {name} = {value}");
        }
        let _ = writeln!(self.objects, "}}");
    }

    fn link(&mut self, source: &str, target: &str, label: &str) {
        let _ = writeln!(self.links, "{source} --> {target} : {label}");
    }
}

pub fn diagram(economy: &Economy) -> String {
    let mut d = Diagram::default();

    let actor = |i: usize| alias("actor", i);
    let goal = |i: usize| alias("goal", i);
    let facility = |i: usize| alias("facility", i);
    let product = |i: usize| alias("product", i);
    let component = |i: usize| alias("component", i);
    let order = |i: usize| alias("order", i);
    let ret = |i: usize| alias("return", i);
    let process = |i: usize| alias("process", i);
    let shipment = |i: usize| alias("shipment", i);

    for (i, a) in economy.actors().iter().enumerate() {
        d.object(&actor(i), &a.id, a.kind.as_str(), &[]);
    }

    for (i, g) in economy.goals().iter().enumerate() {
        d.object(
            &goal(i),
            &g.id,
            "SUSTAINABILITY_GOAL",
            &[
                ("description", g.description.clone()),
                ("standard", g.standard.to_string()),
                ("comparator", g.comparator.to_string()),
            ],
        );
    }

    for (i, f) in economy.facilities().iter().enumerate() {
        d.object(
            &facility(i),
            &f.id,
            "FACILITY",
            &[("type", f.facility_type.to_string())],
        );
        for g in &f.goals {
            d.link(&facility(i), &goal(g.index()), "pursues");
        }
    }

    for (i, p) in economy.products().iter().enumerate() {
        d.object(
            &product(i),
            &p.id,
            "PRODUCT",
            &[
                ("name", p.name.clone()),
                ("assemblyDate", p.assembly_date.to_string()),
                ("price", p.price.to_string()),
            ],
        );
        d.link(&actor(p.retailer.index()), &product(i), "sells");
        for c in &p.components {
            d.link(&product(i), &component(c.index()), "contains");
        }
    }

    for (i, c) in economy.components().iter().enumerate() {
        d.object(
            &component(i),
            &c.id,
            "COMPONENT",
            &[
                ("name", c.name.clone()),
                ("state", c.state.to_string()),
                ("recycled", c.recycled.to_string()),
            ],
        );
        d.link(&actor(c.manufacturer.index()), &component(i), "produces");
    }

    for (i, o) in economy.orders().iter().enumerate() {
        d.object(&order(i), &o.id, "ORDER", &[("date", o.date.to_string())]);
        d.link(&actor(o.consumer.index()), &order(i), "places");
        d.link(&order(i), &product(o.product.index()), "of");
    }

    for (i, r) in economy.returns().iter().enumerate() {
        let mut fields = vec![("date", r.date.to_string())];
        if let Some(reason) = &r.reason {
            fields.push(("reason", reason.clone()));
        }
        d.object(&ret(i), &r.id, "RETURN", &fields);
        d.link(&ret(i), &order(r.order.index()), "returns");
        d.link(&ret(i), &actor(r.consumer.index()), "by");
        for p in &r.processes {
            d.link(&ret(i), &process(p.index()), "triggers");
        }
    }

    for (i, p) in economy.processes().iter().enumerate() {
        d.object(
            &process(i),
            &p.id,
            "CIRCULAR_PROCESS",
            &[
                ("kind", p.kind.to_string()),
                ("energySavedKWh", p.energy_saved_kwh.to_string()),
                ("waterSavedL", p.water_saved_l.to_string()),
            ],
        );
        d.link(&process(i), &facility(p.facility.index()), "at");
        for c in &p.recycled_components {
            d.link(&process(i), &component(c.index()), "recycles");
        }
        for s in &p.shipments {
            d.link(&process(i), &shipment(s.index()), "ships");
        }
    }

    for (i, s) in economy.shipments().iter().enumerate() {
        d.object(
            &shipment(i),
            &s.id,
            "SHIPMENT",
            &[
                ("delivered", s.delivered.to_string()),
                ("deliveryDate", s.delivery_date.to_string()),
                ("co2Emission", s.co2_emission.to_string()),
            ],
        );
        d.link(&shipment(i), &actor(s.destination.index()), "to");
    }

    let mut out = String::new();
    let _ = writeln!(out, "@startuml");
    let _ = writeln!(out, "title {}", economy.name());
    out.push('\n');
    out.push_str(&d.objects);
    if !d.links.is_empty() {
        out.push('\n');
        out.push_str(&d.links);
    }
    out.push_str("@enduml\n");
    out
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlantUmlGenerator;

impl Generator for PlantUmlGenerator {
    fn format(&self) -> OutputFormat {
        OutputFormat::Plantuml
    }

    fn generate(&self, economy: &Economy) -> Result<String, GeneratorError> {
        Ok(diagram(economy))
    }
}

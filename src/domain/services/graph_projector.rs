//! Graph Projector
//!
//! Flattens an [`Economy`] into typed nodes and edges. Node order follows
//! entity kind then model order; edges follow the same traversal.

use std::collections::HashSet;

use crate::domain::entities::{
    ComponentAttributes, Economy, EdgeType, FacilityAttributes, GoalAttributes, Graph, GraphEdge,
    GraphNode, NodeAttributes, OrderAttributes, ProcessAttributes, ProductAttributes,
    ReturnAttributes, ShipmentAttributes,
};

/// Builds the node/edge projection of an economy
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphProjector;

impl GraphProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, economy: &Economy) -> Graph {
        let mut builder = GraphBuilder::default();

        for actor in economy.actors() {
            builder.node(GraphNode::actor(&actor.id, actor.kind));
        }

        for goal in economy.goals() {
            builder.node(GraphNode::with_attributes(
                &goal.id,
                NodeAttributes::Goal(GoalAttributes {
                    description: goal.description.clone(),
                    standard: goal.standard,
                    comparator: goal.comparator,
                }),
            ));
        }

        for facility in economy.facilities() {
            builder.node(GraphNode::with_attributes(
                &facility.id,
                NodeAttributes::Facility(FacilityAttributes {
                    facility_type: facility.facility_type,
                }),
            ));
            for goal in &facility.goals {
                builder.edge(&facility.id, &economy.goal(*goal).id, EdgeType::FacilityHasGoal);
            }
        }

        for product in economy.products() {
            builder.node(GraphNode::with_attributes(
                &product.id,
                NodeAttributes::Product(ProductAttributes {
                    product_name: product.name.clone(),
                    assembly_date: product.assembly_date.to_string(),
                    price: product.price,
                }),
            ));
            builder.edge(
                &economy.actor(product.retailer).id,
                &product.id,
                EdgeType::RetailerSellsProduct,
            );
            for component in &product.components {
                builder.edge(
                    &product.id,
                    &economy.component(*component).id,
                    EdgeType::ProductHasComponent,
                );
            }
        }

        for component in economy.components() {
            builder.node(GraphNode::with_attributes(
                &component.id,
                NodeAttributes::Component(ComponentAttributes {
                    component_name: component.name.clone(),
                    state: component.state,
                    recycled: component.recycled,
                }),
            ));
            builder.edge(
                &economy.actor(component.manufacturer).id,
                &component.id,
                EdgeType::ManufacturerProducesComponent,
            );
        }

        for order in economy.orders() {
            builder.node(GraphNode::with_attributes(
                &order.id,
                NodeAttributes::Order(OrderAttributes {
                    order_date: order.date.to_string(),
                }),
            ));
            builder.edge(
                &economy.actor(order.consumer).id,
                &order.id,
                EdgeType::ConsumerPlacesOrder,
            );
            builder.edge(
                &order.id,
                &economy.product(order.product).id,
                EdgeType::OrderOfProduct,
            );
        }

        for ret in economy.returns() {
            builder.node(GraphNode::with_attributes(
                &ret.id,
                NodeAttributes::Return(ReturnAttributes {
                    return_date: ret.date.to_string(),
                    reason: ret.reason.clone(),
                }),
            ));
            builder.edge(&ret.id, &economy.order(ret.order).id, EdgeType::ReturnOfOrder);
            builder.edge(
                &ret.id,
                &economy.actor(ret.consumer).id,
                EdgeType::ReturnByConsumer,
            );
            for process in &ret.processes {
                builder.edge(
                    &ret.id,
                    &economy.process(*process).id,
                    EdgeType::ReturnHasProcess,
                );
            }
        }

        for process in economy.processes() {
            builder.node(GraphNode::with_attributes(
                &process.id,
                NodeAttributes::Process(ProcessAttributes {
                    kind: process.kind,
                    energy_saved_kwh: process.energy_saved_kwh,
                    water_saved_l: process.water_saved_l,
                }),
            ));
            builder.edge(
                &process.id,
                &economy.facility(process.facility).id,
                EdgeType::ProcessAtFacility,
            );
            for component in &process.recycled_components {
                builder.edge(
                    &process.id,
                    &economy.component(*component).id,
                    EdgeType::ProcessRecyclesComponent,
                );
            }
            for shipment in &process.shipments {
                builder.edge(
                    &process.id,
                    &economy.shipment(*shipment).id,
                    EdgeType::ProcessHasShipment,
                );
            }
        }

        for shipment in economy.shipments() {
            builder.node(GraphNode::with_attributes(
                &shipment.id,
                NodeAttributes::Shipment(ShipmentAttributes {
                    delivered: shipment.delivered,
                    delivery_date: shipment.delivery_date.to_string(),
                    co2_emission: shipment.co2_emission,
                }),
            ));
            builder.edge(
                &shipment.id,
                &economy.actor(shipment.destination).id,
                EdgeType::ShipmentDestination,
            );
        }

        let graph = builder.finish();
        tracing::debug!(
            economy = economy.name(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "projected graph"
        );
        graph
    }
}

#[derive(Default)]
struct GraphBuilder {
    seen: HashSet<String>,
    graph: Graph,
}

impl GraphBuilder {
    /// Add a node unless one with the same id is already present
    fn node(&mut self, node: GraphNode) {
        if self.seen.insert(node.id.clone()) {
            self.graph.nodes.push(node);
        }
    }

    fn edge(&mut self, source: &str, target: &str, edge_type: EdgeType) {
        self.graph.edges.push(GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
            edge_type,
        });
    }

    fn finish(self) -> Graph {
        self.graph
    }
}

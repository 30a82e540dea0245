//! Graph projector properties

use std::collections::HashSet;

use proptest::prelude::*;

use ceml::domain::entities::{EdgeType, NodeType};
use ceml::GraphProjector;

use crate::strategy::economy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn one_node_per_entity(economy in economy()) {
        let graph = GraphProjector::new().project(&economy);

        prop_assert_eq!(graph.nodes.len(), economy.entity_count());
        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), graph.nodes.len());

        prop_assert_eq!(graph.count_nodes(NodeType::Shipment), economy.shipments().len());
        prop_assert_eq!(graph.count_nodes(NodeType::CircularProcess), economy.processes().len());
        prop_assert_eq!(graph.count_nodes(NodeType::SustainabilityGoal), economy.goals().len());
    }

    #[test]
    fn only_actor_nodes_lack_attributes(economy in economy()) {
        let graph = GraphProjector::new().project(&economy);
        for node in &graph.nodes {
            prop_assert_eq!(node.attrs.is_none(), node.node_type.is_actor(), "node {}", node.id);
            if let Some(attrs) = &node.attrs {
                prop_assert_eq!(attrs.node_type(), node.node_type);
            }
        }
    }

    #[test]
    fn edges_connect_projected_nodes(economy in economy()) {
        let graph = GraphProjector::new().project(&economy);
        let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &graph.edges {
            prop_assert!(ids.contains(edge.source.as_str()), "dangling source {:?}", edge);
            prop_assert!(ids.contains(edge.target.as_str()), "dangling target {:?}", edge);
        }
    }

    #[test]
    fn one_edge_per_relationship(economy in economy()) {
        let graph = GraphProjector::new().project(&economy);

        let linked_components = economy.components().iter().filter(|c| c.product.is_some()).count();
        let facility_goals: usize = economy.facilities().iter().map(|f| f.goals.len()).sum();
        let recycled: usize = economy
            .processes()
            .iter()
            .map(|p| p.recycled_components.len())
            .sum();

        let expected = |edge_type: EdgeType| match edge_type {
            EdgeType::ProductHasComponent => linked_components,
            EdgeType::RetailerSellsProduct => economy.products().len(),
            EdgeType::ManufacturerProducesComponent => economy.components().len(),
            EdgeType::ConsumerPlacesOrder | EdgeType::OrderOfProduct => economy.orders().len(),
            EdgeType::ReturnOfOrder | EdgeType::ReturnByConsumer => economy.returns().len(),
            EdgeType::ReturnHasProcess | EdgeType::ProcessAtFacility => economy.processes().len(),
            EdgeType::ProcessRecyclesComponent => recycled,
            EdgeType::ProcessHasShipment | EdgeType::ShipmentDestination => {
                economy.shipments().len()
            }
            EdgeType::FacilityHasGoal => facility_goals,
        };

        for edge_type in EdgeType::ALL {
            prop_assert_eq!(graph.count_edges(edge_type), expected(edge_type), "{:?}", edge_type);
        }
        let total: usize = EdgeType::ALL.into_iter().map(expected).sum();
        prop_assert_eq!(graph.edges.len(), total);
    }

    #[test]
    fn projection_is_deterministic(economy in economy()) {
        let projector = GraphProjector::new();
        prop_assert_eq!(projector.project(&economy), projector.project(&economy));
    }
}

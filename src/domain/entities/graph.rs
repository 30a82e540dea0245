//! Generic node/edge projection of an economy
//!
//! Node attributes are a closed set: each node type carries exactly the
//! scalar fields of its entity kind, and actor nodes carry none.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorKind, Comparator, ComponentState, FacilityType, ProcessKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Component,
    Product,
    Consumer,
    Retailer,
    Manufacturer,
    Order,
    Return,
    CircularProcess,
    Shipment,
    Facility,
    SustainabilityGoal,
}

impl NodeType {
    pub fn is_actor(&self) -> bool {
        matches!(
            self,
            NodeType::Consumer | NodeType::Retailer | NodeType::Manufacturer
        )
    }
}

impl From<ActorKind> for NodeType {
    fn from(kind: ActorKind) -> Self {
        match kind {
            ActorKind::Manufacturer => NodeType::Manufacturer,
            ActorKind::Retailer => NodeType::Retailer,
            ActorKind::Consumer => NodeType::Consumer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    ProductHasComponent,
    RetailerSellsProduct,
    ManufacturerProducesComponent,
    ConsumerPlacesOrder,
    OrderOfProduct,
    ReturnOfOrder,
    ReturnByConsumer,
    ReturnHasProcess,
    ProcessAtFacility,
    ProcessRecyclesComponent,
    ProcessHasShipment,
    ShipmentDestination,
    FacilityHasGoal,
}

impl EdgeType {
    pub const ALL: [EdgeType; 13] = [
        EdgeType::ProductHasComponent,
        EdgeType::RetailerSellsProduct,
        EdgeType::ManufacturerProducesComponent,
        EdgeType::ConsumerPlacesOrder,
        EdgeType::OrderOfProduct,
        EdgeType::ReturnOfOrder,
        EdgeType::ReturnByConsumer,
        EdgeType::ReturnHasProcess,
        EdgeType::ProcessAtFacility,
        EdgeType::ProcessRecyclesComponent,
        EdgeType::ProcessHasShipment,
        EdgeType::ShipmentDestination,
        EdgeType::FacilityHasGoal,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GoalAttributes {
    pub description: String,
    pub standard: f64,
    pub comparator: Comparator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FacilityAttributes {
    pub facility_type: FacilityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductAttributes {
    pub product_name: String,
    pub assembly_date: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComponentAttributes {
    pub component_name: String,
    pub state: ComponentState,
    pub recycled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderAttributes {
    pub order_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReturnAttributes {
    pub return_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcessAttributes {
    pub kind: ProcessKind,
    #[serde(rename = "energySavedKWh")]
    pub energy_saved_kwh: f64,
    pub water_saved_l: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShipmentAttributes {
    pub delivered: bool,
    pub delivery_date: String,
    pub co2_emission: f64,
}

/// Scalar snapshot of a non-actor entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeAttributes {
    Goal(GoalAttributes),
    Facility(FacilityAttributes),
    Product(ProductAttributes),
    Component(ComponentAttributes),
    Order(OrderAttributes),
    Return(ReturnAttributes),
    Process(ProcessAttributes),
    Shipment(ShipmentAttributes),
}

impl NodeAttributes {
    /// Node type these attributes belong to
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeAttributes::Goal(_) => NodeType::SustainabilityGoal,
            NodeAttributes::Facility(_) => NodeType::Facility,
            NodeAttributes::Product(_) => NodeType::Product,
            NodeAttributes::Component(_) => NodeType::Component,
            NodeAttributes::Order(_) => NodeType::Order,
            NodeAttributes::Return(_) => NodeType::Return,
            NodeAttributes::Process(_) => NodeType::CircularProcess,
            NodeAttributes::Shipment(_) => NodeType::Shipment,
        }
    }

    /// Decode a JSON attribute payload as the variant owned by `node_type`
    pub fn from_json(node_type: NodeType, value: serde_json::Value) -> serde_json::Result<Self> {
        use serde::de::Error;

        let attributes = match node_type {
            NodeType::SustainabilityGoal => NodeAttributes::Goal(serde_json::from_value(value)?),
            NodeType::Facility => NodeAttributes::Facility(serde_json::from_value(value)?),
            NodeType::Product => NodeAttributes::Product(serde_json::from_value(value)?),
            NodeType::Component => NodeAttributes::Component(serde_json::from_value(value)?),
            NodeType::Order => NodeAttributes::Order(serde_json::from_value(value)?),
            NodeType::Return => NodeAttributes::Return(serde_json::from_value(value)?),
            NodeType::CircularProcess => NodeAttributes::Process(serde_json::from_value(value)?),
            NodeType::Shipment => NodeAttributes::Shipment(serde_json::from_value(value)?),
            NodeType::Consumer | NodeType::Retailer | NodeType::Manufacturer => {
                return Err(serde_json::Error::custom(format!(
                    "{node_type:?} nodes carry no attributes"
                )))
            }
        };
        Ok(attributes)
    }
}

/// One entity instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraphNode")]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NodeAttributes>,
}

impl GraphNode {
    /// Attribute-less node for an actor
    pub fn actor(id: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: id.into(),
            node_type: kind.into(),
            attrs: None,
        }
    }

    /// Node typed by its attribute snapshot
    pub fn with_attributes(id: impl Into<String>, attrs: NodeAttributes) -> Self {
        Self {
            id: id.into(),
            node_type: attrs.node_type(),
            attrs: Some(attrs),
        }
    }
}

/// Wire shape of a node before its attributes are typed
#[derive(Deserialize)]
struct RawGraphNode {
    id: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(default)]
    attrs: Option<serde_json::Value>,
}

impl TryFrom<RawGraphNode> for GraphNode {
    type Error = serde_json::Error;

    fn try_from(raw: RawGraphNode) -> Result<Self, Self::Error> {
        let attrs = raw
            .attrs
            .map(|value| NodeAttributes::from_json(raw.node_type, value))
            .transpose()?;
        Ok(Self {
            id: raw.id,
            node_type: raw.node_type,
            attrs,
        })
    }
}

/// One relationship occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn count_nodes(&self, node_type: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.node_type == node_type).count()
    }

    pub fn count_edges(&self, edge_type: EdgeType) -> usize {
        self.edges.iter().filter(|e| e.edge_type == edge_type).count()
    }
}

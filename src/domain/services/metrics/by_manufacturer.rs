//! Component state breakdown per manufacturer

use std::collections::BTreeMap;

use crate::domain::entities::{Component, Economy, ManufacturerMetrics};
use crate::domain::services::grouping::{group_by, Reducer};
use crate::domain::value_objects::ComponentState;

impl<'a> Reducer<&'a Component> for ManufacturerMetrics {
    type Output = ManufacturerMetrics;

    fn push(&mut self, component: &'a Component) {
        self.component_count += 1;
        match component.state {
            ComponentState::Assembled => self.components_assembled += 1,
            ComponentState::Ready => self.components_ready += 1,
            ComponentState::InCircularProcess => self.components_in_circular_process += 1,
        }
        if component.recycled {
            self.components_recycled += 1;
        }
    }

    fn finish(self) -> ManufacturerMetrics {
        self
    }
}

pub(super) fn by_manufacturer(economy: &Economy) -> BTreeMap<String, ManufacturerMetrics> {
    group_by(
        economy.components(),
        |component| Some(economy.actor(component.manufacturer).id.clone()),
        ManufacturerMetrics::default,
    )
}

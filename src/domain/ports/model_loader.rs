//! ModelLoader port - turns a source document into a resolved economy

use std::path::Path;

use crate::domain::entities::Economy;
use crate::error::CemlResult;

/// Loads and resolves a circular-economy model
pub trait ModelLoader {
    /// Load the model stored at `path`.
    ///
    /// Every reference in the returned economy is resolved; dangling or
    /// ill-typed references are reported as errors instead.
    fn load(&self, path: &Path) -> CemlResult<Economy>;
}

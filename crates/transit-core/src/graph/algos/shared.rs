use crate::bail_unknown_node;
use crate::error::Result;
use crate::graph::GraphProvider;

/// Fail with `UnknownNode` unless `start` is part of the graph
pub fn ensure_start(provider: &dyn GraphProvider, start: &str) -> Result<()> {
    if !provider.contains(start) {
        bail_unknown_node!(start);
    }
    Ok(())
}

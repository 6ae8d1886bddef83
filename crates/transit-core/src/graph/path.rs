//! Path reconstruction from predecessor links

use std::collections::HashMap;

/// Walk predecessor links back from `to` and return the forward path
///
/// Returns an empty path when `to` is neither `from` nor linked to it.
pub fn reconstruct_path(from: &str, to: &str, predecessors: &HashMap<&str, &str>) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(&pred) => {
                path.push(pred.to_string());
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

use alloc::vec;
use alloc::vec::Vec;

use crate::algo::{searchable, AugmentingPath, PathSearch};
use crate::capacity::Capacity;
use crate::network::FlowNetwork;

/// Stack-based augmenting path search.
///
/// Each vertex is visited once and the search stops as soon as the sink is reached, so the path
/// returned is simply the first one found. Every augmentation consumes at least one unit of
/// residual capacity, which bounds the number of rounds by `V * max capacity`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DepthFirst;

impl PathSearch for DepthFirst {
    fn find_path<Cap: Capacity>(
        &mut self,
        network: &FlowNetwork<Cap>,
        source: usize,
        sink: usize,
    ) -> Option<AugmentingPath<Cap>> {
        if !searchable(network, source, sink) {
            return None;
        }

        let mut visited = vec![false; network.vertex_count()];
        let mut parents = vec![None; network.vertex_count()];
        let mut stack = Vec::from([source]);
        visited[source] = true;

        'search: while let Some(u) = stack.pop() {
            for (id, edge) in network.outgoing(u) {
                let v = edge.to();
                if visited[v] || edge.residual_capacity() <= Cap::zero() {
                    continue;
                }

                visited[v] = true;
                parents[v] = Some(id);
                if v == sink {
                    break 'search;
                }
                stack.push(v);
            }
        }

        if !visited[sink] {
            return None;
        }
        AugmentingPath::from_parents(network, parents, source, sink)
    }
}

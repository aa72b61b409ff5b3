use alloc::collections::VecDeque;
use alloc::vec;

use crate::algo::{searchable, AugmentingPath, PathSearch};
use crate::capacity::Capacity;
use crate::network::FlowNetwork;

/// Shortest augmenting path search (Edmonds-Karp).
///
/// The FIFO frontier guarantees the returned path has the fewest edges among all augmenting
/// paths. An edge that is the bottleneck of a path of length `k` can only be the bottleneck again
/// on a path of length at least `k + 2`, so there are at most `E * V / 2` augmentations.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
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
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        'search: while let Some(u) = queue.pop_front() {
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
                queue.push_back(v);
            }
        }

        if !visited[sink] {
            return None;
        }
        AugmentingPath::from_parents(network, parents, source, sink)
    }
}

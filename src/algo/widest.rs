use alloc::collections::BinaryHeap;
use alloc::vec;

use crate::algo::{searchable, AugmentingPath, PathSearch};
use crate::capacity::Capacity;
use crate::network::FlowNetwork;

/// Maximum residual capacity ("fattest path") search.
///
/// A Dijkstra-like widest-path search: `best[v]` holds the largest bottleneck known for reaching
/// `v`, and the unsettled vertex with the largest such value is expanded next. A vertex is settled
/// when it is popped, never merely when it is reached. Bounds the number of augmentations by
/// `E * log(max capacity)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct WidestPath;

impl PathSearch for WidestPath {
    fn find_path<Cap: Capacity>(
        &mut self,
        network: &FlowNetwork<Cap>,
        source: usize,
        sink: usize,
    ) -> Option<AugmentingPath<Cap>> {
        if !searchable(network, source, sink) {
            return None;
        }

        let mut settled = vec![false; network.vertex_count()];
        let mut parents = vec![None; network.vertex_count()];
        let mut best = vec![Cap::zero(); network.vertex_count()];
        best[source] = Cap::max_value();

        let mut heap = BinaryHeap::from([(best[source], source)]);
        while let Some((width, u)) = heap.pop() {
            if width <= Cap::zero() {
                break;
            }
            // stale entry for a vertex that was already settled through a wider path
            if settled[u] {
                continue;
            }
            settled[u] = true;
            if u == sink {
                break;
            }

            for (id, edge) in network.outgoing(u) {
                let v = edge.to();
                if settled[v] {
                    continue;
                }

                let candidate = width.min(edge.residual_capacity());
                if candidate > best[v] {
                    best[v] = candidate;
                    parents[v] = Some(id);
                    heap.push((candidate, v));
                }
            }
        }

        if !settled[sink] {
            return None;
        }
        Some(AugmentingPath::new(best[sink], parents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::tests::{diamond, vertices};

    #[test]
    fn prefers_capacity_over_fewer_edges() {
        let mut network = FlowNetwork::new(5);
        network.add_edge(0, 1, 9).unwrap();
        network.add_edge(1, 2, 8).unwrap();
        network.add_edge(2, 4, 7).unwrap();
        network.add_edge(0, 3, 1).unwrap();
        network.add_edge(3, 4, 1).unwrap();
        network.build_residual_view();

        let path = WidestPath.find_path(&network, 0, 4).unwrap();
        assert_eq!(vertices(&network, &path, 0, 4), vec![0, 1, 2, 4]);
        assert_eq!(path.bottleneck(), 7);
    }

    #[test]
    fn picks_the_widest_of_the_diamond() {
        let network = diamond();
        let path = WidestPath.find_path(&network, 0, 3).unwrap();
        assert_eq!(vertices(&network, &path, 0, 3), vec![0, 1, 3]);
        assert_eq!(path.bottleneck(), 5);
    }

    #[test]
    fn reaching_a_vertex_does_not_settle_it() {
        // 2 is first reached with width 1 from 0, later widened to 4 through 1
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 2, 1).unwrap();
        network.add_edge(0, 1, 6).unwrap();
        network.add_edge(1, 2, 4).unwrap();
        network.add_edge(2, 3, 9).unwrap();
        network.build_residual_view();

        let path = WidestPath.find_path(&network, 0, 3).unwrap();
        assert_eq!(vertices(&network, &path, 0, 3), vec![0, 1, 2, 3]);
        assert_eq!(path.bottleneck(), 4);
    }
}

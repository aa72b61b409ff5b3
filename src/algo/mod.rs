use alloc::vec::Vec;
use core::fmt;

use crate::capacity::Capacity;
use crate::edge::EdgeId;
use crate::error::Error;
use crate::network::FlowNetwork;

pub mod bfs;
pub mod dfs;
pub mod max_flow;
pub mod widest;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use widest::WidestPath;

/// One source-to-sink path of positive-residual edges, as found by a [`PathSearch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<Cap> {
    bottleneck: Cap,
    // edge through which each visited vertex was first reached
    parents: Vec<Option<EdgeId>>,
}

impl<Cap: Capacity> AugmentingPath<Cap> {
    pub(crate) fn new(bottleneck: Cap, parents: Vec<Option<EdgeId>>) -> Self {
        Self {
            bottleneck,
            parents,
        }
    }

    /// Builds the path ending in `sink` out of `parents`, computing its bottleneck.
    pub(crate) fn from_parents(
        network: &FlowNetwork<Cap>,
        parents: Vec<Option<EdgeId>>,
        source: usize,
        sink: usize,
    ) -> Option<Self> {
        let mut bottleneck = Cap::max_value();
        let mut v = sink;
        while v != source {
            let edge = network.edge(parents[v]?);
            bottleneck = bottleneck.min(edge.residual_capacity());
            v = edge.from();
        }
        Some(Self::new(bottleneck, parents))
    }

    pub fn bottleneck(&self) -> Cap {
        self.bottleneck
    }

    /// The edge through which `vertex` was reached, if it was visited.
    pub fn parent_edge(&self, vertex: usize) -> Option<EdgeId> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Edges of the path from `sink` back to `source`.
    pub fn edges<'a>(
        &'a self,
        network: &'a FlowNetwork<Cap>,
        source: usize,
        sink: usize,
    ) -> impl Iterator<Item = EdgeId> + 'a {
        let mut v = sink;
        core::iter::from_fn(move || {
            if v == source {
                return None;
            }
            let id = self.parent_edge(v)?;
            v = network.edge(id).from();
            Some(id)
        })
    }
}

/// An augmenting path search over a network whose residual view is built.
///
/// Implementations only read the network; flow is updated by the max-flow driver.
pub trait PathSearch {
    /// Returns `None` when `sink` is unreachable through positive-residual edges, when
    /// `source == sink` (no edge needs to be traversed, so no capacity is consumed), or when
    /// either terminal is not a vertex of `network`.
    fn find_path<Cap: Capacity>(
        &mut self,
        network: &FlowNetwork<Cap>,
        source: usize,
        sink: usize,
    ) -> Option<AugmentingPath<Cap>>;

    /// Like [`PathSearch::find_path`], but rejects out-of-range terminals with
    /// [`Error::InvalidVertex`].
    fn try_find_path<Cap: Capacity>(
        &mut self,
        network: &FlowNetwork<Cap>,
        source: usize,
        sink: usize,
    ) -> Result<Option<AugmentingPath<Cap>>, Error> {
        network.validate_vertex(source)?;
        network.validate_vertex(sink)?;
        Ok(self.find_path(network, source, sink))
    }
}

/// Whether a search between `source` and `sink` can traverse any edge at all.
pub(crate) fn searchable<Cap: Capacity>(
    network: &FlowNetwork<Cap>,
    source: usize,
    sink: usize,
) -> bool {
    source != sink && network.contains_vertex(source) && network.contains_vertex(sink)
}

/// The augmenting path strategies the max-flow driver can run with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Stack-based search, returning whichever path it reaches the sink through first
    DepthFirst,
    /// Queue-based search returning a path with the fewest edges (Edmonds-Karp)
    #[default]
    BreadthFirst,
    /// Priority search returning a path with the largest bottleneck
    WidestPath,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::WidestPath,
    ];
}

impl PathSearch for Strategy {
    fn find_path<Cap: Capacity>(
        &mut self,
        network: &FlowNetwork<Cap>,
        source: usize,
        sink: usize,
    ) -> Option<AugmentingPath<Cap>> {
        match self {
            Strategy::DepthFirst => DepthFirst.find_path(network, source, sink),
            Strategy::BreadthFirst => BreadthFirst.find_path(network, source, sink),
            Strategy::WidestPath => WidestPath.find_path(network, source, sink),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::WidestPath => write!(f, "widest-path"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use alloc::vec;

    use super::*;

    /// `0 -> 1 -> 3` (cap 5) and `0 -> 2 -> 3` (cap 3), residual view built.
    pub(crate) fn diamond() -> FlowNetwork<i32> {
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 1, 5).unwrap();
        network.add_edge(1, 3, 5).unwrap();
        network.add_edge(0, 2, 3).unwrap();
        network.add_edge(2, 3, 3).unwrap();
        network.build_residual_view();
        network
    }

    /// Vertex sequence of `path` from source to sink.
    pub(crate) fn vertices(
        network: &FlowNetwork<i32>,
        path: &AugmentingPath<i32>,
        source: usize,
        sink: usize,
    ) -> Vec<usize> {
        let mut vertices: Vec<_> = path
            .edges(network, source, sink)
            .map(|id| network.edge(id).to())
            .collect();
        vertices.push(source);
        vertices.reverse();
        vertices
    }

    #[test]
    fn every_strategy_finds_a_positive_path() {
        let network = diamond();
        for mut strategy in Strategy::ALL {
            let path = strategy.find_path(&network, 0, 3).unwrap();
            let vertices = vertices(&network, &path, 0, 3);

            assert!(path.bottleneck() > 0);
            assert_eq!(vertices.first(), Some(&0));
            assert_eq!(vertices.last(), Some(&3));
            assert!(path
                .edges(&network, 0, 3)
                .all(|id| network.edge(id).residual_capacity() >= path.bottleneck()));
        }
    }

    #[test]
    fn source_equal_to_sink_yields_no_path() {
        let network = diamond();
        for mut strategy in Strategy::ALL {
            assert_eq!(strategy.find_path(&network, 2, 2), None);
        }
    }

    #[test]
    fn unreachable_sink_yields_no_path() {
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 1, 3).unwrap();
        network.add_edge(2, 3, 3).unwrap();
        network.build_residual_view();

        for mut strategy in Strategy::ALL {
            assert_eq!(strategy.find_path(&network, 0, 3), None);
        }
    }

    #[test]
    fn saturated_edges_are_not_traversed() {
        let mut network = FlowNetwork::new(2);
        network.add_edge(0, 1, 0).unwrap();
        network.build_residual_view();

        for mut strategy in Strategy::ALL {
            assert_eq!(strategy.find_path(&network, 0, 1), None);
        }
    }

    #[test]
    fn out_of_range_terminals_are_rejected() {
        let network = diamond();
        for mut strategy in Strategy::ALL {
            assert_eq!(strategy.find_path(&network, 0, 9), None);
            assert_eq!(strategy.find_path(&network, 9, 2), None);
            assert_eq!(
                strategy.try_find_path(&network, 0, 9),
                Err(Error::InvalidVertex {
                    vertex: 9,
                    vertex_count: 4
                })
            );
            assert_eq!(
                strategy.try_find_path(&network, 7, 3),
                Err(Error::InvalidVertex {
                    vertex: 7,
                    vertex_count: 4
                })
            );
            assert!(strategy.try_find_path(&network, 0, 3).unwrap().is_some());
        }
        assert_eq!(DepthFirst.find_path(&network, 0, 9), None);
        assert_eq!(BreadthFirst.find_path(&network, 0, 9), None);
        assert_eq!(WidestPath.find_path(&network, 9, 2), None);
    }

    #[test]
    fn path_reports_bottleneck_of_its_edges() {
        let network = diamond();
        let parents = vec![None, Some(0), None, Some(1)];
        let path = AugmentingPath::from_parents(&network, parents, 0, 3).unwrap();

        assert_eq!(path.bottleneck(), 5);
        assert_eq!(path.parent_edge(1), Some(0));
        assert_eq!(path.parent_edge(2), None);
        assert_eq!(path.parent_edge(9), None);
        assert_eq!(vertices(&network, &path, 0, 3), vec![0, 1, 3]);
    }
}

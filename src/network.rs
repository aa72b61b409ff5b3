use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};
use serde::Serialize;

use crate::capacity::Capacity;
use crate::edge::{Edge, EdgeId};
use crate::error::Error;

/// A real edge together with the flow it carries, as reported after a max-flow run.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EdgeFlow<Cap> {
    pub from: usize,
    pub to: usize,
    pub flow: Cap,
    pub capacity: Cap,
}

/// A directed capacitated network over the vertices `0..vertex_count`.
///
/// All edges live in a single arena; adjacency lists and twin links refer to edges by their
/// arena index. Twins only exist while the residual view is built.
#[derive(Clone, Debug)]
pub struct FlowNetwork<Cap> {
    edges: Vec<Edge<Cap>>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl<Cap: Capacity> FlowNetwork<Cap> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a network from a `petgraph` graph whose edge weights are capacities.
    ///
    /// Vertex indices are taken from `NodeIndexable::to_index`, so removed nodes of a stable
    /// graph simply become isolated vertices.
    pub fn from_graph<G>(g: G) -> Result<Self, Error>
    where
        G: IntoEdgeReferences<EdgeWeight = Cap> + NodeIndexable,
    {
        let mut network = Self::new(g.node_bound());
        for e in g.edge_references() {
            network.add_edge(g.to_index(e.source()), g.to_index(e.target()), *e.weight())?;
        }
        Ok(network)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges currently in the arena, residual twins included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn real_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_real()).count()
    }

    /// The edge stored at `id`.
    ///
    /// Ids are positions in the edge arena and shift when the residual view is discarded: only
    /// ids of edges added before the view was built stay valid across a max-flow run.
    ///
    /// Panics if `id` is not below `edge_count()`.
    pub fn edge(&self, id: EdgeId) -> &Edge<Cap> {
        &self.edges[id]
    }

    /// Outgoing edges of `u` in insertion order, twins included when the residual view is built.
    pub(crate) fn outgoing(&self, u: usize) -> impl Iterator<Item = (EdgeId, &Edge<Cap>)> + '_ {
        self.adjacency[u].iter().map(move |&id| (id, &self.edges[id]))
    }

    pub(crate) fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    pub(crate) fn validate_vertex(&self, vertex: usize) -> Result<usize, Error> {
        if self.contains_vertex(vertex) {
            Ok(vertex)
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Appends a real edge `u -> v` with zero flow and returns its id.
    ///
    /// An edge added while the residual view exists is placed after the twins, so its id
    /// changes once the view is discarded (see [`FlowNetwork::edge`]).
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: Cap) -> Result<EdgeId, Error> {
        self.validate_vertex(u)?;
        self.validate_vertex(v)?;
        if capacity < Cap::zero() {
            return Err(Error::InvalidCapacity);
        }

        let id = self.edges.len();
        self.edges.push(Edge::real(u, v, capacity));
        self.adjacency[u].push(id);
        Ok(id)
    }

    /// Gives every real edge lacking a twin a zero-capacity reverse edge. Idempotent.
    pub fn build_residual_view(&mut self) {
        let mut created = 0;
        for id in 0..self.edges.len() {
            let edge = &self.edges[id];
            if !edge.is_real() || edge.twin.is_some() {
                continue;
            }

            let twin = Edge::residual_of(id, edge);
            let twin_id = self.edges.len();
            self.adjacency[twin.from].push(twin_id);
            self.edges.push(twin);
            self.edges[id].twin = Some(twin_id);
            created += 1;
        }
        log::trace!("residual view built, {created} twin edges created");
    }

    /// Removes every residual edge. Real edges keep their flow but lose their twin link.
    pub fn discard_residual_view(&mut self) {
        let mut remap = vec![None; self.edges.len()];
        let mut kept = Vec::with_capacity(self.edges.len());
        for (old_id, mut edge) in self.edges.drain(..).enumerate() {
            if edge.is_real() {
                remap[old_id] = Some(kept.len());
                edge.twin = None;
                kept.push(edge);
            }
        }
        let discarded = remap.iter().filter(|id| id.is_none()).count();
        self.edges = kept;

        for adj in &mut self.adjacency {
            *adj = adj.iter().filter_map(|&old_id| remap[old_id]).collect();
        }
        log::trace!("residual view discarded, {discarded} twin edges removed");
    }

    /// Zeroes every real edge's flow and drops the residual view.
    pub fn reset_flows(&mut self) {
        self.discard_residual_view();
        self.edges.iter_mut().for_each(|e| e.flow = Cap::zero());
    }

    /// Pushes `delta` units along `id`, cancelling the same amount on its twin.
    pub(crate) fn augment_edge(&mut self, id: EdgeId, delta: Cap) {
        let edge = &mut self.edges[id];
        edge.flow += delta;
        if let Some(twin) = edge.twin {
            self.edges[twin].flow -= delta;
        }
    }

    /// `(from, to, flow, capacity)` of every real edge, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Cap, Cap)> + '_ {
        self.edges
            .iter()
            .filter(|e| e.is_real())
            .map(|e| (e.from, e.to, e.flow, e.capacity))
    }

    /// Real edges carrying flow, or all of them when `show_empty` is set.
    pub fn flows(&self, show_empty: bool) -> impl Iterator<Item = EdgeFlow<Cap>> + '_ {
        self.edges()
            .filter(move |(_, _, flow, _)| show_empty || *flow > Cap::zero())
            .map(|(from, to, flow, capacity)| EdgeFlow {
                from,
                to,
                flow,
                capacity,
            })
    }

    /// Net flow leaving `vertex` over real edges.
    pub fn net_outflow(&self, vertex: usize) -> Result<Cap, Error> {
        self.validate_vertex(vertex)?;
        Ok(self.edges().fold(Cap::zero(), |acc, (from, to, flow, _)| {
            if from == to {
                acc
            } else if from == vertex {
                acc + flow
            } else if to == vertex {
                acc - flow
            } else {
                acc
            }
        }))
    }

    /// Checks that every real edge respects its capacity and that flow is conserved at every
    /// vertex other than `source` and `sink`.
    pub fn check(&self, source: usize, sink: usize) -> Result<(), Error> {
        self.validate_vertex(source)?;
        self.validate_vertex(sink)?;

        if let Some((from, to, _, _)) = self
            .edges()
            .find(|(_, _, flow, capacity)| *flow < Cap::zero() || flow > capacity)
        {
            return Err(Error::CapacityExceeded { from, to });
        }

        // b - net balance (outflow minus inflow) of every vertex
        let b = self.edges().fold(
            vec![Cap::zero(); self.vertex_count()],
            |mut acc, (from, to, flow, _)| {
                acc[from] += flow;
                acc[to] -= flow;
                acc
            },
        );

        if let Some(vertex) = (0..self.vertex_count())
            .filter(|v| *v != source && *v != sink)
            .find(|v| !b[*v].is_zero())
        {
            return Err(Error::ConservationViolated { vertex });
        }

        log::debug!("          vertices: {}", self.vertex_count());
        log::debug!("        real edges: {}", self.real_edge_count());
        log::debug!("source net outflow: {}", b[source]);
        log::debug!("   sink net inflow: {}", -b[sink]);

        Ok(())
    }
}

impl<Cap: Capacity> fmt::Display for FlowNetwork<Cap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, adj) in self.adjacency.iter().enumerate() {
            for &id in adj {
                let e = &self.edges[id];
                writeln!(f, "{u} -> {} : {}/{} ({})", e.to, e.flow, e.capacity, e.kind)?;
            }
        }
        Ok(())
    }
}

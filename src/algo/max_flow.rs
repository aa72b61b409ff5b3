use alloc::vec::Vec;
use core::ops::ControlFlow;

use itertools::Itertools;

use crate::algo::{AugmentingPath, PathSearch, Strategy};
use crate::capacity::Capacity;
use crate::error::Error;
use crate::network::FlowNetwork;

/// Outcome of a max-flow run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxFlow<Cap> {
    /// Total flow sent from source to sink.
    pub value: Cap,
    /// Number of augmenting paths applied.
    pub augmentations: usize,
    /// Whether the run was stopped early by the caller; the flow is then feasible but not maximal.
    pub cancelled: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Searching,
    Done,
}

struct Driver<'a, Cap, S> {
    network: &'a mut FlowNetwork<Cap>,
    search: S,
    source: usize,
    sink: usize,
    state: State,
    result: MaxFlow<Cap>,
}

impl<'a, Cap: Capacity, S: PathSearch> Driver<'a, Cap, S> {
    fn new(network: &'a mut FlowNetwork<Cap>, search: S, source: usize, sink: usize) -> Self {
        network.reset_flows();
        network.build_residual_view();
        Self {
            network,
            search,
            source,
            sink,
            state: State::Searching,
            result: MaxFlow {
                value: Cap::zero(),
                augmentations: 0,
                cancelled: false,
            },
        }
    }

    fn step(&mut self) -> Result<(), Error> {
        match self
            .search
            .find_path(&*self.network, self.source, self.sink)
        {
            Some(path) => self.augment(&path),
            None => {
                self.state = State::Done;
                Ok(())
            }
        }
    }

    fn augment(&mut self, path: &AugmentingPath<Cap>) -> Result<(), Error> {
        let delta = path.bottleneck();
        self.result.value = self
            .result
            .value
            .checked_add(&delta)
            .ok_or(Error::ArithmeticOverflow)?;
        self.result.augmentations += 1;

        let edges: Vec<_> = path
            .edges(&*self.network, self.source, self.sink)
            .collect();
        log::debug!(
            "augmenting path with flow {delta}: {} <- {}",
            edges
                .iter()
                .map(|id| self.network.edge(*id).to())
                .join(" <- "),
            self.source
        );

        edges
            .into_iter()
            .for_each(|id| self.network.augment_edge(id, delta));
        Ok(())
    }

    fn search_until_done<F>(&mut self, should_continue: &mut F) -> Result<(), Error>
    where
        F: FnMut(&MaxFlow<Cap>) -> ControlFlow<()>,
    {
        self.result.cancelled = false;
        while self.state == State::Searching {
            if should_continue(&self.result).is_break() {
                self.result.cancelled = true;
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    fn run<F>(mut self, mut should_continue: F) -> Result<MaxFlow<Cap>, Error>
    where
        F: FnMut(&MaxFlow<Cap>) -> ControlFlow<()>,
    {
        let outcome = self.search_until_done(&mut should_continue);
        self.network.discard_residual_view();
        outcome?;

        log::info!(
            "max flow {} -> {} = {} after {} augmentations",
            self.source,
            self.sink,
            self.result.value,
            self.result.augmentations
        );
        Ok(self.result)
    }
}

/// Computes a maximum flow from `source` to `sink` with the given augmenting path `search`.
///
/// All previous flow is discarded first. On return the residual view is gone and every real edge
/// holds its share of the final flow. `should_continue` is consulted before every search round;
/// breaking leaves a feasible (conserved) partial flow and flags the result as cancelled.
///
/// When `source == sink` no edge is traversed and the value is zero.
pub fn max_flow_with<Cap, S, F>(
    network: &mut FlowNetwork<Cap>,
    source: usize,
    sink: usize,
    search: S,
    should_continue: F,
) -> Result<MaxFlow<Cap>, Error>
where
    Cap: Capacity,
    S: PathSearch,
    F: FnMut(&MaxFlow<Cap>) -> ControlFlow<()>,
{
    network.validate_vertex(source)?;
    network.validate_vertex(sink)?;

    Driver::new(network, search, source, sink).run(should_continue)
}

/// Computes the maximum flow value from `source` to `sink`, leaving the flow assignment on the
/// network's real edges.
pub fn max_flow<Cap: Capacity>(
    network: &mut FlowNetwork<Cap>,
    source: usize,
    sink: usize,
    strategy: Strategy,
) -> Result<Cap, Error> {
    max_flow_with(network, source, sink, strategy, |_| ControlFlow::Continue(()))
        .map(|result| result.value)
}

use core::fmt;

use crate::capacity::Capacity;

/// Index of an edge in the network's edge arena.
pub type EdgeId = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// An edge added through `FlowNetwork::add_edge`.
    Real,
    /// The zero-capacity reverse twin of a real edge.
    Residual,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Real => write!(f, "real"),
            EdgeKind::Residual => write!(f, "residual"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<Cap> {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) capacity: Cap,
    pub(crate) flow: Cap,
    pub(crate) kind: EdgeKind,
    // arena index of the opposite-direction edge, set while the residual view exists
    pub(crate) twin: Option<EdgeId>,
}

impl<Cap: Capacity> Edge<Cap> {
    pub(crate) fn real(from: usize, to: usize, capacity: Cap) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: Cap::zero(),
            kind: EdgeKind::Real,
            twin: None,
        }
    }

    pub(crate) fn residual_of(twin_id: EdgeId, twin: &Edge<Cap>) -> Self {
        Self {
            from: twin.to,
            to: twin.from,
            capacity: Cap::zero(),
            flow: -twin.flow,
            kind: EdgeKind::Residual,
            twin: Some(twin_id),
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn capacity(&self) -> Cap {
        self.capacity
    }

    pub fn flow(&self) -> Cap {
        self.flow
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn twin(&self) -> Option<EdgeId> {
        self.twin
    }

    pub fn is_real(&self) -> bool {
        self.kind == EdgeKind::Real
    }

    /// Remaining usable capacity, `capacity - flow`.
    pub fn residual_capacity(&self) -> Cap {
        self.capacity - self.flow
    }
}

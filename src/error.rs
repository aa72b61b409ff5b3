use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid vertex {vertex}, expected an index below {vertex_count}
    InvalidVertex { vertex: usize, vertex_count: usize },
    /// Invalid edge capacity, expected a non-negative value
    InvalidCapacity,
    /// Flow on edge {from} -> {to} is outside of [0, capacity]
    CapacityExceeded { from: usize, to: usize },
    /// Flow is not conserved at vertex {vertex}
    ConservationViolated { vertex: usize },
    /// Total flow overflowed the capacity type
    ArithmeticOverflow,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

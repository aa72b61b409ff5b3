//! Maximum flow over directed capacitated networks by repeated path augmentation.
//!
//! A [`FlowNetwork`] is built edge by edge, then [`max_flow`] runs one of three augmenting path
//! searches (see [`Strategy`]) over its residual view until the sink becomes unreachable. The
//! resulting flow assignment stays on the network's real edges.
//!
//! ```
//! use augflow::{max_flow, FlowNetwork, Strategy};
//!
//! let mut network = FlowNetwork::new(4);
//! network.add_edge(0, 1, 5)?;
//! network.add_edge(1, 3, 5)?;
//! network.add_edge(0, 2, 3)?;
//! network.add_edge(2, 3, 3)?;
//!
//! assert_eq!(max_flow(&mut network, 0, 3, Strategy::WidestPath)?, 8);
//! assert!(network.edges().all(|(_, _, flow, capacity)| flow == capacity));
//! # Ok::<(), augflow::Error>(())
//! ```
#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod algo;
pub mod capacity;
pub mod edge;
pub mod error;
pub mod network;

pub use algo::max_flow::{max_flow, max_flow_with, MaxFlow};
pub use algo::{AugmentingPath, BreadthFirst, DepthFirst, PathSearch, Strategy, WidestPath};
pub use capacity::Capacity;
pub use edge::{Edge, EdgeId, EdgeKind};
pub use error::Error;
pub use network::{EdgeFlow, FlowNetwork};

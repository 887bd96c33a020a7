//! Engine-facing settings assembled from validated properties.
//!
//! These are plain data structures describing how a cache engine
//! adapter should configure its client or server instance. Assembly
//! is pure: no sockets are opened and no engine is started here.

mod client;
mod members;
mod server;

pub use client::{ClientSettings, RoutingMode};
pub use members::well_known_members;
pub use server::{
    JoinSettings, MulticastSettings, NetworkSettings, ServerSettings, TcpIpSettings,
};

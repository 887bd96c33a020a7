//! Well-known member list construction.

use kiln_core::{Endpoint, expand_members};
use tracing::debug;

use crate::error::ClusterConfigError;
use crate::properties::ServerProperties;

/// Builds the well-known member list for TCP/IP joining.
///
/// Every configured member specification is expanded from the grouped
/// notation into concrete `host:port` endpoints, and the node's own
/// published endpoint (`primary_address:port`) is excluded so the
/// server does not list itself among its peers.
///
/// # Errors
///
/// Fails if any member specification is malformed; no partial list is
/// returned.
///
/// # Example
///
/// ```
/// use kiln_cluster::{ServerProperties, well_known_members};
///
/// let server = ServerProperties::builder()
///     .primary_address("10.0.0.1")
///     .port(5701)
///     .clustering(true)
///     .member("10.0.0.1:0[5701-5702]")
///     .member("10.0.0.2:5701")
///     .build();
///
/// let members = well_known_members(&server)?;
/// let members: Vec<_> = members.iter().map(|m| m.as_str()).collect();
///
/// // 10.0.0.1:5701 is this node and is excluded
/// assert_eq!(members, ["10.0.0.1:5702", "10.0.0.2:5701"]);
/// # Ok::<(), kiln_cluster::ClusterConfigError>(())
/// ```
pub fn well_known_members(
    server: &ServerProperties,
) -> Result<Vec<Endpoint>, ClusterConfigError> {
    let own = Endpoint::from_parts(server.primary_address(), server.port());

    let members = expand_members(server.cluster().members(), Some(own.as_str()))?;
    debug!(
        "Expanded {} member specs into {} well-known members",
        server.cluster().members().len(),
        members.len()
    );

    Ok(members.into_iter().map(Endpoint::from).collect())
}

#![allow(dead_code)]

/// Full property file exercising every subtree.
pub fn full_yaml() -> &'static str {
    r#"
mode: server
clusterName: orders
instanceName: orders-1
client:
  serverAddresses:
    - 10.10.20.20:5701
  connectionTimeout: 10
  smartRouting:
    enabled: false
server:
  port: 5701
  primaryAddress: 10.0.0.1
  secondaryAddresses:
    - 10.0.1.1
  portAutoIncrement:
    enabled: true
  cluster:
    enabled: true
    members:
      - 10.0.0.1:0[5701-5703]
      - 10.0.0.2:5701
  multicast:
    enabled: true
    groupName: orders-multicast
    port: 5720
    trustedInterfaces:
      - 10.10.20.*
    timeout: 2
    timeToLive: 64
"#
}

/// Minimal client-mode property file.
pub fn client_yaml() -> &'static str {
    r#"
mode: client
clusterName: orders
client:
  serverAddresses:
    - 10.10.20.20:5701
    - 10.10.20.30:5701
"#
}

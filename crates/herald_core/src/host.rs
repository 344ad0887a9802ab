//! Host IP discovery
//!
//! Connecting a UDP socket sends no packets; it only asks the OS which local
//! address would route to the target. The socket is closed on return.

use herald_common::{HeraldError, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

/// Resolve the outbound-routable IP of this machine by probing `target`
pub fn probe_host_ip(target: &str) -> Result<IpAddr> {
    let to_probe_err = |source: std::io::Error| HeraldError::HostProbe {
        target: target.to_string(),
        source,
    };

    let remote = target
        .to_socket_addrs()
        .map_err(to_probe_err)?
        .next()
        .ok_or_else(|| {
            to_probe_err(std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                "target resolved to no addresses",
            ))
        })?;

    let local: SocketAddr = match remote {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };

    let socket = UdpSocket::bind(local).map_err(to_probe_err)?;
    socket.connect(remote).map_err(to_probe_err)?;
    let ip = socket.local_addr().map_err(to_probe_err)?.ip();

    tracing::debug!(probe = %target, host_ip = %ip, "resolved host ip");
    Ok(ip)
}

// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Address arithmetic over CIDR blocks.
//!
//! Addresses are converted to `u128` so IPv4 and IPv6 share one code path;
//! address counts use [`BigUint`] because an IPv6 `/0` holds 2^128 addresses.

use crate::shared::error::{ClusterError, Result};
use ipnetwork::IpNetwork;
use num_bigint::BigUint;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IPV4_LEN: usize = 4;
const IPV6_LEN: usize = 16;

/// Parse a CIDR block such as `10.0.0.0/16`.
///
/// The prefix is mandatory: a bare address is rejected rather than read as a
/// host route. The prefix must be plain decimal digits without sign or
/// leading zeros, and no surrounding whitespace is accepted. Host bits are
/// cleared, so `10.0.0.5/16` yields `10.0.0.0/16`.
pub fn parse_cidr(s: &str) -> Option<IpNetwork> {
    let (addr, prefix) = s.split_once('/')?;
    if prefix.is_empty()
        || !prefix.bytes().all(|b| b.is_ascii_digit())
        || (prefix.len() > 1 && prefix.starts_with('0'))
    {
        return None;
    }
    let addr: IpAddr = addr.parse().ok()?;
    let prefix: u8 = prefix.parse().ok()?;
    let net = IpNetwork::new(addr, prefix).ok()?;
    IpNetwork::new(net.network(), prefix).ok()
}

/// Parse a bare IP address. Anything carrying a prefix is rejected.
pub fn parse_ip(s: &str) -> Option<IpAddr> {
    if s.contains('/') {
        return None;
    }
    s.parse().ok()
}

/// Returns the first and last addresses of `network`.
pub fn address_range(network: &IpNetwork) -> (IpAddr, IpAddr) {
    let first = network.network();
    let (first_int, bits) = ip_to_int(first);
    let prefix = network.prefix() as u32;
    if prefix == bits {
        return (first, first);
    }

    let host_len = bits - prefix;
    let host_mask = if host_len == 128 {
        u128::MAX
    } else {
        (1u128 << host_len) - 1
    };

    (first, int_to_ip(first_int | host_mask, bits))
}

/// Number of addresses in `network`: 2^(bits - prefix).
pub fn address_count(network: &IpNetwork) -> BigUint {
    let (_, bits) = ip_to_int(network.network());
    BigUint::from(1u8) << (bits - network.prefix() as u32) as usize
}

/// Verifies that no two of `subnets` overlap.
///
/// A pair overlaps when the first or last address of one lies inside the
/// other. Returns the first offending pair found.
pub fn verify_no_overlap(subnets: &[IpNetwork]) -> Result<()> {
    let ranges: Vec<(IpAddr, IpAddr)> = subnets.iter().map(address_range).collect();

    for (i, subnet) in subnets.iter().enumerate() {
        for (j, (first, last)) in ranges.iter().enumerate() {
            if i == j {
                continue;
            }
            if subnet.contains(*first) || subnet.contains(*last) {
                return Err(ClusterError::Overlap {
                    subnet: subnets[j].to_string(),
                    other: subnet.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Verifies that every subnet lies inside `supernet`, then that no two
/// subnets overlap.
pub fn verify_no_overlap_within_supernet(subnets: &[IpNetwork], supernet: &IpNetwork) -> Result<()> {
    for subnet in subnets {
        let (first, last) = address_range(subnet);
        if !supernet.contains(first) || !supernet.contains(last) {
            return Err(ClusterError::NotContained {
                subnet: subnet.to_string(),
                supernet: supernet.to_string(),
            });
        }
    }

    verify_no_overlap(subnets)
}

/// Converts an address to its integer value and bit width.
pub fn ip_to_int(ip: IpAddr) -> (u128, u32) {
    match ip {
        IpAddr::V4(v4) => ip_bytes_to_int(&v4.octets()),
        IpAddr::V6(v6) => ip_bytes_to_int(&v6.octets()),
    }
}

/// Converts big-endian address bytes to an integer and bit width.
///
/// # Panics
///
/// Panics unless `bytes` is 4 or 16 bytes long.
pub fn ip_bytes_to_int(bytes: &[u8]) -> (u128, u32) {
    match bytes.len() {
        IPV4_LEN => {
            let mut buf = [0u8; IPV4_LEN];
            buf.copy_from_slice(bytes);
            (u32::from_be_bytes(buf) as u128, 32)
        }
        IPV6_LEN => {
            let mut buf = [0u8; IPV6_LEN];
            buf.copy_from_slice(bytes);
            (u128::from_be_bytes(buf), 128)
        }
        len => panic!("Unsupported address length {}", len),
    }
}

/// # Panics
///
/// Panics unless `bits` is 32 or 128.
pub fn int_to_ip(value: u128, bits: u32) -> IpAddr {
    match bits {
        32 => IpAddr::V4(Ipv4Addr::from(value as u32)),
        128 => IpAddr::V6(Ipv6Addr::from(value)),
        _ => panic!("Unsupported address width {}", bits),
    }
}

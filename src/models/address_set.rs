//! Insertion-ordered set of individual IPv4 addresses.

use super::cidr::{range_to_cidrs, CidrBlock};
use itertools::Itertools;
use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Concrete addresses expanded from CIDR blocks.
///
/// Iteration follows first insertion; membership and removal go through a
/// hash set, so removing an absent address is a no-op.
#[derive(Debug, Clone, Default)]
pub struct AddressSet {
    order: Vec<Ipv4Addr>,
    members: HashSet<Ipv4Addr>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `addr`, returning false if it was already present.
    pub fn insert(&mut self, addr: Ipv4Addr) -> bool {
        if self.members.insert(addr) {
            self.order.push(addr);
            true
        } else {
            false
        }
    }

    /// Remove `addr`, returning whether it was present.
    pub fn remove(&mut self, addr: &Ipv4Addr) -> bool {
        if self.members.remove(addr) {
            self.order.retain(|a| a != addr);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, addr: &Ipv4Addr) -> bool {
        self.members.contains(addr)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ipv4Addr> {
        self.order.iter()
    }

    /// Remove every address of `other`. Addresses not in `self` are ignored.
    pub fn subtract(&mut self, other: &AddressSet) {
        let before = self.members.len();
        for addr in other.iter() {
            self.members.remove(addr);
        }
        if self.members.len() != before {
            let members = &self.members;
            self.order.retain(|a| members.contains(a));
        }
    }

    /// Minimal set of CIDR blocks covering exactly these addresses,
    /// ascending. Contiguous addresses collapse into larger blocks where
    /// alignment permits.
    pub fn to_cidrs(&self) -> Vec<CidrBlock> {
        self.order
            .iter()
            .map(|addr| u32::from(*addr))
            .sorted_unstable()
            .map(|ip| (ip, ip))
            .coalesce(|(lo, hi), (next_lo, next_hi)| {
                if hi.checked_add(1) == Some(next_lo) {
                    Ok((lo, next_hi))
                } else {
                    Err(((lo, hi), (next_lo, next_hi)))
                }
            })
            .flat_map(|(lo, hi)| range_to_cidrs(Ipv4Addr::from(lo), Ipv4Addr::from(hi)))
            .collect()
    }
}

impl FromIterator<Ipv4Addr> for AddressSet {
    fn from_iter<I: IntoIterator<Item = Ipv4Addr>>(iter: I) -> Self {
        let mut set = AddressSet::new();
        for addr in iter {
            set.insert(addr);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a Ipv4Addr;
    type IntoIter = std::slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

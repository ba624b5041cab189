//! Classification of address-range tokens.
//!
//! A target field mixes CIDR blocks, dash ranges and glob wildcards in one
//! comma-separated string. [`RangeToken::classify`] decides which form a
//! token is, with precedence glob, dash range, CIDR, literal.

use super::cidr::{range_to_cidrs, CidrBlock};
use crate::error::AddressFormatError;
use std::fmt;
use std::net::Ipv4Addr;

/// Split a comma-separated specification into trimmed, non-empty tokens.
pub fn split_tokens(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// One octet position of a glob pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctetMatch {
    Exact(u8),
    /// Inclusive "a-b", with a < b.
    Span(u8, u8),
    /// "*"
    Any,
}

impl OctetMatch {
    fn bounds(&self) -> (u8, u8) {
        match *self {
            OctetMatch::Exact(v) => (v, v),
            OctetMatch::Span(lo, hi) => (lo, hi),
            OctetMatch::Any => (0, 255),
        }
    }
}

impl fmt::Display for OctetMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OctetMatch::Exact(v) => write!(f, "{v}"),
            OctetMatch::Span(lo, hi) => write!(f, "{lo}-{hi}"),
            OctetMatch::Any => write!(f, "*"),
        }
    }
}

/// Wildcard address pattern such as "10.0.*.*" or "192.168.1-3.*".
///
/// Valid patterns have four octets, at most one hyphenated octet, no
/// hyphenated octet after a "*", no exact octet after a hyphenated or "*"
/// octet, and at least one wildcard. Such a pattern always covers one
/// contiguous address interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobPattern {
    octets: [OctetMatch; 4],
}

impl GlobPattern {
    pub fn parse(token: &str) -> Result<GlobPattern, AddressFormatError> {
        let token = token.trim();
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 4 {
            return Err(AddressFormatError::new(token, "glob must have four octets"));
        }

        let mut octets = [OctetMatch::Any; 4];
        let mut seen_span = false;
        let mut seen_any = false;
        for (i, part) in parts.iter().enumerate() {
            octets[i] = if *part == "*" {
                seen_any = true;
                OctetMatch::Any
            } else if let Some((lo, hi)) = part.split_once('-') {
                if seen_span {
                    return Err(AddressFormatError::new(token, "only one hyphenated octet allowed"));
                }
                if seen_any {
                    return Err(AddressFormatError::new(token, "hyphenated octet after '*'"));
                }
                seen_span = true;
                let lo = parse_octet(token, lo)?;
                let hi = parse_octet(token, hi)?;
                if lo >= hi {
                    return Err(AddressFormatError::new(
                        token,
                        format!("octet range {lo}-{hi} is empty or reversed"),
                    ));
                }
                OctetMatch::Span(lo, hi)
            } else {
                if seen_span || seen_any {
                    return Err(AddressFormatError::new(
                        token,
                        format!("exact octet {part} after a wildcard octet"),
                    ));
                }
                OctetMatch::Exact(parse_octet(token, part)?)
            };
        }

        if !seen_span && !seen_any {
            return Err(AddressFormatError::new(token, "no wildcard octet"));
        }
        Ok(GlobPattern { octets })
    }

    /// Lowest address matched.
    pub fn first(&self) -> Ipv4Addr {
        let o = self.octets.map(|m| m.bounds().0);
        Ipv4Addr::new(o[0], o[1], o[2], o[3])
    }

    /// Highest address matched.
    pub fn last(&self) -> Ipv4Addr {
        let o = self.octets.map(|m| m.bounds().1);
        Ipv4Addr::new(o[0], o[1], o[2], o[3])
    }

    /// Tightest CIDR set matching exactly the pattern.
    pub fn to_cidrs(&self) -> Vec<CidrBlock> {
        range_to_cidrs(self.first(), self.last())
    }
}

fn parse_octet(token: &str, part: &str) -> Result<u8, AddressFormatError> {
    // u8::from_str accepts a leading '+', octets must be plain digits.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressFormatError::new(token, format!("invalid octet '{part}'")));
    }
    part.parse()
        .map_err(|_| AddressFormatError::new(token, format!("octet {part} out of range")))
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

/// One classified address-range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    /// "A.B.C.D/N"
    Cidr(CidrBlock),
    /// "A.B.C.D-E.F.G.H", inclusive, not necessarily aligned.
    DashRange { start: Ipv4Addr, end: Ipv4Addr },
    Glob(GlobPattern),
    /// Bare "A.B.C.D".
    Literal(Ipv4Addr),
}

impl RangeToken {
    /// Classify a single token. Glob wins over dash range, so
    /// "10.0.0.1-5" is the glob for the last octet 1..=5.
    pub fn classify(token: &str) -> Result<RangeToken, AddressFormatError> {
        let token = token.trim();
        if token.contains('*') {
            return GlobPattern::parse(token).map(RangeToken::Glob);
        }
        if token.contains('-') {
            if let Ok(glob) = GlobPattern::parse(token) {
                return Ok(RangeToken::Glob(glob));
            }
            return parse_dash_range(token);
        }
        if token.contains('/') {
            return token.parse().map(RangeToken::Cidr);
        }
        token
            .parse()
            .map(RangeToken::Literal)
            .map_err(|_| AddressFormatError::new(token, "invalid address"))
    }

    /// The CIDR blocks this token denotes, ascending.
    pub fn to_cidrs(&self) -> Vec<CidrBlock> {
        match *self {
            RangeToken::Cidr(block) => vec![block],
            RangeToken::DashRange { start, end } => range_to_cidrs(start, end),
            RangeToken::Glob(glob) => glob.to_cidrs(),
            RangeToken::Literal(addr) => vec![CidrBlock::host(addr)],
        }
    }
}

fn parse_dash_range(token: &str) -> Result<RangeToken, AddressFormatError> {
    // Split at the first '-'; addresses never contain one.
    let (start, end) = token
        .split_once('-')
        .ok_or_else(|| AddressFormatError::new(token, "missing '-'"))?;
    let start: Ipv4Addr = start
        .trim()
        .parse()
        .map_err(|_| AddressFormatError::new(token, format!("invalid start address {start}")))?;
    let end: Ipv4Addr = end
        .trim()
        .parse()
        .map_err(|_| AddressFormatError::new(token, format!("invalid end address {end}")))?;
    if start > end {
        return Err(AddressFormatError::new(token, "range start is after range end"));
    }
    Ok(RangeToken::DashRange { start, end })
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeToken::Cidr(block) => write!(f, "{block}"),
            RangeToken::DashRange { start, end } => write!(f, "{start}-{end}"),
            RangeToken::Glob(glob) => write!(f, "{glob}"),
            RangeToken::Literal(addr) => write!(f, "{addr}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidrs(token: &str) -> Vec<String> {
        RangeToken::classify(token)
            .unwrap()
            .to_cidrs()
            .iter()
            .map(|b| b.to_string())
            .collect()
    }

    #[test]
    fn test_split_tokens() {
        let tokens: Vec<&str> = split_tokens(" 10.0.0.0/24, 10.0.1.1 ,,").collect();
        assert_eq!(tokens, vec!["10.0.0.0/24", "10.0.1.1"]);
        assert_eq!(split_tokens("").count(), 0);
        assert_eq!(split_tokens(" , ").count(), 0);
    }

    #[test]
    fn test_classify_each_form() {
        assert!(matches!(RangeToken::classify("10.0.0.0/24"), Ok(RangeToken::Cidr(_))));
        assert!(matches!(
            RangeToken::classify("10.0.0.0-10.0.0.9"),
            Ok(RangeToken::DashRange { .. })
        ));
        assert!(matches!(RangeToken::classify("10.0.*.*"), Ok(RangeToken::Glob(_))));
        assert!(matches!(RangeToken::classify("10.0.0.1"), Ok(RangeToken::Literal(_))));
    }

    #[test]
    fn test_classify_prefers_glob_over_dash() {
        let token = RangeToken::classify("10.0.0.1-5").unwrap();
        assert!(matches!(token, RangeToken::Glob(_)));
        assert_eq!(
            cidrs("10.0.0.1-5"),
            vec!["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31"]
        );
    }

    #[test]
    fn test_glob_to_cidrs() {
        assert_eq!(cidrs("10.0.*.*"), vec!["10.0.0.0/16"]);
        assert_eq!(cidrs("192.168.1.*"), vec!["192.168.1.0/24"]);
        assert_eq!(cidrs("*.*.*.*"), vec!["0.0.0.0/0"]);
        assert_eq!(cidrs("10.0.0-1.*"), vec!["10.0.0.0/23"]);
        assert_eq!(cidrs("10.0.1-3.*"), vec!["10.0.1.0/24", "10.0.2.0/23"]);
    }

    #[test]
    fn test_glob_validity_rules() {
        for bad in [
            "10.*.0.*",
            "10.*.1-2.*",
            "10.1-2.3-4.*",
            "10.0.5-5.*",
            "10.0.6-5.*",
            "10.0.*",
            "10.0.0.0.*",
            "10.0.256.*",
            "10.0.x.*",
            "10.0.+1.*",
        ] {
            assert!(GlobPattern::parse(bad).is_err(), "{bad} should be rejected");
        }
        assert!(GlobPattern::parse("10.0.0.1").is_err());
        assert!(GlobPattern::parse("10.0.0-255.*").is_ok());
    }

    #[test]
    fn test_glob_display() {
        let glob = GlobPattern::parse("10.0.1-3.*").unwrap();
        assert_eq!(glob.to_string(), "10.0.1-3.*");
        assert_eq!(glob.first(), Ipv4Addr::new(10, 0, 1, 0));
        assert_eq!(glob.last(), Ipv4Addr::new(10, 0, 3, 255));
    }

    #[test]
    fn test_dash_range() {
        assert_eq!(
            cidrs("10.182.71.0-10.182.75.255"),
            vec!["10.182.71.0/24", "10.182.72.0/22"]
        );
        assert_eq!(cidrs("10.0.0.4 - 10.0.0.4"), vec!["10.0.0.4/32"]);
    }

    #[test]
    fn test_dash_range_errors() {
        assert!(RangeToken::classify("10.0.0.9-10.0.0.1").is_err());
        assert!(RangeToken::classify("10.0.0.1-").is_err());
        assert!(RangeToken::classify("10.0.0.1-10.0.0.300").is_err());
        let err = RangeToken::classify("10.0.0.5-3").unwrap_err();
        assert_eq!(err.token, "10.0.0.5-3");
    }

    #[test]
    fn test_literal_and_cidr_errors() {
        assert!(RangeToken::classify("host.example.com").is_err());
        assert!(RangeToken::classify("10.0.0.0/99").is_err());
        assert!(RangeToken::classify("").is_err());
    }

    #[test]
    fn test_display_round_trips_notation() {
        for token in ["10.0.0.0/24", "10.0.0.1-10.0.0.9", "10.0.*.*", "10.0.0.1"] {
            assert_eq!(RangeToken::classify(token).unwrap().to_string(), token);
        }
    }
}

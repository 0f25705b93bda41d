use std::{borrow::Cow, net::IpAddr, str::FromStr};

use ipnet::IpNet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{}' is not a valid CIDR ({})!", .value, .field)]
pub struct CidrError {
    pub field: Cow<'static, str>,
    pub value: String,
}

/// Network address with a prefix, parsed from a named configuration field
/// so the failing field can be reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCidr(IpNet);

impl FieldCidr {
    pub fn parse(field: impl Into<Cow<'static, str>>, raw: &str) -> Result<Self, CidrError> {
        IpNet::from_str(raw)
            .map(Self)
            .map_err(|_| CidrError {
                field: field.into(),
                value: raw.to_owned(),
            })
    }

    pub fn address(&self) -> IpAddr {
        self.0.addr()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }
}

impl std::fmt::Display for FieldCidr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

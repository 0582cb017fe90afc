use std::{convert::TryFrom, error::Error, str::FromStr};

/// A byte address replayed through the cache models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub u64);

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressParseError::Empty);
        }

        // The extractor passes addresses through verbatim, so both "0x400"
        // and bare "400" show up in practice.
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        u64::from_str_radix(digits, 16)
            .map(Address)
            .map_err(|_| AddressParseError::InvalidHex(s.into()))
    }
}

/// An intermediate type to leverage the serde deserialisation provided by
/// the csv crate. The address file is a one-column record stream, so this
/// holds the single field before it is parsed into an `Address`.
#[derive(serde::Deserialize, Debug)]
pub struct AddressFields {
    pub address: String,
}

impl TryFrom<AddressFields> for Address {
    type Error = AddressParseError;

    fn try_from(fields: AddressFields) -> Result<Self, Self::Error> {
        fields.address.parse()
    }
}

/// This error is returned when a record of the address file doesn't parse
/// as a hexadecimal address.
#[derive(Debug, PartialEq, Eq)]
pub enum AddressParseError {
    Empty,
    InvalidHex(String),
}

impl std::fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty address field"),
            Self::InvalidHex(text) => {
                write!(f, "Address \"{}\" is not hexadecimal", text)
            }
        }
    }
}

impl Error for AddressParseError {}

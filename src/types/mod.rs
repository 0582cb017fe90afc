mod address;

pub use address::{Address, AddressFields, AddressParseError};

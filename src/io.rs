use super::types::{Address, AddressFields};
use std::convert::TryFrom;

/// Streams the extracted-address file as `Address` values. The file is a
/// degenerate one-column CSV, one record per line.
pub struct AddressFileReader {
    record_iter: csv::DeserializeRecordsIntoIter<std::fs::File, AddressFields>,
}

impl AddressFileReader {
    pub fn new(input_filename: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            record_iter: csv::ReaderBuilder::new()
                .has_headers(false)
                .trim(csv::Trim::All)
                .from_path(input_filename)?
                .into_deserialize(),
        })
    }
}

impl Iterator for AddressFileReader {
    type Item = Result<Address, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.record_iter.next().map(|result| match result {
            Ok(fields) => Address::try_from(fields).map_err(|e| e.into()),
            Err(e) => Err(e.into()),
        })
    }
}

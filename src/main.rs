use memsift::{extract, ADDRESS_FILE, TRACE_FILE};
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Both files must open before any line is processed; the output is
    // truncated fresh on every run.
    let trace = BufReader::new(File::open(TRACE_FILE)?);
    let addresses = BufWriter::new(File::create(ADDRESS_FILE)?);

    let count = extract::extract_addresses(trace, addresses)?;

    println!("{}", count);

    Ok(())
}

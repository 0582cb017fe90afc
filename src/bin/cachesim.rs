use memsift::cache::{Geometry, LruCache, SrripCache, Summary};
use memsift::io::AddressFileReader;
use memsift::ADDRESS_FILE;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed configurations: a 2 KiB LRU cache and a 32 KiB 2-bit SRRIP
    // cache, both 2-way with 64-byte blocks.
    let mut lru = LruCache::new(Geometry::new(16, 2, 64));
    let mut srrip = SrripCache::new(Geometry::from_cache_size(32 * 1024, 64, 2), 2);

    for result in AddressFileReader::new(ADDRESS_FILE)? {
        let address = result?;
        lru.access(address);
        srrip.access(address);
    }

    // Dump the report to stdout
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Summary::write_header(&mut out)?;
    lru.summary().write(&mut out)?;
    srrip.summary().write(&mut out)?;

    Ok(())
}

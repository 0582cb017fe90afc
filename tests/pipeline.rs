use memsift::cache::{CacheStats, Geometry, LruCache};
use memsift::extract::extract_addresses;
use memsift::io::AddressFileReader;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

fn run_extraction(dir: &Path, trace: &str) -> (String, u64) {
    let trace_path = dir.join("test.txt");
    let address_path = dir.join("memory_addresses.txt");
    std::fs::write(&trace_path, trace).unwrap();

    let input = BufReader::new(File::open(&trace_path).unwrap());
    let output = BufWriter::new(File::create(&address_path).unwrap());
    let count = extract_addresses(input, output).unwrap();

    (std::fs::read_to_string(&address_path).unwrap(), count)
}

#[test]
fn test_extraction_end_to_end() {
    let dir = tempfile::tempdir().unwrap();

    // Instruction lines match; the indented data line and the noise line
    // do not.
    let trace = "I  0x4000a0,3\n  L 0x1ffefffd70,8\nS 0x1ffefffd78,8\nX noise\n";
    let (written, count) = run_extraction(dir.path(), trace);

    assert_eq!(written, "0x4000a0\n0x1ffefffd78\n");
    assert_eq!(count, 2);
}

#[test]
fn test_rerun_is_byte_identical() {
    let trace = "I 0x400,1,R\nX ignore me\nS 0x800,2,W\n";

    let first_dir = tempfile::tempdir().unwrap();
    let (first, first_count) = run_extraction(first_dir.path(), trace);

    let second_dir = tempfile::tempdir().unwrap();
    let (second, second_count) = run_extraction(second_dir.path(), trace);

    assert_eq!(first, "0x400\n0x800\n");
    assert_eq!(first, second);
    assert_eq!(first_count, 2);
    assert_eq!(first_count, second_count);
}

#[test]
fn test_extracted_file_feeds_the_simulator() {
    let dir = tempfile::tempdir().unwrap();

    let trace = "I 0x400,1,R\nS 0x400,2,W\nL 0x800,4,R\n";
    let (_, count) = run_extraction(dir.path(), trace);
    assert_eq!(count, 3);

    let address_path = dir.path().join("memory_addresses.txt");
    let mut cache = LruCache::new(Geometry::new(16, 2, 64));

    for result in AddressFileReader::new(address_path.to_str().unwrap()).unwrap() {
        cache.access(result.unwrap());
    }

    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2 });
}

use super::types::Address;
use std::collections::VecDeque;

/// Set/tag arithmetic shared by every replacement policy. Dimensions are
/// assumed to be powers of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    num_sets: u64,
    associativity: usize,
    block_size: u64,
}

impl Geometry {
    pub fn new(num_sets: u64, associativity: usize, block_size: u64) -> Self {
        Self {
            num_sets,
            associativity,
            block_size,
        }
    }

    /// Derives the set count from a total capacity in bytes.
    pub fn from_cache_size(cache_bytes: u64, block_size: u64, associativity: usize) -> Self {
        Self::new(
            cache_bytes / (block_size * associativity as u64),
            associativity,
            block_size,
        )
    }

    fn set_index(&self, address: Address) -> usize {
        ((address.0 / self.block_size) % self.num_sets) as usize
    }

    fn tag(&self, address: Address) -> u64 {
        address.0 / (self.block_size * self.num_sets)
    }

    pub fn capacity_blocks(&self) -> u64 {
        self.num_sets * self.associativity as u64
    }

    pub fn cache_bytes(&self) -> u64 {
        self.capacity_blocks() * self.block_size
    }

    pub fn offset_bits(&self) -> u32 {
        self.block_size.ilog2()
    }

    pub fn set_bits(&self) -> u32 {
        self.num_sets.ilog2()
    }

    /// Whatever a 32-bit address has left after the set and offset fields.
    pub fn tag_bits(&self) -> u32 {
        32 - self.set_bits() - self.offset_bits()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    Hit,
    Miss,
}

/// Running hit/miss counters for one cache model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.hits as f64 / self.total() as f64
    }

    pub fn miss_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.misses as f64 / self.total() as f64
    }
}

/// Least-recently-used replacement. Each set keeps its resident tags
/// ordered from LRU at the front to MRU at the back.
pub struct LruCache {
    geometry: Geometry,
    sets: Vec<VecDeque<u64>>,
    stats: CacheStats,
}

impl LruCache {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            sets: vec![VecDeque::new(); geometry.num_sets as usize],
            stats: CacheStats::default(),
        }
    }

    pub fn access(&mut self, address: Address) -> AccessOutcome {
        let tag = self.geometry.tag(address);
        let set = &mut self.sets[self.geometry.set_index(address)];

        let outcome = match set.iter().position(|&resident| resident == tag) {
            Some(position) => {
                // Refresh recency by moving the tag to the MRU end.
                set.remove(position);
                set.push_back(tag);
                AccessOutcome::Hit
            }
            None => {
                if set.len() == self.geometry.associativity {
                    set.pop_front();
                }
                set.push_back(tag);
                AccessOutcome::Miss
            }
        };

        self.stats.record(outcome);
        outcome
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn summary(&self) -> Summary {
        Summary::new("lru", self.geometry, self.stats)
    }
}

#[derive(Debug, Clone, Copy)]
struct Block {
    tag: u64,
    valid: bool,
    rrpv: u8,
}

/// Static RRIP replacement with M-bit re-reference prediction values.
pub struct SrripCache {
    geometry: Geometry,
    sets: Vec<Vec<Block>>,
    rrpv_max: u8,
    rrpv_long: u8,
    stats: CacheStats,
}

impl SrripCache {
    pub fn new(geometry: Geometry, rrpv_bits: u32) -> Self {
        let rrpv_max = ((1u32 << rrpv_bits) - 1) as u8;
        Self {
            geometry,
            sets: vec![
                vec![
                    Block {
                        tag: 0,
                        valid: false,
                        rrpv: rrpv_max
                    };
                    geometry.associativity
                ];
                geometry.num_sets as usize
            ],
            rrpv_max,
            // One below the maximum: a long re-reference interval for
            // freshly installed blocks.
            rrpv_long: rrpv_max - 1,
            stats: CacheStats::default(),
        }
    }

    pub fn access(&mut self, address: Address) -> AccessOutcome {
        let tag = self.geometry.tag(address);
        let set = &mut self.sets[self.geometry.set_index(address)];

        let outcome = if let Some(block) =
            set.iter_mut().find(|block| block.valid && block.tag == tag)
        {
            // Near-immediate re-reference on a hit.
            block.rrpv = 0;
            AccessOutcome::Hit
        } else {
            // Age the whole set until some block carries the maximum RRPV,
            // then replace it. Invalid blocks start at the maximum, so cold
            // sets never need an aging round. Each access counts exactly
            // one miss no matter how many rounds the scan takes.
            let victim = loop {
                match set.iter().position(|block| block.rrpv == self.rrpv_max) {
                    Some(victim) => break victim,
                    None => {
                        for block in set.iter_mut() {
                            block.rrpv += 1;
                        }
                    }
                }
            };

            set[victim] = Block {
                tag,
                valid: true,
                rrpv: self.rrpv_long,
            };
            AccessOutcome::Miss
        };

        self.stats.record(outcome);
        outcome
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn summary(&self) -> Summary {
        Summary::new("srrip", self.geometry, self.stats)
    }
}

/// One row of the simulation report.
#[derive(Debug, PartialEq)]
pub struct Summary {
    policy: &'static str,
    geometry: Geometry,
    stats: CacheStats,
}

impl Summary {
    fn new(policy: &'static str, geometry: Geometry, stats: CacheStats) -> Self {
        Self {
            policy,
            geometry,
            stats,
        }
    }

    pub fn write_header<Writer: std::io::Write>(mut f: Writer) -> Result<(), std::io::Error> {
        writeln!(
            f,
            "policy,cache_bytes,block_bytes,sets,ways,tag_bits,set_bits,offset_bits,hits,misses,hit_rate,miss_rate"
        )
    }

    pub fn write<Writer: std::io::Write>(&self, mut f: Writer) -> Result<(), std::io::Error> {
        writeln!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{:.3},{:.3}",
            self.policy,
            self.geometry.cache_bytes(),
            self.geometry.block_size,
            self.geometry.num_sets,
            self.geometry.associativity,
            self.geometry.tag_bits(),
            self.geometry.set_bits(),
            self.geometry.offset_bits(),
            self.stats.hits,
            self.stats.misses,
            self.stats.hit_rate(),
            self.stats.miss_rate(),
        )
    }
}

//! String hashing used by archives that store hashed resource names.

use std::fmt;

/// The algorithm an archive used to hash its resource names.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum HashAlgo {
    /// No hashing at all
    #[default]
    None,

    /// djb2 hash function by Daniel J. Bernstein
    Djb2,

    /// 32bit Fowler–Noll–Vo hash
    Fnv32,

    /// 64bit Fowler–Noll–Vo hash
    Fnv64,
}

impl HashAlgo {
    /// Every algorithm that produces an actual hash
    pub const ALL: [HashAlgo; 3] = [HashAlgo::Djb2, HashAlgo::Fnv32, HashAlgo::Fnv64];

    /// Decode the identifier archives store on disk.
    ///
    /// Unknown identifiers map to [`HashAlgo::None`].
    pub fn from_raw(raw: i32) -> HashAlgo {
        match raw {
            0 => HashAlgo::Djb2,
            1 => HashAlgo::Fnv32,
            2 => HashAlgo::Fnv64,
            _ => HashAlgo::None,
        }
    }

    /// The on-disk identifier of this algorithm
    pub fn to_raw(self) -> i32 {
        match self {
            HashAlgo::None => -1,
            HashAlgo::Djb2 => 0,
            HashAlgo::Fnv32 => 1,
            HashAlgo::Fnv64 => 2,
        }
    }

    /// Hash `string` with this algorithm. [`HashAlgo::None`] always yields `0`.
    pub fn hash(self, string: &str) -> u64 {
        hash_string(string, self)
    }
}

impl fmt::Display for HashAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HashAlgo::None => "none",
            HashAlgo::Djb2 => "djb2",
            HashAlgo::Fnv32 => "fnv32",
            HashAlgo::Fnv64 => "fnv64",
        })
    }
}

/// djb2 hash function by Daniel J. Bernstein.
pub fn hash_djb2(string: &str) -> u32 {
    string.bytes().fold(5381u32, |hash, b| {
        (hash << 5).wrapping_add(hash).wrapping_add(b as u32)
    })
}

/// 32bit Fowler–Noll–Vo hash.
pub fn hash_fnv32(string: &str) -> u32 {
    string.bytes().fold(0x811C_9DC5u32, |hash, b| {
        hash.wrapping_mul(16_777_619) ^ b as u32
    })
}

/// 64bit Fowler–Noll–Vo hash.
pub fn hash_fnv64(string: &str) -> u64 {
    string.bytes().fold(0xCBF2_9CE4_8422_2325u64, |hash, b| {
        hash.wrapping_mul(1_099_511_628_211) ^ b as u64
    })
}

/// Hash `string` using `algo`, widened to 64 bits.
pub fn hash_string(string: &str, algo: HashAlgo) -> u64 {
    match algo {
        HashAlgo::None => 0,
        HashAlgo::Djb2 => hash_djb2(string) as u64,
        HashAlgo::Fnv32 => hash_fnv32(string) as u64,
        HashAlgo::Fnv64 => hash_fnv64(string),
    }
}

/// Render a hash as `0x` followed by 16 upper case hex digits
pub fn format_hash(hash: u64) -> String {
    format!("0x{:016X}", hash)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn djb2_known_values() {
        assert_eq!(hash_djb2(""), 5381);
        assert_eq!(hash_djb2("a"), 5381 * 33 + 97);
        assert_eq!(hash_djb2("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn fnv_known_values() {
        assert_eq!(hash_fnv32(""), 0x811C_9DC5);
        assert_eq!(hash_fnv64(""), 0xCBF2_9CE4_8422_2325);
        assert_eq!(hash_fnv32("a"), 0x811C_9DC5u32.wrapping_mul(16_777_619) ^ 0x61);
        assert_eq!(
            hash_fnv64("a"),
            0xCBF2_9CE4_8422_2325u64.wrapping_mul(1_099_511_628_211) ^ 0x61
        );
    }

    #[test]
    fn djb2_wraps_on_long_input() {
        let long = "x".repeat(4096);
        assert_eq!(hash_djb2(&long), hash_djb2(&long));
        assert!(hash_string(&long, HashAlgo::Djb2) <= u32::MAX as u64);
    }

    #[test]
    fn none_always_hashes_to_zero() {
        assert_eq!(hash_string("wav", HashAlgo::None), 0);
        assert_eq!(HashAlgo::None.hash(""), 0);
    }

    #[test]
    fn raw_identifiers() {
        for algo in HashAlgo::ALL {
            assert_eq!(HashAlgo::from_raw(algo.to_raw()), algo);
        }
        assert_eq!(HashAlgo::from_raw(-1), HashAlgo::None);
        assert_eq!(HashAlgo::from_raw(3), HashAlgo::None);
        assert_eq!(HashAlgo::from_raw(i32::MIN), HashAlgo::None);
    }

    #[test]
    fn format() {
        assert_eq!(format_hash(0), "0x0000000000000000");
        assert_eq!(format_hash(0xDEAD_BEEF_0123_4567), "0xDEADBEEF01234567");
    }
}

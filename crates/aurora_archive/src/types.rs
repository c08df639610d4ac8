//! Base types for structure of BZF file.

use std::fmt;

use binrw::BinRead;

/// A four character code, compared as a big-endian `u32`
#[derive(BinRead, Copy, Clone, PartialEq, Eq, Hash)]
#[br(big)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    /// Archive tag shared by BIF and BZF files
    pub const BIFF: Tag = Tag(*b"BIFF");

    /// The only version of BZF this library reads
    pub const V1: Tag = Tag(*b"V1  ");

    /// The code as a big-endian number, first character in the high byte
    pub const fn as_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|c| c.is_ascii_graphic() || *c == b' ') {
            write!(f, "'{}'", self.0.iter().map(|&c| c as char).collect::<String>())
        } else {
            write!(f, "0x{:08X}", self.as_u32())
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

/// Archive identification
///
/// Every BZF file starts with the tag "BIFF" followed by a version, which
/// must be "V1  " (with two trailing spaces).
#[derive(BinRead, Debug, Copy, Clone, PartialEq, Eq)]
#[br(little)]
pub struct ArchiveIdent {
    /// File type tag
    pub tag: Tag,

    /// Format version
    pub version: Tag,
}

/// BZF file header, following the [`ArchiveIdent`]
///
/// All data is stored in little endian format
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct BzfHeader {
    /// The number of variable resources
    pub var_res_count: u32,

    /// The number of fixed resources, never used by any game
    pub fix_res_count: u32,

    /// The offset from the beginning of the file where the variable resource table starts
    pub var_table_offset: u32,
}

/// BZF variable resource table entry
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct BzfRecord {
    /// Resource id, redundant with the position in the table
    #[allow(dead_code)]
    pub id: u32,

    /// The offset to the compressed data from the start of the file
    pub offset: u32,

    /// The size of the data after decompression
    pub size: u32,

    /// Numeric resource type id
    pub type_id: u32,
}

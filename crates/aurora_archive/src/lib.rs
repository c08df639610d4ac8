//! This library provides read access to the resource archives of BioWare's *Aurora* engine games.
//!
//! Every archive format implements [`Archive`], which lists resources by
//! index and extracts them into memory. Resources are classified with
//! [`aurora_types`].
//!
//! ## BZF
//!
//! BZF archives are BIF archives whose resources are each compressed with
//! raw LZMA1. Only variable resources are supported, there is no name
//! block; names come from the KEY file of the game.
//!
//! All integers are stored little endian.
//!
//! | Offset                   | Size           | Description                                  |
//! |--------------------------|----------------|----------------------------------------------|
//! | 0                        | 4              | tag, always `BIFF`                           |
//! | 4                        | 4              | version, always `V1  `                       |
//! | 8                        | 4              | number of variable resources                 |
//! | 12                       | 4              | number of fixed resources, must be 0         |
//! | 16                       | 4              | offset of the variable resource table        |
//! | table                    | 16 * count     | variable resource table                      |
//!
//! Each table entry:
//!
//! | Offset | Size | Description                                   |
//! |--------|------|-----------------------------------------------|
//! | 0      | 4    | resource id                                   |
//! | 4      | 4    | offset of the compressed data                 |
//! | 8      | 4    | size of the resource when decompressed        |
//! | 12     | 4    | numeric resource type                         |
//!
//! The compressed size is not stored: a resource's data runs up to the
//! offset of the next resource, and the last one to the end of the file.
//! The data itself is five bytes of LZMA1 properties followed by the raw
//! LZMA1 stream.
//!

pub mod archive;
pub mod compression;
pub mod error;
pub mod read;
pub mod types;

pub use archive::{Archive, Resource};
pub use read::BzfArchive;

//! This library classifies resources found in the game data of BioWare's *Aurora* engine games.
//!
//! Archives of these games identify their resources by a numeric type id, by
//! a file name, or only by a hash of the file name. This crate maps all of
//! those onto a closed [`FileType`] enumeration and a coarse
//! [`ResourceCategory`].
//!
//! ```
//! use aurora_types::{registry, FileType, HashAlgo, ResourceCategory};
//!
//! let types = registry();
//! assert_eq!(types.file_type("textures/grass.DDS"), FileType::Dds);
//! assert_eq!(types.resource_category(FileType::Dds), ResourceCategory::Image);
//! assert_eq!(types.file_type_from_hash(HashAlgo::Fnv64, HashAlgo::Fnv64.hash("wav")), FileType::Wav);
//! assert_eq!(types.add_file_type("00042", FileType::Txt), "00042.txt");
//! ```
//!
//! ## Hash algorithms
//!
//! | Algorithm | Width  | Seed                  | Step                          |
//! |-----------|--------|-----------------------|-------------------------------|
//! | djb2      | 32 bit | `5381`                | `hash * 33 + byte`            |
//! | FNV-32    | 32 bit | `0x811C9DC5`          | `(hash * 16777619) ^ byte`    |
//! | FNV-64    | 64 bit | `0xCBF29CE484222325`  | `(hash * 1099511628211) ^ byte` |
//!
//! Extensions are hashed without their leading dot.
//!

pub mod file_type;
pub mod hash;
pub mod path;
pub mod registry;

pub use file_type::{FileType, FileTypeInfo, FILE_TYPES};
pub use hash::HashAlgo;
pub use registry::{registry, FileTypeRegistry, ResourceCategory};

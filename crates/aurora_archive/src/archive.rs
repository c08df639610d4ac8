//! The interface shared by all resource archive readers.

use aurora_types::{FileType, HashAlgo};

use crate::error::Result;

/// Returned by [`Archive::resource_size`] when the size of a resource can't be known
pub const RESOURCE_SIZE_UNKNOWN: u32 = 0xFFFF_FFFF;

/// A resource as every archive format describes it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Hash of the resource name, for formats that store hashes instead of names
    pub hash: Option<u64>,

    /// The type of the resource
    pub file_type: FileType,

    /// Position of the resource inside its archive
    pub index: u32,
}

impl Resource {
    /// Index of a resource not yet assigned a position
    pub const UNASSIGNED_INDEX: u32 = 0xFFFF_FFFF;
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            hash: None,
            file_type: FileType::None,
            index: Self::UNASSIGNED_INDEX,
        }
    }
}

/// A resource archive
///
/// Readers load their index when they are created, listing and sizing
/// resources never touches the underlying data again.
pub trait Archive {
    /// All resources of the archive, in index order
    fn resources(&self) -> &[Resource];

    /// Number of resources in the archive
    fn len(&self) -> usize {
        self.resources().len()
    }

    /// Whether the archive has no resources
    fn is_empty(&self) -> bool {
        self.resources().is_empty()
    }

    /// Size of a resource after extraction, [`RESOURCE_SIZE_UNKNOWN`] if the format doesn't say
    fn resource_size(&self, _index: usize) -> u32 {
        RESOURCE_SIZE_UNKNOWN
    }

    /// The algorithm [`Resource::hash`] values were made with
    fn name_hash_algo(&self) -> HashAlgo {
        HashAlgo::None
    }

    /// Extract a resource into memory
    fn resource(&mut self, index: usize) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod test {
    use aurora_types::{FileType, HashAlgo};
    use pretty_assertions::assert_eq;

    use super::{Archive, Resource, RESOURCE_SIZE_UNKNOWN};
    use crate::error::{Error, Result};

    struct Listing(Vec<Resource>);

    impl Archive for Listing {
        fn resources(&self) -> &[Resource] {
            &self.0
        }

        fn resource(&mut self, index: usize) -> Result<Vec<u8>> {
            Err(Error::ResourceNotFound(index))
        }
    }

    #[test]
    fn default_resource_is_unassigned() {
        let resource = Resource::default();

        assert_eq!(resource.index, Resource::UNASSIGNED_INDEX);
        assert_eq!(resource.file_type, FileType::None);
        assert_eq!(resource.hash, None);
    }

    #[test]
    fn provided_methods() {
        let listing = Listing(vec![
            Resource {
                index: 0,
                ..Default::default()
            },
            Resource {
                index: 1,
                file_type: FileType::Tga,
                ..Default::default()
            },
        ]);

        assert_eq!(listing.len(), 2);
        assert!(!listing.is_empty());
        assert_eq!(listing.resource_size(0), RESOURCE_SIZE_UNKNOWN);
        assert_eq!(listing.name_hash_algo(), HashAlgo::None);
        assert!(Listing(Vec::new()).is_empty());
    }
}

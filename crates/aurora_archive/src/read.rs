//! Types for reading BZF archives
//!

use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use aurora_types::registry;
use binrw::BinRead;
use tracing::{debug, instrument};

use crate::{
    archive::{Archive, Resource, RESOURCE_SIZE_UNKNOWN},
    compression::decompress,
    error::{Error, Result},
    types::{ArchiveIdent, BzfHeader, BzfRecord, Tag},
};

/// Context attached to every error raised while loading an archive
const LOAD_CONTEXT: &str = "failed reading container";

/// Structure representing a BZF resource entry.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BzfEntry {
    /// Offset of the compressed data from the start of the file
    pub offset: u32,
    /// Size of the resource when extracted
    pub size: u32,
    /// Size of the compressed data, up to the next resource or the end of the file
    pub packed_size: u32,
    /// Numeric resource type id as stored in the table
    pub type_id: u32,
}

/// Size of each compressed span, given the span offsets in table order.
///
/// BZF tables don't store compressed sizes, every span ends where the next
/// one starts and the last one at the end of the file. Equal adjacent
/// offsets give an empty span; a span ending before it starts is a read
/// error, the table is corrupt or the file truncated.
pub fn packed_sizes(offsets: &[u32], file_size: u64) -> Result<Vec<u32>> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let end = offsets.get(i + 1).map_or(file_size, |&next| u64::from(next));
            let Some(size) = end.checked_sub(u64::from(offset)) else {
                return Err(Error::Read(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("resource {i} at offset {offset} ends at {end}, before it starts"),
                )));
            };
            Ok(u32::try_from(size).unwrap_or(u32::MAX))
        })
        .collect()
}

/// BZF archive reader
///
/// BZF is the LZMA compressed variant of the BIF archives found in the
/// mobile releases of the Aurora games. The whole index is read when the
/// archive is created, each extraction then reads and decompresses a
/// single resource.
///
/// ```no_run
/// use aurora_archive::{Archive, BzfArchive};
///
/// fn list_bzf_contents(path: &str) -> aurora_archive::error::Result<()> {
///     let mut bzf = BzfArchive::open(path)?;
///
///     for i in 0..bzf.len() {
///         let data = bzf.resource(i)?;
///         println!("{}: {} bytes", i, data.len());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct BzfArchive<R> {
    reader: R,
    resources: Vec<Resource>,
    entries: Vec<BzfEntry>,
}

impl BzfArchive<BufReader<File>> {
    /// Open a BZF archive from a file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            Error::Open {
                path: path.to_owned(),
                source,
            }
            .context(LOAD_CONTEXT)
        })?;

        Self::new(BufReader::new(file))
    }
}

impl<R> BzfArchive<R> {
    /// The BZF specific description of every resource, in index order
    pub fn entries(&self) -> &[BzfEntry] {
        &self.entries
    }

    /// Get the BZF entry of a resource
    pub fn entry(&self, index: usize) -> Option<&BzfEntry> {
        self.entries.get(index)
    }

    /// Unwrap and return the inner reader object
    ///
    /// The position of the reader is undefined.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> BzfArchive<R> {
    /// Read a BZF archive collecting the resources it contains.
    pub fn new(mut reader: R) -> Result<BzfArchive<R>> {
        let entries = Self::get_entries(&mut reader).map_err(|e| e.context(LOAD_CONTEXT))?;

        let types = registry();
        let resources = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Resource {
                hash: None,
                file_type: types.file_type_from_id(entry.type_id),
                index: index as u32,
            })
            .collect();

        Ok(BzfArchive {
            reader,
            resources,
            entries,
        })
    }

    fn seek(reader: &mut R, position: SeekFrom) -> Result<u64> {
        reader
            .seek(position)
            .map_err(|source| Error::Seek { position, source })
    }

    #[instrument(skip(reader), err)]
    fn get_header(reader: &mut R) -> Result<BzfHeader> {
        Self::seek(reader, SeekFrom::Start(0))?;

        let ident = ArchiveIdent::read(reader)?;
        for (expected, found) in [(Tag::BIFF, ident.tag), (Tag::V1, ident.version)] {
            if found != expected {
                return Err(Error::FormatMismatch { expected, found });
            }
        }

        let header = BzfHeader::read(reader)?;
        if header.fix_res_count != 0 {
            return Err(Error::UnsupportedFeature(format!(
                "{} fixed resources",
                header.fix_res_count
            )));
        }

        Ok(header)
    }

    #[instrument(skip(reader), err)]
    fn get_records(reader: &mut R, header: &BzfHeader) -> Result<Vec<BzfRecord>> {
        Self::seek(reader, SeekFrom::Start(u64::from(header.var_table_offset)))?;

        (0..header.var_res_count)
            .map(|_| BzfRecord::read(reader).map_err(Error::from))
            .collect()
    }

    fn get_entries(reader: &mut R) -> Result<Vec<BzfEntry>> {
        let file_size = Self::seek(reader, SeekFrom::End(0))?;
        let header = Self::get_header(reader)?;
        let records = Self::get_records(reader, &header)?;

        let offsets = records.iter().map(|r| r.offset).collect::<Vec<_>>();
        let entries = records
            .iter()
            .zip(packed_sizes(&offsets, file_size)?)
            .map(|(record, packed_size)| BzfEntry {
                offset: record.offset,
                size: record.size,
                packed_size,
                type_id: record.type_id,
            })
            .collect::<Vec<_>>();

        debug!(resources = entries.len(), file_size, "read BZF index");
        Ok(entries)
    }
}

impl<R: Read + Seek> Archive for BzfArchive<R> {
    fn resources(&self) -> &[Resource] {
        &self.resources
    }

    fn resource_size(&self, index: usize) -> u32 {
        self.entries
            .get(index)
            .map_or(RESOURCE_SIZE_UNKNOWN, |entry| entry.size)
    }

    #[instrument(skip(self), err)]
    fn resource(&mut self, index: usize) -> Result<Vec<u8>> {
        let entry = *self
            .entries
            .get(index)
            .ok_or(Error::ResourceNotFound(index))?;

        if entry.size == 0 || entry.packed_size == 0 {
            return Ok(Vec::new());
        }

        Self::seek(&mut self.reader, SeekFrom::Start(u64::from(entry.offset)))?;

        let mut packed = vec![0u8; entry.packed_size as usize];
        self.reader.read_exact(&mut packed)?;

        decompress(&packed, entry.size as usize)
    }
}

//! Lookups between paths, extensions, extension hashes, file types and
//! resource categories.
//!
//! The process wide [`FileTypeRegistry`] is reached through [`registry`].
//! Each lookup index is derived from [`FILE_TYPES`] the first time it is
//! needed and kept for the lifetime of the process. The indices sit behind
//! [`OnceLock`]s, so concurrent first use builds each of them exactly once.

use std::{collections::HashMap, fmt, sync::OnceLock};

use tracing::debug;

use crate::{
    file_type::{FileType, FileTypeInfo, FILE_TYPES},
    hash::{hash_string, HashAlgo},
    path,
};

/// Coarse grouping of file types
#[deny(missing_docs)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// Textures and pictures
    Image,

    /// Movies
    Video,

    /// Music, sound effects and voice over
    Sound,

    /// Containers of other resources
    Archive,

    /// Anything else, or an unknown type
    #[default]
    None,
}

impl ResourceCategory {
    /// The categories a file type can belong to, in lookup order
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Image,
        ResourceCategory::Video,
        ResourceCategory::Sound,
        ResourceCategory::Archive,
    ];

    /// Human readable name, empty for [`ResourceCategory::None`]
    pub fn description(self) -> &'static str {
        match self {
            ResourceCategory::Image => "Image",
            ResourceCategory::Video => "Video",
            ResourceCategory::Sound => "Sound",
            ResourceCategory::Archive => "Archive",
            ResourceCategory::None => "",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Lookup index from some key to a row of [`FILE_TYPES`]
pub type Lookup<K> = HashMap<K, &'static FileTypeInfo>;

/// Registry of all known file types
pub struct FileTypeRegistry {
    categories: [(ResourceCategory, Vec<FileType>); 4],
    extensions: OnceLock<Lookup<String>>,
    types: OnceLock<Lookup<FileType>>,
    ids: OnceLock<Lookup<u32>>,
    hashes: [OnceLock<Lookup<u64>>; 3],
}

impl fmt::Debug for FileTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTypeRegistry")
            .field("types", &FILE_TYPES.len())
            .field("extensions_built", &self.extensions.get().is_some())
            .field("types_built", &self.types.get().is_some())
            .field("ids_built", &self.ids.get().is_some())
            .finish()
    }
}

impl Default for FileTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process wide registry
pub fn registry() -> &'static FileTypeRegistry {
    static REGISTRY: OnceLock<FileTypeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(FileTypeRegistry::new)
}

fn build<K, F>(what: &str, key: F) -> Lookup<K>
where
    K: std::hash::Hash + Eq,
    F: Fn(&'static FileTypeInfo) -> K,
{
    let mut lookup = HashMap::with_capacity(FILE_TYPES.len());
    for info in FILE_TYPES {
        // The first registration of a key wins
        lookup.entry(key(info)).or_insert(info);
    }
    debug!(lookup = what, entries = lookup.len(), "built file type lookup");
    lookup
}

impl FileTypeRegistry {
    /// Create a registry with its category lists filled in and all lookups unbuilt
    pub fn new() -> Self {
        use FileType::*;

        FileTypeRegistry {
            categories: [
                (
                    ResourceCategory::Image,
                    vec![Dds, Tpc, Txb, Tga, Png, Bmp, Jpg, Sbm, Cur, Curs],
                ),
                (ResourceCategory::Video, vec![Bik, Mpg, Wmv, Mov, Xmv, Vx]),
                (ResourceCategory::Sound, vec![Wav, Bmu, Ogg, Wma]),
                (
                    ResourceCategory::Archive,
                    vec![Key, Bif, Bzf, Erf, Rim, Zip, Mod, Nwm, Sav, Hak],
                ),
            ],
            extensions: OnceLock::new(),
            types: OnceLock::new(),
            ids: OnceLock::new(),
            hashes: [OnceLock::new(), OnceLock::new(), OnceLock::new()],
        }
    }

    /// Lower case extension (with dot) to file type
    pub fn extension_lookup(&self) -> &Lookup<String> {
        self.extensions
            .get_or_init(|| build("extension", |info| info.extension.to_ascii_lowercase()))
    }

    /// File type to its table row
    pub fn type_lookup(&self) -> &Lookup<FileType> {
        self.types.get_or_init(|| build("type", |info| info.file_type))
    }

    /// Numeric resource type id to file type
    pub fn id_lookup(&self) -> &Lookup<u32> {
        self.ids.get_or_init(|| build("id", |info| info.id))
    }

    /// Hash of the extension (without dot) to file type.
    ///
    /// Returns `None` for [`HashAlgo::None`], which has no lookup.
    pub fn hash_lookup(&self, algo: HashAlgo) -> Option<&Lookup<u64>> {
        let slot = match algo {
            HashAlgo::None => return None,
            HashAlgo::Djb2 => &self.hashes[0],
            HashAlgo::Fnv32 => &self.hashes[1],
            HashAlgo::Fnv64 => &self.hashes[2],
        };

        Some(slot.get_or_init(|| {
            build(&format!("{algo} hash"), |info| {
                let extension = info.extension.strip_prefix('.').unwrap_or(info.extension);
                hash_string(extension, algo)
            })
        }))
    }

    /// Determine the file type of a path from its extension.
    ///
    /// The extension is compared case insensitively. Unknown extensions
    /// give [`FileType::None`].
    pub fn file_type(&self, path: &str) -> FileType {
        let extension = path::extension(path).to_ascii_lowercase();
        self.extension_lookup()
            .get(&extension)
            .map_or(FileType::None, |info| info.file_type)
    }

    /// Determine the file type from the hash of its extension (without the dot)
    pub fn file_type_from_hash(&self, algo: HashAlgo, hashed_extension: u64) -> FileType {
        self.hash_lookup(algo)
            .and_then(|lookup| lookup.get(&hashed_extension))
            .map_or(FileType::None, |info| info.file_type)
    }

    /// Determine the file type from a numeric resource type id
    pub fn file_type_from_id(&self, id: u32) -> FileType {
        self.id_lookup()
            .get(&id)
            .map_or(FileType::None, |info| info.file_type)
    }

    /// The extension registered for a file type, without leading dot.
    ///
    /// Empty if the type has no extension.
    pub fn extension(&self, file_type: FileType) -> &'static str {
        let extension = self.registered_extension(file_type);
        extension.strip_prefix('.').unwrap_or(extension)
    }

    fn registered_extension(&self, file_type: FileType) -> &'static str {
        self.type_lookup()
            .get(&file_type)
            .map_or("", |info| info.extension)
    }

    /// Append the extension of `file_type` to a path that has none.
    ///
    /// `"resource_0001"` with [`FileType::Wav`] gives `"resource_0001.wav"`.
    pub fn add_file_type(&self, path: &str, file_type: FileType) -> String {
        self.set_file_type(&format!("{path}."), file_type)
    }

    /// Replace the extension of a path with the one registered for `file_type`
    pub fn set_file_type(&self, path: &str, file_type: FileType) -> String {
        path::change_extension(path, self.registered_extension(file_type))
    }

    /// The category a file type belongs to.
    ///
    /// This is a linear scan over the category lists; the first list
    /// containing the type wins.
    pub fn resource_category(&self, file_type: FileType) -> ResourceCategory {
        self.categories
            .iter()
            .find(|(_, types)| types.contains(&file_type))
            .map_or(ResourceCategory::None, |(category, _)| *category)
    }

    /// The category of a path, judged by its extension
    pub fn resource_category_for_path(&self, path: &str) -> ResourceCategory {
        self.resource_category(self.file_type(path))
    }

    /// The category of a hashed extension
    pub fn resource_category_for_hash(&self, algo: HashAlgo, hashed_extension: u64) -> ResourceCategory {
        self.resource_category(self.file_type_from_hash(algo, hashed_extension))
    }

    /// The file types making up a category. Empty for [`ResourceCategory::None`].
    pub fn category_members(&self, category: ResourceCategory) -> &[FileType] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, types)| types.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn resolves_extensions_case_insensitively() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.file_type("music/mus_theme.WAV"), FileType::Wav);
        assert_eq!(registry.file_type("save.thewitchersave"), FileType::TheWitcherSave);
        assert_eq!(registry.file_type("save.TheWitcherSave"), FileType::TheWitcherSave);
        assert_eq!(registry.file_type("data\\2da\\appearance.2da"), FileType::TwoDa);
    }

    #[test]
    fn unknown_input_is_none() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.file_type("archive.unknownext"), FileType::None);
        assert_eq!(registry.file_type("no_extension"), FileType::None);
        assert_eq!(registry.file_type(""), FileType::None);
        assert_eq!(registry.file_type_from_id(1234567), FileType::None);
    }

    #[test]
    fn duplicate_extensions_resolve_to_first_registration() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.file_type("quest.qst"), FileType::Qst);
        assert_eq!(registry.file_type("model.mdx"), FileType::Mdx);
        assert_eq!(registry.file_type("texture.txb"), FileType::Txb);
        assert_eq!(registry.extension(FileType::Qst2), "qst");
    }

    #[test]
    fn extension_strips_dot() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.extension(FileType::Wav), "wav");
        assert_eq!(registry.extension(FileType::TheWitcherSave), "TheWitcherSave");
        assert_eq!(registry.extension(FileType::None), "");
    }

    #[test]
    fn add_and_set_file_type() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.add_file_type("00001", FileType::Wav), "00001.wav");
        assert_eq!(registry.add_file_type("00001", FileType::None), "00001");
        assert_eq!(registry.set_file_type("dir/texture.tga", FileType::Dds), "dir/texture.dds");
        assert_eq!(registry.set_file_type("dir/texture.tga", FileType::None), "dir/texture");
        assert_eq!(registry.set_file_type("dir/texture", FileType::Tpc), "dir/texture.tpc");
    }

    #[test]
    fn ids() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.file_type_from_id(4), FileType::Wav);
        assert_eq!(registry.file_type_from_id(10), FileType::Txt);
        assert_eq!(registry.file_type_from_id(2045), FileType::Dft);
        assert_eq!(registry.file_type_from_id(u32::MAX), FileType::None);
    }

    #[test]
    fn hashes() {
        let registry = FileTypeRegistry::new();
        for algo in HashAlgo::ALL {
            assert_eq!(registry.file_type_from_hash(algo, algo.hash("dds")), FileType::Dds);
            assert_eq!(
                registry.resource_category_for_hash(algo, algo.hash("ogg")),
                ResourceCategory::Sound
            );
        }
    }

    #[test]
    fn hash_none_never_builds() {
        let registry = FileTypeRegistry::new();
        assert!(registry.hash_lookup(HashAlgo::None).is_none());
        assert_eq!(registry.file_type_from_hash(HashAlgo::None, 0), FileType::None);
        assert_eq!(
            registry.file_type_from_hash(HashAlgo::from_raw(7), HashAlgo::Fnv64.hash("wav")),
            FileType::None
        );
    }

    #[test]
    fn categories() {
        let registry = FileTypeRegistry::new();
        assert_eq!(registry.resource_category(FileType::Dds), ResourceCategory::Image);
        assert_eq!(registry.resource_category(FileType::Bik), ResourceCategory::Video);
        assert_eq!(registry.resource_category(FileType::Wav), ResourceCategory::Sound);
        assert_eq!(registry.resource_category(FileType::Bzf), ResourceCategory::Archive);
        assert_eq!(registry.resource_category(FileType::Nss), ResourceCategory::None);
        assert_eq!(registry.resource_category_for_path("a/b/c.key"), ResourceCategory::Archive);
        assert_eq!(registry.resource_category_for_path("c"), ResourceCategory::None);
        assert!(registry.category_members(ResourceCategory::None).is_empty());
    }

    #[test]
    fn category_descriptions() {
        assert_eq!(ResourceCategory::Image.to_string(), "Image");
        assert_eq!(ResourceCategory::Archive.description(), "Archive");
        assert_eq!(ResourceCategory::None.to_string(), "");
    }

    #[traced_test]
    #[test]
    fn lazy_build_is_idempotent() {
        let registry = FileTypeRegistry::new();

        let first = registry.extension_lookup();
        let second = registry.extension_lookup();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), second.len());

        let types = registry.type_lookup().len();
        assert_eq!(registry.type_lookup().len(), types);
        assert_eq!(types, FILE_TYPES.len());

        for algo in HashAlgo::ALL {
            let a = registry.hash_lookup(algo).unwrap();
            let b = registry.hash_lookup(algo).unwrap();
            assert!(std::ptr::eq(a, b));
        }

        assert!(logs_contain("built file type lookup"));
    }

    #[test]
    fn process_wide_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
        assert_eq!(registry().file_type("x.bif"), FileType::Bif);
    }
}

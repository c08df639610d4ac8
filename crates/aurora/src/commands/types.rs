use aurora_types::{hash::format_hash, registry, FileType, HashAlgo};
use clap::{Args, ValueEnum};
use miette::Result;

#[derive(clap::Subcommand)]
pub enum TypesCommands {
    /// Show the file type and category of paths
    Resolve(ResolveArgs),
    /// Hash extensions and show the file type each hash resolves to
    Hash(HashArgs),
}

impl TypesCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            TypesCommands::Resolve(resolve) => resolve.handle(),
            TypesCommands::Hash(hash) => hash.handle(),
        }
    }
}

#[derive(Args)]
pub struct ResolveArgs {
    /// File names or paths
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<String>,
}

impl ResolveArgs {
    pub fn handle(&self) -> Result<()> {
        for path in &self.paths {
            println!("{}", describe(path, registry().file_type(path)));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Algo {
    Djb2,
    Fnv32,
    Fnv64,
}

impl From<Algo> for HashAlgo {
    fn from(value: Algo) -> Self {
        match value {
            Algo::Djb2 => HashAlgo::Djb2,
            Algo::Fnv32 => HashAlgo::Fnv32,
            Algo::Fnv64 => HashAlgo::Fnv64,
        }
    }
}

#[derive(Args)]
pub struct HashArgs {
    /// The hash algorithm
    #[arg(short, long, value_enum, default_value_t = Algo::Fnv64)]
    algo: Algo,

    /// Extensions, with or without their leading dot
    #[arg(required = true, value_name = "EXT")]
    extensions: Vec<String>,
}

impl HashArgs {
    pub fn handle(&self) -> Result<()> {
        let algo = HashAlgo::from(self.algo);
        for extension in &self.extensions {
            let extension = extension.strip_prefix('.').unwrap_or(extension);
            let hash = algo.hash(&extension.to_ascii_lowercase());
            let file_type = registry().file_type_from_hash(algo, hash);
            println!(
                "{} {}",
                format_hash(hash),
                describe(extension, file_type)
            );
        }
        Ok(())
    }
}

fn describe(name: &str, file_type: FileType) -> String {
    let types = registry();
    match types.resource_category(file_type).description() {
        "" => format!("{name}: {file_type}"),
        category => format!("{name}: {file_type} ({category})"),
    }
}

#[cfg(test)]
mod test {
    use aurora_types::{FileType, HashAlgo};
    use pretty_assertions::assert_eq;

    use super::{describe, Algo};

    #[test]
    fn describe_types() {
        assert_eq!(describe("a.tga", FileType::Tga), "a.tga: Tga (Image)");
        assert_eq!(describe("a.2da", FileType::TwoDa), "a.2da: TwoDa");
        assert_eq!(describe("a.xyz", FileType::None), "a.xyz: None");
    }

    #[test]
    fn algo_names() {
        assert_eq!(HashAlgo::from(Algo::Djb2), HashAlgo::Djb2);
        assert_eq!(HashAlgo::from(Algo::Fnv32), HashAlgo::Fnv32);
        assert_eq!(HashAlgo::from(Algo::Fnv64), HashAlgo::Fnv64);
    }
}

pub mod extract;
pub mod list;

#[derive(clap::Subcommand)]
pub enum BzfCommands {
    /// List the resources of a BZF file
    List(list::ListArgs),
    /// Extract a BZF file into a directory
    Extract(extract::ExtractArgs),
}

impl BzfCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            BzfCommands::List(list) => list.handle(),
            BzfCommands::Extract(extract) => extract.handle(),
        }
    }
}

/// Name a resource is extracted to; BZF files store no names
pub fn resource_file_name(index: usize, file_type: aurora_types::FileType) -> String {
    aurora_types::registry().add_file_type(&format!("{index:05}"), file_type)
}

#[cfg(test)]
mod test {
    use aurora_types::FileType;
    use pretty_assertions::assert_eq;

    use super::resource_file_name;

    #[test]
    fn resource_file_names() {
        assert_eq!(resource_file_name(0, FileType::Wav), "00000.wav");
        assert_eq!(resource_file_name(123, FileType::TwoDa), "00123.2da");
        assert_eq!(resource_file_name(7, FileType::None), "00007");
    }
}

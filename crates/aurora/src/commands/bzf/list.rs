use std::path::PathBuf;

use aurora_archive::{Archive, BzfArchive};
use aurora_types::registry;
use clap::Args;
use miette::{Context, Result};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::size::human_readable_size;

#[derive(Args)]
pub struct ListArgs {
    /// An input BZF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let bzf =
            BzfArchive::open(&self.file).context(format!("path: {}", self.file.display()))?;
        let types = registry();

        let header = format!(
            "{:>6}  {:<16}  {:>10}  {:>10}  {}",
            "index", "name", "size", "packed", "category"
        );
        println!("{}", header.if_supports_color(Stdout, |text| text.bold()));

        for (resource, entry) in bzf.resources().iter().zip(bzf.entries()) {
            let index = resource.index as usize;
            let mut name = super::resource_file_name(index, resource.file_type);
            if resource.file_type.is_none() {
                name.push_str(&format!(" (type {})", entry.type_id));
            }

            println!(
                "{:>6}  {:<16}  {:>10}  {:>10}  {}",
                index,
                name,
                human_readable_size(entry.size.into()),
                human_readable_size(entry.packed_size.into()),
                types.resource_category(resource.file_type).description()
            );
        }

        let total: u64 = bzf.entries().iter().map(|e| u64::from(e.size)).sum();
        println!(
            "{} resources, {} extracted",
            bzf.len(),
            human_readable_size(total)
        );

        Ok(())
    }
}

use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use aurora_archive::{Archive, BzfArchive};
use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;

#[derive(Args)]
pub struct ExtractArgs {
    /// An input BZF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let mut bzf =
            BzfArchive::open(&self.file).context(format!("path: {}", self.file.display()))?;

        fs::create_dir_all(&self.directory)
            .into_diagnostic()
            .context(format!("creating {}", self.directory.display()))?;

        for i in 0..bzf.len() {
            let p = self
                .directory
                .join(super::resource_file_name(i, bzf.resources()[i].file_type));
            info!("writing {}", p.display());

            let data = bzf
                .resource(i)
                .context(format!("extracting resource {i}"))?;

            let mut out = if !self.overwrite {
                File::create_new(&p)
                    .into_diagnostic()
                    .context(format!("creating {}", p.display()))?
            } else {
                File::create(&p)
                    .into_diagnostic()
                    .context(format!("creating {}", p.display()))?
            };

            out.write_all(&data)
                .into_diagnostic()
                .context(format!("writing {}", p.display()))?;
        }

        info!("extracted {} resources", bzf.len());
        Ok(())
    }
}

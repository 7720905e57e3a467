use std::path::PathBuf;

use anyhow::Context;
use clap::ArgAction;
use doctag::storage;
use tracing::instrument;

/// Annotate a plain-text document collection with category tags.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to the mapping file (one `<label>: n. <rangespec>` per line)
    #[arg(long, value_name = "PATH")]
    mapfile: PathBuf,

    /// Path to the document collection to tag
    #[arg(long, value_name = "PATH")]
    infile: PathBuf,

    /// Path the tagged collection is written to (overwritten if it exists)
    #[arg(long, value_name = "PATH")]
    outfile: PathBuf,
}

impl Cli {
    /// Runs the tagging pipeline end to end.
    ///
    /// # Errors
    ///
    /// Returns an error if either input fails to read or parse, if the
    /// mapping references a document ID absent from the collection, or if the
    /// output cannot be written. Any failure aborts before the output file is
    /// produced.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.execute()
    }

    #[instrument(level = "debug", skip(self))]
    fn execute(self) -> anyhow::Result<()> {
        let mapping = storage::read_mapping(&self.mapfile)
            .with_context(|| format!("failed to read mapping file {}", self.mapfile.display()))?;

        let mut collection = storage::load_collection(&self.infile).with_context(|| {
            format!("failed to read document collection {}", self.infile.display())
        })?;

        collection
            .apply(&mapping)
            .context("failed to apply tags")?;

        storage::save_collection(&collection, &self.outfile)
            .with_context(|| format!("failed to write {}", self.outfile.display()))?;

        tracing::info!(
            labels = mapping.len(),
            documents = collection.len(),
            "tagged collection written"
        );
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    use super::Cli;

    fn cli(dir: &TempDir, mapping: &str, collection: &str) -> (Cli, PathBuf) {
        let mapfile = dir.path().join("mapping.txt");
        let infile = dir.path().join("collection.txt");
        let outfile = dir.path().join("tagged.txt");
        std::fs::write(&mapfile, mapping).unwrap();
        std::fs::write(&infile, collection).unwrap();

        let cli = Cli {
            verbose: 0,
            mapfile,
            infile,
            outfile: outfile.clone(),
        };
        (cli, outfile)
    }

    #[test]
    fn tags_collection_into_outfile() {
        let dir = TempDir::new().unwrap();
        let (cli, outfile) = cli(
            &dir,
            "exempli gratia: n. 8\n",
            "<headingline>8</headingline>\ntext\n",
        );

        cli.execute().unwrap();

        assert_eq!(
            std::fs::read_to_string(&outfile).unwrap(),
            "<headingline>8<exempli gratia></headingline>\ntext\n\n"
        );
    }

    #[test]
    fn unknown_document_id_produces_no_output_file() {
        let dir = TempDir::new().unwrap();
        let (cli, outfile) = cli(
            &dir,
            "carpe diem: n. 99\n",
            "<headingline>1</headingline>\nbody\n",
        );

        assert!(cli.execute().is_err());
        assert!(!outfile.exists());
    }

    #[test]
    fn malformed_mapping_produces_no_output_file() {
        let dir = TempDir::new().unwrap();
        let (cli, outfile) = cli(
            &dir,
            "not a mapping line\n",
            "<headingline>1</headingline>\nbody\n",
        );

        assert!(cli.execute().is_err());
        assert!(!outfile.exists());
    }

    #[test]
    fn missing_infile_fails() {
        let dir = TempDir::new().unwrap();
        let mapfile = dir.path().join("mapping.txt");
        std::fs::write(&mapfile, "a: n. 1\n").unwrap();

        let cli = Cli {
            verbose: 0,
            mapfile,
            infile: Path::new("/nonexistent/collection.txt").to_path_buf(),
            outfile: dir.path().join("tagged.txt"),
        };

        assert!(cli.execute().is_err());
    }
}

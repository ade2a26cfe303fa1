use anyhow::Context;
use colored::Colorize;
use std::path::PathBuf;
use tago_core::{TagoConfig, TagoError};
use tago_index::TagIndexer;
use tago_storage::{persist, PersistReport};

/// What a successful run produced.
pub(crate) struct TagsOutcome {
    pub report: PersistReport,
    pub files: usize,
    pub tags: usize,
    pub dropped: usize,
}

/// Index `paths` and write the tags file described by `config`.
///
/// Nothing is written unless every file parses.
pub(crate) fn cmd_tags(paths: &[PathBuf], config: &TagoConfig) -> anyhow::Result<TagsOutcome> {
    let indexer = TagIndexer::new(config.index);
    let files = indexer.expand_inputs(paths);
    if files.is_empty() {
        anyhow::bail!("No Go source files found");
    }
    tracing::debug!("Indexing {} files", files.len());

    let index = indexer
        .index_files(&files)
        .context("Parsing errors experienced, aborting")?;
    let buffer = index.assemble();

    let destination = config.output.destination();
    let report = match persist(&buffer, &destination, config.output.policy) {
        Ok(report) => report,
        Err(err @ TagoError::DestinationExists(_)) => {
            eprintln!(
                "{} tago will not overwrite an existing tags file; use -a to append or -o to overwrite.",
                "Hint:".yellow().bold()
            );
            return Err(err.into());
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("Error writing file \"{}\"", destination.display())))
        }
    };

    Ok(TagsOutcome {
        report,
        files: index.chunks().len(),
        tags: index.tag_count(),
        dropped: index.dropped_count(),
    })
}

//! The generation run.
//!
//! One pass over the CSV: the output directory is created, the template is
//! loaded once, and each data row produces exactly one file, written in row
//! order. Progress lines (`Generated <path>` / `Error: ...`) go to the
//! provided writer, normally stdout.

use crate::config::{Config, RowErrorPolicy};
use crate::error::{GenError, Result};
use crate::filename::derive_filename;
use crate::fs::{ensure_dir, write_file};
use crate::rows::{Row, RowReader};
use crate::template::Template;
use std::io::Write;
use std::path::{Path, PathBuf};


/// Outcome of a run in which no row failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Written files, in CSV row order.
    pub generated: Vec<PathBuf>,
}

/// Paths of one generation run.
#[derive(Debug, Clone)]
pub struct Job<'a> {
    pub input: &'a Path,
    pub template: &'a Path,
    pub output_dir: &'a Path,
}

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the generation for `job`, reporting progress to `out`.
    ///
    /// Missing inputs abort before any file is written (the output directory
    /// may already exist). Row failures follow the configured
    /// [`RowErrorPolicy`]: `Abort` returns the first row error, `Skip`
    /// reports it and returns [`GenError::RowsFailed`] once all rows are done.
    pub fn run<W: Write>(&self, job: &Job<'_>, out: &mut W) -> Result<Summary> {
        ensure_dir(job.output_dir)?;

        let template = Template::load(job.template)?;
        let rows = RowReader::open(job.input, self.config.delimiter_byte())?;

        for token in template.unmatched_tokens(rows.headers()) {
            tracing::warn!(token, "template token has no matching CSV column; it will be left as-is");
        }

        let mut summary = Summary::default();
        let mut total = 0;
        let mut failed = 0;

        for row in rows {
            total += 1;

            match row.and_then(|row| self.generate_row(&template, &row, job.output_dir)) {
                Ok(path) => {
                    report(out, format_args!("Generated {}", path.display()));
                    summary.generated.push(path);
                }
                Err(err) => match self.config.on_row_error {
                    RowErrorPolicy::Abort => {
                        tracing::debug!(row = total, "aborting run on row failure");
                        return Err(err);
                    }
                    RowErrorPolicy::Skip => {
                        tracing::debug!(row = total, error = %err, "skipping row");
                        report(out, format_args!("Error: {}", err));
                        failed += 1;
                    }
                },
            }
        }

        tracing::info!(
            rows = total,
            generated = summary.generated.len(),
            failed,
            "generation finished"
        );

        if failed > 0 {
            return Err(GenError::RowsFailed { failed, total });
        }
        Ok(summary)
    }

    /// Render one row and write it; returns the written path.
    fn generate_row(&self, template: &Template, row: &Row, output_dir: &Path) -> Result<PathBuf> {
        let content = template.render(row);
        let filename = derive_filename(row, &self.config.default_extension)?;
        let path = output_dir.join(filename);

        write_file(&path, &content)?;
        tracing::debug!(row = row.number, path = %path.display(), bytes = content.len(), "wrote file");
        Ok(path)
    }
}

fn report<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        tracing::warn!(error = %e, "failed to write progress output");
    }
}

//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use gloss_article::HttpArticleSource;
use gloss_domain::traits::{ArticleSource, LlmProvider};
use gloss_domain::{AnnotationMode, AnnotationTable};
use gloss_llm::OpenAiProvider;
use gloss_pipeline::{
    write_csv, AnnotationFailurePolicy, Pipeline, PipelineConfig, PipelineError, PipelineOutput,
    EXPORT_FILE_NAME,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Where the CSV table goes after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Write to a file
    File(PathBuf),
    /// Write to standard output
    Stdout,
    /// Do not export
    Skip,
}

impl ExportTarget {
    /// Resolve the target from `--output`/`--no-export`.
    ///
    /// `-` means standard output. Without an explicit path the table goes to
    /// the default file name. Quiet output already prints the CSV to standard
    /// output, so it is never written there twice.
    pub fn resolve(output: Option<&Path>, no_export: bool, format: OutputFormat) -> Self {
        let quiet = format == OutputFormat::Quiet;
        if no_export {
            return ExportTarget::Skip;
        }
        match output {
            Some(path) if path == Path::new("-") && quiet => ExportTarget::Skip,
            Some(path) if path == Path::new("-") => ExportTarget::Stdout,
            Some(path) => ExportTarget::File(path.to_path_buf()),
            None if quiet => ExportTarget::Skip,
            None => ExportTarget::File(PathBuf::from(EXPORT_FILE_NAME)),
        }
    }
}

/// Execute the run command.
pub async fn execute_run(
    args: RunArgs,
    config: &Config,
    api_key: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    let mut pipeline_config = config.pipeline.clone();
    apply_overrides(&mut pipeline_config, &args);

    let pipeline = build_pipeline(config, pipeline_config, api_key)?;
    let mode = args.mode.map(Into::into).unwrap_or(config.settings.mode);
    let target = ExportTarget::resolve(args.output.as_deref(), args.no_export, formatter.format());

    run_and_render(&pipeline, &args.url, mode, &target, formatter).await?;
    Ok(())
}

/// Fold per-run flags into the pipeline configuration.
pub fn apply_overrides(pipeline: &mut PipelineConfig, args: &RunArgs) {
    if let Some(model) = &args.model {
        pipeline.completion.model = model.clone();
    }
    if let Some(concurrency) = args.concurrency {
        pipeline.annotation_concurrency = concurrency;
    }
    if args.keep_failed {
        pipeline.annotation_failure = AnnotationFailurePolicy::MarkRow;
    }
}

/// Build the production pipeline: hosted completions plus HTTP article fetch.
///
/// # Errors
///
/// Fails with [`PipelineError::MissingCredential`] when no non-blank API key
/// is given, before any article is downloaded.
pub fn build_pipeline(
    config: &Config,
    pipeline_config: PipelineConfig,
    api_key: Option<String>,
) -> Result<Pipeline<OpenAiProvider, HttpArticleSource>> {
    let api_key = api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or(PipelineError::MissingCredential)?;

    let mut llm_config = config.llm.clone();
    llm_config.api_key = Some(api_key);

    let llm = OpenAiProvider::new(llm_config)?;
    let source = HttpArticleSource::with_timeout(pipeline_config.stage_timeout())?;
    Ok(Pipeline::new(llm, source, pipeline_config)?)
}

/// Run the pipeline for one URL, print the result and export the table.
pub async fn run_and_render<L, A>(
    pipeline: &Pipeline<L, A>,
    url: &str,
    mode: AnnotationMode,
    target: &ExportTarget,
    formatter: &Formatter,
) -> Result<PipelineOutput>
where
    L: LlmProvider,
    A: ArticleSource,
    PipelineError: From<L::Error> + From<A::Error>,
{
    if formatter.format() == OutputFormat::Table {
        eprintln!("{}", formatter.info(&format!("Fetching {}", url.trim())));
    }

    let output = pipeline.run(url, mode).await?;
    let rendered = formatter.format_output(&output)?;
    if formatter.format() == OutputFormat::Quiet {
        // Already newline-terminated CSV
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    let failed = output.table.failed_count();
    if failed > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} keyword(s) could not be annotated", failed))
        );
    }

    export_table(&output.table, target, formatter)?;
    Ok(output)
}

/// Write `table` to `target`.
pub fn export_table(table: &AnnotationTable, target: &ExportTarget, formatter: &Formatter) -> Result<()> {
    match target {
        ExportTarget::Skip => {}
        ExportTarget::Stdout => write_csv(table, io::stdout().lock())?,
        ExportTarget::File(path) => {
            let file = File::create(path)?;
            write_csv(table, BufWriter::new(file))?;
            eprintln!(
                "{}",
                formatter.success(&format!("Saved {} rows to {}", table.len(), path.display()))
            );
        }
    }
    Ok(())
}

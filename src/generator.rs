//! Drives a whole generation pass over a DSL source.
//!
//! Output is written in two phases to the same writer: type definitions as
//! their code lines are read, then the buffered declarations block once the
//! input is exhausted. A failing pass leaves whatever was already written.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::classifier::{classify, LineKind};
use crate::config::GeneratorConfig;
use crate::emitter::Emitter;
use crate::parser::ParserContext;
use crate::GenResult;

/// Line counts of a finished pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub lines: usize,
    pub comments: usize,
    /// Signature lines, including those later turned into aliases.
    pub signatures: usize,
    pub type_definitions: usize,
    pub aliases: usize,
    pub descriptions: usize,
    pub banners: usize,
    pub skipped: usize,
}

impl GenerationReport {
    fn record(&mut self, kind: &LineKind) {
        self.lines += 1;
        match kind {
            LineKind::Comment => self.comments += 1,
            LineKind::Signature { .. } => self.signatures += 1,
            LineKind::CodeExpression(_) => self.type_definitions += 1,
            LineKind::EquivalentExpression(_) => self.aliases += 1,
            LineKind::Description(_) => self.descriptions += 1,
            LineKind::SectionHeader(_) => self.banners += 1,
            LineKind::Insignificant => self.skipped += 1,
        }
    }
}

pub struct Generator<'a, W: Write> {
    config: &'a GeneratorConfig,
    emitter: Emitter<'a>,
    context: ParserContext,
    report: GenerationReport,
    out: W,
}

impl<'a, W: Write> Generator<'a, W> {
    pub fn new(config: &'a GeneratorConfig, out: W) -> Self {
        Self {
            config,
            emitter: Emitter::new(config),
            context: ParserContext::new(),
            report: GenerationReport::default(),
            out,
        }
    }

    /// Writes the provenance comment, includes and namespace opening.
    pub fn begin(&mut self) -> GenResult<()> {
        self.out.write_all(self.emitter.preamble().as_bytes())?;
        Ok(())
    }

    /// Classifies and applies one line (without its terminator).
    pub fn feed_line(&mut self, number: usize, line: &str) -> GenResult<()> {
        let kind = classify(line);
        debug!(line = number, kind = %kind, "classified");
        if kind == LineKind::Insignificant && !line.trim().is_empty() {
            warn!(line = number, text = line, "skipping unrecognized line");
        }
        self.report.record(&kind);

        if let Some(definition) =
            self.context
                .apply(number, kind, &self.config.markers, &self.emitter)?
        {
            self.out.write_all(definition.as_bytes())?;
        }
        Ok(())
    }

    /// Flushes the declarations block and closes the namespace.
    pub fn finish(mut self) -> GenResult<(W, GenerationReport)> {
        let buffer = std::mem::take(&mut self.context).finish();
        debug!(fragments = buffer.len(), "flushing declarations");
        self.out
            .write_all(self.emitter.declarations(buffer.fragments()).as_bytes())?;
        self.out.write_all(self.emitter.closing().as_bytes())?;
        self.out.flush()?;
        Ok((self.out, self.report))
    }

    /// Runs a complete pass over `input`.
    pub fn run<R: BufRead>(mut self, input: R) -> GenResult<(W, GenerationReport)> {
        self.begin()?;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            self.feed_line(index + 1, &line)?;
        }
        self.finish()
    }
}

/// Generates the header for `source` in memory.
pub fn generate_str(source: &str, config: &GeneratorConfig) -> GenResult<String> {
    let (out, _) = Generator::new(config, Vec::new()).run(source.as_bytes())?;
    // Every byte written comes from `source` or the config, both valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Reads `source`, writes the generated header to `target`.
#[instrument(level = "debug", skip(config))]
pub fn generate_file(
    source: &Path,
    target: &Path,
    config: &GeneratorConfig,
) -> GenResult<GenerationReport> {
    let input = BufReader::new(File::open(source)?);
    let output = BufWriter::new(File::create(target)?);

    let (_, report) = Generator::new(config, output).run(input)?;
    info!(
        signatures = report.signatures,
        type_definitions = report.type_definitions,
        aliases = report.aliases,
        skipped = report.skipped,
        "generated {}",
        target.display()
    );
    Ok(report)
}

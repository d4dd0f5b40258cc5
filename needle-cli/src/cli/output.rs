//! Rendering of alignment results for the terminal and for files

use anyhow::Result;
use needle_bio::alignment::GlobalAlignment;
use needle_bio::formats::write_fasta_to_writer;
use needle_bio::sequence::Sequence;
use needle_core::OutputFormat;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// What `needle align` reports for one pair
#[derive(Debug, Serialize)]
pub struct AlignmentReport {
    pub score: f64,
    pub aligned_a: String,
    pub aligned_b: String,
    pub identity: f64,
    pub header_a: String,
    pub header_b: String,
    #[serde(skip)]
    pub alignment: GlobalAlignment,
}

impl AlignmentReport {
    pub fn new(alignment: GlobalAlignment, header_a: String, header_b: String) -> Self {
        Self {
            score: alignment.score,
            aligned_a: String::from_utf8_lossy(&alignment.aligned_a).into_owned(),
            aligned_b: String::from_utf8_lossy(&alignment.aligned_b).into_owned(),
            identity: alignment.identity(),
            header_a,
            header_b,
            alignment,
        }
    }

    pub fn render(&self, format: OutputFormat, line_width: usize) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(line_width)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Fasta => self.render_fasta(line_width),
        }
    }

    fn render_text(&self, line_width: usize) -> String {
        let columns = self.alignment.len();
        let matches = (self.identity * columns as f64).round() as usize;

        let mut out = String::new();
        let _ = writeln!(out, "# A: {}", self.header_a);
        let _ = writeln!(out, "# B: {}", self.header_b);
        let _ = writeln!(out, "# Length: {}", columns);
        let _ = writeln!(
            out,
            "# Identity: {}/{} ({:.1}%)",
            matches,
            columns,
            self.identity * 100.0
        );
        let _ = writeln!(out, "# Gaps: {}/{}", self.alignment.gap_count(), columns);
        let _ = writeln!(out, "# Score: {}", self.score);

        if columns > 0 {
            out.push('\n');
            out.push_str(&self.alignment.display(line_width));
        }
        out
    }

    fn render_fasta(&self, line_width: usize) -> Result<String> {
        let records = [
            Sequence::new(self.header_a.clone(), self.alignment.aligned_a.clone()),
            Sequence::new(self.header_b.clone(), self.alignment.aligned_b.clone()),
        ];

        let mut buffer = Vec::new();
        write_fasta_to_writer(&mut buffer, &records, line_width)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Write to `path`, or to stdout when no path is given
pub fn emit(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "wrote alignment");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

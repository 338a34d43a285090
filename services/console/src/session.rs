//! Interactive triage session
//!
//! Drives the fixed question sequence, re-prompting on invalid answers,
//! and builds one `Assessment` per entry. The collected answers go to the
//! scoring engine whole; the rendered report is printed and persisted.
//! Generic over reader/writer so tests can script a whole session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use scoring_engine::engine;
use types::assessment::{Assessment, LikelihoodSource};
use types::capability::{Capability, CapabilityAnswers};
use types::level::QualitativeLevel;

use crate::error::ConsoleError;
use crate::persist;
use crate::prompt::{self, PromptError};
use crate::report::{self, ReportMetadata};
use crate::scanner;

/// One interactive console session over a pair of streams
pub struct Session<R, W> {
    reader: R,
    writer: W,
    output_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, output_dir: PathBuf) -> Self {
        Self {
            reader,
            writer,
            output_dir,
        }
    }

    /// Run the session: score entries until the operator stops.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            self.process_entry()?;
            let (another, _) = self.ask("Do you have another entry? (Y/N): ", prompt::parse_yes_no)?;
            if !another {
                break;
            }
        }
        Ok(())
    }

    /// Walk one entry through selection, questions, scoring, and persistence.
    fn process_entry(&mut self) -> Result<(), ConsoleError> {
        let scanner = self.select_scanner()?;
        let (entry_name, _) =
            self.ask("Please give the entry a name: ", prompt::parse_entry_name)?;
        let metadata = ReportMetadata::capture(scanner, entry_name);

        tracing::info!(
            entry_id = %metadata.entry_id,
            scanner = %metadata.scanner,
            entry = %metadata.entry_name,
            "Processing entry"
        );
        writeln!(
            self.writer,
            "\nProcessing entry: {} with scanner: {}",
            metadata.entry_name, metadata.scanner
        )?;

        let mut transcript = Vec::new();
        let assessment = self.collect_assessment(&mut transcript)?;
        let result = engine::score(&assessment)?;

        let report = report::render_report(&transcript, &result);
        writeln!(self.writer, "{}", report)?;

        let path = persist::persist(&report, &metadata, result.priority, &self.output_dir)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        writeln!(self.writer, "Results saved to {}", filename)?;
        tracing::info!(
            entry_id = %metadata.entry_id,
            priority = %result.priority,
            file = %filename,
            "Entry scored"
        );
        Ok(())
    }

    /// Collect the full answer sequence for one entry.
    fn collect_assessment(
        &mut self,
        transcript: &mut Vec<String>,
    ) -> Result<Assessment, ConsoleError> {
        let data_sensitivity =
            self.ask_level("Confidentiality level of the Data", transcript)?;

        let mut capabilities = CapabilityAnswers::none_granted();
        for capability in Capability::ALL {
            let question = format!(
                "Is the vulnerability able to {}? (Y/N): ",
                capability.label()
            );
            let granted = self.ask_recorded(&question, prompt::parse_yes_no, transcript)?;
            capabilities.set(capability, granted);
        }

        let impact = self.ask_level("Impact Score", transcript)?;
        let availability = self.ask_level("Availability Score", transcript)?;

        let has_epss =
            self.ask_recorded("Is there an EPSS value? (Y/N): ", prompt::parse_yes_no, transcript)?;
        let likelihood = if has_epss {
            let probability = self.ask_recorded(
                "Enter EPSS value (0 to 1): ",
                prompt::parse_probability,
                transcript,
            )?;
            LikelihoodSource::DirectProbability { probability }
        } else {
            let maturity = self.ask_level("Exploit Maturity", transcript)?;
            let effort = self.ask_level("Level of Effort", transcript)?;
            LikelihoodSource::MaturityEffort { maturity, effort }
        };

        Ok(Assessment::new(
            data_sensitivity,
            capabilities,
            impact,
            availability,
            likelihood,
        ))
    }

    /// Show the catalog and read a scanner selection.
    fn select_scanner(&mut self) -> Result<&'static str, ConsoleError> {
        write!(self.writer, "{}", scanner::menu())?;
        let (index, _) = self.ask("Select a scanner by number: ", |raw| {
            prompt::parse_choice(raw, scanner::SCANNERS.len())
        })?;
        Ok(scanner::SCANNERS[index])
    }

    /// Ask a Low/Medium/High question and record it in the transcript.
    fn ask_level(
        &mut self,
        question: &str,
        transcript: &mut Vec<String>,
    ) -> Result<QualitativeLevel, ConsoleError> {
        let prompt_text = format!("Enter {} (L/M/H): ", question);
        self.ask_recorded(&prompt_text, prompt::parse_level, transcript)
    }

    /// Ask until the answer parses, then append "prompt + raw answer" to the
    /// transcript.
    fn ask_recorded<T>(
        &mut self,
        prompt_text: &str,
        parse: impl Fn(&str) -> Result<T, PromptError>,
        transcript: &mut Vec<String>,
    ) -> Result<T, ConsoleError> {
        let (value, raw) = self.ask(prompt_text, parse)?;
        transcript.push(format!("{}{}", prompt_text, raw));
        Ok(value)
    }

    /// Ask until the answer parses. Returns the parsed value and the raw
    /// line. EOF on the input stream aborts the session.
    fn ask<T>(
        &mut self,
        prompt_text: &str,
        parse: impl Fn(&str) -> Result<T, PromptError>,
    ) -> Result<(T, String), ConsoleError> {
        loop {
            write!(self.writer, "{}", prompt_text)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }
            let raw = line.trim_end_matches(['\r', '\n']).to_string();

            match parse(&raw) {
                Ok(value) => return Ok((value, raw)),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }
}

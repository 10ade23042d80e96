use std::io::{self, BufRead, Write};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use super::{write_report, Opts};
use crate::batch::{analyze_file, analyze_reader, BatchError};
use crate::evaluator::evaluate_password_strength;
use crate::request::AnalyzeResponse;
use crate::types::PasswordAnalysis;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to format report")]
    Format(#[from] std::fmt::Error),
}

/// Runs the analyzer and writes results to `out`.
///
/// Without `--file` the password is read interactively from the terminal.
pub fn run<W: Write>(opts: &Opts, out: &mut W) -> Result<(), CliError> {
    let colorize = !opts.no_color && !opts.json;

    let Some(path) = &opts.file else {
        let password = read_password(opts.show)?;
        if password.expose_secret().is_empty() {
            eprintln!("No password entered, nothing to analyze.");
            return Ok(());
        }
        let analysis = evaluate_password_strength(&password);
        return emit(&analysis, opts.json, colorize, out);
    };

    let analyses = if opts.reads_stdin() {
        analyze_reader(io::stdin().lock())?
    } else {
        analyze_file(path)?
    };
    tracing::info!("Analyzed {} passwords", analyses.len());

    for (index, analysis) in analyses.iter().enumerate() {
        if index > 0 && !opts.json {
            writeln!(out)?;
        }
        emit(analysis, opts.json, colorize, out)?;
    }
    Ok(())
}

fn emit<W: Write>(
    analysis: &PasswordAnalysis,
    json: bool,
    colorize: bool,
    out: &mut W,
) -> Result<(), CliError> {
    if json {
        let line = serde_json::to_string(&AnalyzeResponse::from(analysis))?;
        writeln!(out, "{}", line)?;
    } else {
        let mut report = String::new();
        write_report(&mut report, analysis, colorize)?;
        write!(out, "{}", report)?;
    }
    Ok(())
}

/// Reads a password from the terminal, hidden unless `show` is set.
///
/// Falls back to visible input when no terminal is available for the hidden
/// prompt.
fn read_password(show: bool) -> Result<SecretString, CliError> {
    if !show {
        match rpassword::prompt_password("Enter password: ") {
            Ok(pwd) => return Ok(SecretString::new(pwd.into())),
            Err(err) => {
                tracing::warn!("Hidden prompt unavailable: {}", err);
                eprintln!("(Warning: secure input unavailable; input will be visible)");
            }
        }
    }

    eprint!("Enter password (visible): ");
    io::stderr().flush()?;
    read_visible_line(io::stdin().lock())
}

fn read_visible_line<R: BufRead>(mut reader: R) -> Result<SecretString, CliError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let pwd = line.trim_end_matches(['\r', '\n']).to_string();
    Ok(SecretString::new(pwd.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_run_file_json() {
        let temp_file = setup_with_tempfile(&["password", "", "Tr0ub4dor&9xyz"]);
        let path = temp_file.path().to_str().unwrap();
        let opts = Opts::parse_from(["pwd-analyzer", "--json", "--file", path]);

        let mut out = Vec::new();
        run(&opts, &mut out).expect("run should succeed");

        let text = String::from_utf8(out).unwrap();
        let responses: Vec<AnalyzeResponse> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].score, 4);
        assert_eq!(responses[1].strength, "Excellent");
    }

    #[test]
    fn test_run_file_report() {
        let temp_file = setup_with_tempfile(&["aaaaaaaa"]);
        let path = temp_file.path().to_str().unwrap();
        let opts = Opts::parse_from(["pwd-analyzer", "--no-color", "-f", path]);

        let mut out = Vec::new();
        run(&opts, &mut out).expect("run should succeed");

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Strength Score: 3/9"));
        assert!(text.contains("Avoid repeating characters."));
    }

    #[test]
    fn test_run_missing_file() {
        let opts = Opts::parse_from(["pwd-analyzer", "-f", "/nonexistent/passwords.txt"]);
        let mut out = Vec::new();

        let err = run(&opts, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Batch(BatchError::FileNotFound(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_read_visible_line_strips_newline() {
        let pwd = read_visible_line(Cursor::new("hunter 2\r\n")).unwrap();
        assert_eq!(pwd.expose_secret(), "hunter 2");

        let pwd = read_visible_line(Cursor::new("")).unwrap();
        assert!(pwd.expose_secret().is_empty());
    }
}

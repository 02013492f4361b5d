//! Portcullis — OpenAPI path-item linter.
//!
//! Decodes path items from YAML/JSON documents, validates their
//! structure, and re-encodes them canonically.

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use portcullis_oas::{PathItem, ValidationError, ValidationOptions};

mod error;
use error::DocError;

#[derive(Parser, Debug)]
#[command(name = "portcullis", about = "OpenAPI path-item linter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate path items in YAML/JSON document(s).
    ///
    /// A document with a top-level `paths` object is treated as a
    /// collection; anything else is decoded as a single path item.
    Validate {
        /// Input document file(s) (YAML or JSON).
        #[arg(short, long, required = true, num_args = 1..)]
        doc: Vec<String>,

        /// Output format (text or json).
        #[arg(long, default_value = "text")]
        format: String,

        /// Accept extension keys without the `x-` prefix.
        #[arg(long)]
        allow_unprefixed_extensions: bool,
    },

    /// Decode a document and re-encode it canonically to stdout.
    Normalize {
        /// Input document file (YAML or JSON).
        #[arg(short, long)]
        doc: String,

        /// Output encoding (json or yaml).
        #[arg(long, default_value = "json")]
        output: String,
    },
}

/// One problem found in one document.
#[derive(Debug, Serialize)]
struct ValidationIssue {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

/// Per-file validation outcome.
#[derive(Debug, Serialize)]
struct ValidationResult {
    file: String,
    valid: bool,
    issues: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize)]
struct Summary {
    files: usize,
    invalid: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate {
            doc,
            format,
            allow_unprefixed_extensions,
        } => {
            let options =
                ValidationOptions::new().allow_unprefixed_extensions(allow_unprefixed_extensions);
            run_validate(&doc, &format, &options)
        }
        Commands::Normalize { doc, output } => run_normalize(&doc, &output),
    }
}

/// Run the validate command.
fn run_validate(docs: &[String], output_format: &str, options: &ValidationOptions) -> ExitCode {
    let mut results = Vec::new();
    let mut invalid = 0usize;

    for doc_path in docs {
        let path = Path::new(doc_path);
        let mut issues = Vec::new();

        if !path.exists() {
            issues.push(ValidationIssue {
                code: "io".to_string(),
                message: format!("file not found: {doc_path}"),
                location: None,
            });
        } else {
            match load_path_items(path) {
                Ok(items) => {
                    for (location, decoded) in items {
                        match decoded {
                            Ok(item) => {
                                tracing::debug!(file = %doc_path, ?location, "validating path item");
                                if let Err(err) = item.validate(options) {
                                    issues.push(ValidationIssue {
                                        code: issue_code(&err),
                                        message: err.to_string(),
                                        location: location.clone(),
                                    });
                                }
                            }
                            Err(err) => issues.push(ValidationIssue {
                                code: err.category().to_string(),
                                message: err.to_string(),
                                location: location.clone(),
                            }),
                        }
                    }
                }
                Err(err) => issues.push(ValidationIssue {
                    code: err.category().to_string(),
                    message: err.to_string(),
                    location: None,
                }),
            }
        }

        let valid = issues.is_empty();
        if !valid {
            invalid += 1;
        }
        results.push(ValidationResult {
            file: doc_path.clone(),
            valid,
            issues,
        });
    }

    let summary = Summary {
        files: results.len(),
        invalid,
    };

    match output_format {
        "json" => print_json_report(&results, &summary),
        _ => print_text_report(&results, &summary),
    }

    if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Run the normalize command.
fn run_normalize(doc: &str, output: &str) -> ExitCode {
    let item = match load_single(Path::new(doc)) {
        Ok(item) => item,
        Err(err) => {
            eprintln!("error: {doc}: {err}");
            return ExitCode::from(1);
        }
    };

    let rendered = match output {
        "yaml" => serde_yaml::to_string(&item).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(&item).map_err(|e| e.to_string()),
    };
    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: failed to encode {doc}: {err}");
            ExitCode::from(1)
        }
    }
}

/// Load path items from a document: the entries of a top-level `paths`
/// object, or the whole document as a single item.
///
/// Per-item decode failures are returned in place so one bad entry does
/// not hide the others.
#[allow(clippy::type_complexity)]
fn load_path_items(
    path: &Path,
) -> Result<Vec<(Option<String>, Result<PathItem, DocError>)>, DocError> {
    let root = parse_document(path)?;

    match root.get("paths") {
        Some(Value::Object(paths)) => Ok(paths
            .iter()
            .map(|(url, item)| {
                let decoded = serde_json::from_value::<PathItem>(item.clone())
                    .map_err(|e| DocError::Decode(e.to_string()));
                (Some(url.clone()), decoded)
            })
            .collect()),
        Some(_) => Err(DocError::Shape("`paths` must be an object".to_string())),
        None => {
            let decoded =
                serde_json::from_value::<PathItem>(root).map_err(|e| DocError::Decode(e.to_string()));
            Ok(vec![(None, decoded)])
        }
    }
}

/// Load a document that is a single path item.
fn load_single(path: &Path) -> Result<PathItem, DocError> {
    let root = parse_document(path)?;
    serde_json::from_value(root).map_err(|e| DocError::Decode(e.to_string()))
}

/// Parse YAML or JSON (JSON is valid YAML) into a generic value tree.
fn parse_document(path: &Path) -> Result<Value, DocError> {
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| DocError::Parse(e.to_string()))
}

/// Report row code for a validation failure: the stable `E<code>` when
/// one exists, `structural` otherwise.
fn issue_code(err: &ValidationError) -> String {
    match err.code() {
        Some(code) => format!("E{code}"),
        None => "structural".to_string(),
    }
}

fn print_text_report(results: &[ValidationResult], summary: &Summary) {
    for result in results {
        if result.valid {
            println!("{}: ok", result.file);
            continue;
        }
        println!("{}: {} issue(s)", result.file, result.issues.len());
        for issue in &result.issues {
            match &issue.location {
                Some(location) => println!("  [{}] {} ({})", issue.code, issue.message, location),
                None => println!("  [{}] {}", issue.code, issue.message),
            }
        }
    }
    println!(
        "{} file(s) checked, {} invalid",
        summary.files, summary.invalid
    );
}

fn print_json_report(results: &[ValidationResult], summary: &Summary) {
    let report = serde_json::json!({ "results": results, "summary": summary });
    match serde_json::to_string_pretty(&report) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => eprintln!("error: failed to encode report: {err}"),
    }
}

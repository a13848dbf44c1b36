//! Checksheet backend - course-catalog converter for the checksheet client
//!
//! This binary replaces the Python-based export scripts with a single data-driven
//! Rust implementation: the classification and normalization rule tables live in
//! the dataset directory instead of being baked into the code.

mod classifier;
mod constants;
mod error;
mod generator;
mod loader;
mod models;
mod normalizer;

use classifier::Classifier;
use constants::{OUTPUT_FILE, WORKBOOK_FILE, WORKSHEET_NAME};
use error::Result;
use normalizer::Normalizer;
use std::path::{Path, PathBuf};
use std::{env, process};

/// Main entry point for the checksheet data converter.
///
/// This program:
/// 1. Resolves the dataset directory and workbook from the single argument
/// 2. Loads the rule tables and compiles the classifier and normalizer
/// 3. Loads the static reference blobs passed through to the output
/// 4. Extracts the subject rows from the course-listing worksheet
/// 5. Classifies and normalizes every row and writes the compact data.json
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(input) = args.get(1) else {
        eprintln!("Usage: checksheet-backend <workbook.xlsx | dataset-dir>");
        process::exit(1);
    };

    let input = PathBuf::from(input);
    if !input.exists() {
        eprintln!("Error: input path not found: {}", input.display());
        process::exit(1);
    }

    // A directory argument names a dataset containing the workbook and its
    // sibling config files; a file argument names the workbook itself.
    let (dataset_dir, workbook_path) = if input.is_dir() {
        (input.clone(), input.join(WORKBOOK_FILE))
    } else {
        let dir = input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (dir, input.clone())
    };

    if !workbook_path.exists() {
        eprintln!("Error: workbook not found: {}", workbook_path.display());
        process::exit(1);
    }

    println!("Dataset directory: {}", dataset_dir.display());

    let rules = loader::load_rules(&dataset_dir)?;
    println!(
        "Loaded {} classification rules and {} normalization rules",
        rules.classify.len(),
        rules.normalize.len()
    );

    let classifier = Classifier::compile(&rules.classify)?;
    let normalizer = Normalizer::compile(&rules.normalize)?;

    let statics = loader::load_static_data(&dataset_dir)?;

    let rows = loader::load_subject_rows(&workbook_path)?;
    println!("Extracted {} subject rows from '{}'", rows.len(), WORKSHEET_NAME);

    let subjects = generator::build_subjects(&rows, &classifier, &normalizer);
    let document = generator::build_document(&subjects, statics)?;

    let output_path = dataset_dir.join(OUTPUT_FILE);
    generator::write_document(&output_path, &document)?;

    println!(
        "\n✓ Wrote {} subjects to {}",
        subjects.len(),
        output_path.display()
    );

    Ok(())
}

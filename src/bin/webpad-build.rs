use std::env;
use std::fs;
use std::path::Path;
use std::process;

use webpad::{classify, export_artifact, FileKind, FileStore, WebpadError};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: webpad-build <file>... [-o <output.html>]");
        eprintln!();
        eprintln!("Compiles project files into a single self-contained HTML document.");
        eprintln!("Images are embedded as data URLs wherever their file name is referenced.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  webpad-build index.html style.css script.js");
        eprintln!("  webpad-build index.html logo.png -o out.html");
        process::exit(1);
    }

    let mut inputs: Vec<String> = Vec::new();
    let mut output: Option<String> = None;
    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        if arg == "-o" {
            match iter.next() {
                Some(path) => output = Some(path.clone()),
                None => {
                    eprintln!("✗ -o requires an output path");
                    process::exit(1);
                }
            }
        } else {
            inputs.push(arg.clone());
        }
    }

    let mut store = FileStore::new();
    for path in &inputs {
        if let Err(e) = add_input(&mut store, path) {
            eprintln!("✗ {}: {}", path, e);
            process::exit(1);
        }
    }

    let artifact = export_artifact(store.files());
    let output = output.unwrap_or(artifact.name);
    if let Err(e) = fs::write(&output, &artifact.content) {
        eprintln!("✗ failed to write {}: {}", output, e);
        process::exit(1);
    }
    println!("✓ wrote {} ({} input files)", output, store.len());
}

fn add_input(store: &mut FileStore, path: &str) -> Result<(), String> {
    // The project file name is the path's final component
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| "invalid file name".to_string())?;

    let result = if classify(name) == FileKind::Image {
        let bytes = fs::read(path).map_err(|e| format!("failed to read file: {}", e))?;
        store.ingest_image(name, &bytes)
    } else {
        let content = fs::read_to_string(path).map_err(|e| format!("failed to read file: {}", e))?;
        store.add_file(name, &content)
    };

    result.map(|_| ()).map_err(|e: WebpadError| e.to_string())
}

use pretty_assertions::assert_eq;
use webpad::{
    classify, compile, export_artifact, import_document, preview_source, resolve_references,
    window_document, CompileMode, FileKind, FileStore, WebpadError,
};

fn project(files: &[(&str, &str)]) -> FileStore {
    let mut store = FileStore::new();
    for (name, content) in files {
        if classify(name) == FileKind::Image {
            store.add_image(name, content).unwrap();
        } else {
            store.add_file(name, content).unwrap();
        }
    }
    store
}

// Classification

#[test]
fn test_classification_totality_and_precedence() {
    assert_eq!(classify("logo.svg"), FileKind::Image);
    assert_eq!(classify("a.b.html"), FileKind::Markup);
    assert_eq!(classify("shot.PNG"), FileKind::Image);
    assert_eq!(classify("style.css"), FileKind::Style);
    assert_eq!(classify("app.js"), FileKind::Script);
    assert_eq!(classify("LICENSE"), FileKind::Plain);
}

// Resolver

#[test]
fn test_resolver_pass_through_on_empty_set() {
    for s in ["", "plain text", "<img src=cat.png>"] {
        assert_eq!(resolve_references(s, &[]), s);
    }
}

#[test]
fn test_resolver_substitutes_all_occurrences() {
    let store = project(&[("cat.png", "data:image/png;base64,AAAA")]);
    assert_eq!(
        resolve_references("<img src=cat.png>", store.files()),
        "<img src=data:image/png;base64,AAAA>"
    );
    assert_eq!(
        resolve_references("cat.png cat.png", store.files()),
        "data:image/png;base64,AAAA data:image/png;base64,AAAA"
    );
}

// Compiler

#[test]
fn test_markup_precedence() {
    let store = project(&[("a.html", "A"), ("index.html", "I"), ("b.html", "B")]);
    let doc = compile(store.files(), CompileMode::Preview);
    assert!(doc.contains("<body>\nI\nB\n<script>"));
}

#[test]
fn test_style_concatenation_order() {
    let store = project(&[("x.css", "x{}"), ("y.css", "y{}")]);
    let doc = compile(store.files(), CompileMode::Preview);
    assert!(doc.contains("x{}\ny{}\n"));
}

#[test]
fn test_compile_is_idempotent_on_unchanged_input() {
    let store = project(&[
        ("index.html", "<h1>Hi</h1>"),
        ("style.css", "h1{color:red}"),
        ("script.js", "console.log(1)"),
        ("dot.png", "data:image/png;base64,AAAA"),
    ]);
    let first = compile(store.files(), CompileMode::Export);
    let second = compile(store.files(), CompileMode::Export);
    assert_eq!(first, second);
}

// Store invariants

#[test]
fn test_deletion_guard() {
    let mut store = FileStore::new();
    let id = store.add_file("only.html", "").unwrap();
    assert_eq!(store.delete(id), Err(WebpadError::LastFile));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_duplicate_names_are_rejected() {
    let mut store = FileStore::seed_project();
    assert!(matches!(
        store.add_file("index.html", ""),
        Err(WebpadError::DuplicateName { .. })
    ));
    let id = store.files()[1].id;
    assert!(matches!(
        store.rename(id, "script.js"),
        Err(WebpadError::DuplicateName { .. })
    ));
}

// End to end

#[test]
fn test_end_to_end_export() {
    let store = project(&[
        ("index.html", "<h1>Hi</h1>"),
        ("style.css", "h1{color:red}"),
        ("script.js", "console.log(1)"),
    ]);
    let artifact = export_artifact(store.files());

    assert_eq!(artifact.name, "project.html");
    assert!(artifact.content.starts_with("<!DOCTYPE html>"));
    assert!(artifact.content.contains("<style>\nh1{color:red}\n</style>"));
    assert!(artifact.content.contains("<body>\n<h1>Hi</h1>"));
    assert!(artifact
        .content
        .contains("try {\nconsole.log(1)\n} catch (err) {\nconsole.error(err);\n}"));
}

#[test]
fn test_all_sinks_share_one_compiler() {
    let store = project(&[
        ("index.html", "<img src=logo.svg>"),
        ("logo.svg", "data:image/svg+xml;base64,AAAA"),
    ]);
    let preview = preview_source(store.files());
    let export = export_artifact(store.files()).content;
    let window = window_document(store.files());

    for doc in [&preview, &export, &window] {
        assert!(doc.contains("<img src=data:image/svg+xml;base64,AAAA>"));
    }
    assert_eq!(export, window);
}

#[test]
fn test_import_then_compile_round() {
    let mut store = FileStore::seed_project();
    let source = "<html><head><style>body{margin:0}</style></head>\
                  <body><p>Imported</p><script>go()</script></body></html>";
    let outcome = import_document(&mut store, source);
    assert!(outcome.markup && outcome.style && outcome.script);

    let doc = preview_source(store.files());
    assert!(doc.contains("<p>Imported</p>"));
    assert!(doc.contains("body{margin:0}"));
    assert!(doc.contains("go()"));
}

#[test]
fn test_image_ingestion_flows_into_compile() {
    let mut store = FileStore::seed_project();
    let id = store.find_by_name("index.html").unwrap().id;
    store.update_content(id, "<img src=pixel.png>").unwrap();
    store.ingest_image("pixel.png", &[0, 0, 0]).unwrap();

    let doc = export_artifact(store.files()).content;
    assert!(doc.contains("<img src=data:image/png;base64,AAAA>"));
}

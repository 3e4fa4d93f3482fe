use serde::{Deserialize, Serialize};

use crate::file::ProjectFile;
use crate::kind::FileKind;
use crate::resolver::resolve_references;

/// Which boilerplate the compiled document carries.
///
/// The mode only changes the surrounding metadata. Bucketing, accumulation and
/// reference resolution are identical for every mode, so the output sinks can
/// never diverge in compilation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileMode {
    /// Minimal wrapper for the transient sandboxed preview
    Preview,
    /// Full declaration (lang, meta tags, title) for exported artifacts
    Export,
}

/// Compile a file snapshot into a single self-contained HTML document.
///
/// Files are bucketed by kind into markup, style and script accumulators;
/// image and plain files are never included directly, they exist only to be
/// referenced. A markup file named exactly `index.html` (or the first markup
/// file seen while the accumulator is still empty) replaces the markup
/// accumulator; any later markup file appends with a newline separator. Style
/// and script files are concatenated in set order with trailing newlines — no
/// deduplication, no dependency ordering. Image references are then resolved
/// independently in each accumulator, and the result is wrapped in
/// mode-appropriate boilerplate with the user script inside a guarded try so
/// a runtime fault logs instead of blanking the page.
///
/// Total: no validation is performed and nothing fails. A snapshot with no
/// markup, style or script files yields an empty document shell, and an
/// identical snapshot always compiles to byte-identical output.
pub fn compile(files: &[ProjectFile], mode: CompileMode) -> String {
    let mut markup = String::new();
    let mut style = String::new();
    let mut script = String::new();

    for file in files {
        match file.kind() {
            FileKind::Markup => {
                if file.name == "index.html" || markup.is_empty() {
                    markup = file.content.clone();
                } else {
                    markup.push('\n');
                    markup.push_str(&file.content);
                }
            }
            FileKind::Style => {
                style.push_str(&file.content);
                style.push('\n');
            }
            FileKind::Script => {
                script.push_str(&file.content);
                script.push('\n');
            }
            FileKind::Image | FileKind::Plain => {}
        }
    }

    let markup = resolve_references(&markup, files);
    let style = resolve_references(&style, files);
    let script = resolve_references(&script, files);

    assemble(mode, &style, &markup, &script)
}

fn assemble(mode: CompileMode, style: &str, markup: &str, script: &str) -> String {
    let head = match mode {
        CompileMode::Preview => format!("<style>\n{style}</style>"),
        CompileMode::Export => format!(
            "<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>Exported Project</title>\n\
             <style>\n{style}</style>"
        ),
    };
    let html_open = match mode {
        CompileMode::Preview => "<html>",
        CompileMode::Export => "<html lang=\"en\">",
    };

    format!(
        "<!DOCTYPE html>\n\
         {html_open}\n\
         <head>\n\
         {head}\n\
         </head>\n\
         <body>\n\
         {markup}\n\
         <script>\n\
         try {{\n\
         {script}}} catch (err) {{\n\
         console.error(err);\n\
         }}\n\
         </script>\n\
         </body>\n\
         </html>\n"
    )
}

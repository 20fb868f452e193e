//! SVG minification and the per-file SVG pipeline.
//!
//! The minifier is a streaming rewrite over `quick-xml` events: structural
//! noise (XML declaration, DOCTYPE, comments, processing instructions,
//! `metadata`/`title`/`desc` elements, whitespace-only text) is dropped and
//! everything else is written through unchanged. The output is a fixed point:
//! minifying a minified document yields byte-identical text.

use crate::constants::OPTIMIZED_SVG_SUFFIX;
use crate::error::{OptimizeError, Result};
use crate::flags::SvgOptions;
use crate::jsx;
use crate::utils::file_stem;
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SvgMinifyOptions {
    /// Re-run the minifier until the output stabilizes.
    pub multipass: bool,
    /// Upper bound on passes when `multipass` is set.
    pub max_passes: usize,
}

impl Default for SvgMinifyOptions {
    fn default() -> Self {
        Self {
            multipass: true,
            max_passes: 3,
        }
    }
}

/// Minify SVG text.
pub fn minify_svg(input: &str, options: &SvgMinifyOptions) -> Result<String> {
    let mut current = minify_pass(input)?;

    if options.multipass {
        for _ in 1..options.max_passes {
            let next = minify_pass(&current)?;
            if next == current {
                break;
            }
            current = next;
        }
    }

    Ok(current)
}

/// Elements that carry no rendering information.
fn is_stripped_element(name: &[u8]) -> bool {
    matches!(name, b"metadata" | b"title" | b"desc")
}

fn minify_pass(input: &str) -> Result<String> {
    let mut reader = Reader::from_str(input);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(input.len())));

    loop {
        match reader
            .read_event()
            .map_err(|e| OptimizeError::SvgParse(e.to_string()))?
        {
            Event::Eof => break,
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            Event::Start(elem) if is_stripped_element(elem.name().as_ref()) => {
                reader
                    .read_to_end(elem.name())
                    .map_err(|e| OptimizeError::SvgParse(e.to_string()))?;
            }
            Event::Empty(elem) if is_stripped_element(elem.name().as_ref()) => {}
            Event::Text(text) if text.iter().all(|b| b.is_ascii_whitespace()) => {}
            event => writer
                .write_event(event)
                .map_err(|e| OptimizeError::SvgParse(e.to_string()))?,
        }
    }

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| OptimizeError::SvgParse(e.to_string()))
}

/// Output path for the minified copy: `<outDir>/<stem>.optimized.svg`.
pub fn optimized_svg_path(source: &Path, options: &SvgOptions) -> Result<PathBuf> {
    let stem = file_stem(source)?;
    let out_dir = options
        .output
        .clone()
        .unwrap_or_else(|| source.parent().map(Path::to_path_buf).unwrap_or_default());
    Ok(out_dir.join(format!("{}.{}", stem, OPTIMIZED_SVG_SUFFIX)))
}

/// Process one classified SVG: minify it, and when requested emit a typed
/// component wrapper next to the minified copy.
///
/// Returns the number of files written.
pub fn optimize_svg_file(input: &Path, options: &SvgOptions) -> Result<usize> {
    let content = fs::read_to_string(input)?;
    let minified = minify_svg(&content, &SvgMinifyOptions::default())?;

    let output = optimized_svg_path(input, options)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|_| OptimizeError::DirectoryCreationFailed(parent.to_path_buf()))?;
        }
    }
    fs::write(&output, &minified)?;
    crate::verbose!("Wrote {}", output.display());

    let mut written = 1;
    if options.jsx {
        let component_path = output.with_file_name(format!("{}.tsx", file_stem(input)?));
        let component = jsx::render_component(input, &minified)?;
        fs::write(&component_path, component)?;
        crate::verbose!("Wrote {}", component_path.display());
        written += 1;
    }

    crate::success!("{} -> {} file(s)", input.display(), written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
        <!-- a comment -->\n\
        <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\n\
          <title>icon</title>\n\
          <metadata>editor junk</metadata>\n\
          <path d=\"M0 0h24v24H0z\" fill=\"none\"/>\n\
        </svg>\n";

    fn minify(input: &str) -> String {
        minify_svg(input, &SvgMinifyOptions::default()).unwrap()
    }

    #[test]
    fn test_minify_strips_structural_noise() {
        let out = minify(FIXTURE);
        assert!(!out.contains("<?xml"));
        assert!(!out.contains("comment"));
        assert!(!out.contains("<title"));
        assert!(!out.contains("<metadata"));
        assert!(out.contains("<path d=\"M0 0h24v24H0z\" fill=\"none\"/>"));
        assert!(out.starts_with("<svg"));
        assert!(out.ends_with("</svg>"));
    }

    #[test]
    fn test_minify_keeps_attributes_untouched() {
        let out = minify(FIXTURE);
        assert!(out.contains("viewBox=\"0 0 24 24\""));
        assert!(out.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    }

    #[test]
    fn test_minify_is_a_fixed_point() {
        let first = minify(FIXTURE);
        let second = minify(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_minify_preserves_text_content() {
        let input = "<svg><text> hello world </text></svg>";
        let out = minify(input);
        assert!(out.contains("hello world"));
    }

    #[test]
    fn test_minify_rejects_malformed_svg() {
        let result = minify_svg("<svg><path d=\"M0 0\"", &SvgMinifyOptions::default());
        assert!(matches!(result, Err(OptimizeError::SvgParse(_))));
    }

    #[test]
    fn test_optimized_svg_path() {
        let options = SvgOptions {
            jsx: false,
            output: None,
        };
        assert_eq!(
            optimized_svg_path(Path::new("icons/my-icon.svg"), &options).unwrap(),
            PathBuf::from("icons/my-icon.optimized.svg")
        );

        let options = SvgOptions {
            jsx: false,
            output: Some(PathBuf::from("out")),
        };
        assert_eq!(
            optimized_svg_path(Path::new("icons/my-icon.svg"), &options).unwrap(),
            PathBuf::from("out/my-icon.optimized.svg")
        );
    }
}

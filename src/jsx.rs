//! Typed component generation for SVG assets.
//!
//! Turns minified SVG markup into a TSX module: attribute names are
//! camel-cased for JSX, `class` becomes `className`, the root `<svg>` gets a
//! `{...props}` spread, and the markup is wrapped in an exported function
//! component with a typed props alias.

use crate::error::{OptimizeError, Result};
use crate::utils::file_stem;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;
use std::path::Path;

/// Derive a component name from a file's stem by splitting on
/// non-alphanumeric characters and capitalizing each segment:
/// `my-icon.svg` -> `MyIcon`.
pub fn component_name(source: &Path) -> Result<String> {
    let stem = file_stem(source)?;
    let name: String = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(OptimizeError::InvalidComponentName(source.to_path_buf()));
    }

    Ok(name)
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// JSX spelling of an SVG attribute name: `class` -> `className`,
/// `fill-rule` -> `fillRule`, `xlink:href` -> `xlinkHref`.
pub fn jsx_attribute_name(name: &str) -> String {
    if name == "class" {
        return "className".to_string();
    }
    if !name.contains(['-', ':']) {
        return name.to_string();
    }

    let mut segments = name.split(['-', ':']).filter(|s| !s.is_empty());
    let mut out = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        out.push_str(&capitalize(segment));
    }
    out
}

/// Rewrite SVG markup into JSX: camel-cased attribute names and a
/// `{...props}` spread on the root `<svg>` element.
pub fn jsx_markup(svg: &str) -> Result<String> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(svg.len())));

    loop {
        match reader
            .read_event()
            .map_err(|e| OptimizeError::SvgParse(e.to_string()))?
        {
            Event::Eof => break,
            Event::Start(elem) => {
                let rewritten = rewrite_attributes(&elem)?;
                writer
                    .write_event(Event::Start(rewritten))
                    .map_err(|e| OptimizeError::SvgParse(e.to_string()))?;
            }
            Event::Empty(elem) => {
                let rewritten = rewrite_attributes(&elem)?;
                writer
                    .write_event(Event::Empty(rewritten))
                    .map_err(|e| OptimizeError::SvgParse(e.to_string()))?;
            }
            event => writer
                .write_event(event)
                .map_err(|e| OptimizeError::SvgParse(e.to_string()))?,
        }
    }

    let markup = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| OptimizeError::SvgParse(e.to_string()))?;

    Ok(markup.replacen("<svg", "<svg {...props}", 1))
}

fn rewrite_attributes(elem: &BytesStart<'_>) -> Result<BytesStart<'static>> {
    let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let mut rewritten = BytesStart::new(name);

    for attr in elem.attributes() {
        let attr = attr.map_err(|e| OptimizeError::SvgParse(e.to_string()))?;
        let key = jsx_attribute_name(&String::from_utf8_lossy(attr.key.as_ref()));
        let value = attr
            .unescape_value()
            .map_err(|e| OptimizeError::SvgParse(e.to_string()))?;
        rewritten.push_attribute((key.as_str(), value.as_ref()));
    }

    Ok(rewritten.into_owned())
}

/// Render the complete TSX module for a source SVG.
pub fn render_component(source: &Path, minified_svg: &str) -> Result<String> {
    let name = component_name(source)?;
    let markup = jsx_markup(minified_svg)?;

    Ok(format!(
        "import type {{ SVGProps }} from \"react\";\n\
         \n\
         export type {name}Props = SVGProps<SVGSVGElement>;\n\
         \n\
         export function {name}(props: {name}Props) {{\n\
         \x20 return (\n\
         \x20   {markup}\n\
         \x20 );\n\
         }}\n\
         \n\
         export default {name};\n"
    ))
}

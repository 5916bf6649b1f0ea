//! Document skeleton around the rendered code table.
//!
//! Everything here is boundary glue: head metadata, the breadcrumb built
//! from the logical path, and the footer framing. The footer fragment and
//! warning message are embedded verbatim; escaping them is the caller's
//! decision.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

/// Relative prefix from the generated page back to the output root: one
/// `..` plus one more per path separator beyond the first.
pub fn root_path_for(filename: &str) -> String {
    let count = filename.matches('/').count();
    let mut root = String::from("..");
    for _ in 1..count {
        root.push_str("/..");
    }
    root
}

/// Emit the document head, header bar and content opening, up to and
/// including the optional warning paragraph.
pub fn write_header<W: Write>(
    out: &mut W,
    filename: &str,
    data_path: &str,
    warning: Option<&str>,
    interesting_definitions: &BTreeSet<String>,
    projects: &BTreeMap<String, String>,
) -> io::Result<()> {
    let root_path = root_path_for(filename);
    // A relative data path is rebased onto the page's depth.
    let data_path = if data_path.starts_with('.') {
        format!("{root_path}/{data_path}")
    } else {
        data_path.to_string()
    };
    let basename = filename.rsplit('/').next().unwrap_or(filename);

    out.write_all(b"<!doctype html>\n<html>\n<head>\n")?;
    out.write_all(
        b"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
    )?;
    writeln!(out, "<title>{basename} source code [{filename}] - srcview</title>")?;
    if !interesting_definitions.is_empty() {
        let joined = interesting_definitions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(
            out,
            "<meta name=\"srcview:interestingDefinitions\" content=\"{joined} \"/>"
        )?;
    }
    writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"{data_path}/qtcreator.css\" title=\"QtCreator\"/>"
    )?;
    writeln!(
        out,
        "<link rel=\"alternate stylesheet\" href=\"{data_path}/kdevelop.css\" title=\"KDevelop\"/>"
    )?;
    writeln!(
        out,
        "<script type=\"text/javascript\" src=\"{data_path}/jquery/jquery.min.js\"></script>"
    )?;
    writeln!(
        out,
        "<script type=\"text/javascript\" src=\"{data_path}/jquery/jquery-ui.min.js\"></script>"
    )?;
    write!(
        out,
        "<script>var file = '{filename}'; var root_path = '{root_path}'; \
         var data_path = '{data_path}'; var ecma_script_api_version = 2;"
    )?;
    if !projects.is_empty() {
        out.write_all(b"var projects = {")?;
        let mut first = true;
        for (name, revision) in projects {
            if !first {
                out.write_all(b", ")?;
            }
            first = false;
            write!(out, "\"{name}\" : \"{revision}\"")?;
        }
        out.write_all(b"};")?;
    }
    out.write_all(b"</script>\n")?;
    writeln!(out, "<script src='{data_path}/srcview.js'></script>")?;

    out.write_all(
        b"</head>\n<body><div id='header'><h1 id='breadcrumb'><span>Browse \
          the source code of </span>",
    )?;
    write_breadcrumb(out, filename)?;
    out.write_all(b"</h1></div>\n<hr/><div id='content'>")?;

    if let Some(message) = warning {
        writeln!(out, "<p class=\"warnmsg\">{message}</p>")?;
    }
    Ok(())
}

/// Emit the closing frame after the code table: rule, optional warning
/// repeat, and the verbatim footer fragment.
pub fn write_footer<W: Write>(out: &mut W, footer: &str, warning: Option<&str>) -> io::Result<()> {
    out.write_all(b"<hr/>")?;
    if let Some(message) = warning {
        writeln!(out, "<p class=\"warnmsg\">{message}</p>")?;
    }
    out.write_all(b"<p id='footer'>\n")?;
    out.write_all(footer.as_bytes())?;
    out.write_all(b"</p></div></body></html>\n")?;
    Ok(())
}

/// One link per path component: ancestors link upward with `..` chains,
/// the parent directory links to `./`, the file to its own page.
fn write_breadcrumb<W: Write>(out: &mut W, filename: &str) -> io::Result<()> {
    let count = filename.matches('/').count();
    let mut tail = filename;
    for i in 0..count.saturating_sub(1) {
        out.write_all(b"<a href='..")?;
        for _ in 0..count - i - 2 {
            out.write_all(b"/..")?;
        }
        let (head, rest) = tail.split_once('/').unwrap_or((tail, ""));
        write!(out, "'>{head}</a>/")?;
        tail = rest;
    }
    let (dir, base) = tail.split_once('/').unwrap_or((tail, ""));
    write!(out, "<a href='./'>{dir}</a>/")?;
    write!(out, "<a href='{base}.html'>{base}</a>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(filename: &str, data_path: &str) -> String {
        let mut out = Vec::new();
        write_header(
            &mut out,
            filename,
            data_path,
            None,
            &BTreeSet::new(),
            &BTreeMap::new(),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_root_path_depth() {
        assert_eq!(root_path_for("file.c"), "..");
        assert_eq!(root_path_for("dir/file.c"), "..");
        assert_eq!(root_path_for("a/b/file.c"), "../..");
        assert_eq!(root_path_for("a/b/c/file.c"), "../../..");
    }

    #[test]
    fn test_title_uses_basename_and_full_path() {
        let html = header_for("proj/src/main.c", "data");
        assert!(html.contains("<title>main.c source code [proj/src/main.c] - srcview</title>"));
    }

    #[test]
    fn test_relative_data_path_rebased() {
        let html = header_for("a/b/file.c", "./data");
        assert!(html.contains("href=\"../.././data/qtcreator.css\""));
        assert!(html.contains("var data_path = '../.././data'"));
    }

    #[test]
    fn test_absolute_data_path_untouched() {
        let html = header_for("a/b/file.c", "/assets");
        assert!(html.contains("href=\"/assets/qtcreator.css\""));
    }

    #[test]
    fn test_breadcrumb_links() {
        let mut out = Vec::new();
        write_breadcrumb(&mut out, "proj/src/main.c").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<a href='..'>proj</a>/<a href='./'>src</a>/<a href='main.c.html'>main.c</a>"
        );
    }

    #[test]
    fn test_breadcrumb_deep_path_up_links() {
        let mut out = Vec::new();
        write_breadcrumb(&mut out, "a/b/c/d.c").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<a href='../..'>a</a>/<a href='..'>b</a>/<a href='./'>c</a>/<a href='d.c.html'>d.c</a>"
        );
    }

    #[test]
    fn test_interesting_definitions_meta() {
        let defs: BTreeSet<String> = ["Foo::bar", "Baz"].iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        write_header(&mut out, "f.c", "data", None, &defs, &BTreeMap::new()).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains(
            "<meta name=\"srcview:interestingDefinitions\" content=\"Baz,Foo::bar \"/>"
        ));
    }

    #[test]
    fn test_no_meta_without_definitions() {
        let html = header_for("f.c", "data");
        assert!(!html.contains("interestingDefinitions"));
    }

    #[test]
    fn test_projects_script_variable() {
        let mut projects = BTreeMap::new();
        projects.insert("libfoo".to_string(), "1.2".to_string());
        projects.insert("app".to_string(), "trunk".to_string());
        let mut out = Vec::new();
        write_header(&mut out, "f.c", "data", None, &BTreeSet::new(), &projects).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("var projects = {\"app\" : \"trunk\", \"libfoo\" : \"1.2\"};"));
    }

    #[test]
    fn test_warning_in_header_and_footer() {
        let mut out = Vec::new();
        write_header(
            &mut out,
            "f.c",
            "data",
            Some("generated from stale index"),
            &BTreeSet::new(),
            &BTreeMap::new(),
        )
        .unwrap();
        write_footer(&mut out, "", Some("generated from stale index")).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert_eq!(
            html.matches("<p class=\"warnmsg\">generated from stale index</p>").count(),
            2
        );
    }

    #[test]
    fn test_footer_fragment_verbatim() {
        let mut out = Vec::new();
        write_footer(&mut out, "Generated by <b>srcview</b>", None).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<p id='footer'>\nGenerated by <b>srcview</b></p>"));
        assert!(html.ends_with("</body></html>\n"));
    }
}

#![allow(clippy::module_inception)]

use std::{
    fs::File,
    io::Read,
    path::Path,
    rc::Rc,
};

use log::debug;

use crate::{context::AnalysisContext, errors::errors::Error};

pub mod checker;
pub mod config;
pub mod context;
pub mod declarations;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

/// Runs both passes over in-memory source text.
///
/// The context is reset first, so results never accumulate across runs.
pub fn analyze_source(source: &str, ctx: &mut AnalysisContext) {
    ctx.reset();
    run(source, ctx);
}

fn run(source: &str, ctx: &mut AnalysisContext) {
    lexer::lexer::tokenize(source, ctx);
    checker::checker::check(ctx);
}

fn read_source<R: Read>(mut reader: R, source_name: &str) -> Result<String, Error> {
    let mut bytes = vec![];
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::could_not_read(Rc::new(source_name.to_string()), &e))?;

    debug!("read {} ({} bytes)", source_name, bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads everything from `reader` and analyzes it.
///
/// On a read failure the context is left empty and no pass runs.
pub fn analyze_reader<R: Read>(reader: R, source_name: &str, ctx: &mut AnalysisContext) -> Result<String, Error> {
    ctx.reset();

    let source = read_source(reader, source_name)?;
    run(&source, ctx);
    Ok(source)
}

/// Opens and analyzes the file at `path`, returning its text for reporting.
///
/// On an open or read failure the context is left empty.
pub fn analyze_file(path: &Path, ctx: &mut AnalysisContext) -> Result<String, Error> {
    ctx.reset();

    let source_name = path.to_string_lossy().into_owned();
    let file = File::open(path).map_err(|e| Error::could_not_open(Rc::new(source_name.clone()), &e))?;

    let source = read_source(file, &source_name)?;
    run(&source, ctx);
    Ok(source)
}

/// Returns the text of the 1-based `line` in `source`, without its line break.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;

    source
        .split('\n')
        .nth(index)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use crate::context::AnalysisContext;

    #[test]
    fn test_get_source_line() {
        let source = "Hello, world!\r\nsecond\n\nTesting { }\n";

        assert_eq!(super::get_source_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_source_line(source, 2), Some("second"));
        assert_eq!(super::get_source_line(source, 3), Some(""));
        assert_eq!(super::get_source_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_source_line(source, 0), None);
        assert_eq!(super::get_source_line(source, 9), None);
    }

    #[test]
    fn test_analyze_source_resets() {
        let mut ctx = AnalysisContext::default();
        super::analyze_source("int x = \"hi\"; // note", &mut ctx);
        let first = (ctx.tokens.clone(), ctx.comments.clone(), ctx.diagnostics.clone());

        super::analyze_source("int x = \"hi\"; // note", &mut ctx);

        assert_eq!(ctx.tokens, first.0);
        assert_eq!(ctx.comments, first.1);
        assert_eq!(ctx.diagnostics, first.2);
        assert_eq!(ctx.declarations.len(), 1);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device went away"))
        }
    }

    #[test]
    fn test_analyze_reader_failure_clears_context() {
        let mut ctx = AnalysisContext::default();
        super::analyze_source("int a = 1;", &mut ctx);
        assert!(!ctx.tokens.is_empty());

        let result = super::analyze_reader(FailingReader, "broken", &mut ctx);

        let error = result.unwrap_err();
        assert_eq!(error.get_error_name(), "CouldNotRead");
        assert!(ctx.tokens.is_empty());
        assert!(ctx.declarations.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_analyze_reader_replaces_previous_run() {
        let mut ctx = AnalysisContext::default();
        super::analyze_source("int a = \"x\"; // old", &mut ctx);

        super::analyze_reader("b = 1;".as_bytes(), "next", &mut ctx).unwrap();

        assert!(ctx.comments.is_empty());
        assert!(!ctx.declarations.is_declared("a"));
        assert_eq!(ctx.tokens.len(), 4);
        assert_eq!(ctx.diagnostics.len(), 1);
    }

    #[test]
    fn test_analyze_reader_lossy_utf8() {
        let mut ctx = AnalysisContext::default();
        let bytes: &[u8] = b"int a\xff = 1;";

        let source = super::analyze_reader(bytes, "bytes", &mut ctx).unwrap();

        assert!(source.contains('\u{FFFD}'));
        assert_eq!(ctx.declarations.lookup("a"), Some("int"));
    }
}

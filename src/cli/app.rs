use std::io::Write;

use crate::config::FileSource;
use crate::error::PolicyViewError;
use crate::render::TableRenderer;

use super::args::Args;
use super::loader::PolicyLoader;
use super::query::Query;
use super::settings::{DisplaySettings, SettingsFile};

/// Run one invocation: load the vdom's policies and print the requested tables
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), PolicyViewError> {
    let mut display = match args.settings.as_deref() {
        Some(path) => SettingsFile::load(path)?.display,
        None => DisplaySettings::default(),
    };
    if args.no_color {
        display.color = false;
    }

    let source = FileSource::new(&args.config);
    let outcome = PolicyLoader::load(&source, &args.vdom, out)?;

    let renderer = TableRenderer::new(display);
    for selection in Query::from_selectors(&args.selectors).select(&outcome.policies) {
        writeln!(out, "{}", renderer.render(&selection))?;
    }

    Ok(())
}

//! Mode dispatch for one invocation.
//!
//! `App` owns the loader (and with it the document cache) for the lifetime
//! of a run. Each mode renders into a caller-supplied writer and reports the
//! process exit status; recovered failures never surface as errors.

use crate::listing::render_listing;
use crate::loader::Loader;
use crate::render::{render_document, render_lookup_header};
use crate::search::{DEFAULT_MAX_RESULTS, search_store};
use crate::store::Store;
use std::fmt;
use tracing::warn;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a single invocation does, in precedence order.
pub enum Mode {
    Search(String),
    List,
    Usage,
    Lookup {
        command: String,
        filter: Option<String>,
    },
}

#[derive(Debug)]
pub struct App {
    loader: Loader,
    max_results: usize,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            loader: Loader::new(store),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Run `mode`, writing user output to `writer`.
    ///
    /// `Mode::Usage` is left to the front-end, which owns the help text; it
    /// only yields the failure status here.
    pub fn execute(&mut self, mode: &Mode, writer: &mut impl fmt::Write) -> Result<i32, fmt::Error> {
        match mode {
            Mode::Search(term) => {
                search_store(self.loader.store(), term, self.max_results, writer)?;
                Ok(EXIT_OK)
            }
            Mode::List => {
                self.list(writer)?;
                Ok(EXIT_OK)
            }
            Mode::Usage => Ok(EXIT_FAILURE),
            Mode::Lookup { command, filter } => self.lookup(command, filter.as_deref(), writer),
        }
    }

    fn list(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        let names = self.loader.store().command_names().unwrap_or_else(|err| {
            warn!("{err:#}");
            Vec::new()
        });
        render_listing(names.as_slice(), writer)
    }

    fn lookup(
        &mut self,
        command: &str,
        filter: Option<&str>,
        writer: &mut impl fmt::Write,
    ) -> Result<i32, fmt::Error> {
        let Some(document) = self.loader.load(command) else {
            writeln!(writer, "❌ No se encontró referencia para '{command}'")?;
            writeln!(writer, "💡 Use '--list' para ver comandos disponibles")?;
            return Ok(EXIT_FAILURE);
        };

        render_lookup_header(command, writer)?;
        render_document(document, filter, writer)?;
        Ok(EXIT_OK)
    }
}

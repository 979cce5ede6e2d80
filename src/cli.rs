//! Command-line front-end shared by the `termi-cheat` and `tcheat` binaries.
//!
//! Flags are parsed by hand. Mode precedence is search, then list, then the
//! usage screen when no command was given, then a single-command lookup.
//! `--version` and `--help` short-circuit as soon as they are seen.

use crate::app::{App, EXIT_FAILURE, EXIT_OK, EXIT_USAGE, Mode};
use crate::store::{Store, find_store_dir};
use anyhow::{Context, Result, anyhow, bail};
use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_PROGRAM: &str = "termi-cheat";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn main() {
    match run(env::args_os()) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}

/// Parse `args` (including the program name) and run the selected mode.
///
/// Returns the process exit status. Errors are reserved for failures outside
/// the tool's own contract, such as an unwritable stdout.
pub fn run<I>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = program_name(args.next());

    let cli = match Cli::parse(args) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::Help) => {
            write_stdout(&help_text(&program))?;
            return Ok(EXIT_OK);
        }
        Ok(Parsed::Version) => {
            write_stdout(&format!("{program} {VERSION}\n"))?;
            return Ok(EXIT_OK);
        }
        Err(err) => {
            eprint!("{}", usage_line(&program));
            eprintln!("{program}: error: {err}");
            return Ok(EXIT_USAGE);
        }
    };

    init_logging(cli.verbose);

    let mode = cli.mode();
    if mode == Mode::Usage {
        write_stdout(&help_text(&program))?;
        return Ok(EXIT_FAILURE);
    }

    let store = resolve_store(cli.store.as_deref())?;
    let mut app = App::new(store);
    let mut output = String::new();
    let code = app
        .execute(&mode, &mut output)
        .map_err(|_| anyhow!("failed to render output"))?;
    write_stdout(&output)?;
    Ok(code)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cli {
    pub command: Option<String>,
    pub filter: Option<String>,
    pub search: Option<String>,
    pub list: bool,
    pub store: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Run(Cli),
    Help,
    Version,
}

/// Options the parser knows, by long name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Help,
    Version,
    List,
    Verbose,
    Filter,
    Search,
    Store,
}

const LONG_OPTIONS: &[(&str, Opt)] = &[
    ("help", Opt::Help),
    ("version", Opt::Version),
    ("list", Opt::List),
    ("verbose", Opt::Verbose),
    ("filter", Opt::Filter),
    ("search", Opt::Search),
    ("store", Opt::Store),
];

impl Opt {
    fn from_short(ch: char) -> Option<Self> {
        match ch {
            'h' => Some(Opt::Help),
            'v' => Some(Opt::Version),
            'l' => Some(Opt::List),
            'f' => Some(Opt::Filter),
            's' => Some(Opt::Search),
            _ => None,
        }
    }

    /// Exact long name, else a unique prefix of one.
    fn from_long(name: &str) -> Result<Option<Self>> {
        if name.is_empty() {
            return Ok(None);
        }
        if let Some((_, opt)) = LONG_OPTIONS.iter().find(|(long, _)| *long == name) {
            return Ok(Some(*opt));
        }
        let matches: Vec<&str> = LONG_OPTIONS
            .iter()
            .filter(|(long, _)| long.starts_with(name))
            .map(|(long, _)| *long)
            .collect();
        match matches.as_slice() {
            [] => Ok(None),
            [only] => Opt::from_long(only),
            many => {
                let candidates: Vec<String> = many.iter().map(|long| format!("--{long}")).collect();
                bail!(
                    "ambiguous option: --{name} could match {}",
                    candidates.join(", ")
                )
            }
        }
    }

    fn takes_value(self) -> bool {
        matches!(self, Opt::Filter | Opt::Search | Opt::Store)
    }
}

impl Cli {
    /// Parse arguments (without the program name).
    ///
    /// Unknown arguments are collected and reported after the scan, so a
    /// later `--help` or `--version` still wins. Malformed known options
    /// fail immediately.
    pub fn parse<I>(args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let mut cli = Cli::default();
        let mut unrecognized: Vec<String> = Vec::new();
        let mut positional_only = false;

        while let Some(arg) = args.next() {
            let arg = arg
                .into_string()
                .map_err(|_| anyhow!("invalid UTF-8 in argument"))?;

            if positional_only || arg == "-" || !arg.starts_with('-') {
                if cli.command.is_some() {
                    unrecognized.push(arg);
                } else {
                    cli.command = Some(arg);
                }
                continue;
            }
            if arg == "--" {
                positional_only = true;
                continue;
            }

            if let Some(long) = arg.strip_prefix("--") {
                let (name, inline) = match long.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (long, None),
                };
                match Opt::from_long(name)? {
                    Some(opt) => {
                        if let Some(done) = cli.apply(opt, inline, &mut args)? {
                            return Ok(done);
                        }
                    }
                    None => unrecognized.push(arg.clone()),
                }
                continue;
            }

            // Clustered short flags: `-lv`, `-fbranch`, `-lf branch`.
            let cluster = &arg[1..];
            for (idx, ch) in cluster.char_indices() {
                let Some(opt) = Opt::from_short(ch) else {
                    unrecognized.push(arg.clone());
                    break;
                };
                if opt.takes_value() {
                    let rest = &cluster[idx + ch.len_utf8()..];
                    let inline = (!rest.is_empty()).then_some(rest);
                    if let Some(done) = cli.apply(opt, inline, &mut args)? {
                        return Ok(done);
                    }
                    break;
                }
                if let Some(done) = cli.apply(opt, None, &mut args)? {
                    return Ok(done);
                }
            }
        }

        if !unrecognized.is_empty() {
            bail!("unrecognized arguments: {}", unrecognized.join(" "));
        }
        Ok(Parsed::Run(cli))
    }

    /// Record one option; returns the short-circuit outcome for help/version.
    fn apply(
        &mut self,
        opt: Opt,
        inline: Option<&str>,
        args: &mut impl Iterator<Item = OsString>,
    ) -> Result<Option<Parsed>> {
        let flag = long_flag(opt);
        if !opt.takes_value() {
            if let Some(value) = inline {
                bail!("argument {flag}: ignored explicit argument '{value}'");
            }
        }
        match opt {
            Opt::Help => return Ok(Some(Parsed::Help)),
            Opt::Version => return Ok(Some(Parsed::Version)),
            Opt::List => self.list = true,
            Opt::Verbose => self.verbose = true,
            Opt::Filter => self.filter = Some(flag_value(&flag, inline, args)?),
            Opt::Search => self.search = Some(flag_value(&flag, inline, args)?),
            Opt::Store => {
                let value = flag_value(&flag, inline, args)?;
                if value.is_empty() {
                    bail!("argument {flag}: must not be empty");
                }
                self.store = Some(PathBuf::from(value));
            }
        }
        Ok(None)
    }

    /// Select the mode; empty search and filter strings count as absent.
    pub fn mode(&self) -> Mode {
        if let Some(term) = self.search.as_deref().filter(|term| !term.is_empty()) {
            return Mode::Search(term.to_string());
        }
        if self.list {
            return Mode::List;
        }
        match self.command.as_deref().filter(|command| !command.is_empty()) {
            None => Mode::Usage,
            Some(command) => Mode::Lookup {
                command: command.to_string(),
                filter: self.filter.clone().filter(|text| !text.is_empty()),
            },
        }
    }
}

fn long_flag(opt: Opt) -> String {
    let name = LONG_OPTIONS
        .iter()
        .find(|(_, candidate)| *candidate == opt)
        .map(|(long, _)| *long)
        .unwrap_or_default();
    format!("--{name}")
}

fn flag_value(
    flag: &str,
    inline: Option<&str>,
    args: &mut impl Iterator<Item = OsString>,
) -> Result<String> {
    if let Some(value) = inline {
        return Ok(value.to_string());
    }
    let value = args
        .next()
        .ok_or_else(|| anyhow!("argument {flag}: expected one argument"))?
        .into_string()
        .map_err(|_| anyhow!("argument {flag}: must be valid UTF-8"))?;
    if value.len() > 1 && value.starts_with('-') {
        bail!("argument {flag}: expected one argument");
    }
    Ok(value)
}

fn program_name(arg0: Option<OsString>) -> String {
    arg0.as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROGRAM)
        .to_string()
}

fn usage_line(program: &str) -> String {
    format!("usage: {program} [OPCIONES] <comando>\n")
}

fn help_text(program: &str) -> String {
    format!(
        "{usage}\n\
         Termi-cheat - Referencia rápida de comandos terminal\n\
         \n\
         positional arguments:\n  \
           comando               Nombre del comando (ej: git, docker, linux)\n\
         \n\
         options:\n  \
           -h, --help            Mostrar esta ayuda y salir\n  \
           -f, --filter TEXTO    Filtrar resultados por texto\n  \
           -s, --search TÉRMINO  Buscar en todos los comandos\n  \
           -l, --list            Listar todos los comandos disponibles\n  \
           -v, --version         Mostrar la versión y salir\n  \
           --store DIR           Usar otro directorio de referencias\n  \
           --verbose             Mostrar diagnósticos en stderr\n",
        usage = usage_line(program)
    )
}

/// Resolve the store; only an explicit `--store` that does not exist is fatal.
///
/// When discovery fails the store is rootless: nothing is listed or found,
/// and the working directory is never consulted.
fn resolve_store(explicit: Option<&Path>) -> Result<Store> {
    if explicit.is_some() {
        return find_store_dir(explicit).map(Store::new);
    }
    Ok(match find_store_dir(None) {
        Ok(root) => Store::new(root),
        Err(err) => {
            warn!("{err:#}");
            Store::empty()
        }
    })
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::new(if verbose { "debug" } else { "warn" });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing to stdout")
}

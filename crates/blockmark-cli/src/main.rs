use anyhow::{Context, Result, bail};
use blockmark_config::Config;
use blockmark_engine::{BlockList, Dialect, io};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{env, process};

const USAGE: &str = "Usage:
  blockmark fmt [--check] [--dialect md|rst] <file>...
  blockmark blocks [--dialect md|rst] <file>
  blockmark convert --to md|rst <file>
  blockmark check [dir]";

#[derive(Debug, PartialEq)]
enum Command {
    Fmt {
        check: bool,
        dialect: Option<Dialect>,
        files: Vec<PathBuf>,
    },
    Blocks {
        dialect: Option<Dialect>,
        file: PathBuf,
    },
    Convert {
        to: Dialect,
        file: PathBuf,
    },
    Check {
        dir: Option<PathBuf>,
    },
}

fn parse_dialect(value: Option<&String>) -> Result<Dialect> {
    let name = value.context("missing dialect name")?;
    Dialect::from_name(name).with_context(|| format!("unknown dialect '{name}'"))
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        bail!("no command given");
    };

    let mut check = false;
    let mut dialect = None;
    let mut to = None;
    let mut paths = Vec::new();

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--check" => check = true,
            "--dialect" => dialect = Some(parse_dialect(iter.next())?),
            "--to" => to = Some(parse_dialect(iter.next())?),
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            path => paths.push(PathBuf::from(path)),
        }
    }

    let single = |mut paths: Vec<PathBuf>| -> Result<PathBuf> {
        if paths.len() != 1 {
            bail!("'{name}' takes exactly one file");
        }
        Ok(paths.remove(0))
    };

    match name.as_str() {
        "fmt" => {
            if paths.is_empty() {
                bail!("'fmt' needs at least one file");
            }
            Ok(Command::Fmt {
                check,
                dialect,
                files: paths,
            })
        }
        "blocks" => Ok(Command::Blocks {
            dialect,
            file: single(paths)?,
        }),
        "convert" => Ok(Command::Convert {
            to: to.context("'convert' needs --to md|rst")?,
            file: single(paths)?,
        }),
        "check" => {
            if paths.len() > 1 {
                bail!("'check' takes at most one directory");
            }
            Ok(Command::Check {
                dir: paths.into_iter().next(),
            })
        }
        other => bail!("unknown command '{other}'"),
    }
}

fn load(path: &Path, dialect: Dialect) -> Result<BlockList> {
    io::load_document(path, dialect).with_context(|| format!("failed to load {}", path.display()))
}

/// Serialize, reparse and serialize again; `Some` holds the unstable text.
fn unstable_output(list: &BlockList, dialect: Dialect) -> Option<String> {
    let once = list.to_text(dialect);
    let twice = BlockList::from_text(&once, dialect).to_text(dialect);
    (twice != once).then_some(twice)
}

/// Returns whether every file was already canonical (or was rewritten).
fn fmt(config: &Config, check: bool, dialect: Option<Dialect>, files: &[PathBuf]) -> Result<bool> {
    let mut clean = true;
    for file in files {
        let dialect = dialect.unwrap_or_else(|| config.dialect_for_path(file));
        let original = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let canonical = io::file_text(&BlockList::from_text(&original, dialect), dialect);

        if canonical == original {
            log::debug!("{} is already canonical", file.display());
            continue;
        }
        if check {
            println!("{} is not canonical", file.display());
            clean = false;
        } else {
            std::fs::write(file, &canonical)
                .with_context(|| format!("failed to write {}", file.display()))?;
            log::info!("formatted {} ({dialect})", file.display());
        }
    }
    Ok(clean)
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

fn print_blocks(list: &BlockList, out: &mut impl Write) -> Result<()> {
    for (index, block) in list.iter().enumerate() {
        let meta = block
            .meta
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        let meta = if meta.is_empty() { "-".to_string() } else { meta };
        writeln!(
            out,
            "{index:>3}  {:<13} {meta}  {}",
            block.kind.as_str(),
            first_line(&block.content)
        )?;
    }
    Ok(())
}

/// Returns whether every document under `root` is a fixed point.
fn check(config: &Config, root: &Path) -> Result<bool> {
    let documents = io::scan_documents(root)
        .with_context(|| format!("failed to scan {}", root.display()))?;
    log::info!("checking {} documents under {}", documents.len(), root.display());

    let mut clean = true;
    for relative in &documents {
        let path = relative.to_path(root);
        let dialect = config.dialect_for_path(&path);
        let list = load(&path, dialect)?;
        if let Some(unstable) = unstable_output(&list, dialect) {
            println!("{relative}: output changes on reparse");
            log::debug!("reparsed output for {relative}:\n{unstable}");
            clean = false;
        }
    }
    Ok(clean)
}

fn run(command: Command, config: &Config) -> Result<bool> {
    match command {
        Command::Fmt {
            check,
            dialect,
            files,
        } => fmt(config, check, dialect, &files),
        Command::Blocks { dialect, file } => {
            let dialect = dialect.unwrap_or_else(|| config.dialect_for_path(&file));
            let list = load(&file, dialect)?;
            print_blocks(&list, &mut std::io::stdout().lock())?;
            Ok(true)
        }
        Command::Convert { to, file } => {
            let from = config.dialect_for_path(&file);
            let list = load(&file, from)?;
            log::info!("converting {} from {from} to {to}", file.display());
            print!("{}", io::file_text(&list, to));
            Ok(true)
        }
        Command::Check { dir } => {
            let root = dir
                .or_else(|| config.documents_path.clone())
                .context("no directory given and no documents_path configured")?;
            check(config, &root)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load()? {
        Some(config) => {
            log::info!("using config file {}", config_path.display());
            config
        }
        None => {
            log::debug!("no config file at {}, using defaults", config_path.display());
            Config::default()
        }
    };

    if !run(command, &config)? {
        process::exit(1);
    }
    Ok(())
}

use futures::executor::block_on;
use selkie::{Engine, LayoutType, ViewerConfig};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Selkie(selkie::Error),
    Json(serde_json::Error),
    NoMindmap,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Selkie(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoMindmap => write!(f, "No mindmap structure detected"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<selkie::Error> for CliError {
    fn from(value: selkie::Error) -> Self {
        Self::Selkie(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Generate,
    Detect,
    Extract,
    Toc,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    layout: Option<LayoutType>,
    config: Option<String>,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "selkie-cli\n\
\n\
USAGE:\n\
  selkie-cli [generate] [--layout spider|tree|tree-down|tree-right] [--config <path>] [--out <path>] [<path>|-]\n\
  selkie-cli detect [<path>|-]\n\
  selkie-cli extract [--pretty] [--config <path>] [<path>|-]\n\
  selkie-cli toc [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - generate prints Mermaid diagram text to stdout by default; use --out to write a file.\n\
  - --layout overrides the layout named in the config file; `tree` is the legacy spelling of tree-down.\n\
  - extract prints the mindmap forest as JSON; toc prints heading entries as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "generate" => args.command = Command::Generate,
            "detect" => args.command = Command::Detect,
            "extract" => args.command = Command::Extract,
            "toc" => args.command = Command::Toc,
            "--pretty" => args.pretty = true,
            "--layout" => {
                let Some(layout) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.layout = Some(
                    layout
                        .parse::<LayoutType>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;

    let mut config = match args.config.as_deref() {
        Some(path) => ViewerConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ViewerConfig::empty_object(),
    };
    if let Some(layout) = args.layout {
        config.set_value("mindmap.type", serde_json::json!(layout.as_str()));
    }
    let engine = Engine::new().with_config(config);

    match args.command {
        Command::Detect => {
            let doc = engine.parse_document(&text);
            if !engine.detect_mindmap(&doc) {
                return Err(CliError::NoMindmap);
            }
            println!("mindmap");
            Ok(())
        }
        Command::Generate => {
            let Some(synthesis) = block_on(engine.synthesize_markdown(&text)) else {
                return Err(CliError::NoMindmap);
            };
            write_text(&synthesis.description, args.out.as_deref())?;
            Ok(())
        }
        Command::Extract => {
            let doc = engine.parse_document(&text);
            let forest = engine.extract(&doc);
            if forest.is_empty() {
                return Err(CliError::NoMindmap);
            }
            write_json(&forest, args.pretty)?;
            Ok(())
        }
        Command::Toc => {
            let doc = engine.parse_document(&text);
            write_json(&doc.toc(), args.pretty)?;
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::NoMindmap) => {
            eprintln!("{}", CliError::NoMindmap);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

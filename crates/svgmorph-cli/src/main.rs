use serde::Serialize;
use std::io::Read;
use svgmorph::{Document, MorphOptions, NodeRef, ParseOptions, SerializeOptions, Transform};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Svg(svgmorph::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Svg(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<svgmorph::Error> for CliError {
    fn from(value: svgmorph::Error) -> Self {
        Self::Svg(value)
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
    Interpolate,
    List,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    from: Option<String>,
    to: Option<String>,
    steps: usize,
    in_place: bool,
    indent: Option<String>,
    decimals: Option<u32>,
    strict: bool,
    pretty: bool,
    out: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Interpolate,
            input: None,
            from: None,
            to: None,
            steps: 1,
            in_place: false,
            indent: None,
            decimals: None,
            strict: false,
            pretty: false,
            out: None,
        }
    }
}

#[derive(Serialize)]
struct ChildOut<'a> {
    index: usize,
    tag: &'a str,
    kind: &'static str,
    id: Option<&'a str>,
    commands: usize,
    transforms: &'a [Transform],
}

fn usage() -> &'static str {
    "svgmorph-cli\n\
\n\
USAGE:\n\
  svgmorph-cli [interpolate] --from <ref> --to <ref> [--steps <n>] [--in-place] [--indent <s>] [--decimals <n>] [--strict] [--out <path>] [<path>|-]\n\
  svgmorph-cli list [--pretty] [--strict] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - <ref> is a 0-based child index when it is an integer, otherwise a node id.\n\
  - --steps defaults to 1 and must be a positive integer.\n\
  - interpolate prints a document holding only the generated nodes; --in-place keeps the source nodes too.\n\
  - list prints the document's direct children as JSON.\n\
  - Set SVGMORPH_LOG=error|warn|info|debug|trace to control log output on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "interpolate" => args.command = Command::Interpolate,
            "list" => args.command = Command::List,
            "--in-place" => args.in_place = true,
            "--strict" => args.strict = true,
            "--pretty" => args.pretty = true,
            "--from" => {
                let Some(r) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.from = Some(r.clone());
            }
            "--to" => {
                let Some(r) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.to = Some(r.clone());
            }
            "--steps" => {
                let Some(steps) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.steps = steps.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
                if args.steps == 0 {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--indent" => {
                let Some(indent) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.indent = Some(indent.replace("\\t", "\t"));
            }
            "--decimals" => {
                let Some(d) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.decimals = Some(d.parse::<u32>().map_err(|_| CliError::Usage(usage()))?);
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
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if matches!(args.command, Command::Interpolate) && (args.from.is_none() || args.to.is_none())
    {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn node_ref(raw: &str) -> NodeRef<'_> {
    match raw.trim().parse::<usize>() {
        Ok(i) => NodeRef::Index(i),
        Err(_) => NodeRef::Id(raw),
    }
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

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn init_logging() {
    let level = match std::env::var("SVGMORPH_LOG").as_deref() {
        Ok("error") => tracing::Level::ERROR,
        Ok("info") => tracing::Level::INFO,
        Ok("debug") => tracing::Level::DEBUG,
        Ok("trace") => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let parse = if args.strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    };

    match args.command {
        Command::List => {
            let doc = Document::parse_with(&text, parse)?;
            let children: Vec<ChildOut<'_>> = doc
                .children()
                .iter()
                .enumerate()
                .map(|(index, node)| ChildOut {
                    index,
                    tag: &node.element().name.local,
                    kind: node.kind().name(),
                    id: node.id(),
                    commands: node.commands().len(),
                    transforms: node.transforms(),
                })
                .collect();
            write_json(&children, args.pretty)
        }
        Command::Interpolate => {
            let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) else {
                return Err(CliError::Usage(usage()));
            };
            let mut serialize = SerializeOptions::default().with_decimals(args.decimals);
            if let Some(indent) = args.indent {
                serialize = serialize.with_indent(indent);
            }
            let options = MorphOptions {
                parse,
                serialize,
                in_place: args.in_place,
            };
            let svg = svgmorph::morph_with(&text, node_ref(from), node_ref(to), args.steps, &options)?;
            tracing::info!(steps = args.steps, "wrote interpolated document");
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn main() {
    init_logging();

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
        Err(CliError::Svg(err)) if err.is_incompatibility() => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

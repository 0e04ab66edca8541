//! rpnlang CLI
//!
//! Evaluates an expression given as arguments, runs a script file, or
//! enters the interactive shell, and prints the final calculation.

use std::io::{self, BufRead, Read, Write};

use anyhow::{bail, Context};
use rpnlang::Interpreter;

struct Options {
    expression: Vec<String>,
    command_help: bool,
    verbosity: usize,
    base: u32,
    file: Option<String>,
    interactive: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    if options.command_help {
        println!("{}", Interpreter::new().help_text());
        return Ok(());
    }

    let mut interp = Interpreter::with_display_base(options.base)?;
    interp.set_verbosity(options.verbosity);

    if !options.expression.is_empty() {
        interp.evaluate(&options.expression.join(" "))?;
    }

    if let Some(path) = &options.file {
        let source = read_script(path)?;
        interp.evaluate(&source)?;
    } else if options.interactive {
        run_interactive(&mut interp)?;
    }

    println!("{}", interp.result());
    Ok(())
}

/// Reads a script from a file, or from stdin when the path is `-`
fn read_script(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read from stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))
    }
}

/// Line-oriented shell: the prompt is the formatted stack, errors report
/// per line and the session continues
fn run_interactive(interp: &mut Interpreter) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while interp.is_running() {
        print!("{}", interp.prompt());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break; // EOF leaves the shell, same as `exit`
        };
        if let Err(err) = interp.evaluate(&line?) {
            eprintln!("{}", err);
        }
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options {
        expression: Vec::new(),
        command_help: false,
        verbosity: 0,
        base: 10,
        file: None,
        interactive: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-H" | "--command-help" => options.command_help = true,
            "-v" | "--verbosity" => {
                let value = args
                    .next()
                    .with_context(|| format!("{} requires a value", arg))?;
                options.verbosity = value
                    .parse()
                    .with_context(|| format!("invalid verbosity: '{}'", value))?;
            }
            "-d" | "--dec" => options.base = 10,
            "-o" | "--oct" => options.base = 8,
            "-x" | "--hex" => options.base = 16,
            "-b" | "--bin" => options.base = 2,
            "-f" | "--file" => {
                if options.interactive {
                    bail!("-f and -i are mutually exclusive");
                }
                options.file = Some(
                    args.next()
                        .with_context(|| format!("{} requires a value", arg))?,
                );
            }
            "-i" | "--interactive" => {
                if options.file.is_some() {
                    bail!("-f and -i are mutually exclusive");
                }
                options.interactive = true;
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            flag if flag.starts_with('-') && flag.len() > 1 && !is_expression_word(flag) => {
                bail!("unknown option: {}", flag);
            }
            _ => options.expression.push(arg),
        }
    }
    Ok(options)
}

/// Negative literals and the operators spelled with a leading dash
/// (`-`, `--`, `-inf`) are expression words, not flags
fn is_expression_word(arg: &str) -> bool {
    matches!(arg, "-" | "--" | "-inf")
        || arg[1..].chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn print_usage() {
    eprintln!("Usage: rpn [EXPRESSION...] [options]");
    eprintln!();
    eprintln!("Interprets a program written in the stack-based RPN language, given as");
    eprintln!("either a file, an expression, or via the interactive shell, and outputs");
    eprintln!("the final calculation.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -H, --command-help   Show the help page for operators");
    eprintln!("  -v, --verbosity N    Characters shown when abbreviating blocks");
    eprintln!("  -d, --dec            Display values as decimal numbers (default)");
    eprintln!("  -o, --oct            Display values as octal numbers");
    eprintln!("  -x, --hex            Display values as hexadecimal numbers");
    eprintln!("  -b, --bin            Display values as binary numbers");
    eprintln!("  -f, --file FILE      Run FILE as a script ('-' reads stdin)");
    eprintln!("  -i, --interactive    Enter the interactive shell");
    eprintln!("  -h, --help           Show this usage text");
}

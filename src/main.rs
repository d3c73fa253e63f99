use std::{
    env,
    io::{self, BufRead},
    process::ExitCode,
    sync::Once,
};

use pratt_eval::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    parser::parser::{Parser, ParserConfig},
};

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=pratt_eval=debug` or `RUST_LOG=pratt_eval=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config, mut sources) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: pratt-eval [--max-depth <N>] [EXPRESSION]...");
            return ExitCode::from(2);
        }
    };

    if sources.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if !line.trim().is_empty() => sources.push(line),
                Ok(_) => {}
                Err(error) => {
                    eprintln!("Failed to read stdin: {}", error);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let mut parser = Parser::with_config("", config);
    let mut failed = false;

    for source in &sources {
        parser.reset(source);

        match parser.evaluate() {
            Ok(value) => println!("{}", value),
            Err(error) => {
                display_error(&error, source);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn parse_args(args: &[String]) -> Result<(ParserConfig, Vec<String>), String> {
    let mut config = ParserConfig::default();
    let mut sources = vec![];
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-depth" => {
                let value = args
                    .next()
                    .ok_or_else(|| String::from("Missing value for --max-depth"))?;
                config.max_depth = value
                    .parse()
                    .map_err(|_| format!("Invalid value for --max-depth: {}", value))?;
            }
            "--" => sources.extend(args.by_ref().cloned()),
            _ => sources.push(arg.clone()),
        }
    }

    Ok((config, sources))
}

fn display_error(error: &Error, source: &str) {
    /*
        Error: UnexpectedEndOfInput (Expected a number after the operator)
           |
         1 | 1 +
           | ---^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error);
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}

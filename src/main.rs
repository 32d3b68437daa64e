// braintty: tape-language interpreter with live memory visualization

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use getopts::{Matches, Options};
use ratatui::{backend::CrosstermBackend, Terminal};

use braintty::interpreter::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MARGIN, DEFAULT_WINDOW_SIZE};
use braintty::interpreter::engine::{Config, Interpreter};
use braintty::interpreter::errors::RuntimeError;
use braintty::interpreter::io::{InputSource, OutputSink};
use braintty::ui::App;

fn print_usage(bin_name: &str, opts: &Options) {
    let brief = format!("Usage: {} [options] [FILE...]", bin_name);
    print!("{}", opts.usage(&brief));
}

fn build_options() -> Options {
    let mut opts = Options::new();

    opts.optflag(
        "s",
        "step-by-step",
        "execute instructions one by one, waiting for confirmation (file mode)",
    );
    opts.optflag(
        "m",
        "show-memory",
        "print the tape window after each execution step",
    );
    opts.optflag(
        "v",
        "verbose",
        "print a description of each instruction executed",
    );
    opts.optflag(
        "r",
        "print-raw",
        "print cells as numeric values instead of characters",
    );
    opts.optflag("t", "tui", "watch one program in the terminal UI");
    opts.optflag("h", "help", "print this help");

    opts.optopt(
        "w",
        "window-size",
        &format!(
            "number of cells shown in the tape window (default {})",
            DEFAULT_WINDOW_SIZE
        ),
        "CELLS",
    );
    opts.optopt(
        "",
        "margin",
        &format!(
            "minimum head distance from a window edge before scrolling (default {})",
            DEFAULT_MARGIN
        ),
        "CELLS",
    );
    opts.optopt(
        "",
        "chunk-size",
        &format!(
            "number of cells added each time the tape grows (default {})",
            DEFAULT_CHUNK_SIZE
        ),
        "CELLS",
    );

    opts
}

fn parse_count(matches: &Matches, name: &str, default: usize) -> Result<usize, String> {
    match matches.opt_str(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("--{} expects a non-negative integer, got '{}'", name, raw)),
        None => Ok(default),
    }
}

fn config_from_matches(matches: &Matches) -> Result<Config, String> {
    let window_size = parse_count(matches, "window-size", DEFAULT_WINDOW_SIZE)?;
    let margin = parse_count(matches, "margin", DEFAULT_MARGIN)?;
    let chunk_size = parse_count(matches, "chunk-size", DEFAULT_CHUNK_SIZE)?;

    if window_size == 0 {
        return Err("--window-size must be at least 1".to_string());
    }
    if chunk_size == 0 {
        return Err("--chunk-size must be at least 1".to_string());
    }
    if margin > window_size / 2 {
        return Err(format!(
            "--margin must be at most half the window size ({} for a window of {})",
            window_size / 2,
            window_size
        ));
    }

    Ok(Config {
        step_by_step: matches.opt_present("s"),
        show_memory: matches.opt_present("m"),
        window_size,
        margin,
        verbose: matches.opt_present("v"),
        raw_output: matches.opt_present("r"),
        from_file: !matches.free.is_empty(),
        chunk_size,
    })
}

/// Evaluate each file in order against one shared interpreter, so later
/// files see the tape the earlier ones left behind.
fn run_files(files: &[String], config: Config) {
    let mut interpreter = Interpreter::new(config);

    for path in files {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        };

        match interpreter.evaluate(&source) {
            Ok(steps) => println!("\nCompleted in {} steps.", steps),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Interactive session: one fragment per prompt line, all sharing one tape.
fn run_repl(config: Config) {
    let mut interpreter = Interpreter::new(config);

    loop {
        print!("bf> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("Goodbye");
                return;
            }
            Ok(_) => {}
        }

        match interpreter.evaluate(&line) {
            Ok(steps) => println!("\nCompleted in {} steps.", steps),
            Err(RuntimeError::SourceExhausted) => {
                println!("Goodbye");
                return;
            }
            // The fragment is abandoned; the tape and head stay as they were
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn run_tui(matches: &Matches, config: Config) {
    if matches.free.len() != 1 {
        eprintln!("Error: --tui expects exactly one source file");
        process::exit(1);
    }

    let path = &matches.free[0];
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path, e);
            process::exit(1);
        }
    };

    let mut interpreter = Interpreter::with_io(
        config,
        OutputSink::Captured(String::new()),
        InputSource::Queued(VecDeque::new()),
    );

    // Reject malformed programs before touching the terminal
    if let Err(e) = interpreter.load(&source) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run_app(interpreter) {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}

fn run_app(interpreter: Interpreter) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let bin_name = args.first().map(|s| s.as_str()).unwrap_or("braintty");
    let opts = build_options();

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(bin_name, &opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print_usage(bin_name, &opts);
        return;
    }

    let config = match config_from_matches(&matches) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    if matches.opt_present("t") {
        run_tui(&matches, config);
    } else if matches.free.is_empty() {
        run_repl(config);
    } else {
        run_files(&matches.free, config);
    }
}

use clap::{App, Arg, ArgMatches, ErrorKind};
use exprsat::input::Source;
use exprsat::*;
use std::path::PathBuf;

// The minisat exit codes, except that a satisfiable formula exits with 0
// rather than 10.
const EXIT_SATISFIABLE: i32 = 0;
const EXIT_CANNOT_READ_INPUT: i32 = 1;
const EXIT_COMMAND_LINE_FAIL: i32 = 2;
const EXIT_CANNOT_PARSE_INPUT: i32 = 3;
const EXIT_UNSATISFIABLE: i32 = 20;

const EXAMPLES: &str = "Put the formula on the command line (quoted), in a file with --file, or send it via stdin.

The following are supported: &=and, |=or, ~=not, ()=brackets, letters=literals.
Operators chain left to right with no precedence: a & b | c is (a & b) | c.

Example expressions:
    a & ~b
    x & ~x
    mike & sally & ~peter
    ~(mike & sally) & ~peter";

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new("exprsat")
        .about("A toy SAT (boolean satisfiability) solver")
        .after_help(EXAMPLES)
        .arg(
            Arg::with_name("FORMULA")
                .help("the formula to solve; words are joined with spaces")
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("PATH")
                .takes_value(true)
                .conflicts_with("FORMULA")
                .help("read the formula from a file"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print the parsed input and search statistics"),
        )
}

fn source(matches: &ArgMatches) -> Source {
    if let Some(path) = matches.value_of("file") {
        Source::File(PathBuf::from(path))
    } else if let Some(words) = matches.values_of("FORMULA") {
        Source::Words(words.map(String::from).collect())
    } else {
        Source::Stdin
    }
}

fn exit_code(result: &Result<SatResult, SolveError>) -> i32 {
    match result {
        Ok(SatResult::Satisfiable(_)) => EXIT_SATISFIABLE,
        Ok(SatResult::Unsatisfiable) => EXIT_UNSATISFIABLE,
        Err(_) => EXIT_CANNOT_PARSE_INPUT,
    }
}

fn main() {
    env_logger::init();

    let matches = match cli().get_matches_safe() {
        Ok(matches) => matches,
        Err(e) if e.kind == ErrorKind::HelpDisplayed => e.exit(),
        Err(e) => {
            eprintln!("{}", e.message);
            std::process::exit(EXIT_COMMAND_LINE_FAIL);
        }
    };
    let verbose = matches.is_present("verbose");

    let text = match source(&matches).read() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_CANNOT_READ_INPUT);
        }
    };

    let formula = Formula::parse(&text);
    if verbose {
        println!("Parsed Input: {}", formula);
        println!("Unique Literals: {}", formula.literals().names().collect::<Vec<_>>().join(" "));
    }

    let mut solver = Solver::new(formula);
    let result = solver.solve();
    match &result {
        Ok(r) => {
            println!("{}", r);
            if verbose {
                println!("{}", solver.stats());
            }
        }
        Err(e) => eprintln!("{}", e),
    }
    std::process::exit(exit_code(&result));
}

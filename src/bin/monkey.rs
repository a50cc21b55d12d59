extern crate getopts;
extern crate mdl_monkey_eval;

use mdl_monkey_eval::lexer::Lexer;
use mdl_monkey_eval::object::{Environment, Object};
use mdl_monkey_eval::parser::Parser;
use mdl_monkey_eval::token::Token;
use mdl_monkey_eval::{ast, evaluator};

use getopts::Options;
use std::cell::RefCell;
use std::env;
use std::process;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("l", "lex", "display tokens produced by the lexer");
    opts.optflag("p", "parse", "display statements produced by the parser");
    opts.optflag("v", "verbose", "log macro definition and expansion");

    let matches = opts.parse(&args[1..]).map_err(|err| err.to_string())?;

    // Present usage if '-h' or no arguments.
    if matches.opt_present("h") || matches.free.is_empty() {
        let brief = format!("Usage: {} 'let five = 5; five * 2'", program);
        print!("{}", opts.usage(&brief));
        return Ok(());
    }

    init_tracing(matches.opt_present("v"));

    // Pass all free arguments to the interpreter.
    let program = matches.free.join(" ");

    if matches.opt_present("l") {
        lex(&program)?;
    }

    let prog = match Parser::new(Lexer::new(&program)).parse() {
        Ok(prog) => prog,
        Err(errs) => {
            eprintln!("parser errors:");
            for err in errs {
                eprintln!("  - {}", err);
            }
            process::exit(1);
        }
    };

    if matches.opt_present("p") {
        parse(&prog);
    }

    let obj = eval(prog)?;
    println!("{}", obj.inspect());

    if let Object::Error(_) = obj {
        process::exit(1);
    }

    Ok(())
}

// Logs to stderr, filtered by RUST_LOG unless verbose output is requested.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn lex(input: &str) -> Result<(), String> {
    println!("lexer:");

    for t in Lexer::new(input).lex() {
        match t {
            Token::Eof => {
                break;
            }
            Token::Illegal(ill) => {
                return Err(format!("illegal token: {}", ill));
            }
            _ => {
                println!("  - {:?}", t);
            }
        };
    }

    println!();
    Ok(())
}

fn parse(prog: &ast::Program) {
    println!("parser:");

    for s in &prog.statements {
        println!("  - {}", s);
    }

    println!();
}

fn eval(mut prog: ast::Program) -> Result<Object, String> {
    // Macros live in their own environment and never exist at run time.
    let macro_env = Rc::new(RefCell::new(Environment::new()));
    evaluator::define_macros(&mut prog, &macro_env);
    let expanded = evaluator::expand_macros(prog, &macro_env).map_err(|err| err.to_string())?;

    let env = Rc::new(RefCell::new(Environment::new()));
    Ok(evaluator::eval(&ast::Node::Program(expanded), &env))
}

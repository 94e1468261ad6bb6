// tamarin - A small dynamically-typed language with a bytecode compiler and stack VM
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use tamarin_parser::Parser;
use tamarin_vm::builtins::BUILTINS;
use tamarin_vm::{Compiler, GLOBALS_SIZE, SymbolTable, VM, Value};

const PROMPT: &str = ">> ";

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("Tamarin v0.1.0");
        return;
    }

    // If files provided, run them; otherwise start the REPL
    if args.len() > 1 {
        run_files(&args[1..]);
    } else {
        run_repl();
    }
}

/// Compile and run a sequence of source files
fn run_files(files: &[String]) {
    for file_path in files {
        if let Err(e) = run_file(file_path) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Compile and run a single source file
fn run_file(file_path: &str) -> Result<(), String> {
    let path = Path::new(file_path);

    // Validate file extension
    match path.extension().and_then(|e| e.to_str()) {
        Some("tam") => {}
        Some(ext) => {
            return Err(format!(
                "Error: unsupported file extension '.{}' for '{}'",
                ext, file_path
            ));
        }
        None => {
            return Err(format!(
                "Error: file '{}' has no extension (expected .tam)",
                file_path
            ));
        }
    }

    let source =
        fs::read_to_string(path).map_err(|e| format!("Error reading '{}': {}", file_path, e))?;

    let program = Parser::new(&source).parse_program().map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| format!("\t{}", e)).collect();
        format!("Parse errors in '{}':\n{}", file_path, messages.join("\n"))
    })?;

    let mut compiler = Compiler::new();
    compiler
        .compile(&program)
        .map_err(|e| format!("Compilation error in '{}': {}", file_path, e))?;

    let mut machine = VM::new(compiler.bytecode());
    machine
        .run()
        .map_err(|e| format!("Runtime error in '{}': {}", file_path, e))?;

    Ok(())
}

/// Run the interactive REPL.
///
/// Symbol table, constants, and globals survive across lines - and across
/// failed lines, so definitions made before an error persist.
fn run_repl() {
    println!("Tamarin v0.1.0");

    let mut symbol_table = SymbolTable::new();
    for (i, builtin) in BUILTINS.iter().enumerate() {
        symbol_table.define_builtin(i, builtin.name);
    }
    let mut constants: Vec<Value> = Vec::new();
    let mut globals: Vec<Value> = vec![Value::Null; GLOBALS_SIZE];

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }

                let program = match Parser::new(input).parse_program() {
                    Ok(program) => program,
                    Err(errors) => {
                        for error in errors {
                            eprintln!("Parse error: {}", error);
                        }
                        continue;
                    }
                };

                let mut compiler = Compiler::new_with_state(symbol_table, constants);
                if let Err(e) = compiler.compile(&program) {
                    eprintln!("Compilation error: {}", e);
                    (symbol_table, constants) = compiler.into_state();
                    continue;
                }

                let bytecode = compiler.bytecode();
                (symbol_table, constants) = compiler.into_state();

                let mut machine = VM::new_with_state(bytecode, globals);
                let result = machine.run();
                let last_popped = machine.last_popped().clone();
                globals = machine.into_globals();

                match result {
                    Ok(()) => println!("{}", last_popped),
                    Err(e) => eprintln!("Runtime error: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}

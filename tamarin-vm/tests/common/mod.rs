// tamarin-vm - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for the tamarin-vm integration tests: parse source,
//! compile it, run it, and hand back the observable result.

#![allow(dead_code)]

pub use tamarin_parser::{Parser, Program};
pub use tamarin_vm::{Bytecode, CompileError, Compiler, RuntimeError, VM, Value};

/// Parse a source string, panicking on parse errors.
pub fn parse(input: &str) -> Program {
    Parser::new(input)
        .parse_program()
        .unwrap_or_else(|errors| panic!("parse errors for {:?}: {:?}", input, errors))
}

/// Compile a source string to bytecode, panicking on any error.
pub fn compile(input: &str) -> Bytecode {
    let mut compiler = Compiler::new();
    compiler
        .compile(&parse(input))
        .unwrap_or_else(|e| panic!("compile error for {:?}: {}", input, e));
    compiler.bytecode()
}

/// Compile a source string, returning the compile error.
pub fn compile_err(input: &str) -> CompileError {
    let mut compiler = Compiler::new();
    match compiler.compile(&parse(input)) {
        Err(e) => e,
        Ok(()) => panic!("expected compile error for {:?}", input),
    }
}

/// Compile and run a source string, returning the last popped stack
/// element. Panics on any error.
pub fn run(input: &str) -> Value {
    let mut vm = VM::new(compile(input));
    vm.run()
        .unwrap_or_else(|e| panic!("vm error for {:?}: {}", input, e));
    vm.last_popped().clone()
}

/// Compile and run a source string, returning the runtime error.
pub fn run_err(input: &str) -> RuntimeError {
    let mut vm = VM::new(compile(input));
    match vm.run() {
        Err(e) => e,
        Ok(()) => panic!(
            "expected runtime error for {:?}, got {}",
            input,
            vm.last_popped()
        ),
    }
}

/// Build an integer value.
pub fn int(n: i64) -> Value {
    Value::Int(n)
}

/// Build an array value from integers.
pub fn int_array(ns: &[i64]) -> Value {
    Value::Array(ns.iter().map(|&n| Value::Int(n)).collect())
}

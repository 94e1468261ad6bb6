// tamarin-vm - Bytecode compiler and virtual machine for the Tamarin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for Tamarin.
//!
//! Builtins are registered in a fixed order; `OpGetBuiltin` addresses them
//! by index, so the order of [`BUILTINS`] is part of the bytecode contract.
//! None of them mutate their arguments: `push` and `rest` return new arrays
//! sharing structure with the input.

use crate::value::Value;
use crate::vm::RuntimeError;

/// Signature of a native builtin function.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, RuntimeError>;

/// A named native function.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// The builtin registry. Index positions are fixed: compiled bytecode
/// addresses builtins by position in this table.
pub const BUILTINS: [Builtin; 6] = [
    Builtin {
        name: "len",
        func: builtin_len,
    },
    Builtin {
        name: "puts",
        func: builtin_puts,
    },
    Builtin {
        name: "first",
        func: builtin_first,
    },
    Builtin {
        name: "last",
        func: builtin_last,
    },
    Builtin {
        name: "rest",
        func: builtin_rest,
    },
    Builtin {
        name: "push",
        func: builtin_push,
    },
];

/// Look up a builtin by name. Returns its registry index and definition.
pub fn lookup(name: &str) -> Option<(usize, Builtin)> {
    BUILTINS
        .iter()
        .position(|b| b.name == name)
        .map(|i| (i, BUILTINS[i]))
}

fn check_arity(args: &[Value], want: usize) -> Result<(), RuntimeError> {
    if args.len() != want {
        return Err(RuntimeError::BuiltinArity {
            got: args.len(),
            want,
        });
    }
    Ok(())
}

fn as_array<'a>(name: &'static str, arg: &'a Value) -> Result<&'a im::Vector<Value>, RuntimeError> {
    match arg {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ArgumentNotArray {
            name,
            got: other.type_name(),
        }),
    }
}

/// `len(x)`: byte length of a string, or element count of an array.
fn builtin_len(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1)?;
    match &args[0] {
        Value::Str(s) => Ok(Value::Int(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Int(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument {
            name: "len",
            got: other.type_name(),
        }),
    }
}

/// `puts(...)`: print each argument's display form on its own line.
fn builtin_puts(args: &[Value]) -> Result<Value, RuntimeError> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(Value::Null)
}

/// `first(arr)`: first element, or null for an empty array.
fn builtin_first(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1)?;
    let elements = as_array("first", &args[0])?;
    Ok(elements.front().cloned().unwrap_or(Value::Null))
}

/// `last(arr)`: last element, or null for an empty array.
fn builtin_last(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1)?;
    let elements = as_array("last", &args[0])?;
    Ok(elements.back().cloned().unwrap_or(Value::Null))
}

/// `rest(arr)`: a new array of everything after the first element, or null
/// for an empty array.
fn builtin_rest(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1)?;
    let elements = as_array("rest", &args[0])?;
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    let mut rest = elements.clone();
    rest.pop_front();
    Ok(Value::Array(rest))
}

/// `push(arr, v)`: a new array with `v` appended. Does not mutate `arr`.
fn builtin_push(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2)?;
    let elements = as_array("push", &args[0])?;
    let mut pushed = elements.clone();
    pushed.push_back(args[1].clone());
    Ok(Value::Array(pushed))
}

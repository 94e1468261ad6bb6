// tamarin-vm - Bytecode compiler and virtual machine for the Tamarin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core runtime value type for Tamarin.
//!
//! `Value` is the central enum representing every value the VM can produce.
//! Arrays and hashes use persistent collections, so clones are cheap and
//! share structure: `push` and friends return new collections without
//! copying or mutating their inputs.

use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};

use crate::builtins::Builtin;
use crate::bytecode::Instructions;

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(Rc<str>),
    Array(Vector<Value>),
    Hash(OrdMap<HashKey, HashPair>),
    /// A compiled function body. Only ever lives in the constant pool;
    /// `OpClosure` wraps it before it reaches the stack.
    Function(Rc<CompiledFunction>),
    Closure(Rc<Closure>),
    Builtin(Builtin),
}

impl Value {
    /// The type tag used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "COMPILED_FUNCTION",
            Value::Closure(_) => "CLOSURE",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// The hash-map key form of this value, for the kinds that permit use
    /// as a hash key. Returns `None` for every other kind.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Int(n) => Some(HashKey::Int(*n)),
            Value::Bool(b) => Some(HashKey::Bool(*b)),
            Value::Str(s) => Some(HashKey::Str(Rc::clone(s))),
            _ => None,
        }
    }

    /// Shorthand for a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::Str(s.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Array(elements) => {
                let elems: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elems.join(", "))
            }
            Value::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .values()
                    .map(|p| format!("{}: {}", p.key, p.value))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Value::Function(_) => write!(f, "#<compiled-fn>"),
            Value::Closure(_) => write!(f, "#<closure>"),
            Value::Builtin(b) => write!(f, "#<builtin {}>", b.name),
        }
    }
}

/// Key form of a hashable value (Integer, Boolean, String).
///
/// Derives `Ord`, so hash iteration and display order is deterministic:
/// key-ordered within a kind, kinds in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKey {
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
}

/// A hash entry. The original key value is kept alongside the value so
/// displaying a hash can reproduce it.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// The compiled body of a function literal: its instruction stream plus the
/// stack-slot bookkeeping the VM needs to set up a call frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
    pub instructions: Instructions,
    /// Local slots needed (parameters included).
    pub num_locals: usize,
    pub num_parameters: usize,
}

/// A compiled function paired with its captured free-variable values.
///
/// Every function reaches the stack as a closure; one with no free
/// variables simply has an empty capture list.
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    pub func: Rc<CompiledFunction>,
    pub free: Vec<Value>,
}

// tamarin-parser - AST for Tamarin
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Abstract syntax tree for Tamarin programs.
//!
//! Every node implements `Display`, reproducing a canonical source form.
//! The printed form is load-bearing: the compiler orders hash-literal keys
//! by it so emitted bytecode is deterministic.

use std::fmt;

/// A parsed program: the root of every AST.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: String, value: Expression },
    /// `return <value>;`
    Return(Expression),
    /// A bare expression used as a statement.
    Expression(Expression),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return(value) => write!(f, "return {};", value),
            Statement::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

/// A `{ ... }` block of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// An expression.
///
/// Prefix and infix operators are carried as the literal operator text; the
/// compiler maps them to opcodes and owns the "unknown operator" diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(String),
    Integer(i64),
    String(String),
    Boolean(bool),
    Prefix {
        operator: String,
        right: Box<Expression>,
    },
    Infix {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// A function literal. `name` is set by the parser when the literal is
    /// the immediate value of a `let` statement, enabling self-recursion.
    Function {
        parameters: Vec<String>,
        body: BlockStatement,
        name: Option<String>,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Array(Vec<Expression>),
    /// Key/value pairs in source order; the compiler sorts them.
    Hash(Vec<(Expression, Expression)>),
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Integer(n) => write!(f, "{}", n),
            Expression::String(s) => write!(f, "{}", s),
            Expression::Boolean(b) => write!(f, "{}", b),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expression::Function {
                parameters,
                body,
                name,
            } => {
                write!(f, "fn")?;
                if let Some(name) = name {
                    write!(f, "<{}>", name)?;
                }
                write!(f, "({}) {}", parameters.join(", "), body)
            }
            Expression::Call {
                function,
                arguments,
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
            Expression::Array(elements) => {
                let elems: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elems.join(", "))
            }
            Expression::Hash(pairs) => {
                let pairs: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Expression::Index { left, index } => write!(f, "({}[{}])", left, index),
        }
    }
}

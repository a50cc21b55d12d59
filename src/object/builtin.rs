//! Built-in functions available to every Monkey program.

use std::{fmt, rc::Rc};

use crate::object::{Array, Error, Object, Result};

/// The object representation of a built-in Monkey function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Builtin {
    Len,
    Puts,
    First,
    Last,
    Rest,
    Push,
}

impl Builtin {
    /// Constructs a built-in using its name.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Builtin::Len),
            "puts" => Some(Builtin::Puts),
            "first" => Some(Builtin::First),
            "last" => Some(Builtin::Last),
            "rest" => Some(Builtin::Rest),
            "push" => Some(Builtin::Push),

            _ => None,
        }
    }

    /// Applies the appropriate built-in function on `args` to produce an
    /// `Object`.
    pub fn apply(&self, args: &[Object]) -> Result<Object> {
        match self {
            Builtin::Len => builtin_len(args),
            Builtin::Puts => builtin_puts(args),
            Builtin::First => builtin_first(args),
            Builtin::Last => builtin_last(args),
            Builtin::Rest => builtin_rest(args),
            Builtin::Push => builtin_push(args),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Builtin::Len => write!(f, "len"),
            Builtin::Puts => write!(f, "puts"),
            Builtin::First => write!(f, "first"),
            Builtin::Last => write!(f, "last"),
            Builtin::Rest => write!(f, "rest"),
            Builtin::Push => write!(f, "push"),
        }
    }
}

fn builtin_len(args: &[Object]) -> Result<Object> {
    want_args(args, 1)?;

    match &args[0] {
        Object::String(s) => Ok(Object::Integer(s.chars().count() as i64)),
        Object::Array(a) => Ok(Object::Integer(a.elements.len() as i64)),
        obj => Err(Error::ArgumentNotSupported(Builtin::Len, obj.object_type())),
    }
}

fn builtin_puts(args: &[Object]) -> Result<Object> {
    for arg in args {
        println!("{}", arg);
    }

    Ok(Object::Null)
}

fn builtin_first(args: &[Object]) -> Result<Object> {
    want_args(args, 1)?;
    let array = want_array(Builtin::First, &args[0])?;

    Ok(array.elements.first().cloned().unwrap_or(Object::Null))
}

fn builtin_last(args: &[Object]) -> Result<Object> {
    want_args(args, 1)?;
    let array = want_array(Builtin::Last, &args[0])?;

    Ok(array.elements.last().cloned().unwrap_or(Object::Null))
}

fn builtin_rest(args: &[Object]) -> Result<Object> {
    want_args(args, 1)?;
    let array = want_array(Builtin::Rest, &args[0])?;

    if array.elements.is_empty() {
        return Ok(Object::Null);
    }

    Ok(Object::Array(Rc::new(Array {
        elements: array.elements[1..].to_vec(),
    })))
}

fn builtin_push(args: &[Object]) -> Result<Object> {
    want_args(args, 2)?;
    let array = want_array(Builtin::Push, &args[0])?;

    // The input array is never modified; push produces a copy.
    let mut elements = Vec::with_capacity(array.elements.len() + 1);
    elements.extend_from_slice(&array.elements);
    elements.push(args[1].clone());

    Ok(Object::Array(Rc::new(Array { elements })))
}

fn want_args(args: &[Object], want: usize) -> Result<()> {
    if args.len() != want {
        return Err(Error::WrongNumberArguments {
            got: args.len(),
            want,
        });
    }

    Ok(())
}

fn want_array(builtin: Builtin, obj: &Object) -> Result<&Array> {
    match obj {
        Object::Array(a) => Ok(a.as_ref()),
        _ => Err(Error::ArgumentNotArray(builtin, obj.object_type())),
    }
}

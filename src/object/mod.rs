//! Objects produced when evaluating the Monkey programming language from
//! <https://interpreterbook.com/>.

use crate::ast;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

mod builtin;
pub use builtin::Builtin;

mod environment;
pub use environment::Environment;

pub mod error;
pub use error::{Error, Result};

/// Objects produced when evaluating Monkey source code, along with their
/// associated data if applicable.
///
/// Composite objects are reference counted, so cloning an `Object` never
/// copies an array, hash, or closure.
#[derive(Clone, Debug)]
pub enum Object {
    Null,
    Integer(i64),
    Boolean(bool),
    String(String),
    ReturnValue(Box<Object>),
    Error(String),
    Function(Rc<Function>),
    Builtin(Builtin),
    Array(Rc<Array>),
    Hash(Rc<Hash>),
    Quote(Rc<ast::Expression>),
    Macro(Rc<Macro>),
}

/// The boolean true object.
pub const TRUE: Object = Object::Boolean(true);

/// The boolean false object.
pub const FALSE: Object = Object::Boolean(false);

/// The null object.
pub const NULL: Object = Object::Null;

impl Object {
    /// Reports the `ObjectType` of this object.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Null => ObjectType::Null,
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::String(_) => ObjectType::String,
            Object::ReturnValue(_) => ObjectType::ReturnValue,
            Object::Error(_) => ObjectType::Error,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Array(_) => ObjectType::Array,
            Object::Hash(_) => ObjectType::Hash,
            Object::Quote(_) => ObjectType::Quote,
            Object::Macro(_) => ObjectType::Macro,
        }
    }

    /// Produces the human-readable form of this object, as printed by the
    /// REPL and by `puts`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Produces the `HashKey` for this object, or `None` if the object cannot
    /// be used as a hash key.
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Object::Integer(i) => *i as u64,
            Object::Boolean(b) => u64::from(*b),
            Object::String(s) => fnv1a(s.as_bytes()),
            _ => return None,
        };

        Some(HashKey {
            kind: self.object_type(),
            value,
        })
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Integer(i) => i.fmt(f),
            Object::Boolean(b) => b.fmt(f),
            Object::String(s) => s.fmt(f),
            Object::ReturnValue(r) => r.fmt(f),
            Object::Error(err) => write!(f, "ERROR: {}", err),
            Object::Function(func) => func.fmt(f),
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Array(a) => a.fmt(f),
            Object::Hash(h) => h.fmt(f),
            Object::Quote(q) => write!(f, "QUOTE({})", q),
            Object::Macro(m) => m.fmt(f),
        }
    }
}

/// Compares objects structurally. Functions and macros capture their
/// environment, so they are only equal to themselves.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Null, Object::Null) => true,
            (Object::Integer(l), Object::Integer(r)) => l == r,
            (Object::Boolean(l), Object::Boolean(r)) => l == r,
            (Object::String(l), Object::String(r)) => l == r,
            (Object::ReturnValue(l), Object::ReturnValue(r)) => l == r,
            (Object::Error(l), Object::Error(r)) => l == r,
            (Object::Builtin(l), Object::Builtin(r)) => l == r,
            (Object::Array(l), Object::Array(r)) => l == r,
            (Object::Hash(l), Object::Hash(r)) => l == r,
            (Object::Quote(l), Object::Quote(r)) => l == r,
            (Object::Function(l), Object::Function(r)) => Rc::ptr_eq(l, r),
            (Object::Macro(l), Object::Macro(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

/// The type of an `Object`, as reported in error messages.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ObjectType {
    Null,
    Integer,
    Boolean,
    String,
    ReturnValue,
    Error,
    Function,
    Builtin,
    Array,
    Hash,
    Quote,
    Macro,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The key under which a hashable object is stored in a `Hash`. Keys of
/// different object types never collide.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HashKey {
    pub kind: ObjectType,
    pub value: u64,
}

// 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
    const PRIME: u64 = 1_099_511_628_211;

    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(PRIME)
    })
}

/// The object representation of a Monkey function.
pub struct Function {
    pub parameters: Vec<String>,
    pub body: ast::BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

impl fmt::Debug for Function {
    // The environment may refer back to this function, so it is omitted.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fn({}) {{\n{}\n}}", self.parameters.join(", "), self.body)
    }
}

/// The object representation of a Monkey macro, bound before evaluation
/// begins.
pub struct Macro {
    pub parameters: Vec<String>,
    pub body: ast::BlockStatement,
    pub env: Rc<RefCell<Environment>>,
}

impl fmt::Debug for Macro {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Macro")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "macro({}) {{\n{}\n}}",
            self.parameters.join(", "),
            self.body
        )
    }
}

/// The object representation of a Monkey array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    pub elements: Vec<Object>,
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();

        write!(f, "[{}]", elements.join(", "))
    }
}

/// The object representation of a Monkey hash.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hash {
    pub pairs: BTreeMap<HashKey, HashPair>,
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs
            .values()
            .map(|pair| format!("{}: {}", pair.key, pair.value))
            .collect();

        write!(f, "{{{}}}", pairs.join(", "))
    }
}

/// A key/value pair stored in a `Hash`. The key object itself is kept so
/// the hash can be displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_values() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn hash_key_distinguishes_types() {
        let one = Object::Integer(1).hash_key();
        let t = TRUE.hash_key();

        assert_ne!(one, t);
        assert_eq!(one.map(|k| k.value), t.map(|k| k.value));
    }
}

//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
//! (without the leading `_:`).
use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL,
    /// not expecting the leading `_:`.
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// A blank node identifier.
///
/// The label is only meaningful inside the graph that uses it:
/// the matcher never compares labels of two different graphs.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId<T: Borrow<str>>(T);

impl<T: Borrow<str>> BnodeId<T> {
    /// Build a `BnodeId`, checking that `id` is a valid blank node label.
    pub fn new(id: T) -> Result<Self, InvalidBnodeId> {
        if BNODE_ID.is_match(id.borrow()) {
            Ok(BnodeId(id))
        } else {
            Err(InvalidBnodeId(id.borrow().to_string()))
        }
    }

    /// Build a `BnodeId` without checking `id`.
    ///
    /// It is the caller's responsibility to ensure that `id` is a valid label.
    pub fn new_unchecked(id: T) -> Self {
        debug_assert!(BNODE_ID.is_match(id.borrow()));
        BnodeId(id)
    }

    /// The label of this blank node, without the leading `_:`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Unwrap the underlying value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Borrow<str>> fmt::Display for BnodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.as_str())
    }
}

/// This error is raised when trying to parse an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
pub struct InvalidBnodeId(pub String);

impl<T: Borrow<str>> Term for BnodeId<T> {
    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("x")]
    #[test_case("_"; "underscore")]
    #[test_case("foo_bar_baz")]
    #[test_case("hé_hé")]
    #[test_case("1")]
    #[test_case("abc42")]
    #[test_case("a.b"; "with dot")]
    fn valid(tag: &str) {
        assert!(BnodeId::new(tag).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("a."; "trailing dot")]
    #[test_case(".b"; "leading dot")]
    #[test_case("a,b"; "with comma")]
    #[test_case("a:b"; "with colon")]
    #[test_case("a b"; "with space")]
    fn invalid(tag: &str) {
        assert!(BnodeId::new(tag).is_err());
    }

    #[test]
    fn display() {
        let id = BnodeId::new("b42").unwrap();
        assert_eq!(id.to_string(), "_:b42");
        assert_eq!(id.as_str(), "b42");
        assert!(id.is_blank_node());
    }

    #[test]
    fn unchecked_and_inner() {
        let id = BnodeId::new_unchecked(String::from("b42"));
        assert_eq!(id, BnodeId::new(String::from("b42")).unwrap());
        assert_eq!(id.into_inner(), "b42");

        let id = BnodeId::new_unchecked(Box::<str>::from("x.y"));
        assert_eq!(&*id.into_inner(), "x.y");
    }
}

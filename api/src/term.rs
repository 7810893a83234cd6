//! An RDF term is either fixed (an IRI or a literal),
//! and then comparable by value across graphs,
//! or a blank node, whose identity is scoped to the graph containing it.

mod bnode_id;
pub use bnode_id::*;
mod _simple;
pub use _simple::*;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// Generic trait for RDF terms.
///
/// Implementors are expected to implement [`Eq`] and [`Hash`](std::hash::Hash)
/// so that fixed terms (IRIs and literals) compare by value.
/// Blank nodes must only be compared within a single graph:
/// two blank nodes from different graphs that happen to be equal
/// are *not* considered to denote the same node.
pub trait Term {
    /// The kind of this term.
    fn kind(&self) -> TermKind;

    /// Whether this term is an IRI.
    #[inline]
    fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Whether this term is a literal.
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Whether this term is a blank node.
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }
}

impl<'a, T> Term for &'a T
where
    T: Term + ?Sized,
{
    fn kind(&self) -> TermKind {
        T::kind(*self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_helpers() {
        let iri = SimpleTerm::iri("tag:x");
        assert!(iri.is_iri());
        assert!(!iri.is_literal());
        assert!(!iri.is_blank_node());

        let lit = SimpleTerm::literal("42", "http://www.w3.org/2001/XMLSchema#integer");
        assert!(lit.is_literal());

        let bn = SimpleTerm::bnode("b1").unwrap();
        assert!(bn.is_blank_node());
        assert_eq!((&bn).kind(), TermKind::BlankNode);
    }
}

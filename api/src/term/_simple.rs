// this module is transparently re-exported by its parent `term`
use super::*;

/// A straightforward owned implementation of [`Term`].
///
/// Equality, hashing and ordering are structural.
/// This is what is expected of fixed terms;
/// for blank nodes, it only makes sense within one graph.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SimpleTerm {
    /// An IRI
    Iri(Box<str>),
    /// A literal with a datatype IRI (lexical form, datatype)
    LiteralDatatype(Box<str>, Box<str>),
    /// A language-tagged string (lexical form, language tag)
    LiteralLanguage(Box<str>, Box<str>),
    /// A blank node
    BlankNode(BnodeId<Box<str>>),
}

impl SimpleTerm {
    /// Build an IRI term.
    pub fn iri(iri: &str) -> Self {
        SimpleTerm::Iri(iri.into())
    }

    /// Build a typed literal.
    pub fn literal(lex: &str, datatype: &str) -> Self {
        SimpleTerm::LiteralDatatype(lex.into(), datatype.into())
    }

    /// Build a language-tagged string.
    ///
    /// Language tags are case-insensitive, so `tag` is lowercased.
    pub fn lang_string(lex: &str, tag: &str) -> Self {
        SimpleTerm::LiteralLanguage(lex.into(), tag.to_ascii_lowercase().into())
    }

    /// Build a blank node, checking its label.
    pub fn bnode(id: &str) -> Result<Self, InvalidBnodeId> {
        BnodeId::new(Box::<str>::from(id)).map(SimpleTerm::BlankNode)
    }
}

impl Term for SimpleTerm {
    fn kind(&self) -> TermKind {
        match self {
            SimpleTerm::Iri(_) => TermKind::Iri,
            SimpleTerm::LiteralDatatype(..) | SimpleTerm::LiteralLanguage(..) => TermKind::Literal,
            SimpleTerm::BlankNode(_) => TermKind::BlankNode,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn structural_eq() {
        assert_eq!(SimpleTerm::iri("tag:a"), SimpleTerm::iri("tag:a"));
        assert_ne!(SimpleTerm::iri("tag:a"), SimpleTerm::iri("tag:b"));
        assert_eq!(
            SimpleTerm::lang_string("chat", "FR"),
            SimpleTerm::lang_string("chat", "fr"),
        );
        assert_ne!(
            SimpleTerm::lang_string("chat", "fr"),
            SimpleTerm::literal("chat", "http://www.w3.org/2001/XMLSchema#string"),
        );
    }

    #[test]
    fn bnode_label_checked() {
        assert!(SimpleTerm::bnode("b1").is_ok());
        assert!(SimpleTerm::bnode("not valid").is_err());
    }
}

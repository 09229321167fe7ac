use crate::declarations::{EnumValue, MemberDecl, MemberKind};

/// Combinators over a sequence of fields, properties, enums or parameters.
pub trait MemberQuery<'f>: Iterator<Item = MemberDecl<'f>> + Clone + Sized {
    fn with_kind(self, kind: MemberKind) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.filter(move |member| member.kind() == kind)
    }

    /// Members whose written type satisfies `predicate`. Members without a
    /// written type never match.
    fn with_type<P>(self, predicate: P) -> impl Iterator<Item = MemberDecl<'f>> + Clone
    where
        P: Fn(&str) -> bool + Clone,
    {
        self.filter(move |member| member.type_name().is_ok_and(|ty| predicate(&ty)))
    }

    /// Members with an initializer or default value.
    fn with_default(self) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.filter(|member| member.default_value().is_some())
    }

    fn with_nullable(self) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.filter(MemberDecl::is_nullable)
    }

    /// Enum entries of every enum in the sequence.
    fn values(self) -> impl Iterator<Item = EnumValue> + Clone {
        self.flat_map(|member| member.values())
    }
}

impl<'f, I> MemberQuery<'f> for I where I: Iterator<Item = MemberDecl<'f>> + Clone {}

//! Type-expression normalization.
//!
//! Legacy front ends spell the same type several ways: `System.Int32`,
//! `Int32`, `int`, `Nullable<int>`, `int?`. Normalization maps all of them to
//! the short form used in generated sources and records every namespace the
//! short form depends on.

use crate::STANDARD_NAMESPACE;
use std::collections::BTreeSet;

/// Suffix marking an optional type.
pub const OPTIONAL_MARKER: char = '?';

/// Suffix marking a single-dimension array type.
pub const ARRAY_MARKER: &str = "[]";

/// Bare name of the generic optional wrapper (`Nullable<T>`).
pub const OPTIONAL_WRAPPER: &str = "Nullable";

/// Bare name of the structured markup type that needs a string conversion.
pub const XML_TYPE: &str = "XElement";

/// Namespace that holds the structured markup type.
pub const XML_NAMESPACE: &str = "System.Xml.Linq";

///
/// PrimitiveAlias
///
/// CLR primitive type names that have a keyword spelling.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum PrimitiveAlias {
    Boolean,
    Byte,
    Decimal,
    Double,
    Int16,
    Int32,
    Int64,
    Single,
    String,
}

impl PrimitiveAlias {
    /// Look up a bare CLR type name; matching is exact.
    #[must_use]
    pub fn from_clr_name(name: &str) -> Option<Self> {
        let alias = match name {
            "Boolean" => Self::Boolean,
            "Byte" => Self::Byte,
            "Decimal" => Self::Decimal,
            "Double" => Self::Double,
            "Int16" => Self::Int16,
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "Single" => Self::Single,
            "String" => Self::String,
            _ => return None,
        };

        Some(alias)
    }

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Byte => "byte",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Single => "float",
            Self::String => "string",
        }
    }
}

///
/// NormalizedType
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NormalizedType {
    pub name: String,
    pub namespaces: BTreeSet<String>,
}

impl NormalizedType {
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.name.ends_with(OPTIONAL_MARKER)
    }
}

/// Normalize a raw type expression, collecting its namespaces.
#[must_use]
pub fn normalize(raw: &str) -> NormalizedType {
    let mut namespaces = BTreeSet::new();
    let name = normalize_into(raw, &mut namespaces);

    NormalizedType { name, namespaces }
}

/// Normalize a raw type expression, adding required namespaces to `namespaces`.
///
/// The optional marker is removed before anything else because it always
/// trails the whole expression, never the namespace-qualified segment.
pub fn normalize_into(raw: &str, namespaces: &mut BTreeSet<String>) -> String {
    let ty = raw.trim();

    if let Some(inner) = ty.strip_suffix(OPTIONAL_MARKER) {
        return mark_optional(normalize_into(inner, namespaces));
    }

    if let Some(element) = ty.strip_suffix(ARRAY_MARKER) {
        return format!("{}{ARRAY_MARKER}", normalize_into(element, namespaces));
    }

    let (head, args) = split_generic(ty);
    let (namespace, bare) = split_namespace(head);

    if bare == OPTIONAL_WRAPPER
        && let Some(args) = args
        && let [inner] = split_args(args).as_slice()
    {
        return mark_optional(normalize_into(inner, namespaces));
    }

    if let Some(namespace) = namespace
        && namespace != STANDARD_NAMESPACE
    {
        namespaces.insert(namespace.to_string());
    }

    let bare = match PrimitiveAlias::from_clr_name(bare) {
        Some(alias) => alias.keyword(),
        None => bare,
    };

    match args {
        None => bare.to_string(),
        Some(args) => {
            let args: Vec<String> = split_args(args)
                .into_iter()
                .map(|arg| normalize_into(arg, namespaces))
                .collect();

            format!("{bare}<{}>", args.join(", "))
        }
    }
}

/// Whether a raw type is the structured markup type, optional or not.
#[must_use]
pub fn is_xml_type(raw: &str) -> bool {
    let ty = raw.trim().trim_end_matches(OPTIONAL_MARKER);

    ty == XML_TYPE || ty.strip_prefix(XML_NAMESPACE).and_then(|t| t.strip_prefix('.')) == Some(XML_TYPE)
}

// mark_optional
// never stacks markers
fn mark_optional(mut name: String) -> String {
    if !name.ends_with(OPTIONAL_MARKER) {
        name.push(OPTIONAL_MARKER);
    }

    name
}

// split_generic
// `Dictionary<string, int>` -> ("Dictionary", Some("string, int"))
fn split_generic(ty: &str) -> (&str, Option<&str>) {
    match ty.find('<') {
        Some(open) if ty.ends_with('>') => (&ty[..open], Some(&ty[open + 1..ty.len() - 1])),
        _ => (ty, None),
    }
}

// split_namespace
// only a separator after the first character counts, so `.Foo` stays bare
fn split_namespace(head: &str) -> (Option<&str>, &str) {
    match head.rfind('.') {
        Some(pos) if pos > 0 => (Some(head[..pos].trim()), head[pos + 1..].trim()),
        _ => (None, head.trim()),
    }
}

// split_args
// split generic arguments on top-level commas
fn split_args(args: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(args[start..].trim());

    out
}

///
/// TESTS
///

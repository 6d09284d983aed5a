//SPDX-License-Identifier: MIT OR Apache-2.0

//! Display names for functions and types.
//!
//! The compiler and the backtrace machinery both report fully qualified paths
//! (`app::server::Server::handle`, `<app::Foo as core::fmt::Display>::fmt`,
//! `alloc::vec::Vec<alloc::string::String>`).  Messages read better with short, stable
//! names, so this module turns those paths into something a person would write.

/// Returns a short, stable name for a function path.
///
/// - Module paths are dropped: `app::server::handle` becomes `handle`.
/// - A method keeps its type: `app::Server::handle` becomes `Server::handle`, and trait
///   impls keep the implementing type: `<app::Foo as core::fmt::Display>::fmt` becomes
///   `Foo::fmt`.
/// - Anonymous callables stay attached to the function that owns them:
///   `app::run::{{closure}}` becomes `run::{{closure}}`.
///
/// ```
/// use checkwise::names::function_display_name;
/// assert_eq!(function_display_name("app::server::handle"), "handle");
/// assert_eq!(function_display_name("app::Server::handle"), "Server::handle");
/// assert_eq!(function_display_name("app::run::{{closure}}"), "run::{{closure}}");
/// ```
pub fn function_display_name(path: &str) -> String {
    let segments = split_path(path);
    let Some(named) = segments.iter().rposition(|s| !is_anonymous(s)) else {
        return path.to_string();
    };
    let mut parts: Vec<String> = Vec::new();
    if named > 0 {
        let owner = segments[named - 1];
        if owner.starts_with('<') {
            parts.push(qualified_self_name(owner));
        } else if owner.starts_with(|c: char| c.is_uppercase()) {
            parts.push(owner.to_string());
        }
    }
    parts.extend(segments[named..].iter().map(|s| s.to_string()));
    parts.join("::")
}

/// Returns the display name of a type, the way `instance_of` failures report it.
///
/// If the name is a plain path, the last segment is the name.  Anything else (generic
/// arguments, references, tuples, trait objects) is reported in full.
///
/// ```
/// use checkwise::names::callable_name;
/// assert_eq!(callable_name("alloc::string::String"), "String");
/// assert_eq!(callable_name("alloc::vec::Vec<u8>"), "alloc::vec::Vec<u8>");
/// ```
pub fn callable_name(type_name: &str) -> String {
    let plain = !type_name.is_empty()
        && type_name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == ':');
    if plain {
        match type_name.rsplit("::").next() {
            Some(last) => last.to_string(),
            None => type_name.to_string(),
        }
    } else {
        type_name.to_string()
    }
}

/// Returns the tag of a type: its name with every module path removed.
///
/// ```
/// use checkwise::names::type_tag;
/// assert_eq!(type_tag("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
/// assert_eq!(type_tag("&str"), "&str");
/// ```
pub fn type_tag(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len());
    let mut ident = String::new();
    let mut chars = type_name.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            if ident.is_empty() {
                //`<T as Trait>::Assoc`, keep the separator
                out.push_str("::");
            }
            ident.clear();
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(c);
        }
    }
    out.push_str(&ident);
    out
}

/// Splits a path on `::`, ignoring separators nested inside `<...>`.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

fn is_anonymous(segment: &str) -> bool {
    segment.starts_with("{{") || segment.is_empty()
}

/// `<app::Foo as core::fmt::Display>` -> `Foo`, `<app::Foo<u8>>` -> `Foo<u8>`
fn qualified_self_name(segment: &str) -> String {
    let inner = segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(segment);
    let self_type = inner.split(" as ").next().unwrap_or(inner);
    split_path(self_type)
        .last()
        .map(|s| s.to_string())
        .unwrap_or_else(|| self_type.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_functions_lose_their_module_path() {
        assert_eq!(function_display_name("checkwise::tests::works"), "works");
        assert_eq!(function_display_name("main"), "main");
    }

    #[test]
    fn methods_keep_their_type() {
        assert_eq!(
            function_display_name("app::net::Server::handle"),
            "Server::handle"
        );
        assert_eq!(
            function_display_name("<app::Foo as core::fmt::Display>::fmt"),
            "Foo::fmt"
        );
        assert_eq!(
            function_display_name("<app::Wrapper<u8>>::get"),
            "Wrapper<u8>::get"
        );
    }

    #[test]
    fn closures_stay_attached_to_their_owner() {
        assert_eq!(
            function_display_name("app::run::{{closure}}::{{closure}}"),
            "run::{{closure}}::{{closure}}"
        );
        assert_eq!(function_display_name("{{closure}}"), "{{closure}}");
    }

    #[test]
    fn callable_name_has_two_branches() {
        assert_eq!(callable_name("i32"), "i32");
        assert_eq!(callable_name("std::collections::HashMap"), "HashMap");
        assert_eq!(callable_name("&str"), "&str");
        assert_eq!(callable_name("dyn core::any::Any"), "dyn core::any::Any");
    }

    #[test]
    fn type_tags_drop_every_module_path() {
        assert_eq!(type_tag("i32"), "i32");
        assert_eq!(type_tag("alloc::string::String"), "String");
        assert_eq!(
            type_tag("(i32, core::option::Option<u8>)"),
            "(i32, Option<u8>)"
        );
        assert_eq!(type_tag("dyn core::any::Any"), "dyn Any");
        assert_eq!(
            type_tag("std::collections::hash::map::HashMap<&str, i32>"),
            "HashMap<&str, i32>"
        );
    }
}

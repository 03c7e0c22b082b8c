//! Namespace, class names and inheritance.

use crate::finder::{
    ClassNameFinder, InterfaceFinder, NamespaceFinder, ParentClassNameFinder, TokenFinder,
};
use crate::sequence::{explode, tokens_to_string, trim};
use crate::token::{Token, TokenProp};

use super::get_use_dependencies;

/// Name of the first namespace declared in the unit.
///
/// `None` when there is no declaration or it is the unnamed `namespace { }`.
pub fn get_namespace(tokens: &[Token]) -> Option<String> {
    let m = NamespaceFinder.find(tokens).into_iter().next()?;
    let declaration = m.tokens(tokens);
    let mut name = String::new();
    // Skip the keyword and the terminator.
    for token in &declaration[1..declaration.len() - 1] {
        if !token.is_trivia() {
            token.write_text(&mut name);
        }
    }
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Names of the classes declared in the unit, in source order.
///
/// With `with_namespace`, each name is prefixed by the unit's namespace.
pub fn get_class_names(tokens: &[Token], with_namespace: bool, finder: ClassNameFinder) -> Vec<String> {
    let names = tokens_of(&finder, tokens);
    match get_namespace(tokens) {
        Some(ns) if with_namespace => names
            .into_iter()
            .map(|name| format!("{}\\{}", ns, name))
            .collect(),
        _ => names,
    }
}

/// Name of the parent class, if the unit declares one.
///
/// With `full_name`, an import whose last segment equals the name wins;
/// otherwise the namespace is prepended.
pub fn get_parent_class_name(tokens: &[Token], full_name: bool) -> Option<String> {
    let name = tokens_of(&ParentClassNameFinder, tokens).into_iter().next()?;
    if !full_name {
        return Some(name);
    }
    let resolver = NameResolver::new(tokens);
    Some(resolver.qualify(&name))
}

/// Names listed after `implements` in the first class that has such a list.
pub fn get_interfaces(tokens: &[Token], full_name: bool) -> Vec<String> {
    let Some(m) = InterfaceFinder.find(tokens).into_iter().next() else {
        return Vec::new();
    };
    let names: Vec<String> = explode(&TokenProp::Literal(','), m.tokens(tokens), None)
        .iter()
        .map(|group| tokens_to_string(&trim(group, None)))
        .filter(|name| !name.is_empty())
        .collect();
    if !full_name {
        return names;
    }
    let resolver = NameResolver::new(tokens);
    names.iter().map(|name| resolver.qualify(name)).collect()
}

fn tokens_of(finder: &dyn TokenFinder, tokens: &[Token]) -> Vec<String> {
    crate::finder::matches_to_strings(&finder.find(tokens), tokens)
}

/// Qualifies short names against the unit's imports and namespace.
struct NameResolver {
    uses: Vec<String>,
    namespace: Option<String>,
}

impl NameResolver {
    fn new(tokens: &[Token]) -> Self {
        Self {
            uses: get_use_dependencies(tokens, true),
            namespace: get_namespace(tokens),
        }
    }

    fn qualify(&self, name: &str) -> String {
        let imported = self
            .uses
            .iter()
            .rfind(|dep| dep.rsplit('\\').next() == Some(name));
        if let Some(dep) = imported {
            return dep.clone();
        }
        match &self.namespace {
            Some(ns) => format!("{}\\{}", ns, name.trim_start_matches('\\')),
            None => name.to_string(),
        }
    }
}

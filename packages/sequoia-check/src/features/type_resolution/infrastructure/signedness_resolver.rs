/*
 * Signedness resolution
 *
 * Resolves a declared type through elaborated wrappers and typedef chains
 * to its underlying signedness classification. Pure function of
 * (type, module); the module's typedef table is the only lookup source.
 *
 * Alias cycles are malformed input: resolution terminates with
 * NotApplicable instead of looping.
 */

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::shared::models::{Module, Signedness, Type};

/// Follow elaborated wrappers and alias chains to the underlying type.
///
/// Returns None when the chain hits an unknown typedef name or revisits
/// an alias (cycle in the typedef table).
pub fn resolve_underlying<'a>(ty: &'a Type, module: &'a Module) -> Option<&'a Type> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut current = ty.strip_elaborated();
    while let Type::Alias(name) = current {
        if !seen.insert(name.as_str()) {
            trace!(alias = %name, "typedef cycle, classification unavailable");
            return None;
        }
        let Some(underlying) = module.typedef(name) else {
            trace!(alias = %name, "unknown typedef name, classification unavailable");
            return None;
        };
        current = underlying.strip_elaborated();
    }
    Some(current)
}

/// Resolve a type to its signedness classification.
///
/// Integers report their declared signedness; everything else, including
/// unresolvable aliases, is NotApplicable.
pub fn resolve_signedness(ty: &Type, module: &Module) -> Signedness {
    match resolve_underlying(ty, module) {
        Some(Type::Int { signedness, .. }) => *signedness,
        _ => Signedness::NotApplicable,
    }
}

/// Does this type denote a pointer once wrappers and aliases are stripped?
pub fn is_pointer_type(ty: &Type, module: &Module) -> bool {
    matches!(resolve_underlying(ty, module), Some(Type::Pointer(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_integer_signedness() {
        let module = Module::new("m");
        assert_eq!(
            resolve_signedness(&Type::unsigned(64), &module),
            Signedness::Unsigned
        );
        assert_eq!(
            resolve_signedness(&Type::signed(32), &module),
            Signedness::Signed
        );
    }

    #[test]
    fn test_non_integer_is_not_applicable() {
        let module = Module::new("m");
        assert_eq!(
            resolve_signedness(&Type::pointer_to(Type::signed(8)), &module),
            Signedness::NotApplicable
        );
        assert_eq!(
            resolve_signedness(&Type::Other, &module),
            Signedness::NotApplicable
        );
    }

    #[test]
    fn test_alias_chain_resolves() {
        let mut module = Module::new("m");
        module.add_typedef("size_t", Type::alias("__kernel_size_t"));
        module.add_typedef("__kernel_size_t", Type::unsigned(64));

        assert_eq!(
            resolve_signedness(&Type::alias("size_t"), &module),
            Signedness::Unsigned
        );
    }

    #[test]
    fn test_elaborated_wrapper_stripped_before_alias() {
        let mut module = Module::new("m");
        module.add_typedef("loff_t", Type::elaborated(Type::signed(64)));

        assert_eq!(
            resolve_signedness(&Type::elaborated(Type::alias("loff_t")), &module),
            Signedness::Signed
        );
    }

    #[test]
    fn test_alias_cycle_terminates() {
        let mut module = Module::new("m");
        module.add_typedef("a", Type::alias("b"));
        module.add_typedef("b", Type::alias("a"));

        assert_eq!(
            resolve_signedness(&Type::alias("a"), &module),
            Signedness::NotApplicable
        );
    }

    #[test]
    fn test_unknown_alias_is_not_applicable() {
        let module = Module::new("m");
        assert_eq!(
            resolve_signedness(&Type::alias("mystery_t"), &module),
            Signedness::NotApplicable
        );
    }

    #[test]
    fn test_pointer_behind_alias() {
        let mut module = Module::new("m");
        module.add_typedef("charp", Type::pointer_to(Type::signed(8)));

        assert!(is_pointer_type(&Type::alias("charp"), &module));
        assert!(!is_pointer_type(&Type::signed(32), &module));
    }
}

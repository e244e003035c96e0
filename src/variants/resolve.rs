//! Variant value resolution.
//!
//! For one declared variant, turn the caller's value into the classes
//! registered for it:
//!
//! 1. An [`VariantValue::OptOut`] value contributes nothing, default included.
//! 2. A responsive value adds `"<condition>:"`-prefixed classes for each
//!    condition except `initial`, whose value replaces the default key.
//! 3. The plain lookup always runs: the caller's key, or the (possibly
//!    `initial`-replaced) default key when the caller gave none or gave a key
//!    the variant does not declare.
//!
//! Plain classes come first, then the prefixed ones in condition order.

use tracing::trace;

use crate::ordered_map::OrderedMap;
use crate::spec::model::{ClassValue, Specification, Variant, BASE_SLOT};
use crate::tokens::{key_of, TokenSet, VariantScalar};
use crate::variants::value::{Props, VariantValue, INITIAL};

/// Resolves variant values for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    variants: &'a OrderedMap<Variant>,
    defaults: &'a OrderedMap<VariantScalar>,
    props: &'a Props,
}

impl<'a> Resolver<'a> {
    pub fn new(spec: &'a Specification, props: &'a Props) -> Self {
        Self {
            variants: spec.variants(),
            defaults: spec.default_variants(),
            props,
        }
    }

    /// Classes for variant `name`, optionally narrowed to `slot`.
    ///
    /// Returns `None` when the variant is undeclared or empty, when the caller
    /// opted out, or when nothing matched.
    pub fn resolve(&self, name: &str, slot: Option<&str>) -> Option<Vec<String>> {
        let variant = self.variants.get(name).filter(|v| !v.is_empty())?;

        let mut default_key = self.defaults.get(name).map(key_of);
        let mut conditional = Vec::new();

        let literal_key = match self.props.get(name) {
            Some(VariantValue::OptOut) => return None,
            Some(VariantValue::Plain(value)) => Some(key_of(value)),
            Some(VariantValue::Responsive(conditions)) => {
                for (condition, value) in conditions.iter() {
                    let key = key_of(value);
                    if condition == INITIAL {
                        default_key = Some(key);
                        continue;
                    }
                    if let Some(set) = variant.get(&key).and_then(|c| scoped(c, slot)) {
                        conditional.extend(set.prefixed(condition));
                    }
                }
                None
            }
            None => None,
        };

        let plain = literal_key
            .as_deref()
            .and_then(|key| variant.get(key))
            .or_else(|| default_key.as_deref().and_then(|key| variant.get(key)));

        let mut tokens = plain
            .and_then(|classes| scoped(classes, slot))
            .map(TokenSet::tokens)
            .unwrap_or_default();
        tokens.extend(conditional);

        trace!(variant = name, slot, tokens = tokens.len(), "resolved variant");
        (!tokens.is_empty()).then_some(tokens)
    }

    /// Classes of every declared variant, in declaration order.
    pub fn resolve_all(&self, slot: Option<&str>) -> Vec<String> {
        self.variants
            .keys()
            .filter_map(|name| self.resolve(name, slot))
            .flatten()
            .collect()
    }
}

/// Narrow a class value to what applies for `slot`.
///
/// Whole-component classes apply to the single-region output and to the
/// `base` slot. Per-slot classes apply only to their own slot.
fn scoped<'c>(classes: &'c ClassValue, slot: Option<&str>) -> Option<&'c TokenSet> {
    match (classes, slot) {
        (ClassValue::Tokens(set), None | Some(BASE_SLOT)) => Some(set),
        (ClassValue::Tokens(_), Some(_)) => None,
        (ClassValue::Slots(slots), Some(slot)) => slots.get(slot),
        (ClassValue::Slots(_), None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> Specification {
        Specification::new()
            .variant(
                "color",
                Variant::new()
                    .value("red", "text-red-500")
                    .value("blue", "text-blue-500"),
            )
            .variant(
                "isBig",
                Variant::new().value(true, "text-5xl").value(false, "text-2xl"),
            )
            .variant(
                "size",
                Variant::new()
                    .slot_value("sm", [("base", "p-1"), ("icon", "h-3 w-3")])
                    .slot_value("lg", [("base", "p-4"), ("icon", "h-6 w-6")]),
            )
            .variant("empty", Variant::new())
            .default_variant("color", "red")
            .default_variant("size", "sm")
    }

    fn resolve(props: &Props, name: &str, slot: Option<&str>) -> Option<Vec<String>> {
        let spec = spec();
        Resolver::new(&spec, props).resolve(name, slot)
    }

    // ── Plain values ─────────────────────────────────────────────────

    #[test]
    fn default_used_when_absent() {
        assert_eq!(resolve(&Props::new(), "color", None), Some(vec!["text-red-500".into()]));
    }

    #[test]
    fn explicit_value_overrides_default() {
        let props = Props::new().set("color", "blue");
        assert_eq!(resolve(&props, "color", None), Some(vec!["text-blue-500".into()]));
    }

    #[test]
    fn false_selects_its_own_branch() {
        let props = Props::new().set("isBig", false);
        assert_eq!(resolve(&props, "isBig", None), Some(vec!["text-2xl".into()]));
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let props = Props::new().set("color", "purple");
        assert_eq!(resolve(&props, "color", None), Some(vec!["text-red-500".into()]));
    }

    #[test]
    fn no_value_and_no_default_is_none() {
        assert_eq!(resolve(&Props::new(), "isBig", None), None);
    }

    #[test]
    fn opt_out_skips_default() {
        let props = Props::new().opt_out("color");
        assert_eq!(resolve(&props, "color", None), None);
    }

    #[test]
    fn undeclared_or_empty_variant_is_none() {
        let props = Props::new().set("empty", "x").set("nope", "y");
        assert_eq!(resolve(&props, "empty", None), None);
        assert_eq!(resolve(&props, "nope", None), None);
    }

    // ── Responsive values ────────────────────────────────────────────

    #[test]
    fn responsive_initial_and_breakpoint() {
        let props = Props::new().responsive("isBig", [("initial", "false"), ("md", "true")]);
        assert_eq!(
            resolve(&props, "isBig", None),
            Some(vec!["text-2xl".into(), "md:text-5xl".into()])
        );
    }

    #[test]
    fn responsive_without_initial_keeps_default() {
        let props = Props::new().responsive("color", [("sm", "blue"), ("lg", "red")]);
        assert_eq!(
            resolve(&props, "color", None),
            Some(vec![
                "text-red-500".into(),
                "sm:text-blue-500".into(),
                "lg:text-red-500".into(),
            ])
        );
    }

    #[test]
    fn responsive_unknown_condition_value_is_skipped() {
        let props = Props::new().responsive("color", [("md", "purple")]);
        assert_eq!(resolve(&props, "color", None), Some(vec!["text-red-500".into()]));
    }

    #[test]
    fn responsive_per_slot() {
        let props = Props::new().responsive("size", [("initial", "sm"), ("md", "lg")]);
        assert_eq!(
            resolve(&props, "size", Some("icon")),
            Some(vec![
                "h-3".into(),
                "w-3".into(),
                "md:h-6".into(),
                "md:w-6".into(),
            ])
        );
        assert_eq!(
            resolve(&props, "size", Some("base")),
            Some(vec!["p-1".into(), "md:p-4".into()])
        );
    }

    // ── Slot scoping ─────────────────────────────────────────────────

    #[test]
    fn plain_tokens_only_reach_base_slot() {
        let props = Props::new();
        assert_eq!(resolve(&props, "color", Some("base")), Some(vec!["text-red-500".into()]));
        assert_eq!(resolve(&props, "color", Some("icon")), None);
    }

    #[test]
    fn slot_tokens_never_reach_single_region() {
        assert_eq!(resolve(&Props::new(), "size", None), None);
    }

    #[test]
    fn missing_slot_in_value_is_none() {
        assert_eq!(resolve(&Props::new(), "size", Some("label")), None);
    }

    #[test]
    fn resolve_all_in_declaration_order() {
        let spec = spec();
        let props = Props::new().set("isBig", true);
        let resolver = Resolver::new(&spec, &props);
        assert_eq!(resolver.resolve_all(None), vec!["text-red-500", "text-5xl"]);
        assert_eq!(resolver.resolve_all(Some("base")), vec!["text-red-500", "text-5xl", "p-1"]);
    }
}

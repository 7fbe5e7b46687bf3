//! Property-based tests for IR types.
//!
//! Round-trip, ordering and partition properties of the exchange format,
//! checked with proptest over generated modules.

#[cfg(test)]
mod tests {
    use crate::codec;
    use crate::ir::{Module, Symbol, SymbolKind};
    use proptest::collection;
    use proptest::prelude::*;

    // ==========================================================================
    // Strategies
    // ==========================================================================

    fn arb_name() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_]{0,20}"
    }

    fn arb_kind() -> impl Strategy<Value = SymbolKind> {
        prop_oneof![
            4 => Just(SymbolKind::Function),
            4 => Just(SymbolKind::Variable),
            1 => "[a-z]{1,10}".prop_map(SymbolKind::from),
        ]
    }

    /// Doc and sig text, including empty strings, quotes, newlines and non-ASCII.
    fn arb_text() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => Just(String::new()),
            3 => "[ -~]{0,40}",
            1 => "[a-z \n\"\\\\é→]{0,30}",
        ]
    }

    fn arb_symbol_with(kind: impl Strategy<Value = SymbolKind>) -> impl Strategy<Value = Symbol> {
        (arb_name(), kind, arb_text(), arb_text())
            .prop_map(|(name, kind, doc, sig)| Symbol::new(name, kind, doc, sig).unwrap())
    }

    fn arb_module() -> impl Strategy<Value = Module> {
        (
            "[a-z][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,8}){0,3}",
            collection::vec(arb_symbol_with(arb_kind()), 0..8),
            collection::vec(arb_symbol_with(arb_kind()), 0..8),
        )
            .prop_map(|(name, functions, variables)| {
                let mut module = Module::new(name);
                for f in functions {
                    module.add_function(f);
                }
                for v in variables {
                    module.add_variable(v);
                }
                module
            })
    }

    // ==========================================================================
    // Properties
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_round_trip_compact(module in arb_module()) {
            let json = codec::to_string(&module).unwrap();
            let decoded = codec::from_str(&json).unwrap();
            prop_assert_eq!(decoded, module);
        }

        #[test]
        fn prop_round_trip_pretty(module in arb_module()) {
            let json = codec::to_string_pretty(&module).unwrap();
            let decoded = codec::from_str(&json).unwrap();
            prop_assert_eq!(decoded, module);
        }

        #[test]
        fn prop_add_function_preserves_order(
            symbols in collection::vec(arb_symbol_with(Just(SymbolKind::Function)), 0..16)
        ) {
            let mut module = Module::new("m");
            for s in &symbols {
                module.add_function(s.clone());
            }
            prop_assert_eq!(module.functions(), symbols.as_slice());
            prop_assert!(module.variables().is_empty());
        }

        #[test]
        fn prop_add_variable_preserves_order(
            symbols in collection::vec(arb_symbol_with(Just(SymbolKind::Variable)), 0..16)
        ) {
            let mut module = Module::new("m");
            for s in &symbols {
                module.add_variable(s.clone());
            }
            prop_assert_eq!(module.variables(), symbols.as_slice());
            prop_assert!(module.functions().is_empty());
        }

        #[test]
        fn prop_interleaved_adds_keep_partitions_apart(
            ops in collection::vec((any::<bool>(), arb_symbol_with(arb_kind())), 0..16)
        ) {
            let mut module = Module::new("m");
            let mut expected_functions = Vec::new();
            let mut expected_variables = Vec::new();
            for (is_function, symbol) in ops {
                if is_function {
                    expected_functions.push(symbol.clone());
                    module.add_function(symbol);
                } else {
                    expected_variables.push(symbol.clone());
                    module.add_variable(symbol);
                }
            }
            prop_assert_eq!(module.functions(), expected_functions.as_slice());
            prop_assert_eq!(module.variables(), expected_variables.as_slice());
        }

        #[test]
        fn prop_encoding_always_has_every_key(module in arb_module()) {
            let value: serde_json::Value =
                serde_json::from_str(&codec::to_string(&module).unwrap()).unwrap();
            let object = value.as_object().unwrap();
            prop_assert_eq!(object.len(), 3);
            for key in ["name", "functions", "variables"] {
                prop_assert!(object.contains_key(key));
            }
            for partition in ["functions", "variables"] {
                for symbol in object[partition].as_array().unwrap() {
                    let symbol = symbol.as_object().unwrap();
                    prop_assert_eq!(symbol.len(), 4);
                    for key in ["name", "type", "doc", "sig"] {
                        prop_assert!(symbol[key].is_string());
                    }
                }
            }
        }

        #[test]
        fn prop_consistency_check_clean_for_unique_names(
            names in collection::hash_set(arb_name(), 0..12)
        ) {
            let mut module = Module::new("m");
            for (i, name) in names.into_iter().enumerate() {
                if i % 2 == 0 {
                    module.add_function(Symbol::function(name, "", "()").unwrap());
                } else {
                    module.add_variable(Symbol::variable(name, "", "int").unwrap());
                }
            }
            prop_assert!(module.check_consistency().is_clean());
        }
    }
}

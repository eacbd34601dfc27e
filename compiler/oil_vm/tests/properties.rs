//! Property tests for coercion and the character instructions.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use oil_vm::{is_strict_integer, Cell, Console, Vm, VmConfig};
use proptest::prelude::*;

/// Run `program` with `value` on the tape line at address 100 and return
/// what the program printed, reclassified as a cell.
fn printed(program: &[i64], value: &str) -> Cell {
    let mut lines: Vec<String> = program.iter().map(ToString::to_string).collect();
    lines.resize(100, "0".to_owned());
    lines.push(value.to_owned());

    let mut vm = Vm::with_console(VmConfig::default(), Console::buffer());
    vm.run_source(&lines.join("\n"), "").unwrap();
    Cell::classify(vm.console().output())
}

proptest! {
    #[test]
    fn every_i64_is_a_strict_integer(value in any::<i64>()) {
        let text = value.to_string();
        prop_assert!(is_strict_integer(&text));
        prop_assert_eq!(Cell::classify(text), Cell::Int(value));
    }

    #[test]
    fn leading_zeros_stay_strings(digits in "0[0-9]{1,8}") {
        prop_assert!(!is_strict_integer(&digits));
        prop_assert_eq!(Cell::classify(digits.clone()).intify(), 0);
        prop_assert_eq!(Cell::classify(digits.clone()), Cell::Str(digits));
    }

    #[test]
    fn intify_agrees_with_classify(text in "-?[0-9a-z]{0,6}") {
        let expected = match Cell::classify(text.clone()) {
            Cell::Int(value) => value,
            Cell::Str(_) => 0,
        };
        prop_assert_eq!(Cell::Str(text).intify(), expected);
    }

    #[test]
    fn implode_reverses_explode(text in "[a-z0-9 .!-]{1,12}") {
        let length = i64::try_from(text.chars().count()).unwrap();
        // explode 100 -> 200; implode 201 len -> 300; output 300; quit
        let imploded = printed(&[12, 100, 200, 13, 201, length, 300, 4, 300, 3], &text);
        prop_assert_eq!(imploded, Cell::classify(text));
    }

    #[test]
    fn chr_implode_reverses_ord_explode(text in "[^\n\r#]{1,12}") {
        let length = i64::try_from(text.chars().count()).unwrap();
        // ord_explode 100 -> 200; chr_implode 201 len -> 300; output 300; quit
        let rebuilt = printed(&[16, 100, 200, 17, 201, length, 300, 4, 300, 3], &text);
        prop_assert_eq!(rebuilt, Cell::classify(text));
    }
}

mod common;
use common::*;
use proptest::prelude::*;
use sbasic::lang::{ErrorCode, Lexer};
use sbasic::mach::{evaluate, raise, Labels, Var};

fn eval(s: &str) -> Result<f64, ErrorCode> {
    evaluate(&mut Lexer::new(s), &Var::new()).map_err(|e| e.code())
}

proptest! {
    #[test]
    fn arithmetic_matches_f64(a in 0u32..10_000, b in 1u32..10_000, c in 0u32..100) {
        let (x, y, z) = (a as f64, b as f64, c as f64);
        prop_assert_eq!(eval(&format!("{}+{}*{}", a, b, c)), Ok(x + y * z));
        prop_assert_eq!(eval(&format!("({}-{})/{}", a, c, b)), Ok((x - z) / y));
        prop_assert_eq!(eval(&format!("{}%{}", a, b)), Ok(x % y));
        prop_assert_eq!(eval(&format!("{}-{}-{}", a, b, c)), Ok(x - y - z));
    }

    #[test]
    fn power_is_repeated_multiplication(base in -20i32..20, exponent in 0u32..12) {
        let mut expected = if exponent == 0 { 1.0 } else { base as f64 };
        for _ in 1..exponent {
            expected *= base as f64;
        }
        prop_assert_eq!(eval(&format!("({})^{}", base, exponent)), Ok(expected));
        let truncated = if exponent == 0 { base as f64 } else { expected };
        prop_assert_eq!(raise(base as f64, exponent as f64 + 0.75), truncated);
    }

    #[test]
    fn division_by_zero_always_fails(a in -1_000_000i64..1_000_000, op in prop_oneof![Just('/'), Just('%')]) {
        prop_assert_eq!(eval(&format!("({}){}0", a, op)), Err(ErrorCode::DivisionByZero));
        prop_assert_eq!(eval(&format!("({}){}(1-1)", a, op)), Err(ErrorCode::DivisionByZero));
    }

    #[test]
    fn label_build_is_idempotent(labels in proptest::collection::btree_set(1u32..1000, 1..20)) {
        let source: String = labels.iter().map(|l| format!("{} PRINT {}\n", l, l)).collect();
        let mut lex = Lexer::new(&source);
        let first = Labels::build(&mut lex).unwrap();
        let second = Labels::build(&mut lex).unwrap();
        prop_assert_eq!(first.len(), labels.len());
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn repeated_label_is_rejected(label in 1u32..1000, gap in 0usize..5) {
        let mut source = format!("{} END\n", label);
        for i in 0..gap {
            source.push_str(&format!("{} END\n", 1000 + i));
        }
        source.push_str(&format!("{} END\n", label));
        prop_assert_eq!(fail(&source), Some(ErrorCode::DuplicateLabel));
    }
}

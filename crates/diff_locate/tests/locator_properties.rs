//! Property tests for the diff locators
//!
//! Both locators must describe the difference exactly: splicing the located
//! replacement into the old text has to give back the new text, in every
//! offset unit.

use diff_locate::{
    AffixLocator, DiffLocator, DiffOutcome, MyersLocator, OffsetUnit, MAX_COALESCE_RADIUS,
};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", " ", "\n", "é", "e\u{301}", "🦀", "🇳🇿"]),
        0..24,
    )
    .prop_map(|pieces| pieces.concat())
}

fn unit() -> impl Strategy<Value = OffsetUnit> {
    prop::sample::select(vec![OffsetUnit::Chars, OffsetUnit::Graphemes, OffsetUnit::Utf16])
}

fn check_splice(locator: &dyn DiffLocator, old: &str, new: &str, unit: OffsetUnit) -> Result<(), TestCaseError> {
    match locator.locate(old, new, unit) {
        DiffOutcome::Identical => prop_assert_eq!(old, new),
        DiffOutcome::Coalesced(diff) => {
            prop_assert!(diff.region.check_bounds(unit.measure(old)).is_ok());
            prop_assert_eq!(unit.measure(&diff.replacement), diff.region.replacement_len());
            prop_assert_eq!(diff.apply_to(old, unit), new);
        }
        DiffOutcome::NotCoalescible { regions } => {
            prop_assert_ne!(old, new);
            prop_assert!(regions > 1);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn affix_diff_splices_back(old in text(), new in text(), unit in unit()) {
        check_splice(&AffixLocator, &old, &new, unit)?;
    }

    #[test]
    fn myers_diff_splices_back(old in text(), new in text(), unit in unit(), radius in 0usize..4) {
        check_splice(&MyersLocator::new(radius), &old, &new, unit)?;
    }

    #[test]
    fn affix_never_rejects(old in text(), new in text(), unit in unit()) {
        let outcome = AffixLocator.locate(&old, &new, unit);
        prop_assert!(
            !matches!(outcome, DiffOutcome::NotCoalescible { .. }),
            "affix locator rejected {:?}",
            outcome
        );
    }

    #[test]
    fn single_splice_is_found_by_both(
        prefix in text(),
        removed in text(),
        inserted in text(),
        suffix in text(),
    ) {
        let old = format!("{prefix}{removed}{suffix}");
        let new = format!("{prefix}{inserted}{suffix}");
        let affix = AffixLocator.locate(&old, &new, OffsetUnit::Chars);
        let myers = MyersLocator::new(MAX_COALESCE_RADIUS).locate(&old, &new, OffsetUnit::Chars);
        prop_assert_eq!(affix, myers);
    }
}

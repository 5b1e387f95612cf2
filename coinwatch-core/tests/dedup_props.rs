use coinwatch_core::{HISTORY_CAP, remember};
use coinwatch_types::RecentSearch;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_item() -> impl Strategy<Value = RecentSearch> {
    (
        "[a-z]{1,8}",
        proptest::option::of("[A-Z][a-z]{0,7}"),
        proptest::option::of(1u32..10_000),
    )
        .prop_map(|(symbol, name, rank)| RecentSearch {
            id: None,
            symbol,
            name,
            thumb: None,
            market_cap_rank: rank,
        })
}

proptest! {
    #[test]
    fn history_never_exceeds_the_cap(items in proptest::collection::vec(arb_item(), 0..40)) {
        let mut history = Vec::new();
        for item in items {
            remember(&mut history, item);
            prop_assert!(history.len() <= HISTORY_CAP);
        }
    }

    #[test]
    fn identities_stay_unique(items in proptest::collection::vec(arb_item(), 0..40)) {
        let mut history = Vec::new();
        for item in items {
            remember(&mut history, item);
        }
        let identities: HashSet<_> = history.iter().map(|item| item.identity().to_owned()).collect();
        prop_assert_eq!(identities.len(), history.len());
    }

    #[test]
    fn reinserting_an_existing_identity_changes_nothing(
        items in proptest::collection::vec(arb_item(), 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut history = Vec::new();
        for item in items {
            remember(&mut history, item);
        }
        prop_assume!(!history.is_empty());
        let duplicate = history[pick.index(history.len())].clone();
        let before = history.clone();
        let inserted = remember(&mut history, duplicate);
        prop_assert!(!inserted);
        prop_assert_eq!(history, before);
    }

    #[test]
    fn distinct_inserts_keep_newest_last_and_evict_oldest(names in proptest::collection::vec("[a-z]{1,8}", 4..10)) {
        let distinct: Vec<String> = {
            let mut seen = HashSet::new();
            names.into_iter().filter(|n| seen.insert(n.clone())).collect()
        };
        prop_assume!(distinct.len() >= 4);

        let mut history = Vec::new();
        for name in &distinct {
            let inserted = remember(&mut history, RecentSearch {
                id: None,
                symbol: name.clone(),
                name: Some(name.clone()),
                thumb: None,
                market_cap_rank: None,
            });
            prop_assert!(inserted);
        }

        let kept: Vec<_> = history.iter().filter_map(|item| item.name.as_deref()).collect();
        let expected: Vec<_> = distinct[distinct.len() - HISTORY_CAP..]
            .iter()
            .map(String::as_str)
            .collect();
        prop_assert_eq!(kept, expected);
    }
}

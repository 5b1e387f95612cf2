use coinwatch::{
    HIGHLIGHT_ROW_CAP, HighlightCategory, Row, SearchState, Section, TRENDING_ROW_CAP,
    TrendingCategory,
};
use coinwatch_mock::fixtures;
use coinwatch_types::{HighlightPayload, TrendingPayload};
use proptest::prelude::*;

proptest! {
    #[test]
    fn collapsed_trending_coins_cap_out_with_an_expand_trigger(
        count in 0usize..40,
        expanded: bool,
    ) {
        let state = SearchState {
            trending: TrendingPayload {
                coins: fixtures::coins(count),
                ..TrendingPayload::default()
            },
            is_trending_expanded: expanded,
            ..SearchState::default()
        };

        let rows = state.rows(Section::Trending(TrendingCategory::Coin));
        if expanded {
            prop_assert_eq!(rows.len(), count);
            prop_assert!(!rows.contains(&Row::LoadMore));
        } else {
            prop_assert_eq!(rows.len(), count.min(TRENDING_ROW_CAP) + 1);
            prop_assert_eq!(rows.last(), Some(&Row::LoadMore));
        }
    }

    #[test]
    fn highlight_rows_never_exceed_the_cap(
        gainers in 0usize..40,
        losers in 0usize..40,
    ) {
        let state = SearchState {
            highlight: HighlightPayload {
                top_gainers: fixtures::coins(gainers),
                top_losers: fixtures::coins(losers),
                ..HighlightPayload::default()
            },
            ..SearchState::default()
        };

        prop_assert_eq!(
            state.rows(Section::Highlight(HighlightCategory::TopGainers)).len(),
            gainers.min(HIGHLIGHT_ROW_CAP)
        );
        prop_assert_eq!(
            state.rows(Section::Highlight(HighlightCategory::TopLosers)).len(),
            losers.min(HIGHLIGHT_ROW_CAP)
        );
    }

    #[test]
    fn expanded_sub_categories_other_than_coins_are_uncapped(count in 0usize..40) {
        let state = SearchState {
            trending: TrendingPayload {
                nfts: (0..count).map(|index| fixtures::nft(&format!("nft-{index}"))).collect(),
                categories: (0..count)
                    .map(|index| fixtures::category(index as u64, &format!("cat-{index}")))
                    .collect(),
                ..TrendingPayload::default()
            },
            ..SearchState::default()
        };

        prop_assert_eq!(state.rows(Section::Trending(TrendingCategory::Nft)).len(), count);
        prop_assert_eq!(
            state.rows(Section::Trending(TrendingCategory::Category)).len(),
            count
        );
    }
}

//! Property tests for the table engine.

use std::collections::HashSet;

use proptest::prelude::*;

use ippis_lib::model::{Record, RecordId};
use ippis_lib::table::{ColumnSpec, FilterSpec, TableEngine};

const CATEGORIES: [&str; 4] = ["Computers", "Furniture", "Vehicles", "Printers"];
const STATUSES: [&str; 3] = ["Active", "Retired", "In Maintenance"];

fn engine(rows: Vec<Record>) -> TableEngine<Record> {
    let columns = vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("category", "Category").sortable(),
        ColumnSpec::new("status", "Status"),
        ColumnSpec::new("rank", "Rank").sortable(),
    ];
    let filters = vec![
        FilterSpec::select("category", "Category").options(CATEGORIES),
        FilterSpec::select("status", "Status").options(STATUSES),
    ];
    TableEngine::new(rows, columns, filters)
}

fn rows_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0..CATEGORIES.len(), 0..STATUSES.len(), 0i64..5, "[a-e]{1,6}"), 0..max)
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (category, status, rank, name))| {
                    Record::new(i as i64)
                        .set("name", name)
                        .set("category", CATEGORIES[category])
                        .set("status", STATUSES[status])
                        .set("rank", rank)
                })
                .collect()
        })
}

fn visible_ids(engine: &TableEngine<Record>) -> Vec<RecordId> {
    engine
        .view()
        .rows()
        .iter()
        .map(|r| r.record_id().clone())
        .collect()
}

fn page_size() -> impl Strategy<Value = usize> {
    prop::sample::select(vec![10usize, 20, 50, 100])
}

proptest::proptest! {
    #[test]
    fn prop_search_is_idempotent(rows in rows_strategy(60), term in "[a-e]{0,3}") {
        let once = engine(rows.clone());
        once.set_search_term(term.clone());

        let repeated = engine(rows);
        repeated.set_search_term(term.clone());
        repeated.set_search_term(term.clone());
        repeated.set_search_term(term);

        prop_assert_eq!(visible_ids(&once), visible_ids(&repeated));
    }

    #[test]
    fn prop_filters_commute(
        rows in rows_strategy(80),
        category in prop::sample::select(CATEGORIES.to_vec()),
        status in prop::sample::select(STATUSES.to_vec()),
    ) {
        let forward = engine(rows.clone());
        forward.set_filter("category", category);
        forward.set_filter("status", status);

        let backward = engine(rows);
        backward.set_filter("status", status);
        backward.set_filter("category", category);

        prop_assert_eq!(forward.filtered_count(), backward.filtered_count());
        prop_assert_eq!(visible_ids(&forward), visible_ids(&backward));
    }

    #[test]
    fn prop_pages_cover_filtered_rows_once(
        rows in rows_strategy(250),
        per_page in page_size(),
        category in prop::option::of(prop::sample::select(CATEGORIES.to_vec())),
    ) {
        let engine = engine(rows);
        prop_assert!(engine.set_items_per_page(per_page));
        if let Some(category) = category {
            engine.set_filter("category", category);
        }

        let mut seen = Vec::new();
        for page in 1..=engine.total_pages() {
            engine.set_page(page);
            let view = engine.view();
            prop_assert!(view.len() <= per_page);
            seen.extend(view.rows().iter().map(|r| r.record_id().clone()));
        }

        let unique: HashSet<_> = seen.iter().cloned().collect();
        prop_assert_eq!(unique.len(), seen.len());
        prop_assert_eq!(seen.len(), engine.filtered_count());
    }

    #[test]
    fn prop_sort_is_stable(rows in rows_strategy(100)) {
        let engine = engine(rows);
        engine.set_items_per_page(100);

        // Ids follow insertion order, so ties must keep ids ascending.
        for clicks in 1..=2 {
            engine.clear_sort();
            for _ in 0..clicks {
                engine.toggle_sort("rank");
            }
            let view = engine.view();
            for pair in view.rows().windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if a.get("rank") == b.get("rank") {
                    prop_assert!(a.record_id() < b.record_id());
                }
            }
        }
    }

    #[test]
    fn prop_page_requests_clamp(rows in rows_strategy(120), per_page in page_size(), past in 1usize..500) {
        let engine = engine(rows);
        engine.set_items_per_page(per_page);
        let total = engine.total_pages();

        prop_assert_eq!(engine.set_page(0), 1);
        prop_assert_eq!(engine.set_page(total + past), total);
        prop_assert_eq!(engine.view().current_page(), total);
    }
}

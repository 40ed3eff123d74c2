use joyas_core::{
    BindValue, FilterRequest, InventoryItem, ListingParams, ListingRequest, OrderBy, QueryBuilder,
    QueryError, ResponseShaper, SortField,
};
use proptest::prelude::*;

fn arb_order_by() -> impl Strategy<Value = OrderBy> {
    (0..SortField::ALL.len(), any::<bool>()).prop_map(|(i, desc)| {
        let raw = format!(
            "{}_{}",
            SortField::ALL[i].column(),
            if desc { "DESC" } else { "ASC" }
        );
        OrderBy::parse(&raw).unwrap()
    })
}

fn arb_item() -> impl Strategy<Value = InventoryItem> {
    (any::<i32>(), "[a-zA-Z ]{0,20}", "[a-z]{1,10}", "[a-z]{1,10}", any::<i32>(), any::<i32>())
        .prop_map(|(id, name, category, metal, price, stock)| InventoryItem {
            id,
            name,
            category,
            metal,
            price,
            stock,
        })
}

fn arb_filter() -> impl Strategy<Value = FilterRequest> {
    (
        proptest::option::of(any::<i64>()),
        proptest::option::of(any::<i64>()),
        proptest::option::of("[a-z]{1,12}"),
        proptest::option::of("[a-z]{1,12}"),
    )
        .prop_map(|(price_max, price_min, category, metal)| FilterRequest {
            price_max,
            price_min,
            category,
            metal,
        })
}

proptest! {
    /// Property: offset is exactly (page - 1) * limit
    #[test]
    fn prop_offset_matches_formula(limit in 1i64..10_000, page in 1i64..10_000, order in arb_order_by()) {
        let req = ListingRequest::new(limit, page, order).unwrap();
        let query = QueryBuilder::listing(&req);

        prop_assert_eq!(req.offset(), (page - 1) * limit);
        prop_assert_eq!(
            query.values,
            vec![BindValue::Int(limit), BindValue::Int((page - 1) * limit)]
        );
    }

    /// Property: sort fields outside the allow-list never produce a query
    #[test]
    fn prop_unknown_sort_field_rejected(field in "[a-zA-Z0-9;' -]{1,16}", desc in any::<bool>()) {
        prop_assume!(SortField::from_name(&field).is_none());

        let raw = format!("{}_{}", field, if desc { "DESC" } else { "ASC" });
        let params = ListingParams {
            order_by: Some(raw.clone()),
            ..Default::default()
        };

        let result = QueryBuilder::listing_from_params(&params);
        prop_assert_eq!(result, Err(QueryError::InvalidSortField { value: raw }));
    }

    /// Property: one bound value per present filter, in fixed order
    #[test]
    fn prop_filter_values_follow_fixed_order(req in arb_filter()) {
        let query = QueryBuilder::filtered(&req);

        let mut expected = Vec::new();
        if let Some(max) = req.price_max {
            expected.push(BindValue::Int(max));
        }
        if let Some(min) = req.price_min {
            expected.push(BindValue::Int(min));
        }
        if let Some(category) = &req.category {
            expected.push(BindValue::Text(category.clone()));
        }
        if let Some(metal) = &req.metal {
            expected.push(BindValue::Text(metal.clone()));
        }

        prop_assert_eq!(query.values.len(), req.len());
        prop_assert_eq!(&query.values, &expected);
        prop_assert_eq!(query.sql.contains("WHERE"), !req.is_empty());

        // $k is present for every bound value, and nothing beyond
        for k in 1..=expected.len() {
            let placeholder = format!("${}", k);
            prop_assert!(query.sql.contains(&placeholder));
        }
        let past_end = format!("${}", expected.len() + 1);
        prop_assert!(!query.sql.contains(&past_end));
    }

    /// Property: total equals input length and every href ends with the item id
    #[test]
    fn prop_envelope_mirrors_input(items in prop::collection::vec(arb_item(), 0..50)) {
        let envelope = ResponseShaper::shape(&items);

        prop_assert_eq!(envelope.total, items.len());
        prop_assert_eq!(envelope.results.len(), items.len());
        for (link, item) in envelope.results.iter().zip(&items) {
            prop_assert_eq!(link.id, item.id);
            let suffix = format!("/{}", item.id);
            prop_assert!(link.href.ends_with(&suffix));
        }
    }
}

#[test]
fn empty_filter_request_is_unfiltered() {
    let query = QueryBuilder::filtered(&FilterRequest::default());
    assert_eq!(query.sql, "SELECT * FROM inventario");
    assert!(query.values.is_empty());
}

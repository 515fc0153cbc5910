use order_ledger::collection::{total_cost_of, OrderCollection};
use order_ledger::model::OrderEntry;
use order_ledger::ErrorKind;

fn numbers(orders: &[&OrderEntry]) -> Vec<String> {
    orders.iter().map(|o| o.order_number.clone()).collect()
}

/// Six orders spread over Q1 2024, two of them cancelled.
fn quarter() -> OrderCollection {
    let mut orders = OrderCollection::new();
    orders.add(OrderEntry::new("100-1", "Echo Dot", "01/15/2024", 2.5));
    orders.add(
        OrderEntry::new("100-2", "Kindle Paperwhite", "01/31/2024", 8.75)
            .with_cancelled_date("02/01/2024"),
    );
    orders.add(OrderEntry::new("100-3", "USB-C Cable", "2/1/2024", 0.9));
    orders.add(OrderEntry::new("100-4", "ECHO Show 8", "02/14/2024", 6.0));
    orders.add(
        OrderEntry::new("100-5", "Desk Lamp", "03/02/2024", 1.25).with_cancelled_date("03/03/2024"),
    );
    orders.add(OrderEntry::new("100-6", "Fire TV Stick", "03/31/2024", 3.0));
    orders
}

#[test]
fn get_by_number_returns_added_record() {
    let orders = quarter();
    let found = orders.get_by_number("100-4").expect("order should exist");
    assert_eq!(found, &OrderEntry::new("100-4", "ECHO Show 8", "02/14/2024", 6.0));
    assert!(orders.get_by_number("999-9").is_none());
}

#[test]
fn get_by_number_returns_first_duplicate() {
    let mut orders = OrderCollection::new();
    orders.add(OrderEntry::new("dup", "First", "01/01/2024", 1.0));
    orders.add(OrderEntry::new("dup", "Second", "01/02/2024", 2.0));
    assert_eq!(orders.get_by_number("dup").unwrap().product_name, "First");
}

#[test]
fn remove_drops_every_match() {
    let mut orders = quarter();
    orders.add(OrderEntry::new("100-1", "Echo Dot again", "03/10/2024", 2.5));

    orders.remove("100-1");
    assert!(orders.get_by_number("100-1").is_none());
    assert_eq!(orders.len(), 5);

    // unknown numbers are ignored
    orders.remove("nope");
    assert_eq!(orders.len(), 5);
}

#[test]
fn insertion_order_is_preserved() {
    let orders = quarter();
    let all: Vec<&OrderEntry> = orders.iter().collect();
    assert_eq!(
        numbers(&all),
        ["100-1", "100-2", "100-3", "100-4", "100-5", "100-6"]
    );
}

#[test]
fn date_range_is_inclusive_at_both_ends() {
    let orders = quarter();
    let january = orders.filter_by_date_range("01/15/2024", "01/31/2024").unwrap();
    assert_eq!(numbers(&january), ["100-1", "100-2"]);

    let february = orders.filter_by_date_range("02/01/2024", "02/29/2024").unwrap();
    assert_eq!(numbers(&february), ["100-3", "100-4"]);

    let none = orders.filter_by_date_range("04/01/2024", "04/30/2024").unwrap();
    assert!(none.is_empty());
}

#[test]
fn cancellation_split_is_an_exact_partition() {
    let orders = quarter();
    for (start, end) in [
        ("01/01/2024", "03/31/2024"),
        ("01/31/2024", "03/02/2024"),
        ("02/02/2024", "02/28/2024"),
        ("06/01/2024", "01/01/2024"),
    ] {
        let all = orders.filter_by_date_range(start, end).unwrap();
        let cancelled = orders.cancelled_in_range(start, end).unwrap();
        let kept = orders.non_cancelled_in_range(start, end).unwrap();

        assert!(cancelled.iter().all(|o| o.is_cancelled()));
        assert!(kept.iter().all(|o| !o.is_cancelled()));
        assert_eq!(cancelled.len() + kept.len(), all.len());

        let mut union = numbers(&cancelled);
        union.extend(numbers(&kept));
        union.sort();
        let mut expected = numbers(&all);
        expected.sort();
        assert_eq!(union, expected, "window {start}..={end}");
    }
}

#[test]
fn malformed_stored_date_fails_the_query() {
    let mut orders = quarter();
    orders.add(OrderEntry::new("bad", "Mystery box", "2024-03-01", 1.0));

    for result in [
        orders.filter_by_date_range("01/01/2024", "12/31/2024"),
        orders.cancelled_in_range("01/01/2024", "12/31/2024"),
        orders.non_cancelled_in_range("01/01/2024", "12/31/2024"),
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::DateFormat);
    }

    // keyword search does not look at dates
    assert_eq!(orders.search_by_keyword("mystery").len(), 1);
}

#[test]
fn malformed_bounds_fail_the_query() {
    let orders = quarter();
    let err = orders.filter_by_date_range("01/01/2024", "31/12/2024").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateFormat);
    let err = orders.cancelled_in_range("", "01/01/2024").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DateFormat);
}

#[test]
fn keyword_search_ignores_case() {
    let orders = quarter();
    assert_eq!(numbers(&orders.search_by_keyword("Echo")), ["100-1", "100-4"]);
    assert_eq!(numbers(&orders.search_by_keyword("eChO sHoW")), ["100-4"]);
    assert!(orders.search_by_keyword("toaster").is_empty());

    let mut lower = OrderCollection::new();
    lower.add(OrderEntry::new("1", "echo dot", "01/01/2024", 0.0));
    assert_eq!(lower.search_by_keyword("Echo").len(), 1);
}

#[test]
fn empty_keyword_matches_everything_in_order() {
    let orders = quarter();
    let all = orders.search_by_keyword("");
    assert_eq!(all.len(), orders.len());
    assert!(all.iter().zip(orders.iter()).all(|(a, b)| *a == b));
}

#[test]
fn total_cost_is_additive() {
    assert_eq!(OrderCollection::new().total_cost(), 0.0);
    assert_eq!(total_cost_of(Vec::<&OrderEntry>::new()), 0.0);

    let a = OrderEntry::new("a", "A", "01/01/2024", 1.5);
    let b = OrderEntry::new("b", "B", "01/02/2024", 2.25);
    let mut both = OrderCollection::new();
    both.add(a.clone());
    both.add(b.clone());

    assert_eq!(both.total_cost(), total_cost_of([&a]) + total_cost_of([&b]));
    assert_eq!(both.total_cost(), 3.75);
}

#[test]
fn total_cost_of_query_results() {
    let orders = quarter();
    let echo = orders.search_by_keyword("echo");
    assert_eq!(total_cost_of(echo), 8.5);

    let cancelled = orders.cancelled_in_range("01/01/2024", "03/31/2024").unwrap();
    assert_eq!(total_cost_of(cancelled), 10.0);
}

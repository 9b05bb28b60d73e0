use super::*;
use crate::catalog::CHEFS;

fn names(chefs: &[&Chef]) -> Vec<String> {
    chefs.iter().map(|chef| chef.name.clone()).collect()
}

fn chef_with_orders(name: &str, total_orders: u32) -> Chef {
    let mut chef = CHEFS[0].clone();
    chef.name = name.to_owned();
    chef.total_orders = total_orders;
    chef
}

// =============================================================
// Search
// =============================================================

#[test]
fn kerala_query_matches_single_chef() {
    let query = ChefQuery {
        search: "kerala".to_owned(),
        ..ChefQuery::default()
    };
    assert_eq!(names(&visible_chefs(&CHEFS, &query)), ["Arjun Menon"]);
}

#[test]
fn search_matches_specialties_case_insensitively() {
    let query = ChefQuery {
        search: "DHOKLA".to_owned(),
        ..ChefQuery::default()
    };
    assert_eq!(names(&visible_chefs(&CHEFS, &query)), ["Meera Patel"]);
}

#[test]
fn search_matches_names() {
    let query = ChefQuery {
        search: "singh".to_owned(),
        ..ChefQuery::default()
    };
    assert_eq!(names(&visible_chefs(&CHEFS, &query)), ["Vikram Singh"]);
}

#[test]
fn empty_search_matches_everyone() {
    assert_eq!(visible_chefs(&CHEFS, &ChefQuery::default()).len(), CHEFS.len());
}

#[test]
fn unmatched_search_is_empty() {
    let query = ChefQuery {
        search: "sushi".to_owned(),
        ..ChefQuery::default()
    };
    assert!(visible_chefs(&CHEFS, &query).is_empty());
}

// =============================================================
// Cuisine filter
// =============================================================

#[test]
fn cuisine_filter_is_exact_tag_inclusion() {
    let query = ChefQuery {
        cuisine: CuisineFilter::from_value("Gujarati"),
        ..ChefQuery::default()
    };
    assert_eq!(names(&visible_chefs(&CHEFS, &query)), ["Meera Patel"]);

    let partial = ChefQuery {
        cuisine: CuisineFilter::from_value("Gujar"),
        ..ChefQuery::default()
    };
    assert!(visible_chefs(&CHEFS, &partial).is_empty());
}

#[test]
fn all_value_parses_to_pass_through() {
    assert_eq!(CuisineFilter::from_value("all"), CuisineFilter::All);
    assert_eq!(CuisineFilter::All.value(), "all");
}

#[test]
fn search_and_cuisine_combine() {
    let query = ChefQuery {
        search: "bowl".to_owned(),
        cuisine: CuisineFilter::from_value("Fitness Meals"),
        sort: SortKey::Rating,
    };
    assert_eq!(names(&visible_chefs(&CHEFS, &query)), ["Vikram Singh"]);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn orders_sort_descending() {
    let chefs = vec![
        chef_with_orders("a", 450),
        chef_with_orders("b", 620),
        chef_with_orders("c", 380),
        chef_with_orders("d", 550),
    ];
    let query = ChefQuery {
        sort: SortKey::Orders,
        ..ChefQuery::default()
    };
    let totals: Vec<u32> = visible_chefs(&chefs, &query)
        .iter()
        .map(|chef| chef.total_orders)
        .collect();
    assert_eq!(totals, [620, 550, 450, 380]);
}

#[test]
fn rating_sort_descending_and_stable() {
    let query = ChefQuery::default();
    assert_eq!(
        names(&visible_chefs(&CHEFS, &query)),
        ["Arjun Menon", "Vikram Singh", "Priya Sharma", "Meera Patel"]
    );
}

#[test]
fn distance_sort_ascending() {
    let query = ChefQuery {
        sort: SortKey::Distance,
        ..ChefQuery::default()
    };
    let distances: Vec<&str> = visible_chefs(&CHEFS, &query)
        .iter()
        .map(|chef| chef.distance.as_str())
        .collect();
    assert_eq!(distances, ["1.8 km", "2.0 km", "2.5 km", "3.2 km"]);
}

#[test]
fn unknown_sort_key_keeps_catalog_order() {
    let query = ChefQuery {
        sort: SortKey::from_value("popularity"),
        ..ChefQuery::default()
    };
    assert_eq!(query.sort, SortKey::Unsorted);
    let ids: Vec<&str> = visible_chefs(&CHEFS, &query)
        .iter()
        .map(|chef| chef.id.as_str())
        .collect();
    assert_eq!(ids, ["chef-1", "chef-2", "chef-3", "chef-4"]);
}

#[test]
fn parse_distance_reads_leading_numeral() {
    assert_eq!(parse_distance_km("2.5 km"), 2.5);
    assert_eq!(parse_distance_km("12km"), 12.0);
    assert!(parse_distance_km("nearby").is_infinite());
}

#[test]
fn parse_distance_stops_at_second_dot() {
    assert_eq!(parse_distance_km("1.2.3 km"), 1.2);
    assert_eq!(parse_distance_km(".5 km"), 0.5);
    assert_eq!(parse_distance_km("2. km"), 2.0);
}

#[test]
fn result_label_pluralizes() {
    assert_eq!(result_label(1), "Showing 1 chef");
    assert_eq!(result_label(0), "Showing 0 chefs");
    assert_eq!(result_label(4), "Showing 4 chefs");
}

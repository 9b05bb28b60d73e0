//! Search, cuisine filter and sort for the chef network screen.

#[cfg(test)]
#[path = "chef_network_test.rs"]
mod chef_network_test;

use std::cmp::Ordering;

use crate::types::Chef;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CuisineFilter {
    #[default]
    All,
    Only(String),
}

impl CuisineFilter {
    pub const ALL_VALUE: &'static str = "all";

    /// Parses a select value; `"all"` passes every chef.
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(cuisine) => cuisine,
        }
    }

    pub fn matches(&self, chef: &Chef) -> bool {
        match self {
            Self::All => true,
            Self::Only(cuisine) => chef.cuisine.iter().any(|tag| tag == cuisine),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Rating,
    Orders,
    Distance,
    /// Any key we do not recognise keeps catalog order.
    Unsorted,
}

impl SortKey {
    pub const OPTIONS: [(Self, &'static str); 3] = [
        (Self::Rating, "Highest Rated"),
        (Self::Orders, "Most Orders"),
        (Self::Distance, "Nearest"),
    ];

    pub fn from_value(value: &str) -> Self {
        match value {
            "rating" => Self::Rating,
            "orders" => Self::Orders,
            "distance" => Self::Distance,
            _ => Self::Unsorted,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Orders => "orders",
            Self::Distance => "distance",
            Self::Unsorted => "",
        }
    }

    fn compare(self, a: &Chef, b: &Chef) -> Ordering {
        match self {
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Orders => b.total_orders.cmp(&a.total_orders),
            Self::Distance => parse_distance_km(&a.distance).total_cmp(&parse_distance_km(&b.distance)),
            Self::Unsorted => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChefQuery {
    pub search: String,
    pub cuisine: CuisineFilter,
    pub sort: SortKey,
}

impl ChefQuery {
    /// Case-insensitive substring match on name, cuisine tags or specialties.
    pub fn matches_search(&self, chef: &Chef) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |text: &String| text.to_lowercase().contains(&needle);
        hit(&chef.name) || chef.cuisine.iter().any(hit) || chef.specialties.iter().any(hit)
    }

    pub fn matches(&self, chef: &Chef) -> bool {
        self.matches_search(chef) && self.cuisine.matches(chef)
    }
}

/// Reads the leading number of a label such as `"2.5 km"`.
///
/// Labels without a leading number sort last.
pub fn parse_distance_km(label: &str) -> f64 {
    let trimmed = label.trim_start();
    let mut seen_dot = false;
    let end = trimmed
        .char_indices()
        .find(|&(_, chr)| match chr {
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            _ => !chr.is_ascii_digit(),
        })
        .map_or(trimmed.len(), |(index, _)| index);
    trimmed[..end].parse().unwrap_or(f64::INFINITY)
}

/// Chefs matching `query`, ordered by its sort key. Sorting is stable.
pub fn visible_chefs<'a>(chefs: &'a [Chef], query: &ChefQuery) -> Vec<&'a Chef> {
    let mut visible: Vec<&Chef> = chefs.iter().filter(|chef| query.matches(chef)).collect();
    visible.sort_by(|a, b| query.sort.compare(a, b));
    visible
}

pub fn result_label(count: usize) -> String {
    if count == 1 {
        "Showing 1 chef".to_owned()
    } else {
        format!("Showing {count} chefs")
    }
}

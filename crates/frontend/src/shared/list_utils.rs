/// Shared list helpers (search, sorting, UI pieces)
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for data types that support text search
pub trait Searchable {
    /// Whether the object matches the search query
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for data types that support sorting
pub trait Sortable {
    /// Compare two objects by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the given field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by a search query (3 characters minimum)
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() || filter.trim().len() < 3 {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a header cell
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a header sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Build a sort-toggle click handler
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        rank: i32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "rank" => self.rank.cmp(&other.rank),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    #[test]
    fn sort_list_respects_direction() {
        let mut rows = vec![
            Row { name: "b", rank: 2 },
            Row { name: "a", rank: 1 },
            Row { name: "c", rank: 3 },
        ];
        sort_list(&mut rows, "rank", true);
        assert_eq!(rows[0].rank, 1);
        sort_list(&mut rows, "rank", false);
        assert_eq!(rows[0].rank, 3);
    }

    #[test]
    fn short_filters_are_ignored() {
        let rows = vec![Row { name: "alpha", rank: 1 }, Row { name: "beta", rank: 2 }];
        assert_eq!(filter_list(rows.clone(), "al").len(), 2);
        assert_eq!(filter_list(rows, "alp").len(), 1);
    }

    #[test]
    fn sort_indicator_marks_active_field() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "rank", true), " ⇅");
    }
}

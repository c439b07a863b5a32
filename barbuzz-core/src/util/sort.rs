use std::cmp::Ordering;

use barbuzz_entities::geo::Distance;

pub trait DistanceTo {
    fn distance(&self) -> Distance;
}

fn cmp_distance(a: Distance, b: Distance) -> Ordering {
    a.to_meters().total_cmp(&b.to_meters())
}

/// Nearest first. The sort is stable, i.e. items with equal
/// distances keep their relative order.
pub fn sort_by_distance<T: DistanceTo>(items: &mut [T]) {
    items.sort_by(|a, b| cmp_distance(a.distance(), b.distance()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, f64);

    impl DistanceTo for Item {
        fn distance(&self) -> Distance {
            Distance::from_meters(self.1)
        }
    }

    #[test]
    fn nearest_first() {
        let mut items = vec![Item("c", 300.0), Item("a", 10.0), Item("b", 20.0)];
        sort_by_distance(&mut items);
        let names: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(vec!["a", "b", "c"], names);
    }

    #[test]
    fn stable_for_equal_distances() {
        let mut items = vec![
            Item("x", 50.0),
            Item("first", 5.0),
            Item("second", 5.0),
            Item("third", 5.0),
        ];
        sort_by_distance(&mut items);
        let names: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(vec!["first", "second", "third", "x"], names);
    }
}

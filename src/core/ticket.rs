use rand::seq::index;
use rand::Rng;

/// Lowest value a ticket range may start at.
pub const MIN_ALLOWED: i32 = 1;
/// Highest value a ticket range may end at.
pub const MAX_ALLOWED: i32 = 1000;

/// Draw `quantity` unique numbers uniformly from `[min_value, max_value]`,
/// returned in ascending order.
///
/// Invalid parameters never raise; they yield an empty vector. A parameter set
/// is invalid when `min_value < 1`, `max_value > 1000`, `min_value >= max_value`,
/// `quantity <= 0`, or `quantity` exceeds the size of the range.
pub fn numbers_ticket(min_value: i32, max_value: i32, quantity: i32) -> Vec<i32> {
    numbers_ticket_with(min_value, max_value, quantity, &mut rand::thread_rng())
}

/// Same as [`numbers_ticket`], drawing from the given rng. Tests pass a seeded
/// `StdRng` here for reproducible draws.
pub fn numbers_ticket_with<R: Rng + ?Sized>(
    min_value: i32,
    max_value: i32,
    quantity: i32,
    rng: &mut R,
) -> Vec<i32> {
    if min_value < MIN_ALLOWED
        || max_value > MAX_ALLOWED
        || min_value >= max_value
        || quantity <= 0
        || quantity > max_value - min_value + 1
    {
        tracing::debug!(
            min_value,
            max_value,
            quantity,
            "rejected ticket parameters, returning empty draw"
        );
        return Vec::new();
    }

    let span = (max_value - min_value + 1) as usize;

    // index::sample is without-replacement and uniform over combinations
    let mut numbers: Vec<i32> = index::sample(rng, span, quantity as usize)
        .iter()
        .map(|offset| min_value + offset as i32)
        .collect();

    numbers.sort_unstable();
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_draw_is_sorted_unique_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let numbers = numbers_ticket_with(1, 49, 6, &mut rng);

        assert_eq!(numbers.len(), 6);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        assert!(numbers.iter().all(|&n| (1..=49).contains(&n)));
    }

    #[test]
    fn test_full_range_draw() {
        let mut rng = StdRng::seed_from_u64(0);
        let numbers = numbers_ticket_with(1, 5, 5, &mut rng);
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_quantity_exceeding_range_is_empty() {
        assert!(numbers_ticket(1, 5, 10).is_empty());
    }

    #[test]
    fn test_min_below_one_is_empty() {
        assert!(numbers_ticket(0, 10, 3).is_empty());
        assert!(numbers_ticket(-5, 10, 3).is_empty());
    }

    #[test]
    fn test_max_above_thousand_is_empty() {
        assert!(numbers_ticket(1, 1001, 3).is_empty());
    }

    #[test]
    fn test_inverted_or_degenerate_range_is_empty() {
        assert!(numbers_ticket(10, 5, 2).is_empty());
        assert!(numbers_ticket(5, 5, 1).is_empty());
    }

    #[test]
    fn test_non_positive_quantity_is_empty() {
        assert!(numbers_ticket(1, 10, 0).is_empty());
        assert!(numbers_ticket(1, 10, -3).is_empty());
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let a = numbers_ticket_with(1, 100, 10, &mut StdRng::seed_from_u64(42));
        let b = numbers_ticket_with(1, 100, 10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}

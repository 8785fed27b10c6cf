//! Magnitude threshold filtering

use crate::Event;

/// Keep events at or above `min_magnitude`, preserving feed order
pub fn filter_by_magnitude(events: &[Event], min_magnitude: f64) -> Vec<Event> {
    let kept: Vec<Event> = events
        .iter()
        .filter(|event| event.magnitude >= min_magnitude)
        .cloned()
        .collect();

    tracing::debug!(
        total = events.len(),
        kept = kept.len(),
        min_magnitude,
        "filtered events by magnitude"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(place: &str, magnitude: f64) -> Event {
        Event {
            magnitude,
            place: place.to_string(),
            time_ms: 0,
            longitude: 0.0,
            latitude: 0.0,
            depth_km: 0.0,
            url: String::new(),
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let kept = filter_by_magnitude(&[event("edge", 4.5)], 4.5);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_below_threshold_excluded() {
        let events = [event("a", 4.49), event("b", 2.0), event("c", 6.1)];
        let kept = filter_by_magnitude(&events, 4.5);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].place, "c");
    }

    #[test]
    fn test_order_preserved() {
        let events = [
            event("first", 5.0),
            event("skip", 1.0),
            event("second", 4.5),
            event("third", 7.2),
        ];
        let places: Vec<_> = filter_by_magnitude(&events, 4.5)
            .into_iter()
            .map(|e| e.place)
            .collect();
        assert_eq!(places, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_nan_never_kept() {
        assert!(filter_by_magnitude(&[event("nan", f64::NAN)], 0.0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_magnitude(&[], 4.5).is_empty());
    }
}

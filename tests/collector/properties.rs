//! Property tests for collector views

use breadcrumbs_buffer::RingBuffer;
use breadcrumbs_collector::Collector;
use breadcrumbs_foundation::{Breadcrumb, Config};
use proptest::prelude::*;

proptest! {
    #[test]
    fn trail_is_ordered_active_subsequence(
        capacity in 1usize..10,
        flags in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let collector = Collector::with_buffer(Config::default(), RingBuffer::new(capacity).unwrap());
        for (i, active) in flags.iter().enumerate() {
            let mut crumb = Breadcrumb::new(i.to_string());
            if !active {
                crumb.ignore();
            }
            collector.add(crumb);
        }

        let all = collector.to_vec();
        let expected: Vec<Breadcrumb> = all.iter().filter(|c| c.is_active()).cloned().collect();
        prop_assert_eq!(collector.trail(), expected);
    }

    #[test]
    fn enabled_add_appends_last(capacity in 1usize..10, count in 1usize..30) {
        let collector = Collector::with_buffer(Config::default(), RingBuffer::new(capacity).unwrap());
        for i in 0..count {
            let before = collector.len();
            collector.add(Breadcrumb::new(i.to_string()));

            prop_assert_eq!(collector.len(), (before + 1).min(capacity));
            let last = collector.to_vec().pop().map(|c| c.message().to_string());
            prop_assert_eq!(last, Some(i.to_string()));
        }
    }

    #[test]
    fn disabled_add_changes_nothing(seed in 0usize..5, count in 0usize..20) {
        let config = std::sync::Arc::new(Config::default());
        let collector = Collector::new(std::sync::Arc::clone(&config));
        for i in 0..seed {
            collector.add(Breadcrumb::new(i.to_string()));
        }

        config.set_enabled(false);
        let before = collector.to_vec();
        for i in 0..count {
            collector.add(Breadcrumb::new(format!("late {i}")));
        }
        prop_assert_eq!(collector.to_vec(), before);
    }
}

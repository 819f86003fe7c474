//! Unit tests for park-ride.

use std::cmp::Ordering;

use chrono::NaiveDate;

use park_core::{CrowdRng, DEFAULT_MAX_CAPACITY, Employee, Visitor};

use crate::{
    CycleReport, HistoryInsert, HistoryOrdering, RideBuilder, RideError, RideObserver, RideState,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn visitor(name: &str, age: u32, ticket: &str, date: &str) -> Visitor {
    Visitor::new(name, age, "555-0000", ticket, date)
}

fn operator() -> Employee {
    Employee::new("Sarah Lee", 32, "555-6666", "EMP003", "Roller Coaster")
}

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
}

/// Six distinct visitors A–F, all on the same day.
fn six_visitors() -> Vec<Visitor> {
    ["A", "B", "C", "D", "E", "F"]
        .iter()
        .enumerate()
        .map(|(i, n)| visitor(n, 20 + i as u32, &format!("T{i}"), "2025-11-24"))
        .collect()
}

fn tickets(visitors: &[Visitor]) -> Vec<&str> {
    visitors.iter().map(Visitor::ticket_id).collect()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn new_ride_is_empty() {
        let ride = RideState::new("Velocity X", 4, Some(operator()));
        assert_eq!(ride.name(), "Velocity X");
        assert_eq!(ride.max_capacity(), 4);
        assert_eq!(ride.queue_len(), 0);
        assert_eq!(ride.history_size(), 0);
        assert_eq!(ride.cycle_count(), 0);
        assert_eq!(ride.operator().map(Employee::name), Some("Sarah Lee"));
    }

    #[test]
    fn capacity_below_one_uses_default() {
        assert_eq!(RideState::new("R", 0, None).max_capacity(), DEFAULT_MAX_CAPACITY);
        assert_eq!(RideState::new("R", -3, None).max_capacity(), DEFAULT_MAX_CAPACITY);
        assert_eq!(RideBuilder::new("R").build().max_capacity(), DEFAULT_MAX_CAPACITY);
    }

    #[test]
    fn operator_can_be_reassigned() {
        let mut ride = RideState::new("R", 2, None);
        assert!(ride.assign_operator(operator()).is_none());
        let next = Employee::new("Mike Johnson", 40, "555-1234", "EMP002", "Water Ride");
        let prev = ride.assign_operator(next).unwrap();
        assert_eq!(prev.name(), "Sarah Lee");
        assert_eq!(ride.operator().unwrap().name(), "Mike Johnson");
        assert!(ride.clear_operator().is_some());
        assert!(ride.operator().is_none());
    }

    #[test]
    fn builder_dedupes_history() {
        let ride = RideBuilder::new("R")
            .history([visitor("A", 1, "T1", "2025-01-01"), visitor("A2", 2, "T1", "2025-01-02")])
            .build();
        assert_eq!(ride.history_size(), 1);
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn dequeue_returns_enqueue_order() {
        let crowd = CrowdRng::new(11).crowd(100, first_day(), 4);
        let mut ride = RideState::new("R", 3, None);
        for (i, v) in crowd.iter().cloned().enumerate() {
            assert_eq!(ride.enqueue(v), Ok(i + 1));
        }
        let mut out = Vec::new();
        while let Ok(v) = ride.dequeue_front() {
            out.push(v);
        }
        assert_eq!(out, crowd);
    }

    #[test]
    fn enqueue_absent_is_rejected() {
        let mut ride = RideState::new("R", 3, None);
        assert_eq!(ride.enqueue(None), Err(RideError::AbsentVisitor));
        assert_eq!(ride.queue_len(), 0);
    }

    #[test]
    fn dequeue_empty_is_rejected() {
        let mut ride = RideState::new("R", 3, None);
        assert!(matches!(ride.dequeue_front(), Err(RideError::EmptyQueue { .. })));
        assert_eq!(ride.queue_len(), 0);
    }

    #[test]
    fn removing_two_keeps_remaining_order() {
        let mut ride = RideBuilder::new("Splash Mountain").capacity(3).queue(six_visitors()).build();
        ride.dequeue_front().unwrap();
        ride.dequeue_front().unwrap();
        let left: Vec<&str> = ride.queue().map(Visitor::ticket_id).collect();
        assert_eq!(left, ["T2", "T3", "T4", "T5"]);
    }

    #[test]
    fn queued_visitor_is_not_in_history() {
        let v = visitor("A", 30, "T1", "2025-11-24");
        let mut ride = RideState::new("R", 3, None);
        ride.enqueue(v.clone()).unwrap();
        assert!(!ride.contains_in_history(Some(&v)));
    }
}

// ── History ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod history {
    use super::*;

    #[test]
    fn add_is_idempotent_on_ticket_id() {
        let mut ride = RideState::new("Speed Demon", 4, None);
        let v = visitor("Frank Green", 28, "TICKET007", "2025-11-22");
        assert_eq!(ride.add_to_history(v.clone()), Ok(HistoryInsert::Added));
        assert_eq!(ride.history_size(), 1);

        // Same ticket, different name: still a duplicate.
        let again = visitor("Frank G.", 29, "TICKET007", "2025-11-23");
        assert_eq!(ride.add_to_history(again), Ok(HistoryInsert::AlreadyPresent));
        assert_eq!(ride.history_size(), 1);
        assert_eq!(ride.history()[0], v);
    }

    #[test]
    fn add_absent_is_rejected() {
        let mut ride = RideState::new("R", 4, None);
        assert_eq!(ride.add_to_history(None), Err(RideError::AbsentVisitor));
        assert_eq!(ride.history_size(), 0);
    }

    #[test]
    fn contains_is_null_safe() {
        let mut ride = RideState::new("R", 4, None);
        ride.add_to_history(visitor("A", 1, "T1", "2025-01-01")).unwrap();
        assert!(!ride.contains_in_history(None));
        assert!(ride.contains_in_history(Some(&visitor("Other", 5, "T1", "2025-02-02"))));
        assert!(!ride.contains_in_history(Some(&visitor("A", 1, "T2", "2025-01-01"))));
    }

    #[test]
    fn ticket_ids_match_exactly() {
        let mut ride = RideState::new("R", 4, None);
        let blank = visitor("A", 1, "", "2025-01-01");
        assert_eq!(ride.add_to_history(blank.clone()), Ok(HistoryInsert::Added));
        assert!(ride.contains_in_history(Some(&blank)));
        assert_eq!(ride.add_to_history(blank), Ok(HistoryInsert::AlreadyPresent));
        assert_eq!(ride.history_size(), 1);

        ride.add_to_history(visitor("B", 2, "T1", "2025-01-01")).unwrap();
        let padded = visitor("C", 3, " T1", "2025-01-01");
        assert!(!ride.contains_in_history(Some(&padded)));
        assert_eq!(ride.add_to_history(padded), Ok(HistoryInsert::Added));
        assert_eq!(ride.history_size(), 3);
    }

    #[test]
    fn unchecked_extend_keeps_duplicates() {
        let mut ride = RideState::new("R", 4, None);
        ride.add_to_history(visitor("A", 1, "T1", "2025-01-01")).unwrap();
        ride.extend_history_unchecked([visitor("A", 1, "T1", "2025-01-01")]);
        assert_eq!(ride.history_size(), 2);
        assert!(ride.contains_in_history(Some(&visitor("A", 1, "T1", "2025-01-01"))));
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn date_ascending_then_age_descending() {
        let mut ride = RideBuilder::new("Giant Ferris Wheel")
            .capacity(6)
            .history([
                visitor("Luna Moore", 22, "TICKET012", "2025-11-23"),
                visitor("Mason Nelson", 45, "TICKET013", "2025-11-22"),
                visitor("Nora Ortiz", 30, "TICKET014", "2025-11-23"),
                visitor("Oscar Perez", 35, "TICKET015", "2025-11-23"),
                visitor("Penelope Quinn", 28, "TICKET016", "2025-11-21"),
            ])
            .build();
        ride.sort_history().unwrap();
        assert_eq!(
            tickets(ride.history()),
            ["TICKET016", "TICKET013", "TICKET015", "TICKET014", "TICKET012"]
        );
    }

    #[test]
    fn sorted_crowd_satisfies_pairwise_order() {
        let crowd = CrowdRng::new(99).crowd(300, first_day(), 10);
        let mut ride = RideBuilder::new("R").history(crowd).build();
        ride.sort_history().unwrap();
        assert!(HistoryOrdering::is_sorted(ride.history()));
        for w in ride.history().windows(2) {
            assert!(w[0].visit_date() <= w[1].visit_date());
            if w[0].visit_date() == w[1].visit_date() {
                assert!(w[0].age() >= w[1].age());
            }
        }
    }

    #[test]
    fn sorting_empty_history_is_rejected() {
        let mut ride = RideState::new("R", 2, None);
        assert!(matches!(ride.sort_history(), Err(RideError::EmptyHistory { .. })));
    }

    #[test]
    fn absent_operand_compares_equal() {
        let v = visitor("A", 10, "T1", "2025-01-01");
        assert_eq!(HistoryOrdering::compare_opt(None, Some(&v)), Ordering::Equal);
        assert_eq!(HistoryOrdering::compare_opt(Some(&v), None), Ordering::Equal);
        assert_eq!(HistoryOrdering::compare_opt(None, None), Ordering::Equal);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let a = visitor("A", 30, "T1", "2025-01-01");
        let b = visitor("B", 30, "T2", "2025-01-01");
        let mut ride = RideBuilder::new("R").history([a, b]).build();
        ride.sort_history().unwrap();
        assert_eq!(tickets(ride.history()), ["T1", "T2"]);
    }
}

// ── Cycles ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cycle {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        started:  Vec<u64>,
        boarded:  Vec<(u64, String)>,
        reports:  Vec<CycleReport>,
        rejected: Vec<RideError>,
    }

    impl RideObserver for Recorder {
        fn on_cycle_start(&mut self, cycle: u64) {
            self.started.push(cycle);
        }

        fn on_boarded(&mut self, cycle: u64, visitor: &Visitor) {
            self.boarded.push((cycle, visitor.ticket_id().to_owned()));
        }

        fn on_cycle_end(&mut self, report: &CycleReport) {
            self.reports.push(report.clone());
        }

        fn on_cycle_rejected(&mut self, error: &RideError) {
            self.rejected.push(error.clone());
        }
    }

    #[test]
    fn capacity_four_six_visitors_two_cycles() {
        let mut ride = RideBuilder::new("Velocity X")
            .capacity(4)
            .operator(operator())
            .queue(six_visitors())
            .build();

        let first = ride.run_cycle().unwrap();
        assert_eq!(first.cycle, 1);
        assert_eq!(first.boarded, 4);
        assert_eq!(first.remaining, 2);
        assert_eq!(first.boarded_tickets, ["T0", "T1", "T2", "T3"]);
        assert_eq!(ride.cycle_count(), 1);
        assert_eq!(ride.history_size(), 4);
        let left: Vec<&str> = ride.queue().map(Visitor::ticket_id).collect();
        assert_eq!(left, ["T4", "T5"]);

        let second = ride.run_cycle().unwrap();
        assert_eq!(second.cycle, 2);
        assert_eq!(second.boarded, 2);
        assert_eq!(second.remaining, 0);
        assert_eq!(ride.cycle_count(), 2);
        assert_eq!(ride.history_size(), 6);
        assert_eq!(tickets(ride.history()), ["T0", "T1", "T2", "T3", "T4", "T5"]);
    }

    #[test]
    fn empty_queue_is_rejected() {
        let mut ride = RideState::new("R", 4, Some(operator()));
        let mut rec = Recorder::default();
        let err = ride.run_cycle_observed(&mut rec).unwrap_err();
        assert!(matches!(err, RideError::EmptyQueue { .. }));
        assert_eq!(ride.cycle_count(), 0);
        assert!(rec.reports.is_empty());
        assert!(rec.started.is_empty());
        assert_eq!(rec.rejected, [err]);
    }

    #[test]
    fn missing_operator_is_rejected_without_change() {
        let mut ride = RideBuilder::new("R").capacity(4).queue(six_visitors()).build();
        assert!(matches!(ride.run_cycle(), Err(RideError::NoOperator { .. })));
        assert_eq!(ride.cycle_count(), 0);
        assert_eq!(ride.queue_len(), 6);
        assert_eq!(ride.history_size(), 0);
    }

    #[test]
    fn operator_check_comes_first() {
        let mut ride = RideState::new("R", 4, None);
        assert!(matches!(ride.run_cycle(), Err(RideError::NoOperator { .. })));
    }

    #[test]
    fn reboarding_known_ticket_counts_but_does_not_duplicate() {
        let v = visitor("A", 30, "T1", "2025-11-24");
        let mut ride = RideBuilder::new("R")
            .capacity(4)
            .operator(operator())
            .history([v.clone()])
            .queue([v, visitor("B", 31, "T2", "2025-11-24")])
            .build();
        let report = ride.run_cycle().unwrap();
        assert_eq!(report.boarded, 2);
        assert_eq!(report.recorded, 1);
        assert_eq!(ride.history_size(), 2);
        assert_eq!(ride.cycle_count(), 1);
    }

    #[test]
    fn observer_sees_boarding_order() {
        let mut ride = RideBuilder::new("R")
            .capacity(4)
            .operator(operator())
            .queue(six_visitors())
            .build();
        let mut rec = Recorder::default();
        ride.run_cycle_observed(&mut rec).unwrap();
        ride.run_cycle_observed(&mut rec).unwrap();
        assert_eq!(rec.started, [1, 2]);
        let boarded: Vec<(u64, &str)> = rec.boarded.iter().map(|(c, t)| (*c, t.as_str())).collect();
        assert_eq!(
            boarded,
            [(1, "T0"), (1, "T1"), (1, "T2"), (1, "T3"), (2, "T4"), (2, "T5")]
        );
        assert_eq!(rec.reports.len(), 2);
        assert!(rec.rejected.is_empty());
    }

    #[test]
    fn boarding_count_is_min_of_capacity_and_queue() {
        let mut crowd = CrowdRng::new(5);
        for capacity in 1..=5_i64 {
            for queue_len in 1..=8 {
                let mut ride = RideBuilder::new("R")
                    .capacity(capacity)
                    .operator(operator())
                    .queue(crowd.crowd(queue_len, first_day(), 2))
                    .build();
                let report = ride.run_cycle().unwrap();
                let expected = (capacity as usize).min(queue_len);
                assert_eq!(report.boarded, expected);
                assert_eq!(report.remaining, queue_len - expected);
                assert_eq!(ride.cycle_count(), 1);
            }
        }
    }

    #[test]
    fn rejected_cycles_do_not_advance_count() {
        let mut ride = RideBuilder::new("R")
            .capacity(2)
            .operator(operator())
            .queue(six_visitors())
            .build();
        for _ in 0..3 {
            ride.run_cycle().unwrap();
        }
        assert_eq!(ride.cycle_count(), 3);
        assert!(ride.run_cycle().is_err());
        assert_eq!(ride.cycle_count(), 3);
    }
}

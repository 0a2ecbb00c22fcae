//! Unit tests for market views, status projection, and the idle agent.

use pm_core::{AgentId, Tick, Value};
use pm_ledger::{Ledger, PermitState, SlotView};

use crate::{Agent, Ask, AskMarket, BidMarket, IdleAgent, PublicStatus};

fn region(name: &str) -> String {
    name.to_string()
}

/// Put `(region, t)` into `Used { owner }`.
fn grant(ledger: &mut Ledger<String>, name: &str, t: Tick, owner: AgentId) {
    ledger.entry_mut(&region(name), t).unwrap().state = PermitState::Used { owner };
}

/// Put `(region, t)` into an owner's listing at `reserve`.
fn list(ledger: &mut Ledger<String>, name: &str, t: Tick, owner: AgentId, reserve: Value) {
    ledger.entry_mut(&region(name), t).unwrap().state = PermitState::listed(owner, reserve);
}

#[cfg(test)]
mod bid_rules {
    use super::*;

    #[test]
    fn accepted_bid_updates_slot_and_reports_true() {
        let mut ledger = Ledger::new(None);
        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);

        assert!(market.bid(&region("a"), Tick(0), Value(5)));
        assert_eq!(pending, vec![(region("a"), Tick(0))]);

        match &ledger.entry_mut(&region("a"), Tick(0)).unwrap().state {
            PermitState::OnSale {
                highest_bidder,
                highest_bid,
                ..
            } => {
                assert_eq!(*highest_bidder, Some(AgentId(0)));
                assert_eq!(*highest_bid, Value(5));
            }
            other => panic!("expected on-sale slot, got {other:?}"),
        }
    }

    #[test]
    fn bid_at_reserve_is_rejected() {
        let mut ledger = Ledger::new(None);
        list(&mut ledger, "a", Tick(0), AgentId(9), Value(10));

        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);

        assert!(!market.bid(&region("a"), Tick(0), Value(10)));
        assert!(market.bid(&region("a"), Tick(0), Value(11)));
    }

    #[test]
    fn bid_at_standing_high_is_rejected_first_seen_wins() {
        let mut ledger = Ledger::new(None);
        let mut pending = Vec::new();

        let mut first = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        assert!(first.bid(&region("a"), Tick(0), Value(7)));

        let mut second = BidMarket::new(&mut ledger, AgentId(1), &mut pending);
        assert!(!second.bid(&region("a"), Tick(0), Value(7)));

        // The losing submission must not have touched the slot.
        match &ledger.entry_mut(&region("a"), Tick(0)).unwrap().state {
            PermitState::OnSale { highest_bidder, .. } => {
                assert_eq!(*highest_bidder, Some(AgentId(0)))
            }
            other => panic!("expected on-sale slot, got {other:?}"),
        }
    }

    #[test]
    fn outbidding_does_not_duplicate_pending_entry() {
        let mut ledger = Ledger::new(None);
        let mut pending = Vec::new();

        let mut b0 = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        assert!(b0.bid(&region("a"), Tick(0), Value(5)));
        let mut b1 = BidMarket::new(&mut ledger, AgentId(1), &mut pending);
        assert!(b1.bid(&region("a"), Tick(0), Value(6)));

        assert_eq!(pending.len(), 1, "one settlement entry per key per tick");
        match &ledger.entry_mut(&region("a"), Tick(0)).unwrap().state {
            PermitState::OnSale {
                highest_bidder,
                highest_bid,
                ..
            } => {
                assert_eq!(*highest_bidder, Some(AgentId(1)));
                assert_eq!(*highest_bid, Value(6));
            }
            other => panic!("expected on-sale slot, got {other:?}"),
        }
    }

    #[test]
    fn raising_own_bid_is_accepted() {
        let mut ledger = Ledger::new(None);
        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);

        assert!(market.bid(&region("a"), Tick(0), Value(5)));
        assert!(market.bid(&region("a"), Tick(0), Value(8)));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn bid_on_used_slot_is_rejected() {
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(0), AgentId(9));

        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        assert!(!market.bid(&region("a"), Tick(0), Value(100)));
        assert!(pending.is_empty());
    }

    #[test]
    fn bid_outside_window_is_rejected() {
        let mut ledger = Ledger::new(Some(2));
        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);

        assert!(!market.bid(&region("a"), Tick(5), Value(5)));
        assert!(pending.is_empty());
    }

    #[test]
    fn bid_in_the_past_is_rejected() {
        let mut ledger = Ledger::new(None);
        ledger.advance();
        ledger.advance(); // t0 = 2

        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        assert!(!market.bid(&region("a"), Tick(1), Value(5)));
    }

    #[test]
    fn zero_bid_on_fresh_slot_is_rejected() {
        // Fresh slots have reserve 0 and high bid 0; strict `>` means a zero
        // bid fails both comparisons.
        let mut ledger = Ledger::new(None);
        let mut pending = Vec::new();
        let mut market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        assert!(!market.bid(&region("a"), Tick(0), Value::ZERO));
    }
}

#[cfg(test)]
mod ask_rules {
    use super::*;

    #[test]
    fn owner_can_list_and_application_is_deferred() {
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(3), AgentId(0));

        let mut asks: Vec<Ask<String>> = Vec::new();
        let mut market = AskMarket::new(&mut ledger, AgentId(0), &mut asks);
        assert!(market.ask(&region("a"), Tick(3), Value(10)));

        assert_eq!(asks.len(), 1);
        assert_eq!(asks[0].lister, AgentId(0));
        assert_eq!(asks[0].min_value, Value(10));

        // Not applied yet: the slot still reads as owned.
        assert!(ledger
            .entry_mut(&region("a"), Tick(3))
            .unwrap()
            .state
            .is_used());
    }

    #[test]
    fn non_owner_cannot_list() {
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(0), AgentId(9));

        let mut asks: Vec<Ask<String>> = Vec::new();
        let mut market = AskMarket::new(&mut ledger, AgentId(0), &mut asks);
        assert!(!market.ask(&region("a"), Tick(0), Value(1)));
        assert!(asks.is_empty());
    }

    #[test]
    fn on_sale_slot_cannot_be_listed_again() {
        let mut ledger = Ledger::new(None);
        list(&mut ledger, "a", Tick(0), AgentId(0), Value(5));

        let mut asks: Vec<Ask<String>> = Vec::new();
        let mut market = AskMarket::new(&mut ledger, AgentId(0), &mut asks);
        assert!(!market.ask(&region("a"), Tick(0), Value(9)));
    }

    #[test]
    fn ask_outside_window_is_rejected() {
        let mut ledger = Ledger::new(Some(1));
        let mut asks: Vec<Ask<String>> = Vec::new();
        let mut market = AskMarket::new(&mut ledger, AgentId(0), &mut asks);
        assert!(!market.ask(&region("a"), Tick(4), Value(1)));
    }

    #[test]
    fn duplicate_asks_both_recorded() {
        // Application resolves duplicates last-writer-wins; recording keeps
        // both so submission order is preserved for the driver.
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(0), AgentId(0));

        let mut asks: Vec<Ask<String>> = Vec::new();
        let mut market = AskMarket::new(&mut ledger, AgentId(0), &mut asks);
        assert!(market.ask(&region("a"), Tick(0), Value(5)));
        assert!(market.ask(&region("a"), Tick(0), Value(8)));
        assert_eq!(asks.len(), 2);
    }
}

#[cfg(test)]
mod projection {
    use super::*;

    fn status_for(
        ledger: &mut Ledger<String>,
        viewer: AgentId,
        name: &str,
        t: Tick,
    ) -> &'static str {
        let mut pending = Vec::new();
        let market = BidMarket::new(ledger, viewer, &mut pending);
        match market.status(&region(name), t) {
            PublicStatus::Unavailable => "unavailable",
            PublicStatus::Available { .. } => "available",
            PublicStatus::Owned => "owned",
        }
    }

    #[test]
    fn out_of_limits_projects_unavailable() {
        let mut ledger = Ledger::new(Some(0));
        assert_eq!(
            status_for(&mut ledger, AgentId(0), "a", Tick(3)),
            "unavailable"
        );
    }

    #[test]
    fn vacant_slot_projects_available_at_zero_reserve() {
        let mut ledger = Ledger::new(None);
        let mut pending = Vec::new();
        let market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        match market.status(&region("a"), Tick(0)) {
            PublicStatus::Available { min_value, sales } => {
                assert_eq!(min_value, Value::ZERO);
                assert!(sales.is_empty());
            }
            other => panic!("expected available, got {other:?}"),
        }
    }

    #[test]
    fn used_slot_owned_by_viewer_projects_owned() {
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(0), AgentId(0));
        assert_eq!(status_for(&mut ledger, AgentId(0), "a", Tick(0)), "owned");
    }

    #[test]
    fn used_slot_owned_by_other_projects_unavailable() {
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(0), AgentId(9));
        assert_eq!(
            status_for(&mut ledger, AgentId(0), "a", Tick(0)),
            "unavailable"
        );
    }

    #[test]
    fn own_listing_projects_unavailable_to_lister_only() {
        let mut ledger = Ledger::new(None);
        list(&mut ledger, "a", Tick(0), AgentId(0), Value(5));

        assert_eq!(
            status_for(&mut ledger, AgentId(0), "a", Tick(0)),
            "unavailable"
        );
        assert_eq!(
            status_for(&mut ledger, AgentId(1), "a", Tick(0)),
            "available"
        );
    }

    #[test]
    fn listing_exposes_reserve_but_not_standing_bid() {
        let mut ledger = Ledger::new(None);
        list(&mut ledger, "a", Tick(0), AgentId(9), Value(5));

        // Put a standing bid on the slot.
        let mut pending = Vec::new();
        let mut bidder = BidMarket::new(&mut ledger, AgentId(1), &mut pending);
        assert!(bidder.bid(&region("a"), Tick(0), Value(8)));

        // Another viewer still sees only the reserve.
        let mut pending2 = Vec::new();
        let market = BidMarket::new(&mut ledger, AgentId(2), &mut pending2);
        match market.status(&region("a"), Tick(0)) {
            PublicStatus::Available { min_value, .. } => assert_eq!(min_value, Value(5)),
            other => panic!("expected available, got {other:?}"),
        }
    }

    #[test]
    fn sales_history_is_visible_on_relisted_slot() {
        let mut ledger = Ledger::new(None);
        {
            let entry = ledger.entry_mut(&region("a"), Tick(0)).unwrap();
            entry.settle(Value(5), Value(9), AgentId(9));
            entry.state = PermitState::listed(AgentId(9), Value(12));
        }

        let mut pending = Vec::new();
        let market = BidMarket::new(&mut ledger, AgentId(0), &mut pending);
        match market.status(&region("a"), Tick(0)) {
            PublicStatus::Available { min_value, sales } => {
                assert_eq!(min_value, Value(12));
                assert_eq!(sales.len(), 1);
                assert_eq!(sales[0].reserve, Value(5));
                assert_eq!(sales[0].winning_bid, Value(9));
            }
            other => panic!("expected available, got {other:?}"),
        }
    }

    #[test]
    fn view_is_identical_across_phases() {
        let mut ledger = Ledger::new(None);
        grant(&mut ledger, "a", Tick(0), AgentId(0));

        let mut asks: Vec<Ask<String>> = Vec::new();
        let market = AskMarket::new(&mut ledger, AgentId(0), &mut asks);
        assert!(matches!(
            market.status(&region("a"), Tick(0)),
            PublicStatus::Owned
        ));
    }
}

#[cfg(test)]
mod idle {
    use super::*;

    #[test]
    fn immediate_idle_stops_at_first_poll() {
        let mut agent = IdleAgent::immediate();
        assert!(Agent::<String>::stop(&mut agent, Tick(0), 0));
    }

    #[test]
    fn idle_until_stops_at_configured_tick() {
        let mut agent = IdleAgent::until(Tick(3));
        assert!(!Agent::<String>::stop(&mut agent, Tick(2), 0));
        assert!(Agent::<String>::stop(&mut agent, Tick(3), 0));
    }

    #[test]
    fn vacant_view_on_empty_ledger_never_allocates() {
        let ledger: Ledger<String> = Ledger::new(None);
        assert!(matches!(
            ledger.view(&region("a"), Tick(0)),
            SlotView::Vacant
        ));
        assert_eq!(ledger.bucket_count(), 0);
    }
}

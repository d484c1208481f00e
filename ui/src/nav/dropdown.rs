use leptos::prelude::Get;
use leptos::prelude::LocalStorage;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::SetValue;
use leptos::prelude::StoredValue;
use leptos::prelude::Update;
use leptos::prelude::UpdateValue;
use leptos::prelude::WithValue;

use crate::nav::scheduler::Scheduler;

/// How long the submenu stays up after the pointer leaves the trigger or
/// the panel, so the pointer can cross the gap between them without the
/// menu flickering shut.
pub const CLOSE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

impl DropdownState {
    fn flipped(self) -> Self {
        match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        }
    }
}

/// Hover-intent state for the services submenu. One per header instance.
/// Every transition funnels through the methods below, which keeps at most
/// one close timer in flight at any time.
pub struct DropdownController<S: Scheduler> {
    state: RwSignal<DropdownState>,
    pending_close: StoredValue<Option<S::Handle>, LocalStorage>,
    scheduler: StoredValue<S, LocalStorage>,
}

impl<S: Scheduler> Clone for DropdownController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scheduler> Copy for DropdownController<S> {}

impl<S: Scheduler> DropdownController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: RwSignal::new(DropdownState::Closed),
            pending_close: StoredValue::new_local(None),
            scheduler: StoredValue::new_local(scheduler),
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == DropdownState::Open
    }

    pub fn pointer_enter(&self) {
        self.cancel_pending_close();
        self.state.set(DropdownState::Open);
    }

    /// Arms the close timer. An earlier timer, if any, is cancelled first,
    /// so leaving twice never leaves two timers behind.
    pub fn pointer_leave(&self) {
        self.cancel_pending_close();
        let state = self.state;
        let pending = self.pending_close;
        let handle = self.scheduler.with_value(|scheduler| {
            scheduler.schedule(CLOSE_DELAY_MS, move || {
                state.set(DropdownState::Closed);
                pending.set_value(None);
            })
        });
        self.pending_close.set_value(Some(handle));
    }

    /// Click on the trigger flips the menu. A pending close is cancelled
    /// first so a reopen cannot be undone by a timer armed moments before
    /// the click.
    pub fn click_toggle(&self) {
        self.cancel_pending_close();
        self.state.update(|state| *state = state.flipped());
    }

    pub fn link_selected(&self) {
        self.cancel_pending_close();
        self.state.set(DropdownState::Closed);
    }

    /// Cancels any scheduled close. The header calls this on cleanup so
    /// the timer can never fire against a torn-down component.
    pub fn cancel_pending_close(&self) {
        let mut cancelled = None;
        self.pending_close
            .update_value(|pending| cancelled = pending.take());
        if let Some(handle) = cancelled {
            self.scheduler.with_value(|scheduler| scheduler.cancel(handle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::scheduler::ManualScheduler;

    fn harness() -> (DropdownController<ManualScheduler>, ManualScheduler) {
        let clock = ManualScheduler::new();
        (DropdownController::new(clock.clone()), clock)
    }

    #[test]
    fn starts_closed() {
        let (dropdown, _clock) = harness();
        assert_eq!(dropdown.state(), DropdownState::Closed);
    }

    #[test]
    fn pointer_enter_opens() {
        let (dropdown, _clock) = harness();
        dropdown.pointer_enter();
        assert!(dropdown.is_open());
    }

    #[test]
    fn reentering_within_the_delay_keeps_the_menu_open() {
        let (dropdown, clock) = harness();
        dropdown.pointer_enter();
        dropdown.pointer_leave();
        clock.advance(200);
        assert!(dropdown.is_open());

        dropdown.pointer_enter();
        clock.advance(10_000);
        assert!(dropdown.is_open());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn close_fires_exactly_once_after_the_delay() {
        let (dropdown, clock) = harness();
        dropdown.pointer_enter();
        dropdown.pointer_leave();

        clock.advance(CLOSE_DELAY_MS - 1);
        assert!(dropdown.is_open());

        clock.advance(1);
        assert_eq!(dropdown.state(), DropdownState::Closed);
        assert_eq!(clock.pending(), 0);

        // no stray timer closes a later reopen
        dropdown.pointer_enter();
        clock.advance(10_000);
        assert!(dropdown.is_open());
    }

    #[test]
    fn click_toggle_flips_state() {
        let (dropdown, _clock) = harness();
        dropdown.click_toggle();
        assert!(dropdown.is_open());
        dropdown.click_toggle();
        assert_eq!(dropdown.state(), DropdownState::Closed);
    }

    #[test]
    fn click_reopen_wins_over_a_pending_close() {
        let (dropdown, clock) = harness();
        dropdown.pointer_enter();
        dropdown.pointer_leave();
        assert_eq!(clock.pending(), 1);

        dropdown.click_toggle(); // closed by hand, timer cancelled
        assert_eq!(dropdown.state(), DropdownState::Closed);
        assert_eq!(clock.pending(), 0);

        dropdown.click_toggle(); // reopened
        clock.advance(10_000);
        assert!(dropdown.is_open());
    }

    #[test]
    fn repeated_leaves_keep_a_single_timer() {
        let (dropdown, clock) = harness();
        dropdown.pointer_enter();
        dropdown.pointer_leave();
        dropdown.pointer_leave();
        dropdown.pointer_leave();
        assert_eq!(clock.pending(), 1);

        clock.advance(CLOSE_DELAY_MS);
        assert_eq!(dropdown.state(), DropdownState::Closed);
    }

    #[test]
    fn link_selected_closes_and_is_idempotent() {
        let (dropdown, clock) = harness();
        dropdown.pointer_enter();
        dropdown.pointer_leave();

        dropdown.link_selected();
        assert_eq!(dropdown.state(), DropdownState::Closed);
        assert_eq!(clock.pending(), 0);

        // already closed, nothing outstanding to cancel
        dropdown.link_selected();
        assert_eq!(dropdown.state(), DropdownState::Closed);
        clock.advance(10_000);
        assert_eq!(dropdown.state(), DropdownState::Closed);
    }

    #[test]
    fn teardown_cancels_the_outstanding_close() {
        let (dropdown, clock) = harness();
        dropdown.pointer_enter();
        dropdown.pointer_leave();
        assert_eq!(clock.pending(), 1);

        // what the header's on_cleanup runs
        dropdown.cancel_pending_close();
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        // the callback never ran: state is exactly as the pointer left it
        assert!(dropdown.is_open());
    }
}

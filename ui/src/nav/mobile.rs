use leptos::prelude::Get;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Update;

/// Open/closed state of the collapsed small-viewport menu. No timers,
/// plain synchronous toggling.
#[derive(Clone, Copy)]
pub struct MobileMenuController {
    open: RwSignal<bool>,
}

impl MobileMenuController {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn link_selected(&self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let menu = MobileMenuController::new();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_forces_closed_from_either_state() {
        let menu = MobileMenuController::new();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn link_selected_closes_and_is_idempotent() {
        let menu = MobileMenuController::new();
        menu.toggle();

        menu.link_selected();
        assert!(!menu.is_open());

        menu.link_selected();
        assert!(!menu.is_open());
    }
}

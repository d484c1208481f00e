/// One top-level navigation entry. Entries that fan out into a submenu
/// carry a `group`: the set of sibling routes that keep the entry
/// highlighted.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub group: Option<&'static [&'static str]>,
}

impl NavLink {
    /// Exact, case-sensitive match against the current route; no
    /// trailing-slash normalization. Grouped entries match any route in
    /// their set instead.
    pub fn is_active(&self, current_path: &str) -> bool {
        match self.group {
            Some(paths) => paths.contains(&current_path),
            None => current_path == self.path,
        }
    }
}

/// Routes that keep the "Our Services" entry highlighted.
pub const SERVICE_PATHS: &[&str] = &["/services", "/dealership-services", "/fleet-services"];

pub const HOME_LINK: NavLink = NavLink {
    label: "Home",
    path: "/",
    group: None,
};

pub const ABOUT_LINK: NavLink = NavLink {
    label: "About Us",
    path: "/about",
    group: None,
};

pub const SERVICES_LINK: NavLink = NavLink {
    label: "Our Services",
    path: "/services",
    group: Some(SERVICE_PATHS),
};

pub const NAV_LINKS: &[NavLink] = &[HOME_LINK, ABOUT_LINK, SERVICES_LINK];

/// Entries of the services submenu, reused flattened in the mobile panel.
#[derive(Clone, Copy, Debug)]
pub struct ServiceLink {
    pub label: &'static str,
    pub path: &'static str,
    pub badge: Option<&'static str>,
}

pub const SERVICE_LINKS: &[ServiceLink] = &[
    ServiceLink {
        label: "Rock Chip Repair Service",
        path: "/services",
        badge: Some("Most Popular"),
    },
    ServiceLink {
        label: "Dealership Lot Services",
        path: "/dealership-services",
        badge: None,
    },
    ServiceLink {
        label: "Commercial Fleet Services",
        path: "/fleet-services",
        badge: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(current_path: &str) -> Vec<&'static str> {
        NAV_LINKS
            .iter()
            .filter(|link| link.is_active(current_path))
            .map(|link| link.label)
            .collect()
    }

    #[test]
    fn about_activates_only_the_about_entry() {
        assert_eq!(active_labels("/about"), vec!["About Us"]);
    }

    #[test]
    fn home_activates_only_the_home_entry() {
        assert_eq!(active_labels("/"), vec!["Home"]);
    }

    #[test]
    fn every_service_route_activates_only_the_services_entry() {
        for path in SERVICE_PATHS {
            assert_eq!(active_labels(path), vec!["Our Services"], "path {path}");
        }
    }

    #[test]
    fn unknown_routes_activate_nothing() {
        assert!(active_labels("/no-such-page").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!ABOUT_LINK.is_active("/About"));
        assert!(!SERVICES_LINK.is_active("/Fleet-Services"));
    }

    #[test]
    fn trailing_slashes_are_not_normalized() {
        assert!(!ABOUT_LINK.is_active("/about/"));
        assert!(!SERVICES_LINK.is_active("/services/"));
    }

    #[test]
    fn submenu_entries_all_belong_to_the_services_group() {
        for service in SERVICE_LINKS {
            assert!(
                SERVICE_PATHS.contains(&service.path),
                "{} missing from SERVICE_PATHS",
                service.path
            );
        }
    }
}

//! Client-side route table.
//!
//! Every page the router mounts has one [`AppRoute`] variant. Navigation links
//! and the router read paths from here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Projects,
    Waitlist,
    Dashboard,
    PoolDashboard,
    PoolDetail,
    PoolCreate,
    AdminDashboard,
    Campaigns,
    Rewards,
    CoepPools,
    EscrowManagement,
}

impl AppRoute {
    const ALL: [AppRoute; 12] = [
        AppRoute::Home,
        AppRoute::Projects,
        AppRoute::Waitlist,
        AppRoute::Dashboard,
        AppRoute::PoolDashboard,
        AppRoute::PoolDetail,
        AppRoute::PoolCreate,
        AppRoute::AdminDashboard,
        AppRoute::Campaigns,
        AppRoute::Rewards,
        AppRoute::CoepPools,
        AppRoute::EscrowManagement,
    ];

    pub fn all() -> &'static [AppRoute] {
        &Self::ALL
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Projects => "/projects",
            AppRoute::Waitlist => "/waitlist",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::PoolDashboard => "/pool-dashboard",
            AppRoute::PoolDetail => "/pool-detail",
            AppRoute::PoolCreate => "/pool-create",
            AppRoute::AdminDashboard => "/admin-dashboard",
            AppRoute::Campaigns => "/campaigns",
            AppRoute::Rewards => "/rewards",
            AppRoute::CoepPools => "/coep-pools",
            AppRoute::EscrowManagement => "/escrow-management",
        }
    }

    /// Page heading / link label
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Projects => "Projects",
            AppRoute::Waitlist => "Waitlist",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::PoolDashboard => "Pool Dashboard",
            AppRoute::PoolDetail => "Pool Detail",
            AppRoute::PoolCreate => "Create a Pool",
            AppRoute::AdminDashboard => "Admin Dashboard",
            AppRoute::Campaigns => "Campaigns",
            AppRoute::Rewards => "Rewards",
            AppRoute::CoepPools => "Co-EP Pools",
            AppRoute::EscrowManagement => "Escrow Management",
        }
    }

    /// Resolve a location path. A trailing slash and a query string are ignored.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Self::ALL.iter().copied().find(|route| route.path() == normalized)
    }

    /// Targets shown in the header bar.
    pub fn header_links() -> &'static [AppRoute] {
        &[AppRoute::Home, AppRoute::Campaigns, AppRoute::Waitlist]
    }

    /// Targets shown in the hamburger menu.
    pub fn menu_links() -> &'static [AppRoute] {
        &[
            AppRoute::Home,
            AppRoute::Projects,
            AppRoute::Campaigns,
            AppRoute::Waitlist,
            AppRoute::Dashboard,
            AppRoute::PoolDashboard,
            AppRoute::CoepPools,
            AppRoute::Rewards,
            AppRoute::EscrowManagement,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_resolves_to_its_route() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(AppRoute::from_path("/waitlist/"), Some(AppRoute::Waitlist));
        assert_eq!(AppRoute::from_path("/projects?q=film"), Some(AppRoute::Projects));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/register"), None);
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = AppRoute::all().iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), AppRoute::all().len());
    }
}

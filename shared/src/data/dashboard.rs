//! Fixed records shown on the user and admin dashboards.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub wallet_address: &'static str,
    pub balance: &'static str,
    pub projects_backed: u32,
    pub funds_contributed: &'static str,
}

pub const DEMO_USER: UserProfile = UserProfile {
    name: "Alex Doe",
    wallet_address: "SP3...45G",
    balance: "2,500 STX",
    projects_backed: 8,
    funds_contributed: "12,500 STX",
};

pub const RECENT_ACTIVITY: &[&str] = &[
    "You successfully backed the project \"Cosmic Wanderers\".",
    "Your proposal for \"Ocean's Lullaby\" has been approved.",
    "You joined the \"Indie Animators\" funding pool.",
    "A new project \"City of Steam\" has been listed.",
];

pub const QUICK_ACTIONS: &[&str] = &[
    "Submit a Proposal",
    "Explore Funding Pools",
    "View My Projects",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_users: u32,
    pub total_projects: u32,
    pub total_pools: u32,
    pub pending_verifications: u32,
}

impl PlatformStats {
    /// `(label, value)` rows in display order.
    pub fn rows(&self) -> [(&'static str, u32); 4] {
        [
            ("Total Users", self.total_users),
            ("Total Projects", self.total_projects),
            ("Total Pools", self.total_pools),
            ("Pending Verifications", self.pending_verifications),
        ]
    }
}

pub const PLATFORM_STATS: PlatformStats = PlatformStats {
    total_users: 1_234,
    total_projects: 56,
    total_pools: 12,
    pending_verifications: 4,
};

pub const VERIFICATION_QUEUE: &[&str] = &[
    "Project A - Awaiting Verification",
    "Pool B - Awaiting Verification",
];

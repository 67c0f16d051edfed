//! UI Components

pub mod community;
pub mod connect_wallet;
pub mod feature_card;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod roadmap;
pub mod scroll_reveal;
pub mod toast;
pub mod token;
pub mod wallet_section;

pub use community::CommunitySection;
pub use connect_wallet::ConnectWallet;
pub use feature_card::FeatureCard;
pub use features::FeatureSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use roadmap::RoadmapSection;
pub use scroll_reveal::ScrollReveal;
pub use toast::Toaster;
pub use token::TokenSection;
pub use wallet_section::WalletSection;

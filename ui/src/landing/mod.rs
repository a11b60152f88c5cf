//! The landing page: a pure view model ([`view::LandingView`]) and the
//! components that render it.

mod nav;
mod sections;
mod status;
pub mod view;

pub use nav::LandingNav;
pub use sections::{
    AdminPrompt, CallToActionBar, ContactBlock, FaqBlock, FeatureList, HeroBanner, OfferingsBlock,
    ProcessBlock, ServicesBlock, TestimonialsBlock, TrustedBy,
};
pub use status::{loading_message, ErrorScreen, LoadingScreen};
pub use view::LandingView;

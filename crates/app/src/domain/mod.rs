//! Influencer Domain Concerns

pub mod influencers;

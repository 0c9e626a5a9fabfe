mod email_code;
mod event;
mod faq;
mod nft;
mod point;
mod referral;
mod snapshot;
mod social_account;
mod system_config;
mod user;
mod xlt_claim;
mod youtube_video;

pub mod dashboard;
pub mod login;
pub mod phone;
pub mod role_builder;
pub mod stores;
pub mod submission;
pub mod user_builder;
pub mod validators;
pub mod verifier;

pub use dashboard::*;
pub use login::*;
pub use phone::*;
pub use role_builder::*;
pub use stores::*;
pub use submission::*;
pub use user_builder::*;
pub use validators::*;
pub use verifier::*;

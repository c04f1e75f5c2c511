//! Application Layer
//!
//! One use case per file, each generic over the repository traits it
//! needs. Use cases hold `Arc`s to their collaborators and expose a single
//! `execute` (plus the occasional named query).

pub mod config;
pub mod delete_user;
pub mod list_users;
pub mod login;
pub mod lookup;
pub mod outbox;
pub mod register;
pub mod reset_password;
pub mod unlock;
pub mod update_user;
pub mod verify_email;

pub use config::AccountConfig;
pub use delete_user::DeleteUser;
pub use list_users::ListUsers;
pub use login::Login;
pub use lookup::LookupUser;
pub use outbox::DispatchOutbox;
pub use register::RegisterUser;
pub use reset_password::ResetPassword;
pub use unlock::UnlockAccount;
pub use update_user::UpdateUser;
pub use verify_email::VerifyEmail;

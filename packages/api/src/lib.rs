//! # API crate — typed client for the Linkrise backend
//!
//! The backend (authentication, orders, packages, team, pricing) is an
//! external service; this crate is the client-side boundary to it. Every
//! request/response shape the frontend relies on is defined here once, instead
//! of each page declaring its own expected shape inline, and every call goes
//! through [`Client`] so auth headers and error mapping stay uniform.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`]: base URL + bearer token + the shared request/decode helpers |
//! | [`error`] | [`ApiError`]: the error taxonomy every endpoint method returns |
//! | [`auth`] | Login, registration, current-user hydration |
//! | [`account`] | Profile read/update and account deletion |
//! | [`orders`] | Order listing and placement, link-count derivation |
//! | [`packages`] | Public package catalog with its hardcoded fallback |
//! | [`pricing`] | Pricing plans with their hardcoded fallback |
//! | [`team`] | Team member listing and invites |
//! | [`admin`] | User management for the admin console |
//!
//! The domain records cached by the session store ([`UserInfo`], [`Role`],
//! [`ChatWidgetConfig`]) live in the `store` crate and are re-exported here.

pub mod account;
pub mod admin;
pub mod auth;
pub mod client;
pub mod error;
pub mod orders;
pub mod packages;
pub mod pricing;
pub mod team;

pub use client::Client;
pub use error::ApiError;

pub use auth::LoginResponse;
pub use orders::{CreateOrder, Order};
pub use packages::{Package, PackageKind};
pub use pricing::PricingPlan;
pub use team::{TeamMember, TeamRole};

pub use store::{ChatDisplayScope, ChatWidgetConfig, Role, UserInfo};

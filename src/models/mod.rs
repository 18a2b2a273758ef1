pub mod auth;
pub mod health;
pub mod product;

pub use auth::{Credentials, LoginResponse, Session, SessionToken};
pub use health::HealthStatus;
pub use product::{Catalog, NewProduct, Product, ProductDraft, ProductId};

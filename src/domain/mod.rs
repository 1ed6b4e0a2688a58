//! Backend-agnostic domain logic.

mod cart;
mod id;
mod money;
mod product;

// Core domain types
pub use cart::{total_price, total_quantity, CartItem};
pub use id::ProductId;
pub use money::{format_eur, Price};
pub use product::{NewProduct, Product, ProductPatch};

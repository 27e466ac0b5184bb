//! MySQL implementations of the store adapter.

mod product_repository;
mod supplier_repository;
mod unit_of_work;

pub use product_repository::*;
pub use supplier_repository::*;
pub use unit_of_work::*;

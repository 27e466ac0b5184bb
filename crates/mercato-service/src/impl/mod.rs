//! Service implementations.

mod catalog_read_impl;
mod catalog_write_impl;
mod supplier_service_impl;

pub use catalog_read_impl::*;
pub use catalog_write_impl::*;
pub use supplier_service_impl::*;

#[cfg(test)]
pub(crate) mod support;

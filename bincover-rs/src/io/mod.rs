/// External (serializable) representations of instances and solutions
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;

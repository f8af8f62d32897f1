mod bin;
mod instance;
mod solution;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use instance::BCInstance;
#[doc(inline)]
pub use solution::BCSolution;

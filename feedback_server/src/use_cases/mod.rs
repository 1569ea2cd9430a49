// Use cases: application policies over the domain types.

pub mod translate_failure;

#[cfg(test)]
pub(crate) mod test_support;

pub use translate_failure::{TranslateFailureUseCase, TranslatedFailure};

//! ドメイン型（Newtype、enum、ルール）

pub mod command;
pub mod extension;

pub use extension::{DisableOutcome, EnabledList, ExtensionUuid};

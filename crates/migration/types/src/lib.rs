//! Process Instance Migration Domain Types
//!
//! A migration document describes how a running process instance moves
//! from one process-definition version to another. It does not execute
//! anything: an external engine reads the frozen document and applies it.
//!
//! # Key Concepts
//!
//! - **ActivityMapping**: associates source activities of the running
//!   definition with target activities of the new one. One-to-one,
//!   one-to-many and many-to-one are the only supported shapes.
//! - **CallActivityContext**: narrows a mapping to the sub-process spawned
//!   by a call activity, or to the parent process that contains it.
//! - **DefinitionLocator**: names the target definition, either by id or
//!   by key with an optional version and tenant.
//! - **MigrationDocument**: the immutable result. Holds the locator, the
//!   ordered mappings, the derived per-activity variable table and the
//!   process-instance variables.
//! - **MigrationDocumentBuilder**: the mutable accumulator that validates
//!   and freezes a document.
//!
//! # Usage
//!
//! ```rust
//! use process_migration_types::{ActivityMapping, MigrationDocumentBuilder};
//!
//! let document = MigrationDocumentBuilder::new()
//!     .migrate_to_process_definition_key_version("invoice", 3)
//!     .add_activity_mapping(
//!         ActivityMapping::one_to_one("reviewInvoice", "approveInvoice")
//!             .with_local_variable("approved", false)
//!             .with_new_assignee("kermit"),
//!     )
//!     .with_process_instance_variable("migratedBy", "ops")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(document.migrate_to_process_definition_key(), Some("invoice"));
//! assert_eq!(document.activity_mappings().len(), 1);
//! ```

#![deny(unsafe_code)]

mod activity;
mod builder;
mod call_activity;
mod document;
mod errors;
mod mapping;
pub mod validator;
mod variables;

pub use activity::*;
pub use builder::*;
pub use call_activity::*;
pub use document::*;
pub use errors::*;
pub use mapping::*;
pub use variables::*;

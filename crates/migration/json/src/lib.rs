//! JSON codec for process instance migration documents
//!
//! Encodes a `MigrationDocument` into the JSON layout exchanged with
//! migration tooling and decodes that layout back into a validated
//! document. Decoding never trusts derived data from the input: the
//! per-activity variable table is rebuilt and the document validator runs
//! before anything is returned.
//!
//! # JSON Layout
//!
//! ```text
//! {
//!   "migrateToProcessDefinitionKey": "MyProcessKey",
//!   "migrateToProcessDefinitionVersion": 5,
//!   "activityMappings": [
//!     { "fromActivityId": "a", "toActivityIds": ["b1", "b2"],
//!       "withLocalVariable": { "shared": 1 },
//!       "withLocalVariables": { "b1": { "onlyB1": true } } },
//!     { "fromActivityIds": ["c1", "c2"], "toActivityId": "d",
//!       "callActivityId": "call", "inParentProcessOfCallActivity": true }
//!   ],
//!   "processInstanceVariables": { "migrated": true }
//! }
//! ```
//!
//! # Usage
//!
//! ```rust
//! use process_migration_json::{from_json_str, to_json_string};
//! use process_migration_types::{ActivityMapping, MigrationDocument};
//!
//! let document = MigrationDocument::builder()
//!     .migrate_to_process_definition_id("someProcessId")
//!     .add_activity_mapping(ActivityMapping::one_to_one("oldTask", "newTask"))
//!     .build()
//!     .unwrap();
//!
//! let json = to_json_string(&document).unwrap();
//! assert_eq!(from_json_str(&json).unwrap(), document);
//! ```

#![deny(unsafe_code)]

mod codec;
mod decode;
mod encode;
mod errors;
mod wire;

pub use codec::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_string_pretty,
    to_json_value, JsonCodec, JsonCodecConfig, MigrationDocumentJsonExt,
};
pub use errors::{CodecError, CodecResult};

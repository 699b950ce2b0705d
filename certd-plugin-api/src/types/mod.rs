//! Plugin data model

mod cert;
mod credential;
mod define;
mod dns;

pub use cert::{CertificateBundle, TaskInput};
pub use credential::Credential;
pub use define::{ComponentHint, FieldType, InputField, PluginDefine, SelectOption};
pub use dns::{CreateRecordRequest, DomainRecord, RemoveRecordRequest};

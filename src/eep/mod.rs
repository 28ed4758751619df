// Profile codec framework
pub mod id;
pub mod message;
pub mod registry;
pub mod teach_in;
pub mod traits;
pub mod transform;

pub use id::EepId;
pub use message::EepMessage;
pub use registry::{ProfileDescriptor, ProfileRegistry};
pub use teach_in::FourBsTeachIn;
pub use traits::{Eep, EepError, EepFactory, EepResult};
pub use transform::{BuiltinTransformations, TransformError, TransformationService};

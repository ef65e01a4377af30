mod notification;
mod reminder;
mod reminder_preference;
mod status;

pub mod dtos {
    pub use crate::notification::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::reminder_preference::dtos::*;
}

pub use crate::notification::api::*;
pub use crate::reminder::api::*;
pub use crate::reminder_preference::api::*;
pub use crate::status::api::*;

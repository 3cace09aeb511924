//! Application services - Use case implementations
//!
//! Each service is a trait plus a default implementation over the
//! repository ports. Every service that reads room availability and then
//! changes it shares one [`SchedulingLock`].

pub mod detainee_service;
pub mod interrogation_service;
pub mod meeting_service;
pub mod officer_service;
pub mod room_management_service;

mod errors;
mod reference_resolver;
mod scheduling_lock;

pub use errors::{ErrorKind, ServiceError, ServiceResult};
pub use reference_resolver::{ReferenceResolver, Resolution};
pub use scheduling_lock::SchedulingLock;

pub use detainee_service::{DetaineeService, DetaineeServiceImpl};
pub use interrogation_service::{
    InterrogationDetails, InterrogationService, InterrogationServiceImpl,
    ScheduleInterrogationRequest, DEFAULT_MINIMUM_INTERROGATION_LEVEL,
};
pub use meeting_service::{MeetingService, MeetingServiceImpl};
pub use officer_service::{OfficerService, OfficerServiceImpl};
pub use room_management_service::{RoomManagementService, RoomManagementServiceImpl};

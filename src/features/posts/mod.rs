pub mod clients;
pub mod dtos;
pub mod events;
pub mod models;
pub mod services;

pub use clients::{PostApiClient, ReportGateway};
pub use events::{PostEvent, PostEvents};
pub use services::{FormStep, PostForm, SubmitOutcome};

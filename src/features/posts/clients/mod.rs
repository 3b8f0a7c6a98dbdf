pub mod post_api_client;

pub use post_api_client::{PostApiClient, ReportGateway};

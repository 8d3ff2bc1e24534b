//! Business logic services

pub mod directory_service;
pub mod race_service;
pub mod ranking_service;
pub mod report_service;
pub mod timing_service;

pub use directory_service::{DirectoryService, ParticipantDirectory};
pub use race_service::RaceService;
pub use ranking_service::RankingService;
pub use report_service::ReportService;
pub use timing_service::{TimingLog, TimingService};

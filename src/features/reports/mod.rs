//! Citizen flood-report feature.
//!
//! Reports arrive as multipart submissions (text fields plus an optional
//! photo), pass a per-IP daily quota check, and land in the embedded store
//! with the photo persisted to object storage first. Listing and statistics
//! share the same date-window filter.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | No | Submit a report (multipart) |
//! | GET | `/api/reports` | No | List reports in a date window |
//! | GET | `/api/reports/statistics` | No | Aggregated statistics |
//! | PATCH | `/api/reports/{id}/status` | No | Update verification status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReportSubmissionService, SubmissionLimiter};

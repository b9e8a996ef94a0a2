//! Single-CPU process scheduling simulator.
//!
//! Runs a fixed set of jobs through one of six classic CPU scheduling
//! policies and reports the Gantt timeline plus per-job completion metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Interval`, `Timeline`, `CompletionRecord`
//! - **`dispatching`**: Selection rules that rank ready jobs (FCFS, SJF, SRTF, priority)
//! - **`scheduler`**: Policy engines, the `schedule` facade, `SimulationRequest`
//!   and `ScheduleKpi`
//! - **`validation`**: Input integrity checks and text parsing
//! - **`workload`**: Random job generation
//! - **`error`**: The crate-wide `SchedulerError`
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Job;
//! use u_cpusched::scheduler::{schedule, Algorithm};
//!
//! let jobs = Job::from_sequences(&[0, 2, 4, 6], &[7, 4, 1, 4], &[]);
//! let result = schedule(Algorithm::Sjf, &jobs, None).unwrap();
//!
//! let order: Vec<&str> = result
//!     .timeline
//!     .intervals()
//!     .iter()
//!     .map(|i| i.job_id.as_str())
//!     .collect();
//! assert_eq!(order, vec!["P1", "P3", "P2", "P4"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedulerError};

//! Cron jobs.
//!
//! All schedules are expressed in UTC. The daily pipeline runs shortly after
//! midnight KST (15:00 UTC) so each job sees the previous job's output.

pub mod daily_jobs;

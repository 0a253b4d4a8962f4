//! Geometry export: synchronous STL and the asynchronous STEP job protocol.
//!
//! A STEP export runs as a server-side translation job: submit, poll the job
//! resource until DONE, resolve the external-data handle named by the final
//! poll response, then fetch the bytes. The poll loop is bounded by a
//! wall-clock deadline measured from submission; on expiry the client
//! abandons the job (the remote side may still finish it later). Nothing in
//! this machine retries: any mid-flight failure is terminal for the
//! invocation and the caller re-invokes from the top.

use crate::error::{OnshapeError, Result};
use crate::protocol::operations;
use crate::types::{ElementAddress, JobState, TranslationJob};
use bytes::Bytes;
use std::path::Path;
use std::time::{Duration, Instant};

use super::fetch::OnshapeClient;

/// Inter-poll delay: additive growth, capped, never past the deadline.
#[derive(Clone, Debug)]
struct PollDelay {
    current: Duration,
    max: Duration,
}

impl PollDelay {
    fn new(initial: Duration, max: Duration) -> Self {
        PollDelay {
            current: initial,
            max,
        }
    }

    /// The next delay to sleep, clamped to `remaining` budget.
    fn next(&mut self, remaining: Duration) -> Duration {
        let wait = self.current.min(remaining);
        self.current = (self.current + Duration::from_millis(500)).min(self.max);
        wait
    }
}

impl OnshapeClient {
    /// Export the part studio as STL. A single synchronous call; the
    /// response body is the file.
    pub async fn export_stl(&self, address: &ElementAddress) -> Result<Bytes> {
        let response = self
            .send(operations::export_stl(address))
            .await
            .map_err(|e| OnshapeError::FetchFailed(e.to_string()))?;
        Ok(response.body)
    }

    /// Export the part studio as STEP via the translation-job protocol.
    pub async fn export_step(
        &self,
        address: &ElementAddress,
        destination_name: &str,
    ) -> Result<Bytes> {
        let started = Instant::now();
        let job_id = self.submit_translation(address, destination_name).await?;
        let job = self.poll_until_done(&job_id, started).await?;
        let (document_id, external_data_id) = resolve_result(&job)?;
        self.fetch_external_data(&document_id, &external_data_id)
            .await
    }

    /// Export STL and write the bytes to `path`.
    pub async fn export_stl_to(
        &self,
        address: &ElementAddress,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.export_stl(address).await?;
        tokio::fs::write(path.as_ref(), &bytes)
            .await
            .map_err(|e| OnshapeError::Io(e.to_string()))
    }

    /// Export STEP and write the bytes to `path`. The file stem doubles as
    /// the translation's destination name.
    pub async fn export_step_to(
        &self,
        address: &ElementAddress,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let destination_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("export");
        let bytes = self.export_step(address, destination_name).await?;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| OnshapeError::Io(e.to_string()))
    }

    /// Submit the translation job and extract its id from the self link.
    async fn submit_translation(
        &self,
        address: &ElementAddress,
        destination_name: &str,
    ) -> Result<String> {
        let request = operations::create_translation(address, destination_name);
        let response = self
            .send(request)
            .await
            .map_err(|e| OnshapeError::SubmitFailed(e.to_string()))?;
        let job: TranslationJob = response
            .json()
            .map_err(|e| OnshapeError::SubmitFailed(e.to_string()))?;
        let job_id = job.job_id_from_href().ok_or_else(|| {
            OnshapeError::SubmitFailed("translation response carried no self link".to_string())
        })?;
        tracing::debug!("[Onshape] submitted translation {}", job_id);
        Ok(job_id.to_string())
    }

    /// Re-read the job until DONE, a server-side FAILED, or the deadline.
    /// One loop per job; each iteration is a fresh request.
    async fn poll_until_done(&self, job_id: &str, started: Instant) -> Result<TranslationJob> {
        let deadline = Duration::from_secs(self.config.poll_timeout_secs);
        let mut delay = PollDelay::new(
            Duration::from_millis(self.config.poll_initial_delay_ms),
            Duration::from_millis(self.config.poll_max_delay_ms),
        );

        loop {
            let response = self.send(operations::poll_translation(job_id)).await?;
            let job: TranslationJob = response.json()?;

            match job.state() {
                Some(JobState::Done) => {
                    tracing::info!("[Onshape] translation {} done", job_id);
                    return Ok(job);
                }
                Some(JobState::Failed) => {
                    return Err(OnshapeError::ResolveFailed(format!(
                        "translation {} failed server-side",
                        job_id
                    )));
                }
                Some(_) => {}
                None => {
                    return Err(OnshapeError::Protocol(format!(
                        "poll response for {} carried no requestState",
                        job_id
                    )));
                }
            }

            let elapsed = started.elapsed();
            if elapsed >= deadline {
                tracing::warn!(
                    "[Onshape] abandoning translation {} after {:?}",
                    job_id,
                    elapsed
                );
                return Err(OnshapeError::PollTimeout {
                    elapsed_secs: elapsed.as_secs(),
                });
            }
            tokio::time::sleep(delay.next(deadline - elapsed)).await;
        }
    }

    /// Fetch a finished job's bytes through the external-data handle.
    async fn fetch_external_data(
        &self,
        document_id: &str,
        external_data_id: &str,
    ) -> Result<Bytes> {
        let request = operations::fetch_external_data(document_id, external_data_id);
        let response = self
            .send(request)
            .await
            .map_err(|e| OnshapeError::FetchFailed(e.to_string()))?;
        Ok(response.body)
    }
}

/// A finished job must name its output and owning document.
fn resolve_result(job: &TranslationJob) -> Result<(String, String)> {
    let external_data_id = job.result_external_data_ids.first().ok_or_else(|| {
        OnshapeError::ResolveFailed("finished translation listed no external data ids".to_string())
    })?;
    let document_id = job.document_id.as_deref().ok_or_else(|| {
        OnshapeError::ResolveFailed("finished translation carried no document id".to_string())
    })?;
    Ok((document_id.to_string(), external_data_id.clone()))
}
